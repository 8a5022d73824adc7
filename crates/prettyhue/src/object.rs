use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    add, cmyk_to_rgb, darken_to, darken_toward, format_descriptive, format_hex, hsb_to_rgb,
    hsp_to_rgb, hue_rotation, interpolate as interpolate_channels, is_close, kelvin_to_rgb,
    lighten_to, lighten_toward, luminance, multiply, normalize, parse, perceived_brightness,
    rgb_to_cmyk, rgb_to_hsb, rgb_to_hsp, rgb_to_kelvin, rgb_to_yuv, to_byte, to_eq_channels,
    unit, unit4, yuv_to_rgb,
};
use crate::error::{ColorFormatError, NotFoundError, UnsupportedColorSpaceError};
use crate::metric::{colorfulness, warmth, ColorMetric, Metric, WARMEST_HUE};
use crate::native::{ColorModel, NativeColor};
use crate::util::{dictionary_from_environment, Env, Environment};
use crate::{ClosestColorMatcher, ColorRegistry, Float};

/// Create a new opaque color from 24-bit integer channels.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer channels. However, it also is safe to use in const expressions,
/// since it converts the integers before passing them to the const
/// constructor [`Color::new`].
///
/// ```
/// # use prettyhue::{rgb, Color};
/// const TANGERINE: Color = rgb!(0xff, 0x93, 0x00);
/// assert_eq!(TANGERINE, Color::from_24bit(0xff, 0x93, 0x00));
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $r as $crate::Float / 255.0,
            $g as $crate::Float / 255.0,
            $b as $crate::Float / 255.0,
            1.0,
        )
    };
}

/// An immutable color.
///
/// Every color has four channels, red, green, blue, and alpha. In-gamut
/// channels have unit range. A color stores its channels as given, with the
/// exception of not-a-number, which becomes zero. Accessors such as
/// [`Color::red`] clamp to unit range, whereas [`Color::raw`] does not.
///
/// # Color Models
///
/// Besides RGB, colors convert to and from HSB (also known as HSV), HSP,
/// CMYK, YUV, grayscale, and correlated color temperature in Kelvin. Hue is
/// measured in degrees `0..360` for both HSB and HSP.
///
/// # Equality and Hashing
///
/// Colors implement [`PartialEq`], [`Eq`], and [`Hash`] by comparing channels
/// at slightly reduced precision, so that floating point error does not
/// prevent two colors from being equal and equal colors hash the same. For a
/// more lenient comparison that treats colors within one byte step of each
/// other as equal, use [`Color::is_equal_to`].
///
/// # Immutability
///
/// Every method that modifies a color returns a new color.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettyhue.color")
)]
#[derive(Clone, Copy)]
pub struct Color {
    channels: [Float; 4],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // The following constructors come in pairs, once for pyffi and once without
    // pyffi, since #[new] and #[staticmethod] do not work with #[cfg_attr()].

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let teal = Color::new(0.0, 0.5, 0.5, 1.0);
    /// assert_eq!(teal.raw(), [0.0, 0.5, 0.5, 1.0]);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: rgb(0 127.5 127.5);"></div>
    /// </div>
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self {
            channels: normalize([r, g, b, a]),
        }
    }

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let teal = Color::new(0.0, 0.5, 0.5, 1.0);
    /// assert_eq!(teal.raw(), [0.0, 0.5, 0.5, 1.0]);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: rgb(0 127.5 127.5);"></div>
    /// </div>
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self {
            channels: normalize([r, g, b, a]),
        }
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as `Color`'s [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, ColorFormatError> {
        Color::from_str(s)
    }

    /// Instantiate a new opaque color with the given red, green, and blue
    /// channels.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn rgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new opaque color with the given red, green, and blue
    /// channels.
    #[cfg(not(feature = "pyffi"))]
    pub const fn rgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new gray with the given white level and alpha.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let gray = Color::gray(0.5, 1.0);
    /// assert_eq!(gray, Color::rgb(0.5, 0.5, 0.5));
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn gray(white: Float, alpha: Float) -> Self {
        Self::new(white, white, white, alpha)
    }

    /// Instantiate a new gray with the given white level and alpha.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let gray = Color::gray(0.5, 1.0);
    /// assert_eq!(gray, Color::rgb(0.5, 0.5, 0.5));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub const fn gray(white: Float, alpha: Float) -> Self {
        Self::new(white, white, white, alpha)
    }

    /// Instantiate a new opaque color from its packed `0xRRGGBB`
    /// representation. The most significant byte is ignored.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let orange = Color::from_rgb_hex(0xff8000);
    /// assert_eq!(orange.to_32bit(), [0xff, 0x80, 0x00, 0xff]);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ff8000;"></div>
    /// </div>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgb_hex(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::from_32bit(r, g, b, 0xff)
    }

    /// Instantiate a new opaque color from its packed `0xRRGGBB`
    /// representation. The most significant byte is ignored.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let orange = Color::from_rgb_hex(0xff8000);
    /// assert_eq!(orange.to_32bit(), [0xff, 0x80, 0x00, 0xff]);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ff8000;"></div>
    /// </div>
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgb_hex(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::from_32bit(r, g, b, 0xff)
    }

    /// Instantiate a new color from its packed `0xRRGGBBAA` representation.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgba_hex(hex: u32) -> Self {
        let [r, g, b, a] = hex.to_be_bytes();
        Self::from_32bit(r, g, b, a)
    }

    /// Instantiate a new color from its packed `0xRRGGBBAA` representation.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgba_hex(hex: u32) -> Self {
        let [r, g, b, a] = hex.to_be_bytes();
        Self::from_32bit(r, g, b, a)
    }

    /// Instantiate a new opaque color from its 24-bit representation.
    ///
    /// This function scales the red, green, and blue bytes by 1/255. The
    /// [`rgb`] macro does the same thing but is safe to use inside const
    /// expressions.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::from_32bit(r, g, b, 0xff)
    }

    /// Instantiate a new opaque color from its 24-bit representation.
    ///
    /// This function scales the red, green, and blue bytes by 1/255. The
    /// [`rgb`] macro does the same thing but is safe to use inside const
    /// expressions.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::from_32bit(r, g, b, 0xff)
    }

    /// Instantiate a new color from its 32-bit representation.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_32bit(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            Float::from(r) / 255.0,
            Float::from(g) / 255.0,
            Float::from(b) / 255.0,
            Float::from(a) / 255.0,
        )
    }

    /// Instantiate a new color from its 32-bit representation.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_32bit(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            Float::from(r) / 255.0,
            Float::from(g) / 255.0,
            Float::from(b) / 255.0,
            Float::from(a) / 255.0,
        )
    }

    /// Instantiate a new color from hue in degrees, saturation, brightness,
    /// and alpha.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let lime = Color::from_hsb(120.0, 1.0, 1.0, 1.0);
    /// assert_eq!(lime.to_hex_format(), "#00ff00");
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsb(hue: Float, saturation: Float, brightness: Float, alpha: Float) -> Self {
        let [r, g, b] = hsb_to_rgb(&[hue, saturation, brightness]);
        Self::new(r, g, b, alpha)
    }

    /// Instantiate a new color from hue in degrees, saturation, brightness,
    /// and alpha.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let lime = Color::from_hsb(120.0, 1.0, 1.0, 1.0);
    /// assert_eq!(lime.to_hex_format(), "#00ff00");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsb(hue: Float, saturation: Float, brightness: Float, alpha: Float) -> Self {
        let [r, g, b] = hsb_to_rgb(&[hue, saturation, brightness]);
        Self::new(r, g, b, alpha)
    }

    /// Instantiate a new color from hue in degrees, saturation, perceived
    /// brightness, and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsp(hue: Float, saturation: Float, brightness: Float, alpha: Float) -> Self {
        let [r, g, b] = hsp_to_rgb(&[hue, saturation, brightness]);
        Self::new(r, g, b, alpha)
    }

    /// Instantiate a new color from hue in degrees, saturation, perceived
    /// brightness, and alpha.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsp(hue: Float, saturation: Float, brightness: Float, alpha: Float) -> Self {
        let [r, g, b] = hsp_to_rgb(&[hue, saturation, brightness]);
        Self::new(r, g, b, alpha)
    }

    /// Instantiate a new opaque color from cyan, magenta, yellow, and black.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_cmyk(c: Float, m: Float, y: Float, k: Float) -> Self {
        let [r, g, b] = cmyk_to_rgb(&[c, m, y, k]);
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new opaque color from cyan, magenta, yellow, and black.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_cmyk(c: Float, m: Float, y: Float, k: Float) -> Self {
        let [r, g, b] = cmyk_to_rgb(&[c, m, y, k]);
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new opaque color from luma Y and chrominance U and V.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_yuv(y: Float, u: Float, v: Float) -> Self {
        let [r, g, b] = yuv_to_rgb(&[y, u, v]);
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new opaque color from luma Y and chrominance U and V.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_yuv(y: Float, u: Float, v: Float) -> Self {
        let [r, g, b] = yuv_to_rgb(&[y, u, v]);
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new opaque color approximating a black body of the
    /// given temperature in Kelvin.
    ///
    /// The temperature is clamped to
    /// [`MIN_KELVIN`](crate::MIN_KELVIN)`..=`[`MAX_KELVIN`](crate::MAX_KELVIN).
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let candle = Color::from_kelvin(1_900.0);
    /// assert!(candle.red() > candle.green() && candle.green() > candle.blue());
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_kelvin(kelvin: Float) -> Self {
        let [r, g, b] = kelvin_to_rgb(kelvin);
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new opaque color approximating a black body of the
    /// given temperature in Kelvin.
    ///
    /// The temperature is clamped to
    /// [`MIN_KELVIN`](crate::MIN_KELVIN)`..=`[`MAX_KELVIN`](crate::MAX_KELVIN).
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let candle = Color::from_kelvin(1_900.0);
    /// assert!(candle.red() > candle.green() && candle.green() > candle.blue());
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_kelvin(kelvin: Float) -> Self {
        let [r, g, b] = kelvin_to_rgb(kelvin);
        Self::new(r, g, b, 1.0)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the red channel, clamped to unit range.
    #[inline]
    pub fn red(&self) -> Float {
        unit(self.channels[0])
    }

    /// Get the green channel, clamped to unit range.
    #[inline]
    pub fn green(&self) -> Float {
        unit(self.channels[1])
    }

    /// Get the blue channel, clamped to unit range.
    #[inline]
    pub fn blue(&self) -> Float {
        unit(self.channels[2])
    }

    /// Get the alpha channel, clamped to unit range.
    #[inline]
    pub fn alpha(&self) -> Float {
        unit(self.channels[3])
    }

    /// Get the red channel multiplied by alpha.
    pub fn premultiplied_red(&self) -> Float {
        self.red() * self.alpha()
    }

    /// Get the green channel multiplied by alpha.
    pub fn premultiplied_green(&self) -> Float {
        self.green() * self.alpha()
    }

    /// Get the blue channel multiplied by alpha.
    pub fn premultiplied_blue(&self) -> Float {
        self.blue() * self.alpha()
    }

    /// Get the channels as stored, i.e., without clamping.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let hot = Color::new(1.5, 0.0, -0.5, 1.0);
    /// assert_eq!(hot.raw(), [1.5, 0.0, -0.5, 1.0]);
    /// assert_eq!(hot.to_array(), [1.0, 0.0, 0.0, 1.0]);
    /// ```
    #[inline]
    pub fn raw(&self) -> [Float; 4] {
        self.channels
    }

    /// Get the red, green, blue, and alpha channels, clamped to unit range.
    #[inline]
    pub fn to_array(&self) -> [Float; 4] {
        unit4(&self.channels)
    }

    /// Get the red, green, and blue channels, clamped to unit range.
    #[inline]
    pub fn to_rgb(&self) -> [Float; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Get the red channel as a byte.
    pub fn red_byte(&self) -> u8 {
        to_byte(self.channels[0])
    }

    /// Get the green channel as a byte.
    pub fn green_byte(&self) -> u8 {
        to_byte(self.channels[1])
    }

    /// Get the blue channel as a byte.
    pub fn blue_byte(&self) -> u8 {
        to_byte(self.channels[2])
    }

    /// Get the alpha channel as a byte.
    pub fn alpha_byte(&self) -> u8 {
        to_byte(self.channels[3])
    }

    /// Get the luminance as a byte.
    pub fn white_byte(&self) -> u8 {
        to_byte(self.white())
    }

    /// Convert to the 24-bit representation.
    ///
    /// Channels are clamped and then rounded half away from zero.
    pub fn to_24bit(&self) -> [u8; 3] {
        [self.red_byte(), self.green_byte(), self.blue_byte()]
    }

    /// Convert to the 32-bit representation.
    pub fn to_32bit(&self) -> [u8; 4] {
        self.channels.map(to_byte)
    }

    /// Convert to the packed `0xRRGGBB` representation.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let color = Color::from_rgba_hex(0x12345678);
    /// assert_eq!(color.rgb_hex(), 0x123456);
    /// assert_eq!(color.rgba_hex(), 0x12345678);
    /// ```
    pub fn rgb_hex(&self) -> u32 {
        let [r, g, b] = self.to_24bit();
        u32::from_be_bytes([0, r, g, b])
    }

    /// Convert to the packed `0xRRGGBBAA` representation.
    pub fn rgba_hex(&self) -> u32 {
        u32::from_be_bytes(self.to_32bit())
    }

    /// Determine whether this color provides RGB components, which is always
    /// the case.
    ///
    /// Host colors only become engine colors if their
    /// [`ColorModel::can_provide_rgb_components`] holds.
    pub fn can_provide_rgb_components(&self) -> bool {
        true
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert to hue in degrees, saturation, and brightness.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let red = Color::from_rgb_hex(0xff0000);
    /// assert_eq!(red.to_hsb(), [0.0, 1.0, 1.0]);
    /// ```
    pub fn to_hsb(&self) -> [Float; 3] {
        rgb_to_hsb(&self.to_rgb())
    }

    /// Get the HSB hue in degrees.
    pub fn hue(&self) -> Float {
        self.to_hsb()[0]
    }

    /// Get the HSB saturation.
    pub fn saturation(&self) -> Float {
        self.to_hsb()[1]
    }

    /// Get the HSB brightness.
    pub fn brightness(&self) -> Float {
        self.to_hsb()[2]
    }

    /// Convert to hue in degrees, saturation, and perceived brightness.
    pub fn to_hsp(&self) -> [Float; 3] {
        rgb_to_hsp(&self.to_rgb())
    }

    /// Get the perceived brightness P of HSP.
    pub fn perceived_brightness(&self) -> Float {
        perceived_brightness(&self.to_rgb())
    }

    /// Convert to cyan, magenta, yellow, and black.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let red = Color::from_rgb_hex(0xff0000);
    /// assert_eq!(red.to_cmyk(), [0.0, 1.0, 1.0, 0.0]);
    /// ```
    pub fn to_cmyk(&self) -> [Float; 4] {
        rgb_to_cmyk(&self.to_rgb())
    }

    /// Convert to luma Y and chrominance U and V.
    pub fn to_yuv(&self) -> [Float; 3] {
        rgb_to_yuv(&self.to_rgb())
    }

    /// Compute the luminance, i.e., `0.299R + 0.587G + 0.114B`.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let red = Color::from_rgb_hex(0xff0000);
    /// assert_eq!(red.white_byte(), 76);
    /// ```
    pub fn luminance(&self) -> Float {
        luminance(&self.to_rgb())
    }

    /// Compute the white level, which is the same as the luminance.
    pub fn white(&self) -> Float {
        self.luminance()
    }

    /// Map this color to the gray with the same luminance and alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn color_by_luminance_mapping(&self) -> Self {
        Self::gray(self.luminance(), self.alpha())
    }

    /// Approximate the correlated color temperature in Kelvin.
    ///
    /// Since black has no chromaticity, this method returns `None` for black.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// assert_eq!(Color::from_kelvin(2_700.0).color_temperature(), Some(2_700.0));
    /// assert_eq!(Color::rgb(0.0, 0.0, 0.0).color_temperature(), None);
    /// ```
    pub fn color_temperature(&self) -> Option<Float> {
        rgb_to_kelvin(&self.to_rgb())
    }

    /// Compute the colorfulness, i.e., the product of HSB saturation and
    /// brightness.
    pub fn colorfulness(&self) -> Float {
        colorfulness(&self.to_hsb())
    }

    /// Compute the warmth.
    ///
    /// Warmth is one for fully saturated orange, zero for fully saturated
    /// azure, and 0.5 for grays.
    pub fn warmth(&self) -> Float {
        warmth(&self.to_hsb())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Add the given amounts to the channels.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn add_channels(&self, r: Float, g: Float, b: Float, a: Float) -> Self {
        Self::from_channels(add(&self.channels, &[r, g, b, a]))
    }

    /// Add the amount to red, green, and blue, leaving alpha unchanged.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn add(&self, amount: Float) -> Self {
        self.add_channels(amount, amount, amount, 0.0)
    }

    /// Add the other color's channels to this color's channels.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn add_color(&self, other: &Color) -> Self {
        Self::from_channels(add(&self.channels, &other.channels))
    }

    /// Multiply the channels by the given factors.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn multiply_channels(&self, r: Float, g: Float, b: Float, a: Float) -> Self {
        Self::from_channels(multiply(&self.channels, &[r, g, b, a]))
    }

    /// Multiply red, green, and blue by the factor, leaving alpha unchanged.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let color = Color::new(0.2, 0.4, 0.6, 0.5);
    /// assert_eq!(color.multiply(1.0), color);
    /// assert_eq!(color.multiply(0.0), Color::new(0.0, 0.0, 0.0, 0.5));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn multiply(&self, factor: Float) -> Self {
        self.multiply_channels(factor, factor, factor, 1.0)
    }

    /// Multiply this color's channels by the other color's channels.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn multiply_color(&self, other: &Color) -> Self {
        Self::from_channels(multiply(&self.channels, &other.channels))
    }

    /// Lighten every channel up to the given target, if the target is
    /// lighter.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten_to_channels(&self, r: Float, g: Float, b: Float, a: Float) -> Self {
        Self::from_channels(lighten_to(&self.channels, &[r, g, b, a]))
    }

    /// Lighten red, green, and blue up to the given level.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten_to(&self, level: Float) -> Self {
        self.lighten_to_channels(level, level, level, self.channels[3])
    }

    /// Lighten every channel up to the other color's channel, if that is
    /// lighter.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten_to_color(&self, other: &Color) -> Self {
        Self::from_channels(lighten_to(&self.channels, &other.channels))
    }

    /// Move every channel the given fraction of the way to the other color's
    /// channel, if that is lighter.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let color = Color::rgb(0.2, 0.6, 0.4);
    /// let target = Color::rgb(0.4, 0.4, 0.4);
    /// assert_eq!(color.lighten_toward(&target, 0.5), Color::rgb(0.3, 0.6, 0.4));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten_toward(&self, other: &Color, amount: Float) -> Self {
        Self::from_channels(lighten_toward(&self.channels, &other.channels, amount))
    }

    /// Darken every channel down to the given target, if the target is
    /// darker.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken_to_channels(&self, r: Float, g: Float, b: Float, a: Float) -> Self {
        Self::from_channels(darken_to(&self.channels, &[r, g, b, a]))
    }

    /// Darken red, green, and blue down to the given level.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken_to(&self, level: Float) -> Self {
        self.darken_to_channels(level, level, level, self.channels[3])
    }

    /// Darken every channel down to the other color's channel, if that is
    /// darker.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken_to_color(&self, other: &Color) -> Self {
        Self::from_channels(darken_to(&self.channels, &other.channels))
    }

    /// Move every channel the given fraction of the way to the other color's
    /// channel, if that is darker.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken_toward(&self, other: &Color, amount: Float) -> Self {
        Self::from_channels(darken_toward(&self.channels, &other.channels, amount))
    }

    /// Interpolate between this and the other color.
    ///
    /// The fraction is not limited to unit range, but the resulting channels
    /// are.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let black = Color::rgb(0.0, 0.0, 0.0);
    /// let white = Color::rgb(1.0, 1.0, 1.0);
    /// assert_eq!(black.interpolate(&white, 0.5).to_hex_format(), "#808080");
    /// assert_eq!(black.interpolate(&white, 2.0), white);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #000000;"></div>
    /// <div style="background-color: #808080;"></div>
    /// <div style="background-color: #ffffff;"></div>
    /// </div>
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn interpolate(&self, other: &Color, fraction: Float) -> Self {
        Self::from_channels(unit4(&interpolate_channels(
            fraction,
            &self.channels,
            &other.channels,
        )))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the contrasting color, which is black for light colors and white
    /// for dark colors.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let yellow = Color::from_rgb_hex(0xffff00);
    /// assert_eq!(yellow.contrasting_color(), Color::rgb(0.0, 0.0, 0.0));
    /// let navy = Color::from_rgb_hex(0x000080);
    /// assert_eq!(navy.contrasting_color(), Color::rgb(1.0, 1.0, 1.0));
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ffff00;"></div>
    /// <div style="background-color: #000080;"></div>
    /// </div>
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn contrasting_color(&self) -> Self {
        if self.luminance() > 0.5 {
            Self::rgb(0.0, 0.0, 0.0)
        } else {
            Self::rgb(1.0, 1.0, 1.0)
        }
    }

    /// Get the complementary color, which is opposite on the hue circle.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn complementary_color(&self) -> Self {
        self.adjust_hue(180.0)
    }

    /// Get the two triadic colors, which are 120º and 240º away on the hue
    /// circle.
    pub fn triadic_colors(&self) -> [Color; 2] {
        [self.adjust_hue(120.0), self.adjust_hue(240.0)]
    }

    /// Get pairs of analogous colors.
    ///
    /// For each `i` in `1..=pairs`, this method returns the colors rotated
    /// by `-i × step` and `+i × step` degrees, in that order.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let red = Color::from_rgb_hex(0xff0000);
    /// let analogous = red.analogous_colors(60.0, 1);
    /// assert_eq!(analogous.len(), 2);
    /// assert_eq!(analogous[0].to_hex_format(), "#ff00ff");
    /// assert_eq!(analogous[1].to_hex_format(), "#ffff00");
    /// ```
    pub fn analogous_colors(&self, step: Float, pairs: usize) -> Vec<Color> {
        let mut colors = Vec::with_capacity(2 * pairs);
        for index in 1..=pairs {
            let angle = step * index as Float;
            colors.push(self.adjust_hue(-angle));
            colors.push(self.adjust_hue(angle));
        }
        colors
    }

    /// Replace the hue, in degrees.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_hue(&self, hue: Float) -> Self {
        let [_, s, b] = self.to_hsb();
        self.with_hsb([hue, s, b])
    }

    /// Replace the saturation.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_saturation(&self, saturation: Float) -> Self {
        let [h, _, b] = self.to_hsb();
        self.with_hsb([h, unit(saturation), b])
    }

    /// Replace the brightness.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_brightness(&self, brightness: Float) -> Self {
        let [h, s, _] = self.to_hsb();
        self.with_hsb([h, s, unit(brightness)])
    }

    /// Rotate the hue by the given degrees.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn adjust_hue(&self, delta: Float) -> Self {
        let [h, s, b] = self.to_hsb();
        self.with_hsb([h + delta, s, b])
    }

    /// Add the delta to the saturation.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn adjust_saturation(&self, delta: Float) -> Self {
        let [h, s, b] = self.to_hsb();
        self.with_hsb([h, unit(s + delta), b])
    }

    /// Add the delta to the brightness.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn adjust_brightness(&self, delta: Float) -> Self {
        let [h, s, b] = self.to_hsb();
        self.with_hsb([h, s, unit(b + delta)])
    }

    /// Adjust the warmth.
    ///
    /// A positive amount rotates the hue toward warm orange, a negative
    /// amount toward cool azure. The magnitude, clamped to unit range, is the
    /// fraction of the arc covered. Grays have no hue and stay unchanged.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let green = Color::from_rgb_hex(0x00ff00);
    /// assert!(green.adjust_warmth(0.5).warmth() > green.warmth());
    /// assert!(green.adjust_warmth(-0.5).warmth() < green.warmth());
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn adjust_warmth(&self, amount: Float) -> Self {
        let [h, s, b] = self.to_hsb();
        if s <= 0.0 || amount == 0.0 {
            return *self;
        }

        let target = if amount > 0.0 {
            WARMEST_HUE
        } else {
            WARMEST_HUE + 180.0
        };
        let rotation = hue_rotation(h, target) * unit(amount.abs());
        self.with_hsb([h + rotation, s, b])
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color and the other color are equal within one
    /// byte step.
    ///
    /// This method compares all four channels, including alpha, after
    /// clamping them to unit range. Each channel must differ by strictly less
    /// than [`EQUALITY_EPSILON`](crate::EQUALITY_EPSILON).
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let color = Color::rgb(0.5, 0.5, 0.5);
    /// assert!(color.is_equal_to(&Color::rgb(0.501, 0.5, 0.499)));
    /// assert!(!color.is_equal_to(&Color::new(0.5, 0.5, 0.5, 0.9)));
    /// ```
    pub fn is_equal_to(&self, other: &Color) -> bool {
        is_close(&self.channels, &other.channels)
    }

    /// Compute the distance to the other color with the given metric.
    pub fn distance(&self, other: &Color, metric: Metric) -> Float {
        metric.distance(self, other)
    }

    /// Format this color in hashed hexadecimal notation.
    ///
    /// The result is `#rrggbb` for opaque colors and `#rrggbbaa` otherwise.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// assert_eq!(Color::from_rgb_hex(0xFF8000).to_hex_format(), "#ff8000");
    /// assert_eq!(Color::from_rgba_hex(0xFF800080).to_hex_format(), "#ff800080");
    /// ```
    pub fn to_hex_format(&self) -> String {
        format_hex(&self.channels)
    }

    /// Find the name of the closest built-in color.
    ///
    /// If the `PRETTYHUE_DICTIONARY` environment variable names a built-in
    /// dictionary, this method only searches that dictionary. Otherwise, it
    /// searches all of them. It always uses the RGB metric.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let almost_red = Color::rgb(0.98, 0.01, 0.02);
    /// assert_eq!(almost_red.closest_color_name(), Some("Red"));
    /// ```
    pub fn closest_color_name(&self) -> Option<&'static str> {
        self.closest_color_name_with(&Env::default())
    }

    /// Find the name of the closest color in the named built-in dictionary.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::NotFoundError;
    /// let almost_red = Color::rgb(0.98, 0.01, 0.02);
    /// assert_eq!(almost_red.closest_color_name_in("crayons")?, "Maraschino");
    /// # Ok::<(), NotFoundError>(())
    /// ```
    pub fn closest_color_name_in(&self, dictionary: &str) -> Result<&'static str, NotFoundError> {
        ClosestColorMatcher::new(ColorRegistry::builtin(), Metric::Rgb)
            .closest_in(self, dictionary)
            .map(|entry| entry.name)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method is available from Python only.
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its descriptive string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method is available from Python only.
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// Use separate block, so that methods are not exposed to Python.
impl Color {
    #[inline]
    const fn from_channels(channels: [Float; 4]) -> Self {
        Self { channels }
    }

    fn with_hsb(&self, hsb: [Float; 3]) -> Self {
        let [r, g, b] = hsb_to_rgb(&hsb);
        Self::new(r, g, b, self.channels[3])
    }

    /// Compute the distance to the other color with the given metric. <i
    /// class=rust-only>Rust only!</i>
    ///
    /// Unlike [`Color::distance`], this method accepts any [`ColorMetric`],
    /// including closures.
    pub fn distance_with<M: ColorMetric>(&self, other: &Color, metric: &M) -> Float {
        metric.distance(self, other)
    }

    /// Find the name of the closest built-in color, with the dictionary
    /// selected by the given environment.
    pub(crate) fn closest_color_name_with<E: Environment>(&self, env: &E) -> Option<&'static str> {
        let matcher = ClosestColorMatcher::new(ColorRegistry::builtin(), Metric::Rgb);
        if let Some(dictionary) = dictionary_from_environment(env) {
            match matcher.closest_in(self, &dictionary) {
                Ok(entry) => return Some(entry.name),
                Err(error) => {
                    tracing::warn!(%error, "ignoring configured dictionary");
                }
            }
        }

        matcher.closest(self).map(|found| found.name)
    }

    /// Convert the host platform's native color into a color. <i
    /// class=rust-only>Rust only!</i>
    ///
    /// Only native colors in the RGB or monochrome color models can be
    /// converted. Monochrome colors have white and, optionally, alpha
    /// components. RGB colors have red, green, blue, and, optionally, alpha
    /// components.
    ///
    /// # Errors
    ///
    /// This method returns an error if the color model does not provide RGB
    /// components or the number of components does not fit the model.
    pub fn try_from_native<N: NativeColor>(native: &N) -> Result<Self, UnsupportedColorSpaceError> {
        let model = native.color_model();
        if !model.can_provide_rgb_components() {
            return Err(UnsupportedColorSpaceError(model));
        }

        let components = native.components();
        match (model, components.as_slice()) {
            (ColorModel::Monochrome, &[white]) => Ok(Self::gray(white, 1.0)),
            (ColorModel::Monochrome, &[white, alpha]) => Ok(Self::gray(white, alpha)),
            (ColorModel::Rgb, &[r, g, b]) => Ok(Self::new(r, g, b, 1.0)),
            (ColorModel::Rgb, &[r, g, b, a]) => Ok(Self::new(r, g, b, a)),
            _ => Err(UnsupportedColorSpaceError(model)),
        }
    }

    /// Convert this color into the host platform's native color. <i
    /// class=rust-only>Rust only!</i>
    pub fn to_native<N: NativeColor>(&self) -> N {
        N::from_rgba(self.to_array())
    }
}

/// Interpolate between the two colors.
///
/// This function is equivalent to [`Color::interpolate`].
#[must_use = "function returns a new color and does not mutate original values"]
pub fn interpolate(color1: &Color, color2: &Color, fraction: Float) -> Color {
    color1.interpolate(color2, fraction)
}

impl Default for Color {
    /// Create an instance of the default color, which is opaque black.
    #[inline]
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space. It recognizes two formats:
    ///
    /// The *hashed hexadecimal notation* has six or eight hexadecimal digits
    /// with an optional leading `#`, e.g., `#cafe00` or `cafe0080`. Letter
    /// case does not matter.
    ///
    /// The *descriptive notation* has two, three, or four decimal numbers in
    /// unit range separated by commas and/or white space and optionally
    /// enclosed in curly braces. Two numbers are white and alpha, three
    /// numbers red, green, and blue, and four numbers red, green, blue, and
    /// alpha. It is the notation used by [`Color`]'s `Display`
    /// implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#000080")?;
    /// assert_eq!(navy, Color::from_rgb_hex(0x000080));
    ///
    /// let gray: Color = str::parse("{0.5, 1}")?;
    /// assert_eq!(gray, Color::gray(0.5, 1.0));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|[r, g, b, a]| Self::new(r, g, b, a))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 4]> for Color {
    fn as_ref(&self) -> &[Float; 4] {
        &self.channels
    }
}

impl std::ops::Add for Color {
    type Output = Color;

    /// Add the two colors channel by channel, clamping the result.
    fn add(self, rhs: Self) -> Self::Output {
        self.add_color(&rhs)
    }
}

impl std::ops::Mul<Float> for Color {
    type Output = Color;

    /// Multiply red, green, and blue by the factor, clamping the result.
    fn mul(self, rhs: Float) -> Self::Output {
        self.multiply(rhs)
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.channels).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Both equality testing and hashing normalize the channels by reducing
    /// their precision, dropping the sign of negative zero, and converting
    /// them to bit strings. That way, `Hash` produces the same result for
    /// colors that are `Eq`.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// assert_eq!(Color::rgb(0.1 + 0.2, -0.0, 1.0), Color::rgb(0.3, 0.0, 1.0));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
            || to_eq_channels(&self.channels) == to_eq_channels(&other.channels)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.channels;
        f.write_fmt(format_args!("Color({}, {}, {}, {})", r, g, b, a))
    }
}

impl std::fmt::Display for Color {
    /// Format this color in descriptive notation.
    ///
    /// This method writes the clamped channels as `{r, g, b, a}`. It respects
    /// the formatter's precision, defaulting to 4 digits past the decimal.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let color = Color::new(0.3, 0.5, 2.0, 1.0);
    /// assert_eq!(color.to_string(), "{0.3000, 0.5000, 1.0000, 1.0000}");
    /// assert_eq!(format!("{:.1}", color), "{0.3, 0.5, 1.0, 1.0}");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_descriptive(&self.to_array(), f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::str::FromStr;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::Color;
    use crate::error::{ColorFormatError, UnsupportedColorSpaceError};
    use crate::native::test::HostColor;
    use crate::native::ColorModel;
    use crate::random::random_color_with;
    use crate::util::FakeEnv;
    use crate::{assert_close_enough, assert_within, Float};

    #[test]
    fn test_construction() {
        let color = Color::new(Float::NAN, 0.5, 1.5, -1.0);
        assert_eq!(color.raw(), [0.0, 0.5, 1.5, -1.0]);
        assert_eq!(color.to_array(), [0.0, 0.5, 1.0, 0.0]);

        assert_eq!(Color::from_rgb_hex(0xff0000), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_rgb_hex(0xabff0000), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_rgba_hex(0xff000000), Color::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(rgb!(0, 0, 0), Color::default());
        assert_eq!(Color::gray(0.25, 0.5), Color::new(0.25, 0.25, 0.25, 0.5));
    }

    #[test]
    fn test_red_reference() -> Result<(), ColorFormatError> {
        let red = Color::from_str("#FF0000")?;
        assert_eq!(red.to_hsb(), [0.0, 1.0, 1.0]);
        assert_eq!(red.to_cmyk(), [0.0, 1.0, 1.0, 0.0]);
        assert_eq!(red.white_byte(), 76);
        assert_eq!(red.to_24bit(), [255, 0, 0]);
        assert_eq!(red.rgb_hex(), 0xff0000);
        assert_eq!(red.rgba_hex(), 0xff0000ff);
        Ok(())
    }

    #[test]
    fn test_model_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let color = random_color_with(&mut rng);
            let [h1, s1, b] = color.to_hsb();
            let [h2, s2, p] = color.to_hsp();
            let [y, u, v] = color.to_yuv();
            for round_trip in [
                Color::from_hsb(h1, s1, b, 1.0),
                Color::from_hsp(h2, s2, p, 1.0),
                Color::from_yuv(y, u, v),
            ] {
                for (actual, expected) in round_trip.as_ref().iter().zip(color.as_ref()) {
                    assert_within!(*actual, *expected, 1e-4);
                }
            }
            let [c, m, y, k] = color.to_cmyk();
            assert!(Color::from_cmyk(c, m, y, k).is_equal_to(&color), "CMYK {:?}", color);
        }
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let opaque = random_color_with(&mut rng);
            let parsed = Color::from_str(&opaque.to_hex_format())?;
            assert!(parsed.is_equal_to(&opaque), "{:?} vs {:?}", parsed, opaque);

            let translucent = opaque.multiply_channels(1.0, 1.0, 1.0, 0.5);
            let parsed = Color::from_str(&translucent.to_hex_format())?;
            assert!(parsed.is_equal_to(&translucent), "{:?} vs {:?}", parsed, translucent);
        }
        Ok(())
    }

    #[test]
    fn test_descriptive_round_trip() -> Result<(), ColorFormatError> {
        let color = Color::new(0.125, 0.25, 0.5, 0.75);
        assert_eq!(Color::from_str(&color.to_string())?, color);
        assert_eq!(Color::from_str("{1, 0, 0}")?, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_str("{1, 0, 0"), Err(ColorFormatError::UnbalancedBraces));
        Ok(())
    }

    #[test]
    fn test_arithmetic() {
        let color = Color::new(0.2, 0.4, 0.6, 0.5);
        assert_eq!(color.multiply(1.0), color);
        assert_eq!(color.multiply(0.0), Color::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(color * 2.0, Color::new(0.4, 0.8, 1.0, 0.5));
        assert_eq!(color.add(0.5), Color::new(0.7, 0.9, 1.0, 0.5));
        assert_eq!(color + Color::new(0.0, 0.0, 0.0, 0.25), Color::new(0.2, 0.4, 0.6, 0.75));
        assert_eq!(color.lighten_to(0.5), Color::new(0.5, 0.5, 0.6, 0.5));
        assert_eq!(color.darken_to(0.5), Color::new(0.2, 0.4, 0.5, 0.5));

        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(1.0, 1.0, 1.0);
        let gray = black.interpolate(&white, 0.5);
        for byte in gray.to_24bit() {
            assert!((127..=129).contains(&byte), "{} is not mid gray", byte);
        }
        assert_eq!(black.interpolate(&white, -1.0), black);
        assert_eq!(super::interpolate(&black, &white, 0.25), Color::gray(0.25, 1.0));
    }

    #[test]
    fn test_related_colors() {
        let red = Color::from_rgb_hex(0xff0000);
        assert_eq!(red.complementary_color().to_hex_format(), "#00ffff");
        let [green, blue] = red.triadic_colors();
        assert_eq!(green.to_hex_format(), "#00ff00");
        assert_eq!(blue.to_hex_format(), "#0000ff");
        assert_close_enough!(red.with_hue(240.0).hue(), 240.0);
        assert_eq!(red.with_saturation(0.0), Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(red.with_brightness(0.5), Color::rgb(0.5, 0.0, 0.0));
        assert_eq!(red.adjust_brightness(-2.0), Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(red.adjust_saturation(-0.5), Color::rgb(1.0, 0.5, 0.5));
        assert_close_enough!(red.adjust_hue(-30.0).hue(), 330.0);

        let gray = Color::gray(0.5, 0.25);
        assert_eq!(gray.adjust_warmth(1.0), gray);
        assert_eq!(gray.color_by_luminance_mapping(), gray);
        assert_eq!(
            red.color_by_luminance_mapping(),
            Color::gray(0.299, 1.0)
        );

        let azure = Color::from_hsb(210.0, 1.0, 1.0, 1.0);
        assert_within!(azure.adjust_warmth(1.0).hue(), 30.0, 1e-9);
        assert_within!(azure.adjust_warmth(1.0).warmth(), 1.0, 1e-9);
    }

    #[test]
    fn test_equality() {
        let color = Color::rgb(0.5, 0.5, 0.5);
        let step = 1.0 / 255.0;
        assert!(color.is_equal_to(&Color::rgb(0.5 + step / 2.0, 0.5, 0.5)));
        assert!(!color.is_equal_to(&Color::rgb(0.5 + step, 0.5, 0.5)));
        assert!(!color.is_equal_to(&Color::new(0.5, 0.5, 0.5, 0.5)));

        let mut set = HashSet::new();
        set.insert(Color::rgb(0.1 + 0.2, 0.0, 0.0));
        assert!(set.contains(&Color::rgb(0.3, -0.0, 0.0)));
        assert!(!set.contains(&Color::rgb(0.31, 0.0, 0.0)));
    }

    #[test]
    fn test_kelvin() {
        assert_eq!(Color::from_kelvin(6_600.0).to_hex_format(), "#ffffff");
        for kelvin in [1_000.0, 3_300.0, 10_000.0, 40_000.0] {
            assert_eq!(Color::from_kelvin(kelvin).color_temperature(), Some(kelvin));
        }
        assert_eq!(Color::gray(0.0, 0.5).color_temperature(), None);
    }

    #[test]
    fn test_native() -> Result<(), UnsupportedColorSpaceError> {
        let gray = HostColor::new(ColorModel::Monochrome, &[0.5]);
        assert_eq!(Color::try_from_native(&gray), Ok(Color::gray(0.5, 1.0)));

        let translucent = HostColor::new(ColorModel::Rgb, &[1.0, 0.0, 0.0, 0.5]);
        let color = Color::try_from_native(&translucent)?;
        assert_eq!(color, Color::new(1.0, 0.0, 0.0, 0.5));
        assert_eq!(color.to_native::<HostColor>(), translucent);

        let cmyk = HostColor::new(ColorModel::Cmyk, &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(
            Color::try_from_native(&cmyk),
            Err(UnsupportedColorSpaceError(ColorModel::Cmyk))
        );

        let malformed = HostColor::new(ColorModel::Rgb, &[1.0, 0.0]);
        assert_eq!(
            Color::try_from_native(&malformed),
            Err(UnsupportedColorSpaceError(ColorModel::Rgb))
        );
        Ok(())
    }

    #[test]
    fn test_closest_color_name_configuration() {
        let almost_red = Color::rgb(0.98, 0.01, 0.02);

        let env = FakeEnv::new();
        assert_eq!(almost_red.closest_color_name_with(&env), Some("Red"));

        let mut env = FakeEnv::new();
        env.set("PRETTYHUE_DICTIONARY", "Crayons");
        assert_eq!(almost_red.closest_color_name_with(&env), Some("Maraschino"));

        let mut env = FakeEnv::new();
        env.set("PRETTYHUE_DICTIONARY", "Pantone");
        assert_eq!(almost_red.closest_color_name_with(&env), Some("Red"));

        assert!(almost_red.closest_color_name_in("Pantone").is_err());
    }
}
