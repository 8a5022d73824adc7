mod arithmetic;
mod conversion;
mod difference;
mod equality;
mod kelvin;
mod math;
mod string;

// arithmetic
pub(crate) use arithmetic::{add, darken_to, darken_toward, lighten_to, lighten_toward, multiply};

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, hsb_to_rgb, hsp_to_rgb, luminance, perceived_brightness, rgb_to_cmyk,
    rgb_to_hsb, rgb_to_hsp, rgb_to_yuv, yuv_to_rgb,
};

// difference
pub(crate) use difference::{euclidean, find_closest, find_n_closest, interpolate};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::{to_eq_bits, EQUALITY_EPSILON};
pub(crate) use equality::{is_close, normalize, to_eq_channels};

// kelvin
pub(crate) use kelvin::{kelvin_to_rgb, rgb_to_kelvin};
pub use kelvin::{MAX_KELVIN, MIN_KELVIN};

// math
pub(crate) use math::{hue_arc, hue_rotation, normalize_hue, to_byte, unit, unit4, FloatExt};

// string
pub(crate) use string::{format_descriptive, format_hex, parse};
