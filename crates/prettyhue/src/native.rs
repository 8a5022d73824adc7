//! Bridging between engine colors and a host platform's native colors.
//!
//! Host platforms typically represent colors as opaque objects in one of
//! several color models. [`NativeColor`] captures just enough of such an
//! object for [`Color::try_from_native`](crate::Color::try_from_native) and
//! [`Color::to_native`](crate::Color::to_native) to move colors across the
//! boundary. Only colors in the RGB and monochrome models have RGB components
//! and hence can enter the engine.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The color models of native host colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettyhue.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorModel {
    #[default]
    Unknown,
    Monochrome,
    Rgb,
    Cmyk,
    Lab,
    DeviceN,
    Indexed,
    Pattern,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorModel {
    /// Get a human-readable name for this color model.
    ///
    /// ```
    /// # use prettyhue::ColorModel;
    /// assert_eq!(ColorModel::Rgb.name(), "RGB");
    /// assert_eq!(ColorModel::DeviceN.name(), "DeviceN");
    /// ```
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Unknown => "Unknown",
            Self::Monochrome => "Monochrome",
            Self::Rgb => "RGB",
            Self::Cmyk => "CMYK",
            Self::Lab => "Lab",
            Self::DeviceN => "DeviceN",
            Self::Indexed => "Indexed",
            Self::Pattern => "Pattern",
        }
    }

    /// Determine whether colors in this model provide RGB components.
    pub const fn can_provide_rgb_components(&self) -> bool {
        matches!(*self, Self::Monochrome | Self::Rgb)
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A host platform's native color.
///
/// The components depend on the color model. Monochrome colors have white
/// and alpha, RGB colors have red, green, blue, and alpha. In both cases,
/// alpha may be omitted and then defaults to one.
pub trait NativeColor: Sized {
    /// Get the color model.
    fn color_model(&self) -> ColorModel;

    /// Get the components in the color model's order.
    fn components(&self) -> Vec<Float>;

    /// Create a new native RGB color from the given red, green, blue, and
    /// alpha components.
    fn from_rgba(channels: [Float; 4]) -> Self;
}

#[cfg(test)]
pub(crate) mod test {
    use super::{ColorModel, NativeColor};
    use crate::Float;

    /// A stand-in for a host platform's color object.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct HostColor {
        pub(crate) model: ColorModel,
        pub(crate) components: Vec<Float>,
    }

    impl HostColor {
        pub(crate) fn new(model: ColorModel, components: &[Float]) -> Self {
            Self {
                model,
                components: components.to_vec(),
            }
        }
    }

    impl NativeColor for HostColor {
        fn color_model(&self) -> ColorModel {
            self.model
        }

        fn components(&self) -> Vec<Float> {
            self.components.clone()
        }

        fn from_rgba(channels: [Float; 4]) -> Self {
            Self::new(ColorModel::Rgb, &channels)
        }
    }

    #[test]
    fn test_color_model() {
        assert!(ColorModel::Rgb.can_provide_rgb_components());
        assert!(ColorModel::Monochrome.can_provide_rgb_components());
        for model in [
            ColorModel::Unknown,
            ColorModel::Cmyk,
            ColorModel::Lab,
            ColorModel::DeviceN,
            ColorModel::Indexed,
            ColorModel::Pattern,
        ] {
            assert!(
                !model.can_provide_rgb_components(),
                "{} should not provide RGB",
                model
            );
        }
        assert_eq!(ColorModel::default(), ColorModel::Unknown);
    }
}
