//! Utility module with prettyhue's errors.

#[cfg(feature = "pyffi")]
use pyo3::{
    exceptions::{PyKeyError, PyValueError},
    prelude::*,
};

use crate::native::ColorModel;

/// An erroneous color format.
///
/// Hashed hexadecimal and descriptive formats share this error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format without any content, e.g., the empty string or `{}`.
    Empty,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#fff` is missing three hexadecimal digits,
    /// whereas `#💩00` contains an unsuitable character.
    UnexpectedCharacters,

    /// A hashed hexadecimal color format with a malformed hexadecimal number.
    /// For example, `#00ffgg` has a malformed blue byte.
    MalformedHex,

    /// A descriptive color format with a malformed floating point number. For
    /// example, `{1.0, 0..1, 0.0}` has a malformed green channel.
    MalformedFloat,

    /// A descriptive color format with the wrong number of channels. Valid
    /// formats have two, three, or four channels.
    WrongArity(usize),

    /// A descriptive color format with an opening brace but no closing brace
    /// or vice versa.
    UnbalancedBraces,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            Empty => f.write_str("color format should not be empty"),
            UnexpectedCharacters => {
                f.write_str("color format should have 6 or 8 hexadecimal ASCII digits")
            }
            MalformedHex => {
                f.write_str("color format bytes should be hexadecimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format channels should be floating point numbers but are not")
            }
            WrongArity(count) => f.write_fmt(format_args!(
                "color format should have 2, 3, or 4 channels but has {}",
                count
            )),
            UnbalancedBraces => f.write_str("color format should have balanced braces"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error indicating a missing dictionary or color name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    /// The registry has no dictionary with the given name.
    Dictionary(String),

    /// Either the named dictionary or, if no dictionary is named, all
    /// dictionaries have no color with the given name.
    Color {
        dictionary: Option<String>,
        name: String,
    },
}

impl NotFoundError {
    /// Create a new error for a missing dictionary.
    pub fn dictionary(name: &str) -> Self {
        Self::Dictionary(name.to_owned())
    }

    /// Create a new error for a missing color.
    pub fn color(dictionary: Option<&str>, name: &str) -> Self {
        Self::Color {
            dictionary: dictionary.map(str::to_owned),
            name: name.to_owned(),
        }
    }
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Dictionary(ref name) => {
                f.write_fmt(format_args!("no color dictionary named \"{}\"", name))
            }
            Self::Color {
                dictionary: Some(ref dictionary),
                ref name,
            } => f.write_fmt(format_args!(
                "no color named \"{}\" in dictionary \"{}\"",
                name, dictionary
            )),
            Self::Color {
                dictionary: None,
                ref name,
            } => f.write_fmt(format_args!("no color named \"{}\" in any dictionary", name)),
        }
    }
}

impl std::error::Error for NotFoundError {}

#[cfg(feature = "pyffi")]
impl From<NotFoundError> for PyErr {
    fn from(value: NotFoundError) -> Self {
        PyKeyError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error indicating a native color whose color model does not provide RGB
/// components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedColorSpaceError(pub ColorModel);

impl UnsupportedColorSpaceError {
    /// Get the offending color model.
    pub fn color_model(&self) -> ColorModel {
        self.0
    }
}

impl std::fmt::Display for UnsupportedColorSpaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} color model does not provide RGB components",
            self.0.name()
        ))
    }
}

impl std::error::Error for UnsupportedColorSpaceError {}

#[cfg(feature = "pyffi")]
impl From<UnsupportedColorSpaceError> for PyErr {
    fn from(value: UnsupportedColorSpaceError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, NotFoundError, UnsupportedColorSpaceError};
    use crate::native::ColorModel;

    #[test]
    fn test_messages() {
        assert_eq!(
            ColorFormatError::WrongArity(5).to_string(),
            "color format should have 2, 3, or 4 channels but has 5"
        );
        assert_eq!(
            NotFoundError::dictionary("Pantone").to_string(),
            "no color dictionary named \"Pantone\""
        );
        assert_eq!(
            NotFoundError::color(Some("CSS"), "Mauve").to_string(),
            "no color named \"Mauve\" in dictionary \"CSS\""
        );
        assert_eq!(
            NotFoundError::color(None, "Mauve").to_string(),
            "no color named \"Mauve\" in any dictionary"
        );
        assert_eq!(
            UnsupportedColorSpaceError(ColorModel::Cmyk).to_string(),
            "CMYK color model does not provide RGB components"
        );
    }
}
