//! # Pretty 🌸 Hue
//!
//! Prettyhue is a small color engine. It represents colors as immutable
//! values, converts them between color models, composes them, measures
//! distances between them, and names them.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Building with the `pyffi` feature also exposes the engine to Python. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Prettyhue's main abstractions are:
//!
//!   * [`Color`] implements **immutable colors** with four [`Float`] channels
//!     for red, green, blue, and alpha. Its methods convert to and from HSB,
//!     HSP, CMYK, YUV, grayscale, and color temperature, blend and adjust
//!     colors, and format them as hashed hexadecimal or descriptive strings.
//!   * The [`metric`] module defines **color metrics**, with [`Metric`]
//!     enumerating the built-in ones and [`ColorMetric`] abstracting over
//!     them, and **sort comparators** that order colors by warmth,
//!     colorfulness, hue, and so on.
//!   * [`ColorDictionary`] and [`ColorRegistry`] hold **named colors**. The
//!     [built-in registry](ColorRegistry::builtin) includes the basic HTML,
//!     CSS, crayon, and system colors.
//!   * [`ClosestColorMatcher`] finds the **closest named colors** for a color
//!     under some metric.
//!   * [`NativeColor`] bridges to a **host platform's color objects**, with
//!     [`ColorModel`] capturing their color models.
//!
//! Arithmetic and conversion never fail. Parsing, dictionary lookup, and
//! native bridging return the errors in the [`error`] module.
//!
//!
//! ## 2. Examples
//!
//! Colors are created from channels, packed integers, strings, or other
//! color models:
//!
//! ```
//! # use prettyhue::{rgb, Color};
//! # fn main() -> Result<(), prettyhue::error::ColorFormatError> {
//! let orange: Color = "#ff8000".parse()?;
//! assert_eq!(orange, rgb!(255, 128, 0));
//! assert_eq!(Color::from_hsb(30.0, 1.0, 1.0, 1.0).to_hex_format(), "#ff8000");
//!
//! let gray: Color = "{0.5, 1.0}".parse()?;
//! assert_eq!(gray, Color::gray(0.5, 1.0));
//! # Ok(())
//! # }
//! ```
//! <div class=color-swatch>
//! <div style="background-color: #ff8000;"></div>
//! <div style="background-color: #808080;"></div>
//! </div>
//! <br>
//!
//! They also have names:
//!
//! ```
//! # use prettyhue::Color;
//! let almost_red = Color::from_rgb_hex(0xfa0305);
//! assert_eq!(almost_red.closest_color_name(), Some("Red"));
//! assert_eq!(almost_red.closest_color_name_in("Crayons"), Ok("Maraschino"));
//! ```
//! <div class=color-swatch>
//! <div style="background-color: #fa0305;"></div>
//! <div style="background-color: #ff0000;"></div>
//! </div>
//!
//!
//! ## 3. Configuration
//!
//! If the `PRETTYHUE_DICTIONARY` environment variable names a built-in
//! dictionary, [`Color::closest_color_name`] only searches that dictionary.
//! Prettyhue logs through [tracing](https://docs.rs/tracing), so installing a
//! subscriber reveals registry initialization and matcher scans.
//!
//!
//! ## 4. Optional Features
//!
//! Prettyhue supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls prettyhue's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod builtin;
mod core;
mod dictionary;
pub mod error;
mod matcher;
pub mod metric;
mod native;
mod object;
pub mod random;
mod registry;
mod util;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{EQUALITY_EPSILON, MAX_KELVIN, MIN_KELVIN};
pub use dictionary::{ColorDictionary, ColorDictionaryBuilder, Entries};
pub use matcher::{ClosestColorMatcher, Entry, Match};
pub use metric::{ColorMetric, Metric};
pub use native::{ColorModel, NativeColor};
pub use object::{interpolate, Color};
pub use registry::ColorRegistry;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(random::random_color, m)?)?;
    m.add_function(wrap_pyfunction!(random::random_dark_color, m)?)?;
    m.add_function(wrap_pyfunction!(random::random_light_color, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<ColorModel>()?;
    m.add_class::<Metric>()?;

    m.add("EQUALITY_EPSILON", EQUALITY_EPSILON)?;
    m.add("MIN_KELVIN", MIN_KELVIN)?;
    m.add("MAX_KELVIN", MAX_KELVIN)?;

    Ok(())
}
