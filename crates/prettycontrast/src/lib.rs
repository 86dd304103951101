//! # Pretty 🌸 Contrast
//!
//! Prettycontrast computes whether colors are legible against each other and
//! helps fix them when they are not. It is a pure computational engine: All
//! functions are synchronous, free of side effects, and safe to call from
//! any number of threads.
//!
//!
//! ## 1. Overview
//!
//! Prettycontrast's main abstractions are:
//!
//!   * The [`color`] module defines the **color records** [`Rgb`], [`Hsl`],
//!     [`Lab`], [`Lch`], and [`Xyz`] as well as the tagged union
//!     [`AnyColor`]. [`Rgb`] uses 8-bit coordinates with optional alpha, all
//!     others use [`Float`].
//!   * The [`convert`] module implements **conversion** between the color
//!     records as well as HSL-based lightening, darkening, saturation, and hue
//!     rotation.
//!   * The [`luminance`] module computes WCAG's **relative luminance** and
//!     APCA's contrast luminance.
//!   * The [`contrast`] module computes the **WCAG contrast ratio** and the
//!     **APCA lightness contrast** Lc and checks both against conformance
//!     thresholds.
//!   * The [`vision`] module **simulates color vision deficiencies**.
//!   * The [`optimize`] module **searches for accessible colors**.
//!
//! The crate root further re-exports the numeric primitives, i.e., clamping,
//! rounding, angle and hue helpers, hexadecimal notation, sRGB gamma, and the
//! CIE76, CIE94, and CIEDE2000 color differences.
//!
//!
//! ## 2. Example
//!
//! Medium gray on white narrowly misses WCAG AA for normal text:
//! ```
//! # use prettycontrast::{hex_to_rgb, ColorError, Rgb};
//! # use prettycontrast::contrast::{calculate_contrast, contrast_grade, ContrastGrade};
//! # fn main() -> Result<(), ColorError> {
//! let gray = hex_to_rgb("#777")?;
//! let result = calculate_contrast(gray, Rgb::WHITE);
//! assert_eq!(result.ratio, 4.48);
//! assert!(!result.wcag.normal_text_aa);
//! assert_eq!(contrast_grade(result.ratio), ContrastGrade::C);
//! # Ok(())
//! # }
//! ```
//! Searching for a slightly darker gray fixes that:
//! ```
//! # use prettycontrast::{hex_to_rgb, ColorError, Rgb};
//! # use prettycontrast::contrast::calculate_contrast;
//! # use prettycontrast::optimize::find_accessible_by_lightness;
//! # fn main() -> Result<(), ColorError> {
//! # let gray = hex_to_rgb("#777")?;
//! let darker = find_accessible_by_lightness(gray, Rgb::WHITE, 4.5, false);
//! assert!(darker.is_some_and(|c| calculate_contrast(c, Rgb::WHITE).wcag.normal_text_aa));
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 3. Feature Flags
//!
//! Prettycontrast supports two feature flags:
//!
//!   - `f64` selects the eponymous type as [`Float`]. Since it is the default,
//!     disable it to use `f32` instead.
//!   - `serde` derives `Serialize` and `Deserialize` for the color records and
//!     the result records, so that palettes and reports can be exported as
//!     JSON.
//!
//! The library emits diagnostics through [`tracing`](https://docs.rs/tracing)
//! at debug and trace level. It never installs a subscriber.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod color;
pub mod contrast;
pub mod convert;
pub mod error;
pub mod luminance;
pub mod optimize;
pub mod vision;

#[doc(hidden)]
pub use core::close_enough;

pub use color::{AnyColor, Hsl, Lab, Lch, Rgb, Xyz};
pub use core::{
    clamp, delta_e2000, delta_e76, delta_e94, hex_to_rgb, linear_to_srgb, normalize_hue,
    rgb_to_hex, round_to, srgb_to_linear, to_degrees, to_radians,
};
pub use error::ColorError;
