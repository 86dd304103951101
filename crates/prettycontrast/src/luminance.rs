//! Luminance of sRGB colors.
//!
//! This module computes two closely related but distinct quantities:
//!
//!   * [`relative_luminance`] is WCAG 2.1's relative luminance, which feeds
//!     into the contrast ratio.
//!   * [`apca_luminance`] is APCA's contrast luminance, which feeds into the
//!     perceptual contrast Lc.
//!
//! Both linearize the gamma-corrected channels with the same sRGB transfer
//! function but use slightly different coefficients. They must not be used
//! interchangeably.
//!
//! The module further converts between luminance and CIE lightness L*.

use crate::core::{to_contrast_luminance, to_relative_luminance};
use crate::{Float, Rgb};

/// Compute the WCAG 2.1 relative luminance of the color.
///
/// The result ranges `0..=1`.
///
/// ```
/// # use prettycontrast::Rgb;
/// # use prettycontrast::luminance::relative_luminance;
/// assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
/// assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
/// ```
pub fn relative_luminance(rgb: Rgb) -> Float {
    to_relative_luminance(&rgb.to_unit())
}

/// Compute the APCA contrast luminance of the color.
///
/// This luminance uses APCA's sRGB coefficients 0.2126729, 0.7151522, and
/// 0.072175. The result ranges `0..=1`, give or take a rounding error.
pub fn apca_luminance(rgb: Rgb) -> Float {
    to_contrast_luminance(&rgb.to_unit())
}

/// The luminance at which CIE lightness switches from the linear segment to
/// the cube root.
const EPSILON: Float = 216.0 / 24389.0;

/// The slope of the linear segment of CIE lightness.
const KAPPA: Float = 24389.0 / 27.0;

/// Convert luminance `0..=1` to CIE lightness L* `0..=100`.
pub fn luminance_to_lightness(luminance: Float) -> Float {
    if luminance <= EPSILON {
        luminance * KAPPA
    } else {
        116.0 * luminance.cbrt() - 16.0
    }
}

/// Convert CIE lightness L* `0..=100` to luminance `0..=1`.
pub fn lightness_to_luminance(lightness: Float) -> Float {
    if lightness <= EPSILON * KAPPA {
        lightness / KAPPA
    } else {
        ((lightness + 16.0) / 116.0).powi(3)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_relative_luminance() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert_close_enough!(relative_luminance(Rgb::WHITE), 1.0);
        assert_close_enough!(relative_luminance(Rgb::new(255, 0, 0)), 0.2126);
        assert_close_enough!(relative_luminance(Rgb::new(0, 255, 0)), 0.7152);
        assert_close_enough!(relative_luminance(Rgb::new(0, 0, 255)), 0.0722);
        assert_close_enough!(relative_luminance(Rgb::gray(119)), 0.1845, 1e-4);
    }

    #[test]
    fn test_apca_luminance() {
        assert_eq!(apca_luminance(Rgb::BLACK), 0.0);
        assert_close_enough!(apca_luminance(Rgb::new(255, 0, 0)), 0.2126729);
        assert_close_enough!(apca_luminance(Rgb::new(0, 0, 255)), 0.072175);

        // The two luminances differ, if only slightly.
        let color = Rgb::new(0x31, 0x78, 0xea);
        assert_ne!(apca_luminance(color), relative_luminance(color));
        assert_close_enough!(apca_luminance(color), relative_luminance(color), 1e-4);
    }

    #[test]
    fn test_lightness() {
        assert_eq!(luminance_to_lightness(0.0), 0.0);
        assert_close_enough!(luminance_to_lightness(1.0), 100.0);
        assert_close_enough!(luminance_to_lightness(0.18), 49.496, 1e-3);
        assert_close_enough!(lightness_to_luminance(100.0), 1.0);
        assert_close_enough!(lightness_to_luminance(8.0), 8.0 * 27.0 / 24389.0);

        for luminance in [0.001, 0.005, 0.0088, 0.01, 0.2, 0.5, 0.9] {
            let lightness = luminance_to_lightness(luminance);
            assert_close_enough!(lightness_to_luminance(lightness), luminance);
        }
    }
}
