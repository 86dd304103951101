//! Conversion between color representations.
//!
//! This module converts between [`Rgb`], [`Hsl`], [`Xyz`], [`Lab`], and
//! [`Lch`]. Conversions to CIELAB and CIELCh go through XYZ with the D65
//! white point. Conversions back to [`Rgb`] round and clamp each channel,
//! so they may be lossy for out-of-gamut colors.
//!
//! It also provides the usual color adjustments, i.e., [`lighten`],
//! [`darken`], [`saturate`], [`desaturate`], and [`rotate_hue`]. Each of them
//! round-trips through HSL and preserves alpha.

use crate::core::{
    clamp, hex_to_rgb, hsl_to_srgb, normalize_hue, srgb_to_hsl, srgb_to_xyz, xyz_to_srgb,
};
use crate::error::ColorError;
use crate::{AnyColor, Float, Hsl, Lab, Lch, Rgb, Xyz};

/// Convert RGB to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [h, s, l] = srgb_to_hsl(&rgb.to_unit());
    Hsl { h, s, l }
}

/// Convert HSL to RGB. The resulting color is opaque.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    Rgb::from_unit(&hsl_to_srgb(&[hsl.h, hsl.s, hsl.l]), None)
}

/// Convert RGB to XYZ.
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let [x, y, z] = srgb_to_xyz(&rgb.to_unit());
    Xyz { x, y, z }
}

/// Convert XYZ to RGB, clamping out-of-gamut coordinates.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    Rgb::from_unit(&xyz_to_srgb(&[xyz.x, xyz.y, xyz.z]), None)
}

/// Convert XYZ to CIELAB.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let [l, a, b] = crate::core::xyz_to_lab(&[xyz.x, xyz.y, xyz.z]);
    Lab { l, a, b }
}

/// Convert CIELAB to XYZ.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let [x, y, z] = crate::core::lab_to_xyz(&[lab.l, lab.a, lab.b]);
    Xyz { x, y, z }
}

/// Convert RGB to CIELAB.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Convert CIELAB to RGB, clamping out-of-gamut coordinates.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// Convert CIELAB to CIELCh.
pub fn lab_to_lch(lab: Lab) -> Lch {
    let [l, c, h] = crate::core::lab_to_lch(&[lab.l, lab.a, lab.b]);
    Lch { l, c, h }
}

/// Convert CIELCh to CIELAB.
pub fn lch_to_lab(lch: Lch) -> Lab {
    let [l, a, b] = crate::core::lch_to_lab(&[lch.l, lch.c, lch.h]);
    Lab { l, a, b }
}

/// Convert RGB to CIELCh.
pub fn rgb_to_lch(rgb: Rgb) -> Lch {
    lab_to_lch(rgb_to_lab(rgb))
}

/// Convert CIELCh to RGB, clamping out-of-gamut coordinates.
pub fn lch_to_rgb(lch: Lch) -> Rgb {
    lab_to_rgb(lch_to_lab(lch))
}

/// Convert any color to RGB.
///
/// # Errors
///
/// This function fails if the color is a malformed hexadecimal string. All
/// other variants convert unconditionally.
pub fn to_rgb(color: &AnyColor) -> Result<Rgb, ColorError> {
    match color {
        AnyColor::Rgb(rgb) => Ok(*rgb),
        AnyColor::Hsl(hsl) => Ok(hsl_to_rgb(*hsl)),
        AnyColor::Lab(lab) => Ok(lab_to_rgb(*lab)),
        AnyColor::Lch(lch) => Ok(lch_to_rgb(*lch)),
        AnyColor::Hex(hex) => hex_to_rgb(hex),
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Adjust the color in HSL, preserving alpha.
#[inline]
fn adjust_hsl<F: FnOnce(Hsl) -> Hsl>(rgb: Rgb, adjust: F) -> Rgb {
    let hsl = adjust(rgb_to_hsl(rgb));
    Rgb {
        alpha: rgb.alpha,
        ..hsl_to_rgb(hsl)
    }
}

/// Lighten the color by adding the given percentage to its HSL lightness.
#[must_use = "function returns a new color"]
pub fn lighten(rgb: Rgb, amount: Float) -> Rgb {
    adjust_hsl(rgb, |hsl| Hsl {
        l: clamp(hsl.l + amount, 0.0, 100.0),
        ..hsl
    })
}

/// Darken the color by subtracting the given percentage from its HSL
/// lightness.
#[must_use = "function returns a new color"]
pub fn darken(rgb: Rgb, amount: Float) -> Rgb {
    lighten(rgb, -amount)
}

/// Saturate the color by adding the given percentage to its HSL saturation.
#[must_use = "function returns a new color"]
pub fn saturate(rgb: Rgb, amount: Float) -> Rgb {
    adjust_hsl(rgb, |hsl| Hsl {
        s: clamp(hsl.s + amount, 0.0, 100.0),
        ..hsl
    })
}

/// Desaturate the color by subtracting the given percentage from its HSL
/// saturation.
#[must_use = "function returns a new color"]
pub fn desaturate(rgb: Rgb, amount: Float) -> Rgb {
    saturate(rgb, -amount)
}

/// Rotate the color's HSL hue by the given degrees.
#[must_use = "function returns a new color"]
pub fn rotate_hue(rgb: Rgb, degrees: Float) -> Rgb {
    adjust_hsl(rgb, |hsl| Hsl {
        h: normalize_hue(hsl.h + degrees),
        ..hsl
    })
}

/// Replace the CIELCh lightness of the color, preserving chroma, hue, and
/// alpha.
pub(crate) fn with_lch_lightness(rgb: Rgb, lightness: Float) -> Rgb {
    let lch = rgb_to_lch(rgb);
    Rgb {
        alpha: rgb.alpha,
        ..lch_to_rgb(Lch { l: lightness, ..lch })
    }
}

/// Replace the CIELCh chroma of the color, preserving lightness, hue, and
/// alpha.
pub(crate) fn with_lch_chroma(rgb: Rgb, chroma: Float) -> Rgb {
    let lch = rgb_to_lch(rgb);
    Rgb {
        alpha: rgb.alpha,
        ..lch_to_rgb(Lch { c: chroma, ..lch })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_close_enough, assert_same_rgb};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_colors(count: usize) -> Vec<Rgb> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        (0..count)
            .map(|_| Rgb::new(rng.random(), rng.random(), rng.random()))
            .collect()
    }

    #[test]
    fn test_hsl() {
        let hsl = rgb_to_hsl(Rgb::new(0xff, 0x88, 0x00));
        assert_close_enough!(hsl.h, 32.0, 0.01);
        assert_close_enough!(hsl.s, 100.0);
        assert_close_enough!(hsl.l, 50.0);

        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(42.0, 0.0, 100.0)), Rgb::WHITE);
    }

    #[test]
    fn test_hsl_round_trip() {
        for color in random_colors(500) {
            assert_same_rgb!(hsl_to_rgb(rgb_to_hsl(color)), color, 1);
        }
    }

    #[test]
    fn test_lab() {
        let lab = rgb_to_lab(Rgb::BLACK);
        assert_close_enough!(lab.l, 0.0);
        assert_close_enough!(lab.a, 0.0);
        assert_close_enough!(lab.b, 0.0);

        let lab = rgb_to_lab(Rgb::WHITE);
        assert_close_enough!(lab.l, 100.0, 1e-6);
        assert_close_enough!(lab.a, 0.0, 0.05);
        assert_close_enough!(lab.b, 0.0, 0.05);

        let lab = rgb_to_lab(Rgb::new(0, 0, 255));
        assert_close_enough!(lab.l, 32.30, 0.05);
        assert_close_enough!(lab.a, 79.19, 0.5);
        assert_close_enough!(lab.b, -107.86, 0.5);
    }

    #[test]
    fn test_lab_round_trip() {
        for color in random_colors(500) {
            assert_same_rgb!(lab_to_rgb(rgb_to_lab(color)), color, 1);
            assert_same_rgb!(lch_to_rgb(rgb_to_lch(color)), color, 1);
        }
    }

    #[test]
    fn test_lch() {
        let lch = rgb_to_lch(Rgb::gray(128));
        assert!(lch.c < 0.05, "gray should have (almost) no chroma");
        assert!((0.0..360.0).contains(&lch.h));

        let lch = rgb_to_lch(Rgb::new(0, 0, 255));
        assert_close_enough!(lch.c, 133.8, 0.5);
        assert_close_enough!(lch.h, 306.3, 0.5);
    }

    #[test]
    fn test_to_rgb() -> Result<(), ColorError> {
        let expected = Rgb::new(0xff, 0x88, 0x00);
        assert_eq!(to_rgb(&AnyColor::Rgb(expected))?, expected);
        assert_eq!(to_rgb(&AnyColor::Hex("#f80".to_string()))?, expected);
        assert_eq!(to_rgb(&"rgb(255 136 0)".parse()?)?, expected);
        assert_same_rgb!(to_rgb(&AnyColor::Hsl(rgb_to_hsl(expected)))?, expected, 1);
        assert_same_rgb!(to_rgb(&AnyColor::Lab(rgb_to_lab(expected)))?, expected, 1);
        assert_same_rgb!(to_rgb(&AnyColor::Lch(rgb_to_lch(expected)))?, expected, 1);

        assert!(to_rgb(&AnyColor::Hex("#ff88".to_string()))
            .is_err_and(|e| e.is_invalid_color()));
        Ok(())
    }

    #[test]
    fn test_adjustments() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(lighten(red, 25.0), Rgb::new(255, 128, 128));
        assert_eq!(darken(red, 25.0), Rgb::new(128, 0, 0));
        assert_eq!(lighten(red, 80.0), Rgb::WHITE);
        assert_eq!(darken(red, 80.0), Rgb::BLACK);
        assert_eq!(desaturate(red, 100.0), Rgb::gray(128));
        assert_eq!(saturate(red, 10.0), red);
        assert_eq!(rotate_hue(red, 120.0), Rgb::new(0, 255, 0));
        assert_eq!(rotate_hue(red, -120.0), Rgb::new(0, 0, 255));
        assert_eq!(rotate_hue(red, 360.0), red);

        let translucent = red.with_alpha(0x80);
        assert_eq!(lighten(translucent, 10.0).alpha, Some(0x80));
        assert_eq!(rotate_hue(translucent, 10.0).alpha, Some(0x80));
        assert_eq!(with_lch_lightness(translucent, 10.0).alpha, Some(0x80));
    }
}
