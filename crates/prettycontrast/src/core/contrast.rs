use super::conversion::rgb_to_linear_rgb;
use crate::Float;

/// The coefficients for computing WCAG 2.1 relative luminance.
const WCAG_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The coefficients for computing the contrast luminance for sRGB
/// coordinates.
const SRGB_CONTRAST: &[Float; 3] = &[0.2126729, 0.7151522, 0.0721750];

fn to_luminance(coefficients: &[Float; 3], coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *coefficients;
    let [r, g, b] = rgb_to_linear_rgb(coordinates);

    r.mul_add(c1, g.mul_add(c2, b * c3))
}

/// Compute the WCAG relative luminance for the given sRGB coordinates.
pub(crate) fn to_relative_luminance(coordinates: &[Float; 3]) -> Float {
    to_luminance(WCAG_LUMINANCE, coordinates)
}

/// Compute the contrast luminance for the given sRGB coordinates.
///
/// Said contrast luminance is a non-standard quantity used by APCA only. It
/// differs from WCAG's relative luminance in the coefficients and must not be
/// used for computing WCAG contrast ratios.
pub(crate) fn to_contrast_luminance(coordinates: &[Float; 3]) -> Float {
    to_luminance(SRGB_CONTRAST, coordinates)
}

/// Compute the WCAG contrast ratio between two relative luminance values.
///
/// The ratio is symmetric, i.e., the order of the two arguments does not
/// matter. It is not rounded.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (lighter + 0.05) / (darker + 0.05)
}

const BLACK_THRESHOLD: Float = 0.022;
const BLACK_EXPONENT: Float = 1.414;
const INPUT_CLAMP: Float = 0.0005;
const SCALE: Float = 1.14;
const OFFSET: Float = 0.027;
const OUTPUT_CLAMP: Float = 0.1;

/// Compute the perceptual contrast between text and background.
///
/// Using an algorithm that is surprisingly similar to the [Accessible
/// Perceptual Contrast Algorithm](https://github.com/Myndex/apca-w3),
/// version 0.0.98G-4g, this function computes the perceptual contrast
/// between the given contrast luminance for foreground and background. The
/// result is neither scaled by 100 nor rounded.
///
/// The arguments to this function are *not* interchangeable. The first
/// argument must be the contrast luminance for the foreground, i.e., text,
/// and the second argument must be the contrast luminance for the
/// background.
pub(crate) fn to_contrast(text_luminance: Float, background_luminance: Float) -> Float {
    // Also see https://github.com/w3c/silver/issues/645

    // Make sure the luminance values are legit
    if text_luminance.is_nan()
        || !(0.0..=1.1).contains(&text_luminance)
        || background_luminance.is_nan()
        || !(0.0..=1.1).contains(&background_luminance)
    {
        return 0.0;
    }

    // Soft clip black
    let soft_clip = |luminance: Float| {
        if luminance < BLACK_THRESHOLD {
            luminance + (BLACK_THRESHOLD - luminance).powf(BLACK_EXPONENT)
        } else {
            luminance
        }
    };
    let text_luminance = soft_clip(text_luminance);
    let background_luminance = soft_clip(background_luminance);

    // Clamp small ΔY to zero
    if (text_luminance - background_luminance).abs() < INPUT_CLAMP {
        return 0.0;
    };

    // Compute Lc (lightness contrast)
    if text_luminance < background_luminance {
        // Dark text on light background
        let contrast = SCALE * (background_luminance.powf(0.56) - text_luminance.powf(0.57));

        if contrast < OUTPUT_CLAMP {
            0.0
        } else {
            contrast - OFFSET
        }
    } else {
        // Light text on dark background
        let contrast = SCALE * (background_luminance.powf(0.65) - text_luminance.powf(0.62));

        if -OUTPUT_CLAMP < contrast {
            0.0
        } else {
            contrast + OFFSET
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_luminance() {
        assert_eq!(to_relative_luminance(&[0.0, 0.0, 0.0]), 0.0);
        assert_close_enough!(to_relative_luminance(&[1.0, 1.0, 1.0]), 1.0);
        assert_close_enough!(to_relative_luminance(&[1.0, 0.0, 0.0]), 0.2126);
        assert_close_enough!(to_contrast_luminance(&[0.0, 1.0, 0.0]), 0.7151522);
        assert_close_enough!(to_contrast_luminance(&[1.0, 1.0, 1.0]), 1.0000001, 1e-6);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_close_enough!(to_contrast_ratio(0.0, 1.0), 21.0);
        assert_close_enough!(to_contrast_ratio(1.0, 0.0), 21.0);
        assert_close_enough!(to_contrast_ratio(0.5, 0.5), 1.0);
    }

    #[test]
    fn test_contrast() {
        // Black text on white background and vice versa
        assert_close_enough!(to_contrast(0.0, 1.0), 1.0604, 1e-3);
        assert_close_enough!(to_contrast(1.0, 0.0), -1.0788, 1e-3);

        // Near-equal luminance and low contrast both collapse to zero
        assert_eq!(to_contrast(0.5, 0.5002), 0.0);
        assert_eq!(to_contrast(0.5, 0.55), 0.0);
        assert_eq!(to_contrast(0.55, 0.5), 0.0);

        // Out-of-range luminance is rejected
        assert_eq!(to_contrast(-0.1, 1.0), 0.0);
        assert_eq!(to_contrast(0.0, Float::NAN), 0.0);
    }
}
