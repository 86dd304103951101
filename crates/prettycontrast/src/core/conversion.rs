use super::math::{clamp, multiply, normalize_hue};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates are in-gamut sRGB coordinates,
/// i.e., that they range `0..=1`. Even if that is not the case, the
/// conversion clamps each coordinate independently to `0x00..=0xff`.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        clamp((value * 255.0).round(), 0.0, 255.0) as u8
    }

    [
        convert(coordinates[0]),
        convert(coordinates[1]),
        convert(coordinates[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-corrected sRGB coordinate in unit range to linear light.
#[inline]
pub fn srgb_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Convert a linear light coordinate in unit range to gamma-corrected sRGB.
#[inline]
pub fn linear_to_srgb(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.0031308 {
        value * 12.92
    } else {
        magnitude
            .powf(1.0 / 2.4)
            .mul_add(1.055, -0.055)
            .copysign(value)
    }
}

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
#[inline]
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        srgb_to_linear(value[0]),
        srgb_to_linear(value[1]),
        srgb_to_linear(value[2]),
    ]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
#[inline]
pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        linear_to_srgb(value[0]),
        linear_to_srgb(value[1]),
        linear_to_srgb(value[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for sRGB in unit range to XYZ in `0..=100` range. This
/// is a two-hop conversion.
pub(crate) fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &rgb_to_linear_rgb(value));
    [100.0 * x, 100.0 * y, 100.0 * z]
}

/// Convert coordinates for XYZ in `0..=100` range to sRGB in unit range. This
/// is a two-hop conversion. The result may be out of gamut.
pub(crate) fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let scaled = [value[0] / 100.0, value[1] / 100.0, value[2] / 100.0];
    linear_rgb_to_rgb(&multiply(&XYZ_TO_LINEAR_SRGB, &scaled))
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65 reference white in XYZ with `0..=100` range.
pub(crate) const D65_WHITE: [Float; 3] = [95.047, 100.0, 108.883];

const EPSILON: Float = 0.008856;
const KAPPA: Float = 7.787;
const OFFSET: Float = 16.0 / 116.0;

/// Convert coordinates for XYZ to CIELAB. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, OFFSET)
        }
    }

    let [Xn, Yn, Zn] = D65_WHITE;
    let fx = f(value[0] / Xn);
    let fy = f(value[1] / Yn);
    let fz = f(value[2] / Zn);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert coordinates for CIELAB to XYZ. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f_inv(t: Float) -> Float {
        let cubed = t * t * t;
        if cubed > EPSILON {
            cubed
        } else {
            (t - OFFSET) / KAPPA
        }
    }

    let [L, a, b] = *value;
    let fy = (L + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let [Xn, Yn, Zn] = D65_WHITE;
    [Xn * f_inv(fx), Yn * f_inv(fy), Zn * f_inv(fz)]
}

// --------------------------------------------------------------------------------------------------------------------

const ACHROMATIC_EPSILON: Float = 1e-9;

/// Convert coordinates for CIELAB to CIELCh. This is a one-hop, direct
/// conversion. Achromatic colors have hue 0.
#[allow(non_snake_case)]
pub(crate) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let C = a.hypot(b);
    if C < ACHROMATIC_EPSILON {
        return [L, 0.0, 0.0];
    }

    [L, C, normalize_hue(b.atan2(a).to_degrees())]
}

/// Convert coordinates for CIELCh to CIELAB. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
pub(crate) fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;
    let hue_radian = h.to_radians();
    [L, C * hue_radian.cos(), C * hue_radian.sin()]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB in unit range to HSL with hue in degrees and
/// saturation as well as lightness in percent.
pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    let delta = max - min;
    if delta == 0.0 {
        return [0.0, 0.0, 100.0 * lightness];
    }

    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [normalize_hue(60.0 * sector), 100.0 * saturation, 100.0 * lightness]
}

/// Convert coordinates for HSL with hue in degrees and saturation as well as
/// lightness in percent to sRGB in unit range.
pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn hue_to_rgb(p: Float, q: Float, t: Float) -> Float {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            (q - p).mul_add(6.0 * t, p)
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
        } else {
            p
        }
    }

    let h = normalize_hue(value[0]) / 360.0;
    let s = clamp(value[1], 0.0, 100.0) / 100.0;
    let l = clamp(value[2], 0.0, 100.0) / 100.0;

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_gamma() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert_close_enough!(srgb_to_linear(1.0), 1.0);
        assert_close_enough!(srgb_to_linear(0.04), 0.04 / 12.92);
        assert_close_enough!(linear_to_srgb(0.002), 0.002 * 12.92);

        for index in 0..=255_u8 {
            let value = index as Float / 255.0;
            assert_close_enough!(linear_to_srgb(srgb_to_linear(value)), value);
        }
    }

    #[test]
    fn test_24bit() {
        assert_eq!(from_24bit(0, 128, 255), [0.0, 128.0 / 255.0, 1.0]);
        assert_eq!(to_24bit(&[-0.5, 0.5, 1.5]), [0, 128, 255]);
    }

    #[test]
    fn test_xyz_lab() {
        let white = srgb_to_xyz(&[1.0, 1.0, 1.0]);
        assert_close_enough!(white[1], 100.0, 1e-6);

        let [l, a, b] = xyz_to_lab(&white);
        assert_close_enough!(l, 100.0, 1e-6);
        assert_close_enough!(a, 0.0, 0.05);
        assert_close_enough!(b, 0.0, 0.05);

        let [l, a, b] = xyz_to_lab(&srgb_to_xyz(&[1.0, 0.0, 0.0]));
        assert_close_enough!(l, 53.24, 0.05);
        assert_close_enough!(a, 80.09, 0.5);
        assert_close_enough!(b, 67.20, 0.5);

        let lab = [42.0, -13.5, 27.25];
        let [l, a, b] = xyz_to_lab(&lab_to_xyz(&lab));
        assert_close_enough!(l, lab[0], 1e-9);
        assert_close_enough!(a, lab[1], 1e-9);
        assert_close_enough!(b, lab[2], 1e-9);
    }

    #[test]
    fn test_lch() {
        assert_eq!(lab_to_lch(&[50.0, 0.0, 0.0]), [50.0, 0.0, 0.0]);

        let [l, c, h] = lab_to_lch(&[50.0, 0.0, -20.0]);
        assert_close_enough!(l, 50.0);
        assert_close_enough!(c, 20.0);
        assert_close_enough!(h, 270.0);

        let [l, a, b] = lch_to_lab(&[l, c, h]);
        assert_close_enough!(l, 50.0);
        assert_close_enough!(a, 0.0);
        assert_close_enough!(b, -20.0);
    }

    #[test]
    fn test_hsl() {
        assert_eq!(srgb_to_hsl(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(srgb_to_hsl(&[1.0, 1.0, 1.0]), [0.0, 0.0, 100.0]);

        let [h, s, l] = srgb_to_hsl(&[1.0, 0.0, 0.0]);
        assert_close_enough!(h, 0.0);
        assert_close_enough!(s, 100.0);
        assert_close_enough!(l, 50.0);

        let [h, s, l] = srgb_to_hsl(&[0.0, 0.0, 1.0]);
        assert_close_enough!(h, 240.0);
        assert_close_enough!(s, 100.0);
        assert_close_enough!(l, 50.0);

        let [r, g, b] = hsl_to_srgb(&[120.0, 100.0, 25.0]);
        assert_close_enough!(r, 0.0);
        assert_close_enough!(g, 0.5);
        assert_close_enough!(b, 0.0);

        let [r, g, b] = hsl_to_srgb(&[300.0, 50.0, 75.0]);
        assert_close_enough!(r, 0.875);
        assert_close_enough!(g, 0.625);
        assert_close_enough!(b, 0.875);
    }
}
