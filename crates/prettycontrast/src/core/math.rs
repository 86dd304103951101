use crate::Float;

/// Clamp the value to the range `min..=max`.
///
/// Unlike [`Float::clamp`], this function does not panic when `max < min`; it
/// returns `max` instead. A not-a-number value becomes `min`.
#[inline]
pub fn clamp(value: Float, min: Float, max: Float) -> Float {
    value.max(min).min(max)
}

/// Round the value to the given number of decimals.
///
/// Halfway cases round away from zero, since the value is scaled by a power
/// of ten and then rounded with [`Float::round`].
#[inline]
pub fn round_to(value: Float, decimals: u32) -> Float {
    let factor = (10.0 as Float).powi(decimals as i32);
    (value * factor).round() / factor
}

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: Float) -> Float {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn to_degrees(radians: Float) -> Float {
    radians.to_degrees()
}

/// Normalize the hue to `0..360`.
#[inline]
pub fn normalize_hue(hue: Float) -> Float {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid() may return 360.0 for tiny negative hues.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Linearly interpolate between the two values.
#[inline]
pub(crate) fn lerp(from: Float, to: Float, fraction: Float) -> Float {
    (to - from).mul_add(fraction, from)
}

#[cfg(test)]
mod test {
    use super::{clamp, lerp, normalize_hue, round_to};
    use crate::assert_close_enough;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert_eq!(clamp(300.0, 0.0, 255.0), 255.0);
        assert_eq!(clamp(crate::Float::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.478, 2), 4.48);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(-61.25, 1), -61.3);
        assert_eq!(round_to(0.123_456, 4), 0.1235);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert!(normalize_hue(-1e-20) < 360.0);
    }

    #[test]
    fn test_lerp() {
        assert_close_enough!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_close_enough!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_close_enough!(lerp(10.0, 20.0, 0.25), 12.5);
    }
}
