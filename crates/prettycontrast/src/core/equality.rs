use crate::Float;

/// Test macro for asserting the approximate equality of floating point
/// numbers.
///
/// With two arguments, the macro uses a tolerance of `1e-9`. With three
/// arguments, the third argument is the tolerance.
///
/// # Panics
///
/// This macro panics if the two numbers differ by more than the tolerance. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        $crate::assert_close_enough!($f1, $f2, 1e-9)
    };
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {{
        let (f1, f2, tolerance): ($crate::Float, $crate::Float, $crate::Float) =
            ($f1, $f2, $tolerance);
        assert!(
            $crate::close_enough(f1, f2, tolerance),
            "quantities differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    }};
}

/// Test macro for asserting that two 24-bit colors differ by at most the given
/// amount per channel.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_same_rgb {
    ($c1:expr, $c2:expr, $tolerance:expr $(,)?) => {{
        let (c1, c2): ($crate::Rgb, $crate::Rgb) = ($c1, $c2);
        let tolerance: u8 = $tolerance;
        assert!(
            c1.r.abs_diff(c2.r) <= tolerance
                && c1.g.abs_diff(c2.g) <= tolerance
                && c1.b.abs_diff(c2.b) <= tolerance,
            "colors differ by more than {} per channel:\n{:?}\n{:?}",
            tolerance,
            c1,
            c2
        );
    }};
}

/// Determine whether two floating point numbers are within the given tolerance
/// of each other. Two not-a-numbers are considered close enough.
///
/// This function is only public because the [`assert_close_enough`] test
/// macro uses it.
#[doc(hidden)]
#[inline]
pub fn close_enough(f1: Float, f2: Float, tolerance: Float) -> bool {
    (f1.is_nan() && f2.is_nan()) || (f1 - f2).abs() <= tolerance
}
