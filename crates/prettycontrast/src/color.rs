//! The color value records.
//!
//! All records are small, immutable values that are passed by value and
//! carry no identity beyond value equality. Only [`Rgb`] has integral
//! coordinates; all others use [`Float`](crate::Float).

use crate::core::normalize_hue;
use crate::error::ColorError;
use crate::Float;

/// A 24-bit sRGB color with optional alpha.
///
/// Since channels are bytes, they always are in range `0..=255`. The alpha
/// channel, if present, uses the same range and is carried along by all
/// conversions that start with an `Rgb`, but is ignored when computing
/// luminance, contrast, or color difference.
///
/// `Rgb` parses from hexadecimal notation with [`Rgb as
/// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb) and formats as uppercase
/// `#RRGGBB` with [`Rgb as Display`](struct.Rgb.html#impl-Display-for-Rgb).
/// ```
/// # use prettycontrast::Rgb;
/// # use prettycontrast::error::ColorError;
/// # fn main() -> Result<(), ColorError> {
/// let sand: Rgb = "#eedcad".parse()?;
/// assert_eq!(sand, Rgb::new(0xee, 0xdc, 0xad));
/// assert_eq!(format!("{}", sand), "#EEDCAD");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alpha: Option<u8>,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new opaque color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Create a new gray with the given level.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Update this color with the given alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Get the three color coordinates without alpha.
    pub const fn coordinates(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Determine whether this color is gray, i.e., has three equal channels.
    pub const fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Calculate the Euclidian distance between the two colors in RGB.
    ///
    /// The distance ignores alpha and ranges from 0 to about 441.67.
    pub fn euclidean_distance(&self, other: &Rgb) -> Float {
        let dr = self.r as Float - other.r as Float;
        let dg = self.g as Float - other.g as Float;
        let db = self.b as Float - other.b as Float;

        dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt()
    }

    /// Get the floating point coordinates in unit range.
    pub(crate) fn to_unit(self) -> [Float; 3] {
        crate::core::from_24bit(self.r, self.g, self.b)
    }

    /// Create a new color from floating point coordinates in unit range,
    /// taking alpha from the given color.
    pub(crate) fn from_unit(coordinates: &[Float; 3], alpha: Option<u8>) -> Self {
        let [r, g, b] = crate::core::to_24bit(coordinates);
        Self { r, g, b, alpha }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.coordinates()
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    /// Parse a hexadecimal color. See [`hex_to_rgb`](crate::hex_to_rgb).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::hex_to_rgb(s)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in HSL.
///
/// The hue is in degrees `0..360`, whereas saturation and lightness are
/// percentages `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

impl Hsl {
    /// Create a new HSL color. The hue wraps around modulo 360.
    pub fn new(h: Float, s: Float, l: Float) -> Self {
        Self {
            h: normalize_hue(h),
            s,
            l,
        }
    }
}

/// A color in CIELAB with the D65 white point.
///
/// The lightness L ranges `0..=100`, whereas a and b in practice range
/// `-128..=127`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

impl Lab {
    /// Create a new CIELAB color.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }
}

/// A color in CIELCh, the polar form of CIELAB.
///
/// The lightness L ranges `0..=100`, the chroma C is non-negative, and the hue
/// h is in degrees `0..360`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

impl Lch {
    /// Create a new CIELCh color. The hue wraps around modulo 360.
    pub fn new(l: Float, c: Float, h: Float) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }
}

/// A color in XYZ with the D65 white point, scaled to `0..=100`.
///
/// XYZ only serves as intermediate between RGB and CIELAB.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Xyz {
    /// Create a new XYZ color.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Any of the supported color representations.
///
/// [`to_rgb`](crate::convert::to_rgb) converts all of them to [`Rgb`]. The
/// hexadecimal variant is validated only at that point. `AnyColor` also parses
/// from strings, recognizing hashed hexadecimal notation as well as the
/// `rgb()`, `hsl()`, `lab()`, and `lch()` functions:
/// ```
/// # use prettycontrast::{AnyColor, Hsl};
/// # use prettycontrast::convert::to_rgb;
/// # use prettycontrast::error::ColorError;
/// # fn main() -> Result<(), ColorError> {
/// let color: AnyColor = "hsl(120, 100%, 25%)".parse()?;
/// assert_eq!(color, AnyColor::Hsl(Hsl::new(120.0, 100.0, 25.0)));
/// assert_eq!(to_rgb(&color)?.to_string(), "#008000");
///
/// assert!("cmyk(0 0 0 0)".parse::<AnyColor>().is_err());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyColor {
    Rgb(Rgb),
    Hsl(Hsl),
    Lab(Lab),
    Lch(Lch),
    Hex(String),
}

impl std::str::FromStr for AnyColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parse(s)
    }
}

impl From<Rgb> for AnyColor {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsl> for AnyColor {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Lab> for AnyColor {
    fn from(value: Lab) -> Self {
        Self::Lab(value)
    }
}

impl From<Lch> for AnyColor {
    fn from(value: Lch) -> Self {
        Self::Lch(value)
    }
}

#[cfg(test)]
mod test {
    use super::{Hsl, Lch, Rgb};
    use crate::assert_close_enough;

    #[test]
    fn test_rgb() {
        let color = Rgb::new(1, 2, 3);
        assert_eq!(color.alpha, None);
        assert_eq!(color.with_alpha(128).alpha, Some(128));
        assert_eq!(color.coordinates(), [1, 2, 3]);
        assert_eq!(<[u8; 3]>::from(color), [1, 2, 3]);
        assert_eq!(Rgb::from([1, 2, 3]), color);
        assert!(Rgb::gray(42).is_gray());
        assert!(!color.is_gray());

        assert_eq!(format!("{}", Rgb::new(0xb6, 0xeb, 0xd4)), "#B6EBD4");
        assert_eq!("#b6ebd4".parse::<Rgb>(), Ok(Rgb::new(0xb6, 0xeb, 0xd4)));
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(Rgb::BLACK.euclidean_distance(&Rgb::BLACK), 0.0);
        assert_close_enough!(Rgb::new(0, 0, 0).euclidean_distance(&Rgb::new(3, 4, 0)), 5.0);
        assert_close_enough!(
            Rgb::BLACK.euclidean_distance(&Rgb::WHITE),
            (3.0 as crate::Float).sqrt() * 255.0
        );
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Hsl::new(-120.0, 50.0, 50.0).h, 240.0);
        assert_eq!(Lch::new(50.0, 30.0, 400.0).h, 40.0);
    }
}
