use super::math::clamp;
use crate::error::ColorError;
use crate::{AnyColor, Float, Hsl, Lab, Lch, Rgb};

/// Parse a 24-bit color in hexadecimal format.
///
/// This function accepts three and six hexadecimal digits, optionally
/// prefixed by `#`, and ignores the case of the digits. With three digits,
/// each digit is duplicated, i.e., `#f80` is the same as `#ff8800`.
///
/// # Errors
///
/// This function fails with [`ColorError::UnexpectedLength`] if the string
/// does not have three or six digits and with [`ColorError::MalformedHex`] if
/// a digit is not hexadecimal.
///
/// # Example
///
/// ```
/// # use prettycontrast::{hex_to_rgb, Rgb};
/// # use prettycontrast::error::ColorError;
/// # fn main() -> Result<(), ColorError> {
/// assert_eq!(hex_to_rgb("#f80")?, Rgb::new(0xff, 0x88, 0x00));
/// assert_eq!(hex_to_rgb("3178EA")?, Rgb::new(0x31, 0x78, 0xea));
/// assert!(hex_to_rgb("#3178e").is_err());
/// # Ok(())
/// # }
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let length = digits.chars().count();
    if length != 3 && length != 6 {
        return Err(ColorError::UnexpectedLength {
            input: hex.to_string(),
            length,
        });
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::MalformedHex {
            input: hex.to_string(),
        });
    }

    // Digits are ASCII, so byte offsets are character offsets.
    fn parse_coordinate(hex: &str, digits: &str, index: usize) -> Result<u8, ColorError> {
        let factor = digits.len() / 3;
        let n = digits
            .get(factor * index..factor * (index + 1))
            .and_then(|t| u8::from_str_radix(t, 16).ok())
            .ok_or_else(|| ColorError::MalformedHex {
                input: hex.to_string(),
            })?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    Ok(Rgb::new(
        parse_coordinate(hex, digits, 0)?,
        parse_coordinate(hex, digits, 1)?,
        parse_coordinate(hex, digits, 2)?,
    ))
}

/// Format the 24-bit color in uppercase `#RRGGBB` notation.
///
/// Since channels are bytes, they always are in range `0..=255`. The alpha
/// channel is not included.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in hashed hexadecimal or functional notation.
///
/// This function recognizes `#` followed by hexadecimal digits as well as the
/// `rgb()`, `hsl()`, `lab()`, and `lch()` functions with space or comma
/// separated coordinates. A trailing `%` on a coordinate is ignored. Before
/// parsing, this function trims leading and trailing white space and converts
/// ASCII letters to lowercase. Hexadecimal colors are validated only when they
/// are converted to RGB.
pub(crate) fn parse(s: &str) -> Result<AnyColor, ColorError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        return Ok(AnyColor::Hex(s.to_string()));
    }

    #[derive(Clone, Copy)]
    enum Shape {
        Rgb,
        Hsl,
        Lab,
        Lch,
    }

    // Munge function name
    let (shape, rest) = [
        ("rgb", Shape::Rgb),
        ("hsl", Shape::Hsl),
        ("lab", Shape::Lab),
        ("lch", Shape::Lch),
    ]
    .iter()
    .find_map(|(prefix, shape)| s.strip_prefix(*prefix).map(|r| (*shape, r)))
    .ok_or_else(|| ColorError::UnknownFormat {
        input: s.to_string(),
    })?;

    // Munge parentheses after trimming leading whitespace
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or_else(|| ColorError::UnknownFormat {
            input: s.to_string(),
        })?
        .strip_suffix(')')
        .ok_or_else(|| ColorError::MissingCoordinate {
            input: s.to_string(),
        })?;

    let parse_coordinate = |t: Option<&str>| -> Result<Float, ColorError> {
        let t = t.ok_or_else(|| ColorError::MissingCoordinate {
            input: s.to_string(),
        })?;
        t.strip_suffix('%')
            .unwrap_or(t)
            .parse()
            .map_err(|_| ColorError::MalformedFloat {
                input: s.to_string(),
            })
    };

    // Munge coordinates. The filter eats repeated separators.
    let mut iter = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorError::TooManyCoordinates {
            input: s.to_string(),
        });
    }

    #[inline]
    fn to_channel(value: Float) -> u8 {
        clamp(value.round(), 0.0, 255.0) as u8
    }

    Ok(match shape {
        Shape::Rgb => AnyColor::Rgb(Rgb::new(to_channel(c1), to_channel(c2), to_channel(c3))),
        Shape::Hsl => AnyColor::Hsl(Hsl::new(c1, c2, c3)),
        Shape::Lab => AnyColor::Lab(Lab::new(c1, c2, c3)),
        Shape::Lch => AnyColor::Lch(Lch::new(c1, c2, c3)),
    })
}

#[cfg(test)]
mod test {
    use super::{hex_to_rgb, parse, rgb_to_hex};
    use crate::error::ColorError;
    use crate::{AnyColor, Hsl, Lab, Lch, Rgb};

    #[test]
    fn test_hex_to_rgb() -> Result<(), ColorError> {
        assert_eq!(hex_to_rgb("#000")?, Rgb::new(0, 0, 0));
        assert_eq!(hex_to_rgb("fff")?, Rgb::new(255, 255, 255));
        assert_eq!(hex_to_rgb("#AbC")?, Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(hex_to_rgb("#777777")?, Rgb::new(119, 119, 119));
        assert_eq!(hex_to_rgb("B6EBD4")?, Rgb::new(0xb6, 0xeb, 0xd4));
        Ok(())
    }

    #[test]
    fn test_hex_errors() {
        for (input, length) in [("", 0), ("#", 0), ("#00", 2), ("#0000", 4), ("#1234567", 7)] {
            assert_eq!(
                hex_to_rgb(input),
                Err(ColorError::UnexpectedLength {
                    input: input.to_string(),
                    length
                })
            );
        }

        for input in ["#efg", "#12345z", "+ff", "#💩00", " #fff"] {
            let result = hex_to_rgb(input);
            assert!(
                result.as_ref().is_err_and(ColorError::is_invalid_color),
                "{:?} should be invalid but is {:?}",
                input,
                result
            );
        }
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(rgb_to_hex(Rgb::new(0xee, 0xdc, 0xad)), "#EEDCAD");
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 3).with_alpha(4)), "#010203");

        for value in [0_u8, 1, 15, 16, 127, 128, 254, 255] {
            let rgb = Rgb::new(value, 255 - value, value / 2);
            assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), Ok(rgb));
        }
    }

    #[test]
    fn test_parse() -> Result<(), ColorError> {
        assert_eq!(parse(" #ABC ")?, AnyColor::Hex("#abc".to_string()));
        assert_eq!(parse("rgb(255, 128, 0)")?, AnyColor::Rgb(Rgb::new(255, 128, 0)));
        assert_eq!(parse("RGB(300 -4 7.6)")?, AnyColor::Rgb(Rgb::new(255, 0, 8)));
        assert_eq!(parse("hsl(120 50% 25%)")?, AnyColor::Hsl(Hsl::new(120.0, 50.0, 25.0)));
        assert_eq!(parse("lab(50 -20 30)")?, AnyColor::Lab(Lab::new(50.0, -20.0, 30.0)));
        assert_eq!(parse("lch (70, 40, 200)")?, AnyColor::Lch(Lch::new(70.0, 40.0, 200.0)));
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("hwb(0 0 0)"), Err(ColorError::UnknownFormat { .. })));
        assert!(matches!(parse("rgba(0 0 0)"), Err(ColorError::UnknownFormat { .. })));
        assert!(matches!(parse("red"), Err(ColorError::UnknownFormat { .. })));
        assert!(matches!(parse("rgb(1 2)"), Err(ColorError::MissingCoordinate { .. })));
        assert!(matches!(parse("rgb(1 2 3"), Err(ColorError::MissingCoordinate { .. })));
        assert!(matches!(parse("lab(1 2 3 4)"), Err(ColorError::TooManyCoordinates { .. })));
        assert!(matches!(parse("lab(50 0..1 0)"), Err(ColorError::MalformedFloat { .. })));
    }
}
