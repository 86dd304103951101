//! Contrast between foreground and background colors.
//!
//! This module implements two contrast metrics:
//!
//!   * The [WCAG 2.1 contrast ratio](https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio)
//!     ranges from 1 to 21. It is symmetric, i.e., swapping foreground and
//!     background does not change the ratio. [`wcag_contrast`] computes it and
//!     [`check_wcag_compliance`] checks it against the five
//!     [`ConformanceLevel`]s.
//!   * The [Accessible Perceptual Contrast Algorithm](https://github.com/Myndex/apca-w3)
//!     computes the lightness contrast Lc, which ranges from about -108 to
//!     106. It is directional: A positive Lc indicates dark text on a light
//!     background and a negative Lc indicates light text on a dark
//!     background. [`apca_contrast`] computes it and [`check_apca_compliance`]
//!     checks it against the body text threshold.
//!
//! [`calculate_contrast`] combines both into a [`ContrastResult`]:
//! ```
//! # use prettycontrast::Rgb;
//! # use prettycontrast::contrast::calculate_contrast;
//! let result = calculate_contrast(Rgb::gray(0x77), Rgb::WHITE);
//! assert_eq!(result.ratio, 4.48);
//! assert!(!result.wcag.normal_text_aa);
//! assert!(result.wcag.large_text_aa);
//! ```

use crate::core::{round_to, to_contrast, to_contrast_ratio};
use crate::luminance::{apca_luminance, relative_luminance};
use crate::{Float, Rgb};

/// A WCAG conformance level.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    #[default]
    Aa,
    Aaa,
}

/// A named WCAG contrast requirement.
///
/// Each requirement has a minimum contrast ratio:
///
/// | Requirement       | Ratio |
/// | ----------------- | ----: |
/// | `NormalTextAa`    |   4.5 |
/// | `NormalTextAaa`   |   7.0 |
/// | `LargeTextAa`     |   3.0 |
/// | `LargeTextAaa`    |   4.5 |
/// | `UiComponents`    |   3.0 |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConformanceLevel {
    #[default]
    NormalTextAa,
    NormalTextAaa,
    LargeTextAa,
    LargeTextAaa,
    UiComponents,
}

impl ConformanceLevel {
    /// All conformance levels.
    pub const ALL: [ConformanceLevel; 5] = [
        Self::NormalTextAa,
        Self::NormalTextAaa,
        Self::LargeTextAa,
        Self::LargeTextAaa,
        Self::UiComponents,
    ];

    /// Determine the conformance level for text of the given size.
    pub const fn of(level: WcagLevel, is_large_text: bool) -> Self {
        match (level, is_large_text) {
            (WcagLevel::Aa, false) => Self::NormalTextAa,
            (WcagLevel::Aaa, false) => Self::NormalTextAaa,
            (WcagLevel::Aa, true) => Self::LargeTextAa,
            (WcagLevel::Aaa, true) => Self::LargeTextAaa,
        }
    }

    /// Get the minimum contrast ratio for this conformance level.
    pub const fn ratio(&self) -> Float {
        match *self {
            Self::NormalTextAa => 4.5,
            Self::NormalTextAaa => 7.0,
            Self::LargeTextAa => 3.0,
            Self::LargeTextAaa => 4.5,
            Self::UiComponents => 3.0,
        }
    }

    /// Get a human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::NormalTextAa => "normal text AA",
            Self::NormalTextAaa => "normal text AAA",
            Self::LargeTextAa => "large text AA",
            Self::LargeTextAaa => "large text AAA",
            Self::UiComponents => "UI components",
        }
    }
}

impl std::fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The result of checking a contrast ratio against all conformance levels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WcagCompliance {
    pub normal_text_aa: bool,
    pub normal_text_aaa: bool,
    pub large_text_aa: bool,
    pub large_text_aaa: bool,
    pub ui_components: bool,
}

impl WcagCompliance {
    /// Determine whether the checked ratio meets the given level.
    pub const fn meets(&self, level: ConformanceLevel) -> bool {
        match level {
            ConformanceLevel::NormalTextAa => self.normal_text_aa,
            ConformanceLevel::NormalTextAaa => self.normal_text_aaa,
            ConformanceLevel::LargeTextAa => self.large_text_aa,
            ConformanceLevel::LargeTextAaa => self.large_text_aaa,
            ConformanceLevel::UiComponents => self.ui_components,
        }
    }
}

/// The result of checking an APCA lightness contrast.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ApcaCompliance {
    /// The lightness contrast Lc.
    pub score: Float,
    /// Whether the contrast suffices for body text.
    pub compliant: bool,
    /// The minimum font size in pixels, if any.
    pub min_font_size: Option<u32>,
}

/// The luminance of foreground and background.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Luminance {
    pub foreground: Float,
    pub background: Float,
}

/// The combined WCAG and APCA contrast between foreground and background.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContrastResult {
    /// The WCAG contrast ratio `1..=21`, rounded to two decimals.
    pub ratio: Float,
    pub wcag: WcagCompliance,
    pub apca: ApcaCompliance,
    /// The WCAG relative luminance of both colors.
    pub luminance: Luminance,
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the WCAG contrast ratio between foreground and background.
///
/// The result ranges `1..=21` and is rounded to two decimals. Since the ratio
/// divides the lighter by the darker luminance, the order of arguments does not
/// matter.
pub fn wcag_contrast(foreground: Rgb, background: Rgb) -> Float {
    round_to(
        to_contrast_ratio(relative_luminance(foreground), relative_luminance(background)),
        2,
    )
}

/// Compute the APCA lightness contrast Lc of text against a background.
///
/// The arguments are *not* interchangeable. A positive result indicates dark
/// text on a light background, a negative result light text on a dark
/// background. Near-equal luminance and low contrast both produce 0. The
/// result is rounded to one decimal.
///
/// ```
/// # use prettycontrast::Rgb;
/// # use prettycontrast::contrast::apca_contrast;
/// assert_eq!(apca_contrast(Rgb::BLACK, Rgb::WHITE), 106.0);
/// assert_eq!(apca_contrast(Rgb::WHITE, Rgb::BLACK), -107.9);
/// assert_eq!(apca_contrast(Rgb::gray(0x80), Rgb::gray(0x80)), 0.0);
/// ```
pub fn apca_contrast(text: Rgb, background: Rgb) -> Float {
    round_to(
        100.0 * to_contrast(apca_luminance(text), apca_luminance(background)),
        1,
    )
}

/// Determine the minimum font size in pixels for the APCA lightness contrast.
///
/// Only the magnitude of the contrast matters. A contrast of at least 45
/// requires 32px, which is suitable for large text only. Below that, this
/// function returns `None`.
pub fn apca_min_font_size(lc: Float) -> Option<u32> {
    let lc = lc.abs();
    if lc >= 90.0 {
        Some(12)
    } else if lc >= 75.0 {
        Some(16)
    } else if lc >= 60.0 {
        Some(20)
    } else if lc >= 45.0 {
        Some(32)
    } else {
        None
    }
}

/// Check the WCAG contrast ratio against all conformance levels.
pub fn check_wcag_compliance(ratio: Float) -> WcagCompliance {
    use ConformanceLevel::*;

    WcagCompliance {
        normal_text_aa: ratio >= NormalTextAa.ratio(),
        normal_text_aaa: ratio >= NormalTextAaa.ratio(),
        large_text_aa: ratio >= LargeTextAa.ratio(),
        large_text_aaa: ratio >= LargeTextAaa.ratio(),
        ui_components: ratio >= UiComponents.ratio(),
    }
}

/// The minimum APCA lightness contrast for body text.
pub const APCA_BODY_TEXT: Float = 75.0;

/// Check the APCA lightness contrast against the body text threshold.
pub fn check_apca_compliance(lc: Float) -> ApcaCompliance {
    ApcaCompliance {
        score: lc,
        compliant: lc.abs() >= APCA_BODY_TEXT,
        min_font_size: apca_min_font_size(lc),
    }
}

/// Compute the luminance a foreground needs to meet the target ratio.
///
/// This function inverts the WCAG contrast ratio for a foreground that is
/// `lighter` or darker than the background with the given relative luminance.
/// A result outside `0..=1` means that no such foreground exists.
pub fn required_luminance(
    background_luminance: Float,
    target_ratio: Float,
    lighter: bool,
) -> Float {
    if lighter {
        target_ratio.mul_add(background_luminance + 0.05, -0.05)
    } else {
        (background_luminance + 0.05) / target_ratio - 0.05
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A letter grade for a contrast ratio.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContrastGrade {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl std::fmt::Display for ContrastGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        })
    }
}

/// Grade the contrast ratio.
pub fn contrast_grade(ratio: Float) -> ContrastGrade {
    if ratio >= 12.0 {
        ContrastGrade::APlus
    } else if ratio >= 7.0 {
        ContrastGrade::A
    } else if ratio >= 4.5 {
        ContrastGrade::B
    } else if ratio >= 3.0 {
        ContrastGrade::C
    } else if ratio >= 2.0 {
        ContrastGrade::D
    } else {
        ContrastGrade::F
    }
}

/// Score the contrast ratio on a linear scale `0..=100`.
pub fn contrast_score(ratio: Float) -> u8 {
    (100.0 * ratio / 21.0).round().clamp(0.0, 100.0) as u8
}

/// Compute WCAG and APCA contrast between foreground and background.
///
/// Foreground and background are not interchangeable for APCA.
pub fn calculate_contrast(foreground: Rgb, background: Rgb) -> ContrastResult {
    let ratio = wcag_contrast(foreground, background);
    let lc = apca_contrast(foreground, background);

    ContrastResult {
        ratio,
        wcag: check_wcag_compliance(ratio),
        apca: check_apca_compliance(lc),
        luminance: Luminance {
            foreground: relative_luminance(foreground),
            background: relative_luminance(background),
        },
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether black or white text has more perceptual contrast against
/// the background.
///
/// This function compares the APCA lightness contrast of black text and of
/// white text and returns the one with the larger magnitude, preferring black
/// on ties.
pub fn preferred_text_color(background: Rgb) -> Rgb {
    let luminance = apca_luminance(background);
    if -to_contrast(1.0, luminance) <= to_contrast(0.0, luminance) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Determine whether a black or white background has more perceptual contrast
/// behind the text.
///
/// This function uses the same algorithm as [`preferred_text_color`] and
/// prefers black on ties.
pub fn preferred_background_color(text: Rgb) -> Rgb {
    let luminance = apca_luminance(text);
    if to_contrast(luminance, 1.0) <= -to_contrast(luminance, 0.0) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
