//! Searching for accessible colors.
//!
//! The functions in this module search for colors that meet a WCAG contrast
//! target while staying close to a given color:
//!
//!   * [`find_accessible_by_lightness`] performs a bounded binary search over
//!     CIELCh lightness.
//!   * [`generate_color_suggestions`] sweeps several parameters and ranks the
//!     compliant results by CIEDE2000 distance. It is configured with
//!     [`OptimizationOptions`].
//!   * [`optimize_palette`] maps every color of a palette to an accessible
//!     variant.
//!   * [`find_complementary_accessible_color`] looks for a neutral color that
//!     contrasts with two colors at once.
//!
//! A target that cannot be met is not an error. Functions with a single
//! result return `None`, whereas [`generate_color_suggestions`] returns an
//! empty vector.
//!
//! ```
//! # use prettycontrast::Rgb;
//! # use prettycontrast::contrast::{wcag_contrast, ConformanceLevel};
//! # use prettycontrast::optimize::{generate_color_suggestions, OptimizationOptions};
//! let options = OptimizationOptions::builder()
//!     .target(ConformanceLevel::NormalTextAa)
//!     .suggestion_count(3)
//!     .build();
//!
//! let suggestions = generate_color_suggestions(Rgb::gray(0x99), Rgb::WHITE, &options);
//! assert!(!suggestions.is_empty() && suggestions.len() <= 3);
//! for suggestion in &suggestions {
//!     assert!(wcag_contrast(suggestion.color, Rgb::WHITE) >= 4.5);
//! }
//! ```

use tracing::{debug, trace};

use crate::contrast::{required_luminance, wcag_contrast, ConformanceLevel, WcagLevel};
use crate::convert::{
    darken, hsl_to_rgb, lch_to_rgb, lighten, rgb_to_lab, rgb_to_lch, rotate_hue,
    with_lch_chroma, with_lch_lightness,
};
use crate::core::delta_e2000;
use crate::luminance::relative_luminance;
use crate::{Float, Hsl, Lch, Rgb};

/// The maximum number of binary search steps.
const MAX_ITERATIONS: usize = 20;

/// The bracket width at which binary search stops.
const PRECISION: Float = 0.1;

/// Find a color with the same hue but different lightness that meets the
/// target contrast ratio against the background.
///
/// If the foreground is lighter than the background, this function first
/// tries to make it lighter still, otherwise it first tries to make it
/// darker. In each direction, it computes the relative luminance needed for
/// the target and, if that luminance is strictly between black and white,
/// performs a binary search over CIELCh lightness. The search compares the
/// relative luminance of the 8-bit color it actually builds, so colors that
/// are clipped to the sRGB gamut are judged by how they are displayed. It
/// returns the compliant color closest to the boundary. Should the bisection
/// come up empty, whole lightness steps are scanned instead. If the first
/// direction yields no compliant color, the other direction is searched as
/// well. With `preserve_hue`, the result keeps the foreground's chroma and
/// hue, otherwise it is gray. Alpha is always preserved.
///
/// This function returns `None` if neither direction can meet the target.
/// Since the search never evaluates lightness 0 or 100, that includes
/// targets that only pure black or pure white can meet.
pub fn find_accessible_by_lightness(
    foreground: Rgb,
    background: Rgb,
    target_ratio: Float,
    preserve_hue: bool,
) -> Option<Rgb> {
    let background_luminance = relative_luminance(background);
    let lighter = relative_luminance(foreground) > background_luminance;

    let lch = rgb_to_lch(foreground);
    let chroma = if preserve_hue { lch.c } else { 0.0 };
    let build = |lightness: Float| Rgb {
        alpha: foreground.alpha,
        ..lch_to_rgb(Lch::new(lightness, chroma, lch.h))
    };

    for lighter in [lighter, !lighter] {
        let required = required_luminance(background_luminance, target_ratio, lighter);
        if required <= Float::EPSILON || 1.0 - Float::EPSILON <= required {
            debug!(%foreground, %background, lighter, required, "luminance out of reach");
            continue;
        }

        let result = search_lightness(&build, background, target_ratio, lighter, required);
        if result.is_some() {
            return result;
        }
        debug!(%foreground, %background, lighter, "binary search found no color");
    }

    debug!(
        %foreground, %background, target_ratio,
        "contrast target is out of reach in both directions"
    );
    None
}

/// Perform a binary search over lightness in one direction.
fn search_lightness<F: Fn(Float) -> Rgb>(
    build: &F,
    background: Rgb,
    target_ratio: Float,
    lighter: bool,
    required: Float,
) -> Option<Rgb> {
    let reaches = |candidate: &Rgb| {
        let luminance = relative_luminance(*candidate);
        if lighter {
            luminance >= required
        } else {
            luminance <= required
        }
    };
    let complies = |candidate: &Rgb| {
        reaches(candidate) && wcag_contrast(*candidate, background) >= target_ratio
    };

    let (mut low, mut high) = (0.0, 100.0);
    let mut best = None;

    for _ in 0..MAX_ITERATIONS {
        if high - low <= PRECISION {
            break;
        }

        let middle = (low + high) / 2.0;
        let candidate = build(middle);
        let met = reaches(&candidate);
        if complies(&candidate) {
            best = Some(candidate);
        }

        // Move towards the boundary when the requirement is met.
        if met == lighter {
            high = middle;
        } else {
            low = middle;
        }
    }

    if best.is_none() {
        // Gamut clipping can make luminance non-monotonic in lightness.
        trace!(lighter, required, "scanning whole lightness steps");
        best = if lighter {
            (1..100).map(|step| build(step as Float)).find(complies)
        } else {
            (1..100).rev().map(|step| build(step as Float)).find(complies)
        };
    }

    best
}

// --------------------------------------------------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct OptionData {
    target: ConformanceLevel,
    max_distance: Option<Float>,
    suggestion_count: usize,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            target: ConformanceLevel::NormalTextAa,
            max_distance: None,
            suggestion_count: 10,
        }
    }
}

/// A builder of optimization options.
#[derive(Debug)]
pub struct OptimizationOptionBuilder(OptionData);

impl OptimizationOptionBuilder {
    /// Set the conformance level to meet.
    pub fn target(&mut self, target: ConformanceLevel) -> &mut Self {
        self.0.target = target;
        self
    }

    /// Set the maximum CIEDE2000 distance from the original color.
    ///
    /// A negative or not-a-number distance removes the limit.
    pub fn max_distance(&mut self, distance: Float) -> &mut Self {
        self.0.max_distance = if distance >= 0.0 { Some(distance) } else { None };
        self
    }

    /// Remove the limit on the distance from the original color.
    pub fn unbounded(&mut self) -> &mut Self {
        self.0.max_distance = None;
        self
    }

    /// Set the maximum number of suggestions, which is at least one.
    pub fn suggestion_count(&mut self, count: usize) -> &mut Self {
        self.0.suggestion_count = count.max(1);
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> OptimizationOptions {
        OptimizationOptions(self.0.clone())
    }
}

/// The options for generating color suggestions.
///
/// By default, suggestions meet [`ConformanceLevel::NormalTextAa`], may be
/// arbitrarily far from the original color, and are limited to ten.
#[derive(Clone, Debug)]
pub struct OptimizationOptions(OptionData);

impl Default for OptimizationOptions {
    fn default() -> Self {
        OptimizationOptions(OptionData::new())
    }
}

impl OptimizationOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptimizationOptionBuilder {
        OptimizationOptionBuilder(OptionData::new())
    }

    /// Get the conformance level.
    pub fn target(&self) -> ConformanceLevel {
        self.0.target
    }

    /// Get the maximum distance, if any.
    pub fn max_distance(&self) -> Option<Float> {
        self.0.max_distance
    }

    /// Get the maximum number of suggestions.
    pub fn suggestion_count(&self) -> usize {
        self.0.suggestion_count
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The modification that produced a suggestion.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Modification {
    /// HSL lightness increased by the percentage.
    Lighten { amount: Float },
    /// HSL lightness decreased by the percentage.
    Darken { amount: Float },
    /// CIELCh lightness replaced by the value.
    Lightness { value: Float },
    /// HSL hue rotated by the degrees.
    HueRotation { degrees: Float },
    /// CIELCh chroma replaced by the value.
    Chroma { value: Float },
}

impl Modification {
    /// Apply this modification to the color.
    pub fn apply(&self, rgb: Rgb) -> Rgb {
        match *self {
            Self::Lighten { amount } => lighten(rgb, amount),
            Self::Darken { amount } => darken(rgb, amount),
            Self::Lightness { value } => with_lch_lightness(rgb, value),
            Self::HueRotation { degrees } => rotate_hue(rgb, degrees),
            Self::Chroma { value } => with_lch_chroma(rgb, value),
        }
    }
}

impl std::fmt::Display for Modification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Lighten { amount } => write!(f, "lighten by {}%", amount),
            Self::Darken { amount } => write!(f, "darken by {}%", amount),
            Self::Lightness { value } => write!(f, "set lightness to {}", value),
            Self::HueRotation { degrees } => write!(f, "rotate hue by {}°", degrees),
            Self::Chroma { value } => write!(f, "set chroma to {}", value),
        }
    }
}

/// A suggested replacement color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSuggestion {
    pub color: Rgb,
    /// The color in `#RRGGBB` notation.
    pub hex: String,
    /// The WCAG contrast ratio against the background.
    pub contrast: Float,
    /// The CIEDE2000 distance from the original color.
    pub distance: Float,
    pub modification: Modification,
}

/// Enumerate all modifications of the sweep.
fn modifications() -> impl Iterator<Item = Modification> {
    let steps = |start: i32, end: i32, step: usize| (start..=end).step_by(step).map(|n| n as Float);

    let lighten = steps(5, 95, 5).map(|amount| Modification::Lighten { amount });
    let darken = steps(5, 95, 5).map(|amount| Modification::Darken { amount });
    let lightness = steps(0, 100, 5).map(|value| Modification::Lightness { value });
    let rotation = steps(-180, 180, 15)
        .filter(|degrees| *degrees != 0.0)
        .map(|degrees| Modification::HueRotation { degrees });
    let chroma = steps(0, 150, 10).map(|value| Modification::Chroma { value });

    lighten
        .chain(darken)
        .chain(lightness)
        .chain(rotation)
        .chain(chroma)
}

/// Generate suggestions for replacing the foreground color.
///
/// This function sweeps over HSL lightening and darkening by 5% steps,
/// CIELCh lightness by steps of 5, HSL hue rotation by 15° steps, and CIELCh
/// chroma by steps of 10. It keeps the candidates that meet the options'
/// target against the background and, if so configured, stay within the
/// maximum CIEDE2000 distance from the foreground. The result is ordered by
/// increasing distance, contains each color only once, and is truncated to
/// the suggestion count. It is empty if no candidate qualifies.
pub fn generate_color_suggestions(
    foreground: Rgb,
    background: Rgb,
    options: &OptimizationOptions,
) -> Vec<ColorSuggestion> {
    let target_ratio = options.target().ratio();
    let original = rgb_to_lab(foreground);

    let mut candidates = 0;
    let mut suggestions: Vec<ColorSuggestion> = modifications()
        .filter_map(|modification| {
            candidates += 1;
            let color = modification.apply(foreground);
            let contrast = wcag_contrast(color, background);
            if contrast < target_ratio {
                return None;
            }

            let distance = delta_e2000(&original, &rgb_to_lab(color));
            if let Some(max_distance) = options.max_distance() {
                if distance > max_distance {
                    return None;
                }
            }

            Some(ColorSuggestion {
                color,
                hex: color.to_string(),
                contrast,
                distance,
                modification,
            })
        })
        .collect();

    trace!(
        %foreground, %background, candidates, compliant = suggestions.len(),
        "swept suggestion candidates"
    );

    suggestions.sort_by(|s1, s2| s1.distance.total_cmp(&s2.distance));

    let mut seen = std::collections::HashSet::new();
    suggestions.retain(|suggestion| seen.insert(suggestion.color.coordinates()));
    suggestions.truncate(options.suggestion_count());
    suggestions
}

// --------------------------------------------------------------------------------------------------------------------

/// A mapping from original to accessible colors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteMapping {
    entries: Vec<(Rgb, Rgb)>,
}

impl PaletteMapping {
    /// Look up the accessible color for the original color.
    pub fn get(&self, original: &Rgb) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(color, _)| color == original)
            .map(|(_, replacement)| *replacement)
    }

    /// Iterate over the original and accessible colors in palette order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Rgb, Rgb)> {
        self.entries.iter()
    }

    /// Get the number of distinct original colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count the original colors that were replaced.
    pub fn modified(&self) -> usize {
        self.entries
            .iter()
            .filter(|(color, replacement)| color != replacement)
            .count()
    }
}

impl<'a> IntoIterator for &'a PaletteMapping {
    type Item = &'a (Rgb, Rgb);
    type IntoIter = std::slice::Iter<'a, (Rgb, Rgb)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Map each color of the palette to an accessible color.
///
/// A color that already meets the target ratio against the background maps
/// to itself. Any other color maps to the result of
/// [`find_accessible_by_lightness`] with hue preserved or, if there is none,
/// to itself. Duplicate colors appear only once in the mapping.
pub fn optimize_palette(colors: &[Rgb], background: Rgb, target_ratio: Float) -> PaletteMapping {
    let mut mapping = PaletteMapping::default();

    for &color in colors {
        if mapping.get(&color).is_some() {
            continue;
        }

        let replacement = if wcag_contrast(color, background) >= target_ratio {
            color
        } else {
            find_accessible_by_lightness(color, background, target_ratio, true).unwrap_or_else(
                || {
                    debug!(%color, %background, target_ratio, "keeping inaccessible palette color");
                    color
                },
            )
        };

        mapping.entries.push((color, replacement));
    }

    mapping
}

/// Score the accessibility of foreground against background on a scale
/// `0..=100`.
///
/// A contrast ratio below the target for the given level and text size
/// scales linearly to `0..80`. A ratio that meets the target scores at least
/// 80, plus up to 20 for exceeding the target by up to 100%.
pub fn accessibility_score(
    foreground: Rgb,
    background: Rgb,
    level: WcagLevel,
    is_large_text: bool,
) -> u8 {
    let target = ConformanceLevel::of(level, is_large_text).ratio();
    let ratio = wcag_contrast(foreground, background);

    let score = if ratio < target {
        ratio / target * 80.0
    } else {
        ((ratio - target) / target).min(1.0).mul_add(20.0, 80.0)
    };

    score.round().clamp(0.0, 100.0) as u8
}

/// Find a neutral color that meets the target ratio against both colors.
///
/// This function tries white, black, and middle gray before sweeping HSL
/// grays from black to white in 5% steps. It returns the first candidate
/// meeting the target against both colors or `None`.
pub fn find_complementary_accessible_color(
    color1: Rgb,
    color2: Rgb,
    target_ratio: Float,
) -> Option<Rgb> {
    let grays = (0..=100)
        .step_by(5)
        .map(|l| hsl_to_rgb(Hsl::new(0.0, 0.0, l as Float)));

    [Rgb::WHITE, Rgb::BLACK, Rgb::gray(128)]
        .into_iter()
        .chain(grays)
        .find(|candidate| {
            wcag_contrast(*candidate, color1) >= target_ratio
                && wcag_contrast(*candidate, color2) >= target_ratio
        })
}
