//! Simulation of color vision deficiencies.
//!
//! This module simulates how colors appear to people with one of eight
//! [`Deficiency`] kinds. The four dichromacies apply a fixed linear transform
//! to the color's 8-bit coordinates, based on the coefficients by Viénot,
//! Brettel, and Mollon for the three cone deficiencies and on Rec. 601 luma
//! for achromatopsia. The four anomalous trichromacies interpolate between
//! the original color and the corresponding dichromat's color by a severity
//! between 0 (normal vision) and 1 (full deficiency).
//!
//! ```
//! # use prettycontrast::Rgb;
//! # use prettycontrast::vision::{simulate, Deficiency};
//! let red = Rgb::new(255, 0, 0);
//! let seen = simulate(red, Deficiency::Protanopia, 1.0);
//! assert_eq!(seen, Rgb::new(145, 142, 0));
//! assert_eq!(simulate(red, Deficiency::Protanomaly, 0.0), red);
//! ```

use crate::core::{clamp, lerp, multiply};
use crate::{Float, Rgb};

/// A kind of color vision deficiency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// No functioning long-wavelength (red) cones.
    Protanopia,
    /// No functioning medium-wavelength (green) cones.
    Deuteranopia,
    /// No functioning short-wavelength (blue) cones.
    Tritanopia,
    /// No color vision at all.
    Achromatopsia,
    /// Weak red cones.
    Protanomaly,
    /// Weak green cones.
    Deuteranomaly,
    /// Weak blue cones.
    Tritanomaly,
    /// Weak color vision.
    Achromatomaly,
}

impl Deficiency {
    /// All deficiencies, dichromacies first.
    pub const ALL: [Deficiency; 8] = [
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
        Self::Protanomaly,
        Self::Deuteranomaly,
        Self::Tritanomaly,
        Self::Achromatomaly,
    ];

    /// Determine whether this deficiency is a dichromacy, i.e., the complete
    /// loss of a cone type or of color vision.
    pub const fn is_dichromacy(&self) -> bool {
        matches!(
            *self,
            Self::Protanopia | Self::Deuteranopia | Self::Tritanopia | Self::Achromatopsia
        )
    }

    /// Get the dichromacy this deficiency blends towards.
    ///
    /// Dichromacies are their own base.
    pub const fn base(&self) -> Self {
        match *self {
            Self::Protanopia | Self::Protanomaly => Self::Protanopia,
            Self::Deuteranopia | Self::Deuteranomaly => Self::Deuteranopia,
            Self::Tritanopia | Self::Tritanomaly => Self::Tritanopia,
            Self::Achromatopsia | Self::Achromatomaly => Self::Achromatopsia,
        }
    }

    /// Get the typical severity.
    pub const fn default_severity(&self) -> Float {
        match *self {
            Self::Protanomaly | Self::Deuteranomaly | Self::Achromatomaly => 0.6,
            Self::Tritanomaly => 0.8,
            Self::Protanopia | Self::Deuteranopia | Self::Tritanopia | Self::Achromatopsia => 1.0,
        }
    }

    /// Get a human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
            Self::Protanomaly => "protanomaly",
            Self::Deuteranomaly => "deuteranomaly",
            Self::Tritanomaly => "tritanomaly",
            Self::Achromatomaly => "achromatomaly",
        }
    }

    fn matrix(&self) -> &'static [[Float; 3]; 3] {
        match *self {
            Self::Protanopia | Self::Protanomaly => PROTANOPIA,
            Self::Deuteranopia | Self::Deuteranomaly => DEUTERANOPIA,
            Self::Tritanopia | Self::Tritanomaly => TRITANOPIA,
            Self::Achromatopsia | Self::Achromatomaly => ACHROMATOPSIA,
        }
    }
}

impl std::fmt::Display for Deficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[rustfmt::skip]
const PROTANOPIA: &[[Float; 3]; 3] = &[
    [0.567, 0.433, 0.0  ],
    [0.558, 0.442, 0.0  ],
    [0.0,   0.242, 0.758],
];

#[rustfmt::skip]
const DEUTERANOPIA: &[[Float; 3]; 3] = &[
    [0.625, 0.375, 0.0],
    [0.7,   0.3,   0.0],
    [0.0,   0.3,   0.7],
];

#[rustfmt::skip]
const TRITANOPIA: &[[Float; 3]; 3] = &[
    [0.95, 0.05,  0.0  ],
    [0.0,  0.433, 0.567],
    [0.0,  0.475, 0.525],
];

#[rustfmt::skip]
const ACHROMATOPSIA: &[[Float; 3]; 3] = &[
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

// --------------------------------------------------------------------------------------------------------------------

#[inline]
fn to_channel(value: Float) -> u8 {
    clamp(value.round(), 0.0, 255.0) as u8
}

fn as_floats(rgb: Rgb) -> [Float; 3] {
    [rgb.r as Float, rgb.g as Float, rgb.b as Float]
}

/// Apply the dichromacy's transform to the color.
fn transform(rgb: Rgb, matrix: &[[Float; 3]; 3]) -> Rgb {
    let [r, g, b] = multiply(matrix, &as_floats(rgb));
    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
        alpha: rgb.alpha,
    }
}

/// Simulate how the color appears with the given deficiency and severity.
///
/// This function first computes the color as seen by the corresponding
/// dichromat and then interpolates each channel between the original and
/// that color. Severity is clamped to `0..=1`, with not-a-number treated as
/// 0. Hence a severity of 0 always returns the original color and a severity
/// of 1 always returns the dichromat's color, no matter whether the
/// deficiency is a dichromacy or an anomalous trichromacy. Alpha is
/// preserved.
pub fn simulate(rgb: Rgb, deficiency: Deficiency, severity: Float) -> Rgb {
    let severity = if severity.is_nan() {
        0.0
    } else {
        clamp(severity, 0.0, 1.0)
    };

    let full = transform(rgb, deficiency.matrix());
    if severity == 1.0 {
        return full;
    }

    let [r1, g1, b1] = as_floats(rgb);
    let [r2, g2, b2] = as_floats(full);
    Rgb {
        r: to_channel(lerp(r1, r2, severity)),
        g: to_channel(lerp(g1, g2, severity)),
        b: to_channel(lerp(b1, b2, severity)),
        alpha: rgb.alpha,
    }
}

/// Simulate the deficiency at its [default
/// severity](Deficiency::default_severity).
pub fn simulate_typical(rgb: Rgb, deficiency: Deficiency) -> Rgb {
    simulate(rgb, deficiency, deficiency.default_severity())
}

/// Simulate protanopia.
pub fn simulate_protanopia(rgb: Rgb) -> Rgb {
    simulate(rgb, Deficiency::Protanopia, 1.0)
}

/// Simulate deuteranopia.
pub fn simulate_deuteranopia(rgb: Rgb) -> Rgb {
    simulate(rgb, Deficiency::Deuteranopia, 1.0)
}

/// Simulate tritanopia.
pub fn simulate_tritanopia(rgb: Rgb) -> Rgb {
    simulate(rgb, Deficiency::Tritanopia, 1.0)
}

/// Simulate achromatopsia. The result always is gray.
pub fn simulate_achromatopsia(rgb: Rgb) -> Rgb {
    simulate(rgb, Deficiency::Achromatopsia, 1.0)
}

/// Simulate protanomaly with the given severity.
pub fn simulate_protanomaly(rgb: Rgb, severity: Float) -> Rgb {
    simulate(rgb, Deficiency::Protanomaly, severity)
}

/// Simulate deuteranomaly with the given severity.
pub fn simulate_deuteranomaly(rgb: Rgb, severity: Float) -> Rgb {
    simulate(rgb, Deficiency::Deuteranomaly, severity)
}

/// Simulate tritanomaly with the given severity.
pub fn simulate_tritanomaly(rgb: Rgb, severity: Float) -> Rgb {
    simulate(rgb, Deficiency::Tritanomaly, severity)
}

/// Simulate achromatomaly with the given severity.
pub fn simulate_achromatomaly(rgb: Rgb, severity: Float) -> Rgb {
    simulate(rgb, Deficiency::Achromatomaly, severity)
}

// --------------------------------------------------------------------------------------------------------------------

/// The result of simulating one deficiency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub deficiency: Deficiency,
    pub original: Rgb,
    pub simulated: Rgb,
    pub severity: Float,
}

/// Simulate all deficiencies at their default severity.
///
/// The results are in the order of [`Deficiency::ALL`].
pub fn simulate_all(rgb: Rgb) -> Vec<SimulationResult> {
    Deficiency::ALL
        .iter()
        .map(|&deficiency| {
            let severity = deficiency.default_severity();
            SimulationResult {
                deficiency,
                original: rgb,
                simulated: simulate(rgb, deficiency, severity),
                severity,
            }
        })
        .collect()
}

/// The default minimum RGB distance for two colors to be distinguishable.
pub const DISTINGUISHABLE_THRESHOLD: Float = 30.0;

/// Determine whether two colors remain distinguishable with the given
/// deficiency.
///
/// This function simulates both colors at the deficiency's default severity
/// and compares the Euclidean distance of the results against the threshold,
/// typically [`DISTINGUISHABLE_THRESHOLD`].
pub fn are_distinguishable(
    color1: Rgb,
    color2: Rgb,
    deficiency: Deficiency,
    threshold: Float,
) -> bool {
    let seen1 = simulate_typical(color1, deficiency);
    let seen2 = simulate_typical(color2, deficiency);
    seen1.euclidean_distance(&seen2) >= threshold
}
