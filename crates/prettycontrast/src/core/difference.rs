use crate::{Float, Lab};

#[cfg(feature = "f64")]
use std::f64::consts::{PI, TAU};
#[cfg(not(feature = "f64"))]
use std::f32::consts::{PI, TAU};

/// Compute the CIE76 color difference, i.e., the Euclidian distance in CIELAB.
pub fn delta_e76(lab1: &Lab, lab2: &Lab) -> Float {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;

    dl.mul_add(dl, da.mul_add(da, db * db)).sqrt()
}

const K1: Float = 0.045;
const K2: Float = 0.015;

/// Compute the CIE94 color difference with the graphic arts weights.
///
/// Unlike the other two metrics, CIE94 is *not* symmetric: Its chroma and hue
/// weights depend on the chroma of the first color, which serves as the
/// reference.
pub fn delta_e94(lab1: &Lab, lab2: &Lab) -> Float {
    let dl = lab1.l - lab2.l;
    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);
    let dc = c1 - c2;

    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    // Rounding may make the squared hue difference slightly negative.
    let dh_squared = (da.mul_add(da, db * db) - dc * dc).max(0.0);

    let sc = K1.mul_add(c1, 1.0);
    let sh = K2.mul_add(c1, 1.0);

    let term_c = dc / sc;
    dl.mul_add(dl, term_c.mul_add(term_c, dh_squared / (sh * sh)))
        .sqrt()
}

/// 25 to the power of 7.
const POW25_7: Float = 6_103_515_625.0;

/// Compute the hue angle in radians `0..2π` for CIEDE2000. Achromatic colors
/// have hue 0, which sidesteps `atan2(0, 0)`.
#[inline]
fn hue_radians(a: Float, b: Float) -> Float {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }

    let h = b.atan2(a);
    if h < 0.0 {
        h + TAU
    } else {
        h
    }
}

/// Compute the CIEDE2000 color difference.
///
/// This function implements the full formula, including the chroma
/// correction G, the shortest-path hue difference, the rotation term R_T,
/// and the weighting functions S_L, S_C, S_H. When either chroma is zero, the
/// hue difference is zero and the mean hue is the sum of both hues.
#[allow(non_snake_case)]
pub fn delta_e2000(lab1: &Lab, lab2: &Lab) -> Float {
    let (L1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (L2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    // Chroma correction
    let C_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let C_mean7 = C_mean.powi(7);
    let G = 0.5 * (1.0 - (C_mean7 / (C_mean7 + POW25_7)).sqrt());

    let a1p = a1 * (1.0 + G);
    let a2p = a2 * (1.0 + G);
    let C1p = a1p.hypot(b1);
    let C2p = a2p.hypot(b2);
    let h1p = hue_radians(a1p, b1);
    let h2p = hue_radians(a2p, b2);

    // Differences
    let dLp = L2 - L1;
    let dCp = C2p - C1p;
    let chroma_product = C1p * C2p;

    let dhp = if chroma_product == 0.0 {
        0.0
    } else {
        let delta = h2p - h1p;
        if delta > PI {
            delta - TAU
        } else if delta < -PI {
            delta + TAU
        } else {
            delta
        }
    };
    let dHp = 2.0 * chroma_product.sqrt() * (dhp / 2.0).sin();

    // Means
    let Lp_mean = (L1 + L2) / 2.0;
    let Cp_mean = (C1p + C2p) / 2.0;
    let hp_sum = h1p + h2p;
    let hp_mean = if chroma_product == 0.0 {
        hp_sum
    } else if (h1p - h2p).abs() <= PI {
        hp_sum / 2.0
    } else if hp_sum < TAU {
        (hp_sum + TAU) / 2.0
    } else {
        (hp_sum - TAU) / 2.0
    };

    // Weighting functions
    let T = 1.0 - 0.17 * (hp_mean - (30.0 as Float).to_radians()).cos()
        + 0.24 * (2.0 * hp_mean).cos()
        + 0.32 * (3.0 * hp_mean + (6.0 as Float).to_radians()).cos()
        - 0.20 * (4.0 * hp_mean - (63.0 as Float).to_radians()).cos();

    let L50 = (Lp_mean - 50.0) * (Lp_mean - 50.0);
    let SL = 1.0 + 0.015 * L50 / (20.0 + L50).sqrt();
    let SC = 1.0 + 0.045 * Cp_mean;
    let SH = 1.0 + 0.015 * Cp_mean * T;

    // Rotation term
    let d_theta = 30.0 * (-((hp_mean.to_degrees() - 275.0) / 25.0).powi(2)).exp();
    let Cp_mean7 = Cp_mean.powi(7);
    let RC = 2.0 * (Cp_mean7 / (Cp_mean7 + POW25_7)).sqrt();
    let RT = -(2.0 * d_theta).to_radians().sin() * RC;

    let term_l = dLp / SL;
    let term_c = dCp / SC;
    let term_h = dHp / SH;

    (term_l * term_l + term_c * term_c + term_h * term_h + RT * term_c * term_h)
        .max(0.0)
        .sqrt()
}

#[cfg(test)]
mod test {
    use super::{delta_e2000, delta_e76, delta_e94};
    use crate::{assert_close_enough, Lab};

    #[test]
    fn test_delta_e76() {
        let lab1 = Lab::new(50.0, 0.0, 0.0);
        let lab2 = Lab::new(50.0, 3.0, 4.0);
        assert_close_enough!(delta_e76(&lab1, &lab2), 5.0);
        assert_close_enough!(delta_e76(&lab2, &lab1), 5.0);
        assert_eq!(delta_e76(&lab1, &lab1), 0.0);
    }

    #[test]
    fn test_delta_e94() {
        let lab1 = Lab::new(50.0, 0.0, 0.0);
        let lab2 = Lab::new(60.0, 0.0, 0.0);
        assert_close_enough!(delta_e94(&lab1, &lab2), 10.0);

        // Chroma differences are weighted down by the reference's chroma.
        let lab1 = Lab::new(50.0, 40.0, 0.0);
        let lab2 = Lab::new(50.0, 50.0, 0.0);
        assert_close_enough!(delta_e94(&lab1, &lab2), 10.0 / 2.8);
        assert!(delta_e94(&lab1, &lab2) < delta_e76(&lab1, &lab2));

        let lab = Lab::new(31.0, -12.0, 55.5);
        assert_eq!(delta_e94(&lab, &lab), 0.0);
    }

    #[test]
    fn test_delta_e2000() {
        // Sharma, Wu, and Dalal's test data for CIEDE2000.
        let cases = [
            ((50.0, 2.6772, -79.7751), (50.0, 0.0, -82.7485), 2.0425),
            ((50.0, -1.3802, -84.2814), (50.0, 0.0, -82.7485), 1.0),
            ((50.0, 0.0, 0.0), (50.0, -1.0, 2.0), 2.3669),
            ((50.0, 2.49, -0.001), (50.0, -2.49, 0.0009), 7.1792),
            ((50.0, 2.49, -0.001), (50.0, -2.49, 0.0011), 7.2195),
            ((50.0, -0.001, 2.49), (50.0, 0.0009, -2.49), 4.8045),
            ((50.0, 2.5, 0.0), (50.0, 0.0, -2.5), 4.3065),
            ((50.0, 2.5, 0.0), (73.0, 25.0, -18.0), 27.1492),
            ((50.0, 2.5, 0.0), (50.0, 3.1736, 0.5854), 1.0),
            ((60.2574, -34.0099, 36.2677), (60.4626, -34.1751, 39.4387), 1.2644),
            ((22.7233, 20.0904, -46.694), (23.0331, 14.973, -42.5619), 2.0373),
            ((90.9257, -0.5406, -0.9208), (88.6381, -0.8985, -0.7239), 1.5381),
        ];

        for ((l1, a1, b1), (l2, a2, b2), expected) in cases {
            let lab1 = Lab::new(l1, a1, b1);
            let lab2 = Lab::new(l2, a2, b2);
            assert_close_enough!(delta_e2000(&lab1, &lab2), expected, 1e-4);
            assert_close_enough!(delta_e2000(&lab2, &lab1), expected, 1e-4);
        }
    }

    #[test]
    fn test_delta_e2000_identity() {
        for lab in [
            Lab::new(0.0, 0.0, 0.0),
            Lab::new(100.0, 0.0, 0.0),
            Lab::new(53.24, 80.09, 67.2),
            Lab::new(32.3, 79.19, -107.86),
        ] {
            assert_eq!(delta_e2000(&lab, &lab), 0.0);
        }
    }
}
