//! This file implements the CIE94 color-difference formula, the metric the whole crate exists to
//! compute. CIE94 improves on the plain Euclidean Delta-E of 1976 by splitting the difference
//! between two CIELAB points into lightness, chroma, and hue components and dividing each by a
//! weight that grows with the *reference* color's chroma: the eye tolerates larger absolute
//! differences between saturated colors than between near-grays. Two published parameter
//! sets exist, one tuned on graphic-arts samples and one on textiles, selected here by
//! [`Cie94Mode`](enum.Cie94Mode.html).
//!
//! One note for the careful reader: the formula is asymmetric by construction. Only the first
//! color's chroma feeds the weights, so swapping the arguments changes the answer unless the two
//! chromas happen to agree. Implementations are sometimes tempted to average the chromas to make
//! the metric symmetric; that is a different (nonstandard) formula, and this one deliberately
//! does not do it.

use colors::cielabcolor::CIELABColor;

/// Selects which published CIE94 parameter set weights the comparison. The two differ in how much
/// slack they give lightness differences and in the exact chroma/hue weighting slopes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cie94Mode {
    /// The default parameter set, tuned on graphic-arts samples: k1 = 0.045, k2 = 0.015, kL = 1.
    GraphicArts,
    /// The textile parameter set, which doubles the lightness tolerance: k1 = 0.048, k2 = 0.014,
    /// kL = 2.
    Textiles,
}

/// The weighting constants of one CIE94 parameterization. `k_1` sets the chroma weighting slope,
/// `k_2` the hue weighting slope, and `k_l`, `k_c`, `k_h` divide the lightness, chroma, and hue
/// terms respectively; `k_c` and `k_h` are 1 in both published sets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cie94Params {
    /// The chroma weighting slope, the coefficient of C1 in SC.
    pub k_1: f64,
    /// The hue weighting slope, the coefficient of C1 in SH.
    pub k_2: f64,
    /// The divisor of the lightness term.
    pub k_l: f64,
    /// The divisor of the chroma term, 1 in both standard parameter sets.
    pub k_c: f64,
    /// The divisor of the hue term, 1 in both standard parameter sets.
    pub k_h: f64,
}

impl Cie94Mode {
    /// The weighting constants this mode selects.
    pub fn params(&self) -> Cie94Params {
        match *self {
            Cie94Mode::GraphicArts => Cie94Params {
                k_1: 0.045,
                k_2: 0.015,
                k_l: 1.0,
                k_c: 1.0,
                k_h: 1.0,
            },
            Cie94Mode::Textiles => Cie94Params {
                k_1: 0.048,
                k_2: 0.014,
                k_l: 2.0,
                k_c: 1.0,
                k_h: 1.0,
            },
        }
    }
}

/// Computes the CIE94 Delta-E between two CIELAB colors: non-negative, and 0 exactly when the two
/// points coincide. The first argument is the *reference* color, whose chroma alone sets the
/// weighting (see the module docs on asymmetry).
///
/// The hue difference is recovered from the discriminant `Δa² + Δb² − ΔC²` rather than computed
/// directly. For two near-gray colors with nearly proportional opponent vectors, floating-point
/// cancellation can push that discriminant a hair below zero even though it is analytically
/// non-negative; the literal formula would then hand NaN to the square root. The discriminant is
/// clamped to zero here before the root is taken, so the function is total over real inputs.
pub fn cie94(reference: &CIELABColor, sample: &CIELABColor, mode: Cie94Mode) -> f64 {
    let p = mode.params();

    let c1 = reference.chroma();
    let c2 = sample.chroma();

    // lightness is unweighted; chroma and hue weights grow with the reference chroma only
    let s_l = 1.0;
    let s_c = 1.0 + p.k_1 * c1;
    let s_h = 1.0 + p.k_2 * c1;

    let d_l = reference.l - sample.l;
    let d_a = reference.a - sample.a;
    let d_b = reference.b - sample.b;
    let d_c = c1 - c2;

    let discriminant = (d_a * d_a + d_b * d_b - d_c * d_c).max(0.0);
    let d_h = discriminant.sqrt();

    ((d_l / (p.k_l * s_l)).powi(2) + (d_c / (p.k_c * s_c)).powi(2) + (d_h / (p.k_h * s_h)).powi(2))
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab(l: f64, a: f64, b: f64) -> CIELABColor {
        CIELABColor { l, a, b }
    }

    #[test]
    fn test_identity_is_zero() {
        for &c in &[
            lab(0.0, 0.0, 0.0),
            lab(53.23288178584245, 80.10930952982204, 67.22006831026425),
            lab(100.0, 0.0, 0.0),
            lab(50.0, -30.0, 12.5),
        ] {
            assert_eq!(cie94(&c, &c, Cie94Mode::GraphicArts), 0.0);
            assert_eq!(cie94(&c, &c, Cie94Mode::Textiles), 0.0);
        }
    }

    #[test]
    fn test_known_values() {
        let a = lab(50.0, 30.0, 40.0);
        let b = lab(55.0, 10.0, 20.0);
        assert!((cie94(&a, &b, Cie94Mode::GraphicArts) - 10.44520100249689).abs() <= 1e-10);
        assert!((cie94(&a, &b, Cie94Mode::Textiles) - 9.209470887213705).abs() <= 1e-10);
    }

    #[test]
    fn test_asymmetry_preserved() {
        // the weights come from the first color's chroma, so swapping the arguments changes the
        // answer whenever the chromas differ
        let a = lab(50.0, 30.0, 40.0); // chroma 50
        let b = lab(55.0, 10.0, 20.0); // chroma ~22.4
        let forward = cie94(&a, &b, Cie94Mode::GraphicArts);
        let backward = cie94(&b, &a, Cie94Mode::GraphicArts);
        assert!((forward - 10.44520100249689).abs() <= 1e-10);
        assert!((backward - 15.330485550404408).abs() <= 1e-10);
        assert!((forward - backward).abs() > 1.0);
    }

    #[test]
    fn test_symmetric_when_chromas_agree() {
        // equal chromas mean equal weights, and then the formula happens to be symmetric
        let a = lab(60.0, 30.0, 40.0);
        let b = lab(40.0, 40.0, 30.0); // both chroma 50
        let forward = cie94(&a, &b, Cie94Mode::GraphicArts);
        let backward = cie94(&b, &a, Cie94Mode::GraphicArts);
        assert!((forward - backward).abs() <= 1e-10);
        assert!((forward - 21.570955529345).abs() <= 1e-9);
    }

    #[test]
    fn test_negative_discriminant_clamped() {
        // proportional opponent vectors make Δa² + Δb² − ΔC² analytically zero, and rounding in
        // the chroma square roots pushes the computed value slightly negative: without the clamp
        // this pair returns NaN
        let a = lab(50.0, 0.1, 0.2);
        let b = lab(50.0, 0.010000000000000002, 0.020000000000000004);
        let de = cie94(&a, &b, Cie94Mode::GraphicArts);
        assert!(!de.is_nan());
        assert!(de >= 0.0);
        assert!((de - 0.19924129115571063).abs() <= 1e-12);
    }

    #[test]
    fn test_mode_params() {
        let g = Cie94Mode::GraphicArts.params();
        assert_eq!((g.k_1, g.k_2, g.k_l), (0.045, 0.015, 1.0));
        let t = Cie94Mode::Textiles.params();
        assert_eq!((t.k_1, t.k_2, t.k_l), (0.048, 0.014, 2.0));
        assert_eq!((g.k_c, g.k_h, t.k_c, t.k_h), (1.0, 1.0, 1.0, 1.0));
    }
}
