//! # Simply-Supported Analysis
//!
//! Closed-form response equations for a single span of length `L` under a
//! full uniform load `w`, pinned at both ends (Euler-Bernoulli theory):
//!
//! - Deflection: `y(x) = -(w·x / 24EI) · (L³ - 2Lx² + x³)`
//! - Bending moment: `M(x) = -(w·x/2) · (L - x)`
//! - Shear force: `V(x) = w · (L/2 - x)`
//!
//! Deflection is additionally multiplied by the material's deflection scale
//! and 1000 before rounding, then by 1e9 for the display unit. Each
//! equation samples a fixed number of equal intervals over the span and
//! rounds both coordinates to one decimal place.
//!
//! There are no guards: a zero flexural rigidity propagates as non-finite
//! deflection values rather than an error.

use serde::{Deserialize, Serialize};

use crate::analysis::{round1, Equation};
use crate::beam::Beam;

/// Intervals sampled by the deflection equation (9 points)
const DEFLECTION_INTERVALS: usize = 8;

/// Intervals sampled by the moment and shear equations (11 points)
const FORCE_INTERVALS: usize = 10;

/// Analyzer for a single simply-supported span.
///
/// Stateless; only `primary_span` and the material properties are read
/// from the beam.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimplySupportedAnalyzer;

impl SimplySupportedAnalyzer {
    /// Sample the deflection curve over 8 equal intervals
    pub fn deflection_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l = beam.primary_span;
        let ei = beam.material.flexural_rigidity();
        let scale = beam.material.deflection_scale();
        let step = l / DEFLECTION_INTERVALS as f64;

        let mut x = Vec::with_capacity(DEFLECTION_INTERVALS + 1);
        let mut y = Vec::with_capacity(DEFLECTION_INTERVALS + 1);

        for i in 0..=DEFLECTION_INTERVALS {
            let pos = i as f64 * step;
            let raw = -(load * pos / (24.0 * ei))
                * (l.powi(3) - 2.0 * l * pos.powi(2) + pos.powi(3))
                * scale
                * 1000.0;

            x.push(round1(pos));
            y.push(round1(raw) * 1e9);
        }

        Equation { x, y }
    }

    /// Sample the bending moment curve over 10 equal intervals
    pub fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l = beam.primary_span;
        let step = l / FORCE_INTERVALS as f64;

        let mut x = Vec::with_capacity(FORCE_INTERVALS + 1);
        let mut y = Vec::with_capacity(FORCE_INTERVALS + 1);

        for i in 0..=FORCE_INTERVALS {
            let pos = i as f64 * step;
            let moment = -(load * pos / 2.0) * (l - pos);

            x.push(round1(pos));
            y.push(round1(moment));
        }

        Equation { x, y }
    }

    /// Sample the shear force curve over 10 equal intervals
    pub fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l = beam.primary_span;
        let step = l / FORCE_INTERVALS as f64;

        let mut x = Vec::with_capacity(FORCE_INTERVALS + 1);
        let mut y = Vec::with_capacity(FORCE_INTERVALS + 1);

        for i in 0..=FORCE_INTERVALS {
            let pos = i as f64 * step;
            let shear = load * (l / 2.0 - pos);

            x.push(round1(pos));
            y.push(round1(shear));
        }

        Equation { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;

    fn beam_8m() -> Beam {
        // L = 8, EI = 210e6, scale = 1 - the reference scenario
        Beam::simple_span(8.0, Material::new("steel", 210_000_000.0, 1.0))
    }

    #[test]
    fn test_sample_counts() {
        let analyzer = SimplySupportedAnalyzer;
        let beam = beam_8m();

        assert_eq!(analyzer.deflection_equation(&beam, 10.0).len(), 9);
        assert_eq!(analyzer.bending_moment_equation(&beam, 10.0).len(), 11);
        assert_eq!(analyzer.shear_force_equation(&beam, 10.0).len(), 11);
    }

    #[test]
    fn test_shear_reference_values() {
        // V(0) = wL/2 = 40, V(L/2) = 0, V(L) = -40
        let eq = SimplySupportedAnalyzer.shear_force_equation(&beam_8m(), 10.0);

        assert_eq!(eq.y[0], 40.0);
        assert_eq!(eq.y[5], 0.0);
        assert_eq!(eq.y[10], -40.0);
    }

    #[test]
    fn test_moment_reference_values() {
        // Peak at midspan: -(10*4/2)*(8-4) = -80
        let eq = SimplySupportedAnalyzer.bending_moment_equation(&beam_8m(), 10.0);

        assert_eq!(eq.y[0], 0.0);
        assert_eq!(eq.y[5], -80.0);
        assert_eq!(eq.y[10], 0.0);
    }

    #[test]
    fn test_deflection_boundary_zero() {
        let eq = SimplySupportedAnalyzer.deflection_equation(&beam_8m(), 10.0);

        assert_eq!(eq.y[0], 0.0);
        assert_eq!(eq.y[8], 0.0);
    }

    #[test]
    fn test_x_ascending_to_span_length() {
        let analyzer = SimplySupportedAnalyzer;
        let beam = beam_8m();

        for eq in [
            analyzer.deflection_equation(&beam, 10.0),
            analyzer.bending_moment_equation(&beam, 10.0),
            analyzer.shear_force_equation(&beam, 10.0),
        ] {
            assert_eq!(eq.x[0], 0.0);
            assert_eq!(*eq.x.last().unwrap(), 8.0);
            for pair in eq.x.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_shear_antisymmetric() {
        let eq = SimplySupportedAnalyzer.shear_force_equation(&beam_8m(), 10.0);
        for i in 0..eq.len() {
            assert_eq!(eq.y[i], -eq.y[eq.len() - 1 - i]);
        }
    }

    #[test]
    fn test_zero_rigidity_propagates_non_finite() {
        // Degenerate material: no error raised, NaN appears in the curve
        let beam = Beam::simple_span(8.0, Material::new("broken", 0.0, 1.0));
        let eq = SimplySupportedAnalyzer.deflection_equation(&beam, 10.0);

        assert_eq!(eq.len(), 9);
        assert!(eq.y.iter().any(|v| !v.is_finite()));
    }
}
