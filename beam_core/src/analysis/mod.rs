//! # Beam Analysis
//!
//! Sampled response curves for uniformly loaded beams. Two support
//! conditions are available, each backed by closed-form equations:
//!
//! - [`simply_supported`] - single span, pinned at both ends
//! - [`two_span_unequal`] - continuous over two unequal spans, three
//!   supports, statically indeterminate (reactions solved before the
//!   piecewise equations are evaluated)
//!
//! [`BeamAnalyzer`] is the entry point: it owns the condition-to-analyzer
//! registry and wraps each sampled curve with the inputs that produced it.
//!
//! ## Sign Convention
//!
//! The equations keep the plotting-oriented convention: the midspan moment
//! of a sagging beam comes out negative, and deflection is reported in the
//! 1e9-scaled display unit.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::analysis::BeamAnalyzer;
//! use beam_core::beam::Beam;
//! use beam_core::materials::Material;
//!
//! let analyzer = BeamAnalyzer::new();
//! let beam = Beam::simple_span(8.0, Material::new("steel", 210_000_000.0, 1.0));
//!
//! let result = analyzer.get_shear_force(&beam, 10.0, "simply-supported").unwrap();
//! assert_eq!(result.equation.y[0], 40.0);
//! ```

pub mod simply_supported;
pub mod two_span_unequal;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::errors::{BeamError, BeamResult};

pub use simply_supported::SimplySupportedAnalyzer;
pub use two_span_unequal::{SupportReactions, TwoSpanUnequalAnalyzer};

/// Round to one decimal place, the resolution of every sampled coordinate.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// =============================================================================
// SUPPORT CONDITION
// =============================================================================

/// Support condition selecting which analyzer handles a beam.
///
/// The string identifiers are the wire/API names used by callers:
/// `"simply-supported"` and `"two-span-unequal"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SupportCondition {
    /// Single span resting on two end supports, no moment restraint
    #[default]
    SimplySupported,

    /// Continuous over two unequal spans on three supports
    TwoSpanUnequal,
}

impl SupportCondition {
    /// All available conditions for UI selection
    pub const ALL: [SupportCondition; 2] = [
        SupportCondition::SimplySupported,
        SupportCondition::TwoSpanUnequal,
    ];

    /// The string identifier for this condition
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportCondition::SimplySupported => "simply-supported",
            SupportCondition::TwoSpanUnequal => "two-span-unequal",
        }
    }
}

impl FromStr for SupportCondition {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simply-supported" => Ok(SupportCondition::SimplySupported),
            "two-span-unequal" => Ok(SupportCondition::TwoSpanUnequal),
            other => Err(BeamError::invalid_condition(other)),
        }
    }
}

impl std::fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// SAMPLED EQUATION & RESULT
// =============================================================================

/// A sampled response curve: positions along the beam and the response
/// value at each position.
///
/// Both sequences have equal length; `x` ascends from 0 to the total beam
/// length. Freshly allocated for every analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    /// Sample positions along the beam, ascending
    pub x: Vec<f64>,
    /// Response value (deflection, moment, or shear) at each position
    pub y: Vec<f64>,
}

impl Equation {
    /// Number of sample points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the curve holds no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Result of one analysis call: the inputs plus the sampled curve.
///
/// Ephemeral - returned per call and never cached or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Beam the curve was computed for
    pub beam: Beam,
    /// Uniform load magnitude (force per unit length)
    pub load: f64,
    /// Sampled response curve
    pub equation: Equation,
}

/// All three response curves for one beam/load pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    pub deflection: AnalysisResult,
    pub bending_moment: AnalysisResult,
    pub shear_force: AnalysisResult,
}

// =============================================================================
// ANALYZER DISPATCH
// =============================================================================

/// Closed set of analyzer variants behind a common equation interface.
///
/// The two variants share no implementation, so this is plain enum
/// dispatch rather than a trait object.
#[derive(Debug, Clone)]
pub enum Analyzer {
    SimplySupported(SimplySupportedAnalyzer),
    TwoSpanUnequal(TwoSpanUnequalAnalyzer),
}

impl Analyzer {
    /// Sampled deflection curve for `beam` under uniform `load`
    pub fn deflection_equation(&self, beam: &Beam, load: f64) -> Equation {
        match self {
            Analyzer::SimplySupported(a) => a.deflection_equation(beam, load),
            Analyzer::TwoSpanUnequal(a) => a.deflection_equation(beam, load),
        }
    }

    /// Sampled bending moment curve
    pub fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation {
        match self {
            Analyzer::SimplySupported(a) => a.bending_moment_equation(beam, load),
            Analyzer::TwoSpanUnequal(a) => a.bending_moment_equation(beam, load),
        }
    }

    /// Sampled shear force curve
    pub fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation {
        match self {
            Analyzer::SimplySupported(a) => a.shear_force_equation(beam, load),
            Analyzer::TwoSpanUnequal(a) => a.shear_force_equation(beam, load),
        }
    }
}

/// Entry point for beam analysis.
///
/// Owns an immutable mapping from [`SupportCondition`] to analyzer,
/// built once at construction. Dispatch is the only validation performed
/// here: an unknown condition string fails with
/// [`BeamError::InvalidCondition`] before any computation; beam geometry
/// and load sign are not checked.
#[derive(Debug, Clone)]
pub struct BeamAnalyzer {
    registry: Vec<(SupportCondition, Analyzer)>,
}

impl BeamAnalyzer {
    /// Create an analyzer facade with both support conditions registered
    pub fn new() -> Self {
        Self {
            registry: vec![
                (
                    SupportCondition::SimplySupported,
                    Analyzer::SimplySupported(SimplySupportedAnalyzer),
                ),
                (
                    SupportCondition::TwoSpanUnequal,
                    Analyzer::TwoSpanUnequal(TwoSpanUnequalAnalyzer),
                ),
            ],
        }
    }

    /// Look up the analyzer registered for a condition identifier
    fn analyzer_for(&self, condition: &str) -> BeamResult<&Analyzer> {
        let condition: SupportCondition = condition.parse()?;
        self.registry
            .iter()
            .find(|(c, _)| *c == condition)
            .map(|(_, analyzer)| analyzer)
            .ok_or_else(|| BeamError::invalid_condition(condition.as_str()))
    }

    /// Sampled deflection curve wrapped with its inputs
    pub fn get_deflection(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> BeamResult<AnalysisResult> {
        let analyzer = self.analyzer_for(condition)?;
        Ok(AnalysisResult {
            beam: beam.clone(),
            load,
            equation: analyzer.deflection_equation(beam, load),
        })
    }

    /// Sampled bending moment curve wrapped with its inputs
    pub fn get_bending_moment(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> BeamResult<AnalysisResult> {
        let analyzer = self.analyzer_for(condition)?;
        Ok(AnalysisResult {
            beam: beam.clone(),
            load,
            equation: analyzer.bending_moment_equation(beam, load),
        })
    }

    /// Sampled shear force curve wrapped with its inputs
    pub fn get_shear_force(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> BeamResult<AnalysisResult> {
        let analyzer = self.analyzer_for(condition)?;
        Ok(AnalysisResult {
            beam: beam.clone(),
            load,
            equation: analyzer.shear_force_equation(beam, load),
        })
    }

    /// All three response curves in one call
    pub fn analyze(&self, beam: &Beam, load: f64, condition: &str) -> BeamResult<FullAnalysis> {
        Ok(FullAnalysis {
            deflection: self.get_deflection(beam, load, condition)?,
            bending_moment: self.get_bending_moment(beam, load, condition)?,
            shear_force: self.get_shear_force(beam, load, condition)?,
        })
    }
}

impl Default for BeamAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;

    fn test_beam() -> Beam {
        Beam::simple_span(8.0, Material::new("steel", 210_000_000.0, 1.0))
    }

    #[test]
    fn test_condition_roundtrip() {
        for condition in SupportCondition::ALL {
            let parsed: SupportCondition = condition.as_str().parse().unwrap();
            assert_eq!(parsed, condition);
        }
    }

    #[test]
    fn test_condition_parse_failure() {
        let err = "three-span".parse::<SupportCondition>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONDITION");
    }

    #[test]
    fn test_condition_serde_names() {
        let json = serde_json::to_string(&SupportCondition::TwoSpanUnequal).unwrap();
        assert_eq!(json, "\"two-span-unequal\"");
    }

    #[test]
    fn test_dispatch_failure() {
        let analyzer = BeamAnalyzer::new();
        let beam = test_beam();

        let err = analyzer
            .get_deflection(&beam, 10.0, "three-span")
            .unwrap_err();
        assert!(matches!(err, BeamError::InvalidCondition { .. }));

        assert!(analyzer.get_bending_moment(&beam, 10.0, "cantilever").is_err());
        assert!(analyzer.get_shear_force(&beam, 10.0, "").is_err());
    }

    #[test]
    fn test_dispatch_selects_analyzer() {
        let analyzer = BeamAnalyzer::new();
        let beam = test_beam();

        // Sample counts differ between the two analyzers
        let simple = analyzer
            .get_bending_moment(&beam, 10.0, "simply-supported")
            .unwrap();
        assert_eq!(simple.equation.len(), 11);

        let two_span_beam =
            Beam::two_span(4.0, 6.0, Material::new("steel", 210_000_000.0, 1.0));
        let continuous = analyzer
            .get_bending_moment(&two_span_beam, 10.0, "two-span-unequal")
            .unwrap();
        assert_eq!(continuous.equation.len(), 1001);
    }

    #[test]
    fn test_result_wraps_inputs() {
        let analyzer = BeamAnalyzer::new();
        let beam = test_beam();

        let result = analyzer
            .get_shear_force(&beam, 10.0, "simply-supported")
            .unwrap();
        assert_eq!(result.beam, beam);
        assert_eq!(result.load, 10.0);
        assert_eq!(result.equation.x.len(), result.equation.y.len());
    }

    #[test]
    fn test_analyze_returns_all_curves() {
        let analyzer = BeamAnalyzer::new();
        let beam = test_beam();

        let full = analyzer.analyze(&beam, 10.0, "simply-supported").unwrap();
        assert_eq!(full.deflection.equation.len(), 9);
        assert_eq!(full.bending_moment.equation.len(), 11);
        assert_eq!(full.shear_force.equation.len(), 11);
    }

    #[test]
    fn test_result_serialization() {
        let analyzer = BeamAnalyzer::new();
        let beam = test_beam();

        let result = analyzer
            .get_bending_moment(&beam, 10.0, "simply-supported")
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(-80.04), -80.0);
        assert_eq!(round1(0.0), 0.0);
    }
}
