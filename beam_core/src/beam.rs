//! # Beam Geometry
//!
//! A [`Beam`] is span geometry plus a [`Material`]. One span for the
//! simply-supported condition, two for the continuous two-span-unequal
//! condition; the secondary span is simply left at zero when unused.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::Beam;
//! use beam_core::materials::Material;
//!
//! // Single 8 m span
//! let beam = Beam::simple_span(8.0, Material::default());
//! assert_eq!(beam.total_length(), 8.0);
//!
//! // Continuous over two unequal spans
//! let beam = Beam::two_span(4.0, 6.0, Material::default());
//! assert_eq!(beam.total_length(), 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::SupportCondition;
use crate::errors::{BeamError, BeamResult};
use crate::materials::Material;

/// Beam geometry with material reference.
///
/// Immutable after construction. For the two-span condition both spans must
/// be positive for meaningful output; for simply-supported only
/// `primary_span` is read. Nothing is enforced at evaluation time - see
/// [`Beam::validate`] for opt-in checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Length of the first (or only) span
    pub primary_span: f64,

    /// Length of the second span; zero for single-span use
    pub secondary_span: f64,

    /// Material supplying stiffness properties
    pub material: Material,
}

impl Beam {
    /// Create a single-span beam for simply-supported analysis
    pub fn simple_span(span: f64, material: Material) -> Self {
        Self {
            primary_span: span,
            secondary_span: 0.0,
            material,
        }
    }

    /// Create a beam continuous over two spans
    pub fn two_span(primary_span: f64, secondary_span: f64, material: Material) -> Self {
        Self {
            primary_span,
            secondary_span,
            material,
        }
    }

    /// Total beam length (sum of spans)
    pub fn total_length(&self) -> f64 {
        self.primary_span + self.secondary_span
    }

    /// Check the geometry against a support condition.
    ///
    /// The analyzers never call this; degenerate spans propagate as
    /// non-finite values in the sampled curves.
    pub fn validate(&self, condition: SupportCondition) -> BeamResult<()> {
        if self.primary_span <= 0.0 {
            return Err(BeamError::invalid_input(
                "primary_span",
                self.primary_span.to_string(),
                "Span must be positive",
            ));
        }
        if condition == SupportCondition::TwoSpanUnequal && self.secondary_span <= 0.0 {
            return Err(BeamError::invalid_input(
                "secondary_span",
                self.secondary_span.to_string(),
                "Both spans must be positive for a two-span beam",
            ));
        }
        self.material.validate()
    }
}
