//! # Materials
//!
//! Material stiffness definitions for beam analysis. A [`Material`] bundles
//! the two numeric properties the analyzers consume: flexural rigidity (EI)
//! and the secondary scale factor applied during deflection conversion.
//!
//! A small built-in catalog of common section/material pairings is provided
//! for convenience; the analyzers accept any `Material`, wherever its values
//! come from (catalog, user input, file).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::Material;
//!
//! let steel = Material::new("steel", 210_000_000.0, 1.0);
//! assert_eq!(steel.flexural_rigidity(), 210_000_000.0);
//!
//! // Or look one up from the catalog
//! let ipe = Material::by_name("steel-ipe-200").unwrap();
//! assert!(ipe.flexural_rigidity() > 0.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Built-in material catalog.
///
/// Flexural rigidities are E·I for a handful of common steel sections in
/// the rigidity-normalized units the deflection equation expects.
/// `deflection_scale` is the secondary conversion factor applied alongside
/// the rigidity when deflections are turned into display units.
static CATALOG: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        Material::new("steel-ipe-200", 4_074_000.0, 1.0),
        Material::new("steel-ipe-300", 17_556_000.0, 1.0),
        Material::new("steel-hea-200", 7_749_000.0, 1.0),
        Material::new("steel-generic", 210_000_000.0, 1.0),
    ]
});

/// Named stiffness property bundle.
///
/// Immutable after construction and shared by value wherever a [`Beam`]
/// needs it. Construction does not reject degenerate values: a zero
/// `flexural_rigidity` propagates through the deflection equation as
/// non-finite output rather than an error. Callers who want early rejection
/// can use [`Material::validate`].
///
/// [`Beam`]: crate::beam::Beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Identifier for display and catalog lookup
    name: String,

    /// Flexural rigidity EI governing deflection magnitude
    flexural_rigidity: f64,

    /// Secondary scale factor used in deflection unit conversion
    deflection_scale: f64,
}

impl Material {
    /// Create a new material
    pub fn new(name: impl Into<String>, flexural_rigidity: f64, deflection_scale: f64) -> Self {
        Self {
            name: name.into(),
            flexural_rigidity,
            deflection_scale,
        }
    }

    /// Look up a material in the built-in catalog by name
    pub fn by_name(name: &str) -> BeamResult<Material> {
        CATALOG
            .iter()
            .find(|m| m.name == name)
            .cloned()
            .ok_or_else(|| BeamError::material_not_found(name))
    }

    /// Names of all catalog materials, for UI listing
    pub fn catalog_names() -> Vec<&'static str> {
        CATALOG.iter().map(|m| m.name.as_str()).collect()
    }

    /// Material identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flexural rigidity EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.flexural_rigidity
    }

    /// Deflection conversion scale factor
    pub fn deflection_scale(&self) -> f64 {
        self.deflection_scale
    }

    /// Check the material for degenerate stiffness values.
    ///
    /// The analyzers never call this; evaluation with a zero rigidity
    /// produces non-finite deflections rather than an error.
    pub fn validate(&self) -> BeamResult<()> {
        if self.flexural_rigidity <= 0.0 {
            return Err(BeamError::invalid_input(
                "flexural_rigidity",
                self.flexural_rigidity.to_string(),
                "Flexural rigidity must be positive",
            ));
        }
        if self.deflection_scale <= 0.0 {
            return Err(BeamError::invalid_input(
                "deflection_scale",
                self.deflection_scale.to_string(),
                "Deflection scale must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new("steel-generic", 210_000_000.0, 1.0)
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mat = Material::new("test", 1_500_000.0, 2.0);
        assert_eq!(mat.name(), "test");
        assert_eq!(mat.flexural_rigidity(), 1_500_000.0);
        assert_eq!(mat.deflection_scale(), 2.0);
    }

    #[test]
    fn test_catalog_lookup() {
        let mat = Material::by_name("steel-generic").unwrap();
        assert_eq!(mat.flexural_rigidity(), 210_000_000.0);

        let missing = Material::by_name("unobtanium");
        assert!(matches!(missing, Err(BeamError::MaterialNotFound { .. })));
    }

    #[test]
    fn test_catalog_names() {
        let names = Material::catalog_names();
        assert!(names.contains(&"steel-generic"));
        assert!(names.contains(&"steel-ipe-200"));
    }

    #[test]
    fn test_validate() {
        assert!(Material::default().validate().is_ok());

        let zero_ei = Material::new("bad", 0.0, 1.0);
        assert!(matches!(
            zero_ei.validate(),
            Err(BeamError::InvalidInput { .. })
        ));

        let zero_scale = Material::new("bad", 1.0, 0.0);
        assert!(zero_scale.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let mat = Material::by_name("steel-ipe-200").unwrap();
        let json = serde_json::to_string(&mat).unwrap();
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, parsed);
    }
}
