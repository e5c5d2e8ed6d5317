//! # beam_core - Beam Response Curves
//!
//! `beam_core` computes sampled deflection, bending moment, and shear force
//! curves for a uniformly loaded beam under one of two support conditions:
//! a single simply-supported span, or two unequal continuous spans over
//! three supports. It is a pure computation library - it returns point
//! sequences and leaves rendering, input collection, and display entirely
//! to callers.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions over immutable inputs; every call
//!   allocates fresh output and mutates nothing, so calls may run
//!   concurrently without coordination
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Garbage in, garbage out**: degenerate geometry or stiffness is not
//!   guarded at evaluation time and surfaces as non-finite samples;
//!   opt-in `validate()` helpers reject such inputs early
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{Beam, BeamAnalyzer, Material};
//!
//! let analyzer = BeamAnalyzer::new();
//! let material = Material::new("steel", 210_000_000.0, 1.0);
//!
//! // Single 8 m span under 10 kN/m
//! let beam = Beam::simple_span(8.0, material.clone());
//! let shear = analyzer.get_shear_force(&beam, 10.0, "simply-supported").unwrap();
//! assert_eq!(shear.equation.y[0], 40.0);
//!
//! // Continuous over two unequal spans
//! let beam = Beam::two_span(4.0, 6.0, material);
//! let moment = analyzer.get_bending_moment(&beam, 10.0, "two-span-unequal").unwrap();
//! assert_eq!(moment.equation.len(), 1001);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - analyzers, condition dispatch, and sampled results
//! - [`beam`] - beam geometry
//! - [`materials`] - stiffness properties and the built-in catalog
//! - [`errors`] - structured error types

pub mod analysis;
pub mod beam;
pub mod errors;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisResult, BeamAnalyzer, Equation, FullAnalysis, SupportCondition};
pub use beam::Beam;
pub use errors::{BeamError, BeamResult};
pub use materials::Material;
