//! # Two-Span Continuous Analysis
//!
//! Response equations for a beam continuous over two unequal spans `L1`
//! and `L2` on three supports, under a full uniform load `w`. The
//! structure is statically indeterminate: three vertical reactions but
//! only two equilibrium equations. The interior-support moment from the
//! standard two-span continuous-beam formula closes the system, and the
//! reactions follow from equilibrium (see [`SupportReactions`]).
//!
//! All three quantities are piecewise in the absolute position
//! `x ∈ [0, L1+L2]`, split at the interior support `x = L1`. The branch
//! selection at exactly `x = L1` is deliberate and must not be reordered:
//! moment uses the left-side formula (omitting `R2`, which is not yet felt
//! approaching from the left) so the moment curve stays single-valued at
//! the support, while shear switches to the post-reaction value so the
//! jump a point reaction introduces is visible between adjacent samples.
//! Plotting relies on that jump to render a break.
//!
//! Each curve is sampled at 1000 equal intervals over the total length,
//! values rounded to one decimal place; deflection carries the same unit
//! scaling as the simply-supported analyzer.

use serde::{Deserialize, Serialize};

use crate::analysis::{round1, Equation};
use crate::beam::Beam;

/// Intervals sampled across the total beam length (1001 points)
const INTERVALS: usize = 1000;

/// Support reactions for the two-span continuous beam.
///
/// Transient per-call values: solved from `(L1, L2, w)` at the start of
/// each equation evaluation and consumed by the piecewise formulas. Never
/// cached across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportReactions {
    /// Moment at the interior support
    pub m1: f64,
    /// Vertical reaction at the left outer support
    pub r1: f64,
    /// Vertical reaction at the interior support
    pub r2: f64,
    /// Vertical reaction at the right outer support
    pub r3: f64,
}

impl SupportReactions {
    /// Solve the reactions for spans `l1`, `l2` under uniform load `w`.
    ///
    /// The interior moment compatibility condition supplies the third
    /// equation; `R2` then falls out of vertical equilibrium. A zero total
    /// length divides by zero and propagates as non-finite values.
    pub fn solve(l1: f64, l2: f64, w: f64) -> Self {
        let m1 = -(w * l2.powi(3) + w * l1.powi(3)) / (8.0 * (l1 + l2));
        let r1 = m1 / l1 + w * l1 / 2.0;
        let r3 = m1 / l2 + w * l2 / 2.0;
        let r2 = w * l1 + w * l2 - r1 - r3;

        Self { m1, r1, r2, r3 }
    }
}

/// Analyzer for a beam continuous over two unequal spans.
///
/// Stateless; reactions are re-solved on every equation call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TwoSpanUnequalAnalyzer;

impl TwoSpanUnequalAnalyzer {
    /// Sample the deflection curve over 1000 equal intervals
    pub fn deflection_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l1 = beam.primary_span;
        let l2 = beam.secondary_span;
        let ei = beam.material.flexural_rigidity();
        let scale = beam.material.deflection_scale();
        let reactions = SupportReactions::solve(l1, l2, load);

        self.sample(beam, |pos| {
            let raw = if pos <= l1 {
                (pos / (24.0 * ei))
                    * (4.0 * reactions.r1 * pos.powi(2) - load * pos.powi(3)
                        + load * l1.powi(3)
                        - 4.0 * reactions.r1 * l1 * l1)
            } else {
                let s = pos - l1;
                ((reactions.r1 * pos / 6.0) * (pos * pos - l1 * l1)
                    + (reactions.r2 * s / 6.0) * (s * s - 3.0 * l1 * s + 3.0 * l1 * l1)
                    - reactions.r2 * l1.powi(3) / 6.0
                    - (load * s / 24.0) * (s.powi(3) - l2.powi(3)))
                    / ei
            };

            round1(raw * 1000.0 * scale) * 1e9
        })
    }

    /// Sample the bending moment curve over 1000 equal intervals
    pub fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l1 = beam.primary_span;
        let total = beam.total_length();
        let reactions = SupportReactions::solve(l1, beam.secondary_span, load);

        self.sample(beam, |pos| {
            let moment = if pos == 0.0 || pos == total {
                // Pinned ends carry no moment
                0.0
            } else if pos < l1 {
                -(reactions.r1 * pos - 0.5 * load * pos * pos)
            } else if pos == l1 {
                // Left-side formula at the support: R2 not yet felt, so the
                // moment curve stays continuous here
                -(reactions.r1 * l1 - 0.5 * load * l1 * l1)
            } else {
                -(reactions.r1 * pos + reactions.r2 * (pos - l1) - 0.5 * load * pos * pos)
            };

            round1(moment)
        })
    }

    /// Sample the shear force curve over 1000 equal intervals
    pub fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l1 = beam.primary_span;
        let reactions = SupportReactions::solve(l1, beam.secondary_span, load);

        self.sample(beam, |pos| {
            let shear = if pos < l1 {
                reactions.r1 - load * pos
            } else if pos == l1 {
                // Post-reaction value: the jump at the interior support is
                // recorded between this sample and its left neighbor
                reactions.r2 - load * pos
            } else {
                reactions.r2 - load * (pos - l1)
            };

            round1(shear)
        })
    }

    /// Evaluate `f` at 1001 equally spaced positions over the total length.
    ///
    /// The first and last positions are pinned to exactly 0 and the total
    /// length so the endpoint branches of the piecewise formulas match on
    /// float equality.
    fn sample(&self, beam: &Beam, f: impl Fn(f64) -> f64) -> Equation {
        let total = beam.total_length();
        let step = total / INTERVALS as f64;

        let mut x = Vec::with_capacity(INTERVALS + 1);
        let mut y = Vec::with_capacity(INTERVALS + 1);

        for i in 0..=INTERVALS {
            let pos = if i == INTERVALS {
                total
            } else {
                i as f64 * step
            };
            x.push(pos);
            y.push(f(pos));
        }

        Equation { x, y }
    }
}
