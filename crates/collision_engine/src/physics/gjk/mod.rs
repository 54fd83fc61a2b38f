//! GJK (Gilbert-Johnson-Keerthi) boolean overlap test
//!
//! Decides whether two convex shapes overlap by searching the Minkowski
//! difference `A - B` for a tetrahedron that encloses the origin. Shapes are
//! accessed only through their support functions ([`SupportMap`]).
//!
//! # Algorithm
//!
//! 1. Reset the caller's [`Simplex`] and add the support point along the
//!    start direction (the hint, or the configured default axis).
//! 2. Repeatedly add the support point along the current search direction.
//!    If it does not pass the origin (`dot <= 0`) the shapes are separated.
//! 3. Reduce the simplex toward the origin. A tetrahedron with the origin
//!    behind all three new faces means the shapes overlap.
//!
//! The loop is capped at [`GjkConfig::max_iterations`]; running out of
//! iterations is reported as no overlap.
//!
//! Touching shapes count as separated: a support point exactly on the
//! separating plane (`dot == 0`) ends the query with no overlap.
//!
//! The terminal simplex is left in the caller's storage, so a later stage
//! (for example penetration depth) can pick it up.

pub mod simplex;
pub mod support;

pub use simplex::{Reduction, Simplex, SimplexError, SimplexVertex, MAX_SIMPLEX_SIZE};
pub use support::SupportMap;

use crate::core::config::{ConfigError, GjkConfig};
use crate::foundation::math::{self, Vec3};

/// Default iteration ceiling for one overlap query
pub const MAX_GJK_ITERATIONS: usize = 10;

/// Squared magnitude at or below which a derived search direction is degenerate
///
/// Single-precision triple products of nearly colinear edges land around
/// this size; below it the direction is replaced by a perpendicular or a
/// face normal.
pub const DEGENERATE_EPSILON: f32 = 1e-7;

/// Why an overlap query stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GjkTermination {
    /// The simplex enclosed the origin
    Enclosed,
    /// A support point failed to pass the origin
    Separated,
    /// An append was attempted on a full simplex
    SimplexOverflow,
    /// The iteration ceiling was reached
    IterationLimit,
}

/// Result of an overlap query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GjkOutcome {
    /// Whether the shapes overlap
    pub overlapping: bool,
    /// Why the query stopped
    pub termination: GjkTermination,
    /// Refinement iterations performed
    pub iterations: usize,
}

impl GjkOutcome {
    fn new(termination: GjkTermination, iterations: usize) -> Self {
        Self {
            overlapping: termination == GjkTermination::Enclosed,
            termination,
            iterations,
        }
    }
}

/// GJK overlap solver holding an immutable configuration
#[derive(Debug, Clone, Default)]
pub struct GjkSolver {
    config: GjkConfig,
}

impl GjkSolver {
    /// Create a solver from a validated configuration
    pub fn new(config: GjkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Solver configuration
    pub fn config(&self) -> &GjkConfig {
        &self.config
    }

    /// Returns whether `a` and `b` overlap
    ///
    /// `first_direction` is an optional starting hint; pass the zero vector
    /// for no preference.
    pub fn check_for_overlap<A, B>(
        &self,
        simplex: &mut Simplex,
        a: &A,
        b: &B,
        first_direction: &Vec3,
    ) -> bool
    where
        A: SupportMap + ?Sized,
        B: SupportMap + ?Sized,
    {
        self.query(simplex, a, b, first_direction).overlapping
    }

    /// Runs an overlap query and reports how it terminated
    ///
    /// [`GjkTermination::SimplexOverflow`] cannot be produced here with a
    /// well-behaved [`Simplex`]: it is reset right before the first append and
    /// every non-enclosing reduction leaves at most three vertices. The overflow
    /// path itself is covered by the `Simplex::add_point` tests.
    pub fn query<A, B>(
        &self,
        simplex: &mut Simplex,
        a: &A,
        b: &B,
        first_direction: &Vec3,
    ) -> GjkOutcome
    where
        A: SupportMap + ?Sized,
        B: SupportMap + ?Sized,
    {
        simplex.init();

        let start = if math::is_zero(first_direction) {
            self.config.default_direction()
        } else {
            *first_direction
        };

        // Unreachable after init(); kept so a full simplex never panics
        if let Err(err) = simplex.add_point(a.support(&start), b.support(&-start)) {
            log::warn!("GJK: {err} on first support point");
            return GjkOutcome::new(GjkTermination::SimplexOverflow, 0);
        }

        let mut direction = -start;

        for iteration in 1..=self.config.max_iterations {
            let added = match simplex.add_point(a.support(&direction), b.support(&-direction)) {
                Ok(point) => point,
                // check() leaves at most 3 vertices unless it reports enclosure
                Err(err) => {
                    log::warn!("GJK: {err} at iteration {iteration}, reporting no overlap");
                    return GjkOutcome::new(GjkTermination::SimplexOverflow, iteration);
                }
            };

            log::trace!(
                "GJK: iteration {} direction {:?} added {:?} ({} vertices)",
                iteration,
                direction,
                added,
                simplex.len()
            );

            if added.dot(&direction) <= 0.0 {
                log::debug!("GJK: separated after {iteration} iterations");
                return GjkOutcome::new(GjkTermination::Separated, iteration);
            }

            if simplex.check_with_epsilon(&mut direction, self.config.degenerate_epsilon) {
                log::debug!("GJK: origin enclosed after {iteration} iterations");
                return GjkOutcome::new(GjkTermination::Enclosed, iteration);
            }
        }

        log::warn!(
            "GJK: no verdict within {} iterations, reporting no overlap",
            self.config.max_iterations
        );
        GjkOutcome::new(GjkTermination::IterationLimit, self.config.max_iterations)
    }
}

/// Overlap test with the default configuration
///
/// Equivalent to `GjkSolver::default().check_for_overlap(..)`.
pub fn check_for_overlap<A, B>(simplex: &mut Simplex, a: &A, b: &B, first_direction: &Vec3) -> bool
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    GjkSolver::default().check_for_overlap(simplex, a, b, first_direction)
}
