//! Physics module for collision detection
//!
//! Provides narrow-phase overlap testing for convex shapes described by
//! support functions. Shape representations and broad-phase pruning live
//! outside this crate.

pub mod gjk;

pub use gjk::{
    check_for_overlap,
    GjkOutcome,
    GjkSolver,
    GjkTermination,
    Simplex,
    SimplexError,
    SimplexVertex,
    SupportMap,
};
