//! # Collision Engine
//!
//! Narrow-phase collision detection for convex shapes using the
//! Gilbert-Johnson-Keerthi (GJK) algorithm.
//!
//! ## Features
//!
//! - **Support-function driven**: any convex shape implementing [`SupportMap`]
//!   can be tested against any other
//! - **Allocation free**: the simplex is a fixed four-vertex value owned by the caller
//! - **Configurable**: default search axis, iteration ceiling and degeneracy
//!   epsilon are plain configuration, loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! // Unit sphere at the origin and one centred at (1.5, 0, 0)
//! let a = |d: &Vec3| d.normalize();
//! let b = |d: &Vec3| Vec3::new(1.5, 0.0, 0.0) + d.normalize();
//!
//! let mut simplex = Simplex::new();
//! assert!(check_for_overlap(&mut simplex, &a, &b, &Vec3::zeros()));
//! ```
//!
//! [`SupportMap`]: physics::SupportMap

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::math::Vec3,
        physics::{
            check_for_overlap,
            GjkOutcome,
            GjkSolver,
            GjkTermination,
            Simplex,
            SupportMap,
        },
        core::config::{ApplicationConfig, Config, ConfigError, GjkConfig},
    };
}
