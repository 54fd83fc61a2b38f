//! # Unified Configuration System
//!
//! All configuration structures for the collision engine live here. The
//! collision algorithms never read process-wide state; callers build (or load)
//! one of these values and hand it to the subsystem that needs it.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging level and debug features
//! - **GJK Config**: default search axis, iteration ceiling, degeneracy epsilon
//! - **Application Config**: the two above combined, loadable from TOML or RON

use serde::{Serialize, Deserialize};

use crate::foundation::math::{self, Vec3};
use crate::physics::gjk::{DEGENERATE_EPSILON, MAX_GJK_ITERATIONS};

// Trait and error shared by every configuration type
pub use crate::config::{Config, ConfigError};

/// # GJK Configuration
///
/// Tuning values for the GJK overlap query. The defaults reproduce the
/// reference behaviour: search starts along world right, at most 10 refinement
/// iterations, and triple products with squared magnitude `<= 1e-7` are
/// treated as degenerate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GjkConfig {
    /// Initial search direction used when a query supplies a zero hint
    pub default_direction: [f32; 3],
    /// Maximum number of refinement iterations per query
    pub max_iterations: usize,
    /// Squared-magnitude threshold below which a derived direction is degenerate
    pub degenerate_epsilon: f32,
}

impl GjkConfig {
    /// Create a configuration with the reference defaults
    pub fn new() -> Self {
        Self {
            default_direction: [math::DEFAULT_AXIS.x, math::DEFAULT_AXIS.y, math::DEFAULT_AXIS.z],
            max_iterations: MAX_GJK_ITERATIONS,
            degenerate_epsilon: DEGENERATE_EPSILON,
        }
    }

    /// Set the fallback search direction
    pub fn with_default_direction(mut self, direction: Vec3) -> Self {
        self.default_direction = [direction.x, direction.y, direction.z];
        self
    }

    /// Set the iteration ceiling
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the degeneracy threshold
    pub fn with_degenerate_epsilon(mut self, epsilon: f32) -> Self {
        self.degenerate_epsilon = epsilon;
        self
    }

    /// Fallback search direction as a vector
    pub fn default_direction(&self) -> Vec3 {
        Vec3::from(self.default_direction)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let direction = self.default_direction();
        if !direction.iter().all(|c| c.is_finite()) || math::is_zero(&direction) {
            return Err(ConfigError::Invalid(format!(
                "default_direction must be finite and non-zero, got {:?}",
                self.default_direction
            )));
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid("max_iterations must be at least 1".to_string()));
        }

        if !self.degenerate_epsilon.is_finite() || self.degenerate_epsilon < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "degenerate_epsilon must be finite and non-negative, got {}",
                self.degenerate_epsilon
            )));
        }

        Ok(())
    }
}

impl Default for GjkConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for GjkConfig {}

/// # Engine Configuration
///
/// Core engine behavior: logging and debug features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
    /// Whether to enable debug features
    pub debug_mode: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_mode: cfg!(debug_assertions),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    /// Log filter to install: debug mode raises `log_level` to at least `debug`
    pub fn effective_log_level(&self) -> &str {
        let quiet = matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "off" | "error" | "warn" | "info"
        );
        if self.debug_mode && quiet {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// GJK solver configuration
    pub gjk: GjkConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gjk.validate()
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("collision_engine_{}_{}", std::process::id(), name));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = GjkConfig::default();
        assert_eq!(config.default_direction(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.degenerate_epsilon, 1e-7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_dir = GjkConfig::new().with_default_direction(Vec3::zeros());
        assert!(matches!(zero_dir.validate(), Err(ConfigError::Invalid(_))));

        let no_iterations = GjkConfig::new().with_max_iterations(0);
        assert!(matches!(no_iterations.validate(), Err(ConfigError::Invalid(_))));

        let negative_eps = GjkConfig::new().with_degenerate_epsilon(-1.0);
        assert!(matches!(negative_eps.validate(), Err(ConfigError::Invalid(_))));

        let nan_eps = GjkConfig::new().with_degenerate_epsilon(f32::NAN);
        assert!(matches!(nan_eps.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let text = "[gjk]\nmax_iterations = 32\n";
        let config = ApplicationConfig::from_str_with_format(text, "app.toml").unwrap();

        assert_eq!(config.gjk.max_iterations, 32);
        assert_eq!(config.gjk.default_direction, [1.0, 0.0, 0.0]);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_parse_ron() {
        let text = "(default_direction: (0.0, 1.0, 0.0), max_iterations: 12)";
        let config = GjkConfig::from_str_with_format(text, "gjk.ron").unwrap();

        assert_eq!(config.default_direction(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(config.max_iterations, 12);
        assert_eq!(config.degenerate_epsilon, DEGENERATE_EPSILON);
    }

    #[test]
    fn test_debug_mode_raises_log_level() {
        let release = EngineConfig::new().with_log_level("info").with_debug(false);
        assert_eq!(release.effective_log_level(), "info");

        let debug = EngineConfig::new().with_log_level("info").with_debug(true);
        assert_eq!(debug.effective_log_level(), "debug");

        // Already more verbose than debug; left alone
        let trace = EngineConfig::new().with_log_level("trace").with_debug(true);
        assert_eq!(trace.effective_log_level(), "trace");
    }

    #[test]
    fn test_unsupported_format() {
        let result = GjkConfig::from_str_with_format("", "gjk.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_save_and_load_toml() {
        let path = temp_path("app.toml");
        let config = ApplicationConfig {
            engine: EngineConfig::new().with_log_level("debug"),
            gjk: GjkConfig::new().with_max_iterations(20),
        };

        config.save_to_file(&path).unwrap();
        let loaded = ApplicationConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = GjkConfig::load_from_file(&temp_path("does_not_exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
