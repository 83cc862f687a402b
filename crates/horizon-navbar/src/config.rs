//! Navbar configuration.
//!
//! # Example
//!
//! ```
//! use horizon_navbar::NavbarConfig;
//!
//! let config = NavbarConfig::from_toml_str(r#"
//!     vertical = true
//!     resize_debounce_ms = 250
//! "#).unwrap();
//!
//! assert!(config.vertical);
//! assert!(config.closed);
//! assert_eq!(config.resize_debounce().as_millis(), 250);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::NavbarResult;

/// Construction-time navbar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Lay the bar out vertically. Fixed for the navbar's lifetime.
    pub vertical: bool,
    /// Initial open/closed state.
    pub closed: bool,
    /// Quiet period before a burst of resize events triggers a collapse pass.
    pub resize_debounce_ms: u64,
    /// Re-measure every item on every pass instead of caching widths.
    pub force_recalculate: bool,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            vertical: false,
            closed: true,
            resize_debounce_ms: 100,
            force_recalculate: false,
        }
    }
}

impl NavbarConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> NavbarResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// The resize debounce interval.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Set vertical layout using builder pattern.
    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Set the initial closed state using builder pattern.
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Set width recalculation on every pass using builder pattern.
    pub fn with_force_recalculate(mut self, force: bool) -> Self {
        self.force_recalculate = force;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavbarError;

    #[test]
    fn test_defaults() {
        let config = NavbarConfig::default();
        assert!(!config.vertical);
        assert!(config.closed);
        assert!(!config.force_recalculate);
        assert_eq!(config.resize_debounce(), Duration::from_millis(100));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(NavbarConfig::from_toml_str("").unwrap(), NavbarConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = NavbarConfig::from_toml_str("vertical = \"sideways\"").unwrap_err();
        assert!(matches!(err, NavbarError::Config(_)));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = NavbarConfig::default()
            .with_vertical(true)
            .with_closed(false)
            .with_force_recalculate(true);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(NavbarConfig::from_toml_str(&text).unwrap(), config);
    }
}
