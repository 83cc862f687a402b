//! Tracing targets used by the navbar crates.
//!
//! The crates never install a subscriber. To see logs, install one in your
//! application and filter by the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_navbar::collapse=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_navbar_core";
    /// Signal emission target.
    pub const SIGNAL: &str = "horizon_navbar_core::signal";
    /// Timer queue target.
    pub const TIMER: &str = "horizon_navbar_core::timer";
    /// Debouncer target.
    pub const DEBOUNCE: &str = "horizon_navbar_core::debounce";
    /// Resize notification target.
    pub const RESIZE: &str = "horizon_navbar_core::resize";
    /// Navbar widget lifecycle target.
    pub const NAVBAR: &str = "horizon_navbar::navbar";
    /// Collapse decisions target.
    pub const COLLAPSE: &str = "horizon_navbar::collapse";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::SIGNAL,
            targets::TIMER,
            targets::DEBOUNCE,
            targets::RESIZE,
        ] {
            assert!(target.starts_with(targets::CORE));
        }
        assert!(targets::COLLAPSE.starts_with("horizon_navbar::"));
        assert!(targets::NAVBAR.starts_with("horizon_navbar::"));
    }
}
