//! Tracing integration for the style system.
//!
//! Style resolution runs on every render and never fails, so problems such as
//! a missing theme section or a stale responsive array are reported through
//! `tracing` instead. Nothing is emitted unless the host application installs
//! a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_system=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate-wide target.
    pub const SYSTEM: &str = "horizon_lattice_system";
    /// Theme loading and theme value lookups.
    pub const THEME: &str = "horizon_lattice_system::theme";
    /// Unary spacing resolution.
    pub const SPACING: &str = "horizon_lattice_system::spacing";
    /// Responsive value handling and breakpoint merging.
    pub const BREAKPOINTS: &str = "horizon_lattice_system::breakpoints";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn targets_are_nested_under_crate() {
        for target in [targets::THEME, targets::SPACING, targets::BREAKPOINTS] {
            assert!(target.starts_with(targets::SYSTEM));
        }
    }
}
