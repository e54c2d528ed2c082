//! Centralized constants for the Alignak environment workspace.
//!
//! Section names, section-family prefixes and interpolation limits shared by
//! the loader, the resolver and the CLI.

// =============================================================================
// Section naming conventions
// =============================================================================

/// Name of the section whose keys are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Section holding the Alignak monitoring configuration.
pub const SECTION_CONFIGURATION: &str = "alignak-configuration";

/// Prefix of the sections describing one daemon each.
pub const DAEMON_PREFIX: &str = "daemon.";

/// Prefix of the sections describing one module each.
pub const MODULE_PREFIX: &str = "module.";

/// Keys of the configuration section that reference monitored-object files.
pub const CFG_KEY_PREFIX: &str = "cfg";

/// Key declaring a daemon's type.
pub const DAEMON_TYPE_KEY: &str = "type";

/// Key declaring a daemon's comma-separated module list.
pub const DAEMON_MODULES_KEY: &str = "modules";

/// Reserved key added to every section returned by a section search.
pub const IMPORTED_FROM_KEY: &str = "imported_from";

// =============================================================================
// Interpolation
// =============================================================================

/// Maximum nesting of `%(name)s` references resolved inside one value.
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

// =============================================================================
// Export
// =============================================================================

/// Alignak version exported alongside the configuration variables.
pub const ALIGNAK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shell variable carrying [`ALIGNAK_VERSION`].
pub const VERSION_VARIABLE: &str = "ALIGNAK_VERSION";
