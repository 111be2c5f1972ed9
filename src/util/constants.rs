// PathScout - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Extension metadata
// =============================================================================

/// Extension display name.
pub const EXTENSION_NAME: &str = "PathScout";

/// Current extension version.
pub const EXTENSION_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scripting namespace the host registers the extension under.
pub const SCRIPT_MODULE: &str = "paths";

/// Function name within the scripting namespace.
pub const SCRIPT_FUNCTION: &str = "application";

// =============================================================================
// Path buffer sizing
// =============================================================================

/// Default capacity in bytes for the resolved-path buffer.
///
/// Linux PATH_MAX is 4096 and is the largest ceiling among supported
/// platforms (Windows MAX_PATH is 260); two extra bytes leave room for a
/// separator and a terminator at the native boundary.
pub const DEFAULT_PATH_CAPACITY: usize = 4098;

/// Minimum user-configurable path buffer capacity.
pub const MIN_PATH_CAPACITY: usize = 16;

/// Maximum user-configurable path buffer capacity.
pub const MAX_PATH_CAPACITY: usize = 64 * 1024;

// =============================================================================
// Resolution behaviour
// =============================================================================

/// Placeholder returned by the Linux and Windows strategies when resolution
/// fails and the legacy compatibility flag is on. Scripts written against
/// the historical behaviour receive `"."` instead of an error.
pub const PLACEHOLDER_PATH: &str = ".";

/// Default for the legacy placeholder compatibility flag.
pub const DEFAULT_LEGACY_PLACEHOLDER: bool = true;

// =============================================================================
// Error codes surfaced to the scripting layer
// =============================================================================

/// Platform query failed and the OS supplied no code of its own.
pub const CODE_RESOLUTION_FAILED: i32 = -1;

/// Resolved path does not fit the configured buffer capacity.
pub const CODE_DOES_NOT_FIT: i32 = -2;

/// Platform context object or managed-runtime attach unavailable.
pub const CODE_CONTEXT_UNAVAILABLE: i32 = -3;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
