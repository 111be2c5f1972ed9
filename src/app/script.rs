// PathScout - app/script.rs
//
// The callable the host binding registers as `paths.application()`: no
// arguments in, one string out, or a scripting-level error carrying a
// numeric code. The binding must raise on failure -- it never receives a
// partially-written value to continue with.

use std::fmt;

use crate::app::resolver;
use crate::platform::config::ResolveOptions;
use crate::util::error::ResolveError;

/// Failure surfaced to the scripting environment.
///
/// Renders the way scripts have always seen it -- `Unable to locate
/// application path: (<code>)` -- with the resolver failure preserved on
/// the error chain for host-side logs.
#[derive(Debug)]
pub struct ScriptError {
    code: i32,
    source: ResolveError,
}

impl ScriptError {
    /// Numeric code the binding passes along with the raised error.
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to locate application path: ({})", self.code)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<ResolveError> for ScriptError {
    fn from(source: ResolveError) -> Self {
        Self {
            code: source.code(),
            source,
        }
    }
}

/// `paths.application()` with default options.
pub fn application_path() -> Result<String, ScriptError> {
    application_path_with(&ResolveOptions::default())
}

/// `paths.application()` with host-validated options (see
/// `platform::config::load_settings`).
pub fn application_path_with(options: &ResolveOptions) -> Result<String, ScriptError> {
    resolver::resolve_application_directory(options).map_err(|err| {
        tracing::error!(error = %err, code = err.code(), "Application path query failed");
        ScriptError::from(err)
    })
}

// =============================================================================
// Tests
// =============================================================================
