// PathScout - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging, and every
// error maps to a numeric code for the scripting boundary.

use std::fmt;
use std::io;

use crate::util::constants;
use crate::util::pathtext::CopyTooLong;

/// Failure modes of application-directory resolution.
///
/// `Io` and `Query` both mean the platform query itself failed; `Io` is used
/// where the OS handed back a real `io::Error` worth keeping on the chain.
#[derive(Debug)]
pub enum ResolveError {
    /// A platform syscall or API call failed with an OS error.
    Io {
        strategy: &'static str,
        operation: &'static str,
        source: io::Error,
    },

    /// A platform query failed without an `io::Error` to attach.
    Query {
        strategy: &'static str,
        code: i32,
        detail: String,
    },

    /// The resolved path does not fit the caller-supplied capacity.
    /// Truncated output is never produced instead.
    DoesNotFit {
        strategy: &'static str,
        needed: usize,
        capacity: usize,
    },

    /// The platform context object or managed-runtime attach was
    /// unavailable (mobile and web strategies).
    ContextUnavailable { detail: String },
}

impl ResolveError {
    /// Numeric code surfaced to the scripting layer.
    ///
    /// OS-reported codes pass through where the platform supplied one;
    /// otherwise the taxonomy codes from `util::constants` apply.
    pub fn code(&self) -> i32 {
        match self {
            Self::Io { source, .. } => source
                .raw_os_error()
                .unwrap_or(constants::CODE_RESOLUTION_FAILED),
            Self::Query { code, .. } => *code,
            Self::DoesNotFit { .. } => constants::CODE_DOES_NOT_FIT,
            Self::ContextUnavailable { .. } => constants::CODE_CONTEXT_UNAVAILABLE,
        }
    }

    /// Build a `DoesNotFit` from a failed bounded copy.
    pub(crate) fn copy_failed(strategy: &'static str, e: CopyTooLong) -> Self {
        Self::DoesNotFit {
            strategy,
            needed: e.needed,
            capacity: e.capacity,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                strategy,
                operation,
                source,
            } => write!(f, "{strategy}: {operation} failed: {source}"),
            Self::Query {
                strategy,
                code,
                detail,
            } => write!(f, "{strategy}: path query failed (code {code}): {detail}"),
            Self::DoesNotFit {
                strategy,
                needed,
                capacity,
            } => write!(
                f,
                "{strategy}: resolved path of {needed} bytes does not fit \
                 buffer capacity of {capacity} bytes"
            ),
            Self::ContextUnavailable { detail } => {
                write!(f, "platform context unavailable: {detail}")
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_code_passes_through_os_error() {
        let err = ResolveError::Io {
            strategy: "linux",
            operation: "readlink /proc/self/exe",
            source: io::Error::from_raw_os_error(2),
        };
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn taxonomy_codes_for_non_os_failures() {
        let no_fit = ResolveError::DoesNotFit {
            strategy: "web",
            needed: 40,
            capacity: 4,
        };
        assert_eq!(no_fit.code(), constants::CODE_DOES_NOT_FIT);

        let no_ctx = ResolveError::ContextUnavailable {
            detail: "thread attach failed".to_string(),
        };
        assert_eq!(no_ctx.code(), constants::CODE_CONTEXT_UNAVAILABLE);
    }

    #[test]
    fn display_names_the_strategy_and_sizes() {
        let err = ResolveError::DoesNotFit {
            strategy: "web",
            needed: 40,
            capacity: 4,
        };
        let text = err.to_string();
        assert!(text.contains("web"), "missing strategy in: {text}");
        assert!(text.contains("40"), "missing needed size in: {text}");
        assert!(text.contains('4'), "missing capacity in: {text}");
    }
}
