// PathScout - platform/windows.rs
//
// Windows strategy: query the full path of the process's primary module
// and strip the trailing path component.

use windows::Win32::System::LibraryLoader::GetModuleFileNameW;

use crate::platform::config::ResolveOptions;
use crate::platform::ApplicationPathResolver;
use crate::util::constants;
use crate::util::error::ResolveError;
use crate::util::pathtext::{parent_of, BoundedPath};

const NAME: &str = "windows";

pub struct WindowsResolver;

impl ApplicationPathResolver for WindowsResolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn resolve(
        &self,
        out: &mut BoundedPath,
        options: &ResolveOptions,
    ) -> Result<(), ResolveError> {
        let resolved = module_directory(out.capacity())
            .and_then(|dir| out.set(&dir).map_err(|e| ResolveError::copy_failed(NAME, e)));

        match resolved {
            Ok(()) => Ok(()),
            Err(err) if options.legacy_placeholder => {
                tracing::warn!(
                    error = %err,
                    "Application path resolution failed; returning placeholder"
                );
                out.set(constants::PLACEHOLDER_PATH)
                    .map_err(|e| ResolveError::copy_failed(NAME, e))
            }
            Err(err) => Err(err),
        }
    }
}

/// Directory containing the process's primary module.
///
/// The wide buffer is sized to the configured capacity; a filled buffer
/// means the true path did not fit, which is a failure, never a
/// truncation.
fn module_directory(capacity: usize) -> Result<String, ResolveError> {
    let mut wide = vec![0u16; capacity];
    // Safety: GetModuleFileNameW writes at most `wide.len()` UTF-16 units
    // into the buffer it is handed and returns the count written.
    let len = unsafe { GetModuleFileNameW(None, &mut wide) } as usize;
    if len == 0 || len >= wide.len() {
        return Err(ResolveError::Io {
            strategy: NAME,
            operation: "GetModuleFileNameW",
            source: std::io::Error::last_os_error(),
        });
    }

    let module = String::from_utf16(&wide[..len]).map_err(|_| ResolveError::Query {
        strategy: NAME,
        code: constants::CODE_RESOLUTION_FAILED,
        detail: "module path is not valid UTF-16".to_string(),
    })?;

    match parent_of(&module, '\\') {
        Some(dir) => Ok(dir.to_string()),
        None => Err(ResolveError::Query {
            strategy: NAME,
            code: constants::CODE_RESOLUTION_FAILED,
            detail: format!("module path '{module}' has no directory separator"),
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_directory_matches_current_exe() {
        let expected = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let dir = module_directory(constants::DEFAULT_PATH_CAPACITY).unwrap();
        assert_eq!(dir, expected);
    }

    #[test]
    fn module_directory_with_tiny_buffer_fails() {
        let err = module_directory(4).unwrap_err();
        assert!(
            matches!(err, ResolveError::Io { .. }),
            "expected Io, got {err:?}"
        );
    }
}
