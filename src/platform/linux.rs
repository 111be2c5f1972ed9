// PathScout - platform/linux.rs
//
// Linux strategy: resolve the executable's directory through the
// /proc/self/exe symlink, falling back to the loader-recorded AT_EXECFN
// entry of the auxiliary vector, canonicalised through realpath.

use std::ffi::CStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::platform::config::ResolveOptions;
use crate::platform::ApplicationPathResolver;
use crate::util::constants;
use crate::util::error::ResolveError;
use crate::util::pathtext::BoundedPath;

const NAME: &str = "linux";

const PROC_SELF_EXE: &str = "/proc/self/exe";

pub struct LinuxResolver;

impl ApplicationPathResolver for LinuxResolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn resolve(
        &self,
        out: &mut BoundedPath,
        options: &ResolveOptions,
    ) -> Result<(), ResolveError> {
        let resolved = exe_symlink_directory(out.capacity())
            .or_else(|primary| {
                tracing::warn!(
                    error = %primary,
                    "{} unusable; falling back to AT_EXECFN",
                    PROC_SELF_EXE
                );
                execfn_directory()
            })
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

/// Directory containing the image `/proc/self/exe` points at.
///
/// A result that would not fit `capacity` is reported as a failure so the
/// caller falls through to the auxiliary-vector route.
fn exe_symlink_directory(capacity: usize) -> Result<String, ResolveError> {
    let exe = fs::read_link(PROC_SELF_EXE).map_err(|source| ResolveError::Io {
        strategy: NAME,
        operation: "readlink /proc/self/exe",
        source,
    })?;
    let dir = directory_of(&exe)?;
    if dir.len() >= capacity {
        return Err(ResolveError::DoesNotFit {
            strategy: NAME,
            needed: dir.len(),
            capacity,
        });
    }
    Ok(dir)
}

/// Directory containing the pathname the loader recorded for this process.
///
/// AT_EXECFN is the argv[0]-equivalent the kernel stored at exec time; it
/// may be relative, so it is canonicalised before taking the parent.
fn execfn_directory() -> Result<String, ResolveError> {
    let raw = unsafe { libc::getauxval(libc::AT_EXECFN) };
    if raw == 0 {
        return Err(ResolveError::Query {
            strategy: NAME,
            code: constants::CODE_RESOLUTION_FAILED,
            detail: "auxiliary vector has no AT_EXECFN entry".to_string(),
        });
    }
    // Safety: a non-zero AT_EXECFN value is a NUL-terminated string owned
    // by the kernel-provided process image, valid for the process lifetime.
    let recorded = unsafe { CStr::from_ptr(raw as *const libc::c_char) };
    let recorded = Path::new(std::ffi::OsStr::from_bytes(recorded.to_bytes()));
    canonical_directory_of(recorded)
}

/// Canonicalise `path` (realpath) and return its containing directory.
fn canonical_directory_of(path: &Path) -> Result<String, ResolveError> {
    let absolute = fs::canonicalize(path).map_err(|source| ResolveError::Io {
        strategy: NAME,
        operation: "canonicalize recorded executable path",
        source,
    })?;
    directory_of(&absolute)
}

/// The containing directory of `path`, as UTF-8 text.
fn directory_of(path: &Path) -> Result<String, ResolveError> {
    let parent = path.parent().ok_or_else(|| ResolveError::Query {
        strategy: NAME,
        code: constants::CODE_RESOLUTION_FAILED,
        detail: format!("executable path '{}' has no parent", path.display()),
    })?;
    let parent = parent.to_str().ok_or_else(|| ResolveError::Query {
        strategy: NAME,
        code: constants::CODE_RESOLUTION_FAILED,
        detail: format!("executable path '{}' is not valid UTF-8", path.display()),
    })?;
    Ok(parent.to_string())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exe_symlink_directory_matches_current_exe() {
        let expected = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let dir = exe_symlink_directory(constants::DEFAULT_PATH_CAPACITY).unwrap();
        assert_eq!(dir, expected);
    }

    #[test]
    fn exe_symlink_directory_reports_does_not_fit() {
        let err = exe_symlink_directory(2).unwrap_err();
        assert!(
            matches!(err, ResolveError::DoesNotFit { .. }),
            "expected DoesNotFit, got {err:?}"
        );
    }

    #[test]
    fn canonical_directory_resolves_symlinks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("app.bin");
        fs::write(&target, b"").expect("write app.bin");
        let link = dir.path().join("launcher");
        std::os::unix::fs::symlink(&target, &link).expect("symlink");

        let expected = fs::canonicalize(dir.path())
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(canonical_directory_of(&link).unwrap(), expected);
    }

    #[test]
    fn canonical_directory_of_missing_path_is_io_error() {
        let err = canonical_directory_of(Path::new("/nonexistent/pathscout-test/app")).unwrap_err();
        assert!(
            matches!(err, ResolveError::Io { .. }),
            "expected Io, got {err:?}"
        );
    }

    #[test]
    fn execfn_directory_is_resolvable_under_test() {
        // The test binary was launched through exec, so AT_EXECFN is set
        // and canonicalises to the same directory as /proc/self/exe.
        let dir = execfn_directory().unwrap();
        let expected = exe_symlink_directory(constants::DEFAULT_PATH_CAPACITY).unwrap();
        assert_eq!(dir, expected);
    }
}
