// PathScout - platform/apple.rs
//
// macOS/iOS strategy: the bundle directory is read by a native routine in
// the engine's platform-support library (Objective-C, NSBundle metadata).
// This module only adapts that routine's bounded-buffer contract into the
// resolver trait.

use std::ffi::{c_char, CStr};

use crate::platform::config::ResolveOptions;
use crate::platform::ApplicationPathResolver;
use crate::util::constants;
use crate::util::error::ResolveError;
use crate::util::pathtext::BoundedPath;

const NAME: &str = "apple";

extern "C" {
    /// Writes the application bundle's directory into `out_path` as a
    /// NUL-terminated UTF-8 string of fewer than `capacity` bytes.
    /// Returns 1 on success; any other value is a failure status.
    fn application_bundle_directory(out_path: *mut c_char, capacity: u32) -> i32;
}

pub struct AppleResolver;

impl ApplicationPathResolver for AppleResolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn resolve(
        &self,
        out: &mut BoundedPath,
        _options: &ResolveOptions,
    ) -> Result<(), ResolveError> {
        let mut raw = vec![0u8; out.capacity()];
        // Safety: the routine writes fewer than `capacity` bytes and
        // NUL-terminates on success.
        let status =
            unsafe { application_bundle_directory(raw.as_mut_ptr().cast(), raw.len() as u32) };
        if status != 1 {
            return Err(ResolveError::Query {
                strategy: NAME,
                code: status,
                detail: "bundle directory query failed".to_string(),
            });
        }

        let text = CStr::from_bytes_until_nul(&raw)
            .map_err(|_| ResolveError::Query {
                strategy: NAME,
                code: constants::CODE_RESOLUTION_FAILED,
                detail: "bundle directory string is not NUL-terminated".to_string(),
            })?
            .to_str()
            .map_err(|_| ResolveError::Query {
                strategy: NAME,
                code: constants::CODE_RESOLUTION_FAILED,
                detail: "bundle directory string is not valid UTF-8".to_string(),
            })?;

        out.set(text)
            .map_err(|e| ResolveError::copy_failed(NAME, e))
    }
}
