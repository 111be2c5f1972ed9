// PathScout - platform/mod.rs
//
// Platform abstraction layer: one resolver implementation per target,
// selected at compile time behind a single trait.
// Dependencies: standard library, util, per-target introspection crates.
// Must NOT depend on: app.

pub mod config;

#[cfg(target_os = "android")]
pub mod android;
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub mod apple;
#[cfg(target_os = "linux")]
pub mod linux;
#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(windows)]
pub mod windows;

use crate::util::error::ResolveError;
use crate::util::pathtext::BoundedPath;

use config::ResolveOptions;

/// A per-platform strategy for locating the running application's
/// install directory.
///
/// Each implementation is a stateless leaf: a single-shot synchronous
/// computation with no retries and no shared state across calls. On
/// success `out` holds the directory path, shorter than its capacity and
/// with no trailing separator; on failure `out` is cleared and must not be
/// propagated.
pub trait ApplicationPathResolver {
    /// Strategy name for logs and error context.
    fn name(&self) -> &'static str;

    /// Resolve the application directory into `out`.
    fn resolve(&self, out: &mut BoundedPath, options: &ResolveOptions)
        -> Result<(), ResolveError>;
}

/// The statically selected resolver for the build target.
pub fn host_resolver() -> &'static dyn ApplicationPathResolver {
    #[cfg(target_os = "linux")]
    return &linux::LinuxResolver;

    #[cfg(windows)]
    return &windows::WindowsResolver;

    #[cfg(target_arch = "wasm32")]
    return &web::WebResolver;

    #[cfg(target_os = "android")]
    return &android::AndroidResolver;

    #[cfg(any(target_os = "macos", target_os = "ios"))]
    return &apple::AppleResolver;

    #[cfg(not(any(
        target_os = "linux",
        windows,
        target_arch = "wasm32",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    )))]
    compile_error!("pathscout has no application-path resolver for this target");
}
