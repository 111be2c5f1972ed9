// PathScout - app/resolver.rs
//
// The one logical operation of the extension: resolve the directory
// containing the running application's executable or bundle.

use crate::platform;
use crate::platform::config::ResolveOptions;
use crate::util::error::ResolveError;
use crate::util::pathtext::BoundedPath;

/// Resolve the application's install directory.
///
/// Computed fresh on every call; no caching, no state. On success the
/// returned text names an existing, readable directory (or, on mobile, the
/// directory logically associated with the application), shorter than
/// `options.capacity` bytes and without a trailing separator.
pub fn resolve_application_directory(options: &ResolveOptions) -> Result<String, ResolveError> {
    let resolver = platform::host_resolver();
    let mut out = BoundedPath::with_capacity(options.capacity);
    resolver.resolve(&mut out, options)?;

    tracing::debug!(
        strategy = resolver.name(),
        path = %out.as_str(),
        "Application directory resolved"
    );
    Ok(out.into_string())
}
