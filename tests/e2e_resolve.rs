// PathScout - tests/e2e_resolve.rs
//
// End-to-end tests for application-directory resolution on the host
// platform. These exercise the real strategy — the real /proc symlink or
// module query, the real filesystem — no mocks, no stubs. The expected
// value is derived independently through std::env::current_exe().
//
// Gated to the desktop targets the test harness itself runs on; the web
// and Android strategies need their host environments.

#![cfg(any(target_os = "linux", windows))]

use pathscout::app::resolver::resolve_application_directory;
use pathscout::app::script;
use pathscout::platform::config::ResolveOptions;
use pathscout::util::constants;

/// Directory of the running test binary, resolved independently.
fn expected_directory() -> String {
    std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .to_str()
        .expect("utf-8 path")
        .to_string()
}

// =============================================================================
// Resolution E2E
// =============================================================================

/// The resolved directory is the one containing the running executable.
#[test]
fn e2e_resolves_directory_of_running_executable() {
    let dir = resolve_application_directory(&ResolveOptions::default()).unwrap();
    assert_eq!(dir, expected_directory());
}

/// Success obeys the data-model invariants: shorter than capacity, no
/// trailing separator, and the directory exists and is readable.
#[test]
fn e2e_success_invariants_hold() {
    let options = ResolveOptions::default();
    let dir = resolve_application_directory(&options).unwrap();

    assert!(dir.len() < options.capacity);
    assert!(
        !dir.ends_with('/') && !dir.ends_with('\\'),
        "trailing separator in {dir:?}"
    );
    assert!(
        std::fs::read_dir(&dir).is_ok(),
        "resolved directory {dir:?} is not readable"
    );
}

/// Repeated calls with unchanged process state return the same path.
#[test]
fn e2e_resolution_is_idempotent() {
    let options = ResolveOptions::default();
    let first = resolve_application_directory(&options).unwrap();
    let second = resolve_application_directory(&options).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Buffer-too-small behaviour
// =============================================================================

/// With the legacy flag on (the default), a capacity too small for the
/// true path yields the documented placeholder — never truncated output.
#[test]
fn e2e_tiny_capacity_yields_placeholder_when_legacy() {
    let options = ResolveOptions {
        legacy_placeholder: true,
        capacity: constants::PLACEHOLDER_PATH.len() + 1,
    };
    let dir = resolve_application_directory(&options).unwrap();
    assert_eq!(dir, constants::PLACEHOLDER_PATH);
}

/// With the legacy flag off, the same undersized capacity is an explicit
/// failure carrying a nonzero code.
#[test]
fn e2e_tiny_capacity_fails_explicitly_without_legacy() {
    let options = ResolveOptions {
        legacy_placeholder: false,
        capacity: constants::PLACEHOLDER_PATH.len() + 1,
    };
    let err = resolve_application_directory(&options).unwrap_err();
    assert_ne!(err.code(), 0, "failure must carry a numeric code: {err}");
}

// =============================================================================
// Scripting boundary E2E
// =============================================================================

/// The script-facing callable returns the same value as the resolver.
#[test]
fn e2e_script_callable_matches_resolver() {
    let via_script = script::application_path().unwrap();
    let via_resolver = resolve_application_directory(&ResolveOptions::default()).unwrap();
    assert_eq!(via_script, via_resolver);
}

/// On failure the script error renders the historical message shape with
/// the numeric code embedded.
#[test]
fn e2e_script_error_message_names_the_code() {
    let options = ResolveOptions {
        legacy_placeholder: false,
        capacity: constants::PLACEHOLDER_PATH.len() + 1,
    };
    let err = script::application_path_with(&options).unwrap_err();
    let message = err.to_string();
    assert!(
        message.starts_with("Unable to locate application path: ("),
        "unexpected message: {message}"
    );
    assert!(
        message.contains(&err.code().to_string()),
        "code {} missing from message: {message}",
        err.code()
    );
}
