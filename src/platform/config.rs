// PathScout - platform/config.rs
//
// Resolution options and their loading from the host's project settings,
// with startup validation. The host hands extensions the settings text; a
// `[paths]` section configures this extension.

use crate::util::constants;

/// Validated options governing a resolution call.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Preserve the historical placeholder-on-failure behaviour of the
    /// Linux and Windows strategies: on resolution failure they yield `"."`
    /// instead of an error. Off, every platform fails explicitly.
    pub legacy_placeholder: bool,

    /// Capacity in bytes of the resolved-path buffer. Results must fit with
    /// strict room to spare; oversized results are failures, not
    /// truncations.
    pub capacity: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            legacy_placeholder: constants::DEFAULT_LEGACY_PLACEHOLDER,
            capacity: constants::DEFAULT_PATH_CAPACITY,
        }
    }
}

/// Raw deserialisable shape of the `[paths]` settings section.
///
/// Unknown keys are silently ignored for forward compatibility -- newer
/// settings files keep working with an older extension build.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// `[paths]` section.
    pub paths: PathsSection,
}

/// `[paths]` settings section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// Keep the legacy `"."` fallback on Linux/Windows failure.
    pub legacy_placeholder_fallback: Option<bool>,
    /// Resolved-path buffer capacity in bytes.
    pub max_path_bytes: Option<usize>,
}

/// Parse and validate the host's settings text.
///
/// Returns validated options plus a list of non-fatal warnings for the host
/// to surface. Loading never fails: unparseable text and out-of-range
/// values produce actionable warnings and fall back to defaults.
pub fn load_settings(settings_text: &str) -> (ResolveOptions, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut options = ResolveOptions::default();

    if settings_text.trim().is_empty() {
        tracing::debug!("No settings text supplied; using defaults");
        return (options, warnings);
    }

    let raw: RawSettings = match toml::from_str(settings_text) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("Failed to parse project settings: {e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (options, warnings);
        }
    };

    if let Some(flag) = raw.paths.legacy_placeholder_fallback {
        options.legacy_placeholder = flag;
    }

    if let Some(bytes) = raw.paths.max_path_bytes {
        if (constants::MIN_PATH_CAPACITY..=constants::MAX_PATH_CAPACITY).contains(&bytes) {
            options.capacity = bytes;
        } else {
            warnings.push(format!(
                "[paths] max_path_bytes = {bytes} is out of range ({}-{}). Using default ({}).",
                constants::MIN_PATH_CAPACITY,
                constants::MAX_PATH_CAPACITY,
                constants::DEFAULT_PATH_CAPACITY,
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Settings validation produced warnings");
    }

    (options, warnings)
}

// =============================================================================
// Tests
// =============================================================================
