// PathScout - platform/web.rs
//
// Web strategy: the application "directory" is the hosting page's document
// location up to, excluding, the last path separator. Strict fits-or-fails
// contract: no placeholder fallback on this platform.

use wasm_bindgen::JsValue;

use crate::platform::config::ResolveOptions;
use crate::platform::ApplicationPathResolver;
use crate::util::constants;
use crate::util::error::ResolveError;
use crate::util::pathtext::{parent_of, BoundedPath};

const NAME: &str = "web";

pub struct WebResolver;

impl ApplicationPathResolver for WebResolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn resolve(
        &self,
        out: &mut BoundedPath,
        _options: &ResolveOptions,
    ) -> Result<(), ResolveError> {
        let window = web_sys::window().ok_or_else(|| ResolveError::ContextUnavailable {
            detail: "no window object on this thread".to_string(),
        })?;

        let href = window
            .location()
            .href()
            .map_err(|e| ResolveError::Query {
                strategy: NAME,
                code: constants::CODE_RESOLUTION_FAILED,
                detail: js_detail(e),
            })?;

        let prefix = parent_of(&href, '/').ok_or_else(|| ResolveError::Query {
            strategy: NAME,
            code: constants::CODE_RESOLUTION_FAILED,
            detail: format!("document location '{href}' has no path separator"),
        })?;

        out.set(prefix)
            .map_err(|e| ResolveError::copy_failed(NAME, e))
    }
}

fn js_detail(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| "document location query failed".to_string())
}
