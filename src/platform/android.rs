// PathScout - platform/android.rs
//
// Android strategy: through the application context, look up the app's
// private files directory and take its parent. The two managed calls run
// inside a scoped JVM attach; the guard detaches on every exit path,
// including early `?` returns.

use jni::objects::{JObject, JString};
use jni::JavaVM;

use crate::platform::config::ResolveOptions;
use crate::platform::ApplicationPathResolver;
use crate::util::constants;
use crate::util::error::ResolveError;
use crate::util::pathtext::BoundedPath;

const NAME: &str = "android";

pub struct AndroidResolver;

impl ApplicationPathResolver for AndroidResolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn resolve(
        &self,
        out: &mut BoundedPath,
        _options: &ResolveOptions,
    ) -> Result<(), ResolveError> {
        let ctx = ndk_context::android_context();

        // Safety: ndk-context hands out the JavaVM pointer the host
        // activity registered at startup; it stays valid for the process
        // lifetime.
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }.map_err(|e| {
            ResolveError::ContextUnavailable {
                detail: format!("JVM handle unavailable: {e}"),
            }
        })?;

        // The guard detaches the thread when dropped, failure paths
        // included.
        let mut env =
            vm.attach_current_thread()
                .map_err(|e| ResolveError::ContextUnavailable {
                    detail: format!("thread attach failed: {e}"),
                })?;

        // Safety: same contract as the VM pointer above.
        let context = unsafe { JObject::from_raw(ctx.context().cast()) };
        if context.as_raw().is_null() {
            return Err(ResolveError::ContextUnavailable {
                detail: "application context object is null".to_string(),
            });
        }

        let files_dir = env
            .call_method(&context, "getFilesDir", "()Ljava/io/File;", &[])
            .and_then(|v| v.l())
            .map_err(query_failure)?;

        let parent_obj = env
            .call_method(&files_dir, "getParent", "()Ljava/lang/String;", &[])
            .and_then(|v| v.l())
            .map_err(query_failure)?;
        if parent_obj.as_raw().is_null() {
            return Err(ResolveError::Query {
                strategy: NAME,
                code: constants::CODE_RESOLUTION_FAILED,
                detail: "files directory has no parent".to_string(),
            });
        }

        let parent = JString::from(parent_obj);
        let text = env.get_string(&parent).map_err(query_failure)?;
        let text = String::from(text);

        out.set(&text)
            .map_err(|e| ResolveError::copy_failed(NAME, e))
    }
}

fn query_failure(e: jni::errors::Error) -> ResolveError {
    ResolveError::Query {
        strategy: NAME,
        code: constants::CODE_RESOLUTION_FAILED,
        detail: e.to_string(),
    }
}
