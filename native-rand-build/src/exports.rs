use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};
use crate::mangle::mangle_jni;

/// Build environment variable naming the Java class that declares the natives.
pub const JNI_CLASS_ENV: &str = "NATIVE_RAND_JNI_CLASS";

/// Java class bound by default.
pub const DEFAULT_JNI_CLASS: &str = "net.blerf.ftl.parser.random.NativeRandomJNI";

/// Prototypes of the plain C entry points.
pub const CAPI_DECLARATIONS: &[&str] = &[
    "int native_rand_next(void);",
    "void native_rand_reseed(int seed);",
];

const JNICALL_DEFINE: &str = "#ifndef JNICALL\n\
#ifdef _WIN32\n\
#define JNICALL __stdcall\n\
#else\n\
#define JNICALL\n\
#endif\n\
#endif";

const RAND_METHOD: &str = "native_rand";
const SRAND_METHOD: &str = "native_srand";

/// The JNI entry points generated for one Java class.
#[derive(Clone, Debug, PartialEq)]
pub struct JniExports {
    pub class: String,
    pub rand_symbol: String,
    pub srand_symbol: String,
}

impl JniExports {
    pub fn new(class: &str) -> Result<Self> {
        Ok(JniExports {
            class: class.to_owned(),
            rand_symbol: mangle_jni(class, RAND_METHOD)?,
            srand_symbol: mangle_jni(class, SRAND_METHOD)?,
        })
    }

    /// C prototypes of the exported JNI functions, without `jni.h`.
    ///
    /// `JNICALL` is `__stdcall` on Windows, matching `extern "system"`.
    pub fn c_declarations(&self) -> Vec<String> {
        vec![
            JNICALL_DEFINE.to_owned(),
            format!("int JNICALL {}(void *env, void *obj);", self.rand_symbol),
            format!("void JNICALL {}(void *env, void *obj, int seed);", self.srand_symbol),
        ]
    }

    /// Rust source exporting both natives under their mangled names.
    ///
    /// The functions forward to `crate::bridge`, and expect the `JNIEnv`,
    /// `jobject` and `jint` aliases to be in scope where the file is included.
    pub fn to_rust(&self) -> String {
        format!(
            r#"// Generated by native-rand-build for {class}.

/// Symbol of `{class}.{rand_method}()`.
pub const NATIVE_RAND_SYMBOL: &str = "{rand}";

/// Symbol of `{class}.{srand_method}(int)`.
pub const NATIVE_SRAND_SYMBOL: &str = "{srand}";

#[export_name = "{rand}"]
pub extern "system" fn native_rand(_env: *mut JNIEnv, _this: jobject) -> jint {{
    crate::bridge::next_random_integer()
}}

#[export_name = "{srand}"]
pub extern "system" fn native_srand(_env: *mut JNIEnv, _this: jobject, seed: jint) {{
    crate::bridge::reseed(seed)
}}
"#,
            class = self.class,
            rand_method = RAND_METHOD,
            srand_method = SRAND_METHOD,
            rand = self.rand_symbol,
            srand = self.srand_symbol,
        )
    }
}

/// Write `jni_exports.rs` for `class` into `out_dir`.
pub fn gen_jni_exports(out_dir: &Path, class: &str) -> Result<(JniExports, PathBuf)> {
    let exports = JniExports::new(class)?;
    let path = out_dir.join("jni_exports.rs");

    fs::write(&path, exports.to_rust()).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!(
        "generated JNI exports {} and {} @ {:?}",
        exports.rand_symbol, exports.srand_symbol, path
    );

    Ok((exports, path))
}
