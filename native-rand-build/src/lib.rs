#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
extern crate itertools;
extern crate thiserror;

mod cargo;
mod errors;
mod exports;
mod header;
mod mangle;


pub use cargo::{gen_cargo_config, OUT_DIR};
pub use errors::{Error, Result};
pub use exports::{gen_jni_exports, JniExports, CAPI_DECLARATIONS, DEFAULT_JNI_CLASS, JNI_CLASS_ENV};
pub use header::gen_c_header;
pub use mangle::{mangle_jni, mangle_jni_component};
