#[macro_use]
extern crate log;

extern crate native_rand_build;

use std::env;

use native_rand_build::*;

fn main() {
    pretty_env_logger::init();

    let class = env::var(JNI_CLASS_ENV).unwrap_or_else(|_| DEFAULT_JNI_CLASS.to_owned());

    info!("binding natives of {}", class);

    let (exports, _) = gen_jni_exports(&OUT_DIR, &class)
        .unwrap_or_else(|err| panic!("invalid {}={}, {}", JNI_CLASS_ENV, class, err));

    let mut decls = Vec::new();

    if env::var_os("CARGO_FEATURE_JNI").is_some() {
        decls.extend(exports.c_declarations());
    }
    if env::var_os("CARGO_FEATURE_CAPI").is_some() {
        decls.extend(CAPI_DECLARATIONS.iter().map(|decl| decl.to_string()));
    }

    gen_c_header(&OUT_DIR, "native_rand.h", &decls)
        .unwrap_or_else(|err| panic!("failed to generate header, {}", err));

    gen_cargo_config(&OUT_DIR, [JNI_CLASS_ENV].iter());
}
