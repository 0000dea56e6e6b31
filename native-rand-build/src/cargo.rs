use std::env;
use std::path::{Path, PathBuf};

lazy_static! {
    pub static ref OUT_DIR: PathBuf = env::var("OUT_DIR").unwrap().into();
}

pub fn gen_cargo_config<S: AsRef<str>>(include_dir: &Path, watched_envs: impl Iterator<Item = S>) {
    for name in watched_envs {
        println!("cargo:rerun-if-env-changed={}", name.as_ref());
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:include={}", include_dir.to_str().unwrap());
}
