use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::errors::{Error, Result};

fn include_guard(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

/// Write a C header called `name` into `out_dir` declaring `decls`.
pub fn gen_c_header<S: AsRef<str>>(
    out_dir: &Path,
    name: &str,
    decls: impl IntoIterator<Item = S>,
) -> Result<PathBuf> {
    let guard = include_guard(name);
    let body = decls.into_iter().map(|decl| decl.as_ref().to_owned()).join("\n");

    let header = format!(
        "/* Generated by native-rand-build, do not edit. */\n\
         #ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #ifdef __cplusplus\n\
         extern \"C\" {{\n\
         #endif\n\
         \n\
         {body}\n\
         \n\
         #ifdef __cplusplus\n\
         }}\n\
         #endif\n\
         \n\
         #endif /* {guard} */\n",
        guard = guard,
        body = body
    );

    let path = out_dir.join(name);

    fs::write(&path, header).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("generated C header @ {:?}", path);

    Ok(path)
}
