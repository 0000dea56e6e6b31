//! JNI short-name mangling for native method symbols.

use std::fmt::Write;

use crate::errors::{Error, Result};

/// Escape one class or method component the way `javah` does.
///
/// Package separators (`.` or `/`) become `_`; `_`, `;` and `[` become
/// `_1`, `_2` and `_3`; anything that is not ASCII alphanumeric is written
/// as `_0xxxx` with its UTF-16 code units in lowercase hex.
pub fn mangle_jni_component(name: &str) -> String {
    let mut mangled = String::with_capacity(name.len());
    let mut units = [0u16; 2];

    for c in name.chars() {
        match c {
            '.' | '/' => mangled.push('_'),
            '_' => mangled.push_str("_1"),
            ';' => mangled.push_str("_2"),
            '[' => mangled.push_str("_3"),
            c if c.is_ascii_alphanumeric() => mangled.push(c),
            c => {
                for unit in c.encode_utf16(&mut units).iter() {
                    let _ = write!(mangled, "_0{:04x}", unit);
                }
            }
        }
    }

    mangled
}

/// Build the exported symbol name of `method` declared `native` in `class`.
///
/// `class` is the fully-qualified Java class name, with either `.` or `/`
/// as the package separator.
pub fn mangle_jni(class: &str, method: &str) -> Result<String> {
    if class.is_empty() {
        return Err(Error::EmptyClass);
    }
    if method.is_empty() {
        return Err(Error::EmptyMethod);
    }
    if class.split(|c| c == '.' || c == '/').any(str::is_empty) {
        return Err(Error::EmptySegment(class.to_owned()));
    }
    if method.contains(|c| c == '.' || c == '/') {
        return Err(Error::InvalidMethod(method.to_owned()));
    }

    let symbol = format!(
        "Java_{}_{}",
        mangle_jni_component(class),
        mangle_jni_component(method)
    );

    debug!("mangled {}.{} as {}", class, method, symbol);

    Ok(symbol)
}
