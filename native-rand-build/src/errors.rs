use std::io;
use std::result;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JNI class name is empty")]
    EmptyClass,

    #[error("JNI method name is empty")]
    EmptyMethod,

    #[error("class `{0}` has an empty package segment")]
    EmptySegment(String),

    #[error("method `{0}` must not contain package separators")]
    InvalidMethod(String),

    #[error("failed to write {path}, {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
