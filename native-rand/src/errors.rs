use std::num::ParseIntError;
use std::result;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown engine `{0}`, expected one of native, glibc, msvc")]
    UnknownEngine(String),

    #[error("invalid seed `{0}`, {1}")]
    InvalidSeed(String, #[source] ParseIntError),
}

pub type Result<T> = result::Result<T, Error>;
