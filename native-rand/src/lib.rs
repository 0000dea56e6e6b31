//! Pseudo-random generators compatible with the C runtime `rand()`/`srand()`.
//!
//! [`native`] drives the generator of the platform C library, which is a
//! single process-wide state. [`GlibcRandom`] and [`MsvcRandom`] reproduce
//! the glibc and Microsoft C runtime sequences bit for bit, each owning its
//! own state.

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
extern crate libc;
extern crate rand;
extern crate thiserror;

mod errors;
mod ffi;
#[macro_use]
mod rng;
mod engine;
mod glibc;
mod msvc;
pub mod native;

#[cfg(test)]
mod tests;

pub use engine::{parse_seed, Engine};
pub use errors::{Error, Result};
pub use glibc::GlibcRandom;
pub use msvc::MsvcRandom;
pub use native::NativeRandom;
pub use rng::RandRng;
