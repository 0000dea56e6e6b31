//! Pseudo-random generator of the platform C library.
//!
//! The C library keeps one generator for the whole process, so every
//! [`NativeRandom`] shares it, and the sequence for a given seed differs
//! between platforms. Rust callers are serialized through a process-wide
//! lock; code calling the C library directly bypasses it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ffi::{self, c_uint};
use crate::rng::RandRng;

pub use crate::ffi::RAND_MAX;

lazy_static! {
    static ref NATIVE_LOCK: Mutex<()> = Mutex::new(());
}

/// Exclusive access to the platform generator.
///
/// Holding the guard keeps other Rust callers from reseeding or drawing in
/// between, so a seed followed by a run of draws stays reproducible. The
/// module level [`rand`] and [`srand`], and so [`NativeRandom`], take the
/// same lock and must not be called while a guard is alive on the same
/// thread; the guard is itself a [`RandRng`] for that reason.
pub struct NativeGuard<'a> {
    _guard: MutexGuard<'a, ()>,
    name: Option<String>,
}

/// Take exclusive access to the platform generator.
pub fn lock() -> NativeGuard<'static> {
    NativeGuard {
        _guard: NATIVE_LOCK.lock().unwrap_or_else(PoisonError::into_inner),
        name: None,
    }
}

impl<'a> NativeGuard<'a> {
    /// Seed the platform generator.
    ///
    /// The seed is passed verbatim as the `unsigned int` argument of `srand()`.
    pub fn srand(&mut self, seed: i32) {
        trace!("srand({})", seed);

        unsafe { ffi::srand(seed as c_uint) }
    }

    /// Get the next value of the platform sequence, in `0..=RAND_MAX`.
    pub fn rand(&mut self) -> i32 {
        let n = unsafe { ffi::rand() };

        trace!("rand() = {}", n);

        n
    }
}

impl<'a> RandRng for NativeGuard<'a> {
    fn srand(&mut self, seed: i32) {
        NativeGuard::srand(self, seed)
    }

    fn rand(&mut self) -> i32 {
        NativeGuard::rand(self)
    }

    fn rand_max(&self) -> i32 {
        RAND_MAX
    }

    fn name(&self) -> Option<&str> {
        self.name.as_ref().map(String::as_str)
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

/// Seed the platform generator.
pub fn srand(seed: i32) {
    lock().srand(seed)
}

/// Get a pseudo-random value from the platform generator.
pub fn rand() -> i32 {
    lock().rand()
}

/// `RandRng` over the platform C library.
///
/// Instances differ only by name; they all drive the same global state.
#[derive(Clone, Debug, Default)]
pub struct NativeRandom {
    name: Option<String>,
}

impl NativeRandom {
    pub fn new() -> Self {
        NativeRandom::default()
    }

    pub fn with_name<S: Into<String>>(name: S) -> Self {
        NativeRandom {
            name: Some(name.into()),
        }
    }
}

impl RandRng for NativeRandom {
    fn srand(&mut self, seed: i32) {
        srand(seed)
    }

    fn rand(&mut self) -> i32 {
        rand()
    }

    fn rand_max(&self) -> i32 {
        RAND_MAX
    }

    fn name(&self) -> Option<&str> {
        self.name.as_ref().map(String::as_str)
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

rand_rng!(NativeRandom, "NativeRandom");
