//! Native half of a managed-runtime random number source.
//!
//! The library exports two entry points, one drawing the next value from
//! the platform C library's `rand()` and one reseeding it through `srand()`.
//! They are available as JNI natives of the Java class chosen at build time
//! (`NATIVE_RAND_JNI_CLASS`, `net.blerf.ftl.parser.random.NativeRandomJNI`
//! by default) and as plain C functions declared in the generated
//! `native_rand.h`.

#[macro_use]
extern crate log;
extern crate native_rand;

pub mod bridge;
#[cfg(feature = "capi")]
pub mod capi;
#[cfg(feature = "jni")]
pub mod jni;
