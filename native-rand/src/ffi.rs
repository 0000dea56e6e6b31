pub use libc::{c_int, c_uint};

/// Largest value the platform `rand()` returns.
pub use libc::RAND_MAX;

extern "C" {
    /// Next value of the C library's global pseudo-random sequence.
    pub fn rand() -> c_int;

    /// Reset the C library's global pseudo-random sequence.
    pub fn srand(seed: c_uint);
}
