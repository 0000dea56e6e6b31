use native_rand::native;

pub use native_rand::native::RAND_MAX;

/// Next value of the platform pseudo-random sequence, in `0..=RAND_MAX`.
#[inline]
pub fn next_random_integer() -> i32 {
    native::rand()
}

/// Reseed the platform pseudo-random sequence with `seed` verbatim.
#[inline]
pub fn reseed(seed: i32) {
    debug!("reseeding platform generator with {}", seed);

    native::srand(seed)
}
