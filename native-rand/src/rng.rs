/// A generator with the C runtime `srand()`/`rand()` contract.
///
/// Values from [`rand`](RandRng::rand) lie in `0..=rand_max()`, and the
/// sequence following [`srand`](RandRng::srand) depends on nothing but the
/// seed.
pub trait RandRng {
    /// Reset the generator state from `seed`.
    fn srand(&mut self, seed: i32);

    /// Next value of the sequence.
    fn rand(&mut self) -> i32;

    /// Largest value `rand()` can return.
    fn rand_max(&self) -> i32;

    fn name(&self) -> Option<&str>;

    fn set_name(&mut self, name: Option<String>);
}

/// Assemble 32 random bits out of successive `rand()` results.
pub(crate) fn next_u32_via_rand<R: RandRng + ?Sized>(rng: &mut R) -> u32 {
    let bits = 32 - rng.rand_max().leading_zeros();
    let mask = (1u64 << bits) - 1;
    let mut value = 0u64;
    let mut filled = 0;

    while filled < 32 {
        value = (value << bits) | (rng.rand() as u64 & mask);
        filled += bits;
    }

    value as u32
}

/// Implement `Display` and the `rand` crate traits for a `RandRng` type.
///
/// The type must provide `Default` and a `name` field.
macro_rules! rand_rng {
    ($rng:ident, $label:expr) => {
        impl ::std::fmt::Display for $rng {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                match self.name {
                    Some(ref name) => f.write_str(name),
                    None => f.write_str($label),
                }
            }
        }

        impl ::rand::RngCore for $rng {
            fn next_u32(&mut self) -> u32 {
                $crate::rng::next_u32_via_rand(self)
            }

            fn next_u64(&mut self) -> u64 {
                let lo = self.next_u32() as u64;
                let hi = self.next_u32() as u64;

                (hi << 32) | lo
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                for chunk in dest.chunks_mut(4) {
                    let bytes = self.next_u32().to_le_bytes();

                    chunk.copy_from_slice(&bytes[..chunk.len()]);
                }
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> ::std::result::Result<(), ::rand::Error> {
                self.fill_bytes(dest);

                Ok(())
            }
        }

        impl ::rand::SeedableRng for $rng {
            type Seed = [u8; 4];

            fn from_seed(seed: Self::Seed) -> Self {
                let mut rng = $rng::default();

                $crate::rng::RandRng::srand(&mut rng, i32::from_le_bytes(seed));

                rng
            }
        }
    };
}
