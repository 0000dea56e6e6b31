use crate::rng::RandRng;

/// Degree of the TYPE_3 additive feedback generator.
const DEG: usize = 31;
/// Distance between the front and rear taps.
const SEP: usize = 3;
/// Outputs thrown away after seeding, `10 * DEG`.
const DISCARD: usize = 310;

/// Bit-exact reimplementation of glibc `srand()`/`rand()`.
///
/// glibc's default generator is the TYPE_3 additive feedback generator of
/// `random_r`: a 31 word state seeded by the Park-Miller minimal standard
/// LCG, with the first 310 outputs discarded. Unlike the platform
/// generator, every instance owns its state.
#[derive(Clone, Debug)]
pub struct GlibcRandom {
    state: [i32; DEG],
    fptr: usize,
    rptr: usize,
    name: Option<String>,
}

impl Default for GlibcRandom {
    fn default() -> Self {
        GlibcRandom::with_seed(1)
    }
}

impl GlibcRandom {
    pub const RAND_MAX: i32 = i32::max_value();

    /// A generator in the state glibc starts with, as if seeded with 1.
    pub fn new() -> Self {
        GlibcRandom::default()
    }

    pub fn with_seed(seed: i32) -> Self {
        let mut rng = GlibcRandom {
            state: [0; DEG],
            fptr: SEP,
            rptr: 0,
            name: None,
        };

        rng.srand(seed);
        rng
    }

    fn next(&mut self) -> i32 {
        let sum = (self.state[self.fptr] as u32).wrapping_add(self.state[self.rptr] as u32);

        self.state[self.fptr] = sum as i32;
        self.fptr = (self.fptr + 1) % DEG;
        self.rptr = (self.rptr + 1) % DEG;

        (sum >> 1) as i32
    }
}

impl RandRng for GlibcRandom {
    fn srand(&mut self, seed: i32) {
        // glibc cannot start from an all-zero state
        let seed = if seed == 0 { 1 } else { seed };

        self.state[0] = seed;

        // Schrage's method for 16807 * word % (2^31 - 1) without overflow
        let mut word = seed;
        for i in 1..DEG {
            let hi = word / 127_773;
            let lo = word % 127_773;

            word = 16_807 * lo - 2_836 * hi;
            if word < 0 {
                word += i32::max_value();
            }

            self.state[i] = word;
        }

        self.fptr = SEP;
        self.rptr = 0;

        for _ in 0..DISCARD {
            self.next();
        }
    }

    fn rand(&mut self) -> i32 {
        self.next()
    }

    fn rand_max(&self) -> i32 {
        Self::RAND_MAX
    }

    fn name(&self) -> Option<&str> {
        self.name.as_ref().map(String::as_str)
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

rand_rng!(GlibcRandom, "GlibcRandom");
