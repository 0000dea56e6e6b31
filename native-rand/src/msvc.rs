use crate::rng::RandRng;

const MULTIPLIER: u32 = 214_013;
const INCREMENT: u32 = 2_531_011;

/// Bit-exact reimplementation of the Microsoft C runtime `srand()`/`rand()`.
#[derive(Clone, Debug)]
pub struct MsvcRandom {
    state: u32,
    name: Option<String>,
}

impl Default for MsvcRandom {
    fn default() -> Self {
        MsvcRandom::with_seed(1)
    }
}

impl MsvcRandom {
    pub const RAND_MAX: i32 = 0x7fff;

    pub fn new() -> Self {
        MsvcRandom::default()
    }

    pub fn with_seed(seed: i32) -> Self {
        MsvcRandom {
            state: seed as u32,
            name: None,
        }
    }
}

impl RandRng for MsvcRandom {
    fn srand(&mut self, seed: i32) {
        self.state = seed as u32;
    }

    fn rand(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

        ((self.state >> 16) & Self::RAND_MAX as u32) as i32
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

rand_rng!(MsvcRandom, "MsvcRandom");
