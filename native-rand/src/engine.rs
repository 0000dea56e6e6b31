use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::glibc::GlibcRandom;
use crate::msvc::MsvcRandom;
use crate::native::NativeRandom;
use crate::rng::RandRng;

/// Available `rand()` implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    /// The platform C library, shared by the whole process.
    Native,
    /// glibc's TYPE_3 generator.
    Glibc,
    /// The Microsoft C runtime LCG.
    Msvc,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Engine::Native => "native",
            Engine::Glibc => "glibc",
            Engine::Msvc => "msvc",
        }
    }

    /// Create a generator of this kind, optionally named.
    pub fn create(&self, name: Option<String>) -> Box<dyn RandRng + Send> {
        let mut rng: Box<dyn RandRng + Send> = match *self {
            Engine::Native => Box::new(NativeRandom::new()),
            Engine::Glibc => Box::new(GlibcRandom::new()),
            Engine::Msvc => Box::new(MsvcRandom::new()),
        };

        rng.set_name(name);
        rng
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Native
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Engine::Native),
            "glibc" => Ok(Engine::Glibc),
            "msvc" => Ok(Engine::Msvc),
            _ => Err(Error::UnknownEngine(s.to_owned())),
        }
    }
}

/// Parse a seed given in decimal, or in hex with a `0x` prefix.
///
/// Hex seeds are read as the 32 bit pattern of the seed, so `0xffffffff`
/// is `-1`.
pub fn parse_seed(s: &str) -> Result<i32> {
    let s = s.trim();

    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map(|n| n as i32)
    } else {
        s.parse::<i32>()
    };

    parsed.map_err(|err| Error::InvalidSeed(s.to_owned(), err))
}
