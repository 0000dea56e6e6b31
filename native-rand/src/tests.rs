extern crate num_cpus;
extern crate pretty_env_logger;

use std::thread;

use rand::{RngCore, SeedableRng};

use super::*;

const BOUNDARY_SEEDS: [i32; 5] = [0, -1, 1, i32::MAX, i32::MIN];

fn draw<R: RandRng + ?Sized>(rng: &mut R, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.rand()).collect()
}

fn native_draw(guard: &mut native::NativeGuard, seed: i32, n: usize) -> Vec<i32> {
    guard.srand(seed);

    (0..n).map(|_| guard.rand()).collect()
}

#[test]
fn test_native_reseed_replays() {
    let _ = pretty_env_logger::try_init();

    let mut guard = native::lock();

    let first = native_draw(&mut guard, 42, 3);
    let second = native_draw(&mut guard, 42, 3);

    assert_eq!(first, second);
    assert!(first.iter().all(|&n| 0 <= n && n <= native::RAND_MAX));
}

#[test]
fn test_native_distinct_seeds() {
    let mut guard = native::lock();

    assert_ne!(native_draw(&mut guard, 1, 5), native_draw(&mut guard, 2, 5));
}

#[test]
fn test_native_reseed_twice() {
    let mut guard = native::lock();

    let once = native_draw(&mut guard, 7, 8);

    guard.srand(7);
    let twice = native_draw(&mut guard, 7, 8);

    assert_eq!(once, twice);
}

#[test]
fn test_native_boundary_seeds() {
    let mut guard = native::lock();

    for &seed in BOUNDARY_SEEDS.iter() {
        let first = native_draw(&mut guard, seed, 16);

        assert_eq!(first, native_draw(&mut guard, seed, 16), "seed {}", seed);
    }
}

#[test]
fn test_native_unseeded_in_range() {
    let a = native::rand();
    let b = native::rand();

    assert!(0 <= a && a <= native::RAND_MAX);
    assert!(0 <= b && b <= native::RAND_MAX);
    assert!(native::RAND_MAX >= 0x7fff);
}

#[test]
fn test_native_random() {
    let mut seeder = NativeRandom::with_name("seeder");
    let mut drawer = NativeRandom::new();

    seeder.srand(99);

    assert!(draw(&mut drawer, 4).iter().all(|&n| 0 <= n && n <= native::RAND_MAX));
    assert_eq!(seeder.to_string(), "seeder");
    assert_eq!(drawer.to_string(), "NativeRandom");
    assert_eq!(drawer.name(), None);
    assert_eq!(drawer.rand_max(), native::RAND_MAX);
}

#[test]
fn test_native_guard_as_rand_rng() {
    let mut guard = native::lock();

    guard.set_name(Some("guarded".to_owned()));
    assert_eq!(guard.name(), Some("guarded"));
    assert_eq!(guard.rand_max(), native::RAND_MAX);

    let expected = native_draw(&mut guard, 1234, 6);

    let rng: &mut dyn RandRng = &mut guard;
    rng.srand(1234);

    assert_eq!(draw(rng, 6), expected);
}

#[test]
fn test_native_concurrent_draws() {
    let threads: Vec<_> = (0..num_cpus::get().max(2))
        .map(|i| {
            thread::spawn(move || {
                let mut guard = native::lock();

                let first = native_draw(&mut guard, i as i32, 32);
                let second = native_draw(&mut guard, i as i32, 32);

                assert_eq!(first, second);
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[test]
fn test_native_matches_glibc() {
    let mut guard = native::lock();

    for &seed in BOUNDARY_SEEDS.iter().chain(&[42, 12345]) {
        let native = native_draw(&mut guard, seed, 64);
        let portable = draw(&mut GlibcRandom::with_seed(seed), 64);

        assert_eq!(native, portable, "seed {}", seed);
    }
}

#[cfg(all(windows, target_env = "msvc"))]
#[test]
fn test_native_matches_msvc() {
    let mut guard = native::lock();

    for &seed in BOUNDARY_SEEDS.iter().chain(&[42, 12345]) {
        let native = native_draw(&mut guard, seed, 64);
        let portable = draw(&mut MsvcRandom::with_seed(seed), 64);

        assert_eq!(native, portable, "seed {}", seed);
    }
}

#[test]
fn test_glibc_known_sequence() {
    let mut rng = GlibcRandom::new();

    assert_eq!(draw(&mut rng, 4), vec![1804289383, 846930886, 1681692777, 1714636915]);

    rng.srand(1);
    assert_eq!(rng.rand(), 1804289383);
}

#[test]
fn test_glibc_zero_seed_is_one() {
    assert_eq!(
        draw(&mut GlibcRandom::with_seed(0), 32),
        draw(&mut GlibcRandom::with_seed(1), 32)
    );
}

#[test]
fn test_glibc_reseed() {
    for &seed in BOUNDARY_SEEDS.iter() {
        let mut rng = GlibcRandom::new();
        rng.rand();

        rng.srand(seed);
        let first = draw(&mut rng, 100);

        rng.srand(seed);
        rng.srand(seed);
        let second = draw(&mut rng, 100);

        assert_eq!(first, second, "seed {}", seed);
        assert!(first.iter().all(|&n| 0 <= n && n <= GlibcRandom::RAND_MAX));
    }

    assert_ne!(
        draw(&mut GlibcRandom::with_seed(42), 3),
        draw(&mut GlibcRandom::with_seed(43), 3)
    );
}

#[test]
fn test_glibc_instances_are_independent() {
    let mut a = GlibcRandom::with_seed(5);
    let mut b = a.clone();

    let from_a = draw(&mut a, 10);
    GlibcRandom::with_seed(6).rand();
    let from_b = draw(&mut b, 10);

    assert_eq!(from_a, from_b);
}

#[test]
fn test_msvc_known_sequence() {
    let mut rng = MsvcRandom::new();

    assert_eq!(draw(&mut rng, 4), vec![41, 18467, 6334, 26500]);

    rng.srand(0);
    assert_eq!(rng.rand(), 38);
}

#[test]
fn test_msvc_reseed() {
    for &seed in BOUNDARY_SEEDS.iter() {
        let mut rng = MsvcRandom::with_seed(seed);
        let first = draw(&mut rng, 100);

        rng.srand(seed);
        rng.srand(seed);

        assert_eq!(first, draw(&mut rng, 100), "seed {}", seed);
        assert!(first.iter().all(|&n| 0 <= n && n <= MsvcRandom::RAND_MAX));
    }
}

#[test]
fn test_rng_core() {
    let mut a = GlibcRandom::from_seed(42i32.to_le_bytes());
    let mut b = GlibcRandom::with_seed(42);

    assert_eq!(a.next_u32(), b.next_u32());

    let mut buf = [0u8; 13];
    a.fill_bytes(&mut buf);
    assert!(buf.iter().any(|&b| b != 0));

    let mut msvc = MsvcRandom::from_seed([1, 0, 0, 0]);
    let expected = {
        let mut rng = MsvcRandom::with_seed(1);
        let (x, y, z) = (rng.rand() as u64, rng.rand() as u64, rng.rand() as u64);

        ((x << 30) | (y << 15) | z) as u32
    };
    assert_eq!(msvc.next_u32(), expected);
}

#[test]
fn test_names() {
    let mut rng = GlibcRandom::new();

    assert_eq!(rng.name(), None);
    assert_eq!(rng.to_string(), "GlibcRandom");

    rng.set_name(Some("sector map".to_owned()));
    assert_eq!(rng.name(), Some("sector map"));
    assert_eq!(rng.to_string(), "sector map");

    assert_eq!(MsvcRandom::new().to_string(), "MsvcRandom");
}

#[test]
fn test_engine() {
    assert_eq!("native".parse::<Engine>().unwrap(), Engine::Native);
    assert_eq!("GLIBC".parse::<Engine>().unwrap(), Engine::Glibc);
    assert_eq!("Msvc".parse::<Engine>().unwrap(), Engine::Msvc);
    assert_eq!(Engine::default(), Engine::Native);
    assert_eq!(Engine::Glibc.to_string(), "glibc");

    assert_eq!(
        "mt19937".parse::<Engine>(),
        Err(Error::UnknownEngine("mt19937".to_owned()))
    );

    let mut rng = Engine::Msvc.create(Some("ship layout".to_owned()));

    assert_eq!(rng.name(), Some("ship layout"));
    assert_eq!(rng.rand_max(), 0x7fff);
    assert_eq!(rng.rand(), 41);
}

#[test]
fn test_parse_seed() {
    assert_eq!(parse_seed("42").unwrap(), 42);
    assert_eq!(parse_seed(" -1 ").unwrap(), -1);
    assert_eq!(parse_seed("2147483647").unwrap(), i32::MAX);
    assert_eq!(parse_seed("0xffffffff").unwrap(), -1);
    assert_eq!(parse_seed("0X10").unwrap(), 16);

    match parse_seed("seed") {
        Err(Error::InvalidSeed(s, _)) => assert_eq!(s, "seed"),
        r => panic!("unexpected {:?}", r),
    }
    assert!(parse_seed("2147483648").is_err());
}
