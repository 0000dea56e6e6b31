use std::os::raw::c_int;

use crate::bridge;

/// `int native_rand_next(void)`
#[no_mangle]
pub extern "C" fn native_rand_next() -> c_int {
    bridge::next_random_integer()
}

/// `void native_rand_reseed(int seed)`
#[no_mangle]
pub extern "C" fn native_rand_reseed(seed: c_int) {
    bridge::reseed(seed)
}
