//! JNI natives, exported under the names mangled for the configured class.
//!
//! The environment and receiver are never touched, so `JNIEnv` stays opaque.

#![allow(non_camel_case_types)]

use std::os::raw::c_void;

pub type jint = i32;
pub type jobject = *mut c_void;

#[repr(C)]
pub struct JNIEnv {
    _private: [u8; 0],
}

include!(concat!(env!("OUT_DIR"), "/jni_exports.rs"));
