//! Embedded alphabets
//!
//! Case tables compiled into the binary at build time.

// Include generated alphabet table from build script
include!(concat!(env!("OUT_DIR"), "/alphabets.rs"));
