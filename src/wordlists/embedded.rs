//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated byte constants from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
