//! Shared infrastructure utilities for tokensmith.
//!
//! - **`atomic_write`**: all-or-nothing file output (temp + rename)

pub mod atomic_write;

pub use atomic_write::{AtomicWriteOptions, FileSyncPolicy, atomic_write, atomic_write_with_options};
