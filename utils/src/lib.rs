//! Shared infrastructure utilities for Folio.
//!
//! - **`atomic_write`**: Crash-safe file persistence (temp + rename) for the
//!   small preference files the site keeps between visits.

pub mod atomic_write;

pub use atomic_write::{
    AtomicWriteOptions, FileSyncPolicy, ParentDirSyncPolicy, atomic_write_with_options,
    recover_bak_file,
};
