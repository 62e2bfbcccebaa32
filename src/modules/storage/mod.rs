//! Storage module for uploaded binaries
//!
//! Provides the disk-backed upload store; binaries are served statically
//! from the same directory under `/uploads`.

mod disk_store;

pub use disk_store::DiskStore;
