//! # Storage Module
//!
//! Persistence for the trip snapshot. The domain layer only sees the
//! `TripStorage` trait; `TripRepository` implements it on top of any
//! `KeyValueStorage` (files on disk for the app, memory for tests).

pub mod file;
pub mod memory;
pub mod traits;
pub mod trip_repository;

#[cfg(test)]
pub mod test_utils;

pub use file::FileConnection;
pub use memory::MemoryConnection;
pub use traits::{KeyValueStorage, TripStorage};
pub use trip_repository::{TripRepository, DEFAULT_STORAGE_KEY};
