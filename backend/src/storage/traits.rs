//! # Storage Traits
//!
//! Storage abstraction used by the trip repository. Any backend that can keep
//! string values under string keys (files on disk, an in-memory map) can hold
//! the trip snapshot without the domain layer knowing which one is in use.

use anyhow::Result;
use shared::TripRecord;

/// Minimal key-value store interface.
///
/// `put_value` overwrites any existing value for the same key; there are no
/// partial writes and no versioning.
pub trait KeyValueStorage: Send + Sync {
    /// Retrieve a value by its key
    fn get_value(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing whatever was stored under `key`
    fn put_value(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value by its key
    /// Returns true if the key existed
    fn delete_value(&self, key: &str) -> Result<bool>;
}

/// Whole-record persistence for the trip snapshot
pub trait TripStorage: Send + Sync {
    /// Load the stored trip. Never fails: a missing or unreadable snapshot
    /// yields an empty default record.
    fn load(&self) -> TripRecord;

    /// Serialize the full record and overwrite the stored snapshot
    fn save(&self, record: &TripRecord) -> Result<()>;

    /// Remove the stored snapshot
    /// Returns true if a snapshot existed
    fn reset(&self) -> Result<bool>;
}
