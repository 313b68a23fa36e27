//! # File Storage Module
//!
//! File-based key-value storage. Each key is one JSON file in the data
//! directory:
//!
//! ```text
//! data/
//! ├── config.yaml        ← optional application config
//! └── tripWiseData.json  ← the trip snapshot
//! ```

pub mod connection;

pub use connection::FileConnection;
