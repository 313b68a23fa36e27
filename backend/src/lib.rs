//! # TripWise Backend
//!
//! Trip planning core: one trip record with an itinerary, a budget, a
//! packing list and notes, persisted as a single JSON snapshot after every
//! change.

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

pub use config::AppConfig;
pub use storage::{FileConnection, TripRepository};

use domain::{LocalClock, TripController};
use io::cli::Renderer;

/// Everything a front end needs, wired to the configured data directory
pub struct Backend {
    pub config: AppConfig,
    pub controller: TripController,
    pub renderer: Renderer,
}

impl Backend {
    pub fn open(config: AppConfig) -> Result<Self> {
        let connection = Arc::new(FileConnection::new(&config.data_directory)?);
        let repository = Arc::new(TripRepository::new(connection, config.storage_key.clone()));
        info!(
            "Using trip '{}' in {}",
            repository.key(),
            config.data_directory.display()
        );
        let controller = TripController::new(repository, Arc::new(LocalClock));
        let renderer = Renderer::new(config.currency_symbol.clone());

        Ok(Self {
            config,
            controller,
            renderer,
        })
    }
}
