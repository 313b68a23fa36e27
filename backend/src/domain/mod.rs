//! # Domain Module
//!
//! Business logic for the trip planner, independent of any storage backend
//! or user interface.
//!
//! ## Module Organization
//!
//! - **trip_state**: the in-memory trip record plus transient selection state
//! - **itinerary_service**: days and activities, including renumbering
//! - **budget_service**: total budget, expenses and derived figures
//! - **packing_service**: checklist items and template loading
//! - **trip_details_service**: trip name, dates and notes
//! - **controller**: confirm → mutate → persist → refresh sequencing
//!
//! ## Design Principles
//!
//! - Services are pure mutations of `TripState`; they never persist or render
//! - The controller owns the state and decides what gets saved and redrawn
//! - Validation happens before mutation, so a rejected action changes nothing

pub mod budget_service;
pub mod clock;
pub mod controller;
pub mod itinerary_service;
pub mod models;
pub mod packing_service;
pub mod prompts;
pub mod trip_details_service;
pub mod trip_state;

pub use budget_service::*;
pub use clock::*;
pub use controller::*;
pub use itinerary_service::*;
pub use models::*;
pub use packing_service::*;
pub use prompts::*;
pub use trip_details_service::*;
pub use trip_state::*;
