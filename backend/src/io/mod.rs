//! # IO Module
//!
//! Presentation layer. The only front end is the command line; it talks to
//! the domain exclusively through `TripController`.

pub mod cli;
