pub mod errors;
pub mod refresh;

pub use errors::ValidationError;
pub use refresh::{Outcome, ViewRegion};
