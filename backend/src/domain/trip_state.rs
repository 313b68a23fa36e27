//! # Trip State
//!
//! The single piece of application state: the persisted trip record plus the
//! transient selection and navigation state that is never saved.
//!
//! ## Responsibilities:
//! - Own the `TripRecord` for the lifetime of the session
//! - Track the selected itinerary day (`None` or a valid index into `days`)
//! - Track the visible tab

use shared::{Day, TripRecord, View};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripState {
    /// Everything that gets persisted
    pub record: TripRecord,

    /// Index of the day whose detail panel is open; not persisted
    pub selected_day: Option<usize>,

    /// Currently visible view; not persisted
    pub active_view: View,
}

impl TripState {
    /// Create state around a freshly loaded record
    pub fn new(record: TripRecord) -> Self {
        Self {
            record,
            selected_day: None,
            active_view: View::default(),
        }
    }

    /// The selected day, if any
    pub fn selected(&self) -> Option<&Day> {
        self.selected_day.and_then(|index| self.record.days.get(index))
    }

    /// Show exactly one view
    pub fn switch_view(&mut self, view: View) {
        self.active_view = view;
    }

    pub fn is_detail_visible(&self) -> bool {
        self.selected().is_some()
    }
}
