//! Trip metadata: name, dates and free-form notes.
//!
//! Dates are stored as the strings the user typed; nothing beyond presence is
//! validated here.

use log::info;
use shared::UpdateTripDetailsRequest;

use super::trip_state::TripState;

#[derive(Debug, Clone, Default)]
pub struct TripDetailsService;

impl TripDetailsService {
    pub fn new() -> Self {
        Self
    }

    /// Overwrite the provided fields. Returns true if anything changed.
    pub fn update_details(&self, state: &mut TripState, request: UpdateTripDetailsRequest) -> bool {
        let record = &mut state.record;
        let mut changed = false;

        if let Some(name) = request.name {
            changed |= record.name != name;
            record.name = name;
        }
        if let Some(start_date) = request.start_date {
            changed |= record.start_date != start_date;
            record.start_date = start_date;
        }
        if let Some(end_date) = request.end_date {
            changed |= record.end_date != end_date;
            record.end_date = end_date;
        }

        if changed {
            info!(
                "Updated trip details: '{}' {} to {}",
                record.name, record.start_date, record.end_date
            );
        }
        changed
    }

    /// Replace the trip notes
    pub fn save_notes(&self, state: &mut TripState, notes: &str) {
        state.record.notes = notes.to_string();
        info!("Saved notes ({} characters)", notes.chars().count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_details_only_touches_provided_fields() {
        let service = TripDetailsService::new();
        let mut state = TripState::default();
        state.record.end_date = "2025-05-10".to_string();

        let changed = service.update_details(
            &mut state,
            UpdateTripDetailsRequest {
                name: Some("Lisbon".to_string()),
                start_date: Some("2025-05-01".to_string()),
                end_date: None,
            },
        );

        assert!(changed);
        assert_eq!(state.record.name, "Lisbon");
        assert_eq!(state.record.start_date, "2025-05-01");
        assert_eq!(state.record.end_date, "2025-05-10");
    }

    #[test]
    fn test_update_details_reports_no_change() {
        let service = TripDetailsService::new();
        let mut state = TripState::default();
        state.record.name = "Lisbon".to_string();

        let changed = service.update_details(
            &mut state,
            UpdateTripDetailsRequest {
                name: Some("Lisbon".to_string()),
                ..UpdateTripDetailsRequest::default()
            },
        );
        assert!(!changed);
    }

    #[test]
    fn test_save_notes_replaces_text() {
        let service = TripDetailsService::new();
        let mut state = TripState::default();

        service.save_notes(&mut state, "first");
        service.save_notes(&mut state, "Visa on arrival\nBring adapters");

        assert_eq!(state.record.notes, "Visa on arrival\nBring adapters");
    }
}
