//! Itinerary domain logic: days and the activities scheduled on them.
//!
//! All functions here are pure mutations of `TripState`. Persisting and
//! redrawing are left to the controller.
//!
//! ## Business Rules
//!
//! - `days[i].number == i + 1` after every mutation
//! - Deleting a day renumbers the rest and resets their titles to "Day N"
//! - Deleting the selected day clears the selection; deleting an earlier day
//!   shifts the selection so it stays on the same day
//! - Activities need a non-empty title; every other field is optional

use log::{info, warn};
use shared::{Activity, AddActivityRequest, Day};

use super::models::ValidationError;
use super::trip_state::TripState;

#[derive(Debug, Clone, Default)]
pub struct ItineraryService;

impl ItineraryService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new empty day and return its number
    pub fn add_day(&self, state: &mut TripState) -> u32 {
        let number = state.record.days.len() as u32 + 1;
        state.record.days.push(Day::new(number));
        info!("Added day {}", number);
        number
    }

    /// Select a day for the detail view.
    /// Returns false and leaves the selection untouched if `index` is out of range.
    pub fn select_day(&self, state: &mut TripState, index: usize) -> bool {
        if index >= state.record.days.len() {
            warn!("Ignoring selection of missing day index {}", index);
            return false;
        }
        state.selected_day = Some(index);
        true
    }

    /// Remove a day, renumber the remaining ones and keep the selection valid
    pub fn delete_day(&self, state: &mut TripState, index: usize) -> Result<Day, ValidationError> {
        self.validate_day_index(state, index)?;

        let removed = state.record.days.remove(index);
        Self::renumber_days(&mut state.record.days);

        state.selected_day = match state.selected_day {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };

        info!(
            "Deleted day {} ('{}'), {} days remain",
            index + 1,
            removed.title,
            state.record.days.len()
        );
        Ok(removed)
    }

    /// Reassign `number` and the default title from each day's position.
    /// Custom titles are overwritten.
    pub fn renumber_days(days: &mut [Day]) {
        for (i, day) in days.iter_mut().enumerate() {
            let number = i as u32 + 1;
            day.number = number;
            day.title = Day::default_title(number);
        }
    }

    /// Append an activity to a day and return its index within the day
    pub fn add_activity(
        &self,
        state: &mut TripState,
        day_index: usize,
        request: AddActivityRequest,
    ) -> Result<usize, ValidationError> {
        if request.title.is_empty() {
            return Err(ValidationError::MissingActivityTitle);
        }
        self.validate_day_index(state, day_index)?;

        let day = &mut state.record.days[day_index];
        day.activities.push(Activity {
            time: request.time,
            title: request.title,
            location: request.location,
            notes: request.notes,
        });

        info!(
            "Added activity '{}' to {}",
            day.activities[day.activities.len() - 1].title,
            day.title
        );
        Ok(day.activities.len() - 1)
    }

    /// Remove an activity from a day
    pub fn delete_activity(
        &self,
        state: &mut TripState,
        day_index: usize,
        index: usize,
    ) -> Result<Activity, ValidationError> {
        self.validate_activity_index(state, day_index, index)?;

        let removed = state.record.days[day_index].activities.remove(index);
        info!("Deleted activity '{}' from day {}", removed.title, day_index + 1);
        Ok(removed)
    }

    pub fn validate_day_index(&self, state: &TripState, index: usize) -> Result<(), ValidationError> {
        if index < state.record.days.len() {
            Ok(())
        } else {
            Err(ValidationError::DayNotFound(index))
        }
    }

    pub fn validate_activity_index(
        &self,
        state: &TripState,
        day_index: usize,
        index: usize,
    ) -> Result<(), ValidationError> {
        self.validate_day_index(state, day_index)?;
        if index < state.record.days[day_index].activities.len() {
            Ok(())
        } else {
            Err(ValidationError::ActivityNotFound {
                day: day_index,
                activity: index,
            })
        }
    }
}
