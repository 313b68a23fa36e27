//! # Trip Controller
//!
//! Owns the application state and sequences every user action:
//!
//! 1. ask for confirmation when the action is destructive
//! 2. apply the pure mutation from the matching service
//! 3. persist the full snapshot
//! 4. report which view regions the presentation must redraw
//!
//! Validation failures abort before anything changes. A failed save leaves
//! the in-memory mutation in place and is reported as a storage error.

use log::{error, info};
use shared::{
    AddActivityRequest, AddExpenseRequest, BudgetSummary, PackingTemplate, TripRecord,
    UpdateTripDetailsRequest, View,
};
use std::sync::Arc;

use super::budget_service::BudgetService;
use super::clock::Clock;
use super::itinerary_service::ItineraryService;
use super::models::{Outcome, ValidationError, ViewRegion};
use super::packing_service::PackingService;
use super::prompts::{
    Confirm, CONFIRM_DELETE_ACTIVITY, CONFIRM_DELETE_DAY, CONFIRM_DELETE_EXPENSE, CONFIRM_RESET_TRIP,
};
use super::trip_details_service::TripDetailsService;
use super::trip_state::TripState;
use crate::storage::TripStorage;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not save trip: {0:#}")]
    Storage(anyhow::Error),
}

pub type ControllerResult = Result<Outcome, ControllerError>;

pub struct TripController {
    state: TripState,
    storage: Arc<dyn TripStorage>,
    clock: Arc<dyn Clock>,
    itinerary: ItineraryService,
    budget: BudgetService,
    packing: PackingService,
    details: TripDetailsService,
}

impl TripController {
    /// Load the saved trip (or start empty) and build the controller around it
    pub fn new(storage: Arc<dyn TripStorage>, clock: Arc<dyn Clock>) -> Self {
        let record = storage.load();
        info!(
            "Opened trip '{}' with {} days, {} expenses, {} packing items",
            record.name,
            record.days.len(),
            record.budget.expenses.len(),
            record.packing.len()
        );
        Self::with_state(TripState::new(record), storage, clock)
    }

    /// Build a controller around existing state without touching storage
    pub fn with_state(state: TripState, storage: Arc<dyn TripStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state,
            storage,
            clock,
            itinerary: ItineraryService::new(),
            budget: BudgetService::new(),
            packing: PackingService::new(),
            details: TripDetailsService::new(),
        }
    }

    pub fn state(&self) -> &TripState {
        &self.state
    }

    pub fn record(&self) -> &TripRecord {
        &self.state.record
    }

    /// Current budget figures, recomputed on every call
    pub fn budget_summary(&self) -> BudgetSummary {
        self.budget.summarize(&self.state.record.budget)
    }

    /// `(packed, total)` packing counts
    pub fn packing_progress(&self) -> (usize, usize) {
        self.packing.packing_progress(&self.state)
    }

    fn persist(&self) -> Result<(), ControllerError> {
        self.storage.save(&self.state.record).map_err(|e| {
            error!("Failed to save trip: {:#}", e);
            ControllerError::Storage(e)
        })
    }

    fn applied(&self, regions: Vec<ViewRegion>) -> ControllerResult {
        self.persist()?;
        Ok(Outcome::Applied(regions))
    }

    // ----- navigation -----

    /// Show one of the five views. Transient, nothing is persisted.
    pub fn switch_view(&mut self, view: View) {
        self.state.switch_view(view);
    }

    // ----- trip details -----

    /// Overwrite the given fields. Nothing is saved when no value differs.
    pub fn update_details(&mut self, request: UpdateTripDetailsRequest) -> ControllerResult {
        if !self.details.update_details(&mut self.state, request) {
            return Ok(Outcome::Unchanged);
        }
        self.applied(vec![ViewRegion::TripDetails])
    }

    pub fn save_notes(&mut self, notes: &str) -> ControllerResult {
        self.details.save_notes(&mut self.state, notes);
        self.applied(vec![ViewRegion::Notes])
    }

    // ----- days and activities -----

    pub fn add_day(&mut self) -> ControllerResult {
        self.itinerary.add_day(&mut self.state);
        self.applied(vec![ViewRegion::DayList])
    }

    /// Open a day's detail view. Out-of-range indexes are ignored.
    pub fn select_day(&mut self, index: usize) -> Outcome {
        if self.itinerary.select_day(&mut self.state, index) {
            Outcome::Applied(vec![
                ViewRegion::DayList,
                ViewRegion::DayDetail,
                ViewRegion::ActivityList,
            ])
        } else {
            Outcome::Unchanged
        }
    }

    pub fn delete_day(&mut self, index: usize, confirm: &mut dyn Confirm) -> ControllerResult {
        self.itinerary.validate_day_index(&self.state, index)?;
        if !confirm.confirm(CONFIRM_DELETE_DAY) {
            return Ok(Outcome::Declined);
        }

        let had_selection = self.state.selected_day.is_some();
        self.itinerary.delete_day(&mut self.state, index)?;

        let mut regions = vec![ViewRegion::DayList];
        if had_selection {
            // Either the detail view closes or its day was renumbered
            regions.push(ViewRegion::DayDetail);
        }
        self.applied(regions)
    }

    pub fn add_activity(&mut self, day_index: usize, request: AddActivityRequest) -> ControllerResult {
        self.itinerary.add_activity(&mut self.state, day_index, request)?;
        self.applied(vec![
            ViewRegion::ActivityList,
            ViewRegion::ActivityForm,
            ViewRegion::DayList,
        ])
    }

    /// Add an activity to the day open in the detail view
    pub fn add_activity_to_selected(&mut self, request: AddActivityRequest) -> ControllerResult {
        let day_index = self.state.selected_day.ok_or(ValidationError::NoDaySelected)?;
        self.add_activity(day_index, request)
    }

    pub fn delete_activity(
        &mut self,
        day_index: usize,
        index: usize,
        confirm: &mut dyn Confirm,
    ) -> ControllerResult {
        self.itinerary.validate_activity_index(&self.state, day_index, index)?;
        if !confirm.confirm(CONFIRM_DELETE_ACTIVITY) {
            return Ok(Outcome::Declined);
        }

        self.itinerary.delete_activity(&mut self.state, day_index, index)?;
        self.applied(vec![ViewRegion::ActivityList, ViewRegion::DayList])
    }

    // ----- budget -----

    pub fn set_total_budget(&mut self, input: &str) -> ControllerResult {
        self.budget.set_total_budget(&mut self.state, input);
        self.applied(vec![ViewRegion::BudgetSummary])
    }

    pub fn add_expense(&mut self, request: AddExpenseRequest) -> ControllerResult {
        let date = self.clock.today();
        self.budget.add_expense(&mut self.state, request, date)?;
        self.applied(vec![ViewRegion::BudgetSummary, ViewRegion::ExpenseList])
    }

    pub fn delete_expense(&mut self, index: usize, confirm: &mut dyn Confirm) -> ControllerResult {
        self.budget.validate_expense_index(&self.state, index)?;
        if !confirm.confirm(CONFIRM_DELETE_EXPENSE) {
            return Ok(Outcome::Declined);
        }

        self.budget.delete_expense(&mut self.state, index)?;
        self.applied(vec![ViewRegion::BudgetSummary, ViewRegion::ExpenseList])
    }

    // ----- packing -----

    pub fn add_packing_item(&mut self, text: &str) -> ControllerResult {
        match self.packing.add_item(&mut self.state, text) {
            Some(_) => self.applied(vec![ViewRegion::PackingList]),
            None => Ok(Outcome::Unchanged),
        }
    }

    pub fn toggle_packed(&mut self, index: usize) -> ControllerResult {
        self.packing.toggle_packed(&mut self.state, index)?;
        self.applied(vec![ViewRegion::PackingList])
    }

    /// Remove a packing item. Never asks for confirmation.
    pub fn delete_packing_item(&mut self, index: usize) -> ControllerResult {
        self.packing.delete_item(&mut self.state, index)?;
        self.applied(vec![ViewRegion::PackingList])
    }

    /// Bulk-insert a template; persists once however many items are added
    pub fn load_template(&mut self, template: PackingTemplate) -> ControllerResult {
        self.packing.load_template(&mut self.state, template);
        self.applied(vec![ViewRegion::PackingList])
    }

    // ----- whole trip -----

    /// Forget the stored trip and start over with an empty record
    pub fn reset(&mut self, confirm: &mut dyn Confirm) -> ControllerResult {
        if !confirm.confirm(CONFIRM_RESET_TRIP) {
            return Ok(Outcome::Declined);
        }

        self.storage.reset().map_err(ControllerError::Storage)?;
        self.state = TripState::default();
        info!("Trip reset");

        Ok(Outcome::Applied(vec![
            ViewRegion::TripDetails,
            ViewRegion::DayList,
            ViewRegion::DayDetail,
            ViewRegion::BudgetSummary,
            ViewRegion::ExpenseList,
            ViewRegion::PackingList,
            ViewRegion::Notes,
        ]))
    }
}
