//! Budget domain logic for the trip planner.
//!
//! Handles the total budget, expense entry and the derived spent/remaining
//! figures. Amounts typed by the user are parsed leniently, the way a browser
//! `parseFloat` reads a form field: leading whitespace is skipped and the
//! longest numeric prefix wins ("300 rupees" reads as 300).

use log::info;
use shared::{AddExpenseRequest, Budget, BudgetStatus, BudgetSummary, Expense};

use super::models::ValidationError;
use super::trip_state::TripState;

#[derive(Debug, Clone, Default)]
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Set the trip's total budget from raw input.
    /// Unparseable, empty, negative or non-finite input is treated as 0.
    pub fn set_total_budget(&self, state: &mut TripState, input: &str) -> f64 {
        let total = parse_number_prefix(input)
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or(0.0);

        state.record.budget.total = total;
        info!("Set total budget to {:.2}", total);
        total
    }

    /// Derive spent/remaining/percentage from scratch.
    ///
    /// Nothing is cached: expenses can be removed in any order, so the sum is
    /// always recomputed from the current list.
    pub fn summarize(&self, budget: &Budget) -> BudgetSummary {
        let total = budget.total;
        let spent: f64 = budget.expenses.iter().map(|expense| expense.amount).sum();
        let remaining = total - spent;
        let percentage = if total > 0.0 { spent * 100.0 / total } else { 0.0 };
        let status = if percentage > 100.0 {
            BudgetStatus::OverBudget
        } else {
            BudgetStatus::WithinBudget
        };

        BudgetSummary {
            total,
            spent,
            remaining,
            percentage,
            progress: percentage.clamp(0.0, 100.0),
            status,
        }
    }

    /// Validate and append an expense dated `date`; returns its index
    pub fn add_expense(
        &self,
        state: &mut TripState,
        request: AddExpenseRequest,
        date: String,
    ) -> Result<usize, ValidationError> {
        if request.description.is_empty() {
            return Err(ValidationError::MissingExpenseDescription);
        }
        let amount = self.parse_expense_amount(&request.amount)?;

        let expenses = &mut state.record.budget.expenses;
        expenses.push(Expense {
            category: request.category,
            description: request.description,
            amount,
            date,
        });

        info!(
            "Added expense '{}' of {:.2} ({} expenses)",
            expenses[expenses.len() - 1].description,
            amount,
            expenses.len()
        );
        Ok(expenses.len() - 1)
    }

    /// Remove an expense by position
    pub fn delete_expense(&self, state: &mut TripState, index: usize) -> Result<Expense, ValidationError> {
        self.validate_expense_index(state, index)?;

        let removed = state.record.budget.expenses.remove(index);
        info!("Deleted expense '{}' of {:.2}", removed.description, removed.amount);
        Ok(removed)
    }

    /// Parse an expense amount. Zero is rejected along with everything that
    /// is not a finite positive number.
    pub fn parse_expense_amount(&self, input: &str) -> Result<f64, ValidationError> {
        match parse_number_prefix(input) {
            Some(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
            _ => Err(ValidationError::InvalidExpenseAmount(input.trim().to_string())),
        }
    }

    pub fn validate_expense_index(&self, state: &TripState, index: usize) -> Result<(), ValidationError> {
        if index < state.record.budget.expenses.len() {
            Ok(())
        } else {
            Err(ValidationError::ExpenseNotFound(index))
        }
    }
}

/// Read the longest numeric prefix of `input`, like JavaScript's `parseFloat`.
///
/// Accepts an optional sign, digits with an optional fractional part, an
/// optional exponent, and the literal `Infinity`. Returns `None` when no digits
/// are found.
pub fn parse_number_prefix(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}
