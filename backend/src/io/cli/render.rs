//! # Text Renderer
//!
//! Plain-text rendering of the five views. Every function is a pure
//! `state -> String` mapping so the output can be asserted in tests.

use shared::{Activity, BudgetStatus, BudgetSummary, TripRecord, View};
use std::fmt::Write;

use crate::domain::{BudgetService, TripState, ViewRegion};

const PROGRESS_CELLS: usize = 20;

pub struct Renderer {
    currency_symbol: String,
}

impl Renderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    /// Map a region to the view that contains it
    pub fn view_for(region: ViewRegion) -> View {
        match region {
            ViewRegion::TripDetails => View::Details,
            ViewRegion::DayList
            | ViewRegion::DayDetail
            | ViewRegion::ActivityList
            | ViewRegion::ActivityForm => View::Itinerary,
            ViewRegion::BudgetSummary | ViewRegion::ExpenseList => View::Budget,
            ViewRegion::PackingList => View::Packing,
            ViewRegion::Notes => View::Notes,
        }
    }

    /// Views touched by a set of regions, in first-seen order
    pub fn views_for(regions: &[ViewRegion]) -> Vec<View> {
        let mut views = Vec::new();
        for view in regions.iter().copied().map(Self::view_for) {
            if !views.contains(&view) {
                views.push(view);
            }
        }
        views
    }

    pub fn render_view(&self, view: View, state: &TripState) -> String {
        match view {
            View::Details => self.render_details(&state.record),
            View::Itinerary => self.render_itinerary(state),
            View::Budget => {
                let summary = BudgetService::new().summarize(&state.record.budget);
                self.render_budget(&state.record, &summary)
            }
            View::Packing => self.render_packing(&state.record),
            View::Notes => self.render_notes(&state.record),
        }
    }

    pub fn render_details(&self, record: &TripRecord) -> String {
        fn or_dash(value: &str) -> &str {
            if value.is_empty() {
                "-"
            } else {
                value
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "✈️  Trip");
        let _ = writeln!(out, "  Name:  {}", or_dash(&record.name));
        let _ = writeln!(out, "  Start: {}", or_dash(&record.start_date));
        let _ = writeln!(out, "  End:   {}", or_dash(&record.end_date));
        let _ = writeln!(
            out,
            "  {} days planned, {} expenses, {} items to pack",
            record.days.len(),
            record.budget.expenses.len(),
            record.packing.len()
        );
        out
    }

    pub fn render_itinerary(&self, state: &TripState) -> String {
        let mut out = self.render_day_list(state);
        out.push('\n');
        out.push_str(&self.render_day_detail(state));
        out
    }

    pub fn render_day_list(&self, state: &TripState) -> String {
        let days = &state.record.days;
        if days.is_empty() {
            return "No days added yet\n".to_string();
        }

        let mut out = String::new();
        for (index, day) in days.iter().enumerate() {
            let marker = if state.selected_day == Some(index) { ">" } else { " " };
            let _ = writeln!(
                out,
                "{} {}. {} ({} activities)",
                marker,
                day.number,
                day.title,
                day.activities.len()
            );
        }
        out
    }

    pub fn render_day_detail(&self, state: &TripState) -> String {
        let day = match state.selected() {
            Some(day) => day,
            None => return "Select a day to see its activities\n".to_string(),
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", day.title);
        if day.activities.is_empty() {
            let _ = writeln!(out, "  No activities planned yet");
            return out;
        }
        for (index, activity) in day.activities.iter().enumerate() {
            out.push_str(&self.render_activity(index, activity));
        }
        out
    }

    fn render_activity(&self, index: usize, activity: &Activity) -> String {
        let mut out = String::new();
        if activity.time.is_empty() {
            let _ = writeln!(out, "  {}. {}", index + 1, activity.title);
        } else {
            let _ = writeln!(out, "  {}. 🕐 {}  {}", index + 1, activity.time, activity.title);
        }
        if !activity.location.is_empty() {
            let _ = writeln!(out, "     📍 {}", activity.location);
        }
        if !activity.notes.is_empty() {
            let _ = writeln!(out, "     {}", activity.notes);
        }
        out
    }

    pub fn render_budget(&self, record: &TripRecord, summary: &BudgetSummary) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Budget:    {}", self.format_amount(summary.total));
        let _ = writeln!(out, "Spent:     {}", self.format_amount(summary.spent));
        match summary.status {
            BudgetStatus::WithinBudget => {
                let _ = writeln!(out, "Remaining: {}", self.format_amount(summary.remaining));
            }
            BudgetStatus::OverBudget => {
                let _ = writeln!(out, "Remaining: {}  OVER BUDGET", self.format_amount(summary.remaining));
            }
        }
        let _ = writeln!(out, "{}", self.progress_bar(summary));
        out.push('\n');

        let expenses = &record.budget.expenses;
        if expenses.is_empty() {
            let _ = writeln!(out, "💸 No expenses added yet");
            return out;
        }
        for (index, expense) in expenses.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} {}  {}  ({})",
                index + 1,
                expense.label(),
                expense.description,
                self.format_amount(expense.amount),
                expense.date
            );
        }
        out
    }

    /// `[#####...............]  25%`, using `!` cells when over budget
    pub fn progress_bar(&self, summary: &BudgetSummary) -> String {
        let filled = ((summary.progress / 100.0) * PROGRESS_CELLS as f64).round() as usize;
        let filled = filled.min(PROGRESS_CELLS);
        let fill = match summary.status {
            BudgetStatus::WithinBudget => "#",
            BudgetStatus::OverBudget => "!",
        };
        format!(
            "[{}{}] {:>3.0}%",
            fill.repeat(filled),
            ".".repeat(PROGRESS_CELLS - filled),
            summary.percentage
        )
    }

    pub fn render_packing(&self, record: &TripRecord) -> String {
        let packing = &record.packing;
        if packing.is_empty() {
            return "No items added yet\n".to_string();
        }

        let packed = packing.iter().filter(|item| item.packed).count();
        let mut out = String::new();
        let _ = writeln!(out, "Packed {}/{}", packed, packing.len());
        for (index, item) in packing.iter().enumerate() {
            if item.packed {
                let _ = writeln!(out, "  {}. [x] ~~{}~~", index + 1, item.item);
            } else {
                let _ = writeln!(out, "  {}. [ ] {}", index + 1, item.item);
            }
        }
        out
    }

    pub fn render_notes(&self, record: &TripRecord) -> String {
        if record.notes.is_empty() {
            "No notes yet\n".to_string()
        } else {
            format!("{}\n", record.notes.trim_end())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Day, Expense, PackingItem};

    fn renderer() -> Renderer {
        Renderer::new("₹")
    }

    fn summary_for(record: &TripRecord) -> BudgetSummary {
        BudgetService::new().summarize(&record.budget)
    }

    #[test]
    fn test_empty_views() {
        let state = TripState::default();
        let r = renderer();

        assert_eq!(r.render_day_list(&state), "No days added yet\n");
        assert_eq!(r.render_day_detail(&state), "Select a day to see its activities\n");
        assert_eq!(r.render_packing(&state.record), "No items added yet\n");
        assert_eq!(r.render_notes(&state.record), "No notes yet\n");
        assert!(r
            .render_budget(&state.record, &summary_for(&state.record))
            .contains("💸 No expenses added yet"));
    }

    #[test]
    fn test_day_list_marks_selection_and_counts() {
        let mut state = TripState::default();
        state.record.days.push(Day::new(1));
        let mut second = Day::new(2);
        second.activities.push(Activity {
            title: "Fort".to_string(),
            ..Activity::default()
        });
        state.record.days.push(second);
        state.selected_day = Some(1);

        let out = renderer().render_day_list(&state);
        assert_eq!(out, "  1. Day 1 (0 activities)\n> 2. Day 2 (1 activities)\n");
    }

    #[test]
    fn test_day_detail_renders_optional_fields() {
        let mut state = TripState::default();
        let mut day = Day::new(1);
        day.activities.push(Activity {
            time: "09:00".to_string(),
            title: "Breakfast".to_string(),
            location: "Cafe".to_string(),
            notes: "Try the dosa".to_string(),
        });
        day.activities.push(Activity {
            title: "Walk".to_string(),
            ..Activity::default()
        });
        state.record.days.push(day);
        state.selected_day = Some(0);

        let out = renderer().render_day_detail(&state);
        assert_eq!(
            out,
            "Day 1\n  1. 🕐 09:00  Breakfast\n     📍 Cafe\n     Try the dosa\n  2. Walk\n"
        );
    }

    #[test]
    fn test_budget_within_and_over() {
        let mut record = TripRecord::default();
        record.budget.total = 1000.0;
        record.budget.expenses.push(Expense {
            category: "🍔 Food".to_string(),
            description: "Lunch".to_string(),
            amount: 250.0,
            date: "6/1/2025".to_string(),
        });

        let r = renderer();
        let out = r.render_budget(&record, &summary_for(&record));
        assert!(out.contains("Spent:     ₹250.00"));
        assert!(out.contains("Remaining: ₹750.00\n"));
        assert!(out.contains("[#####...............]  25%"));
        assert!(out.contains("  1. 🍔 Lunch  ₹250.00  (6/1/2025)"));

        record.budget.total = 200.0;
        let out = r.render_budget(&record, &summary_for(&record));
        assert!(out.contains("Remaining: ₹-50.00  OVER BUDGET"));
        assert!(out.contains("[!!!!!!!!!!!!!!!!!!!!] 125%"));
    }

    #[test]
    fn test_packing_strikes_packed_items() {
        let mut record = TripRecord::default();
        record.packing.push(PackingItem::new("Hat"));
        record.packing.push(PackingItem {
            item: "Sunscreen".to_string(),
            packed: true,
        });

        let out = renderer().render_packing(&record);
        assert_eq!(out, "Packed 1/2\n  1. [ ] Hat\n  2. [x] ~~Sunscreen~~\n");
    }

    #[test]
    fn test_views_for_regions_dedupes() {
        let views = Renderer::views_for(&[
            ViewRegion::ActivityList,
            ViewRegion::ActivityForm,
            ViewRegion::DayList,
            ViewRegion::BudgetSummary,
        ]);
        assert_eq!(views, vec![View::Itinerary, View::Budget]);
    }
}
