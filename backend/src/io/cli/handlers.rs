//! # Command Handlers
//!
//! Dispatch a parsed command to the controller and print what changed.
//! Handlers never touch storage directly.

use anyhow::Result;
use log::debug;
use shared::{AddActivityRequest, AddExpenseRequest, UpdateTripDetailsRequest, View};
use std::io::Write;

use super::args::{
    to_index, ActivityCommand, BudgetCommand, Commands, DayCommand, ExpenseCommand, NotesCommand,
    PackCommand, TripCommand,
};
use super::render::Renderer;
use crate::domain::{Confirm, ControllerError, Outcome, TripController, ValidationError};

pub struct CommandHandler<'a> {
    controller: &'a mut TripController,
    renderer: &'a Renderer,
    confirm: &'a mut dyn Confirm,
    out: &'a mut dyn Write,
}

impl<'a> CommandHandler<'a> {
    pub fn new(
        controller: &'a mut TripController,
        renderer: &'a Renderer,
        confirm: &'a mut dyn Confirm,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            controller,
            renderer,
            confirm,
            out,
        }
    }

    /// Run one command. Validation and storage failures come back as
    /// `ControllerError` inside the `anyhow::Error`.
    pub fn handle(&mut self, command: Commands) -> Result<()> {
        debug!("Handling {:?}", command);
        match command {
            Commands::Show { view } => self.show(view),
            Commands::Trip { command } => self.handle_trip(command),
            Commands::Day { command } => self.handle_day(command),
            Commands::Activity { command } => self.handle_activity(command),
            Commands::Budget { command } => self.handle_budget(command),
            Commands::Expense { command } => self.handle_expense(command),
            Commands::Pack { command } => self.handle_pack(command),
            Commands::Notes { command } => self.handle_notes(command),
            Commands::Reset => {
                let outcome = self.controller.reset(&mut *self.confirm)?;
                if outcome.is_applied() {
                    writeln!(self.out, "Trip reset.")?;
                    Ok(())
                } else {
                    self.report(outcome)
                }
            }
        }
    }

    fn show(&mut self, view: View) -> Result<()> {
        self.controller.switch_view(view);
        let text = self.renderer.render_view(view, self.controller.state());
        write!(self.out, "{}", text)?;
        Ok(())
    }

    /// Print the views an outcome touched, or why nothing happened
    fn report(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Applied(regions) => {
                for view in Renderer::views_for(&regions) {
                    let text = self.renderer.render_view(view, self.controller.state());
                    write!(self.out, "{}", text)?;
                }
            }
            Outcome::Declined => writeln!(self.out, "Cancelled.")?,
            Outcome::Unchanged => writeln!(self.out, "Nothing to do.")?,
        }
        Ok(())
    }

    /// Open a day so the itinerary view shows its activities
    fn open_day(&mut self, index: usize) -> Result<()> {
        match self.controller.select_day(index) {
            Outcome::Unchanged => Err(ControllerError::from(ValidationError::DayNotFound(index)).into()),
            _ => Ok(()),
        }
    }

    fn handle_trip(&mut self, command: TripCommand) -> Result<()> {
        match command {
            TripCommand::Show => self.show(View::Details),
            TripCommand::Set {
                name,
                start_date,
                end_date,
            } => {
                let outcome = self.controller.update_details(UpdateTripDetailsRequest {
                    name,
                    start_date,
                    end_date,
                })?;
                self.report(outcome)
            }
        }
    }

    fn handle_day(&mut self, command: DayCommand) -> Result<()> {
        match command {
            DayCommand::Add => {
                let outcome = self.controller.add_day()?;
                self.report(outcome)
            }
            DayCommand::List => {
                let text = self.renderer.render_day_list(self.controller.state());
                write!(self.out, "{}", text)?;
                Ok(())
            }
            DayCommand::Show { day } => {
                self.open_day(to_index(day))?;
                self.show(View::Itinerary)
            }
            DayCommand::Delete { day } => {
                let outcome = self.controller.delete_day(to_index(day), &mut *self.confirm)?;
                self.report(outcome)
            }
        }
    }

    fn handle_activity(&mut self, command: ActivityCommand) -> Result<()> {
        match command {
            ActivityCommand::Add {
                day,
                title,
                time,
                location,
                notes,
            } => {
                self.open_day(to_index(day))?;
                let outcome = self.controller.add_activity_to_selected(AddActivityRequest {
                    time,
                    title,
                    location,
                    notes,
                })?;
                self.report(outcome)
            }
            ActivityCommand::Delete { day, activity } => {
                let day_index = to_index(day);
                self.open_day(day_index)?;
                let outcome =
                    self.controller
                        .delete_activity(day_index, to_index(activity), &mut *self.confirm)?;
                self.report(outcome)
            }
        }
    }

    fn handle_budget(&mut self, command: BudgetCommand) -> Result<()> {
        match command {
            BudgetCommand::Total { amount } => {
                let outcome = self.controller.set_total_budget(&amount)?;
                self.report(outcome)
            }
            BudgetCommand::Show => self.show(View::Budget),
        }
    }

    fn handle_expense(&mut self, command: ExpenseCommand) -> Result<()> {
        match command {
            ExpenseCommand::Add {
                category,
                description,
                amount,
            } => {
                let outcome = self.controller.add_expense(AddExpenseRequest {
                    category,
                    description,
                    amount,
                })?;
                self.report(outcome)
            }
            ExpenseCommand::Delete { expense } => {
                let outcome = self
                    .controller
                    .delete_expense(to_index(expense), &mut *self.confirm)?;
                self.report(outcome)
            }
        }
    }

    fn handle_pack(&mut self, command: PackCommand) -> Result<()> {
        let outcome = match command {
            PackCommand::Add { item } => self.controller.add_packing_item(&item)?,
            PackCommand::Toggle { item } => self.controller.toggle_packed(to_index(item))?,
            PackCommand::Delete { item } => self.controller.delete_packing_item(to_index(item))?,
            PackCommand::Template { kind } => self.controller.load_template(kind)?,
            PackCommand::List => return self.show(View::Packing),
        };
        self.report(outcome)
    }

    fn handle_notes(&mut self, command: NotesCommand) -> Result<()> {
        match command {
            NotesCommand::Show => self.show(View::Notes),
            NotesCommand::Save { text } => {
                self.controller.save_notes(&text)?;
                writeln!(self.out, "Notes saved! ✓")?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssumeYes;
    use crate::storage::test_utils::TestEnvironment;
    use clap::Parser;

    use super::super::args::Cli;

    /// Run each command line against the same controller, collecting output
    fn run(controller: &mut TripController, lines: &[&[&str]]) -> Result<String> {
        let renderer = Renderer::new("₹");
        let mut output = Vec::new();
        for line in lines {
            let args = std::iter::once("tripwise").chain(line.iter().copied());
            let cli = Cli::try_parse_from(args)?;
            CommandHandler::new(controller, &renderer, &mut AssumeYes, &mut output).handle(cli.command)?;
        }
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_day_and_activity_flow() {
        let env = TestEnvironment::new().unwrap();
        let mut controller = env.controller();

        let out = run(
            &mut controller,
            &[
                &["day", "add"],
                &["day", "add"],
                &["activity", "add", "--day", "2", "--title", "Museum", "--time", "10:00"],
            ],
        )
        .unwrap();

        assert!(out.contains("> 2. Day 2 (1 activities)"));
        assert!(out.contains("  1. 🕐 10:00  Museum"));
        assert_eq!(env.reload().days[1].activities[0].title, "Museum");
    }

    #[test]
    fn test_missing_day_is_a_validation_error() {
        let env = TestEnvironment::new().unwrap();
        let mut controller = env.controller();

        let err = run(&mut controller, &[&["day", "show", "3"]]).unwrap_err();
        let err = err.downcast_ref::<ControllerError>().unwrap();
        assert_eq!(err.to_string(), "Day 3 does not exist");
    }

    #[test]
    fn test_declined_delete_prints_cancelled() {
        let env = TestEnvironment::new().unwrap();
        let mut controller = env.controller();
        run(&mut controller, &[&["day", "add"]]).unwrap();

        let renderer = Renderer::new("₹");
        let mut output = Vec::new();
        let mut decline = |_: &str| false;
        let cli = Cli::try_parse_from(["tripwise", "day", "delete", "1"]).unwrap();
        CommandHandler::new(&mut controller, &renderer, &mut decline, &mut output)
            .handle(cli.command)
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Cancelled.\n");
        assert_eq!(env.reload().days.len(), 1);
    }

    #[test]
    fn test_budget_and_expense_output() {
        let env = TestEnvironment::new().unwrap();
        let mut controller = env.controller();

        let out = run(
            &mut controller,
            &[
                &["budget", "total", "1000"],
                &["expense", "add", "--category", "🏨 Accommodation", "--description", "Hotel", "300"],
            ],
        )
        .unwrap();

        assert!(out.contains("Remaining: ₹700.00"));
        assert!(out.contains("🏨 Hotel  ₹300.00  (6/1/2025)"));

        let err = run(&mut controller, &[&["expense", "add", "--description", "Tea", "abc"]]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ControllerError>(),
            Some(ControllerError::Validation(ValidationError::InvalidExpenseAmount(_)))
        ));
    }

    #[test]
    fn test_pack_and_notes_output() {
        let env = TestEnvironment::new().unwrap();
        let mut controller = env.controller();

        let out = run(
            &mut controller,
            &[&["pack", "add", "  "], &["pack", "add", "Hat"], &["pack", "toggle", "1"]],
        )
        .unwrap();
        assert!(out.starts_with("Nothing to do.\n"));
        assert!(out.ends_with("Packed 1/1\n  1. [x] ~~Hat~~\n"));

        let out = run(&mut controller, &[&["notes", "save", "Book the ferry"]]).unwrap();
        assert_eq!(out, "Notes saved! ✓\n");
        assert_eq!(env.reload().notes, "Book the ferry");
    }

    #[test]
    fn test_trip_set_without_changes() {
        let env = TestEnvironment::new().unwrap();
        let mut controller = env.controller();

        let out = run(&mut controller, &[&["trip", "set"]]).unwrap();
        assert_eq!(out, "Nothing to do.\n");

        let out = run(&mut controller, &[&["trip", "set", "--name", "Goa"]]).unwrap();
        assert!(out.contains("Name:  Goa"));
        assert_eq!(env.reload().name, "Goa");
    }

    #[test]
    fn test_reset_output() {
        let env = TestEnvironment::new().unwrap();
        let mut controller = env.controller();

        let out = run(&mut controller, &[&["day", "add"], &["reset"]]).unwrap();
        assert!(out.ends_with("Trip reset.\n"));
        assert!(env.reload().days.is_empty());
    }
}
