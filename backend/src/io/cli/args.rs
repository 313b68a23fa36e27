use clap::{Parser, Subcommand};
use shared::{PackingTemplate, View};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tripwise")]
#[command(about = "Plan a trip: itinerary, budget and packing list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the trip snapshot and config.yaml
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Log what the planner is doing to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one of the views (details, itinerary, budget, packing, notes)
    Show {
        #[arg(default_value = "details")]
        view: View,
    },

    /// Trip name and dates
    Trip {
        #[command(subcommand)]
        command: TripCommand,
    },

    /// Itinerary days
    Day {
        #[command(subcommand)]
        command: DayCommand,
    },

    /// Activities within a day
    Activity {
        #[command(subcommand)]
        command: ActivityCommand,
    },

    /// Total budget and spending summary
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },

    /// Itemized expenses
    Expense {
        #[command(subcommand)]
        command: ExpenseCommand,
    },

    /// Packing checklist
    Pack {
        #[command(subcommand)]
        command: PackCommand,
    },

    /// Free-form trip notes
    Notes {
        #[command(subcommand)]
        command: NotesCommand,
    },

    /// Delete the saved trip and start over
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum TripCommand {
    Show,
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long = "start")]
        start_date: Option<String>,

        #[arg(long = "end")]
        end_date: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum DayCommand {
    Add,
    List,
    /// Open a day and list its activities
    Show {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
    },
    Delete {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum ActivityCommand {
    Add {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        time: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        notes: String,
    },
    Delete {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,

        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        activity: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum BudgetCommand {
    /// Set the total budget; anything non-numeric counts as 0
    Total {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    Show,
}

#[derive(Debug, Subcommand)]
pub enum ExpenseCommand {
    Add {
        #[arg(long, default_value = "📦 Other")]
        category: String,

        #[arg(long)]
        description: String,

        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    Delete {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        expense: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum PackCommand {
    Add {
        item: String,
    },
    Toggle {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        item: u32,
    },
    Delete {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        item: u32,
    },
    /// Add a template's items (beach, mountain, city, business), skipping ones already listed
    Template {
        kind: PackingTemplate,
    },
    List,
}

#[derive(Debug, Subcommand)]
pub enum NotesCommand {
    Show,
    Save {
        text: String,
    },
}

/// Convert a 1-based position from the command line into an index
pub fn to_index(position: u32) -> usize {
    position.saturating_sub(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_activity_add() {
        let cli = Cli::try_parse_from([
            "tripwise", "activity", "add", "--day", "2", "--title", "Museum", "--time", "10:00",
        ])
        .unwrap();

        match cli.command {
            Commands::Activity {
                command: ActivityCommand::Add { day, title, time, location, .. },
            } => {
                assert_eq!(day, 2);
                assert_eq!(title, "Museum");
                assert_eq!(time, "10:00");
                assert_eq!(location, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_template_kind() {
        let cli = Cli::try_parse_from(["tripwise", "pack", "template", "mountain"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Pack {
                command: PackCommand::Template { kind: PackingTemplate::Mountain }
            }
        ));

        assert!(Cli::try_parse_from(["tripwise", "pack", "template", "desert"]).is_err());
    }

    #[test]
    fn test_positions_start_at_one() {
        assert!(Cli::try_parse_from(["tripwise", "day", "delete", "0"]).is_err());
        assert_eq!(to_index(1), 0);
    }

    #[test]
    fn test_show_defaults_to_details() {
        let cli = Cli::try_parse_from(["tripwise", "--yes", "show"]).unwrap();
        assert!(cli.yes);
        assert!(matches!(cli.command, Commands::Show { view: View::Details }));
    }

    #[test]
    fn test_negative_budget_amount_is_accepted_as_text() {
        let cli = Cli::try_parse_from(["tripwise", "budget", "total", "-50"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Budget { command: BudgetCommand::Total { ref amount } } if amount == "-50"
        ));
    }
}
