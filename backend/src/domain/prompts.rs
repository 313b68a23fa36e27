//! Blocking user interactions the controller depends on.

/// Yes/no question asked before destructive operations.
///
/// Deleting a day, an activity or an expense asks first; deleting a packing
/// item does not.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Answers yes to everything (`--yes` on the command line)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

pub const CONFIRM_DELETE_DAY: &str = "Delete this day?";
pub const CONFIRM_DELETE_ACTIVITY: &str = "Delete this activity?";
pub const CONFIRM_DELETE_EXPENSE: &str = "Delete this expense?";
pub const CONFIRM_RESET_TRIP: &str = "Delete the whole trip? This cannot be undone.";
