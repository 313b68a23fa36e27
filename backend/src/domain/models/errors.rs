/// Rejections raised before any mutation is applied. The message is what the
/// user sees in the acknowledgment prompt. Indexes are stored 0-based and
/// shown 1-based.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter activity title")]
    MissingActivityTitle,
    #[error("Please fill in all fields")]
    MissingExpenseDescription,
    #[error("Please fill in all fields (amount must be a positive number, got '{0}')")]
    InvalidExpenseAmount(String),
    #[error("No day selected")]
    NoDaySelected,
    #[error("Day {} does not exist", .0 + 1)]
    DayNotFound(usize),
    #[error("Activity {} does not exist on day {}", .activity + 1, .day + 1)]
    ActivityNotFound { day: usize, activity: usize },
    #[error("Expense {} does not exist", .0 + 1)]
    ExpenseNotFound(usize),
    #[error("Packing item {} does not exist", .0 + 1)]
    PackingItemNotFound(usize),
}
