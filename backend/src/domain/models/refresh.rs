/// A part of the presentation that must be redrawn after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRegion {
    TripDetails,
    DayList,
    /// Selected day's header and the detail panel visibility
    DayDetail,
    ActivityList,
    /// The add-activity form should be cleared and hidden
    ActivityForm,
    BudgetSummary,
    ExpenseList,
    PackingList,
    Notes,
}

/// What a controller operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and was persisted; redraw these regions
    Applied(Vec<ViewRegion>),
    /// The user declined the confirmation prompt; nothing changed
    Declined,
    /// Input was a no-op (blank packing item, out-of-range selection)
    Unchanged,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// Regions to redraw; empty unless the operation was applied
    pub fn regions(&self) -> &[ViewRegion] {
        match self {
            Outcome::Applied(regions) => regions,
            Outcome::Declined | Outcome::Unchanged => &[],
        }
    }
}
