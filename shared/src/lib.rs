use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root aggregate holding everything persisted for one trip.
///
/// Field names serialize in camelCase so snapshots written by earlier
/// browser builds (`startDate`, `endDate`) load unchanged. Every field has a
/// default, so a partial snapshot fills the gaps instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripRecord {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    /// Itinerary days; position is identity (index + 1 == day number)
    pub days: Vec<Day>,
    pub budget: Budget,
    pub packing: Vec<PackingItem>,
    pub notes: String,
}

/// A single itinerary day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Day {
    /// Always equal to the 1-based position in `TripRecord::days`
    pub number: u32,
    pub title: String,
    /// Display order is insertion order
    pub activities: Vec<Activity>,
}

impl Day {
    /// Create an empty day carrying the default title for its number
    pub fn new(number: u32) -> Self {
        Self {
            number,
            title: Self::default_title(number),
            activities: Vec::new(),
        }
    }

    /// Default title for a day number, e.g. "Day 3"
    pub fn default_title(number: u32) -> String {
        format!("Day {}", number)
    }
}

/// One scheduled activity within a day. Only `title` is required; the
/// other fields are free-form and may be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub time: String,
    pub title: String,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    /// Planned spend for the whole trip (never negative)
    pub total: f64,
    pub expenses: Vec<Expense>,
}

/// A single budget line item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Expense {
    /// Free text; the first token doubles as an icon or label prefix (e.g. "🍔 Food")
    pub category: String,
    pub description: String,
    /// Always positive once stored
    pub amount: f64,
    /// Local display date captured when the expense was added
    pub date: String,
}

impl Expense {
    /// First whitespace-separated token of the category, used as the list prefix
    pub fn label(&self) -> &str {
        self.category.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingItem {
    pub item: String,
    pub packed: bool,
}

impl PackingItem {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            packed: false,
        }
    }
}

/// Fixed packing templates that can be bulk-inserted into the checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackingTemplate {
    Beach,
    Mountain,
    City,
    Business,
}

impl PackingTemplate {
    pub const ALL: [PackingTemplate; 4] = [
        PackingTemplate::Beach,
        PackingTemplate::Mountain,
        PackingTemplate::City,
        PackingTemplate::Business,
    ];

    /// Ordered item names inserted by this template
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            PackingTemplate::Beach => &[
                "Swimsuit",
                "Sunscreen",
                "Beach towel",
                "Sunglasses",
                "Flip-flops",
                "Hat",
                "Beach bag",
                "Waterproof phone case",
            ],
            PackingTemplate::Mountain => &[
                "Hiking boots",
                "Backpack",
                "Water bottle",
                "Warm jacket",
                "First aid kit",
                "Flashlight",
                "Map/GPS",
                "Snacks",
            ],
            PackingTemplate::City => &[
                "Comfortable shoes",
                "Day bag",
                "Camera",
                "City map",
                "Power bank",
                "Umbrella",
                "Water bottle",
                "Travel guide",
            ],
            PackingTemplate::Business => &[
                "Formal clothes",
                "Laptop",
                "Chargers",
                "Documents",
                "Business cards",
                "Notebook",
                "Pen",
                "Briefcase",
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PackingTemplate::Beach => "beach",
            PackingTemplate::Mountain => "mountain",
            PackingTemplate::City => "city",
            PackingTemplate::Business => "business",
        }
    }
}

impl fmt::Display for PackingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PackingTemplate {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackingTemplate::ALL
            .into_iter()
            .find(|template| template.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariantError::new("packing template", s))
    }
}

/// The five tab-selectable views; exactly one is visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Details,
    Itinerary,
    Budget,
    Packing,
    Notes,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Details,
        View::Itinerary,
        View::Budget,
        View::Packing,
        View::Notes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            View::Details => "details",
            View::Itinerary => "itinerary",
            View::Budget => "budget",
            View::Packing => "packing",
            View::Notes => "notes",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for View {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariantError::new("view", s))
    }
}

/// Returned when parsing a closed enum (template, view) from user text fails
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariantError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariantError {}

/// Visual state of the remaining amount and progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    WithinBudget,
    OverBudget,
}

/// Figures derived from the budget; recomputed from scratch on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total: f64,
    pub spent: f64,
    /// `total - spent`; negative when over budget
    pub remaining: f64,
    /// Unclamped share of the budget spent, 0 when no total is set
    pub percentage: f64,
    /// `percentage` clamped to [0, 100] for progress rendering
    pub progress: f64,
    pub status: BudgetStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddActivityRequest {
    pub time: String,
    /// Required, must not be empty
    pub title: String,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    pub category: String,
    /// Required, must not be empty
    pub description: String,
    /// Raw user input; must parse to a positive number
    pub amount: String,
}

/// Partial update of the trip details form; `None` leaves a field as is
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateTripDetailsRequest {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_new_uses_default_title() {
        let day = Day::new(3);
        assert_eq!(day.number, 3);
        assert_eq!(day.title, "Day 3");
        assert!(day.activities.is_empty());
    }

    #[test]
    fn test_expense_label_is_first_token() {
        let expense = Expense {
            category: "🍔 Food".to_string(),
            description: "Lunch".to_string(),
            amount: 12.5,
            date: "1/2/2025".to_string(),
        };
        assert_eq!(expense.label(), "🍔");

        let bare = Expense {
            category: String::new(),
            ..expense
        };
        assert_eq!(bare.label(), "");
    }

    #[test]
    fn test_templates_have_eight_unique_items() {
        for template in PackingTemplate::ALL {
            let items = template.items();
            assert_eq!(items.len(), 8, "template {}", template);
            let mut sorted = items.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 8, "template {} has duplicates", template);
        }
    }

    #[test]
    fn test_template_from_str() {
        assert_eq!("beach".parse::<PackingTemplate>().unwrap(), PackingTemplate::Beach);
        assert_eq!("Business".parse::<PackingTemplate>().unwrap(), PackingTemplate::Business);
        let err = "desert".parse::<PackingTemplate>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown packing template: 'desert'");
    }

    #[test]
    fn test_view_from_str_round_trips_names() {
        for view in View::ALL {
            assert_eq!(view.name().parse::<View>().unwrap(), view);
        }
        assert!("calendar".parse::<View>().is_err());
    }

    #[test]
    fn test_trip_record_reads_browser_snapshot() {
        let json = r#"{
            "name": "Goa",
            "startDate": "2025-01-10",
            "endDate": "2025-01-15",
            "days": [{"number": 1, "title": "Day 1", "activities": [
                {"time": "09:00", "title": "Beach", "location": "Baga", "notes": ""}
            ]}],
            "budget": {"total": 1000, "expenses": [
                {"category": "🍔 Food", "description": "Lunch", "amount": 300, "date": "1/10/2025"}
            ]},
            "packing": [{"item": "Hat", "packed": true}],
            "notes": "bring cash"
        }"#;

        let record: TripRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.start_date, "2025-01-10");
        assert_eq!(record.days[0].activities[0].location, "Baga");
        assert_eq!(record.budget.total, 1000.0);
        assert_eq!(record.budget.expenses[0].amount, 300.0);
        assert!(record.packing[0].packed);
    }

    #[test]
    fn test_trip_record_fills_missing_fields() {
        let record: TripRecord = serde_json::from_str(r#"{"name": "Oslo"}"#).unwrap();
        assert_eq!(record.name, "Oslo");
        assert!(record.days.is_empty());
        assert_eq!(record.budget.total, 0.0);
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_trip_record_serializes_camel_case() {
        let record = TripRecord {
            start_date: "2025-03-01".to_string(),
            ..TripRecord::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"startDate\":\"2025-03-01\""));
        assert!(json.contains("\"endDate\""));
    }
}
