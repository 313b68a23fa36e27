use chrono::Local;

/// Source of the capture date stamped on new expenses
pub trait Clock: Send + Sync {
    /// Today's date in the local display format
    fn today(&self) -> String;
}

/// Local wall clock, formatted like a browser's default date string (`M/D/YYYY`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> String {
        Local::now().format("%-m/%-d/%Y").to_string()
    }
}

/// Always returns the same date
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_clock_format() {
        let today = LocalClock.today();
        let parts: Vec<&str> = today.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|part| part.parse::<u32>().is_ok()));
        assert_eq!(parts[2].len(), 4);
    }
}
