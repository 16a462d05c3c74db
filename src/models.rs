use serde::{Deserialize, Serialize};

/// One day's drink count, keyed by the local-date string `DD/MM/YYYY`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    pub date: String,
    pub count: u32,
}

/// The persisted water history. Serializes as a bare JSON array so the
/// `waterHistory` blob round-trips exactly; at most one entry per date.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Ledger {
    pub entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Count recorded for `date`, or 0 when the day has no entry yet.
    pub fn count_for(&self, date: &str) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Bumps the entry for `date`, appending `{date, count: 1}` on the
    /// first drink of the day. Returns the new count.
    pub fn increment(&mut self, date: &str) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.date == date) {
            entry.count = entry.count.saturating_add(1);
            return entry.count;
        }
        self.entries.push(LedgerEntry {
            date: date.to_string(),
            count: 1,
        });
        1
    }

    /// Zeroes the entry for `date`. Unlike `increment`, a missing date is
    /// left alone rather than materialized as a zero entry.
    pub fn reset_day(&mut self, date: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.date == date) {
            entry.count = 0;
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub count: u32,
    pub goal: u32,
    pub display: String,
    pub at_or_over_goal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, count: u32) -> LedgerEntry {
        LedgerEntry {
            date: date.to_string(),
            count,
        }
    }

    #[test]
    fn increment_appends_then_bumps() {
        let mut ledger = Ledger::default();
        ledger.increment("01/01/2024");
        ledger.increment("01/01/2024");
        ledger.increment("01/01/2024");
        assert_eq!(ledger.entries, vec![entry("01/01/2024", 3)]);
    }

    #[test]
    fn increment_leaves_other_days_alone() {
        let mut ledger = Ledger {
            entries: vec![entry("01/01/2024", 5), entry("02/01/2024", 2)],
        };
        ledger.increment("02/01/2024");
        assert_eq!(ledger.count_for("01/01/2024"), 5);
        assert_eq!(ledger.count_for("02/01/2024"), 3);
    }

    #[test]
    fn count_for_defaults_to_zero() {
        let ledger = Ledger::default();
        assert_eq!(ledger.count_for("31/12/2023"), 0);
    }

    #[test]
    fn reset_day_zeroes_only_the_matching_entry() {
        let mut ledger = Ledger {
            entries: vec![entry("01/01/2024", 5), entry("02/01/2024", 2)],
        };
        ledger.reset_day("01/01/2024");
        assert_eq!(ledger.count_for("01/01/2024"), 0);
        assert_eq!(ledger.count_for("02/01/2024"), 2);
    }

    #[test]
    fn reset_day_without_entry_is_identity() {
        let ledger = Ledger {
            entries: vec![entry("01/01/2024", 5)],
        };
        let mut reset = ledger.clone();
        reset.reset_day("02/01/2024");
        assert_eq!(reset, ledger);
    }

    #[test]
    fn ledger_serializes_as_bare_array() {
        let ledger = Ledger {
            entries: vec![entry("01/01/2024", 3)],
        };
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"[{"date":"01/01/2024","count":3}]"#);
        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
