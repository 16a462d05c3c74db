use chrono::{Local, NaiveDate};

/// Ledger key for the current local calendar day.
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// `DD/MM/YYYY`, the format the water history has always been keyed by.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date_key(date), "05/01/2024");
    }

    #[test]
    fn consecutive_days_get_distinct_keys() {
        let a = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let b = a.succ_opt().unwrap();
        assert_ne!(date_key(a), date_key(b));
    }
}
