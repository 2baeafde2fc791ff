//! Due date urgency classification
//!
//! Dates carry no time component, so differences are whole days.

use chrono::NaiveDate;

/// Highest day count still considered urgent (today, tomorrow, or overdue)
const URGENT_MAX_DAYS: i64 = 1;
/// Highest day count still considered near
const NEAR_MAX_DAYS: i64 = 3;

/// Date format used on the wire and for user input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Urgency tier of a due date relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Urgent,
    Near,
    Normal,
}

/// Days from `today` until `due_date`; negative when overdue
pub fn days_until(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Classify `due_date` against `today`
pub fn classify(due_date: NaiveDate, today: NaiveDate) -> Urgency {
    match days_until(due_date, today) {
        d if d <= URGENT_MAX_DAYS => Urgency::Urgent,
        d if d <= NEAR_MAX_DAYS => Urgency::Near,
        _ => Urgency::Normal,
    }
}

/// Parse a `YYYY-MM-DD` date, surrounding whitespace allowed
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_due_date(s).unwrap()
    }

    #[test]
    fn test_days_until_signed() {
        let today = date("2024-06-10");
        assert_eq!(days_until(date("2024-06-10"), today), 0);
        assert_eq!(days_until(date("2024-06-14"), today), 4);
        assert_eq!(days_until(date("2024-06-01"), today), -9);
    }

    #[test]
    fn test_classify_boundaries() {
        let today = date("2024-06-10");
        assert_eq!(classify(date("2024-06-09"), today), Urgency::Urgent);
        assert_eq!(classify(date("2024-06-10"), today), Urgency::Urgent);
        assert_eq!(classify(date("2024-06-11"), today), Urgency::Urgent);
        assert_eq!(classify(date("2024-06-12"), today), Urgency::Near);
        assert_eq!(classify(date("2024-06-13"), today), Urgency::Near);
        assert_eq!(classify(date("2024-06-14"), today), Urgency::Normal);
    }

    #[test]
    fn test_classify_across_month_boundary() {
        let today = date("2024-02-28");
        assert_eq!(classify(date("2024-03-01"), today), Urgency::Near);
        assert_eq!(classify(date("2024-03-03"), today), Urgency::Normal);
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date(" 2024-06-10 "),
            NaiveDate::from_ymd_opt(2024, 6, 10)
        );
        assert!(parse_due_date("10/06/2024").is_none());
        assert!(parse_due_date("2024-02-30").is_none());
        assert!(parse_due_date("").is_none());
    }
}
