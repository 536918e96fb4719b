//! Age derivation from a date of birth.

use chrono::{Datelike, NaiveDate};

/// Whole years between `date_of_birth` and `today`.
///
/// Subtracts the calendar years, then takes one off when `today` falls on an
/// earlier day-of-year than the birthday. Comparing ordinals rather than
/// month/day pairs drifts by one around February 29th:
///
/// ```
/// use chrono::NaiveDate;
/// use user_records_api::domain::age;
///
/// let born = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(age(born, today), 24);
/// ```
pub fn age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - date_of_birth.year();
    if today.ordinal() < date_of_birth.ordinal() {
        years - 1
    } else {
        years
    }
}
