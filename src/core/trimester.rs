//! Trimester classification

use crate::domain::Trimester;

/// Maps completed weeks to a trimester; negative weeks have none
pub fn trimester(weeks: i64) -> Option<Trimester> {
    match weeks {
        i64::MIN..=-1 => None,
        0..=13 => Some(Trimester::First),
        14..=27 => Some(Trimester::Second),
        _ => Some(Trimester::Third),
    }
}
