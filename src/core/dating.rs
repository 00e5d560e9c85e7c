//! Date arithmetic for obstetric dating
//!
//! Every function takes "today" explicitly; nothing here reads a clock.
//! Dates are [`NaiveDate`]s, so differences are whole calendar days with
//! no time-of-day drift.

use crate::domain::AgeEstimate;
use chrono::{Datelike, Days, NaiveDate};

/// Length of a pregnancy from LMP to EDC (Naegele's rule)
pub const TERM_DAYS: u32 = 280;

/// Completed years between `birth_date` and `today`
///
/// Returns `None` when the birth date is absent or lies after `today`.
///
/// # Examples
///
/// ```
/// use prenatrack::core::dating::age;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 6, 15);
/// let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// assert_eq!(age(birth, today), Some(33));
/// ```
pub fn age(birth_date: Option<NaiveDate>, today: NaiveDate) -> Option<u32> {
    let birth = birth_date?;
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Gestational age today, counted from the LMP
///
/// A future LMP is invalid and yields `None`.
pub fn aog_from_lmp(lmp: Option<NaiveDate>, today: NaiveDate) -> Option<AgeEstimate> {
    let lmp = lmp?;
    AgeEstimate::from_signed_days(days_between(lmp, today))
}

/// Estimated date of confinement from the LMP
pub fn edc_from_lmp(lmp: Option<NaiveDate>) -> Option<NaiveDate> {
    lmp?.checked_add_days(Days::new(u64::from(TERM_DAYS)))
}

/// Gestational age today, carried forward from an ultrasound
///
/// `days_at_scan` defaults to 0 when absent. Returns `None` when the scan
/// date or the week count is missing, or when the carried-forward age is
/// negative (scan date far in the future).
pub fn aog_from_utz(
    utz_date: Option<NaiveDate>,
    weeks_at_scan: Option<u32>,
    days_at_scan: Option<u32>,
    today: NaiveDate,
) -> Option<AgeEstimate> {
    let utz_date = utz_date?;
    let at_scan = days_at_scan_total(weeks_at_scan?, days_at_scan);
    AgeEstimate::from_signed_days(at_scan + days_between(utz_date, today))
}

/// Estimated date of confinement from an ultrasound
pub fn edc_from_utz(
    utz_date: Option<NaiveDate>,
    weeks_at_scan: Option<u32>,
    days_at_scan: Option<u32>,
) -> Option<NaiveDate> {
    let utz_date = utz_date?;
    let at_scan = days_at_scan_total(weeks_at_scan?, days_at_scan);
    shift_days(utz_date, i64::from(TERM_DAYS) - at_scan)
}

fn days_at_scan_total(weeks: u32, days: Option<u32>) -> i64 {
    i64::from(weeks) * 7 + i64::from(days.unwrap_or(0))
}

/// Signed whole days from `from` to `to`
fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}
