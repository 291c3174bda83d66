use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::rules::BookingRules;
use super::slots::SLOT_FORMAT;

pub const MIN_PARTICIPANTS: u32 = 1;
pub const MAX_PARTICIPANTS: u32 = 10;

/// Per-field validation messages for the booking form. A `None` field
/// is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub date: Option<String>,
    pub time: Option<String>,
    pub participants: Option<String>,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.participants.is_none()
    }
}

/// Unset fails; a date before `today` fails; same-day is allowed.
pub fn validate_date(date: Option<NaiveDate>, today: NaiveDate) -> Result<(), String> {
    match date {
        None => Err("date required".to_string()),
        Some(d) if d < today => Err("must be a future date".to_string()),
        Some(_) => Ok(()),
    }
}

/// Unset fails; the combined date+time instant must lie strictly after
/// `now`. With no date yet there is no instant to judge, and the date
/// check owns that error.
pub fn validate_time(
    time: Option<&str>,
    date: Option<NaiveDate>,
    now: NaiveDateTime,
) -> Result<(), String> {
    let raw = time.unwrap_or("").trim();
    if raw.is_empty() {
        return Err("time required".to_string());
    }
    let Some(date) = date else {
        return Ok(());
    };
    match NaiveTime::parse_from_str(raw, SLOT_FORMAT) {
        Ok(t) if NaiveDateTime::new(date, t) > now => Ok(()),
        _ => Err("must be a future time".to_string()),
    }
}

pub fn validate_participants(count: u32) -> Result<(), String> {
    if count < MIN_PARTICIPANTS {
        return Err("at least one participant required".to_string());
    }
    if count > MAX_PARTICIPANTS {
        return Err(format!("maximum {} participants", MAX_PARTICIPANTS));
    }
    Ok(())
}

/// Submit-time guard against stale slot values: the chosen time must
/// still fall on a bookable weekday and inside that weekday's window,
/// even if rules or date changed between render and submit. Missing
/// fields pass; the per-field checks report those.
pub fn validate_booking_window(
    date: Option<NaiveDate>,
    time: Option<&str>,
    rules: &BookingRules,
) -> Result<(), String> {
    let (Some(date), Some(raw)) = (date, time.map(str::trim).filter(|t| !t.is_empty())) else {
        return Ok(());
    };
    let weekday = date.weekday();
    if rules.is_excluded(weekday) {
        return Err("bookings are closed on this day".to_string());
    }
    let close = rules.close_time_for(weekday);
    match NaiveTime::parse_from_str(raw, SLOT_FORMAT) {
        Ok(t) if t >= rules.open_time && t < close => Ok(()),
        _ => Err("time is outside opening hours".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        NaiveDateTime::new(d, NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn date_must_be_set_and_not_past() {
        let today = date(2025, 6, 2);
        assert_eq!(validate_date(None, today), Err("date required".to_string()));
        assert_eq!(
            validate_date(Some(date(2025, 6, 1)), today),
            Err("must be a future date".to_string())
        );
        // same-day is allowed
        assert_eq!(validate_date(Some(today), today), Ok(()));
        assert_eq!(validate_date(Some(date(2025, 6, 9)), today), Ok(()));
    }

    #[test]
    fn time_must_be_set_and_strictly_future() {
        let monday = date(2025, 6, 2);
        let now = at(monday, 13, 0);
        assert_eq!(
            validate_time(None, Some(monday), now),
            Err("time required".to_string())
        );
        assert_eq!(
            validate_time(Some(""), Some(monday), now),
            Err("time required".to_string())
        );
        assert_eq!(
            validate_time(Some("13:00"), Some(monday), now),
            Err("must be a future time".to_string())
        );
        assert_eq!(validate_time(Some("14:00"), Some(monday), now), Ok(()));
        // without a date the date check reports, not this one
        assert_eq!(validate_time(Some("09:00"), None, now), Ok(()));
    }

    #[test]
    fn participant_bounds() {
        assert!(validate_participants(0).is_err());
        assert_eq!(validate_participants(1), Ok(()));
        assert_eq!(validate_participants(10), Ok(()));
        assert_eq!(
            validate_participants(11),
            Err("maximum 10 participants".to_string())
        );
    }

    #[test]
    fn window_rejects_excluded_day() {
        let rules = BookingRules::default();
        let sunday = date(2025, 6, 1);
        assert!(validate_booking_window(Some(sunday), Some("10:00"), &rules).is_err());
    }

    #[test]
    fn window_rejects_out_of_hours_time() {
        let rules = BookingRules::default();
        let monday = date(2025, 6, 2);
        let friday = date(2025, 6, 6);
        assert!(validate_booking_window(Some(monday), Some("08:00"), &rules).is_err());
        assert!(validate_booking_window(Some(monday), Some("17:00"), &rules).is_err());
        assert_eq!(
            validate_booking_window(Some(monday), Some("16:00"), &rules),
            Ok(())
        );
        // a slot that was valid on a regular day goes stale on a short Friday
        assert!(validate_booking_window(Some(friday), Some("16:00"), &rules).is_err());
        assert_eq!(
            validate_booking_window(Some(friday), Some("14:00"), &rules),
            Ok(())
        );
    }

    #[test]
    fn window_passes_when_fields_are_missing() {
        let rules = BookingRules::default();
        assert_eq!(validate_booking_window(None, Some("10:00"), &rules), Ok(()));
        assert_eq!(
            validate_booking_window(Some(date(2025, 6, 2)), None, &rules),
            Ok(())
        );
    }
}
