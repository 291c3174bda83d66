use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use super::rules::BookingRules;

/// Wall-clock format used for slot values everywhere: 24-hour `HH:MM`.
pub const SLOT_FORMAT: &str = "%H:%M";

/// Bookable start times for `date` under `rules`.
///
/// Returns a fresh, ordered `Vec` on every call. Excluded weekdays get
/// no slots; special weekdays use the override close time. When `date`
/// is the current day, slots not strictly after `now` are dropped so
/// the past cannot be booked. A window that never opens (close at or
/// before open) yields an empty list.
pub fn generate_slots(date: NaiveDate, rules: &BookingRules, now: NaiveDateTime) -> Vec<String> {
    let weekday = date.weekday();
    if rules.is_excluded(weekday) {
        return Vec::new();
    }

    let close = rules.close_time_for(weekday);
    if close <= rules.open_time {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(rules.slot_interval_minutes.max(1)));
    let today = date == now.date();

    let mut slots = Vec::new();
    let mut cursor = rules.open_time;
    while cursor < close {
        if !today || NaiveDateTime::new(date, cursor) > now {
            slots.push(cursor.format(SLOT_FORMAT).to_string());
        }
        let (next, wrapped) = cursor.overflowing_add_signed(step);
        if wrapped != 0 {
            // stepping crossed midnight; the window is over
            break;
        }
        cursor = next;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        NaiveDateTime::new(d, NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    // 2025-06-02 is a Monday, 2025-06-06 a Friday, 2025-06-01 a Sunday.
    fn rules() -> BookingRules {
        BookingRules::default()
    }

    #[test]
    fn regular_day_is_hourly_until_close() {
        let monday = date(2025, 6, 2);
        let now = at(date(2025, 5, 1), 12, 0);
        let slots = generate_slots(monday, &rules(), now);
        assert_eq!(
            slots,
            ["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"]
        );
    }

    #[test]
    fn excluded_day_has_no_slots() {
        let sunday = date(2025, 6, 1);
        let now = at(date(2025, 5, 1), 12, 0);
        assert!(generate_slots(sunday, &rules(), now).is_empty());
    }

    #[test]
    fn special_day_stops_before_override_close() {
        let friday = date(2025, 6, 6);
        let now = at(date(2025, 5, 1), 12, 0);
        let slots = generate_slots(friday, &rules(), now);
        assert_eq!(slots, ["09:00", "10:00", "11:00", "12:00", "13:00", "14:00"]);
        assert!(slots.iter().all(|s| s.as_str() < "15:00"));
    }

    #[test]
    fn todays_past_slots_are_dropped() {
        let monday = date(2025, 6, 2);
        let now = at(monday, 13, 0);
        let slots = generate_slots(monday, &rules(), now);
        // 13:00 itself is not strictly after now, so it goes too
        assert_eq!(slots, ["14:00", "15:00", "16:00"]);
    }

    #[test]
    fn other_dates_ignore_the_clock() {
        let monday = date(2025, 6, 2);
        let now = at(date(2025, 6, 1), 23, 59);
        assert_eq!(generate_slots(monday, &rules(), now).len(), 8);
    }

    #[test]
    fn uneven_interval_never_emits_a_partial_slot() {
        let rules = BookingRules {
            slot_interval_minutes: 90,
            ..BookingRules::default()
        };
        let monday = date(2025, 6, 2);
        let now = at(date(2025, 5, 1), 12, 0);
        let slots = generate_slots(monday, &rules, now);
        // 09:00 + 90m steps: last start before 17:00 is 16:30
        assert_eq!(slots, ["09:00", "10:30", "12:00", "13:30", "15:00", "16:30"]);
    }

    #[test]
    fn inverted_window_yields_nothing() {
        let rules = BookingRules {
            close_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            ..BookingRules::default()
        };
        let monday = date(2025, 6, 2);
        let now = at(date(2025, 5, 1), 12, 0);
        assert!(generate_slots(monday, &rules, now).is_empty());
    }

    #[test]
    fn window_reaching_midnight_terminates() {
        let rules = BookingRules {
            open_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
            special_day_close_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            slot_interval_minutes: 60,
            excluded_days: vec![Weekday::Sun],
            special_days: vec![Weekday::Fri],
        };
        let monday = date(2025, 6, 2);
        let now = at(date(2025, 5, 1), 12, 0);
        assert_eq!(generate_slots(monday, &rules, now), ["22:00", "23:00"]);
    }
}
