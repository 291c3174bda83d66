use chrono::{NaiveTime, Weekday};

/// Operating-hours rule table for the booking engine.
///
/// Constructed once and injected into the slot generator and the
/// validators; nothing reads it as ambient state, so tests can run
/// against alternate tables.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRules {
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    /// Close time used instead of `close_time` on `special_days`.
    pub special_day_close_time: NaiveTime,
    pub slot_interval_minutes: u32,
    /// Days with no slots at all. Wins over `special_days` when a day
    /// is listed in both.
    pub excluded_days: Vec<Weekday>,
    /// Days that close early, at `special_day_close_time`.
    pub special_days: Vec<Weekday>,
}

fn hm(hours: u32, minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hours, minutes, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for BookingRules {
    /// The production table: 09:00-17:00, hourly slots, closed on
    /// Sundays, Fridays close early at 15:00.
    fn default() -> Self {
        Self {
            open_time: hm(9, 0),
            close_time: hm(17, 0),
            special_day_close_time: hm(15, 0),
            slot_interval_minutes: 60,
            excluded_days: vec![Weekday::Sun],
            special_days: vec![Weekday::Fri],
        }
    }
}

impl BookingRules {
    /// Checks the table invariants. Callers log a warning on violation
    /// rather than aborting; the generator stays defensive either way.
    pub fn validate(&self) -> Result<(), String> {
        if self.open_time >= self.close_time {
            return Err(format!(
                "open time {} is not before close time {}",
                self.open_time, self.close_time
            ));
        }
        if self.open_time >= self.special_day_close_time {
            return Err(format!(
                "open time {} is not before special close time {}",
                self.open_time, self.special_day_close_time
            ));
        }
        if self.slot_interval_minutes == 0 {
            return Err("slot interval must be at least one minute".to_string());
        }
        if let Some(day) = self
            .special_days
            .iter()
            .find(|day| self.excluded_days.contains(*day))
        {
            return Err(format!("{} is listed as both excluded and special", day));
        }
        Ok(())
    }

    pub fn is_excluded(&self, weekday: Weekday) -> bool {
        self.excluded_days.contains(&weekday)
    }

    /// Close time in effect for the given weekday.
    pub fn close_time_for(&self, weekday: Weekday) -> NaiveTime {
        if self.special_days.contains(&weekday) {
            self.special_day_close_time
        } else {
            self.close_time
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_consistent() {
        assert_eq!(BookingRules::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let rules = BookingRules {
            open_time: hm(18, 0),
            ..BookingRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn overlapping_day_sets_are_rejected() {
        let rules = BookingRules {
            excluded_days: vec![Weekday::Fri],
            special_days: vec![Weekday::Fri],
            ..BookingRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn special_day_uses_override_close() {
        let rules = BookingRules::default();
        assert_eq!(rules.close_time_for(Weekday::Fri), hm(15, 0));
        assert_eq!(rules.close_time_for(Weekday::Mon), hm(17, 0));
    }
}
