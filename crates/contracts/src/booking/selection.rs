use chrono::{NaiveDate, NaiveDateTime};

use super::rules::BookingRules;
use super::slots::generate_slots;
use super::validation::{self, ValidationErrors};

/// One user's in-progress booking flow. Created empty when the flow
/// starts, mutated field by field, consumed when a record is built.
/// Swapping the active offering replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSelection {
    pub date: Option<NaiveDate>,
    /// A slot value from the sequence generated for `date`.
    pub time: Option<String>,
    pub participants: u32,
    pub note: String,
}

impl Default for BookingSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse flow position derived from the selection, used to gate the
/// submit button. `Submitting`/`Succeeded` layer on top of this in the
/// view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Empty,
    Partial,
    Valid,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self {
            date: None,
            time: None,
            participants: 1,
            note: String::new(),
        }
    }

    /// No field touched yet.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.participants == 1 && self.note.is_empty()
    }

    /// Replaces the date and reconciles the selected time against the
    /// slots available on the new date: a time no longer offered is
    /// cleared, a still-offered one is kept. Returns the fresh slot
    /// list so the caller can re-render the choices.
    pub fn set_date(
        &mut self,
        date: Option<NaiveDate>,
        rules: &BookingRules,
        now: NaiveDateTime,
    ) -> Vec<String> {
        self.date = date;
        let slots = match date {
            Some(d) => generate_slots(d, rules, now),
            None => Vec::new(),
        };
        if let Some(time) = &self.time {
            if !slots.iter().any(|slot| slot == time) {
                self.time = None;
            }
        }
        slots
    }

    /// Runs all four checks against the current fields. The composite
    /// window check reports through the `time` field since it guards
    /// stale slot values.
    pub fn validate(&self, rules: &BookingRules, now: NaiveDateTime) -> ValidationErrors {
        let time = self.time.as_deref();
        ValidationErrors {
            date: validation::validate_date(self.date, now.date()).err(),
            time: validation::validate_time(time, self.date, now)
                .and_then(|_| validation::validate_booking_window(self.date, time, rules))
                .err(),
            participants: validation::validate_participants(self.participants).err(),
        }
    }

    pub fn flow_state(
        &self,
        offering_selected: bool,
        rules: &BookingRules,
        now: NaiveDateTime,
    ) -> FlowState {
        if offering_selected && self.time.is_some() && self.validate(rules, now).is_valid() {
            FlowState::Valid
        } else if self.is_empty() {
            FlowState::Empty
        } else {
            FlowState::Partial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(d: NaiveDate) -> NaiveDateTime {
        NaiveDateTime::new(d, NaiveTime::from_hms_opt(12, 0, 0).unwrap())
    }

    // now: Monday 2025-06-02 noon; selections target later weekdays
    fn now() -> NaiveDateTime {
        noon(date(2025, 6, 2))
    }

    #[test]
    fn date_change_clears_a_time_the_new_day_lacks() {
        let rules = BookingRules::default();
        let mut selection = BookingSelection::new();
        selection.set_date(Some(date(2025, 6, 3)), &rules, now());
        selection.time = Some("16:00".to_string());

        // Friday closes at 15:00, so 16:00 disappears
        selection.set_date(Some(date(2025, 6, 6)), &rules, now());
        assert_eq!(selection.time, None);
    }

    #[test]
    fn date_change_keeps_a_time_the_new_day_still_offers() {
        let rules = BookingRules::default();
        let mut selection = BookingSelection::new();
        selection.set_date(Some(date(2025, 6, 3)), &rules, now());
        selection.time = Some("10:00".to_string());

        selection.set_date(Some(date(2025, 6, 6)), &rules, now());
        assert_eq!(selection.time.as_deref(), Some("10:00"));
    }

    #[test]
    fn clearing_the_date_clears_the_time() {
        let rules = BookingRules::default();
        let mut selection = BookingSelection::new();
        selection.set_date(Some(date(2025, 6, 3)), &rules, now());
        selection.time = Some("10:00".to_string());

        let slots = selection.set_date(None, &rules, now());
        assert!(slots.is_empty());
        assert_eq!(selection.time, None);
    }

    #[test]
    fn missing_date_reports_the_exact_message() {
        let rules = BookingRules::default();
        let errors = BookingSelection::new().validate(&rules, now());
        assert_eq!(errors.date.as_deref(), Some("date required"));
        assert!(!errors.is_valid());
    }

    #[test]
    fn flow_state_progression() {
        let rules = BookingRules::default();
        let mut selection = BookingSelection::new();
        assert_eq!(selection.flow_state(true, &rules, now()), FlowState::Empty);

        selection.set_date(Some(date(2025, 6, 9)), &rules, now());
        assert_eq!(selection.flow_state(true, &rules, now()), FlowState::Partial);

        selection.time = Some("09:00".to_string());
        assert_eq!(selection.flow_state(true, &rules, now()), FlowState::Valid);

        // a complete selection without an offering never goes valid
        assert_eq!(selection.flow_state(false, &rules, now()), FlowState::Partial);
    }

    #[test]
    fn stale_slot_fails_validation_via_the_window_check() {
        let rules = BookingRules::default();
        let mut selection = BookingSelection::new();
        selection.date = Some(date(2025, 6, 6));
        selection.time = Some("16:00".to_string());

        let errors = selection.validate(&rules, now());
        assert_eq!(errors.time.as_deref(), Some("time is outside opening hours"));
    }
}
