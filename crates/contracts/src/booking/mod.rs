//! Booking engine: slot generation, input validation, price extraction
//! and cart-record assembly.
//!
//! Everything here is pure with respect to the clock: callers pass the
//! current instant in, so the same inputs always produce the same
//! output.

pub mod price;
pub mod record;
pub mod rules;
pub mod selection;
pub mod slots;
pub mod validation;

pub use price::{extract_price, FALLBACK_PRICE};
pub use record::{build_record, BookingDetails, BookingRecord};
pub use rules::BookingRules;
pub use selection::{BookingSelection, FlowState};
pub use slots::generate_slots;
pub use validation::{ValidationErrors, MAX_PARTICIPANTS, MIN_PARTICIPANTS};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_service::Offering;
    use crate::shared::cart::{Cart, CartItem};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn juggling_sets() -> Offering {
        Offering {
            id: "juggling-sets".to_string(),
            title: "Beginner juggling sets".to_string(),
            description: "High-quality juggling equipment sets for beginners.".to_string(),
            duration: "Immediate".to_string(),
            price: "Starting at $24".to_string(),
        }
    }

    // Monday 2025-06-02, 08:00; next Monday is 2025-06-09
    fn now() -> NaiveDateTime {
        NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn happy_path_books_and_lands_in_the_cart_once() {
        let rules = BookingRules::default();
        let offering = juggling_sets();
        let mut selection = BookingSelection::new();

        let slots = selection.set_date(NaiveDate::from_ymd_opt(2025, 6, 9), &rules, now());
        selection.time = slots.first().cloned();
        selection.participants = 3;

        assert!(selection.validate(&rules, now()).is_valid());
        assert_eq!(selection.flow_state(true, &rules, now()), FlowState::Valid);

        let record = build_record(&offering, &selection).unwrap();
        assert_eq!(record.total_price, 72);
        assert_eq!(record.booking_details.time, "09:00");

        let mut cart = Cart::new();
        cart.add(CartItem::from(record));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total(), 72);
        assert_eq!(
            cart.items[0].booking_details.as_ref().map(|d| d.participants),
            Some(3)
        );
    }

    #[test]
    fn missing_date_blocks_submission_before_any_cart_call() {
        let rules = BookingRules::default();
        let mut selection = BookingSelection::new();
        selection.time = Some("09:00".to_string());
        selection.participants = 2;

        let errors = selection.validate(&rules, now());
        assert_eq!(errors.date.as_deref(), Some("date required"));
        assert_ne!(selection.flow_state(true, &rules, now()), FlowState::Valid);
        // the controller never reaches build_record in this state; if it
        // did, assembly itself would refuse
        assert!(build_record(&juggling_sets(), &selection).is_err());
    }

    #[test]
    fn same_id_added_twice_is_one_line_with_quantity_two() {
        let rules = BookingRules::default();
        let mut selection = BookingSelection::new();
        selection.set_date(NaiveDate::from_ymd_opt(2025, 6, 9), &rules, now());
        selection.time = Some("10:00".to_string());

        let record = build_record(&juggling_sets(), &selection).unwrap();
        let twin = record.clone();

        let mut cart = Cart::new();
        cart.add(CartItem::from(record));
        cart.add(CartItem::from(twin));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }
}
