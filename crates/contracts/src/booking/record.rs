use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a002_service::Offering;

use super::price::extract_price;
use super::selection::BookingSelection;

/// Structured payload a booking line carries into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    #[serde(rename = "offeringId")]
    pub offering_id: String,
    pub date: String,
    pub time: String,
    pub participants: u32,
    #[serde(default)]
    pub note: String,
}

/// Finalized, cart-ready representation of a confirmed booking.
/// Created exactly once per successful submission; ownership moves to
/// the cart immediately after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    /// Display name: the offering title.
    pub name: String,
    pub description: String,
    #[serde(rename = "totalPrice")]
    pub total_price: u32,
    #[serde(rename = "bookingDetails")]
    pub booking_details: BookingDetails,
}

/// Assembles the cart record for a validated selection. Total price is
/// the offering's extracted base price times the participant count.
///
/// Submit-time validation runs before this; an unset date or time here
/// is a flow bug and surfaces as an error, not a panic.
pub fn build_record(offering: &Offering, selection: &BookingSelection) -> Result<BookingRecord> {
    let date = selection.date.context("booking has no date")?;
    let time = selection.time.clone().context("booking has no time")?;

    let base_price = extract_price(&offering.price);
    let date_text = date.format("%Y-%m-%d").to_string();
    let note = selection.note.trim();

    let mut description = format!(
        "{} at {}, {} participant{}",
        date_text,
        time,
        selection.participants,
        if selection.participants == 1 { "" } else { "s" }
    );
    if !note.is_empty() {
        description.push_str(&format!(" ({})", note));
    }

    Ok(BookingRecord {
        id: format!("booking-{}", Uuid::new_v4()),
        name: offering.title.clone(),
        description,
        total_price: base_price.saturating_mul(selection.participants),
        booking_details: BookingDetails {
            offering_id: offering.id.clone(),
            date: date_text,
            time,
            participants: selection.participants,
            note: note.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn offering() -> Offering {
        Offering {
            id: "juggling-sets".to_string(),
            title: "Beginner juggling sets".to_string(),
            description: "High-quality juggling equipment sets for beginners.".to_string(),
            duration: "Immediate".to_string(),
            price: "Starting at $24".to_string(),
        }
    }

    #[test]
    fn multiplies_base_price_by_participants() {
        let mut selection = BookingSelection::new();
        selection.date = NaiveDate::from_ymd_opt(2025, 6, 9);
        selection.time = Some("09:00".to_string());
        selection.participants = 3;

        let record = build_record(&offering(), &selection).unwrap();
        assert_eq!(record.total_price, 72);
        assert_eq!(record.name, "Beginner juggling sets");
        assert_eq!(record.booking_details.offering_id, "juggling-sets");
        assert_eq!(record.booking_details.date, "2025-06-09");
        assert_eq!(record.booking_details.time, "09:00");
        assert!(record.id.starts_with("booking-"));
    }

    #[test]
    fn note_lands_in_description_and_details() {
        let mut selection = BookingSelection::new();
        selection.date = NaiveDate::from_ymd_opt(2025, 6, 9);
        selection.time = Some("10:00".to_string());
        selection.note = "  two kids  ".to_string();

        let record = build_record(&offering(), &selection).unwrap();
        assert!(record.description.contains("two kids"));
        assert_eq!(record.booking_details.note, "two kids");
    }

    #[test]
    fn refuses_incomplete_selection() {
        let selection = BookingSelection::new();
        assert!(build_record(&offering(), &selection).is_err());
    }

    #[test]
    fn ids_are_unique_per_record() {
        let mut selection = BookingSelection::new();
        selection.date = NaiveDate::from_ymd_opt(2025, 6, 9);
        selection.time = Some("09:00".to_string());

        let a = build_record(&offering(), &selection).unwrap();
        let b = build_record(&offering(), &selection).unwrap();
        assert_ne!(a.id, b.id);
    }
}
