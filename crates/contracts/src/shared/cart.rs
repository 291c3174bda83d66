use serde::{Deserialize, Serialize};

use crate::booking::record::{BookingDetails, BookingRecord};
use crate::domain::a001_product::Product;

/// One cart line. `bookingDetails` is present only on lines created by
/// the booking flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Unit price in whole dollars.
    pub price: u32,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "bookingDetails", skip_serializing_if = "Option::is_none")]
    pub booking_details: Option<BookingDetails>,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            image: Some(product.image.clone()),
            kind: Some("product".to_string()),
            booking_details: None,
        }
    }
}

impl From<BookingRecord> for CartItem {
    fn from(record: BookingRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.total_price,
            quantity: 1,
            image: None,
            kind: Some("booking".to_string()),
            booking_details: Some(record.booking_details),
        }
    }
}

/// Ordered collection of cart lines, shared across the shop and
/// booking flows. Adds are idempotent in id: a second add of the same
/// id bumps that line's quantity instead of appending a duplicate, so
/// interleaved adds from different flows commute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|line| line.id != id);
    }

    /// Sets a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
    }

    /// Sum of price x quantity over all lines.
    pub fn total(&self) -> u32 {
        self.items
            .iter()
            .map(|line| line.price.saturating_mul(line.quantity))
            .sum()
    }

    /// Total unit count, the number shown on the cart badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: id.to_string(),
            price,
            quantity: 1,
            image: None,
            kind: None,
            booking_details: None,
        }
    }

    #[test]
    fn add_dedupes_by_id() {
        let mut cart = Cart::new();
        cart.add(item("w1", 89));
        cart.add(item("w1", 89));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn distinct_ids_keep_their_own_lines_in_order() {
        let mut cart = Cart::new();
        cart.add(item("w1", 89));
        cart.add(item("j1", 24));
        cart.add(item("w1", 89));
        let ids: Vec<&str> = cart.items.iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, ["w1", "j1"]);
        assert_eq!(cart.total(), 89 * 2 + 24);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(item("w1", 89));
        cart.set_quantity("w1", 3);
        assert_eq!(cart.items[0].quantity, 3);
        cart.set_quantity("w1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_is_a_noop_for_unknown_ids() {
        let mut cart = Cart::new();
        cart.add(item("w1", 89));
        cart.remove("nope");
        assert_eq!(cart.items.len(), 1);
    }
}
