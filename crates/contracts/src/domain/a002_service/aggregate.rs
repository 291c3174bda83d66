use serde::{Deserialize, Serialize};

/// A bookable service variant. Duration and price are free-text labels
/// straight from the catalog copy ("2-4 weeks", "Starting at $199");
/// the booking engine derives a numeric base price from the label via
/// `booking::extract_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price: String,
}

/// A service family grouping related offerings under one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub offerings: Vec<Offering>,
    /// Headline label shown on the family tab, e.g. "Starting at $12".
    pub price: String,
    /// Icon key resolved by the frontend icon helper.
    pub icon: String,
}
