//! Data models for tourism destination records
//!
//! This module contains the destination record served by the API together
//! with the case-insensitive matching predicates used by the query service.

use serde::{Deserialize, Serialize};

/// One tourism destination entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    /// Stable positive identifier, unique across the catalog
    pub id: u32,
    /// Destination name
    pub name: String,
    /// Human-readable location (city, province)
    pub location: String,
    /// Free-form description
    pub description: String,
    /// URL of a display image; not validated for reachability
    pub image: String,
    /// Pre-formatted display price (e.g. "Rp 50.000"); never used for arithmetic
    pub price: String,
    /// Rating in [0,5], one decimal place by convention; not clamped
    pub rating: f32,
    /// Free-form category label (e.g. "Alam & Laut")
    pub category: String,
}

impl Destination {
    /// True when `needle` occurs in the name, location, or description.
    ///
    /// `needle` must already be lowercased; the record's fields are folded
    /// here so both sides of the containment check agree.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// True when `needle` (already lowercased) occurs in the category label.
    pub fn matches_category(&self, needle: &str) -> bool {
        self.category.to_lowercase().contains(needle)
    }
}
