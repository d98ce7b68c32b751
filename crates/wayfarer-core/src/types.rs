//! # Domain Types
//!
//! The two shapes that cross the listing boundary.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────────────────┐    │
//! │  │  PackageListingFilter   │        │     PackageListingRow       │    │
//! │  │  ─────────────────────  │        │  ─────────────────────────  │    │
//! │  │  country:   Option<..>  │  ───►  │  trip_package_name          │    │
//! │  │  city:      Option<..>  │ query  │  country, city, hotel_name  │    │
//! │  │  min_stars: Option<i32> │        │  room_capacity, stars       │    │
//! │  │  max_price: Option<$>   │        │  package_price_per_person   │    │
//! │  └─────────────────────────┘        └─────────────────────────────┘    │
//! │        (input, per call)                (output, one per row)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Package Listing Filter
// =============================================================================

/// Optional predicates for a package listing.
///
/// Every field is independently present or absent. Fields are private so a
/// filter cannot change once handed to the query builder; build one with
/// [`PackageListingFilter::new`] and the `with_*` methods.
///
/// ## Empty Means Absent
/// An empty `country` or `city` string is treated exactly like `None`.
/// Only the empty string is normalized: `" "` is still a value.
///
/// ## Example
/// ```rust
/// use wayfarer_core::{Money, PackageListingFilter};
///
/// let filter = PackageListingFilter::new()
///     .with_country("France")
///     .with_max_price(Money::from_cents(50000));
///
/// assert_eq!(filter.country(), Some("France"));
/// assert_eq!(filter.city(), None);
/// assert_eq!(filter.present_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageListingFilter {
    country: Option<String>,
    city: Option<String>,
    min_stars: Option<i32>,
    max_price: Option<Money>,
}

impl PackageListingFilter {
    /// Creates a filter that matches every package.
    pub fn new() -> Self {
        PackageListingFilter::default()
    }

    /// Creates a filter from raw optional inputs in one call.
    pub fn from_parts(
        country: Option<String>,
        city: Option<String>,
        min_stars: Option<i32>,
        max_price: Option<Money>,
    ) -> Self {
        PackageListingFilter {
            country: non_empty(country),
            city: non_empty(city),
            min_stars,
            max_price,
        }
    }

    /// Restricts to countries whose name contains `country`.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = non_empty(Some(country.into()));
        self
    }

    /// Restricts to cities whose name contains `city`.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = non_empty(Some(city.into()));
        self
    }

    /// Restricts to hotels with at least `stars` stars.
    pub fn with_min_stars(mut self, stars: i32) -> Self {
        self.min_stars = Some(stars);
        self
    }

    /// Restricts to packages priced at or below `price` per person.
    pub fn with_max_price(mut self, price: Money) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn min_stars(&self) -> Option<i32> {
        self.min_stars
    }

    pub fn max_price(&self) -> Option<Money> {
        self.max_price
    }

    /// Number of filter fields that carry a value.
    pub fn present_count(&self) -> usize {
        [
            self.country.is_some(),
            self.city.is_some(),
            self.min_stars.is_some(),
            self.max_price.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// True when no field is set (the filter matches every row).
    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// =============================================================================
// Package Listing Row
// =============================================================================

/// One row of a package listing.
///
/// Field order mirrors the select projection column for column. Values
/// only, no identity: two rows with equal fields are equal.
///
/// ## Serialization
/// camelCase for JSON consumers; the price serializes as decimal text.
/// ```json
/// {
///   "tripPackageName": "Riviera Escape",
///   "country": "France",
///   "city": "Nice",
///   "hotelName": "Hotel Azur",
///   "roomCapacity": 2,
///   "stars": 4,
///   "packagePricePerPerson": "499.00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageListingRow {
    pub trip_package_name: String,
    pub country: String,
    pub city: String,
    pub hotel_name: String,
    pub room_capacity: i32,
    pub stars: i32,
    pub package_price_per_person: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_filter_is_empty() {
        let filter = PackageListingFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.present_count(), 0);
    }

    #[test]
    fn test_empty_string_means_absent() {
        let filter = PackageListingFilter::new().with_country("").with_city("");
        assert_eq!(filter, PackageListingFilter::new());

        let from_parts =
            PackageListingFilter::from_parts(Some(String::new()), Some(String::new()), None, None);
        assert!(from_parts.is_empty());
    }

    #[test]
    fn test_whitespace_is_a_value() {
        let filter = PackageListingFilter::new().with_city(" ");
        assert_eq!(filter.city(), Some(" "));
    }

    #[test]
    fn test_zero_values_are_present() {
        let filter = PackageListingFilter::new()
            .with_min_stars(0)
            .with_max_price(Money::from_cents(0));
        assert_eq!(filter.present_count(), 2);
        assert_eq!(filter.min_stars(), Some(0));
    }

    #[test]
    fn test_row_json_shape() {
        let row = PackageListingRow {
            trip_package_name: "Riviera Escape".to_string(),
            country: "France".to_string(),
            city: "Nice".to_string(),
            hotel_name: "Hotel Azur".to_string(),
            room_capacity: 2,
            stars: 4,
            package_price_per_person: Money::from_cents(49900),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["tripPackageName"], "Riviera Escape");
        assert_eq!(json["roomCapacity"], 2);
        assert_eq!(json["packagePricePerPerson"], "499.00");
    }
}
