//! # Filtered Query Builder
//!
//! Composes the package listing SQL and its bound parameters from a
//! [`PackageListingFilter`].
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Listing Query Is Built                         │
//! │                                                                         │
//! │  PACKAGE_LISTING_BASE  (SELECT ... JOIN ... WHERE 1=1)                 │
//! │       │                                                                 │
//! │       ▼   fixed order, each step skipped when the field is absent      │
//! │  ┌──────────────────────────────────────────────────────────────┐      │
//! │  │ country   │ AND c.name LIKE ?N                   │ "%France%" │      │
//! │  │ city      │ AND d.city LIKE ?N                   │ "%Nice%"   │      │
//! │  │ min_stars │ AND h.stars >= ?N                    │ 4          │      │
//! │  │ max_price │ AND tp.price_per_person_cents <= ?N  │ 50000      │      │
//! │  └──────────────────────────────────────────────────────────────┘      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ORDER BY tp.name ASC                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BuiltQuery { sql, params }   ← params.len() == fields present         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why `WHERE 1=1`?
//! The tautological anchor makes every fragment uniformly `AND ...`; the
//! first fragment needs no special case, and the empty filter is still a
//! valid "match all" predicate.
//!
//! ## Placeholders
//! Placeholders are numbered `?1`, `?2`, ... in emission order, so each
//! fragment gets its own and the N-th placeholder always binds the N-th
//! parameter. Values never enter the SQL text.

use crate::money::Money;
use crate::types::PackageListingFilter;

// =============================================================================
// Base Query
// =============================================================================

/// Always-true predicate that every appended fragment conjoins onto.
pub const TAUTOLOGICAL_ANCHOR: &str = "WHERE 1=1";

/// Projection of the listing query, in row-mapping order.
///
/// Column `i` here is column `i` of every returned row.
pub const PACKAGE_LISTING_PROJECTION: [&str; 7] = [
    "tp.name",
    "c.name",
    "d.city",
    "h.name",
    "r.capacity",
    "h.stars",
    "tp.price_per_person_cents",
];

/// Base listing query: five joins and the tautological anchor.
pub const PACKAGE_LISTING_BASE: &str = "\
SELECT tp.name, c.name, d.city, h.name, r.capacity, h.stars, tp.price_per_person_cents \
FROM trip_packages AS tp \
JOIN package_itineraries AS pi ON tp.id = pi.package_id \
JOIN destinations AS d ON pi.destination_id = d.id \
JOIN hotels AS h ON d.id = h.destination_id \
JOIN countries AS c ON c.id = d.country_id \
JOIN rooms AS r ON h.id = r.hotel_id \
WHERE 1=1";

// =============================================================================
// Bind Values
// =============================================================================

/// A parameter value bound to one placeholder.
///
/// The execution layer maps each variant onto its driver type; money is
/// bound as integer cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Integer(i64),
    Money(Money),
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        BindValue::Integer(i64::from(value))
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::Integer(value)
    }
}

impl From<Money> for BindValue {
    fn from(value: Money) -> Self {
        BindValue::Money(value)
    }
}

// =============================================================================
// Comparison
// =============================================================================

/// How a predicate compares its column with the bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Substring match: `LIKE '%value%'`.
    ///
    /// Case sensitivity follows the store's collation. `%` and `_` inside
    /// the value keep their LIKE meaning.
    Contains,

    /// `column >= value`
    AtLeast,

    /// `column <= value`
    AtMost,
}

impl Comparison {
    fn operator(self) -> &'static str {
        match self {
            Comparison::Contains => "LIKE",
            Comparison::AtLeast => ">=",
            Comparison::AtMost => "<=",
        }
    }

    /// Shapes the raw filter value into what gets bound.
    fn prepare(self, value: BindValue) -> BindValue {
        match (self, value) {
            (Comparison::Contains, BindValue::Text(text)) => {
                BindValue::Text(format!("%{}%", text))
            }
            (_, value) => value,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

#[derive(Debug, Clone)]
struct Predicate {
    column: &'static str,
    comparison: Comparison,
    value: BindValue,
}

/// Ordered predicate list compiled onto a base query.
///
/// Columns are `&'static str` on purpose: only code decides what is
/// compared, callers only decide with what.
///
/// ## Example
/// ```rust
/// use wayfarer_core::query::{Comparison, FilteredQueryBuilder};
///
/// let built = FilteredQueryBuilder::new("SELECT name FROM hotels AS h WHERE 1=1")
///     .and_where("h.stars", Comparison::AtLeast, Some(4))
///     .and_where("h.name", Comparison::Contains, None::<&str>)
///     .order_by_asc("h.name")
///     .build();
///
/// assert_eq!(
///     built.sql(),
///     "SELECT name FROM hotels AS h WHERE 1=1 AND h.stars >= ?1 ORDER BY h.name ASC"
/// );
/// assert_eq!(built.params().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FilteredQueryBuilder {
    base: String,
    predicates: Vec<Predicate>,
    order_by: Vec<&'static str>,
}

impl FilteredQueryBuilder {
    /// Starts from a base query that ends with [`TAUTOLOGICAL_ANCHOR`].
    ///
    /// A base without the anchor is a programming error.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        debug_assert!(
            base.trim_end().ends_with(TAUTOLOGICAL_ANCHOR),
            "base query must end with `{}`",
            TAUTOLOGICAL_ANCHOR
        );
        FilteredQueryBuilder {
            base,
            predicates: Vec::new(),
            order_by: Vec::new(),
        }
    }

    /// Conjoins `column <comparison> value` when `value` is present.
    ///
    /// `None` contributes no fragment and no parameter.
    pub fn and_where<V: Into<BindValue>>(
        mut self,
        column: &'static str,
        comparison: Comparison,
        value: Option<V>,
    ) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate {
                column,
                comparison,
                value: comparison.prepare(value.into()),
            });
        }
        self
    }

    /// Appends an ascending sort key.
    pub fn order_by_asc(mut self, column: &'static str) -> Self {
        self.order_by.push(column);
        self
    }

    /// Compiles the query text and its parallel parameter list.
    pub fn build(self) -> BuiltQuery {
        let mut sql = self.base.trim_end().to_string();
        let mut params = Vec::with_capacity(self.predicates.len());

        for (index, predicate) in self.predicates.into_iter().enumerate() {
            sql.push_str(&format!(
                " AND {} {} ?{}",
                predicate.column,
                predicate.comparison.operator(),
                index + 1
            ));
            params.push(predicate.value);
        }

        if !self.order_by.is_empty() {
            let keys: Vec<String> = self
                .order_by
                .iter()
                .map(|column| format!("{} ASC", column))
                .collect();
            sql.push_str(&format!(" ORDER BY {}", keys.join(", ")));
        }

        BuiltQuery { sql, params }
    }
}

// =============================================================================
// Built Query
// =============================================================================

/// Final query text plus the values for `?1..?N`, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    sql: String,
    params: Vec<BindValue>,
}

impl BuiltQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[BindValue] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<BindValue>) {
        (self.sql, self.params)
    }
}

/// Builds the package listing query for `filter`.
///
/// Field order is fixed: country, city, min_stars, max_price. The result
/// is always sorted by package name, ascending.
pub fn package_listing_query(filter: &PackageListingFilter) -> BuiltQuery {
    FilteredQueryBuilder::new(PACKAGE_LISTING_BASE)
        .and_where("c.name", Comparison::Contains, filter.country())
        .and_where("d.city", Comparison::Contains, filter.city())
        .and_where("h.stars", Comparison::AtLeast, filter.min_stars())
        .and_where("tp.price_per_person_cents", Comparison::AtMost, filter.max_price())
        .order_by_asc("tp.name")
        .build()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SORT: &str = " ORDER BY tp.name ASC";

    fn every_filter() -> PackageListingFilter {
        PackageListingFilter::new()
            .with_country("France")
            .with_city("Nice")
            .with_min_stars(4)
            .with_max_price(Money::from_cents(50000))
    }

    /// Returns the text between the anchor and the sort clause.
    fn fragments(built: &BuiltQuery) -> &str {
        let sql = built.sql();
        let start = sql.find(TAUTOLOGICAL_ANCHOR).unwrap() + TAUTOLOGICAL_ANCHOR.len();
        let end = sql.rfind(SORT).unwrap();
        &sql[start..end]
    }

    #[test]
    fn test_projection_matches_base() {
        let select = format!("SELECT {} FROM", PACKAGE_LISTING_PROJECTION.join(", "));
        assert!(PACKAGE_LISTING_BASE.starts_with(&select));
    }

    #[test]
    fn test_empty_filter_is_base_plus_sort() {
        let built = package_listing_query(&PackageListingFilter::new());

        assert_eq!(built.sql(), format!("{}{}", PACKAGE_LISTING_BASE, SORT));
        assert!(built.params().is_empty());
        assert_eq!(fragments(&built), "");
    }

    #[test]
    fn test_all_filters_in_fixed_order() {
        let built = package_listing_query(&every_filter());

        assert_eq!(
            fragments(&built),
            " AND c.name LIKE ?1 AND d.city LIKE ?2 AND h.stars >= ?3 \
             AND tp.price_per_person_cents <= ?4"
        );
        assert_eq!(
            built.params(),
            &[
                BindValue::Text("%France%".to_string()),
                BindValue::Text("%Nice%".to_string()),
                BindValue::Integer(4),
                BindValue::Money(Money::from_cents(50000)),
            ]
        );
    }

    #[test]
    fn test_country_only_wraps_wildcards() {
        let filter = PackageListingFilter::new().with_country("France");
        let built = package_listing_query(&filter);

        assert_eq!(fragments(&built), " AND c.name LIKE ?1");
        assert_eq!(built.params(), &[BindValue::Text("%France%".to_string())]);
    }

    #[test]
    fn test_min_stars_and_max_price() {
        let filter = PackageListingFilter::new()
            .with_min_stars(4)
            .with_max_price("500.00".parse().unwrap());
        let built = package_listing_query(&filter);

        assert_eq!(
            fragments(&built),
            " AND h.stars >= ?1 AND tp.price_per_person_cents <= ?2"
        );
        assert_eq!(
            built.params(),
            &[
                BindValue::Integer(4),
                BindValue::Money(Money::from_cents(50000)),
            ]
        );
        assert!(built.sql().ends_with(SORT));
        assert!(!built.sql().contains("r.capacity >="));
    }

    #[test]
    fn test_param_count_matches_present_fields_for_every_combination() {
        for mask in 0u8..16 {
            let mut filter = PackageListingFilter::new();
            if mask & 0b0001 != 0 {
                filter = filter.with_country("a");
            }
            if mask & 0b0010 != 0 {
                filter = filter.with_city("b");
            }
            if mask & 0b0100 != 0 {
                filter = filter.with_min_stars(3);
            }
            if mask & 0b1000 != 0 {
                filter = filter.with_max_price(Money::from_cents(100));
            }

            let built = package_listing_query(&filter);
            let expected = mask.count_ones() as usize;

            assert_eq!(built.params().len(), expected, "mask {:04b}", mask);
            assert_eq!(filter.present_count(), expected);
            assert_eq!(built.sql().matches(" AND ").count(), expected);
            for n in 1..=expected {
                assert_eq!(built.sql().matches(&format!("?{}", n)).count(), 1);
            }
            assert!(!built.sql().contains(&format!("?{}", expected + 1)));
        }
    }

    #[test]
    fn test_fragment_order_is_stable_for_subsets() {
        let columns = ["c.name", "d.city", "h.stars", "tp.price_per_person_cents <="];

        for mask in 0u8..16 {
            let filter = PackageListingFilter::from_parts(
                (mask & 1 != 0).then(|| "x".to_string()),
                (mask & 2 != 0).then(|| "y".to_string()),
                (mask & 4 != 0).then_some(2),
                (mask & 8 != 0).then_some(Money::from_cents(1)),
            );
            let built = package_listing_query(&filter);
            let clause = fragments(&built);

            let positions: Vec<usize> = columns
                .iter()
                .filter_map(|column| clause.find(column))
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "mask {:04b}", mask);
        }
    }

    #[test]
    fn test_empty_string_and_absent_build_identical_queries() {
        let absent = package_listing_query(&PackageListingFilter::new().with_min_stars(3));
        let empty = package_listing_query(
            &PackageListingFilter::new()
                .with_country("")
                .with_city("")
                .with_min_stars(3),
        );

        assert_eq!(absent, empty);
    }

    #[test]
    fn test_values_never_enter_sql_text() {
        let filter = PackageListingFilter::new().with_city("x' OR '1'='1");
        let built = package_listing_query(&filter);

        assert!(!built.sql().contains("OR '1'"));
        assert_eq!(
            built.params(),
            &[BindValue::Text("%x' OR '1'='1%".to_string())]
        );
    }

    #[test]
    fn test_building_is_deterministic() {
        assert_eq!(
            package_listing_query(&every_filter()),
            package_listing_query(&every_filter())
        );
    }

    #[test]
    fn test_builder_without_order_by() {
        let built = FilteredQueryBuilder::new("SELECT 1 WHERE 1=1 ")
            .and_where("x", Comparison::AtMost, Some(5i64))
            .build();

        assert_eq!(built.sql(), "SELECT 1 WHERE 1=1 AND x <= ?1");
        let (_, params) = built.into_parts();
        assert_eq!(params, vec![BindValue::Integer(5)]);
    }
}
