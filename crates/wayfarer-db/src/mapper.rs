//! # Row Mapper
//!
//! Turns listing rows into [`PackageListingRow`] by column position.
//!
//! ## Column Layout
//! ```text
//! ┌─────┬──────────────────────────────┬────────────────────────────┬────────┐
//! │ pos │ projection                   │ field                      │ decode │
//! ├─────┼──────────────────────────────┼────────────────────────────┼────────┤
//! │  0  │ tp.name                      │ trip_package_name          │ String │
//! │  1  │ c.name                       │ country                    │ String │
//! │  2  │ d.city                       │ city                       │ String │
//! │  3  │ h.name                       │ hotel_name                 │ String │
//! │  4  │ r.capacity                   │ room_capacity              │ i32    │
//! │  5  │ h.stars                      │ stars                      │ i32    │
//! │  6  │ tp.price_per_person_cents    │ package_price_per_person   │ Money  │
//! └─────┴──────────────────────────────┴────────────────────────────┴────────┘
//! ```
//!
//! Positions, not names: the projection has two `name` columns, so
//! name-based lookup would be ambiguous.

use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, Row, Sqlite, Type};
use wayfarer_core::query::PACKAGE_LISTING_PROJECTION;
use wayfarer_core::{Money, PackageListingRow};

use crate::error::{DbError, DbResult};

/// Field name for each projected column, by position.
pub const LISTING_FIELDS: [&str; 7] = [
    "trip_package_name",
    "country",
    "city",
    "hotel_name",
    "room_capacity",
    "stars",
    "package_price_per_person",
];

/// Number of columns every listing row must have.
pub const LISTING_ARITY: usize = PACKAGE_LISTING_PROJECTION.len();

/// Maps one listing row.
///
/// ## Errors
/// `DbError::DataShape` when the row does not have exactly
/// [`LISTING_ARITY`] columns, or a column cannot be decoded as its
/// declared type. Nothing is coerced silently: a REAL price or a TEXT
/// stars value is an error, not a best-effort conversion.
///
/// For an arity mismatch the error's `column` is the number of columns
/// the row actually has, and `field` is `"row"`.
pub fn map_listing_row(row: &SqliteRow) -> DbResult<PackageListingRow> {
    if row.len() != LISTING_ARITY {
        return Err(DbError::data_shape(
            row.len(),
            "row",
            format!("expected {} columns, found {}", LISTING_ARITY, row.len()),
        ));
    }

    Ok(PackageListingRow {
        trip_package_name: column(row, 0)?,
        country: column(row, 1)?,
        city: column(row, 2)?,
        hotel_name: column(row, 3)?,
        room_capacity: column(row, 4)?,
        stars: column(row, 5)?,
        package_price_per_person: Money::from_cents(column(row, 6)?),
    })
}

fn column<'r, T>(row: &'r SqliteRow, index: usize) -> DbResult<T>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    // Decode through Option so NULL is reported instead of defaulting.
    row.try_get::<Option<T>, _>(index)
        .map_err(|e| DbError::data_shape(index, LISTING_FIELDS[index], e.to_string()))?
        .ok_or_else(|| DbError::data_shape(index, LISTING_FIELDS[index], "unexpected NULL"))
}

// =============================================================================
// Unit Tests
// =============================================================================
