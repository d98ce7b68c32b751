//! # Package Repository
//!
//! Filtered, sorted travel package listings.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How list_packages Works                              │
//! │                                                                         │
//! │  PackageListingFilter { country: "France", min_stars: 4, .. }          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  package_listing_query()  (wayfarer-core, pure)                        │
//! │       │   sql:    ... WHERE 1=1 AND c.name LIKE ?1 AND h.stars >= ?2   │
//! │       │   params: ["%France%", 4]                                      │
//! │       ▼                                                                 │
//! │  pool.acquire()  ──► PoolConnection (returned to pool on drop)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bind ?1..?N, fetch row stream                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  map_listing_row() per row, in store order                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<PackageListingRow>  (sorted by ORDER BY tp.name ASC)              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resource Release
//! The connection guard and the row stream are plain values owned by the
//! call. Success, early `?` return, or the future being dropped all release
//! them the same way: by drop.

use futures_util::TryStreamExt;
use sqlx::SqlitePool;
use tracing::{debug, warn};
use wayfarer_core::query::{package_listing_query, BindValue};
use wayfarer_core::{PackageListingFilter, PackageListingRow};

use crate::error::{DbError, DbResult};
use crate::mapper::map_listing_row;

/// Repository for package listings.
///
/// ## Usage
/// ```rust,ignore
/// let repo = PackageRepository::new(pool);
///
/// let filter = PackageListingFilter::new().with_country("France");
/// let rows = repo.list_packages(&filter).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PackageRepository {
    pool: SqlitePool,
}

impl PackageRepository {
    /// Creates a new PackageRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PackageRepository { pool }
    }

    /// Lists packages matching `filter`, ascending by package name.
    ///
    /// ## Returns
    /// * `Ok(rows)` - Possibly empty; rows keep the store's order
    /// * `Err(DbError::ConnectionFailed)` - No connection could be acquired
    /// * `Err(DbError::QueryFailed)` - The store rejected the query
    /// * `Err(DbError::DataShape)` - A row did not match the projection
    ///
    /// Each call acquires its own connection; concurrent calls never share
    /// one.
    pub async fn list_packages(
        &self,
        filter: &PackageListingFilter,
    ) -> DbResult<Vec<PackageListingRow>> {
        let built = package_listing_query(filter);

        debug!(
            filters = filter.present_count(),
            params = built.params().len(),
            "Listing packages"
        );

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        let mut query = sqlx::query(built.sql());
        for value in built.params() {
            query = match value {
                BindValue::Text(text) => query.bind(text.as_str()),
                BindValue::Integer(number) => query.bind(*number),
                BindValue::Money(money) => query.bind(money.cents()),
            };
        }

        let mut rows = query.fetch(&mut *conn);
        let mut listings = Vec::new();

        while let Some(row) = rows.try_next().await? {
            let listing = map_listing_row(&row).inspect_err(|e| {
                warn!(error = %e, position = listings.len(), "Listing row has unexpected shape");
            })?;
            listings.push(listing);
        }

        debug!(count = listings.len(), "Listing returned packages");
        Ok(listings)
    }

    /// Lists every package (no filter), ascending by package name.
    pub async fn list_all(&self) -> DbResult<Vec<PackageListingRow>> {
        self.list_packages(&PackageListingFilter::new()).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
