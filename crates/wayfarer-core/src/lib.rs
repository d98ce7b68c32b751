//! # wayfarer-core: Pure Listing Logic for Wayfarer
//!
//! Everything needed to turn optional search inputs into a parameterized
//! package listing query, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Wayfarer Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    wayfarer CLI                                 │   │
//! │  │    --country --city --min-stars --max-price                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wayfarer-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │     types     │  │     query     │  │     money     │      │   │
//! │  │   │ ListingFilter │  │ QueryBuilder  │  │  Money (i64)  │      │   │
//! │  │   │  ListingRow   │  │  BuiltQuery   │  │               │      │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 wayfarer-db (Database Layer)                    │   │
//! │  │            executes BuiltQuery, maps rows back                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `PackageListingFilter` and `PackageListingRow`
//! - [`query`] - Filtered query builder
//! - [`money`] - Fixed-point money (integer cents)
//! - [`error`] - Validation errors
//!
//! ## Example Usage
//!
//! ```rust
//! use wayfarer_core::query::{package_listing_query, BindValue};
//! use wayfarer_core::PackageListingFilter;
//!
//! let filter = PackageListingFilter::new().with_country("France").with_min_stars(4);
//! let built = package_listing_query(&filter);
//!
//! assert!(built.sql().contains("AND c.name LIKE ?1 AND h.stars >= ?2"));
//! assert_eq!(built.params()[0], BindValue::Text("%France%".to_string()));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod query;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use query::{package_listing_query, BindValue, BuiltQuery, FilteredQueryBuilder};
pub use types::*;
