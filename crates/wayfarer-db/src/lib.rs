//! # wayfarer-db: Database Layer for Wayfarer
//!
//! Runs package listing queries against SQLite with sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Wayfarer Data Flow                               │
//! │                                                                         │
//! │  wayfarer list --country France --min-stars 4                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   wayfarer-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │    Mapper    │  │   │
//! │  │   │   (pool.rs)   │    │ (package.rs)  │    │ (mapper.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ PackageRepo   │───►│ row → record │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   trip_packages, package_itineraries, destinations, hotels,     │   │
//! │  │   countries, rooms                                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`repository`] - Repository implementations
//! - [`mapper`] - Positional row mapping
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wayfarer_core::PackageListingFilter;
//! use wayfarer_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("sqlite://travel.db")).await?;
//!
//! let filter = PackageListingFilter::new().with_country("France");
//! let rows = db.packages().list_packages(&filter).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod mapper;
pub mod pool;
pub mod repository;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult, UNKNOWN_COLUMN};
pub use pool::{Database, DbConfig};

pub use repository::package::PackageRepository;
