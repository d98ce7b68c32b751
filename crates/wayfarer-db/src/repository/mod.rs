//! # Repository Module
//!
//! Database repository implementations for Wayfarer.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI                                                                   │
//! │       │                                                                 │
//! │       │  db.packages().list_packages(&filter)                          │
//! │       ▼                                                                 │
//! │  PackageRepository                                                     │
//! │  ├── list_packages(&self, filter)                                      │
//! │  └── list_all(&self)                                                   │
//! │       │                                                                 │
//! │       │  SQL from wayfarer-core, rows through mapper                   │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`package::PackageRepository`] - Filtered package listings

pub mod package;
