//! # Error Types
//!
//! Domain-specific error types for wayfarer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wayfarer-core errors (this file)                                      │
//! │  └── ValidationError  - Input parsing failures (money text)            │
//! │                                                                         │
//! │  wayfarer-db errors (separate crate)                                   │
//! │  └── DbError          - Connection / query / data-shape failures       │
//! │                                                                         │
//! │  CLI (in app)                                                          │
//! │  └── anyhow::Error    - What the terminal sees                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Query composition itself has no error type: it is a pure function that
//! cannot fail on well-formed input.

use thiserror::Error;

/// Input validation errors.
///
/// These occur while turning caller-supplied text into filter values,
/// before any query is composed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Invalid format (e.g., "12.345" for a two-decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}
