//! Error Types
//!
//! This module defines the recoverable error types used by the interval layer.
//!
//! # Overview
//!
//! Setting a non-finite value on a [`PropertyLerpDescriptor`] is a programming
//! error and is caught by debug assertions, not reported here. [`LerpError`]
//! only covers conditions callers can reasonably react to:
//! - Invalid interval timing
//! - Settings that fail to parse
//!
//! # Usage
//!
//! ```rust,ignore
//! use node_lerp::errors::{LerpError, Result};
//!
//! fn build() -> Result<LerpInterval> {
//!     LerpInterval::new("slide", 2.0, BlendType::EaseInOut, descriptor)
//! }
//! ```
//!
//! [`PropertyLerpDescriptor`]: crate::animation::PropertyLerpDescriptor

use thiserror::Error;

/// The main error type for lerp intervals.
#[derive(Error, Debug)]
pub enum LerpError {
    // ========================================================================
    // Timing Errors
    // ========================================================================
    /// Interval duration was negative, NaN or infinite.
    #[error("Invalid interval duration: {0} (must be finite and non-negative)")]
    InvalidDuration(f32),

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, LerpError>`.
pub type Result<T> = std::result::Result<T, LerpError>;
