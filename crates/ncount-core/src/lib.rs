//! # NCount Core
//!
//! Shared plumbing for decoding Finite State Entropy table headers.
//!
//! ## Contents
//!
//! - [`Error`] / [`ErrorCode`] - rich errors and the fixed failure vocabulary
//! - [`StatusCode`] - the legacy single-channel `u64` status convention
//! - [`mem`] - bounds-safe little-endian word reads
//!
//! ## Status Channel
//!
//! The reference library returns byte counts and errors through one `size_t`.
//! Error `k` is `u64::MAX - k + 1`, so anything above
//! `ErrorCode::MaxCode.status()` is a failure:
//!
//! ```rust
//! use ncount_core::{ErrorCode, StatusCode};
//!
//! let status = StatusCode::from(ErrorCode::CorruptionDetected);
//! assert!(status.is_error());
//! assert!(!StatusCode::success(3).is_error());
//! ```

pub mod error;
pub mod mem;
pub mod status;

pub use error::{Error, ErrorCode, Result};
pub use status::{error_name, is_error, StatusCode};
