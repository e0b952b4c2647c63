//! Single-channel status codes.
//!
//! The reference library returns one `size_t` from every call: small values
//! are byte counts, and the top of the range holds error codes. Rust callers
//! should use [`crate::Result`]; this module exists for interop with code that
//! persists or compares raw status values.

use crate::error::{ErrorCode, Result};

/// A raw 64-bit status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u64);

impl StatusCode {
    /// Wrap a raw status value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// A success status reporting `bytes` consumed.
    #[inline]
    pub const fn success(bytes: usize) -> Self {
        Self(bytes as u64)
    }

    /// Collapse a byte-count result onto the status channel.
    pub fn from_result(result: &Result<usize>) -> Self {
        match result {
            Ok(bytes) => Self::success(*bytes),
            Err(e) => e.code().into(),
        }
    }

    /// The raw value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether this status classifies as a failure.
    #[inline]
    pub const fn is_error(self) -> bool {
        is_error(self.0)
    }

    /// The failure reason, if any.
    pub fn error_code(self) -> Option<ErrorCode> {
        ErrorCode::from_status(self.0)
    }

    /// Bytes consumed, if this is a success.
    pub fn bytes_consumed(self) -> Option<usize> {
        if self.is_error() {
            None
        } else {
            usize::try_from(self.0).ok()
        }
    }

    /// Reason string; successes report "No error detected".
    pub fn error_name(self) -> &'static str {
        error_name(self.0)
    }
}

impl From<ErrorCode> for StatusCode {
    fn from(code: ErrorCode) -> Self {
        Self(code.status())
    }
}

impl From<StatusCode> for u64 {
    fn from(status: StatusCode) -> Self {
        status.0
    }
}

impl core::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.error_code() {
            Some(code) => write!(f, "error: {}", code),
            None => write!(f, "{} bytes", self.0),
        }
    }
}

/// Whether a raw status value is an error.
#[inline]
pub const fn is_error(code: u64) -> bool {
    code > ErrorCode::MaxCode.status()
}

/// Reason string for a raw status value.
pub fn error_name(code: u64) -> &'static str {
    ErrorCode::from_status(code)
        .unwrap_or(ErrorCode::NoError)
        .name()
}
