//! Error types for NCount header decoding.
//!
//! Two layers live here:
//!
//! - [`ErrorCode`] is the fixed, ordered vocabulary shared with the reference
//!   entropy library. Its numeric values are part of the status-channel
//!   convention (see [`crate::status`]) and must not be reordered.
//! - [`Error`] is the rich error returned by Rust callers. Each variant carries
//!   context for diagnostics and maps onto exactly one [`ErrorCode`].

use thiserror::Error;

/// Result type alias for NCount operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure reasons, in wire order.
///
/// The discriminant `k` is encoded on the status channel as `u64::MAX - k + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ErrorCode {
    NoError = 0,
    Generic = 1,
    DstSizeTooSmall = 2,
    SrcSizeWrong = 3,
    CorruptionDetected = 4,
    TableLogTooLarge = 5,
    MaxSymbolValueTooLarge = 6,
    MaxSymbolValueTooSmall = 7,
    WorkSpaceTooSmall = 8,
    /// Sentinel; never returned as a failure.
    MaxCode = 9,
}

impl ErrorCode {
    /// All codes, in discriminant order.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::NoError,
        ErrorCode::Generic,
        ErrorCode::DstSizeTooSmall,
        ErrorCode::SrcSizeWrong,
        ErrorCode::CorruptionDetected,
        ErrorCode::TableLogTooLarge,
        ErrorCode::MaxSymbolValueTooLarge,
        ErrorCode::MaxSymbolValueTooSmall,
        ErrorCode::WorkSpaceTooSmall,
        ErrorCode::MaxCode,
    ];

    /// Value of this code on the 64-bit status channel.
    #[inline]
    pub const fn status(self) -> u64 {
        u64::MAX.wrapping_sub(self as u64).wrapping_add(1)
    }

    /// Recover the code from a status value.
    ///
    /// Returns `None` for byte counts. `NoError` and `MaxCode` are never
    /// produced here since neither classifies as a failure.
    pub fn from_status(status: u64) -> Option<Self> {
        if status <= ErrorCode::MaxCode.status() {
            return None;
        }
        let k = status.wrapping_neg();
        Self::ALL.get(k as usize).copied()
    }

    /// Human-readable reason, matching the reference library's wording.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorCode::NoError => "No error detected",
            ErrorCode::Generic => "Error (generic)",
            ErrorCode::DstSizeTooSmall => "Destination buffer is too small",
            ErrorCode::SrcSizeWrong => "Src size is incorrect",
            ErrorCode::CorruptionDetected => "Corrupted block detected",
            ErrorCode::TableLogTooLarge => "tableLog requires too much memory : unsupported",
            ErrorCode::MaxSymbolValueTooLarge => "Unsupported max Symbol Value : too large",
            ErrorCode::MaxSymbolValueTooSmall => "Specified maxSymbolValue is too small",
            ErrorCode::WorkSpaceTooSmall => "Not enough memory allocated for work space",
            ErrorCode::MaxCode => "Unspecified error code",
        }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Header decoding error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unclassified failure.
    #[error("generic error: {0}")]
    Generic(&'static str),

    /// Caller-supplied output buffer is too small.
    #[error("destination too small: need {required} slots, got {provided}")]
    DstSizeTooSmall { required: usize, provided: usize },

    /// Source length is not acceptable for the operation.
    #[error("source size wrong: {size} bytes")]
    SrcSizeWrong { size: usize },

    /// Input is malformed or truncated.
    #[error("corrupted header: {reason}")]
    CorruptionDetected { reason: &'static str },

    /// Declared table-log exceeds the supported maximum.
    #[error("table log {table_log} exceeds maximum {max}")]
    TableLogTooLarge { table_log: u32, max: u32 },

    /// Requested maximum symbol value is unsupported.
    #[error("max symbol value {value} exceeds maximum {max}")]
    MaxSymbolValueTooLarge { value: u32, max: u32 },

    /// Header references a symbol beyond the caller's maximum.
    #[error("max symbol value too small: header needs {required}, caller allows {provided}")]
    MaxSymbolValueTooSmall { required: u32, provided: u32 },

    /// Scratch space is insufficient.
    #[error("work space too small: need {required} bytes, got {provided}")]
    WorkSpaceTooSmall { required: usize, provided: usize },
}

impl Error {
    /// Create a corruption error.
    pub fn corrupted(reason: &'static str) -> Self {
        Error::CorruptionDetected { reason }
    }

    /// Create a destination-too-small error.
    pub fn dst_too_small(required: usize, provided: usize) -> Self {
        Error::DstSizeTooSmall { required, provided }
    }

    /// The status-channel classification of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Generic(_) => ErrorCode::Generic,
            Error::DstSizeTooSmall { .. } => ErrorCode::DstSizeTooSmall,
            Error::SrcSizeWrong { .. } => ErrorCode::SrcSizeWrong,
            Error::CorruptionDetected { .. } => ErrorCode::CorruptionDetected,
            Error::TableLogTooLarge { .. } => ErrorCode::TableLogTooLarge,
            Error::MaxSymbolValueTooLarge { .. } => ErrorCode::MaxSymbolValueTooLarge,
            Error::MaxSymbolValueTooSmall { .. } => ErrorCode::MaxSymbolValueTooSmall,
            Error::WorkSpaceTooSmall { .. } => ErrorCode::WorkSpaceTooSmall,
        }
    }

    /// Whether the input itself is bad, as opposed to a caller-side sizing issue.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Error::CorruptionDetected { .. } | Error::TableLogTooLarge { .. }
        )
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Generic(_) => "generic",
            Error::DstSizeTooSmall { .. } => "dst_size_too_small",
            Error::SrcSizeWrong { .. } => "src_size_wrong",
            Error::CorruptionDetected { .. } => "corruption_detected",
            Error::TableLogTooLarge { .. } => "table_log_too_large",
            Error::MaxSymbolValueTooLarge { .. } => "max_symbol_value_too_large",
            Error::MaxSymbolValueTooSmall { .. } => "max_symbol_value_too_small",
            Error::WorkSpaceTooSmall { .. } => "work_space_too_small",
        }
    }
}
