//! FSE tuning parameters and derived sizes.
//!
//! These mirror the reference codec's compile-time limits so that headers and
//! table sizes interoperate with it.

/// Memory budget exponent for tables: `2^14` bytes.
pub const FSE_MAX_MEMORY_USAGE: u32 = 14;

/// Default memory budget exponent.
pub const FSE_DEFAULT_MEMORY_USAGE: u32 = 13;

/// Largest symbol value a byte alphabet can carry.
pub const FSE_MAX_SYMBOL_VALUE: u32 = 255;

/// Largest table-log the codec builds tables for.
pub const FSE_MAX_TABLELOG: u32 = FSE_MAX_MEMORY_USAGE - 2;

/// Table size at [`FSE_MAX_TABLELOG`].
pub const FSE_MAX_TABLESIZE: u32 = 1 << FSE_MAX_TABLELOG;

/// Mask for indexing a maximum-size table.
pub const FSE_MAXTABLESIZE_MASK: u32 = FSE_MAX_TABLESIZE - 1;

/// Default table-log.
pub const FSE_DEFAULT_TABLELOG: u32 = FSE_DEFAULT_MEMORY_USAGE - 2;

/// Smallest table-log a header can declare; the 4-bit field is an offset from it.
pub const FSE_MIN_TABLELOG: u32 = 5;

/// Hard ceiling on any declared table-log.
pub const FSE_TABLELOG_ABSOLUTE_MAX: u32 = 15;

pub const FSE_VERSION_MAJOR: u32 = 0;
pub const FSE_VERSION_MINOR: u32 = 9;
pub const FSE_VERSION_RELEASE: u32 = 0;

/// Packed version, `major * 10000 + minor * 100 + release`.
pub const FSE_VERSION_NUMBER: u32 =
    FSE_VERSION_MAJOR * 100 * 100 + FSE_VERSION_MINOR * 100 + FSE_VERSION_RELEASE;

/// Dotted version string.
pub const VERSION_STRING: &str = "0.9.0";

/// Packed format version this crate interoperates with.
#[inline]
pub const fn version_number() -> u32 {
    FSE_VERSION_NUMBER
}

/// Size in `u32` cells of a decode table for `max_table_log`, header cell included.
#[inline]
pub const fn dtable_size_u32(max_table_log: u32) -> usize {
    1 + (1usize << max_table_log)
}

/// Symbol spreading step for a table of `table_size` cells.
///
/// Odd for every power-of-two size >= 16, hence coprime with the size.
#[inline]
pub const fn table_step(table_size: u64) -> u64 {
    (table_size >> 1) + (table_size >> 3) + 3
}
