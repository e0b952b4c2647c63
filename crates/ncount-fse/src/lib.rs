//! # NCount FSE
//!
//! Decoder for the normalized-count ("NCount") header that precedes every
//! Finite State Entropy compressed block. The header carries the table-log
//! and one normalized probability per symbol; downstream code builds its
//! decoding table from exactly these values.
//!
//! ## Quick Start
//!
//! ```rust
//! use ncount_fse::{read_ncount, NormalizedCounts};
//!
//! // table_log 5, two symbols of 16 slots each.
//! let header = [0x10, 0x3F];
//!
//! let mut counter = [0i16; 256];
//! let parsed = read_ncount(&mut counter, 255, &header).unwrap();
//! assert_eq!(parsed.table_log, 5);
//! assert_eq!(parsed.max_symbol_value, 1);
//! assert_eq!(parsed.header_size, 2);
//! assert_eq!(&counter[..2], &[16, 16]);
//!
//! // Owned form.
//! let (dist, size) = NormalizedCounts::parse(&header, 255).unwrap();
//! assert_eq!(dist.counts(), &[16, 16]);
//! assert_eq!(size, 2);
//! ```
//!
//! ## Wire Compatibility
//!
//! Decoding is bit-exact with the reference FSE library, including the byte
//! count reported for short and padded inputs and the classification of
//! every failure.
//!
//! ## References
//!
//! - [FSE](https://github.com/Cyan4973/FiniteStateEntropy)
//! - [RFC 8878 Section 4.1.1](https://datatracker.ietf.org/doc/html/rfc8878#section-4.1.1)

mod counts;
mod header;
pub mod params;

pub use counts::NormalizedCounts;
pub use header::{read_ncount, read_ncount_status, NCountHeader};
pub use params::{FSE_MIN_TABLELOG, FSE_TABLELOG_ABSOLUTE_MAX};

pub use ncount_core::{Error, ErrorCode, Result, StatusCode};
