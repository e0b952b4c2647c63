//! NCount header decoding.
//!
//! An NCount header describes the normalized symbol distribution an FSE table
//! is built from. The layout, read LSB-first from a little-endian bitstream:
//!
//! - 4 bits: `table_log - FSE_MIN_TABLELOG`
//! - per symbol, a variable-width probability code whose width tracks the
//!   probability mass still unassigned (`remaining`)
//! - after every zero probability, a run-length of further zero symbols coded
//!   as 16-bit all-ones groups (+24), 2-bit `0b11` groups (+3) and a final
//!   2-bit remainder
//!
//! Decoded counts carry a bias of one: a coded value `v` means `v - 1`, so
//! `-1` marks a "less than one" probability which still occupies one table
//! slot. Decoding stops once the mass reaches its terminal value of 1.
//!
//! The cursor keeps a 32-bit window loaded at `ip` and a bit offset into it.
//! Near the end of input the byte cursor is pinned 4 bytes before the end and
//! the bit offset is allowed to grow instead, which keeps every word read in
//! bounds. The final `bit_count > 32` check rejects headers that would have
//! needed bits past the end.

use ncount_core::mem::read_le32;
use ncount_core::{Error, Result, StatusCode};
use tracing::{debug, trace};

use crate::params::{FSE_MIN_TABLELOG, FSE_TABLELOG_ABSOLUTE_MAX};

/// Smallest input the bit window can run over directly.
const MIN_HEADER_WINDOW: usize = 4;

/// Scalars recovered from a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NCountHeader {
    /// Highest symbol index present in the header.
    pub max_symbol_value: u32,
    /// log2 of the table size the counts are normalized to.
    pub table_log: u32,
    /// Bytes of input consumed.
    pub header_size: usize,
}

/// Decode an NCount header into `counter`.
///
/// `max_symbol_value` bounds the symbols the caller accepts; `counter` must
/// hold at least `max_symbol_value + 1` entries. Those entries are zeroed
/// before decoding, and on success `counter[..=result.max_symbol_value]`
/// holds the normalized counts.
///
/// Inputs shorter than 4 bytes are decoded from a zero-padded copy and
/// rejected if the decode needed bytes beyond the real input.
///
/// # Errors
///
/// - [`Error::DstSizeTooSmall`] if `counter` is too short
/// - [`Error::TableLogTooLarge`] if the declared table-log exceeds 15
/// - [`Error::MaxSymbolValueTooSmall`] if a zero run passes `max_symbol_value`
/// - [`Error::CorruptionDetected`] if the mass does not close, the bitstream
///   overruns the input, or a short input is truncated
pub fn read_ncount(
    counter: &mut [i16],
    max_symbol_value: u32,
    header: &[u8],
) -> Result<NCountHeader> {
    let result = decode(counter, max_symbol_value, header);
    match &result {
        Ok(parsed) => trace!(
            table_log = parsed.table_log,
            max_symbol_value = parsed.max_symbol_value,
            header_size = parsed.header_size,
            "decoded NCount header"
        ),
        Err(e) => debug!(
            error = %e,
            category = e.category(),
            input_len = header.len(),
            "rejected NCount header"
        ),
    }
    result
}

/// Single-channel variant of [`read_ncount`].
///
/// Writes `max_symbol_value` and `table_log` only on success and returns
/// either the bytes consumed or an error code on the status channel.
pub fn read_ncount_status(
    counter: &mut [i16],
    max_symbol_value: &mut u32,
    table_log: &mut u32,
    header: &[u8],
) -> StatusCode {
    match read_ncount(counter, *max_symbol_value, header) {
        Ok(parsed) => {
            *max_symbol_value = parsed.max_symbol_value;
            *table_log = parsed.table_log;
            StatusCode::success(parsed.header_size)
        }
        Err(e) => StatusCode::from(e.code()),
    }
}

fn decode(counter: &mut [i16], max_symbol_value: u32, header: &[u8]) -> Result<NCountHeader> {
    if header.len() < MIN_HEADER_WINDOW {
        let mut buffer = [0u8; MIN_HEADER_WINDOW];
        buffer[..header.len()].copy_from_slice(header);
        let parsed = decode(counter, max_symbol_value, &buffer)?;
        if parsed.header_size > header.len() {
            return Err(Error::corrupted("header truncated"));
        }
        return Ok(parsed);
    }

    let max_sv = max_symbol_value as usize;
    if max_sv >= counter.len() {
        return Err(Error::dst_too_small(max_sv.saturating_add(1), counter.len()));
    }
    counter[..=max_sv].fill(0);

    let iend = header.len();
    let mut ip = 0usize;

    let mut bit_stream = read_le32(header, ip);
    let table_log = (bit_stream & 0xF) + FSE_MIN_TABLELOG;
    if table_log > FSE_TABLELOG_ABSOLUTE_MAX {
        return Err(Error::TableLogTooLarge {
            table_log,
            max: FSE_TABLELOG_ABSOLUTE_MAX,
        });
    }
    bit_stream >>= 4;
    let mut bit_count = 4u32;

    let mut remaining: i32 = (1 << table_log) + 1;
    let mut threshold: i32 = 1 << table_log;
    let mut nb_bits = table_log + 1;
    let mut charnum = 0u32;
    let mut previous0 = false;

    while remaining > 1 && charnum <= max_symbol_value {
        if previous0 {
            let mut n0 = charnum;
            while bit_stream & 0xFFFF == 0xFFFF {
                n0 += 24;
                if ip + 5 < iend {
                    ip += 2;
                    bit_stream = read_le32(header, ip) >> (bit_count & 31);
                } else {
                    bit_stream >>= 16;
                    bit_count += 16;
                }
            }
            while bit_stream & 3 == 3 {
                n0 += 3;
                bit_stream >>= 2;
                bit_count += 2;
            }
            n0 += bit_stream & 3;
            bit_count += 2;

            if n0 > max_symbol_value {
                return Err(Error::MaxSymbolValueTooSmall {
                    required: n0,
                    provided: max_symbol_value,
                });
            }
            counter[charnum as usize..n0 as usize].fill(0);
            charnum = n0;

            if ip + 7 <= iend || ip + (bit_count as usize >> 3) + 4 <= iend {
                // The reload below may only step the cursor within one window.
                assert!(
                    bit_count >> 3 <= 3,
                    "zero-run resync would skip {} bytes",
                    bit_count >> 3
                );
                ip += (bit_count >> 3) as usize;
                bit_count &= 7;
                bit_stream = read_le32(header, ip) >> bit_count;
            } else {
                bit_stream >>= 2;
            }
        }

        let max = (2 * threshold - 1) - remaining;
        let mut count: i32;
        if (bit_stream & (threshold as u32 - 1)) < max as u32 {
            count = (bit_stream & (threshold as u32 - 1)) as i32;
            bit_count += nb_bits - 1;
        } else {
            count = (bit_stream & (2 * threshold as u32 - 1)) as i32;
            if count >= threshold {
                count -= max;
            }
            bit_count += nb_bits;
        }

        // Undo the +1 bias; -1 is a low-probability symbol worth one slot.
        count -= 1;
        remaining -= count.abs();
        counter[charnum as usize] = count as i16;
        charnum += 1;
        previous0 = count == 0;

        while remaining < threshold {
            nb_bits -= 1;
            threshold >>= 1;
        }

        if ip + 7 <= iend || ip + (bit_count as usize >> 3) + 4 <= iend {
            ip += (bit_count >> 3) as usize;
            bit_count &= 7;
        } else {
            bit_count -= (8 * (iend - 4 - ip)) as u32;
            ip = iend - 4;
        }
        bit_stream = read_le32(header, ip) >> (bit_count & 31);
    }

    if remaining != 1 {
        return Err(Error::corrupted("probability mass does not sum to table size"));
    }
    if bit_count > 32 {
        return Err(Error::corrupted("bitstream overruns header"));
    }

    ip += ((bit_count + 7) >> 3) as usize;

    Ok(NCountHeader {
        max_symbol_value: charnum - 1,
        table_log,
        header_size: ip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncount_core::ErrorCode;

    /// Pack `(value, width)` fields LSB-first.
    fn pack(fields: &[(u32, u32)]) -> Vec<u8> {
        let mut acc: u64 = 0;
        let mut nbits = 0u32;
        let mut out = Vec::new();
        for &(value, width) in fields {
            acc |= ((value as u64) & ((1u64 << width) - 1)) << nbits;
            nbits += width;
            while nbits >= 8 {
                out.push(acc as u8);
                acc >>= 8;
                nbits -= 8;
            }
        }
        if nbits > 0 {
            out.push(acc as u8);
        }
        out
    }

    #[test]
    fn test_two_equal_symbols() {
        // table_log 5, counts {16, 16}: 4 + 5 + 5 bits.
        let header = [0x10, 0x3F];
        let mut counter = [0i16; 256];
        let parsed = read_ncount(&mut counter, 255, &header).unwrap();

        assert_eq!(parsed.table_log, 5);
        assert_eq!(parsed.max_symbol_value, 1);
        assert_eq!(parsed.header_size, 2);
        assert_eq!(&counter[..2], &[16, 16]);
        assert!(counter[2..].iter().all(|&c| c == 0));
    }

    #[test]
    fn test_same_header_with_trailing_bytes() {
        // Long input takes the direct path; consumption is unchanged.
        let header = [0x10, 0x3F, 0xAB, 0xCD, 0xEF, 0x01, 0x23, 0x45];
        let mut counter = [0i16; 4];
        let parsed = read_ncount(&mut counter, 3, &header).unwrap();

        assert_eq!(parsed.header_size, 2);
        assert_eq!(parsed.max_symbol_value, 1);
        assert_eq!(counter, [16, 16, 0, 0]);
    }

    #[test]
    fn test_single_symbol_full_mass() {
        // One symbol holding all 32 slots: coded 33 + 30 = 63 in 6 bits.
        let header = pack(&[(0, 4), (63, 6)]);
        assert_eq!(header, vec![0xF0, 0x03]);

        let mut counter = [0i16; 8];
        let parsed = read_ncount(&mut counter, 7, &header).unwrap();
        assert_eq!(parsed.table_log, 5);
        assert_eq!(parsed.max_symbol_value, 0);
        assert_eq!(parsed.header_size, 2);
        assert_eq!(counter[0], 32);
    }

    #[test]
    fn test_zero_run_and_low_probability() {
        // table_log 5: symbol 0 = 0 (coded 1), zero run of 2 more,
        // symbol 3 = -1 (coded 0), symbol 4 = 31.
        //
        // sym0: remaining 33, threshold 32, max 30 -> 1 < 30, 5 bits.
        // run: 2-bit field = 2.
        // sym3: remaining 33, max 30 -> 0, 5 bits; remaining 32.
        // sym4: remaining 32, threshold 32, max 31 -> coded 32 >= 31,
        //       6 bits, 32 >= threshold so raw = 32 + 31 = 63.
        let header = pack(&[(0, 4), (1, 5), (2, 2), (0, 5), (63, 6)]);
        let mut counter = [7i16; 16];
        let parsed = read_ncount(&mut counter, 15, &header).unwrap();

        assert_eq!(parsed.table_log, 5);
        assert_eq!(parsed.max_symbol_value, 4);
        assert_eq!(parsed.header_size, header.len());
        assert_eq!(&counter[..5], &[0, 0, 0, -1, 31]);
        assert!(counter[5..].iter().all(|&c| c == 0));
    }

    #[test]
    fn test_long_zero_run_uses_escape_groups() {
        // sym0 = 0, then 24 + 3 + 1 = 28 more zeros, then sym29 = 32.
        let header = pack(&[(0, 4), (1, 5), (0xFFFF, 16), (3, 2), (1, 2), (63, 6)]);
        let mut counter = [0i16; 64];
        let parsed = read_ncount(&mut counter, 63, &header).unwrap();

        assert_eq!(parsed.max_symbol_value, 29);
        assert_eq!(counter[29], 32);
        assert!(counter[..29].iter().all(|&c| c == 0));
        assert_eq!(parsed.header_size, header.len());
    }

    #[test]
    fn test_zero_run_past_max_symbol() {
        let header = pack(&[(0, 4), (1, 5), (0xFFFF, 16), (3, 2), (1, 2), (63, 6)]);
        let mut counter = [0i16; 64];
        let err = read_ncount(&mut counter, 20, &header).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MaxSymbolValueTooSmall);
        assert_eq!(
            err,
            Error::MaxSymbolValueTooSmall {
                required: 29,
                provided: 20
            }
        );
    }

    #[test]
    fn test_table_log_too_large() {
        // Nibble 11 declares table_log 16.
        for len in [1usize, 4, 8] {
            let mut header = vec![0u8; len];
            header[0] = 0x0B;
            let mut counter = [0i16; 256];
            let err = read_ncount(&mut counter, 255, &header).unwrap_err();
            assert_eq!(
                err,
                Error::TableLogTooLarge {
                    table_log: 16,
                    max: 15
                },
                "input length {}",
                len
            );
        }
    }

    #[test]
    fn test_table_log_absolute_max_is_accepted() {
        // Nibble 10 -> table_log 15; one symbol with all mass.
        // remaining 2^15 + 1, max = 2^15 - 2, coded 2^15 + 1 + max = 2^16 - 1.
        let header = pack(&[(10, 4), (0xFFFF, 16)]);
        let mut counter = [0i16; 2];
        let parsed = read_ncount(&mut counter, 1, &header).unwrap();
        assert_eq!(parsed.table_log, 15);
        assert_eq!(parsed.max_symbol_value, 0);
        assert_eq!(parsed.header_size, 3);
        // 32768 does not fit an i16 and wraps, as it does in the reference.
        assert_eq!(counter[0], i16::MIN);
    }

    #[test]
    fn test_empty_input_is_corrupt() {
        let mut counter = [0i16; 256];
        let err = read_ncount(&mut counter, 255, &[]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CorruptionDetected);
    }

    #[test]
    fn test_all_zero_window_is_corrupt() {
        let mut counter = [0i16; 256];
        let err = read_ncount(&mut counter, 255, &[0, 0, 0, 0]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CorruptionDetected);
    }

    #[test]
    fn test_truncated_short_header() {
        // The two-symbol header needs 2 bytes; the first alone is not enough.
        let mut counter = [0i16; 256];
        let err = read_ncount(&mut counter, 255, &[0x10]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CorruptionDetected);
    }

    #[test]
    fn test_short_header_claiming_missing_bytes() {
        // {16, 12, -1, -1, -1, -1} at table_log 5 takes 20 bits; the last
        // byte is all zero, so dropping it still decodes but claims 3 bytes.
        let header = [0x10, 0x1B, 0x00];
        let mut counter = [0i16; 256];
        let parsed = read_ncount(&mut counter, 255, &header).unwrap();
        assert_eq!(parsed.header_size, 3);
        assert_eq!(parsed.max_symbol_value, 5);
        assert_eq!(&counter[..6], &[16, 12, -1, -1, -1, -1]);

        let err = read_ncount(&mut counter, 255, &header[..2]).unwrap_err();
        assert_eq!(err, Error::corrupted("header truncated"));
    }

    #[test]
    fn test_mass_not_closed() {
        // Symbols run out (max_symbol_value 0) before the mass closes.
        let header = [0x10, 0x3F, 0, 0];
        let mut counter = [0i16; 1];
        let err = read_ncount(&mut counter, 0, &header).unwrap_err();
        assert_eq!(
            err,
            Error::corrupted("probability mass does not sum to table size")
        );
        assert_eq!(counter[0], 16);
    }

    #[test]
    fn test_counter_too_small() {
        let mut counter = [0i16; 4];
        let err = read_ncount(&mut counter, 4, &[0x10, 0x3F, 0, 0]).unwrap_err();
        assert_eq!(err, Error::dst_too_small(5, 4));
    }

    #[test]
    fn test_clears_stale_counter_entries() {
        let mut counter = [99i16; 8];
        read_ncount(&mut counter, 5, &[0x10, 0x3F]).unwrap();
        assert_eq!(counter, [16, 16, 0, 0, 0, 0, 99, 99]);
    }

    #[test]
    fn test_status_channel() {
        let mut counter = [0i16; 256];
        let mut max_sv = 255;
        let mut table_log = 0;
        let status = read_ncount_status(&mut counter, &mut max_sv, &mut table_log, &[0x10, 0x3F]);
        assert!(!status.is_error());
        assert_eq!(status.bytes_consumed(), Some(2));
        assert_eq!((max_sv, table_log), (1, 5));

        let mut max_sv = 255;
        let mut table_log = 0;
        let status = read_ncount_status(&mut counter, &mut max_sv, &mut table_log, &[0x0B]);
        assert!(status.is_error());
        assert_eq!(status.error_code(), Some(ErrorCode::TableLogTooLarge));
        assert_eq!((max_sv, table_log), (255, 0));
    }
}
