//! Raw buffer files exchanged with the caller.
//!
//! Every scalar and array is stored little-endian with no framing:
//!
//! | file             | contents                            |
//! |------------------|-------------------------------------|
//! | counter          | `i16` x (`max_symbol_value` + 1)    |
//! | max symbol value | `u32`                               |
//! | table log        | `u32`                               |
//! | header           | raw header bytes                    |
//! | header size      | `u64`                               |
//! | status           | `u64` status code (written only)    |

use std::fs;
use std::path::Path;

use crate::error::{Result, RunnerError};

fn read_all(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| RunnerError::io(path, e))
}

fn write_all(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| RunnerError::io(path, e))
}

fn read_exact<const N: usize>(path: &Path, what: &'static str) -> Result<[u8; N]> {
    let bytes = read_all(path)?;
    bytes.as_slice().try_into().map_err(|_| {
        RunnerError::format(what, path, format!("expected {} bytes, found {}", N, bytes.len()))
    })
}

/// Read a `u32` scalar file.
pub fn read_u32(path: impl AsRef<Path>, what: &'static str) -> Result<u32> {
    read_exact::<4>(path.as_ref(), what).map(u32::from_le_bytes)
}

/// Read a `u64` scalar file.
pub fn read_u64(path: impl AsRef<Path>, what: &'static str) -> Result<u64> {
    read_exact::<8>(path.as_ref(), what).map(u64::from_le_bytes)
}

pub fn write_u32(path: impl AsRef<Path>, value: u32) -> Result<()> {
    write_all(path.as_ref(), &value.to_le_bytes())
}

pub fn write_u64(path: impl AsRef<Path>, value: u64) -> Result<()> {
    write_all(path.as_ref(), &value.to_le_bytes())
}

/// Read `entries` counter slots.
///
/// Extra trailing bytes are ignored; a short file is a format error.
pub fn read_counter(path: impl AsRef<Path>, entries: usize) -> Result<Vec<i16>> {
    let path = path.as_ref();
    let bytes = read_all(path)?;
    let needed = entries.checked_mul(2).filter(|&n| n <= bytes.len()).ok_or_else(|| {
        RunnerError::format(
            "counter",
            path,
            format!("need {} entries, file holds {}", entries, bytes.len() / 2),
        )
    })?;

    Ok(bytes[..needed]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

pub fn write_counter(path: impl AsRef<Path>, counter: &[i16]) -> Result<()> {
    let bytes: Vec<u8> = counter.iter().flat_map(|c| c.to_le_bytes()).collect();
    write_all(path.as_ref(), &bytes)
}

/// Read the header bytes.
pub fn read_header(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    read_all(path.as_ref())
}
