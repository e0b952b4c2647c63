//! Little-endian word access.

/// Whether the host stores integers least-significant byte first.
#[inline]
pub const fn is_little_endian() -> bool {
    cfg!(target_endian = "little")
}

/// Reverse the byte order of a 32-bit word.
#[inline]
pub const fn swap32(value: u32) -> u32 {
    value.swap_bytes()
}

/// Read a little-endian `u32` at `offset`.
///
/// Bytes past the end of `buf` read as zero, so the window may slide up to
/// (and past) the end of the buffer without a bounds failure.
#[inline]
pub fn read_le32(buf: &[u8], offset: usize) -> u32 {
    if let Some(bytes) = offset
        .checked_add(4)
        .and_then(|end| buf.get(offset..end))
    {
        return u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    let mut word = [0u8; 4];
    if offset < buf.len() {
        let tail = &buf[offset..];
        word[..tail.len()].copy_from_slice(tail);
    }
    u32::from_le_bytes(word)
}
