//! Test support: a reference NCount writer and distribution builders.
#![allow(dead_code)]

/// LSB-first bit packer.
struct BitPacker {
    out: Vec<u8>,
    acc: u64,
    nbits: u32,
}

impl BitPacker {
    fn new() -> Self {
        Self {
            out: Vec::new(),
            acc: 0,
            nbits: 0,
        }
    }

    fn put(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32);
        self.acc |= ((value as u64) & ((1u64 << width) - 1)) << self.nbits;
        self.nbits += width;
        while self.nbits >= 8 {
            self.out.push(self.acc as u8);
            self.acc >>= 8;
            self.nbits -= 8;
        }
    }

    fn finish(mut self) -> Vec<u8> {
        if self.nbits > 0 {
            self.out.push(self.acc as u8);
        }
        self.out
    }
}

/// Serialize `normalized` the way the reference encoder does.
///
/// `normalized` must sum to `2^table_log` with each `-1` counting as one.
/// Returns `None` for distributions the reference encoder rejects.
pub fn write_ncount(normalized: &[i16], table_log: u32) -> Option<Vec<u8>> {
    let alphabet = normalized.len();
    let mut bits = BitPacker::new();
    bits.put(table_log - 5, 4);

    let mut nb_bits = table_log + 1;
    let mut remaining: i32 = (1 << table_log) + 1;
    let mut threshold: i32 = 1 << table_log;
    let mut symbol = 0usize;
    let mut previous0 = false;

    while symbol < alphabet && remaining > 1 {
        if previous0 {
            let mut start = symbol;
            while symbol < alphabet && normalized[symbol] == 0 {
                symbol += 1;
            }
            if symbol == alphabet {
                return None;
            }
            while symbol >= start + 24 {
                start += 24;
                bits.put(0xFFFF, 16);
            }
            while symbol >= start + 3 {
                start += 3;
                bits.put(3, 2);
            }
            bits.put((symbol - start) as u32, 2);
        }

        let mut count = normalized[symbol] as i32;
        symbol += 1;
        let max = (2 * threshold - 1) - remaining;
        remaining -= count.abs();
        count += 1;
        if count >= threshold {
            count += max;
        }
        let width = if count < max { nb_bits - 1 } else { nb_bits };
        bits.put(count as u32, width);
        previous0 = count == 1;
        if remaining < 1 {
            return None;
        }
        while remaining < threshold {
            nb_bits -= 1;
            threshold >>= 1;
        }
    }

    if remaining != 1 {
        return None;
    }
    Some(bits.finish())
}

/// Build a valid distribution over `2^table_log` slots from arbitrary picks.
///
/// Each pick is `(kind, value)`: kind 0 emits an absent symbol, kind 1 a
/// low-probability `-1`, anything else a positive share of what remains.
/// Shares are capped at `i16::MAX`. Leftover mass goes to trailing symbols,
/// so the last entry is never zero.
pub fn build_distribution(table_log: u32, picks: &[(u8, u16)]) -> Vec<i16> {
    let mut remaining: i32 = 1 << table_log;
    let mut counts = Vec::new();

    for &(kind, value) in picks {
        if remaining == 0 {
            break;
        }
        match kind % 4 {
            0 => counts.push(0),
            1 => {
                counts.push(-1);
                remaining -= 1;
            }
            _ => {
                let share = (1 + value as i32 % remaining).min(i16::MAX as i32);
                counts.push(share as i16);
                remaining -= share;
            }
        }
    }
    while remaining > 0 {
        let share = remaining.min(i16::MAX as i32);
        counts.push(share as i16);
        remaining -= share;
    }
    counts
}

/// Slots a distribution occupies, `-1` counting as one.
pub fn slot_sum(counts: &[i16]) -> u32 {
    counts.iter().map(|&c| c.unsigned_abs() as u32).sum()
}
