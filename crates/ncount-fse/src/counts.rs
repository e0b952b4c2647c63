//! Owned normalized distributions.

use ncount_core::{Error, Result};
use serde::Serialize;

use crate::header::read_ncount;
use crate::params::FSE_MAX_SYMBOL_VALUE;

/// A normalized symbol distribution decoded from an NCount header.
///
/// `counts[s]` is the number of table slots for symbol `s`; `-1` marks a
/// low-probability symbol that still occupies one slot, and `0` an absent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedCounts {
    counts: Vec<i16>,
    table_log: u32,
}

impl NormalizedCounts {
    /// Parse a header accepting symbols up to `max_symbol_value`.
    ///
    /// Returns the distribution and the number of header bytes consumed.
    pub fn parse(header: &[u8], max_symbol_value: u32) -> Result<(Self, usize)> {
        if max_symbol_value > FSE_MAX_SYMBOL_VALUE {
            return Err(Error::MaxSymbolValueTooLarge {
                value: max_symbol_value,
                max: FSE_MAX_SYMBOL_VALUE,
            });
        }

        let mut counter = vec![0i16; max_symbol_value as usize + 1];
        let parsed = read_ncount(&mut counter, max_symbol_value, header)?;
        counter.truncate(parsed.max_symbol_value as usize + 1);

        Ok((
            Self {
                counts: counter,
                table_log: parsed.table_log,
            },
            parsed.header_size,
        ))
    }

    /// Per-symbol counts, indexed by symbol.
    #[inline]
    pub fn counts(&self) -> &[i16] {
        &self.counts
    }

    #[inline]
    pub fn table_log(&self) -> u32 {
        self.table_log
    }

    /// Highest symbol index present.
    #[inline]
    pub fn max_symbol_value(&self) -> u32 {
        (self.counts.len() - 1) as u32
    }

    /// Number of slots the counts are normalized to.
    #[inline]
    pub fn table_size(&self) -> u32 {
        1 << self.table_log
    }

    /// Total slots occupied, counting each `-1` as one.
    ///
    /// Equals [`Self::table_size`] for every successfully decoded header.
    pub fn mass(&self) -> u32 {
        self.counts.iter().map(|&c| c.unsigned_abs() as u32).sum()
    }

    /// Symbols marked with a "less than one" probability.
    pub fn low_probability_symbols(&self) -> impl Iterator<Item = u32> + '_ {
        self.symbols_where(|c| c == -1)
    }

    /// Symbols with a nonzero count.
    pub fn present_symbols(&self) -> impl Iterator<Item = u32> + '_ {
        self.symbols_where(|c| c != 0)
    }

    fn symbols_where(
        &self,
        pred: impl Fn(i16) -> bool + 'static,
    ) -> impl Iterator<Item = u32> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| pred(c))
            .map(|(s, _)| s as u32)
    }
}
