//! The packed value: an unsigned integer of unbounded width.

use std::fmt;

use crate::bits;

/// Unsigned integer holding every field slot of an encoded record.
///
/// Stored as little-endian 64-bit words. High zero words are not significant,
/// so two values compare equal whenever their numeric values are equal.
#[derive(Clone, Default)]
pub struct Packed {
    words: Vec<u64>,
}

impl Packed {
    /// The value zero.
    pub fn zero() -> Self {
        Packed { words: Vec::new() }
    }

    /// Zero, with room for `bits` bits preallocated.
    pub fn with_capacity(bits: usize) -> Self {
        Packed {
            words: Vec::with_capacity(bits::words_for_bits(bits)),
        }
    }

    /// Builds a value from little-endian words.
    pub fn from_words(words: Vec<u64>) -> Self {
        Packed { words }
    }

    /// Little-endian words, possibly including high zero words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn is_zero(&self) -> bool {
        self.significant_words().is_empty()
    }

    /// Number of significant bits (0 for zero).
    pub fn bit_len(&self) -> usize {
        match self.significant_words().split_last() {
            Some((top, rest)) => rest.len() * 64 + (64 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Returns the value as `u128` if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        match self.significant_words() {
            [] => Some(0),
            [lo] => Some(*lo as u128),
            [lo, hi] => Some(((*hi as u128) << 64) | *lo as u128),
            _ => None,
        }
    }

    /// Reads `width` bits (max 64) at `offset`.
    pub fn read(&self, offset: usize, width: usize) -> u64 {
        bits::read_bits_at(&self.words, offset, width)
    }

    /// ORs the low `width` bits of `slot` in at `offset`.
    pub fn or_slot(&mut self, offset: usize, width: usize, slot: u64) {
        bits::or_bits_at(&mut self.words, offset, width, slot);
    }

    fn significant_words(&self) -> &[u64] {
        let len = self
            .words
            .iter()
            .rposition(|w| *w != 0)
            .map_or(0, |i| i + 1);
        &self.words[..len]
    }
}

impl PartialEq for Packed {
    fn eq(&self, other: &Self) -> bool {
        self.significant_words() == other.significant_words()
    }
}

impl Eq for Packed {}

impl std::hash::Hash for Packed {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl From<u64> for Packed {
    fn from(value: u64) -> Self {
        Packed { words: vec![value] }
    }
}

impl From<u128> for Packed {
    fn from(value: u128) -> Self {
        Packed {
            words: vec![value as u64, (value >> 64) as u64],
        }
    }
}

impl fmt::Debug for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Packed({:#x})", self)
    }
}

impl fmt::Binary for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = self.significant_words();
        let mut digits = String::new();
        match words.split_last() {
            None => digits.push('0'),
            Some((top, rest)) => {
                digits.push_str(&format!("{:b}", top));
                for w in rest.iter().rev() {
                    digits.push_str(&format!("{:064b}", w));
                }
            }
        }
        f.pad_integral(true, "0b", &digits)
    }
}

impl fmt::LowerHex for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = self.significant_words();
        let mut digits = String::new();
        match words.split_last() {
            None => digits.push('0'),
            Some((top, rest)) => {
                digits.push_str(&format!("{:x}", top));
                for w in rest.iter().rev() {
                    digits.push_str(&format!("{:016x}", w));
                }
            }
        }
        f.pad_integral(true, "0x", &digits)
    }
}
