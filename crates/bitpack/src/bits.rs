//! Low-level bit read and write utilities over little-endian `u64` limbs.
//!
//! Bits are addressed LSB-first: bit 0 is the low bit of the first word, bit 64
//! the low bit of the second. Reads past the last word see zeros.

/// Returns the mask covering the low `n` bits (`n` in `0..=64`).
pub fn low_mask(n: usize) -> u64 {
    debug_assert!(n <= 64);
    if n >= 64 { u64::MAX } else { (1u64 << n) - 1 }
}

/// Number of 64-bit words needed to hold `bits` bits.
pub fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(64)
}

/// Reads `n` bits (max 64) starting at `bit_pos` as an unsigned value.
pub fn read_bits_at(words: &[u64], bit_pos: usize, n: usize) -> u64 {
    debug_assert!(n <= 64);
    if n == 0 {
        return 0;
    }

    let index = bit_pos / 64;
    let shift = bit_pos % 64;

    let mut value = words.get(index).copied().unwrap_or(0) >> shift;
    if shift != 0 && shift + n > 64 {
        value |= words.get(index + 1).copied().unwrap_or(0) << (64 - shift);
    }

    value & low_mask(n)
}

/// ORs the low `n` bits of `value` into `words` at `bit_pos`, growing `words` as needed.
///
/// Bits of `value` above `n` are discarded. Existing bits in the range are not cleared.
pub fn or_bits_at(words: &mut Vec<u64>, bit_pos: usize, n: usize, value: u64) {
    debug_assert!(n <= 64);
    let value = value & low_mask(n);
    if value == 0 {
        return;
    }

    let end = bit_pos + n;
    if words.len() < words_for_bits(end) {
        words.resize(words_for_bits(end), 0);
    }

    let index = bit_pos / 64;
    let shift = bit_pos % 64;

    words[index] |= value << shift;
    if shift != 0 && shift + n > 64 {
        words[index + 1] |= value >> (64 - shift);
    }
}

/// Sign-extends the low `bits` of `value` to a full `i64`.
pub fn sign_extend(value: u64, bits: usize) -> i64 {
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(6), 0x3F);
        assert_eq!(low_mask(64), u64::MAX);
    }

    #[test]
    fn test_read_bits_at() {
        let words = [0b1011_0000];
        assert_eq!(read_bits_at(&words, 4, 4), 0b1011);
    }

    #[test]
    fn test_read_bits_across_words() {
        let words = [0xF000_0000_0000_0000, 0x0000_0000_0000_000A];
        assert_eq!(read_bits_at(&words, 60, 8), 0xAF);
    }

    #[test]
    fn test_read_bits_past_end() {
        let words = [u64::MAX];
        assert_eq!(read_bits_at(&words, 60, 8), 0x0F);
        assert_eq!(read_bits_at(&words, 128, 8), 0);
    }

    #[test]
    fn test_or_bits_grows() {
        let mut words = Vec::new();
        or_bits_at(&mut words, 110, 32, 0xDEAD_BEEF);
        assert_eq!(words.len(), 3);
        assert_eq!(read_bits_at(&words, 110, 32), 0xDEAD_BEEF);
    }

    #[test]
    fn test_or_bits_truncates() {
        let mut words = Vec::new();
        or_bits_at(&mut words, 0, 8, 300);
        assert_eq!(words, vec![44]);
    }

    #[test]
    fn test_or_zero_does_not_grow() {
        let mut words = Vec::new();
        or_bits_at(&mut words, 200, 8, 0);
        assert!(words.is_empty());
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0b11111111, 8), -1);
        assert_eq!(sign_extend(0b011111, 6), 31);
        assert_eq!(sign_extend(1, 1), -1);
    }
}
