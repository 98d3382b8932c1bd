use bitvec::{array::BitArray, order::Lsb0};

use crate::{NUMERICAL_BITS, PowerTable, WIDTH};

#[allow(clippy::as_conversions)]
const WORDS: usize = WIDTH.div_ceil(u64::BITS as usize);

/// Register bit buffer. Only the low [`WIDTH`] bits are used, the rest stay clear.
pub(crate) type Bits = BitArray<[u64; WORDS], Lsb0>;

pub(crate) const SIGN_BIT: usize = NUMERICAL_BITS;

/// Greedy base-2 decomposition of a non-negative `value` into `bits`,
/// truncating anything below the resolution of `table`.
///
/// Whatever does not fit above the top bit is dropped silently.
pub(crate) fn load_magnitude(bits: &mut Bits, table: &PowerTable, value: f64) {
    bits.set(SIGN_BIT, false);

    let mut residual = value;
    for (i, &weight) in table.weights().iter().enumerate().rev() {
        let keep = residual - weight >= 0.0;
        if keep {
            residual -= weight;
        }
        bits.set(i, keep);
    }
}

/// One's complement over the full register width.
pub(crate) fn complement(bits: &mut Bits) {
    for mut bit in bits[..WIDTH].iter_mut() {
        *bit = !*bit;
    }
}

#[inline]
pub(crate) fn is_magnitude_zero(bits: &Bits) -> bool {
    bits[..NUMERICAL_BITS].not_any()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn loaded(value: f64) -> Bits {
        let mut bits = Bits::ZERO;
        load_magnitude(&mut bits, PowerTable::global(), value);
        bits
    }

    #[rstest]
    #[case(0.0, &[])]
    #[case(1.0, &[PowerTable::UNIT_BIT])]
    #[case(0.5, &[PowerTable::UNIT_BIT - 1])]
    #[case(3.0, &[PowerTable::UNIT_BIT, PowerTable::UNIT_BIT + 1])]
    #[case(0.75, &[PowerTable::UNIT_BIT - 2, PowerTable::UNIT_BIT - 1])]
    #[case(5.25, &[PowerTable::UNIT_BIT - 2, PowerTable::UNIT_BIT, PowerTable::UNIT_BIT + 2])]
    fn greedy(#[case] value: f64, #[case] ones: &[usize]) {
        let bits = loaded(value);
        assert_eq!(bits.iter_ones().collect::<Vec<_>>(), ones);
    }

    #[test]
    fn truncates_below_resolution() {
        let table = PowerTable::global();
        assert!(is_magnitude_zero(&loaded(table.min() * 0.75)));
        assert_eq!(loaded(table.min() * 1.75).iter_ones().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn saturates_above_range() {
        let bits = loaded(f64::INFINITY);
        assert_eq!(bits.count_ones(), NUMERICAL_BITS);
        assert!(!bits[SIGN_BIT]);
    }

    #[test]
    fn overwrites_previous_contents() {
        let mut bits = loaded(7.0);
        load_magnitude(&mut bits, PowerTable::global(), 0.5);
        assert_eq!(bits, loaded(0.5));
    }

    #[test]
    fn complement_keeps_padding_clear() {
        let mut bits = Bits::ZERO;
        complement(&mut bits);
        assert_eq!(bits.count_ones(), WIDTH);
        assert!(bits[WIDTH..].not_any());
    }
}
