use core::iter;
use std::sync::LazyLock;

use crate::{FRACTION_BITS, INTEGER_BITS, NUMERICAL_BITS, bits::Bits};

static GLOBAL: LazyLock<PowerTable> = LazyLock::new(PowerTable::new);

/// Weight of every numerical bit of a register, as `f64`.
///
/// Built once and read-only afterwards. Every [`Register`](crate::Register)
/// borrows the table it was created with.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerTable {
    weights: Box<[f64]>,
    min: f64,
    max: f64,
}

impl PowerTable {
    /// Index of the bit with weight `1.0`.
    pub const UNIT_BIT: usize = FRACTION_BITS;

    pub fn new() -> Self {
        // doubling upward from the unit bit, halving downward
        let fraction = iter::successors(Some(0.5_f64), |w| Some(w / 2.0)).take(FRACTION_BITS);
        let integer = iter::successors(Some(1.0_f64), |w| Some(w * 2.0)).take(INTEGER_BITS);

        let mut weights: Vec<f64> = fraction.collect();
        weights.reverse();
        weights.extend(integer);
        debug_assert_eq!(weights.len(), NUMERICAL_BITS);

        let min = weights[0];
        let max: f64 = weights.iter().sum();
        tracing::debug!(min, max, "power table built");

        Self {
            weights: weights.into_boxed_slice(),
            min,
            max,
        }
    }

    /// Process-wide table, built on first use.
    #[inline]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Smallest representable positive magnitude.
    #[inline]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest representable magnitude.
    #[inline]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Weight of numerical bit `bit`, or `None` past the last numerical bit.
    #[inline]
    pub fn weight(&self, bit: usize) -> Option<f64> {
        self.weights.get(bit).copied()
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of the weights of the set numerical bits, lowest bit first.
    pub(crate) fn weigh(&self, bits: &Bits) -> f64 {
        bits[..NUMERICAL_BITS]
            .iter_ones()
            .map(|i| self.weights[i])
            .fold(0.0, |sum, w| sum + w)
    }
}

impl Default for PowerTable {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn pow2(exp: i32) -> f64 {
        f64::from_bits(u64::try_from(1023 + exp).unwrap() << 52)
    }

    #[test]
    fn extremes() {
        let table = PowerTable::new();
        assert_eq!(table.min(), pow2(-1000));
        // 2^1000 - 2^-1000 rounds to 2^1000
        assert_eq!(table.max(), pow2(1000));
        assert!(table.max().is_finite());
    }

    #[test]
    fn strictly_increasing() {
        let table = PowerTable::new();
        assert_eq!(table.weights().len(), NUMERICAL_BITS);
        assert!(table.weights().windows(2).all(|w| w[0] < w[1]));
    }

    #[rstest]
    #[case(0, -1000)]
    #[case(999, -1)]
    #[case(PowerTable::UNIT_BIT, 0)]
    #[case(1001, 1)]
    #[case(1999, 999)]
    fn weight(#[case] bit: usize, #[case] exp: i32) {
        assert_eq!(PowerTable::new().weight(bit), Some(pow2(exp)));
    }

    #[test]
    fn no_weight_for_sign_bit() {
        assert_eq!(PowerTable::new().weight(NUMERICAL_BITS), None);
    }

    #[test]
    fn global_matches_fresh() {
        assert_eq!(PowerTable::global(), &PowerTable::default());
    }
}
