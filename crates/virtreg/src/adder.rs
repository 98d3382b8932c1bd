use crate::{
    WIDTH,
    bits::{Bits, SIGN_BIT, is_magnitude_zero},
};

/// Sum bit by number of set inputs.
const SUM: [bool; 4] = [false, true, false, true];
/// Carry bit by number of set inputs.
const CARRY: [bool; 4] = [false, false, true, true];

/// Adds three bits, returns `(sum, carry)`.
#[inline]
pub(crate) fn full_adder(a: bool, b: bool, c: bool) -> (bool, bool) {
    let n = usize::from(a) + usize::from(b) + usize::from(c);
    (SUM[n], CARRY[n])
}

/// `accumulator += operand + carry_in` over the full register width,
/// one bit at a time. Returns the carry out of the sign bit.
pub(crate) fn ripple_carry(operand: &Bits, accumulator: &mut Bits, carry_in: bool) -> bool {
    let mut carry = carry_in;
    for i in 0..WIDTH {
        let (sum, carry_out) = full_adder(operand[i], accumulator[i], carry);
        accumulator.set(i, sum);
        carry = carry_out;
    }
    carry
}

/// Two's-complement addition of `operand` into `accumulator`.
///
/// Returns `true` on overflow: both addends had the same sign and either the
/// sign flipped or the result is the negative-zero pattern (sign set, every
/// numerical bit clear).
pub(crate) fn add_signed(operand: &Bits, accumulator: &mut Bits, carry_in: bool) -> bool {
    let sign_a = operand[SIGN_BIT];
    let same_sign = sign_a == accumulator[SIGN_BIT];

    ripple_carry(operand, accumulator, carry_in);

    let sign = accumulator[SIGN_BIT];
    same_sign && (sign != sign_a || (sign && is_magnitude_zero(accumulator)))
}
