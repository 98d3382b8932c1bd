use std::io::{self, Write};

use crate::{
    PowerTable,
    adder::{add_signed, ripple_carry},
    bits::{Bits, SIGN_BIT, complement, is_magnitude_zero, load_magnitude},
};

/// Fixed-point accumulator register.
///
/// Stores a signed two's-complement value with
/// [`INTEGER_BITS`](crate::INTEGER_BITS) integer and
/// [`FRACTION_BITS`](crate::FRACTION_BITS) fractional bits. Values are
/// truncated toward zero when loaded; after that every addition is exact
/// until the register overflows.
///
/// Equality compares the accumulated bit pattern, not the numeric value of
/// some rounding of it.
#[derive(Clone)]
pub struct Register<'t> {
    table: &'t PowerTable,
    /// scratch for the value being added
    operand: Bits,
    accumulator: Bits,
}

impl<'t> Register<'t> {
    /// Zero-valued register.
    #[inline]
    pub const fn new(table: &'t PowerTable) -> Self {
        Self {
            table,
            operand: Bits::ZERO,
            accumulator: Bits::ZERO,
        }
    }

    /// Register seeded with `value`, truncated to the register's resolution.
    ///
    /// Magnitudes beyond the representable range are truncated too, so they
    /// saturate at [`PowerTable::max`].
    pub fn with_value(table: &'t PowerTable, value: f64) -> Self {
        let mut reg = Self::new(table);
        reg.add(value);
        reg
    }

    #[inline]
    pub const fn table(&self) -> &'t PowerTable {
        self.table
    }

    /// Adds `value` to the register.
    ///
    /// Returns `true` if the addition overflowed, in which case the register
    /// holds the wrapped-around bit pattern.
    pub fn add(&mut self, value: f64) -> bool {
        // NaN takes the negative branch and adds nothing
        let negative = value.is_nan() || value < 0.0;
        load_magnitude(&mut self.operand, self.table, value.abs());
        if negative {
            complement(&mut self.operand);
        }

        let carry_in = self.operand[SIGN_BIT];
        let overflow = add_signed(&self.operand, &mut self.accumulator, carry_in);
        tracing::trace!(value, overflow, "add");
        if overflow {
            tracing::debug!(value, "register overflow");
        }
        overflow
    }

    /// Same as [`Self::add`].
    #[inline]
    pub fn plus(&mut self, value: f64) -> bool {
        self.add(value)
    }

    /// Subtracts `value` from the register, returns `true` on overflow.
    #[inline]
    pub fn subtract(&mut self, value: f64) -> bool {
        self.add(-value)
    }

    /// Same as [`Self::subtract`].
    #[inline]
    pub fn minus(&mut self, value: f64) -> bool {
        self.subtract(value)
    }

    /// Adds the value held by `other`, returns `true` on overflow.
    pub fn add_register(&mut self, other: &Register<'_>) -> bool {
        self.operand = other.accumulator;
        let overflow = add_signed(&self.operand, &mut self.accumulator, false);
        if overflow {
            tracing::debug!("register overflow adding register");
        }
        overflow
    }

    /// Subtracts the value held by `other`, returns `true` on overflow.
    pub fn subtract_register(&mut self, other: &Register<'_>) -> bool {
        self.operand = other.accumulator;
        complement(&mut self.operand);
        let overflow = add_signed(&self.operand, &mut self.accumulator, true);
        if overflow {
            tracing::debug!("register overflow subtracting register");
        }
        overflow
    }

    /// Current value, rounded to the nearest `f64` only at this point.
    pub fn value(&self) -> f64 {
        if !self.is_negative() {
            return self.table.weigh(&self.accumulator);
        }

        let mut magnitude = self.accumulator;
        complement(&mut magnitude);
        ripple_carry(&Bits::ZERO, &mut magnitude, true);
        magnitude.set(SIGN_BIT, false);
        -self.table.weigh(&magnitude)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.accumulator[SIGN_BIT]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.is_negative() && is_magnitude_zero(&self.accumulator)
    }

    /// Writes the bit pattern, see [`Self::print_bits`].
    pub fn write_bits<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "Current register binary:  {self:b}")
    }

    /// Prints the bit pattern to stdout, sign bit first, with a radix point
    /// after the unit bit.
    pub fn print_bits(&self) {
        println!("Current register binary:  {self:b}");
    }

    #[inline]
    pub(crate) const fn bits(&self) -> &Bits {
        &self.accumulator
    }
}

impl Default for Register<'static> {
    #[inline]
    fn default() -> Self {
        Self::new(PowerTable::global())
    }
}

impl From<f64> for Register<'static> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::with_value(PowerTable::global(), value)
    }
}

/// Bit-exact: the operand scratch buffer is not part of the value.
impl PartialEq<Register<'_>> for Register<'_> {
    #[inline]
    fn eq(&self, other: &Register<'_>) -> bool {
        self.accumulator == other.accumulator
    }
}

impl Eq for Register<'_> {}
