//! Exact fixed-point accumulator for `f64` values.
//!
//! A [`Register`] holds a signed two's-complement number with
//! [`INTEGER_BITS`] integer bits and [`FRACTION_BITS`] fractional bits.
//! Every addition is exact up to the register's resolution, so sums of
//! values with wildly different magnitudes do not lose the small terms:
//!
//! ```
//! let mut reg = virtreg::Register::default();
//! reg.add(1.0);
//! reg.add(1.0e-50);
//! reg.add(-1.0);
//! assert_eq!(reg.value(), 1.0e-50);
//! ```

mod adder;
mod bits;
mod fmt;
mod ops;
mod register;
mod table;

use std::io::{self, Write};

pub use self::{fmt::*, register::*, table::*};

/// Number of integer bits.
pub const INTEGER_BITS: usize = 1000;

/// Number of fractional bits.
pub const FRACTION_BITS: usize = 1000;

/// Number of numerical (non-sign) bits.
pub const NUMERICAL_BITS: usize = INTEGER_BITS + FRACTION_BITS;

/// Full register width, sign bit included.
pub const WIDTH: usize = NUMERICAL_BITS + 1;

pub const OVERFLOW_WARNING: &str = "Warning: virtual register overflow";

/// Builds the process-wide [`PowerTable`] if needed and returns it.
#[inline]
pub fn init() -> &'static PowerTable {
    PowerTable::global()
}

/// Smallest representable positive magnitude.
#[inline]
pub fn min() -> f64 {
    PowerTable::global().min()
}

/// Largest representable magnitude.
#[inline]
pub fn max() -> f64 {
    PowerTable::global().max()
}

pub fn write_overflow_warning<W: Write>(mut w: W) -> io::Result<()> {
    writeln!(w, "{OVERFLOW_WARNING}")
}

/// Prints [`OVERFLOW_WARNING`] to stdout. Never called by the register itself.
pub fn print_overflow_warning() {
    println!("{OVERFLOW_WARNING}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_warning() {
        let mut out = Vec::new();
        write_overflow_warning(&mut out).unwrap();
        assert_eq!(out, b"Warning: virtual register overflow\n");
        print_overflow_warning();
    }

    #[test]
    fn init_is_idempotent() {
        assert!(core::ptr::eq(init(), init()));
        assert_eq!(min(), init().min());
        assert_eq!(max(), init().max());
    }
}
