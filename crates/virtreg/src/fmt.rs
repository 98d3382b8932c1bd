use core::{
    fmt::{self, Binary, Debug, Display, LowerExp},
    num::ParseFloatError,
    str::FromStr,
};

use thiserror::Error as ThisError;

use crate::{NUMERICAL_BITS, PowerTable, Register};

impl Display for Register<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl LowerExp for Register<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        LowerExp::fmt(&self.value(), f)
    }
}

impl Debug for Register<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Register")
            .field("value", &self.value())
            .field("negative", &self.is_negative())
            .finish_non_exhaustive()
    }
}

/// Sign bit and integer bits, `.`, then fractional bits.
impl Binary for Register<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.bits();
        for i in (0..=NUMERICAL_BITS).rev() {
            f.write_str(if bits[i] { "1" } else { "0" })?;
            if i == PowerTable::UNIT_BIT {
                f.write_str(".")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Register<'static> {
    type Err = ParseRegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse()?;
        if !value.is_finite() {
            return Err(ParseRegisterError::NonFinite(value));
        }
        Ok(Self::from(value))
    }
}

#[derive(Debug, ThisError)]
pub enum ParseRegisterError {
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    #[error("non-finite value: {0}")]
    NonFinite(f64),
}
