use core::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::{CheckedAdd, CheckedSub, Zero};

use crate::{PowerTable, Register};

impl AddAssign<f64> for Register<'_> {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        Register::add(self, rhs);
    }
}

impl SubAssign<f64> for Register<'_> {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        Register::subtract(self, rhs);
    }
}

impl AddAssign<&Register<'_>> for Register<'_> {
    #[inline]
    fn add_assign(&mut self, rhs: &Register<'_>) {
        self.add_register(rhs);
    }
}

impl SubAssign<&Register<'_>> for Register<'_> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Register<'_>) {
        self.subtract_register(rhs);
    }
}

impl CheckedAdd for Register<'_> {
    #[inline]
    fn checked_add(&self, v: &Self) -> Option<Self> {
        let mut sum = self.clone();
        (!sum.add_register(v)).then_some(sum)
    }
}

impl CheckedSub for Register<'_> {
    #[inline]
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        let mut diff = self.clone();
        (!diff.subtract_register(v)).then_some(diff)
    }
}

impl Add for Register<'_> {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        CheckedAdd::checked_add(&self, &rhs).expect("overflow")
    }
}

impl Sub for Register<'_> {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        CheckedSub::checked_sub(&self, &rhs).expect("overflow")
    }
}

impl Zero for Register<'static> {
    #[inline]
    fn zero() -> Self {
        Self::new(PowerTable::global())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Register::is_zero(self)
    }
}
