//! Exact fractions over arbitrary-precision integers.
//!
//! Purpose
//! - Single numeric type of the kernel. Every coordinate, cross product and
//!   area goes through `Rational`; no floating point is ever introduced.
//!
//! Assumptions and conventions
//! - The denominator is strictly positive. Sign normalization happens in every
//!   constructor, so integer comparisons (`ge_int`, `le_int`, `lt_int`) can
//!   compare `n` against `k * d` without flipping.
//! - Arithmetic builds the cross-multiplied fraction and then reduces it.
//!   Reduction leaves a zero numerator alone: `0/6` stays `0/6`.
//! - Equality is structural on `(n, d)`. `from_raw(2, 4) != Rational::new(1, 2)`
//!   until the former is reduced. Use `is_zero`/`cmp_exact` for mathematical
//!   questions that must not depend on representation.
//! - Operator division and `inv` panic on a zero divisor, like integer
//!   division in `std`. `checked_div`/`checked_inv` return `ArithError`.
//!
//! Code cross-refs: `geom::{Vertex, cross_product}`, `error::ArithError`

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{ArithError, ParseRationalError};

/// Upper bound on gcd passes in `reduce`. One pass already yields lowest terms.
const MAX_REDUCE_PASSES: usize = 2;

/// Fraction `n / d` with `d > 0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    n: BigInt,
    d: BigInt,
}

impl Rational {
    /// Reduced fraction. Panics with "division by zero" when `d == 0`.
    pub fn new(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Self {
        match Self::try_new(n, d) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Reduced fraction, or `DivisionByZero` when `d == 0`.
    pub fn try_new(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Result<Self, ArithError> {
        Ok(Self::try_from_raw(n, d)?.reduced())
    }

    /// Fraction exactly as given (sign moved to the numerator, no reduction).
    pub fn from_raw(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Self {
        match Self::try_from_raw(n, d) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`Rational::from_raw`], but a zero denominator is an error.
    pub fn try_from_raw(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Result<Self, ArithError> {
        let (n, d) = (n.into(), d.into());
        if d.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        Ok(Self::signed(n, d))
    }

    #[inline]
    pub fn from_integer(k: impl Into<BigInt>) -> Self {
        Self {
            n: k.into(),
            d: BigInt::one(),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.n
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.d
    }

    // Callers guarantee `d != 0`.
    fn signed(n: BigInt, d: BigInt) -> Self {
        if d.is_negative() {
            Self { n: -n, d: -d }
        } else {
            Self { n, d }
        }
    }

    // Fresh arithmetic result: normalize sign, then reduce.
    fn combine(n: BigInt, d: BigInt) -> Self {
        Self::signed(n, d).reduced()
    }

    /// Divide numerator and denominator by their gcd, in place.
    pub fn reduce(&mut self) {
        for _ in 0..MAX_REDUCE_PASSES {
            if self.n.is_zero() {
                return;
            }
            // num-integer's gcd is non-negative, so |n| and |d| are implied.
            let g = self.n.gcd(&self.d);
            if g.is_one() {
                return;
            }
            self.n /= &g;
            self.d /= &g;
        }
        debug_assert!(self.is_reduced(), "reduce did not converge: {self}");
    }

    #[inline]
    pub fn reduced(mut self) -> Self {
        self.reduce();
        self
    }

    /// Lowest terms (a zero numerator counts as reduced whatever `d` is).
    pub fn is_reduced(&self) -> bool {
        self.n.is_zero() || self.n.gcd(&self.d).is_one()
    }

    /// Absolute value of the numerator; the denominator is kept as is.
    pub fn abs(&self) -> Self {
        Self {
            n: self.n.abs(),
            d: self.d.clone(),
        }
    }

    /// `1 / self`. Panics with "division by zero" on a zero numerator.
    pub fn inv(&self) -> Self {
        match self.checked_inv() {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn checked_inv(&self) -> Result<Self, ArithError> {
        if self.n.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        Ok(Self::combine(self.d.clone(), self.n.clone()))
    }

    pub fn checked_div(&self, rhs: &Rational) -> Result<Self, ArithError> {
        Ok(self * &rhs.checked_inv()?)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.n.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.n.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.n.is_positive()
    }

    /// `self >= k`.
    pub fn ge_int(&self, k: i64) -> bool {
        self.n >= self.scaled(k)
    }

    /// `self <= k`.
    pub fn le_int(&self, k: i64) -> bool {
        self.n <= self.scaled(k)
    }

    /// `self < k`.
    pub fn lt_int(&self, k: i64) -> bool {
        self.n < self.scaled(k)
    }

    #[inline]
    fn scaled(&self, k: i64) -> BigInt {
        &self.d * BigInt::from(k)
    }

    /// Ordering by value, independent of representation.
    pub fn cmp_exact(&self, other: &Rational) -> Ordering {
        (&self.n * &other.d).cmp(&(&other.n * &self.d))
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;
    fn add(self, rhs: &'a Rational) -> Rational {
        Rational::combine(&self.n * &rhs.d + &rhs.n * &self.d, &self.d * &rhs.d)
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;
    fn sub(self, rhs: &'a Rational) -> Rational {
        Rational::combine(&self.n * &rhs.d - &rhs.n * &self.d, &self.d * &rhs.d)
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;
    fn mul(self, rhs: &'a Rational) -> Rational {
        Rational::combine(&self.n * &rhs.n, &self.d * &rhs.d)
    }
}

impl<'a> Div<&'a Rational> for &'a Rational {
    type Output = Rational;
    fn div(self, rhs: &'a Rational) -> Rational {
        self * &rhs.inv()
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                (&self).$method(&rhs)
            }
        }
        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'a Rational) -> Rational {
                (&self).$method(rhs)
            }
        }
        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                self.$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Div, div);

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        self * &Rational::from_integer(-1)
    }
}

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        -&self
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, r| &acc + r)
    }
}

impl Sum<Rational> for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, r| &acc + &r)
    }
}

impl From<i64> for Rational {
    fn from(k: i64) -> Self {
        Self::from_integer(k)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.d.is_one() {
            write!(f, "{}", self.n)
        } else {
            write!(f, "{}/{}", self.n, self.d)
        }
    }
}

/// Parses `a` or `a/b` (decimal, optional sign) and reduces.
impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let int = |t: &str| {
            let t = t.trim();
            t.parse::<BigInt>()
                .map_err(|_| ParseRationalError::InvalidInteger(t.to_string()))
        };
        let (n, d) = match s.split_once('/') {
            Some((n, d)) => (int(n)?, int(d)?),
            None => (int(s)?, BigInt::one()),
        };
        Rational::try_new(n, d).map_err(|_| ParseRationalError::ZeroDenominator)
    }
}
