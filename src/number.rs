use crate::{Integer, Problem, Rational};
use num::{BigInt, BigUint, One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

/// Kind tags seeding the hash of each numeric kind
#[derive(Copy, Clone, Debug)]
#[repr(u64)]
pub(crate) enum Tag {
    Integer = 0x11,
    Rational = 0x12,
}

pub(crate) fn hash_combine(seed: &mut u64, v: i64) {
    let h = v as u64;
    *seed ^= h
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}

/// The least significant 64 bits of the magnitude, with the sign applied
pub(crate) fn truncate(n: &BigInt) -> i64 {
    let low = n.magnitude().iter_u64_digits().next().unwrap_or(0) as i64;
    if n.is_negative() {
        low.wrapping_neg()
    } else {
        low
    }
}

/// An exact number, either an [`Integer`] or a [`Rational`]
///
/// The two kinds never overlap: a value with a denominator of one is always
/// an Integer, so equality never needs to look across kinds.
///
/// # Examples
///
/// ```
/// use exactly::{Number, Rational};
/// let half: Number = "3/6".parse().unwrap();
/// assert_eq!(half, Rational::fraction(1, 2).unwrap());
/// let two: Number = "8/4".parse().unwrap();
/// assert_eq!(two, Number::from(2));
/// assert!(half < two);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Number {
    Integer(Integer),
    Rational(Rational),
}

impl Number {
    /// Zero, the additive identity
    pub fn zero() -> Self {
        Self::Integer(Integer::zero())
    }

    /// One, the multiplicative identity
    pub fn one() -> Self {
        Self::Integer(Integer::one())
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Integer(i) if i.is_zero())
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Self::Integer(i) if i.is_one())
    }

    pub fn is_minus_one(&self) -> bool {
        matches!(self, Self::Integer(i) if i.as_bigint().to_i64() == Some(-1))
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(i) => i.is_negative(),
            Self::Rational(r) => r.numerator().is_negative(),
        }
    }

    // Numerator and denominator, with a denominator of one for an Integer
    fn parts(&self) -> (BigInt, BigUint) {
        match self {
            Self::Integer(i) => (i.as_bigint().clone(), BigUint::one()),
            Self::Rational(r) => (r.numerator().clone(), r.denominator().clone()),
        }
    }

    /// Integer exponentiation
    pub fn powint(&self, exp: &BigInt) -> Result<Self, Problem> {
        match self {
            Self::Integer(i) => i.powint(exp),
            Self::Rational(r) => r.powint(exp),
        }
    }
}

impl From<Integer> for Number {
    fn from(i: Integer) -> Self {
        Self::Integer(i)
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(Integer::new(n))
    }
}

impl PartialEq<Rational> for Number {
    fn eq(&self, other: &Rational) -> bool {
        matches!(self, Self::Rational(r) if r == other)
    }
}

impl PartialEq<Integer> for Number {
    fn eq(&self, other: &Integer) -> bool {
        matches!(self, Self::Integer(i) if i == other)
    }
}

use core::ops::*;

impl Add for &Number {
    type Output = Number;

    fn add(self, other: &Number) -> Number {
        if let (Number::Integer(a), Number::Integer(b)) = (self, other) {
            return Number::Integer(Integer::from_bigint(a.as_bigint() + b.as_bigint()));
        }
        let (an, ad) = self.parts();
        let (bn, bd) = other.parts();
        let numerator = an * BigInt::from(bd.clone()) + bn * BigInt::from(ad.clone());
        Rational::reduce(numerator, ad * bd)
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, other: &Number) -> Number {
        if let (Number::Integer(a), Number::Integer(b)) = (self, other) {
            return Number::Integer(Integer::from_bigint(a.as_bigint() * b.as_bigint()));
        }
        let (an, ad) = self.parts();
        let (bn, bd) = other.parts();
        Rational::reduce(an * bn, ad * bd)
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Integer(i) => Self::Integer(-i),
            Self::Rational(r) => Self::Rational(-r),
        }
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        -self.clone()
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Rational(a), Self::Rational(b)) => a.cmp(b),
            (Self::Rational(a), Self::Integer(b)) => a.cmp_integer(b),
            (Self::Integer(a), Self::Rational(b)) => b.cmp_integer(a).reverse(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use core::fmt;

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => fmt::Display::fmt(i, f),
            Self::Rational(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl std::str::FromStr for Number {
    type Err = Problem;

    fn from_str(s: &str) -> Result<Self, Problem> {
        let s = s.trim();
        if let Some((n, d)) = s.split_once('/') {
            let numerator: Integer = n.trim().parse().map_err(|_| Problem::BadFraction)?;
            let denominator: Integer = d.trim().parse().map_err(|_| Problem::BadFraction)?;
            Rational::from_integers(&numerator, &denominator)
        } else {
            Ok(Self::Integer(s.parse()?))
        }
    }
}
