use crate::number::{hash_combine, truncate, Tag};
use crate::{Number, Problem, Rational};
use num::bigint::Sign::*;
use num::{BigInt, One, Signed, ToPrimitive, Zero};

pub(crate) mod roots;

/// A whole number of any size
///
/// The sibling of [`Rational`]: any fraction whose denominator reduces to
/// one is an Integer and never a Rational.
///
/// # Example
///
/// ```
/// use exactly::{Integer, Number};
/// let twenty_seven = Integer::new(27);
/// assert_eq!(twenty_seven.nth_root(3).unwrap(), Some(Integer::new(3)));
/// assert_eq!(Integer::new(-2).powint(&3.into()).unwrap(), Number::from(-8));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integer(BigInt);

impl Integer {
    /// The Integer corresponding to the provided [`i64`]
    pub fn new(n: i64) -> Self {
        Self(BigInt::from(n))
    }

    /// The Integer corresponding to the provided [`BigInt`]
    pub fn from_bigint(n: BigInt) -> Self {
        Self(n)
    }

    /// Zero, the additive identity
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// One, the multiplicative identity
    pub fn one() -> Self {
        Self(BigInt::one())
    }

    /// The underlying [`BigInt`]
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Consumes this Integer to give the underlying [`BigInt`]
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Is this exactly zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this exactly one?
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Is this less than zero?
    pub fn is_negative(&self) -> bool {
        self.0.sign() == Minus
    }

    /// The magnitude of this value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Integer exponentiation
    ///
    /// A negative exponent makes a fraction, so the answer is a [`Number`].
    /// Zero raised to a negative power is a [`Problem::DivisionByZero`].
    pub fn powint(&self, exp: &BigInt) -> Result<Number, Problem> {
        // Arguably wrong if self is also zero
        if exp.is_zero() {
            return Ok(Number::one());
        }
        if self.is_zero() {
            return if exp.is_negative() {
                Err(Problem::DivisionByZero)
            } else {
                Ok(Number::zero())
            };
        }
        // Plus or minus one exactly
        if self.0.magnitude().is_one() {
            if self.is_negative() && exp.bit(0) {
                return Ok(Number::from(-1));
            } else {
                return Ok(Number::one());
            }
        }
        let e = exp
            .magnitude()
            .to_u32()
            .ok_or(Problem::ExponentTooLarge)?;
        let power = Self(self.0.pow(e));
        if exp.is_negative() {
            Rational::from_integers(&Self::one(), &power)
        } else {
            Ok(Number::Integer(power))
        }
    }

    /// The exact `n`th root, or None if this is not a perfect `n`th power
    ///
    /// Odd roots of negative values are negative, even roots of negative
    /// values are never found here.
    pub fn nth_root(&self, n: u32) -> Result<Option<Self>, Problem> {
        if n == 0 {
            return Err(Problem::ZeroRoot);
        }
        if self.is_negative() && n % 2 == 0 {
            return Ok(None);
        }
        Ok(roots::exact_root(self.0.magnitude(), n)
            .map(|root| Self(BigInt::from_biguint(self.0.sign(), root))))
    }

    /// Whether the magnitude of this value is some integer raised to a power of at least two
    pub fn is_perfect_power(&self) -> bool {
        roots::is_perfect_power(self.0.magnitude())
    }

    /// A hash of this value which only sees the least significant 64 bits
    pub fn hash_value(&self) -> u64 {
        let mut seed = Tag::Integer as u64;
        hash_combine(&mut seed, truncate(&self.0));
        seed
    }
}

impl std::hash::Hash for Integer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl From<BigInt> for Integer {
    fn from(n: BigInt) -> Self {
        Self(n)
    }
}

impl std::ops::Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::ops::Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

use core::fmt;

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for Integer {
    type Err = Problem;

    fn from_str(s: &str) -> Result<Self, Problem> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, s),
        };
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(Problem::BadInteger)?;
        if magnitude.is_negative() || digits.starts_with('+') {
            return Err(Problem::BadInteger);
        }
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}
