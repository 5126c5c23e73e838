use crate::integer::roots;
use crate::number::{hash_combine, truncate, Tag};
use crate::{Expr, Integer, Number, Problem};
use num::bigint::Sign::*;
use num::{BigInt, BigUint, One, ToPrimitive, Zero};
use std::cmp::Ordering;
use tracing::debug;

/// Ratio of two integers in canonical form
///
/// The numerator carries the sign, the denominator is always greater than
/// one and shares no factor with the numerator. Any fraction which reduces
/// to a whole number is an [`Integer`] instead, so every constructor
/// returns a [`Number`].
///
/// # Examples
///
/// Construction reduces to lowest terms
/// ```
/// use exactly::{Number, Rational};
/// let half = Rational::fraction(9, 18).unwrap();
/// assert_eq!(half.to_string(), "1/2");
/// let two = Rational::fraction(18, 9).unwrap();
/// assert_eq!(two, Number::from(2));
/// ```
///
/// Exact roots
/// ```
/// use exactly::{Number, Rational};
/// let Number::Rational(r) = Rational::fraction(8, 27).unwrap() else { panic!() };
/// let root = r.nth_root(3).unwrap().unwrap();
/// assert_eq!(Number::from(root), Rational::fraction(2, 3).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigUint,
}

impl Rational {
    /// The [`Number`] corresponding to the provided [`i64`]
    /// numerator and [`u64`] denominator as a fraction
    pub fn fraction(n: i64, d: u64) -> Result<Number, Problem> {
        Self::from_integers(&Integer::new(n), &Integer::from_bigint(BigInt::from(d)))
    }

    /// The [`Number`] corresponding to the fraction `n / d` in lowest terms
    ///
    /// Fails with [`Problem::DivisionByZero`] if `d` is zero.
    pub fn from_integers(n: &Integer, d: &Integer) -> Result<Number, Problem> {
        if d.is_zero() {
            return Err(Problem::DivisionByZero);
        }
        let numerator = if d.is_negative() {
            -n.as_bigint()
        } else {
            n.as_bigint().clone()
        };
        let denominator = d.as_bigint().magnitude().clone();
        Ok(Self::reduce(numerator, denominator))
    }

    // Lowest terms for a denominator already known to be non-zero
    pub(crate) fn reduce(numerator: BigInt, denominator: BigUint) -> Number {
        debug_assert!(!denominator.is_zero());
        let divisor = num::Integer::gcd(numerator.magnitude(), &denominator);
        if divisor.is_one() {
            Self::from_reduced(numerator, denominator)
        } else {
            let numerator = numerator / BigInt::from(divisor.clone());
            let denominator = denominator / divisor;
            Self::from_reduced(numerator, denominator)
        }
    }

    /// The [`Number`] for a fraction which is already in lowest terms
    ///
    /// The caller promises `numerator` and `denominator` are coprime, this
    /// is only checked in debug builds. A denominator of one gives an Integer.
    pub fn from_reduced(numerator: BigInt, denominator: BigUint) -> Number {
        if denominator.is_one() {
            Number::Integer(Integer::from_bigint(numerator))
        } else {
            Number::Rational(Self::reduced(numerator, denominator))
        }
    }

    // Numerator and denominator must be coprime with denominator > 1
    fn reduced(numerator: BigInt, denominator: BigUint) -> Self {
        let answer = Self {
            numerator,
            denominator,
        };
        debug_assert!(answer.is_canonical());
        answer
    }

    /// Re-reduces this fraction and checks nothing changed
    ///
    /// Diagnostic only, every Rational which can be constructed is canonical.
    pub fn is_canonical(&self) -> bool {
        if self.denominator.is_zero() {
            return false;
        }
        let divisor = num::Integer::gcd(self.numerator.magnitude(), &self.denominator);
        let numerator = &self.numerator / BigInt::from(divisor.clone());
        let denominator = &self.denominator / &divisor;
        // A whole number should never be a Rational
        if denominator.is_one() {
            return false;
        }
        numerator == self.numerator && denominator == self.denominator
    }

    /// The numerator, which carries the sign
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator, always greater than one
    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Numerator and denominator as [`Integer`] values
    pub fn num_den(&self) -> (Integer, Integer) {
        (
            Integer::from_bigint(self.numerator.clone()),
            Integer::from_bigint(BigInt::from(self.denominator.clone())),
        )
    }

    /// The inverse of this Rational
    ///
    /// # Example
    ///
    /// ```
    /// use exactly::{Number, Rational};
    /// let Number::Rational(r) = Rational::fraction(-1, 5).unwrap() else { panic!() };
    /// assert_eq!(r.inverse(), Number::from(-5));
    /// ```
    pub fn inverse(&self) -> Number {
        let numerator = BigInt::from_biguint(self.numerator.sign(), self.denominator.clone());
        Self::from_reduced(numerator, self.numerator.magnitude().clone())
    }

    /// Integer exponentiation
    pub fn powint(&self, exp: &BigInt) -> Result<Number, Problem> {
        if exp.is_zero() {
            return Ok(Number::one());
        }
        let e = exp
            .magnitude()
            .to_u32()
            .ok_or(Problem::ExponentTooLarge)?;
        // Powers of coprime values are coprime
        let numerator = self.numerator.pow(e);
        let denominator = self.denominator.pow(e);
        match exp.sign() {
            Minus => Ok(Self::from_reduced(
                BigInt::from_biguint(numerator.sign(), denominator),
                numerator.magnitude().clone(),
            )),
            _ => Ok(Number::Rational(Self::reduced(numerator, denominator))),
        }
    }

    /// The exact `n`th root, or None unless both numerator and denominator
    /// are perfect `n`th powers
    ///
    /// # Example
    ///
    /// ```
    /// use exactly::{Number, Problem, Rational};
    /// let Number::Rational(r) = Rational::fraction(-1, 32).unwrap() else { panic!() };
    /// assert!(r.nth_root(5).unwrap().is_some());
    /// assert!(r.nth_root(2).unwrap().is_none());
    /// assert_eq!(r.nth_root(0), Err(Problem::ZeroRoot));
    /// ```
    pub fn nth_root(&self, n: u32) -> Result<Option<Self>, Problem> {
        if n == 0 {
            return Err(Problem::ZeroRoot);
        }
        let numerator = Integer::from_bigint(self.numerator.clone());
        let Some(numerator) = numerator.nth_root(n)? else {
            return Ok(None);
        };
        let Some(denominator) = roots::exact_root(&self.denominator, n) else {
            return Ok(None);
        };
        // Roots of coprime values are coprime, and the root of a
        // denominator above one is above one
        Ok(Some(Self::reduced(numerator.into_bigint(), denominator)))
    }

    /// Whether the magnitude of this value is some rational raised to a
    /// power of at least two
    ///
    /// `expected` only says whether the caller thinks the answer is yes, if
    /// not a cheap test of the larger part may reject early. The answer is
    /// the same either way.
    pub fn is_perfect_power(&self, expected: bool) -> bool {
        let num = self.numerator.magnitude();
        if num.is_zero() {
            return true;
        } else if num.is_one() {
            return roots::is_perfect_power(&self.denominator);
        }

        let den = &self.denominator;
        if !expected {
            // Coprime parts must each be perfect powers for their product to be one
            let larger = if num > den { num } else { den };
            if !roots::is_perfect_power(larger) {
                debug!(rational = %self, "rejected as a perfect power by the cheap test");
                return false;
            }
        }
        roots::is_perfect_power(&(num * den))
    }

    /// A hash of this value which only sees the least significant 64 bits
    /// of the numerator and denominator
    ///
    /// Values which differ only in higher bits collide, equality is always
    /// decided by exact comparison.
    pub fn hash_value(&self) -> u64 {
        let mut seed = Tag::Rational as u64;
        hash_combine(&mut seed, truncate(&self.numerator));
        hash_combine(&mut seed, truncate(&BigInt::from(self.denominator.clone())));
        seed
    }

    pub(crate) fn cmp_integer(&self, other: &Integer) -> Ordering {
        let scaled = other.as_bigint() * BigInt::from(self.denominator.clone());
        self.numerator.cmp(&scaled)
    }

    /// Order this value against a numeric expression
    ///
    /// Fails with [`Problem::UnsupportedComparison`] if `other` is not a
    /// [`Rational`] or an [`Integer`].
    pub fn compare(&self, other: &Expr) -> Result<Ordering, Problem> {
        match other {
            Expr::Number(Number::Rational(r)) => Ok(self.cmp(r)),
            Expr::Number(Number::Integer(i)) => Ok(self.cmp_integer(i)),
            _ => Err(Problem::UnsupportedComparison),
        }
    }
}

impl std::hash::Hash for Rational {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let left = &self.numerator * BigInt::from(other.denominator.clone());
        let right = &other.numerator * BigInt::from(self.denominator.clone());
        left.cmp(&right)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<Integer> for Rational {
    // A Rational is never a whole number
    fn eq(&self, _other: &Integer) -> bool {
        false
    }
}

impl PartialOrd<Integer> for Rational {
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp_integer(other))
    }
}

impl std::ops::Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            numerator: -self.numerator,
            ..self
        }
    }
}

impl std::ops::Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -self.clone()
    }
}

use core::fmt;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
