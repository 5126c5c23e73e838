use crate::{Integer, Number, Problem, Rational};
use num::{BigInt, Integer as _, ToPrimitive};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::trace;

/// A base in a product of powers
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Factor {
    /// The imaginary unit, whose square is -1
    ImaginaryUnit,
    Integer(Integer),
}

/// Bases mapped to their exponents
pub type Dict = BTreeMap<Factor, Number>;

/// An integer raised to a rational power strictly between zero and one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pow {
    base: Integer,
    exp: Rational,
}

impl Pow {
    pub fn base(&self) -> &Integer {
        &self.base
    }

    pub fn exp(&self) -> &Rational {
        &self.exp
    }
}

/// A numeric coefficient times a product of powers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mul {
    coef: Number,
    dict: Dict,
}

impl Mul {
    pub fn coef(&self) -> &Number {
        &self.coef
    }

    pub fn dict(&self) -> &Dict {
        &self.dict
    }
}

/// The exact result of raising a number to a power
///
/// Compound nodes are shared, cloning an Expr never copies a product.
///
/// # Example
///
/// ```
/// use exactly::{Expr, Number, Rational};
/// let half = Rational::fraction(1, 2).unwrap();
/// let root_two = exactly::power(&Number::from(2), &half).unwrap();
/// assert_eq!(root_two.to_string(), "2^(1/2)");
/// let two = root_two.mul(&root_two).unwrap();
/// assert_eq!(two, Expr::Number(Number::from(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number(Number),
    ImaginaryUnit,
    Pow(Arc<Pow>),
    Mul(Arc<Mul>),
}

impl Expr {
    /// The canonical product of `coef` and each base raised to its exponent
    ///
    /// Exponents of zero vanish, integer powers of integers and of the
    /// imaginary unit are folded into the coefficient, and a rational
    /// exponent on an integer keeps only its part in (0, 1).
    pub fn from_dict(mut coef: Number, dict: Dict) -> Result<Self, Problem> {
        let mut out = Dict::new();
        for (factor, exp) in dict {
            if exp.is_zero() {
                continue;
            }
            match (factor, exp) {
                (Factor::ImaginaryUnit, Number::Integer(k)) => {
                    let quarter = k.as_bigint().mod_floor(&BigInt::from(4));
                    match quarter.to_u8() {
                        Some(1) => {
                            out.insert(Factor::ImaginaryUnit, Number::one());
                        }
                        Some(2) => coef = -coef,
                        Some(3) => {
                            coef = -coef;
                            out.insert(Factor::ImaginaryUnit, Number::one());
                        }
                        _ => (),
                    }
                }
                (Factor::Integer(base), Number::Integer(k)) => {
                    coef = &coef * &base.powint(k.as_bigint())?;
                }
                (Factor::Integer(base), Number::Rational(r)) => {
                    if base.is_one() {
                        continue;
                    }
                    if base.is_zero() {
                        coef = &coef * &base.powint(r.numerator())?;
                        continue;
                    }
                    let den = BigInt::from(r.denominator().clone());
                    let (quot, rem) = r.numerator().div_mod_floor(&den);
                    coef = &coef * &base.powint(&quot)?;
                    // rem shares no factor with the denominator because the numerator didn't
                    let residual = Rational::from_reduced(rem, r.denominator().clone());
                    out.insert(Factor::Integer(base), residual);
                }
                (factor, exp) => {
                    out.insert(factor, exp);
                }
            }
        }
        trace!(%coef, factors = out.len(), "canonical product");

        if coef.is_zero() {
            return Ok(Self::Number(Number::zero()));
        }
        Ok(Self::collapse(coef, out))
    }

    // A canonical dictionary with a non-zero coefficient as the simplest node
    fn collapse(coef: Number, dict: Dict) -> Self {
        if dict.is_empty() {
            return Self::Number(coef);
        }
        if coef.is_one() && dict.len() == 1 {
            if let Some((factor, exp)) = dict.first_key_value() {
                match (factor, exp) {
                    (Factor::ImaginaryUnit, exp) if exp.is_one() => return Self::ImaginaryUnit,
                    (Factor::Integer(base), Number::Rational(exp)) => {
                        return Self::Pow(Arc::new(Pow {
                            base: base.clone(),
                            exp: exp.clone(),
                        }))
                    }
                    _ => (),
                }
            }
        }
        Self::Mul(Arc::new(Mul { coef, dict }))
    }

    /// The imaginary unit raised to an integer power
    pub fn imaginary_power(exp: &BigInt) -> Result<Self, Problem> {
        let mut dict = Dict::new();
        dict.insert(Factor::ImaginaryUnit, Number::Integer(exp.clone().into()));
        Self::from_dict(Number::one(), dict)
    }

    /// This expression as a coefficient and a product of powers
    pub fn as_coef_dict(&self) -> (Number, Dict) {
        match self {
            Self::Number(n) => (n.clone(), Dict::new()),
            Self::ImaginaryUnit => {
                let mut dict = Dict::new();
                dict.insert(Factor::ImaginaryUnit, Number::one());
                (Number::one(), dict)
            }
            Self::Pow(pow) => {
                let mut dict = Dict::new();
                dict.insert(
                    Factor::Integer(pow.base.clone()),
                    Number::Rational(pow.exp.clone()),
                );
                (Number::one(), dict)
            }
            Self::Mul(mul) => (mul.coef.clone(), mul.dict.clone()),
        }
    }

    /// The product of two expressions, exponents of identical bases add up
    pub fn mul(&self, other: &Self) -> Result<Self, Problem> {
        if let (Self::Number(a), Self::Number(b)) = (self, other) {
            return Ok(Self::Number(a * b));
        }
        let (coef, mut dict) = self.as_coef_dict();
        let (other_coef, other_dict) = other.as_coef_dict();
        for (factor, exp) in other_dict {
            let sum = match dict.get(&factor) {
                Some(existing) => existing + &exp,
                None => exp,
            };
            dict.insert(factor, sum);
        }
        Self::from_dict(&coef * &other_coef, dict)
    }

    pub fn neg(&self) -> Self {
        match self {
            Self::Number(n) => Self::Number(-n),
            Self::Mul(mul) => Self::collapse(-&mul.coef, mul.dict.clone()),
            _ => {
                let (_, dict) = self.as_coef_dict();
                Self::Mul(Arc::new(Mul {
                    coef: Number::from(-1),
                    dict,
                }))
            }
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

use core::fmt;

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImaginaryUnit => f.write_str("I"),
            Self::Integer(i) if i.is_negative() => write!(f, "({i})"),
            Self::Integer(i) => write!(f, "{i}"),
        }
    }
}

fn write_power(f: &mut fmt::Formatter<'_>, factor: &Factor, exp: &Number) -> fmt::Result {
    match exp {
        e if e.is_one() => write!(f, "{factor}"),
        Number::Integer(e) => write!(f, "{factor}^{e}"),
        Number::Rational(e) => write!(f, "{factor}^({e})"),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::ImaginaryUnit => f.write_str("I"),
            Self::Pow(pow) => write_power(
                f,
                &Factor::Integer(pow.base.clone()),
                &Number::Rational(pow.exp.clone()),
            ),
            Self::Mul(mul) => {
                let mut first = true;
                if mul.coef.is_minus_one() {
                    f.write_str("-")?;
                } else if !mul.coef.is_one() {
                    write!(f, "{}", mul.coef)?;
                    first = false;
                }
                for (factor, exp) in &mul.dict {
                    if !first {
                        f.write_str("*")?;
                    }
                    write_power(f, factor, exp)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}
