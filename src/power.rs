//! Exact rational powers of rational numbers
//!
//! An integer raised to `p/q` is either an exact number, when the integer
//! has an exact `q`th root, or a coefficient times a radical whose
//! exponent lies strictly between zero and one. A fraction `n/d` raised to
//! `e` is `n^e` times `d^-e`.
//!
//! Negative bases take the real root when `q` is odd. When `q` is even the
//! root is imaginary and a factor of the imaginary unit appears instead.

use crate::expression::{Dict, Factor};
use crate::{Expr, Integer, Number, Problem, Rational};
use num::{BigInt, Integer as _, ToPrimitive};
use tracing::debug;

impl Integer {
    /// This integer raised to a rational power, exactly
    ///
    /// Fails with [`Problem::ExponentTooLarge`] if the denominator of `exp`
    /// doesn't fit in a `u32`, and with [`Problem::DivisionByZero`] for
    /// zero raised to a negative power.
    ///
    /// # Examples
    ///
    /// ```
    /// use exactly::{Expr, Integer, Number, Rational};
    /// let Number::Rational(third) = Rational::fraction(1, 3).unwrap() else { panic!() };
    /// let root = Integer::new(-8).pow_rational(&third).unwrap();
    /// assert_eq!(root, Expr::Number(Number::from(-2)));
    /// let Number::Rational(half) = Rational::fraction(1, 2).unwrap() else { panic!() };
    /// let i = Integer::new(-1).pow_rational(&half).unwrap();
    /// assert_eq!(i, Expr::ImaginaryUnit);
    /// ```
    pub fn pow_rational(&self, exp: &Rational) -> Result<Expr, Problem> {
        let degree = exp
            .denominator()
            .to_u32()
            .ok_or(Problem::ExponentTooLarge)?;
        let p = exp.numerator();
        let negative = self.is_negative();
        let magnitude = self.abs();

        if let Some(root) = magnitude.nth_root(degree)? {
            if !negative {
                debug!(base = %self, %exp, %root, "exact root");
                return Ok(Expr::Number(root.powint(p)?));
            }
            if degree % 2 == 0 {
                debug!(base = %self, %exp, %root, "exact root, imaginary branch");
                let real = Expr::Number(root.powint(p)?);
                return Expr::imaginary_power(p)?.mul(&real);
            }
            debug!(base = %self, %exp, %root, "exact root, real branch");
            return Ok(Expr::Number((-root).powint(p)?));
        }

        // p = q * quot + rem with 0 <= rem < q
        let q = BigInt::from(exp.denominator().clone());
        let (quot, rem) = p.div_mod_floor(&q);
        let coef = self.powint(&quot)?;
        // gcd(rem, q) = gcd(p, q) = 1, and q > 1 so this is never whole
        let residual = Rational::from_reduced(rem, exp.denominator().clone());
        let mut surd = Dict::new();

        if negative && degree == 2 {
            debug!(base = %self, %exp, %coef, "square root of a negative radical");
            surd.insert(Factor::ImaginaryUnit, Number::one());
            // Nothing is left of the radical of one
            if !magnitude.is_one() {
                surd.insert(Factor::Integer(magnitude), residual);
            }
        } else {
            debug!(base = %self, %exp, %coef, "radical");
            surd.insert(Factor::Integer(self.clone()), residual);
        }
        Expr::from_dict(coef, surd)
    }
}

impl Rational {
    /// This fraction raised to a rational power, exactly
    ///
    /// # Example
    ///
    /// ```
    /// use exactly::{Number, Rational};
    /// let Number::Rational(base) = Rational::fraction(4, 9).unwrap() else { panic!() };
    /// let Number::Rational(exp) = Rational::fraction(3, 2).unwrap() else { panic!() };
    /// let answer = base.pow_rational(&exp).unwrap();
    /// assert_eq!(answer.to_string(), "8/27");
    /// ```
    pub fn pow_rational(&self, exp: &Rational) -> Result<Expr, Problem> {
        let (num, den) = self.num_den();
        let top = num.pow_rational(exp)?;
        let bottom = den.pow_rational(&-exp)?;
        top.mul(&bottom)
    }
}

impl Number {
    /// This number raised to the power `exp`, exactly
    pub fn pow(&self, exp: &Number) -> Result<Expr, Problem> {
        match (self, exp) {
            (_, Number::Integer(k)) => Ok(Expr::Number(self.powint(k.as_bigint())?)),
            (Number::Integer(base), Number::Rational(e)) => base.pow_rational(e),
            (Number::Rational(base), Number::Rational(e)) => base.pow_rational(e),
        }
    }
}

/// `base` raised to the power `exponent`, exactly
///
/// The answer is a [`Number`] whenever one exists, otherwise a product of
/// a coefficient, radicals and perhaps the imaginary unit.
///
/// # Examples
///
/// ```
/// use exactly::{power, Expr, Number};
/// let n = |s: &str| -> Number { s.parse().unwrap() };
/// assert_eq!(power(&n("4"), &n("1/2")).unwrap(), Expr::Number(n("2")));
/// assert_eq!(power(&n("-4"), &n("3/2")).unwrap().to_string(), "-8*I");
/// assert_eq!(power(&n("12"), &n("1/2")).unwrap().to_string(), "12^(1/2)");
/// ```
pub fn power(base: &Number, exponent: &Number) -> Result<Expr, Problem> {
    base.pow(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> Number {
        s.parse().unwrap()
    }

    fn pow(base: &str, exp: &str) -> Expr {
        power(&n(base), &n(exp)).unwrap()
    }

    fn radical(base: i64, exp: &str) -> Expr {
        let mut dict = Dict::new();
        dict.insert(Factor::Integer(Integer::new(base)), n(exp));
        Expr::from_dict(Number::one(), dict).unwrap()
    }

    #[test]
    fn square_root_of_minus_one() {
        assert_eq!(pow("-1", "1/2"), Expr::ImaginaryUnit);
    }

    #[test]
    fn odd_root_of_negative() {
        assert_eq!(pow("-8", "1/3"), Expr::Number(n("-2")));
        assert_eq!(pow("-8", "2/3"), Expr::Number(n("4")));
        assert_eq!(pow("-8", "-1/3"), Expr::Number(n("-1/2")));
        assert_eq!(pow("-1", "1/5"), Expr::Number(n("-1")));
    }

    #[test]
    fn irreducible_square_root() {
        let root_two = pow("2", "1/2");
        assert_eq!(root_two, radical(2, "1/2"));
        let Expr::Pow(node) = root_two else {
            panic!("expected a radical");
        };
        assert_eq!(node.base(), &Integer::new(2));
        assert_eq!(Number::from(node.exp().clone()), n("1/2"));
    }

    #[test]
    fn exact_square_root() {
        assert_eq!(pow("4", "1/2"), Expr::Number(n("2")));
        assert_eq!(pow("4", "-1/2"), Expr::Number(n("1/2")));
        assert_eq!(pow("0", "1/2"), Expr::Number(Number::zero()));
    }

    #[test]
    fn even_root_of_negative() {
        let answer = pow("-4", "3/2");
        assert_eq!(answer.to_string(), "-8*I");
        let Expr::Mul(mul) = answer else {
            panic!("expected a product");
        };
        assert_eq!(mul.coef(), &n("-8"));
        assert_eq!(mul.dict().get(&Factor::ImaginaryUnit), Some(&Number::one()));
        assert_eq!(pow("-4", "1/2").to_string(), "2*I");
        assert_eq!(pow("-9", "-1/2").to_string(), "-1/3*I");
    }

    #[test]
    fn square_root_of_negative_radical() {
        assert_eq!(pow("-2", "1/2").to_string(), "I*2^(1/2)");
        assert_eq!(pow("-2", "3/2").to_string(), "-2*I*2^(1/2)");
        assert_eq!(pow("-2", "-1/2").to_string(), "-1/2*I*2^(1/2)");
        assert_eq!(pow("-12", "1/2").to_string(), "I*12^(1/2)");
    }

    #[test]
    fn negative_radical_odd_degree() {
        assert_eq!(pow("-2", "1/3"), radical(-2, "1/3"));
        assert_eq!(pow("-2", "4/3").to_string(), "-2*(-2)^(1/3)");
    }

    #[test]
    fn negative_radical_other_even_degree() {
        // Only square roots move the sign into the imaginary unit
        assert_eq!(pow("-2", "1/4"), radical(-2, "1/4"));
    }

    #[test]
    fn coefficient_from_floor_division() {
        assert_eq!(pow("2", "5/2").to_string(), "4*2^(1/2)");
        assert_eq!(pow("2", "-1/2").to_string(), "1/2*2^(1/2)");
        assert_eq!(pow("3", "-5/3").to_string(), "1/9*3^(1/3)");
        assert_eq!(pow("5", "7/3").to_string(), "25*5^(1/3)");
    }

    #[test]
    fn rational_base() {
        assert_eq!(pow("1/4", "1/2"), Expr::Number(n("1/2")));
        assert_eq!(pow("4/9", "-3/2"), Expr::Number(n("27/8")));
        assert_eq!(pow("-1/4", "1/2").to_string(), "1/2*I");
        assert_eq!(pow("-8/27", "1/3"), Expr::Number(n("-2/3")));
        assert_eq!(pow("1/2", "1/2").to_string(), "1/2*2^(1/2)");
        assert_eq!(pow("2/3", "1/2").to_string(), "1/3*2^(1/2)*3^(1/2)");
        assert_eq!(pow("-1/2", "1/2").to_string(), "1/2*I*2^(1/2)");
    }

    #[test]
    fn integer_exponent() {
        assert_eq!(pow("2/3", "2"), Expr::Number(n("4/9")));
        assert_eq!(pow("-3", "-3"), Expr::Number(n("-1/27")));
        assert_eq!(pow("7", "0"), Expr::Number(Number::one()));
    }

    #[test]
    fn zero_to_negative_power() {
        assert_eq!(power(&n("0"), &n("-1/2")), Err(Problem::DivisionByZero));
        assert_eq!(power(&n("0"), &n("-3")), Err(Problem::DivisionByZero));
    }

    #[test]
    fn huge_root_degree() {
        let q = Integer::from_bigint(BigInt::from(u64::MAX));
        let exp = Rational::from_integers(&Integer::one(), &q).unwrap();
        assert_eq!(power(&n("2"), &exp), Err(Problem::ExponentTooLarge));
    }

    #[test]
    fn squared_roots_are_exact() {
        for (base, exp) in [("2", "1/2"), ("-2", "1/2"), ("3", "2/3"), ("2/5", "1/2")] {
            let root = pow(base, exp);
            let twice = &n(exp) * &n("2");
            assert_eq!(root.mul(&root).unwrap(), pow(base, &twice.to_string()));
        }
    }
}
