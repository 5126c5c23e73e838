//! Property-based tests for construction, roots and ordering.

use crate::{power, Expr, Integer, Number, Problem, Rational};
use num::BigInt;
use proptest::prelude::*;

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn number(n: i64, d: i64) -> Number {
    Rational::from_integers(&Integer::new(n), &Integer::new(d)).unwrap()
}

fn gcd(a: i64, b: i64) -> i64 {
    num::Integer::gcd(&a, &b)
}

proptest! {
    #[test]
    fn construction_is_canonical(n in small_int(), d in non_zero_int()) {
        match number(n, d) {
            Number::Integer(i) => {
                prop_assert_eq!(n % d, 0);
                prop_assert_eq!(i, Integer::new(n / d));
            }
            Number::Rational(r) => {
                prop_assert!(r.is_canonical());
                prop_assert!(*r.denominator() > num::BigUint::from(1u32));
                let (num, den) = r.num_den();
                prop_assert_eq!(
                    num.as_bigint() * BigInt::from(d),
                    den.as_bigint() * BigInt::from(n)
                );
            }
        }
    }

    #[test]
    fn zero_denominator(n in small_int()) {
        let zero = Integer::zero();
        let answer = Rational::from_integers(&Integer::new(n), &zero);
        prop_assert_eq!(answer, Err(Problem::DivisionByZero));
    }

    #[test]
    fn zeroth_root(n in small_int(), d in 2i64..1000) {
        prop_assume!(gcd(n, d) == 1);
        let Number::Rational(r) = number(n, d) else { unreachable!() };
        prop_assert_eq!(r.nth_root(0), Err(Problem::ZeroRoot));
        prop_assert_eq!(Integer::new(n).nth_root(0), Err(Problem::ZeroRoot));
    }

    #[test]
    fn roots_of_powers(a in 1i64..60, b in 2i64..60, k in 2u32..6) {
        prop_assume!(gcd(a, b) == 1);
        let base = number(a, b);
        let Number::Rational(powered) = base.powint(&BigInt::from(k)).unwrap() else {
            unreachable!()
        };
        let root = powered.nth_root(k).unwrap();
        prop_assert_eq!(root.map(Number::Rational), Some(base));
    }

    #[test]
    fn hint_never_changes_answer(n in small_int(), d in 2i64..5000) {
        prop_assume!(gcd(n, d) == 1);
        let Number::Rational(r) = number(n, d) else { unreachable!() };
        prop_assert_eq!(r.is_perfect_power(true), r.is_perfect_power(false));
    }

    #[test]
    fn squares_are_perfect_powers(a in 1i64..200, b in 2i64..200) {
        prop_assume!(gcd(a, b) == 1);
        let Number::Rational(square) = number(a * a, b * b) else { unreachable!() };
        prop_assert!(square.is_perfect_power(true));
        prop_assert!(square.is_perfect_power(false));
    }

    #[test]
    fn hash_follows_equality(n in small_int(), d in 2i64..1000, k in 1i64..20) {
        let a = number(n, d);
        let b = number(n * k, d * k);
        prop_assert_eq!(&a, &b);
        if let (Number::Rational(a), Number::Rational(b)) = (a, b) {
            prop_assert_eq!(a.hash_value(), b.hash_value());
        }
    }

    #[test]
    fn order_matches_value(a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int()) {
        let x = number(a, b);
        let y = number(c, d);
        // a/b < c/d exactly when a*d*b*d < c*b*b*d, the square keeps the sign
        let left = a * b * d * d;
        let right = c * d * b * b;
        prop_assert_eq!(x.cmp(&y), left.cmp(&right));
        prop_assert_eq!(y.cmp(&x), right.cmp(&left));
    }

    #[test]
    fn order_is_transitive(a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int(), e in small_int(), f in non_zero_int()) {
        let mut values = [number(a, b), number(c, d), number(e, f)];
        values.sort();
        prop_assert!(values[0] <= values[1]);
        prop_assert!(values[1] <= values[2]);
        prop_assert!(values[0] <= values[2]);
    }

    #[test]
    fn compare_agrees_with_order(a in small_int(), b in 2i64..100, c in small_int(), d in non_zero_int()) {
        prop_assume!(gcd(a, b) == 1);
        let Number::Rational(x) = number(a, b) else { unreachable!() };
        let y = number(c, d);
        let expected = Number::Rational(x.clone()).cmp(&y);
        prop_assert_eq!(x.compare(&Expr::Number(y)), Ok(expected));
    }

    #[test]
    fn square_roots_of_squares(a in -100i64..100, b in 1i64..100) {
        prop_assume!(a != 0 && gcd(a, b) == 1);
        let base = number(a * a, b * b);
        let half = number(1, 2);
        let root = power(&base, &half).unwrap();
        prop_assert_eq!(root, Expr::Number(number(a.abs(), b)));
    }

    #[test]
    fn square_roots_of_negative_squares(a in 1i64..100, b in 1i64..100) {
        prop_assume!(gcd(a, b) == 1);
        let base = number(-a * a, b * b);
        let half = number(1, 2);
        let root = power(&base, &half).unwrap();
        let expected = Expr::Number(number(a, b)).mul(&Expr::ImaginaryUnit).unwrap();
        prop_assert_eq!(root, expected);
    }
}
