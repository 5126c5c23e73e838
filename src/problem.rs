// We need to refer to these types in the documentation
#[allow(unused_imports)]
use crate::{Expr, Integer, Rational};

/// Problems when constructing a [`Rational`] or [`Integer`], extracting
/// roots, or evaluating an exact power as an [`Expr`]
///
/// Not finding an exact root, or a value not being a perfect power, are
/// ordinary answers and are never reported as a Problem.

#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Problem {
    /// Tried to divide by Zero, also arises if attempting to make a fraction with a zero
    /// denominator
    DivisionByZero,
    /// Asked for the zeroth root of a value
    ZeroRoot,
    /// A root degree or integer exponent was too large to represent
    ExponentTooLarge,
    /// Tried to order a value against a kind of expression which has no order
    UnsupportedComparison,
    /// When parsing an integer there were non-digits in the text
    BadInteger,
    /// When parsing a fraction either the numerator or denominator weren't decimal digits
    BadFraction,
}

use std::fmt;

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for Problem {}
