mod problem;
pub use crate::problem::Problem;

mod integer;
pub use crate::integer::Integer;

mod rational;
pub use crate::rational::Rational;

mod number;
pub use crate::number::Number;

mod expression;
pub use crate::expression::{Dict, Expr, Factor, Mul, Pow};

mod power;
pub use crate::power::power;

#[cfg(test)]
mod proptests;
