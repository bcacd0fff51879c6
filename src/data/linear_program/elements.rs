//! # Building blocks to describe linear programs.
use std::ops::Neg;

use num_traits::One;

/// A `Constraint` is a type of (in)equality.
///
/// These are read "from constraint to constraint value", meaning:
/// * When a constraint is `ConstraintType::Equal`, the equation is `<a, x> == b`
/// * When a constraint is `ConstraintType::Less`, the equation is `<a, x> <= b`
/// * When a constraint is `ConstraintType::Greater`, the equation is `<a, x> >= b`
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// Which side the constraint value bounds the row activity from, if any.
    ///
    /// Equality constraints bound from both sides and return `None`.
    #[must_use]
    pub fn direction(self) -> Option<BoundDirection> {
        match self {
            ConstraintType::Equal => None,
            ConstraintType::Greater => Some(BoundDirection::Lower),
            ConstraintType::Less => Some(BoundDirection::Upper),
        }
    }
}

/// Direction of a bound.
///
/// Is used more generally in the case where the three variants of the `ConstraintType` don't suit
/// the needs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, `x >= b`.
    Lower,
    /// In the case of a variable, `x <= b`.
    Upper,
}

impl BoundDirection {
    /// Convert a bound direction into a positive or negative one.
    ///
    /// Upper bounds need positive slacks, lower bounds need negative slacks.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            BoundDirection::Lower => -F::one(),
            BoundDirection::Upper => F::one(),
        }
    }
}

impl From<BoundDirection> for ConstraintType {
    /// The constraint type of a row enforcing a bound of this direction.
    fn from(direction: BoundDirection) -> Self {
        match direction {
            BoundDirection::Lower => ConstraintType::Greater,
            BoundDirection::Upper => ConstraintType::Less,
        }
    }
}
