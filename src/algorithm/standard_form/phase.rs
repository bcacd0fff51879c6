//! # Phases of the rewrite
//!
//! The rewrite to standard form consists of four steps that each read what the previous steps
//! left behind. The converter tracks which step was done last with a `Phase`.

/// Last completed step of a `StandardFormConverter`.
///
/// Phases are ordered: a converter only moves forward, one step at a time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Phase {
    /// Nothing happened yet.
    Start,
    /// Each equality constraint is represented by a `<=` and a `>=` constraint.
    EqualitiesReplaced,
    /// Each bounded variable is split and its bounds are explicit constraints.
    BoundsHandled,
    /// Negative parts of the split variables have their coefficients and costs.
    VariablesReplaced,
    /// Each constraint is an equality with its own slack. Terminal.
    SenseHandled,
}

impl Phase {
    /// The phase that follows this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Phase::Start => Some(Phase::EqualitiesReplaced),
            Phase::EqualitiesReplaced => Some(Phase::BoundsHandled),
            Phase::BoundsHandled => Some(Phase::VariablesReplaced),
            Phase::VariablesReplaced => Some(Phase::SenseHandled),
            Phase::SenseHandled => None,
        }
    }
}
