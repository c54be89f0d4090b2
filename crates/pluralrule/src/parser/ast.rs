//! Public AST types for parsed plural rules.
//!
//! These types are public to enable external tooling (rule linters, category
//! coverage checkers, etc.).

/// A parsed plural rule.
///
/// Produced by [`parse_rule`](super::parse_rule); test numbers against it
/// with [`Rule::matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The root condition of the rule.
    pub condition: Condition,
}

/// A boolean combination of relations.
///
/// `and` and `or` carry no precedence distinction: the right-hand side of
/// either keyword is a full condition, so chains associate to the right and
/// `a and b or c` is `a and (b or c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Logical AND of a relation and the condition after the keyword.
    And(Relation, Box<Condition>),
    /// Logical OR of a relation and the condition after the keyword.
    Or(Relation, Box<Condition>),
    /// A single relation.
    Relation(Relation),
}

/// A single comparison between a numeric operand and a value or range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    /// Equality test: `n is 1`, `n mod 10 is not 1`.
    Is {
        operand: Operand,
        negated: bool,
        value: u64,
    },
    /// Range membership: `n in 2..4`, `n mod 100 not in 12..14`.
    In {
        operand: Operand,
        negated: bool,
        range: Range,
    },
    /// Range membership without a negated form: `n within 0..2`.
    Within { operand: Operand, range: Range },
}

/// The numeric left-hand side of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The number under test.
    N,
    /// The number under test modulo a fixed divisor.
    Mod { divisor: u64 },
}

/// An inclusive range of consecutive integers, `low..high` in rule syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub low: u64,
    pub high: u64,
}

impl Range {
    /// Whether `value` lies between the bounds. A range whose `low` exceeds
    /// its `high` is empty and contains nothing.
    pub fn contains(self, value: u64) -> bool {
        self.low <= value && value <= self.high
    }
}
