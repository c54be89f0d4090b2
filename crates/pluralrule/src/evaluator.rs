//! Rule evaluation.
//!
//! Walks a parsed [`Rule`] and decides whether a number satisfies it.
//! Parsing and evaluation are separate passes: a rule parsed once can be
//! matched against many numbers, and evaluation itself cannot fail. The
//! walk is pure, so repeated calls with the same inputs always agree and
//! concurrent callers need no coordination.

use crate::parser::{Condition, Operand, Relation, Rule};

/// Decide whether `number` satisfies `rule`.
pub fn eval_rule(rule: &Rule, number: u64) -> bool {
    eval_condition(&rule.condition, number)
}

impl Rule {
    /// Whether `number` satisfies this rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluralrule::Rule;
    ///
    /// let rule: Rule = "n mod 10 in 2..4 and n mod 100 not in 12..14".parse().unwrap();
    /// assert!(rule.matches(3));
    /// assert!(rule.matches(22));
    /// assert!(!rule.matches(13));
    /// ```
    pub fn matches(&self, number: u64) -> bool {
        eval_rule(self, number)
    }
}

fn eval_condition(condition: &Condition, number: u64) -> bool {
    match condition {
        Condition::And(relation, rest) => {
            eval_relation(relation, number) && eval_condition(rest, number)
        }
        Condition::Or(relation, rest) => {
            eval_relation(relation, number) || eval_condition(rest, number)
        }
        Condition::Relation(relation) => eval_relation(relation, number),
    }
}

fn eval_relation(relation: &Relation, number: u64) -> bool {
    match relation {
        Relation::Is {
            operand,
            negated,
            value,
        } => {
            let holds = eval_operand(*operand, number) == Some(*value);
            holds != *negated
        }
        Relation::In {
            operand,
            negated,
            range,
        } => {
            let holds = eval_operand(*operand, number).is_some_and(|v| range.contains(v));
            holds != *negated
        }
        Relation::Within { operand, range } => {
            eval_operand(*operand, number).is_some_and(|v| range.contains(v))
        }
    }
}

/// The operand's value. A `mod` with divisor zero has no value; no positive
/// comparison holds against it, while the negated forms all do.
fn eval_operand(operand: Operand, number: u64) -> Option<u64> {
    match operand {
        Operand::N => Some(number),
        Operand::Mod { divisor } => number.checked_rem(divisor),
    }
}
