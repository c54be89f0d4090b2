//! Plural rule parser using winnow.
//!
//! Parses the boolean rule language used for CLDR-style plural category
//! selection, e.g. `"n mod 10 is 1 and n mod 100 is not 11"`:
//!
//! ```text
//! condition  := and_cond | or_cond | relation
//! and_cond   := relation ws "and" ws condition
//! or_cond    := relation ws "or" ws condition
//! relation   := is_rel | in_rel | within_rel
//! is_rel     := operand ws "is" not? ws digits
//! in_rel     := operand not? ws "in" ws range
//! within_rel := operand ws "within" ws range
//! operand    := mod | "n"
//! mod        := "n" ws "mod" ws digits
//! not        := ws "not"
//! range      := digits ".." digits
//! ```
//!
//! Alternatives are tried in source order and backtrack on failure, so
//! `and`/`or` chains associate strictly to the right with no precedence
//! distinction between the two keywords. Keywords are plain prefix matches;
//! the mandatory whitespace before the next token is what delimits them.

use std::str::FromStr;

use super::ast::*;
use super::error::ParseError;
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse a plural rule into its AST.
///
/// The whole input must belong to the rule; trailing text that the grammar
/// does not consume is an error, never silently ignored.
pub fn parse_rule(input: &str) -> Result<Rule, ParseError> {
    let mut remaining = input;
    match condition(&mut remaining) {
        Ok(root) => {
            if remaining.is_empty() {
                Ok(Rule { condition: root })
            } else {
                Err(ParseError::Trailing {
                    offset: input.len() - remaining.len(),
                    text: remaining.to_string(),
                })
            }
        }
        Err(_) => Err(ParseError::Syntax {
            offset: input.len() - remaining.len(),
        }),
    }
}

impl FromStr for Rule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}

/// Parse a condition: `and_cond | or_cond | relation`.
///
/// A failed `and_cond` backtracks to the start of the condition, so the
/// leading relation is re-parsed by the next alternative.
fn condition(input: &mut &str) -> ModalResult<Condition> {
    alt((and_cond, or_cond, relation.map(Condition::Relation))).parse_next(input)
}

/// Parse `relation ws "and" ws condition`.
fn and_cond(input: &mut &str) -> ModalResult<Condition> {
    (relation, ws, "and", ws, condition)
        .map(|(left, _, _, _, rest)| Condition::And(left, Box::new(rest)))
        .parse_next(input)
}

/// Parse `relation ws "or" ws condition`.
fn or_cond(input: &mut &str) -> ModalResult<Condition> {
    (relation, ws, "or", ws, condition)
        .map(|(left, _, _, _, rest)| Condition::Or(left, Box::new(rest)))
        .parse_next(input)
}

/// Parse a relation: `is_rel | in_rel | within_rel`.
fn relation(input: &mut &str) -> ModalResult<Relation> {
    alt((is_rel, in_rel, within_rel)).parse_next(input)
}

/// Parse `operand ws "is" not? ws digits`.
fn is_rel(input: &mut &str) -> ModalResult<Relation> {
    (operand, ws, "is", opt(not), ws, digits)
        .map(|(operand, _, _, negated, _, value)| Relation::Is {
            operand,
            negated: negated.is_some(),
            value,
        })
        .parse_next(input)
}

/// Parse `operand not? ws "in" ws range`.
fn in_rel(input: &mut &str) -> ModalResult<Relation> {
    (operand, opt(not), ws, "in", ws, range)
        .map(|(operand, negated, _, _, _, range)| Relation::In {
            operand,
            negated: negated.is_some(),
            range,
        })
        .parse_next(input)
}

/// Parse `operand ws "within" ws range`. There is no negated form.
fn within_rel(input: &mut &str) -> ModalResult<Relation> {
    (operand, ws, "within", ws, range)
        .map(|(operand, _, _, _, range)| Relation::Within { operand, range })
        .parse_next(input)
}

/// Parse an operand: `"n" ws "mod" ws digits` or the bare `"n"`.
///
/// The mod form is tried first; the bare `n` would otherwise shadow it.
fn operand(input: &mut &str) -> ModalResult<Operand> {
    alt((mod_operand, 'n'.value(Operand::N))).parse_next(input)
}

/// Parse `"n" ws "mod" ws digits`.
fn mod_operand(input: &mut &str) -> ModalResult<Operand> {
    ('n', ws, "mod", ws, digits)
        .map(|(_, _, _, _, divisor)| Operand::Mod { divisor })
        .parse_next(input)
}

/// Parse the `not` keyword with its leading whitespace.
fn not(input: &mut &str) -> ModalResult<()> {
    (ws, "not").void().parse_next(input)
}

/// Parse an inclusive range: `digits ".." digits`.
fn range(input: &mut &str) -> ModalResult<Range> {
    (digits, "..", digits)
        .map(|(low, _, high)| Range { low, high })
        .parse_next(input)
}

/// Parse one or more decimal digits as a number. A run that does not fit
/// `u64` fails the production.
fn digits(input: &mut &str) -> ModalResult<u64> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(str::parse)
        .parse_next(input)
}

/// Parse one or more whitespace characters.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(1.., char::is_whitespace)
        .void()
        .parse_next(input)
}
