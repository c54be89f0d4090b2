pub mod evaluator;
pub mod parser;

pub use evaluator::eval_rule;
pub use parser::{Condition, Operand, ParseError, Range, Relation, Rule, parse_rule};

/// Evaluate a plural rule against a number.
///
/// Parses `rule` and tests whether `number` satisfies it. Rules are the
/// boolean expressions used for CLDR-style plural category selection, such
/// as `"n mod 10 is 1 and n mod 100 is not 11"`; the caller maps the
/// resulting booleans to category names. When one rule will be tested
/// against many numbers, parse it once with [`parse_rule`] and call
/// [`Rule::matches`] instead.
///
/// # Errors
///
/// Returns [`ParseError`] when the rule text does not match the grammar or
/// leaves trailing unparsed text. A rule that parses but evaluates to false
/// is `Ok(false)`, never an error.
///
/// # Examples
///
/// ```
/// assert_eq!(pluralrule::evaluate("n is 1", 1), Ok(true));
/// assert_eq!(pluralrule::evaluate("n is 1", 2), Ok(false));
/// assert_eq!(pluralrule::evaluate("n mod 10 in 2..4", 22), Ok(true));
/// assert!(pluralrule::evaluate("n maybe 1", 1).is_err());
/// ```
pub fn evaluate(rule: &str, number: u64) -> Result<bool, ParseError> {
    Ok(parse_rule(rule)?.matches(number))
}
