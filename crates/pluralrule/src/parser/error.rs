//! Parse error type for plural rules.

use thiserror::Error;

/// An error describing why a rule string is malformed.
///
/// A malformed rule is a data error in the caller's rule set, not a
/// transient condition; there is no partial-success mode and no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No grammar production matched the rule text.
    #[error("syntax error at offset {offset}")]
    Syntax { offset: usize },

    /// A condition matched but left unconsumed trailing text.
    #[error("trailing text at offset {offset}: {text:?}")]
    Trailing { offset: usize, text: String },
}
