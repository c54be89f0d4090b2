//! Plural rule parser.
//!
//! This module parses rule strings in the CLDR-style plural rule language
//! into an AST. The AST can be evaluated against numbers by the
//! [`evaluator`](crate::evaluator) module, or inspected by external tooling.

pub mod ast;
pub mod error;
mod rule;

pub use ast::*;
pub use error::ParseError;
pub use rule::parse_rule;
