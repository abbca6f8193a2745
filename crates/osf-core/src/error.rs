//! Error types for osf-core.
//!
//! Building an expression never fails in permissive mode. Strict mode records
//! the first structural problem and reports it from
//! [`ExtendedFiltersBuilder::finish`](crate::ExtendedFiltersBuilder::finish).

use crate::script::ScriptError;
use std::fmt;

/// Errors raised while building, validating, or decoding extended filters.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The token sequence does not form a valid expression.
    #[error("malformed expression at token {position}: {defect}")]
    MalformedExpression { position: usize, defect: Defect },

    /// A raw (unescaped) attribute value is not a well-formed sub-query.
    #[error("malformed sub-query {value:?}: {defect}")]
    MalformedSubquery { value: String, defect: SubqueryDefect },

    #[error(transparent)]
    Script(#[from] ScriptError),

    /// A decoded wire value was not valid UTF-8.
    #[error("decoded value is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// What went wrong structurally. Positions count appended tokens from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defect {
    /// A boolean operator appeared where a term or group was expected.
    OperatorWithoutLeftOperand,
    /// A term or opening group followed a term with no operator between them.
    MissingOperator,
    /// A closing group appeared with no group open.
    UnmatchedClose,
    /// A closing group appeared where a term was expected (`()` or `AND )`).
    EmptyOperand,
    /// The expression ended after an operator or inside an open group.
    Incomplete { open_groups: usize },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::OperatorWithoutLeftOperand => write!(f, "operator where a term was expected"),
            Defect::MissingOperator => write!(f, "two operands without an operator between them"),
            Defect::UnmatchedClose => write!(f, "closing group without a matching opening group"),
            Defect::EmptyOperand => write!(f, "closing group where a term was expected"),
            Defect::Incomplete { open_groups: 0 } => write!(f, "expression ends with an operator"),
            Defect::Incomplete { open_groups } => {
                write!(f, "expression ends with {open_groups} group(s) still open")
            }
        }
    }
}

/// Problems found in a raw sub-query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubqueryDefect {
    UnbalancedParentheses,
    UnterminatedQuote,
}

impl fmt::Display for SubqueryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubqueryDefect::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            SubqueryDefect::UnterminatedQuote => write!(f, "unterminated double quote"),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
