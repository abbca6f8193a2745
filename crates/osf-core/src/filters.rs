//! Expression builder for the `extended_filters` search parameter.
//!
//! ```rust
//! use osf_core::ExtendedFiltersBuilder;
//!
//! let filters = ExtendedFiltersBuilder::new()
//!     .start_grouping()
//!     .attribute_value_filter("http://purl.org/ontology/iron#prefLabel", "cancer AND NOT (breast OR ovarian)", false)
//!     .end_grouping()
//!     .and()
//!     .dataset_filter("file://localhost/data/ontologies/files/doha.owl");
//!
//! assert!(filters.extended_filters().ends_with("%22"));
//! ```
//!
//! The builder appends one token per call and never rewrites what it has
//! already produced. Structural problems (adjacent operators, unbalanced
//! groups, malformed raw sub-queries) are detected as tokens arrive; in
//! [`Mode::Strict`] the first one is returned by [`ExtendedFiltersBuilder::finish`].

use crate::config::FiltersConfig;
use crate::encoding::{self, double_encode, quote, urlencode};
use crate::error::{Defect, FilterError, Result, SubqueryDefect};
use crate::structure::{Structure, Token};
use serde::Deserialize;
use std::fmt;

/// Value matched by [`ExtendedFiltersBuilder::attribute_filter`].
pub const ANY_VALUE: &str = "*";

// ---------------------------------------------------------------------------
// Mode + operators
// ---------------------------------------------------------------------------

/// How strictly the builder treats structural problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Accept any token sequence; problems are only logged.
    #[default]
    Permissive,
    /// Report the first problem from [`ExtendedFiltersBuilder::finish`].
    Strict,
}

/// Boolean operator joining two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    /// The literal keyword with its surrounding spaces, before encoding.
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::And => " AND ",
            Operator::Or => " OR ",
            Operator::Not => " NOT ",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword().trim())
    }
}

#[derive(Debug, Clone)]
enum Violation {
    Structure { position: usize, defect: Defect },
    Subquery { value: String, defect: SubqueryDefect },
}

impl From<Violation> for FilterError {
    fn from(v: Violation) -> Self {
        match v {
            Violation::Structure { position, defect } => {
                FilterError::MalformedExpression { position, defect }
            }
            Violation::Subquery { value, defect } => FilterError::MalformedSubquery { value, defect },
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Accumulates an extended filters expression one token at a time.
#[derive(Debug, Clone, Default)]
pub struct ExtendedFiltersBuilder {
    expression: String,
    mode: Mode,
    structure: Structure,
    violation: Option<Violation>,
}

impl ExtendedFiltersBuilder {
    /// An empty, permissive builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty builder that rejects malformed expressions on [`finish`](Self::finish).
    pub fn strict() -> Self {
        Self::with_mode(Mode::Strict)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn from_config(config: &FiltersConfig) -> Self {
        Self::with_mode(config.mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Restrict results to one dataset.
    ///
    /// Encoded once, unlike every other term. The endpoint has always been
    /// fed this asymmetry and changing it would change the wire output.
    pub fn dataset_filter(self, dataset: &str) -> Self {
        let token = format!("dataset:{}", urlencode(&quote(dataset)));
        self.push(Token::Term, &token)
    }

    /// Restrict results to one type. With `inference`, records whose inferred
    /// types include it match too.
    pub fn type_filter(self, type_uri: &str, inference: bool) -> Self {
        let quoted = double_encode(&quote(type_uri));
        let token = if inference {
            format!(
                "(type:{quoted}{}inferred_type:{quoted})",
                double_encode(Operator::Or.keyword())
            )
        } else {
            format!("type:{quoted}")
        };
        self.push(Token::Term, &token)
    }

    /// Match records whose `attribute` has `value`.
    ///
    /// Set `value_is_uri` when the attribute is an object property. A non-URI
    /// value containing query syntax is passed through unescaped as a
    /// sub-query; see [`encoding::is_raw_subquery`].
    pub fn attribute_value_filter(mut self, attribute: &str, value: &str, value_is_uri: bool) -> Self {
        if encoding::is_raw_subquery(value, value_is_uri) {
            if let Err(defect) = encoding::validate_subquery(value) {
                tracing::warn!(value, %defect, "extended filters: malformed raw sub-query");
                self.record(Violation::Subquery { value: value.to_string(), defect });
            }
        }
        let token = encoding::encode_term(attribute, value, value_is_uri);
        self.push(Token::Term, &token)
    }

    /// Match records that have any value for `attribute`.
    pub fn attribute_filter(self, attribute: &str) -> Self {
        self.attribute_value_filter(attribute, ANY_VALUE, false)
    }

    /// Append a boolean operator.
    ///
    /// Operators are encoded once (`+AND+`), not twice like terms: after the
    /// request layer strips its encoding they must read as plain keywords.
    pub fn operator(self, op: Operator) -> Self {
        self.push(Token::Operator, &urlencode(op.keyword()))
    }

    pub fn and(self) -> Self {
        self.operator(Operator::And)
    }

    pub fn or(self) -> Self {
        self.operator(Operator::Or)
    }

    pub fn not(self) -> Self {
        self.operator(Operator::Not)
    }

    pub fn start_grouping(self) -> Self {
        self.push(Token::Open, "(")
    }

    pub fn end_grouping(self) -> Self {
        self.push(Token::Close, ")")
    }

    /// The expression accumulated so far. Reading it changes nothing.
    pub fn extended_filters(&self) -> &str {
        &self.expression
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    /// Check the expression regardless of mode.
    pub fn check(&self) -> Result<()> {
        if let Some(v) = &self.violation {
            return Err(v.clone().into());
        }
        self.structure
            .complete()
            .map_err(|defect| FilterError::MalformedExpression {
                position: self.structure.tokens(),
                defect,
            })
    }

    /// Finalize. In [`Mode::Strict`] the expression must be well formed; an
    /// empty expression is always accepted.
    pub fn finish(&self) -> Result<String> {
        if self.mode == Mode::Strict {
            self.check()?;
        }
        Ok(self.expression.clone())
    }

    fn record(&mut self, violation: Violation) {
        if self.violation.is_none() {
            self.violation = Some(violation);
        }
    }

    fn push(mut self, token: Token, text: &str) -> Self {
        let position = self.structure.tokens();
        if let Err(defect) = self.structure.push(token) {
            tracing::warn!(position, %defect, ?token, "extended filters: structural violation");
            self.record(Violation::Structure { position, defect });
        }
        self.expression.push_str(text);
        tracing::debug!(position, ?token, text, "extended filters: token appended");
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
