//! Search endpoint query parameters.

use crate::{FunctionCall, Params};

/// Parameter carrying the output of `ExtendedFiltersBuilder`.
pub const EXTENDED_FILTERS: &str = "extended_filters";

/// Parameters of a `search` call.
///
/// Defaults: empty query, 10 items, first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    params: Params,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self { params: Params::new() }.query("").items(10).page(0)
    }

    /// Full-text query.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.params.set("query", query);
        self
    }

    /// Number of results per page.
    pub fn items(mut self, items: u32) -> Self {
        self.params.set("items", items.to_string());
        self
    }

    /// Zero-based result offset, in items.
    pub fn page(mut self, page: u32) -> Self {
        self.params.set("page", page.to_string());
        self
    }

    /// Attach an expression produced by `ExtendedFiltersBuilder`. An empty
    /// expression leaves the parameter unset.
    pub fn extended_filters(mut self, expression: &str) -> Self {
        if !expression.is_empty() {
            self.params.set(EXTENDED_FILTERS, expression);
        }
        self
    }
}

impl FunctionCall for SearchQuery {
    fn name(&self) -> &'static str {
        "search"
    }

    fn params(&self) -> &Params {
        &self.params
    }
}
