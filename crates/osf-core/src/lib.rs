//! osf-core — extended filters for the OSF Search endpoint.
//!
//! The search endpoint accepts one `extended_filters` parameter holding a
//! boolean expression over attribute/value, type, and dataset terms. This
//! crate builds that expression and encodes each term for the wire.
//!
//! # Layout
//!
//! ```text
//! script ──► filters (ExtendedFiltersBuilder) ──► encoding
//!                   │
//!                   └──► structure (strict-mode checks)
//! ```
//!
//! The builder only produces the parameter value. Sending it, and the other
//! parameters of a request, is left to the caller (see the `osf-ws` crate).

pub mod config;
pub mod encoding;
pub mod error;
pub mod filters;
pub mod script;
pub mod structure;

pub use error::{Defect, FilterError, Result, SubqueryDefect};
pub use filters::{ExtendedFiltersBuilder, Mode, Operator};
