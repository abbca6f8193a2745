//! osf-ws — parameter builders for OSF web service function calls.
//!
//! Each function call accumulates a [`Params`] map through chained setters,
//! starting from the endpoint's documented defaults. Dispatching the request
//! is left to the caller; [`Params::to_query_string`] gives the form body.

pub mod ontology;
pub mod params;
pub mod search;

pub use ontology::{GetEquivalentPropertiesFunction, GetSuperClassesFunction};
pub use params::Params;
pub use search::SearchQuery;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WsError {
    #[error("{function}: required parameter `{name}` is not set")]
    MissingParameter { function: &'static str, name: &'static str },
}

/// Implemented by every web service function call.
pub trait FunctionCall {
    /// Name of the function on its endpoint, e.g. `getSuperClasses`.
    fn name(&self) -> &'static str;

    fn params(&self) -> &Params;

    /// Keys that must be set before the call is sent.
    fn required(&self) -> &'static [&'static str] {
        &[]
    }

    /// Check that every required parameter has been set.
    fn validate(&self) -> Result<(), WsError> {
        let missing = self.required().iter().copied().find(|key| self.params().get(key).is_none());
        match missing {
            Some(name) => {
                tracing::warn!(function = self.name(), name, "missing required parameter");
                Err(WsError::MissingParameter { function: self.name(), name })
            }
            None => Ok(()),
        }
    }
}
