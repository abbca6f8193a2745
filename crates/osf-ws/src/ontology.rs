//! Ontology: Read endpoint functions.
//!
//! Both functions start from the endpoint's defaults and only require the
//! target `uri`.

use crate::{FunctionCall, Params};

const URI: &str = "uri";
const MODE: &str = "mode";
const DIRECT: &str = "direct";
const TYPE: &str = "type";

// ---------------------------------------------------------------------------
// getSuperClasses
// ---------------------------------------------------------------------------

/// Parameters of a `getSuperClasses` call.
///
/// Defaults: URIs only, direct super-classes only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSuperClassesFunction {
    params: Params,
}

impl Default for GetSuperClassesFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl GetSuperClassesFunction {
    pub fn new() -> Self {
        Self { params: Params::new() }.get_classes_uris().direct_super_classes()
    }

    /// Class whose super-classes are requested. Required.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.params.set(URI, uri);
        self
    }

    pub fn get_classes_uris(mut self) -> Self {
        self.params.set(MODE, "uris");
        self
    }

    pub fn get_classes_descriptions(mut self) -> Self {
        self.params.set(MODE, "descriptions");
        self
    }

    pub fn direct_super_classes(mut self) -> Self {
        self.params.set(DIRECT, "True");
        self
    }

    /// All super-classes, recursively.
    pub fn all_super_classes(mut self) -> Self {
        self.params.set(DIRECT, "False");
        self
    }
}

impl FunctionCall for GetSuperClassesFunction {
    fn name(&self) -> &'static str {
        "getSuperClasses"
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn required(&self) -> &'static [&'static str] {
        &[URI]
    }
}

// ---------------------------------------------------------------------------
// getEquivalentProperties
// ---------------------------------------------------------------------------

/// Parameters of a `getEquivalentProperties` call.
///
/// Defaults: datatype properties, URIs only, all equivalent properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEquivalentPropertiesFunction {
    params: Params,
}

impl Default for GetEquivalentPropertiesFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl GetEquivalentPropertiesFunction {
    pub fn new() -> Self {
        Self { params: Params::new() }
            .get_datatype_properties()
            .get_properties_uris()
            .all_equivalent_properties()
    }

    /// Property whose equivalents are requested. Required.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.params.set(URI, uri);
        self
    }

    pub fn get_datatype_properties(mut self) -> Self {
        self.params.set(TYPE, "dataproperty");
        self
    }

    pub fn get_object_properties(mut self) -> Self {
        self.params.set(TYPE, "objectproperty");
        self
    }

    pub fn get_properties_uris(mut self) -> Self {
        self.params.set(MODE, "uris");
        self
    }

    pub fn get_properties_descriptions(mut self) -> Self {
        self.params.set(MODE, "descriptions");
        self
    }

    pub fn direct_equivalent_properties(mut self) -> Self {
        self.params.set(DIRECT, "True");
        self
    }

    /// Equivalents of equivalents, recursively.
    pub fn all_equivalent_properties(mut self) -> Self {
        self.params.set(DIRECT, "False");
        self
    }
}

impl FunctionCall for GetEquivalentPropertiesFunction {
    fn name(&self) -> &'static str {
        "getEquivalentProperties"
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn required(&self) -> &'static [&'static str] {
        &[URI]
    }
}
