//! Fixed URIs, values, and the golden `extended_filters` string.

#![allow(dead_code)]

use osf_core::ExtendedFiltersBuilder;

pub const PREF_LABEL: &str = "http://purl.org/ontology/iron#prefLabel";
pub const USE_GROUP_SIGNIFICANT: &str = "http://purl.org/ontology/nhccn#useGroupSignificant";
pub const LIVER_CANCER: &str = "http://purl.org/ontology/doha#liver_cancer";
pub const DOHA_DATASET: &str = "file://localhost/data/ontologies/files/doha.owl";
pub const BOOK: &str = "http://purl.org/ontology/bibo/Book";

/// Raw sub-query that must survive unescaped.
pub const CANCER_SUBQUERY: &str = "cancer AND NOT (breast OR ovarian)";

/// Wire value produced by [`golden_builder`].
pub const GOLDEN: &str = concat!(
    "(http%253A%252F%252Fpurl.org%252Fontology%252Firon%2523prefLabel:",
    "cancer%2BAND%2BNOT%2B%2528breast%2BOR%2Bovarian%2529)",
    "+AND+",
    "(http%253A%252F%252Fpurl.org%252Fontology%252Fnhccn%2523useGroupSignificant[uri]:",
    "http%255C%253A%252F%252Fpurl.org%252Fontology%252Fdoha%2523liver_cancer",
    "+OR+",
    "http%253A%252F%252Fpurl.org%252Fontology%252Fnhccn%2523useGroupSignificant:cancer)",
    "+AND+",
    "dataset:%22file%3A%2F%2Flocalhost%2Fdata%2Fontologies%2Ffiles%2Fdoha.owl%22",
);

/// The documented example: a grouped raw sub-query, AND a grouped OR of a
/// URI-valued and a literal attribute filter, AND a dataset.
pub fn golden_builder(builder: ExtendedFiltersBuilder) -> ExtendedFiltersBuilder {
    builder
        .start_grouping()
        .attribute_value_filter(PREF_LABEL, CANCER_SUBQUERY, false)
        .end_grouping()
        .and()
        .start_grouping()
        .attribute_value_filter(USE_GROUP_SIGNIFICANT, LIVER_CANCER, true)
        .or()
        .attribute_value_filter(USE_GROUP_SIGNIFICANT, "cancer", false)
        .end_grouping()
        .and()
        .dataset_filter(DOHA_DATASET)
}
