//! Word-based description of an expression, replayed onto a builder.
//!
//! ```text
//! ( attr http://purl.org/ontology/iron#prefLabel "cancer AND NOT (breast OR ovarian)" )
//!   and dataset file://localhost/data/ontologies/files/doha.owl
//! ```

use crate::filters::{ExtendedFiltersBuilder, Operator};

/// One builder call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    AttributeValue { attribute: String, value: String, value_is_uri: bool },
    Attribute(String),
    Type { uri: String, inference: bool },
    Dataset(String),
    Operator(Operator),
    StartGrouping,
    EndGrouping,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown word `{0}`")]
    UnknownWord(String),
    #[error("`{keyword}` expects {expected} argument(s)")]
    MissingArgument { keyword: String, expected: usize },
}

/// Parse a sequence of words into builder steps.
///
/// Keywords and operators are case-insensitive; their arguments are taken
/// verbatim, so values may contain spaces when passed as one word.
pub fn parse<I, S>(words: I) -> Result<Vec<Step>, ScriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
    let mut steps = Vec::new();
    let mut rest = words.into_iter();

    while let Some(word) = rest.next() {
        let keyword = word.to_ascii_lowercase();
        let mut take = |n: usize| -> Result<Vec<String>, ScriptError> {
            let args: Vec<String> = rest.by_ref().take(n).collect();
            if args.len() < n {
                return Err(ScriptError::MissingArgument { keyword: keyword.clone(), expected: n });
            }
            Ok(args)
        };

        let step = match keyword.as_str() {
            "and" => Step::Operator(Operator::And),
            "or" => Step::Operator(Operator::Or),
            "not" => Step::Operator(Operator::Not),
            "(" => Step::StartGrouping,
            ")" => Step::EndGrouping,
            "attr" | "attr-uri" => {
                let mut args = take(2)?.into_iter();
                let (attribute, value) = (args.next(), args.next());
                Step::AttributeValue {
                    attribute: attribute.unwrap_or_default(),
                    value: value.unwrap_or_default(),
                    value_is_uri: keyword == "attr-uri",
                }
            }
            "any" => Step::Attribute(take(1)?.remove(0)),
            "type" | "type+" => Step::Type {
                uri: take(1)?.remove(0),
                inference: keyword == "type+",
            },
            "dataset" => Step::Dataset(take(1)?.remove(0)),
            _ => return Err(ScriptError::UnknownWord(word)),
        };
        steps.push(step);
    }

    Ok(steps)
}

/// Replay `steps` onto `builder` in order.
pub fn apply(builder: ExtendedFiltersBuilder, steps: &[Step]) -> ExtendedFiltersBuilder {
    steps.iter().fold(builder, |b, step| match step {
        Step::AttributeValue { attribute, value, value_is_uri } => {
            b.attribute_value_filter(attribute, value, *value_is_uri)
        }
        Step::Attribute(attribute) => b.attribute_filter(attribute),
        Step::Type { uri, inference } => b.type_filter(uri, *inference),
        Step::Dataset(uri) => b.dataset_filter(uri),
        Step::Operator(op) => b.operator(*op),
        Step::StartGrouping => b.start_grouping(),
        Step::EndGrouping => b.end_grouping(),
    })
}
