use serde::Serialize;
use std::collections::BTreeMap;

pub trait ToQueryParameter {
    fn to_query(&self) -> Vec<(String, String)>;
}

/// Field name to message mapping produced by the form validators.
///
/// A missing key means the field is valid, so an empty mapping means the whole record is valid.
/// Serialized as a flat JSON object, e.g. `{"end":"End time is required"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record `message` for `field`, replacing any earlier message for the same field.
    pub fn insert(&mut self, field: impl ToString, message: impl ToString) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, message)| (field.to_string(), message.to_string()))
                .collect(),
        )
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                errors.first().map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    (field, message)
                })
            })
            .collect()
    }
}
