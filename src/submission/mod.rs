pub mod hooks;
pub mod parser;

use std::collections::HashMap;

use serde::Serialize;

/// The decoded field/value mapping from a single form POST.
///
/// Built fresh per request and discarded after the response; never persisted.
/// The empty mapping is a valid submission.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Submission {
    fields: HashMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, value: String) {
        self.fields.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Submission {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
