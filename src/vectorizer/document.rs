use serde::{Deserialize, Serialize};

/// A labeled training example.
///
/// Serialized as `{ "sentence": "...", "class": "..." }`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Document {
    pub sentence: String,
    pub class: String,
}

impl Document {
    pub fn new(sentence: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
            class: class.into(),
        }
    }
}
