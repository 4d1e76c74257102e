//! Record types for categories and questions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A topic grouping for questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    /// Display label; serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub label: String,
}

impl Category {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}

/// A quiz item.
///
/// The four payload fields are loosely typed: inserts accept any payload
/// shape and pass the fields through unvalidated, so a field may be null,
/// a string, or a number. In particular `category` arrives from some
/// clients as a numeric string ("2") and from others as an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    #[serde(default)]
    pub question: Value,
    #[serde(default)]
    pub answer: Value,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub difficulty: Value,
}

impl Question {
    /// The question text, when the field holds a string.
    pub fn text(&self) -> Option<&str> {
        self.question.as_str()
    }

    /// Whether this question belongs to the given category id.
    ///
    /// Accepts both integer and numeric-string encodings of the category
    /// field; anything else never matches.
    pub fn in_category(&self, category_id: u64) -> bool {
        match &self.category {
            Value::Number(n) => n.as_u64() == Some(category_id),
            Value::String(s) => s.parse::<u64>().ok() == Some(category_id),
            _ => false,
        }
    }
}

/// Insert payload for a new question. The store assigns the id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Value,
    #[serde(default)]
    pub answer: Value,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub difficulty: Value,
}

impl NewQuestion {
    /// Materialize the record with a store-assigned id.
    pub fn into_question(self, id: u64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
