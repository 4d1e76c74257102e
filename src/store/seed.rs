//! Seed data loading.
//!
//! A seed file is a JSON document with `categories` and `questions`
//! arrays matching the record types. Either array may be omitted.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::record::{Category, Question};

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parsed seed data
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl SeedData {
    /// Load seed data from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
