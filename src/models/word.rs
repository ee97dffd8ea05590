// src/models/word.rs

use std::{collections::BTreeSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// A single vocabulary record as stored in the words file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WordEntry {
    /// The word itself. Doubles as the question id.
    #[validate(length(min = 1, max = 200))]
    pub word: String,

    #[validate(length(min = 1, max = 2000))]
    pub definition: String,

    /// Entries without a category only show up in unfiltered questions.
    #[serde(default)]
    pub category: Option<String>,
}

impl WordEntry {
    pub fn new(word: &str, definition: &str, category: Option<&str>) -> Self {
        Self {
            word: word.to_string(),
            definition: definition.to_string(),
            category: category.map(str::to_string),
        }
    }
}

/// The full, read-only word list. Loaded once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<WordEntry>,
}

impl Vocabulary {
    /// Builds a vocabulary, rejecting an empty list or entries that fail validation.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, AppError> {
        if entries.is_empty() {
            return Err(AppError::InternalServerError(
                "Vocabulary must contain at least one word".to_string(),
            ));
        }

        for (index, entry) in entries.iter().enumerate() {
            entry.validate().map_err(|e| {
                AppError::InternalServerError(format!("Invalid vocabulary entry #{}: {}", index, e))
            })?;
        }

        Ok(Self { entries })
    }

    /// Parses a JSON array of `{word, definition, category?}` records.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let entries: Vec<WordEntry> = serde_json::from_str(raw).map_err(|e| {
            AppError::InternalServerError(format!("Failed to parse vocabulary: {}", e))
        })?;
        Self::new(entries)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::InternalServerError(format!(
                "Failed to read vocabulary file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&raw)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose category equals `category` exactly.
    pub fn in_category(&self, category: &str) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|e| e.category.as_deref() == Some(category))
            .collect()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    /// Sorted, de-duplicated category names.
    pub fn categories(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| e.category.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of distinct word strings; bounds how many options a question can offer.
    pub fn distinct_word_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.word.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
