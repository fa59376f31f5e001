use std::collections::HashMap;
use std::path::Path;

use super::symbol::parse_codes;
use crate::error::{AlignmentError, SequenceSide};

/// Character to signature lookup used to expand transcriptions.
///
/// A character may map to an empty signature (invisible marks); characters
/// missing from the table expand to nothing as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureTable {
    entries: HashMap<char, String>,
}

impl SignatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, validating every signature against the alphabet.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (char, String)>,
    ) -> Result<Self, AlignmentError> {
        let mut table = Self::new();
        for (c, signature) in entries {
            table.insert(c, signature)?;
        }
        Ok(table)
    }

    /// Load a JSON object mapping single characters to signature strings.
    pub fn load(path: &Path) -> Result<Self, AlignmentError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| AlignmentError::io("read signature table", e))?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, AlignmentError> {
        let raw: HashMap<String, String> = serde_json::from_str(data)
            .map_err(|e| AlignmentError::json("parse signature table", e))?;

        let mut table = Self::new();
        for (key, signature) in raw {
            let mut it = key.chars();
            let (Some(c), None) = (it.next(), it.next()) else {
                tracing::warn!(
                    key = key.as_str(),
                    "signature_table: ignoring entry whose key is not a single character"
                );
                continue;
            };
            table.insert(c, signature)?;
        }
        tracing::debug!(entries = table.len(), "signature_table: loaded");
        Ok(table)
    }

    pub fn insert(&mut self, c: char, signature: String) -> Result<(), AlignmentError> {
        parse_codes(signature.chars(), SequenceSide::Table)?;
        self.entries.insert(c, signature);
        Ok(())
    }

    pub fn signature_of(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
