use serde::Deserialize;

/// Granularity of the units recovered from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitGranularity {
    #[default]
    Word,
    Character,
}

impl UnitGranularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Character => "character",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    pub signature_table_path: String,
    pub granularity: UnitGranularity,
    /// Character whose signature is appended between words; `None` disables it.
    pub word_separator: Option<char>,
}

impl AlignerConfig {
    pub const DEFAULT_WORD_SEPARATOR: char = ' ';
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            signature_table_path: String::new(),
            granularity: UnitGranularity::Word,
            word_separator: Some(Self::DEFAULT_WORD_SEPARATOR),
        }
    }
}
