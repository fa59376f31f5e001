use std::fmt;

use thiserror::Error;

/// Which input a malformed signature symbol was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceSide {
    Image,
    Text,
    Table,
}

impl fmt::Display for SequenceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image => "image signature",
            Self::Text => "text signature",
            Self::Table => "signature table",
        })
    }
}

#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown signature symbol {symbol:?} in {side} at position {position}")]
    UnknownSignatureSymbol {
        symbol: char,
        side: SequenceSide,
        position: usize,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl AlignmentError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn unknown_symbol(symbol: char, side: SequenceSide, position: usize) -> Self {
        Self::UnknownSignatureSymbol {
            symbol,
            side,
            position,
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
