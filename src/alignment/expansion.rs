use super::signature_table::SignatureTable;
use super::symbol::SignatureCode;
use crate::config::UnitGranularity;
use crate::types::{ExpandedUnit, TextSignature, TextSignatureSymbol};

fn unit_signature(unit: &str, table: &SignatureTable) -> String {
    let mut signature = String::new();
    for c in unit.chars() {
        match table.signature_of(c) {
            Some(s) => signature.push_str(s),
            None => tracing::debug!(char = %c, unit, "expansion: character has no signature"),
        }
    }
    signature
}

fn separator_signature(separator: Option<char>, table: &SignatureTable) -> String {
    let Some(sep) = separator else {
        return String::new();
    };
    match table.signature_of(sep) {
        Some(s) => s.to_string(),
        None => SignatureCode::from_char(sep)
            .map(|code| code.as_char().to_string())
            .unwrap_or_default(),
    }
}

/// Expand a transcription into a text signature, one unit per word or per
/// character.
///
/// Units whose signature is empty contribute no symbols and are listed in
/// `skipped`; `units` keeps the others in order. Both carry the unit's index
/// in the transcription. Between words, the separator's
/// signature is appended to the last unit of the previous word.
pub fn expand_transcription(
    transcription: &str,
    table: &SignatureTable,
    granularity: UnitGranularity,
    word_separator: Option<char>,
) -> TextSignature {
    let separator = separator_signature(word_separator, table);
    let mut symbols = Vec::new();
    let mut units = Vec::new();
    let mut skipped = Vec::new();
    let mut unit_count = 0usize;
    let mut pending_separator = false;

    for word in transcription.split_whitespace() {
        let word_units: Vec<&str> = match granularity {
            UnitGranularity::Word => vec![word],
            UnitGranularity::Character => word
                .char_indices()
                .map(|(k, c)| &word[k..k + c.len_utf8()])
                .collect(),
        };

        let mut word_emitted = false;
        for unit in word_units {
            let unit_index = unit_count;
            unit_count += 1;

            let signature = unit_signature(unit, table);
            if signature.is_empty() {
                tracing::debug!(unit, unit_index, "expansion: skipping unit with empty signature");
                skipped.push(ExpandedUnit {
                    text: unit.to_string(),
                    unit_index,
                });
                continue;
            }

            if pending_separator {
                symbols.extend(separator.chars().map(|c| TextSignatureSymbol::new(c, false)));
                pending_separator = false;
            }
            symbols.extend(
                signature
                    .chars()
                    .enumerate()
                    .map(|(k, c)| TextSignatureSymbol::new(c, k == 0)),
            );
            units.push(ExpandedUnit {
                text: unit.to_string(),
                unit_index,
            });
            word_emitted = true;
        }
        pending_separator |= word_emitted;
    }

    debug_assert_eq!(
        symbols.iter().filter(|s| s.starts_unit).count(),
        units.len(),
        "one unit start per expanded unit"
    );

    TextSignature {
        symbols,
        units,
        skipped,
    }
}
