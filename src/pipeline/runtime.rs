use crate::alignment::signature_table::SignatureTable;
use crate::config::UnitGranularity;
use crate::error::AlignmentError;
use crate::pipeline::traits::{SegmentGrouper, SequenceAligner, SignatureExpander};
use crate::types::{AlignmentOutput, ImageSignatureSymbol, TextSignatureSymbol, UnitAlignment};

pub struct SignatureAligner {
    table: SignatureTable,
    granularity: UnitGranularity,
    word_separator: Option<char>,
    expander: Box<dyn SignatureExpander>,
    sequence_aligner: Box<dyn SequenceAligner>,
    segment_grouper: Box<dyn SegmentGrouper>,
}

pub(crate) struct SignatureAlignerParts {
    pub table: SignatureTable,
    pub granularity: UnitGranularity,
    pub word_separator: Option<char>,
    pub expander: Box<dyn SignatureExpander>,
    pub sequence_aligner: Box<dyn SequenceAligner>,
    pub segment_grouper: Box<dyn SegmentGrouper>,
}

impl SignatureAligner {
    pub(crate) fn from_parts(parts: SignatureAlignerParts) -> Self {
        Self {
            table: parts.table,
            granularity: parts.granularity,
            word_separator: parts.word_separator,
            expander: parts.expander,
            sequence_aligner: parts.sequence_aligner,
            segment_grouper: parts.segment_grouper,
        }
    }

    pub fn signature_table(&self) -> &SignatureTable {
        &self.table
    }

    pub fn granularity(&self) -> UnitGranularity {
        self.granularity
    }

    /// Align pre-expanded signatures. Empty input performs no alignment.
    pub fn align(
        &self,
        image: &[ImageSignatureSymbol],
        text: &[TextSignatureSymbol],
    ) -> Result<AlignmentOutput, AlignmentError> {
        if image.is_empty() || text.is_empty() {
            tracing::debug!(
                image_len = image.len(),
                text_len = text.len(),
                "aligner: empty signature, nothing to align"
            );
            return Ok(AlignmentOutput::empty());
        }

        let path = self.sequence_aligner.align_path(image, text)?;
        let segments = self.segment_grouper.group_segments(&path, image, text);
        Ok(AlignmentOutput {
            segments,
            cost: Some(path.cost),
        })
    }

    /// Expand `transcription` with the configured table and align it with one
    /// line's image signature.
    ///
    /// Every unit of the transcription gets an entry, in order; units that
    /// could not be aligned carry no segment.
    pub fn align_text(
        &self,
        image: &[ImageSignatureSymbol],
        transcription: &str,
    ) -> Result<Vec<UnitAlignment>, AlignmentError> {
        let signature = self.expander.expand(
            transcription,
            &self.table,
            self.granularity,
            self.word_separator,
        );
        let output = self.align(image, &signature.symbols)?;

        if output.cost.is_some() && output.segments.len() < signature.units.len() {
            tracing::warn!(
                units = signature.units.len(),
                segments = output.segments.len(),
                "aligner: fewer segments than units, leaving the rest unaligned"
            );
        }

        let mut segments = output.segments.into_iter();
        let mut result: Vec<UnitAlignment> = signature
            .units
            .into_iter()
            .map(|unit| UnitAlignment {
                text: unit.text,
                unit_index: unit.unit_index,
                segment: segments.next(),
            })
            .collect();
        // Units dropped at expansion still get an entry so indices match the text.
        result.extend(signature.skipped.into_iter().map(|unit| UnitAlignment {
            text: unit.text,
            unit_index: unit.unit_index,
            segment: None,
        }));
        result.sort_by_key(|unit| unit.unit_index);

        tracing::debug!(
            units = result.len(),
            aligned = result.iter().filter(|u| u.segment.is_some()).count(),
            cost = ?output.cost,
            "aligner: aligned transcription"
        );
        Ok(result)
    }
}
