use crate::alignment::edit_distance::{signature_edit_path, SignaturePath};
use crate::alignment::expansion::expand_transcription;
use crate::alignment::segments::build_segments;
use crate::alignment::signature_table::SignatureTable;
use crate::config::UnitGranularity;
use crate::error::AlignmentError;
use crate::pipeline::traits::{SegmentGrouper, SequenceAligner, SignatureExpander};
use crate::types::{AlignedSegment, ImageSignatureSymbol, TextSignature, TextSignatureSymbol};

pub struct TableSignatureExpander;

impl SignatureExpander for TableSignatureExpander {
    fn expand(
        &self,
        transcription: &str,
        table: &SignatureTable,
        granularity: UnitGranularity,
        word_separator: Option<char>,
    ) -> TextSignature {
        expand_transcription(transcription, table, granularity, word_separator)
    }
}

pub struct EditDistanceAligner;

impl SequenceAligner for EditDistanceAligner {
    fn align_path(
        &self,
        image: &[ImageSignatureSymbol],
        text: &[TextSignatureSymbol],
    ) -> Result<SignaturePath, AlignmentError> {
        signature_edit_path(image, text)
    }
}

pub struct BoundarySegmentGrouper;

impl SegmentGrouper for BoundarySegmentGrouper {
    fn group_segments(
        &self,
        path: &SignaturePath,
        image: &[ImageSignatureSymbol],
        text: &[TextSignatureSymbol],
    ) -> Vec<AlignedSegment> {
        build_segments(path, image, text)
    }
}
