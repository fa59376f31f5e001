use crate::alignment::edit_distance::SignaturePath;
use crate::alignment::signature_table::SignatureTable;
use crate::config::UnitGranularity;
use crate::error::AlignmentError;
use crate::types::{AlignedSegment, ImageSignatureSymbol, TextSignature, TextSignatureSymbol};

pub trait SignatureExpander: Send + Sync {
    fn expand(
        &self,
        transcription: &str,
        table: &SignatureTable,
        granularity: UnitGranularity,
        word_separator: Option<char>,
    ) -> TextSignature;
}

pub trait SequenceAligner: Send + Sync {
    fn align_path(
        &self,
        image: &[ImageSignatureSymbol],
        text: &[TextSignatureSymbol],
    ) -> Result<SignaturePath, AlignmentError>;
}

pub trait SegmentGrouper: Send + Sync {
    fn group_segments(
        &self,
        path: &SignaturePath,
        image: &[ImageSignatureSymbol],
        text: &[TextSignatureSymbol],
    ) -> Vec<AlignedSegment>;
}
