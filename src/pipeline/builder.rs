use std::path::Path;

use crate::alignment::signature_table::SignatureTable;
use crate::config::AlignerConfig;
use crate::error::AlignmentError;
use crate::pipeline::defaults::{BoundarySegmentGrouper, EditDistanceAligner, TableSignatureExpander};
use crate::pipeline::runtime::{SignatureAligner, SignatureAlignerParts};
use crate::pipeline::traits::{SegmentGrouper, SequenceAligner, SignatureExpander};

pub struct SignatureAlignerBuilder {
    config: AlignerConfig,
    table: Option<SignatureTable>,
    expander: Option<Box<dyn SignatureExpander>>,
    sequence_aligner: Option<Box<dyn SequenceAligner>>,
    segment_grouper: Option<Box<dyn SegmentGrouper>>,
}

impl SignatureAlignerBuilder {
    pub fn new(config: AlignerConfig) -> Self {
        Self {
            config,
            table: None,
            expander: None,
            sequence_aligner: None,
            segment_grouper: None,
        }
    }

    /// Use `table` instead of loading `signature_table_path`.
    pub fn with_signature_table(mut self, table: SignatureTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_expander(mut self, expander: Box<dyn SignatureExpander>) -> Self {
        self.expander = Some(expander);
        self
    }

    pub fn with_sequence_aligner(mut self, sequence_aligner: Box<dyn SequenceAligner>) -> Self {
        self.sequence_aligner = Some(sequence_aligner);
        self
    }

    pub fn with_segment_grouper(mut self, segment_grouper: Box<dyn SegmentGrouper>) -> Self {
        self.segment_grouper = Some(segment_grouper);
        self
    }

    pub fn build(self) -> Result<SignatureAligner, AlignmentError> {
        let table = match self.table {
            Some(table) => table,
            None => {
                if self.config.signature_table_path.is_empty() {
                    return Err(AlignmentError::invalid_input(
                        "no signature table given and signature_table_path is empty",
                    ));
                }
                SignatureTable::load(Path::new(&self.config.signature_table_path))?
            }
        };

        if table.is_empty() {
            tracing::warn!("builder: signature table is empty, every unit will be skipped");
        }

        Ok(SignatureAligner::from_parts(SignatureAlignerParts {
            table,
            granularity: self.config.granularity,
            word_separator: self.config.word_separator,
            expander: self
                .expander
                .unwrap_or_else(|| Box::new(TableSignatureExpander)),
            sequence_aligner: self
                .sequence_aligner
                .unwrap_or_else(|| Box::new(EditDistanceAligner)),
            segment_grouper: self
                .segment_grouper
                .unwrap_or_else(|| Box::new(BoundarySegmentGrouper)),
        }))
    }
}
