pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use alignment::align_signatures;
pub use alignment::assign::apply_segments;
pub use alignment::edit_distance::SignaturePath;
pub use alignment::signature_table::SignatureTable;
pub use alignment::symbol::SignatureCode;
pub use config::{AlignerConfig, UnitGranularity};
pub use error::{AlignmentError, SequenceSide};
pub use pipeline::builder::SignatureAlignerBuilder;
pub use pipeline::runtime::SignatureAligner;
pub use pipeline::traits::{SegmentGrouper, SequenceAligner, SignatureExpander};
pub use types::{
    AlignedSegment, AlignmentOutput, ExpandedUnit, ImageSignatureSymbol, Rect, TextSignature,
    TextSignatureSymbol, UnitAlignment, UnitRecord, NEUTRAL_CUT_PROBABILITY,
};
