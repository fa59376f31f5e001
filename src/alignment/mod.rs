pub mod assign;
pub mod edit_distance;
pub mod expansion;
pub mod segments;
pub mod signature_table;
pub mod symbol;

use crate::error::AlignmentError;
use crate::types::{AlignedSegment, ImageSignatureSymbol, TextSignatureSymbol};

/// Align an image signature with a text signature and return one segment per
/// unit start of `text`, left to right.
///
/// Either sequence being empty yields an empty result, meaning no alignment
/// was performed. A code outside the signature alphabet is an error.
pub fn align_signatures(
    image: &[ImageSignatureSymbol],
    text: &[TextSignatureSymbol],
) -> Result<Vec<AlignedSegment>, AlignmentError> {
    if image.is_empty() || text.is_empty() {
        return Ok(Vec::new());
    }
    let path = edit_distance::signature_edit_path(image, text)?;
    Ok(segments::build_segments(&path, image, text))
}
