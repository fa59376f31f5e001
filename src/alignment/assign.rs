use crate::types::{AlignedSegment, UnitRecord};

/// Write segment boxes onto unit records, in order.
///
/// Stops at the shorter of the two sequences: records without a segment keep
/// their previous box. Returns the number of records assigned.
pub fn apply_segments(records: &mut [UnitRecord], segments: &[AlignedSegment]) -> usize {
    if segments.len() < records.len() {
        tracing::warn!(
            records = records.len(),
            segments = segments.len(),
            "assign: fewer segments than units, leaving the rest unaligned"
        );
    }

    let mut changed = 0usize;
    let assigned = records.len().min(segments.len());
    for (record, segment) in records.iter_mut().zip(segments) {
        if record.set_bbox(segment.bbox) {
            changed += 1;
        }
    }
    tracing::debug!(assigned, changed, "assign: wrote segment boxes");
    assigned
}
