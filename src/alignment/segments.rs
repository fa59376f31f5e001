use super::edit_distance::SignaturePath;
use crate::types::{AlignedSegment, ImageSignatureSymbol, Rect, TextSignatureSymbol};

/// Segment still accepting image symbols.
struct OpenSegment {
    /// First image symbol of the unit (0-based).
    start: usize,
    /// Last image symbol claimed so far (0-based, inclusive).
    iend: usize,
    bbox: Rect,
}

/// 0-based image symbol reached by text symbol `t`; `image_len` when the
/// text symbol was inserted after the last image symbol.
#[inline]
fn image_symbol_at(path: &SignaturePath, t: usize, image_len: usize) -> usize {
    path.image_index[t].saturating_sub(1).min(image_len)
}

/// True when the image symbol reached at `t` stays the same up to the next
/// unit start; that symbol is left for the next unit.
fn held_until_boundary(
    path: &SignaturePath,
    text: &[TextSignatureSymbol],
    t: usize,
    image_len: usize,
) -> bool {
    let current = image_symbol_at(path, t, image_len);
    for u in t + 1..=text.len() {
        if image_symbol_at(path, u, image_len) != current {
            return false;
        }
        if text[u - 1].starts_unit {
            return true;
        }
    }
    false
}

fn union_range(bbox: Rect, symbols: &[ImageSignatureSymbol]) -> Rect {
    symbols.iter().fold(bbox, |acc, sym| acc.union(&sym.bbox))
}

/// Close `seg` right before `next_start`, folding in skipped symbols.
fn close_segment(
    seg: OpenSegment,
    next_start: usize,
    image: &[ImageSignatureSymbol],
) -> AlignedSegment {
    // The boundary symbol belongs to the next unit, never to both.
    let end = next_start.max(seg.start);
    let bbox = if seg.iend < end {
        union_range(seg.bbox, &image[seg.iend + 1..end])
    } else if seg.start < end {
        // Leading unit whose own symbol was handed to the next unit.
        union_range(Rect::INVALID, &image[seg.start..end])
    } else {
        seg.bbox
    };
    AlignedSegment {
        bbox,
        consumed_code: image[seg.start..end].iter().map(|s| s.code).collect(),
    }
}

/// Group image symbols into one segment per unit start of `text`.
///
/// Segments cover consecutive half-open image ranges: symbols before the
/// first unit go to the first segment, symbols after the last unit to the
/// last one, so the consumed codes concatenate to the whole image signature.
pub fn build_segments(
    path: &SignaturePath,
    image: &[ImageSignatureSymbol],
    text: &[TextSignatureSymbol],
) -> Vec<AlignedSegment> {
    let image_len = image.len();
    if image_len == 0 || text.is_empty() || path.image_index.len() != text.len() + 1 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut open: Option<OpenSegment> = None;

    for t in 1..=text.len() {
        let imgnum = image_symbol_at(path, t, image_len);

        if text[t - 1].starts_unit {
            let start = match open.take() {
                Some(seg) => {
                    segments.push(close_segment(seg, imgnum, image));
                    imgnum
                }
                None => 0,
            };
            let bbox = match image.get(imgnum) {
                Some(sym) => union_range(sym.bbox, &image[start..imgnum]),
                // Nothing left to claim: keep the box of the last symbol.
                None => union_range(image[image_len - 1].bbox, &image[start..]),
            };
            open = Some(OpenSegment {
                start,
                iend: imgnum,
                bbox,
            });
            continue;
        }

        let Some(seg) = open.as_mut() else {
            continue;
        };
        if imgnum > seg.iend
            && imgnum < image_len
            && !held_until_boundary(path, text, t, image_len)
        {
            seg.bbox = union_range(seg.bbox, &image[seg.iend + 1..=imgnum]);
            seg.iend = imgnum;
        }
    }

    if let Some(seg) = open {
        segments.push(close_segment(seg, image_len, image));
    }

    tracing::debug!(
        image_len,
        text_len = text.len(),
        segments = segments.len(),
        "segments: grouped image symbols into units"
    );
    segments
}
