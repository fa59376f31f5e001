use super::symbol::{change_cost, delete_cost, insert_cost, parse_codes, SignatureCode};
use crate::error::{AlignmentError, SequenceSide};
use crate::types::{ImageSignatureSymbol, TextSignatureSymbol};

/// Backtracked alignment between an image signature and a text signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePath {
    /// `image_index[t]` is the 1-based image position reached by text symbol `t`
    /// (`0` means before the first image symbol, `s1 + 1` past the last one).
    /// Non-decreasing in `t`.
    pub image_index: Vec<usize>,
    /// Weighted edit distance `d[s1][s2]`.
    pub cost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Image symbol and text symbol read together.
    Diagonal,
    /// Image symbol attributed to no text symbol.
    DeleteImage,
    /// Text symbol without a distinguishable image symbol.
    InsertText,
}

/// Validate both signatures against the alphabet and compute the alignment path.
pub fn signature_edit_path(
    image: &[ImageSignatureSymbol],
    text: &[TextSignatureSymbol],
) -> Result<SignaturePath, AlignmentError> {
    let image_codes = parse_codes(image.iter().map(|s| s.code), SequenceSide::Image)?;
    let text_codes = parse_codes(text.iter().map(|s| s.code), SequenceSide::Text)?;
    Ok(edit_path_from_codes(&image_codes, image, &text_codes, text))
}

/// Row-major `(s1 + 1) x (s2 + 1)` cost matrix.
struct CostMatrix {
    cells: Vec<u32>,
    width: usize,
}

impl CostMatrix {
    #[inline(always)]
    fn at(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

fn fill_cost_matrix(image_codes: &[SignatureCode], text_codes: &[SignatureCode]) -> CostMatrix {
    let s1 = image_codes.len();
    let s2 = text_codes.len();
    let width = s2 + 1;
    let mut cells = vec![0u32; (s1 + 1) * width];

    // Borders grow by one per step whatever the symbol.
    for i in 0..=s1 {
        cells[i * width] = i as u32;
    }
    for (j, cell) in cells.iter_mut().enumerate().take(width) {
        *cell = j as u32;
    }

    for i in 1..=s1 {
        let a = image_codes[i - 1];
        let row = i * width;
        let prev_row = (i - 1) * width;
        for j in 1..=s2 {
            let b = text_codes[j - 1];
            let substitute = cells[prev_row + j - 1] + change_cost(a, b);
            let delete_image = cells[prev_row + j] + delete_cost(a);
            let insert_text = cells[row + j - 1] + insert_cost(b);
            cells[row + j] = substitute.min(delete_image).min(insert_text);
        }
    }

    CostMatrix { cells, width }
}

pub(crate) fn edit_path_from_codes(
    image_codes: &[SignatureCode],
    image: &[ImageSignatureSymbol],
    text_codes: &[SignatureCode],
    text: &[TextSignatureSymbol],
) -> SignaturePath {
    let s1 = image_codes.len();
    let s2 = text_codes.len();
    let d = fill_cost_matrix(image_codes, text_codes);
    let cost = d.at(s1, s2);

    let mut image_index = vec![0usize; s2 + 1];
    let (mut i, mut t) = (s1, s2);
    while i > 0 || t > 0 {
        let step = if t == 0 {
            Step::DeleteImage
        } else if i == 0 {
            Step::InsertText
        } else {
            best_step(&d, i, t, image_codes, text_codes, image, text)
        };

        match step {
            Step::Diagonal => {
                image_index[t] = i;
                i -= 1;
                t -= 1;
            }
            Step::DeleteImage => i -= 1,
            Step::InsertText => {
                // An inserted symbol sits just before the next image symbol,
                // which is past the end when `i == s1`.
                image_index[t] = i + 1;
                t -= 1;
            }
        }
    }

    tracing::debug!(
        image_len = s1,
        text_len = s2,
        cost,
        "edit_distance: backtracked signature path"
    );

    SignaturePath { image_index, cost }
}

#[inline(always)]
fn best_step(
    d: &CostMatrix,
    i: usize,
    t: usize,
    image_codes: &[SignatureCode],
    text_codes: &[SignatureCode],
    image: &[ImageSignatureSymbol],
    text: &[TextSignatureSymbol],
) -> Step {
    let a = image_codes[i - 1];
    let b = text_codes[t - 1];
    let diagonal = d.at(i - 1, t - 1) + change_cost(a, b);
    let delete_image = d.at(i - 1, t) + delete_cost(a);
    let insert_text = d.at(i, t - 1) + insert_cost(b);
    let best = diagonal.min(delete_image).min(insert_text);

    if text[t - 1].starts_unit && diagonal == best && insert_text == best && i > 1 {
        // Close the previous unit after whichever symbol looks more like a cut.
        if image[i - 2].cut_probability >= image[i - 1].cut_probability {
            return Step::Diagonal;
        }
        return Step::InsertText;
    }

    if diagonal == best {
        Step::Diagonal
    } else if delete_image == best {
        Step::DeleteImage
    } else {
        Step::InsertText
    }
}
