use crate::error::{AlignmentError, SequenceSide};

/// Shape classes a line scanner can report for a slice of ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureCode {
    Space,
    Descender,
    Ascender,
    FullLetter,
    Dot,
    LeftCurve,
    RightCurve,
}

impl SignatureCode {
    pub const ALL: [SignatureCode; 7] = [
        Self::Space,
        Self::Descender,
        Self::Ascender,
        Self::FullLetter,
        Self::Dot,
        Self::LeftCurve,
        Self::RightCurve,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Space),
            ',' => Some(Self::Descender),
            '\'' => Some(Self::Ascender),
            'l' => Some(Self::FullLetter),
            '.' => Some(Self::Dot),
            '(' => Some(Self::LeftCurve),
            ')' => Some(Self::RightCurve),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Descender => ',',
            Self::Ascender => '\'',
            Self::FullLetter => 'l',
            Self::Dot => '.',
            Self::LeftCurve => '(',
            Self::RightCurve => ')',
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for SignatureCode {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

/// Parse a run of codes, reporting the first one outside the alphabet.
pub(crate) fn parse_codes(
    codes: impl IntoIterator<Item = char>,
    side: SequenceSide,
) -> Result<Vec<SignatureCode>, AlignmentError> {
    codes
        .into_iter()
        .enumerate()
        .map(|(position, c)| {
            SignatureCode::from_char(c)
                .ok_or_else(|| AlignmentError::unknown_symbol(c, side, position))
        })
        .collect()
}

// Rows: image symbol. Columns: text symbol. Order follows `SignatureCode::ALL`.
const CHANGE_COST: [[u32; 7]; 7] = [
    [0, 2, 2, 3, 2, 1, 1],
    [1, 0, 2, 1, 1, 1, 1],
    [1, 2, 0, 1, 1, 1, 1],
    [1, 1, 1, 0, 2, 1, 1],
    [2, 1, 1, 3, 0, 1, 1],
    [1, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 0],
];

/// Cost of reading image symbol `image` as text symbol `text`.
#[inline]
pub fn change_cost(image: SignatureCode, text: SignatureCode) -> u32 {
    CHANGE_COST[image.index()][text.index()]
}

/// Cost of leaving an image symbol out of every unit.
#[inline]
pub fn delete_cost(image: SignatureCode) -> u32 {
    match image {
        SignatureCode::Space | SignatureCode::Dot => 3,
        SignatureCode::FullLetter => 2,
        SignatureCode::Descender
        | SignatureCode::Ascender
        | SignatureCode::LeftCurve
        | SignatureCode::RightCurve => 1,
    }
}

/// Cost of a text symbol that matches no image symbol.
#[inline]
pub fn insert_cost(text: SignatureCode) -> u32 {
    match text {
        SignatureCode::Space => 0,
        SignatureCode::FullLetter => 2,
        SignatureCode::Descender
        | SignatureCode::Ascender
        | SignatureCode::Dot
        | SignatureCode::LeftCurve
        | SignatureCode::RightCurve => 1,
    }
}
