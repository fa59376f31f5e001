use serde::{Deserialize, Serialize};

/// Cut probability used when the line scanner has no opinion.
pub const NEUTRAL_CUT_PROBABILITY: u8 = 127;

/// Axis-aligned rectangle in image pixel coordinates.
///
/// A rect with a non-positive width or height is "unset": it is what the
/// line scanner emits for a symbol with no determinable extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const INVALID: Rect = Rect {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    };

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    /// Right x coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Smallest rect covering both. An unset side never widens the result.
    pub fn union(&self, other: &Rect) -> Rect {
        if !other.is_valid() {
            return *self;
        }
        if !self.is_valid() {
            return *other;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.bottom().max(other.bottom()) - y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSignatureSymbol {
    #[serde(default)]
    pub bbox: Rect,
    pub code: char,
    /// Likelihood in 0..=255 that this symbol ends a unit. Only used to break ties.
    #[serde(default = "neutral_cut_probability")]
    pub cut_probability: u8,
}

fn neutral_cut_probability() -> u8 {
    NEUTRAL_CUT_PROBABILITY
}

impl ImageSignatureSymbol {
    pub fn new(code: char, bbox: Rect) -> Self {
        Self {
            bbox,
            code,
            cut_probability: NEUTRAL_CUT_PROBABILITY,
        }
    }

    pub fn with_cut_probability(mut self, cut_probability: u8) -> Self {
        self.cut_probability = cut_probability;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSignatureSymbol {
    pub code: char,
    /// True exactly for the first symbol produced by a unit.
    pub starts_unit: bool,
}

impl TextSignatureSymbol {
    pub fn new(code: char, starts_unit: bool) -> Self {
        Self { code, starts_unit }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedSegment {
    pub bbox: Rect,
    /// Codes of the image symbols attributed to the unit, in order.
    pub consumed_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentOutput {
    pub segments: Vec<AlignedSegment>,
    /// Edit distance of the chosen path; `None` when no alignment was performed.
    pub cost: Option<u32>,
}

impl AlignmentOutput {
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            cost: None,
        }
    }
}

/// A unit that survived text expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedUnit {
    pub text: String,
    /// Position of the unit among all units of the transcription, skipped ones included.
    pub unit_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSignature {
    pub symbols: Vec<TextSignatureSymbol>,
    pub units: Vec<ExpandedUnit>,
    /// Units whose signature came out empty; they contribute no symbols.
    pub skipped: Vec<ExpandedUnit>,
}

impl TextSignature {
    /// Number of units in the transcription, skipped ones included.
    pub fn unit_count(&self) -> usize {
        self.units.len() + self.skipped.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitAlignment {
    pub text: String,
    pub unit_index: usize,
    /// `None` when the unit could not be aligned.
    pub segment: Option<AlignedSegment>,
}

/// Flat record of a word or character carrying a stored bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub id: String,
    pub bbox: Rect,
    /// Manual validation flag; `None` when the unit was never reviewed.
    pub validated: Option<bool>,
}

impl UnitRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bbox: Rect::INVALID,
            validated: None,
        }
    }

    /// Stores `bbox`. A changed box invalidates any earlier review.
    pub fn set_bbox(&mut self, bbox: Rect) -> bool {
        if self.bbox == bbox {
            return false;
        }
        self.bbox = bbox;
        self.validated = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -2, 10, 4);
        assert_eq!(a.union(&b), Rect::new(0, -2, 15, 12));
        assert_eq!(b.union(&a), Rect::new(0, -2, 15, 12));
    }

    #[test]
    fn rect_union_ignores_unset_side() {
        let a = Rect::new(3, 4, 5, 6);
        assert_eq!(a.union(&Rect::INVALID), a);
        assert_eq!(Rect::INVALID.union(&a), a);
        assert!(!Rect::INVALID.union(&Rect::INVALID).is_valid());
    }

    #[test]
    fn zero_width_rect_is_invalid() {
        assert!(!Rect::new(1, 1, 0, 5).is_valid());
        assert!(!Rect::default().is_valid());
    }

    #[test]
    fn image_symbol_defaults_to_neutral_cut() {
        let sym: ImageSignatureSymbol = serde_json::from_str(r#"{"code": "l"}"#).unwrap();
        assert_eq!(sym.cut_probability, NEUTRAL_CUT_PROBABILITY);
        assert!(!sym.bbox.is_valid());
    }

    #[test]
    fn set_bbox_clears_validation_only_on_change() {
        let mut rec = UnitRecord::new("w1");
        rec.bbox = Rect::new(0, 0, 4, 4);
        rec.validated = Some(true);
        assert!(!rec.set_bbox(Rect::new(0, 0, 4, 4)));
        assert_eq!(rec.validated, Some(true));
        assert!(rec.set_bbox(Rect::new(1, 0, 4, 4)));
        assert_eq!(rec.validated, None);
    }
}
