use oriflamms_align::{
    align_signatures, AlignedSegment, AlignmentError, ImageSignatureSymbol, Rect, SignatureCode,
    TextSignatureSymbol,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_SEED: u64 = 42;
const SAMPLE_COUNT: usize = 200;

fn random_code(rng: &mut StdRng) -> char {
    SignatureCode::ALL[rng.gen_range(0..SignatureCode::ALL.len())].as_char()
}

/// Image symbols laid out left to right, 10 px apart.
fn random_image(rng: &mut StdRng, len: usize) -> Vec<ImageSignatureSymbol> {
    (0..len)
        .map(|k| {
            ImageSignatureSymbol::new(random_code(rng), Rect::new(k as i32 * 10, 0, 8, 24))
                .with_cut_probability(rng.gen())
        })
        .collect()
}

/// `units` units of one to four symbols each.
fn random_text(rng: &mut StdRng, units: usize) -> Vec<TextSignatureSymbol> {
    let mut symbols = Vec::new();
    for _ in 0..units {
        let len = rng.gen_range(1..=4);
        for k in 0..len {
            symbols.push(TextSignatureSymbol::new(random_code(rng), k == 0));
        }
    }
    symbols
}

fn random_case(rng: &mut StdRng) -> (Vec<ImageSignatureSymbol>, Vec<TextSignatureSymbol>, usize) {
    let image_len = rng.gen_range(1..40);
    let units = rng.gen_range(1..12);
    (random_image(rng, image_len), random_text(rng, units), units)
}

fn consumed(segments: &[AlignedSegment]) -> String {
    segments.iter().map(|s| s.consumed_code.as_str()).collect()
}

#[test]
fn alignment_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    for _ in 0..SAMPLE_COUNT {
        let (image, text, _) = random_case(&mut rng);
        let first = align_signatures(&image, &text).expect("valid alphabet");
        let second = align_signatures(&image, &text).expect("valid alphabet");
        assert_eq!(first, second);
    }
}

#[test]
fn one_segment_per_unit() {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED + 1);
    for _ in 0..SAMPLE_COUNT {
        let (image, text, units) = random_case(&mut rng);
        let segments = align_signatures(&image, &text).expect("valid alphabet");
        assert_eq!(segments.len(), units);
        assert_eq!(
            segments.len(),
            text.iter().filter(|s| s.starts_unit).count()
        );
    }
}

#[test]
fn every_image_symbol_is_consumed_exactly_once() {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED + 2);
    for _ in 0..SAMPLE_COUNT {
        let (image, text, _) = random_case(&mut rng);
        let segments = align_signatures(&image, &text).expect("valid alphabet");
        let expected: String = image.iter().map(|s| s.code).collect();
        assert_eq!(consumed(&segments), expected);
    }
}

#[test]
fn segments_do_not_cross() {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED + 3);
    for _ in 0..SAMPLE_COUNT {
        let (image, text, _) = random_case(&mut rng);
        let segments = align_signatures(&image, &text).expect("valid alphabet");
        let non_empty: Vec<&AlignedSegment> = segments
            .iter()
            .filter(|s| !s.consumed_code.is_empty())
            .collect();
        for pair in non_empty.windows(2) {
            assert!(
                pair[0].bbox.right() <= pair[1].bbox.x,
                "{:?} crosses {:?}",
                pair[0],
                pair[1]
            );
        }
        for seg in &segments {
            assert!(seg.bbox.is_valid());
        }
    }
}

#[test]
fn identical_signatures_align_one_to_one() {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED + 4);
    for _ in 0..50 {
        let len = rng.gen_range(1..30);
        let image = random_image(&mut rng, len);
        let text: Vec<TextSignatureSymbol> = image
            .iter()
            .map(|s| TextSignatureSymbol::new(s.code, true))
            .collect();
        let path = oriflamms_align::alignment::edit_distance::signature_edit_path(&image, &text)
            .expect("valid alphabet");
        assert_eq!(path.cost, 0);

        let segments = align_signatures(&image, &text).expect("valid alphabet");
        assert_eq!(segments.len(), image.len());
        for (seg, sym) in segments.iter().zip(&image) {
            assert_eq!(seg.consumed_code, sym.code.to_string());
            assert_eq!(seg.bbox, sym.bbox);
        }
    }
}

#[test]
fn empty_inputs_return_empty_result() {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED + 5);
    let (image, text, _) = random_case(&mut rng);
    assert!(align_signatures(&[], &text).unwrap().is_empty());
    assert!(align_signatures(&image, &[]).unwrap().is_empty());
    assert!(align_signatures(&[], &[]).unwrap().is_empty());
}

#[test]
fn two_full_letters_against_two_letter_word() {
    let a = Rect::new(100, 40, 6, 30);
    let b = Rect::new(110, 40, 6, 30);
    let image = vec![
        ImageSignatureSymbol::new('l', a),
        ImageSignatureSymbol::new('l', b),
    ];
    let text = vec![
        TextSignatureSymbol::new('l', true),
        TextSignatureSymbol::new('l', true),
    ];
    let segments = align_signatures(&image, &text).unwrap();
    assert_eq!(
        segments,
        vec![
            AlignedSegment {
                bbox: a,
                consumed_code: "l".to_string()
            },
            AlignedSegment {
                bbox: b,
                consumed_code: "l".to_string()
            },
        ]
    );
}

#[test]
fn lone_space_is_substituted_for_a_letter() {
    let image = vec![ImageSignatureSymbol::new(' ', Rect::INVALID)];
    let text = vec![TextSignatureSymbol::new('l', true)];
    let path =
        oriflamms_align::alignment::edit_distance::signature_edit_path(&image, &text).unwrap();
    assert_eq!(path.cost, 3);

    let segments = align_signatures(&image, &text).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].consumed_code, " ");
    assert!(!segments[0].bbox.is_valid());
}

fn strokes(codes: &str, cuts: &[u8]) -> Vec<ImageSignatureSymbol> {
    codes
        .chars()
        .zip(cuts)
        .enumerate()
        .map(|(k, (c, &cut))| {
            ImageSignatureSymbol::new(c, Rect::new(k as i32 * 10, 0, 8, 24))
                .with_cut_probability(cut)
        })
        .collect()
}

fn one_symbol_units(codes: &str) -> Vec<TextSignatureSymbol> {
    codes
        .chars()
        .map(|c| TextSignatureSymbol::new(c, true))
        .collect()
}

fn consumed_codes(segments: &[AlignedSegment]) -> Vec<&str> {
    segments.iter().map(|s| s.consumed_code.as_str()).collect()
}

#[test]
fn boundary_tie_at_line_end_follows_cut_probability() {
    let text = one_symbol_units("(l");

    let neutral = align_signatures(&strokes(",.", &[127, 127]), &text).unwrap();
    assert_eq!(consumed_codes(&neutral), [",", "."]);
    assert_eq!(neutral[0].bbox, Rect::new(0, 0, 8, 24));
    assert_eq!(neutral[1].bbox, Rect::new(10, 0, 8, 24));

    // The dot is the likelier cut, so it closes the first unit.
    let late_cut = align_signatures(&strokes(",.", &[10, 200]), &text).unwrap();
    assert_eq!(consumed_codes(&late_cut), [",.", ""]);
    assert_eq!(late_cut[0].bbox, Rect::new(0, 0, 18, 24));
    assert_eq!(late_cut[1].bbox, Rect::new(10, 0, 8, 24));
}

#[test]
fn boundary_tie_mid_line_follows_cut_probability() {
    let text = one_symbol_units("(l)");

    let neutral = align_signatures(&strokes(",.)", &[127, 127, 127]), &text).unwrap();
    assert_eq!(consumed_codes(&neutral), [",", ".", ")"]);
    assert_eq!(neutral[0].bbox, Rect::new(0, 0, 8, 24));
    assert_eq!(neutral[1].bbox, Rect::new(10, 0, 8, 24));

    let late_cut = align_signatures(&strokes(",.)", &[10, 200, 127]), &text).unwrap();
    assert_eq!(consumed_codes(&late_cut), [",.", "", ")"]);
    assert_eq!(late_cut[0].bbox, Rect::new(0, 0, 18, 24));
    assert_eq!(late_cut[2].bbox, Rect::new(20, 0, 8, 24));
}

#[test]
fn out_of_alphabet_code_fails() {
    let image = vec![ImageSignatureSymbol::new('l', Rect::new(0, 0, 4, 4))];
    let text = vec![
        TextSignatureSymbol::new('l', true),
        TextSignatureSymbol::new('k', false),
    ];
    match align_signatures(&image, &text) {
        Err(AlignmentError::UnknownSignatureSymbol {
            symbol, position, ..
        }) => {
            assert_eq!(symbol, 'k');
            assert_eq!(position, 1);
        }
        other => panic!("expected UnknownSignatureSymbol, got {other:?}"),
    }
}

#[test]
fn lines_align_concurrently() {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED + 6);
    let cases: Vec<_> = (0..8).map(|_| random_case(&mut rng)).collect();
    let sequential: Vec<_> = cases
        .iter()
        .map(|(image, text, _)| align_signatures(image, text).expect("valid alphabet"))
        .collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = cases
            .iter()
            .map(|(image, text, _)| scope.spawn(move || align_signatures(image, text)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread").expect("valid alphabet"))
            .collect()
    });
    assert_eq!(sequential, concurrent);
}
