use super::*;

fn any_system_font() -> Option<Vec<u8>> {
    let dirs = search_dirs(None);
    find_named(&dirs, REGULAR_CANDIDATES)
        .or_else(|| find_named(&dirs, BOLD_CANDIDATES))
        .or_else(|| scan_any_face(&dirs))
}

#[test]
fn layout_rejects_non_positive_size() {
    let Some(font) = any_system_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    assert!(engine.layout_plain("x", &font, 0.0, WHITE).is_err());
    assert!(engine.layout_plain("x", &font, f32::NAN, WHITE).is_err());
}

#[test]
fn measured_width_is_positive_and_stable() {
    let Some(font) = any_system_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let w1 = engine.measure_width("Intro", &font, 80.0).unwrap();
    let w2 = engine.measure_width("Intro", &font, 80.0).unwrap();
    assert!(w1 > 0.0);
    assert_eq!(w1, w2);
}

#[test]
fn wider_strings_measure_wider() {
    let Some(font) = any_system_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let short = engine.measure_width("hi", &font, 50.0).unwrap();
    let long = engine.measure_width("hi there, longer line", &font, 50.0).unwrap();
    assert!(long > short);
}

#[test]
fn newlines_produce_multiple_lines() {
    let Some(font) = any_system_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let layout = engine
        .layout_plain("line one\nline two", &font, 50.0, WHITE)
        .unwrap();
    assert!(layout.lines().count() >= 2);
}

#[test]
fn library_from_bytes_exposes_roles() {
    let lib = FontLibrary::from_bytes(vec![1, 2], vec![3, 4]);
    assert_eq!(lib.bytes(FontRole::Bold).as_slice(), [1u8, 2].as_slice());
    assert_eq!(lib.bytes(FontRole::Regular).as_slice(), [3u8, 4].as_slice());
}
