use super::*;
use crate::model::SlideContent;

fn slide(ty: &str) -> Slide {
    Slide {
        slide_type: Some(ty.to_string()),
        ..Slide::default()
    }
}

#[test]
fn centered_origin_splits_remaining_width() {
    assert_eq!(centered_x(320.0), (1920.0 - 320.0) / 2.0);
    assert_eq!(centered_x(0.0), 960.0);
}

#[test]
fn title_layout_centers_title_and_subtitle() {
    let mut s = slide("title");
    s.title = Some("Deep Oceans".to_string());
    s.subtitle = Some("A field guide".to_string());

    let blocks = layout_blocks(&s);
    assert_eq!(blocks.len(), 2);

    assert_eq!(blocks[0].text, "Deep Oceans");
    assert!(matches!(blocks[0].x, Placement::Centered));
    assert_eq!(blocks[0].y, 400.0);
    assert_eq!(blocks[0].size, TITLE_SIZE);
    assert_eq!(blocks[0].role, FontRole::Bold);

    assert_eq!(blocks[1].text, "A field guide");
    assert!(matches!(blocks[1].x, Placement::Centered));
    assert_eq!(blocks[1].y, 550.0);
    assert_eq!(blocks[1].brush, CLOUD);
}

#[test]
fn title_layout_skips_missing_fields() {
    let blocks = layout_blocks(&slide("title"));
    assert!(blocks.is_empty());
}

#[test]
fn bullets_layout_stacks_items_with_fixed_spacing() {
    let mut s = slide("bullets");
    s.title = Some("Intro".to_string());
    s.content = Some(SlideContent::Items(vec![
        "point A".to_string(),
        "point B".to_string(),
    ]));

    let blocks = layout_blocks(&s);
    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0].text, "Intro");
    assert!(matches!(blocks[0].x, Placement::Left(x) if x == 100.0));
    assert_eq!(blocks[0].y, 200.0);

    assert_eq!(blocks[1].text, "\u{2022} point A");
    assert!(matches!(blocks[1].x, Placement::Left(x) if x == 150.0));
    assert_eq!(blocks[1].y, 350.0);

    assert_eq!(blocks[2].text, "\u{2022} point B");
    assert_eq!(blocks[2].y, 450.0);
}

#[test]
fn bullets_wrap_long_items_at_sixty_columns() {
    let mut s = slide("bullets");
    let long = "a very long bullet point that keeps going and going until it \
                certainly cannot fit on a single sixty column line anymore";
    s.content = Some(SlideContent::Items(vec![long.to_string()]));

    let blocks = layout_blocks(&s);
    assert_eq!(blocks.len(), 1);
    let lines: Vec<&str> = blocks[0].text.split('\n').collect();
    assert!(lines.len() > 1);
    // The glyph prefix rides on the first wrapped line only.
    assert!(lines[0].starts_with("\u{2022} "));
    for line in &lines[1..] {
        assert!(line.chars().count() <= 60);
    }
}

#[test]
fn quote_layout_centers_each_wrapped_line() {
    let mut s = slide("quote");
    s.content = Some(SlideContent::Text(
        "The sea, once it casts its spell, holds one in its net of wonder forever".to_string(),
    ));

    let blocks = layout_blocks(&s);
    assert!(blocks.len() > 1);
    assert!(blocks[0].text.starts_with('"'));
    assert!(blocks.last().unwrap().text.ends_with('"'));
    for (i, block) in blocks.iter().enumerate() {
        assert!(matches!(block.x, Placement::Centered));
        assert_eq!(block.y, 400.0 + 80.0 * i as f64);
        assert!(block.text.chars().count() <= 42);
    }
}

#[test]
fn unrecognized_type_uses_fallback_layout() {
    let mut s = slide("diagram");
    s.title = Some("Workflow".to_string());
    s.content = Some(SlideContent::Items(vec![
        "first item".to_string(),
        "ignored second item".to_string(),
    ]));

    let blocks = layout_blocks(&s);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].text, "Workflow");
    assert!(matches!(blocks[0].x, Placement::Left(x) if x == 100.0));

    assert_eq!(blocks[1].text, "first item");
    assert_eq!(blocks[1].y, 900.0);
    assert_eq!(blocks[1].size, SMALL_SIZE);
}

#[test]
fn empty_slide_renders_background_only() {
    let blocks = layout_blocks(&Slide::default());
    assert!(blocks.is_empty());
}
