use super::*;
use crate::foundation::core::Point;

fn call(text: &str, anchor: Point, h_align: HAlign, style: TextStyle) -> TextCall {
    TextCall {
        anchor,
        text: text.to_string(),
        h_align,
        v_align: VAlign::Center,
        style,
    }
}

#[test]
fn text_before_setup_is_rejected() {
    let mut s = SvgSurface::new(Canvas::new(100, 100).unwrap());
    let err = s
        .text(call("a", Point::ORIGIN, HAlign::Center, TextStyle::default()))
        .unwrap_err();
    assert!(matches!(err, TableshotError::Render(_)));
}

#[test]
fn text_is_placed_in_pixel_space_with_flipped_y() {
    let mut s = SvgSurface::new(Canvas::new(200, 100).unwrap());
    s.setup_axes().unwrap();
    s.text(call(
        "A",
        Point::new(0.25, 0.875),
        HAlign::Center,
        TextStyle::default(),
    ))
    .unwrap();
    let doc = s.finish();
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains(r#"width="200" height="100""#));
    assert!(doc.contains(r#"x="50.000" y="12.500""#));
    assert!(doc.contains(r#"text-anchor="middle""#));
    assert!(doc.contains(r#"dominant-baseline="central""#));
    assert!(doc.contains(">A</text>"));
    assert!(doc.contains(r#"fill="white""#));
}

#[test]
fn title_alignment_becomes_text_anchor() {
    let mut s = SvgSurface::new(Canvas::default());
    s.setup_axes().unwrap();
    s.text(call("l", Point::new(0.1, 0.5), HAlign::Left, TextStyle::default()))
        .unwrap();
    s.text(call("r", Point::new(0.9, 0.5), HAlign::Right, TextStyle::default()))
        .unwrap();
    let doc = s.finish();
    assert!(doc.contains(r#"text-anchor="start""#));
    assert!(doc.contains(r#"text-anchor="end""#));
}

#[test]
fn text_and_attributes_are_escaped() {
    let mut s = SvgSurface::new(Canvas::default()).with_background("#fff\"");
    s.setup_axes().unwrap();
    s.text(call(
        "a<b & c",
        Point::new(0.5, 0.5),
        HAlign::Center,
        TextStyle::new().with("color", "\"red"),
    ))
    .unwrap();
    let doc = s.finish();
    assert!(doc.contains("a&lt;b &amp; c"));
    assert!(doc.contains("&quot;red"));
    assert!(doc.contains("#fff&quot;"));
}

#[test]
fn known_style_keys_map_to_attributes() {
    let style = TextStyle::new()
        .with("fontsize", 20)
        .with("fontweight", "bold")
        .with("fontfamily", "serif")
        .with("fontstyle", "italic")
        .with("alpha", 0.5)
        .with("zorder", 3);
    let attrs = style_attributes(&style).unwrap();
    assert!(attrs.contains(r#"font-size="20""#));
    assert!(attrs.contains(r#"font-weight="bold""#));
    assert!(attrs.contains(r#"font-family="serif""#));
    assert!(attrs.contains(r#"font-style="italic""#));
    assert!(attrs.contains(r#"opacity="0.5""#));
    assert!(!attrs.contains("zorder"));
}

#[test]
fn defaults_apply_to_empty_style() {
    let attrs = style_attributes(&TextStyle::default()).unwrap();
    assert!(attrs.contains(r#"font-size="14""#));
    assert!(attrs.contains(r#"font-family="sans-serif""#));
    assert!(attrs.contains(r#"fill="black""#));
    assert!(!attrs.contains("font-weight"));
}
