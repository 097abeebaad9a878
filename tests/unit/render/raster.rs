use super::*;

#[test]
fn rasterize_plain_svg_has_canvas_size() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4"><rect width="8" height="4" fill="red"/></svg>"#;
    let frame = rasterize_svg(
        svg,
        &FontOptions {
            skip_system_fonts: true,
            ..FontOptions::default()
        },
    )
    .unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert_eq!(&frame.data[..4], &[255, 0, 0, 255]);
}

#[test]
fn invalid_svg_is_a_render_error() {
    let fonts = FontOptions {
        skip_system_fonts: true,
        ..FontOptions::default()
    };
    for input in ["<svg", "not svg"] {
        let err = rasterize_svg(input, &fonts).unwrap_err();
        assert!(matches!(err, TableshotError::Render(_)), "{err:?}");
        assert!(err.to_string().contains("parse svg tree"));
    }
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = vec![64u8, 0, 32, 128, 10, 20, 30, 255, 5, 5, 5, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 0, 64, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[5, 5, 5, 0]);
}

#[test]
fn missing_font_dir_is_tolerated() {
    let fonts = FontOptions {
        font_dirs: vec![PathBuf::from("does/not/exist")],
        skip_system_fonts: true,
    };
    let db = build_fontdb(&fonts);
    assert!(db.is_empty());
}
