use super::*;

#[test]
fn band_midpoint_and_extent() {
    let b = Band::new(0.9, 1.0);
    assert!((b.midpoint() - 0.95).abs() < 1e-12);
    assert!((b.extent() - 0.1).abs() < 1e-12);
    assert!(Band::EMPTY.is_empty());
    assert!(!Band::UNIT.is_empty());
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(3, 4).unwrap(), Canvas { width: 3, height: 4 });
}

#[test]
fn canvas_flips_y_axis() {
    let c = Canvas::new(200, 100).unwrap();
    assert_eq!(c.to_pixels(Point::new(0.0, 1.0)), Point::new(0.0, 0.0));
    assert_eq!(c.to_pixels(Point::new(0.5, 0.25)), Point::new(100.0, 75.0));
}

#[test]
fn linspace_hits_both_ends() {
    assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(1.0, 0.0, 3), vec![1.0, 0.5, 0.0]);
    assert_eq!(linspace(0.2, 0.7, 1), vec![0.2]);
    assert!(linspace(0.0, 1.0, 0).is_empty());

    let v = linspace(0.0, 0.9, 8);
    assert_eq!(v.first().copied(), Some(0.0));
    assert_eq!(v.last().copied(), Some(0.9));
}
