use super::*;

#[test]
fn rect_union_ignores_empty() {
    let a = Rect::new(0, 0, 10, 10);
    assert_eq!(a.union(Rect::EMPTY), a);
    assert_eq!(Rect::EMPTY.union(a), a);
    assert_eq!(a.union(Rect::new(-5, 2, 3, 20)), Rect::new(-5, 0, 10, 20));
}

#[test]
fn rect_translate_and_size() {
    let r = Rect::from_size(4, 3).translate(Point::new(-2, 5));
    assert_eq!(r, Rect::new(-2, 5, 2, 8));
    assert_eq!(r.width(), 4);
    assert_eq!(r.height(), 3);
    assert!(r.contains(Point::new(-2, 5)));
    assert!(!r.contains(Point::new(2, 5)));
}

#[test]
fn rect_intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 6, 6);
    assert!(a.intersect(b).is_empty());
    assert_eq!(a.intersect(Rect::new(1, 1, 4, 4)), Rect::new(1, 1, 2, 2));
}

#[test]
fn hex_colors_parse() {
    assert_eq!(Rgba8::from_hex("FFCC00").unwrap(), Rgba8::rgb(0xff, 0xcc, 0x00));
    assert_eq!(Rgba8::from_hex("#ffffff").unwrap(), Rgba8::WHITE);
    assert_eq!(Rgba8::rgb(1, 2, 0xab).to_hex(), "0102ab");
    assert!(matches!(
        Rgba8::from_hex("fff"),
        Err(ImagerError::InvalidColor(_))
    ));
    assert!(Rgba8::from_hex("gggggg").is_err());
}

#[test]
fn premul_scales_channels() {
    assert_eq!(Rgba8::rgba(255, 128, 0, 128).to_premul(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
}
