use super::*;

#[test]
fn alias_chain_resolves_canonical_image() {
    let base = Arc::new(Asset::new(
        "chair_64_a_2_0",
        PreparedImage::solid(3, 2, [255, 255, 255, 255]),
        Point::new(1, 1),
    ));
    let mid = Arc::new(Asset::alias("chair_64_a_4_0", base, true, Point::new(5, 1)));
    let top = Asset::alias("chair_64_a_6_0", mid, false, Point::ZERO);
    let img = top.source_image().unwrap();
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(top.source_width(), 3);
    assert!(top.image.is_none());
}

#[test]
fn asset_without_pixels_has_no_image() {
    let empty = Asset {
        name: "ghost".to_owned(),
        ..Asset::default()
    };
    assert!(empty.source_image().is_none());
    assert_eq!(empty.source_width(), 0);
}

#[test]
fn prepared_image_checks_length() {
    assert!(PreparedImage::new(2, 2, vec![0; 16]).is_ok());
    let err = PreparedImage::new(2, 2, vec![0; 15]).unwrap_err();
    assert!(err.to_string().contains("expected 16"));
}

#[test]
fn pixel_reads_row_major() {
    let img = PreparedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(img.pixel(1, 0), [5, 6, 7, 8]);
    assert_eq!(img.bounds(), Rect::new(0, 0, 2, 1));
}
