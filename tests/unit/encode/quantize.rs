use super::*;

#[test]
fn few_colors_are_kept_exactly() {
    let samples = [[255, 0, 0, 255], [0, 0, 255, 255], [255, 0, 0, 255]];
    let palette = generate_palette(&samples, 8);
    assert_eq!(palette, vec![[0, 0, 255, 255], [255, 0, 0, 255]]);
}

#[test]
fn palette_respects_budget() {
    let samples: Vec<Color> = (0..=255u8).map(|v| [v, 255 - v, v / 2, 255]).collect();
    let palette = generate_palette(&samples, 15);
    assert!(!palette.is_empty());
    assert!(palette.len() <= 15);
}

#[test]
fn palette_ignores_sample_order() {
    let mut samples: Vec<Color> = (0..200u8).map(|v| [v, v.wrapping_mul(7), 30, 255]).collect();
    let a = generate_palette(&samples, 10);
    samples.reverse();
    assert_eq!(a, generate_palette(&samples, 10));
}

#[test]
fn reduced_palette_separates_clusters() {
    let mut samples = vec![[250, 0, 0, 255]; 50];
    samples.extend(vec![[254, 2, 0, 255]; 50]);
    samples.extend(vec![[0, 0, 250, 255]; 50]);
    samples.extend(vec![[2, 0, 254, 255]; 50]);
    let palette = generate_palette(&samples, 2);
    assert!(!palette.is_empty() && palette.len() <= 2);

    let red = palette[nearest(&palette, [252, 1, 0, 255])];
    let blue = palette[nearest(&palette, [1, 0, 252, 255])];
    assert_ne!(red, blue);
    assert!(red[0] > red[2]);
    assert!(blue[2] > blue[0]);
}

#[test]
fn reduced_palette_is_sorted_and_unique() {
    let samples: Vec<Color> = (0..=255u8).map(|v| [v, v / 3, 255 - v, 255]).collect();
    let palette = generate_palette(&samples, 32);
    assert!(palette.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_input_gives_empty_palette() {
    assert!(generate_palette(&[], 16).is_empty());
    assert!(generate_palette(&[[1, 2, 3, 255]], 0).is_empty());
}

#[test]
fn nearest_uses_squared_distance() {
    let palette = [[0, 0, 0, 255], [255, 255, 255, 255], [250, 0, 0, 255]];
    assert_eq!(nearest(&palette, [10, 10, 10, 255]), 0);
    assert_eq!(nearest(&palette, [200, 40, 40, 255]), 2);
    assert_eq!(nearest(&palette, [255, 255, 255, 255]), 1);
}

#[test]
fn nearest_ties_pick_lowest_index() {
    let palette = [[10, 0, 0, 255], [30, 0, 0, 255]];
    assert_eq!(nearest(&palette, [20, 0, 0, 255]), 0);
}

#[test]
fn cache_matches_nearest() {
    let palette = [[0, 0, 0, 255], [255, 255, 255, 255]];
    let mut cache = NearestCache::new(&palette);
    assert_eq!(cache.index([200, 200, 200, 255]), 1);
    assert_eq!(cache.index([200, 200, 200, 255]), 1);
    assert_eq!(cache.index([3, 3, 3, 255]), 0);
}
