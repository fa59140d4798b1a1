use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 255), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn cap_alpha_limits_opaque_pixels() {
    assert_eq!(cap_alpha([255, 255, 255, 255], 46), [46, 46, 46, 46]);
    assert_eq!(cap_alpha([200, 0, 100, 255], 128), [100, 0, 50, 128]);
    let faint = [10, 10, 10, 20];
    assert_eq!(cap_alpha(faint, 46), faint);
}

#[test]
fn additive_saturates_and_keeps_dst_alpha() {
    assert_eq!(
        additive([200, 100, 0, 255], [100, 100, 100, 255]),
        [255, 200, 100, 255]
    );
    assert_eq!(additive([0, 0, 0, 0], [255, 255, 255, 255]), [0, 0, 0, 0]);
    assert_eq!(
        additive([100, 0, 0, 128], [100, 50, 0, 255]),
        [128, 50, 0, 128]
    );
}

#[test]
fn tint_multiplies_color_channels() {
    assert_eq!(
        tint([255, 255, 255, 255], Rgba8::rgb(255, 128, 0)),
        [255, 128, 0, 255]
    );
    assert_eq!(
        tint([128, 128, 128, 128], Rgba8::WHITE),
        [128, 128, 128, 128]
    );
}
