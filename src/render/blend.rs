use crate::foundation::core::Rgba8;
use crate::foundation::math::{add_sat_u8, mul_div255};

pub type PremulRgba8 = [u8; 4];

/// Source-over with an extra 8-bit opacity applied to `src`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: u8) -> PremulRgba8 {
    if opacity == 0 || src[3] == 0 {
        return dst;
    }

    let op = u16::from(opacity);
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Rescale `src` so its alpha does not exceed `cap`.
pub fn cap_alpha(src: PremulRgba8, cap: u8) -> PremulRgba8 {
    if src[3] <= cap {
        return src;
    }
    let a = u32::from(src[3]);
    let c = u32::from(cap);
    let scale = |v: u8| ((u32::from(v) * c + a / 2) / a).min(c) as u8;
    [scale(src[0]), scale(src[1]), scale(src[2]), cap]
}

/// Saturating per-channel add that keeps the destination alpha.
///
/// Transparent destination pixels are left untouched, and color channels are clamped to the
/// destination alpha to stay valid premultiplied values.
pub fn additive(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let da = dst[3];
    if da == 0 {
        return dst;
    }
    [
        add_sat_u8(dst[0], src[0]).min(da),
        add_sat_u8(dst[1], src[1]).min(da),
        add_sat_u8(dst[2], src[2]).min(da),
        da,
    ]
}

/// Multiply-tint a premultiplied pixel by an opaque color, keeping its alpha.
pub fn tint(px: PremulRgba8, color: Rgba8) -> PremulRgba8 {
    [
        mul_div255(u16::from(px[0]), u16::from(color.r)),
        mul_div255(u16::from(px[1]), u16::from(color.g)),
        mul_div255(u16::from(px[2]), u16::from(color.b)),
        px[3],
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
