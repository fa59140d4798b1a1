use crate::animation::model::{Blend, Frame, Sprite};
use crate::foundation::core::Point;
use crate::render::blend::{additive, cap_alpha, over, tint};
use crate::render::canvas::FrameRGBA;

/// Pixel compositing strategy for one sprite draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drawer {
    /// Source-over with source alpha capped at the given value.
    Alpha(u8),
    /// Saturating add onto opaque-enough destination pixels.
    Additive,
}

impl Drawer {
    pub fn for_sprite(sprite: &Sprite) -> Self {
        match sprite.blend {
            Blend::Add => Self::Additive,
            Blend::Normal | Blend::Copy => Self::Alpha(sprite.alpha),
        }
    }

    fn apply(self, dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
        match self {
            Self::Alpha(cap) => over(dst, cap_alpha(src, cap), 255),
            Self::Additive => additive(dst, src),
        }
    }
}

/// Draw `sprite` with its top-left at `-offset`; `drawer` overrides the blend-derived drawer.
pub fn draw_sprite(canvas: &mut FrameRGBA, sprite: &Sprite, drawer: Option<Drawer>) {
    let Some(img) = sprite.image() else {
        return;
    };
    let drawer = drawer.unwrap_or_else(|| Drawer::for_sprite(sprite));
    let tinted = !sprite.color.is_white();

    let dest = sprite.bounds();
    let clip = dest.intersect(canvas.bounds());
    if clip.is_empty() {
        return;
    }

    for y in clip.min.y..clip.max.y {
        let sy = (y - dest.min.y) as u32;
        for x in clip.min.x..clip.max.x {
            let sx = (x - dest.min.x) as u32;
            let sx = if sprite.flip_h { img.width - 1 - sx } else { sx };

            let mut src = img.pixel(sx, sy);
            if src[3] == 0 {
                continue;
            }
            if tinted {
                src = tint(src, sprite.color);
            }

            let local = Point::new(x, y) - canvas.origin;
            let i = canvas.index(local.x as u32, local.y as u32);
            let dst = [
                canvas.data[i],
                canvas.data[i + 1],
                canvas.data[i + 2],
                canvas.data[i + 3],
            ];
            canvas.data[i..i + 4].copy_from_slice(&drawer.apply(dst, src));
        }
    }
}

impl Frame {
    /// Draw every sprite in list order.
    pub fn draw(&self, canvas: &mut FrameRGBA, drawer: Option<Drawer>) {
        for sprite in self.sprites() {
            draw_sprite(canvas, sprite, drawer);
        }
    }

    /// Render this frame alone onto a transparent canvas of its own bounds.
    pub fn to_image(&self) -> FrameRGBA {
        let mut canvas = FrameRGBA::new(self.bounds());
        self.draw(&mut canvas, Some(Drawer::Alpha(255)));
        canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sprite.rs"]
mod tests;
