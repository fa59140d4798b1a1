use crate::animation::model::Animation;
use crate::foundation::core::Rect;
use crate::render::canvas::FrameRGBA;
use crate::render::sprite::Drawer;

/// Draw tick `frame_index` of sequence `seq_index` onto `canvas`.
///
/// Layers are drawn shadow first, then by ascending Z and id. A layer whose selected frame id
/// has no frame draws nothing for that tick.
pub fn draw_frame(
    anim: &Animation,
    canvas: &mut FrameRGBA,
    drawer: Option<Drawer>,
    seq_index: usize,
    frame_index: usize,
) {
    for layer_id in anim.draw_order() {
        let Some(layer) = anim.layers.get(&layer_id) else {
            continue;
        };
        let frame_id = layer.frame_id_at(seq_index, frame_index);
        if let Some(frame) = layer.frames.get(&frame_id) {
            frame.draw(canvas, drawer);
        }
    }
}

/// Fresh canvas over `bounds` with the animation background painted, if any.
pub(crate) fn new_canvas(anim: &Animation, bounds: Rect) -> FrameRGBA {
    let mut canvas = FrameRGBA::new(bounds);
    if let Some(bg) = anim.background
        && !bg.is_transparent()
    {
        canvas.fill_over(bg);
    }
    canvas
}

/// Render a single tick onto a canvas sized to the animation bounds.
pub fn render_frame(anim: &Animation, seq_index: usize, frame_index: usize) -> FrameRGBA {
    render_frame_bounds(anim.bounds(), anim, seq_index, frame_index)
}

pub fn render_frame_bounds(
    bounds: Rect,
    anim: &Animation,
    seq_index: usize,
    frame_index: usize,
) -> FrameRGBA {
    let mut canvas = new_canvas(anim, bounds);
    draw_frame(anim, &mut canvas, None, seq_index, frame_index);
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
