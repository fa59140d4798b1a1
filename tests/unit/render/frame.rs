use std::collections::BTreeMap;
use std::sync::Arc;

use super::*;
use crate::animation::model::{AnimationLayer, Blend, Frame, Sprite};
use crate::assets::asset::{Asset, PreparedImage};
use crate::foundation::core::{Point, Rgba8};

fn solid_sprite(px: [u8; 4]) -> Sprite {
    Sprite::new(Arc::new(Asset::new(
        "px",
        PreparedImage::solid(1, 1, px),
        Point::ZERO,
    )))
}

fn layer(frames: Vec<(i32, [u8; 4])>, sequence: Vec<i32>, z: i32) -> AnimationLayer {
    AnimationLayer {
        frames: frames
            .into_iter()
            .map(|(id, px)| (id, Frame::from(vec![solid_sprite(px)])))
            .collect(),
        frame_repeat: 1,
        sequences: vec![sequence],
        z,
    }
}

#[test]
fn higher_z_draws_on_top() {
    let anim = Animation {
        background: None,
        layers: BTreeMap::from([
            (0, layer(vec![(0, [255, 0, 0, 255])], vec![0], 5)),
            (1, layer(vec![(0, [0, 255, 0, 255])], vec![0], 1)),
        ]),
    };
    let img = render_frame(&anim, 0, 0);
    assert_eq!(img.pixel(Point::ZERO), [255, 0, 0, 255]);
}

#[test]
fn shadow_is_drawn_under_everything() {
    let mut shadow = layer(vec![(0, [0, 0, 0, 255])], vec![0], 100);
    if let Some(frame) = shadow.frames.get_mut(&0) {
        frame.0[0].blend = Blend::Copy;
    }
    let anim = Animation {
        background: None,
        layers: BTreeMap::from([
            (-1, shadow),
            (0, layer(vec![(0, [0, 0, 255, 255])], vec![0], 0)),
        ]),
    };
    assert_eq!(render_frame(&anim, 0, 0).pixel(Point::ZERO), [0, 0, 255, 255]);
}

#[test]
fn frames_follow_sequence() {
    let anim = Animation {
        background: None,
        layers: BTreeMap::from([(
            0,
            layer(
                vec![(0, [255, 0, 0, 255]), (1, [0, 255, 0, 255])],
                vec![1, 0],
                0,
            ),
        )]),
    };
    assert_eq!(render_frame(&anim, 0, 0).pixel(Point::ZERO), [0, 255, 0, 255]);
    assert_eq!(render_frame(&anim, 0, 1).pixel(Point::ZERO), [255, 0, 0, 255]);
    assert_eq!(render_frame(&anim, 0, 2).pixel(Point::ZERO), [0, 255, 0, 255]);
}

#[test]
fn missing_frame_draws_nothing() {
    let anim = Animation {
        background: None,
        layers: BTreeMap::from([
            (0, layer(vec![(0, [255, 0, 0, 255])], vec![0], 0)),
            (1, layer(vec![(0, [0, 255, 0, 255])], vec![0, 3], 1)),
        ]),
    };
    assert_eq!(render_frame(&anim, 0, 1).pixel(Point::ZERO), [255, 0, 0, 255]);
}

#[test]
fn background_is_painted_first() {
    let anim = Animation {
        background: Some(Rgba8::rgb(10, 20, 30)),
        layers: BTreeMap::from([(0, layer(vec![(0, [0, 0, 0, 0])], vec![0], 0))]),
    };
    assert_eq!(render_frame(&anim, 0, 0).pixel(Point::ZERO), [10, 20, 30, 255]);

    let clear = Animation {
        background: Some(Rgba8::TRANSPARENT),
        ..anim
    };
    assert_eq!(render_frame(&clear, 0, 0).pixel(Point::ZERO), [0; 4]);
}
