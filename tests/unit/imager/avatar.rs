use super::*;
use crate::assets::asset::{Asset, PreparedImage};
use crate::assets::library::MemoryLibrary;
use crate::foundation::core::Point;

fn avatar(direction: u8) -> Avatar {
    Avatar::new(Figure::default(), direction)
}

fn part(part_type: FigurePartType, id: i32) -> AvatarPart {
    AvatarPart {
        set_type: part_type,
        set_id: id,
        part_type,
        id,
        color: Rgba8::WHITE,
        library: "lib".to_owned(),
        library_source: LibrarySource::Mapped,
        hidden: false,
    }
}

fn lib_with(names: &[&str]) -> MemoryLibrary {
    let mut lib = MemoryLibrary::new("lib");
    for name in names {
        lib.insert(Asset::new(
            *name,
            PreparedImage::solid(1, 1, [0, 0, 0, 255]),
            Point::ZERO,
        ));
    }
    lib
}

#[test]
fn ranks_follow_direction_tables() {
    let side = layer_ranks(2);
    assert!(side[&T::LeftHand] < side[&T::Body]);
    assert!(side[&T::Head] < side[&T::Hair]);
    assert!(side[&T::Hair] < side[&T::RightHand]);
    assert_eq!(side.len(), 25);

    let down = layer_ranks(3);
    assert_eq!(down[&T::Body], 0);
    assert!(down[&T::HeadAcc] < down[&T::LeftHandItem]);

    let up = layer_ranks(7);
    assert_eq!(up[&T::LeftHandItem], 0);
    assert!(up[&T::RightCoat] < up[&T::Body]);
    assert_eq!(layer_ranks(5), side);
}

#[test]
fn asset_names_are_formatted() {
    assert_eq!(
        avatar_asset_name(AvatarState::Stand, T::Hair, 100, 2, 0),
        "h_std_hr_100_2_0"
    );
    assert_eq!(
        avatar_asset_name(AvatarState::Respect, T::LeftHand, 1, 7, 0),
        "h_respect_lh_1_7_0"
    );
}

#[test]
fn head_states_use_expression_then_lay_or_stand() {
    let a = avatar(2).with_expression(AvatarState::Smile);
    assert_eq!(
        state_candidates(&a, true).as_slice(),
        &[AvatarState::Smile, AvatarState::Stand]
    );
    let lay = a.with_action(AvatarState::Lay);
    assert_eq!(
        state_candidates(&lay, true).as_slice(),
        &[AvatarState::Smile, AvatarState::Lay]
    );
}

#[test]
fn body_states_use_fallback_chain() {
    let a = avatar(2).with_action(AvatarState::Carry);
    assert_eq!(
        state_candidates(&a, false).as_slice(),
        &[AvatarState::Carry, AvatarState::Wave, AvatarState::Stand]
    );
}

#[test]
fn resolve_prefers_own_direction_then_mirror() {
    let lib = lib_with(&["h_std_bd_1_2_0", "h_std_bd_1_4_0"]);
    let p = part(T::Body, 1);
    assert_eq!(
        resolve_asset(&lib, &avatar(4), &p),
        Some(("h_std_bd_1_4_0".to_owned(), false))
    );

    let lib = lib_with(&["h_std_bd_1_2_0"]);
    assert_eq!(
        resolve_asset(&lib, &avatar(4), &p),
        Some(("h_std_bd_1_2_0".to_owned(), true))
    );
    assert_eq!(resolve_asset(&lib, &avatar(3), &p), None);
}

#[test]
fn resolve_walks_directions_before_states() {
    let lib = lib_with(&["h_std_lh_1_6_0", "h_wav_lh_1_0_0"]);
    let a = avatar(6).with_action(AvatarState::Wave);
    assert_eq!(
        resolve_asset(&lib, &a, &part(T::LeftHand, 1)),
        Some(("h_std_lh_1_6_0".to_owned(), false))
    );
}

#[test]
fn head_parts_use_head_direction() {
    let lib = lib_with(&["h_std_hd_1_1_0"]);
    let a = avatar(2).with_head_direction(5);
    assert_eq!(
        resolve_asset(&lib, &a, &part(T::Head, 1)),
        Some(("h_std_hd_1_1_0".to_owned(), true))
    );
}
