use super::*;

#[test]
fn codes_round_trip_through_from_str() {
    for ty in FigurePartType::ALL {
        assert_eq!(ty.as_str().parse::<FigurePartType>().unwrap(), *ty);
    }
    for st in AvatarState::ALL {
        assert_eq!(st.to_string().parse::<AvatarState>().unwrap(), *st);
    }
    assert!("zz".parse::<FigurePartType>().is_err());
}

#[test]
fn catalogue_is_complete() {
    assert_eq!(FigurePartType::ALL.len(), 25);
    assert_eq!(
        FigurePartType::ALL.iter().filter(|t| t.is_head()).count(),
        9
    );
    assert_eq!(
        FigurePartType::ALL.iter().filter(|t| t.is_wearable()).count(),
        13
    );
}

#[test]
fn flip_swaps_arms_only() {
    assert_eq!(FigurePartType::LeftHand.flip(), FigurePartType::RightHand);
    assert_eq!(FigurePartType::RightCoat.flip(), FigurePartType::LeftCoat);
    assert_eq!(
        FigurePartType::LeftHandItem.flip(),
        FigurePartType::RightHandItem
    );
    assert_eq!(FigurePartType::Chest.flip(), FigurePartType::Chest);
    for ty in FigurePartType::ALL {
        assert_eq!(ty.flip().flip(), *ty);
        if ty.is_left_arm() {
            assert!(ty.flip().is_right_arm());
        }
    }
}

#[test]
fn action_fallback_chains() {
    assert_eq!(AvatarState::Walk.action_fallbacks(), &[AvatarState::Stand]);
    assert_eq!(
        AvatarState::Respect.action_fallbacks(),
        &[AvatarState::Wave, AvatarState::Stand]
    );
    assert_eq!(
        AvatarState::BlowKiss.action_fallbacks(),
        &[AvatarState::Drink, AvatarState::Stand]
    );
    assert_eq!(
        AvatarState::Sign.action_fallbacks(),
        &[AvatarState::Wave, AvatarState::Stand]
    );
    assert_eq!(AvatarState::Lay.action_fallbacks(), &[AvatarState::Stand]);
    assert!(AvatarState::Stand.action_fallbacks().is_empty());
}

#[test]
fn states_are_classified() {
    assert!(AvatarState::Respect.is_action());
    assert!(AvatarState::Neutral.is_expression());
    assert!(AvatarState::SurprisedLay.is_expression());
    assert!(!AvatarState::Sit.is_expression());
}

#[test]
fn serde_uses_short_codes() {
    let json = serde_json::to_string(&FigurePartType::HairBelow).unwrap();
    assert_eq!(json, "\"hrb\"");
    let st: AvatarState = serde_json::from_str("\"respect\"").unwrap();
    assert_eq!(st, AvatarState::Respect);
}
