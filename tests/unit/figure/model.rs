use super::*;

#[test]
fn parses_figure_string() {
    let fig: Figure = "hr-100-61.hd-180-1".parse().unwrap();
    assert_eq!(fig.gender, Gender::Unisex);
    assert_eq!(
        fig.items,
        vec![
            FigureItem::new(FigurePartType::Hair, 100, [61]),
            FigureItem::new(FigurePartType::Head, 180, [1]),
        ]
    );
    assert_eq!(fig.to_string(), "hr-100-61.hd-180-1");
}

#[test]
fn items_without_colors_format_bare() {
    let fig: Figure = "ch-210.lg-270-82-1408".parse().unwrap();
    assert!(fig.items[0].colors.is_empty());
    assert_eq!(fig.items[1].colors, vec![82, 1408]);
    assert_eq!(fig.to_string(), "ch-210.lg-270-82-1408");
}

#[test]
fn rejects_malformed_parts() {
    for bad in ["", "hr-100..hd-180", "ey-1", "lh-1", "hr", "hr-x", "hr-100-red"] {
        let err = bad.parse::<Figure>().unwrap_err();
        assert!(
            matches!(err, ImagerError::Validation(_)),
            "{bad:?} gave {err}"
        );
    }
}

#[test]
fn avatar_directions_are_validated() {
    let fig: Figure = "hd-180-1".parse().unwrap();
    assert!(Avatar::new(fig.clone(), 7).validate().is_ok());
    assert!(Avatar::new(fig.clone(), 8).validate().is_err());
    assert!(
        Avatar::new(fig, 2)
            .with_head_direction(9)
            .validate()
            .is_err()
    );
}

#[test]
fn avatar_deserializes_from_json() {
    let json = r#"{
        "figure": {"items": [{"type": "hd", "id": 180, "colors": [1]}]},
        "direction": 2,
        "head_direction": 3,
        "action": "wav",
        "expression": "sml"
    }"#;
    let avatar: Avatar = serde_json::from_str(json).unwrap();
    assert_eq!(avatar.action, AvatarState::Wave);
    assert_eq!(avatar.figure.gender, Gender::Unisex);
    assert!(!avatar.head_only);
}
