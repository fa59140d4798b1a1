use super::*;

fn lib(name: &str, parts: &[(FigurePartType, i32)]) -> FigureMapLib {
    FigureMapLib {
        name: name.to_owned(),
        revision: 1,
        parts: parts
            .iter()
            .map(|(part_type, id)| FigureMapPart {
                part_type: *part_type,
                id: *id,
            })
            .collect(),
    }
}

#[test]
fn figure_map_keeps_first_library() {
    let map = FigureMap::new(vec![
        lib("acc_eye_cyeyepiece", &[(FigurePartType::EyeAcc, 5)]),
        lib("acc_eye_U_cyeyepiece", &[(FigurePartType::EyeAcc, 5)]),
        lib("hair_U_messy", &[(FigurePartType::Hair, 100)]),
    ]);
    assert_eq!(
        map.library_for(FigurePartType::EyeAcc, 5),
        Some("acc_eye_cyeyepiece")
    );
    assert_eq!(
        map.library_for(FigurePartType::Hair, 100),
        Some("hair_U_messy")
    );
    assert_eq!(map.library_for(FigurePartType::Hair, 101), None);
    assert!(map.lib("hair_U_messy").is_some());
}

#[test]
fn figure_map_from_json_rebuilds_index() {
    let json = r#"[
        {"name": "hh_human_body", "revision": 3, "parts": [{"type": "hd", "id": 1}, {"type": "bd", "id": 1}]}
    ]"#;
    let map = FigureMap::from_json(json).unwrap();
    assert_eq!(map.libs().len(), 1);
    assert_eq!(
        map.library_for(FigurePartType::Body, 1),
        Some("hh_human_body")
    );
}

#[test]
fn palette_resolves_through_set_mapping() {
    let json = r#"{
        "palettes": {"1": {"61": {"id": 61, "value": "ffcc00"}}},
        "set_palettes": {"hr": 1},
        "sets": {"hr": {"100": {"id": 100, "parts": [
            {"id": 100, "type": "hr", "colorable": true, "color_index": 1}
        ]}}}
    }"#;
    let data = FigureData::from_json(json).unwrap();
    let palette = data.palette_for(FigurePartType::Hair).unwrap();
    assert_eq!(palette[&61].value, "ffcc00");
    assert!(data.palette_for(FigurePartType::Head).is_none());
    let set = data.part_set(FigurePartType::Hair, 100).unwrap();
    assert_eq!(set.parts[0].color_index, 1);
    assert!(data.part_set(FigurePartType::Hair, 101).is_none());
}

#[test]
fn malformed_json_is_wrapped() {
    let err = FigureData::from_json("{").unwrap_err();
    assert!(err.to_string().contains("figure data"));
}

#[test]
fn part_info_requires_a_part_type() {
    let info: FigurePartInfo = serde_json::from_str(r#"{"id": 7, "type": "ch"}"#).unwrap();
    assert_eq!(info.part_type, FigurePartType::Chest);
    assert!(!info.colorable);
    assert_eq!(info.color_index, 0);
    assert!(serde_json::from_str::<FigurePartInfo>(r#"{"id": 7}"#).is_err());
}
