use super::*;

#[test]
fn flip_is_an_involution() {
    for d in 0..DIRECTION_COUNT {
        assert_eq!(flip_direction(flip_direction(d)), d, "direction {d}");
    }
}

#[test]
fn mirrored_directions_map_to_authored_ones() {
    assert_eq!(flip_direction(4), 2);
    assert_eq!(flip_direction(5), 1);
    assert_eq!(flip_direction(6), 0);
    assert_eq!(flip_direction(3), 3);
    assert_eq!(flip_direction(7), 7);
    let mirrored: Vec<u8> = (0..DIRECTION_COUNT).filter(|d| is_mirrored(*d)).collect();
    assert_eq!(mirrored, vec![4, 5, 6]);
}

#[test]
fn direction_range_is_validated() {
    assert_eq!(validate_direction(7, "direction").unwrap(), 7);
    let err = validate_direction(8, "head direction").unwrap_err();
    assert!(err.to_string().contains("head direction"));
}
