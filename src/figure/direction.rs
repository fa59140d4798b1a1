use crate::foundation::error::{ImagerError, ImagerResult};

/// Number of compass directions an avatar or furniture item can face.
pub const DIRECTION_COUNT: u8 = 8;

/// Directions 4, 5 and 6 are drawn as mirror images of 2, 1 and 0.
pub fn is_mirrored(direction: u8) -> bool {
    (4..=6).contains(&direction)
}

/// Mirror counterpart of a direction, `(6 - d) mod 8`.
pub fn flip_direction(direction: u8) -> u8 {
    (6 - i32::from(direction)).rem_euclid(i32::from(DIRECTION_COUNT)) as u8
}

pub fn validate_direction(direction: u8, what: &str) -> ImagerResult<u8> {
    if direction >= DIRECTION_COUNT {
        return Err(ImagerError::validation(format!(
            "{what} must be in 0..=7, got {direction}"
        )));
    }
    Ok(direction)
}

#[cfg(test)]
#[path = "../../tests/unit/figure/direction.rs"]
mod tests;
