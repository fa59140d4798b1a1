use std::fmt;
use std::str::FromStr;

use crate::figure::direction::validate_direction;
use crate::figure::part::{AvatarState, FigurePartType};
use crate::foundation::error::{ImagerError, ImagerResult};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "U")]
    Unisex,
}

/// One worn, colored part set of a figure.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FigureItem {
    #[serde(rename = "type")]
    pub part_type: FigurePartType,
    pub id: i32,
    #[serde(default)]
    pub colors: Vec<i32>,
}

impl FigureItem {
    pub fn new(part_type: FigurePartType, id: i32, colors: impl Into<Vec<i32>>) -> Self {
        Self {
            part_type,
            id,
            colors: colors.into(),
        }
    }
}

impl fmt::Display for FigureItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.part_type, self.id)?;
        for c in &self.colors {
            write!(f, "-{c}")?;
        }
        Ok(())
    }
}

/// Full avatar appearance: gender plus the ordered list of worn items.
///
/// The textual form is `type-id[-color...]` items joined by `.`, for example
/// `hr-100-61.hd-180-1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Figure {
    #[serde(default)]
    pub gender: Gender,
    pub items: Vec<FigureItem>,
}

impl Figure {
    pub fn new(gender: Gender, items: Vec<FigureItem>) -> Self {
        Self { gender, items }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl FromStr for Figure {
    type Err = ImagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let items = s.split('.').map(parse_item).collect::<ImagerResult<Vec<_>>>()?;
        Ok(Self {
            gender: Gender::Unisex,
            items,
        })
    }
}

fn parse_item(s: &str) -> ImagerResult<FigureItem> {
    let mut fields = s.split('-');
    let code = fields.next().unwrap_or_default();
    if code.is_empty() {
        return Err(ImagerError::validation("empty figure part in figure string"));
    }
    let part_type = code
        .parse::<FigurePartType>()
        .ok()
        .filter(|t| t.is_wearable())
        .ok_or_else(|| ImagerError::validation(format!("non-wearable figure part type {code:?}")))?;
    let id_str = fields.next().ok_or_else(|| {
        ImagerError::validation(format!("unspecified id for figure part type {code:?}"))
    })?;
    let id = id_str
        .parse::<i32>()
        .map_err(|_| ImagerError::validation(format!("invalid figure part id {id_str:?}")))?;
    let colors = fields
        .map(|c| {
            c.parse::<i32>().map_err(|_| {
                ImagerError::validation(format!("invalid figure part color {c:?} in {s:?}"))
            })
        })
        .collect::<ImagerResult<Vec<_>>>()?;
    Ok(FigureItem {
        part_type,
        id,
        colors,
    })
}

/// A figure placed in a room: facing, pose and expression.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Avatar {
    pub figure: Figure,
    pub direction: u8,
    pub head_direction: u8,
    pub action: AvatarState,
    pub expression: AvatarState,
    #[serde(default)]
    pub head_only: bool,
}

impl Avatar {
    /// Standing, neutral avatar facing `direction` with the head aligned to the body.
    pub fn new(figure: Figure, direction: u8) -> Self {
        Self {
            figure,
            direction,
            head_direction: direction,
            action: AvatarState::Stand,
            expression: AvatarState::Neutral,
            head_only: false,
        }
    }

    pub fn with_head_direction(mut self, head_direction: u8) -> Self {
        self.head_direction = head_direction;
        self
    }

    pub fn with_action(mut self, action: AvatarState) -> Self {
        self.action = action;
        self
    }

    pub fn with_expression(mut self, expression: AvatarState) -> Self {
        self.expression = expression;
        self
    }

    pub fn head_only(mut self, head_only: bool) -> Self {
        self.head_only = head_only;
        self
    }

    pub fn validate(&self) -> ImagerResult<()> {
        validate_direction(self.direction, "direction")?;
        validate_direction(self.head_direction, "head direction")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/model.rs"]
mod tests;
