use std::collections::{BTreeSet, HashMap, HashSet};

use smallvec::SmallVec;

use crate::animation::model::{Animation, AnimationLayer, Frame, Sprite};
use crate::assets::library::{AssetLibrary, LibraryManager};
use crate::figure::data::{FigureDataProvider, FigureMapProvider};
use crate::figure::direction::{flip_direction, is_mirrored};
use crate::figure::model::{Avatar, Figure, FigureItem};
use crate::figure::part::{AvatarState, FigurePartType};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{ImagerError, ImagerResult};

use FigurePartType as T;

const BODY: &[FigurePartType] = &[
    T::Body,
    T::Shoes,
    T::Legs,
    T::Chest,
    T::ChestPrint,
    T::Waist,
    T::Coat,
    T::ChestAcc,
];
const LEFT_ARM: &[FigurePartType] = &[T::LeftHand, T::LeftSleeve, T::LeftCoat];
const RIGHT_ARM: &[FigurePartType] = &[T::RightHand, T::RightSleeve, T::RightCoat];
const HAND_ITEM: &[FigurePartType] = &[T::LeftHandItem, T::RightHandItem];
const HEAD: &[FigurePartType] = &[
    T::Head,
    T::Face,
    T::Eyes,
    T::Hair,
    T::HairBelow,
    T::FaceAcc,
    T::EyeAcc,
    T::Hat,
    T::HeadAcc,
];

const ORDER_UP: &[&[FigurePartType]] = &[HAND_ITEM, LEFT_ARM, RIGHT_ARM, BODY, HEAD];
const ORDER_DOWN: &[&[FigurePartType]] = &[BODY, HEAD, HAND_ITEM, LEFT_ARM, RIGHT_ARM];
const ORDER_SIDE: &[&[FigurePartType]] = &[LEFT_ARM, BODY, HEAD, RIGHT_ARM, HAND_ITEM];

/// Part-type draw ranks for an avatar facing `direction`.
pub fn layer_ranks(direction: u8) -> HashMap<FigurePartType, usize> {
    let table = match direction {
        3 => ORDER_DOWN,
        7 => ORDER_UP,
        _ => ORDER_SIDE,
    };
    table
        .iter()
        .flat_map(|group| group.iter())
        .enumerate()
        .map(|(rank, ty)| (*ty, rank))
        .collect()
}

/// Asset name `h_{state}_{type}_{id}_{direction}_{frame}`.
pub fn avatar_asset_name(
    state: AvatarState,
    part_type: FigurePartType,
    id: i32,
    direction: u8,
    frame: i32,
) -> String {
    format!("h_{state}_{part_type}_{id}_{direction}_{frame}")
}

/// How the owning library of a part was determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibrarySource {
    /// Listed in the figure map.
    Mapped,
    /// Missing from the figure map; borrowed from the previous part of the same set.
    Assumed,
}

/// One constituent part of a worn figure item, with its tint and library resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarPart {
    pub set_type: FigurePartType,
    pub set_id: i32,
    pub part_type: FigurePartType,
    pub id: i32,
    pub color: Rgba8,
    pub library: String,
    pub library_source: LibrarySource,
    /// Suppressed by another worn item's hidden layers.
    pub hidden: bool,
}

/// Figure compositor.
///
/// Figure data and the figure map are optional collaborators; calls that need one that was
/// never supplied fail with a state error.
#[derive(Clone, Copy)]
pub struct AvatarImager<'a> {
    figure_data: Option<&'a dyn FigureDataProvider>,
    figure_map: Option<&'a dyn FigureMapProvider>,
    libraries: &'a dyn LibraryManager,
}

impl std::fmt::Debug for AvatarImager<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarImager")
            .field("figure_data", &self.figure_data.is_some())
            .field("figure_map", &self.figure_map.is_some())
            .field("libraries", &self.libraries.library_names())
            .finish()
    }
}

struct ResolvedPart {
    rank: usize,
    id: i32,
    sprite: Sprite,
}

impl<'a> AvatarImager<'a> {
    pub fn new(libraries: &'a dyn LibraryManager) -> Self {
        Self {
            figure_data: None,
            figure_map: None,
            libraries,
        }
    }

    pub fn with_figure_data(mut self, figure_data: &'a dyn FigureDataProvider) -> Self {
        self.figure_data = Some(figure_data);
        self
    }

    pub fn with_figure_map(mut self, figure_map: &'a dyn FigureMapProvider) -> Self {
        self.figure_map = Some(figure_map);
        self
    }

    fn figure_data(&self) -> ImagerResult<&'a dyn FigureDataProvider> {
        self.figure_data
            .ok_or_else(|| ImagerError::state("figure data not loaded"))
    }

    fn figure_map(&self) -> ImagerResult<&'a dyn FigureMapProvider> {
        self.figure_map
            .ok_or_else(|| ImagerError::state("figure map not loaded"))
    }

    /// Expand a figure into its individual parts, in figure order.
    pub fn parts(&self, figure: &Figure) -> ImagerResult<Vec<AvatarPart>> {
        let data = self.figure_data()?;
        let map = self.figure_map()?;

        let sets = figure
            .items
            .iter()
            .map(|item| {
                data.part_set(item.part_type, item.id)
                    .map(|set| (item, set))
                    .ok_or(ImagerError::PartSetNotFound {
                        part_type: item.part_type,
                        id: item.id,
                    })
            })
            .collect::<ImagerResult<Vec<_>>>()?;

        let hidden: HashSet<FigurePartType> = sets
            .iter()
            .flat_map(|(_, set)| set.hidden_layers.iter().copied())
            .collect();

        let mut parts = Vec::new();
        for (item, set) in sets {
            let mut assumed_library: Option<&str> = None;
            for info in &set.parts {
                let color = if info.colorable && info.color_index > 0 && info.part_type != T::Eyes
                {
                    part_color(data, item, info.color_index)?
                } else {
                    Rgba8::WHITE
                };

                let (library, library_source) = match map.library_for(info.part_type, info.id) {
                    Some(lib) => {
                        assumed_library = Some(lib);
                        (lib, LibrarySource::Mapped)
                    }
                    None => {
                        let lib = assumed_library.ok_or(ImagerError::PartLibraryNotFound {
                            part_type: info.part_type,
                            id: info.id,
                        })?;
                        tracing::warn!(
                            part_type = %info.part_type,
                            part_id = info.id,
                            set = %item,
                            library = lib,
                            "part missing from figure map, assuming library of previous part"
                        );
                        (lib, LibrarySource::Assumed)
                    }
                };

                parts.push(AvatarPart {
                    set_type: item.part_type,
                    set_id: item.id,
                    part_type: info.part_type,
                    id: info.id,
                    color,
                    library: library.to_owned(),
                    library_source,
                    hidden: hidden.contains(&info.part_type),
                });
            }
        }
        Ok(parts)
    }

    /// Sorted, de-duplicated names of the libraries needed to render `figure`.
    pub fn required_libs(&self, figure: &Figure) -> ImagerResult<Vec<String>> {
        let libs: BTreeSet<String> = self
            .parts(figure)?
            .into_iter()
            .map(|p| p.library)
            .collect();
        Ok(libs.into_iter().collect())
    }

    /// Compose an avatar into a single-frame animation with one layer per visible part.
    #[tracing::instrument(
        skip(self, avatar),
        fields(figure = %avatar.figure, direction = avatar.direction)
    )]
    pub fn compose(&self, avatar: &Avatar) -> ImagerResult<Animation> {
        avatar.validate()?;
        let parts = self.parts(&avatar.figure)?;
        let ranks = layer_ranks(avatar.direction);
        let flip_avatar = is_mirrored(avatar.direction);

        let mut resolved = Vec::with_capacity(parts.len());
        for part in &parts {
            let is_head = part.part_type.is_head();
            if part.hidden || (avatar.head_only && !is_head) {
                continue;
            }

            let lib = self.libraries.library(&part.library).ok_or_else(|| {
                ImagerError::state(format!("required part library not loaded: {:?}", part.library))
            })?;

            let Some((name, mirrored)) = resolve_asset(lib, avatar, part) else {
                tracing::debug!(
                    part_type = %part.part_type,
                    part_id = part.id,
                    library = %part.library,
                    "no asset for part, hiding it"
                );
                continue;
            };
            let asset = lib.asset(&name)?;

            let mut offset = asset.offset;
            if mirrored {
                offset.x = -offset.x + asset.source_width() as i32 - 64;
                if !flip_avatar && is_head {
                    offset.x -= 3;
                }
            } else if flip_avatar && is_head {
                offset.x += 3;
            }

            let mut sprite = Sprite::new(asset);
            sprite.offset = offset;
            sprite.flip_h = mirrored;
            sprite.color = part.color;

            resolved.push(ResolvedPart {
                rank: ranks.get(&part.part_type).copied().unwrap_or(usize::MAX),
                id: part.id,
                sprite,
            });
        }

        resolved.sort_by_key(|p| (p.rank, p.id));

        let layers = resolved
            .into_iter()
            .enumerate()
            .map(|(i, p)| (i as i32, AnimationLayer::single(Frame::from(vec![p.sprite]))))
            .collect();

        Ok(Animation {
            background: None,
            layers,
        })
    }
}

fn part_color(
    data: &dyn FigureDataProvider,
    item: &FigureItem,
    color_index: usize,
) -> ImagerResult<Rgba8> {
    let color_id = *item
        .colors
        .get(color_index - 1)
        .ok_or(ImagerError::InsufficientColors {
            part_type: item.part_type,
            id: item.id,
            required: color_index,
            available: item.colors.len(),
        })?;
    let palette = data
        .palette_for(item.part_type)
        .ok_or(ImagerError::PaletteNotFound(item.part_type))?;
    let color = palette.get(&color_id).ok_or(ImagerError::ColorNotFound {
        part_type: item.part_type,
        id: item.id,
        color_id,
    })?;
    Rgba8::from_hex(&color.value)
}

fn state_candidates(avatar: &Avatar, is_head: bool) -> SmallVec<[AvatarState; 3]> {
    let mut states = SmallVec::new();
    if is_head {
        states.push(avatar.expression);
        states.push(if avatar.action == AvatarState::Lay {
            AvatarState::Lay
        } else {
            AvatarState::Stand
        });
    } else {
        states.push(avatar.action);
        states.extend_from_slice(avatar.action.action_fallbacks());
    }
    states
}

/// First existing asset over directions (outer) and states (inner).
///
/// Returns the asset name and whether it was found under the mirrored-away direction.
fn resolve_asset(
    lib: &dyn AssetLibrary,
    avatar: &Avatar,
    part: &AvatarPart,
) -> Option<(String, bool)> {
    let is_head = part.part_type.is_head();
    let direction = if is_head {
        avatar.head_direction
    } else {
        avatar.direction
    };

    let mut directions: SmallVec<[u8; 2]> = SmallVec::new();
    directions.push(direction);
    if is_mirrored(direction) {
        directions.push(flip_direction(direction));
    }
    let states = state_candidates(avatar, is_head);

    for &d in &directions {
        for &state in &states {
            let name = avatar_asset_name(state, part.part_type, part.id, d, 0);
            if lib.asset_exists(&name) {
                return Some((name, d != direction));
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/imager/avatar.rs"]
mod tests;
