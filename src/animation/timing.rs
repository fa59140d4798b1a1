use crate::animation::model::{Animation, AnimationLayer};
use crate::foundation::math::lcm;

const DEFAULT_SEQUENCE: &[i32] = &[0];

/// Exported animations are never shorter than this many frames.
pub const MIN_EXPORT_FRAMES: usize = 24;

impl AnimationLayer {
    /// Sequence `seq_index` if declared, else the first sequence, else `[0]`.
    pub fn sequence_or_default(&self, seq_index: usize) -> &[i32] {
        match self.sequences.get(seq_index).or_else(|| self.sequences.first()) {
            Some(seq) if !seq.is_empty() => seq,
            _ => DEFAULT_SEQUENCE,
        }
    }

    /// Ticks until this layer repeats: sequence length times `max(1, frame_repeat)`.
    pub fn cycle_len(&self, seq_index: usize) -> usize {
        self.sequence_or_default(seq_index).len() * self.frame_repeat.max(1) as usize
    }

    /// Frame id shown at tick `frame_index`.
    pub fn frame_id_at(&self, seq_index: usize, frame_index: usize) -> i32 {
        let seq = self.sequence_or_default(seq_index);
        seq[(frame_index / self.frame_repeat.max(1) as usize) % seq.len()]
    }
}

impl Animation {
    /// Ticks after which every layer re-aligns (LCM of the layer cycles).
    pub fn total_frames(&self, seq_index: usize) -> usize {
        self.layers
            .values()
            .fold(1u64, |n, layer| lcm(n, layer.cycle_len(seq_index) as u64)) as usize
    }

    /// Longest single layer cycle.
    pub fn longest_sequence(&self, seq_index: usize) -> usize {
        self.layers
            .values()
            .map(|layer| layer.cycle_len(seq_index))
            .fold(1, usize::max)
    }

    /// Layer ids in draw order: the shadow first, then ascending Z, then ascending id.
    pub fn draw_order(&self) -> Vec<i32> {
        let mut ids: Vec<(bool, i32, i32)> = self
            .layers
            .iter()
            .map(|(id, layer)| (*id >= 0, layer.z, *id))
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(|(_, _, id)| id).collect()
    }
}

/// How many frames an export should contain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFrames {
    /// Longest layer cycle; cheap, may cut a multi-layer loop short.
    #[default]
    Longest,
    /// Full LCM loop.
    Total,
}

pub fn export_frame_count(anim: &Animation, seq_index: usize, mode: ExportFrames) -> usize {
    let n = match mode {
        ExportFrames::Longest => anim.longest_sequence(seq_index),
        ExportFrames::Total => anim.total_frames(seq_index),
    };
    n.max(MIN_EXPORT_FRAMES)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
