use std::collections::HashMap;

use rayon::prelude::*;
use xxhash_rust::xxh3::Xxh3;

use crate::animation::model::Animation;
use crate::foundation::core::Rect;
use crate::foundation::error::{ImagerError, ImagerResult};
use crate::render::canvas::FrameRGBA;
use crate::render::frame::render_frame_bounds;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Environment variable overriding the default worker count.
pub const THREADS_ENV: &str = "NX_IMAGER_THREADS";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Worker pool controls for multi-frame rendering.
pub struct RenderThreading {
    /// Optional explicit worker thread count; one per available core when unset.
    pub threads: Option<usize>,
    /// Render ticks with identical per-layer frame selection only once.
    pub static_frame_elision: bool,
}

impl RenderThreading {
    /// Defaults, with `threads` taken from `NX_IMAGER_THREADS` when it holds a positive integer.
    pub fn from_env() -> Self {
        let threads = std::env::var(THREADS_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0);
        Self {
            threads,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames that were actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused via static-frame elision.
    pub frames_elided: u64,
}

/// Rasterize `count` ticks of sequence `seq_index` over the animation bounds.
pub fn render_frames(
    anim: &Animation,
    seq_index: usize,
    count: usize,
    threading: &RenderThreading,
) -> ImagerResult<Vec<FrameRGBA>> {
    render_frames_bounds(anim.bounds(), anim, seq_index, count, threading)
}

/// Like [`render_frames`], but over caller-supplied bounds so several animations can share a
/// canvas size.
pub fn render_frames_bounds(
    bounds: Rect,
    anim: &Animation,
    seq_index: usize,
    count: usize,
    threading: &RenderThreading,
) -> ImagerResult<Vec<FrameRGBA>> {
    render_frames_with_stats(bounds, anim, seq_index, count, threading).map(|(frames, _)| frames)
}

/// Render ticks `0..count` on a worker pool and return both frame data and counters.
///
/// Output slot `i` always holds tick `i`, whatever order the workers finish in.
#[tracing::instrument(skip(anim, threading), fields(layers = anim.layers.len()))]
pub fn render_frames_with_stats(
    bounds: Rect,
    anim: &Animation,
    seq_index: usize,
    count: usize,
    threading: &RenderThreading,
) -> ImagerResult<(Vec<FrameRGBA>, RenderStats)> {
    if count == 0 {
        return Err(ImagerError::validation("frame count must be >= 1"));
    }
    let pool = build_thread_pool(threading.threads)?;

    let (unique_ticks, tick_to_unique) = if threading.static_frame_elision {
        dedup_ticks(anim, seq_index, count)
    } else {
        ((0..count).collect::<Vec<_>>(), (0..count).collect::<Vec<_>>())
    };

    let mut unique: Vec<Option<FrameRGBA>> = vec![None; unique_ticks.len()];
    pool.install(|| {
        unique
            .par_iter_mut()
            .zip(unique_ticks.par_iter())
            .for_each(|(slot, &tick)| {
                *slot = Some(render_frame_bounds(bounds, anim, seq_index, tick));
            });
    });

    let rendered = unique.len() as u64;
    let empty_slot = || ImagerError::state("frame slot left empty after rendering");
    let frames = if unique.len() == count {
        unique
            .into_iter()
            .map(|slot| slot.ok_or_else(empty_slot))
            .collect::<ImagerResult<Vec<_>>>()?
    } else {
        tick_to_unique
            .iter()
            .map(|&u| unique[u].clone().ok_or_else(empty_slot))
            .collect::<ImagerResult<Vec<_>>>()?
    };

    let stats = RenderStats {
        frames_total: count as u64,
        frames_rendered: rendered,
        frames_elided: (count as u64).saturating_sub(rendered),
    };
    tracing::debug!(
        frames = stats.frames_total,
        elided = stats.frames_elided,
        "rendered frames"
    );
    Ok((frames, stats))
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> ImagerResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ImagerError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ImagerError::state(format!("failed to build rayon thread pool: {e}")))
}

/// First tick of every distinct frame selection, and each tick's index into that list.
fn dedup_ticks(anim: &Animation, seq_index: usize, count: usize) -> (Vec<usize>, Vec<usize>) {
    let mut first = HashMap::<FrameFingerprint, usize>::new();
    let mut unique_ticks = Vec::new();
    let mut tick_to_unique = Vec::with_capacity(count);
    for tick in 0..count {
        let fp = fingerprint_tick(anim, seq_index, tick);
        let slot = *first.entry(fp).or_insert_with(|| {
            unique_ticks.push(tick);
            unique_ticks.len() - 1
        });
        tick_to_unique.push(slot);
    }
    (unique_ticks, tick_to_unique)
}

/// Stable fingerprint of which frame every layer shows at one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct FrameFingerprint {
    pub(crate) hi: u64,
    pub(crate) lo: u64,
}

pub(crate) fn fingerprint_tick(
    anim: &Animation,
    seq_index: usize,
    frame_index: usize,
) -> FrameFingerprint {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    for (id, layer) in &anim.layers {
        h.update(&id.to_le_bytes());
        h.update(&layer.frame_id_at(seq_index, frame_index).to_le_bytes());
    }
    let v = h.digest128();
    FrameFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
