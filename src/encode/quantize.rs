use std::collections::{BTreeMap, HashMap};

use color_quant::NeuQuant;

/// Straight-alpha RGBA8 color.
pub type Color = [u8; 4];

/// NeuQuant sampling factor; 1 trains on every pixel, 30 on every 30th.
const SAMPLE_FACTOR: i32 = 10;

/// Training inputs shorter than this are repeated so the network runs its full learning schedule.
const MIN_TRAINING_PIXELS: usize = 1 << 15;

/// Reduce `samples` to at most `max_colors` representative colors.
///
/// When the samples hold no more distinct colors than the budget, the palette is exactly those
/// colors in ascending order. Otherwise a NeuQuant network is trained on the samples in sorted
/// order, so the result only depends on the sample multiset, not on sample order.
pub fn generate_palette(samples: &[Color], max_colors: usize) -> Vec<Color> {
    if max_colors == 0 || samples.is_empty() {
        return Vec::new();
    }

    let mut counts = BTreeMap::<Color, usize>::new();
    for &c in samples {
        *counts.entry(c).or_default() += 1;
    }
    if counts.len() <= max_colors {
        return counts.into_keys().collect();
    }

    let sorted = counts
        .iter()
        .flat_map(|(c, &n)| std::iter::repeat_n(c, n))
        .flatten()
        .copied();
    let training = sorted
        .cycle()
        .take(samples.len().max(MIN_TRAINING_PIXELS) * 4)
        .collect::<Vec<u8>>();
    let quant = NeuQuant::new(SAMPLE_FACTOR, max_colors, &training);

    let mut palette = quant
        .color_map_rgba()
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect::<Vec<Color>>();
    palette.sort_unstable();
    palette.dedup();
    palette
}

/// Index of the palette entry closest to `c` by squared RGBA distance; ties go to the lowest index.
pub fn nearest(palette: &[Color], c: Color) -> usize {
    let mut best = 0;
    let mut best_d = u32::MAX;
    for (i, p) in palette.iter().enumerate() {
        let d = distance_sq(*p, c);
        if d < best_d {
            best = i;
            best_d = d;
            if d == 0 {
                break;
            }
        }
    }
    best
}

fn distance_sq(a: Color, b: Color) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = i32::from(x) - i32::from(y);
            (d * d) as u32
        })
        .sum()
}

/// Memoizing wrapper around [`nearest`] for mapping whole frames.
#[derive(Debug)]
pub(crate) struct NearestCache<'a> {
    palette: &'a [Color],
    memo: HashMap<Color, usize>,
}

impl<'a> NearestCache<'a> {
    pub(crate) fn new(palette: &'a [Color]) -> Self {
        Self {
            palette,
            memo: HashMap::new(),
        }
    }

    pub(crate) fn index(&mut self, c: Color) -> usize {
        let palette = self.palette;
        *self.memo.entry(c).or_insert_with(|| nearest(palette, c))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/quantize.rs"]
mod tests;
