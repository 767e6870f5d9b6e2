//! Segmented progress bar for the story viewer.
//!
//! One segment per story: stories before the current one are full, the
//! current one shows its progress, later ones are empty. The bar is a pure
//! function of the playback state and redraws instantly (no easing), so it
//! never lags behind the playback clock.

use crate::player::state::PlaybackState;

/// Glyph for the filled part of a segment.
pub const FILLED: char = '━';
/// Glyph for the unfilled part of a segment.
pub const EMPTY: char = '─';

/// Fill percentage (0-100) of every segment.
///
/// # Arguments
/// * `count` - Number of stories in the group
/// * `state` - Current playback state
pub fn segment_fills(count: usize, state: &PlaybackState) -> Vec<f64> {
    (0..count)
        .map(|i| match i.cmp(&state.current_index) {
            std::cmp::Ordering::Less => 100.0,
            std::cmp::Ordering::Equal => state.progress.clamp(0.0, 100.0),
            std::cmp::Ordering::Greater => 0.0,
        })
        .collect()
}

/// Build the progress bar line.
///
/// Segments are separated by one space when the width allows it; leftover
/// columns go to the leading segments.
///
/// # Arguments
/// * `width` - Width of the bar in characters
/// * `fills` - Fill percentage of each segment (see [`segment_fills`])
pub fn build_segment_bar(width: usize, fills: &[f64]) -> String {
    let count = fills.len();
    if count == 0 || width == 0 {
        return String::new();
    }

    let gaps = if width >= count * 2 - 1 { count - 1 } else { 0 };
    let usable = width - gaps;
    let base = usable / count;
    let extra = usable % count;

    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    for (i, fill) in fills.iter().enumerate() {
        if i > 0 && gaps > 0 {
            bar.push(' ');
        }
        let seg_width = base + usize::from(i < extra);
        let filled = (seg_width as f64 * fill.clamp(0.0, 100.0) / 100.0).floor() as usize;
        for cell in 0..seg_width {
            bar.push(if cell < filled { FILLED } else { EMPTY });
        }
    }
    bar
}
