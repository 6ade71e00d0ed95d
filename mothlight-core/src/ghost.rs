//! Ghost imprints: dampened brightness echoes that placed notes project
//! onto nearby empty cells.
//!
//! Recomputed from the live note set on every query; nothing is cached
//! across frames. Only notes on the current page project ghosts.

use mothlight_types::{Chord, PlacedNote, ScaleContext, Settings};

use crate::brightness::brightness;
use crate::proximity::is_temporally_close;

/// Damping applied to every echo.
pub const GHOST_DAMPING: f32 = 0.7;

/// Strongest dampened echo any placed note on the page casts onto an empty
/// cell. Echoes never sum: overlapping imprints keep the maximum.
///
/// `None` when no placed note reaches the cell; the host renders its flat
/// baseline dimness in that case.
pub fn ghost_brightness(
    pitch: u8,
    step: usize,
    notes_on_page: &[PlacedNote],
    chord: Option<&Chord>,
    scale: &ScaleContext,
    settings: &Settings,
) -> Option<f32> {
    let mut best: Option<f32> = None;
    for note in notes_on_page {
        if !is_temporally_close(pitch, step, note.pitch, note.step) {
            continue;
        }
        let echo =
            brightness(pitch, step, chord, scale, settings, Some(note.pitch), false) * GHOST_DAMPING;
        if best.map_or(true, |b| echo > b) {
            best = Some(echo);
        }
    }
    best
}
