use serde::{Deserialize, Serialize};

/// Steps per piano-roll page.
pub const STEPS_PER_PAGE: usize = 16;

/// A note placed on the grid. The grid owns the note set; the engine only
/// reads per-query snapshots of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedNote {
    pub pitch: u8,
    pub step: usize,
    pub velocity: u8,
    /// Duration in steps
    pub duration: u32,
}

impl PlacedNote {
    /// A one-step note.
    pub fn new(pitch: u8, step: usize, velocity: u8) -> Self {
        Self {
            pitch,
            step,
            velocity,
            duration: 1,
        }
    }
}

/// Absolute step of a (page, step) pair.
pub fn absolute_step(page_index: usize, step: usize) -> usize {
    page_index * STEPS_PER_PAGE + step
}

/// Find the note occupying a cell, if any. Matches on step start.
pub fn note_at(notes: &[PlacedNote], pitch: u8, step: usize) -> Option<&PlacedNote> {
    notes.iter().find(|n| n.pitch == pitch && n.step == step)
}
