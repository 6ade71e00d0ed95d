//! Seed-note selection for the auto generator.
//!
//! Independent of the brightness engine: the first note of a run is drawn
//! from a fixed weight table over scale degrees, not from cell scores.

use mothlight_types::Key;

use crate::rng;

/// Relative weights of the eight seed degrees: root, 2nd, 3rd, 4th, 5th,
/// 6th, flat 7th, natural 7th.
pub const DEGREE_WEIGHTS: [f32; 8] = [5.0, 1.0, 2.0, 1.5, 3.0, 4.0, 1.5, 2.5];

/// Semitone offsets of the seed degrees from the key root.
pub const DEGREE_OFFSETS: [u8; 8] = [0, 2, 4, 5, 7, 9, 10, 11];

/// MIDI pitches of the eight seed degrees of `key` in `octave`.
pub fn degree_pitches(key: Key, octave: u8) -> [u8; 8] {
    let root = octave as i32 * 12 + key.semitone();
    let mut pitches = [0u8; 8];
    for (i, &offset) in DEGREE_OFFSETS.iter().enumerate() {
        pitches[i] = (root + offset as i32).clamp(0, 127) as u8;
    }
    pitches
}

/// Weighted random pick over seed-degree pitches. Pitches pair positionally
/// with `DEGREE_WEIGHTS`; entries beyond the weight table are ignored.
pub fn pick_starting_pitch(degree_pitches: &[u8], rng_state: &mut u64) -> Option<u8> {
    let count = degree_pitches.len().min(DEGREE_WEIGHTS.len());
    if count == 0 {
        return None;
    }
    let idx = rng::weighted_index(rng_state, &DEGREE_WEIGHTS[..count])?;
    Some(degree_pitches[idx])
}
