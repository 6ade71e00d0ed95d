//! Cell brightness scoring.
//!
//! A single deterministic score for how well a note would sit in a cell,
//! combining chord membership, metrical weight, the density setting, and
//! melodic interval consonance against an optional reference pitch. Pure and
//! re-entrant; callers may evaluate any number of what-if cells per frame.

use mothlight_types::{pitch_class, Chord, ChordToneDensity, ScaleContext, Settings};

/// Floor for any rendered cell.
pub const MIN_BRIGHTNESS: f32 = 0.2;
/// Brightness of an occupied cell.
pub const MAX_BRIGHTNESS: f32 = 1.0;

/// Steps per metrical beat; downbeats land every fourth step.
const STEPS_PER_BEAT: usize = 4;

pub fn clamp_brightness(value: f32) -> f32 {
    value.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}

/// Brightness of a candidate `(pitch, step)` cell.
///
/// Occupied cells are always fully bright, out-of-scale pitch classes always
/// sit at the floor. Everything else starts from the chord-tone/strong-beat
/// table, is reshaped by `chord_tone_density`, and leans toward consonant
/// intervals when `passing_tones` is on and a reference pitch is given.
#[allow(clippy::too_many_arguments)]
pub fn brightness(
    pitch: u8,
    step: usize,
    chord: Option<&Chord>,
    scale: &ScaleContext,
    settings: &Settings,
    reference_pitch: Option<u8>,
    is_placed: bool,
) -> f32 {
    if is_placed {
        return MAX_BRIGHTNESS;
    }
    let pc = pitch_class(pitch);
    if !scale.contains(pc) {
        return MIN_BRIGHTNESS;
    }

    let is_chord_tone = chord.map(|c| c.contains(pc)).unwrap_or(false);
    let is_strong_beat = step % STEPS_PER_BEAT == 0;

    let mut value = match settings.chord_tone_density {
        ChordToneDensity::Medium => match (is_chord_tone, is_strong_beat) {
            (true, true) => 0.85,
            (true, false) => 0.75,
            (false, true) => 0.65,
            (false, false) => 0.55,
        },
        ChordToneDensity::High => match (is_chord_tone, is_strong_beat) {
            (true, true) => 0.90,
            (true, false) => 0.75,
            (false, _) => 0.55,
        },
        ChordToneDensity::Low => match (is_chord_tone, is_strong_beat) {
            (true, true) => 0.75,
            (true, false) => 0.70,
            (false, _) => 0.70,
        },
    };

    if settings.passing_tones {
        if let Some(reference) = reference_pitch {
            value *= interval_factor(pitch, reference);
        }
    }

    clamp_brightness(value)
}

/// Multiplier for the melodic interval between a pitch and its reference.
/// Consonances brighten; seconds and the tritone dim.
fn interval_factor(pitch: u8, reference: u8) -> f32 {
    let interval = (pitch as i32 - reference as i32).unsigned_abs() % 12;
    match interval {
        0 => 1.15,     // unison / octave
        7 => 1.15,     // perfect fifth
        5 => 1.12,     // perfect fourth
        3 | 4 => 1.10, // thirds
        9 => 1.08,     // major sixth
        8 => 1.05,     // minor sixth
        2 => 0.85,     // major second
        1 => 0.80,     // minor second
        6 => 0.90,     // tritone
        _ => 1.0,
    }
}
