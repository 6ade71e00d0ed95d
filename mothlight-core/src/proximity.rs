//! Pitch-distance to time-offset stagger model.
//!
//! Maps the melodic interval between a candidate cell and a reference note
//! to an expected time offset: small intervals continue on the same step,
//! larger leaps land one or two steps away. The resulting ±1 bands form the
//! diagonal highlights whose slope follows the interval size, covering both
//! ascending and descending lines and chromatic runs at zero offset.

/// Expected time offset and dimming for a melodic interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// 0, 1, or 2 steps
    pub time_offset: usize,
    /// 1.0, 0.85, or 0.75
    pub dimming: f32,
}

/// Stagger relation between two pitches, a function of `|a - b|` only.
pub fn stagger(pitch_a: u8, pitch_b: u8) -> Stagger {
    let distance = (pitch_a as i32 - pitch_b as i32).unsigned_abs();
    match distance {
        0..=2 => Stagger {
            time_offset: 0,
            dimming: 1.0,
        },
        3..=5 => Stagger {
            time_offset: 1,
            dimming: 0.85,
        },
        _ => Stagger {
            time_offset: 2,
            dimming: 0.75,
        },
    }
}

/// Forward and backward expected steps of a candidate pitch relative to a
/// reference note. A candidate above the reference expects a later step
/// going forward; below, an earlier one. The backward step swaps the sign.
pub fn expected_steps(
    candidate_pitch: u8,
    reference_pitch: u8,
    reference_step: isize,
) -> (isize, isize) {
    let offset = stagger(candidate_pitch, reference_pitch).time_offset as isize;
    if candidate_pitch >= reference_pitch {
        (reference_step + offset, reference_step - offset)
    } else {
        (reference_step - offset, reference_step + offset)
    }
}

/// Whether a cell lies within ±1 of either expected step of a reference note.
pub fn is_temporally_close(
    candidate_pitch: u8,
    candidate_step: usize,
    reference_pitch: u8,
    reference_step: usize,
) -> bool {
    let (forward, backward) =
        expected_steps(candidate_pitch, reference_pitch, reference_step as isize);
    let step = candidate_step as isize;
    (step - forward).abs() <= 1 || (step - backward).abs() <= 1
}
