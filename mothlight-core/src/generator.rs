//! Autonomous note generator.
//!
//! Walks the page one step per tick, scoring every reachable pitch with the
//! brightness engine and sampling the next note proportionally to its score,
//! drawn toward bright cells the way a moth is drawn to light. The generator
//! is the only component with memory across invocations; scoring stays pure.
//!
//! The host schedules ticks (`tick_period_secs`) and owns the note set;
//! the generator reads a fresh snapshot every tick, so manual edits made
//! between ticks are picked up naturally.

use crossbeam_channel::Sender;

use mothlight_types::{
    note_at, Chord, GeneratorEvent, HaltReason, PlacedNote, ScaleContext, Settings, STEPS_PER_PAGE,
};

use crate::brightness::brightness;
use crate::proximity::{is_temporally_close, stagger};
use crate::rng;
use crate::starting_note::pick_starting_pitch;

/// Minimum adjusted brightness a candidate needs to stay in the pool.
pub const CANDIDATE_THRESHOLD: f32 = 0.4;

/// Applied when a candidate repeats the previous pitch.
const REPEAT_PENALTY: f32 = 0.5;

const VELOCITY_MIN: u8 = 90;
const VELOCITY_MAX: u8 = 110;

/// Seconds between generator ticks at the given tempo (sixteenth notes).
pub fn tick_period_secs(bpm: f32) -> f64 {
    60.0 / bpm as f64 / 4.0
}

/// What happens when a run reaches the end of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Halt at the boundary, keeping the page's notes
    Paused,
    /// Clear the page, re-seed at step 0, keep going
    Looping,
}

impl RunMode {
    pub fn name(&self) -> &'static str {
        match self {
            RunMode::Paused => "paused",
            RunMode::Looping => "looping",
        }
    }
}

/// Stateful forward stepper. Created on generation start, discarded on stop.
#[derive(Debug)]
pub struct AutoGenerator {
    mode: RunMode,
    running: bool,
    last_note: Option<PlacedNote>,
    seed_pitches: Vec<u8>,
    pitch_min: u8,
    pitch_max: u8,
    page_len: usize,
}

impl AutoGenerator {
    /// Generator over the visible pitch range `pitch_min..=pitch_max`.
    pub fn new(mode: RunMode, pitch_min: u8, pitch_max: u8) -> Self {
        Self {
            mode,
            running: false,
            last_note: None,
            seed_pitches: Vec::new(),
            pitch_min,
            pitch_max,
            page_len: STEPS_PER_PAGE,
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn last_note(&self) -> Option<&PlacedNote> {
        self.last_note.as_ref()
    }

    /// Begin a run: draw a seed pitch from `seed_pitches` and emit it at
    /// step 0. The seed table is kept for loop-boundary re-seeding.
    pub fn start(
        &mut self,
        seed_pitches: &[u8],
        rng_state: &mut u64,
        events: &Sender<GeneratorEvent>,
    ) {
        self.seed_pitches = seed_pitches.to_vec();
        self.running = true;
        log::debug!(target: "generator", "run started ({})", self.mode.name());
        self.emit_seed(rng_state, events);
    }

    /// Advance one step. Reads the current page snapshot and harmonic
    /// context fresh on every call; a no-op once halted.
    pub fn tick(
        &mut self,
        notes_on_page: &[PlacedNote],
        chord: Option<&Chord>,
        scale: &ScaleContext,
        settings: &Settings,
        rng_state: &mut u64,
        events: &Sender<GeneratorEvent>,
    ) {
        if !self.running {
            return;
        }
        let last = match self.last_note {
            Some(note) => note,
            None => {
                self.halt(HaltReason::DeadEnd, events);
                return;
            }
        };

        let next_step = last.step + 1;
        if next_step >= self.page_len {
            match self.mode {
                RunMode::Paused => self.halt(HaltReason::PageEnd, events),
                RunMode::Looping => {
                    let _ = events.send(GeneratorEvent::PageCleared);
                    self.emit_seed(rng_state, events);
                }
            }
            return;
        }

        let mut pitches = Vec::new();
        let mut weights = Vec::new();
        for pitch in self.pitch_min..=self.pitch_max {
            if !is_temporally_close(pitch, next_step, last.pitch, last.step) {
                continue;
            }
            let relation = stagger(pitch, last.pitch);
            let occupied = note_at(notes_on_page, pitch, next_step).is_some();
            let mut value = brightness(
                pitch,
                next_step,
                chord,
                scale,
                settings,
                Some(last.pitch),
                occupied,
            ) * relation.dimming;
            if pitch == last.pitch {
                value *= REPEAT_PENALTY;
            }
            if value >= CANDIDATE_THRESHOLD {
                pitches.push(pitch);
                weights.push(value);
            }
        }

        let idx = match rng::weighted_index(rng_state, &weights) {
            Some(idx) => idx,
            None => {
                self.halt(HaltReason::DeadEnd, events);
                return;
            }
        };
        self.emit_note(pitches[idx], next_step, rng_state, events);
    }

    /// Stop immediately. Idempotent; no note is emitted after this returns.
    pub fn stop(&mut self, events: &Sender<GeneratorEvent>) {
        if !self.running {
            return;
        }
        self.halt(HaltReason::Cancelled, events);
    }

    fn emit_seed(&mut self, rng_state: &mut u64, events: &Sender<GeneratorEvent>) {
        match pick_starting_pitch(&self.seed_pitches, rng_state) {
            Some(pitch) => self.emit_note(pitch, 0, rng_state, events),
            None => self.halt(HaltReason::DeadEnd, events),
        }
    }

    fn emit_note(
        &mut self,
        pitch: u8,
        step: usize,
        rng_state: &mut u64,
        events: &Sender<GeneratorEvent>,
    ) {
        let velocity = rng::next_range(rng_state, VELOCITY_MIN, VELOCITY_MAX);
        let note = PlacedNote::new(pitch, step, velocity);
        let _ = events.send(GeneratorEvent::NoteAdded {
            pitch,
            step,
            velocity,
            duration: note.duration,
        });
        self.last_note = Some(note);
    }

    fn halt(&mut self, reason: HaltReason, events: &Sender<GeneratorEvent>) {
        self.running = false;
        self.last_note = None;
        log::debug!(target: "generator", "halted: {}", reason.name());
        let _ = events.send(GeneratorEvent::Halted(reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::starting_note::degree_pitches;
    use crossbeam_channel::{unbounded, Receiver};
    use mothlight_types::{ChordQuality, Key, Scale};

    fn c_major() -> (Chord, ScaleContext) {
        (
            Chord::new(0, ChordQuality::Major),
            ScaleContext::from_key_scale(Key::C, Scale::Major),
        )
    }

    fn drain(rx: &Receiver<GeneratorEvent>) -> Vec<GeneratorEvent> {
        rx.try_iter().collect()
    }

    fn added_notes(events: &[GeneratorEvent]) -> Vec<(u8, usize, u8)> {
        events
            .iter()
            .filter_map(|e| match e {
                GeneratorEvent::NoteAdded {
                    pitch,
                    step,
                    velocity,
                    ..
                } => Some((*pitch, *step, *velocity)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn tick_period_is_a_sixteenth() {
        assert!((tick_period_secs(120.0) - 0.125).abs() < 1e-9);
        assert!((tick_period_secs(60.0) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn start_emits_one_seed_note_at_step_0() {
        let (tx, rx) = unbounded();
        let mut gen = AutoGenerator::new(RunMode::Paused, 48, 84);
        let mut rng_state = 12345u64;
        gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
        let events = drain(&rx);
        let notes = added_notes(&events);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].1, 0);
        assert!(gen.is_running());
        assert_eq!(gen.last_note().unwrap().step, 0);
    }

    #[test]
    fn paused_run_halts_at_page_end() {
        let (tx, rx) = unbounded();
        let (chord, scale) = c_major();
        let settings = Settings::default();
        let mut gen = AutoGenerator::new(RunMode::Paused, 48, 84);
        let mut rng_state = 9001u64;
        gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
        for _ in 0..STEPS_PER_PAGE {
            gen.tick(&[], Some(&chord), &scale, &settings, &mut rng_state, &tx);
        }
        let events = drain(&rx);
        let notes = added_notes(&events);
        // One note per step, no wrapping
        assert_eq!(notes.len(), STEPS_PER_PAGE);
        for (i, note) in notes.iter().enumerate() {
            assert_eq!(note.1, i);
        }
        assert_eq!(
            events.last(),
            Some(&GeneratorEvent::Halted(HaltReason::PageEnd))
        );
        assert!(!gen.is_running());
    }

    #[test]
    fn looping_run_clears_and_reseeds_at_page_end() {
        let (tx, rx) = unbounded();
        let (chord, scale) = c_major();
        let settings = Settings::default();
        let mut gen = AutoGenerator::new(RunMode::Looping, 48, 84);
        let mut rng_state = 31337u64;
        gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
        for _ in 0..STEPS_PER_PAGE {
            gen.tick(&[], Some(&chord), &scale, &settings, &mut rng_state, &tx);
        }
        let events = drain(&rx);
        let clear_pos = events
            .iter()
            .position(|e| *e == GeneratorEvent::PageCleared)
            .expect("loop boundary should clear the page");
        // Exactly one new note after the clear, back at step 0
        let after = added_notes(&events[clear_pos..]);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].1, 0);
        assert!(gen.is_running());
    }

    #[test]
    fn dead_end_halts_without_emitting() {
        let (tx, rx) = unbounded();
        let settings = Settings::default();
        // No pitch class is in scale, so every candidate sits at the floor
        let empty_scale = ScaleContext::from_classes(&[]);
        let mut gen = AutoGenerator::new(RunMode::Paused, 48, 84);
        let mut rng_state = 555u64;
        gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
        gen.tick(&[], None, &empty_scale, &settings, &mut rng_state, &tx);
        let events = drain(&rx);
        let notes = added_notes(&events);
        assert_eq!(notes.len(), 1); // seed only
        assert_eq!(
            events.last(),
            Some(&GeneratorEvent::Halted(HaltReason::DeadEnd))
        );
        assert!(!gen.is_running());
    }

    #[test]
    fn stop_is_final_and_idempotent() {
        let (tx, rx) = unbounded();
        let (chord, scale) = c_major();
        let settings = Settings::default();
        let mut gen = AutoGenerator::new(RunMode::Looping, 48, 84);
        let mut rng_state = 246810u64;
        gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
        gen.stop(&tx);
        assert!(!gen.is_running());
        let events = drain(&rx);
        assert_eq!(
            events.last(),
            Some(&GeneratorEvent::Halted(HaltReason::Cancelled))
        );

        // Neither stopping again nor ticking emits anything further
        gen.stop(&tx);
        gen.tick(&[], Some(&chord), &scale, &settings, &mut rng_state, &tx);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn emitted_steps_advance_one_per_tick() {
        let (tx, rx) = unbounded();
        let (chord, scale) = c_major();
        let settings = Settings::default();
        let mut gen = AutoGenerator::new(RunMode::Paused, 48, 84);
        let mut rng_state = 77u64;
        gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
        for _ in 0..4 {
            gen.tick(&[], Some(&chord), &scale, &settings, &mut rng_state, &tx);
        }
        let notes = added_notes(&drain(&rx));
        let steps: Vec<usize> = notes.iter().map(|n| n.1).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn velocities_stay_in_range() {
        let (tx, rx) = unbounded();
        let (chord, scale) = c_major();
        let settings = Settings::default();
        let mut gen = AutoGenerator::new(RunMode::Looping, 48, 84);
        let mut rng_state = 13u64;
        gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
        for _ in 0..64 {
            gen.tick(&[], Some(&chord), &scale, &settings, &mut rng_state, &tx);
        }
        for (_, _, velocity) in added_notes(&drain(&rx)) {
            assert!((90..=110).contains(&velocity));
        }
    }

    #[test]
    fn successive_pitches_are_temporally_reachable() {
        let (tx, rx) = unbounded();
        let (chord, scale) = c_major();
        let settings = Settings::default();
        let mut gen = AutoGenerator::new(RunMode::Paused, 48, 84);
        let mut rng_state = 987654u64;
        gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
        for _ in 0..12 {
            gen.tick(&[], Some(&chord), &scale, &settings, &mut rng_state, &tx);
        }
        let notes = added_notes(&drain(&rx));
        for pair in notes.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            assert!(is_temporally_close(next.0, next.1, prev.0, prev.1));
        }
    }

    #[test]
    fn same_seed_replays_the_same_run() {
        let run = |seed: u64| {
            let (tx, rx) = unbounded();
            let (chord, scale) = c_major();
            let settings = Settings::default();
            let mut gen = AutoGenerator::new(RunMode::Paused, 48, 84);
            let mut rng_state = seed;
            gen.start(&degree_pitches(Key::C, 5), &mut rng_state, &tx);
            for _ in 0..8 {
                gen.tick(&[], Some(&chord), &scale, &settings, &mut rng_state, &tx);
            }
            added_notes(&drain(&rx))
        };
        assert_eq!(run(2024), run(2024));
        let a = run(1);
        let b = run(2);
        // Different seeds should not replay identically over 9 notes
        assert_ne!(a, b);
    }
}
