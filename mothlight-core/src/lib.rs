//! # mothlight-core
//!
//! Brightness engine and autonomous generator for the Mothlight piano roll.
//!
//! Every (pitch, step) cell gets a continuous fitness score, its brightness,
//! from the active chord, scale, settings, and already-placed notes. The
//! same score drives live highlighting, the ghost imprints placed notes
//! leave on nearby cells, and the moth-to-light generator that walks the
//! page sampling notes proportionally to brightness.
//!
//! Scoring is pure and re-entrant; the generator is the only component with
//! memory across calls. All randomness flows through an explicit `&mut u64`
//! state so runs are reproducible from a seed.

pub mod brightness;
pub mod config;
pub mod generator;
pub mod ghost;
pub mod proximity;
pub mod rng;
pub mod starting_note;

pub use brightness::{brightness, MAX_BRIGHTNESS, MIN_BRIGHTNESS};
pub use config::Config;
pub use generator::{tick_period_secs, AutoGenerator, RunMode, CANDIDATE_THRESHOLD};
pub use ghost::{ghost_brightness, GHOST_DAMPING};
pub use proximity::{expected_steps, is_temporally_close, stagger, Stagger};
pub use starting_note::{degree_pitches, pick_starting_pitch};
