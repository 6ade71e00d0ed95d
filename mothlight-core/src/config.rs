use std::path::PathBuf;

use serde::Deserialize;

use mothlight_types::{ChordToneDensity, Key, Scale, Settings};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    bpm: Option<u16>,
    key: Option<String>,
    scale: Option<String>,
    chord_tone_density: Option<String>,
    passing_tones: Option<bool>,
    seed_octave: Option<u8>,
}

pub struct Config {
    defaults: DefaultsConfig,
}

impl Config {
    pub fn load() -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge_defaults(&mut base.defaults, user.defaults),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            defaults: base.defaults,
        }
    }

    /// Brightness settings from the config. Unrecognized density values fail
    /// closed to medium.
    pub fn settings(&self) -> Settings {
        let chord_tone_density = match self.defaults.chord_tone_density.as_deref() {
            None => ChordToneDensity::Medium,
            Some(s) => parse_density(s).unwrap_or_else(|| {
                log::warn!(target: "config", "unknown chord_tone_density {:?}, using medium", s);
                ChordToneDensity::Medium
            }),
        };
        Settings {
            chord_tone_density,
            passing_tones: self.defaults.passing_tones.unwrap_or(false),
        }
    }

    pub fn bpm(&self) -> f32 {
        self.defaults.bpm.unwrap_or(120) as f32
    }

    pub fn key(&self) -> Key {
        self.defaults
            .key
            .as_deref()
            .and_then(parse_key)
            .unwrap_or(Key::C)
    }

    pub fn scale(&self) -> Scale {
        self.defaults
            .scale
            .as_deref()
            .and_then(parse_scale)
            .unwrap_or(Scale::Major)
    }

    /// Octave the generator seeds in (clamped to the keyboard)
    pub fn seed_octave(&self) -> u8 {
        self.defaults.seed_octave.unwrap_or(5).clamp(1, 9)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mothlight").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.bpm.is_some() {
        base.bpm = user.bpm;
    }
    if user.key.is_some() {
        base.key = user.key;
    }
    if user.scale.is_some() {
        base.scale = user.scale;
    }
    if user.chord_tone_density.is_some() {
        base.chord_tone_density = user.chord_tone_density;
    }
    if user.passing_tones.is_some() {
        base.passing_tones = user.passing_tones;
    }
    if user.seed_octave.is_some() {
        base.seed_octave = user.seed_octave;
    }
}

fn parse_density(s: &str) -> Option<ChordToneDensity> {
    match s.to_lowercase().as_str() {
        "low" => Some(ChordToneDensity::Low),
        "medium" => Some(ChordToneDensity::Medium),
        "high" => Some(ChordToneDensity::High),
        _ => None,
    }
}

fn parse_key(s: &str) -> Option<Key> {
    match s {
        "C" => Some(Key::C),
        "C#" | "Cs" => Some(Key::Cs),
        "D" => Some(Key::D),
        "D#" | "Ds" => Some(Key::Ds),
        "E" => Some(Key::E),
        "F" => Some(Key::F),
        "F#" | "Fs" => Some(Key::Fs),
        "G" => Some(Key::G),
        "G#" | "Gs" => Some(Key::Gs),
        "A" => Some(Key::A),
        "A#" | "As" => Some(Key::As),
        "B" => Some(Key::B),
        _ => None,
    }
}

fn parse_scale(s: &str) -> Option<Scale> {
    match s {
        "Major" => Some(Scale::Major),
        "Minor" => Some(Scale::Minor),
        "Dorian" => Some(Scale::Dorian),
        "Phrygian" => Some(Scale::Phrygian),
        "Lydian" => Some(Scale::Lydian),
        "Mixolydian" => Some(Scale::Mixolydian),
        "Aeolian" => Some(Scale::Aeolian),
        "Locrian" => Some(Scale::Locrian),
        "Pentatonic" => Some(Scale::Pentatonic),
        "Blues" => Some(Scale::Blues),
        "Chromatic" => Some(Scale::Chromatic),
        _ => None,
    }
}
