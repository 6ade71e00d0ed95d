use serde::{Deserialize, Serialize};

/// Pitch class of a MIDI pitch, in [0, 11].
pub fn pitch_class(pitch: u8) -> u8 {
    pitch % 12
}

/// Musical key (pitch class of the tonic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::Cs,
        Key::D,
        Key::Ds,
        Key::E,
        Key::F,
        Key::Fs,
        Key::G,
        Key::Gs,
        Key::A,
        Key::As,
        Key::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Key::C => "C",
            Key::Cs => "C#",
            Key::D => "D",
            Key::Ds => "D#",
            Key::E => "E",
            Key::F => "F",
            Key::Fs => "F#",
            Key::G => "G",
            Key::Gs => "G#",
            Key::A => "A",
            Key::As => "A#",
            Key::B => "B",
        }
    }

    /// MIDI note number for this key in octave 0
    pub fn semitone(&self) -> i32 {
        match self {
            Key::C => 0,
            Key::Cs => 1,
            Key::D => 2,
            Key::Ds => 3,
            Key::E => 4,
            Key::F => 5,
            Key::Fs => 6,
            Key::G => 7,
            Key::Gs => 8,
            Key::A => 9,
            Key::As => 10,
            Key::B => 11,
        }
    }
}

/// Scale definition as intervals from root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    Pentatonic,
    Blues,
    Chromatic,
}

impl Scale {
    pub const ALL: [Scale; 11] = [
        Scale::Major,
        Scale::Minor,
        Scale::Dorian,
        Scale::Phrygian,
        Scale::Lydian,
        Scale::Mixolydian,
        Scale::Aeolian,
        Scale::Locrian,
        Scale::Pentatonic,
        Scale::Blues,
        Scale::Chromatic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scale::Major => "Major",
            Scale::Minor => "Minor",
            Scale::Dorian => "Dorian",
            Scale::Phrygian => "Phrygian",
            Scale::Lydian => "Lydian",
            Scale::Mixolydian => "Mixolydian",
            Scale::Aeolian => "Aeolian",
            Scale::Locrian => "Locrian",
            Scale::Pentatonic => "Pentatonic",
            Scale::Blues => "Blues",
            Scale::Chromatic => "Chromatic",
        }
    }

    /// Semitone intervals from root for this scale
    pub fn intervals(&self) -> &'static [i32] {
        match self {
            Scale::Major => &[0, 2, 4, 5, 7, 9, 11],
            Scale::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Scale::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Scale::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Scale::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Scale::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Scale::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            Scale::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Scale::Pentatonic => &[0, 2, 4, 7, 9],
            Scale::Blues => &[0, 3, 5, 6, 7, 10],
            Scale::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }
}

/// The set of pitch classes considered in-scale at a given step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleContext {
    classes: [bool; 12],
}

impl ScaleContext {
    /// Build from explicit pitch classes. Values are reduced mod 12.
    pub fn from_classes(classes: &[u8]) -> Self {
        let mut set = [false; 12];
        for &pc in classes {
            set[(pc % 12) as usize] = true;
        }
        Self { classes: set }
    }

    /// The pitch classes of `scale` rooted at `key`.
    pub fn from_key_scale(key: Key, scale: Scale) -> Self {
        let root = key.semitone();
        let mut set = [false; 12];
        for &interval in scale.intervals() {
            set[((root + interval) % 12) as usize] = true;
        }
        Self { classes: set }
    }

    pub fn contains(&self, pitch_class: u8) -> bool {
        self.classes[(pitch_class % 12) as usize]
    }

    pub fn len(&self) -> usize {
        self.classes.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.iter().all(|&c| !c)
    }
}

/// Chord quality as an interval template from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Sus2,
    Sus4,
    Diminished,
    Augmented,
    Dominant7,
    Major7,
    Minor7,
}

impl ChordQuality {
    pub fn name(&self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Sus2 => "Sus2",
            ChordQuality::Sus4 => "Sus4",
            ChordQuality::Diminished => "Diminished",
            ChordQuality::Augmented => "Augmented",
            ChordQuality::Dominant7 => "Dominant 7",
            ChordQuality::Major7 => "Major 7",
            ChordQuality::Minor7 => "Minor 7",
        }
    }

    /// Semitone intervals from the root
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
        }
    }
}

/// Chord tones active at a given step. Root is a pitch class in [0, 11].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    root: u8,
    tone_classes: [bool; 12],
}

impl Chord {
    /// Chord rooted at `root` with the interval template of `quality`.
    pub fn new(root: u8, quality: ChordQuality) -> Self {
        let root = root % 12;
        let mut tones = [false; 12];
        for &interval in quality.intervals() {
            tones[((root + interval) % 12) as usize] = true;
        }
        Self {
            root,
            tone_classes: tones,
        }
    }

    /// Chord from explicit tone classes. Values are reduced mod 12.
    pub fn from_classes(root: u8, classes: &[u8]) -> Self {
        let mut tones = [false; 12];
        for &pc in classes {
            tones[(pc % 12) as usize] = true;
        }
        Self {
            root: root % 12,
            tone_classes: tones,
        }
    }

    pub fn root(&self) -> u8 {
        self.root
    }

    pub fn contains(&self, pitch_class: u8) -> bool {
        self.tone_classes[(pitch_class % 12) as usize]
    }
}
