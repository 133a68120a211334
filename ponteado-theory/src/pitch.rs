use core::fmt;
use core::str::FromStr;

/// One of the 12 pitch classes of the chromatic scale, written as a cipher
/// token ("C", "C#", ..., "B"). Octaves are irrelevant for chord shapes, so
/// unlike a full note there is no octave component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Note {
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

impl Note {
    /// The fixed chromatic sequence, starting at C. All interval arithmetic
    /// is an index into this array mod 12.
    pub const CHROMATIC: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    pub const fn index(self) -> usize {
        match self {
            Note::C => 0,
            Note::Cs => 1,
            Note::D => 2,
            Note::Ds => 3,
            Note::E => 4,
            Note::F => 5,
            Note::Fs => 6,
            Note::G => 7,
            Note::Gs => 8,
            Note::A => 9,
            Note::As => 10,
            Note::B => 11,
        }
    }

    /// The note `semitones` above this one, wrapping around the octave.
    /// Total: any offset is valid, `at_interval(12)` lands back on self.
    pub const fn at_interval(self, semitones: u32) -> Note {
        Self::CHROMATIC[(self.index() + semitones as usize) % 12]
    }

    pub const fn cipher(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cipher())
    }
}

/// A note token that is not one of the 12 cipher names. Only reachable
/// through parsing; the static tables use the enum directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteError;

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a chromatic note token")
    }
}

impl FromStr for Note {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::CHROMATIC
            .into_iter()
            .find(|note| note.cipher() == s)
            .ok_or(ParseNoteError)
    }
}
