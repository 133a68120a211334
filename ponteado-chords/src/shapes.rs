use ponteado_theory::{ChordQuality, Note};

use crate::shape;

/// The viola caipira has five string courses.
pub const STRING_COUNT: usize = 5;

/// Where the fretting hand puts one string: not played at all, or pressed
/// at a fret (0 meaning the string rings open).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FretPosition {
    Muted,
    Fret(u8),
}

impl FretPosition {
    pub const fn fret(self) -> Option<u8> {
        match self {
            FretPosition::Muted => None,
            FretPosition::Fret(fret) => Some(fret),
        }
    }
}

/// A catalogued fingering: the cipher name as printed above the diagram and
/// one position per string, from the 5th string to the 1st.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChordShape {
    pub name: &'static str,
    pub positions: [FretPosition; STRING_COUNT],
}

/// A named open tuning of the viola. Each tuning has its own shape
/// catalogue, since a fingering only makes sense against specific open
/// pitches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tuning {
    CebolaoEmD,
    CebolaoEmE,
}

impl Tuning {
    pub const ALL: [Tuning; 2] = [Tuning::CebolaoEmD, Tuning::CebolaoEmE];

    pub const fn name(self) -> &'static str {
        match self {
            Tuning::CebolaoEmD => "Cebolão em D",
            Tuning::CebolaoEmE => "Cebolão em E",
        }
    }

    /// Open pitches from the 5th string to the 1st.
    pub const fn open_strings(self) -> [Note; STRING_COUNT] {
        match self {
            Tuning::CebolaoEmD => [Note::D, Note::A, Note::Fs, Note::D, Note::A],
            Tuning::CebolaoEmE => [Note::E, Note::B, Note::Gs, Note::E, Note::B],
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Tuning::CebolaoEmD => {
                "D A F# D A (da 5ª para a 1ª corda). Afinação tradicional para pagodes e modas."
            }
            Tuning::CebolaoEmE => {
                "E B G# E B (da 5ª para a 1ª corda). Variação um tom acima, comum em repertórios mais modernos."
            }
        }
    }

    /// The root every tuning is guaranteed to have catalogued shapes for;
    /// the chord finder falls back to it when the tuning changes.
    pub const fn default_root(self) -> Note {
        match self {
            Tuning::CebolaoEmD => Note::D,
            Tuning::CebolaoEmE => Note::E,
        }
    }

    pub const fn next(self) -> Tuning {
        match self {
            Tuning::CebolaoEmD => Tuning::CebolaoEmE,
            Tuning::CebolaoEmE => Tuning::CebolaoEmD,
        }
    }

    pub const fn catalogue(self) -> &'static [(Note, ChordQuality, ChordShape)] {
        match self {
            Tuning::CebolaoEmD => CEBOLAO_EM_D,
            Tuning::CebolaoEmE => CEBOLAO_EM_E,
        }
    }
}

#[rustfmt::skip]
const CEBOLAO_EM_D: &[(Note, ChordQuality, ChordShape)] = &[
    (Note::C,  ChordQuality::Major,        shape!("C",     [x, 1, 2, 1, 1])),
    (Note::C,  ChordQuality::Minor,        shape!("Cm",    [x, 3, 4, 3, 3])),
    (Note::D,  ChordQuality::Major,        shape!("D",     [0, 0, 0, 0, 0])),
    (Note::D,  ChordQuality::Minor,        shape!("Dm",    [0, 0, 0, 1, 0])),
    (Note::D,  ChordQuality::Seventh,      shape!("D7",    [0, 0, 0, 2, 0])),
    (Note::D,  ChordQuality::MajorSeventh, shape!("Dmaj7", [0, 0, 0, 3, 0])),
    (Note::E,  ChordQuality::Major,        shape!("E",     [2, 2, 3, 4, 2])),
    (Note::E,  ChordQuality::Minor,        shape!("Em",    [2, 2, 3, 2, 1])),
    (Note::E,  ChordQuality::Seventh,      shape!("E7",    [2, 2, 3, 2, 0])),
    (Note::F,  ChordQuality::Major,        shape!("F",     [3, 3, 4, 3, 3])),
    (Note::F,  ChordQuality::Minor,        shape!("Fm",    [3, 3, 4, 5, 5])),
    (Note::G,  ChordQuality::Major,        shape!("G",     [0, 2, 1, 2, 0])),
    (Note::G,  ChordQuality::Minor,        shape!("Gm",    [0, 2, 1, 1, 0])),
    (Note::G,  ChordQuality::Seventh,      shape!("G7",    [0, 2, 1, 2, 3])),
    (Note::A,  ChordQuality::Major,        shape!("A",     [2, 0, 1, 0, 2])),
    (Note::A,  ChordQuality::Minor,        shape!("Am",    [2, 0, 1, 0, 1])),
    (Note::A,  ChordQuality::Seventh,      shape!("A7",    [2, 0, 1, 0, 0])),
    (Note::B,  ChordQuality::Major,        shape!("B",     [4, 4, 5, 4, 4])),
    (Note::B,  ChordQuality::Minor,        shape!("Bm",    [x, 0, 3, 2, 3])),
    (Note::B,  ChordQuality::Seventh,      shape!("B7",    [x, 0, 3, 2, 2])),
    (Note::Fs, ChordQuality::Minor,        shape!("F#m",   [4, 4, 5, 4, 3])),
    (Note::Fs, ChordQuality::Seventh,      shape!("F#7",   [4, 4, 5, 4, 2])),
    (Note::Cs, ChordQuality::Diminished,   shape!("C#dim", [x, x, 1, 2, 1])),
];

#[rustfmt::skip]
const CEBOLAO_EM_E: &[(Note, ChordQuality, ChordShape)] = &[
    (Note::C,  ChordQuality::Major,        shape!("C",     [x, 3, 4, 3, 3])),
    (Note::C,  ChordQuality::Minor,        shape!("Cm",    [x, 3, 4, 3, 2])),
    (Note::D,  ChordQuality::Major,        shape!("D",     [x, 0, 2, 1, 2])),
    (Note::D,  ChordQuality::Minor,        shape!("Dm",    [x, 0, 2, 1, 1])),
    (Note::E,  ChordQuality::Major,        shape!("E",     [0, 0, 0, 0, 0])),
    (Note::E,  ChordQuality::Minor,        shape!("Em",    [0, 0, 0, 1, 0])),
    (Note::E,  ChordQuality::Seventh,      shape!("E7",    [0, 0, 0, 2, 0])),
    (Note::E,  ChordQuality::MajorSeventh, shape!("Emaj7", [0, 0, 0, 3, 0])),
    (Note::F,  ChordQuality::Major,        shape!("F",     [1, 1, 2, 1, 1])),
    (Note::F,  ChordQuality::Minor,        shape!("Fm",    [1, 1, 2, 3, 3])),
    (Note::G,  ChordQuality::Major,        shape!("G",     [3, 3, 2, 3, 3])),
    (Note::G,  ChordQuality::Minor,        shape!("Gm",    [3, 3, 2, 1, 1])),
    (Note::A,  ChordQuality::Major,        shape!("A",     [2, 2, 1, 2, 0])),
    (Note::A,  ChordQuality::Minor,        shape!("Am",    [2, 2, 1, 3, 0])),
    (Note::A,  ChordQuality::Seventh,      shape!("A7",    [2, 2, 1, 2, 3])),
    (Note::B,  ChordQuality::Major,        shape!("B",     [4, 4, 3, 4, 2])),
    (Note::B,  ChordQuality::Minor,        shape!("Bm",    [4, 4, 3, 5, 5])),
    (Note::B,  ChordQuality::Seventh,      shape!("B7",    [0, 1, 2, 0, 2])),
    (Note::Cs, ChordQuality::Minor,        shape!("C#m",   [x, 2, 1, 2, 0])),
    (Note::Cs, ChordQuality::MinorSeventh, shape!("C#m7",  [x, 2, 1, 2, 3])),
    (Note::Fs, ChordQuality::Major,        shape!("F#",    [2, 2, 1, 2, 2])),
    (Note::Fs, ChordQuality::Minor,        shape!("F#m",   [2, 1, 1, 2, 2])),
    (Note::Fs, ChordQuality::Seventh,      shape!("F#7",   [2, 1, 1, 0, 2])),
    (Note::Gs, ChordQuality::Minor,        shape!("G#m",   [4, 4, 3, 4, 4])),
    (Note::Gs, ChordQuality::Diminished,   shape!("G#dim", [4, 3, 2, 3, x])),
    (Note::Ds, ChordQuality::Diminished,   shape!("D#dim", [x, x, 0, 1, 0])),
];

/// Looks a fingering up in the tuning's catalogue. Coverage is deliberately
/// partial: a miss means "not catalogued", which callers are expected to
/// absorb (show a plain chord name instead of a diagram).
pub fn lookup_chord(
    tuning: Tuning,
    root: Note,
    quality: ChordQuality,
) -> Option<&'static ChordShape> {
    tuning
        .catalogue()
        .iter()
        .find(|(note, q, _)| *note == root && *q == quality)
        .map(|(_, _, shape)| shape)
}
