use crate::pitch::Note;

/// Harmonic category of a chord, independent of its root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Seventh,
    MinorSeventh,
    MajorSeventh,
    Diminished,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 6] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Seventh,
        ChordQuality::MinorSeventh,
        ChordQuality::MajorSeventh,
        ChordQuality::Diminished,
    ];

    /// Cipher suffix, as written after the root note ("Em", "D7", "C#dim").
    pub const fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Seventh => "7",
            ChordQuality::MinorSeventh => "m7",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::Diminished => "dim",
        }
    }

    /// Selector label as the original course material names the qualities.
    pub const fn display_name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Maior",
            ChordQuality::Minor => "Menor",
            ChordQuality::Seventh => "Com Sétima",
            ChordQuality::MinorSeventh => "Menor com Sétima",
            ChordQuality::MajorSeventh => "Maior com Sétima",
            ChordQuality::Diminished => "Diminuto",
        }
    }
}

/// One degree of a diatonic scale: how far above the tonic its chord root
/// sits, which chord quality the scale imposes there, and its roman label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Degree {
    pub interval: u32,
    pub quality: ChordQuality,
    pub label: &'static str,
}

const fn degree(interval: u32, quality: ChordQuality, label: &'static str) -> Degree {
    Degree {
        interval,
        quality,
        label,
    }
}

#[rustfmt::skip]
const MAJOR_DEGREES: [Degree; 7] = [
    degree(0,  ChordQuality::Major,      "I"),
    degree(2,  ChordQuality::Minor,      "ii"),
    degree(4,  ChordQuality::Minor,      "iii"),
    degree(5,  ChordQuality::Major,      "IV"),
    degree(7,  ChordQuality::Major,      "V"),
    degree(9,  ChordQuality::Minor,      "vi"),
    degree(11, ChordQuality::Diminished, "vii°"),
];

#[rustfmt::skip]
const MINOR_DEGREES: [Degree; 7] = [
    degree(0,  ChordQuality::Minor,      "i"),
    degree(2,  ChordQuality::Diminished, "ii°"),
    degree(3,  ChordQuality::Major,      "III"),
    degree(5,  ChordQuality::Minor,      "iv"),
    degree(7,  ChordQuality::Minor,      "v"),
    degree(8,  ChordQuality::Major,      "VI"),
    degree(10, ChordQuality::Major,      "VII"),
];

/// Major or natural minor. Harmonic/melodic minor never show up in the
/// chord material this engine serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Major,
    Minor,
}

impl ScaleKind {
    pub const fn degrees(self) -> &'static [Degree; 7] {
        match self {
            ScaleKind::Major => &MAJOR_DEGREES,
            ScaleKind::Minor => &MINOR_DEGREES,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            ScaleKind::Major => "Maior",
            ScaleKind::Minor => "Menor",
        }
    }

    pub const fn toggled(self) -> ScaleKind {
        match self {
            ScaleKind::Major => ScaleKind::Minor,
            ScaleKind::Minor => ScaleKind::Major,
        }
    }

    /// The root of the given scale degree (0-based) in this scale kind,
    /// counted up from the tonality.
    pub fn degree_root(self, tonality: Note, degree: usize) -> Note {
        tonality.at_interval(self.degrees()[degree].interval)
    }
}
