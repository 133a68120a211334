use core::fmt::Write;

use log::debug;
use ponteado_theory::{ChordQuality, Note, ScaleKind};

use crate::shapes::{lookup_chord, ChordShape, Tuning};

/// One entry of a harmonic field: the roman-numeral degree label, the chord
/// name to print, and the catalogued fingering if the library has one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeChord {
    pub label: &'static str,
    pub name: heapless::String<8>,
    pub shape: Option<&'static ChordShape>,
}

/// Suffix used when a degree's chord is not catalogued and only its name can
/// be shown. Degree patterns only ever produce major, minor, and diminished
/// triads.
const fn fallback_suffix(quality: ChordQuality) -> &'static str {
    match quality {
        ChordQuality::Minor => "m",
        ChordQuality::Diminished => "°",
        _ => "",
    }
}

/// Derives the seven diatonic chords of `tonality` in the given scale kind,
/// resolved against `tuning`'s catalogue. Always exactly 7 entries in degree
/// order; lookups that miss keep a synthesized name and no shape.
pub fn harmonic_field(tonality: Note, kind: ScaleKind, tuning: Tuning) -> [DegreeChord; 7] {
    let field = core::array::from_fn(|i| {
        let degree = &kind.degrees()[i];
        let root = tonality.at_interval(degree.interval);
        let shape = lookup_chord(tuning, root, degree.quality);

        let mut name = heapless::String::new();
        match shape {
            // Catalogued names are at most 5 bytes, synthesized ones at most
            // 4, so the writes cannot overflow the capacity.
            Some(shape) => {
                let _ = name.push_str(shape.name);
            }
            None => {
                let _ = write!(name, "{}{}", root, fallback_suffix(degree.quality));
            }
        }

        DegreeChord {
            label: degree.label,
            name,
            shape,
        }
    });

    debug!(
        "harmonic field of {} {:?} in {}: {:?}",
        tonality,
        kind,
        tuning.name(),
        field
    );

    field
}
