use core::fmt::Write;

use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Alignment, Text},
};
use log::debug;
use ponteado_chords::{lookup_chord, ChordShape, Tuning};
use ponteado_engrave::ChordDiagram;
use ponteado_theory::{ChordQuality, Note};

use crate::interface::DISPLAY_SIZE;

/// Roots offered by the selectors. The course material never lists A#, even
/// though it is a valid pitch class; computed degree roots can still land on
/// it elsewhere.
pub const ROOT_CHOICES: [Note; 11] = [
    Note::A,
    Note::B,
    Note::C,
    Note::Cs,
    Note::D,
    Note::Ds,
    Note::E,
    Note::F,
    Note::Fs,
    Note::G,
    Note::Gs,
];

pub(crate) fn next_root_choice(current: Note) -> Note {
    let next = ROOT_CHOICES
        .iter()
        .position(|root| *root == current)
        .map_or(0, |i| (i + 1) % ROOT_CHOICES.len());
    ROOT_CHOICES[next]
}

/// Interactive single-chord lookup: pick a tuning, a root and a quality, see
/// the fingering. Not every combination is catalogued; a miss shows an
/// explanatory message instead of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordFinder {
    pub tuning: Tuning,
    pub root: Note,
    pub quality: ChordQuality,
}

impl Default for ChordFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordFinder {
    pub fn new() -> Self {
        Self {
            tuning: Tuning::CebolaoEmD,
            root: Note::D,
            quality: ChordQuality::Major,
        }
    }

    /// Advances to the next tuning. Root and quality snap back to the
    /// tuning's known-good defaults: carrying a stale root across tunings
    /// would often land on an uncatalogued combination for no good reason.
    pub fn cycle_tuning(&mut self) {
        self.tuning = self.tuning.next();
        self.root = self.tuning.default_root();
        self.quality = ChordQuality::Major;
        debug!("tuning changed to {}, selection reset", self.tuning.name());
    }

    pub fn cycle_root(&mut self) {
        self.root = next_root_choice(self.root);
    }

    pub fn cycle_quality(&mut self) {
        let next = ChordQuality::ALL
            .iter()
            .position(|quality| *quality == self.quality)
            .map_or(0, |i| (i + 1) % ChordQuality::ALL.len());
        self.quality = ChordQuality::ALL[next];
    }

    pub fn current_shape(&self) -> Option<&'static ChordShape> {
        lookup_chord(self.tuning, self.root, self.quality)
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let character_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

        Text::new(self.tuning.name(), Point::new(4, 12), character_style).draw(target)?;

        let mut selection = heapless::String::<32>::new();
        let _ = write!(selection, "{} {}", self.root, self.quality.display_name());
        Text::new(&selection, Point::new(4, 24), character_style).draw(target)?;

        match self.current_shape() {
            Some(shape) => {
                let diagram = ChordDiagram::new(shape.name, &shape.positions);
                let x = (DISPLAY_SIZE.width - diagram.size().width) as i32 / 2;
                diagram.draw(target, Point::new(x, 40))?;
            }
            None => {
                Text::with_alignment(
                    "Acorde não encontrado em nossa\nbiblioteca para esta afinação.\nTente outra combinação.",
                    Point::new(DISPLAY_SIZE.width as i32 / 2, 120),
                    character_style,
                    Alignment::Center,
                )
                .draw(target)?;
            }
        }

        Ok(())
    }
}
