use core::fmt::Write;

use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use ponteado_chords::{harmonic_field, Tuning};
use ponteado_engrave::{ChordDiagram, DiagramStyle};
use ponteado_theory::{Note, ScaleKind};

use crate::chord_finder::next_root_choice;

const COLUMNS: usize = 4;
const CELL_WIDTH: i32 = 85;
const CELL_HEIGHT: i32 = 145;
const GRID_TOP: i32 = 16;
const LABEL_BAND: i32 = 10;

/// Shows all seven diatonic chords of a tonality at once, as a grid of
/// compact diagrams. The field is rederived on every draw; at 7 lookups per
/// derivation there is nothing worth caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonicFieldView {
    pub tuning: Tuning,
    pub tonality: Note,
    pub kind: ScaleKind,
}

impl Default for HarmonicFieldView {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonicFieldView {
    pub fn new() -> Self {
        Self {
            tuning: Tuning::CebolaoEmD,
            tonality: Note::D,
            kind: ScaleKind::Major,
        }
    }

    pub fn cycle_tuning(&mut self) {
        self.tuning = self.tuning.next();
    }

    pub fn cycle_tonality(&mut self) {
        self.tonality = next_root_choice(self.tonality);
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let character_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let mut header = heapless::String::<48>::new();
        let _ = write!(
            header,
            "Campo Harmônico: {} {} ({})",
            self.tonality,
            self.kind.display_name(),
            self.tuning.name()
        );
        Text::new(&header, Point::new(4, 12), character_style).draw(target)?;

        let field = harmonic_field(self.tonality, self.kind, self.tuning);

        for (i, entry) in field.iter().enumerate() {
            let column = (i % COLUMNS) as i32;
            let row = (i / COLUMNS) as i32;
            let cell = Point::new(column * CELL_WIDTH, GRID_TOP + row * CELL_HEIGHT);

            Text::with_text_style(
                entry.label,
                cell + Point::new(CELL_WIDTH / 2, LABEL_BAND / 2),
                character_style,
                centered,
            )
            .draw(target)?;

            match entry.shape {
                Some(shape) => {
                    let diagram = ChordDiagram::compact(shape.name, &shape.positions);
                    let x = (CELL_WIDTH - DiagramStyle::COMPACT.width() as i32) / 2;
                    diagram.draw(target, cell + Point::new(x, LABEL_BAND))?;
                }
                None => {
                    // Not catalogued: show the synthesized chord name where
                    // the diagram would be.
                    Text::with_text_style(
                        &entry.name,
                        cell + Point::new(CELL_WIDTH / 2, CELL_HEIGHT / 2),
                        character_style,
                        centered,
                    )
                    .draw(target)?;
                }
            }
        }

        Ok(())
    }
}
