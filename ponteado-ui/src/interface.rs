use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::chord_finder::ChordFinder;
use crate::field_view::HarmonicFieldView;

pub const DISPLAY_SIZE: Size = Size::new(340, 310);

/// Button snapshot fed in by the surrounding device/simulator loop.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct IOState {
    /// Switches between the chord finder and the harmonic field view
    pub view_button: bool,
    /// Cycle the three selectors of the active view:
    /// tuning / root (tonality) / quality (scale kind)
    pub selector_buttons: [bool; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    ChordFinder,
    HarmonicField,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            View::ChordFinder => View::HarmonicField,
            View::HarmonicField => View::ChordFinder,
        }
    }
}

/// The top level of the viola companion: owns both views, routes button
/// presses to whichever is active, and draws it.
#[derive(Default)]
pub struct Interface {
    finder: ChordFinder,
    field: HarmonicFieldView,
    view: View,
    last_io: IOState,
}

impl Interface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn finder(&self) -> &ChordFinder {
        &self.finder
    }

    pub fn field(&self) -> &HarmonicFieldView {
        &self.field
    }

    /// Reacts to rising edges only, so a held button acts once.
    pub fn update_io_state(&mut self, state: IOState) {
        macro_rules! is_button_pressed {
            ($field:ident) => {
                matches!((self.last_io.$field, state.$field), (false, true))
            };
            ($field:ident[$i:expr]) => {
                matches!(
                    (self.last_io.$field[$i], state.$field[$i]),
                    (false, true)
                )
            };
        }

        if is_button_pressed!(view_button) {
            self.view = self.view.next();
        }

        for i in 0..3 {
            if !is_button_pressed!(selector_buttons[i]) {
                continue;
            }
            match (self.view, i) {
                (View::ChordFinder, 0) => self.finder.cycle_tuning(),
                (View::ChordFinder, 1) => self.finder.cycle_root(),
                (View::ChordFinder, 2) => self.finder.cycle_quality(),
                (View::HarmonicField, 0) => self.field.cycle_tuning(),
                (View::HarmonicField, 1) => self.field.cycle_tonality(),
                (View::HarmonicField, _) => self.field.toggle_kind(),
                (View::ChordFinder, _) => unreachable!(),
            }
        }

        self.last_io = state;
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Rectangle::new(Point::zero(), DISPLAY_SIZE)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(target)?;

        match self.view {
            View::ChordFinder => self.finder.draw(target),
            View::HarmonicField => self.field.draw(target),
        }
    }
}
