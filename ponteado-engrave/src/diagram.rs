use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    mono_font::{
        iso_8859_1::{FONT_5X8, FONT_6X10},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    primitives::{Circle, Line, Primitive, PrimitiveStyle, Rectangle, StyledDrawable},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use heapless::Vec;
use log::debug;
use ponteado_chords::{FretPosition, STRING_COUNT};

/// Spacing and radius constants of a diagram. Two presets exist; they only
/// scale the geometry, the topology (5 strings, nut, fret grid, markers) is
/// identical.
#[derive(Clone, Copy)]
pub struct DiagramStyle {
    pub fret_height: i32,
    pub string_spacing: i32,
    pub nut_height: i32,
    pub dot_radius: i32,
    pub open_radius: i32,
    pub bottom_margin: i32,
    pub font: &'static MonoFont<'static>,
}

impl DiagramStyle {
    pub const REGULAR: DiagramStyle = DiagramStyle {
        fret_height: 30,
        string_spacing: 20,
        nut_height: 8,
        dot_radius: 6,
        open_radius: 4,
        bottom_margin: 20,
        font: &FONT_6X10,
    };

    pub const COMPACT: DiagramStyle = DiagramStyle {
        fret_height: 20,
        string_spacing: 15,
        nut_height: 6,
        dot_radius: 4,
        open_radius: 3,
        bottom_margin: 15,
        font: &FONT_5X8,
    };

    /// Horizontal margin left of the first string; the nut top edge sits at
    /// the same offset from the top of the grid.
    pub const GRID_MARGIN: i32 = 10;

    pub const fn width(&self) -> u32 {
        ((STRING_COUNT as i32 - 1) * self.string_spacing + 2 * Self::GRID_MARGIN) as u32
    }

    /// Height of the fretboard drawing alone, without the title band.
    pub const fn grid_height(&self, frets_to_show: u32) -> u32 {
        (frets_to_show as i32 * self.fret_height + self.nut_height + self.bottom_margin) as u32
    }

    /// Vertical space reserved above the grid for the chord name.
    pub const fn title_band(&self) -> i32 {
        self.font.character_size.height as i32 + 4
    }

    const fn string_x(&self, string: usize) -> i32 {
        Self::GRID_MARGIN + string as i32 * self.string_spacing
    }

    /// Grid-relative y of the given fret line (fret 0 is the nut's bottom
    /// edge).
    const fn fret_y(&self, fret: i32) -> i32 {
        Self::GRID_MARGIN + self.nut_height + fret * self.fret_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// "X" glyph above the nut: string not played.
    Muted,
    /// Small unfilled circle above the nut: open string.
    Open,
    /// Filled dot, vertically centered in its fret space.
    Dot,
}

/// One marker with its center, in grid-relative coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedMarker {
    pub string: usize,
    pub marker: Marker,
    pub center: Point,
}

/// Pure layout pass: positions to markers. Fret numbers beyond the visible
/// window produce no marker at all; that is clipping policy, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramLayout {
    pub markers: Vec<PlacedMarker, STRING_COUNT>,
}

impl DiagramLayout {
    pub fn new(
        positions: &[FretPosition; STRING_COUNT],
        frets_to_show: u32,
        style: &DiagramStyle,
    ) -> Self {
        let mut markers = Vec::new();

        for (string, position) in positions.iter().enumerate() {
            let x = style.string_x(string);

            let placed = match position {
                FretPosition::Muted => Some(PlacedMarker {
                    string,
                    marker: Marker::Muted,
                    center: Point::new(x, DiagramStyle::GRID_MARGIN - 4),
                }),
                FretPosition::Fret(0) => Some(PlacedMarker {
                    string,
                    marker: Marker::Open,
                    center: Point::new(x, DiagramStyle::GRID_MARGIN - 4),
                }),
                FretPosition::Fret(fret) if (*fret as u32) <= frets_to_show => {
                    let fret = *fret as i32;
                    Some(PlacedMarker {
                        string,
                        marker: Marker::Dot,
                        center: Point::new(x, style.fret_y(fret) - style.fret_height / 2),
                    })
                }
                FretPosition::Fret(fret) => {
                    debug!(
                        "string {} fret {} outside the {}-fret window, not drawn",
                        string, fret, frets_to_show
                    );
                    None
                }
            };

            if let Some(placed) = placed {
                // Capacity is STRING_COUNT and at most one marker is placed
                // per string, so the push always fits.
                let _ = markers.push(placed);
            }
        }

        Self { markers }
    }
}

/// A drawable chord diagram: title above a fretboard grid with one marker
/// per played string. Pure function of its inputs, holds no state.
pub struct ChordDiagram<'a> {
    title: &'a str,
    positions: &'a [FretPosition; STRING_COUNT],
    frets_to_show: u32,
    style: DiagramStyle,
}

impl<'a> ChordDiagram<'a> {
    pub const DEFAULT_FRETS: u32 = 5;

    pub fn new(title: &'a str, positions: &'a [FretPosition; STRING_COUNT]) -> Self {
        Self {
            title,
            positions,
            frets_to_show: Self::DEFAULT_FRETS,
            style: DiagramStyle::REGULAR,
        }
    }

    pub fn compact(title: &'a str, positions: &'a [FretPosition; STRING_COUNT]) -> Self {
        Self {
            style: DiagramStyle::COMPACT,
            ..Self::new(title, positions)
        }
    }

    pub fn with_frets(mut self, frets_to_show: u32) -> Self {
        self.frets_to_show = frets_to_show;
        self
    }

    pub fn size(&self) -> Size {
        Size::new(
            self.style.width(),
            self.style.grid_height(self.frets_to_show) + self.style.title_band() as u32,
        )
    }

    pub fn draw<D>(&self, target: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let style = &self.style;
        let line_style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        let fill_style = PrimitiveStyle::with_fill(BinaryColor::On);
        let character_style = MonoTextStyle::new(style.font, BinaryColor::On);
        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(
            self.title,
            position + Point::new(style.width() as i32 / 2, style.title_band() / 2),
            character_style,
            centered,
        )
        .draw(target)?;

        let grid = position + Point::new(0, style.title_band());

        // Nut: one pixel wider than the string span on each side.
        Rectangle::new(
            grid + Point::new(DiagramStyle::GRID_MARGIN - 1, DiagramStyle::GRID_MARGIN),
            Size::new(
                ((STRING_COUNT as i32 - 1) * style.string_spacing + 2) as u32,
                style.nut_height as u32,
            ),
        )
        .draw_styled(&fill_style, target)?;

        for fret in 1..=self.frets_to_show as i32 {
            let y = style.fret_y(fret);
            Line::new(
                grid + Point::new(DiagramStyle::GRID_MARGIN, y),
                grid + Point::new(style.string_x(STRING_COUNT - 1), y),
            )
            .into_styled(line_style)
            .draw(target)?;
        }

        for string in 0..STRING_COUNT {
            let x = style.string_x(string);
            Line::new(
                grid + Point::new(x, DiagramStyle::GRID_MARGIN),
                grid + Point::new(x, style.grid_height(self.frets_to_show) as i32 - 5),
            )
            .into_styled(line_style)
            .draw(target)?;
        }

        let layout = DiagramLayout::new(self.positions, self.frets_to_show, style);
        for placed in &layout.markers {
            let center = grid + placed.center;
            match placed.marker {
                Marker::Muted => {
                    Text::with_text_style("X", center, character_style, centered)
                        .draw(target)?;
                }
                Marker::Open => {
                    Circle::with_center(center, (2 * style.open_radius + 1) as u32)
                        .draw_styled(&line_style, target)?;
                }
                Marker::Dot => {
                    Circle::with_center(center, (2 * style.dot_radius + 1) as u32)
                        .draw_styled(&fill_style, target)?;
                }
            }
        }

        Ok(())
    }
}
