use std::{thread, time::Duration};

use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::{
    sdl2::Keycode, BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent,
    Window,
};
use env_logger::{Builder, Env};
use log::{info, LevelFilter};
use ponteado_chords::{ChordShape, Tuning};
use ponteado_engrave::ChordDiagram;

/// Pages through every catalogued shape of both tunings with the arrow keys.
fn main() -> Result<(), core::convert::Infallible> {
    Builder::from_env(Env::default().default_filter_or(LevelFilter::Debug.to_string())).init();

    let entries: Vec<(Tuning, &ChordShape)> = Tuning::ALL
        .iter()
        .flat_map(|tuning| {
            tuning
                .catalogue()
                .iter()
                .map(move |(_, _, shape)| (*tuning, shape))
        })
        .collect();
    info!("catalogue holds {} shapes", entries.len());

    let display_size = Size::new(160, 240);
    let mut display = SimulatorDisplay::<BinaryColor>::new(display_size);

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledWhite)
        .scale(4)
        .pixel_spacing(1)
        .build();
    let mut window = Window::new("Ponteado catalogue", &output_settings);

    let character_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let mut index = 0;

    'main: loop {
        Rectangle::new(Point::zero(), display_size)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(&mut display)?;

        let (tuning, shape) = entries[index];
        Text::new(tuning.name(), Point::new(4, 12), character_style).draw(&mut display)?;

        ChordDiagram::new(shape.name, &shape.positions).draw(&mut display, Point::new(30, 24))?;

        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Left => index = (index + entries.len() - 1) % entries.len(),
                    Keycode::Right => index = (index + 1) % entries.len(),
                    Keycode::Escape => break 'main,
                    _ => (),
                },
                SimulatorEvent::Quit => break 'main,
                _ => (),
            }
        }

        thread::sleep(Duration::from_millis(50));
    }

    Ok(())
}
