use std::{thread, time::Duration};

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_graphics_simulator::{
    sdl2::Keycode, BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent,
    Window,
};
use env_logger::{Builder, Env};
use log::LevelFilter;
use ponteado_ui::{IOState, Interface, DISPLAY_SIZE};

/// Interactive run of the full interface. Tab switches between the chord
/// finder and the harmonic field view; 1/2/3 cycle the three selectors of
/// whichever view is active.
fn main() -> Result<(), core::convert::Infallible> {
    Builder::from_env(Env::default().default_filter_or(LevelFilter::Debug.to_string())).init();

    let mut display = SimulatorDisplay::<BinaryColor>::new(DISPLAY_SIZE);

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledWhite)
        .scale(2)
        .pixel_spacing(1)
        .build();
    let mut window = Window::new("Ponteado", &output_settings);

    let mut interface = Interface::new();
    let mut io_state = IOState::default();

    'main: loop {
        interface.draw(&mut display)?;
        interface.update_io_state(io_state);

        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Tab => io_state.view_button = true,
                    Keycode::Num1 => io_state.selector_buttons[0] = true,
                    Keycode::Num2 => io_state.selector_buttons[1] = true,
                    Keycode::Num3 => io_state.selector_buttons[2] = true,
                    Keycode::Escape => break 'main,
                    _ => (),
                },
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::Tab => io_state.view_button = false,
                    Keycode::Num1 => io_state.selector_buttons[0] = false,
                    Keycode::Num2 => io_state.selector_buttons[1] = false,
                    Keycode::Num3 => io_state.selector_buttons[2] = false,
                    _ => (),
                },
                SimulatorEvent::Quit => break 'main,
                _ => (),
            }
        }

        thread::sleep(Duration::from_millis(30));
    }

    Ok(())
}
