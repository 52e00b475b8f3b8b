//! Draws a 3x3 gradient that wanders diagonally across the grid, and prints button presses.

use launchpad_classic::{Color, Launchpad, OpenOptions};
use std::time::Duration;

fn main() -> Result<(), launchpad_classic::MidiError> {
    env_logger::init();

    let mut launchpad = Launchpad::open(&OpenOptions::default())?;
    launchpad.setup()?;

    let mut offset = 0;
    loop {
        launchpad.output().reset()?;

        if let Some(event) = launchpad.input().poll()? {
            let (id, pressed) = event.raw();
            if pressed {
                println!("button {} ({:?})", id, event.xy());
            }
            // top left automap button quits
            if id == 200 && pressed {
                break;
            }
        }

        // red rises to the right, green rises downwards
        for x in 0..3 {
            for y in 0..3 {
                launchpad
                    .output()
                    .set_xy(x + offset, y + offset, Color::new(x, y))?;
            }
        }

        offset = (offset + 1) % 8;
        std::thread::sleep(Duration::from_millis(50));
    }

    launchpad.output().reset()?;
    launchpad.close();
    Ok(())
}
