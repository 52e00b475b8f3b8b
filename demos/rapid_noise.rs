//! Fills the whole device with random colors using rapid updates, until a button is pressed.

use launchpad_classic::{Color, Launchpad, OpenOptions, RAPID_UPDATE_SLOTS};
use nanorand::Rng as _;
use std::time::Duration;

fn main() -> Result<(), launchpad_classic::MidiError> {
    env_logger::init();

    let mut launchpad = Launchpad::open(&OpenOptions::default())?;
    launchpad.setup()?;

    let mut rng = nanorand::WyRand::new();
    loop {
        let colors: Vec<Color> = (0..RAPID_UPDATE_SLOTS)
            .map(|_| Color::new(rng.generate_range(0..=3), rng.generate_range(0..=3)))
            .collect();

        let output = launchpad.output();
        output.rapid_update_home()?;
        output.rapid_update_colors(&colors)?;

        if let Some(event) = launchpad.input().poll()? {
            if event.pressed {
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    launchpad.output().reset()?;
    launchpad.close();
    Ok(())
}
