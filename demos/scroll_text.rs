//! Scrolls the command line arguments across the grid: left, right, then in place.

use launchpad_classic::{Color, Launchpad, OpenOptions, ScrollDirection, DEFAULT_FRAME_DELAY};
use std::time::Duration;

fn main() -> Result<(), launchpad_classic::MidiError> {
    env_logger::init();

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() { "Hello World!".to_owned() } else { text };

    let mut launchpad = Launchpad::open(&OpenOptions::default())?;
    launchpad.setup()?;

    let output = launchpad.output();
    output.scroll_text(&text, Color::RED, ScrollDirection::Left, Duration::from_millis(60))?;
    output.scroll_text(&text, Color::GREEN, ScrollDirection::Right, Duration::from_millis(60))?;
    output.scroll_text(&text, Color::AMBER, ScrollDirection::None, DEFAULT_FRAME_DELAY)?;
    output.reset()?;

    launchpad.close();
    Ok(())
}
