/*!
Driver for the classic two-color Novation Launchpad (Launchpad, Launchpad S, Launchpad Mini).

The device has an 8x8 grid of buttons, a column of eight buttons on the right and a row of eight
"automap" buttons at the top. Each button has a red and a green LED with four brightness levels.

# Addressing

Buttons can be addressed by their raw number (`row * 16 + column` for the grid and the right
column, `200..=207` for the automap row) or by x/y coordinates, where `y == 0` is the automap row
and `x == 8` is the right column. See [`coords`] for a picture.

Out of range addresses and unknown characters are not errors: they are silently skipped, so that
animation code can draw partially off-screen without bounds checks of its own. Only failures of
the MIDI connection are reported.

# Lighting LEDs

```no_run
use launchpad_classic::{Color, Launchpad, OpenOptions, ScrollDirection, DEFAULT_FRAME_DELAY};

let mut launchpad = Launchpad::open(&OpenOptions::default())?;
launchpad.setup()?;

let output = launchpad.output();
output.set_xy(0, 1, Color::RED)?;
output.set_raw(205, Color::GREEN)?;

// Fill the whole device amber in 40 messages
output.rapid_update_home()?;
output.rapid_update_colors(&[Color::AMBER; 80])?;

output.scroll_text("Hello", Color::YELLOW, ScrollDirection::Left, DEFAULT_FRAME_DELAY)?;
# Ok::<(), launchpad_classic::MidiError>(())
```

# Reading buttons

Input is polled: [`Input::poll`] never blocks and returns `None` when nothing happened.

```no_run
# let mut launchpad = launchpad_classic::Launchpad::open(&Default::default())?;
while let Some(event) = launchpad.input().poll()? {
    let (x, y, pressed) = event.xy();
    println!("({}, {}) {}", x, y, if pressed { "pressed" } else { "released" });
}
# Ok::<(), launchpad_classic::MidiError>(())
```

# Testing without a device

[`Output`] and [`Input`] work over any [`OutputTransport`] and [`InputTransport`]. The [`mock`]
module has in-memory implementations which record what is sent and can replay it into the LED
state the device would show.
*/

pub mod util;

pub mod coords;
pub use coords::{Button, ButtonEvent};

mod color;
pub use color::*;

pub mod glyphs;

mod midi_io;
pub use midi_io::*;

mod errors;
pub use errors::*;

mod output;
pub use output::*;

mod input;
pub use input::*;

mod scroll;
pub use scroll::*;

mod device;
pub use device::*;

pub mod mock;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::coords::{Button, ButtonEvent};
    pub use crate::device::Launchpad;
    pub use crate::midi_io::{InputTransport, OpenOptions, OutputTransport};
    pub use crate::scroll::ScrollDirection;
}

/// Identifier used for e.g. the midi port names etc.
const APPLICATION_NAME: &str = "Launchpad Classic";
