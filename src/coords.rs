//! Conversions between the Launchpad's raw button numbers and x/y coordinates.
//!
//! ```text
//! raw numbering                                  x/y numbering
//!
//! 200 201 202 203 204 205 206 207                0/0 .......................... 7/0
//!
//!   0   1   2   3   4   5   6   7     8          0/1 .......................... 7/1   8/1
//!  16  17  18  19  20  21  22  23    24           .                              .     .
//!  ..                                ..           .                              .     .
//! 112 113 114 115 116 117 118 119   120          0/8 .......................... 7/8   8/8
//! ```
//!
//! The top row (the "automap" buttons) is addressed with control change messages, everything else
//! with note-on messages whose note is `row * 16 + column`.

use crate::midi_io::{ShortMessage, CONTROL_CHANGE, NOTE_ON};

/// Highest raw number of the note-addressed part of the device
pub const MAX_GRID_INDEX: i32 = 120;
/// Raw number of the leftmost automap button
pub const AUTOMAP_RAW_BASE: i32 = 200;
/// Controller number of the leftmost automap button
pub const AUTOMAP_CONTROLLER_BASE: u8 = 104;
/// Number of automap buttons
pub const AUTOMAP_COUNT: u8 = 8;

/// A single button, which is also a single LED.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Button {
    /// A note-addressed button, `index` being `row * 16 + column`
    Grid { index: u8 },
    /// One of the eight buttons of the top row, `index` counting from the left
    Automap { index: u8 },
}

impl Button {
    /// Resolves a raw number: `0..=120` for the grid, `200..=207` for the automap row.
    pub fn from_raw(raw: i32) -> Option<Button> {
        match raw {
            0..=MAX_GRID_INDEX => Some(Button::Grid { index: raw as u8 }),
            200..=207 => Some(Button::Automap {
                index: (raw - AUTOMAP_RAW_BASE) as u8,
            }),
            _ => None,
        }
    }

    /// Resolves coordinates: `y == 0` is the automap row, `y` in `1..=8` are the grid rows, and
    /// `x == 8` is the right-hand column.
    pub fn from_xy(x: i32, y: i32) -> Option<Button> {
        if !(0..=8).contains(&x) || !(0..=8).contains(&y) {
            return None;
        }
        if y == 0 {
            Button::automap(x)
        } else {
            Some(Button::Grid {
                index: (((y - 1) << 4) | x) as u8,
            })
        }
    }

    /// Resolves an automap button number in `0..=7`.
    pub fn automap(index: i32) -> Option<Button> {
        if (0..AUTOMAP_COUNT as i32).contains(&index) {
            Some(Button::Automap { index: index as u8 })
        } else {
            None
        }
    }

    /// The raw number of this button. Automap buttons report `200..=207`.
    pub fn raw(&self) -> u8 {
        match *self {
            Button::Grid { index } => index,
            Button::Automap { index } => AUTOMAP_RAW_BASE as u8 + index,
        }
    }

    /// The x/y coordinates of this button.
    pub fn xy(&self) -> (u8, u8) {
        match *self {
            Button::Grid { index } => (index & 0x0F, (index >> 4) + 1),
            Button::Automap { index } => (index, 0),
        }
    }

    /// The message that sets this button's LED to `color_code`.
    pub fn light_message(&self, color_code: u8) -> ShortMessage {
        match *self {
            Button::Grid { index } => ShortMessage::new(NOTE_ON, index, color_code),
            Button::Automap { index } => {
                ShortMessage::new(CONTROL_CHANGE, AUTOMAP_CONTROLLER_BASE + index, color_code)
            }
        }
    }
}

/// A button being pressed or released.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonEvent {
    pub button: Button,
    pub pressed: bool,
}

impl ButtonEvent {
    /// Decodes an incoming message. The Launchpad reports releases as zero-velocity note-ons (or
    /// zero-value control changes), so any non-zero velocity counts as a press.
    ///
    /// Returns `None` for messages that aren't button events.
    pub fn decode(msg: ShortMessage) -> Option<ButtonEvent> {
        let pressed = msg.data2 > 0;
        let button = match msg.status {
            NOTE_ON => Button::Grid { index: msg.data1 },
            CONTROL_CHANGE => {
                Button::automap(msg.data1 as i32 - AUTOMAP_CONTROLLER_BASE as i32)?
            }
            _ => return None,
        };
        Some(ButtonEvent { button, pressed })
    }

    /// The event as `(raw number, pressed)`.
    pub fn raw(&self) -> (u8, bool) {
        (self.button.raw(), self.pressed)
    }

    /// The event as `(x, y, pressed)`.
    pub fn xy(&self) -> (u8, u8, bool) {
        let (x, y) = self.button.xy();
        (x, y, self.pressed)
    }
}

#[cfg(test)]
mod tests;
