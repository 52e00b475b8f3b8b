use std::time::Duration;

use crate::coords::Button;
use crate::glyphs;
use crate::midi_io::{OutputTransport, ShortMessage, CONTROL_CHANGE, RAPID_UPDATE};
use crate::scroll::{Scroll, ScrollDirection, ScrollState, Scroller};
use crate::{Color, MidiError};

/// Distance between the raw numbers of two vertically adjacent buttons
const ROW_STRIDE: i32 = 16;

/// Number of LEDs a rapid update walks through before further data is ignored
pub const RAPID_UPDATE_SLOTS: usize = 80;

/// The Launchpad output connection handler.
///
/// Every method corresponds to exactly one MIDI message, except for [`Output::rapid_update`],
/// [`Output::set_char`] and [`Output::scroll_text`], which are documented as sending several.
///
/// Requests for buttons that don't exist are silently dropped: they return `Ok(())` without
/// sending anything. Only transport failures are reported.
pub struct Output<T> {
    transport: T,
    rapid_cursor: usize,
}

impl<T: OutputTransport> Output<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            rapid_cursor: 0,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn send(&mut self, msg: ShortMessage) -> Result<(), MidiError> {
        self.transport.write_short(msg.status, msg.data1, msg.data2)
    }

    /// Set a `button` to a certain `color`.
    pub fn light(&mut self, button: Button, color: Color) -> Result<(), MidiError> {
        self.send(button.light_message(color.code()))
    }

    /// All LEDs are turned off, and the rapid update cursor starts over at the top left.
    pub fn reset(&mut self) -> Result<(), MidiError> {
        self.rapid_cursor = 0;
        self.send(ShortMessage::new(CONTROL_CHANGE, 0, 0))
    }

    /// Sets an LED by its raw number: `0..=120` for the grid (`row * 16 + column`), `200..=207`
    /// for the automap row.
    pub fn set_raw(&mut self, index: i32, color: Color) -> Result<(), MidiError> {
        match Button::from_raw(index) {
            Some(button) => self.light(button, color),
            None => {
                log::trace!("Ignoring LED with raw number {}", index);
                Ok(())
            }
        }
    }

    /// Sets one of the eight automap LEDs, counting from the left.
    pub fn set_automap(&mut self, index: i32, color: Color) -> Result<(), MidiError> {
        match Button::automap(index) {
            Some(button) => self.light(button, color),
            None => {
                log::trace!("Ignoring automap LED {}", index);
                Ok(())
            }
        }
    }

    /// Sets an LED by its coordinates. `y == 0` addresses the automap row.
    pub fn set_xy(&mut self, x: i32, y: i32, color: Color) -> Result<(), MidiError> {
        match Button::from_xy(x, y) {
            Some(button) => self.light(button, color),
            None => {
                log::trace!("Ignoring LED at ({}, {})", x, y);
                Ok(())
            }
        }
    }

    /// Turns every LED on at full brightness, or off (which is a [`reset`](Output::reset)).
    pub fn set_all_on(&mut self, on: bool) -> Result<(), MidiError> {
        if on {
            self.send(ShortMessage::new(CONTROL_CHANGE, 0, 127))
        } else {
            self.reset()
        }
    }

    /// In order to make maximum use of the original Launchpad's slow midi speeds, a rapid LED
    /// lighting mode was invented which allows the lighting of two LEDs in just a single message.
    /// The Launchpad updates the 8x8 grid in left-to-right, top-to-bottom order, then the right
    /// column in top-to-bottom order, and finally the automap row in left-to-right order.
    /// Overflowing data is ignored by the device.
    ///
    /// Successive calls continue where the previous one left off, until
    /// [`rapid_update_home`](Output::rapid_update_home) or [`reset`](Output::reset) is called.
    ///
    /// `color_codes` are paired up into one message each. For an odd number of codes, the LED
    /// following the last one is turned off.
    ///
    /// If the transport fails partway, [`rapid_cursor`](Output::rapid_cursor) still accounts for
    /// the messages that went out before the failure.
    pub fn rapid_update(&mut self, color_codes: &[u8]) -> Result<(), MidiError> {
        for pair in color_codes.chunks(2) {
            let second = pair.get(1).copied().unwrap_or(0);
            self.send(ShortMessage::new(RAPID_UPDATE, pair[0], second))?;
            self.rapid_cursor = (self.rapid_cursor + 2).min(RAPID_UPDATE_SLOTS);
        }
        Ok(())
    }

    /// [`rapid_update`](Output::rapid_update) for colors instead of color bytes.
    pub fn rapid_update_colors(&mut self, colors: &[Color]) -> Result<(), MidiError> {
        let codes: Vec<u8> = colors.iter().map(|color| color.code()).collect();
        self.rapid_update(&codes)
    }

    /// Makes the next rapid update start at the top left of the grid again.
    pub fn rapid_update_home(&mut self) -> Result<(), MidiError> {
        self.rapid_cursor = 0;
        self.send(ShortMessage::new(CONTROL_CHANGE, 1, 0))
    }

    /// How many LEDs the rapid updates since the last home or reset have covered, as far as this
    /// side of the connection knows.
    pub fn rapid_cursor(&self) -> usize {
        self.rapid_cursor
    }

    /// Draws a character from the built-in 8x8 font onto the grid, shifted right by `x_offset`
    /// pixels (negative values shift left). Unlit pixels are turned off. Pixels that are shifted
    /// off the grid are dropped rather than wrapped into the neighbouring row.
    ///
    /// Sends one message per visible pixel. Characters beyond U+00FF are ignored.
    pub fn set_char(&mut self, c: char, color: Color, x_offset: i32) -> Result<(), MidiError> {
        self.set_char_code(c as u32, color, x_offset)
    }

    /// Like [`set_char`](Output::set_char), but takes a glyph table index in `0..=255`. Other
    /// codes are ignored.
    pub fn set_char_code(
        &mut self,
        code: u32,
        color: Color,
        x_offset: i32,
    ) -> Result<(), MidiError> {
        let glyph = match glyphs::glyph(code) {
            Some(glyph) => glyph,
            None => {
                log::trace!("Ignoring character code {}", code);
                return Ok(());
            }
        };

        for row in 0..glyphs::GLYPH_SIZE {
            let row_start = row as i32 * ROW_STRIDE;
            for column in 0..glyphs::GLYPH_SIZE as i32 {
                let lednum = row_start.saturating_add(column).saturating_add(x_offset);
                if lednum < row_start || lednum >= row_start + 8 {
                    continue;
                }
                if glyphs::pixel(glyph, column as usize, row) {
                    self.set_raw(lednum, color)?;
                } else {
                    self.set_raw(lednum, Color::BLACK)?;
                }
            }
        }

        Ok(())
    }

    /// Scrolls `text` across the grid, sleeping `frame_delay` after every frame. Blocks until the
    /// text has scrolled through completely.
    ///
    /// To interleave scrolling with other work, drive a [`Scroller`] yourself.
    pub fn scroll_text(
        &mut self,
        text: &str,
        color: Color,
        direction: ScrollDirection,
        frame_delay: Duration,
    ) -> Result<(), MidiError> {
        let mut scroller = Scroller::new();
        scroller.start(Scroll::new(text, color, direction));

        while scroller.state() == ScrollState::Scrolling {
            scroller.step(self)?;
            if !frame_delay.is_zero() {
                std::thread::sleep(frame_delay);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
