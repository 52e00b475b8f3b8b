//! In-memory transports. [`MockOutput`] records everything that is sent and can replay it into
//! the LED state the device would show; [`MockInput`] hands out queued messages.

use std::collections::VecDeque;

use crate::coords::AUTOMAP_CONTROLLER_BASE;
use crate::midi_io::{InputTransport, OutputTransport, ShortMessage};
use crate::midi_io::{CONTROL_CHANGE, NOTE_ON, RAPID_UPDATE};
use crate::util::Array2d;
use crate::{Button, Color, MidiError};

#[derive(Debug, Default)]
pub struct MockOutput {
    sent: Vec<Vec<u8>>,
    remaining_successes: Option<usize>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose sends start failing after `successes` messages went through.
    pub fn failing_after(successes: usize) -> Self {
        Self {
            sent: Vec::new(),
            remaining_successes: Some(successes),
        }
    }

    /// Every message that was sent, in order
    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }

    pub fn short_messages(&self) -> Vec<ShortMessage> {
        self.sent
            .iter()
            .filter_map(|bytes| ShortMessage::from_bytes(bytes))
            .collect()
    }

    pub fn clear(&mut self) {
        self.sent.clear();
    }

    /// Replays every recorded message, starting from a dark device.
    pub fn led_state(&self) -> LedState {
        let mut state = LedState::new();
        for msg in self.short_messages() {
            state.apply(msg);
        }
        state
    }
}

impl OutputTransport for MockOutput {
    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        match &mut self.remaining_successes {
            Some(0) => return Err(MidiError::Mock("device unplugged".to_owned())),
            Some(remaining) => *remaining -= 1,
            None => {}
        }
        self.sent.push(bytes.to_vec());
        Ok(())
    }
}

/// The LEDs of a device, in x/y coordinates (9 by 9, with `(8, 0)` unused).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedState {
    leds: Array2d<Color>,
    rapid_cursor: usize,
}

impl Default for LedState {
    fn default() -> Self {
        Self::new()
    }
}

impl LedState {
    pub fn new() -> Self {
        Self {
            leds: Array2d::new(9, 9),
            rapid_cursor: 0,
        }
    }

    /// The color at `(x, y)`. Out of bounds positions are dark.
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.leds.get(x, y).unwrap_or_default()
    }

    /// The lit pixels of the 8x8 grid, one byte per row, most significant bit leftmost. This is
    /// the same layout the glyph table uses.
    pub fn grid_pattern(&self) -> [u8; 8] {
        let mut pattern = [0; 8];
        for (row, line) in pattern.iter_mut().enumerate() {
            for x in 0..8 {
                if !self.get(x, row + 1).is_off() {
                    *line |= 0x80 >> x;
                }
            }
        }
        pattern
    }

    /// Whether no LED of the 8x8 grid is lit
    pub fn grid_is_dark(&self) -> bool {
        self.grid_pattern() == [0; 8]
    }

    pub fn apply(&mut self, msg: ShortMessage) {
        match (msg.status, msg.data1, msg.data2) {
            (CONTROL_CHANGE, 0, 0) => {
                self.leds.fill(Color::BLACK);
                self.rapid_cursor = 0;
            }
            // 125, 126 and 127 are low, medium and full brightness
            (CONTROL_CHANGE, 0, brightness @ 125..=127) => {
                let level = brightness as i32 - 124;
                self.leds.fill(Color::new(level, level));
                self.leds.set(8, 0, Color::BLACK);
            }
            (CONTROL_CHANGE, 1, 0) => self.rapid_cursor = 0,
            (NOTE_ON, index, code) => self.set_button(Button::Grid { index }, code),
            (CONTROL_CHANGE, number, code) => {
                let index = number as i32 - AUTOMAP_CONTROLLER_BASE as i32;
                if let Some(button) = Button::automap(index) {
                    self.set_button(button, code);
                }
            }
            (RAPID_UPDATE, first, second) => {
                self.set_rapid(first);
                self.set_rapid(second);
            }
            _ => {}
        }
    }

    fn set_button(&mut self, button: Button, code: u8) {
        let (x, y) = button.xy();
        self.leds.set(x as usize, y as usize, Color::from_code(code));
    }

    // grid rows first, then the right column top to bottom, then the automap row
    fn set_rapid(&mut self, code: u8) {
        let (x, y) = match self.rapid_cursor {
            slot @ 0..=63 => (slot % 8, slot / 8 + 1),
            slot @ 64..=71 => (8, slot - 64 + 1),
            slot @ 72..=79 => (slot - 72, 0),
            _ => return,
        };
        self.leds.set(x, y, Color::from_code(code));
        self.rapid_cursor += 1;
    }
}

#[derive(Debug, Default)]
pub struct MockInput {
    queue: VecDeque<ShortMessage>,
    disconnected: bool,
    empty_polls: usize,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, status: u8, data1: u8, data2: u8) {
        self.queue.push_back(ShortMessage::new(status, data1, data2));
    }

    /// Number of queued messages
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// How many times `poll_pending` found nothing
    pub fn empty_polls(&self) -> usize {
        self.empty_polls
    }

    /// Once the queue runs dry, reads fail as if the device was unplugged.
    pub fn disconnect(&mut self) {
        self.disconnected = true;
    }
}

impl InputTransport for MockInput {
    fn poll_pending(&mut self) -> Result<bool, MidiError> {
        if !self.queue.is_empty() {
            return Ok(true);
        }
        if self.disconnected {
            return Err(MidiError::Disconnected);
        }
        self.empty_polls += 1;
        Ok(false)
    }

    fn read_one(&mut self) -> Result<Option<ShortMessage>, MidiError> {
        match self.queue.pop_front() {
            Some(msg) => Ok(Some(msg)),
            None if self.disconnected => Err(MidiError::Disconnected),
            None => Ok(None),
        }
    }
}
