use std::time::Duration;

use crate::coords::ButtonEvent;
use crate::midi_io::{InputTransport, ShortMessage};
use crate::MidiError;

/// Consecutive empty polls after which [`Input::flush`] considers the buffer clear
pub const DRAIN_EMPTY_POLLS: usize = 3;
/// Pause after each empty poll in [`Input::flush`]
pub const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// The Launchpad input connection handler. Nothing here blocks, except for the drain methods.
pub struct Input<T> {
    transport: T,
}

impl<T: InputTransport> Input<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
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

    /// Whether a message is waiting, without consuming it.
    pub fn has_event(&mut self) -> Result<bool, MidiError> {
        self.transport.poll_pending()
    }

    /// Takes the next message as it arrived, without decoding it.
    pub fn poll_raw(&mut self) -> Result<Option<ShortMessage>, MidiError> {
        if !self.transport.poll_pending()? {
            return Ok(None);
        }
        self.transport.read_one()
    }

    /// Takes the next message and decodes it into a button event.
    ///
    /// Messages that aren't button events (e.g. the end-of-text notification) are consumed and
    /// yield `None`, just like an empty buffer does.
    pub fn poll(&mut self) -> Result<Option<ButtonEvent>, MidiError> {
        let msg = match self.poll_raw()? {
            Some(msg) => msg,
            None => return Ok(None),
        };

        let event = ButtonEvent::decode(msg);
        if event.is_none() {
            log::warn!("Unexpected MIDI message: {:?}", msg);
        }
        Ok(event)
    }

    /// The next event as `(raw number, pressed)`. Automap buttons report `200..=207`.
    pub fn poll_raw_state(&mut self) -> Result<Option<(u8, bool)>, MidiError> {
        Ok(self.poll()?.map(|event| event.raw()))
    }

    /// The next event as `(x, y, pressed)`.
    pub fn poll_xy_state(&mut self) -> Result<Option<(u8, u8, bool)>, MidiError> {
        Ok(self.poll()?.map(|event| event.xy()))
    }

    /// Discards incoming messages until `max_consecutive_empty_polls` polls in a row found
    /// nothing, sleeping `poll_interval` after each empty poll.
    ///
    /// The Launchpad queues up button presses that happen while nobody is connected and releases
    /// them all at once as soon as someone connects, so this is useful right after opening it.
    ///
    /// Returns the number of messages that were discarded.
    pub fn drain_all(
        &mut self,
        max_consecutive_empty_polls: usize,
        poll_interval: Duration,
    ) -> Result<usize, MidiError> {
        let mut discarded = 0;
        let mut empty_polls = 0;

        while empty_polls < max_consecutive_empty_polls {
            if self.transport.poll_pending()? {
                empty_polls = 0;
                self.transport.read_one()?;
                discarded += 1;
            } else {
                empty_polls += 1;
                if !poll_interval.is_zero() {
                    std::thread::sleep(poll_interval);
                }
            }
        }

        log::debug!("Drained {} stale input messages", discarded);
        Ok(discarded)
    }

    /// [`drain_all`](Input::drain_all) with the default timing.
    pub fn flush(&mut self) -> Result<usize, MidiError> {
        self.drain_all(DRAIN_EMPTY_POLLS, DRAIN_POLL_INTERVAL)
    }
}
