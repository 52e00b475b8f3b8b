use midir::{MidiInput, MidiOutput};

use crate::midi_io::{find_port, InputTransport, OpenOptions, OutputTransport};
use crate::midi_io::{MidirInput, MidirOutput};
use crate::{Input, MidiError, Output};

/// A connected Launchpad: one output and one input, opened together and closed together.
///
/// ```no_run
/// use launchpad_classic::{Color, Launchpad, OpenOptions};
///
/// let mut launchpad = Launchpad::open(&OpenOptions::new().keyword("Launchpad Mini"))?;
/// launchpad.setup()?;
///
/// loop {
///     if let Some(event) = launchpad.input().poll()? {
///         let (x, y, pressed) = event.xy();
///         let color = if pressed { Color::GREEN } else { Color::BLACK };
///         launchpad.output().set_xy(x as i32, y as i32, color)?;
///     }
/// }
/// # Ok::<(), launchpad_classic::MidiError>(())
/// ```
pub struct Launchpad<O = MidirOutput, I = MidirInput> {
    output: Output<O>,
    input: Input<I>,
}

impl Launchpad {
    /// Connects to the device selected by `options`. Fails with [`MidiError::NoPortFound`] unless
    /// both an input and an output port match.
    pub fn open(options: &OpenOptions) -> Result<Self, MidiError> {
        let output = MidirOutput::open(options)?;
        let input = MidirInput::open(options)?;
        log::debug!(
            "Opened device #{} matching \"{}\"",
            options.number,
            options.keyword
        );
        Ok(Self::from_parts(output, input))
    }

    /// Whether the device selected by `options` is attached. Doesn't connect to it.
    pub fn check(options: &OpenOptions) -> bool {
        let has_output = MidiOutput::new(&options.client_name)
            .map(|midi_output| find_port(&midi_output, &options.keyword, options.number).is_some())
            .unwrap_or(false);
        let has_input = MidiInput::new(&options.client_name)
            .map(|midi_input| find_port(&midi_input, &options.keyword, options.number).is_some())
            .unwrap_or(false);
        has_output && has_input
    }

    pub fn close(self) {
        let (output, input) = self.into_parts();
        output.into_transport().close();
        input.into_transport().close();
    }
}

impl<O: OutputTransport, I: InputTransport> Launchpad<O, I> {
    pub fn from_parts(output: O, input: I) -> Self {
        Self {
            output: Output::new(output),
            input: Input::new(input),
        }
    }

    /// Throws away button presses that queued up before connecting, then turns all LEDs off.
    /// Returns the number of discarded messages.
    pub fn setup(&mut self) -> Result<usize, MidiError> {
        let discarded = self.input.flush()?;
        self.output.reset()?;
        Ok(discarded)
    }

    pub fn output(&mut self) -> &mut Output<O> {
        &mut self.output
    }

    pub fn input(&mut self) -> &mut Input<I> {
        &mut self.input
    }

    pub fn into_parts(self) -> (Output<O>, Input<I>) {
        (self.output, self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi_io::ShortMessage;
    use crate::mock::{MockInput, MockOutput};
    use crate::Color;

    #[test]
    fn setup_drains_and_resets() {
        let mut input = MockInput::new();
        input.push(144, 3, 127);
        input.push(144, 3, 0);
        let mut launchpad = Launchpad::from_parts(MockOutput::new(), input);
        launchpad.output().set_raw(3, Color::RED).unwrap();

        assert_eq!(launchpad.setup().unwrap(), 2);

        let (output, input) = launchpad.into_parts();
        assert_eq!(input.transport().pending(), 0);
        assert_eq!(
            output.transport().short_messages().last(),
            Some(&ShortMessage::new(176, 0, 0))
        );
        assert!(output.transport().led_state().grid_is_dark());
    }

    #[test]
    fn echo_presses_onto_leds() {
        let mut input = MockInput::new();
        input.push(144, 0x25, 127);
        input.push(176, 104, 127);
        let mut launchpad = Launchpad::from_parts(MockOutput::new(), input);

        while let Some(event) = launchpad.input().poll().unwrap() {
            let (x, y, _) = event.xy();
            launchpad
                .output()
                .set_xy(x as i32, y as i32, Color::GREEN)
                .unwrap();
        }

        let state = launchpad.output().transport().led_state();
        assert_eq!(state.get(5, 3), Color::GREEN);
        assert_eq!(state.get(0, 0), Color::GREEN);
    }
}
