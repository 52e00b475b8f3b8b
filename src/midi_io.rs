use std::sync::mpsc::{self, Receiver, TryRecvError};

use midir::{MidiInput, MidiInputConnection, MidiInputPort, MidiOutput, MidiOutputConnection};

use crate::{ok_or_continue, MidiError};

/// Note-on. Grid LEDs and grid buttons.
pub const NOTE_ON: u8 = 0x90;
/// Control change. Automap LEDs and buttons, reset, all-on and rapid-update homing.
pub const CONTROL_CHANGE: u8 = 0xB0;
/// Note-on on channel 3, which the Launchpad interprets as a rapid LED update.
pub const RAPID_UPDATE: u8 = 0x92;

/// A three-byte MIDI channel message, the only kind of message this crate sends or decodes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShortMessage {
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

impl ShortMessage {
    pub const fn new(status: u8, data1: u8, data2: u8) -> Self {
        Self {
            status,
            data1,
            data2,
        }
    }

    /// Parses a message as it arrives from midir. Anything that isn't exactly three bytes long
    /// (sysex, realtime bytes) is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [status, data1, data2] => Some(Self::new(status, data1, data2)),
            _ => None,
        }
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.status, self.data1, self.data2]
    }
}

/// The writing half of the MIDI transport.
///
/// Only [`send`](OutputTransport::send) must be implemented; the other methods build on it.
pub trait OutputTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError>;

    fn write_short(&mut self, status: u8, data1: u8, data2: u8) -> Result<(), MidiError> {
        log::trace!("Sending MIDI message: [{}, {}, {}]", status, data1, data2);
        self.send(&[status, data1, data2])
    }

    /// Writes the messages in order, stopping at the first failure.
    fn write_batch(&mut self, messages: &[ShortMessage]) -> Result<(), MidiError> {
        for msg in messages {
            self.write_short(msg.status, msg.data1, msg.data2)?;
        }
        Ok(())
    }
}

/// The reading half of the MIDI transport. Reads never block.
pub trait InputTransport {
    /// Whether a message is waiting. Does not consume it.
    fn poll_pending(&mut self) -> Result<bool, MidiError>;

    /// Takes the next waiting message, or returns `None` if there is none.
    fn read_one(&mut self) -> Result<Option<ShortMessage>, MidiError>;
}

/// Which device to connect to, and under which name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OpenOptions {
    /// Case-insensitive substring of the port name
    pub keyword: String,
    /// Picks the n-th matching device when several are attached
    pub number: usize,
    /// Name under which this client registers with the MIDI system
    pub client_name: String,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            keyword: "Launchpad".to_owned(),
            number: 0,
            client_name: crate::APPLICATION_NAME.to_owned(),
        }
    }
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn number(mut self, number: usize) -> Self {
        self.number = number;
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    fn no_port_found(&self) -> MidiError {
        MidiError::NoPortFound {
            keyword: self.keyword.clone(),
            number: self.number,
        }
    }
}

fn matches_keyword(port_name: &str, keyword: &str) -> bool {
    port_name.to_lowercase().contains(&keyword.to_lowercase())
}

/// Returns the names of all ports whose name contains `keyword`, ignoring case. An empty keyword
/// lists every port.
pub fn list_ports<T: midir::MidiIO>(midi_io: &T, keyword: &str) -> Vec<String> {
    let mut names = Vec::new();
    for port in midi_io.ports() {
        let name = ok_or_continue!(midi_io.port_name(&port));
        if matches_keyword(&name, keyword) {
            names.push(name);
        }
    }
    names
}

/// Returns the `number`-th port whose name contains `keyword`, ignoring case.
pub fn find_port<T: midir::MidiIO>(midi_io: &T, keyword: &str, number: usize) -> Option<T::Port> {
    let mut remaining = number;
    for port in midi_io.ports() {
        let name = ok_or_continue!(midi_io.port_name(&port));
        if !matches_keyword(&name, keyword) {
            log::debug!("Port \"{}\" does not match \"{}\"", name, keyword);
            continue;
        }
        if remaining == 0 {
            log::debug!("Selected port \"{}\"", name);
            return Some(port);
        }
        remaining -= 1;
    }
    None
}

/// A midir output connection.
pub struct MidirOutput {
    connection: MidiOutputConnection,
}

impl MidirOutput {
    pub fn open(options: &OpenOptions) -> Result<Self, MidiError> {
        let midi_output = MidiOutput::new(&options.client_name)?;
        let port = find_port(&midi_output, &options.keyword, options.number)
            .ok_or_else(|| options.no_port_found())?;
        let connection_name = format!("{} output", options.client_name);
        let connection = midi_output.connect(&port, &connection_name)?;
        Ok(Self::from_connection(connection))
    }

    /// Initiate from an existing midir connection.
    pub fn from_connection(connection: MidiOutputConnection) -> Self {
        Self { connection }
    }

    pub fn close(self) {
        self.connection.close();
    }
}

impl OutputTransport for MidirOutput {
    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        self.connection.send(bytes)?;
        Ok(())
    }
}

/// A midir input connection. Messages arrive on midir's callback thread and are queued until
/// they are read.
pub struct MidirInput {
    connection: MidiInputConnection<()>,
    receiver: Receiver<ShortMessage>,
    peeked: Option<ShortMessage>,
}

impl MidirInput {
    pub fn open(options: &OpenOptions) -> Result<Self, MidiError> {
        let midi_input = MidiInput::new(&options.client_name)?;
        let port = find_port(&midi_input, &options.keyword, options.number)
            .ok_or_else(|| options.no_port_found())?;
        let connection_name = format!("{} input", options.client_name);
        Self::from_port(midi_input, &port, &connection_name)
    }

    pub fn from_port(
        midi_input: MidiInput,
        port: &MidiInputPort,
        connection_name: &str,
    ) -> Result<Self, MidiError> {
        let (sender, receiver) = mpsc::channel();
        let midir_callback = move |timestamp: u64, data: &[u8], _: &mut ()| {
            match ShortMessage::from_bytes(data) {
                // only fails once the receiving half is gone, i.e. while closing
                Some(msg) => sender.send(msg).unwrap_or(()),
                None => log::warn!("Unhandled MIDI input {} {:x?}", timestamp, data),
            }
        };
        let connection = midi_input.connect(port, connection_name, midir_callback, ())?;

        Ok(Self {
            connection,
            receiver,
            peeked: None,
        })
    }

    pub fn close(self) {
        self.connection.close();
    }

    fn try_recv(&self) -> Result<Option<ShortMessage>, MidiError> {
        match self.receiver.try_recv() {
            Ok(msg) => Ok(Some(msg)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(MidiError::Disconnected),
        }
    }
}

impl InputTransport for MidirInput {
    fn poll_pending(&mut self) -> Result<bool, MidiError> {
        if self.peeked.is_none() {
            self.peeked = self.try_recv()?;
        }
        Ok(self.peeked.is_some())
    }

    fn read_one(&mut self) -> Result<Option<ShortMessage>, MidiError> {
        match self.peeked.take() {
            Some(msg) => Ok(Some(msg)),
            None => self.try_recv(),
        }
    }
}
