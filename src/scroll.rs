//! Scrolling text across the 8x8 grid, one pixel per frame.
//!
//! A [`Scroll`] describes an animation as a fixed number of frames which can be rendered in any
//! order. [`Scroller`] steps through one animation at a time, which is what
//! [`Output::scroll_text`] uses, but which can just as well be driven from an event loop:
//!
//! ```no_run
//! use launchpad_classic::{Color, Launchpad, OpenOptions, Scroll, ScrollDirection, Scroller};
//!
//! let mut launchpad = Launchpad::open(&OpenOptions::default())?;
//! let mut scroller = Scroller::new();
//! scroller.start(Scroll::new("HELLO", Color::GREEN, ScrollDirection::Left));
//!
//! while scroller.is_scrolling() {
//!     scroller.step(launchpad.output())?;
//!     while let Some(event) = launchpad.input().poll()? {
//!         println!("{:?}", event);
//!     }
//!     std::thread::sleep(launchpad_classic::DEFAULT_FRAME_DELAY);
//! }
//! # Ok::<(), launchpad_classic::MidiError>(())
//! ```
//!
//! [`Output::scroll_text`]: crate::Output::scroll_text

use std::time::Duration;

use crate::midi_io::OutputTransport;
use crate::{Color, MidiError, Output};

/// Frame delay used when the caller has no preference
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(150);

/// How often each character is repeated when the text doesn't move, so that static text takes
/// about as long as scrolling text
const STATIC_REPEATS: usize = 4;

const CELL_WIDTH: usize = 8;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Text enters on the right and leaves on the left
    Left,
    /// Text enters on the left and leaves on the right
    Right,
    /// Characters are shown one after another, in place
    None,
}

/// One text animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scroll {
    cells: Vec<char>,
    color: Color,
    direction: ScrollDirection,
}

impl Scroll {
    /// Prepares `text` for scrolling. Moving text is padded with blank cells so that it starts and
    /// ends on a dark grid: a trailing space when scrolling left, a space on both ends when
    /// scrolling right. This means even empty text has frames when it moves.
    pub fn new(text: &str, color: Color, direction: ScrollDirection) -> Self {
        let mut cells: Vec<char> = Vec::with_capacity(text.len() + 2);
        if direction == ScrollDirection::Right {
            cells.push(' ');
        }
        cells.extend(text.chars());
        if direction != ScrollDirection::None {
            cells.push(' ');
        }

        Self {
            cells,
            color,
            direction,
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The characters that are drawn, including padding
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn frame_count(&self) -> usize {
        let len = self.cells.len();
        match self.direction {
            ScrollDirection::Left => (len + 1) * CELL_WIDTH,
            ScrollDirection::Right => (len + 1) * CELL_WIDTH - 7,
            ScrollDirection::None => len * STATIC_REPEATS,
        }
    }

    /// Draws frame number `frame`, counting from zero. Frames past the end draw nothing.
    ///
    /// A frame only paints the cells it covers, so frames are meant to be drawn in order.
    pub fn render_frame<T: OutputTransport>(
        &self,
        output: &mut Output<T>,
        frame: usize,
    ) -> Result<(), MidiError> {
        let frame_count = self.frame_count();
        if frame >= frame_count {
            return Ok(());
        }

        match self.direction {
            ScrollDirection::Left => self.render_position(output, frame),
            // the same positions as scrolling left, just played backwards
            ScrollDirection::Right => self.render_position(output, frame_count - frame),
            ScrollDirection::None => {
                let c = self.cells[frame / STATIC_REPEATS];
                output.set_char(c, self.color, 0)
            }
        }
    }

    /// Draws the text scrolled `position` pixels to the left of its starting point.
    ///
    /// Two character cells are visible at any time: the even-numbered characters take turns in
    /// one of them and the odd-numbered characters in the other, each sliding through offsets
    /// `8..=-7` and lagging eight pixels behind the other.
    fn render_position<T: OutputTransport>(
        &self,
        output: &mut Output<T>,
        position: usize,
    ) -> Result<(), MidiError> {
        let last = self.cells.len() - 1;
        let span = 2 * CELL_WIDTH;

        if position <= self.cells.len() * CELL_WIDTH {
            let index = ((position / span) * 2).min(last);
            let offset = CELL_WIDTH as i32 - (position % span) as i32;
            output.set_char(self.cells[index], self.color, offset)?;
        }
        if position >= CELL_WIDTH {
            let lagged = position - CELL_WIDTH;
            let index = ((lagged / span) * 2 + 1).min(last);
            let offset = CELL_WIDTH as i32 - (lagged % span) as i32;
            output.set_char(self.cells[index], self.color, offset)?;
        }

        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScrollState {
    Idle,
    Scrolling,
}

/// Plays one [`Scroll`] at a time, a frame per [`step`](Scroller::step).
#[derive(Debug, Default)]
pub struct Scroller {
    current: Option<Scroll>,
    frame: usize,
}

impl Scroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts playing `scroll` from its first frame, abandoning whatever was playing before.
    pub fn start(&mut self, scroll: Scroll) {
        log::debug!(
            "Scrolling {:?} {:?} over {} frames",
            scroll.cells.iter().collect::<String>(),
            scroll.direction,
            scroll.frame_count()
        );
        self.frame = 0;
        self.current = if scroll.frame_count() > 0 {
            Some(scroll)
        } else {
            None
        };
    }

    /// Abandons the current animation, leaving the grid as it is.
    pub fn stop(&mut self) {
        self.current = None;
        self.frame = 0;
    }

    pub fn state(&self) -> ScrollState {
        if self.current.is_some() {
            ScrollState::Scrolling
        } else {
            ScrollState::Idle
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.state() == ScrollState::Scrolling
    }

    /// The frame the next [`step`](Scroller::step) will draw
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Draws the next frame and returns the state afterwards. Does nothing while idle.
    ///
    /// If the transport fails, the animation is abandoned and the error returned.
    pub fn step<T: OutputTransport>(
        &mut self,
        output: &mut Output<T>,
    ) -> Result<ScrollState, MidiError> {
        let scroll = match &self.current {
            Some(scroll) => scroll,
            None => return Ok(ScrollState::Idle),
        };

        if let Err(e) = scroll.render_frame(output, self.frame) {
            self.stop();
            return Err(e);
        }

        self.frame += 1;
        if self.frame >= scroll.frame_count() {
            log::debug!("Scroll finished after {} frames", self.frame);
            self.stop();
        }
        Ok(self.state())
    }
}

#[cfg(test)]
mod tests;
