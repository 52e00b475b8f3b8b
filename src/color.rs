/// A 2-bit color, with only red and green components.
///
/// Construction never fails: brightness levels are clamped into `0..=3`, so animation code can
/// pass whatever it computed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    red: u8,
    green: u8,
}

impl Color {
    /// Highest brightness level of either LED
    pub const MAX_LEVEL: u8 = 3;

    pub const BLACK: Color = Color { red: 0, green: 0 };
    pub const RED: Color = Color { red: 3, green: 0 };
    pub const GREEN: Color = Color { red: 0, green: 3 };
    pub const YELLOW: Color = Color { red: 3, green: 3 };
    pub const ORANGE: Color = Color { red: 3, green: 1 };
    pub const AMBER: Color = Color { red: 3, green: 2 };

    /// Create a new color from the given red and green brightness levels, clamped to `0..=3`.
    ///
    /// ```
    /// # use launchpad_classic::Color;
    /// assert_eq!(Color::new(-5, 10), Color::GREEN);
    /// ```
    pub fn new(red: i32, green: i32) -> Color {
        Color {
            red: clamp_level(red),
            green: clamp_level(green),
        }
    }

    /// Like [`Color::new`], but for fractional levels, which are truncated towards zero first.
    pub fn from_levels(red: f32, green: f32) -> Color {
        // float-to-int casts saturate, and NaN becomes 0
        Color::new(red as i32, green as i32)
    }

    /// Decodes a Launchpad color byte. Bits outside the two brightness fields are ignored.
    pub fn from_code(code: u8) -> Color {
        Color {
            red: code & 0b11,
            green: (code >> 4) & 0b11,
        }
    }

    /// The Launchpad color byte: red brightness in bits 0..=1, green brightness in bits 4..=5.
    pub fn code(self) -> u8 {
        // Bit 6 - Must be 0
        // Bit 5..4 - Green LED brightness
        // Bit 3..2 - Double buffering flags, always 0 here
        // Bit 1..0 - Red LED brightness
        (self.green << 4) | self.red
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn is_off(&self) -> bool {
        *self == Color::BLACK
    }
}

impl From<(i32, i32)> for Color {
    fn from((red, green): (i32, i32)) -> Self {
        Color::new(red, green)
    }
}

fn clamp_level(level: i32) -> u8 {
    level.clamp(0, Color::MAX_LEVEL as i32) as u8
}

/// Computes the color byte for raw brightness levels, clamping each to `0..=3`.
pub fn color_code(red: i32, green: i32) -> u8 {
    Color::new(red, green).code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_code_clamps_each_channel() {
        let levels = [-5, 0, 1, 2, 3, 10];
        for &red in &levels {
            for &green in &levels {
                let code = color_code(red, green);
                assert_eq!(code & 0x0F, red.clamp(0, 3) as u8);
                assert_eq!(code >> 4, green.clamp(0, 3) as u8);
            }
        }
    }

    #[test]
    fn fractional_levels_are_truncated() {
        assert_eq!(Color::from_levels(2.9, 0.5), Color::new(2, 0));
        assert_eq!(Color::from_levels(-0.7, 3.99), Color::new(0, 3));
        assert_eq!(Color::from_levels(f32::NAN, f32::INFINITY), Color::new(0, 3));
    }

    #[test]
    fn from_code_reverses_code() {
        for red in 0..=3 {
            for green in 0..=3 {
                let color = Color::new(red, green);
                assert_eq!(Color::from_code(color.code()), color);
            }
        }
        assert_eq!(Color::YELLOW.code(), 0x33);
        assert_eq!(Color::from_code(0x0C), Color::BLACK);
    }
}
