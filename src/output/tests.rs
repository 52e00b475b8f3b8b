use super::*;
use crate::mock::MockOutput;

fn output() -> Output<MockOutput> {
    Output::new(MockOutput::new())
}

fn sent(output: &Output<MockOutput>) -> Vec<ShortMessage> {
    output.transport().short_messages()
}

#[test]
fn reset_and_all_on() {
    let mut output = output();
    output.reset().unwrap();
    output.set_all_on(true).unwrap();
    output.set_all_on(false).unwrap();
    assert_eq!(
        sent(&output),
        vec![
            ShortMessage::new(176, 0, 0),
            ShortMessage::new(176, 0, 127),
            ShortMessage::new(176, 0, 0),
        ]
    );
}

#[test]
fn set_raw_addresses_grid_and_automap() {
    let mut output = output();
    output.set_raw(0, Color::RED).unwrap();
    output.set_raw(120, Color::new(1, 2)).unwrap();
    output.set_raw(203, Color::GREEN).unwrap();
    assert_eq!(
        sent(&output),
        vec![
            ShortMessage::new(144, 0, 0x03),
            ShortMessage::new(144, 120, 0x21),
            ShortMessage::new(176, 107, 0x30),
        ]
    );
}

#[test]
fn invalid_raw_numbers_send_nothing() {
    let mut output = output();
    for &index in &[-1, 121, 199, 208] {
        output.set_raw(index, Color::RED).unwrap();
    }
    assert!(output.transport().sent().is_empty());
}

#[test]
fn set_automap_range() {
    let mut output = output();
    output.set_automap(-1, Color::RED).unwrap();
    output.set_automap(8, Color::RED).unwrap();
    assert!(output.transport().sent().is_empty());

    output.set_automap(7, Color::YELLOW).unwrap();
    assert_eq!(sent(&output), vec![ShortMessage::new(176, 111, 0x33)]);
}

#[test]
fn set_xy() {
    let mut output = output();
    output.set_xy(1, 0, Color::RED).unwrap();
    output.set_xy(5, 3, Color::GREEN).unwrap();
    output.set_xy(8, 8, Color::YELLOW).unwrap();
    // dropped
    output.set_xy(8, 0, Color::RED).unwrap();
    output.set_xy(-1, 3, Color::RED).unwrap();
    output.set_xy(3, 9, Color::RED).unwrap();
    assert_eq!(
        sent(&output),
        vec![
            ShortMessage::new(176, 105, 0x03),
            ShortMessage::new(144, 0x25, 0x30),
            ShortMessage::new(144, 0x78, 0x33),
        ]
    );

    let state = output.transport().led_state();
    assert_eq!(state.get(1, 0), Color::RED);
    assert_eq!(state.get(5, 3), Color::GREEN);
    assert_eq!(state.get(8, 8), Color::YELLOW);
}

#[test]
fn rapid_update_pairs_codes() {
    let mut output = output();
    output.rapid_update(&[0x03, 0x30, 0x33]).unwrap();
    assert_eq!(
        sent(&output),
        vec![
            ShortMessage::new(146, 0x03, 0x30),
            ShortMessage::new(146, 0x33, 0),
        ]
    );
    assert_eq!(output.rapid_cursor(), 4);

    output.rapid_update(&[]).unwrap();
    assert_eq!(sent(&output).len(), 2);
}

#[test]
fn rapid_updates_continue_until_homed() {
    let mut output = output();
    output.rapid_update_colors(&[Color::RED, Color::RED]).unwrap();
    output.rapid_update_colors(&[Color::GREEN, Color::GREEN]).unwrap();
    let state = output.transport().led_state();
    assert_eq!(state.get(0, 1), Color::RED);
    assert_eq!(state.get(2, 1), Color::GREEN);
    assert_eq!(state.get(3, 1), Color::GREEN);

    output.rapid_update_home().unwrap();
    assert_eq!(output.rapid_cursor(), 0);
    output.rapid_update_colors(&[Color::YELLOW]).unwrap();
    assert_eq!(sent(&output)[2], ShortMessage::new(176, 1, 0));

    let state = output.transport().led_state();
    assert_eq!(state.get(0, 1), Color::YELLOW);
    // odd count turns off the following LED
    assert_eq!(state.get(1, 1), Color::BLACK);
    assert_eq!(state.get(2, 1), Color::GREEN);
}

#[test]
fn rapid_cursor_saturates_and_resets() {
    let mut output = output();
    output.rapid_update(&[0; 100]).unwrap();
    assert_eq!(output.rapid_cursor(), RAPID_UPDATE_SLOTS);
    output.reset().unwrap();
    assert_eq!(output.rapid_cursor(), 0);
}

#[test]
fn set_char_draws_the_glyph() {
    let mut output = output();
    output.set_char('A', Color::RED, 0).unwrap();
    let messages = sent(&output);
    assert_eq!(messages.len(), 64);

    let state = output.transport().led_state();
    assert_eq!(&state.grid_pattern(), glyphs::glyph_for_char('A').unwrap());
    for y in 1..=8 {
        for x in 0..8 {
            let color = state.get(x, y);
            assert!(color == Color::RED || color == Color::BLACK);
        }
    }
    // never touches the right column
    assert!(messages.iter().all(|msg| msg.data1 & 0x0F < 8));
}

#[test]
fn set_char_clips_shifted_columns() {
    let a = *glyphs::glyph_for_char('A').unwrap();

    let mut output = output();
    output.set_char('A', Color::GREEN, 3).unwrap();
    assert_eq!(sent(&output).len(), 5 * 8);
    let pattern = output.transport().led_state().grid_pattern();
    for row in 0..8 {
        assert_eq!(pattern[row], a[row] >> 3);
    }

    let mut output = self::output();
    output.set_char('A', Color::GREEN, -2).unwrap();
    assert_eq!(sent(&output).len(), 6 * 8);
    let pattern = output.transport().led_state().grid_pattern();
    for row in 0..8 {
        // the two rightmost columns are left alone
        assert_eq!(pattern[row], (a[row] << 2) & 0b1111_1100);
    }
}

#[test]
fn set_char_fully_shifted_out_sends_nothing() {
    let mut output = output();
    output.set_char('A', Color::RED, 8).unwrap();
    output.set_char('A', Color::RED, -8).unwrap();
    output.set_char('A', Color::RED, i32::MAX).unwrap();
    output.set_char('A', Color::RED, i32::MIN).unwrap();
    assert!(output.transport().sent().is_empty());
}

#[test]
fn set_char_code_range() {
    let mut output = output();
    output.set_char_code(256, Color::RED, 0).unwrap();
    output.set_char('\u{263A}', Color::RED, 0).unwrap();
    assert!(output.transport().sent().is_empty());

    output.set_char_code(255, Color::RED, 0).unwrap();
    assert_eq!(sent(&output).len(), 64);
}

#[test]
fn transport_failures_propagate() {
    let mut output = Output::new(MockOutput::failing_after(0));
    assert!(matches!(output.reset(), Err(MidiError::Mock(_))));
    assert!(output.set_raw(5, Color::RED).is_err());
    // dropped requests never reach the transport
    assert!(output.set_raw(500, Color::RED).is_ok());

    let mut output = Output::new(MockOutput::failing_after(1));
    assert!(output.rapid_update(&[1, 2, 3, 4]).is_err());
    // the first pair reached the device and moved its cursor
    assert_eq!(sent(&output), vec![ShortMessage::new(146, 1, 2)]);
    assert_eq!(output.rapid_cursor(), 2);
}
