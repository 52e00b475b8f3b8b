use super::*;

#[test]
fn xy_round_trips_over_the_grid() {
    for y in 1..=8 {
        for x in 0..=7 {
            let button = Button::from_xy(x, y).unwrap();
            assert_eq!(button.xy(), (x as u8, y as u8));
            assert_eq!(button.raw() as i32, (y - 1) * 16 + x);
        }
    }
}

#[test]
fn xy_round_trips_over_the_wire() {
    for y in 0..=8 {
        for x in 0..=8 {
            let button = match Button::from_xy(x, y) {
                Some(button) => button,
                None => continue,
            };
            for &code in &[0, 0x03, 0x33] {
                let event = ButtonEvent::decode(button.light_message(code)).unwrap();
                assert_eq!(event.xy(), (x as u8, y as u8, code != 0), "({}, {})", x, y);
            }
        }
    }
}

#[test]
fn top_row_is_automap() {
    assert_eq!(Button::from_xy(0, 0), Some(Button::Automap { index: 0 }));
    assert_eq!(Button::from_xy(7, 0), Some(Button::Automap { index: 7 }));
    // there is no ninth automap button
    assert_eq!(Button::from_xy(8, 0), None);
    assert_eq!(Button::Automap { index: 3 }.xy(), (3, 0));
    assert_eq!(Button::Automap { index: 3 }.raw(), 203);
}

#[test]
fn right_column_is_addressable() {
    assert_eq!(Button::from_xy(8, 1), Some(Button::Grid { index: 8 }));
    assert_eq!(Button::from_xy(8, 8), Some(Button::Grid { index: 120 }));
    assert_eq!(Button::Grid { index: 120 }.xy(), (8, 8));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    for &(x, y) in &[(-1, 1), (9, 1), (0, 9), (0, -1), (100, 100)] {
        assert_eq!(Button::from_xy(x, y), None, "({}, {})", x, y);
    }
}

#[test]
fn raw_ranges() {
    assert_eq!(Button::from_raw(0), Some(Button::Grid { index: 0 }));
    assert_eq!(Button::from_raw(120), Some(Button::Grid { index: 120 }));
    assert_eq!(Button::from_raw(200), Some(Button::Automap { index: 0 }));
    assert_eq!(Button::from_raw(207), Some(Button::Automap { index: 7 }));
    for &raw in &[-1, 121, 150, 199, 208, 255] {
        assert_eq!(Button::from_raw(raw), None, "{}", raw);
    }
}

#[test]
fn light_messages() {
    assert_eq!(
        Button::Grid { index: 17 }.light_message(0x30),
        ShortMessage::new(144, 17, 0x30)
    );
    assert_eq!(
        Button::Automap { index: 2 }.light_message(0x03),
        ShortMessage::new(176, 106, 0x03)
    );
}

#[test]
fn decode_grid_press() {
    let event = ButtonEvent::decode(ShortMessage::new(144, 5, 100)).unwrap();
    assert_eq!(event.raw(), (5, true));
    assert_eq!(event.xy(), (5, 1, true));
}

#[test]
fn decode_automap_release() {
    let event = ButtonEvent::decode(ShortMessage::new(176, 108, 0)).unwrap();
    assert_eq!(event.raw(), (204, false));
    assert_eq!(event.xy(), (4, 0, false));
}

#[test]
fn decode_lower_rows() {
    let event = ButtonEvent::decode(ShortMessage::new(144, 0x73, 127)).unwrap();
    assert_eq!(event.xy(), (3, 8, true));
    let event = ButtonEvent::decode(ShortMessage::new(144, 0x28, 0)).unwrap();
    assert_eq!(event.xy(), (8, 3, false));
}

#[test]
fn non_button_messages_are_not_events() {
    // text scroll finished
    assert_eq!(ButtonEvent::decode(ShortMessage::new(176, 0, 3)), None);
    assert_eq!(ButtonEvent::decode(ShortMessage::new(176, 112, 127)), None);
    assert_eq!(ButtonEvent::decode(ShortMessage::new(0x80, 5, 0)), None);
}
