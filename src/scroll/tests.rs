use super::*;
use crate::glyphs::glyph_for_char;
use crate::mock::MockOutput;

fn render_until(scroll: &Scroll, last_frame: usize) -> Output<MockOutput> {
    let mut output = Output::new(MockOutput::new());
    for frame in 0..=last_frame {
        scroll.render_frame(&mut output, frame).unwrap();
    }
    output
}

fn pattern_of(c: char) -> [u8; 8] {
    *glyph_for_char(c).unwrap()
}

#[test]
fn padding_per_direction() {
    let red = Color::RED;
    assert_eq!(Scroll::new("HI", red, ScrollDirection::Left).cells(), &['H', 'I', ' ']);
    assert_eq!(
        Scroll::new("HI", red, ScrollDirection::Right).cells(),
        &[' ', 'H', 'I', ' ']
    );
    assert_eq!(Scroll::new("HI", red, ScrollDirection::None).cells(), &['H', 'I']);
}

#[test]
fn frame_counts() {
    let red = Color::RED;
    assert_eq!(Scroll::new("HI", red, ScrollDirection::Left).frame_count(), 32);
    assert_eq!(Scroll::new("HI", red, ScrollDirection::Right).frame_count(), 33);
    assert_eq!(Scroll::new("HI", red, ScrollDirection::None).frame_count(), 8);
    // moving text keeps its padding frames even when empty
    assert_eq!(Scroll::new("", red, ScrollDirection::Left).frame_count(), 16);
    assert_eq!(Scroll::new("", red, ScrollDirection::Right).frame_count(), 17);
    assert_eq!(Scroll::new("", red, ScrollDirection::None).frame_count(), 0);
}

#[test]
fn left_scroll_passes_through_each_character() {
    let scroll = Scroll::new("HI", Color::RED, ScrollDirection::Left);
    assert_eq!(render_until(&scroll, 8).transport().led_state().grid_pattern(), pattern_of('H'));
    assert_eq!(render_until(&scroll, 16).transport().led_state().grid_pattern(), pattern_of('I'));
}

#[test]
fn left_scroll_shifts_one_pixel_per_frame() {
    let scroll = Scroll::new("HI", Color::RED, ScrollDirection::Left);
    let h = pattern_of('H');
    let i = pattern_of('I');
    // H has moved three pixels to the left, I follows with a gap of five pixels
    let state = render_until(&scroll, 11).transport().led_state();
    for row in 0..8 {
        assert_eq!(state.grid_pattern()[row], (h[row] << 3) | (i[row] >> 5), "row {}", row);
    }
}

#[test]
fn left_scroll_ends_dark() {
    let mut output = Output::new(MockOutput::new());
    output
        .scroll_text("HI", Color::RED, ScrollDirection::Left, Duration::ZERO)
        .unwrap();
    let state = output.transport().led_state();
    assert!(state.grid_is_dark());

    // only red was ever drawn
    for msg in output.transport().short_messages() {
        assert_eq!(msg.status, 144);
        assert!(msg.data2 == Color::RED.code() || msg.data2 == 0, "{:?}", msg);
    }
}

#[test]
fn scrolling_is_deterministic() {
    let run = || {
        let mut output = Output::new(MockOutput::new());
        output
            .scroll_text("HI", Color::RED, ScrollDirection::Left, Duration::ZERO)
            .unwrap();
        output.into_transport().sent().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn right_scroll_plays_left_positions_backwards() {
    let scroll = Scroll::new("HI", Color::GREEN, ScrollDirection::Right);
    // position 24 is frame 33 - 24 = 9, position 16 is frame 17
    assert_eq!(render_until(&scroll, 9).transport().led_state().grid_pattern(), pattern_of('I'));
    assert_eq!(render_until(&scroll, 17).transport().led_state().grid_pattern(), pattern_of('H'));
    assert!(render_until(&scroll, 32).transport().led_state().grid_is_dark());
}

#[test]
fn static_text_repeats_each_character() {
    let scroll = Scroll::new("AB", Color::YELLOW, ScrollDirection::None);
    let output = render_until(&scroll, 3);
    assert_eq!(output.transport().led_state().grid_pattern(), pattern_of('A'));
    // four full redraws of 'A'
    assert_eq!(output.transport().sent().len(), 4 * 64);

    let output = render_until(&scroll, 7);
    assert_eq!(output.transport().led_state().grid_pattern(), pattern_of('B'));
}

#[test]
fn frames_past_the_end_draw_nothing() {
    let scroll = Scroll::new("A", Color::RED, ScrollDirection::None);
    let mut output = Output::new(MockOutput::new());
    scroll.render_frame(&mut output, 4).unwrap();
    scroll.render_frame(&mut output, 1000).unwrap();
    assert!(output.transport().sent().is_empty());
}

#[test]
fn empty_static_text_sends_nothing() {
    let mut output = Output::new(MockOutput::new());
    output
        .scroll_text("", Color::RED, ScrollDirection::None, Duration::ZERO)
        .unwrap();
    assert!(output.transport().sent().is_empty());
}

#[test]
fn characters_without_glyph_are_skipped() {
    let mut output = Output::new(MockOutput::new());
    output
        .scroll_text("€", Color::RED, ScrollDirection::None, Duration::ZERO)
        .unwrap();
    assert!(output.transport().sent().is_empty());
}

#[test]
fn scroller_steps_through_every_frame() {
    let mut output = Output::new(MockOutput::new());
    let mut scroller = Scroller::new();
    assert_eq!(scroller.state(), ScrollState::Idle);
    assert_eq!(scroller.step(&mut output).unwrap(), ScrollState::Idle);

    scroller.start(Scroll::new("HI", Color::RED, ScrollDirection::Left));
    let mut steps = 0;
    while scroller.is_scrolling() {
        scroller.step(&mut output).unwrap();
        steps += 1;
    }
    assert_eq!(steps, 32);
    assert_eq!(scroller.frame(), 0);
    assert!(output.transport().led_state().grid_is_dark());
}

#[test]
fn restarting_begins_at_the_first_frame() {
    let mut output = Output::new(MockOutput::new());
    let mut scroller = Scroller::new();
    scroller.start(Scroll::new("HI", Color::RED, ScrollDirection::Left));
    for _ in 0..5 {
        scroller.step(&mut output).unwrap();
    }
    assert_eq!(scroller.frame(), 5);

    scroller.start(Scroll::new("X", Color::RED, ScrollDirection::None));
    assert_eq!(scroller.frame(), 0);
    assert!(scroller.is_scrolling());

    scroller.start(Scroll::new("", Color::RED, ScrollDirection::None));
    assert!(!scroller.is_scrolling());
}

#[test]
fn transport_failure_aborts_the_scroll() {
    let mut output = Output::new(MockOutput::failing_after(10));
    let result = output.scroll_text("HI", Color::RED, ScrollDirection::Left, Duration::ZERO);
    assert!(matches!(result, Err(MidiError::Mock(_))));
    assert_eq!(output.transport().sent().len(), 10);

    let mut output = Output::new(MockOutput::failing_after(0));
    let mut scroller = Scroller::new();
    scroller.start(Scroll::new("X", Color::RED, ScrollDirection::None));
    assert!(scroller.step(&mut output).is_err());
    assert_eq!(scroller.state(), ScrollState::Idle);
}
