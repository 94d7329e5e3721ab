//! Behavior of the input sampler against a simulated shield.
//!
//! Every test drives the sampler through `MockBoard` (pin levels, ADC values)
//! and `MockClock` (elapsed time), so gating and calibration are checked
//! without hardware.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use gamepad::mocks::{MockBoard, MockClock, MockFault, CENTER};
use gamepad::{
    Axis, GamepadError, InputSampler, PinId, PinMapping, PinMode, SamplerConfig, SwitchId,
};

type Pad<'a> = InputSampler<MockBoard, &'a MockClock>;

fn start(clock: &MockClock) -> Pad<'_> {
    InputSampler::new(MockBoard::shield(), clock)
        .initialize()
        .unwrap()
}

// ── Digital switches ─────────────────────────────────────────────────────────

#[test]
fn no_switch_pressed_reports_none() {
    let clock = MockClock::new(1_000);
    let mut pad = start(&clock);

    assert_eq!(pad.poll_switch().unwrap(), None);
    clock.advance(100);
    assert!(!pad.any_digital_pressed().unwrap());
}

#[test]
fn single_pressed_switch_is_reported() {
    for (pin, switch) in [
        (PinId::D2, SwitchId::A),
        (PinId::D5, SwitchId::D),
        (PinId::D7, SwitchId::F),
        (PinId::D8, SwitchId::K),
    ] {
        let clock = MockClock::new(0);
        let mut pad = start(&clock);
        pad.pins_mut().press(pin);
        assert_eq!(pad.poll_switch().unwrap(), Some(switch), "pin {pin}");
    }
}

#[test]
fn simultaneous_presses_report_first_in_mapping_order() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().press(PinId::D3); // B
    pad.pins_mut().press(PinId::D2); // A
    pad.pins_mut().press(PinId::D8); // K

    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::A));
}

#[test]
fn custom_mapping_order_decides_ties() {
    let mapping = PinMapping::builder()
        .bind(PinId::D8, SwitchId::K)
        .unwrap()
        .bind(PinId::D2, SwitchId::A)
        .unwrap()
        .build();
    let clock = MockClock::new(0);
    let mut pad = InputSampler::with_config(
        MockBoard::shield(),
        &clock,
        SamplerConfig::shield().mapping(mapping).unwrap(),
    )
    .initialize()
    .unwrap();
    pad.pins_mut().press(PinId::D2);
    pad.pins_mut().press(PinId::D8);

    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::K));
}

#[test]
fn unmapped_pins_are_ignored() {
    let mapping = PinMapping::builder()
        .bind(PinId::D2, SwitchId::A)
        .unwrap()
        .build();
    let clock = MockClock::new(0);
    let mut pad = InputSampler::with_config(
        MockBoard::shield(),
        &clock,
        SamplerConfig::shield().mapping(mapping).unwrap(),
    )
    .initialize()
    .unwrap();
    pad.pins_mut().press(PinId::D3);

    assert_eq!(pad.poll_switch().unwrap(), None);
}

#[test]
fn second_poll_inside_interval_reports_none() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().press(PinId::D6);

    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::E));
    clock.advance(99);
    assert_eq!(pad.poll_switch().unwrap(), None);
    clock.advance(1);
    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::E));
}

#[test]
fn refused_poll_does_not_restart_interval() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().press(PinId::D4);

    assert!(pad.any_digital_pressed().unwrap());
    clock.advance(60);
    assert!(!pad.any_digital_pressed().unwrap());
    clock.advance(40);
    assert!(pad.any_digital_pressed().unwrap());
}

#[test]
fn zero_interval_disables_digital_gating() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().press(PinId::D3);
    pad.set_read_interval(0);

    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::B));
    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::B));
}

#[test]
fn digital_gate_survives_clock_wraparound() {
    let clock = MockClock::new(u32::MAX - 20);
    let mut pad = start(&clock);
    pad.pins_mut().press(PinId::D2);

    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::A));
    clock.advance(50);
    assert_eq!(pad.poll_switch().unwrap(), None);
    clock.advance(50);
    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::A));
}

#[test]
fn digital_and_analog_gates_are_independent() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().press(PinId::D2);
    pad.pins_mut().set_analog(PinId::A0, CENTER + 40);

    assert_eq!(pad.poll_switch().unwrap(), Some(SwitchId::A));
    // the digital poll must not close the analog gate
    assert_eq!(pad.axis_value(Axis::X).unwrap(), 40);
}

// ── Analog axes ──────────────────────────────────────────────────────────────

#[test]
fn initialize_sets_pin_modes_and_defaults() {
    let clock = MockClock::new(0);
    let pad = start(&clock);
    assert_eq!(pad.read_interval(), gamepad::DEFAULT_READ_INTERVAL_MS);
    assert_eq!(pad.deadband(), gamepad::DEFAULT_DEADBAND);
    assert_eq!(pad.mapping().len(), 7);

    let (board, _) = pad.release();
    assert_eq!(board.mode(PinId::D2), Some(PinMode::InputPullUp));
    assert_eq!(board.mode(PinId::D8), Some(PinMode::InputPullUp));
    assert_eq!(board.mode(PinId::A0), Some(PinMode::Input));
    assert_eq!(board.mode(PinId::A1), Some(PinMode::Input));
    // one conversion per axis for the zero offsets
    assert_eq!(board.analog_reads(), 2);
}

#[test]
fn configured_defaults_apply_at_initialize() {
    let clock = MockClock::new(0);
    let pad = InputSampler::with_config(
        MockBoard::shield(),
        &clock,
        SamplerConfig::shield().read_interval_ms(25).deadband(9),
    )
    .initialize()
    .unwrap();
    assert_eq!(pad.read_interval(), 25);
    assert_eq!(pad.deadband(), 9);
}

#[test]
fn unchanged_stick_reads_zero_after_initialize() {
    let mut board = MockBoard::shield();
    board.set_analog(PinId::A0, 497);
    let clock = MockClock::new(0);
    let mut pad = InputSampler::new(board, &clock).initialize().unwrap();

    assert_eq!(pad.zero_offset(Axis::X), 497);
    assert_eq!(pad.axis_value(Axis::X).unwrap(), 0);
}

#[test]
fn value_inside_deadband_is_zero() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().set_analog(PinId::A0, CENTER + 3);

    assert_eq!(pad.deadband(), 5);
    assert_eq!(pad.axis_value(Axis::X).unwrap(), 0);
}

#[test]
fn value_outside_deadband_is_offset_adjusted() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().set_analog(PinId::A0, CENTER + 10);
    pad.pins_mut().set_analog(PinId::A1, CENTER - 200);
    pad.set_read_interval(0);

    assert_eq!(pad.axis_value(Axis::X).unwrap(), 10);
    assert_eq!(pad.axis_value(Axis::Y).unwrap(), -200);
}

#[test]
fn deadband_edge_is_exclusive() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.set_read_interval(0);
    pad.set_deadband(10);

    pad.pins_mut().set_analog(PinId::A0, CENTER - 9);
    assert_eq!(pad.axis_value(Axis::X).unwrap(), 0);
    pad.pins_mut().set_analog(PinId::A0, CENTER - 10);
    assert_eq!(pad.axis_value(Axis::X).unwrap(), -10);
}

#[test]
fn direction_follows_sign_of_value() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.set_read_interval(0);

    pad.pins_mut().set_analog(PinId::A0, CENTER + 100);
    assert_eq!(pad.axis_direction(Axis::X).unwrap(), 1);
    pad.pins_mut().set_analog(PinId::A0, CENTER - 100);
    assert_eq!(pad.axis_direction(Axis::X).unwrap(), -1);
    pad.pins_mut().set_analog(PinId::A0, CENTER + 2);
    assert_eq!(pad.axis_direction(Axis::X).unwrap(), 0);
}

#[test]
fn direction_is_centered_inside_analog_gate() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().set_analog(PinId::A1, CENTER + 300);

    assert_eq!(pad.axis_value(Axis::Y).unwrap(), 300);
    clock.advance(10);
    // value query still returns the cached deflection
    assert_eq!(pad.axis_value(Axis::Y).unwrap(), 300);
    // direction query does not
    assert_eq!(pad.axis_direction(Axis::Y).unwrap(), 0);
    clock.advance(90);
    assert_eq!(pad.axis_direction(Axis::Y).unwrap(), 1);
}

#[test]
fn cached_value_is_stable_inside_gate() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().set_analog(PinId::A0, CENTER + 77);

    let first = pad.axis_value(Axis::X).unwrap();
    let conversions = pad.pins_mut().analog_reads();
    pad.pins_mut().set_analog(PinId::A0, CENTER - 400);
    for _ in 0..5 {
        clock.advance(10);
        assert_eq!(pad.axis_value(Axis::X).unwrap(), first);
    }
    assert_eq!(pad.pins_mut().analog_reads(), conversions);
}

#[test]
fn both_axes_share_one_analog_gate() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().set_analog(PinId::A0, CENTER + 50);
    pad.pins_mut().set_analog(PinId::A1, CENTER + 60);

    assert_eq!(pad.axis_value(Axis::X).unwrap(), 50);
    // Y has never been sampled since calibration, so its cache is still 0
    assert_eq!(pad.axis_value(Axis::Y).unwrap(), 0);
    clock.advance(100);
    assert_eq!(pad.axis_value(Axis::Y).unwrap(), 60);
}

#[test]
fn zero_interval_samples_every_call() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.set_read_interval(0);

    pad.pins_mut().set_analog(PinId::A0, CENTER + 20);
    assert_eq!(pad.axis_value(Axis::X).unwrap(), 20);
    pad.pins_mut().set_analog(PinId::A0, CENTER + 30);
    assert_eq!(pad.axis_value(Axis::X).unwrap(), 30);
}

#[test]
fn offsets_are_not_recomputed() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.set_read_interval(0);
    pad.pins_mut().set_analog(PinId::A0, 900);
    pad.axis_value(Axis::X).unwrap();
    pad.set_deadband(0);
    pad.set_read_interval(5);

    assert_eq!(pad.zero_offset(Axis::X), CENTER);
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[test]
fn digital_selector_is_rejected_as_axis() {
    assert_eq!(
        Axis::try_from(SwitchId::C),
        Err(GamepadError::NotAnAxis(SwitchId::C))
    );
}

#[test]
fn backend_faults_propagate() {
    let clock = MockClock::new(0);
    let mut pad = start(&clock);
    pad.pins_mut().fail_reads(true);

    let expected = GamepadError::io(MockFault);
    assert_eq!(pad.poll_switch(), Err(expected));
    assert_eq!(pad.axis_value(Axis::X), Err(expected));
}

#[test]
fn initialize_fails_when_adc_faults() {
    let mut board = MockBoard::shield();
    board.fail_reads(true);
    let clock = MockClock::new(0);
    let result = InputSampler::new(board, &clock).initialize();
    assert!(matches!(result, Err(GamepadError::Io(_))));
}
