use intersection_sim::{
    config::SignalTiming,
    simulation::{LightState, Phase, SignalController, SignalGroup},
};

fn default_controller() -> SignalController {
    SignalController::new(SignalTiming::default())
}

#[test]
fn test_cycle_length_from_timing() {
    let controller = default_controller();
    assert_eq!(controller.cycle_length(), 26.0);

    let custom = SignalController::new(SignalTiming { green_time: 20.0, yellow_time: 5.0 });
    assert_eq!(custom.cycle_length(), 50.0);
}

#[test]
fn test_reference_times() {
    let controller = default_controller();

    let cases = [
        (5.0, LightState::Green, LightState::Red),
        (11.0, LightState::Yellow, LightState::Red),
        (15.0, LightState::Red, LightState::Green),
        (24.0, LightState::Red, LightState::Yellow),
        (26.5, LightState::Green, LightState::Red),
    ];

    for (elapsed, north_south, east_west) in cases {
        let state = controller.signal_state(elapsed);
        assert_eq!(state.north_south, north_south, "north-south at t={}", elapsed);
        assert_eq!(state.east_west, east_west, "east-west at t={}", elapsed);
    }
}

#[test]
fn test_phase_boundaries() {
    let controller = default_controller();

    assert_eq!(controller.phase_at(0.0), Phase::NorthSouthGreen);
    assert_eq!(controller.phase_at(9.99), Phase::NorthSouthGreen);
    assert_eq!(controller.phase_at(10.0), Phase::NorthSouthYellow);
    assert_eq!(controller.phase_at(13.0), Phase::EastWestGreen);
    assert_eq!(controller.phase_at(23.0), Phase::EastWestYellow);
    assert_eq!(controller.phase_at(26.0), Phase::NorthSouthGreen);
    assert_eq!(controller.phase_at(52.0 + 11.0), Phase::NorthSouthYellow);
}

#[test]
fn test_exactly_one_group_not_red() {
    let controller = default_controller();
    let steps = 2 * 26 * 100;

    for i in 0..steps {
        let elapsed = i as f32 * 0.01;
        let state = controller.signal_state(elapsed);
        let active = [state.north_south, state.east_west]
            .iter()
            .filter(|light| !light.is_red())
            .count();
        assert_eq!(active, 1, "expected exactly one active group at t={:.2}: {:?}", elapsed, state);
    }
}

#[test]
fn test_signal_state_is_pure() {
    let controller = default_controller();
    let first = controller.signal_state(17.25);
    let _ = controller.signal_state(3.0);
    assert_eq!(controller.signal_state(17.25), first);
    assert_eq!(controller.signal_state(17.25 + 26.0), first);
}

#[test]
fn test_light_for_group() {
    let state = default_controller().signal_state(15.0);
    assert_eq!(state.light_for(SignalGroup::NorthSouth), LightState::Red);
    assert_eq!(state.light_for(SignalGroup::EastWest), LightState::Green);
}

#[test]
fn test_time_to_next_change() {
    let controller = default_controller();
    assert!((controller.time_to_next_change(5.0) - 5.0).abs() < 1e-5);
    assert!((controller.time_to_next_change(11.0) - 2.0).abs() < 1e-5);
    assert!((controller.time_to_next_change(25.0) - 1.0).abs() < 1e-5);
}
