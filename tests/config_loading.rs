use intersection_sim::config::{SimulationConfig, Validate};

fn manifest_path(file: &str) -> String {
    format!("{}/{}", env!("CARGO_MANIFEST_DIR"), file)
}

#[test]
fn test_defaults_are_valid() {
    let config = SimulationConfig::default();
    assert!(config.validate().is_ok());

    assert_eq!(config.intersection.intersection.screen_width, 800.0);
    assert_eq!(config.intersection.intersection.screen_height, 600.0);
    assert_eq!(config.intersection.signals.cycle_length(), 26.0);
    assert_eq!(config.vehicles.vehicle.gap, 10.0);
    assert_eq!(config.vehicles.spawn.interval, 2.0);
}

#[test]
fn test_shipped_files_match_defaults() -> anyhow::Result<()> {
    let config = SimulationConfig::load_from_files(
        &manifest_path("intersection.toml"),
        &manifest_path("vehicles.toml"),
    )?;
    let defaults = SimulationConfig::default();

    let geometry = &config.intersection.intersection;
    let expected = &defaults.intersection.intersection;
    assert_eq!(geometry.road_width, expected.road_width);
    assert_eq!(geometry.lane_offset, expected.lane_offset);
    assert_eq!(geometry.offscreen_distance, expected.offscreen_distance);
    assert_eq!(config.intersection.signals.green_time, defaults.intersection.signals.green_time);
    assert_eq!(config.vehicles.vehicle.speed, defaults.vehicles.vehicle.speed);
    assert_eq!(config.vehicles.spawn.jitter, 0.0);
    assert_eq!(config.vehicles.spawn.seed, None);
    Ok(())
}

#[test]
fn test_missing_sections_fall_back_to_defaults() -> anyhow::Result<()> {
    let config = SimulationConfig::from_toml_strs("[signals]\ngreen_time = 20.0\n", "")?;

    assert_eq!(config.intersection.signals.green_time, 20.0);
    assert_eq!(config.intersection.signals.yellow_time, 3.0);
    assert_eq!(config.intersection.signals.cycle_length(), 46.0);
    assert_eq!(config.vehicles.vehicle.length, 40.0);
    Ok(())
}

#[test]
fn test_rejects_bad_signal_timing() {
    let result = SimulationConfig::from_toml_strs("[signals]\nyellow_time = 0.0\n", "");
    assert!(result.is_err());
}

#[test]
fn test_rejects_lane_outside_road() {
    let result = SimulationConfig::from_toml_strs("[intersection]\nlane_offset = 50.0\n", "");
    assert!(result.is_err());

    let mut config = SimulationConfig::default();
    config.vehicles.vehicle.width = 80.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_bad_vehicle_params() {
    for vehicles in ["[vehicle]\nspeed = 0.0\n", "[vehicle]\ngap = -1.0\n", "[spawn]\njitter = -0.5\n"] {
        assert!(
            SimulationConfig::from_toml_strs("", vehicles).is_err(),
            "accepted {:?}",
            vehicles
        );
    }
}

#[test]
fn test_short_spawn_interval_is_allowed() {
    let mut config = SimulationConfig::default();
    config.vehicles.spawn.interval = 0.1;
    assert!(config.validate().is_ok());
    assert!(config.vehicles.validate().is_ok());
}

#[test]
fn test_malformed_toml_is_an_error() {
    assert!(SimulationConfig::from_toml_strs("[intersection\n", "").is_err());
    assert!(SimulationConfig::load_from_files("does-not-exist.toml", "vehicles.toml").is_err());
}

#[test]
fn test_rejects_non_finite_values() {
    let cases = [
        ("[signals]\ngreen_time = nan\n", ""),
        ("[signals]\nyellow_time = inf\n", ""),
        ("[intersection]\nroad_width = nan\n", ""),
        ("", "[vehicle]\nspeed = nan\n"),
        ("", "[vehicle]\ngap = nan\n"),
        ("", "[spawn]\ninterval = nan\n"),
        ("", "[spawn]\njitter = inf\n"),
    ];

    for (intersection, vehicles) in cases {
        assert!(
            SimulationConfig::from_toml_strs(intersection, vehicles).is_err(),
            "accepted {:?} / {:?}",
            intersection,
            vehicles
        );
    }

    let both = SimulationConfig::from_toml_strs("[signals]\ngreen_time = nan\n", "[vehicle]\nspeed = nan\n");
    assert!(both.is_err());
}
