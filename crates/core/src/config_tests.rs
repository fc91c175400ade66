use super::*;

#[test]
fn defaults_match_reference_scenario() {
    let config = SimConfig::default();
    assert_eq!(config.cars_per_direction, 30);
    assert_eq!(config.pedestrians, 5);
    assert_eq!(config.car_gap, Duration::from_millis(500));
    assert_eq!(config.pedestrian_gap, Duration::from_secs(5));
    assert!(config.validate().is_ok());
}

#[test]
fn pedestrians_cross_slower_than_cars_by_default() {
    let config = SimConfig::default();
    assert!(config.pedestrian_crossing.min > config.car_crossing.max);
}

#[test]
fn rejects_inverted_delay_range() {
    let config = SimConfig {
        car_crossing: DelayRange::new(Duration::from_secs(2), Duration::from_secs(1)),
        ..SimConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvertedDelayRange {
            stream: "car",
            min: Duration::from_secs(2),
            max: Duration::from_secs(1),
        })
    );
}

#[test]
fn rejects_zero_gap_when_entities_scheduled() {
    let config = SimConfig {
        pedestrian_gap: Duration::ZERO,
        ..SimConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroArrivalGap {
            stream: "pedestrian"
        })
    );
}

#[test]
fn zero_gap_allowed_for_empty_stream() {
    let config = SimConfig {
        pedestrians: 0,
        pedestrian_gap: Duration::ZERO,
        ..SimConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn equal_min_max_range_is_valid() {
    let config = SimConfig {
        car_crossing: DelayRange::new(Duration::from_secs(1), Duration::from_secs(1)),
        ..SimConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn durations_serialize_as_humantime() {
    let config = SimConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""car_gap":"500ms""#), "{json}");
    let back: SimConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.car_gap, config.car_gap);
}
