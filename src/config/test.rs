use matches::assert_matches;

use super::{AccelerationConfig, ConfigError};
use crate::acceleration::AccelerationEntry;
use crate::error::AccelerationError;

#[test]
fn loads_unsorted_json_sorted() {
    let json = r#"{
        "accelerations": [
            { "seconds": 6, "increment": 50 },
            { "seconds": 2, "increment": 5 },
            { "seconds": 4, "increment": 10 }
        ]
    }"#;

    let list = AccelerationConfig::from_json(json).unwrap().into_list();
    let seconds: Vec<f64> = list.iter().map(AccelerationEntry::seconds).collect();
    assert_eq!(seconds, vec![2.0, 4.0, 6.0]);
    assert_eq!(list.increment_for(5.0, 1.0), 10.0);
}

#[test]
fn missing_table_is_empty() {
    let config = AccelerationConfig::from_json("{}").unwrap();
    assert!(config.accelerations.is_empty());
    assert!(config.into_list().is_empty());
}

#[test]
fn negative_entry_fails_to_load() {
    let json = r#"{ "accelerations": [{ "seconds": -1, "increment": 5 }] }"#;
    assert_matches!(
        AccelerationConfig::from_json(json),
        Err(ConfigError::Entry(AccelerationError::InvalidEntry {
            field: "seconds",
            ..
        }))
    );
}

#[test]
fn one_bad_tier_rejects_whole_config() {
    let json = r#"{
        "accelerations": [
            { "seconds": 1, "increment": 5 },
            { "seconds": 2, "increment": -5 }
        ]
    }"#;
    assert_matches!(
        AccelerationConfig::from_json(json),
        Err(ConfigError::Entry(AccelerationError::InvalidEntry {
            field: "increment",
            ..
        }))
    );
}

#[test]
fn malformed_json_fails() {
    assert_matches!(AccelerationConfig::from_json("{ accelerations"), Err(ConfigError::Parse(_)));
    assert_matches!(
        AccelerationConfig::from_json(r#"{ "accelerations": [{ "seconds": 1 }] }"#),
        Err(ConfigError::Parse(_))
    );
}

#[test]
fn from_pairs_validates() {
    let config = AccelerationConfig::from_pairs(vec![(3.0, 1.0), (1.0, 2.0)]).unwrap();
    assert_eq!(config.accelerations.len(), 2);

    assert_matches!(
        AccelerationConfig::from_pairs(vec![(1.0, 1.0), (2.0, f64::NAN)]),
        Err(ConfigError::Entry(AccelerationError::InvalidEntry {
            field: "increment",
            ..
        }))
    );
}

#[test]
fn list_round_trips_through_json() {
    let original = AccelerationConfig::from_pairs(vec![(4.0, 8.0), (0.5, 2.0)])
        .unwrap()
        .into_list();

    let json = AccelerationConfig::from(&original).to_json().unwrap();
    let reloaded = AccelerationConfig::from_json(&json).unwrap().into_list();
    assert_eq!(reloaded, original);
}
