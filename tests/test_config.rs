// Tests for configuration loading and validation.

use std::io::Write;

use mind::{MindConfig, DEFAULT_MOMENTUM, DEFAULT_WEIGHT_RANGE};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"{
  "seed": 42,
  "momentum": 0.05,
  "weight_range": [-0.1, 0.1],
  "output_weight_range": [-2.0, 2.0]
}"#,
    );

    let config = MindConfig::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.momentum, 0.05);
    assert_eq!(config.weight_range, (-0.1, 0.1));
    assert_eq!(config.output_weight_range, Some((-2.0, 2.0)));
}

#[test]
fn test_load_partial_config_fills_defaults() {
    let file = write_config(r#"{ "seed": 7 }"#);

    let config = MindConfig::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.momentum, DEFAULT_MOMENTUM);
    assert_eq!(config.weight_range, DEFAULT_WEIGHT_RANGE);
    assert_eq!(config.output_weight_range, None);
}

#[test]
fn test_load_rejects_invalid_json() {
    let file = write_config("{ not json");
    assert!(MindConfig::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_load_rejects_missing_file() {
    assert!(MindConfig::from_file("/definitely/not/a/config.json").is_err());
}

#[test]
fn test_load_rejects_inverted_weight_range() {
    let file = write_config(r#"{ "weight_range": [0.2, -0.2] }"#);
    let result = MindConfig::from_file(file.path().to_str().unwrap());

    assert!(result.is_err());
    let message = result.err().unwrap().to_string();
    assert!(message.contains("weight_range"));
}

#[test]
fn test_load_rejects_negative_momentum() {
    let file = write_config(r#"{ "momentum": -0.01 }"#);
    let result = MindConfig::from_file(file.path().to_str().unwrap());

    assert!(result.is_err());
    let message = result.err().unwrap().to_string();
    assert!(message.contains("momentum"));
}

#[test]
fn test_load_rejects_inverted_output_range() {
    let file = write_config(r#"{ "output_weight_range": [2.0, -2.0] }"#);
    assert!(MindConfig::from_file(file.path().to_str().unwrap()).is_err());
}
