//! Tests for loading match configuration from disk.

use std::io::Write;
use std::time::Duration;
use strictly_duel::{MatchConfig, MatchRunner};

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
x_policy = "random"
o_policy = "sequential"
seed = 42
move_delay_ms = 0
render = false
"#
    )
    .unwrap();

    let config = MatchConfig::from_file(file.path()).expect("config parses");
    assert_eq!(config.x_policy(), "random");
    assert_eq!(config.o_policy(), "sequential");
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.move_delay(), Duration::ZERO);
    assert!(!*config.render());

    let report = MatchRunner::from_config(&config).unwrap().run().unwrap();
    assert!(report.status.is_terminal());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_chain() {
    let mut config = MatchConfig::default();
    config
        .set_x_policy("random")
        .set_seed(Some(1))
        .set_move_delay_ms(10)
        .set_render(false);
    assert_eq!(config.x_policy(), "random");
    assert_eq!(config.o_policy(), "random");
    assert_eq!(config.move_delay(), Duration::from_millis(10));
}
