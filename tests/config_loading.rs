// tests/config_loading.rs

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use cmdstatus::config::{ConfigOverrides, IndicatorConfig, load_and_validate, load_effective};
use cmdstatus::errors::CmdStatusError;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn loads_command_and_interval() {
    let file = config_file(
        r#"
[indicator]
command = "/home/me/bin/weather.sh"
interval = 300
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg, IndicatorConfig::new("/home/me/bin/weather.sh", 300));
}

#[test]
fn interval_defaults_to_fifteen_minutes() {
    let file = config_file(
        r#"
[indicator]
command = "/home/me/bin/weather.sh"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.interval_secs, 900);
}

#[test]
fn non_positive_interval_is_rejected_with_user_message() {
    let file = config_file(
        r#"
[indicator]
command = "/home/me/bin/weather.sh"
interval = -10
"#,
    );

    match load_and_validate(file.path()) {
        Err(e @ CmdStatusError::InvalidInterval(_)) => {
            assert_eq!(
                e.to_string(),
                "Invalid interval value: Please enter a positive number"
            );
        }
        Err(e) => panic!("Expected InvalidInterval, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn non_numeric_interval_is_a_toml_error() {
    let file = config_file(
        r#"
[indicator]
command = "/home/me/bin/weather.sh"
interval = "soon"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(CmdStatusError::TomlError(_))
    ));
}

#[test]
fn cli_overrides_win_over_the_file() {
    let file = config_file(
        r#"
[indicator]
command = "/home/me/bin/weather.sh"
interval = 300
"#,
    );
    let overrides = ConfigOverrides {
        command: Some("/usr/local/bin/battery.sh".to_string()),
        interval: Some(30),
    };

    let cfg = load_effective(Some(file.path()), &overrides).unwrap();
    assert_eq!(cfg, IndicatorConfig::new("/usr/local/bin/battery.sh", 30));
}

#[test]
fn missing_explicit_file_is_an_io_error() {
    let result = load_effective(
        Some(Path::new("/definitely/not/here/Cmdstatus.toml")),
        &ConfigOverrides::default(),
    );
    assert!(matches!(result, Err(CmdStatusError::IoError(_))));
}

#[test]
fn command_is_required() {
    let file = config_file("[indicator]\ninterval = 60\n");

    match load_and_validate(file.path()) {
        Err(CmdStatusError::ConfigError(msg)) => assert!(msg.contains("command")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}
