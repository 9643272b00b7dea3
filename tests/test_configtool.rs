use rpawogen::configtool::*;
use rpawogen::passgen::{CharacterClass, PassgenError};
use std::ffi::OsString;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_missing_config_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = GenConfig::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, GenConfig::default());
    assert_eq!(config.length, 12);
    assert_eq!(config.clipboard_timeout, 10);
    assert_eq!(config.enabled_classes(), CharacterClass::ALL.to_vec());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = GenConfig {
        length: 24,
        special: false,
        clipboard_timeout: 0,
        ..Default::default()
    };
    config.save_to(&path).unwrap();
    assert_eq!(GenConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "length": 30, "digits": false }"#).unwrap();

    let config = GenConfig::load_from(&path).unwrap();
    assert_eq!(config.length, 30);
    assert!(!config.digits);
    assert!(config.uppercase && config.lowercase && config.special);
    assert_eq!(
        config.enabled_classes(),
        vec![CharacterClass::Uppercase, CharacterClass::Lowercase, CharacterClass::Special]
    );
}

#[test]
fn test_malformed_config_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ length: ").unwrap();
    assert!(matches!(GenConfig::load_from(&path), Err(ConfigError::JsonError(_))));
}

#[test]
fn test_config_without_classes_gives_invalid_request() {
    let config = GenConfig {
        uppercase: false,
        lowercase: false,
        digits: false,
        special: false,
        ..Default::default()
    };
    assert!(matches!(config.to_request(), Err(PassgenError::InvalidRequest(_))));
}

#[test]
fn test_config_to_request() {
    let config = GenConfig { length: 9, uppercase: false, ..Default::default() };
    let request = config.to_request().unwrap();
    assert_eq!(request.length(), 9);
    assert!(!request.classes().contains(&CharacterClass::Uppercase));
}

#[test]
fn test_config_path_env_override() {
    let path = config_path_from(Some(OsString::from("/tmp/custom/rpawogen.json"))).unwrap();
    assert_eq!(path, PathBuf::from("/tmp/custom/rpawogen.json"));
}

#[test]
fn test_config_path_empty_env_falls_back() {
    // 空值与未设置相同
    let unset = config_path_from(None);
    let empty = config_path_from(Some(OsString::new()));
    match (unset, empty) {
        (Ok(unset), Ok(empty)) => {
            assert_eq!(unset, empty);
            assert!(unset.ends_with("rpawogen/config.json"));
        }
        (Err(ConfigError::ConfigDirError(_)), Err(ConfigError::ConfigDirError(_))) => {}
        other => panic!("inconsistent fallback: {:?}", other),
    }
}

#[test]
fn test_flags_only_switch_classes_off() {
    let config = GenConfig { digits: false, ..Default::default() };

    let request = config.to_request_with(None, true, false, false, false).unwrap();
    assert_eq!(request.length(), 12);
    assert_eq!(request.classes(), &[CharacterClass::Lowercase, CharacterClass::Special]);

    // --no-digits on an already disabled class changes nothing
    let request = config.to_request_with(None, false, false, true, false).unwrap();
    assert_eq!(
        request.classes(),
        &[CharacterClass::Uppercase, CharacterClass::Lowercase, CharacterClass::Special]
    );
}

#[test]
fn test_length_flag_overrides_config() {
    let config = GenConfig { length: 30, ..Default::default() };
    let request = config.to_request_with(Some(8), false, false, false, false).unwrap();
    assert_eq!(request.length(), 8);
    assert_eq!(request.classes(), CharacterClass::ALL.as_slice());
}

#[test]
fn test_flags_disabling_everything_is_invalid() {
    let config = GenConfig { uppercase: false, lowercase: false, ..Default::default() };
    let result = config.to_request_with(None, false, false, true, true);
    assert!(matches!(result, Err(PassgenError::InvalidRequest(_))));
}
