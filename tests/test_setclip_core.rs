use rpawogen::setclip::{daemon_command, is_daemon, should_clear};
use std::path::Path;

#[test]
fn test_clear_only_unmodified_content() {
    assert!(should_clear("secure_test_123", "secure_test_123"));
    assert!(!should_clear("something else", "secure_test_123"));
    assert!(!should_clear("", "secure_test_123"));
}

#[test]
fn test_empty_secret_never_clears() {
    assert!(!should_clear("", ""));
}

#[test]
fn test_test_process_is_not_daemon() {
    assert!(!is_daemon());
}

#[test]
fn test_daemon_command_keeps_secret_out_of_environment() {
    let cmd = daemon_command(Path::new("/usr/bin/rpawogen"), 7);
    let envs: Vec<(String, String)> = cmd
        .get_envs()
        .filter_map(|(k, v)| Some((k.to_str()?.to_string(), v?.to_str()?.to_string())))
        .collect();

    assert_eq!(envs.len(), 2);
    assert!(envs.contains(&("RPAWOGEN_CLIPBOARD_DAEMON".to_string(), "1".to_string())));
    assert!(envs.contains(&("RPAWOGEN_CLIPBOARD_TIMEOUT".to_string(), "7".to_string())));
    assert_eq!(cmd.get_program(), "/usr/bin/rpawogen");
}
