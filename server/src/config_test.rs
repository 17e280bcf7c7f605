use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.images_dir.ends_with("images"));
}

#[test]
fn port_is_parsed() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn port_whitespace_is_trimmed() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".into() });
}

#[test]
fn zero_and_overflowing_ports_are_rejected() {
    for raw in ["0", "65536", "-1"] {
        let result = ServerConfig::from_lookup(lookup(&[("PORT", raw)]));
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })), "{raw}");
    }
}

#[test]
fn images_dir_override() {
    let config = ServerConfig::from_lookup(lookup(&[("IMAGES_DIR", "/srv/panels")])).unwrap();
    assert_eq!(config.images_dir, PathBuf::from("/srv/panels"));
}

#[test]
fn empty_images_dir_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("IMAGES_DIR", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyImagesDir);
}

#[test]
fn invalid_port_message_names_value() {
    let err = ConfigError::InvalidPort { value: "abc".into() };
    assert!(err.to_string().contains("\"abc\""));
}
