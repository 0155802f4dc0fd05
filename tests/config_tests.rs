use notequill::config::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "default-dark");
    assert!(config.enable_mouse);
    assert_eq!(config.data_file, None);
}

#[test]
fn test_deserialize_full_config() {
    let toml_str = r#"
        theme = "gruvbox-dark"
        enable_mouse = false
        data_file = "/tmp/board.json"
    "#;

    let config: Config = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.theme, "gruvbox-dark");
    assert!(!config.enable_mouse);
    assert_eq!(config.data_file.as_deref(), Some("/tmp/board.json"));
}

#[test]
fn test_deserialize_partial_config() {
    // Only specify some fields; others should use defaults
    let toml_str = r#"
        theme = "default-light"
    "#;

    let config: Config = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.theme, "default-light");
    assert!(config.enable_mouse);
    assert_eq!(config.data_file, None);
}

#[test]
fn test_deserialize_empty_config() {
    let config: Config = toml::from_str("").expect("Failed to deserialize config");

    assert_eq!(config.theme, "default-dark");
    assert!(config.enable_mouse);
}

#[test]
fn test_roundtrip_serialization() {
    let original = Config {
        theme: "default-light".to_string(),
        enable_mouse: false,
        data_file: Some("/home/user/notes/board.json".to_string()),
    };

    let toml_str = toml::to_string(&original).expect("Failed to serialize");
    let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");

    assert_eq!(original.theme, deserialized.theme);
    assert_eq!(original.enable_mouse, deserialized.enable_mouse);
    assert_eq!(original.data_file, deserialized.data_file);
}
