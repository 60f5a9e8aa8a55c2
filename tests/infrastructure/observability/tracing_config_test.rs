use jobboard::infrastructure::observability::TracingConfig;

#[test]
fn given_configured_level_when_creating_config_then_directives_include_crate_targets() {
    let config = TracingConfig::new("test", "warn", true);

    assert_eq!(config.environment, "test");
    assert!(config.json_format);
    assert_eq!(
        config.default_directives,
        "warn,jobboard=debug,tower_http=debug"
    );
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}
