//! Configuration read from the real process environment.
//!
//! These tests mutate process-wide variables, so they run serially.

use serial_test::serial;
use specdeck::assistant::CredentialSource;
use specdeck::cli::RunOptions;
use specdeck::preview::Viewer;
use specdeck::spec::SpecFormat;
use specdeck::startup::{AppConfig, BUILD_API_KEY};

const VARS: [&str; 4] = [
    "OPENAI_API_KEY",
    "SPECDECK_OPENAI_BASE_URL",
    "SPECDECK_MODEL",
    "SPECDECK_PREVIEW_PORT",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_environment_key_and_overrides() {
    clear_env();
    std::env::set_var("OPENAI_API_KEY", "sk-from-env");
    std::env::set_var("SPECDECK_MODEL", "gpt-4o-mini");
    std::env::set_var("SPECDECK_PREVIEW_PORT", "4010");

    let config = AppConfig::from_env().unwrap();
    if BUILD_API_KEY.is_none() {
        let (key, source) = config.api_key.clone().unwrap();
        assert_eq!(key.expose(), "sk-from-env");
        assert_eq!(source, CredentialSource::Environment);
    }
    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.preview_addr().port(), 4010);
    clear_env();
}

#[test]
#[serial]
fn test_bad_port_is_a_config_error() {
    clear_env();
    std::env::set_var("SPECDECK_PREVIEW_PORT", "eighty");
    let err = AppConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("SPECDECK_PREVIEW_PORT"));
    clear_env();
}

#[test]
#[serial]
fn test_cli_options_layer_on_environment() {
    clear_env();
    let options = RunOptions {
        format: Some(SpecFormat::Json),
        viewer: Some(Viewer::SwaggerUi),
        no_preview_server: true,
    };
    let config = AppConfig::from_env().unwrap().apply_cli(&options);
    assert_eq!(config.initial_format, SpecFormat::Json);
    assert_eq!(config.initial_viewer, Viewer::SwaggerUi);
    assert!(!config.enable_preview_server);
}
