//! Application configuration.
//!
//! Values come from the environment, then CLI flags are layered on top.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::assistant::{ApiKey, CredentialSource, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::cli::RunOptions;
use crate::error::{StudioError, StudioResult};
use crate::preview::Viewer;
use crate::spec::SpecFormat;

/// Key baked in at build time, if the builder set one.
pub const BUILD_API_KEY: Option<&str> = option_env!("SPECDECK_OPENAI_API_KEY");

/// Runtime configuration for a session.
///
/// # Example
///
/// ```ignore
/// use specdeck::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_model("gpt-4o-mini")
///     .with_preview_port(8088);
/// ```
#[derive(Clone)]
pub struct AppConfig {
    /// Configured key and where it came from
    pub api_key: Option<(ApiKey, CredentialSource)>,
    /// Chat completions base URL (without `/chat/completions`)
    pub api_base_url: String,
    /// Model name sent with every request
    pub model: String,
    /// Preview server port (0 = ephemeral)
    pub preview_port: u16,
    /// Start the preview server
    pub enable_preview_server: bool,
    pub initial_format: SpecFormat,
    pub initial_viewer: Viewer,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key_source", &self.api_key.as_ref().map(|(_, s)| *s))
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("preview_port", &self.preview_port)
            .field("enable_preview_server", &self.enable_preview_server)
            .field("initial_format", &self.initial_format)
            .field("initial_viewer", &self.initial_viewer)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            preview_port: 0,
            enable_preview_server: true,
            initial_format: SpecFormat::default(),
            initial_viewer: Viewer::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, raw: &str, source: CredentialSource) -> Self {
        self.api_key = ApiKey::new(raw).map(|key| (key, source));
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_preview_port(mut self, port: u16) -> Self {
        self.preview_port = port;
        self
    }

    pub fn with_enable_preview_server(mut self, enable: bool) -> Self {
        self.enable_preview_server = enable;
        self
    }

    pub fn with_initial_format(mut self, format: SpecFormat) -> Self {
        self.initial_format = format;
        self
    }

    pub fn with_initial_viewer(mut self, viewer: Viewer) -> Self {
        self.initial_viewer = viewer;
        self
    }

    /// Loopback address for the preview server.
    pub fn preview_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), self.preview_port)
    }

    /// Read the process environment.
    pub fn from_env() -> StudioResult<Self> {
        Self::from_lookup(BUILD_API_KEY, |key| std::env::var(key).ok())
    }

    /// Build from a build-time key and an arbitrary variable lookup.
    ///
    /// The build-time key wins over `OPENAI_API_KEY`. Blank values count as
    /// unset.
    pub fn from_lookup(
        build_key: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> StudioResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = build_key
            .and_then(ApiKey::new)
            .map(|key| (key, CredentialSource::Build))
            .or_else(|| {
                var("OPENAI_API_KEY")
                    .and_then(ApiKey::new)
                    .map(|key| (key, CredentialSource::Environment))
            });

        if let Some(url) = var("SPECDECK_OPENAI_BASE_URL") {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(StudioError::config(
                    "SPECDECK_OPENAI_BASE_URL",
                    format!("'{}' is not an http(s) URL", url),
                ));
            }
            config.api_base_url = url.to_string();
        }
        if let Some(model) = var("SPECDECK_MODEL") {
            config.model = model.trim().to_string();
        }
        if let Some(port) = var("SPECDECK_PREVIEW_PORT") {
            config.preview_port = port.trim().parse().map_err(|_| {
                StudioError::config(
                    "SPECDECK_PREVIEW_PORT",
                    format!("'{}' is not a port number", port),
                )
            })?;
        }
        Ok(config)
    }

    /// Layer CLI options on top.
    pub fn apply_cli(mut self, options: &RunOptions) -> Self {
        if let Some(format) = options.format {
            self.initial_format = format;
        }
        if let Some(viewer) = options.viewer {
            self.initial_viewer = viewer;
        }
        if options.no_preview_server {
            self.enable_preview_server = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.preview_port, 0);
        assert!(config.enable_preview_server);
        assert_eq!(config.initial_format, SpecFormat::Yaml);
        assert_eq!(config.initial_viewer, Viewer::Redoc);
    }

    #[test]
    fn test_app_config_builder() {
        let config = AppConfig::default()
            .with_model("gpt-4o-mini")
            .with_api_base_url("http://localhost:8080/v1")
            .with_preview_port(8088)
            .with_enable_preview_server(false)
            .with_api_key("sk-x", CredentialSource::Session);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.api_base_url, "http://localhost:8080/v1");
        assert_eq!(config.preview_addr().to_string(), "127.0.0.1:8088");
        assert!(!config.enable_preview_server);
        assert_eq!(config.api_key.unwrap().1, CredentialSource::Session);
    }

    #[test]
    fn test_build_key_wins() {
        let config =
            AppConfig::from_lookup(Some("sk-build"), lookup(&[("OPENAI_API_KEY", "sk-env")]))
                .unwrap();
        let (key, source) = config.api_key.unwrap();
        assert_eq!(key.expose(), "sk-build");
        assert_eq!(source, CredentialSource::Build);
    }

    #[test]
    fn test_env_key_and_overrides() {
        let config = AppConfig::from_lookup(
            None,
            lookup(&[
                ("OPENAI_API_KEY", "sk-env"),
                ("SPECDECK_OPENAI_BASE_URL", "http://localhost:9000/v1"),
                ("SPECDECK_MODEL", "local-model"),
                ("SPECDECK_PREVIEW_PORT", "8123"),
            ]),
        )
        .unwrap();
        assert_eq!(config.api_key.unwrap().1, CredentialSource::Environment);
        assert_eq!(config.api_base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "local-model");
        assert_eq!(config.preview_port, 8123);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = AppConfig::from_lookup(
            Some(""),
            lookup(&[("OPENAI_API_KEY", "  "), ("SPECDECK_MODEL", "")]),
        )
        .unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(None, lookup(&[("SPECDECK_PREVIEW_PORT", "http")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG");
        assert!(AppConfig::from_lookup(None, lookup(&[("SPECDECK_OPENAI_BASE_URL", "ftp://x")]))
            .is_err());
    }

    #[test]
    fn test_apply_cli() {
        let config = AppConfig::default().apply_cli(&RunOptions {
            format: Some(SpecFormat::Json),
            viewer: Some(Viewer::RapiDoc),
            no_preview_server: true,
        });
        assert_eq!(config.initial_format, SpecFormat::Json);
        assert_eq!(config.initial_viewer, Viewer::RapiDoc);
        assert!(!config.enable_preview_server);
    }

    #[test]
    fn test_debug_hides_key() {
        let config = AppConfig::default().with_api_key("sk-hidden", CredentialSource::Environment);
        assert!(!format!("{:?}", config).contains("sk-hidden"));
    }
}
