//! The API key used for completion requests.
//!
//! Keys live in memory only. They are never written to disk and never
//! appear in `Debug` output or log lines.

use std::fmt;

/// Where the active key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Baked in at compile time via `SPECDECK_OPENAI_API_KEY`.
    Build,
    /// `OPENAI_API_KEY` at startup.
    Environment,
    /// Typed into the credential entry during this session.
    Session,
}

/// An API key with redacted formatting.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Trimmed key, or `None` when blank.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// The configured key plus an optional session override.
///
/// A key entered during the session takes precedence over the configured
/// one; clearing the entry falls back to it.
#[derive(Clone, Default)]
pub struct SessionCredential {
    configured: Option<(ApiKey, CredentialSource)>,
    session: Option<ApiKey>,
}

impl SessionCredential {
    pub fn new(configured: Option<(ApiKey, CredentialSource)>) -> Self {
        Self {
            configured,
            session: None,
        }
    }

    /// Store (or clear, for blank input) the session key.
    pub fn set_session_key(&mut self, raw: &str) {
        self.session = ApiKey::new(raw);
        tracing::info!(present = self.session.is_some(), "session API key updated");
    }

    /// The key to use, if any.
    pub fn active(&self) -> Option<&ApiKey> {
        self.session
            .as_ref()
            .or(self.configured.as_ref().map(|(key, _)| key))
    }

    pub fn source(&self) -> Option<CredentialSource> {
        if self.session.is_some() {
            Some(CredentialSource::Session)
        } else {
            self.configured.as_ref().map(|(_, source)| *source)
        }
    }

    pub fn is_present(&self) -> bool {
        self.active().is_some()
    }

    /// True when nothing was configured, so the entry should start open.
    pub fn needs_entry_at_startup(&self) -> bool {
        self.configured.is_none()
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredential")
            .field("source", &self.source())
            .field("present", &self.is_present())
            .finish()
    }
}
