use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.gowinston.ai";

/// Winston AI credential. The value is never printed by `Debug`.
#[derive(Clone, Default)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty keys and keys containing "api" (any case) are treated as
    /// placeholders left in a config file rather than real credentials.
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty() || self.0.to_lowercase().contains("api")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiKey(<empty>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

/// Process-wide settings, resolved once by the CLI and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: ApiKey,
    pub base_url: String,
}

impl Settings {
    pub fn new(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
