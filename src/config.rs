use serde::Deserialize;

/// Default address of the remote hashing service
pub const DEFAULT_SERVICE_ENDPOINT: &str = "http://pythia.cornelltech.io";

/// Default name of the credential attribute on the host record
pub const DEFAULT_FIELD_NAME: &str = "password";

/// Configuration consumed at attach time, immutable afterwards.
///
/// Deserializable so hosts can embed it in their own configuration files;
/// omitted keys fall back to the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub service_endpoint: String,
    pub credential_field_name: String,
}

impl CredentialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.service_endpoint = endpoint.into();
        self
    }

    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.credential_field_name = name.into();
        self
    }
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            service_endpoint: DEFAULT_SERVICE_ENDPOINT.to_string(),
            credential_field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CredentialConfig::default();
        assert_eq!(config.service_endpoint, "http://pythia.cornelltech.io");
        assert_eq!(config.credential_field_name, "password");
    }

    #[test]
    fn builders_override_defaults() {
        let config = CredentialConfig::new()
            .with_endpoint("http://localhost:9000")
            .with_field_name("secret");
        assert_eq!(config.service_endpoint, "http://localhost:9000");
        assert_eq!(config.credential_field_name, "secret");
    }

    #[test]
    fn partial_config_file_falls_back_to_defaults() {
        let config: CredentialConfig =
            serde_json::from_str(r#"{"credential_field_name": "passphrase"}"#).unwrap();
        assert_eq!(config.credential_field_name, "passphrase");
        assert_eq!(config.service_endpoint, DEFAULT_SERVICE_ENDPOINT);
    }
}
