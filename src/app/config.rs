use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const TEST_API_URL: &str = "https://api.test.netbanx.com/";
pub const LIVE_API_URL: &str = "https://api.netbanx.com/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Environment {
    #[default]
    Test,
    Live,
}

impl Environment {
    pub fn api_url(&self) -> &'static str {
        match self {
            Environment::Test => TEST_API_URL,
            Environment::Live => LIVE_API_URL,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = GatewayError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for Environment {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" | "sandbox" => Ok(Environment::Test),
            "live" | "production" => Ok(Environment::Live),
            other => Err(GatewayError::InvalidConfig(format!(
                "unknown environment `{other}`, expected `test` or `live`"
            ))),
        }
    }
}

/// Merchant account number and API key issued by Netbanx.
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub api_key: String,
}

impl Credentials {
    pub fn new(account_number: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            api_key: api_key.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.account_number.trim().is_empty() {
            return Err(GatewayError::InvalidConfig(
                "Netbanx account number is not set".to_string(),
            ));
        }
        // The account number is spliced into the request path.
        if !self.account_number.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(GatewayError::InvalidConfig(
                "Netbanx account number must be alphanumeric".to_string(),
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(GatewayError::InvalidConfig(
                "Netbanx API key is not set".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_number", &self.account_number)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_port: u16,
    pub environment: Environment,
    pub credentials: Credentials,
    /// Replaces the environment's base URL when set.
    pub api_url: Option<String>,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 9999,
            environment: Environment::Test,
            credentials: Credentials::default(),
            api_url: None,
            request_timeout_ms: 5000,
            connect_timeout_ms: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from named variables. Unset or empty variables take
    /// their defaults; set but unparseable ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            server_port: parse_var(&lookup, "PORT", defaults.server_port)?,
            environment: parse_var(&lookup, "NETBANX_ENVIRONMENT", defaults.environment)?,
            credentials: Credentials {
                account_number: lookup("NETBANX_ACCOUNT_NUMBER").unwrap_or_default(),
                api_key: lookup("NETBANX_API_KEY").unwrap_or_default(),
            },
            api_url: lookup("NETBANX_API_URL").filter(|v| !v.is_empty()),
            request_timeout_ms: parse_var(&lookup, "NETBANX_TIMEOUT_MS", defaults.request_timeout_ms)?,
            connect_timeout_ms: parse_var(
                &lookup,
                "NETBANX_CONNECT_TIMEOUT_MS",
                defaults.connect_timeout_ms,
            )?,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Base URL every API path is joined onto. Always ends with `/`.
    pub fn base_url(&self) -> String {
        let url = self
            .api_url
            .as_deref()
            .unwrap_or_else(|| self.environment.api_url());
        if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{url}/")
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            GatewayError::InvalidConfig(format!("{name}=`{raw}` is invalid: {e}"))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_environment_selects_host() {
        let mut config = Config::default();
        assert_eq!(config.base_url(), "https://api.test.netbanx.com/");

        config.environment = Environment::Live;
        assert_eq!(config.base_url(), "https://api.netbanx.com/");
    }

    #[test]
    fn test_api_url_override_gets_trailing_slash() {
        let config = Config {
            api_url: Some("http://127.0.0.1:8080".to_string()),
            ..Config::default()
        };
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("LIVE".parse::<Environment>().unwrap(), Environment::Live);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_credentials_validation() {
        assert!(Credentials::new("1001234567", "key").validate().is_ok());
        assert!(Credentials::new("", "key").validate().is_err());
        assert!(Credentials::new("1001234567", "  ").validate().is_err());
        assert!(Credentials::new("10/../auths", "key").validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let credentials = Credentials::new("1001234567", "devcentre322:B-qa2-0-secret");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("1001234567"));
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn test_from_file_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
environment = "live"

[credentials]
account_number = "89983472"
api_key = "user:pass"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.environment, Environment::Live);
        assert_eq!(config.credentials.account_number, "89983472");
        assert_eq!(config.credentials.api_key, "user:pass");
        assert_eq!(config.server_port, 9999);
        assert_eq!(config.request_timeout_ms, 5000);
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_from_toml_rejects_bad_environment() {
        let err = Config::from_toml("environment = \"staging\"").unwrap_err();
        assert!(matches!(err, GatewayError::ConfigParse(_)));
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(vars(&[])).unwrap();
        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.server_port, 9999);
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = Config::from_lookup(vars(&[
            ("PORT", "8080"),
            ("NETBANX_ENVIRONMENT", "production"),
            ("NETBANX_ACCOUNT_NUMBER", "89983472"),
            ("NETBANX_API_KEY", "user:pass"),
            ("NETBANX_TIMEOUT_MS", "2500"),
            ("NETBANX_API_URL", ""),
        ]))
        .unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.environment, Environment::Live);
        assert_eq!(config.credentials.account_number, "89983472");
        assert_eq!(config.request_timeout_ms, 2500);
        assert_eq!(config.connect_timeout_ms, 3000);
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_from_lookup_rejects_unknown_environment() {
        let err = Config::from_lookup(vars(&[("NETBANX_ENVIRONMENT", "prod")])).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidConfig(_)));
        assert!(err.to_string().contains("prod"));
    }

    #[test]
    fn test_from_lookup_rejects_bad_numbers() {
        assert!(matches!(
            Config::from_lookup(vars(&[("PORT", "99999")])),
            Err(GatewayError::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_lookup(vars(&[("NETBANX_TIMEOUT_MS", "5s")])),
            Err(GatewayError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_toml_accepts_same_environment_names() {
        for (raw, expected) in [
            ("test", Environment::Test),
            ("sandbox", Environment::Test),
            ("live", Environment::Live),
            ("production", Environment::Live),
            ("LIVE", Environment::Live),
        ] {
            let config = Config::from_toml(&format!("environment = \"{raw}\"")).unwrap();
            assert_eq!(config.environment, expected, "environment = {raw}");
            assert_eq!(raw.parse::<Environment>().unwrap(), expected);
        }
    }
}
