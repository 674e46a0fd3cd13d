use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8787, shutdown_timeout: 30 }
    }
}

/// Upstream chat-completion provider settings.
///
/// `api_key` is never read from the YAML file; it is filled from the
/// environment variable named by `api_key_env` when the config is loaded.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: default_api_key_env(),
            api_key: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_true")]
    pub supports_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "https://xfz-chatbot-frontend.pages.dev".to_string(),
                "api.yideng.shop".to_string(),
            ],
            allowed_headers: vec![
                "Content-Type".to_string(),
                "Authorization".to_string(),
                "Accept".to_string(),
            ],
            allowed_methods: vec!["POST".to_string(), "GET".to_string(), "OPTIONS".to_string()],
            supports_credentials: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphqlConfig {
    /// Serve the GraphiQL explorer on `GET /`.
    #[serde(default = "default_true")]
    pub graphiql: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self { graphiql: true }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig,
}

impl AppConfig {
    pub fn load(config_path: &str) -> Result<Self, ConfigError> {
        let config_file = std::fs::File::open(config_path)
            .map_err(|source| ConfigError::Open { path: config_path.to_string(), source })?;
        let mut config: Self = serde_yaml::from_reader(config_file)
            .map_err(|source| ConfigError::Parse { path: config_path.to_string(), source })?;
        config.provider.api_key = read_api_key(&config.provider.api_key_env);
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(content)?;
        config.provider.api_key = read_api_key(&config.provider.api_key_env);
        Ok(config)
    }
}

// An empty value counts as unset; the provider then rejects the call.
fn read_api_key(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|key| !key.trim().is_empty())
}
