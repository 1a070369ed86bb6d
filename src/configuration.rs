use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub relay: RelaySettings,
    pub handler: HandlerSettings,
    pub inference: InferenceSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RelaySettings {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub function_url: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct HandlerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct InferenceSettings {
    pub endpoint: String,
    pub model_id: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_environment")]
    pub environment: String,
    // Never read from the file; filled from the environment below.
    #[serde(skip)]
    pub api_token: Option<String>,
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_environment() -> String {
    "AWS Lambda".to_string()
}

impl RelaySettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl HandlerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize our configuration reader
    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    // Try to convert the configuration values it read into
    // our Settings type
    let mut config: Settings = settings.try_deserialize()?;

    // The model runtime credential comes from the environment only. A missing
    // token surfaces as an inference fault at call time, not a startup error:
    // the managed platform provides credentials ambiently.
    config.inference.api_token = std::env::var("MODEL_API_TOKEN").ok();

    Ok(config)
}
