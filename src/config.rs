use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

use crate::source::Limits;

const CONFIG_FILE: &str = "resume_parser";
const ENV_PREFIX: &str = "RESUME";

/// Runtime settings: built-in defaults, then `resume_parser.toml` if present,
/// then `RESUME_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub allowed_extensions: Vec<String>,
    pub max_file_bytes: u64,
    pub pretty: bool,
    pub log_level: String,
    pub batch_chunk: usize,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(
            File::with_name(CONFIG_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn from_sources<F>(file: F, env: Environment) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("allowed_extensions", vec!["pdf", "txt"])?
            .set_default("max_file_bytes", 10 * 1024 * 1024)?
            .set_default("pretty", true)?
            .set_default("log_level", "info")?
            .set_default("batch_chunk", 500)?
            .add_source(file)
            .add_source(
                env.try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_extensions"),
            )
            .build()?
            .try_deserialize()
    }

    pub fn limits(&self) -> Limits {
        Limits {
            allowed_extensions: self.allowed_extensions.clone(),
            max_file_bytes: self.max_file_bytes,
        }
    }
}

// ── Tests ──
