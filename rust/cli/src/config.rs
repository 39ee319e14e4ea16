use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_PLAYER: &str = "Player";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub player_name: String,
    pub seed: Option<u64>,
    /// JSONL file settled rounds are appended to
    pub history_path: Option<String>,
    /// Print the play-by-play after each round
    pub show_history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub player_name: ValueSource,
    pub seed: ValueSource,
    pub history_path: ValueSource,
    pub show_history: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            player_name: ValueSource::Default,
            seed: ValueSource::Default,
            history_path: ValueSource::Default,
            show_history: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER.into(),
            seed: None,
            history_path: None,
            show_history: false,
        }
    }
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub player_name: Option<String>,
    pub seed: Option<u64>,
    pub history_path: Option<String>,
    pub show_history: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BLACKJACK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.history_path {
            cfg.history_path = Some(v);
            sources.history_path = ValueSource::File;
        }
        if let Some(v) = f.show_history {
            cfg.show_history = v;
            sources.show_history = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("BLACKJACK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(name) = std::env::var("BLACKJACK_PLAYER")
        && !name.is_empty()
    {
        cfg.player_name = name;
        sources.player_name = ValueSource::Env;
    }
    if let Ok(path) = std::env::var("BLACKJACK_HISTORY")
        && !path.is_empty()
    {
        cfg.history_path = Some(path);
        sources.history_path = ValueSource::Env;
    }
    if let Ok(show) = std::env::var("BLACKJACK_SHOW_HISTORY")
        && !show.is_empty()
    {
        cfg.show_history = parse_bool(&show)
            .ok_or_else(|| ConfigError::Invalid("Invalid show_history".into()))?;
        sources.show_history = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Full resolution: defaults, then file, then environment, then `overrides`.
pub fn resolve(overrides: Overrides) -> Result<ConfigResolved, ConfigError> {
    let ConfigResolved {
        mut config,
        mut sources,
    } = load_with_sources()?;
    if let Some(name) = overrides.player_name {
        config.player_name = name;
        sources.player_name = ValueSource::Cli;
    }
    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
        sources.seed = ValueSource::Cli;
    }
    if let Some(path) = overrides.history_path {
        config.history_path = Some(path);
        sources.history_path = ValueSource::Cli;
    }
    if overrides.show_history {
        config.show_history = true;
        sources.show_history = ValueSource::Cli;
    }
    validate(&config)?;
    Ok(ConfigResolved { config, sources })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    history_path: Option<String>,
    #[serde(default)]
    show_history: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player_name must not be blank".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
