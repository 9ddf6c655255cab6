use serde::{Deserialize, Serialize};
use std::fs;

/// Resolved simulation defaults. Command-line flags override these; they in
/// turn come from an optional toml file and environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub num_decks: usize,
    pub cut_card_loc: f64,
    pub bet_size: f64,
    pub starting_bankroll: f64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub num_decks: ValueSource,
    pub cut_card_loc: ValueSource,
    pub bet_size: ValueSource,
    pub starting_bankroll: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            num_decks: ValueSource::Default,
            cut_card_loc: ValueSource::Default,
            bet_size: ValueSource::Default,
            starting_bankroll: ValueSource::Default,
            seed: ValueSource::Default,
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
            num_decks: 6,
            cut_card_loc: 0.75,
            bet_size: 10.0,
            starting_bankroll: 1000.0,
            seed: None,
        }
    }
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
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("PONTOON_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.num_decks {
            cfg.num_decks = v;
            sources.num_decks = ValueSource::File;
        }
        if let Some(v) = f.cut_card_loc {
            cfg.cut_card_loc = v;
            sources.cut_card_loc = ValueSource::File;
        }
        if let Some(v) = f.bet_size {
            cfg.bet_size = v;
            sources.bet_size = ValueSource::File;
        }
        if let Some(v) = f.starting_bankroll {
            cfg.starting_bankroll = v;
            sources.starting_bankroll = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("PONTOON_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(decks) = std::env::var("PONTOON_DECKS")
        && !decks.is_empty()
    {
        cfg.num_decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid deck count".into()))?;
        sources.num_decks = ValueSource::Env;
    }
    if let Ok(bet) = std::env::var("PONTOON_BET")
        && !bet.is_empty()
    {
        cfg.bet_size = bet
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet size".into()))?;
        sources.bet_size = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    num_decks: Option<usize>,
    #[serde(default)]
    cut_card_loc: Option<f64>,
    #[serde(default)]
    bet_size: Option<f64>,
    #[serde(default)]
    starting_bankroll: Option<f64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.num_decks == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: num_decks must be >= 1".into(),
        ));
    }
    if !(cfg.cut_card_loc > 0.0 && cfg.cut_card_loc <= 1.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: cut_card_loc must be in (0, 1]".into(),
        ));
    }
    if cfg.bet_size <= 0.0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bet_size must be > 0".into(),
        ));
    }
    Ok(())
}
