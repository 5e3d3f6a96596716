use cadence_core::recurrence::{RecurrenceConfig, DEFAULT_END_DATE, DEFAULT_MAX_OCCURRENCES};
use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "cadence.json";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file holding the stored events
    pub store_path: PathBuf,
    /// Last date of a series created without `--until`
    pub default_end_date: NaiveDate,
    /// Hard cap on instances per series
    pub max_occurrences: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            default_end_date: DEFAULT_END_DATE,
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// Defaults, then `cadence.toml`, then `CADENCE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("cadence.toml"))
            .merge(Env::prefixed("CADENCE_").ignore(&["log"]))
    }

    pub fn recurrence(&self) -> RecurrenceConfig {
        RecurrenceConfig {
            default_end_date: self.default_end_date,
            max_occurrences: self.max_occurrences,
        }
    }
}
