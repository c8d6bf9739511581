use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cli::Args;

pub const DEFAULT_INPUT: &str = "input.txt";

/// Settings read from a JSON config file. Anything given on the command line wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,

    /// Overrides the generation count from the seed file.
    pub generations: Option<i64>,

    pub log_level: Option<LevelFilter>,
    pub summary: bool,
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let config_serialized = fs::read(path)
            .with_context(|| format!("Couldn't read config {}", path.display()))?;
        let config = serde_json::from_slice(&config_serialized)
            .with_context(|| format!("Couldn't deserialize config {}", path.display()))?;

        Ok(config)
    }
}

/// The final settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub generations: Option<i64>,
    pub log_level: LevelFilter,
    pub summary: bool,
}

impl Settings {
    pub fn resolve(args: Args, config: Config) -> Self {
        let log_level = match args.verbose {
            0 => config.log_level.unwrap_or(LevelFilter::Warn),
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Self {
            input: args
                .input
                .or(config.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: args.output.or(config.output),
            generations: args.generations.or(config.generations),
            log_level,
            summary: args.summary || config.summary,
        }
    }
}
