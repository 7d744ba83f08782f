// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Layered application configuration.
//!
//! Values are merged from the following sources, later sources taking
//! priority:
//!  1. the built-in [Default] of [Config].
//!  2. an optional TOML file named by `conf_file`.
//!  3. environment variables prefixed with `NKSTAR_` (for example
//!     `NKSTAR_N=5` or `NKSTAR_PATTERN=random`).
//!  4. command-line flags.
//!
//! Every field is an `Option` so that only flags actually given on the
//! command line override the other sources.
//!
//! A configuration file sets any of the same keys, for example:
//! ```toml
//! n = 6
//! k = 3
//! pattern = "random"
//! num_pairs = 10000
//! strategy = "sequential"
//! log_level = "debug"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use nkstar_graph::node::Node;
use nkstar_graph::params::StarParams;
use nkstar_graph::star_error;
use nkstar_graph::types::StarError;
use nkstar_traffic::strategy::Strategy;
use nkstar_traffic::traffic::TrafficPattern;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read by [Config::load].
pub const ENV_PREFIX: &str = "NKSTAR_";

#[derive(Parser, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[command(about = "Route traffic over an (n,k)-star network and report node and link loads.")]
pub struct Config {
    /// Size of the label space [default: 7]
    #[arg(short, long)]
    pub n: Option<usize>,

    /// Number of labels in each node [default: 4]
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Traffic pattern to route [default: all-to-all]
    #[arg(long, value_enum)]
    pub pattern: Option<TrafficPattern>,

    /// Number of pairs for the random pattern [default: 100000]
    #[arg(long)]
    pub num_pairs: Option<usize>,

    /// Seed for the random pattern [default: 1]
    #[arg(long)]
    pub seed: Option<u64>,

    /// How routes are spread across threads [default: parallel]
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Worker threads for the parallel strategy, 0 for one per core
    /// [default: 0]
    #[arg(long)]
    pub threads: Option<usize>,

    /// Source of a single route to print, e.g. "3,6,0,5". Must be given with
    /// `--destination`.
    #[arg(long)]
    pub source: Option<Node>,

    /// Destination of a single route to print. Must be given with `--source`.
    #[arg(long)]
    pub destination: Option<Node>,

    /// Check every route against the node model while aggregating
    /// [default: false]
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub validate: Option<bool>,

    /// Show a progress bar [default: false]
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub progress: Option<bool>,

    /// Level of log message to display [default: info]
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to an additional TOML configuration file
    #[arg(long)]
    pub conf_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: Some(7),
            k: Some(4),
            pattern: Some(TrafficPattern::default()),
            num_pairs: Some(100_000),
            seed: Some(1),
            strategy: Some(Strategy::default()),
            threads: Some(0),
            source: None,
            destination: None,
            validate: Some(false),
            progress: Some(false),
            log_level: Some("info".to_string()),
            conf_file: Some(Default::default()),
        }
    }
}

impl Config {
    /// Parse the command line and merge it with every other source.
    pub fn parse_all_sources() -> anyhow::Result<Self> {
        Self::load(Self::parse())
    }

    /// Merge `cli` (normally from [Parser::parse]) over the defaults, the
    /// configuration file and the environment.
    pub fn load(cli: Config) -> anyhow::Result<Self> {
        // The file to read may itself come from any source
        let mut config: Config = figment_env_var_merge(figment_with_defaults()).extract()?;
        config.clap_merge(&cli);

        let conf_file = config.conf_file.clone().unwrap_or_default();
        if conf_file.as_os_str().is_empty() {
            return Ok(config);
        }
        check_conf_file(&conf_file)?;

        let figment = figment_with_defaults().merge(Toml::file(&conf_file));
        let mut config: Config = figment_env_var_merge(figment).extract()?;
        config.clap_merge(&cli);
        config.conf_file = Some(conf_file);
        Ok(config)
    }

    /// Overwrite every field that was given on the command line.
    fn clap_merge(&mut self, cli: &Config) {
        macro_rules! merge {
            ($($field:ident),+) => {
                $(
                    if cli.$field.is_some() {
                        self.$field = cli.$field.clone();
                    }
                )+
            };
        }
        merge!(
            n,
            k,
            pattern,
            num_pairs,
            seed,
            strategy,
            threads,
            source,
            destination,
            validate,
            progress,
            log_level,
            conf_file
        );
    }

    /// Check the merged configuration and fill in any missing values.
    pub fn resolve(self) -> Result<Settings, StarError> {
        let defaults = Config::default();
        let n = self.n.or(defaults.n).unwrap_or_default();
        let k = self.k.or(defaults.k).unwrap_or_default();
        let params = StarParams::new(n, k)?;

        let endpoints = match (self.source, self.destination) {
            (Some(source), Some(destination)) => Some((source, destination)),
            (None, None) => None,
            _ => return star_error!("source and destination must be given together"),
        };

        Ok(Settings {
            params,
            pattern: self.pattern.unwrap_or_default(),
            num_pairs: self.num_pairs.or(defaults.num_pairs).unwrap_or_default(),
            seed: self.seed.or(defaults.seed).unwrap_or_default(),
            strategy: self.strategy.unwrap_or_default(),
            threads: self.threads.unwrap_or_default(),
            endpoints,
            validate: self.validate.unwrap_or_default(),
            progress: self.progress.unwrap_or_default(),
            log_level: self
                .log_level
                .or(defaults.log_level)
                .unwrap_or_default(),
        })
    }
}

/// A complete, checked configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub params: StarParams,
    pub pattern: TrafficPattern,
    pub num_pairs: usize,
    pub seed: u64,
    pub strategy: Strategy,
    pub threads: usize,

    /// Route just this (source, destination) pair
    pub endpoints: Option<(Node, Node)>,

    pub validate: bool,
    pub progress: bool,
    pub log_level: String,
}

fn figment_with_defaults() -> Figment {
    Figment::new().merge(Serialized::defaults(Config::default()))
}

fn figment_env_var_merge(figment: Figment) -> Figment {
    figment.merge(Env::prefixed(ENV_PREFIX))
}

fn check_conf_file(conf_file: &Path) -> Result<(), io::Error> {
    if conf_file.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{} is not a file path", conf_file.display()),
        ));
    }

    if !conf_file.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", conf_file.display()),
        ));
    }
    Ok(())
}
