//! Benchmark configuration.

use std::path::Path;
use std::path::PathBuf;

use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Serialized;
use figment::providers::Toml;
use figment::Figment;
use serde::Deserialize;
use serde::Serialize;
use tracing::level_filters::LevelFilter;

/// The default configuration file, looked up in the working directory.

pub const CONFIG_FILE: &str = "wordmap.toml";

/// Prefix of the environment variables that override the configuration.

pub const ENV_PREFIX: &str = "WORDMAP_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
  /// Text file the benchmarks tokenize.
  pub path: PathBuf,
}

impl Default for CorpusConfig {
  fn default() -> Self {
    return Self { path: PathBuf::from("data/kinglear.txt") };
  }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LogLevel {
  TRACE,
  DEBUG,
  INFO,
  WARN,
  ERROR,
}

impl From<LogLevel> for LevelFilter {
  fn from(val: LogLevel) -> Self {
    return match val {
      LogLevel::TRACE => LevelFilter::TRACE,
      LogLevel::DEBUG => LevelFilter::DEBUG,
      LogLevel::INFO => LevelFilter::INFO,
      LogLevel::WARN => LevelFilter::WARN,
      LogLevel::ERROR => LevelFilter::ERROR,
    };
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
  pub level: LogLevel,
}

impl Default for LogConfig {
  fn default() -> Self {
    return Self { level: LogLevel::WARN };
  }
}

/// Top-level benchmark configuration.
///
/// Loaded with the following precedence (lowest to highest):
/// 1) Built-in defaults
/// 2) Optional config file (if present)
/// 3) Environment variables prefixed with [`ENV_PREFIX`], with `_`
///    separating nested keys (e.g. `WORDMAP_CORPUS_PATH`)

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchConfig {
  pub corpus: CorpusConfig,
  pub logger: LogConfig,
}

impl BenchConfig {
  pub fn load(config_path: &Path) -> Result<Self, figment::Error> {
    let mut figment = Figment::from(Serialized::defaults(BenchConfig::default()));

    if config_path.exists() {
      figment = figment.merge(Toml::file(config_path));
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("_"));

    return figment.extract();
  }
}
