use std::path::{Path, PathBuf};

use numen_base::NumerologyError;
use thiserror::Error;

/// Failure to load a configuration file. Every variant carries the path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid [scorer.{section}] in {}: {source}", path.display())]
    Scorer {
        path: PathBuf,
        section: &'static str,
        #[source]
        source: NumerologyError,
    },
    #[error("invalid [lucky] in {}: {reason}", path.display())]
    Lucky { path: PathBuf, reason: &'static str },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Scorer { path, .. }
            | ConfigError::Lucky { path, .. } => path,
        }
    }
}
