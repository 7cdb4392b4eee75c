//! TOML configuration for the numen engine.
//!
//! ```toml
//! log_filter = "numen_search=debug"
//! letter_system = "chaldean"
//!
//! [scorer.phone]
//! penalty_per_step = 10
//! complementary_pairs = [[1, 9], [2, 8]]
//!
//! [lucky]
//! min_score = 40
//! best_count = 3
//! search_days = 60
//! ```
//!
//! Every key is optional. Missing scorer keys keep the built-in value for
//! that adapter.

mod error;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use numen_base::{LetterSystem, ScorerConfig};
use numen_search::{DEFAULT_SEARCH_DAYS, LuckyConfig};
use serde::Deserialize;

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "NUMEN_CONFIG";

/// Filter used when neither the environment nor the file sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumenConfig {
    pub scorer: ScorerOverrides,
    pub lucky: LuckySection,
    /// `tracing_subscriber` filter directive.
    pub log_filter: Option<String>,
    /// Alphabet for the alternate name number.
    pub letter_system: LetterSystem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerOverrides {
    pub address: Option<ScorerSection>,
    pub phone: Option<ScorerSection>,
    pub plate: Option<ScorerSection>,
}

/// Partial [`ScorerConfig`]; unset keys keep the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScorerSection {
    pub penalty_per_step: Option<u32>,
    pub complementary_bonus: Option<u32>,
    pub complementary_pairs: Option<Vec<[u32; 2]>>,
}

impl ScorerSection {
    pub fn apply(&self, mut base: ScorerConfig) -> ScorerConfig {
        if let Some(p) = self.penalty_per_step {
            base.penalty_per_step = p;
        }
        if let Some(b) = self.complementary_bonus {
            base.complementary_bonus = b;
        }
        if let Some(pairs) = &self.complementary_pairs {
            base.complementary_pairs = pairs.clone();
        }
        base
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LuckySection {
    pub min_score: u32,
    pub best_count: usize,
    /// Horizon for next-lucky-date lookups.
    pub search_days: u64,
}

impl Default for LuckySection {
    fn default() -> Self {
        let lucky = LuckyConfig::default();
        Self {
            min_score: lucky.min_score,
            best_count: lucky.best_count,
            search_days: DEFAULT_SEARCH_DAYS,
        }
    }
}

fn merged(section: Option<&ScorerSection>, base: ScorerConfig) -> ScorerConfig {
    match section {
        Some(s) => s.apply(base),
        None => base,
    }
}

impl NumenConfig {
    /// Load configuration.
    ///
    /// Looks at `explicit`, then `$NUMEN_CONFIG`. With neither set the
    /// defaults are returned. A path that was named but cannot be read is an
    /// error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::resolve_path(explicit, std::env::var_os(CONFIG_ENV)) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Pick the file to load: an explicit path wins over the environment.
    /// An empty environment value counts as unset.
    pub fn resolve_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        let config = Self::parse(path, &content)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate TOML text; `path` is only used in errors.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config: Self = match toml::from_str(content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let scorers = [
            ("address", self.address_scorer()),
            ("phone", self.phone_scorer()),
            ("plate", self.plate_scorer()),
        ];
        for (section, scorer) in scorers {
            scorer.validate().map_err(|source| ConfigError::Scorer {
                path: path.to_path_buf(),
                section,
                source,
            })?;
        }
        self.lucky_config()
            .validate()
            .map_err(|reason| ConfigError::Lucky {
                path: path.to_path_buf(),
                reason,
            })
    }

    pub fn address_scorer(&self) -> ScorerConfig {
        merged(self.scorer.address.as_ref(), ScorerConfig::address())
    }

    pub fn phone_scorer(&self) -> ScorerConfig {
        merged(self.scorer.phone.as_ref(), ScorerConfig::phone())
    }

    pub fn plate_scorer(&self) -> ScorerConfig {
        merged(self.scorer.plate.as_ref(), ScorerConfig::plate())
    }

    pub fn lucky_config(&self) -> LuckyConfig {
        LuckyConfig {
            min_score: self.lucky.min_score,
            best_count: self.lucky.best_count,
        }
    }

    pub fn search_days(&self) -> u64 {
        self.lucky.search_days
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        let config: NumenConfig = toml::from_str("").unwrap();
        assert_eq!(config, NumenConfig::default());
        assert_eq!(config.address_scorer(), ScorerConfig::address());
        assert_eq!(config.lucky_config(), LuckyConfig::default());
        assert_eq!(config.search_days(), 30);
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.letter_system, LetterSystem::Pythagorean);
    }

    #[test]
    fn partial_scorer_override() {
        let config: NumenConfig = toml::from_str(
            r#"
            [scorer.phone]
            penalty_per_step = 10
            "#,
        )
        .unwrap();
        let phone = config.phone_scorer();
        assert_eq!(phone.penalty_per_step, 10);
        assert_eq!(phone.complementary_bonus, 15);
        assert_eq!(
            phone.complementary_pairs,
            ScorerConfig::phone().complementary_pairs
        );
        assert_eq!(config.plate_scorer(), ScorerConfig::plate());
    }

    #[test]
    fn explicit_path_beats_env() {
        let explicit = Path::new("/etc/numen.toml");
        assert_eq!(
            NumenConfig::resolve_path(Some(explicit), Some(OsString::from("/tmp/other.toml"))),
            Some(PathBuf::from("/etc/numen.toml"))
        );
        assert_eq!(
            NumenConfig::resolve_path(None, Some(OsString::from("/tmp/other.toml"))),
            Some(PathBuf::from("/tmp/other.toml"))
        );
        assert_eq!(NumenConfig::resolve_path(None, Some(OsString::new())), None);
        assert_eq!(NumenConfig::resolve_path(None, None), None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = NumenConfig::parse(Path::new("x.toml"), "colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), Path::new("x.toml"));
    }
}
