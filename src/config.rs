use std::path::Path;

use crate::ai::{Agent, EvaluatorAgent, MinimaxAgent, RandomAgent, WindowEvaluator, WindowWeights};
use crate::error::ConfigError;

/// Which move-selection strategy to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    Evaluator,
    Random,
}

/// Agent selection and reproducibility settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    pub kind: AgentKind,
    /// When set, move order is shuffled with this seed; otherwise agents
    /// try columns in ascending order.
    pub shuffle_seed: Option<u64>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        AgentSettings {
            kind: AgentKind::Minimax,
            shuffle_seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub agent: AgentSettings,
    pub weights: WindowWeights,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            agent: AgentSettings::default(),
            weights: WindowWeights::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weights.own_three <= 0.0 {
            return Err(ConfigError::Validation(
                "weights.own_three must be > 0".into(),
            ));
        }
        if self.weights.own_two <= 0.0 {
            return Err(ConfigError::Validation(
                "weights.own_two must be > 0".into(),
            ));
        }
        if self.weights.opp_three >= 0.0 {
            return Err(ConfigError::Validation(
                "weights.opp_three must be < 0".into(),
            ));
        }
        if self.weights.opp_two >= 0.0 {
            return Err(ConfigError::Validation(
                "weights.opp_two must be < 0".into(),
            ));
        }
        if self.weights.center_bonus < 0.0 {
            return Err(ConfigError::Validation(
                "weights.center_bonus must be >= 0".into(),
            ));
        }

        Ok(())
    }

    /// Build the configured agent.
    pub fn build_agent(&self) -> Box<dyn Agent> {
        match self.agent.kind {
            AgentKind::Minimax => match self.agent.shuffle_seed {
                Some(seed) => Box::new(MinimaxAgent::with_shuffle(seed)),
                None => Box::new(MinimaxAgent::new()),
            },
            AgentKind::Evaluator => {
                Box::new(EvaluatorAgent::new(Box::new(WindowEvaluator::new(
                    self.weights,
                ))))
            }
            AgentKind::Random => match self.agent.shuffle_seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[agent]
kind = "random"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.agent.kind, AgentKind::Random);
        // Other fields should be defaults
        assert_eq!(config.agent.shuffle_seed, None);
        assert!((config.weights.own_three - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.agent.kind, AgentKind::Minimax);
        assert!((config.weights.center_bonus - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_agent_kind_is_rejected() {
        let toml_str = r#"
[agent]
kind = "alphabeta"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_negative_own_three() {
        let mut config = AppConfig::default();
        config.weights.own_three = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_positive_opp_three() {
        let mut config = AppConfig::default();
        config.weights.opp_three = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_center_bonus() {
        let mut config = AppConfig::default();
        config.weights.center_bonus = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.agent.kind, AgentKind::Minimax);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[agent]
kind = "evaluator"
shuffle_seed = 99

[weights]
own_three = 25.0
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.agent.kind, AgentKind::Evaluator);
        assert_eq!(config.agent.shuffle_seed, Some(99));
        assert!((config.weights.own_three - 25.0).abs() < 1e-9);
        // Others are defaults
        assert!((config.weights.opp_three + 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_rejects_invalid_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[weights]
opp_two = 10.0
"#
        )
        .unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }

    #[test]
    fn test_build_agent_matches_kind() {
        let mut config = AppConfig::default();
        assert_eq!(config.build_agent().name(), "Minimax");

        config.agent.kind = AgentKind::Evaluator;
        assert_eq!(config.build_agent().name(), "Evaluator");

        config.agent.kind = AgentKind::Random;
        config.agent.shuffle_seed = Some(7);
        assert_eq!(config.build_agent().name(), "Random");
    }
}
