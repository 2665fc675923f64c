use serde::{Deserialize, Serialize};

/// Configuration for the small cancellation checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// The piece ratio search stops and reports 1 once a ratio reaches `1/lambda`
    pub lambda: u32,

    /// Maximum number of recursive steps in the piece-count search
    pub max_steps: u64,

    /// Maximum recursion depth of the piece-count search
    pub max_depth: usize,

    /// Remember tilings of already-seen suffixes during the piece-count search
    pub memoize: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lambda: 1,
            max_steps: 50_000_000,
            max_depth: 4096,
            memoize: true,
        }
    }
}

impl AnalysisConfig {
    /// No practical limit on the search
    pub fn exhaustive() -> Self {
        Self {
            max_steps: u64::MAX,
            max_depth: usize::MAX,
            ..Default::default()
        }
    }

    /// Small budget for interactive use
    pub fn quick() -> Self {
        Self {
            max_steps: 200_000,
            max_depth: 512,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.lambda == 0 {
            return Err("lambda must be > 0".to_string());
        }

        if self.max_steps == 0 {
            return Err("max_steps must be > 0".to_string());
        }

        if self.max_depth == 0 {
            return Err("max_depth must be > 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.lambda, 1);
        assert!(config.validate().is_ok());
        assert!(AnalysisConfig::exhaustive().validate().is_ok());
        assert!(AnalysisConfig::quick().validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let config = AnalysisConfig {
            lambda: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("lambda"));

        let config = AnalysisConfig {
            max_steps: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AnalysisConfig = toml::from_str("lambda = 6\nmemoize = false\n").unwrap();
        assert_eq!(config.lambda, 6);
        assert!(!config.memoize);
        assert_eq!(config.max_depth, AnalysisConfig::default().max_depth);
    }
}
