use serde::{Deserialize, Serialize};

/// Settings for lifting plain values into selections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    /// Accept floats with no fractional part (e.g. `3.0`) as coordinates
    pub allow_integral_floats: bool,

    /// Pass zero coordinates through instead of rejecting them
    /// Only for producers trusted to emit in-bounds values
    pub allow_zero_coordinates: bool,
}

impl LiftConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient settings: integral floats and zero coordinates are accepted
    pub fn lenient() -> Self {
        Self {
            allow_integral_floats: true,
            allow_zero_coordinates: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = LiftConfig::new();
        assert!(!config.allow_integral_floats);
        assert!(!config.allow_zero_coordinates);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LiftConfig = serde_json::from_str(r#"{"allow_integral_floats": true}"#).unwrap();
        assert!(config.allow_integral_floats);
        assert!(!config.allow_zero_coordinates);
    }
}
