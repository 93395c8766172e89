//! Compiler settings forwarded to the external toolchain.

use serde::{Deserialize, Serialize};

/// Contract-language compiler selection and flags.
///
/// Interpreted only by the external compiler; nothing here changes how the
/// deployment itself behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerSettings {
    /// Semantic version of the compiler.
    #[serde(default = "default_version")]
    pub version: String,
    /// Bytecode optimizer flags.
    #[serde(default)]
    pub optimizer: OptimizerSettings,
}

fn default_version() -> String {
    "0.8.12".to_string()
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            optimizer: OptimizerSettings::default(),
        }
    }
}

/// Optimizer flags. `runs` is only meaningful when `enabled` is true.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptimizerSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_runs")]
    pub runs: u32,
}

fn default_enabled() -> bool {
    true
}

fn default_runs() -> u32 {
    1
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            runs: default_runs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_project_settings() {
        let settings = CompilerSettings::default();
        assert_eq!(settings.version, "0.8.12");
        assert!(settings.optimizer.enabled);
        assert_eq!(settings.optimizer.runs, 1);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: CompilerSettings = toml::from_str(
            r#"
            version = "0.8.20"

            [optimizer]
            runs = 200
            "#,
        )
        .unwrap();
        assert_eq!(settings.version, "0.8.20");
        assert!(settings.optimizer.enabled);
        assert_eq!(settings.optimizer.runs, 200);
    }
}
