//! Rule configuration for `csst.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error.rs    # ConfigError, ConfigDiagnostics
//! ├── rule.rs     # [rules.*] kinds
//! ├── util.rs     # config file discovery
//! └── mod.rs      # CsstConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                         |
//! |---------------|-------------------------------------------------|
//! | `[rules.*]`   | Named transforms (map, toggle, cardinality, range) |
//! | `[pipelines]` | Named stage lists, applied left to right        |

mod error;
mod rule;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use rule::{CardinalityStyle, RangeBound, RuleConfig};
pub use util::{find_config_file, find_config_file_from};

use crate::pipeline::Pipeline;
use crate::transform::Transform;
use crate::value::Value;
use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name.
pub const CONFIG_FILE: &str = "csst.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing csst.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsstConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Named rules
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,

    /// Named pipelines, each a list of rule names
    #[serde(default)]
    pub pipelines: BTreeMap<String, Vec<String>>,
}

impl CsstConfig {
    /// Locate and load `config_name`, searching upward from cwd.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        let path = find_config_file(config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;
        Self::from_path(&path)
    }

    /// Parse configuration from TOML string and validate it
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, Path::new(CONFIG_FILE));
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        config.config_path = path.to_path_buf();
        debug!(
            "config";
            "loaded {} rule(s), {} pipeline(s) from {}",
            config.rules.len(),
            config.pipelines.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Validate all rules and pipelines, collecting every problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        for (name, rule) in &self.rules {
            rule.validate(name, &mut diag);
        }

        for (name, stages) in &self.pipelines {
            let field = format!("pipelines.{name}");
            if self.rules.contains_key(name) {
                diag.error_with_hint(
                    &field,
                    format!("`{name}` is both a rule and a pipeline"),
                    "rename one of them",
                );
            }
            if stages.is_empty() {
                diag.error(&field, "pipeline has no stages");
            }
            for stage in stages {
                if !self.rules.contains_key(stage) {
                    diag.error_with_hint(
                        &field,
                        format!("unknown stage `{stage}`"),
                        self.available_rules_hint(),
                    );
                }
            }
        }

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    fn available_rules_hint(&self) -> String {
        if self.rules.is_empty() {
            "no rules are declared; add a [rules.<name>] section".to_owned()
        } else {
            let names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
            format!("available rules: {}", names.join(", "))
        }
    }

    /// Build the transform for a rule or pipeline named `name`.
    ///
    /// Pipeline stages run in the order they are listed.
    pub fn build(&self, name: &str) -> Result<Box<dyn Transform<Value>>, ConfigError> {
        if let Some(rule) = self.rules.get(name) {
            return Ok(rule.build());
        }

        let stages = self
            .pipelines
            .get(name)
            .ok_or_else(|| ConfigError::UnknownName(name.to_owned()))?;

        let mut pipeline = Pipeline::new();
        for stage in stages {
            let rule = self
                .rules
                .get(stage)
                .ok_or_else(|| ConfigError::UnknownName(stage.clone()))?;
            pipeline.push(rule.build());
        }
        Ok(Box::new(pipeline))
    }

    /// Rule and pipeline names, rules first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules
            .keys()
            .chain(self.pipelines.keys())
            .map(String::as_str)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[rules.status]
kind = "map"
classes = { active = "is-active", idle = "is-idle" }

[rules.open]
kind = "toggle"
class = "is-open"

[rules.items]
kind = "cardinality"
prefix = "item"

[rules.size]
kind = "range"
ranges = [{ class = "low", min = 0 }, { class = "mid", min = 10 }, { class = "high", min = 20 }]

[pipelines]
card = ["open", "items"]
"#;

    #[test]
    fn test_parse_sample() {
        let config = CsstConfig::from_str(SAMPLE).unwrap();
        assert_eq!(config.rules.len(), 4);
        assert_eq!(config.pipelines["card"], ["open", "items"]);
        assert_eq!(
            config.names().collect::<Vec<_>>(),
            ["items", "open", "size", "status", "card"]
        );
    }

    #[test]
    fn test_build_rule() {
        let config = CsstConfig::from_str(SAMPLE).unwrap();
        let size = config.build("size").unwrap();
        assert_eq!(size.apply(Value::Number(15.0), "box").1, "box mid");
        assert_eq!(size.apply(Value::Number(-5.0), "box").1, "box");
    }

    #[test]
    fn test_build_pipeline_runs_in_order() {
        let config = CsstConfig::from_str(SAMPLE).unwrap();
        let card = config.build("card").unwrap();
        let (value, s) = card.apply(Value::Number(2.0), "card");
        assert_eq!(value, Value::Number(2.0));
        assert_eq!(s, "card is-open item-n");

        let (_, s) = card.apply(Value::Number(0.0), &s);
        assert_eq!(s, "card item-0");
    }

    #[test]
    fn test_build_unknown_name() {
        let config = CsstConfig::from_str(SAMPLE).unwrap();
        assert!(matches!(
            config.build("nope"),
            Err(ConfigError::UnknownName(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let content = r#"
[rules.a]
kind = "toggle"
class = ""

[pipelines]
a = ["missing"]
b = []
"#;
        let Err(ConfigError::Diagnostics(diag)) = CsstConfig::from_str(content) else {
            panic!("expected diagnostics");
        };
        // empty class, name clash, unknown stage, empty pipeline
        assert_eq!(diag.len(), 4);
        assert!(diag.errors()[2].hint.as_deref().unwrap().contains("a"));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let content = "[rules.a]\nkind = \"glow\"\n";
        assert!(matches!(
            CsstConfig::from_str(content),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let content = "colour = true\n[rules.a]\nkind = \"toggle\"\nclass = \"x\"\n";
        let (config, ignored) = CsstConfig::parse_with_ignored(content).unwrap();
        assert_eq!(ignored, ["colour"]);
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, SAMPLE).unwrap();

        let config = CsstConfig::from_path(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert!(config.rules.contains_key("status"));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            CsstConfig::from_path(&missing),
            Err(ConfigError::Io(p, _)) if p == missing
        ));
    }
}
