//! `[rules.*]` sections.
//!
//! Each rule is tagged by `kind`:
//!
//! ```toml
//! [rules.status]
//! kind = "map"
//! classes = { active = "is-active", idle = "is-idle" }
//!
//! [rules.open]
//! kind = "toggle"
//! class = "is-open"
//!
//! [rules.items]
//! kind = "cardinality"
//! prefix = "item"
//! style = "plural"            # or "indexed" (default) with optional `suffixes`
//!
//! [rules.size]
//! kind = "range"
//! ranges = [{ class = "low", min = 0 }, { class = "high", min = 10 }]
//! ```

use super::ConfigDiagnostics;
use crate::tokens::TokenSet;
use crate::transform::{Cardinality, DirectMap, Range, Toggle, Transform};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single declared rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Value to class mapping.
    Map { classes: BTreeMap<String, String> },

    /// Class switched by truthiness.
    Toggle { class: String },

    /// Count buckets.
    Cardinality {
        prefix: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suffixes: Option<Vec<String>>,
        #[serde(default)]
        style: CardinalityStyle,
    },

    /// Threshold buckets, in declaration order.
    Range { ranges: Vec<RangeBound> },
}

/// Bucketing style of a cardinality rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardinalityStyle {
    #[default]
    Indexed,
    Plural,
}

/// One `{ class, min }` entry of a range rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    pub class: String,
    pub min: f64,
}

impl RuleConfig {
    /// Short kind name, as written in the config.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Map { .. } => "map",
            Self::Toggle { .. } => "toggle",
            Self::Cardinality { .. } => "cardinality",
            Self::Range { .. } => "range",
        }
    }

    /// Build the transform this rule declares.
    pub fn build(&self) -> Box<dyn Transform<Value>> {
        match self {
            Self::Map { classes } => Box::new(DirectMap::new(classes)),
            Self::Toggle { class } => Box::new(Toggle::new(class)),
            Self::Cardinality {
                prefix,
                style: CardinalityStyle::Plural,
                ..
            } => Box::new(Cardinality::plural(prefix)),
            Self::Cardinality {
                prefix, suffixes, ..
            } => match suffixes {
                Some(suffixes) => Box::new(Cardinality::with_suffixes(prefix, suffixes)),
                None => Box::new(Cardinality::new(prefix)),
            },
            Self::Range { ranges } => Box::new(Range::new(
                ranges.iter().map(|bound| (bound.class.as_str(), bound.min)),
            )),
        }
    }

    /// Check this rule, reporting problems under `rules.<name>`.
    pub(super) fn validate(&self, name: &str, diag: &mut ConfigDiagnostics) {
        let field = format!("rules.{name}");
        match self {
            Self::Map { classes } => {
                if classes.is_empty() {
                    diag.error(format!("{field}.classes"), "map rule has no classes");
                }
                for (value, class) in classes {
                    check_tokens(diag, format!("{field}.classes.{value}"), class);
                }
            }
            Self::Toggle { class } => check_tokens(diag, format!("{field}.class"), class),
            Self::Cardinality {
                prefix,
                suffixes,
                style,
            } => {
                if prefix.trim().is_empty() {
                    diag.error(format!("{field}.prefix"), "prefix must not be empty");
                } else if prefix.contains(char::is_whitespace) {
                    diag.error(format!("{field}.prefix"), "prefix must be a single token");
                }
                match (style, suffixes) {
                    (CardinalityStyle::Plural, Some(_)) => diag.error_with_hint(
                        format!("{field}.suffixes"),
                        "plural style uses fixed suffixes",
                        "remove `suffixes` or set `style = \"indexed\"`",
                    ),
                    (CardinalityStyle::Indexed, Some(suffixes)) if suffixes.is_empty() => {
                        diag.error(format!("{field}.suffixes"), "suffix list is empty");
                    }
                    (CardinalityStyle::Indexed, Some(suffixes)) => {
                        for suffix in suffixes {
                            check_tokens(
                                diag,
                                format!("{field}.suffixes"),
                                &format!("{prefix}{suffix}"),
                            );
                        }
                    }
                    _ => {}
                }
            }
            Self::Range { ranges } => {
                if ranges.is_empty() {
                    diag.error(format!("{field}.ranges"), "range rule has no bounds");
                }
                for bound in ranges {
                    if bound.min.is_nan() {
                        diag.error(format!("{field}.ranges"), "`min` must be a number");
                    }
                    check_tokens(diag, format!("{field}.ranges"), &bound.class);
                }
            }
        }
    }
}

/// Report empty or uncompilable token specs.
fn check_tokens(diag: &mut ConfigDiagnostics, field: String, tokens: &str) {
    if tokens.trim().is_empty() {
        diag.error(field, "class must not be empty");
        return;
    }
    if let Err(err) = TokenSet::try_new(tokens) {
        diag.error_with_hint(
            field,
            err.to_string(),
            "class names are used as regex patterns; avoid `(`, `[`, `\\` and friends",
        );
    }
}
