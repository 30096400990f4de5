//! Engine configuration loaded with figment.
//!
//! Precedence, lowest to highest: built-in defaults, an optional config
//! file (TOML, YAML or JSON by extension), then `KANBAN_*` environment
//! variables.
//!
//! ```toml
//! strict = true
//! responsibility_delimiter = ";"
//! card_id_prefix = "task"
//! ```

use crate::error::Result;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for engine settings
pub const ENV_PREFIX: &str = "KANBAN_";

/// Tunables for the board engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Treat caller-contract violations as programming errors: they trip a
    /// `debug_assert!` in debug builds. Release builds always no-op.
    pub strict: bool,
    /// Separator for responsibilities supplied as delimited text
    pub responsibility_delimiter: char,
    /// Prefix for generated card ids (`card-<token>`)
    pub card_id_prefix: String,
    /// Prefix for generated column ids (`column-<token>`)
    pub column_id_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict: false,
            responsibility_delimiter: ',',
            card_id_prefix: "card".to_string(),
            column_id_prefix: "column".to_string(),
        }
    }
}

impl EngineConfig {
    /// Defaults overlaid with `KANBAN_*` environment variables
    pub fn load() -> Result<Self> {
        Ok(Self::figment().merge(Env::prefixed(ENV_PREFIX)).extract()?)
    }

    /// Defaults overlaid with `path`, then with `KANBAN_*` environment
    /// variables. A missing file is treated as empty.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let figment = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::figment().merge(Yaml::file(path)),
            Some("json") => Self::figment().merge(Json::file(path)),
            _ => Self::figment().merge(Toml::file(path)),
        };
        Ok(figment.merge(Env::prefixed(ENV_PREFIX)).extract()?)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    /// Compose a prefixed id, e.g. `card-01J…`
    pub(crate) fn card_id(&self, token: &str) -> String {
        format!("{}-{}", self.card_id_prefix, token)
    }

    /// Compose a prefixed id, e.g. `column-01J…`
    pub(crate) fn column_id(&self, token: &str) -> String {
        format!("{}-{}", self.column_id_prefix, token)
    }
}
