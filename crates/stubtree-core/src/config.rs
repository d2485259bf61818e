//! Stub builder configuration loaded from `stubtree.toml`.
//!
//! ```toml
//! [builder]
//! max_depth = 4096
//! skip_bodies = true
//!
//! [[skip]]
//! parent = "Class"
//! child = "ModifierList"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use stubtree_syntax::SyntaxKind;
use thiserror::Error;
use tracing::{debug, warn};

use crate::skip::SkipRules;

/// File names searched by [`StubConfig::discover`].
pub const CONFIG_FILES: &[&str] = &["stubtree.toml", ".stubtree.toml"];

/// Errors loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unexpected keys.
    #[error("invalid stubtree config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A skip rule names a kind that does not exist.
    #[error("unknown syntax kind `{0}` in skip rule")]
    UnknownKind(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    builder: BuilderSection,
    skip: Vec<SkipSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BuilderSection {
    max_depth: Option<usize>,
    skip_bodies: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SkipSection {
    parent: String,
    child: String,
}

/// Resolved builder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubConfig {
    /// Depth below which traversal stops.
    pub max_depth: Option<usize>,
    /// Subtrees to prune.
    pub skip_rules: SkipRules,
}

impl StubConfig {
    /// Parses configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::UnknownKind`] for skip rules naming unknown kinds.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigFile = toml::from_str(contents)?;

        let mut skip_rules = if parsed.builder.skip_bodies {
            SkipRules::bodies()
        } else {
            SkipRules::none()
        };
        for rule in parsed.skip {
            let parent = kind_from_name(&rule.parent)?;
            let child = kind_from_name(&rule.child)?;
            if parent.is_token() {
                warn!(%parent, %child, "skip rule parent is a token and never has children");
            }
            skip_rules.insert(parent, child);
        }
        debug!(
            max_depth = ?parsed.builder.max_depth,
            skip_rules = skip_rules.pairs().len(),
            "loaded stubtree config"
        );

        Ok(Self {
            max_depth: parsed.builder.max_depth,
            skip_rules,
        })
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise see
    /// [`StubConfig::from_toml`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Finds a config file in `root`, if there is one.
    #[must_use]
    pub fn discover(root: &Path) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
    }
}

fn kind_from_name(name: &str) -> Result<SyntaxKind, ConfigError> {
    SyntaxKind::from_name(name).ok_or_else(|| ConfigError::UnknownKind(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = StubConfig::from_toml("").unwrap();
        assert_eq!(config, StubConfig::default());
        assert!(config.skip_rules.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = StubConfig::from_toml(
            r#"
[builder]
max_depth = 64
skip_bodies = true

[[skip]]
parent = "Class"
child = "ModifierList"
"#,
        )
        .unwrap();
        assert_eq!(config.max_depth, Some(64));
        assert!(config
            .skip_rules
            .skips(Some(SyntaxKind::Class), Some(SyntaxKind::ModifierList)));
        assert!(config
            .skip_rules
            .skips(Some(SyntaxKind::Function), Some(SyntaxKind::StmtList)));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = StubConfig::from_toml(
            r#"
[[skip]]
parent = "Klass"
child = "Method"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKind(ref name) if name == "Klass"));
        assert_eq!(err.to_string(), "unknown syntax kind `Klass` in skip rule");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = StubConfig::from_toml("[builder]\nmax_dept = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_reports_path() {
        let err = StubConfig::load(Path::new("/nonexistent/stubtree.toml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read /nonexistent/stubtree.toml"));
    }
}
