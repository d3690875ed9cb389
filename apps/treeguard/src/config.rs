//! Configuration discovery and effective settings resolution.
//!
//! treeguard reads `treeguard.toml|yaml|yml` from the repository root, or the
//! file passed with `--config`, and merges it with CLI flags.
//! Defaults:
//! - `output`: `human`
//! - `check_optional`: true
//! - `rules`: the built-in table from [`crate::rules::builtin`]
//!
//! A `[rules]` section replaces the built-in table as a whole.
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use crate::models::rules::RuleTable;
use crate::rules;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: &[&str] = &["treeguard.toml", "treeguard.yaml", "treeguard.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `treeguard.toml|yaml`.
pub struct TreeguardConfig {
    pub output: Option<String>,
    pub check_optional: Option<bool>,
    #[serde(default)]
    pub rules: Option<RuleTable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the effective rule table came from.
pub enum RulesSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub check_optional: bool,
    pub rules: RuleTable,
    pub rules_source: RulesSource,
}

impl Effective {
    /// Human label for the rules source, relative to the root when possible.
    pub fn rules_source_label(&self) -> String {
        match &self.rules_source {
            RulesSource::Builtin => "built-in rules".to_string(),
            RulesSource::File(p) => pathdiff::diff_paths(p, &self.repo_root)
                .filter(|rel| !rel.starts_with(".."))
                .unwrap_or_else(|| p.clone())
                .to_string_lossy()
                .to_string(),
        }
    }
}

/// Locate the first config file present at `root`.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Load a config file, picking the parser from its extension.
pub fn load_config(path: &Path) -> Result<TreeguardConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);
    if is_yaml {
        Ok(serde_yaml::from_str(&s)?)
    } else {
        Ok(toml::from_str(&s)?)
    }
}

/// Resolve `Effective` by merging CLI flags, the config file, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_config: Option<&str>,
    cli_output: Option<&str>,
    cli_skip_optional: bool,
) -> Result<Effective, ConfigError> {
    let repo_root = PathBuf::from(cli_repo_root.unwrap_or("."));
    let config_file = match cli_config {
        Some(p) => Some(PathBuf::from(p)),
        None => find_config(&repo_root),
    };
    let cfg = match config_file.as_deref() {
        Some(p) => load_config(p)?,
        None => TreeguardConfig::default(),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let check_optional = if cli_skip_optional {
        false
    } else {
        cfg.check_optional.unwrap_or(true)
    };
    let (rules, rules_source) = match (cfg.rules, config_file.as_ref()) {
        (Some(table), Some(path)) => (table, RulesSource::File(path.clone())),
        _ => (rules::builtin(), RulesSource::Builtin),
    };

    Ok(Effective {
        repo_root,
        output,
        check_optional,
        rules,
        rules_source,
    })
}
