//! Rule configuration: which convention rules are active for a project.
//!
//! Configuration is optional. The lint hook probes `claude-lint.json` in the
//! project directory, then a per-user file under `~/.claude/`; the first
//! candidate that exists and parses wins. No usable file means every rule is
//! active. A broken config must never block an edit, so parse failures are
//! logged and treated as absent.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lint::RuleId;

/// File name probed in the project directory.
pub const PROJECT_CONFIG_FILE: &str = "claude-lint.json";

/// Per-user fallback config.
pub const USER_CONFIG_PATH: &str = "~/.claude/claude-lint.json";

/// Parsed rule configuration:
///
/// ```json
/// { "rules": { "no-interface": "off", "max-params": "error" } }
/// ```
///
/// Keys that match no registered rule are ignored, so configs written for a
/// newer release still parse here.
#[derive(Debug, Default, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    rules: HashMap<String, RuleSetting>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RuleSetting {
    Error,
    Off,
}

impl RuleConfig {
    fn is_off(&self, id: RuleId) -> bool {
        self.rules.get(id.as_str()) == Some(&RuleSetting::Off)
    }
}

/// The rules to run under `config`. Absent config means all rules; a rule
/// is excluded only by an explicit `"off"`.
pub fn active_rules(config: Option<&RuleConfig>) -> Vec<RuleId> {
    RuleId::ALL
        .into_iter()
        .filter(|id| !config.is_some_and(|c| c.is_off(*id)))
        .collect()
}

/// Resolves configuration for a project: the project file first, then the
/// user file. A candidate that is missing or unparsable falls through to
/// the next.
pub fn resolve(project_dir: &Path, user_config: &Path) -> Option<RuleConfig> {
    let candidates = [project_dir.join(PROJECT_CONFIG_FILE), user_config.to_path_buf()];
    candidates.iter().find_map(|path| load(path))
}

/// Expanded location of the per-user config file.
pub fn user_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(USER_CONFIG_PATH).into_owned())
}

fn load(path: &Path) -> Option<RuleConfig> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(config) => Some(config),
        Err(e) => {
            log::debug!("ignoring unparsable config {}: {e}", path.display());
            None
        }
    }
}
