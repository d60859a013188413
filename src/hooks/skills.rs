//! Prompt-time skill reminders: when a submitted prompt matches a
//! configured trigger, inject context telling the agent the matching skill
//! is mandatory.
//!
//! Projects describe their skills in `.claude/context-skills.yml`:
//!
//! ```yaml
//! skills:
//!   - name: db-migrations
//!     description: schema change workflow
//!     trigger:
//!       required: migration
//!       any: [create, add, new]
//! ```
//!
//! `required` must appear in the prompt; when `any` is non-empty, at least
//! one of its entries must too. All matching is case-insensitive substring.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::hook::{HookInput, HookOutcome};
use crate::hooks::{self, Hook};

/// Probed relative to the project directory; first readable file wins.
const CONFIG_PATHS: [&str; 2] = [".claude/context-skills.yml", ".claude/context-skills.yaml"];

#[derive(Debug, Default, Deserialize)]
struct SkillsConfig {
    #[serde(default)]
    skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
struct Skill {
    name: String,
    #[serde(default)]
    description: String,
    trigger: Trigger,
}

#[derive(Debug, Deserialize)]
struct Trigger {
    required: String,
    #[serde(default)]
    any: Vec<String>,
}

impl Trigger {
    /// `prompt` must already be lowercased.
    fn matches(&self, prompt: &str) -> bool {
        if !prompt.contains(&self.required.to_lowercase()) {
            return false;
        }
        self.any.is_empty()
            || self
                .any
                .iter()
                .any(|term| prompt.contains(&term.to_lowercase()))
    }
}

pub struct ContextSkills;

impl Hook for ContextSkills {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn run(&self, input: &HookInput, _args: &[String]) -> HookOutcome {
        let Some(prompt) = input.prompt.as_deref() else {
            return HookOutcome::Success(None);
        };
        let config = load_config(&project_dir(input));
        match matched_context(&config, prompt) {
            Some(context) => HookOutcome::AdditionalContext(context),
            None => HookOutcome::Success(None),
        }
    }
}

/// `CLAUDE_PROJECT_DIR` when the host exports it, the input's cwd
/// otherwise. Only the hook layer touches the environment.
fn project_dir(input: &HookInput) -> PathBuf {
    if let Ok(dir) = std::env::var("CLAUDE_PROJECT_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    hooks::cwd(input)
}

fn load_config(project_dir: &Path) -> SkillsConfig {
    for name in CONFIG_PATHS {
        let path = project_dir.join(name);
        let Ok(raw) = std::fs::read_to_string(&path) else {
            continue;
        };
        match serde_yaml::from_str(&raw) {
            Ok(config) => return config,
            Err(e) => {
                log::debug!("ignoring unparsable skills config {}: {e}", path.display());
            }
        }
    }
    SkillsConfig::default()
}

fn matched_context(config: &SkillsConfig, prompt: &str) -> Option<String> {
    let prompt = prompt.to_lowercase();
    let lines: Vec<String> = config
        .skills
        .iter()
        .filter(|skill| skill.trigger.matches(&prompt))
        .map(reminder)
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn reminder(skill: &Skill) -> String {
    if skill.description.is_empty() {
        format!(
            "MANDATORY: invoke the '{}' skill before answering this prompt.",
            skill.name
        )
    } else {
        format!(
            "MANDATORY: invoke the '{}' skill before answering this prompt. ({})",
            skill.name, skill.description
        )
    }
}
