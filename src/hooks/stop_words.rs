//! Stop-gate word scan: block the stop when the final assistant message
//! contains a banned phrase.
//!
//! Rules live in `~/.claude/stop-words.json`:
//!
//! ```json
//! {
//!   "no-premature-done": {
//!     "keywords": ["should now work"],
//!     "message": "Verify before claiming completion."
//!   }
//! }
//! ```
//!
//! Matching is a case-sensitive substring scan; the first matching keyword
//! wins, with rules visited in name order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::hook::{HookInput, HookOutcome};
use crate::hooks::Hook;
use crate::transcript::{self, ContentElement, TranscriptEvent};

const RULES_PATH: &str = "~/.claude/stop-words.json";

/// Characters of context kept on each side of a match.
const SNIPPET_RADIUS: usize = 100;

#[derive(Debug, Deserialize)]
struct StopWordRule {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    message: String,
}

pub struct StopWords;

impl Hook for StopWords {
    fn name(&self) -> &'static str {
        "stop-words"
    }

    fn run(&self, input: &HookInput, _args: &[String]) -> HookOutcome {
        let rules = load_rules(&rules_path());
        if rules.is_empty() {
            return HookOutcome::Success(None);
        }
        let Some(path) = input.transcript_path.as_deref() else {
            return HookOutcome::Success(None);
        };
        let Some(text) = last_assistant_text(Path::new(path)) else {
            return HookOutcome::Success(None);
        };
        match first_match(&rules, &text) {
            Some(outcome) => outcome,
            None => HookOutcome::Success(None),
        }
    }
}

fn rules_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(RULES_PATH).into_owned())
}

/// Missing or unparsable rules files scan as "no rules". A `BTreeMap`
/// keeps rule iteration in name order, so "first match" is well defined.
fn load_rules(path: &Path) -> BTreeMap<String, StopWordRule> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return BTreeMap::new();
    };
    match serde_json::from_str(&raw) {
        Ok(rules) => rules,
        Err(e) => {
            log::debug!("ignoring unparsable stop-word rules {}: {e}", path.display());
            BTreeMap::new()
        }
    }
}

/// The text of the newest assistant event that has any, joined across its
/// text elements.
fn last_assistant_text(path: &Path) -> Option<String> {
    transcript::read_events(path).iter().rev().find_map(|event| {
        let TranscriptEvent::Assistant { message, .. } = event else {
            return None;
        };
        let parts: Vec<&str> = message
            .content
            .iter()
            .filter_map(|element| match element {
                ContentElement::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    })
}

fn first_match(rules: &BTreeMap<String, StopWordRule>, text: &str) -> Option<HookOutcome> {
    for (name, rule) in rules {
        for keyword in &rule.keywords {
            if keyword.is_empty() {
                continue;
            }
            if let Some(at) = text.find(keyword.as_str()) {
                let context = snippet(text, at, keyword.len());
                return Some(HookOutcome::Blocking(format!(
                    "Stop-word rule '{name}' matched \"{keyword}\".\n{}\n\nContext: ...{context}...",
                    rule.message,
                )));
            }
        }
    }
    None
}

/// Up to [`SNIPPET_RADIUS`] characters either side of the match, widened
/// outward to char boundaries.
fn snippet(text: &str, at: usize, matched_len: usize) -> &str {
    let mut start = at.saturating_sub(SNIPPET_RADIUS);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (at + matched_len + SNIPPET_RADIUS).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn rules(raw: &str) -> BTreeMap<String, StopWordRule> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn match_is_case_sensitive() {
        let rules = rules(r#"{ "done": { "keywords": ["Should now work"], "message": "m" } }"#);
        assert!(first_match(&rules, "this should now work").is_none());
        assert!(first_match(&rules, "this Should now work").is_some());
    }

    #[test]
    fn report_names_rule_keyword_and_message() {
        let rules = rules(
            r#"{ "no-hand-waving": { "keywords": ["probably fine"], "message": "Check it." } }"#,
        );
        let Some(HookOutcome::Blocking(reason)) = first_match(&rules, "It is probably fine now.")
        else {
            panic!("expected a block");
        };
        assert!(reason.starts_with("Stop-word rule 'no-hand-waving' matched \"probably fine\"."));
        assert!(reason.contains("Check it."));
        assert!(reason.contains("Context: ...It is probably fine now...."));
    }

    #[test]
    fn rules_are_visited_in_name_order() {
        let rules = rules(
            r#"{
                "b-rule": { "keywords": ["hit"], "message": "second" },
                "a-rule": { "keywords": ["hit"], "message": "first" }
            }"#,
        );
        let Some(HookOutcome::Blocking(reason)) = first_match(&rules, "a hit") else {
            panic!("expected a block");
        };
        assert!(reason.contains("'a-rule'"));
    }

    #[test]
    fn empty_keywords_never_match() {
        let rules = rules(r#"{ "r": { "keywords": [""], "message": "m" } }"#);
        assert!(first_match(&rules, "anything").is_none());
    }

    #[test]
    fn snippet_is_bounded_and_char_safe() {
        let long = format!("{}NEEDLE{}", "a".repeat(300), "b".repeat(300));
        let at = long.find("NEEDLE").unwrap();
        let cut = snippet(&long, at, "NEEDLE".len());
        assert_eq!(cut.len(), SNIPPET_RADIUS * 2 + "NEEDLE".len());
        assert!(cut.contains("NEEDLE"));

        // Multi-byte neighbours force the cut off a char boundary.
        let wide = format!("{}NEEDLE{}", "€".repeat(80), "€".repeat(80));
        let at = wide.find("NEEDLE").unwrap();
        let cut = snippet(&wide, at, "NEEDLE".len());
        assert!(cut.contains("NEEDLE"));
        assert!(cut.starts_with('€') && cut.ends_with('€'));
    }

    #[test]
    fn snippet_at_text_edges() {
        assert_eq!(snippet("short", 0, 5), "short");
    }

    #[test]
    fn unparsable_rules_file_loads_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_rules(file.path()).is_empty());
    }

    #[test]
    fn missing_rules_file_loads_empty() {
        assert!(load_rules(Path::new("/no/such/rules.json")).is_empty());
    }

    #[test]
    fn last_assistant_text_joins_text_elements() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"type":"assistant","timestamp":"2026-01-05T10:00:00Z","message":{{"content":[{{"type":"text","text":"old"}}]}}}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"type":"assistant","timestamp":"2026-01-05T10:00:05Z","message":{{"content":[{{"type":"text","text":"first"}},{{"type":"tool_use","name":"Read","input":{{}}}},{{"type":"text","text":"second"}}]}}}}"#
        )
        .unwrap();
        assert_eq!(last_assistant_text(file.path()).as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn tool_only_assistant_event_is_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"type":"assistant","timestamp":"2026-01-05T10:00:00Z","message":{{"content":[{{"type":"text","text":"spoken"}}]}}}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"type":"assistant","timestamp":"2026-01-05T10:00:05Z","message":{{"content":[{{"type":"tool_use","name":"Bash","input":{{}}}}]}}}}"#
        )
        .unwrap();
        assert_eq!(last_assistant_text(file.path()).as_deref(), Some("spoken"));
    }

    #[test]
    fn no_rules_means_success() {
        // The default rules path may not exist on this machine; the hook
        // must succeed either way when the transcript is absent.
        let outcome = StopWords.run(&HookInput::default(), &[]);
        assert_eq!(outcome, HookOutcome::Success(None));
    }
}
