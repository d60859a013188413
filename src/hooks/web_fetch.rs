//! PreToolUse steering for WebFetch: GitHub's rendered pages are mostly
//! chrome, and the gh CLI already speaks plain text. Page URLs with a gh
//! equivalent are denied with the command to run instead; raw-content
//! hosts are allowed outright; everything else gets no opinion.

use url::Url;

use crate::hook::{HookInput, HookOutcome, Permission};
use crate::hooks::Hook;

/// Hosts that already serve plain content.
const RAW_HOSTS: [&str; 2] = ["raw.githubusercontent.com", "gist.githubusercontent.com"];

pub struct WebFetchSteering;

impl Hook for WebFetchSteering {
    fn name(&self) -> &'static str {
        "web-fetch"
    }

    fn run(&self, input: &HookInput, _args: &[String]) -> HookOutcome {
        if input.tool_name.as_deref() != Some("WebFetch") {
            return HookOutcome::Success(None);
        }
        let Some(raw) = input.tool_input.url.as_deref() else {
            return HookOutcome::Success(None);
        };
        let Ok(url) = Url::parse(raw) else {
            return HookOutcome::Success(None);
        };
        let Some(host) = url.host_str() else {
            return HookOutcome::Success(None);
        };
        if RAW_HOSTS.contains(&host) {
            return HookOutcome::Permission {
                decision: Permission::Allow,
                reason: "raw content URL".to_string(),
            };
        }
        if host != "github.com" {
            return HookOutcome::Success(None);
        }
        match gh_equivalent(&url) {
            Some(command) => HookOutcome::Permission {
                decision: Permission::Deny,
                reason: format!(
                    "GitHub pages render poorly over WebFetch. Use the gh CLI instead: {command}"
                ),
            },
            None => HookOutcome::Success(None),
        }
    }
}

/// The gh invocation equivalent to a github.com page, when one exists.
/// Pages with no useful equivalent (issue lists, actions, wikis) map to
/// `None` and pass through unjudged.
fn gh_equivalent(url: &Url) -> Option<String> {
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    let [owner, repo, rest @ ..] = segments.as_slice() else {
        return None;
    };
    let repo = repo.trim_end_matches(".git");
    match rest {
        [] => Some(format!("gh repo view {owner}/{repo}")),
        ["pull", number, ..] if is_number(number) => {
            Some(format!("gh pr view {number} --repo {owner}/{repo}"))
        }
        ["issues", number, ..] if is_number(number) => {
            Some(format!("gh issue view {number} --repo {owner}/{repo}"))
        }
        ["blob", _branch, path @ ..] if !path.is_empty() => Some(format!(
            "gh api repos/{owner}/{repo}/contents/{} --jq .content | base64 -d",
            path.join("/")
        )),
        ["tree", _branch, path @ ..] if !path.is_empty() => Some(format!(
            "gh api repos/{owner}/{repo}/contents/{}",
            path.join("/")
        )),
        ["releases", ..] => Some(format!("gh release list --repo {owner}/{repo}")),
        _ => None,
    }
}

fn is_number(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
