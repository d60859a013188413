//! Hook wire protocol: the JSON Claude Code pipes to stdin and the exit
//! code / stdout contract it expects back.
//!
//! Every event type shares one input shape here; fields a given event does
//! not send simply deserialize to their defaults. Results are expressed as
//! a [`HookOutcome`], which knows how to emit itself: plain exits for the
//! code-based protocol (0 pass, 1 advisory, 2 blocking) and JSON documents
//! on stdout for the decision-based one.

use serde::Deserialize;

/// Input payload for a hook invocation. One shape serves every event;
/// absent fields take their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_input: ToolInput,
    #[serde(default)]
    pub tool_response: ToolResponse,
    pub transcript_path: Option<String>,
    pub cwd: Option<String>,
    pub prompt: Option<String>,
    /// Set on Stop events fired while a previous Stop block is being
    /// resolved. Blocking again would loop forever.
    #[serde(default)]
    pub stop_hook_active: bool,
}

/// The slice of `tool_input` the hooks inspect.
#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    pub file_path: Option<String>,
    pub url: Option<String>,
}

/// The slice of `tool_response` the hooks inspect. Claude Code reports the
/// resolved absolute path of a completed Write/Edit here.
#[derive(Debug, Default, Deserialize)]
pub struct ToolResponse {
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
}

/// A PreToolUse permission verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Allow,
    Deny,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Allow => "allow",
            Permission::Deny => "deny",
        }
    }
}

/// What a hook decided, independent of how it gets reported.
#[derive(Debug, PartialEq, Eq)]
pub enum HookOutcome {
    /// Exit 0. The optional message goes to stdout (shown in verbose mode).
    Success(Option<String>),
    /// Exit 1: the agent proceeds, the user sees the reason.
    NonBlocking(String),
    /// Exit 2: the agent is stopped and fed the reason.
    Blocking(String),
    /// PostToolUse `decision: block`: the tool call stands, the agent is
    /// fed the reason.
    PostToolBlock(String),
    /// PreToolUse permission decision.
    Permission { decision: Permission, reason: String },
    /// UserPromptSubmit context injection.
    AdditionalContext(String),
}

impl HookOutcome {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            HookOutcome::Success(_) => "success",
            HookOutcome::NonBlocking(_) => "non-blocking",
            HookOutcome::Blocking(_) => "blocking",
            HookOutcome::PostToolBlock(_) => "post-tool-block",
            HookOutcome::Permission { decision: Permission::Allow, .. } => "allow",
            HookOutcome::Permission { decision: Permission::Deny, .. } => "deny",
            HookOutcome::AdditionalContext(_) => "additional-context",
        }
    }

    /// The human-facing text carried by this outcome, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            HookOutcome::Success(message) => message.as_deref(),
            HookOutcome::NonBlocking(reason)
            | HookOutcome::Blocking(reason)
            | HookOutcome::PostToolBlock(reason)
            | HookOutcome::AdditionalContext(reason) => Some(reason),
            HookOutcome::Permission { reason, .. } => Some(reason),
        }
    }

    /// The JSON document this outcome prints, for the decision-based
    /// variants. Code-based variants print nothing structured.
    pub fn payload(&self) -> Option<serde_json::Value> {
        match self {
            HookOutcome::PostToolBlock(reason) => Some(serde_json::json!({
                "decision": "block",
                "reason": reason,
                "hookSpecificOutput": { "hookEventName": "PostToolUse" },
            })),
            HookOutcome::Permission { decision, reason } => Some(serde_json::json!({
                "hookSpecificOutput": {
                    "hookEventName": "PreToolUse",
                    "permissionDecision": decision.as_str(),
                    "permissionDecisionReason": reason,
                },
            })),
            HookOutcome::AdditionalContext(context) => Some(serde_json::json!({
                "hookSpecificOutput": {
                    "hookEventName": "UserPromptSubmit",
                    "additionalContext": context,
                },
            })),
            _ => None,
        }
    }

    /// Writes this outcome to stdout/stderr and returns the exit code.
    pub fn emit(&self) -> i32 {
        match self {
            HookOutcome::Success(message) => {
                if let Some(message) = message {
                    println!("{message}");
                }
                0
            }
            HookOutcome::NonBlocking(reason) => {
                eprintln!("{reason}");
                1
            }
            HookOutcome::Blocking(reason) => {
                eprintln!("{reason}");
                2
            }
            _ => {
                if let Some(payload) = self.payload() {
                    println!("{payload}");
                }
                0
            }
        }
    }
}
