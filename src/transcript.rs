//! Session transcript access.
//!
//! Claude Code appends one JSON object per line to the session transcript.
//! Only three event shapes matter here: user turns (boundary detection),
//! assistant turns (tool calls and response text), and system notices.
//! Everything else, including lines from newer releases with kinds this
//! build has never heard of, deserializes to a catch-all variant or is
//! skipped outright. The scanners below are gating aids, not auditors, so
//! unreadable input always degrades toward "nothing found".

use std::path::Path;

use serde::Deserialize;

/// One transcript line.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TranscriptEvent {
    User {
        timestamp: Option<String>,
        message: UserMessage,
    },
    Assistant {
        timestamp: Option<String>,
        message: AssistantMessage,
    },
    System {
        timestamp: Option<String>,
    },
    /// Any event kind this build does not model.
    #[serde(other)]
    Other,
}

/// A user turn. Tool results also arrive as `user` events, but those carry
/// array content and fail this shape, which is what we want: only turns a
/// person (or a Stop hook) actually typed are boundary candidates.
#[derive(Debug, Deserialize)]
pub struct UserMessage {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Vec<ContentElement>,
}

/// One element of an assistant message.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentElement {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        name: String,
        #[serde(default)]
        input: ToolUseInput,
    },
    /// Thinking blocks and anything else we do not inspect.
    #[serde(other)]
    Other,
}

/// The slice of a tool call's input the scanners care about.
#[derive(Debug, Default, Deserialize)]
pub struct ToolUseInput {
    pub file_path: Option<String>,
    pub relative_path: Option<String>,
}

impl ToolUseInput {
    /// The file a tool call targeted. Most editing tools pass `file_path`;
    /// the symbol-level MCP tools pass `relative_path`.
    pub fn target_path(&self) -> Option<&str> {
        self.file_path.as_deref().or(self.relative_path.as_deref())
    }
}

pub fn parse_event(line: &str) -> Result<TranscriptEvent, serde_json::Error> {
    serde_json::from_str(line)
}

/// Reads a transcript, skipping blank and malformed lines. A missing or
/// unreadable file is an empty transcript.
pub fn read_events(path: &Path) -> Vec<TranscriptEvent> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_event(line).ok())
        .collect()
}

/// Whether any assistant tool call since the newest real user turn edited a
/// file both predicates accept.
///
/// The newest user turn is found by scanning backwards, skipping turns that
/// begin with `feedback_marker` (those are re-prompts injected by a Stop
/// hook, not the person). Its timestamp is the boundary; assistant events
/// strictly after it are searched for a tool call whose name passes
/// `is_edit_capable_tool` and whose target path passes `is_target_file`.
/// Timestamps are ISO-8601 and compare lexically.
pub fn has_qualifying_edit(
    log_path: &Path,
    is_target_file: impl Fn(&str) -> bool,
    is_edit_capable_tool: impl Fn(&str) -> bool,
    feedback_marker: &str,
) -> bool {
    let events = read_events(log_path);
    let newest_user = events.iter().rev().find_map(|event| match event {
        TranscriptEvent::User { timestamp, message }
            if !message.content.starts_with(feedback_marker) =>
        {
            Some(timestamp.clone())
        }
        _ => None,
    });
    // A boundary candidate without a timestamp cannot anchor a comparison,
    // so it disqualifies the whole scan rather than sliding to an older turn.
    let Some(Some(boundary)) = newest_user else {
        return false;
    };
    log::debug!("scanning for edits after user turn at {boundary}");

    for event in &events {
        if let TranscriptEvent::Assistant { timestamp, message } = event
            && let Some(ts) = timestamp
            && ts.as_str() > boundary.as_str()
        {
            for element in &message.content {
                if let ContentElement::ToolUse { name, input } = element
                    && is_edit_capable_tool(name)
                    && let Some(path) = input.target_path()
                    && is_target_file(path)
                {
                    return true;
                }
            }
        }
    }
    false
}
