//! Gate machinery shared by the Stop hooks: run an external check and turn
//! its result into a hook outcome.

use std::path::Path;
use std::process::Command;

use crate::hook::HookOutcome;

/// How a gate reports failure. Advisory gates warn and let the agent stop
/// (exit 1); blocking gates send it back to work (exit 2). Success looks
/// the same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePolicy {
    Blocking,
    Advisory,
}

impl GatePolicy {
    pub fn failure(self, reason: String) -> HookOutcome {
        match self {
            GatePolicy::Blocking => HookOutcome::Blocking(reason),
            GatePolicy::Advisory => HookOutcome::NonBlocking(reason),
        }
    }
}

/// One external check invocation, already split into program and arguments.
/// Arguments are passed through verbatim; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl CheckCommand {
    /// Splits a shell-style line. `None` for empty or unsplittable input
    /// (unbalanced quotes).
    pub fn from_line(line: &str) -> Option<CheckCommand> {
        let mut words = shlex::split(line)?.into_iter();
        let program = words.next()?;
        Some(CheckCommand {
            program,
            args: words.collect(),
        })
    }

    /// Rendering for user-facing messages.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    /// Runs the check in `cwd` and captures both streams. A spawn failure
    /// (program not installed) is reported as a failed run with the OS
    /// error as its stderr, so gates degrade to a readable message.
    pub fn run(&self, cwd: &Path) -> CheckRun {
        log::debug!("running check: {} in {}", self.display(), cwd.display());
        match Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .output()
        {
            Ok(output) => CheckRun {
                // Signal-killed children have no code.
                code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => CheckRun {
                code: 1,
                stdout: String::new(),
                stderr: e.to_string(),
            },
        }
    }
}

/// Captured result of one check.
#[derive(Debug)]
pub struct CheckRun {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CheckRun {
    pub fn passed(&self) -> bool {
        self.code == 0
    }

    /// The more informative stream: compilers diagnose on stderr, test
    /// runners on stdout.
    pub fn output(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }

    /// Both streams, trimmed and stacked.
    pub fn full_output(&self) -> String {
        let mut parts = Vec::new();
        let out = self.stdout.trim();
        if !out.is_empty() {
            parts.push(out);
        }
        let err = self.stderr.trim();
        if !err.is_empty() {
            parts.push(err);
        }
        parts.join("\n")
    }
}
