//! Best-effort file logging. Stdout, stderr, and the exit code all belong
//! to the host protocol, so diagnostics go to a file under
//! `~/.local/share/cc-guardrails/` instead. Failures here must never break
//! a hook: if the file cannot be opened, the `log` macros stay no-ops.

use simplelog::{Config, LevelFilter, WriteLogger};

const LOG_PATH: &str = "~/.local/share/cc-guardrails/cc-guardrails.log";

/// Installs the file logger.
pub fn init() {
    let path = std::path::PathBuf::from(shellexpand::tilde(LOG_PATH).into_owned());
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
}
