//! How `crumbs` writes to the terminal.
//!
//! Panels and stats go to stdout in one of three [`OutputMode`]s. Failures
//! go to stderr as a [`CliError`], which always carries its `E####` code,
//! whatever the mode.
//!
//! The mode is taken from `--format`, then the hidden `--json`, then the
//! `FORMAT` environment variable. Without any of those, a terminal gets
//! pretty output and a pipe gets text rows.

use clap::ValueEnum;
use crumbs_core::ErrorCode;
use serde::Serialize;
use serde_json::json;
use std::io::{self, IsTerminal, Write};

/// Width of the dashed rule under headings.
pub const RULE_WIDTH: usize = 72;

pub fn rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))
}

/// A title line with a rule underneath.
pub fn heading(w: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(w, "{title}")?;
    rule(w)
}

/// `key:` padded to a fixed column, then the value.
pub fn field(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    let key = format!("{key}:");
    writeln!(w, "{key:<12} {}", value.as_ref())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Headings, aligned columns and `?` markers for unresolved links.
    Pretty,
    /// One tab-separated row per item.
    Text,
    /// The serialized panel or stats rows.
    Json,
}

impl OutputMode {
    /// Pick the mode from the command line flags and the environment.
    pub fn detect(flag: Option<Self>, json: bool) -> Self {
        let env = std::env::var("FORMAT").ok();
        Self::pick(flag, json, env.as_deref(), io::stdout().is_terminal())
    }

    fn pick(flag: Option<Self>, json: bool, env: Option<&str>, tty: bool) -> Self {
        flag.or_else(|| json.then_some(Self::Json))
            .or_else(|| env.and_then(|v| <Self as ValueEnum>::from_str(v, true).ok()))
            .unwrap_or(if tty { Self::Pretty } else { Self::Text })
    }
}

/// Write `value` to stdout: JSON directly, text and pretty through the
/// given writers.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text(value, &mut out)?,
        OutputMode::Pretty => pretty(value, &mut out)?,
    }
    Ok(())
}

/// A failure reported to the user before the command exits non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    pub code: ErrorCode,
    /// What went wrong this time, e.g. the unreadable path.
    pub detail: String,
}

impl CliError {
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "error": {
                "code": self.code.code(),
                "summary": self.code.message(),
                "detail": self.detail,
                "suggestion": self.code.hint(),
            }
        })
    }

    fn write_human(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "error[{}]: {}", self.code, self.detail)?;
        if let Some(hint) = self.code.hint() {
            writeln!(w, "  suggestion: {hint}")?;
        }
        Ok(())
    }

    /// Print to stderr in `mode`.
    pub fn report(&self, mode: OutputMode) -> anyhow::Result<()> {
        let mut err = io::stderr().lock();
        match mode {
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut err, &self.to_json())?;
                writeln!(err)?;
            }
            OutputMode::Pretty | OutputMode::Text => self.write_human(&mut err)?,
        }
        Ok(())
    }
}
