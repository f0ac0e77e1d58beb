//! Health check trait and result types

use std::time::Duration;

use colored::Colorize;

/// Outcome severity of a check, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStatus {
    Pass,
    /// Usable, but something looks off
    Warn,
    Fail,
}

impl CheckStatus {
    /// Pass or Warn
    pub fn is_ok(&self) -> bool {
        !self.is_fail()
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, CheckStatus::Fail)
    }

    /// The more severe of two statuses
    pub fn worst(self, other: CheckStatus) -> CheckStatus {
        self.max(other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        }
    }

    pub fn as_colored_str(&self) -> String {
        match self {
            CheckStatus::Pass => self.label().green().to_string(),
            CheckStatus::Warn => self.label().yellow().to_string(),
            CheckStatus::Fail => self.label().red().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// One-line summary
    pub message: String,
    pub details: Option<String>,
    /// Filled in by the runner
    pub duration: Duration,
}

impl CheckResult {
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Collects per-step findings of a check and folds them into one result
#[derive(Debug)]
pub struct Findings {
    status: CheckStatus,
    lines: Vec<String>,
}

impl Default for Findings {
    fn default() -> Self {
        Self::new()
    }
}

impl Findings {
    pub fn new() -> Self {
        Self {
            status: CheckStatus::Pass,
            lines: Vec::new(),
        }
    }

    /// Record an informational line
    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(format!("  {}", line.into()));
    }

    /// Record a step that must hold; a failing step fails the check
    pub fn require(&mut self, ok: bool, what: impl Into<String>) {
        self.record(ok, CheckStatus::Fail, what.into());
    }

    /// Record a step that should hold; a failing step only warns
    pub fn prefer(&mut self, ok: bool, what: impl Into<String>) {
        self.record(ok, CheckStatus::Warn, what.into());
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// Summarize with `ok` when everything passed, `problem` otherwise
    pub fn finish(self, ok: impl Into<String>, problem: impl Into<String>) -> CheckResult {
        let message = if self.status == CheckStatus::Pass {
            ok.into()
        } else {
            problem.into()
        };
        CheckResult::new(self.status, message).with_details(self.lines.join("\n"))
    }

    fn record(&mut self, ok: bool, severity: CheckStatus, what: String) {
        let mark = match (ok, severity) {
            (true, _) => "✓",
            (false, CheckStatus::Warn) => "⚠",
            (false, _) => "✗",
        };
        self.lines.push(format!("  {mark} {what}"));
        if !ok {
            self.status = self.status.worst(severity);
        }
    }
}

/// A self-contained check of one subsystem
pub trait SystemCheck {
    fn name(&self) -> &'static str;

    fn check(&self) -> CheckResult;

    /// What the check validates, shown alongside details
    fn description(&self) -> Option<&'static str> {
        None
    }
}
