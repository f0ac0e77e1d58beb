//! Build metadata check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Reports compiler, target and revision")
    }

    fn check(&self) -> CheckResult {
        let details = build_info::detailed_info()
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n");

        CheckResult::pass(build_info::version_string()).with_details(details)
    }
}
