//! Runs a suite of checks and tallies the outcome

use std::time::Instant;

use tracing::{info, warn};

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// One check's name and result
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: String,
    pub description: Option<&'static str>,
    pub result: CheckResult,
}

#[derive(Debug, Default)]
pub struct HealthCheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl HealthCheckReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warned(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    /// No check failed
    pub fn is_healthy(&self) -> bool {
        self.failed() == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned() > 0
    }

    /// Worst status across all checks
    pub fn status(&self) -> CheckStatus {
        self.outcomes
            .iter()
            .map(|outcome| outcome.result.status)
            .fold(CheckStatus::Pass, CheckStatus::worst)
    }

    /// 0 when everything passed, 1 on any failure, 2 on warnings only
    pub fn exit_code(&self) -> i32 {
        match self.status() {
            CheckStatus::Pass => 0,
            CheckStatus::Fail => 1,
            CheckStatus::Warn => 2,
        }
    }

    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.name == name)
            .map(|outcome| &outcome.result)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.status == status)
            .count()
    }
}

#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check in registration order
    pub fn run(self) -> HealthCheckReport {
        let outcomes = self
            .checks
            .into_iter()
            .map(|check| {
                let start = Instant::now();
                let result = check.check().with_duration(start.elapsed());

                match result.status {
                    CheckStatus::Pass => {
                        info!(check = check.name(), message = %result.message, "Health check passed")
                    }
                    status => {
                        warn!(check = check.name(), ?status, message = %result.message, "Health check degraded")
                    }
                }

                CheckOutcome {
                    name: check.name().to_string(),
                    description: check.description(),
                    result,
                }
            })
            .collect();

        HealthCheckReport { outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, CheckStatus);

    impl SystemCheck for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn check(&self) -> CheckResult {
            CheckResult::new(self.1, "fixed")
        }
    }

    #[test]
    fn test_report_tallies() {
        let report = HealthCheckRunner::new()
            .add_check(Fixed("a", CheckStatus::Pass))
            .add_check(Fixed("b", CheckStatus::Warn))
            .add_check(Fixed("c", CheckStatus::Pass))
            .run();

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.warned(), 1);
        assert!(report.is_healthy());
        assert_eq!(report.exit_code(), 2);
        assert_eq!(report.get("b").map(|r| r.status), Some(CheckStatus::Warn));
    }

    #[test]
    fn test_failure_dominates_exit_code() {
        let report = HealthCheckRunner::new()
            .add_check(Fixed("warn", CheckStatus::Warn))
            .add_check(Fixed("fail", CheckStatus::Fail))
            .run();

        assert!(!report.is_healthy());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_empty_suite_is_healthy() {
        let report = HealthCheckRunner::new().run();
        assert_eq!(report.exit_code(), 0);
    }
}
