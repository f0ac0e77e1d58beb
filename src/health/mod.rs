//! Startup diagnostics
//!
//! Each subsystem gets a [`SystemCheck`] that exercises it in isolation;
//! [`HealthCheckRunner`] runs them and [`print_report`] renders the result.
//! Used by the binary's `--health` flag and by CI.
//!
//! # Example
//!
//! ```no_run
//! use framekit::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(InputCheck::new())
//!     .run();
//!
//! std::process::exit(report.exit_code());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, Findings, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{CheckOutcome, HealthCheckReport, HealthCheckRunner};

/// Run every built-in check
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::BuildInfoCheck::new())
        .add_check(checks::SystemInfoCheck::new())
        .add_check(checks::InputCheck::new())
        .add_check(checks::CompositorCheck::new())
        .add_check(checks::TextCacheCheck::new())
        .run()
}
