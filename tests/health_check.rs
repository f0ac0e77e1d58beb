//! Integration tests for the health check suite

use framekit::health::{self, CheckStatus, HealthCheckRunner, SystemCheck, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed(),
        report.warned()
    );
    assert_eq!(report.total(), 6);
}

#[test]
fn test_config_check() {
    let result = ConfigCheck::new().check();
    assert!(result.status.is_ok(), "Config check failed: {}", result.message);
}

#[test]
fn test_config_check_unknown_profile_uses_defaults() {
    let result = ConfigCheck::with_profiles(["no-such-profile"]).check();
    assert!(result.status.is_ok(), "{}", result.message);
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck::new().check();
    assert_eq!(result.status, CheckStatus::Pass);
    assert!(result.details.unwrap().contains("Rustc"));
}

#[test]
fn test_system_info_check() {
    let result = SystemInfoCheck::new().check();
    assert!(result.status.is_ok(), "System info check failed: {}", result.message);
}

#[test]
fn test_input_check() {
    let result = InputCheck::new().check();
    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "{}",
        result.details.unwrap_or_default()
    );
}

#[test]
fn test_compositor_check() {
    let result = CompositorCheck::new().check();
    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "{}",
        result.details.unwrap_or_default()
    );
}

#[test]
fn test_text_cache_check() {
    for max_age in [1, 2, 5] {
        let result = TextCacheCheck::with_max_age(max_age).check();
        assert_eq!(
            result.status,
            CheckStatus::Pass,
            "max_age {max_age}: {}",
            result.details.unwrap_or_default()
        );
    }
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthCheckRunner::new()
        .add_check(InputCheck::new())
        .add_check(TextCacheCheck::new())
        .run();

    assert_eq!(report.total(), 2);
    assert_eq!(report.passed() + report.warned() + report.failed(), report.total());
    assert_eq!(report.exit_code(), 0);
}
