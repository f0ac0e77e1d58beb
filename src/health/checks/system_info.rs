//! Host system check

use sysinfo::System;

use crate::health::check::{CheckResult, Findings, SystemCheck};

const GIB: f64 = 1_073_741_824.0;

pub struct SystemInfoCheck;

impl SystemInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Gathers OS, CPU and memory information")
    }

    fn check(&self) -> CheckResult {
        let mut sys = System::new_all();
        sys.refresh_all();

        let unknown = || "unknown".to_string();
        let mut findings = Findings::new();

        findings.note(format!(
            "OS: {} {}",
            System::name().unwrap_or_else(unknown),
            System::os_version().unwrap_or_else(unknown)
        ));
        findings.note(format!(
            "Kernel: {}",
            System::kernel_version().unwrap_or_else(unknown)
        ));

        let physical = System::physical_core_count().unwrap_or(0);
        let logical = sys.cpus().len();
        findings.prefer(
            physical > 0 && logical > 0,
            format!("CPU cores: {physical} physical, {logical} logical"),
        );

        let memory = sys.total_memory() as f64 / GIB;
        findings.prefer(memory >= 1.0, format!("Memory: {memory:.1} GiB total"));

        findings.finish("Host looks capable", "Host information incomplete")
    }
}
