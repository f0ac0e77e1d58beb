//! Configuration loading check

use crate::config::EngineConfig;
use crate::health::check::{CheckResult, Findings, SystemCheck};

/// Loads every profile and sanity-checks the values
pub struct ConfigCheck {
    profiles: Vec<String>,
}

impl ConfigCheck {
    pub fn new() -> Self {
        Self::with_profiles(["debug", "release"])
    }

    pub fn with_profiles<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            profiles: profiles.into_iter().map(Into::into).collect(),
        }
    }

    fn inspect(findings: &mut Findings, profile: &str, config: &EngineConfig) {
        let window = &config.window;
        findings.require(
            window.width >= 1.0 && window.height >= 1.0,
            format!(
                "'{profile}': resolution {}x{}",
                window.width, window.height
            ),
        );
        findings.prefer(
            config.input.gamepad_slots > 0,
            format!("'{profile}': {} gamepad slots", config.input.gamepad_slots),
        );
        findings.prefer(
            config.text.max_age > 0,
            format!("'{profile}': text cache max age {}", config.text.max_age),
        );
        findings.note(format!(
            "'{profile}': assets under {}",
            config.assets.root.display()
        ));
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Loads each profile from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut findings = Findings::new();

        for profile in &self.profiles {
            match EngineConfig::load(profile) {
                Ok(config) => Self::inspect(&mut findings, profile, &config),
                Err(e) => findings.require(false, format!("'{profile}': {e}")),
            }
        }

        match EngineConfig::load_from_env() {
            Ok(config) => findings.note(format!("APP_PROFILE selects '{}'", config.profile)),
            Err(e) => findings.prefer(false, format!("environment: {e}")),
        }

        let count = self.profiles.len();
        findings.finish(
            format!("{count} profiles validated"),
            "Configuration has problems",
        )
    }
}
