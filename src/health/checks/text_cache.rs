//! Text cache reuse and expiry check

use std::path::Path;

use crate::app::renderer::{PresentationBackend, RecordingBackend, TextCache};
use crate::error::Result;
use crate::health::check::{CheckResult, Findings, SystemCheck};

pub struct TextCacheCheck {
    max_age: u32,
}

impl TextCacheCheck {
    pub fn new() -> Self {
        Self { max_age: 2 }
    }

    pub fn with_max_age(max_age: u32) -> Self {
        Self { max_age }
    }

    fn exercise(&self, findings: &mut Findings) -> Result<()> {
        let mut backend = RecordingBackend::new().with_font("mono.ttf");
        let font = backend.load_font(Path::new("mono.ttf"), 12)?;
        let mut cache = TextCache::new(self.max_age);

        for _ in 0..10 {
            cache.resolve(&mut backend, &font, "FPS 60")?;
            cache.tick(&mut backend);
        }
        let rasterized = backend.rasterize_count();
        findings.require(
            rasterized == 1,
            format!("steady text rasterized {rasterized} time(s) over 10 frames"),
        );

        // Last use; from here on the entry only ages
        cache.resolve(&mut backend, &font, "FPS 60")?;
        let mut evicted_at = None;
        for frame in 1..=self.max_age + 2 {
            if cache.tick(&mut backend) > 0 {
                evicted_at = Some(frame);
                break;
            }
        }
        findings.require(
            evicted_at == Some(self.max_age + 1),
            format!("unused text evicted after {evicted_at:?} idle frames"),
        );
        findings.require(
            backend.destroy_count() == 1 && cache.is_empty(),
            "evicted texture released exactly once",
        );

        Ok(())
    }
}

impl Default for TextCacheCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for TextCacheCheck {
    fn name(&self) -> &'static str {
        "Text Cache"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Reuses rasterized strings and expires idle ones")
    }

    fn check(&self) -> CheckResult {
        let mut findings = Findings::new();
        if let Err(e) = self.exercise(&mut findings) {
            findings.require(false, format!("setup failed: {e}"));
        }
        findings.finish(
            format!("Idle text expires after {} frames", self.max_age + 1),
            "Text cache lifetime wrong",
        )
    }
}
