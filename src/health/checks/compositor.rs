//! Compositor check against the recording backend

use std::path::Path;

use glam::Vec2;

use crate::app::geometry::{Bounds2, WHITE};
use crate::app::renderer::{
    BackendCall, Compositor, PresentationBackend, RecordingBackend, ResizableDraw,
    ResizableTexture, TextAlignment, TextCache,
};
use crate::error::Result;
use crate::health::check::{CheckResult, Findings, SystemCheck};

pub struct CompositorCheck;

impl CompositorCheck {
    pub fn new() -> Self {
        Self
    }

    fn exercise(findings: &mut Findings) -> Result<()> {
        let backend = RecordingBackend::new()
            .with_texture("panel.png", 30, 30)
            .with_font("mono.ttf");
        let mut compositor = Compositor::new(backend, TextCache::default());

        let texture = compositor
            .backend_mut()
            .load_texture(Path::new("panel.png"))?;
        let font = compositor
            .backend_mut()
            .load_font(Path::new("mono.ttf"), 10)?;
        let panel = ResizableTexture::from_absolute(texture, 10, 19, 10, 19)?;

        compositor.backend_mut().clear_calls();
        compositor.draw_resizable_texture(
            &panel,
            Bounds2::from_xywh(0.0, 0.0, 40.0, 40.0),
            &ResizableDraw::default(),
        );
        let copies = compositor
            .backend()
            .calls()
            .iter()
            .filter(|call| matches!(call, BackendCall::Copy { .. }))
            .count();
        findings.require(copies == 9, format!("stretched panel drew {copies}/9 segments"));

        compositor.backend_mut().clear_calls();
        compositor.draw_resizable_texture(
            &panel,
            Bounds2::from_xywh(0.0, 0.0, 5.0, 5.0),
            &ResizableDraw::default(),
        );
        let draws = compositor.backend().draw_count();
        findings.require(draws == 4, format!("undersized panel drew {draws} corners"));

        let text = "0123456789";
        let origin = Vec2::new(100.0, 0.0);
        let right = compositor.draw_string(text, origin, WHITE, &font, TextAlignment::Right, true)?;
        let center =
            compositor.draw_string(text, origin, WHITE, &font, TextAlignment::Center, true)?;
        findings.require(
            right.position.x == 50.0 && center.position.x == 75.0,
            format!(
                "alignment offsets right={} center={}",
                right.position.x, center.position.x
            ),
        );
        findings.require(
            compositor.backend().draw_count() == 4,
            "measuring text draws nothing",
        );

        Ok(())
    }
}

impl Default for CompositorCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for CompositorCheck {
    fn name(&self) -> &'static str {
        "Compositor"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Draws nine-slice panels and aligned text headlessly")
    }

    fn check(&self) -> CheckResult {
        let mut findings = Findings::new();
        if let Err(e) = Self::exercise(&mut findings) {
            findings.require(false, format!("setup failed: {e}"));
        }
        findings.finish("Nine-slice and text layout correct", "Compositor output unexpected")
    }
}
