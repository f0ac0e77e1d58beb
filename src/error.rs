//! Engine error types

use std::path::PathBuf;

use thiserror::Error;

/// Kind of resource a load failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Texture,
    Font,
    RenderTarget,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Texture => "texture",
            ResourceKind::Font => "font",
            ResourceKind::RenderTarget => "render target",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the engine
///
/// All of these are fatal to the caller; nothing in the engine retries.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load {kind} '{}': {reason}", path.display())]
    ResourceLoad {
        kind: ResourceKind,
        path: PathBuf,
        reason: String,
    },

    #[error(
        "invalid nine-slice offsets for {width}x{height} texture: \
         left={left} right={right} top={top} bottom={bottom}"
    )]
    InvalidNineSlice {
        width: i32,
        height: i32,
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    },

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
