//! Rendering: backend seam, compositor, nine-slice and text caching
//!
//! ## Architecture
//!
//! - `backend`: the [`PresentationBackend`] trait every draw goes through
//! - `command`: blit descriptors handed to the backend
//! - `compositor`: stateless draw operations (primitives, textures, text)
//! - `nine_slice`: decomposition of resizable textures into segments
//! - `text_cache`: frame-aged cache of rasterized strings
//! - `recording`: headless backend that records calls
//! - `texture`: texture, resizable texture and font handles

pub mod backend;
pub mod command;
pub mod compositor;
pub mod nine_slice;
pub mod recording;
pub mod text_cache;
pub mod texture;

pub use backend::{
    BlendMode, FontHandle, Mirror, PresentationBackend, ScaleMode, TextureHandle, TextureState,
};
pub use command::Blit;
pub use compositor::{Compositor, ResizableDraw, TextAlignment, TextureDraw};
pub use recording::{BackendCall, RecordingBackend};
pub use text_cache::{CacheStats, TextCache};
pub use texture::{Font, ResizableTexture, Texture};
