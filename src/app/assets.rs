//! Asset loading relative to the configured asset root

use std::path::{Path, PathBuf};

use tracing::info;

use super::renderer::{Font, PresentationBackend, ResizableTexture, Texture};
use crate::error::Result;

/// Resolves asset paths and loads them through the backend
///
/// Failures are returned as-is; there is no fallback asset.
#[derive(Debug, Clone)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn load_texture<B>(&self, backend: &mut B, path: impl AsRef<Path>) -> Result<Texture>
    where
        B: PresentationBackend + ?Sized,
    {
        let path = self.resolve(path);
        let texture = backend.load_texture(&path)?;
        info!(
            path = %path.display(),
            width = texture.width,
            height = texture.height,
            "Loaded texture"
        );
        Ok(texture)
    }

    /// Load a texture and partition it with offsets measured from each edge
    pub fn load_resizable_texture<B>(
        &self,
        backend: &mut B,
        path: impl AsRef<Path>,
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    ) -> Result<ResizableTexture>
    where
        B: PresentationBackend + ?Sized,
    {
        let texture = self.load_texture(backend, path)?;
        ResizableTexture::from_edges(texture, left, right, top, bottom)
    }

    pub fn load_font<B>(
        &self,
        backend: &mut B,
        path: impl AsRef<Path>,
        point_size: u32,
    ) -> Result<Font>
    where
        B: PresentationBackend + ?Sized,
    {
        let path = self.resolve(path);
        let font = backend.load_font(&path, point_size)?;
        info!(path = %path.display(), point_size, "Loaded font");
        Ok(font)
    }
}
