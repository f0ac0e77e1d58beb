//! Built-in checks for the engine's subsystems

pub mod build_info;
pub mod compositor;
pub mod config;
pub mod input;
pub mod system_info;
pub mod text_cache;

pub use build_info::BuildInfoCheck;
pub use compositor::CompositorCheck;
pub use config::ConfigCheck;
pub use input::InputCheck;
pub use system_info::SystemInfoCheck;
pub use text_cache::TextCacheCheck;
