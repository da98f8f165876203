// Infrastructure layer - External dependencies and adapters
pub mod bar_surface;
pub mod config;
pub mod solar;
