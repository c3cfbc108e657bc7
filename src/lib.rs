//! Soul Codex - a martial soul compendium dashboard
//!
//! Core modules:
//! - `compendium`: JSON catalog loading and aggregate statistics
//! - `dashboard`: scene-building view layer (no GPU dependencies)
//! - `render`: WebGPU shape tessellation and text drawing
//! - `theme`: colors and the dashboard palette
//! - `app`: winit shell wiring input to the view

pub mod app;
pub mod compendium;
pub mod dashboard;
pub mod render;
pub mod theme;

pub use compendium::{Compendium, CompendiumSummary, LoadError, MartialSoul};
pub use dashboard::{DashboardView, Scene, ViewContent};

/// Window defaults
pub mod consts {
    pub const WINDOW_TITLE: &str = "Soul Codex";
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 800;

    /// Pixels scrolled per mouse-wheel line
    pub const SCROLL_LINE_STEP: f32 = 48.0;
    /// How long a primary-action status banner stays up, in frames
    pub const STATUS_BANNER_FRAMES: u32 = 240;
}
