//! Dashboard view layer
//!
//! Turns compendium data and bound display content into a scene of draw
//! commands. Nothing in here touches the GPU:
//! - Fixed per-role line heights drive the vertical layout
//! - Horizontal text alignment is deferred to the renderer via anchors
//! - The scene is rebuilt from scratch for every frame's bounds

pub mod content;
pub mod format;
pub mod scene;
pub mod view;

pub use content::ViewContent;
pub use scene::{Anchor, Corners, DrawCmd, FontRole, Rect, Scene, TextRun};
pub use view::{AFFINITY_ROW_COUNT, CompendiumHandle, DashboardView, SPOTLIGHT_COUNT};
