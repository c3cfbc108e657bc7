//! Draw commands emitted by the dashboard view
//!
//! The view lays out each frame as an ordered command list; the renderer
//! tessellates the shapes and shapes the text. Keeping the list free of GPU
//! types lets every layout decision be asserted in plain tests.

use glam::Vec2;

use crate::theme::Color;

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            w: self.w - amount * 2.0,
            h: self.h - amount * 2.0,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Which corners of a rounded rect are actually rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners(u8);

impl Corners {
    pub const TOP_LEFT: Self = Self(0b0001);
    pub const TOP_RIGHT: Self = Self(0b0010);
    pub const BOTTOM_LEFT: Self = Self(0b0100);
    pub const BOTTOM_RIGHT: Self = Self(0b1000);
    pub const ALL: Self = Self(0b1111);
    pub const TOP: Self = Self(0b0011);
    pub const BOTTOM: Self = Self(0b1100);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn has(self, corner: Self) -> bool {
        self.0 & corner.0 != 0
    }
}

/// Type roles mapped to fixed sizes by the text renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Heading,
    Button,
    Paragraph,
}

impl FontRole {
    pub fn size(self) -> f32 {
        match self {
            FontRole::Heading => 28.0,
            FontRole::Button => 16.0,
            FontRole::Paragraph => 14.0,
        }
    }

    /// Vertical space one line occupies; layout code stacks sections with
    /// these instead of measuring glyphs
    pub fn line_height(self) -> f32 {
        match self {
            FontRole::Heading => 36.0,
            FontRole::Button => 22.0,
            FontRole::Paragraph => 20.0,
        }
    }
}

/// Horizontal placement of a text run relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
}

/// A single line of text; alignment resolves against real glyph metrics at
/// draw time
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub role: FontRole,
    pub color: Color,
    /// Anchor point (top edge of the line)
    pub pos: Vec2,
    pub anchor: Anchor,
    /// Clip width; text never spills past it
    pub max_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect { rect: Rect, color: Color },
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        corners: Corners,
        color: Color,
    },
    /// Thin outline, used for the primary action button ring
    StrokeRoundedRect { rect: Rect, radius: f32, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text(TextRun),
}

/// One frame's ordered draw list plus the total content height (used to
/// clamp scrolling)
#[derive(Debug, Clone, Default)]
pub struct Scene {
    cmds: Vec<DrawCmd>,
    content_height: f32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::FillRect { rect, color });
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.rounded_corners(rect, radius, Corners::ALL, color);
    }

    pub fn rounded_corners(&mut self, rect: Rect, radius: f32, corners: Corners, color: Color) {
        self.cmds.push(DrawCmd::FillRoundedRect {
            rect,
            radius,
            corners,
            color,
        });
    }

    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.cmds.push(DrawCmd::StrokeRoundedRect { rect, radius, color });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.cmds.push(DrawCmd::Circle { center, radius, color });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        role: FontRole,
        color: Color,
        pos: Vec2,
        anchor: Anchor,
        max_width: f32,
    ) {
        self.cmds.push(DrawCmd::Text(TextRun {
            text: text.into(),
            role,
            color,
            pos,
            anchor,
            max_width,
        }));
    }

    /// Iterate only the text runs (handy for assertions and the text pass)
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text(run) => Some(run),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(60.0, 35.0)));
        assert!(!rect.contains(Vec2::new(111.0, 35.0)));
        assert!(!rect.contains(Vec2::new(60.0, 61.0)));
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0).inset(10.0);
        assert_eq!(rect, Rect::new(10.0, 10.0, 80.0, 80.0));
    }

    #[test]
    fn test_corner_flags() {
        let top = Corners::TOP_LEFT.union(Corners::TOP_RIGHT);
        assert_eq!(top, Corners::TOP);
        assert!(top.has(Corners::TOP_LEFT));
        assert!(!top.has(Corners::BOTTOM_LEFT));
        assert!(Corners::ALL.has(Corners::BOTTOM_RIGHT));
    }

    #[test]
    fn test_scene_collects_text_runs() {
        let mut scene = Scene::new();
        scene.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), crate::theme::Color::WHITE);
        scene.text(
            "hello",
            FontRole::Button,
            crate::theme::Color::WHITE,
            Vec2::ZERO,
            Anchor::TopLeft,
            100.0,
        );
        assert_eq!(scene.cmds().len(), 2);
        assert_eq!(scene.text_runs().count(), 1);
    }
}
