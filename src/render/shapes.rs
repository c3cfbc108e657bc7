//! Shape tessellation for the dashboard's panels
//!
//! Everything is emitted as flat triangle lists; rounded corners are sampled
//! arcs fanned from the shape's center.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use crate::dashboard::scene::{Corners, DrawCmd, Rect, Scene};
use crate::theme::Color;

use super::vertex::Vertex;

/// Arc samples per rounded corner
const CORNER_SEGMENTS: u32 = 8;

/// Two triangles covering an axis-aligned rect
pub fn rect(rect: Rect, color: Color) -> Vec<Vertex> {
    let c = color.to_array();
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
    vec![
        Vertex::new(x0, y0, c),
        Vertex::new(x1, y0, c),
        Vertex::new(x1, y1, c),
        Vertex::new(x1, y1, c),
        Vertex::new(x0, y1, c),
        Vertex::new(x0, y0, c),
    ]
}

/// Filled circle as a triangle fan around the center
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let c = color.to_array();
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, c));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            c,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            c,
        ));
    }

    vertices
}

/// Filled rounded rect; only the corners named in `corners` are rounded
pub fn rounded_rect(rect: Rect, radius: f32, corners: Corners, color: Color) -> Vec<Vertex> {
    if rect.is_empty() {
        return Vec::new();
    }

    let outline = perimeter_points(rect, radius, corners);
    let center = Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
    let c = color.to_array();

    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(center.x, center.y, c));
        vertices.push(Vertex::new(a.x, a.y, c));
        vertices.push(Vertex::new(b.x, b.y, c));
    }

    vertices
}

/// Thin ring along the edge of a fully rounded rect
pub fn rounded_rect_outline(rect: Rect, radius: f32, thickness: f32, color: Color) -> Vec<Vertex> {
    if rect.is_empty() || thickness <= 0.0 {
        return Vec::new();
    }

    let outer = perimeter_points(rect, radius, Corners::ALL);
    let inner = perimeter_points(
        rect.inset(thickness),
        (radius - thickness).max(0.0),
        Corners::ALL,
    );
    debug_assert_eq!(outer.len(), inner.len());

    let c = color.to_array();
    let mut vertices = Vec::with_capacity(outer.len() * 6);
    for i in 0..outer.len() {
        let j = (i + 1) % outer.len();
        let (o1, o2) = (outer[i], outer[j]);
        let (i1, i2) = (inner[i], inner[j]);

        vertices.push(Vertex::new(i1.x, i1.y, c));
        vertices.push(Vertex::new(o1.x, o1.y, c));
        vertices.push(Vertex::new(i2.x, i2.y, c));

        vertices.push(Vertex::new(i2.x, i2.y, c));
        vertices.push(Vertex::new(o1.x, o1.y, c));
        vertices.push(Vertex::new(o2.x, o2.y, c));
    }

    vertices
}

/// Tessellate every shape command in a scene, shifted up by `scroll_y`.
/// Text commands are skipped; the text pass handles them.
pub fn scene_vertices(scene: &Scene, scroll_y: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let shift = Vec2::new(0.0, -scroll_y);

    for cmd in scene.cmds() {
        match cmd {
            DrawCmd::FillRect { rect: r, color } => {
                vertices.extend(rect(translate(*r, shift), *color));
            }
            DrawCmd::FillRoundedRect {
                rect: r,
                radius,
                corners,
                color,
            } => {
                vertices.extend(rounded_rect(translate(*r, shift), *radius, *corners, *color));
            }
            DrawCmd::StrokeRoundedRect {
                rect: r,
                radius,
                color,
            } => {
                vertices.extend(rounded_rect_outline(
                    translate(*r, shift),
                    *radius,
                    1.5,
                    *color,
                ));
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                vertices.extend(circle(*center + shift, *radius, *color, 20));
            }
            DrawCmd::Text(_) => {}
        }
    }

    vertices
}

fn translate(rect: Rect, shift: Vec2) -> Rect {
    Rect::new(rect.x + shift.x, rect.y + shift.y, rect.w, rect.h)
}

/// Clockwise outline: arcs where a corner is rounded, the sharp corner
/// point otherwise. Every corner contributes `CORNER_SEGMENTS + 1` points so
/// outer/inner outlines always pair up.
fn perimeter_points(rect: Rect, radius: f32, corners: Corners) -> Vec<Vec2> {
    let radius = radius.clamp(0.0, rect.w.min(rect.h) / 2.0);
    let mut points = Vec::with_capacity(((CORNER_SEGMENTS + 1) * 4) as usize);

    // (arc center, start angle, sharp corner point)
    let corner_arcs = [
        (
            Corners::TOP_LEFT,
            Vec2::new(rect.x + radius, rect.y + radius),
            PI,
            Vec2::new(rect.x, rect.y),
        ),
        (
            Corners::TOP_RIGHT,
            Vec2::new(rect.right() - radius, rect.y + radius),
            PI + FRAC_PI_2,
            Vec2::new(rect.right(), rect.y),
        ),
        (
            Corners::BOTTOM_RIGHT,
            Vec2::new(rect.right() - radius, rect.bottom() - radius),
            0.0,
            Vec2::new(rect.right(), rect.bottom()),
        ),
        (
            Corners::BOTTOM_LEFT,
            Vec2::new(rect.x + radius, rect.bottom() - radius),
            FRAC_PI_2,
            Vec2::new(rect.x, rect.bottom()),
        ),
    ];

    for (corner, arc_center, start, sharp) in corner_arcs {
        if corners.has(corner) && radius > 0.0 {
            for i in 0..=CORNER_SEGMENTS {
                let theta = start + (i as f32 / CORNER_SEGMENTS as f32) * FRAC_PI_2;
                points.push(arc_center + radius * Vec2::new(theta.cos(), theta.sin()));
            }
        } else {
            for _ in 0..=CORNER_SEGMENTS {
                points.push(sharp);
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_inside(vertices: &[Vertex], rect: Rect) {
        for v in vertices {
            assert!(
                v.position[0] >= rect.x - 1e-3 && v.position[0] <= rect.right() + 1e-3,
                "x {} outside {:?}",
                v.position[0],
                rect
            );
            assert!(
                v.position[1] >= rect.y - 1e-3 && v.position[1] <= rect.bottom() + 1e-3,
                "y {} outside {:?}",
                v.position[1],
                rect
            );
        }
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        let vertices = rect(r, Color::WHITE);
        assert_eq!(vertices.len(), 6);
        assert_inside(&vertices, r);
    }

    #[test]
    fn test_circle_vertex_count() {
        let vertices = circle(Vec2::ZERO, 5.0, Color::WHITE, 16);
        assert_eq!(vertices.len(), 16 * 3);
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        let vertices = rounded_rect(r, 20.0, Corners::ALL, Color::WHITE);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 3, 0);
        assert_inside(&vertices, r);
    }

    #[test]
    fn test_rounded_rect_square_corners_reach_rect_corner() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let vertices = rounded_rect(r, 20.0, Corners::TOP, Color::WHITE);
        // Bottom corners stay sharp, so the exact corner point must appear
        let has_bottom_left = vertices
            .iter()
            .any(|v| v.position == [r.x, r.bottom()]);
        assert!(has_bottom_left);
    }

    #[test]
    fn test_radius_clamped_to_half_extent() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let vertices = rounded_rect(r, 500.0, Corners::ALL, Color::WHITE);
        assert_inside(&vertices, r);
    }

    #[test]
    fn test_empty_rect_yields_nothing() {
        assert!(rounded_rect(Rect::new(0.0, 0.0, 0.0, 10.0), 4.0, Corners::ALL, Color::WHITE).is_empty());
    }

    #[test]
    fn test_scene_vertices_apply_scroll() {
        let mut scene = Scene::new();
        scene.fill_rect(Rect::new(0.0, 100.0, 10.0, 10.0), Color::WHITE);
        scene.text(
            "skipped",
            crate::dashboard::scene::FontRole::Button,
            Color::WHITE,
            Vec2::ZERO,
            crate::dashboard::scene::Anchor::TopLeft,
            10.0,
        );

        let vertices = scene_vertices(&scene, 40.0);
        assert_eq!(vertices.len(), 6);
        for v in &vertices {
            assert!(v.position[1] >= 60.0 - 1e-3 && v.position[1] <= 70.0 + 1e-3);
        }
    }

    #[test]
    fn test_outline_ring_vertex_count() {
        let r = Rect::new(0.0, 0.0, 100.0, 40.0);
        let vertices = rounded_rect_outline(r, 20.0, 2.0, Color::WHITE);
        assert_eq!(vertices.len(), ((CORNER_SEGMENTS + 1) * 4 * 6) as usize);
        assert_inside(&vertices, r);
    }
}
