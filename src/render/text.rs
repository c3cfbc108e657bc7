//! Text pass on top of the shape pipeline
//!
//! Each scene text run becomes one shaped glyphon buffer per frame. The
//! view anchors runs instead of measuring them, so alignment resolves here
//! against real glyph metrics.

use glyphon::cosmic_text::Weight;
use glyphon::{
    Attrs, Buffer, Cache, Family, FontSystem, Metrics, Resolution, Shaping, SwashCache, TextArea,
    TextAtlas, TextBounds, TextRenderer, Viewport,
};

use crate::dashboard::scene::{Anchor, FontRole, Scene};
use crate::theme::Color;

/// Everything the glyphon stack needs between frames
pub struct TextContext {
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    renderer: TextRenderer,
    line_buffers: Vec<Buffer>,
    placements: Vec<Placement>,
}

struct Placement {
    left: f32,
    top: f32,
    bounds: TextBounds,
    color: glyphon::Color,
}

impl TextContext {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
    ) -> Self {
        let cache = Cache::new(device);
        let viewport = Viewport::new(device, &cache);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let renderer = TextRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            viewport,
            atlas,
            renderer,
            line_buffers: Vec::new(),
            placements: Vec::new(),
        }
    }

    /// Shape and position every text run in the scene for this frame
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
        scroll_y: f32,
        screen: (u32, u32),
    ) {
        self.viewport.update(
            queue,
            Resolution {
                width: screen.0,
                height: screen.1,
            },
        );

        self.line_buffers.clear();
        self.placements.clear();

        for run in scene.text_runs() {
            let metrics = Metrics::new(run.role.size(), run.role.line_height());
            let mut buffer = Buffer::new(&mut self.font_system, metrics);
            buffer.set_size(&mut self.font_system, None, None);
            buffer.set_text(
                &mut self.font_system,
                &run.text,
                &attrs_for(run.role),
                Shaping::Advanced,
            );
            buffer.shape_until_scroll(&mut self.font_system, false);

            let line_width = buffer
                .layout_runs()
                .fold(0.0f32, |width, line| width.max(line.line_w));

            let top = run.pos.y - scroll_y;
            let (left, clip_left, clip_right) = match run.anchor {
                Anchor::TopLeft => (run.pos.x, run.pos.x, run.pos.x + run.max_width),
                Anchor::TopCenter => (
                    run.pos.x - line_width / 2.0,
                    run.pos.x - run.max_width / 2.0,
                    run.pos.x + run.max_width / 2.0,
                ),
                Anchor::TopRight => (
                    run.pos.x - line_width,
                    run.pos.x - run.max_width,
                    run.pos.x,
                ),
            };
            let bounds = TextBounds {
                left: clip_left.floor() as i32,
                top: top.floor() as i32,
                right: clip_right.ceil() as i32,
                bottom: (top + run.role.line_height()).ceil() as i32,
            };

            self.line_buffers.push(buffer);
            self.placements.push(Placement {
                left,
                top,
                bounds,
                color: glyphon_color(run.color),
            });
        }

        let areas = self
            .line_buffers
            .iter()
            .zip(&self.placements)
            .map(|(buffer, placement)| TextArea {
                buffer,
                left: placement.left,
                top: placement.top,
                scale: 1.0,
                bounds: placement.bounds,
                default_color: placement.color,
                custom_glyphs: &[],
            });

        if let Err(err) = self.renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            areas,
            &mut self.swash_cache,
        ) {
            log::warn!("text prepare failed: {err}");
        }
    }

    /// Draw the prepared text into the current render pass
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        if let Err(err) = self.renderer.render(&self.atlas, &self.viewport, pass) {
            log::warn!("text render failed: {err}");
        }
    }

    /// Evict unused glyphs after presenting
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}

fn attrs_for(role: FontRole) -> Attrs<'static> {
    let weight = match role {
        FontRole::Heading => Weight::BOLD,
        FontRole::Button => Weight::SEMIBOLD,
        FontRole::Paragraph => Weight::NORMAL,
    };
    Attrs::new().family(Family::SansSerif).weight(weight)
}

fn glyphon_color(color: Color) -> glyphon::Color {
    glyphon::Color::rgba(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        (color.a * 255.0) as u8,
    )
}
