//! Application shell: window, input and frame driving

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::compendium::Compendium;
use crate::consts::{
    SCROLL_LINE_STEP, STATUS_BANNER_FRAMES, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use crate::dashboard::{DashboardView, Rect, Scene, ViewContent};
use crate::dashboard::scene::{Anchor, FontRole};
use crate::render::{RenderState, TextContext, scene_vertices};
use crate::theme::{Color, palette};

/// Display copy bound onto the dashboard at startup
fn default_content() -> ViewContent {
    ViewContent {
        hero_highlights: vec![
            "Track every martial soul the compendium knows about".to_owned(),
            "Rank affinities and grades at a glance".to_owned(),
            "Spotlight the souls worth briefing the table on".to_owned(),
        ],
        accent_color: "#9C79FF".to_owned(),
        hero_gradient: ["#2F245D".to_owned(), "#140E30".to_owned()],
        ..Default::default()
    }
}

/// The dashboard application
pub struct CodexApp {
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    text: Option<TextContext>,
    view: DashboardView,
    scroll_y: f32,
    cursor: Vec2,
    /// Transient status banner: message plus frames left on screen
    status: Option<(String, u32)>,
}

impl CodexApp {
    pub fn new() -> Self {
        let compendium = Rc::new(RefCell::new(Compendium::new()));
        let mut view = DashboardView::new("heaven-earth-codex", compendium);
        view.bind_content(default_content());

        Self {
            window: None,
            render_state: None,
            text: None,
            view,
            scroll_y: 0.0,
            cursor: Vec2::ZERO,
            status: None,
        }
    }

    fn on_click(&mut self) {
        let content_point = self.cursor + Vec2::new(0.0, self.scroll_y);
        let hit = self
            .view
            .primary_action_rect()
            .is_some_and(|rect| rect.contains(content_point));
        if hit {
            let status = self.view.on_primary_action();
            log::info!("{status}");
            self.status = Some((status, STATUS_BANNER_FRAMES));
        }
    }

    fn redraw(&mut self) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let Some(text) = self.text.as_mut() else {
            return;
        };

        let (width, height) = render_state.size;
        let bounds = Rect::new(0.0, 0.0, width as f32, height as f32);
        let mut scene = self.view.build(bounds);

        let max_scroll = (scene.content_height() - bounds.h).max(0.0);
        self.scroll_y = self.scroll_y.clamp(0.0, max_scroll);

        if let Some((message, frames_left)) = &mut self.status {
            push_status_banner(&mut scene, message, bounds, self.scroll_y);
            *frames_left -= 1;
            if *frames_left == 0 {
                self.status = None;
            }
        }

        let vertices = scene_vertices(&scene, self.scroll_y);
        text.prepare(
            &render_state.device,
            &render_state.queue,
            &scene,
            self.scroll_y,
            render_state.size,
        );

        match render_state.render(&vertices, text) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {e:?}"),
        }
    }
}

impl Default for CodexApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for CodexApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("Failed to create window"),
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
        ));
        let text = TextContext::new(
            &render_state.device,
            &render_state.queue,
            render_state.surface_format(),
        );

        self.view.activate();
        window.request_redraw();

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.text = Some(text);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * SCROLL_LINE_STEP,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                // Upper clamp happens in redraw once content height is known
                self.scroll_y = (self.scroll_y - amount).max(0.0);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.on_click();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Banner pinned to the bottom of the viewport. The scene scrolls, so the
/// banner position counters the scroll shift.
fn push_status_banner(scene: &mut Scene, message: &str, bounds: Rect, scroll_y: f32) {
    let width = (bounds.w - 56.0).min(520.0);
    if width <= 0.0 {
        return;
    }
    let banner = Rect::new(
        bounds.x + (bounds.w - width) / 2.0,
        bounds.bottom() - 70.0 + scroll_y,
        width,
        46.0,
    );

    scene.fill_rounded_rect(banner, banner.h / 2.0, Color::rgba8(24, 18, 44, 235));
    scene.stroke_rounded_rect(banner, banner.h / 2.0, palette::FAINT_TEXT.with_alpha(0.5));
    scene.text(
        message,
        FontRole::Button,
        palette::HERO_TEXT,
        Vec2::new(
            banner.x + banner.w / 2.0,
            banner.y + (banner.h - FontRole::Button.line_height()) / 2.0,
        ),
        Anchor::TopCenter,
        banner.w - 24.0,
    );
}
