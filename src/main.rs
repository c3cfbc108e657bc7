//! Soul Codex entry point

use winit::event_loop::{ControlFlow, EventLoop};

use soul_codex::app::CodexApp;

fn main() {
    env_logger::init();
    log::info!("Soul Codex starting...");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CodexApp::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("Event loop terminated: {err}");
    }
}
