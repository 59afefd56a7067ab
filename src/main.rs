use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::Window,
};

// Import from the library crate
use courtside::{
    logging,
    controller::{InputEvent, MouseButton, Simulation},
    model::court::demo_court,
    SimConfig,
};

/// Frames between window title refreshes.
const TITLE_EVERY: u32 = 15;

struct App {
    window: Arc<Window>,
    sim: Simulation,
    started: Instant,
    cursor: (f32, f32),
    frame_count: u32,
}

impl App {
    fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        let mut sim = Simulation::new(SimConfig::default(), size.width, size.height);
        // No asset loader on native: stand in the built-in court
        sim.load_geometry(demo_court());

        Self {
            window,
            sim,
            started: Instant::now(),
            cursor: (0.0, 0.0),
            frame_count: 0,
        }
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event: KeyEvent { state, logical_key, .. }, .. } => {
                let Some(key) = key_name(logical_key) else {
                    return false;
                };
                let event = match state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                };
                self.sim.handle_event(&event);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                true
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    _ => MouseButton::Middle,
                };
                let (x, y) = self.cursor;
                self.sim.handle_event(&InputEvent::PointerClick { button, x, y });
                true
            }
            WindowEvent::Focused(false) => {
                self.sim.handle_event(&InputEvent::FocusLost);
                true
            }
            _ => false,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.sim.resize(new_size.width, new_size.height);
        }
    }

    fn update(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let snapshot = self.sim.tick(now_ms);

        self.frame_count += 1;
        if self.frame_count % TITLE_EVERY == 0 {
            let p = snapshot.character_position;
            let b = snapshot.ball_position;
            self.window.set_title(&format!(
                "courtside | camera {:?} | pose {:?} | player {:.1}, {:.1}, {:.1} | ball {:.1}, {:.1}, {:.1}",
                snapshot.camera_mode, snapshot.pose, p.x, p.y, p.z, b.x, b.y, b.z,
            ));
        }
    }
}

/// Key names in the same spelling the browser reports for `KeyboardEvent.key`.
fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(s) => Some(s.to_string()),
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp".to_string()),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown".to_string()),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft".to_string()),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight".to_string()),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    tracing::info!("starting courtside");

    let event_loop = EventLoop::new()?;
    let window_attributes = Window::default_attributes()
        .with_title("courtside")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
    #[allow(deprecated)]
    let window = Arc::new(event_loop.create_window(window_attributes)?);

    let mut app = App::new(window.clone());

    #[allow(deprecated)]
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            app.update();
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    })?;

    tracing::info!("window closed");
    Ok(())
}
