use std::cell::RefCell;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::game::GameState;
use crate::hud;
use crate::input::{InputState, control_for_key};

struct ClientState {
    window: Arc<Window>,
    game: GameState,
    input: InputState,
}

thread_local! {
    static STATE: RefCell<Option<ClientState>> = const { RefCell::new(None) };
}

struct App;

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if STATE.with(|s| s.borrow().is_some()) {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(Window::default_attributes().with_title("Obby Tower"))
                .unwrap(),
        );

        use winit::platform::web::WindowExtWebSys;
        let canvas = window.canvas().expect("No canvas");

        let web_window = web_sys::window().expect("No window");
        let dpr = web_window.device_pixel_ratio();
        let (w, h) = (
            (web_window.inner_width().unwrap().as_f64().unwrap() * dpr) as u32,
            (web_window.inner_height().unwrap().as_f64().unwrap() * dpr) as u32,
        );
        canvas.set_width(w);
        canvas.set_height(h);
        canvas
            .style()
            .set_css_text("width: 100%; height: 100%; display: block;");

        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                doc.get_element_by_id("game-container")?
                    .append_child(&canvas)
                    .ok()
            })
            .expect("Couldn't append canvas");

        STATE.with(|s| {
            *s.borrow_mut() = Some(ClientState {
                window: window.clone(),
                game: GameState::new(),
                input: InputState::new(),
            })
        });
        window.request_redraw();
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: winit::event::DeviceId, event: DeviceEvent) {
        let DeviceEvent::MouseMotion { delta } = event else {
            return;
        };
        STATE.with(|s| {
            let mut guard = s.borrow_mut();
            let Some(state) = guard.as_mut() else { return };
            if state.input.cursor_grabbed {
                state
                    .input
                    .handle_mouse_move(delta.0 as f32, delta.1 as f32);
            }
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    STATE.with(|s| {
                        let mut guard = s.borrow_mut();
                        let Some(state) = guard.as_mut() else { return };
                        match event.state {
                            ElementState::Pressed if key == KeyCode::Escape => {
                                if let Some(d) = web_sys::window().and_then(|w| w.document()) {
                                    d.exit_pointer_lock();
                                }
                                state.input.cursor_grabbed = false;
                            }
                            ElementState::Pressed => {
                                if let Some(control) = control_for_key(key) {
                                    state.input.press(control);
                                }
                            }
                            ElementState::Released => {
                                if let Some(control) = control_for_key(key) {
                                    state.input.release(control);
                                }
                            }
                        }
                    });
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Right,
                ..
            } => {
                // right-click engages mouse look
                if let Some(canvas) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("game-container"))
                    .and_then(|c| c.first_element_child())
                {
                    canvas.request_pointer_lock();
                    STATE.with(|s| {
                        if let Some(state) = s.borrow_mut().as_mut() {
                            state.input.cursor_grabbed = true;
                        }
                    });
                }
            }
            WindowEvent::RedrawRequested => {
                STATE.with(|s| {
                    let mut guard = s.borrow_mut();
                    let Some(state) = guard.as_mut() else { return };

                    state.game.update(&mut state.input);

                    for level in state.game.take_checkpoints() {
                        hud::flash_checkpoint(level);
                    }
                    if state.game.take_respawn() {
                        hud::clear_checkpoint_flash();
                    }
                    hud::update_stats(&state.game.progress());

                    state.window.request_redraw();
                });
            }
            _ => {}
        }
    }
}

pub fn run() {
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&info.to_string().into())
    }));
    console_log::init_with_level(log::Level::Info).expect("Logger init failed");

    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut App);
}
