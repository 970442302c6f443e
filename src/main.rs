//! Dolphin Swim entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlImageElement, KeyboardEvent, MouseEvent};

    use dolphin_swim::Tuning;
    use dolphin_swim::consts::*;
    use dolphin_swim::platform::command_for_key;
    use dolphin_swim::platform::dom::Hud;
    use dolphin_swim::renderer::{CanvasSurface, draw_scene};
    use dolphin_swim::sim::{Command, GameEvent, GameState, LoopControl, apply_command, frame};
    use dolphin_swim::ui::Overlay;

    const CANVAS_ID: &str = "gameCanvas";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        sprite: HtmlImageElement,
        sprite_loaded: Rc<Cell<bool>>,
        hud: Hud,
    }

    impl Game {
        /// Apply a player command. Returns true when a session started.
        fn command(&mut self, command: Command) -> bool {
            let started = apply_command(&mut self.state, command);
            self.flush_events();
            started
        }

        /// One animation frame: simulate, draw, update the page
        fn step(&mut self, time: f64) -> LoopControl {
            let control = frame(&mut self.state, time);
            self.render();
            self.flush_events();
            control
        }

        fn render(&mut self) {
            let sprite = self.sprite_loaded.get().then_some(&self.sprite);
            draw_scene(&mut self.surface, &self.state, sprite);
        }

        /// Reflect simulation events in the DOM
        fn flush_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::SessionStarted => self.show_overlay(Overlay::Hidden),
                    GameEvent::ScoreChanged(score) => self.hud.set_score(score),
                    GameEvent::ObstacleSpawned { .. } => {}
                    GameEvent::GameOver { score } => {
                        self.show_overlay(Overlay::GameOver { score });
                        match serde_json::to_string(&self.state.summary()) {
                            Ok(json) => log::info!("Session summary: {}", json),
                            Err(e) => log::warn!("Could not serialize summary: {}", e),
                        }
                    }
                }
            }
        }

        fn show_overlay(&self, overlay: Overlay) {
            if let Err(e) = self.hud.show(&overlay) {
                log::warn!("Overlay update failed: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let viewport = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, viewport, Tuning::load());
        log::info!(
            "Game initialized with seed {} on a {}x{} canvas",
            seed,
            viewport.x,
            viewport.y
        );

        let surface = CanvasSurface::from_canvas(&canvas)?;
        let hud = Hud::attach(&document)?;
        let (sprite, sprite_loaded) = load_sprite(SWIMMER_SPRITE)?;

        let game = Rc::new(RefCell::new(Game {
            state,
            surface,
            sprite,
            sprite_loaded,
            hud,
        }));

        {
            let mut g = game.borrow_mut();
            g.hud.set_score(0);
            let overlay = Overlay::for_state(&g.state);
            g.show_overlay(overlay);
            g.render();
        }

        setup_keyboard(game.clone())?;
        setup_start_button(game)?;

        log::info!("Dolphin Swim ready");
        Ok(())
    }

    /// Start loading the swimmer sprite; the flag flips once it is drawable
    fn load_sprite(src: &str) -> Result<(HtmlImageElement, Rc<Cell<bool>>), JsValue> {
        let image = HtmlImageElement::new()?;
        let loaded = Rc::new(Cell::new(false));

        {
            let loaded = loaded.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                loaded.set(true);
                log::info!("Swimmer sprite loaded");
            });
            image.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        {
            let src = src.to_string();
            let closure = Closure::<dyn FnMut()>::new(move || {
                log::warn!("Sprite {} failed to load, swimmer will not be drawn", src);
            });
            image.set_onerror(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        image.set_src(src);
        Ok((image, loaded))
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let phase = game.borrow().state.phase;
            let Some(command) = command_for_key(&event.key(), phase) else {
                return;
            };
            // Arrows and space would otherwise scroll the page
            event.prevent_default();

            let started = game.borrow_mut().command(command);
            if started {
                request_animation_frame(game.clone());
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let button = game.borrow().hud.button().clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let started = game.borrow_mut().command(Command::Start);
            if started {
                request_animation_frame(game.clone());
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    /// Reschedules itself only while the session keeps running
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let control = game.borrow_mut().step(time);
        match control {
            LoopControl::Continue => request_animation_frame(game),
            LoopControl::Stop => log::info!("Frame loop stopped"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    log::info!("Dolphin Swim starting...");
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dolphin Swim (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` for the web version");

    let summary = demo::run(demo::DEMO_FRAMES);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;

    use dolphin_swim::Tuning;
    use dolphin_swim::consts::*;
    use dolphin_swim::sim::{
        GameState, LoopControl, SessionSummary, apply_command, autopilot_command, frame,
        start_session,
    };

    /// Two minutes at 60 fps
    pub const DEMO_FRAMES: u32 = 120 * 60;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Play one seeded session with the autopilot steering
    pub fn run(max_frames: u32) -> SessionSummary {
        let viewport = Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let mut state = GameState::new(DEMO_SEED, viewport, Tuning::load());
        start_session(&mut state);

        for i in 0..max_frames {
            if let Some(command) = autopilot_command(&state) {
                apply_command(&mut state, command);
            }
            if frame(&mut state, i as f64 * FRAME_MS) == LoopControl::Stop {
                break;
            }
        }

        let summary = state.summary();
        log::info!(
            "Demo finished after {} frames with score {}",
            summary.frames,
            summary.score
        );
        summary
    }
}
