//! Pag Dash entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use pag_dash::audio::MusicTrack;
    use pag_dash::highscores::{self, LocalStore};
    use pag_dash::renderer::CanvasRenderer;
    use pag_dash::settings::Settings;
    use pag_dash::sim::{GamePhase, GameState, TickInput, tick};
    use pag_dash::ui::{self, Hud};

    const SPRITE_SRC: &str = "./res/img/PagMan.png";
    const MUSIC_SRC: &str = "./res/audio/audio.mp3";

    /// Pressed-key set, written by key events and snapshotted once per tick
    #[derive(Default)]
    struct InputState {
        pressed: HashSet<String>,
    }

    impl InputState {
        fn snapshot(&self) -> TickInput {
            TickInput {
                jump: self.pressed.contains("Space") || self.pressed.contains("KeyW"),
            }
        }
    }

    /// Everything the frame loop touches
    struct App {
        state: GameState,
        input: InputState,
        renderer: CanvasRenderer,
        hud: Option<Hud>,
        music: MusicTrack,
        store: LocalStore,
    }

    fn viewport(window: &Window) -> Vec2 {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Vec2::new(width as f32, height as f32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Pag Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no game canvas")
            .dyn_into()?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        let app = Rc::new(RefCell::new(App {
            state: GameState::new(seed, viewport(&window)),
            input: InputState::default(),
            renderer: CanvasRenderer::new(canvas, SPRITE_SRC)?,
            hud: Hud::new(&document),
            music: MusicTrack::new(MUSIC_SRC, settings.effective_volume()),
            store: LocalStore,
        }));

        log::info!("Game initialized with seed: {seed}");

        setup_key_handlers(app.clone());
        setup_resize_handler(app.clone());
        setup_play_button(app.clone());

        Ok(())
    }

    /// Idle → Running: hide the menu, load the stored best, size the
    /// viewport, start the music, begin the frame loop.
    fn start_session(app: &Rc<RefCell<App>>) {
        if app.borrow().state.phase == GamePhase::Running {
            return;
        }

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        ui::hide_menu(&document);

        {
            let mut a = app.borrow_mut();
            a.music.play();
            let stored = highscores::load_or_init(&mut a.store);
            let view = viewport(&window);
            a.renderer.resize(view.x as u32, view.y as u32);
            a.state.resize(view);
            a.state.start(stored);
        }

        log::info!("Session started");
        request_animation_frame(app.clone());
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            let input = a.input.snapshot();
            let events = tick(&mut a.state, &input);

            if events.collided {
                let best = a.state.high_score;
                highscores::persist_if_better(&mut a.store, best);
                a.music.restart();
            }

            a.renderer.render(&a.state);
            if let Some(hud) = &a.hud {
                hud.update(a.state.score, a.state.high_score);
            }
        }
        request_animation_frame(app);
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_key_handlers(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().input.pressed.insert(event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().input.pressed.remove(&event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let view = viewport(&window);
            let mut a = app.borrow_mut();
            a.renderer.resize(view.x as u32, view.y as u32);
            a.state.resize(view);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_play_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(button) = document.get_element_by_id("playButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_session(&app);
            });
            let _ =
                button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No play button found - starting immediately");
            start_session(&app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        log::error!("Startup failed: {err:?}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use pag_dash::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Pag Dash (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke run: hop every second and a half, report the outcome
    let mut state = GameState::new(0xDA5, Vec2::new(1280.0, 720.0));
    state.start(0);

    let mut collisions = 0u32;
    for t in 0..1800u64 {
        let input = TickInput { jump: t % 90 < 12 };
        if tick(&mut state, &input).collided {
            collisions += 1;
        }
    }

    println!(
        "{} ticks: score {}, best {}, speed {:.2}, collisions {}",
        state.time_ticks, state.score, state.high_score, state.game_speed, collisions
    );
}
