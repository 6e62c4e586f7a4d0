//! Astro Lanes entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, HtmlImageElement,
        KeyboardEvent, MouseEvent,
    };

    use astro_lanes::sim::{Control, ControlLayout, GamePhase, GameState, Snapshot};
    use astro_lanes::{FrameDriver, Tuning};

    const BUTTON_CLASS: &str = "btn btn-primary control-button";

    struct Sprites {
        background: HtmlImageElement,
        ship: HtmlImageElement,
        asteroid: HtmlImageElement,
    }

    impl Sprites {
        fn load() -> Result<Self, JsValue> {
            let image = |src: &str| -> Result<HtmlImageElement, JsValue> {
                let img = HtmlImageElement::new()?;
                img.set_src(src);
                Ok(img)
            };
            Ok(Self {
                background: image("background.png")?,
                ship: image("spaceship.png")?,
                asteroid: image("asteroid.png")?,
            })
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        driver: FrameDriver,
        ctx: CanvasRenderingContext2d,
        sprites: Sprites,
        left_button: Option<Element>,
        right_button: Option<Element>,
        // Phase the buttons were last laid out for
        button_phase: Option<GamePhase>,
    }

    impl Game {
        fn press(&mut self, control: Control) {
            let now = js_sys::Date::now();
            let phase = self.state.phase;
            self.driver.press(control, phase, now);
        }

        fn frame(&mut self, time: f64) {
            let before = self.state.phase;
            self.driver.frame(&mut self.state, time);
            if self.state.phase == GamePhase::GameOver && before != GamePhase::GameOver {
                log::info!("Final score: {}", self.state.score);
            }

            if let Err(e) = self.render() {
                log::warn!("Render error: {:?}", e);
            }
            self.update_buttons();
        }

        fn render(&self) -> Result<(), JsValue> {
            let snapshot = self.state.snapshot();
            match snapshot.phase {
                GamePhase::Start => self.draw_title(),
                GamePhase::Playing => self.draw_playfield(&snapshot),
                GamePhase::GameOver => self.draw_game_over(snapshot.score),
            }
        }

        fn draw_text(&self, text: &str, size: u32, x: f64, y: f64, align: &str) -> Result<(), JsValue> {
            self.ctx.set_fill_style_str("#FFF");
            self.ctx.set_font(&format!("{}px Arial", size));
            self.ctx.set_text_align(align);
            self.ctx.fill_text(text, x, y)
        }

        fn clear(&self) -> (f64, f64) {
            let w = self.state.tuning.arena_width as f64;
            let h = self.state.tuning.arena_height as f64;
            self.ctx.set_fill_style_str("#000");
            self.ctx.fill_rect(0.0, 0.0, w, h);
            (w, h)
        }

        fn draw_title(&self) -> Result<(), JsValue> {
            let (w, h) = self.clear();
            self.draw_text("Press START to Begin", 36, w / 2.0, h / 2.0, "center")
        }

        fn draw_game_over(&self, score: u32) -> Result<(), JsValue> {
            let (w, h) = self.clear();
            self.draw_text(
                &format!("Game Over! Score: {}", score),
                36,
                w / 2.0,
                h / 2.0 - 50.0,
                "center",
            )?;
            self.draw_text("Press RESTART to Play Again", 24, w / 2.0, h / 2.0, "center")
        }

        fn draw_playfield(&self, snapshot: &Snapshot) -> Result<(), JsValue> {
            let w = self.state.tuning.arena_width as f64;
            let h = self.state.tuning.arena_height as f64;
            let lane_width = self.state.lanes.width() as f64;

            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&self.sprites.background, 0.0, 0.0, w, h)?;

            // Lane dividers
            self.ctx.set_stroke_style_str("#FFF");
            self.ctx.set_line_width(2.0);
            self.ctx.begin_path();
            for divider in 1..astro_lanes::consts::LANE_COUNT {
                let x = lane_width * divider as f64;
                self.ctx.move_to(x, 0.0);
                self.ctx.line_to(x, h);
            }
            self.ctx.stroke();

            let ship = snapshot.ship;
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &self.sprites.ship,
                ship.pos.x as f64,
                ship.pos.y as f64,
                ship.size.x as f64,
                ship.size.y as f64,
            )?;

            for rect in &snapshot.obstacles {
                self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &self.sprites.asteroid,
                    rect.pos.x as f64,
                    rect.pos.y as f64,
                    rect.size.x as f64,
                    rect.size.y as f64,
                )?;
            }

            self.draw_text(&format!("Score: {}", snapshot.score), 24, 10.0, 30.0, "left")
        }

        /// Relabel the control buttons when the phase changes
        fn update_buttons(&mut self) {
            let phase = self.state.phase;
            if self.button_phase == Some(phase) {
                return;
            }
            self.button_phase = Some(phase);

            let layout = ControlLayout::for_phase(phase);
            if let Some(btn) = &self.left_button {
                btn.set_text_content(Some(layout.primary_label));
                if let Err(e) = btn.set_attribute("class", BUTTON_CLASS) {
                    log::warn!("Failed to style primary button: {:?}", e);
                }
            }
            if let Some(btn) = &self.right_button {
                btn.set_text_content(Some(layout.secondary_label));
                if let Err(e) = btn.set_attribute("class", BUTTON_CLASS) {
                    log::warn!("Failed to style secondary button: {:?}", e);
                }
                let display = if layout.secondary_visible { "block" } else { "none" };
                if let Some(el) = btn.dyn_ref::<HtmlElement>() {
                    if let Err(e) = el.style().set_property("display", display) {
                        log::warn!("Failed to set secondary button display: {:?}", e);
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Lanes starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning = Tuning::default();
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(tuning.arena_width as u32);
        canvas.set_height(tuning.arena_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(&tuning),
            state: GameState::with_tuning(seed, tuning),
            ctx,
            sprites: Sprites::load().expect("failed to create sprites"),
            left_button: document.get_element_by_id("leftButton"),
            right_button: document.get_element_by_id("rightButton"),
            button_phase: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Astro Lanes running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for (id, control) in [("leftButton", Control::Primary), ("rightButton", Control::Secondary)] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().press(control);
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.press(Control::Primary),
                    "ArrowRight" | "d" | "D" => g.press(Control::Secondary),
                    " " | "Enter" if g.state.phase != GamePhase::Playing => {
                        event.prevent_default();
                        g.press(Control::Primary);
                    }
                    "i" | "I" => {
                        let enabled = !g.driver.autopilot();
                        g.driver.set_autopilot(enabled);
                        log::info!("Autopilot: {}", enabled);
                    }
                    _ => {}
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use astro_lanes::sim::{Control, GamePhase, GameState};
    use astro_lanes::{FrameDriver, Tuning};

    env_logger::init();
    log::info!("Astro Lanes (native) starting...");
    log::info!("Native mode runs a headless autopilot game - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::from_file(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring tuning file {}: {}", path, e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

    let mut driver = FrameDriver::new(&tuning);
    let mut state = GameState::with_tuning(seed, tuning);
    log::info!("Game initialized with seed: {}", seed);

    driver.set_autopilot(true);
    driver.press(Control::Primary, state.phase, 0.0);

    // Ten minutes of 60 Hz frames at most
    const FRAME_MS: f64 = 1000.0 / 60.0;
    let mut now = 0.0;
    for _ in 0..60 * 60 * 10 {
        driver.frame(&mut state, now);
        if state.phase == GamePhase::GameOver {
            break;
        }
        now += FRAME_MS;
    }

    println!(
        "Seed {}: score {} after {:.1}s (speed {})",
        seed,
        state.score,
        now / 1000.0,
        state.speed
    );
}
