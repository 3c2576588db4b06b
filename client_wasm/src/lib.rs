//! Canvas 2D web client for the cannon arcade
//!
//! Maps keyboard events onto the core's controls, drives one
//! update + draw per animation frame, and paints the captured scene.

pub mod input;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{Scene, Session, Time};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use crate::input;
    use crate::renderer::Renderer;

    const CANVAS_ID: &str = "gameScreen";

    /// Everything one browser tab needs: the session, its clock and the canvas
    struct Game {
        session: Session,
        time: Time,
        renderer: Renderer,
    }

    impl Game {
        fn frame(&mut self, timestamp: f64) -> Result<(), JsValue> {
            let dt = self.time.tick(timestamp);
            self.session.update(dt);
            self.renderer.render(&Scene::capture(&self.session))
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {e}")))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no game canvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("game element is not a canvas"))?;

        let seed = js_sys::Date::now() as u64;
        let session = Session::with_seed(seed);
        let arena = session.arena();
        let renderer = Renderer::new(&canvas, arena.width, arena.height)?;
        log::info!("session started with seed {seed}");

        let game = Rc::new(RefCell::new(Game {
            session,
            time: Time::new(),
            renderer,
        }));

        setup_input_handlers(&document, game.clone())?;
        request_animation_frame(game)
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = input::get_key_from_event(&event);
                log::debug!("key down {key}");
                if let Some(command) = input::handle_key_down(&key, event.repeat()) {
                    game.borrow_mut().session.handle_input(command);
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = input::get_key_from_event(&event);
                log::debug!("key up {key}");
                if let Some(command) = input::handle_key_up(&key) {
                    game.borrow_mut().session.handle_input(command);
                }
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Schedule the next frame. Only one callback is ever pending, so
    /// updates never overlap.
    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::once(move |timestamp: f64| game_loop(game, timestamp));
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>, timestamp: f64) {
        if let Err(err) = game.borrow_mut().frame(timestamp) {
            log::warn!("frame failed: {err:?}");
        }
        if let Err(err) = request_animation_frame(game) {
            log::error!("could not schedule next frame: {err:?}");
        }
    }
}

/// Entry point invoked by the wasm-bindgen glue once the module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_game::run()
}
