//! Browser client for the runner
//!
//! Canvas 2D rendering, `<audio>` background music and key/touch input on
//! top of `runner_core`. The page calls [`start_game`] once.

mod app;
mod audio;
mod canvas;
mod error;
mod hud;
mod input;
mod options;

use std::cell::RefCell;
use std::rc::Rc;

use app::App;
use audio::HtmlMusic;
use canvas::{fit_canvas, CanvasSurface};
use error::ClientError;
use hud::{is_touch_host, set_button_visible, ScoreText};
use options::StartOptions;
use runner_core::{CommandQueue, Game, ScoreBoard};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAudioElement, HtmlCanvasElement, HtmlElement};

/// Start a session. `options` may be `undefined` or a partial object, e.g.
/// `{ canvasId: "game", seed: 7, config: { baseSpeed: 6 } }`.
#[wasm_bindgen]
pub fn start_game(options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let options = StartOptions::from_js(options)?;
    if let Err(e) = console_log::init_with_level(options.log_level()) {
        // Already installed by an earlier call
        log::debug!("logger not reinstalled: {}", e);
    }
    start(options).map_err(JsValue::from)
}

fn start(options: StartOptions) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;

    let canvas: HtmlCanvasElement =
        element_by_id(&document, &options.canvas_id, "HtmlCanvasElement")?;
    let audio: HtmlAudioElement =
        element_by_id(&document, &options.music_id, "HtmlAudioElement")?;
    let score_element: HtmlElement = element_by_id(&document, &options.score_id, "HtmlElement")?;

    let viewport = fit_canvas(&canvas, &window);
    let surface = CanvasSurface::new(&canvas)?;

    let seed = options
        .seed
        .unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);

    let mut scoreboard = ScoreText::new(score_element);
    scoreboard.show_score(0);

    let mailbox = Rc::new(RefCell::new(CommandQueue::new()));
    let music = HtmlMusic::new(audio, mailbox.clone());
    let game = Game::new(options.config.clone(), viewport, seed);
    let app = Rc::new(RefCell::new(App::new(
        game, surface, music, scoreboard, mailbox,
    )));

    app::install_audio_unlock(&app, &document)?;
    app::install_jump_key(&app, &document)?;

    match element_by_id::<HtmlElement>(&document, &options.jump_button_id, "HtmlElement") {
        Ok(button) => {
            set_button_visible(&button, is_touch_host(&window));
            app::install_jump_button(&app, &button)?;
        }
        Err(e) => log::warn!("no on-screen jump control: {}", e),
    }

    app::start_frame_loop(app, &window)?;
    log::info!(
        "runner started: {}x{} seed={}",
        viewport.width,
        viewport.height,
        seed
    );
    Ok(())
}

fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| ClientError::WrongElement {
            id: id.to_string(),
            expected,
        })
}
