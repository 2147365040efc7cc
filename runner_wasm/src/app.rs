//! Browser wiring: owns the game and feeds it frames and input

use std::cell::RefCell;
use std::rc::Rc;

use runner_core::{Command, Game, LoopControl};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, KeyboardEvent, TouchEvent, Window};

use crate::audio::{HtmlMusic, Mailbox};
use crate::canvas::CanvasSurface;
use crate::error::ClientError;
use crate::hud::ScoreText;
use crate::input::{is_jump_key, keys_from_event};

/// Gestures that count as "the user interacted with the page"
const UNLOCK_EVENTS: [&str; 3] = ["pointerdown", "touchstart", "keydown"];

pub struct App {
    game: Game,
    surface: CanvasSurface,
    music: HtmlMusic,
    scoreboard: ScoreText,
    mailbox: Mailbox,
}

impl App {
    pub fn new(
        game: Game,
        surface: CanvasSurface,
        music: HtmlMusic,
        scoreboard: ScoreText,
        mailbox: Mailbox,
    ) -> Self {
        Self {
            game,
            surface,
            music,
            scoreboard,
            mailbox,
        }
    }

    /// Apply results posted by async callbacks since the last call
    fn drain_mailbox(&mut self) {
        let commands = self.mailbox.borrow_mut().drain();
        for command in commands {
            self.game.handle(command, &mut self.music);
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        self.drain_mailbox();
        self.game.handle(command, &mut self.music);
    }

    pub fn tick(&mut self) -> LoopControl {
        self.drain_mailbox();
        self.game
            .frame(&mut self.surface, &mut self.music, &mut self.scoreboard)
    }
}

/// Drive `App::tick` from `requestAnimationFrame` until it reports `Stop`
pub fn start_frame_loop(app: Rc<RefCell<App>>, window: &Window) -> Result<(), ClientError> {
    let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_cb_loop = frame_cb.clone();
    let window_loop = window.clone();

    *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let control = app.borrow_mut().tick();
        if control == LoopControl::Stop {
            log::info!("frame loop stopped");
            return;
        }
        if let Some(cb) = frame_cb_loop.borrow().as_ref() {
            if let Err(e) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    let first = frame_cb.borrow();
    if let Some(cb) = first.as_ref() {
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(ClientError::js)?;
    }
    Ok(())
}

/// One-shot listeners that try to start the music on the first gesture of
/// each kind
pub fn install_audio_unlock(app: &Rc<RefCell<App>>, document: &Document) -> Result<(), ClientError> {
    for event_type in UNLOCK_EVENTS {
        let app = app.clone();
        let on_gesture = Closure::once_into_js(move || {
            app.borrow_mut().dispatch(Command::AudioUnlockRequested);
        });

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        options.set_passive(true);
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                on_gesture.unchecked_ref(),
                &options,
            )
            .map_err(ClientError::js)?;
    }
    Ok(())
}

pub fn install_jump_key(app: &Rc<RefCell<App>>, document: &Document) -> Result<(), ClientError> {
    let app = app.clone();
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let (key, code) = keys_from_event(&event);
        if !is_jump_key(&key, &code) {
            return;
        }
        // Keep Space from scrolling the page
        event.prevent_default();
        app.borrow_mut().dispatch(Command::JumpRequested);
    });

    document
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .map_err(ClientError::js)?;
    on_key.forget();
    Ok(())
}

pub fn install_jump_button(app: &Rc<RefCell<App>>, button: &HtmlElement) -> Result<(), ClientError> {
    let app = app.clone();
    let on_touch = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
        event.prevent_default();
        app.borrow_mut().dispatch(Command::JumpRequested);
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    button
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            on_touch.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(ClientError::js)?;
    on_touch.forget();
    Ok(())
}
