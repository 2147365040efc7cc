//! Score text and the on-screen jump button

use runner_core::ScoreBoard;
use web_sys::{HtmlElement, Window};

pub struct ScoreText {
    element: HtmlElement,
}

impl ScoreText {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl ScoreBoard for ScoreText {
    fn show_score(&mut self, score: u32) {
        self.element.set_text_content(Some(&score.to_string()));
    }
}

/// True when the host reports a touch screen
pub fn is_touch_host(window: &Window) -> bool {
    window.navigator().max_touch_points() > 0
        || js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false)
}

/// Show the jump button on touch hosts, hide it elsewhere
pub fn set_button_visible(button: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(e) = button.style().set_property("display", display) {
        log::warn!("could not set jump button display: {:?}", e);
    }
}
