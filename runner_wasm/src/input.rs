//! Keyboard input handling

use web_sys::KeyboardEvent;

/// Space is the only jump key. `key` covers older browsers that report
/// "Spacebar" and leave `code` empty.
pub fn is_jump_key(key: &str, code: &str) -> bool {
    code == "Space" || matches!(key, " " | "Spacebar")
}

/// Extract key and code from keyboard event
pub fn keys_from_event(event: &KeyboardEvent) -> (String, String) {
    (event.key(), event.code())
}
