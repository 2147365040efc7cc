//! Background music over an `<audio>` element

use std::cell::RefCell;
use std::rc::Rc;

use runner_core::{Command, CommandQueue, MusicPlayer};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Commands posted from async callbacks, drained by the app before each
/// frame and input command
pub type Mailbox = Rc<RefCell<CommandQueue>>;

pub struct HtmlMusic {
    audio: HtmlAudioElement,
    mailbox: Mailbox,
}

impl HtmlMusic {
    pub fn new(audio: HtmlAudioElement, mailbox: Mailbox) -> Self {
        Self { audio, mailbox }
    }
}

impl MusicPlayer for HtmlMusic {
    fn play_from_start(&mut self) {
        self.audio.set_current_time(0.0);
        self.audio.set_volume(1.0);
        self.audio.set_muted(false);

        let promise = match self.audio.play() {
            Ok(promise) => promise,
            Err(e) => {
                log::debug!("audio play threw: {:?}", e);
                self.mailbox.borrow_mut().push(Command::MusicBlocked);
                return;
            }
        };

        let mailbox = self.mailbox.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let command = match JsFuture::from(promise).await {
                Ok(_) => Command::MusicStarted,
                Err(e) => {
                    // Autoplay policy; a later gesture retries
                    log::debug!("audio play rejected: {:?}", e);
                    Command::MusicBlocked
                }
            };
            mailbox.borrow_mut().push(command);
        });
    }

    fn pause(&mut self) {
        if let Err(e) = self.audio.pause() {
            log::warn!("audio pause failed: {:?}", e);
        }
    }
}
