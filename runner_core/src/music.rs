//! Background music state
//!
//! Playback is owned by the host; the game only tracks whether it has asked
//! for it and what the host answered.

/// Host audio device
pub trait MusicPlayer {
    /// Rewind to time zero at full volume, unmuted, and request playback.
    /// The outcome comes back later as `Command::MusicStarted` or
    /// `Command::MusicBlocked`.
    fn play_from_start(&mut self);
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MusicState {
    #[default]
    Silent,
    /// Play requested, host has not answered yet
    Starting,
    Playing,
    /// Stopped by game over, never restarted
    Paused,
}

#[derive(Debug, Clone, Default)]
pub struct Music {
    state: MusicState,
}

impl Music {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MusicState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == MusicState::Playing
    }

    /// Start the music unless it is already playing or on its way.
    /// Returns true when a play request was issued.
    pub fn ensure_playing(&mut self, player: &mut dyn MusicPlayer) -> bool {
        if self.state != MusicState::Silent {
            return false;
        }
        player.play_from_start();
        self.state = MusicState::Starting;
        log::debug!("music: play requested");
        true
    }

    pub fn on_started(&mut self, player: &mut dyn MusicPlayer) {
        match self.state {
            MusicState::Starting | MusicState::Silent => {
                self.state = MusicState::Playing;
                log::debug!("music: playing");
            }
            // Game ended while the request was in flight
            MusicState::Paused => player.pause(),
            MusicState::Playing => {}
        }
    }

    /// Leave the state un-started so the next gesture can retry
    pub fn on_blocked(&mut self) {
        if self.state == MusicState::Starting {
            self.state = MusicState::Silent;
            log::debug!("music: playback blocked by host");
        }
    }

    pub fn stop(&mut self, player: &mut dyn MusicPlayer) {
        player.pause();
        self.state = MusicState::Paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPlayer {
        plays: usize,
        pauses: usize,
    }

    impl MusicPlayer for MockPlayer {
        fn play_from_start(&mut self) {
            self.plays += 1;
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    #[test]
    fn test_ensure_playing_is_idempotent() {
        let mut music = Music::new();
        let mut player = MockPlayer::default();

        assert!(music.ensure_playing(&mut player));
        assert!(!music.ensure_playing(&mut player), "Pending request blocks a second play");
        music.on_started(&mut player);
        assert!(!music.ensure_playing(&mut player), "Playing music is left alone");

        assert_eq!(player.plays, 1);
        assert!(music.is_unlocked());
    }

    #[test]
    fn test_blocked_playback_allows_retry() {
        let mut music = Music::new();
        let mut player = MockPlayer::default();

        music.ensure_playing(&mut player);
        music.on_blocked();
        assert_eq!(music.state(), MusicState::Silent);
        assert!(!music.is_unlocked());

        assert!(music.ensure_playing(&mut player), "Retry after rejection");
        assert_eq!(player.plays, 2);
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut music = Music::new();
        let mut player = MockPlayer::default();

        music.ensure_playing(&mut player);
        music.on_started(&mut player);
        music.stop(&mut player);

        assert_eq!(player.pauses, 1);
        assert!(!music.ensure_playing(&mut player), "No restart after stop");
        assert_eq!(player.plays, 1);
    }

    #[test]
    fn test_late_start_after_stop_is_paused_again() {
        let mut music = Music::new();
        let mut player = MockPlayer::default();

        music.ensure_playing(&mut player);
        music.stop(&mut player);
        music.on_started(&mut player);

        assert_eq!(music.state(), MusicState::Paused);
        assert_eq!(player.pauses, 2);
    }
}
