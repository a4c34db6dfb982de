//! Best-effort cue sounds played when a score is selected.
//!
//! Playback never blocks the UI and never reports failure to the user:
//! callers log what `play` returns and carry on.

use std::io::{self, Write};

use crate::models::Score;

/// Volume used when none is configured
pub const DEFAULT_VOLUME: f32 = 0.3;

/// Which cue to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Excellent,
    Standard,
}

impl SoundCue {
    pub fn for_score(score: Score) -> Self {
        if score.is_excellent() {
            SoundCue::Excellent
        } else {
            SoundCue::Standard
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            SoundCue::Excellent => "https://www.soundjay.com/misc/sounds/bell-ringing-05.mp3",
            SoundCue::Standard => "https://www.soundjay.com/buttons/sounds/button-09.mp3",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Output(#[from] io::Error),
    #[cfg(feature = "sound")]
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: &'static str,
        source: Box<ureq::Error>,
    },
    #[cfg(feature = "sound")]
    #[error("failed to open audio stream: {0}")]
    Stream(#[from] rodio::StreamError),
    #[cfg(feature = "sound")]
    #[error("failed to decode cue: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Something that can play a cue
pub trait SoundPlayer {
    fn play(&self, cue: SoundCue, volume: f32) -> Result<(), AudioError>;
}

/// Plays nothing
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _cue: SoundCue, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Rings the terminal bell: once for a standard cue, twice for excellent
#[derive(Debug, Default)]
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&self, cue: SoundCue, volume: f32) -> Result<(), AudioError> {
        if volume <= 0.0 {
            return Ok(());
        }
        let bells: &[u8] = match cue {
            SoundCue::Excellent => b"\x07\x07",
            SoundCue::Standard => b"\x07",
        };
        let mut out = io::stdout();
        out.write_all(bells)?;
        out.flush()?;
        Ok(())
    }
}

/// Fetches the cue and plays it through the default output device
#[cfg(feature = "sound")]
#[derive(Debug, Default)]
pub struct RemotePlayer;

#[cfg(feature = "sound")]
impl RemotePlayer {
    /// Largest cue we are willing to download
    const MAX_CUE_BYTES: u64 = 2 * 1024 * 1024;

    fn fetch(url: &'static str) -> Result<Vec<u8>, AudioError> {
        use std::io::Read;
        use std::time::Duration;

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(10))
            .build();
        let response = agent.get(url).call().map_err(|e| AudioError::Fetch {
            url,
            source: Box::new(e),
        })?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(Self::MAX_CUE_BYTES)
            .read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn play_blocking(cue: SoundCue, volume: f32) -> Result<(), AudioError> {
        let bytes = Self::fetch(cue.url())?;
        let mut stream = rodio::OutputStreamBuilder::open_default_stream()?;
        stream.log_on_drop(false);
        let sink = rodio::Sink::connect_new(stream.mixer());
        let source = rodio::Decoder::new(io::Cursor::new(bytes))?;
        sink.set_volume(volume);
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}

#[cfg(feature = "sound")]
impl SoundPlayer for RemotePlayer {
    fn play(&self, cue: SoundCue, volume: f32) -> Result<(), AudioError> {
        std::thread::Builder::new()
            .name("survey-cue".to_string())
            .spawn(move || {
                if let Err(err) = Self::play_blocking(cue, volume) {
                    tracing::debug!(?cue, "Audio play prevented: {err}");
                }
            })?;
        Ok(())
    }
}

/// Pick the player for the current build and settings
pub fn player_for(sound_enabled: bool) -> Box<dyn SoundPlayer> {
    if sound_enabled {
        audible_player()
    } else {
        Box::new(SilentPlayer)
    }
}

#[cfg(feature = "sound")]
fn audible_player() -> Box<dyn SoundPlayer> {
    Box::new(RemotePlayer)
}

#[cfg(not(feature = "sound"))]
fn audible_player() -> Box<dyn SoundPlayer> {
    Box::new(TerminalBell)
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Records cues instead of playing them, optionally failing every call
    #[derive(Debug, Default, Clone)]
    pub struct RecordingPlayer {
        pub played: Rc<RefCell<Vec<(SoundCue, f32)>>>,
        pub fail: bool,
    }

    impl SoundPlayer for RecordingPlayer {
        fn play(&self, cue: SoundCue, volume: f32) -> Result<(), AudioError> {
            self.played.borrow_mut().push((cue, volume));
            if self.fail {
                return Err(AudioError::Output(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "autoplay blocked",
                )));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_for_score() {
        assert_eq!(SoundCue::for_score(Score::Excellent), SoundCue::Excellent);
        assert_eq!(SoundCue::for_score(Score::VeryGood), SoundCue::Standard);
        assert_eq!(SoundCue::for_score(Score::Good), SoundCue::Standard);
    }

    #[test]
    fn test_cue_urls() {
        assert!(SoundCue::Excellent.url().ends_with("bell-ringing-05.mp3"));
        assert!(SoundCue::Standard.url().ends_with("button-09.mp3"));
    }

    #[test]
    fn test_silent_player_succeeds() {
        assert!(SilentPlayer.play(SoundCue::Excellent, DEFAULT_VOLUME).is_ok());
    }
}
