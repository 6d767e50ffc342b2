//! Completion cues.
//!
//! When a countdown reaches zero the engine hands the transition to a
//! [`Notifier`]. Playback failures are reported back as errors and logged by
//! the caller; they never stop the timer.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::error::PomoError;
use crate::timer::Completion;

/// Something that reacts to a finished countdown.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Announce a completed countdown.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Notification` if the cue could not be delivered.
    fn notify(&self, completion: &Completion) -> Result<(), PomoError>;
}

/// A notifier that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _completion: &Completion) -> Result<(), PomoError> {
        Ok(())
    }
}

/// Well-known system sounds, tried in order when no file is configured.
const SYSTEM_SOUNDS: &[(&str, &str)] = &[
    ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
    ("afplay", "/System/Library/Sounds/Glass.aiff"),
    ("aplay", "/usr/share/sounds/sound-icons/guitar-11.wav"),
    ("aplay", "/usr/share/sounds/generic.wav"),
];

/// Plays a short audio file, falling back to the terminal bell.
#[derive(Debug, Clone, Default)]
pub struct SoundCue {
    file: Option<PathBuf>,
    player: Option<String>,
}

impl SoundCue {
    /// Create a cue from an optional audio file and player command.
    #[must_use]
    pub const fn new(file: Option<PathBuf>, player: Option<String>) -> Self {
        Self { file, player }
    }

    /// Pick the player command and file to use, if any.
    fn resolve(&self) -> Option<(String, PathBuf)> {
        if let Some(file) = &self.file {
            let player = self
                .player
                .clone()
                .unwrap_or_else(|| default_player().to_string());
            return Some((player, file.clone()));
        }

        SYSTEM_SOUNDS
            .iter()
            .find(|(_, path)| Path::new(path).exists())
            .map(|(player, path)| {
                let player = self.player.clone().unwrap_or_else(|| (*player).to_string());
                (player, PathBuf::from(path))
            })
    }

    fn play(player: &str, file: &Path) -> Result<(), PomoError> {
        if !file.exists() {
            return Err(PomoError::Notification(format!(
                "Sound file not found: {}",
                file.display()
            )));
        }

        let mut child = Command::new(player)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PomoError::Notification(format!("Failed to run {player}: {e}")))?;

        // Reap the player in the background so the timer never waits on it.
        let player = player.to_string();
        std::thread::spawn(move || {
            if let Err(e) = wait_for_player(&player, child) {
                tracing::warn!("{e}");
            }
        });

        Ok(())
    }

    fn ring_bell() -> Result<(), PomoError> {
        // stderr, so a piped JSON stream on stdout stays clean
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|()| stderr.flush())
            .map_err(|e| PomoError::Notification(format!("Failed to ring bell: {e}")))
    }
}

impl Notifier for SoundCue {
    fn notify(&self, completion: &Completion) -> Result<(), PomoError> {
        tracing::debug!(finished = %completion.finished, "Playing completion cue");

        match self.resolve() {
            Some((player, file)) => Self::play(&player, &file),
            None => Self::ring_bell(),
        }
    }
}

/// Wait for a player process and report a failed exit.
fn wait_for_player(player: &str, mut child: Child) -> Result<(), PomoError> {
    let status = child
        .wait()
        .map_err(|e| PomoError::Notification(format!("Failed to wait for {player}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(PomoError::Notification(format!(
            "{player} exited with {status}"
        )))
    }
}

const fn default_player() -> &'static str {
    if cfg!(target_os = "macos") {
        "afplay"
    } else {
        "paplay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Mode;

    fn completion() -> Completion {
        Completion {
            finished: Mode::Work,
            next: Mode::ShortBreak,
            completed_work_sessions: 1,
            auto_start: false,
        }
    }

    #[test]
    fn test_silent_notifier() {
        assert!(SilentNotifier.notify(&completion()).is_ok());
    }

    #[test]
    fn test_configured_file_takes_priority() {
        let cue = SoundCue::new(Some(PathBuf::from("/tmp/ding.wav")), Some("mpv".to_string()));
        let (player, file) = cue.resolve().unwrap();
        assert_eq!(player, "mpv");
        assert_eq!(file, PathBuf::from("/tmp/ding.wav"));
    }

    #[test]
    fn test_configured_file_uses_platform_player() {
        let cue = SoundCue::new(Some(PathBuf::from("/tmp/ding.wav")), None);
        let (player, _) = cue.resolve().unwrap();
        assert_eq!(player, default_player());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cue = SoundCue::new(
            Some(PathBuf::from("/definitely/not/here/ding.wav")),
            Some("true".to_string()),
        );
        let err = cue.notify(&completion()).unwrap_err();
        assert!(matches!(err, PomoError::Notification(_)));
    }

    #[test]
    fn test_missing_player_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("ding.wav");
        std::fs::write(&file, b"RIFF").unwrap();

        let cue = SoundCue::new(Some(file), Some("pomo-no-such-player".to_string()));
        let err = cue.notify(&completion()).unwrap_err();
        assert!(err.to_string().contains("pomo-no-such-player"));
    }

    #[test]
    fn test_failing_player_is_reported() {
        let child = Command::new("false").spawn().unwrap();
        let err = wait_for_player("false", child).unwrap_err();
        assert!(matches!(err, PomoError::Notification(_)));
        assert!(err.to_string().contains("false exited with"));
    }

    #[test]
    fn test_successful_player_is_ok() {
        let child = Command::new("true").spawn().unwrap();
        assert!(wait_for_player("true", child).is_ok());
    }
}
