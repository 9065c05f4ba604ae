//! Completion alarm played through an external audio player

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::{
    process::{Child, Command},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::state::SoundNotifier;

/// Loops `<player> <file>` until stopped.
///
/// Every start spawns a fresh player process, so playback always begins at
/// position zero. Stopping aborts the loop and kills the running player.
#[derive(Debug)]
pub struct CommandSound {
    player: String,
    file: PathBuf,
    playback: Option<JoinHandle<()>>,
}

impl CommandSound {
    pub fn new(player: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            player: player.into(),
            file: file.into(),
            playback: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl SoundNotifier for CommandSound {
    fn notify_start(&mut self) -> Result<(), String> {
        self.notify_stop();

        if !self.file.exists() {
            return Err(format!("Sound file not found: {}", self.file.display()));
        }

        let mut child = spawn_player(&self.player, &self.file)?;
        let player = self.player.clone();
        let file = self.file.clone();

        info!("Playing {} with {}", file.display(), player);
        self.playback = Some(tokio::spawn(async move {
            loop {
                match child.wait().await {
                    Ok(status) if status.success() => {
                        debug!("{} finished, looping", player);
                    }
                    Ok(status) => {
                        warn!("{} exited with {}, giving up on looping", player, status);
                        break;
                    }
                    Err(e) => {
                        warn!("Failed to wait for {}: {}", player, e);
                        break;
                    }
                }

                child = match spawn_player(&player, &file) {
                    Ok(child) => child,
                    Err(e) => {
                        warn!("{}", e);
                        break;
                    }
                };
            }
        }));

        Ok(())
    }

    fn notify_stop(&mut self) {
        if let Some(playback) = self.playback.take() {
            // Dropping the child inside the aborted task kills the player
            playback.abort();
            debug!("Stopped {}", self.player);
        }
    }
}

impl Drop for CommandSound {
    fn drop(&mut self) {
        self.notify_stop();
    }
}

fn spawn_player(player: &str, file: &Path) -> Result<Child, String> {
    Command::new(player)
        .arg(file)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| format!("Failed to spawn {}: {}", player, e))
}

/// Check that the audio player can be executed
pub async fn check_player_available(player: &str) -> Result<(), String> {
    Command::new(player)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(|_| format!("{} is not available, completion sound disabled", player))?;

    info!("{} is available", player);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
    }

    #[test]
    fn missing_file_is_reported_as_playback_error() {
        let mut sound = CommandSound::new("paplay", "/nonexistent/alarm.oga");
        let err = sound.notify_start().unwrap_err();
        assert!(err.contains("not found"), "unexpected error: {}", err);
        assert!(!sound.is_playing());
    }

    #[tokio::test]
    async fn unspawnable_player_is_reported_as_playback_error() {
        let mut sound = CommandSound::new("focus-timer-no-such-player", manifest());
        let err = sound.notify_start().unwrap_err();
        assert!(err.contains("Failed to spawn"), "unexpected error: {}", err);
        assert!(!sound.is_playing());
    }

    #[test]
    fn stop_without_start_is_harmless() {
        let mut sound = CommandSound::new("paplay", manifest());
        sound.notify_stop();
        sound.notify_stop();
        assert!(!sound.is_playing());
    }

    #[tokio::test]
    async fn missing_player_fails_availability_check() {
        assert!(check_player_available("focus-timer-no-such-player").await.is_err());
    }
}
