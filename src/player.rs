use tokio::sync::mpsc;

/// Seek step for the `.` / `,` keys, in seconds.
const NUDGE_SECONDS: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Cue {
        youtube_id: String,
        start_seconds: Option<f64>,
    },
    SeekTo {
        seconds: f64,
    },
    TogglePlayPause,
    FastForward,
    Rewind,
}

/// Fire-and-forget handle to the player worker.
///
/// Navigation and event handling stay synchronous: every method is a
/// non-blocking `try_send`, and a full queue drops the command with a log
/// line instead of waiting on player I/O.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    sender: mpsc::Sender<PlayerCommand>,
}

impl PlayerHandle {
    pub fn new(sender: mpsc::Sender<PlayerCommand>) -> Self {
        Self { sender }
    }

    pub fn cue(&self, youtube_id: &str, start_seconds: Option<f64>) {
        self.send(PlayerCommand::Cue {
            youtube_id: youtube_id.to_string(),
            start_seconds,
        });
    }

    pub fn seek_to(&self, seconds: f64) {
        self.send(PlayerCommand::SeekTo { seconds });
    }

    pub fn toggle_play_pause(&self) {
        self.send(PlayerCommand::TogglePlayPause);
    }

    pub fn fast_forward(&self) {
        self.send(PlayerCommand::FastForward);
    }

    pub fn rewind(&self) {
        self.send(PlayerCommand::Rewind);
    }

    fn send(&self, command: PlayerCommand) {
        if let Err(e) = self.sender.try_send(command) {
            log::warn!("player: dropping command, queue unavailable: {}", e);
        }
    }
}

/// Player worker: drives an external mpv process over its JSON IPC socket.
///
/// `Cue` (re)spawns mpv with `--input-ipc-server`; the remaining commands
/// are forwarded as IPC lines. Errors are logged and swallowed, the
/// navigation core never observes player failures.
pub async fn run_player(mut receiver: mpsc::Receiver<PlayerCommand>, ipc_path: std::path::PathBuf) {
    let mut child: Option<std::process::Child> = None;

    while let Some(command) = receiver.recv().await {
        log::debug!("player: {:?}", command);
        match command {
            PlayerCommand::Cue {
                youtube_id,
                start_seconds,
            } => {
                if let Some(mut old) = child.take() {
                    let _ = old.kill();
                    let _ = old.wait();
                }
                match spawn_mpv(&youtube_id, start_seconds, &ipc_path) {
                    Ok(spawned) => child = Some(spawned),
                    Err(e) => log::error!("player: failed to launch mpv: {}", e),
                }
            }
            PlayerCommand::SeekTo { seconds } => {
                send_ipc(&ipc_path, &["seek", &seconds.to_string(), "absolute"]);
            }
            PlayerCommand::TogglePlayPause => {
                send_ipc(&ipc_path, &["cycle", "pause"]);
            }
            PlayerCommand::FastForward => {
                send_ipc(&ipc_path, &["seek", &NUDGE_SECONDS.to_string(), "relative"]);
            }
            PlayerCommand::Rewind => {
                send_ipc(
                    &ipc_path,
                    &["seek", &(-NUDGE_SECONDS).to_string(), "relative"],
                );
            }
        }
    }

    if let Some(mut old) = child.take() {
        let _ = old.kill();
        let _ = old.wait();
    }
}

fn spawn_mpv(
    youtube_id: &str,
    start_seconds: Option<f64>,
    ipc_path: &std::path::Path,
) -> std::io::Result<std::process::Child> {
    let url = format!("https://www.youtube.com/watch?v={}", youtube_id);
    let mut command = std::process::Command::new("mpv");
    command
        .arg(format!("--input-ipc-server={}", ipc_path.display()))
        .arg("--force-window=yes")
        .arg("--keep-open=yes");
    if let Some(start) = start_seconds {
        command.arg(format!("--start={}", start));
    }
    command
        .arg(url)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
}

#[cfg(unix)]
fn send_ipc(ipc_path: &std::path::Path, command: &[&str]) {
    use std::io::Write;
    use std::os::unix::net::UnixStream;

    let payload = serde_json::json!({ "command": command });
    match UnixStream::connect(ipc_path) {
        Ok(mut stream) => {
            if let Err(e) = writeln!(stream, "{}", payload) {
                log::warn!("player: IPC write failed: {}", e);
            }
        }
        Err(e) => log::debug!("player: no IPC socket at {}: {}", ipc_path.display(), e),
    }
}

#[cfg(not(unix))]
fn send_ipc(_ipc_path: &std::path::Path, command: &[&str]) {
    log::debug!("player: IPC unsupported on this platform, dropping {:?}", command);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_fire_and_forget_when_queue_full() {
        let (sender, mut receiver) = mpsc::channel::<PlayerCommand>(1);
        let handle = PlayerHandle::new(sender);

        handle.toggle_play_pause();
        // Queue is full now; this must drop silently, not block.
        handle.fast_forward();

        assert_eq!(
            receiver.try_recv().unwrap(),
            PlayerCommand::TogglePlayPause
        );
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_cue_carries_start_position() {
        let (sender, mut receiver) = mpsc::channel::<PlayerCommand>(4);
        let handle = PlayerHandle::new(sender);

        handle.cue("abc123", Some(42.5));
        match receiver.try_recv().unwrap() {
            PlayerCommand::Cue {
                youtube_id,
                start_seconds,
            } => {
                assert_eq!(youtube_id, "abc123");
                assert_eq!(start_seconds, Some(42.5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
