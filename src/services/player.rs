//! Media engine
//!
//! Audio is played by an external `mpv` process driven over its JSON IPC
//! socket. The UI sends [`MediaCommand`]s and drains [`MediaEvent`]s each
//! frame; it never blocks on the player.
//!
//! Every `Load` carries a generation number and every event is stamped with
//! the generation of the track it came from, so the UI can drop events a
//! replaced track left in the channel.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::unix::OwnedWriteHalf;
use tokio::net::UnixStream;
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

use crate::log_debug;

const OBSERVE_TIME_POS: u64 = 1;
const OBSERVE_DURATION: u64 = 2;
const CONNECT_ATTEMPTS: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    /// Replace the current track (paused)
    Load { generation: u64, url: String },
    Play,
    Pause,
    /// Absolute position; queued until the track is loaded
    Seek { seconds: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    TimeUpdate {
        generation: u64,
        position: f64,
        duration: Option<f64>,
    },
    Metadata {
        generation: u64,
        duration: f64,
    },
    Ended {
        generation: u64,
    },
    Error {
        generation: u64,
        message: String,
    },
}

impl MediaEvent {
    /// Generation of the `Load` this event belongs to
    pub fn generation(&self) -> u64 {
        match self {
            MediaEvent::TimeUpdate { generation, .. }
            | MediaEvent::Metadata { generation, .. }
            | MediaEvent::Ended { generation }
            | MediaEvent::Error { generation, .. } => *generation,
        }
    }
}

/// Decoded line from the mpv IPC socket
#[derive(Debug, Clone, PartialEq)]
pub enum MpvEvent {
    TimePos(f64),
    Duration(f64),
    FileLoaded,
    EndOfFile,
    LoadFailed(String),
    Ignored,
}

/// Decode one JSON line written by mpv
///
/// Replies to our own commands and events we don't observe come back as
/// `Ignored`.
pub fn parse_mpv_event(line: &str) -> MpvEvent {
    let Ok(value) = serde_json::from_str::<Value>(line) else {
        return MpvEvent::Ignored;
    };

    match value.get("event").and_then(Value::as_str) {
        Some("property-change") => {
            let data = value.get("data").and_then(Value::as_f64);
            match (value.get("name").and_then(Value::as_str), data) {
                (Some("time-pos"), Some(pos)) => MpvEvent::TimePos(pos),
                (Some("duration"), Some(d)) => MpvEvent::Duration(d),
                _ => MpvEvent::Ignored,
            }
        }
        Some("file-loaded") => MpvEvent::FileLoaded,
        Some("end-file") => match value.get("reason").and_then(Value::as_str) {
            Some("eof") => MpvEvent::EndOfFile,
            Some("error") => MpvEvent::LoadFailed(
                value
                    .get("file_error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            ),
            _ => MpvEvent::Ignored,
        },
        _ => MpvEvent::Ignored,
    }
}

/// A running mpv process plus the write side of its socket
struct MpvSession {
    _child: Child,
    writer: OwnedWriteHalf,
}

impl MpvSession {
    async fn start(
        player_command: &str,
        socket_path: &Path,
        event_tx: mpsc::UnboundedSender<MpvEvent>,
    ) -> Result<Self> {
        let _ = std::fs::remove_file(socket_path);

        let child = Command::new(player_command)
            .arg("--idle=yes")
            .arg("--no-video")
            .arg("--no-terminal")
            .arg(format!("--input-ipc-server={}", socket_path.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start player '{}'", player_command))?;

        let stream = connect_with_retry(socket_path).await?;
        let (read_half, writer) = stream.into_split();

        tokio::spawn(async move {
            let mut lines = BufReader::new(read_half).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let event = parse_mpv_event(&line);
                if event != MpvEvent::Ignored && event_tx.send(event).is_err() {
                    break;
                }
            }
            log_debug("DEBUG [Player]: IPC socket closed");
        });

        let mut session = Self {
            _child: child,
            writer,
        };
        session
            .send(json!(["observe_property", OBSERVE_TIME_POS, "time-pos"]))
            .await?;
        session
            .send(json!(["observe_property", OBSERVE_DURATION, "duration"]))
            .await?;
        Ok(session)
    }

    async fn send(&mut self, command: Value) -> Result<()> {
        let mut line = json!({ "command": command }).to_string();
        line.push('\n');
        self.writer
            .write_all(line.as_bytes())
            .await
            .context("Failed to write to player socket")
    }
}

async fn connect_with_retry(socket_path: &Path) -> Result<UnixStream> {
    let mut last_err = None;
    for _ in 0..CONNECT_ATTEMPTS {
        match UnixStream::connect(socket_path).await {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
        sleep(Duration::from_millis(100)).await;
    }
    Err(anyhow::anyhow!(
        "Player socket {} never came up: {:?}",
        socket_path.display(),
        last_err
    ))
}

/// Controller state living inside the player task
struct PlayerController {
    player_command: String,
    socket_path: PathBuf,
    session: Option<MpvSession>,
    /// Generation of the last `Load`
    generation: u64,
    loaded: bool,
    pending_seek: Option<f64>,
    duration: Option<f64>,
    mpv_tx: mpsc::UnboundedSender<MpvEvent>,
    media_tx: mpsc::UnboundedSender<MediaEvent>,
}

impl PlayerController {
    async fn session(&mut self) -> Result<&mut MpvSession> {
        if self.session.is_none() {
            log_debug(&format!(
                "DEBUG [Player]: starting {} on {}",
                self.player_command,
                self.socket_path.display()
            ));
            let session =
                MpvSession::start(&self.player_command, &self.socket_path, self.mpv_tx.clone())
                    .await?;
            self.session = Some(session);
        }
        self.session
            .as_mut()
            .context("Player session unavailable")
    }

    async fn handle_command(&mut self, command: MediaCommand) -> Result<()> {
        match command {
            MediaCommand::Load { generation, url } => {
                self.generation = generation;
                self.loaded = false;
                self.pending_seek = None;
                self.duration = None;
                let session = self.session().await?;
                session.send(json!(["set_property", "pause", true])).await?;
                session.send(json!(["loadfile", url, "replace"])).await?;
            }
            MediaCommand::Play => {
                self.session().await?.send(json!(["set_property", "pause", false])).await?;
            }
            MediaCommand::Pause => {
                if let Some(session) = self.session.as_mut() {
                    session.send(json!(["set_property", "pause", true])).await?;
                }
            }
            MediaCommand::Seek { seconds } => {
                if self.loaded {
                    self.session()
                        .await?
                        .send(json!(["seek", seconds, "absolute"]))
                        .await?;
                } else {
                    self.pending_seek = Some(seconds);
                }
            }
        }
        Ok(())
    }

    async fn handle_mpv_event(&mut self, event: MpvEvent) -> Result<()> {
        match event {
            MpvEvent::FileLoaded => {
                self.loaded = true;
                if let Some(seconds) = self.pending_seek.take() {
                    self.session()
                        .await?
                        .send(json!(["seek", seconds, "absolute"]))
                        .await?;
                }
            }
            MpvEvent::Duration(duration) => {
                self.duration = Some(duration);
                self.emit(MediaEvent::Metadata {
                    generation: self.generation,
                    duration,
                });
            }
            // Positions queued before the new file is up belong to the old one
            MpvEvent::TimePos(_) if !self.loaded => {}
            MpvEvent::TimePos(position) => self.emit(MediaEvent::TimeUpdate {
                generation: self.generation,
                position,
                duration: self.duration,
            }),
            MpvEvent::EndOfFile => {
                self.loaded = false;
                self.emit(MediaEvent::Ended {
                    generation: self.generation,
                });
            }
            MpvEvent::LoadFailed(reason) => {
                self.loaded = false;
                self.emit(MediaEvent::Error {
                    generation: self.generation,
                    message: reason,
                });
            }
            MpvEvent::Ignored => {}
        }
        Ok(())
    }

    fn emit(&self, event: MediaEvent) {
        let _ = self.media_tx.send(event);
    }
}

/// Spawn the media engine task
pub fn spawn_player(
    player_command: String,
) -> (
    mpsc::UnboundedSender<MediaCommand>,
    mpsc::UnboundedReceiver<MediaEvent>,
) {
    let (command_tx, mut command_rx) = mpsc::unbounded_channel::<MediaCommand>();
    let (media_tx, media_rx) = mpsc::unbounded_channel::<MediaEvent>();
    let (mpv_tx, mut mpv_rx) = mpsc::unbounded_channel::<MpvEvent>();

    tokio::spawn(async move {
        let socket_path = crate::utils::get_player_socket_path();
        let mut controller = PlayerController {
            player_command,
            socket_path: socket_path.clone(),
            session: None,
            generation: 0,
            loaded: false,
            pending_seek: None,
            duration: None,
            mpv_tx,
            media_tx,
        };

        loop {
            let result = tokio::select! {
                command = command_rx.recv() => match command {
                    Some(command) => controller.handle_command(command).await,
                    None => break,
                },
                Some(event) = mpv_rx.recv() => controller.handle_mpv_event(event).await,
            };

            if let Err(e) = result {
                log_debug(&format!("DEBUG [Player]: {:#}", e));
                // Force a fresh process on the next command
                controller.session = None;
                controller.loaded = false;
                controller.emit(MediaEvent::Error {
                    generation: controller.generation,
                    message: format!("{:#}", e),
                });
            }
        }

        let _ = std::fs::remove_file(&socket_path);
        log_debug("DEBUG [Player]: command channel closed, player task exiting");
    });

    (command_tx, media_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_property_changes() {
        assert_eq!(
            parse_mpv_event(r#"{"event":"property-change","id":1,"name":"time-pos","data":12.5}"#),
            MpvEvent::TimePos(12.5)
        );
        assert_eq!(
            parse_mpv_event(r#"{"event":"property-change","id":2,"name":"duration","data":300.0}"#),
            MpvEvent::Duration(300.0)
        );
        // Unset properties arrive with null data
        assert_eq!(
            parse_mpv_event(r#"{"event":"property-change","id":1,"name":"time-pos","data":null}"#),
            MpvEvent::Ignored
        );
    }

    #[test]
    fn test_parse_end_file_reasons() {
        assert_eq!(
            parse_mpv_event(r#"{"event":"end-file","reason":"eof","playlist_entry_id":1}"#),
            MpvEvent::EndOfFile
        );
        assert_eq!(
            parse_mpv_event(r#"{"event":"end-file","reason":"stop"}"#),
            MpvEvent::Ignored,
            "replacing a track must not count as the track ending"
        );
        assert_eq!(
            parse_mpv_event(
                r#"{"event":"end-file","reason":"error","file_error":"loading failed"}"#
            ),
            MpvEvent::LoadFailed("loading failed".to_string())
        );
    }

    #[test]
    fn test_event_generation() {
        let events = [
            MediaEvent::TimeUpdate {
                generation: 3,
                position: 1.0,
                duration: None,
            },
            MediaEvent::Metadata {
                generation: 3,
                duration: 60.0,
            },
            MediaEvent::Ended { generation: 3 },
            MediaEvent::Error {
                generation: 3,
                message: "boom".to_string(),
            },
        ];
        assert!(events.iter().all(|e| e.generation() == 3));
    }

    #[test]
    fn test_parse_other_lines() {
        assert_eq!(parse_mpv_event(r#"{"event":"file-loaded"}"#), MpvEvent::FileLoaded);
        assert_eq!(
            parse_mpv_event(r#"{"data":null,"error":"success","request_id":0}"#),
            MpvEvent::Ignored
        );
        assert_eq!(parse_mpv_event("not json"), MpvEvent::Ignored);
    }
}
