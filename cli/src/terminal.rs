//! Terminal host for the typewriter: a single-line render target, raw-mode
//! session management and a background input pump.

use std::io::{self, Stdout, Write, stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveToColumn, Show},
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use tokio::sync::mpsc;

use folio_engine::{RenderTarget, Visibility};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 64;

/// Renders typewriter text on the current terminal line, after a prompt.
pub struct TerminalTarget {
    out: Stdout,
    prefix: String,
    failed: bool,
}

impl TerminalTarget {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            out: stdout(),
            prefix: prefix.into(),
            failed: false,
        }
    }

    fn draw(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(&self.prefix),
            Print(text),
            Print('▌'),
        )?;
        self.out.flush()
    }
}

impl RenderTarget for TerminalTarget {
    fn set_text(&mut self, text: &str) {
        if let Err(err) = self.draw(text) {
            // Stdout is gone; stop the cycle instead of spinning on errors.
            tracing::warn!(error = %err, "Terminal write failed; detaching typewriter");
            self.failed = true;
        }
    }

    fn is_attached(&self) -> bool {
        !self.failed
    }
}

/// RAII wrapper for raw mode and focus reporting, restored on drop.
pub struct TerminalSession;

impl TerminalSession {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableFocusChange, Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = execute!(
            out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            DisableFocusChange,
            Show
        );
        let _ = disable_raw_mode();
    }
}

/// What the host loop does with terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Visibility(Visibility),
    Quit,
}

/// Reads crossterm events on a blocking thread and forwards the ones the
/// typewriter host cares about.
pub struct InputPump {
    rx: mpsc::Receiver<InputCommand>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    /// Next command; `None` once the input thread has exited.
    pub async fn recv(&mut self) -> Option<InputCommand> {
        self.rx.recv().await
    }

    pub async fn shutdown(&mut self) {
        self.rx.close();
        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputCommand>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    let Some(command) = classify(&ev) else {
                        continue;
                    };
                    if tx.blocking_send(command).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read terminal event");
                    let _ = tx.blocking_send(InputCommand::Quit);
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Failed to poll terminal events");
                let _ = tx.blocking_send(InputCommand::Quit);
                break;
            }
        }
    }
}

fn classify(ev: &Event) -> Option<InputCommand> {
    match ev {
        Event::FocusGained => Some(InputCommand::Visibility(Visibility::Visible)),
        Event::FocusLost => Some(InputCommand::Visibility(Visibility::Hidden)),
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(InputCommand::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputCommand::Quit)
            }
            _ => None,
        },
        _ => None,
    }
}
