//! Conductor Client
//!
//! Thin wrapper around the Conductor for TUI integration.
//! This client embeds the Conductor directly (no network) and provides
//! a convenient interface for sending events and receiving messages.
//!
//! # Architecture
//!
//! The TUI is a "thin client" - it doesn't contain any quiz logic.
//! All flow decisions happen in the Conductor. The TUI's job is:
//! 1. Convert key presses to QuizEvents
//! 2. Send QuizEvents to Conductor
//! 3. Receive QuizMessages
//! 4. Render display state based on messages

use tokio::sync::mpsc;

use wizai_conductor::{
    Conductor, ConductorConfig, QuizConfig, QuizEvent, QuizMessage, QuizState, SurfaceType,
};

use crate::export::BufferExporter;

/// Messages buffered between Conductor and TUI
const MESSAGE_CHANNEL_CAPACITY: usize = 100;

/// Client for communicating with the embedded Conductor
pub struct ConductorClient {
    /// The embedded Conductor instance
    conductor: Conductor<BufferExporter>,
    /// Receiver for messages from Conductor
    rx: mpsc::Receiver<QuizMessage>,
}

impl ConductorClient {
    /// Create a client whose Conductor and exporter follow `config`
    pub fn new(config: &QuizConfig) -> Self {
        let (tx, rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        let exporter = BufferExporter::new(config.render_width);
        let conductor = Conductor::new(exporter, ConductorConfig::from(config), tx);

        Self { conductor, rx }
    }

    /// Start the Conductor (validate content, announce the session)
    pub async fn start(&mut self) -> anyhow::Result<()> {
        self.conductor.start().await
    }

    /// Connect this surface to the Conductor
    pub async fn connect(&mut self) -> anyhow::Result<()> {
        self.send_event(QuizEvent::Connected {
            event_id: QuizEvent::new_event_id(),
            surface_type: SurfaceType::Tui,
        })
        .await
    }

    /// Report the nickname field's new contents
    pub async fn set_nickname(&mut self, nickname: String) -> anyhow::Result<()> {
        self.send_event(QuizEvent::NicknameChanged { nickname }).await
    }

    /// Press the start button
    pub async fn start_quiz(&mut self) -> anyhow::Result<()> {
        self.send_event(QuizEvent::StartRequested {
            event_id: QuizEvent::new_event_id(),
        })
        .await
    }

    /// Pick an option on the current question
    pub async fn select_option(&mut self, option_index: usize) -> anyhow::Result<()> {
        self.send_event(QuizEvent::OptionSelected {
            event_id: QuizEvent::new_event_id(),
            option_index,
        })
        .await
    }

    /// Press restart
    pub async fn restart(&mut self) -> anyhow::Result<()> {
        self.send_event(QuizEvent::RestartRequested {
            event_id: QuizEvent::new_event_id(),
        })
        .await
    }

    /// Press the export button
    pub async fn export(&mut self) -> anyhow::Result<()> {
        self.send_event(QuizEvent::ExportRequested {
            event_id: QuizEvent::new_event_id(),
        })
        .await
    }

    /// Notify Conductor that user wants to quit
    pub async fn request_quit(&mut self) -> anyhow::Result<()> {
        self.send_event(QuizEvent::QuitRequested {
            event_id: QuizEvent::new_event_id(),
        })
        .await
    }

    /// Poll for timer and export completions (must be called regularly)
    pub async fn poll_background(&mut self) -> bool {
        self.conductor.poll_background().await
    }

    /// Receive all pending messages from the Conductor (non-blocking)
    pub fn recv_all(&mut self) -> Vec<QuizMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Get the current quiz state
    pub fn state(&self) -> QuizState {
        self.conductor.state()
    }

    /// Send raw event to Conductor
    pub async fn send_event(&mut self, event: QuizEvent) -> anyhow::Result<()> {
        self.conductor.handle_event(event).await
    }
}
