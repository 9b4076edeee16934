//! Conductor - The Quiz Flow Controller
//!
//! The Conductor owns the live [`Session`] and is the only component that
//! holds state across screens. Surfaces send it [`QuizEvent`]s and render
//! the [`QuizMessage`]s it sends back.
//!
//! # Background work
//!
//! Two things finish later than the event that started them: the pacing
//! timer on the processing screen and report export. Both run as tokio
//! tasks and report back on an internal channel, tagged with the session
//! generation they were started under. Call [`Conductor::poll_background`]
//! every frame (never blocks) or [`Conductor::wait_background`] to await
//! the next completion. A completion from an older generation is dropped,
//! so a restart can never be undone by late work.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::Catalog;
use crate::config::QuizConfig;
use crate::events::{QuizEvent, SurfaceType};
use crate::export::{export_report, ExportError, PageGeometry, ReportExporter, ResultReport};
use crate::messages::{EventId, NotifyLevel, QuestionView, QuizMessage, QuizState, SessionId};
use crate::session::{Session, SessionAction, TransitionError};
use crate::validation::{InputValidator, ValidationResult};

/// Capacity of the internal completion channel
const BACKGROUND_CHANNEL_CAPACITY: usize = 16;

/// Conductor configuration
#[derive(Clone, Debug)]
pub struct ConductorConfig {
    /// How long the processing screen stays up
    pub pacing_delay: Duration,
    /// Maximum nickname length in characters
    pub nickname_max_chars: usize,
    /// Where exported documents are written
    pub export_dir: PathBuf,
    /// Page layout for exports
    pub page: PageGeometry,
}

impl Default for ConductorConfig {
    fn default() -> Self {
        Self::from(&QuizConfig::default())
    }
}

impl From<&QuizConfig> for ConductorConfig {
    fn from(config: &QuizConfig) -> Self {
        Self {
            pacing_delay: config.pacing_delay,
            nickname_max_chars: config.nickname_max_chars,
            export_dir: config.export_dir.clone(),
            page: config.page,
        }
    }
}

/// Work that finished off the event path
#[derive(Debug)]
enum Background {
    /// Processing screen delay is over
    PacingElapsed { generation: u64 },
    /// Export task finished
    ExportFinished {
        generation: u64,
        result: Result<PathBuf, ExportError>,
    },
}

/// The Conductor - headless quiz core
pub struct Conductor<E: ReportExporter> {
    /// Configuration
    config: ConductorConfig,
    /// Static quiz content
    catalog: &'static Catalog,
    /// Report exporter supplied by the surface
    exporter: Arc<E>,
    /// Live session
    session: Session,
    /// Nickname sanitiser
    validator: InputValidator,
    /// Channel to send messages to UI surface
    tx: mpsc::Sender<QuizMessage>,
    /// Background completions
    background_tx: mpsc::Sender<Background>,
    background_rx: mpsc::Receiver<Background>,
    /// Pending pacing timer, if any
    pacing_task: Option<JoinHandle<()>>,
    /// Whether an export is running for the live session
    export_in_flight: bool,
    /// Connected surface
    surface_type: Option<SurfaceType>,
}

impl<E: ReportExporter + 'static> Conductor<E> {
    /// Create a Conductor over the built-in catalog
    pub fn new(exporter: E, config: ConductorConfig, tx: mpsc::Sender<QuizMessage>) -> Self {
        Self::with_catalog(Catalog::builtin(), exporter, config, tx)
    }

    /// Create a Conductor over a specific catalog
    pub fn with_catalog(
        catalog: &'static Catalog,
        exporter: E,
        config: ConductorConfig,
        tx: mpsc::Sender<QuizMessage>,
    ) -> Self {
        let (background_tx, background_rx) = mpsc::channel(BACKGROUND_CHANNEL_CAPACITY);
        let validator = InputValidator::new(config.nickname_max_chars);

        Self {
            config,
            catalog,
            exporter: Arc::new(exporter),
            session: Session::new(),
            validator,
            tx,
            background_tx,
            background_rx,
            pacing_task: None,
            export_in_flight: false,
            surface_type: None,
        }
    }

    /// Get the session ID
    pub fn session_id(&self) -> &SessionId {
        self.session.id()
    }

    /// Get the live session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get current state
    pub fn state(&self) -> QuizState {
        self.session.state()
    }

    /// Get the catalog
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Whether an export is running
    pub fn is_exporting(&self) -> bool {
        self.export_in_flight
    }

    /// Validate content and announce the session
    ///
    /// # Errors
    ///
    /// Fails if the catalog does not pass [`Catalog::validate`]; the quiz
    /// cannot run on broken content.
    pub async fn start(&mut self) -> anyhow::Result<()> {
        self.catalog.validate()?;

        tracing::info!(
            session_id = %self.session.id().0,
            questions = self.catalog.len(),
            late_stage = self.catalog.late_stage_len(),
            "Conductor started"
        );

        self.set_state().await;
        self.send_session_info().await;
        Ok(())
    }

    /// Handle an event from the UI surface
    pub async fn handle_event(&mut self, event: QuizEvent) -> anyhow::Result<()> {
        match event {
            QuizEvent::Connected {
                event_id,
                surface_type,
            } => {
                tracing::info!(surface = surface_type.name(), "Surface connected");
                self.surface_type = Some(surface_type);
                self.ack(event_id).await;
                self.send_session_info().await;
                self.send_snapshot().await;
            }

            QuizEvent::NicknameChanged { nickname } => {
                let nickname = self.validator.sanitize_nickname(&nickname);
                if self.transition(SessionAction::SetNickname(nickname)).is_ok() {
                    self.send_nickname().await;
                }
            }

            QuizEvent::StartRequested { event_id } => {
                self.ack(event_id).await;
                if self.session.state() == QuizState::Start {
                    if let ValidationResult::Invalid(reason) =
                        self.validator.validate_nickname(self.session.nickname())
                    {
                        tracing::debug!(%reason, "Start ignored");
                        return Ok(());
                    }
                }
                if self.transition(SessionAction::Start).is_ok() {
                    tracing::info!(nickname = self.session.nickname(), "Quiz started");
                    self.set_state().await;
                    self.send_question().await;
                }
            }

            QuizEvent::OptionSelected {
                event_id,
                option_index,
            } => {
                self.ack(event_id).await;
                self.handle_answer(option_index).await;
            }

            QuizEvent::RestartRequested { event_id } => {
                self.ack(event_id).await;
                self.handle_restart().await;
            }

            QuizEvent::ExportRequested { event_id } => {
                self.ack(event_id).await;
                self.handle_export().await;
            }

            QuizEvent::QuitRequested { event_id } => {
                self.ack(event_id).await;
                self.shutdown().await?;
            }
        }

        Ok(())
    }

    /// Apply `action` to the live session, logging refusals
    fn transition(&mut self, action: SessionAction) -> Result<(), TransitionError> {
        let name = action.name();
        match self.session.apply(action, self.catalog) {
            Ok(next) => {
                self.session = next;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(action = name, error = %e, "Transition refused");
                Err(e)
            }
        }
    }

    async fn handle_answer(&mut self, option_index: usize) {
        match self.transition(SessionAction::Answer(option_index)) {
            Ok(()) => match self.session.state() {
                QuizState::InProgress => self.send_question().await,
                QuizState::Calculating => {
                    tracing::info!(
                        winner = ?self.session.winner(),
                        total = ?self.session.scoreboard().total,
                        late = ?self.session.scoreboard().late,
                        "All questions answered"
                    );
                    self.set_state().await;
                    self.send(QuizMessage::Calculating {
                        delay_ms: duration_ms(self.config.pacing_delay),
                    })
                    .await;
                    self.schedule_reveal();
                }
                _ => {}
            },
            Err(e @ TransitionError::OptionOutOfRange { .. }) => {
                tracing::warn!(error = %e, "Rejected option selection");
                self.notify(NotifyLevel::Warning, &e.to_string()).await;
            }
            Err(_) => {}
        }
    }

    async fn handle_restart(&mut self) {
        if self.transition(SessionAction::Restart).is_err() {
            return;
        }

        if let Some(task) = self.pacing_task.take() {
            task.abort();
        }
        self.export_in_flight = false;

        tracing::info!(generation = self.session.generation(), "Quiz restarted");
        self.set_state().await;
        self.send_nickname().await;
    }

    async fn handle_export(&mut self) {
        let Some(category) = self.session.winner() else {
            tracing::debug!(state = ?self.session.state(), "Export requested without a result");
            return;
        };
        if self.session.state() != QuizState::Result {
            tracing::debug!(state = ?self.session.state(), "Export requested before result");
            return;
        }
        if self.export_in_flight {
            tracing::debug!("Export already running, request ignored");
            return;
        }

        let report = ResultReport::new(self.catalog, category, self.session.nickname());
        let exporter = Arc::clone(&self.exporter);
        let geometry = self.config.page;
        let output_dir = self.config.export_dir.clone();
        let generation = self.session.generation();
        let tx = self.background_tx.clone();

        self.export_in_flight = true;
        self.send(QuizMessage::ExportStarted).await;

        tracing::info!(
            exporter = self.exporter.name(),
            category = %category,
            dir = %output_dir.display(),
            "Export started"
        );

        tokio::spawn(async move {
            let result = export_report(exporter.as_ref(), &report, &geometry, &output_dir).await;
            if tx
                .send(Background::ExportFinished { generation, result })
                .await
                .is_err()
            {
                tracing::debug!("Conductor gone before export finished");
            }
        });
    }

    /// Start the processing-screen timer for the live generation
    fn schedule_reveal(&mut self) {
        if let Some(task) = self.pacing_task.take() {
            task.abort();
        }

        let generation = self.session.generation();
        let delay = self.config.pacing_delay;
        let tx = self.background_tx.clone();

        self.pacing_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx
                .send(Background::PacingElapsed { generation })
                .await
                .is_err()
            {
                tracing::debug!(generation, "Conductor gone before pacing elapsed");
            }
        }));
    }

    /// Poll for background completions
    ///
    /// Call this regularly. Never blocks. Returns true if there was activity.
    pub async fn poll_background(&mut self) -> bool {
        let mut collected = Vec::new();
        while let Ok(done) = self.background_rx.try_recv() {
            collected.push(done);
        }

        if collected.is_empty() {
            return false;
        }

        for done in collected {
            self.handle_background(done).await;
        }
        true
    }

    /// Wait for the next background completion and handle it
    ///
    /// Only returns once something finishes, so call it only when a timer
    /// or export is known to be pending.
    pub async fn wait_background(&mut self) {
        if let Some(done) = self.background_rx.recv().await {
            self.handle_background(done).await;
        }
    }

    async fn handle_background(&mut self, done: Background) {
        match done {
            Background::PacingElapsed { generation } => {
                if generation != self.session.generation() {
                    tracing::debug!(generation, "Discarding stale pacing timer");
                    return;
                }
                self.pacing_task = None;
                if self.transition(SessionAction::Reveal).is_ok() {
                    self.set_state().await;
                    self.send_result().await;
                }
            }

            Background::ExportFinished { generation, result } => {
                if generation != self.session.generation() {
                    tracing::debug!(generation, "Discarding stale export result");
                    return;
                }
                self.export_in_flight = false;

                match result {
                    Ok(path) => {
                        self.notify(
                            NotifyLevel::Success,
                            &format!("Saved {}", path.display()),
                        )
                        .await;
                        self.send(QuizMessage::ExportCompleted { path }).await;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Export failed");
                        self.send(QuizMessage::ExportFailed {
                            error: e.to_string(),
                        })
                        .await;
                        self.notify(NotifyLevel::Error, &format!("Export failed: {e}"))
                            .await;
                    }
                }
            }
        }
    }

    /// Shut down the Conductor
    pub async fn shutdown(&mut self) -> anyhow::Result<()> {
        if let Some(task) = self.pacing_task.take() {
            task.abort();
        }

        tracing::info!(session_id = %self.session.id().0, "Conductor shutting down");
        self.send(QuizMessage::Quit {
            message: Some("See you next time!".to_string()),
        })
        .await;

        Ok(())
    }

    /// Send everything a freshly connected surface needs for the current screen
    async fn send_snapshot(&self) {
        self.set_state().await;
        match self.session.state() {
            QuizState::Start => self.send_nickname().await,
            QuizState::InProgress => self.send_question().await,
            QuizState::Calculating => {
                self.send(QuizMessage::Calculating {
                    delay_ms: duration_ms(self.config.pacing_delay),
                })
                .await;
            }
            QuizState::Result => self.send_result().await,
        }
    }

    async fn send_session_info(&self) {
        self.send(QuizMessage::SessionInfo {
            session_id: self.session.id().clone(),
            total_questions: self.catalog.len(),
            nickname_max_chars: self.validator.nickname_max_chars(),
        })
        .await;
    }

    async fn send_nickname(&self) {
        self.send(QuizMessage::Nickname {
            value: self.session.nickname().to_string(),
            can_start: self.session.can_start(),
        })
        .await;
    }

    async fn send_question(&self) {
        if let Some(question) = self.session.current_question(self.catalog) {
            let view = QuestionView::new(self.session.pointer(), self.catalog.len(), question);
            self.send(QuizMessage::Question { view }).await;
        }
    }

    async fn send_result(&self) {
        if let Some(category) = self.session.winner() {
            self.send(QuizMessage::Result {
                category,
                nickname: self.session.nickname().to_string(),
            })
            .await;
        }
    }

    /// Notify the surface of the current state
    async fn set_state(&self) {
        self.send(QuizMessage::State {
            state: self.session.state(),
        })
        .await;
    }

    /// Send acknowledgment
    async fn ack(&self, event_id: EventId) {
        self.send(QuizMessage::Ack { event_id }).await;
    }

    /// Send notification
    async fn notify(&self, level: NotifyLevel, message: &str) {
        self.send(QuizMessage::Notify {
            level,
            message: message.to_string(),
        })
        .await;
    }

    /// Send a message to the UI surface
    async fn send(&self, msg: QuizMessage) {
        if let Err(e) = self.tx.send(msg).await {
            tracing::warn!("Failed to send message to surface: {}", e);
        }
    }
}

impl<E: ReportExporter> Drop for Conductor<E> {
    fn drop(&mut self) {
        if let Some(task) = self.pacing_task.take() {
            task.abort();
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportDocument, RenderedImage};
    use async_trait::async_trait;

    struct MockExporter;

    #[async_trait]
    impl ReportExporter for MockExporter {
        fn name(&self) -> &str {
            "Mock"
        }

        async fn render_region(&self, report: &ResultReport) -> Result<RenderedImage, ExportError> {
            Ok(RenderedImage {
                width: 10,
                rows: vec![report.profile.name.to_string()],
            })
        }

        async fn build_document(
            &self,
            image: RenderedImage,
            _geometry: &PageGeometry,
        ) -> Result<ExportDocument, ExportError> {
            Ok(ExportDocument {
                extension: "txt",
                pages: 1,
                bytes: image.rows.concat().into_bytes(),
            })
        }
    }

    fn config(dir: &std::path::Path) -> ConductorConfig {
        ConductorConfig {
            pacing_delay: Duration::from_millis(2000),
            nickname_max_chars: 10,
            export_dir: dir.to_path_buf(),
            page: PageGeometry::default(),
        }
    }

    fn drain(rx: &mut mpsc::Receiver<QuizMessage>) -> Vec<QuizMessage> {
        let mut out = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            out.push(msg);
        }
        out
    }

    fn eid() -> EventId {
        QuizEvent::new_event_id()
    }

    async fn play_to_calculating(conductor: &mut Conductor<MockExporter>) {
        conductor
            .handle_event(QuizEvent::NicknameChanged {
                nickname: "neo".into(),
            })
            .await
            .unwrap();
        conductor
            .handle_event(QuizEvent::StartRequested { event_id: eid() })
            .await
            .unwrap();
        for _ in 0..conductor.catalog().len() {
            conductor
                .handle_event(QuizEvent::OptionSelected {
                    event_id: eid(),
                    option_index: 0,
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_conductor_start() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(100);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        conductor.start().await.unwrap();

        assert_eq!(conductor.state(), QuizState::Start);
        let msgs = drain(&mut rx);
        assert!(matches!(
            msgs[0],
            QuizMessage::State {
                state: QuizState::Start
            }
        ));
        assert!(msgs.iter().any(|m| matches!(
            m,
            QuizMessage::SessionInfo {
                total_questions: 20,
                nickname_max_chars: 10,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_nickname_is_truncated_and_echoed() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(100);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        conductor
            .handle_event(QuizEvent::NicknameChanged {
                nickname: "abcdefghijklmnop".into(),
            })
            .await
            .unwrap();

        assert_eq!(conductor.session().nickname(), "abcdefghij");
        assert_eq!(
            drain(&mut rx),
            vec![QuizMessage::Nickname {
                value: "abcdefghij".into(),
                can_start: true
            }]
        );
    }

    #[tokio::test]
    async fn test_blank_start_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(100);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        conductor
            .handle_event(QuizEvent::StartRequested { event_id: eid() })
            .await
            .unwrap();

        assert_eq!(conductor.state(), QuizState::Start);
        let msgs = drain(&mut rx);
        assert_eq!(msgs.len(), 1);
        assert!(matches!(msgs[0], QuizMessage::Ack { .. }));
    }

    #[tokio::test]
    async fn test_whitespace_nickname_cannot_start() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(100);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        conductor
            .handle_event(QuizEvent::NicknameChanged {
                nickname: "   ".into(),
            })
            .await
            .unwrap();
        assert_eq!(
            drain(&mut rx),
            vec![QuizMessage::Nickname {
                value: "   ".into(),
                can_start: false
            }]
        );

        conductor
            .handle_event(QuizEvent::StartRequested { event_id: eid() })
            .await
            .unwrap();

        assert_eq!(conductor.state(), QuizState::Start);
        assert!(!drain(&mut rx)
            .iter()
            .any(|m| matches!(m, QuizMessage::Question { .. })));
    }

    #[tokio::test]
    async fn test_out_of_range_option_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(100);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        conductor
            .handle_event(QuizEvent::NicknameChanged {
                nickname: "neo".into(),
            })
            .await
            .unwrap();
        conductor
            .handle_event(QuizEvent::StartRequested { event_id: eid() })
            .await
            .unwrap();
        drain(&mut rx);

        conductor
            .handle_event(QuizEvent::OptionSelected {
                event_id: eid(),
                option_index: 7,
            })
            .await
            .unwrap();

        assert_eq!(conductor.session().pointer(), 0);
        assert!(drain(&mut rx).iter().any(|m| matches!(
            m,
            QuizMessage::Notify {
                level: NotifyLevel::Warning,
                ..
            }
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacing_timer_reveals_result() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(200);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        play_to_calculating(&mut conductor).await;
        assert_eq!(conductor.state(), QuizState::Calculating);
        assert!(!conductor.poll_background().await);

        conductor.wait_background().await;

        assert_eq!(conductor.state(), QuizState::Result);
        let msgs = drain(&mut rx);
        assert!(msgs.iter().any(|m| matches!(m, QuizMessage::Result { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_during_calculating_cancels_reveal() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(200);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        play_to_calculating(&mut conductor).await;
        conductor
            .handle_event(QuizEvent::RestartRequested { event_id: eid() })
            .await
            .unwrap();
        drain(&mut rx);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        conductor.poll_background().await;

        assert_eq!(conductor.state(), QuizState::Start);
        assert!(!drain(&mut rx)
            .iter()
            .any(|m| matches!(m, QuizMessage::Result { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_restart_supersedes_calculating() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(200);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        play_to_calculating(&mut conductor).await;
        let winner = conductor.session().winner();
        assert!(winner.is_some());
        drain(&mut rx);

        conductor
            .handle_event(QuizEvent::OptionSelected {
                event_id: eid(),
                option_index: 1,
            })
            .await
            .unwrap();
        conductor
            .handle_event(QuizEvent::StartRequested { event_id: eid() })
            .await
            .unwrap();
        conductor
            .handle_event(QuizEvent::ExportRequested { event_id: eid() })
            .await
            .unwrap();
        conductor
            .handle_event(QuizEvent::NicknameChanged {
                nickname: "smith".into(),
            })
            .await
            .unwrap();

        assert_eq!(conductor.state(), QuizState::Calculating);
        assert_eq!(conductor.session().winner(), winner);
        assert_eq!(conductor.session().nickname(), "neo");
        assert!(!conductor.is_exporting());
        let msgs = drain(&mut rx);
        assert!(msgs.iter().all(|m| matches!(m, QuizMessage::Ack { .. })), "{msgs:?}");

        conductor.wait_background().await;

        assert_eq!(conductor.state(), QuizState::Result);
        assert_eq!(conductor.session().winner(), winner);
        assert!(drain(&mut rx).iter().any(|m| matches!(
            m,
            QuizMessage::Result { nickname, .. } if nickname == "neo"
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_writes_file_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(200);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        play_to_calculating(&mut conductor).await;
        conductor.wait_background().await;
        let winner = conductor.session().winner().unwrap();
        drain(&mut rx);

        conductor
            .handle_event(QuizEvent::ExportRequested { event_id: eid() })
            .await
            .unwrap();
        assert!(conductor.is_exporting());

        // Second request while busy is ignored
        conductor
            .handle_event(QuizEvent::ExportRequested { event_id: eid() })
            .await
            .unwrap();

        conductor.wait_background().await;
        assert!(!conductor.is_exporting());
        assert_eq!(conductor.state(), QuizState::Result);

        let msgs = drain(&mut rx);
        let started = msgs
            .iter()
            .filter(|m| matches!(m, QuizMessage::ExportStarted))
            .count();
        assert_eq!(started, 1);

        let expected = dir.path().join(format!("wizai_diagnosis_{}.txt", winner.id()));
        assert!(msgs
            .iter()
            .any(|m| matches!(m, QuizMessage::ExportCompleted { path } if *path == expected)));
        assert!(expected.exists());
    }

    #[tokio::test]
    async fn test_export_outside_result_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(100);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        conductor
            .handle_event(QuizEvent::ExportRequested { event_id: eid() })
            .await
            .unwrap();

        assert!(!conductor.is_exporting());
        assert!(!drain(&mut rx)
            .iter()
            .any(|m| matches!(m, QuizMessage::ExportStarted)));
    }

    #[tokio::test]
    async fn test_quit_sends_quit() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(100);
        let mut conductor = Conductor::new(MockExporter, config(dir.path()), tx);

        conductor
            .handle_event(QuizEvent::QuitRequested { event_id: eid() })
            .await
            .unwrap();

        assert!(drain(&mut rx)
            .iter()
            .any(|m| matches!(m, QuizMessage::Quit { .. })));
    }
}
