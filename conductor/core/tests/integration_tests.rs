//! Integration tests for the quiz flow
//!
//! These drive a real Conductor end to end through its event/message
//! interface, the way a surface would. Tests cover:
//! - Scripted answer sequences and the tie-break
//! - Restart resetting the session and cancelling pending work
//! - Export success, failure and stale completions
//! - Configuration feeding the Conductor

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use tokio::sync::{mpsc, Notify};

use wizai_conductor::config::{load_config_with_env, ConfigOverrides};
use wizai_conductor::{
    Catalog, Category, Conductor, ConductorConfig, ExportDocument, ExportError, NotifyLevel,
    PageGeometry, QuizEvent, QuizMessage, QuizState, RenderedImage, ReportExporter, ResultReport,
    SurfaceType,
};

// =============================================================================
// Helpers
// =============================================================================

/// Exporter that writes the profile name, optionally waiting on a gate first
struct TestExporter {
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl ReportExporter for TestExporter {
    fn name(&self) -> &str {
        "Test"
    }

    async fn render_region(&self, report: &ResultReport) -> Result<RenderedImage, ExportError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Ok(RenderedImage {
            width: 40,
            rows: vec![
                report.profile.name.to_string(),
                format!("Analysis Complete for {}", report.nickname),
            ],
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
            bytes: image.rows.join("\n").into_bytes(),
        })
    }
}

/// Exporter whose renderer is never available
struct UnavailableExporter;

#[async_trait]
impl ReportExporter for UnavailableExporter {
    fn name(&self) -> &str {
        "Unavailable"
    }

    async fn render_region(&self, _report: &ResultReport) -> Result<RenderedImage, ExportError> {
        Err(ExportError::RenderUnavailable)
    }

    async fn build_document(
        &self,
        _image: RenderedImage,
        _geometry: &PageGeometry,
    ) -> Result<ExportDocument, ExportError> {
        Err(ExportError::Document("no image".to_string()))
    }
}

fn config(dir: &Path) -> ConductorConfig {
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

/// Option index for `category` on every question, in order
fn script(categories: &[Category]) -> Vec<usize> {
    let catalog = Catalog::builtin();
    assert_eq!(categories.len(), catalog.len());
    catalog
        .questions()
        .iter()
        .zip(categories)
        .map(|(q, c)| {
            q.options
                .iter()
                .position(|o| o.category == *c)
                .unwrap_or_else(|| panic!("question {} has no {c} option", q.ordinal))
        })
        .collect()
}

/// First option matching a preference list, else the first option
fn preferring(preferences: &[Category]) -> Vec<usize> {
    Catalog::builtin()
        .questions()
        .iter()
        .map(|q| {
            preferences
                .iter()
                .find_map(|c| q.options.iter().position(|o| o.category == *c))
                .unwrap_or(0)
        })
        .collect()
}

async fn play<E: ReportExporter + 'static>(
    conductor: &mut Conductor<E>,
    nickname: &str,
    answers: &[usize],
) {
    conductor
        .handle_event(QuizEvent::NicknameChanged {
            nickname: nickname.to_string(),
        })
        .await
        .unwrap();
    conductor
        .handle_event(QuizEvent::StartRequested {
            event_id: QuizEvent::new_event_id(),
        })
        .await
        .unwrap();
    for &option_index in answers {
        conductor
            .handle_event(QuizEvent::OptionSelected {
                event_id: QuizEvent::new_event_id(),
                option_index,
            })
            .await
            .unwrap();
    }
}

async fn restart<E: ReportExporter + 'static>(conductor: &mut Conductor<E>) {
    conductor
        .handle_event(QuizEvent::RestartRequested {
            event_id: QuizEvent::new_event_id(),
        })
        .await
        .unwrap();
}

async fn export<E: ReportExporter + 'static>(conductor: &mut Conductor<E>) {
    conductor
        .handle_event(QuizEvent::ExportRequested {
            event_id: QuizEvent::new_event_id(),
        })
        .await
        .unwrap();
}

// =============================================================================
// Scoring Scenarios
// =============================================================================

/// Choosing A where possible, then G, then the first option makes A win.
#[tokio::test(start_paused = true)]
async fn test_prefer_a_then_g_yields_a() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, mut rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(TestExporter { gate: None }, config(dir.path()), tx);
    conductor.start().await.unwrap();

    play(
        &mut conductor,
        "neo",
        &preferring(&[Category::A, Category::G]),
    )
    .await;
    assert_eq!(conductor.state(), QuizState::Calculating);
    assert_eq!(conductor.session().scoreboard().total.get(Category::A), 9);

    conductor.wait_background().await;
    assert_eq!(conductor.state(), QuizState::Result);

    let result = drain(&mut rx)
        .into_iter()
        .find(|m| matches!(m, QuizMessage::Result { .. }));
    assert_eq!(
        result,
        Some(QuizMessage::Result {
            category: Category::A,
            nickname: "neo".to_string()
        })
    );
}

/// A and B tie on total; A has more late-stage answers.
#[tokio::test(start_paused = true)]
async fn test_total_tie_late_favours_a() {
    use Category::{A, B, C, D, E, F, G};

    let dir = tempfile::tempdir().unwrap();
    let (tx, _rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(TestExporter { gate: None }, config(dir.path()), tx);

    let answers = script(&[
        B, B, A, B, A, B, D, C, F, C, G, E, D, // early
        A, F, A, G, E, C, D, // late
    ]);
    play(&mut conductor, "tie", &answers).await;

    let board = *conductor.session().scoreboard();
    assert_eq!(board.total.get(A), 4);
    assert_eq!(board.total.get(B), 4);
    assert_eq!(board.late.get(A), 2);
    assert_eq!(board.late.get(B), 0);
    assert_eq!(conductor.session().winner(), Some(A));
}

/// The same tie resolved the other way: late answers pick B over A.
#[tokio::test(start_paused = true)]
async fn test_total_tie_late_favours_b_over_declaration_order() {
    use Category::{A, B, C, D, E, F, G};

    let dir = tempfile::tempdir().unwrap();
    let (tx, _rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(TestExporter { gate: None }, config(dir.path()), tx);

    let answers = script(&[
        A, B, A, B, A, A, D, C, F, C, G, E, D, // early
        E, F, C, G, B, F, B, // late
    ]);
    play(&mut conductor, "tie", &answers).await;

    let board = *conductor.session().scoreboard();
    assert_eq!(board.total.get(A), board.total.get(B));
    assert_eq!(board.late.get(B), 2);
    assert_eq!(conductor.session().winner(), Some(B));
}

// =============================================================================
// Restart
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_restart_from_result_fully_resets() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, mut rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(TestExporter { gate: None }, config(dir.path()), tx);

    play(&mut conductor, "trinity", &[1; 20]).await;
    conductor.wait_background().await;
    let generation = conductor.session().generation();
    drain(&mut rx);

    restart(&mut conductor).await;

    let session = conductor.session();
    assert_eq!(session.state(), QuizState::Start);
    assert_eq!(session.nickname(), "");
    assert_eq!(session.pointer(), 0);
    assert!(session.scoreboard().total.is_zero());
    assert!(session.scoreboard().late.is_zero());
    assert_eq!(session.winner(), None);
    assert_eq!(session.generation(), generation + 1);

    let msgs = drain(&mut rx);
    assert!(msgs.contains(&QuizMessage::State {
        state: QuizState::Start
    }));
    assert!(msgs.contains(&QuizMessage::Nickname {
        value: String::new(),
        can_start: false
    }));
}

#[tokio::test(start_paused = true)]
async fn test_restart_during_calculating_cancels_result() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, mut rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(TestExporter { gate: None }, config(dir.path()), tx);

    play(&mut conductor, "neo", &[0; 20]).await;
    tokio::time::sleep(Duration::from_millis(1000)).await;
    restart(&mut conductor).await;

    tokio::time::sleep(Duration::from_millis(3000)).await;
    conductor.poll_background().await;

    assert_eq!(conductor.state(), QuizState::Start);
    assert!(!drain(&mut rx)
        .iter()
        .any(|m| matches!(m, QuizMessage::Result { .. })));

    // A second run still reaches its own result
    play(&mut conductor, "again", &[0; 20]).await;
    conductor.wait_background().await;
    assert_eq!(conductor.state(), QuizState::Result);
}

// =============================================================================
// Export
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_export_with_renderer_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, mut rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(UnavailableExporter, config(dir.path()), tx);

    play(&mut conductor, "neo", &[0; 20]).await;
    conductor.wait_background().await;
    drain(&mut rx);

    export(&mut conductor).await;
    conductor.wait_background().await;

    assert_eq!(conductor.state(), QuizState::Result);
    assert!(!conductor.is_exporting());

    let msgs = drain(&mut rx);
    assert_eq!(msgs.iter().filter(|m| matches!(m, QuizMessage::ExportStarted)).count(), 1);
    assert!(msgs
        .iter()
        .any(|m| matches!(m, QuizMessage::ExportFailed { .. })));
    assert!(msgs.iter().any(|m| matches!(
        m,
        QuizMessage::Notify {
            level: NotifyLevel::Error,
            ..
        }
    )));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    // Retry is allowed after a failure
    export(&mut conductor).await;
    assert!(conductor.is_exporting());
}

#[tokio::test(start_paused = true)]
async fn test_export_success_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, mut rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(TestExporter { gate: None }, config(dir.path()), tx);

    play(
        &mut conductor,
        "neo",
        &preferring(&[Category::A, Category::G]),
    )
    .await;
    conductor.wait_background().await;
    drain(&mut rx);

    export(&mut conductor).await;
    conductor.wait_background().await;

    let expected = dir.path().join("wizai_diagnosis_A.txt");
    assert!(drain(&mut rx).contains(&QuizMessage::ExportCompleted {
        path: expected.clone()
    }));
    let contents = std::fs::read_to_string(expected).unwrap();
    assert!(contents.contains("言語の魔術師"));
    assert!(contents.contains("Analysis Complete for neo"));
}

#[tokio::test(start_paused = true)]
async fn test_stale_export_does_not_resurrect_result() {
    let dir = tempfile::tempdir().unwrap();
    let gate = Arc::new(Notify::new());
    let (tx, mut rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(
        TestExporter {
            gate: Some(Arc::clone(&gate)),
        },
        config(dir.path()),
        tx,
    );

    play(&mut conductor, "neo", &[0; 20]).await;
    conductor.wait_background().await;
    export(&mut conductor).await;
    assert!(conductor.is_exporting());

    restart(&mut conductor).await;
    assert!(!conductor.is_exporting());
    drain(&mut rx);

    gate.notify_one();
    conductor.wait_background().await;

    assert_eq!(conductor.state(), QuizState::Start);
    let msgs = drain(&mut rx);
    assert!(!msgs
        .iter()
        .any(|m| matches!(m, QuizMessage::ExportCompleted { .. } | QuizMessage::Result { .. })));
}

// =============================================================================
// Surface Connection
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_connect_mid_quiz_resends_question() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, mut rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(TestExporter { gate: None }, config(dir.path()), tx);

    play(&mut conductor, "neo", &[0; 5]).await;
    drain(&mut rx);

    conductor
        .handle_event(QuizEvent::Connected {
            event_id: QuizEvent::new_event_id(),
            surface_type: SurfaceType::Headless,
        })
        .await
        .unwrap();

    let question = drain(&mut rx).into_iter().find_map(|m| match m {
        QuizMessage::Question { view } => Some(view),
        _ => None,
    });
    let view = question.expect("question re-sent on connect");
    assert_eq!(view.index, 5);
    assert_eq!(view.ordinal, 6);
    assert_eq!(view.total, 20);
}

// =============================================================================
// Configuration
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_config_file_drives_conductor() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[flow]
pacing_delay_ms = 300
nickname_max_chars = 4
"#
    )
    .unwrap();

    let mut quiz_config = load_config_with_env(Some(file.path().to_path_buf()), |_| None).unwrap();
    ConfigOverrides::new()
        .with_export_dir(dir.path().to_path_buf())
        .apply(&mut quiz_config);

    let (tx, mut rx) = mpsc::channel(256);
    let mut conductor = Conductor::new(
        TestExporter { gate: None },
        ConductorConfig::from(&quiz_config),
        tx,
    );
    conductor.start().await.unwrap();

    play(&mut conductor, "morpheus", &[0; 20]).await;
    assert_eq!(conductor.session().nickname(), "morp");

    let msgs = drain(&mut rx);
    assert!(msgs.contains(&QuizMessage::Calculating { delay_ms: 300 }));
}
