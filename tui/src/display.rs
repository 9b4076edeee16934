//! Display State Types
//!
//! What the TUI draws, derived purely from [`QuizMessage`]s.
//!
//! # Design Philosophy
//!
//! The TUI is a "thin client" - it just renders what the Conductor tells it.
//! Nothing here decides flow; the only local state is presentational
//! (option cursor, result scroll, toast expiry).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use wizai_conductor::{Category, NotifyLevel, QuestionView, QuizMessage, QuizState, SessionId};

/// How long a toast stays up
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// A transient notification
#[derive(Clone, Debug)]
pub struct DisplayNotification {
    /// Severity, for coloring
    pub level: NotifyLevel,
    /// Text shown to the user
    pub message: String,
    /// Time left before it disappears
    pub remaining: Duration,
}

/// Result as announced by the Conductor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayResult {
    pub category: Category,
    pub nickname: String,
}

/// Everything the screens need
#[derive(Debug)]
pub struct DisplayState {
    /// Current screen
    pub state: QuizState,
    /// Session identifier, once connected
    pub session_id: Option<SessionId>,
    /// Questions in the quiz
    pub total_questions: usize,
    /// Nickname limit in characters
    pub nickname_max_chars: usize,
    /// Nickname as echoed by the Conductor
    pub nickname: String,
    /// Whether the start button is enabled
    pub can_start: bool,
    /// Question on screen
    pub question: Option<QuestionView>,
    /// Highlighted option on the question screen
    pub cursor: usize,
    /// When the processing screen appeared, and for how long it stays
    pub calculating: Option<(Instant, Duration)>,
    /// Result on screen
    pub result: Option<DisplayResult>,
    /// Export running
    pub exporting: bool,
    /// Last file written
    pub last_export: Option<PathBuf>,
    /// Pending toasts, oldest first
    pub notifications: Vec<DisplayNotification>,
    /// Quit requested by the Conductor
    pub quit: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            state: QuizState::Start,
            session_id: None,
            total_questions: 0,
            nickname_max_chars: wizai_conductor::validation::DEFAULT_NICKNAME_MAX_CHARS,
            nickname: String::new(),
            can_start: false,
            question: None,
            cursor: 0,
            calculating: None,
            result: None,
            exporting: false,
            last_export: None,
            notifications: Vec::new(),
            quit: false,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a Conductor message
    pub fn apply_message(&mut self, msg: QuizMessage) {
        match msg {
            QuizMessage::State { state } => {
                self.state = state;
                match state {
                    QuizState::Start => {
                        self.question = None;
                        self.calculating = None;
                        self.result = None;
                        self.exporting = false;
                        self.last_export = None;
                    }
                    QuizState::InProgress => self.result = None,
                    QuizState::Calculating => self.question = None,
                    QuizState::Result => self.calculating = None,
                }
            }
            QuizMessage::Nickname { value, can_start } => {
                self.nickname = value;
                self.can_start = can_start;
            }
            QuizMessage::Question { view } => {
                self.question = Some(view);
                self.cursor = 0;
            }
            QuizMessage::Calculating { delay_ms } => {
                self.calculating = Some((Instant::now(), Duration::from_millis(delay_ms)));
            }
            QuizMessage::Result { category, nickname } => {
                self.result = Some(DisplayResult { category, nickname });
            }
            QuizMessage::ExportStarted => self.exporting = true,
            QuizMessage::ExportCompleted { path } => {
                self.exporting = false;
                self.last_export = Some(path);
            }
            QuizMessage::ExportFailed { .. } => self.exporting = false,
            QuizMessage::SessionInfo {
                session_id,
                total_questions,
                nickname_max_chars,
            } => {
                self.session_id = Some(session_id);
                self.total_questions = total_questions;
                self.nickname_max_chars = nickname_max_chars;
            }
            QuizMessage::Notify { level, message } => {
                self.notifications.push(DisplayNotification {
                    level,
                    message,
                    remaining: NOTIFICATION_TTL,
                });
            }
            QuizMessage::Ack { .. } => {}
            QuizMessage::Quit { .. } => self.quit = true,
        }
    }

    /// Advance toast timers
    pub fn update(&mut self, delta: Duration) {
        for note in &mut self.notifications {
            note.remaining = note.remaining.saturating_sub(delta);
        }
        self.notifications.retain(|n| !n.remaining.is_zero());
    }

    /// Most recent live toast
    pub fn latest_notification(&self) -> Option<&DisplayNotification> {
        self.notifications.last()
    }

    /// Move the option cursor, wrapping around the current question
    pub fn move_cursor(&mut self, delta: isize) {
        let Some(question) = &self.question else {
            return;
        };
        let count = question.options.len() as isize;
        if count == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(count) as usize;
    }

    /// Fraction of the pacing delay elapsed, 0.0 to 1.0
    pub fn calculating_progress(&self) -> f64 {
        match self.calculating {
            Some((started, delay)) if !delay.is_zero() => {
                (started.elapsed().as_secs_f64() / delay.as_secs_f64()).min(1.0)
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }
}
