//! Conductor Messages
//!
//! Messages sent from the Conductor to UI surfaces. Surfaces are renderers:
//! they keep a display state derived from these messages and look static
//! content (profiles, icons) up in the catalog themselves.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Question};

/// Messages from Conductor to UI Surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QuizMessage {
    // ============================================
    // Flow
    // ============================================
    /// Screen state changed
    State {
        /// The new state
        state: QuizState,
    },

    /// Nickname accepted (echo of the sanitised input)
    Nickname {
        /// The nickname as stored in the session
        value: String,
        /// Whether a start request would currently be accepted
        can_start: bool,
    },

    /// Show a question
    Question {
        /// The question to display
        view: QuestionView,
    },

    /// Scoring done, pacing delay running
    Calculating {
        /// How long the processing screen will stay up
        delay_ms: u64,
    },

    /// Show the result report
    Result {
        /// Winning category
        category: Category,
        /// Nickname the report is addressed to
        nickname: String,
    },

    // ============================================
    // Export
    // ============================================
    /// Export started; show a busy indicator
    ExportStarted,

    /// Export finished and the file was written
    ExportCompleted {
        /// Where the document was written
        path: PathBuf,
    },

    /// Export failed; the result screen is unchanged
    ExportFailed {
        /// Human-readable reason
        error: String,
    },

    // ============================================
    // System Messages
    // ============================================
    /// Session information, sent when a surface connects
    SessionInfo {
        /// Session ID
        session_id: SessionId,
        /// Number of questions in the quiz
        total_questions: usize,
        /// Maximum nickname length in characters
        nickname_max_chars: usize,
    },

    /// System notification
    Notify {
        /// Notification level
        level: NotifyLevel,
        /// Message content
        message: String,
    },

    /// Acknowledgment of received event
    Ack {
        /// Event ID being acknowledged
        event_id: EventId,
    },

    /// Request surface to quit
    Quit {
        /// Optional goodbye message
        message: Option<String>,
    },
}

/// Everything a surface needs to draw one question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    /// 0-based position in the quiz
    pub index: usize,
    /// 1-based ordinal shown on the badge
    pub ordinal: u8,
    /// Total number of questions
    pub total: usize,
    /// Prompt text
    pub prompt: String,
    /// Option labels, in order
    pub options: Vec<String>,
}

impl QuestionView {
    /// Build the view for `question` at `index`
    #[must_use]
    pub fn new(index: usize, total: usize, question: &Question) -> Self {
        Self {
            index,
            ordinal: question.ordinal,
            total,
            prompt: question.prompt.to_string(),
            options: question.options.iter().map(|o| o.label.to_string()).collect(),
        }
    }

    /// Progress as a percentage, counting the current question as reached
    #[must_use]
    pub fn progress_percent(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        (((self.index + 1) * 100) / self.total) as u16
    }
}

/// Event identifier (for acks)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

/// Session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new unique session ID
    ///
    /// Uses an atomic counter combined with timestamp to ensure uniqueness
    /// even when multiple sessions are created in the same millisecond.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let count = COUNTER.fetch_add(1, Ordering::SeqCst);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Self(format!("session_{timestamp}_{count}"))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyLevel {
    /// Informational
    Info,
    /// Warning
    Warning,
    /// Error
    Error,
    /// Success
    Success,
}

/// Quiz screen states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizState {
    /// Nickname entry
    #[default]
    Start,
    /// Answering questions
    InProgress,
    /// Pacing delay before the result
    Calculating,
    /// Result report on screen
    Result,
}

impl QuizState {
    /// Human-readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Start => "Enter a codename",
            Self::InProgress => "Answering",
            Self::Calculating => "Processing...",
            Self::Result => "Analysis complete",
        }
    }
}
