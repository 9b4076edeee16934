//! Surface Events
//!
//! Events sent from UI surfaces to the Conductor. Surfaces report what the
//! user did; the Conductor decides what it means for the session.

use serde::{Deserialize, Serialize};

use crate::messages::EventId;

/// Events from UI Surface to Conductor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    // ============================================
    // Connection Events
    // ============================================
    /// Surface connected to Conductor
    Connected {
        /// Event ID for acknowledgment
        event_id: EventId,
        /// Surface type identifier
        surface_type: SurfaceType,
    },

    // ============================================
    // User Input Events
    // ============================================
    /// The nickname field changed
    NicknameChanged {
        /// Full current contents of the field
        nickname: String,
    },

    /// User pressed start
    StartRequested {
        /// Event ID for acknowledgment
        event_id: EventId,
    },

    /// User picked an option for the current question
    OptionSelected {
        /// Event ID for acknowledgment
        event_id: EventId,
        /// 0-based option index
        option_index: usize,
    },

    /// User asked to start over
    RestartRequested {
        /// Event ID for acknowledgment
        event_id: EventId,
    },

    /// User asked to export the result report
    ExportRequested {
        /// Event ID for acknowledgment
        event_id: EventId,
    },

    // ============================================
    // Lifecycle Events
    // ============================================
    /// User requested quit
    QuitRequested {
        /// Event ID for acknowledgment
        event_id: EventId,
    },
}

impl QuizEvent {
    /// Generate a new event ID for this event
    pub fn new_event_id() -> EventId {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        EventId(format!("evt_{id}"))
    }

    /// Get the event ID if this event has one
    pub fn event_id(&self) -> Option<&EventId> {
        match self {
            Self::Connected { event_id, .. }
            | Self::StartRequested { event_id }
            | Self::OptionSelected { event_id, .. }
            | Self::RestartRequested { event_id }
            | Self::ExportRequested { event_id }
            | Self::QuitRequested { event_id } => Some(event_id),
            Self::NicknameChanged { .. } => None,
        }
    }
}

/// Type of UI surface
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    /// Terminal UI (ratatui/crossterm)
    Tui,
    /// Headless (for testing/automation)
    Headless,
}

impl SurfaceType {
    /// Human-readable name
    pub fn name(&self) -> &str {
        match self {
            Self::Tui => "Terminal",
            Self::Headless => "Headless",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_unique() {
        let id1 = QuizEvent::new_event_id();
        let id2 = QuizEvent::new_event_id();
        assert_ne!(id1.0, id2.0);
    }

    #[test]
    fn test_nickname_change_has_no_event_id() {
        let event = QuizEvent::NicknameChanged {
            nickname: "neo".to_string(),
        };
        assert!(event.event_id().is_none());

        let start = QuizEvent::StartRequested {
            event_id: EventId("evt_x".to_string()),
        };
        assert_eq!(start.event_id().map(|e| e.0.as_str()), Some("evt_x"));
    }

    #[test]
    fn test_surface_type_name() {
        assert_eq!(SurfaceType::Tui.name(), "Terminal");
        assert_eq!(SurfaceType::Headless.name(), "Headless");
    }
}
