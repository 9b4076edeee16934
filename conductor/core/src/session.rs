//! Quiz Session
//!
//! A session is one run through the quiz: nickname, question pointer, the
//! two tallies, and once scoring is done, the winner.
//!
//! # Transitions
//!
//! `Session` is a value. [`Session::apply`] never mutates; it returns the
//! next session or a [`TransitionError`] explaining why the action does not
//! fit the current state. The Conductor swaps its session for the returned
//! value, so a rejected action leaves nothing half-applied.
//!
//! Restart produces a fresh session under the same id with `generation`
//! bumped. Background work tagged with an older generation is stale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, Category, Question};
use crate::messages::{QuizState, SessionId};
use crate::scoring::Scoreboard;
use crate::validation::is_blank_nickname;

/// Something the user (or the pacing timer) asks the session to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Replace the nickname (already sanitised)
    SetNickname(String),
    /// Begin answering
    Start,
    /// Answer the current question with the option at this index
    Answer(usize),
    /// Pacing delay elapsed; show the result
    Reveal,
    /// Throw the run away and go back to nickname entry
    Restart,
}

impl SessionAction {
    /// Short name for logs and errors
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetNickname(_) => "set_nickname",
            Self::Start => "start",
            Self::Answer(_) => "answer",
            Self::Reveal => "reveal",
            Self::Restart => "restart",
        }
    }
}

/// Why an action was refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The action has no meaning in this state
    #[error("{action} is not valid while {state:?}")]
    InvalidInState {
        /// Action that was attempted
        action: &'static str,
        /// State the session was in
        state: QuizState,
    },

    /// Start pressed with nothing in the nickname field
    #[error("nickname is blank")]
    BlankNickname,

    /// Selected option does not exist on the current question
    #[error("option {index} out of range for question {ordinal} ({count} options)")]
    OptionOutOfRange {
        /// Requested option
        index: usize,
        /// Current question's ordinal
        ordinal: u8,
        /// Options on that question
        count: usize,
    },

    /// Pointer left the question list
    #[error("no question at position {0}")]
    NoCurrentQuestion(usize),
}

/// One quiz run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    generation: u64,
    state: QuizState,
    nickname: String,
    pointer: usize,
    scoreboard: Scoreboard,
    winner: Option<Category>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session on the start screen
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(SessionId::new(), 0)
    }

    fn with_id(id: SessionId, generation: u64) -> Self {
        Self {
            id,
            generation,
            state: QuizState::Start,
            nickname: String::new(),
            pointer: 0,
            scoreboard: Scoreboard::new(),
            winner: None,
        }
    }

    /// Session id (stable across restarts)
    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Restart counter
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current screen state
    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Nickname as entered
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// 0-based index of the current question
    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Both tallies
    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Winning category, present in `Calculating` and `Result`
    #[must_use]
    pub fn winner(&self) -> Option<Category> {
        self.winner
    }

    /// Whether a start request would be accepted right now
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.state == QuizState::Start && !is_blank_nickname(&self.nickname)
    }

    /// Question under the pointer, while answering
    #[must_use]
    pub fn current_question(&self, catalog: &Catalog) -> Option<&'static Question> {
        match self.state {
            QuizState::InProgress => catalog.question(self.pointer),
            _ => None,
        }
    }

    /// Compute the session that follows `action`
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] if the action does not fit the current
    /// state or its argument is out of range. `self` is unchanged either way.
    pub fn apply(&self, action: SessionAction, catalog: &Catalog) -> Result<Self, TransitionError> {
        let invalid = |action: &SessionAction| TransitionError::InvalidInState {
            action: action.name(),
            state: self.state,
        };

        match (self.state, action) {
            (QuizState::Start, SessionAction::SetNickname(nickname)) => Ok(Self {
                nickname,
                ..self.clone()
            }),

            (QuizState::Start, SessionAction::Start) => {
                if is_blank_nickname(&self.nickname) {
                    return Err(TransitionError::BlankNickname);
                }
                Ok(Self {
                    state: QuizState::InProgress,
                    pointer: 0,
                    ..self.clone()
                })
            }

            (QuizState::InProgress, SessionAction::Answer(index)) => {
                let question = catalog
                    .question(self.pointer)
                    .ok_or(TransitionError::NoCurrentQuestion(self.pointer))?;
                let option = question
                    .option(index)
                    .ok_or(TransitionError::OptionOutOfRange {
                        index,
                        ordinal: question.ordinal,
                        count: question.options.len(),
                    })?;

                let mut scoreboard = self.scoreboard;
                scoreboard.record_answer(question, option);

                let next = self.pointer + 1;
                if next < catalog.len() {
                    Ok(Self {
                        pointer: next,
                        scoreboard,
                        ..self.clone()
                    })
                } else {
                    Ok(Self {
                        state: QuizState::Calculating,
                        scoreboard,
                        winner: Some(scoreboard.winner()),
                        ..self.clone()
                    })
                }
            }

            (QuizState::Calculating, SessionAction::Reveal) => Ok(Self {
                state: QuizState::Result,
                ..self.clone()
            }),

            (QuizState::Calculating | QuizState::Result, SessionAction::Restart) => {
                Ok(Self::with_id(self.id.clone(), self.generation + 1))
            }

            (_, action) => Err(invalid(&action)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered_all(choice: usize) -> Session {
        let catalog = Catalog::builtin();
        let mut session = Session::new()
            .apply(SessionAction::SetNickname("neo".into()), catalog)
            .unwrap()
            .apply(SessionAction::Start, catalog)
            .unwrap();
        for _ in 0..catalog.len() {
            session = session.apply(SessionAction::Answer(choice), catalog).unwrap();
        }
        session
    }

    #[test]
    fn test_new_session_is_on_start() {
        let session = Session::new();
        assert_eq!(session.state(), QuizState::Start);
        assert_eq!(session.generation(), 0);
        assert!(session.winner().is_none());
        assert!(!session.can_start());
    }

    #[test]
    fn test_blank_nickname_cannot_start() {
        let catalog = Catalog::builtin();
        let session = Session::new()
            .apply(SessionAction::SetNickname("   ".into()), catalog)
            .unwrap();
        assert_eq!(
            session.apply(SessionAction::Start, catalog),
            Err(TransitionError::BlankNickname)
        );
    }

    #[test]
    fn test_start_moves_to_first_question() {
        let catalog = Catalog::builtin();
        let session = Session::new()
            .apply(SessionAction::SetNickname("trinity".into()), catalog)
            .unwrap()
            .apply(SessionAction::Start, catalog)
            .unwrap();
        assert_eq!(session.state(), QuizState::InProgress);
        assert_eq!(session.pointer(), 0);
        assert_eq!(session.current_question(catalog).map(|q| q.ordinal), Some(1));
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let catalog = Catalog::builtin();
        let before = Session::new();
        let after = before
            .apply(SessionAction::SetNickname("morpheus".into()), catalog)
            .unwrap();
        assert_eq!(before.nickname(), "");
        assert_eq!(after.nickname(), "morpheus");
    }

    #[test]
    fn test_last_answer_computes_winner_once() {
        let session = answered_all(0);
        assert_eq!(session.state(), QuizState::Calculating);
        assert_eq!(session.scoreboard().total.sum(), 20);
        assert_eq!(session.scoreboard().late.sum(), 7);
        assert_eq!(session.winner(), Some(session.scoreboard().winner()));

        let revealed = session.apply(SessionAction::Reveal, Catalog::builtin()).unwrap();
        assert_eq!(revealed.state(), QuizState::Result);
        assert_eq!(revealed.winner(), session.winner());
    }

    #[test]
    fn test_out_of_range_option_rejected() {
        let catalog = Catalog::builtin();
        let session = Session::new()
            .apply(SessionAction::SetNickname("neo".into()), catalog)
            .unwrap()
            .apply(SessionAction::Start, catalog)
            .unwrap();
        let err = session.apply(SessionAction::Answer(9), catalog).unwrap_err();
        assert_eq!(
            err,
            TransitionError::OptionOutOfRange {
                index: 9,
                ordinal: 1,
                count: 4
            }
        );
    }

    #[test]
    fn test_restart_resets_everything_and_bumps_generation() {
        let catalog = Catalog::builtin();
        let done = answered_all(1)
            .apply(SessionAction::Reveal, catalog)
            .unwrap();
        let fresh = done.apply(SessionAction::Restart, catalog).unwrap();

        assert_eq!(fresh.state(), QuizState::Start);
        assert_eq!(fresh.nickname(), "");
        assert_eq!(fresh.pointer(), 0);
        assert!(fresh.scoreboard().total.is_zero());
        assert!(fresh.scoreboard().late.is_zero());
        assert!(fresh.winner().is_none());
        assert_eq!(fresh.generation(), done.generation() + 1);
        assert_eq!(fresh.id(), done.id());
    }

    #[test]
    fn test_restart_allowed_while_calculating() {
        let calculating = answered_all(0);
        let fresh = calculating
            .apply(SessionAction::Restart, Catalog::builtin())
            .unwrap();
        assert_eq!(fresh.state(), QuizState::Start);
    }

    #[test]
    fn test_invalid_actions_rejected() {
        let catalog = Catalog::builtin();
        let session = Session::new();
        assert_eq!(
            session.apply(SessionAction::Answer(0), catalog),
            Err(TransitionError::InvalidInState {
                action: "answer",
                state: QuizState::Start
            })
        );
        assert!(session.apply(SessionAction::Reveal, catalog).is_err());
        assert!(session.apply(SessionAction::Restart, catalog).is_err());

        let result = answered_all(0).apply(SessionAction::Reveal, catalog).unwrap();
        assert!(result
            .apply(SessionAction::SetNickname("x".into()), catalog)
            .is_err());
        assert!(result.apply(SessionAction::Reveal, catalog).is_err());
    }
}
