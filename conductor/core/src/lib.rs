//! WIZAI Conductor - Headless Core for the Skill Diagnosis Quiz
//!
//! This crate holds everything about the quiz that is not drawing: the
//! compiled-in content, the scoring rules, the session state machine and
//! the export contract. It can drive a terminal UI or run headless in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         UI Surface                            │
//! │        (TUI: screens, icons, report widget, exporter)         │
//! │                              │                                │
//! │                    QuizEvent (up)                             │
//! │                   QuizMessage (down)                          │
//! └──────────────────────────────┼────────────────────────────────┘
//!                                │
//! ┌──────────────────────────────┼────────────────────────────────┐
//! │                     CONDUCTOR CORE                            │
//! │  ┌───────────────────────────┴─────────────────────────────┐  │
//! │  │                       Conductor                          │  │
//! │  │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐ │  │
//! │  │  │ Session  │  │ Scoring  │  │ Catalog  │  │  Export  │ │  │
//! │  │  │  value   │  │  tallies │  │ (static) │  │  (trait) │ │  │
//! │  │  └──────────┘  └──────────┘  └──────────┘  └──────────┘ │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Conductor`]: drives `Start -> InProgress -> Calculating -> Result`
//! - [`QuizMessage`]: messages sent from Conductor to UI surfaces
//! - [`QuizEvent`]: events sent from UI surfaces to Conductor
//! - [`Session`]: one quiz run, replaced wholesale on every transition
//! - [`Catalog`]: questions and result profiles
//! - [`ReportExporter`]: the seam a surface implements to export results
//!
//! # Quick Start
//!
//! ```ignore
//! use wizai_conductor::{Conductor, ConductorConfig, QuizEvent, SurfaceType};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (tx, mut rx) = mpsc::channel(100);
//!     let mut conductor = Conductor::new(MyExporter, ConductorConfig::default(), tx);
//!     conductor.start().await?;
//!
//!     conductor.handle_event(QuizEvent::Connected {
//!         event_id: QuizEvent::new_event_id(),
//!         surface_type: SurfaceType::Headless,
//!     }).await?;
//!
//!     loop {
//!         while let Ok(msg) = rx.try_recv() {
//!             // Render message to UI
//!         }
//!         conductor.poll_background().await;
//!         // Turn user input into QuizEvents
//!     }
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`catalog`]: compiled-in questions and category profiles
//! - [`scoring`]: tallies and winner selection
//! - [`session`]: the session value and its transition function
//! - [`conductor`]: main Conductor struct
//! - [`events`]: events from UI surfaces to Conductor
//! - [`messages`]: messages from Conductor to UI surfaces
//! - [`export`]: report export contract and file writing
//! - [`validation`]: nickname sanitising
//! - [`config`]: TOML + environment configuration
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod conductor;
pub mod config;
pub mod events;
pub mod export;
pub mod messages;
pub mod scoring;
pub mod session;
pub mod validation;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, Category, CategoryProfile, Question, QuizOption, Rgb, Theme};
pub use conductor::{Conductor, ConductorConfig};
pub use events::{QuizEvent, SurfaceType};
pub use export::{
    export_file_name, export_report, ExportDocument, ExportError, PageGeometry, PageHeight,
    RenderedImage, ReportExporter, ResultReport,
};
pub use messages::{EventId, NotifyLevel, QuestionView, QuizMessage, QuizState, SessionId};
pub use scoring::{winning_category, ScoreTally, Scoreboard, LATE_STAGE_THRESHOLD};
pub use session::{Session, SessionAction, TransitionError};
pub use validation::{InputValidator, ValidationResult};

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, QuizConfig,
};
