//! WIZAI TUI - Terminal interface for the skill diagnosis quiz
//!
//! A full-screen terminal front end for `wizai-conductor`. It owns no quiz
//! logic: key presses go to the embedded Conductor as events, and the
//! screens are drawn from the messages it sends back.
//!
//! # Architecture
//!
//! - **Compositor**: layered rendering (screen, status bar, toast)
//! - **Screens**: one renderer per quiz state
//! - **Widgets**: the result report and a scrollable text block
//! - **Icons**: pixel-art sprite per result category
//! - **Export**: off-screen capture of the report into a paged text file

pub mod app;
pub mod compositor;
pub mod conductor_client;
pub mod display;
pub mod export;
pub mod icons;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use export::BufferExporter;
