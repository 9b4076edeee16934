//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize, frame tick)
//! - ConductorClient for the quiz flow
//! - DisplayState for rendering
//!
//! Key presses become QuizEvents; QuizMessages update the DisplayState;
//! the screens render from DisplayState through the compositor.

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

use wizai_conductor::{Catalog, QuizConfig, QuizMessage, QuizState};

use crate::compositor::{Compositor, LayerId};
use crate::conductor_client::ConductorClient;
use crate::display::DisplayState;
use crate::screens::{self, ScreenState};
use crate::theme;

/// Frame interval (drives the spinner and toast expiry)
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Widest a toast gets
const TOAST_MAX_WIDTH: u16 = 60;

/// Quick goodbye messages
const QUICK_GOODBYES: &[&str] = &[
    "Go hack the AI era!",
    "Your talent is waiting.",
    "See you, wizard.",
    "Mission complete.",
    "Stay curious!",
    "またね！",
    "Keep leveling up!",
    "Go make something cool!",
];

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Goodbye message to show on exit
    goodbye_message: Option<String>,

    // === Conductor Integration ===
    /// Client for communicating with the embedded Conductor
    conductor: ConductorClient,
    /// Display state derived from QuizMessages
    display: DisplayState,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    /// Scroll and animation state
    screen: ScreenState,

    // === Misc State ===
    /// Last frame time (for toast expiry)
    last_frame: Instant,
    /// Terminal size
    size: (u16, u16),
}

/// Layer IDs for UI regions
struct AppLayers {
    screen: LayerId,
    status: LayerId,
    toast: LayerId,
}

impl App {
    /// Create an App sized to the current terminal
    pub fn new(config: &QuizConfig) -> anyhow::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::with_size(config, width, height))
    }

    /// Create an App for a terminal of the given size
    pub fn with_size(config: &QuizConfig, width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let mut compositor = Compositor::new(area);

        let layers = AppLayers {
            screen: compositor.create_layer(screen_rect(width, height), 0),
            status: compositor.create_layer(status_rect(width, height), 10),
            toast: compositor.create_layer(Rect::new(0, 0, 0, 0), 20),
        };
        compositor.set_visible(layers.toast, false);

        Self {
            running: true,
            goodbye_message: None,
            conductor: ConductorClient::new(config),
            display: DisplayState::new(),
            compositor,
            layers,
            screen: ScreenState::default(),
            last_frame: Instant::now(),
            size: (width, height),
        }
    }

    /// Start the embedded Conductor and connect to it
    ///
    /// # Errors
    ///
    /// Fails when the quiz content does not validate.
    pub async fn startup(&mut self) -> anyhow::Result<()> {
        self.conductor.start().await?;
        self.conductor.connect().await?;
        self.process_conductor_messages();
        Ok(())
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        self.startup().await?;
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        // Only handle Press events (not Release or Repeat)
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key).await?;
                        }
                        Some(Ok(Event::Resize(w, h))) => self.handle_resize(w, h),
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::warn!(error = %e, "Terminal event error");
                        }
                        None => self.running = false,
                    }
                }

                _ = tokio::time::sleep(FRAME_INTERVAL) => {}
            }

            self.tick().await;
            self.render(terminal)?;

            if self.display.quit {
                self.running = false;
            }
        }

        Ok(())
    }

    /// One frame of background work: timer and export completions,
    /// Conductor messages, animations
    pub async fn tick(&mut self) {
        self.conductor.poll_background().await;
        self.process_conductor_messages();

        let now = Instant::now();
        self.display.update(now - self.last_frame);
        self.last_frame = now;
        self.screen.tick = self.screen.tick.wrapping_add(1);
    }

    /// Process all pending messages from the Conductor
    fn process_conductor_messages(&mut self) {
        for msg in self.conductor.recv_all() {
            match &msg {
                QuizMessage::State {
                    state: QuizState::Result,
                } => self.screen.result_scroll.scroll_to_top(),
                QuizMessage::Quit { message } if self.goodbye_message.is_none() => {
                    self.goodbye_message = message.clone();
                }
                _ => {}
            }

            self.display.apply_message(msg);
        }
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || ctrl_c {
            return self.quit().await;
        }

        match self.display.state {
            QuizState::Start => match key.code {
                KeyCode::Enter => self.conductor.start_quiz().await?,
                KeyCode::Backspace => {
                    let mut nickname = self.display.nickname.clone();
                    nickname.pop();
                    self.conductor.set_nickname(nickname).await?;
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    let mut nickname = self.display.nickname.clone();
                    nickname.push(c);
                    self.conductor.set_nickname(nickname).await?;
                }
                _ => {}
            },

            QuizState::InProgress => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.display.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.display.move_cursor(1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.conductor.select_option(self.display.cursor).await?;
                }
                KeyCode::Char(c @ '1'..='9') => {
                    self.conductor.select_option(c as usize - '1' as usize).await?;
                }
                KeyCode::Char(c @ 'a'..='d') => {
                    self.conductor.select_option(c as usize - 'a' as usize).await?;
                }
                KeyCode::Char('q') => return self.quit().await,
                _ => {}
            },

            QuizState::Calculating => match key.code {
                KeyCode::Char('r') => self.conductor.restart().await?,
                KeyCode::Char('q') => return self.quit().await,
                _ => {}
            },

            QuizState::Result => match key.code {
                KeyCode::Char('s') => self.conductor.export().await?,
                KeyCode::Char('r') => self.conductor.restart().await?,
                KeyCode::Char('q') => return self.quit().await,
                KeyCode::Up | KeyCode::Char('k') => self.screen.result_scroll.scroll(-1),
                KeyCode::Down | KeyCode::Char('j') => self.screen.result_scroll.scroll(1),
                KeyCode::PageUp => self.screen.result_scroll.page(-1),
                KeyCode::PageDown => self.screen.result_scroll.page(1),
                KeyCode::Home => self.screen.result_scroll.scroll_to_top(),
                _ => {}
            },
        }

        self.process_conductor_messages();
        Ok(())
    }

    async fn quit(&mut self) -> anyhow::Result<()> {
        self.generate_goodbye();
        self.conductor.request_quit().await?;
        self.process_conductor_messages();
        self.running = false;
        Ok(())
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.compositor.resize(Rect::new(0, 0, width, height));
        self.compositor
            .place_layer(self.layers.screen, screen_rect(width, height));
        self.compositor
            .place_layer(self.layers.status, status_rect(width, height));
    }

    /// Render the UI
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        self.render_screen();
        self.render_status();
        self.render_toast();

        terminal.draw(|frame| {
            let output = self.compositor.composite();
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    let idx = output.index_of(x, y);
                    if idx < output.content.len() {
                        buf[(x, y)] = output.content[idx].clone();
                    }
                }
            }
        })?;

        Ok(())
    }

    /// Render the screen for the current state
    fn render_screen(&mut self) {
        let catalog = Catalog::builtin();
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.screen) {
            buf.reset();
            let area = buf.area;
            screens::render(area, buf, &self.display, &mut self.screen, catalog);
        }
    }

    /// Render status bar
    fn render_status(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) {
            buf.reset();
            let area = buf.area;

            let hints = match self.display.state {
                QuizState::Start => "type a codename | Enter start | Esc quit",
                QuizState::InProgress => "↑↓ move | Enter/1-4/a-d answer | q quit",
                QuizState::Calculating => "r restart | q quit",
                QuizState::Result => "s save | r restart | ↑↓ PgUp/PgDn scroll | q quit",
            };
            let busy = if self.display.exporting {
                " | Saving report..."
            } else {
                ""
            };

            let status = format!(" {} | {hints}{busy}", self.display.state.description());
            buf.set_stringn(
                area.x,
                area.y,
                &status,
                usize::from(area.width),
                Style::default().fg(theme::DIM_GRAY),
            );
        }
    }

    /// Render the latest notification as a floating toast
    fn render_toast(&mut self) {
        let Some(note) = self.display.latest_notification() else {
            self.compositor.set_visible(self.layers.toast, false);
            return;
        };

        let (width, height) = self.size;
        let toast_width = (note.message.width() as u16 + 4)
            .min(TOAST_MAX_WIDTH)
            .min(width);
        let bounds = Rect::new(width - toast_width, 0, toast_width, 3.min(height));
        let style = theme::notify_style(note.level);
        let message = note.message.clone();

        self.compositor.place_layer(self.layers.toast, bounds);
        self.compositor.set_visible(self.layers.toast, true);
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.toast) {
            buf.reset();
            let area = buf.area;
            Paragraph::new(Line::from(Span::styled(message, style)))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(style),
                )
                .render(area, buf);
        }
    }

    fn generate_goodbye(&mut self) {
        let idx = rand::random::<usize>() % QUICK_GOODBYES.len();
        self.goodbye_message = Some(QUICK_GOODBYES[idx].to_string());
    }

    /// Get goodbye message
    pub fn goodbye(&self) -> Option<&str> {
        self.goodbye_message.as_deref()
    }

    /// Whether the loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current display state
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Current quiz state according to the Conductor
    pub fn state(&self) -> QuizState {
        self.conductor.state()
    }
}

fn screen_rect(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height.saturating_sub(1))
}

fn status_rect(width: u16, height: u16) -> Rect {
    Rect::new(0, height.saturating_sub(1), width, height.min(1))
}
