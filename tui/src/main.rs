//! WIZAI TUI Entry Point
//!
//! Launches the terminal skill diagnosis quiz.
//!
//! Usage:
//!   wizai-tui [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>      Configuration file (default: ~/.config/wizai/wizai.toml)
//!   -o, --export-dir <DIR>   Where exported reports are written
//!       --pacing-ms <MS>     How long the processing screen stays up
//!
//! Logs go to `WIZAI_LOG_FILE` (or `wizai-tui.log` in the state directory);
//! filter them with `RUST_LOG`.

use std::fs::{self, File};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wizai_conductor::{default_config_path, load_config_from_path, ConfigOverrides, QuizConfig};
use wizai_tui::App;

/// WIZAI - AI skill diagnosis in your terminal
#[derive(Parser, Debug)]
#[command(name = "wizai-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "WIZAI_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory exported reports are written to
    #[arg(short = 'o', long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Processing screen duration in milliseconds
    #[arg(long, value_name = "MS")]
    pacing_ms: Option<u64>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(dir) = &self.export_dir {
            overrides = overrides.with_export_dir(dir.clone());
        }
        if let Some(ms) = self.pacing_ms {
            overrides = overrides.with_pacing_delay_ms(ms);
        }
        overrides
    }
}

/// Log file location: `WIZAI_LOG_FILE`, else the state/cache directory
fn log_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os("WIZAI_LOG_FILE") {
        return PathBuf::from(path);
    }
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("wizai")
        .join("wizai-tui.log")
}

/// Route tracing to a file so it never draws over the alternate screen
fn init_logging() -> anyhow::Result<PathBuf> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {parent:?}"))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {path:?}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Ok(path)
}

fn load_config(args: &Args) -> anyhow::Result<QuizConfig> {
    let path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(path)?;
    args.overrides().apply(&mut config);
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: wizai-tui requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  • Running in a non-interactive environment (CI, container)");
        eprintln!("  • SSH without -t flag");
        eprintln!("  • Piped stdin/stdout");
        std::process::exit(1);
    }

    let log_path = init_logging()?;
    let config = load_config(&args)?;
    tracing::info!(
        source = %config.source(),
        export_dir = %config.export_dir.display(),
        log = %log_path.display(),
        "Configuration loaded"
    );

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Propagate any errors
    let goodbye = result?;
    if let Some(goodbye) = goodbye {
        println!("\n\x1b[36mWIZAI:\x1b[0m {goodbye}\n");
    }
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &QuizConfig,
) -> anyhow::Result<Option<String>> {
    let mut app = App::new(config)?;
    app.run(terminal).await?;
    Ok(app.goodbye().map(str::to_string))
}
