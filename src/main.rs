use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use notequill::config::Config;
use notequill::editor::state::{BoardState, MessageLevel};
use notequill::input::InputHandler;
use notequill::store::{default_board_path, load_board, save_board};
use notequill::theme::get_builtin_theme;
use notequill::ui::UI;

/// NoteQuill - a terminal-based Eisenhower matrix note board
#[derive(Parser)]
#[command(name = "notequill")]
#[command(version)]
#[command(about = "A terminal-based Eisenhower matrix note board", long_about = None)]
struct Cli {
    /// Board file to use (default: the platform data directory)
    file: Option<String>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,
}

/// Set up a panic hook that restores the terminal before displaying
/// panic information.
///
/// Without this, panic messages would be hidden or garbled by the raw
/// mode alternate screen, making debugging very difficult.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal to normal state on stderr to avoid
        // interfering with stdout pipes.
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Resolves the board file location: CLI argument, then config
/// override, then the platform data directory.
fn resolve_board_path(cli_file: Option<String>, config: &Config) -> Result<PathBuf> {
    if let Some(file) = cli_file {
        return Ok(PathBuf::from(file));
    }
    if let Some(file) = &config.data_file {
        return Ok(PathBuf::from(file));
    }
    default_board_path().context("Could not determine a data directory for the board file")
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    let board_path = resolve_board_path(cli.file, &config)?;
    let board = load_board(&board_path);

    // CLI theme overrides config theme
    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme);

    let theme = get_builtin_theme(theme_name).unwrap_or_else(|| {
        eprintln!(
            "Warning: Theme '{}' not found, using default-dark",
            theme_name
        );
        get_builtin_theme("default-dark").unwrap()
    });

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut ui = UI::new(theme);
    let mut input_handler = InputHandler::new();
    let mut state = BoardState::new(board, board_path);
    state.set_enable_mouse(config.enable_mouse);

    let result = run_event_loop(&mut terminal, &mut ui, &mut input_handler, &mut state);

    // Termion restores the terminal through Drop guards, but we still
    // want the cursor back before exiting.
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    state: &mut BoardState,
) -> Result<()> {
    loop {
        // Advance cursor blink and the selection pulse
        state.tick();

        // Render UI
        ui.render(terminal, state)?;

        // Handle input
        if let Some(event) = input_handler.poll_event(Duration::from_millis(100))? {
            let should_quit = input_handler.handle_event(event, state)?;

            // Every mutation rewrites the full snapshot
            if state.is_dirty() {
                if let Err(err) = save_board(state.board_path(), state.board()) {
                    state.set_message(format!("Save failed: {err:#}"), MessageLevel::Error);
                }
                state.clear_dirty();
            }

            if should_quit {
                break;
            }
        }
    }

    Ok(())
}
