mod app;
mod chip;
mod config;
mod error;
mod events;
mod log;
mod picker;
mod scroll;
mod tui;

use anyhow::{Context, Result};
use crossterm::{
    event::{EnableBracketedPaste, EnableFocusChange, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::cell::RefCell;
use std::io::stdout;
use std::path::PathBuf;
use std::rc::Rc;

use app::App;
use chip::{BackspaceMode, CandidateItem, SelectionController};
use config::Config;
use events::{Action, EventHandler};

const USAGE: &str = "\
Usage: chipsel [OPTIONS]

Pick items from a list as chips; the selection is printed as JSON on exit.

Options:
  -c, --candidates <FILE>   JSON array of {label, value, image?} objects
      --immediate-backspace Backspace removes the last chip without marking it first
      --print-values        Print only the selected values
  -h, --help                Show this help";

/// Options parsed from the command line
#[derive(Debug, Default)]
struct CliArgs {
    candidates: Option<PathBuf>,
    backspace: Option<BackspaceMode>,
    print_values: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--candidates" | "-c" => {
                if i + 1 < args.len() {
                    cli.candidates = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --candidates requires a path argument");
                }
            }
            "--immediate-backspace" => cli.backspace = Some(BackspaceMode::Immediate),
            "--print-values" => cli.print_values = true,
            "--help" | "-h" => cli.help = true,
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
        i += 1;
    }

    cli
}

fn render_selection(selected: &[CandidateItem], values_only: bool) -> Result<String> {
    let json = if values_only {
        let values: Vec<&str> = selected.iter().map(|s| s.value.as_str()).collect();
        serde_json::to_string_pretty(&values)?
    } else {
        serde_json::to_string_pretty(selected)?
    };
    Ok(json)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Precedence: CLI > env var > config file > default
    let config =
        Config::load().with_overrides(cli.candidates, Config::env_candidates(), cli.backspace);

    let candidates = match config.candidates_path() {
        Some(path) => chip::load_candidates(&path)
            .with_context(|| format!("loading candidates from {}", path.display()))?,
        None => chip::demo_candidates(),
    };
    log::log(&format!("Loaded {} candidates", candidates.len()));

    // The caller owns the selection; the controller reports every change here
    let selection: Rc<RefCell<Vec<CandidateItem>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&selection);
    let controller = SelectionController::new(candidates)
        .with_backspace_mode(config.backspace)
        .with_on_change(move |selected| {
            *sink.borrow_mut() = selected.to_vec();
        });

    let mut app = App::new(controller, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    log::restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    result?;

    let selected = selection.borrow();
    println!("{}", render_selection(&selected, cli.print_values)?);
    log::log(&format!("Exited with {} selected", selected.len()));

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // The input starts focused
    app.apply(Action::FocusInput);

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        match event_stream.next().await {
            Some(Ok(event)) => {
                let action = EventHandler::handle_event(app, &event);
                app.apply(action);
            }
            Some(Err(e)) => {
                log::log(&format!("Terminal event error: {}", e));
                return Err(error::ChipError::Terminal(e.to_string()).into());
            }
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
