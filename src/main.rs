use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind, MouseEventKind,
};
use customizer::app::ReaderApp;
use customizer::article::Article;
use customizer::config::Config;
use customizer::services::log_dirs;
use customizer::services::terminal_modes::{self, TerminalModes};
use customizer::services::tracing_setup;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Read an article in the terminal and adjust its typography live
#[derive(Parser, Debug)]
#[command(name = "article-customizer")]
#[command(about = "A terminal article reader with a slide-out settings panel", long_about = None)]
#[command(version)]
struct Args {
    /// Plain text article: first non-empty line is the title, blank lines
    /// separate paragraphs. A built-in sample is shown when omitted.
    #[arg(value_name = "ARTICLE")]
    article: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the paths used by the reader and exit
    #[arg(long)]
    show_paths: bool,
}

fn config_path(args: &Args) -> Option<PathBuf> {
    args.config.clone().or_else(Config::default_path)
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    match config_path(args) {
        Some(path) => Config::load_or_default(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn print_paths(args: &Args) {
    match config_path(args) {
        Some(path) => println!("Config:   {}", path.display()),
        None => println!("Config:   (no config directory)"),
    }
    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    println!("Log file: {}", log_file.display());
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --show-paths early (no terminal setup needed)
    if args.show_paths {
        print_paths(&args);
        return Ok(());
    }

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let config = load_config(&args)?;
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled, cannot open {}: {}", log_file.display(), e);
    }
    tracing::info!("Reader starting");

    let config = load_config(&args)?;
    let article = match &args.article {
        Some(path) => Article::load(path)
            .with_context(|| format!("Failed to read article {}", path.display()))?,
        None => Article::sample(),
    };
    let mut app = ReaderApp::new(config, article).context("Invalid default settings")?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes = TerminalModes::enable()?;
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| {
            terminal.clear()?;
            run_event_loop(&mut app, &mut terminal)
        });
    terminal_modes.undo();

    if let Err(e) = &result {
        tracing::error!("Reader exited with error: {:#}", e);
    } else {
        tracing::info!("Reader exited");
    }
    result
}

fn run_event_loop(
    app: &mut ReaderApp,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16); // 60fps
    let mut last_render = Instant::now();
    let mut needs_render = true;
    let mut pending_event: Option<CrosstermEvent> = None;

    loop {
        if app.should_quit() {
            break;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| app.render(frame))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let event = if let Some(e) = pending_event.take() {
            Some(e)
        } else {
            let timeout = if needs_render {
                FRAME_DURATION.saturating_sub(last_render.elapsed())
            } else {
                Duration::from_millis(50)
            };
            if event_poll(timeout)? {
                Some(event_read()?)
            } else {
                None
            }
        };

        let Some(event) = event else { continue };

        let (event, next) = coalesce_mouse_moves(event)?;
        pending_event = next;

        match event {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    app.handle_key(key_event);
                    needs_render = true;
                }
            }
            CrosstermEvent::Mouse(mouse_event) => {
                app.handle_mouse(mouse_event);
                needs_render = true;
            }
            CrosstermEvent::Resize(w, h) => {
                tracing::debug!("Resized to {}x{}", w, h);
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Skip stale mouse move events, return the latest one.
/// If we read a non-move event while draining, return it as pending.
fn coalesce_mouse_moves(
    event: CrosstermEvent,
) -> AnyhowResult<(CrosstermEvent, Option<CrosstermEvent>)> {
    if !matches!(&event, CrosstermEvent::Mouse(m) if m.kind == MouseEventKind::Moved) {
        return Ok((event, None));
    }

    let mut latest = event;
    while event_poll(Duration::ZERO)? {
        let next = event_read()?;
        if matches!(&next, CrosstermEvent::Mouse(m) if m.kind == MouseEventKind::Moved) {
            latest = next;
        } else {
            return Ok((latest, Some(next)));
        }
    }
    Ok((latest, None))
}
