use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use streetsearch::app::App;
use streetsearch::cli::{Cli, Command};
use streetsearch::config::{self, Config};
use streetsearch::lookup::{format_items, lookup};
use streetsearch::source::SuggestionSource;
use streetsearch::street_search::StreetSearch;
use streetsearch::worker::{request_channel, spawn_worker};

/// How long to wait for input before checking for search responses
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(30);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    streetsearch::logging::init();

    let cli = Cli::parse();
    let mut config = config::load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    log::debug!("Config: {:?}", config);

    let source = SuggestionSource::from_config(&config.source)?;

    match cli.command {
        Some(Command::Lookup { text, format }) => run_lookup(source, &text, &config, format),
        None => run_interactive(source, &config),
    }
}

fn run_lookup(
    source: SuggestionSource,
    text: &str,
    config: &Config,
    format: streetsearch::lookup::OutputFormat,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let items = runtime.block_on(lookup(&source, text, config.autocomplete.min_length))?;
    print!("{}", format_items(&items, format));
    Ok(())
}

fn run_interactive(source: SuggestionSource, config: &Config) -> Result<()> {
    let source_label = source.describe();
    let (request_tx, request_rx) = request_channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(source, request_rx, response_tx)?;

    let street = StreetSearch::new(&config.autocomplete, request_tx, response_rx);
    let app = App::new(street, source_label);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    if let Some(submission) = result? {
        match submission.id {
            Some(id) => println!("{}\t{}", id, submission.label),
            None => println!("\t{}", submission.label),
        }
    }
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
) -> Result<Option<streetsearch::app::Submission>> {
    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            return Ok(app.submission().cloned());
        }
    }
}
