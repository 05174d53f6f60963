use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use buzz_generator::cli::{Args, Command};
use buzz_generator::generator::{GenerationRequest, Generator};
use buzz_generator::history::HistoryEntry;
use buzz_generator::models::App;
use buzz_generator::provider::OpenAiProvider;
use buzz_generator::ui::ui;
use buzz_generator::utils::{init_logging, log_file_path, LogTarget};

fn main() -> Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    let args = Args::parse();
    args.validate()?;

    let runtime = tokio::runtime::Runtime::new()?;

    match args.command.clone() {
        Some(Command::Generate { announcement, json }) => {
            init_logging(args.log_level.as_deref(), LogTarget::Stderr)?;
            run_headless(&runtime, &args, announcement, json)
        }
        None => {
            init_logging(args.log_level.as_deref(), LogTarget::File)?;
            tracing::info!(log_file = %log_file_path().display(), "Starting interactive form");
            run_interactive(&runtime, &args)
        }
    }
}

/// One generation straight to stdout
fn run_headless(
    runtime: &tokio::runtime::Runtime,
    args: &Args,
    announcement: String,
    json: bool,
) -> Result<()> {
    let provider = OpenAiProvider::new(&args.api_key(), args.provider_settings())?;
    let generator = Generator::new(Arc::new(provider), args.error_policy);
    let request = GenerationRequest::new(announcement, args.language);

    let output = runtime.block_on(generator.run(&request))?;
    let entry = HistoryEntry::new(request, output);

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        print!("{}", entry.to_report());
    }

    Ok(())
}

fn run_interactive(runtime: &tokio::runtime::Runtime, args: &Args) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(
        args.api_key(),
        args.language,
        args.error_policy,
        OpenAiProvider::factory(args.provider_settings()),
        runtime.handle().clone(),
    );

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "Terminal loop failed");
        println!("Error: {:?}", err);
    }

    tracing::info!(runs = app.history.len(), "Session ended");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Pick up a finished generation
        app.poll_generation();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(80))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
