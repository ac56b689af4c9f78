//! LeitnerLang - spaced repetition language flashcards, backed by a ledger.
//!
//! The review schedule lives on a remote ledger; this binary is the terminal
//! client that drives a review session against it.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use leitner_lang::config::Config;
use leitner_lang::ledger::{Address, HttpLedger};
use leitner_lang::session::ReviewSession;
use leitner_lang::ui::App;

// ══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "leitner")]
#[command(author, version, about = "Spaced repetition language flashcards on a ledger", long_about = None)]
struct Args {
    /// Account address on the ledger (overrides the config file)
    #[arg(short, long)]
    account: Option<String>,

    /// Gateway base URL (overrides the config file)
    #[arg(short, long)]
    gateway: Option<String>,
}

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Load config, then apply CLI overrides
    let mut config = Config::load().unwrap_or_default();
    if let Some(account) = args.account {
        config.account = Some(account);
    }
    if let Some(gateway) = args.gateway {
        config.gateway = gateway;
    }

    let Some(raw_account) = config.account.clone() else {
        bail!(
            "No account configured. Pass --account or set `account` in {:?}",
            Config::default_path()
        );
    };
    let account = Address::new(&raw_account);

    let ledger = Arc::new(HttpLedger::new(&config.gateway));
    let session = ReviewSession::new(Arc::clone(&ledger), account)
        .with_review_timeout(Duration::from_secs(config.review_timeout_secs));

    run_tui(ledger, session, config).await
}

async fn run_tui(
    ledger: Arc<HttpLedger>,
    session: ReviewSession<HttpLedger>,
    config: Config,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(ledger, session, config);
    app.bootstrap().await;

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        return Err(err);
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<HttpLedger>,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events().await?;
    }
    Ok(())
}
