//! services/frontend/src/bin/frontend.rs
//!
//! Console host for the issue analysis client. Each line read from stdin is
//! typed into the input field and submitted with Enter; rendered fragments
//! go to stdout and logs to stderr.

use frontend_lib::{
    adapters::{
        ConsoleCommand, ConsoleInput, ConsoleLoadingIndicator, ConsolePage, ConsoleResultView,
        HttpAnalysisBackend,
    },
    config::Config,
    error::FrontendError,
};
use issue_analysis_core::{
    decor::{change_background_color, say_hello},
    IssueAnalysisClient, TriggerEvent,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), FrontendError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!(base_url = %config.base_url, encoding = ?config.path_encoding, "Configuration loaded.");

    // --- 2. Wire the Page Elements and Backend into the Client ---
    let input = Arc::new(ConsoleInput::default());
    let backend = Arc::new(HttpAnalysisBackend::new(
        config.base_url.clone(),
        config.path_encoding,
    ));
    let client = IssueAnalysisClient::new(
        input.clone(),
        Arc::new(ConsoleResultView::default()),
        Arc::new(ConsoleLoadingIndicator::default()),
        backend,
    );
    let page = ConsolePage::default();

    // --- 3. Dispatch Console Lines as Page Events ---
    info!("Type an issue number and press Enter (:click, :hello, :color, :quit).");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let event = match ConsoleCommand::parse(&line) {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Hello => {
                say_hello(&page);
                continue;
            }
            ConsoleCommand::Color => {
                change_background_color(&page, &mut rand::rng());
                continue;
            }
            ConsoleCommand::Click => TriggerEvent::Click,
            ConsoleCommand::Submit(text) => {
                input.set(text);
                TriggerEvent::KeyPress("Enter".to_string())
            }
        };

        // Submissions are not serialized: the last one to resolve wins.
        let client = client.clone();
        in_flight.spawn(async move { client.handle_event(event).await });
    }

    // --- 4. Let In-Flight Requests Settle ---
    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            warn!("Submission task ended abnormally: {}", e);
        }
    }
    info!("Console host stopped.");

    Ok(())
}
