mod config;
mod core;
mod models;
mod services;
mod session;

use config::Settings;
use core::{DeckPhase, DeckSnapshot, DecisionOutcome};
use models::{Candidate, SwipeDirection};
use session::SwipeSession;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting LinkMatch swipe deck...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    let session = SwipeSession::new(&settings);
    let mut changes = session.deck().subscribe();

    if session.is_preview() {
        println!("Preview mode · set session.profile_id to sync likes");
    } else {
        println!("Active profile · {}", settings.session.profile_id);
    }

    let load = session.refresh().await;
    println!("{}", load.status);
    if let Some(advisory) = &load.advisory {
        println!("Heads up: {}", advisory);
    }
    render_window(&session).await;

    println!("Commands: [l]eft = pass, [r]ight = like, re[f]resh, [q]uit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim().to_lowercase().as_str() {
            "l" | "left" | "pass" => swipe(&session, &mut changes, SwipeDirection::Left).await,
            "r" | "right" | "like" => swipe(&session, &mut changes, SwipeDirection::Right).await,
            "f" | "refresh" => {
                let load = session.refresh().await;
                println!("{}", load.status);
                if let Some(advisory) = &load.advisory {
                    println!("Heads up: {}", advisory);
                }
                render_window(&session).await;
            }
            "q" | "quit" | "exit" => break,
            "" => {}
            other => println!("Unknown command: {}", other),
        }
    }

    Ok(())
}

async fn swipe(
    session: &SwipeSession,
    changes: &mut tokio::sync::watch::Receiver<DeckSnapshot>,
    direction: SwipeDirection,
) {
    match session.swipe(direction).await {
        DecisionOutcome::Preview => {
            println!("Preview mode: set session.profile_id to sync likes with the backend.")
        }
        DecisionOutcome::Matched { name } => println!("🎉 It's a match with {}!", name),
        DecisionOutcome::Liked { name } => println!("You liked {}", name),
        DecisionOutcome::Passed { name } => println!("You passed on {}", name),
        DecisionOutcome::DispatchFailed { .. } => {
            println!("Something went wrong while talking to the server.")
        }
        DecisionOutcome::Ignored => return,
    }

    // Wait for the settle timer to release the transition lock
    while changes.changed().await.is_ok() {
        if !changes.borrow().in_transition {
            break;
        }
    }

    render_window(session).await;
}

async fn render_window(session: &SwipeSession) {
    let window = session.deck().visible_window().await;
    if window.is_empty() {
        let snapshot = session.deck().snapshot().await;
        if snapshot.phase == DeckPhase::Exhausted && snapshot.deck_len > 0 {
            println!("You made it through the whole deck!");
        } else {
            println!("No more profiles. Check back soon or refresh the deck.");
        }
        return;
    }

    render_card(&window[0]);
    for next in &window[1..] {
        println!("  up next: {}", next.name);
    }
}

fn render_card(candidate: &Candidate) {
    println!("-----------------------------------------");
    match candidate.age {
        Some(age) => println!("{} · {}", candidate.name, age),
        None => println!("{}", candidate.name),
    }
    if !candidate.job_title.is_empty() {
        println!("{} · {}", candidate.job_title, candidate.industry);
    }
    if let Some(score) = candidate.compatibility_score {
        match &candidate.match_type {
            Some(match_type) => println!("{:.0}% · {}", score, match_type),
            None => println!("{:.0}% compatible", score),
        }
    }
    if !candidate.bio.is_empty() {
        println!("{}", candidate.bio);
    }
    // The card shows at most three reasons; the model itself is unbounded
    for reason in candidate.reasons.iter().take(3) {
        println!("  - {}", reason);
    }
    println!("-----------------------------------------");
}
