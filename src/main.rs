// Dayplan - personal planner client
// Fetches notes and to-dos from the planner server and prints the
// selected day's calendar.

use anyhow::Result;
use chrono::Utc;
use log::info;

use dayplan::utils::logging;
use dayplan::{ApiConfig, CalendarController, PlannerState};

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run().await {
        logging::log_error_with_context(&e, "dayplan");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ApiConfig::from_env()?;
    info!("Using planner server at {}", config.base_url());

    let state = PlannerState::new(config)?;
    state.sync.fetch_notes().await?;
    state.sync.fetch_todos().await?;

    let controller = CalendarController::new(state.projector());

    let today = Utc::now().date_naive();
    let events = controller.selected_day_events(today);
    println!("{} event(s) on {}:", events.len(), today);
    for event in events {
        println!(
            "  [{}] {} ({} - {})",
            event.id,
            event.title,
            event.start.format("%H:%M"),
            event.end.format("%H:%M")
        );
    }

    Ok(())
}
