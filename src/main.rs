use std::io;

use log::{info, warn};
use quiz_session::config::Config;
use quiz_session::error::QuizError;
use quiz_session::quiz::{
    display::TerminalDisplay,
    event_loop::{self, LoopExit},
    handoff::SessionStorage,
    random::RngIndexSource,
    scheduler::TokioScheduler,
    session::SessionController,
    RESULT_KEY,
};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), QuizError> {
    // a missing .env is fine, everything has a default
    if let Err(err) = dotenv::dotenv() {
        if !err.not_found() {
            eprintln!("Ignoring .env: {}", err);
        }
    }
    pretty_env_logger::init();
    info!("Starting quiz...");

    let config = Config::from_env()?;
    let bank = config.load_bank()?;
    info!("Loaded {} questions", bank.len());

    let (scheduler, mut deferred) = TokioScheduler::new();
    let (tx, mut selections) = mpsc::unbounded_channel();

    // Blocking stdin reads live on their own thread so they never hold up
    // runtime shutdown.
    std::thread::spawn(move || event_loop::forward_selections(io::stdin().lock(), tx));

    let mut controller = SessionController::new(
        bank,
        config.rules(),
        TerminalDisplay::new(io::stdout()),
        SessionStorage::new(),
        scheduler,
        RngIndexSource::from_entropy(),
    );
    controller.start_session();

    match event_loop::run(&mut controller, &mut selections, &mut deferred).await {
        LoopExit::SessionEnded => show_results(controller.handoff()),
        LoopExit::InputClosed => warn!("Input closed before the quiz was finished"),
    }
    Ok(())
}

fn show_results(storage: &SessionStorage) {
    let destination = storage.destination().unwrap_or_default();
    match storage.score(RESULT_KEY) {
        Some(score) => println!("\n{} -- Final score: {}", destination, score),
        None => println!("\n{} -- No score recorded", destination),
    }
}
