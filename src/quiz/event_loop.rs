use std::io::BufRead;

use log::{debug, warn};
use tokio::sync::mpsc;

use crate::quiz::display::DisplaySurface;
use crate::quiz::handoff::ResultHandoff;
use crate::quiz::random::IndexSource;
use crate::quiz::scheduler::{DeferredAction, Scheduler};
use crate::quiz::session::{Phase, SessionController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// Score was handed off and the results view took over.
    SessionEnded,
    /// Input went away before the session ended.
    InputClosed,
}

/// Runs the session until it ends or input closes. Selections and fired
/// deferred actions are handled one at a time, each to completion.
pub async fn run<D, H, S, R>(
    controller: &mut SessionController<D, H, S, R>,
    selections: &mut mpsc::UnboundedReceiver<u32>,
    deferred: &mut mpsc::UnboundedReceiver<DeferredAction>,
) -> LoopExit
where
    D: DisplaySurface,
    H: ResultHandoff,
    S: Scheduler,
    R: IndexSource,
{
    loop {
        if controller.phase() == Phase::Ended {
            return LoopExit::SessionEnded;
        }

        tokio::select! {
            Some(action) = deferred.recv() => controller.on_deferred(action),
            selection = selections.recv() => match selection {
                Some(choice) => {
                    // dropped, not queued, while feedback is showing
                    controller.submit_answer(choice);
                }
                None => return LoopExit::InputClosed,
            },
        }
    }
}

/// Reads one selection per line and forwards it until input ends or the
/// receiver goes away. Blocking; meant for a dedicated thread.
pub fn forward_selections(input: impl BufRead, tx: mpsc::UnboundedSender<u32>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("Failed to read input: {}", err);
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some(choice) = parse_selection(trimmed) else {
            println!("Type the number of your answer (1-4)");
            continue;
        };
        debug!("Selection {}", choice);
        if tx.send(choice).is_err() {
            break;
        }
    }
}

/// Any integer is a selection. Ones that don't fit a `u32` (negative or
/// huge) can never name a slot, so they are sent as 0 and scored incorrect.
fn parse_selection(text: &str) -> Option<u32> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<u32>().unwrap_or(0))
}
