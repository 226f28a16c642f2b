//! Fake collaborators for driving a session without a terminal or timers.

use std::time::Duration;

use crate::quiz::display::DisplaySurface;
use crate::quiz::handoff::ResultHandoff;
use crate::quiz::scheduler::{DeferredAction, Scheduler};
use crate::quiz::{ChoiceSlot, Outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Question(String),
    Choice(u8, String),
    Progress(String),
    ProgressBar(String),
    Score(u32),
    MarkerAdded(u8, &'static str),
    MarkerRemoved(u8, &'static str),
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    pub fn prompts(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DisplayEvent::Question(prompt) => Some(prompt.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&DisplayEvent) -> bool) -> usize {
        self.events.iter().filter(|event| matches(event)).count()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn show_question(&mut self, prompt: &str) {
        self.events.push(DisplayEvent::Question(prompt.to_string()));
    }

    fn show_choice(&mut self, slot: ChoiceSlot, text: &str) {
        self.events
            .push(DisplayEvent::Choice(slot.number(), text.to_string()));
    }

    fn show_progress(&mut self, text: &str) {
        self.events.push(DisplayEvent::Progress(text.to_string()));
    }

    fn set_progress_bar(&mut self, width: &str) {
        self.events.push(DisplayEvent::ProgressBar(width.to_string()));
    }

    fn show_score(&mut self, score: u32) {
        self.events.push(DisplayEvent::Score(score));
    }

    fn add_marker(&mut self, slot: ChoiceSlot, outcome: Outcome) {
        self.events
            .push(DisplayEvent::MarkerAdded(slot.number(), outcome.marker()));
    }

    fn remove_marker(&mut self, slot: ChoiceSlot, outcome: Outcome) {
        self.events
            .push(DisplayEvent::MarkerRemoved(slot.number(), outcome.marker()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingHandoff {
    pub stored: Vec<(String, u32)>,
    pub navigations: Vec<String>,
}

impl ResultHandoff for RecordingHandoff {
    fn store(&mut self, key: &str, score: u32) {
        self.stored.push((key.to_string(), score));
    }

    fn navigate(&mut self, destination: &str) {
        self.navigations.push(destination.to_string());
    }
}

/// Holds scheduled actions until the test fires them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub pending: Vec<(Duration, DeferredAction)>,
}

impl ManualScheduler {
    pub fn take(&mut self) -> Vec<DeferredAction> {
        self.pending.drain(..).map(|(_, action)| action).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, action: DeferredAction) {
        self.pending.push((delay, action));
    }
}

/// Index source that always takes the first remaining question.
pub fn first(_len: usize) -> usize {
    0
}
