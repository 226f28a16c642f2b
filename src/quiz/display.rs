use std::io::Write;

use log::warn;

use crate::quiz::{ChoiceSlot, Outcome};

/// Everything the session controller draws on.
///
/// Choice sinks are keyed by [`ChoiceSlot`]; a slot keeps its identity for
/// the whole session no matter which question currently fills it.
pub trait DisplaySurface {
    fn show_question(&mut self, prompt: &str);
    fn show_choice(&mut self, slot: ChoiceSlot, text: &str);
    fn show_progress(&mut self, text: &str);
    /// `width` is a CSS-like percentage, e.g. `"25%"`.
    fn set_progress_bar(&mut self, width: &str);
    fn show_score(&mut self, score: u32);
    fn add_marker(&mut self, slot: ChoiceSlot, outcome: Outcome);
    fn remove_marker(&mut self, slot: ChoiceSlot, outcome: Outcome);
}

const BAR_CELLS: usize = 20;

/// Line-oriented renderer for a terminal (or any writer).
pub struct TerminalDisplay<W: Write> {
    out: W,
    marked: Option<(ChoiceSlot, Outcome)>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out, marked: None }
    }

    /// Slot currently carrying a feedback marker.
    pub fn marked(&self) -> Option<(ChoiceSlot, Outcome)> {
        self.marked
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments) {
        if let Err(err) = self.out.write_fmt(text).and_then(|_| self.out.write_all(b"\n")) {
            warn!("Failed to write to the terminal: {}", err);
        }
        if let Err(err) = self.out.flush() {
            warn!("Failed to flush the terminal: {}", err);
        }
    }
}

impl<W: Write> DisplaySurface for TerminalDisplay<W> {
    fn show_question(&mut self, prompt: &str) {
        self.line(format_args!("\n{}", prompt));
    }

    fn show_choice(&mut self, slot: ChoiceSlot, text: &str) {
        self.line(format_args!("  [{}] {}", slot.number(), text));
    }

    fn show_progress(&mut self, text: &str) {
        self.line(format_args!("\n{}", text));
    }

    fn set_progress_bar(&mut self, width: &str) {
        let filled = width
            .trim_end_matches('%')
            .parse::<f64>()
            .map(|percent| ((percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize)
            .unwrap_or(0);
        let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_CELLS - filled));
        self.line(format_args!("[{}] {}", bar, width));
    }

    fn show_score(&mut self, score: u32) {
        self.line(format_args!("Score: {}", score));
    }

    fn add_marker(&mut self, slot: ChoiceSlot, outcome: Outcome) {
        self.marked = Some((slot, outcome));
        self.line(format_args!("  [{}] {}!", slot.number(), outcome.marker()));
    }

    fn remove_marker(&mut self, slot: ChoiceSlot, outcome: Outcome) {
        if self.marked == Some((slot, outcome)) {
            self.marked = None;
        }
    }
}
