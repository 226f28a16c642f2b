use std::time::Duration;

use log::{debug, info};

use crate::quiz::display::DisplaySurface;
use crate::quiz::handoff::ResultHandoff;
use crate::quiz::random::IndexSource;
use crate::quiz::scheduler::{DeferredAction, Scheduler};
use crate::quiz::{
    ChoiceSlot, Outcome, Question, QuestionBank, FEEDBACK_DELAY, MAX_QUESTIONS, RESULTS_DESTINATION,
    RESULT_KEY, SCORE_POINTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub max_questions: usize,
    pub score_points: u32,
    pub feedback_delay: Duration,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_questions: MAX_QUESTIONS,
            score_points: SCORE_POINTS,
            feedback_delay: FEEDBACK_DELAY,
        }
    }
}

/// Where a session is in its per-question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first question, or between questions.
    Idle,
    /// A question is shown and waiting for a selection.
    Displayed,
    /// Answered; feedback is shown until the deferred action fires.
    Answered,
    /// Score handed off. Nothing but a new `start_session` does anything now.
    Ended,
}

/// Drives one quiz play-through and owns all of its state.
pub struct SessionController<D, H, S, R> {
    bank: QuestionBank,
    rules: Rules,
    display: D,
    handoff: H,
    scheduler: S,
    random: R,

    session: u64,
    phase: Phase,
    remaining: Vec<Question>,
    current: Option<Question>,
    score: u32,
    questions_shown: usize,
}

impl<D, H, S, R> SessionController<D, H, S, R>
where
    D: DisplaySurface,
    H: ResultHandoff,
    S: Scheduler,
    R: IndexSource,
{
    pub fn new(
        bank: QuestionBank,
        rules: Rules,
        display: D,
        handoff: H,
        scheduler: S,
        random: R,
    ) -> Self {
        Self {
            bank,
            rules,
            display,
            handoff,
            scheduler,
            random,
            session: 0,
            phase: Phase::Idle,
            remaining: Vec::new(),
            current: None,
            score: 0,
            questions_shown: 0,
        }
    }

    /// Resets everything and shows the first question (or ends right away
    /// for an empty bank).
    pub fn start_session(&mut self) {
        self.session += 1;
        self.phase = Phase::Idle;
        self.score = 0;
        self.questions_shown = 0;
        self.current = None;
        self.remaining = self.bank.questions().to_vec();
        self.display.show_score(self.score);
        info!(
            "Starting session #{} with {} questions available",
            self.session,
            self.remaining.len()
        );
        self.advance();
    }

    /// Shows the next question, or hands off the score once the bank is
    /// exhausted or the question limit is reached.
    pub fn advance(&mut self) {
        if self.phase == Phase::Ended {
            return;
        }

        // the termination check must come before selection: `remaining` may be empty
        if self.remaining.is_empty() || self.questions_shown >= self.rules.max_questions {
            self.finish();
            return;
        }

        self.questions_shown += 1;
        self.display.show_progress(&format!(
            "Question {} of {}",
            self.questions_shown, self.rules.max_questions
        ));
        self.display
            .set_progress_bar(&progress_width(self.questions_shown, self.rules.max_questions));

        let len = self.remaining.len();
        let index = self.random.next_index(len).min(len - 1);
        let question = self.remaining.remove(index);
        debug!(
            "Question {} picked at index {} of {}: {:?}",
            self.questions_shown, index, len, question.prompt
        );

        self.display.show_question(&question.prompt);
        for slot in ChoiceSlot::ALL {
            self.display.show_choice(slot, question.option(slot));
        }

        self.current = Some(question);
        self.phase = Phase::Displayed;
    }

    /// Scores a selection. Returns `None` when no answer is being accepted,
    /// in which case nothing changes.
    pub fn submit_answer(&mut self, choice: u32) -> Option<Outcome> {
        if self.phase != Phase::Displayed {
            return None;
        }
        self.phase = Phase::Answered;

        let question = self.current.as_ref()?;
        let outcome = if question.is_correct(choice) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        debug!("Choice {} for {:?} is {}", choice, question.prompt, outcome.marker());

        if outcome == Outcome::Correct {
            self.score = self.score.saturating_add(self.rules.score_points);
            self.display.show_score(self.score);
        }

        let slot = ChoiceSlot::new(choice);
        if let Some(slot) = slot {
            self.display.add_marker(slot, outcome);
        }

        self.scheduler.schedule(
            self.rules.feedback_delay,
            DeferredAction::ClearFeedback {
                session: self.session,
                slot,
                outcome,
            },
        );
        Some(outcome)
    }

    /// Called when a scheduled action comes due.
    pub fn on_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::ClearFeedback {
                session,
                slot,
                outcome,
            } => {
                if session != self.session || self.phase != Phase::Answered {
                    return;
                }
                if let Some(slot) = slot {
                    self.display.remove_marker(slot, outcome);
                }
                self.phase = Phase::Idle;
                self.advance();
            }
        }
    }

    fn finish(&mut self) {
        info!(
            "Session #{} finished with score {} after {} questions",
            self.session, self.score, self.questions_shown
        );
        self.phase = Phase::Ended;
        self.current = None;
        self.handoff.store(RESULT_KEY, self.score);
        self.handoff.navigate(RESULTS_DESTINATION);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn accepting_input(&self) -> bool {
        self.phase == Phase::Displayed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_shown(&self) -> usize {
        self.questions_shown
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn remaining(&self) -> &[Question] {
        &self.remaining
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn handoff(&self) -> &H {
        &self.handoff
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

fn progress_width(shown: usize, max: usize) -> String {
    format!("{}%", (shown as f64 / max as f64) * 100.0)
}
