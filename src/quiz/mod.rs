pub mod display;
pub mod event_loop;
pub mod handoff;
pub mod random;
pub mod scheduler;
pub mod session;

#[cfg(test)]
pub mod testing;

use std::io::Read;
use std::time::Duration;

use crate::error::QuizError;

/// Points awarded for each correct answer.
pub const SCORE_POINTS: u32 = 100;
/// Number of questions shown per session.
pub const MAX_QUESTIONS: usize = 4;
/// How long the correct/incorrect marker stays on before the next question.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1000);
/// Storage slot the results view reads the final score from.
pub const RESULT_KEY: &str = "mostRecentScore";
pub const RESULTS_DESTINATION: &str = "/end.html";

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    /// Number (1..=4) of the correct option.
    pub answer: u8,
}

impl Question {
    pub fn new(prompt: &str, options: [&str; OPTIONS_PER_QUESTION], answer: u8) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            answer,
        }
    }

    /// Text shown in the given slot. Slot `k` always shows `options[k - 1]`.
    pub fn option(&self, slot: ChoiceSlot) -> &str {
        &self.options[slot.index()]
    }

    /// Numbers outside 1..=4 never match.
    pub fn is_correct(&self, choice: u32) -> bool {
        ChoiceSlot::new(choice).is_some() && choice == u32::from(self.answer)
    }

    pub fn validate(&self, position: usize) -> Result<(), QuizError> {
        if ChoiceSlot::new(u32::from(self.answer)).is_none() {
            return Err(QuizError::InvalidAnswer {
                position,
                answer: self.answer,
            });
        }
        Ok(())
    }
}

/// Read-only set of questions a session draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            Question::new(
                "What is Newtons First Law?",
                [
                    "For every action, there is an equal and opposite reaction.",
                    "An object in motion stays in motion, and an object at rest stays at rest unless acted upon by an unbalanced force.",
                    "Force equals mass times acceleration.",
                    "The force of gravity acts between all objects in the universe.",
                ],
                2,
            ),
            Question::new(
                "What is the main work of Martin Heidegger?",
                [
                    "Being and Time",
                    "Critique of Pure Reason",
                    "Phenomenology of Spirit",
                    "Thus Spoke Zarathustra",
                ],
                1,
            ),
            Question::new(
                "Who is Geza Csosz?",
                [
                    "A German composer.",
                    "An Italian painter.",
                    "A British-based Hungarian photographer and fine artist.",
                    "A French novelist.",
                ],
                3,
            ),
            Question::new(
                "What are the basic stitches in knitting?",
                [
                    "Knit, Purl, Cast On, and Bind Off",
                    "Loop, Weave, Tie, and Braid",
                    "Satin Stitch, French Knot, Backstitch, and Blanket Stitch",
                    "Crochet, Tapestry, Loom, and Spin",
                ],
                1,
            ),
        ])
    }

    /// Parses a JSON array of questions and checks every answer index.
    pub fn from_reader(reader: impl Read) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        for (position, question) in questions.iter().enumerate() {
            question.validate(position)?;
        }
        Ok(Self::new(questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Fixed identity (1..=4) of a choice element, independent of the question
/// currently shown in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceSlot(u8);

impl ChoiceSlot {
    pub const ALL: [ChoiceSlot; OPTIONS_PER_QUESTION] =
        [ChoiceSlot(1), ChoiceSlot(2), ChoiceSlot(3), ChoiceSlot(4)];

    pub fn new(number: u32) -> Option<Self> {
        match number {
            1..=4 => Some(Self(number as u8)),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    /// Name of the style marker applied to the selected choice.
    pub fn marker(self) -> &'static str {
        match self {
            Outcome::Correct => "correct",
            Outcome::Incorrect => "incorrect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 4);
        for (position, question) in bank.questions().iter().enumerate() {
            question.validate(position).unwrap();
        }
        let answers: Vec<u8> = bank.questions().iter().map(|q| q.answer).collect();
        assert_eq!(answers, vec![2, 1, 3, 1]);
    }

    #[test]
    fn slots_bind_to_options_in_order() {
        let bank = QuestionBank::builtin();
        let question = &bank.questions()[1];
        let texts: Vec<&str> = ChoiceSlot::ALL.iter().map(|s| question.option(*s)).collect();
        assert_eq!(
            texts,
            vec![
                "Being and Time",
                "Critique of Pure Reason",
                "Phenomenology of Spirit",
                "Thus Spoke Zarathustra",
            ]
        );
    }

    #[test]
    fn out_of_range_choice_is_never_correct() {
        let mut question = Question::new("q", ["a", "b", "c", "d"], 3);
        assert!(question.is_correct(3));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(5));
        assert!(!question.is_correct(u32::MAX));

        // even a malformed question cannot be answered with an out-of-range number
        question.answer = 0;
        assert!(!question.is_correct(0));
    }

    #[test]
    fn choice_slot_bounds() {
        assert_eq!(ChoiceSlot::new(0), None);
        assert_eq!(ChoiceSlot::new(1).map(ChoiceSlot::number), Some(1));
        assert_eq!(ChoiceSlot::new(4).map(ChoiceSlot::number), Some(4));
        assert_eq!(ChoiceSlot::new(5), None);
    }

    #[test]
    fn bank_from_json() {
        let json = r#"[
            {"question": "2 + 2?", "options": ["3", "4", "5", "22"], "answer": 2}
        ]"#;
        let bank = QuestionBank::from_reader(json.as_bytes()).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].prompt, "2 + 2?");
        assert_eq!(bank.questions()[0].option(ChoiceSlot::ALL[3]), "22");
    }

    #[test]
    fn bank_rejects_bad_answer_index() {
        let json = r#"[
            {"question": "ok", "options": ["a", "b", "c", "d"], "answer": 1},
            {"question": "bad", "options": ["a", "b", "c", "d"], "answer": 5}
        ]"#;
        let err = QuestionBank::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidAnswer {
                position: 1,
                answer: 5
            }
        ));
    }

    #[test]
    fn bank_rejects_wrong_option_count() {
        let json = r#"[{"question": "q", "options": ["a", "b"], "answer": 1}]"#;
        assert!(matches!(
            QuestionBank::from_reader(json.as_bytes()),
            Err(QuizError::BankFormat(_))
        ));
    }
}
