use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::debug;

use crate::error::QuizError;
use crate::quiz::{session::Rules, QuestionBank, FEEDBACK_DELAY, MAX_QUESTIONS, SCORE_POINTS};

const MAX_QUESTIONS_VAR: &str = "QUIZ_MAX_QUESTIONS";
const SCORE_POINTS_VAR: &str = "QUIZ_SCORE_POINTS";
const FEEDBACK_DELAY_VAR: &str = "QUIZ_FEEDBACK_DELAY_MS";
const BANK_FILE_VAR: &str = "QUIZ_BANK_FILE";

/// Settings read from the environment (and `.env`, if main loaded one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_questions: usize,
    pub score_points: u32,
    pub feedback_delay: Duration,
    pub bank_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_questions: MAX_QUESTIONS,
            score_points: SCORE_POINTS,
            feedback_delay: FEEDBACK_DELAY,
            bank_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, QuizError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, QuizError> {
        let defaults = Self::default();

        let max_questions = parse_var(&lookup, MAX_QUESTIONS_VAR)?.unwrap_or(defaults.max_questions);
        if max_questions == 0 {
            return Err(QuizError::InvalidConfig {
                key: MAX_QUESTIONS_VAR,
                value: max_questions.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let config = Self {
            max_questions,
            score_points: parse_var(&lookup, SCORE_POINTS_VAR)?.unwrap_or(defaults.score_points),
            feedback_delay: parse_var(&lookup, FEEDBACK_DELAY_VAR)?
                .map(Duration::from_millis)
                .unwrap_or(defaults.feedback_delay),
            bank_file: lookup(BANK_FILE_VAR)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            max_questions: self.max_questions,
            score_points: self.score_points,
            feedback_delay: self.feedback_delay,
        }
    }

    /// The bank from `QUIZ_BANK_FILE`, or the built-in one.
    pub fn load_bank(&self) -> Result<QuestionBank, QuizError> {
        match &self.bank_file {
            Some(path) => {
                let file = File::open(path).map_err(|source| QuizError::BankIo {
                    path: path.clone(),
                    source,
                })?;
                QuestionBank::from_reader(file)
            }
            None => Ok(QuestionBank::builtin()),
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, QuizError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|err: T::Err| QuizError::InvalidConfig {
            key,
            value: raw.clone(),
            reason: err.to_string(),
        })
}
