use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to open question bank {path}: {source}")]
    BankIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse question bank: {0}")]
    BankFormat(#[from] serde_json::Error),

    #[error("question #{position} has answer {answer}, expected a number from 1 to 4")]
    InvalidAnswer { position: usize, answer: u8 },
}
