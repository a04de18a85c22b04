//! Optional TOML configuration.
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! question_marker = "<question>"
//! variant_marker = "<variant>"
//! ticket_size = 20
//! session_size = 25
//! pass_percentage = 60
//! pool_distractors = 3
//! seed = 42
//! log_file = "quiz.log"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::data::{
    DEFAULT_QUESTION_MARKER, DEFAULT_TICKET_SIZE, DEFAULT_VARIANT_MARKER, QuestionParser,
};
use crate::models::QuizMode;
use crate::quiz::{DEFAULT_PASS_PERCENTAGE, DEFAULT_SESSION_SIZE, POOL_DISTRACTORS, SessionPlan};

pub const DEFAULT_CONFIG_PATH: &str = "ticket-quiz.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub question_marker: String,
    pub variant_marker: String,
    pub ticket_size: usize,
    /// Questions per session; `0` uses the whole bank.
    pub session_size: usize,
    pub pass_percentage: u8,
    pub pool_distractors: usize,
    /// Fixed random seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Where the interactive quiz writes its log.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_marker: DEFAULT_QUESTION_MARKER.to_string(),
            variant_marker: DEFAULT_VARIANT_MARKER.to_string(),
            ticket_size: DEFAULT_TICKET_SIZE,
            session_size: DEFAULT_SESSION_SIZE,
            pass_percentage: DEFAULT_PASS_PERCENTAGE,
            pool_distractors: POOL_DISTRACTORS,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// File [`Config::load`] reads: `path` if given, otherwise
    /// [`DEFAULT_CONFIG_PATH`] when it exists.
    pub fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        }
    }

    /// Load the file picked by [`Config::resolve_path`], or defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::resolve_path(path) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.question_marker.is_empty() || self.variant_marker.is_empty() {
            return Err(ConfigError::Invalid("markers must not be empty".to_string()));
        }
        if self.question_marker == self.variant_marker {
            return Err(ConfigError::Invalid(
                "question and variant markers must differ".to_string(),
            ));
        }
        if self.ticket_size == 0 {
            return Err(ConfigError::Invalid("ticket_size must be at least 1".to_string()));
        }
        if self.pass_percentage > 100 {
            return Err(ConfigError::Invalid(format!(
                "pass_percentage must be at most 100, got {}",
                self.pass_percentage
            )));
        }
        Ok(())
    }

    pub fn parser(&self) -> QuestionParser {
        QuestionParser::new()
            .with_markers(&self.question_marker, &self.variant_marker)
            .with_ticket_size(self.ticket_size)
    }

    pub fn session_plan(&self, mode: QuizMode, ticket: Option<usize>) -> SessionPlan {
        SessionPlan {
            mode,
            ticket,
            size: self.session_size,
            pass_percentage: self.pass_percentage,
            pool_distractors: self.pool_distractors,
        }
    }
}
