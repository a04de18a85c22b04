//! Offline conversion of a text corpus into a JSON question bank.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::parser::QuestionParser;

pub const DEFAULT_INPUT_PATH: &str = "test.txt";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize questions: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub questions: usize,
    pub tickets: usize,
    pub discarded: usize,
    pub output: PathBuf,
}

/// Read `input`, parse it and write the bank to `output` as pretty JSON.
///
/// Output is written once, after parsing succeeded, so a failed run leaves
/// no partial file behind.
pub fn convert_file(
    parser: &QuestionParser,
    input: &Path,
    output: &Path,
) -> Result<ConversionReport, ConvertError> {
    let text = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = text.len(), "read corpus");

    let bank = parser.parse(&text);
    let json = serde_json::to_string_pretty(&bank.questions)?;

    fs::write(output, json).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let report = ConversionReport {
        questions: bank.questions.len(),
        tickets: parser.ticket_count(bank.questions.len()),
        discarded: bank.discarded,
        output: output.to_path_buf(),
    };
    info!(
        questions = report.questions,
        tickets = report.tickets,
        discarded = report.discarded,
        "converted question bank"
    );

    Ok(report)
}
