mod convert;
mod loader;
mod parser;

pub use convert::{ConversionReport, ConvertError, DEFAULT_INPUT_PATH, convert_file};
pub use loader::{DEFAULT_QUESTIONS_PATH, LoadError, load_questions_from_json};
pub use parser::{
    DEFAULT_QUESTION_MARKER, DEFAULT_TICKET_SIZE, DEFAULT_VARIANT_MARKER, ParsedBank,
    QuestionParser, parse_questions, strip_trailing_period, ticket_number,
};
