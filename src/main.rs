use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ticket_quiz::data::{DEFAULT_INPUT_PATH, DEFAULT_QUESTIONS_PATH, convert_file};
use ticket_quiz::{Config, Quiz, QuizMode, logging};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML config file (defaults to ticket-quiz.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a marked-up text file into a JSON question bank
    Convert {
        /// Text file with <question>/<variant> markers
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Where to write the JSON bank
        #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
        output: PathBuf,
    },
    /// Run the quiz in the terminal
    Play {
        /// JSON file to load the questions from
        #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
        questions: PathBuf,

        /// Only ask questions from this ticket
        #[arg(short, long)]
        ticket: Option<usize>,

        /// Initial quiz mode
        #[arg(short, long, value_enum, default_value_t = QuizMode::Choice)]
        mode: QuizMode,

        /// Questions per session, 0 for the whole bank
        #[arg(short = 'n', long)]
        size: Option<usize>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };

    let config_path = Config::resolve_path(args.config.as_deref());
    let mut config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Command::Convert { input, output } => {
            logging::init_stderr(level);
            log_config_source(config_path.as_deref());
            match convert_file(&config.parser(), &input, &output) {
                Ok(report) => {
                    println!("Parsed {} questions", report.questions);
                    println!("Organized into {} tickets", report.tickets);
                    println!("Saved to {}", report.output.display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Play {
            questions,
            ticket,
            mode,
            size,
        } => {
            if let Some(path) = &config.log_file {
                if let Err(e) = logging::init_file(path, level) {
                    eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
                }
            }
            log_config_source(config_path.as_deref());
            if let Some(size) = size {
                config.session_size = size;
            }

            let quiz = match Quiz::from_json(questions, &config, mode, ticket) {
                Ok(quiz) => quiz,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            if let Err(e) = quiz.run() {
                eprintln!("Error running quiz: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

fn log_config_source(path: Option<&Path>) {
    match path {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }
}
