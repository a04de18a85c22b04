use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;
use ticket_quiz::data::{QuestionParser, convert_file};
use ticket_quiz::quiz::generate_quiz_options;
use ticket_quiz::{AppState, Config, Quiz, QuizMode, load_questions_from_json};

const CORPUS: &str = "\
Civics exam, spring session
<question>What is 2+2?<variant>4.<variant>3<variant>5
<question>Capital of France?<variant>Paris.
<question>Broken question without variants
<question>Largest planet?<variant>Jupiter
<question>Closest star?<variant>The Sun.
<question>Fastest land animal?<variant>Cheetah
";

#[test]
fn converts_corpus_and_feeds_the_option_generator() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("test.txt");
    let output = dir.path().join("questions.json");
    fs::write(&input, CORPUS).unwrap();

    let report = convert_file(&QuestionParser::default(), &input, &output).unwrap();
    assert_eq!(report.questions, 5);
    assert_eq!(report.tickets, 1);
    assert_eq!(report.discarded, 1);

    let questions = load_questions_from_json(&output).unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0].answer, "4");
    assert_eq!(questions[0].distractors, vec!["3", "5"]);
    assert_eq!(questions[2].id, "q_3");
    assert_eq!(questions[2].question, "Largest planet?");
    assert_eq!(questions[3].answer, "The Sun");

    let mut rng = StdRng::seed_from_u64(17);
    let with_authored = generate_quiz_options(&mut rng, &questions[0], &questions);
    assert_eq!(with_authored.len(), 3);

    let from_pool = generate_quiz_options(&mut rng, &questions[1], &questions);
    assert_eq!(from_pool.len(), 4);
    assert!(from_pool.iter().any(|choice| choice == "Paris"));
}

#[test]
fn json_uses_documented_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("test.txt");
    let output = dir.path().join("questions.json");
    fs::write(&input, "<question>Q<variant>A.").unwrap();

    convert_file(&QuestionParser::default(), &input, &output).unwrap();

    let json = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let record = &value[0];
    assert_eq!(record["id"], "q_1");
    assert_eq!(record["ticketNumber"], 1);
    assert_eq!(record["question"], "Q");
    assert_eq!(record["answer"], "A");
    assert_eq!(record["distractors"], serde_json::json!([]));
}

#[test]
fn bank_without_markers_still_plays() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("test.txt");
    let output = dir.path().join("questions.json");
    fs::write(&input, "no markers here").unwrap();

    let report = convert_file(&QuestionParser::default(), &input, &output).unwrap();
    assert_eq!(report.questions, 0);

    let mut quiz = Quiz::from_json(&output, &Config::default(), QuizMode::Choice, None).unwrap();
    let app = quiz.app_mut();
    app.start_quiz();

    assert_eq!(app.state, AppState::Results);
    let session = app.session().unwrap();
    assert_eq!(session.total(), 0);
    assert!(!session.is_passed());
}
