use serde::{Deserialize, Serialize};

/// A single parsed question from the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub ticket_number: usize,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub distractors: Vec<String>,
}

impl Question {
    pub fn has_distractors(&self) -> bool {
        !self.distractors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_ticket_number() {
        let question = Question {
            id: "q_1".to_string(),
            ticket_number: 1,
            question: "What is 2+2?".to_string(),
            answer: "4".to_string(),
            distractors: vec!["3".to_string()],
        };

        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("\"ticketNumber\":1"));
        assert!(json.contains("\"question\":\"What is 2+2?\""));
    }

    #[test]
    fn missing_distractors_default_to_empty() {
        let json = r#"{"id":"q_7","ticketNumber":1,"question":"Q","answer":"A"}"#;
        let question: Question = serde_json::from_str(json).unwrap();

        assert!(question.distractors.is_empty());
        assert!(!question.has_distractors());
    }
}
