//! Skill self-assessment.
//!
//! Every skill gets the same three templated questions. A student passes with
//! a rounded score of at least 67%, i.e. two correct answers out of three.

use serde::{Deserialize, Serialize};

use crate::model::Mentor;

/// Minimum rounded percentage needed to pass.
pub const PASS_PERCENT: u32 = 67;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<String>,
    /// Index into `choices` of the correct answer.
    pub correct: usize,
}

/// The quiz for one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub skill: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Build the quiz for `skill`.
    pub fn for_skill(skill: &str) -> Self {
        let q = |prompt: String, choices: [&str; 3], correct: usize| Question {
            prompt,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct,
        };
        Self {
            skill: skill.to_string(),
            questions: vec![
                q(
                    format!("What is a core concept of {skill}?"),
                    ["Relevance", "Ambiguity", "Entropy"],
                    0,
                ),
                q(
                    format!("Beginner task in {skill}?"),
                    [
                        "Optimize pipeline",
                        "Hello world / simple edit",
                        "Distributed systems",
                    ],
                    1,
                ),
                q(
                    format!("Tool commonly used with {skill}?"),
                    ["Random tool", "Common tool", "Unrelated"],
                    1,
                ),
            ],
        }
    }

    /// Grade a set of picked answer indices. `None` is an unanswered question.
    ///
    /// Missing trailing answers count as unanswered; extra answers are ignored.
    pub fn grade(&self, answers: &[Option<usize>]) -> Grade {
        let correct = self
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| answers.get(*i).copied().flatten() == Some(q.correct))
            .count();
        Grade::new(correct, self.questions.len())
    }
}

/// The score of one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub correct: usize,
    pub total: usize,
    /// Rounded percentage of correct answers.
    pub percent: u32,
}

impl Grade {
    pub fn new(correct: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((200 * correct + total) / (2 * total)) as u32
        };
        Self {
            correct,
            total,
            percent,
        }
    }

    pub fn passed(&self) -> bool {
        self.percent >= PASS_PERCENT
    }
}

/// Result of submitting an assessment through the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub skill: String,
    pub student_id: String,
    pub grade: Grade,
    /// Whether the verified list changed. A repeated pass leaves it as is.
    pub newly_verified: bool,
    /// Mentors who can help with the skill. Only filled in on failure.
    pub suggested_mentors: Vec<Mentor>,
}

impl AssessmentOutcome {
    pub fn passed(&self) -> bool {
        self.grade.passed()
    }
}

/// Parse a comma-separated answer list such as `0,1,-` into picked indices.
///
/// Blank entries, `-`, and `_` mean "unanswered".
pub fn parse_answers(input: &str) -> anyhow::Result<Vec<Option<usize>>> {
    input
        .split(',')
        .map(str::trim)
        .map(|a| match a {
            "" | "-" | "_" => Ok(None),
            n => n
                .parse::<usize>()
                .map(Some)
                .map_err(|_| anyhow::anyhow!("invalid answer: '{n}'")),
        })
        .collect()
}
