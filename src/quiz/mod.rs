pub mod degree;
pub mod major;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("No question at position {position}, the quiz has {len} questions")]
    OutOfRange { position: usize, len: usize },
    #[error("Invalid quiz state: {0}")]
    InvalidState(String),
}

/// Sequential yes/no questionnaire.
///
/// The recorded answers are the only state that matters: `current_question`
/// always equals `answers.len()`, and undo rebuilds the whole quiz from the
/// remaining answers instead of rolling the cursor back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiz {
    pub questions: Vec<Question>,
    current_question: usize,
    answers: Vec<bool>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_question: 0,
            answers: Vec::new(),
        }
    }

    /// Fresh quiz over `questions` with `answers` applied in order.
    pub fn replay(questions: Vec<Question>, answers: &[bool]) -> Result<Self, QuizError> {
        let mut quiz = Self::new(questions);
        for answer in answers {
            quiz.answer(*answer)?;
        }
        Ok(quiz)
    }

    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.questions
            .get(self.current_question)
            .ok_or(QuizError::OutOfRange {
                position: self.current_question,
                len: self.questions.len(),
            })
    }

    pub fn answer(&mut self, yes: bool) -> Result<(), QuizError> {
        if self.is_finished() {
            return Err(QuizError::InvalidState(format!(
                "all {} questions are already answered",
                self.questions.len()
            )));
        }
        self.answers.push(yes);
        self.current_question += 1;
        Ok(())
    }

    /// Drops the last answer and replays the rest from a fresh quiz.
    /// Returns `Ok(false)` when there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, QuizError> {
        let mut remembered = self.answers.clone();
        if remembered.pop().is_none() {
            return Ok(false);
        }
        *self = Self::replay(self.questions.clone(), &remembered)?;
        Ok(true)
    }

    pub fn is_finished(&self) -> bool {
        self.current_question == self.questions.len()
    }

    pub fn answers(&self) -> &[bool] {
        &self.answers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question {
    pub text: String,
}
impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A token typed at a yes/no/back prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Yes,
    No,
    Back,
}

impl Reply {
    /// Case-insensitive `y`, `yes`, `n`, `no` or `back`; anything else is rejected.
    pub fn parse(input: &str) -> Option<Reply> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Reply::Yes),
            "n" | "no" => Some(Reply::No),
            "back" => Some(Reply::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> Quiz {
        Quiz::new(vec![
            Question::new("first?"),
            Question::new("second?"),
            Question::new("third?"),
        ])
    }

    #[test]
    fn answering_advances_the_cursor() {
        let mut quiz = three_questions();
        assert_eq!(quiz.current_question().unwrap().text, "first?");
        quiz.answer(true).unwrap();
        assert_eq!(quiz.current_question().unwrap().text, "second?");
        assert_eq!(quiz.answers(), &[true]);
        assert!(!quiz.is_finished());
    }

    #[test]
    fn finished_quiz_rejects_reads_and_answers() {
        let mut quiz = three_questions();
        for _ in 0..3 {
            quiz.answer(false).unwrap();
        }
        assert!(quiz.is_finished());
        assert_eq!(
            quiz.current_question(),
            Err(QuizError::OutOfRange { position: 3, len: 3 })
        );
        assert!(matches!(quiz.answer(true), Err(QuizError::InvalidState(_))));
        assert_eq!(quiz.answers().len(), 3);
    }

    #[test]
    fn undo_on_empty_quiz_is_a_no_op() {
        let mut quiz = three_questions();
        assert_eq!(quiz.undo(), Ok(false));
        assert_eq!(quiz, three_questions());
    }

    #[test]
    fn undo_then_same_answer_restores_state() {
        let mut quiz = three_questions();
        quiz.answer(true).unwrap();
        quiz.answer(false).unwrap();
        let before = quiz.clone();

        assert_eq!(quiz.undo(), Ok(true));
        assert_eq!(quiz.answers(), &[true]);
        assert_eq!(quiz.current_question().unwrap().text, "second?");

        quiz.answer(false).unwrap();
        assert_eq!(quiz, before);
    }

    #[test]
    fn undo_from_finished_reopens_last_question() {
        let mut quiz = three_questions();
        for _ in 0..3 {
            quiz.answer(true).unwrap();
        }
        quiz.undo().unwrap();
        assert!(!quiz.is_finished());
        assert_eq!(quiz.current_question().unwrap().text, "third?");
    }

    #[test]
    fn finished_only_after_net_forward_steps_reach_the_end() {
        let mut quiz = three_questions();
        quiz.answer(true).unwrap();
        quiz.undo().unwrap();
        quiz.undo().unwrap();
        quiz.answer(false).unwrap();
        quiz.answer(true).unwrap();
        assert!(!quiz.is_finished());
        quiz.undo().unwrap();
        quiz.answer(true).unwrap();
        quiz.answer(true).unwrap();
        assert!(quiz.is_finished());
        assert_eq!(quiz.answers(), &[false, true, true]);
    }

    #[test]
    fn replay_rebuilds_cursor() {
        let quiz = Quiz::replay(three_questions().questions, &[true, true]).unwrap();
        assert_eq!(quiz.current_question().unwrap().text, "third?");
        assert!(Quiz::replay(three_questions().questions, &[true; 4]).is_err());
    }

    #[test]
    fn reply_tokens_are_case_insensitive() {
        assert_eq!(Reply::parse("y"), Some(Reply::Yes));
        assert_eq!(Reply::parse("YES"), Some(Reply::Yes));
        assert_eq!(Reply::parse(" No "), Some(Reply::No));
        assert_eq!(Reply::parse("n"), Some(Reply::No));
        assert_eq!(Reply::parse("Back"), Some(Reply::Back));
        assert_eq!(Reply::parse("maybe"), None);
        assert_eq!(Reply::parse(""), None);
        assert_eq!(Reply::parse("ye"), None);
    }
}
