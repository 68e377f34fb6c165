use crate::quiz::QuizError;

pub const QUESTIONS_PER_MAJOR: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Major {
    pub name: String,
    pub questions: [String; QUESTIONS_PER_MAJOR],
}

impl Major {
    pub fn new(name: impl Into<String>, questions: [String; QUESTIONS_PER_MAJOR]) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    /// Generic pair asked about a major nobody wrote questions for.
    pub fn generic_questions(name: &str) -> [String; QUESTIONS_PER_MAJOR] {
        [
            format!("Are you interested in {}?", name),
            "Do you find this field exciting?".to_string(),
        ]
    }
}

/// What the major scan concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorVerdict {
    /// Every major got the same non-zero score, so the student has to pick.
    AllYes,
    /// Every question was answered no.
    AllNo,
    /// Index of the best scoring major, first one wins ties.
    Recommended(usize),
}

/// Walks every major's question pair in declaration order, one yes/no at a
/// time, keeping a yes-count per major. `back` steps over major boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorSelection {
    majors: Vec<Major>,
    scores: Vec<u32>,
    answers: Vec<bool>,
    major_index: usize,
    question_index: usize,
}

impl MajorSelection {
    pub fn new(majors: Vec<Major>) -> Self {
        let scores = vec![0; majors.len()];
        Self {
            majors,
            scores,
            answers: Vec::new(),
            major_index: 0,
            question_index: 0,
        }
    }

    pub fn majors(&self) -> &[Major] {
        &self.majors
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn answers(&self) -> &[bool] {
        &self.answers
    }

    /// (major index, question index within that major).
    pub fn position(&self) -> (usize, usize) {
        (self.major_index, self.question_index)
    }

    pub fn is_finished(&self) -> bool {
        self.major_index >= self.majors.len()
    }

    pub fn current_major(&self) -> Result<&Major, QuizError> {
        self.majors
            .get(self.major_index)
            .ok_or(QuizError::OutOfRange {
                position: self.major_index,
                len: self.majors.len(),
            })
    }

    pub fn current_question(&self) -> Result<&str, QuizError> {
        let major = self.current_major()?;
        Ok(&major.questions[self.question_index])
    }

    pub fn answer(&mut self, yes: bool) -> Result<(), QuizError> {
        if self.is_finished() {
            return Err(QuizError::InvalidState(
                "every major has already been asked about".to_string(),
            ));
        }
        self.answers.push(yes);
        if yes {
            self.scores[self.major_index] += 1;
        }
        self.question_index += 1;
        if self.question_index == QUESTIONS_PER_MAJOR {
            self.question_index = 0;
            self.major_index += 1;
        }
        Ok(())
    }

    /// Steps back one question, crossing into the previous major's last
    /// question when needed. Returns `false` at the very first question.
    pub fn undo(&mut self) -> bool {
        if self.question_index > 0 {
            self.question_index -= 1;
        } else if self.major_index > 0 {
            self.major_index -= 1;
            self.question_index = QUESTIONS_PER_MAJOR - 1;
        } else {
            return false;
        }

        if let Some(true) = self.answers.pop() {
            self.scores[self.major_index] -= 1;
        }
        true
    }

    pub fn verdict(&self) -> MajorVerdict {
        verdict(&self.scores)
    }
}

pub fn verdict(scores: &[u32]) -> MajorVerdict {
    if scores.iter().all(|score| *score == 0) {
        return MajorVerdict::AllNo;
    }
    // Scores are non-zero here, so equal means equally liked. A lone major
    // has nothing to tie with.
    if scores.len() > 1 && scores.windows(2).all(|pair| pair[0] == pair[1]) {
        return MajorVerdict::AllYes;
    }

    let best = scores
        .iter()
        .enumerate()
        .fold(0, |best, (i, score)| if *score > scores[best] { i } else { best });
    MajorVerdict::Recommended(best)
}
