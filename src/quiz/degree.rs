use std::fmt;

use crate::quiz::{Question, Quiz};

/// Degree field scored by the opening questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Computer Technology")]
    ComputerTechnology,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::ComputerScience, Category::ComputerTechnology];

    pub fn name(&self) -> &'static str {
        match self {
            Category::ComputerScience => "Computer Science",
            Category::ComputerTechnology => "Computer Technology",
        }
    }

    /// Category behind a 1-based menu number.
    pub fn from_choice(choice: usize) -> Option<Category> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Points a yes answer adds to (Computer Science, Computer Technology).
type Weights = (u32, u32);

const DEGREE_QUESTIONS: [(&str, Weights); 10] = [
    ("Are you interested in learning multiple programming languages like Python, Java, or C++?", (2, 0)),
    ("Do you want to design and implement algorithms to solve specific problems?", (2, 0)),
    ("Are you inclined towards understanding the theory behind how computers process information?", (0, 2)),
    ("Would you enjoy working on software that improves the performance of computer systems?", (2, 0)),
    ("Are you more interested in developing apps or software rather than maintaining network systems?", (1, 0)),
    ("Do you want to explore the mathematical foundations of computing, such as discrete mathematics and logic?", (1, 1)),
    ("Are you interested in cybersecurity from a software development perspective rather than a network management one?", (0, 2)),
    ("Do you want to research and innovate in fields like quantum computing or blockchain technology?", (0, 2)),
    ("Are you less interested in tasks like configuring servers or managing databases?", (0, 2)),
    ("Would you prefer to write code for developing new technologies rather than setting up existing ones?", (2, 0)),
];

/// The ten-question degree questionnaire, unanswered.
pub fn degree_quiz() -> Quiz {
    Quiz::new(
        DEGREE_QUESTIONS
            .iter()
            .map(|(text, _)| Question::new(*text))
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeRecommendation {
    pub cs_score: u32,
    pub ct_score: u32,
}

impl DegreeRecommendation {
    /// Sums the weights of every question answered yes. Answers beyond the
    /// weight table are ignored; missing answers count as no.
    pub fn new(answers: &[bool]) -> Self {
        let (cs_score, ct_score) = answers
            .iter()
            .zip(DEGREE_QUESTIONS.iter())
            .filter(|(yes, _)| **yes)
            .fold((0u32, 0u32), |(cs, ct), (_, (_, (w_cs, w_ct)))| {
                (cs + *w_cs, ct + *w_ct)
            });

        log::debug!("Degree scores: cs={} ct={}", cs_score, ct_score);
        Self { cs_score, ct_score }
    }

    pub fn total(&self) -> u32 {
        self.cs_score + self.ct_score
    }

    /// Computer Science only wins on a strictly greater score; equal scores
    /// go to Computer Technology.
    pub fn recommended(&self) -> Category {
        if self.cs_score > self.ct_score {
            Category::ComputerScience
        } else {
            Category::ComputerTechnology
        }
    }

    /// Each category's share of the total in percent, or `None` when every
    /// answer was no and there is nothing to share.
    pub fn percentages(&self) -> Option<(f64, f64)> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let total = f64::from(total);
        Some((
            f64::from(self.cs_score) / total * 100.0,
            f64::from(self.ct_score) / total * 100.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEGREE_QUESTION_COUNT: usize = DEGREE_QUESTIONS.len();

    fn answers_with_yes_at(positions: &[usize]) -> Vec<bool> {
        (1..=DEGREE_QUESTION_COUNT)
            .map(|n| positions.contains(&n))
            .collect()
    }

    #[test]
    fn computer_science_leaning_answers() {
        let recommendation = DegreeRecommendation::new(&answers_with_yes_at(&[1, 2, 4, 10]));
        assert_eq!(recommendation.cs_score, 8);
        assert_eq!(recommendation.ct_score, 0);
        assert_eq!(recommendation.recommended(), Category::ComputerScience);
        assert_eq!(recommendation.percentages(), Some((100.0, 0.0)));
    }

    #[test]
    fn computer_technology_leaning_answers() {
        let recommendation = DegreeRecommendation::new(&answers_with_yes_at(&[3, 7, 8, 9]));
        assert_eq!((recommendation.cs_score, recommendation.ct_score), (0, 8));
        assert_eq!(recommendation.recommended(), Category::ComputerTechnology);
    }

    #[test]
    fn shared_question_counts_for_both() {
        let recommendation = DegreeRecommendation::new(&answers_with_yes_at(&[6]));
        assert_eq!((recommendation.cs_score, recommendation.ct_score), (1, 1));
        assert_eq!(recommendation.percentages(), Some((50.0, 50.0)));
    }

    #[test]
    fn all_no_has_no_percentages() {
        let recommendation = DegreeRecommendation::new(&[false; DEGREE_QUESTION_COUNT]);
        assert_eq!(recommendation.total(), 0);
        assert_eq!(recommendation.percentages(), None);
    }

    // Equal scores fall to Computer Technology. Kept as observed behaviour;
    // nothing says whether the bias is intended.
    #[test]
    fn tie_goes_to_computer_technology() {
        for positions in [&[1, 3][..], &[4, 7], &[1, 2, 8, 9]] {
            let tied = DegreeRecommendation::new(&answers_with_yes_at(positions));
            assert_eq!(tied.cs_score, tied.ct_score, "yes at {positions:?}");
            assert_eq!(tied.recommended(), Category::ComputerTechnology);
        }
    }

    #[test]
    fn all_yes_leans_computer_science() {
        let all_yes = DegreeRecommendation::new(&[true; DEGREE_QUESTION_COUNT]);
        assert_eq!((all_yes.cs_score, all_yes.ct_score), (10, 9));
        assert_eq!(all_yes.recommended(), Category::ComputerScience);
    }

    #[test]
    fn percentages_sum_to_hundred_for_every_non_empty_answer_set() {
        for mask in 0u32..(1 << DEGREE_QUESTION_COUNT) {
            let answers: Vec<bool> = (0..DEGREE_QUESTION_COUNT)
                .map(|i| mask & (1 << i) != 0)
                .collect();
            let recommendation = DegreeRecommendation::new(&answers);
            match recommendation.percentages() {
                Some((cs, ct)) => assert!((cs + ct - 100.0).abs() < 1e-9, "mask {mask:b}"),
                None => assert_eq!(mask, 0),
            }
        }
    }

    #[test]
    fn quiz_feeds_the_scoring() {
        let mut quiz = degree_quiz();
        for yes in answers_with_yes_at(&[1, 2, 4, 10]) {
            quiz.answer(yes).unwrap();
        }
        assert!(quiz.is_finished());
        let recommendation = DegreeRecommendation::new(quiz.answers());
        assert_eq!(recommendation.cs_score, 8);
    }

    #[test]
    fn category_menu_numbers() {
        assert_eq!(Category::from_choice(1), Some(Category::ComputerScience));
        assert_eq!(Category::from_choice(2), Some(Category::ComputerTechnology));
        assert_eq!(Category::from_choice(0), None);
        assert_eq!(Category::from_choice(3), None);
    }
}
