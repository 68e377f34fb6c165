//! Static content served once a degree or major has been picked.
//!
//! The data lives in `data/catalog.json`, is compiled into the binary and
//! parsed exactly once into a process-wide registry. Every lookup answers
//! unknown keys with a fallback text instead of failing.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

use crate::quiz::degree::Category;
use crate::quiz::major::{Major, MajorSelection, QUESTIONS_PER_MAJOR};

const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

pub const DEGREES_FALLBACK: &str = "No degrees listed for this field.";
pub const DEGREE_INFO_FALLBACK: &str = "Information not available for the specified degree.";
pub const DESCRIPTION_FALLBACK: &str = "Information not available for this major.";
pub const OPPORTUNITY_FALLBACK: &str = "Opportunity not available for this major.";
pub const ROADMAP_FALLBACK: &str = "Roadmap not available for this major.";
pub const SUBJECTS_FALLBACK: &str = "Subjects not available for this major and year.";

/// Years offered when checking scholarships.
pub const SCHOLARSHIP_YEARS: u8 = 4;

static CATALOG: OnceCell<Catalog> = OnceCell::new();

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unable to parse the catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} has no majors")]
    EmptyField(Category),
    #[error("{0} is missing from the catalog")]
    MissingField(Category),
    #[error("Major '{0}' is listed more than once")]
    DuplicateMajor(String),
}

/// Parses the embedded catalog on first use and hands out the shared copy.
pub fn init() -> Result<&'static Catalog, CatalogError> {
    CATALOG.get_or_try_init(Catalog::load)
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    fields: Vec<Field>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub category: Category,
    pub overview: String,
    pub core_topics: Vec<String>,
    pub careers: Vec<String>,
    pub courses: Vec<String>,
    pub degrees: Vec<String>,
    pub majors: Vec<MajorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MajorEntry {
    pub name: String,
    #[serde(default)]
    pub questions: Option<[String; QUESTIONS_PER_MAJOR]>,
    pub description: String,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapStep>,
    #[serde(default)]
    pub subjects: BTreeMap<u8, Vec<String>>,
    /// `None` when the major is missing from the scholarship database.
    #[serde(default)]
    pub scholarships: Option<BTreeMap<u8, Vec<Scholarship>>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RoadmapStep {
    pub title: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Scholarship {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScholarshipListing<'a> {
    Available(&'a [Scholarship]),
    NoneForYear,
    UnknownMajor,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    fields: Vec<Field>,
    // major name -> (field index, major index)
    majors: HashMap<String, (usize, usize)>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut majors = HashMap::new();
        for (field_index, field) in file.fields.iter().enumerate() {
            if field.majors.is_empty() {
                return Err(CatalogError::EmptyField(field.category));
            }
            for (major_index, major) in field.majors.iter().enumerate() {
                if majors
                    .insert(major.name.clone(), (field_index, major_index))
                    .is_some()
                {
                    return Err(CatalogError::DuplicateMajor(major.name.clone()));
                }
            }
        }
        if let Some(missing) = Category::ALL
            .into_iter()
            .find(|category| !file.fields.iter().any(|f| f.category == *category))
        {
            return Err(CatalogError::MissingField(missing));
        }

        log::info!(
            "Catalog loaded: {} fields, {} majors",
            file.fields.len(),
            majors.len()
        );
        Ok(Self {
            fields: file.fields,
            majors,
        })
    }

    pub fn field(&self, category: Category) -> Option<&Field> {
        self.fields.iter().find(|f| f.category == category)
    }

    fn major(&self, name: &str) -> Option<&MajorEntry> {
        let (field_index, major_index) = *self.majors.get(name)?;
        self.fields.get(field_index)?.majors.get(major_index)
    }

    pub fn degrees(&self, category: Category) -> Vec<&str> {
        match self.field(category) {
            Some(field) if !field.degrees.is_empty() => {
                field.degrees.iter().map(String::as_str).collect()
            }
            _ => vec![DEGREES_FALLBACK],
        }
    }

    pub fn major_names(&self, category: Category) -> Vec<&str> {
        self.field(category)
            .map(|field| field.majors.iter().map(|m| m.name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn major_questions(&self, name: &str) -> [String; QUESTIONS_PER_MAJOR] {
        self.major(name)
            .and_then(|major| major.questions.clone())
            .unwrap_or_else(|| Major::generic_questions(name))
    }

    /// Fresh major questionnaire over every major of `category`.
    pub fn major_selection(&self, category: Category) -> MajorSelection {
        MajorSelection::new(
            self.major_names(category)
                .into_iter()
                .map(|name| Major::new(name, self.major_questions(name)))
                .collect(),
        )
    }

    pub fn description(&self, major: &str) -> &str {
        self.major(major)
            .map(|m| m.description.as_str())
            .unwrap_or(DESCRIPTION_FALLBACK)
    }

    pub fn opportunities(&self, major: &str) -> Vec<&str> {
        match self.major(major) {
            Some(m) if !m.opportunities.is_empty() => {
                m.opportunities.iter().map(String::as_str).collect()
            }
            _ => vec![OPPORTUNITY_FALLBACK],
        }
    }

    /// Roadmap steps, or `None` if nobody wrote one for this major.
    pub fn roadmap(&self, major: &str) -> Option<&[RoadmapStep]> {
        self.major(major)
            .map(|m| m.roadmap.as_slice())
            .filter(|steps| !steps.is_empty())
    }

    /// Roadmap rendered as numbered steps, or the fallback line.
    pub fn roadmap_text(&self, major: &str) -> String {
        let steps = match self.roadmap(major) {
            Some(steps) => steps,
            None => return ROADMAP_FALLBACK.to_string(),
        };
        let mut text = String::new();
        for (i, step) in steps.iter().enumerate() {
            text.push_str(&format!("{}. {}:\n", i + 1, step.title));
            for detail in &step.details {
                text.push_str(detail);
                text.push('\n');
            }
        }
        text
    }

    /// Highest study year any major lists subjects for.
    pub fn subject_years(&self) -> u8 {
        self.fields
            .iter()
            .flat_map(|f| f.majors.iter())
            .filter_map(|m| m.subjects.keys().next_back().copied())
            .max()
            .unwrap_or(1)
    }

    pub fn subjects(&self, major: &str, year: u8) -> Vec<&str> {
        self.major(major)
            .and_then(|m| m.subjects.get(&year))
            .filter(|subjects| !subjects.is_empty())
            .map(|subjects| subjects.iter().map(String::as_str).collect())
            .unwrap_or_else(|| vec![SUBJECTS_FALLBACK])
    }

    pub fn scholarships(&self, major: &str, year: u8) -> ScholarshipListing<'_> {
        let by_year = match self.major(major).and_then(|m| m.scholarships.as_ref()) {
            Some(by_year) => by_year,
            None => return ScholarshipListing::UnknownMajor,
        };
        match by_year.get(&year) {
            Some(list) if !list.is_empty() => ScholarshipListing::Available(list),
            _ => ScholarshipListing::NoneForYear,
        }
    }
}
