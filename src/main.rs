mod catalog;
mod console;
mod quiz;

use std::io::{self, BufRead, Write};

use catalog::{Catalog, ScholarshipListing, SCHOLARSHIP_YEARS};
use console::{Console, HandlerResult, SessionError};
use dotenv::dotenv;
use log::{debug, info};
use quiz::{
    degree::{self, Category, DegreeRecommendation},
    major::{MajorSelection, MajorVerdict},
    Quiz, Reply,
};

/// Where the conversation is. Everything the session remembers lives here,
/// so going back to the start is just a transition to `State::Start`.
#[derive(Clone, Debug, Default)]
pub enum State {
    #[default]
    Start,
    DegreeQuiz {
        quiz: Quiz,
    },
    ReceiveDegreeChoice {
        recommended: Category,
    },
    ScholarshipCheck {
        category: Category,
        checked: bool,
    },
    MajorQuiz {
        category: Category,
        selection: MajorSelection,
    },
    MajorMenu {
        category: Category,
        major: String,
    },
    Finished,
}

#[derive(Debug, Default)]
pub struct Dialogue {
    state: State,
}

impl Dialogue {
    pub fn update(&mut self, state: State) {
        debug!("Dialogue state: {:?}", state);
        self.state = state;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before the logger so RUST_LOG can come from it
    let env_file = dotenv();
    pretty_env_logger::init();
    if let Err(err) = env_file {
        debug!("No .env file loaded: {}", err);
    }
    info!("Starting degree advisor...");

    let catalog = catalog::init()?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    match run(&mut console, catalog) {
        Err(SessionError::InputClosed) => {
            info!("Input closed, leaving");
            Ok(())
        }
        result => Ok(result?),
    }
}

/// Drives the dialogue until the student exits.
fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, catalog: &Catalog) -> HandlerResult {
    let mut dialogue = Dialogue::default();
    loop {
        match dialogue.state.clone() {
            State::Start => start(console, &mut dialogue, catalog)?,
            State::DegreeQuiz { quiz } => degree_quiz(console, &mut dialogue, quiz)?,
            State::ReceiveDegreeChoice { recommended } => {
                receive_degree_choice(console, &mut dialogue, catalog, recommended)?
            }
            State::ScholarshipCheck { category, checked } => {
                scholarship_check(console, &mut dialogue, catalog, category, checked)?
            }
            State::MajorQuiz {
                category,
                selection,
            } => major_quiz(console, &mut dialogue, category, selection)?,
            State::MajorMenu { category, major } => {
                major_menu(console, &mut dialogue, catalog, category, major)?
            }
            State::Finished => return Ok(()),
        }
    }
}

const GOODBYE_TEXT: &str = "Thank you for using our program. Goodbye!";
const YEAR_NAMES: [&str; 5] = ["First", "Second", "Third", "Fourth", "Fifth"];
const BANNER_WIDTH: usize = 110;

fn start<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dialogue: &mut Dialogue,
    catalog: &Catalog,
) -> HandlerResult {
    console.send_message("Choose an option:")?;
    console.send_message("1. View available bachelor's degrees")?;
    console.send_message("2. Take the degree recommendation questionnaire")?;
    console.send_message("3. Learn about Computer Science and Computer Technology degrees")?;
    console.send_message("4. Exit")?;
    console.prompt("Enter your choice (1-4): ")?;

    match console.receive_choice(1, 4)? {
        1 => {
            for category in Category::ALL {
                console.send_message(format!("{} degrees:", category))?;
                for degree in catalog.degrees(category) {
                    console.send_message(format!("- {}", degree))?;
                }
                console.send_message("")?;
            }
        }
        2 => dialogue.update(State::DegreeQuiz {
            quiz: degree::degree_quiz(),
        }),
        3 => {
            let category = receive_category(console, "Choose a degree to learn more about:")?;
            console.send_message(format!("\nInformation about {} degree:", category))?;
            send_degree_info(console, catalog, category)?;
        }
        _ => {
            console.send_message(GOODBYE_TEXT)?;
            dialogue.update(State::Finished);
        }
    }
    Ok(())
}

fn receive_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    header: &str,
) -> Result<Category, SessionError> {
    console.send_message(format!("\n{}", header))?;
    for (i, category) in Category::ALL.iter().enumerate() {
        console.send_message(format!("{}. {}", i + 1, category))?;
    }
    console.prompt(format!("Enter your choice (1-{}): ", Category::ALL.len()))?;
    let choice = console.receive_choice(1, Category::ALL.len())?;
    Ok(Category::from_choice(choice).unwrap_or(Category::ComputerScience))
}

fn send_degree_info<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    category: Category,
) -> HandlerResult {
    let field = match catalog.field(category) {
        Some(field) => field,
        None => return console.send_message(format!("\n{}", catalog::DEGREE_INFO_FALLBACK)),
    };

    console.send_message(format!("\n--- {} Degree ---", category))?;
    console.send_message("Overview:")?;
    console.send_message(&field.overview)?;
    let sections = [
        ("Core Topics", &field.core_topics),
        ("Career Opportunities", &field.careers),
        ("Typical Courses", &field.courses),
    ];
    for (title, lines) in sections {
        console.send_message(format!("\n{}:", title))?;
        for line in lines {
            console.send_message(format!("- {}", line))?;
        }
    }
    Ok(())
}

fn degree_quiz<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dialogue: &mut Dialogue,
    mut quiz: Quiz,
) -> HandlerResult {
    if quiz.is_finished() {
        return degree_results(console, dialogue, &quiz);
    }

    let question = quiz.current_question()?;
    console.prompt(format!("{} (y/n/back): ", question.text))?;

    match console.receive_reply()? {
        Reply::Back => {
            if !quiz.undo()? {
                debug!("Nothing to undo on the first question");
            }
        }
        Reply::Yes => quiz.answer(true)?,
        Reply::No => quiz.answer(false)?,
    }
    debug!("Degree answers so far: {:?}", quiz.answers());

    dialogue.update(State::DegreeQuiz { quiz });
    Ok(())
}

fn degree_results<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dialogue: &mut Dialogue,
    quiz: &Quiz,
) -> HandlerResult {
    let recommendation = DegreeRecommendation::new(quiz.answers());
    info!(
        "Degree scores: cs={} ct={}, recommending {}",
        recommendation.cs_score,
        recommendation.ct_score,
        recommendation.recommended()
    );

    console.send_message("\nBased on your answers:")?;
    let recommended = match recommendation.percentages() {
        Some((cs, ct)) => {
            console.send_message(format!("{}: {:.1}%", Category::ComputerScience, cs))?;
            console.send_message(format!("{}: {:.1}%", Category::ComputerTechnology, ct))?;
            recommendation.recommended()
        }
        None => {
            console.send_message(
                "\nIt seems you answered 'no' to all questions. Let's explore both degrees.",
            )?;
            receive_category(console, "Which degree would you like to explore further?")?
        }
    };

    console.send_message(format!("Recommended degree: {}", recommended))?;
    dialogue.update(State::ReceiveDegreeChoice { recommended });
    Ok(())
}

fn receive_degree_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dialogue: &mut Dialogue,
    catalog: &Catalog,
    recommended: Category,
) -> HandlerResult {
    console.send_message(
        "\nWould you like to explore the recommended degree or choose a different one?",
    )?;
    console.send_message(format!("1. Explore {}", recommended))?;
    console.send_message("2. Choose a different degree")?;
    console.prompt("Enter your choice (1-2): ")?;

    let category = match console.receive_choice(1, 2)? {
        1 => recommended,
        _ => receive_category(console, "Which degree would you like to explore?")?,
    };
    info!("Degree chosen: {}", category);

    console.send_message(format!("\nPossible majors for {}:", category))?;
    for (i, major) in catalog.major_names(category).iter().enumerate() {
        console.send_message(format!("{}. {}", i + 1, major))?;
    }

    dialogue.update(State::ScholarshipCheck {
        category,
        checked: false,
    });
    Ok(())
}

fn scholarship_check<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dialogue: &mut Dialogue,
    catalog: &Catalog,
    category: Category,
    checked: bool,
) -> HandlerResult {
    console.send_message(
        "\nDo you want to check available scholarships or proceed to the major-specific questions?",
    )?;
    console.send_message("1. Check available scholarships")?;
    console.send_message("2. Proceed to the major-specific questions")?;
    console.prompt("Enter your choice (1-2): ")?;

    if console.receive_choice(1, 2)? == 2 {
        if checked {
            console.send_message("Proceeding to the major-specific questions...")?;
        }
        dialogue.update(State::MajorQuiz {
            category,
            selection: catalog.major_selection(category),
        });
        return Ok(());
    }

    let majors = catalog.major_names(category);
    console.prompt("Enter the number of the major to check scholarships: ")?;
    let major = majors[console.receive_choice(1, majors.len())? - 1];
    console.prompt(format!(
        "Enter the year of study (1-{}): ",
        SCHOLARSHIP_YEARS
    ))?;
    let year = console.receive_choice(1, usize::from(SCHOLARSHIP_YEARS))?;
    send_scholarships(console, catalog, major, year as u8)?;

    dialogue.update(State::ScholarshipCheck {
        category,
        checked: true,
    });
    Ok(())
}

fn send_scholarships<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    major: &str,
    year: u8,
) -> HandlerResult {
    match catalog.scholarships(major, year) {
        ScholarshipListing::Available(scholarships) => {
            console.send_message(format!(
                "\nAvailable scholarships for {} (Year {}):",
                major, year
            ))?;
            for scholarship in scholarships {
                console.send_message(format!(
                    "- {}: {}",
                    scholarship.name, scholarship.description
                ))?;
            }
        }
        ScholarshipListing::NoneForYear => console.send_message(format!(
            "\nNo scholarships available for {} (Year {}).",
            major, year
        ))?,
        ScholarshipListing::UnknownMajor => {
            console.send_message("\nMajor not found in the scholarship database.")?
        }
    }
    Ok(())
}

fn major_quiz<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dialogue: &mut Dialogue,
    category: Category,
    mut selection: MajorSelection,
) -> HandlerResult {
    if selection.is_finished() {
        return major_results(console, dialogue, category, &selection);
    }

    let question = selection.current_question()?;
    console.prompt(format!("\n{} (y/n/back): ", question))?;

    match console.receive_reply()? {
        Reply::Back => {
            if !selection.undo() {
                debug!("Nothing to undo on the first major question");
            }
        }
        Reply::Yes => selection.answer(true)?,
        Reply::No => selection.answer(false)?,
    }
    debug!(
        "Major position {:?}, answers so far: {:?}",
        selection.position(),
        selection.answers()
    );

    dialogue.update(State::MajorQuiz {
        category,
        selection,
    });
    Ok(())
}

fn major_results<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dialogue: &mut Dialogue,
    category: Category,
    selection: &MajorSelection,
) -> HandlerResult {
    let verdict = selection.verdict();
    info!("Major scores: {:?}, verdict {:?}", selection.scores(), verdict);

    let majors = selection.majors();
    let index = match verdict {
        MajorVerdict::Recommended(index) => {
            console.send_message(format!(
                "\nBased on your answers, we recommend the major: {}",
                majors[index].name
            ))?;
            index
        }
        MajorVerdict::AllNo | MajorVerdict::AllYes => {
            if verdict == MajorVerdict::AllNo {
                console.send_message("\nIt seems you answered 'no' to all questions about majors.")?;
                console.send_message(format!("Let's explore all the majors for {}.", category))?;
                console.send_message("Which major would you like to learn more about?")?;
            } else {
                console.send_message("\nIt seems you answered 'yes' to all questions about majors.")?;
                console.send_message(format!(
                    "All majors in {} might be a good fit for you.",
                    category
                ))?;
                console.send_message("Which major would you like to explore further?")?;
            }
            for (i, major) in majors.iter().enumerate() {
                console.send_message(format!("{}. {}", i + 1, major.name))?;
            }
            console.prompt(format!("Enter your choice (1-{}): ", majors.len()))?;
            console.receive_choice(1, majors.len())? - 1
        }
    };

    dialogue.update(State::MajorMenu {
        category,
        major: majors[index].name.clone(),
    });
    Ok(())
}

fn major_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dialogue: &mut Dialogue,
    catalog: &Catalog,
    category: Category,
    major: String,
) -> HandlerResult {
    console.send_message("\nWhat would you like to do next?")?;
    console.send_message(format!("1. Learn more about {}", major))?;
    console.send_message(format!("2. View roadmap for {}", major))?;
    console.send_message("3. Go back to major selection")?;
    console.send_message("4. Go back to degree question")?;
    console.send_message("5. Opportunity")?;
    console.send_message(format!("6. View subjects for {}", major))?;
    console.send_message("7. Exit")?;
    console.prompt("Enter your choice (1-7): ")?;

    match console.receive_choice(1, 7)? {
        1 => {
            console.send_message(format!("\nInformation about {}:", major))?;
            send_major_info(console, catalog, &major)?;
        }
        2 => {
            console.send_message(format!("\nRoadmap for {}:", major))?;
            console.send_message(catalog.roadmap_text(&major))?;
        }
        3 => dialogue.update(State::MajorQuiz {
            category,
            selection: catalog.major_selection(category),
        }),
        4 => {
            info!("Restarting from the main menu");
            dialogue.update(State::Start);
        }
        5 => {
            console.send_message(
                "\nBased on your major chosen, the opportunities you can get are:",
            )?;
            for (i, opportunity) in catalog.opportunities(&major).iter().enumerate() {
                console.send_message(format!("{}. {}", i + 1, opportunity))?;
            }
        }
        6 => {
            let years = catalog.subject_years();
            console.send_message(format!("\nChoose a year to view subjects for {}:", major))?;
            for year in 1..=years {
                let name = YEAR_NAMES.get(usize::from(year) - 1).unwrap_or(&"Later");
                console.send_message(format!("{}. {} Year", year, name))?;
            }
            console.prompt(format!("Enter your choice (1-{}): ", years))?;
            let year = console.receive_choice(1, usize::from(years))? as u8;

            console.send_message(format!("\nSubjects for {} (Year {}):", major, year))?;
            for subject in catalog.subjects(&major, year) {
                console.send_message(format!("- {}", subject))?;
            }
        }
        _ => {
            console.send_message(GOODBYE_TEXT)?;
            dialogue.update(State::Finished);
        }
    }
    Ok(())
}

fn send_major_info<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    major: &str,
) -> HandlerResult {
    let separator = "-".repeat(BANNER_WIDTH);
    let title = format!("Major: {}", major);

    console.send_message(&separator)?;
    console.send_message(format!(
        "{:>width$}",
        title,
        width = (BANNER_WIDTH + title.len()) / 2
    ))?;
    console.send_message(format!("{}\n", separator))?;
    console.send_message("Description:")?;
    console.send_message(format!("{}\n", catalog.description(major)))?;
    console.send_message(format!("\n{}", separator))?;
    Ok(())
}
