use crate::infra::parse_birth_date;
use archetype_ai::error::AppError;
use archetype_ai::triangulation::domain::{AnswerChoice, QuestionnaireAnswers};
use archetype_ai::triangulation::questionnaire::required_question_ids;
use archetype_ai::triangulation::{validate_completeness, TriangulationEngine};
use chrono::NaiveDate;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Display name used in the printed result
    #[arg(long, default_value = "Demo Subject")]
    pub(crate) name: String,
    /// Birth date (YYYY-MM-DD)
    #[arg(long, default_value = "1990-07-15", value_parser = demo_date)]
    pub(crate) birth_date: NaiveDate,
    /// Optional four-letter cognitive-type code
    #[arg(long)]
    pub(crate) type_code: Option<String>,
    /// Optional birth time (HH:MM)
    #[arg(long)]
    pub(crate) birth_time: Option<String>,
    /// Print the full twenty-entry ranking instead of the top three
    #[arg(long)]
    pub(crate) full_ranking: bool,
}

fn demo_date(raw: &str) -> Result<NaiveDate, String> {
    parse_birth_date(raw).map_err(|err| err.to_string())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        name,
        birth_date,
        type_code,
        birth_time,
        full_ranking,
    } = args;

    let answers = canned_answers();
    let completion = validate_completeness(&answers);

    println!("Cultural code triangulation demo");
    println!(
        "- Questionnaire: {} of 25 questions answered ({}%)",
        25 - completion.missing_question_ids.len(),
        completion.completion_percentage
    );

    let result = TriangulationEngine::new().run(
        &answers,
        birth_date,
        &name,
        type_code.as_deref(),
        birth_time.as_deref(),
    );

    let traits = &result.frameworks.traits;
    println!(
        "- Traits: openness {} | discipline {} | social energy {} | harmony {} | resilience {}",
        traits.openness, traits.discipline, traits.social_energy, traits.harmony, traits.resilience
    );
    println!(
        "- Motivational type: {} with a {} wing",
        result.frameworks.motivational.core.label(),
        result.frameworks.motivational.wing.label()
    );
    println!(
        "- Calendar: {} primary / {} secondary",
        result.frameworks.calendar.primary.sign.label(),
        result.frameworks.calendar.secondary.sign.label()
    );
    match &result.frameworks.cognitive {
        Some(cognitive) => println!("- Cognitive type: {}", cognitive.code),
        None => println!("- Cognitive type: not provided"),
    }

    println!("\nDetected patterns ({}):", result.detected_patterns.len());
    for pattern in result.detected_patterns.values() {
        println!(
            "  - {} ({:.0}% confidence)",
            pattern.name,
            pattern.confidence * 100.0
        );
    }

    println!("\nTop matches:");
    for m in [&result.primary, &result.secondary, &result.tertiary] {
        println!("  - {} {}% ({})", m.name, m.percentage, m.tier.label());
    }

    if full_ranking {
        println!("\nFull ranking:");
        for m in &result.all_matches {
            println!("  - {} {}% ({})", m.name, m.percentage, m.tier.label());
        }
    }

    println!("\n{}", result.explanation);
    println!("{}", result.framework_summary);

    Ok(())
}

/// A deliberately uneven answer sheet so the demo surfaces a varied
/// pattern mix rather than a flat neutral profile.
fn canned_answers() -> QuestionnaireAnswers {
    let mut answers: QuestionnaireAnswers = required_question_ids()
        .into_iter()
        .map(|id| (id.to_string(), AnswerChoice::Neutral))
        .collect();

    for id in [
        "openness_1",
        "openness_2",
        "openness_3",
        "harmony_1",
        "harmony_2",
        "drive_4",
        "drive_9",
    ] {
        answers.insert(id.to_string(), AnswerChoice::High);
    }
    for id in ["social_energy_1", "social_energy_2", "discipline_3"] {
        answers.insert(id.to_string(), AnswerChoice::Low);
    }

    answers
}
