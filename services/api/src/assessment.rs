use clap::Args;
use homecare::error::AppError;
use homecare::workflows::assessment::{catalog, score, AnswerSet, AssessmentResult};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer as question=option, e.g. --answer mobility=bedbound (repeat for each question)
    #[arg(long = "answer", value_parser = parse_pair, required = true)]
    pub(crate) answers: Vec<(String, String)>,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, option)| (key.trim().to_string(), option.trim().to_string()))
        .filter(|(key, option)| !key.is_empty() && !option.is_empty())
        .ok_or_else(|| format!("expected question=option, got '{raw}'"))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let answers = AnswerSet::from_pairs(args.answers.iter().map(|(key, option)| (key, option)))?;
    let result = score(&answers)?;

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(encoded) => println!("{encoded}"),
            Err(err) => return Err(std::io::Error::other(err).into()),
        }
    } else {
        render_result(&result);
    }

    Ok(())
}

fn render_result(result: &AssessmentResult) {
    println!("Care needs assessment");
    println!(
        "Score: {} -> {}",
        result.score,
        result.recommendation.label()
    );

    println!("\nBreakdown");
    for component in &result.components {
        println!(
            "- {}: {} (+{})",
            component.key, component.option, component.points
        );
    }

    println!("\nSuggested services");
    for service in &result.suggested_services {
        println!("- {}", service.label());
    }

    println!("\n{}", result.description);
}

pub(crate) fn print_questions() {
    for (position, question) in catalog().iter().enumerate() {
        println!("{}. {} [{}]", position + 1, question.prompt, question.key);
        if let Some(subtitle) = question.subtitle {
            println!("   {subtitle}");
        }
        for option in &question.options {
            let weight = match option.weight {
                Some(points) => format!(" (+{points})"),
                None => String::new(),
            };
            println!("   - {}: {}{}", option.id, option.label, weight);
        }
    }
}
