use crate::assessment::{print_questions, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use homecare::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Home Care Assessment Service",
    about = "Serve and exercise the care needs assessment from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the questionnaire or score a set of answers
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// List every question with its option ids and weights
    Questions,
    /// Score answers given as key=option pairs
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assessment {
            command: AssessmentCommand::Questions,
        } => {
            print_questions();
            Ok(())
        }
        Command::Assessment {
            command: AssessmentCommand::Score(args),
        } => run_score(args),
    }
}
