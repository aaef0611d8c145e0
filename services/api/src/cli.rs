use crate::demo::{run_assess, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use onboarding_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Onboarding Insights",
    about = "Score onboarding questionnaires and serve wellbeing insights",
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
    /// Score a questionnaire response stored as JSON and print the assessment
    Assess(AssessArgs),
    /// Run sample respondents through the engine and print a readable report
    Demo(DemoArgs),
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
        Command::Assess(args) => run_assess(args).await,
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["onboarding-insights"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_assess_arguments() {
        let cli = Cli::try_parse_from([
            "onboarding-insights",
            "assess",
            "--input",
            "answers.json",
            "--offline",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.input, PathBuf::from("answers.json"));
                assert!(args.offline);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn assess_requires_an_input_file() {
        assert!(Cli::try_parse_from(["onboarding-insights", "assess"]).is_err());
    }
}
