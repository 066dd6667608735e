use crate::demo::{run_demo, run_evaluate, run_list, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dunk_calc::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dunk Calculator Pro",
    about = "Serve and run the vertical jump calculators from the command line",
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
    /// Print every calculator with its canonical URL
    List,
    /// Evaluate one calculator against a JSON input set
    Evaluate(EvaluateArgs),
    /// Evaluate a sample athlete against every calculator
    Demo,
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
        Command::List => run_list(),
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["dunk-calc-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_requires_exactly_one_input_source() {
        assert!(Cli::try_parse_from(["dunk-calc-api", "evaluate", "hang-time"]).is_err());
        assert!(Cli::try_parse_from([
            "dunk-calc-api",
            "evaluate",
            "hang-time",
            "--input",
            "{}",
            "--input-file",
            "input.json",
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "dunk-calc-api",
            "evaluate",
            "hang-time",
            "--input",
            r#"{"vertical_jump_in": 24}"#,
            "--json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.slug, "hang-time");
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_host_and_port_overrides() {
        let cli = Cli::try_parse_from([
            "dunk-calc-api",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
