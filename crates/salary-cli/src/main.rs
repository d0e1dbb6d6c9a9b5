mod display;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use salary_ai::{Artifacts, InferenceAdapter};
use salary_core::EmployeeInput;
use salary_web::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "salary", version, about = "Predict an employee's income category")]
struct Cli {
    /// Directory holding salary_model.json and the le_*.json encoders.
    #[arg(long, env = "SALARY_ARTIFACTS", default_value = "artifacts", global = true)]
    artifacts: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the prediction form over HTTP.
    Serve {
        #[arg(long, env = "SALARY_HOST", default_value = "127.0.0.1")]
        host: String,
        #[arg(long, env = "SALARY_PORT", default_value_t = 8501)]
        port: u16,
    },
    /// Predict once and print a result card.
    Predict(PredictArgs),
    /// List the known classes of each encoder.
    Classes,
}

#[derive(Args)]
struct PredictArgs {
    #[arg(long, value_parser = clap::value_parser!(u32).range(17..=75))]
    age: u32,
    #[arg(long)]
    workclass: String,
    /// 1 = Preschool, 16 = Doctorate.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16))]
    education_level: u32,
    #[arg(long)]
    occupation: String,
    #[arg(long)]
    gender: String,
    #[arg(long, default_value_t = 0)]
    capital_gain: u64,
    #[arg(long, default_value_t = 0)]
    capital_loss: u64,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    hours_per_week: u32,
}

impl From<PredictArgs> for EmployeeInput {
    fn from(args: PredictArgs) -> Self {
        Self {
            age: args.age,
            workclass: args.workclass,
            education_level: args.education_level,
            occupation: args.occupation,
            gender: args.gender,
            capital_gain: args.capital_gain,
            capital_loss: args.capital_loss,
            hours_per_week: args.hours_per_week,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("salary v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let artifacts = Artifacts::load(&cli.artifacts)
        .with_context(|| format!("loading artifacts from {}", cli.artifacts.display()))?;
    let adapter = InferenceAdapter::new(artifacts);

    match cli.command {
        Command::Serve { host, port } => {
            salary_web::serve(&ServerConfig { host, port }, adapter).await?;
        }
        Command::Predict(args) => {
            let input = EmployeeInput::from(args);
            let features = adapter.encode(&input)?;
            let result = adapter
                .predict_features(&features)
                .context("prediction failed")?;
            print!("{}", display::format_result_card(&input, &result));
            println!();
            println!("Encoded features");
            println!("{}", display::format_feature_table(&features)?);
        }
        Command::Classes => {
            print!("{}", display::format_classes(adapter.encoders()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_args_parse() {
        let cli = Cli::try_parse_from([
            "salary",
            "--artifacts",
            "/tmp/model",
            "predict",
            "--age",
            "30",
            "--workclass",
            "Private",
            "--education-level",
            "10",
            "--occupation",
            "Sales",
            "--gender",
            "Male",
            "--hours-per-week",
            "40",
        ])
        .unwrap();
        assert_eq!(cli.artifacts, PathBuf::from("/tmp/model"));

        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let input = EmployeeInput::from(args);
        assert_eq!(input, EmployeeInput::with_defaults("Private", "Sales", "Male"));
    }

    #[test]
    fn predict_rejects_out_of_range_age() {
        let result = Cli::try_parse_from([
            "salary",
            "predict",
            "--age",
            "90",
            "--workclass",
            "Private",
            "--education-level",
            "10",
            "--occupation",
            "Sales",
            "--gender",
            "Male",
            "--hours-per-week",
            "40",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["salary", "serve"]).unwrap();
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8501);
            }
            _ => panic!("expected serve"),
        }
    }
}
