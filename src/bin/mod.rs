use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use log::LevelFilter;

use tapl_calculi::{
    error::Error,
    evaluation::{self, Evaluate},
    samples::{self, Sample},
    typing,
};

#[derive(Parser)]
#[command(
    version,
    about, long_about = None,
    disable_help_subcommand = true
)]
struct Cli {
    /// Increase logging verbosity (-v debug, -vv trace); `RUST_LOG` is used otherwise.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    subcommands: Subcommands,
}

#[derive(Subcommand)]
enum Subcommands {
    /// List the built-in samples
    List,
    /// Evaluate a sample, displaying the result on stdout
    Evaluate {
        sample: String,
        #[arg(short, long, value_enum, default_value_t = Strategy::FullReduction)]
        strategy: Strategy,
    },
    /// Display every single step taken while evaluating a sample
    Trace { sample: String },
    /// Type-check a sample, displaying its type on stdout
    TypeCheck { sample: String },
    /// Check every sample against its expected result
    CheckAll,
}

#[derive(Copy, Clone, ValueEnum)]
enum Strategy {
    SingleStep,
    FullReduction,
}

impl From<Strategy> for evaluation::Strategy {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::SingleStep => Self::SingleStep,
            Strategy::FullReduction => Self::FullReduction,
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn find_sample(name: &str) -> Result<Sample, String> {
    samples::find(name).ok_or_else(|| {
        format!(
            "no sample named '{name}'\navailable samples:\n  {}",
            samples::catalog().iter().map(|sample| sample.name).join("\n  ")
        )
    })
}

fn program() -> Result<bool, String> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.subcommands {
        Subcommands::List => {
            for sample in samples::catalog() {
                println!(
                    "{:<32} {:<12} {}",
                    sample.name,
                    format!("{:?}", sample.calculus),
                    sample.term.display(&sample.ctx)
                );
            }
        }
        Subcommands::Evaluate { sample, strategy } => {
            let Sample { ctx, term, .. } = find_sample(&sample)?;
            let value = evaluation::evaluate(&term, &ctx, strategy.into());
            println!("{}", value.display(&ctx));
        }
        Subcommands::Trace { sample } => {
            let Sample { ctx, term, .. } = find_sample(&sample)?;
            println!("   {}", term.display(&ctx));
            for step in term.steps(&ctx) {
                println!("-> {}", step.display(&ctx));
            }
        }
        Subcommands::TypeCheck { sample } => {
            let Sample { ctx, term, .. } = find_sample(&sample)?;
            match typing::type_of(&term, &ctx) {
                Ok(ty) => println!("{}", ty),
                Err(err) => {
                    println!("{}", Error::from(err).render_styled());
                    return Ok(false);
                }
            }
        }
        Subcommands::CheckAll => {
            let catalog = samples::catalog();
            let failures = catalog
                .iter()
                .filter_map(|sample| sample.check().err())
                .collect_vec();
            for failure in &failures {
                eprintln!("{failure}");
            }
            println!(
                "{} of {} samples behave as expected",
                catalog.len() - failures.len(),
                catalog.len()
            );
            return Ok(failures.is_empty());
        }
    }

    Ok(true)
}

fn main() -> ExitCode {
    match program() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
