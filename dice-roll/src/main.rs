use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use tracing::Level;

mod cli;
mod config;

fn main() -> ExitCode {
    let (args, operations) = cli::Args::parse_with_order();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match run(&args, &operations, config::Config::from_env) {
        Ok(lines) => {
            lines.iter().for_each(|line| println!("{line}"));
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(?error, "aborting");
            eprintln!("{}", format!("roll: error: {error}").bold().red());
            ExitCode::FAILURE
        }
    }
}

/// Parse every spec up front, then evaluate each one into an output line.
///
/// `config` is only loaded when no spec is given.
fn run<F>(
    args: &cli::Args,
    operations: &[cli::Operation],
    config: F,
) -> dice_lib::Result<Vec<String>>
where
    F: FnOnce() -> dice_lib::Result<config::Config>,
{
    let specs = args
        .specs
        .iter()
        .map(|spec| dice_lib::parse(spec))
        .collect::<dice_lib::Result<Vec<_>>>()?;
    let specs = if specs.is_empty() {
        vec![config()?.default_spec]
    } else {
        specs
    };
    let mut generator = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::debug!(?operations, "evaluating {} spec(s)", specs.len());
    Ok(specs
        .iter()
        .map(|expression| {
            tracing::debug!("rolling `{expression}`");
            cli::report(expression, operations, &mut generator)
        })
        .collect())
}
