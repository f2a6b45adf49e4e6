use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
use clap::ArgAction;
use clap::CommandFactory;
pub use clap::Parser;
use dice_lib::Expression;
use rand::Rng;
use std::ffi::OsStr;
use std::ffi::OsString;

const ROLL_AUTHOR: &str = crate_authors!();
const ROLL_VERSION: &str = crate_version!();
const ROLL_ABOUT: &str = crate_description!();
const ROLL_FLAG_D_HELP: &str = "Enable Debug logging";
const ROLL_FLAG_A_HELP: &str = "Print the average roll";
const ROLL_FLAG_MAX_HELP: &str = "Print the maximum roll";
const ROLL_FLAG_MIN_HELP: &str = "Print the minimum roll";
const ROLL_FLAG_R_HELP: &str = "Print a random roll (default)";
const ROLL_FLAG_V_HELP: &str = "Print a random roll with every die shown";
const ROLL_SEED_HELP: &str = "Seed the dice for reproducible rolls";
const ROLL_SPEC_HELP: &str = "Dice specs such as `1d20+2d6+3`";

#[derive(Parser, Debug)]
#[command(author = ROLL_AUTHOR, version = ROLL_VERSION, about = ROLL_ABOUT)]
pub struct Args {
    #[arg(short = 'd', long, help = ROLL_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(
        short = 'a',
        long = "avg",
        visible_aliases = ["average", "mean"],
        help = ROLL_FLAG_A_HELP,
        action = ArgAction::Count
    )]
    pub average: u8,
    #[arg(
        short = 'M',
        long = "max",
        visible_alias = "maximum",
        help = ROLL_FLAG_MAX_HELP,
        action = ArgAction::Count
    )]
    pub maximum: u8,
    #[arg(
        short = 'm',
        long = "min",
        visible_alias = "minimum",
        help = ROLL_FLAG_MIN_HELP,
        action = ArgAction::Count
    )]
    pub minimum: u8,
    #[arg(
        short = 'r',
        long = "roll",
        visible_aliases = ["result", "rand", "random"],
        help = ROLL_FLAG_R_HELP,
        action = ArgAction::Count
    )]
    pub random: u8,
    #[arg(short = 'v', long, help = ROLL_FLAG_V_HELP, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, env = "DICE_SEED", help = ROLL_SEED_HELP)]
    pub seed: Option<u64>,
    #[arg(value_name = "SPEC", help = ROLL_SPEC_HELP)]
    pub specs: Vec<String>,
}

impl Args {
    /// Parse the process arguments, exiting on invalid flags
    pub fn parse_with_order() -> (Self, Vec<Operation>) {
        let argv: Vec<OsString> = std::env::args_os().collect();
        match Self::try_parse_from(&argv) {
            Ok(args) => (args, operations(&argv)),
            Err(error) => error.exit(),
        }
    }
}

/// Requested operations, one per flag occurrence in command line order.
///
/// A random roll when none is given.
pub fn operations<T: AsRef<OsStr>>(argv: &[T]) -> Vec<Operation> {
    let command = Args::command();
    let by_long = |name: &str| {
        command.get_arguments().find(|arg| {
            arg.get_long_and_visible_aliases()
                .map_or(false, |names| names.contains(&name))
        })
    };
    let by_short = |flag: char| {
        command.get_arguments().find(|arg| {
            arg.get_short_and_visible_aliases()
                .map_or(false, |flags| flags.contains(&flag))
        })
    };
    let mut requested = Vec::new();
    for token in argv.iter().skip(1).map(|arg| arg.as_ref().to_string_lossy()) {
        if token == "--" {
            break;
        }
        if let Some(long) = token.strip_prefix("--") {
            let name = long.split('=').next().unwrap_or(long);
            requested.extend(
                by_long(name).and_then(|arg| Operation::from_id(arg.get_id().as_str())),
            );
        } else if let Some(shorts) = token.strip_prefix('-') {
            requested.extend(
                shorts
                    .chars()
                    .filter_map(|flag| by_short(flag))
                    .filter_map(|arg| Operation::from_id(arg.get_id().as_str())),
            );
        }
    }
    if requested.is_empty() {
        requested.push(Operation::Roll);
    }
    requested
}

/// One thing to print for every spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Mean,
    Max,
    Min,
    Roll,
    Verbose,
}

impl Operation {
    /// Operation requested by the flag with id `id`
    fn from_id(id: &str) -> Option<Self> {
        match id {
            "average" => Some(Operation::Mean),
            "maximum" => Some(Operation::Max),
            "minimum" => Some(Operation::Min),
            "random" => Some(Operation::Roll),
            "verbose" => Some(Operation::Verbose),
            _ => None,
        }
    }

    pub fn eval<R: Rng>(&self, expression: &Expression, generator: &mut R) -> String {
        match self {
            Operation::Mean => expression.mean().to_string(),
            Operation::Max => expression.max().to_string(),
            Operation::Min => expression.min().to_string(),
            Operation::Roll => expression.roll_all_with(generator).to_string(),
            Operation::Verbose => expression.roll_each_with(generator).to_string(),
        }
    }
}

/// Every operation result followed by a tab
pub fn report<R: Rng>(expression: &Expression, operations: &[Operation], generator: &mut R) -> String {
    operations
        .iter()
        .fold(String::new(), |mut line, operation| {
            line.push_str(&operation.eval(expression, generator));
            line.push('\t');
            line
        })
}
