use crate::parser;
use pest::error::LineColLocation;

/// Crate Error type
#[derive(Debug)]
pub enum Error {
    /// The spec does not follow the dice grammar
    Syntax {
        input: String,
        cause: Box<pest::error::Error<parser::Rule>>,
    },
    /// A count, sides or modifier literal does not fit its integer type
    Number {
        input: String,
        literal: String,
        cause: std::num::ParseIntError,
    },
    /// A die with zero sides, like `1d0`
    ZeroSides { input: String },
    /// More dice than an expression may hold
    TooManyDice { input: String, limit: u64 },
}

impl Error {
    /// The full spec that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::Syntax { input, .. }
            | Self::Number { input, .. }
            | Self::ZeroSides { input }
            | Self::TooManyDice { input, .. } => input,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not parse \"{}\": ", self.input())?;
        match self {
            Self::Syntax { cause, .. } => {
                let col = match cause.line_col {
                    LineColLocation::Pos((_, col)) | LineColLocation::Span((_, col), _) => col,
                };
                write!(f, "{} at column {col}", cause.variant.message())
            }
            Self::Number { literal, cause, .. } => write!(f, "`{literal}` {cause}"),
            Self::ZeroSides { .. } => write!(f, "dice need at least one side"),
            Self::TooManyDice { limit, .. } => {
                write!(f, "exceeded max allowed amount of dices `{limit}`")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax { cause, .. } => Some(cause.as_ref()),
            Self::Number { cause, .. } => Some(cause),
            Self::ZeroSides { .. } | Self::TooManyDice { .. } => None,
        }
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
