use dice_lib::Expression;
use once_cell::sync::Lazy;
use std::env;

const DEFAULT_SPEC_VAR: &str = "DICE_DEFAULT_SPEC";

/// Rolled when no spec is given on the command line
static DEFAULT_SPEC: Lazy<Expression> = Lazy::new(|| dice_lib::must_parse("1d6"));

/// Settings read from the environment, and from a `.env` file when there is one
#[derive(Debug, Clone)]
pub struct Config {
    pub default_spec: Expression,
}

impl Config {
    pub fn from_env() -> dice_lib::Result<Self> {
        match dotenv::dotenv() {
            Ok(path) => tracing::debug!("loaded {}", path.display()),
            Err(error) => tracing::debug!("no `.env` file: {error}"),
        }
        Self::with_default_spec(env::var(DEFAULT_SPEC_VAR).ok().as_deref())
    }

    /// Use `spec` as the default when set, `1d6` otherwise
    pub fn with_default_spec(spec: Option<&str>) -> dice_lib::Result<Self> {
        let default_spec = match spec {
            Some(spec) => dice_lib::parse(spec)?,
            None => DEFAULT_SPEC.clone(),
        };
        tracing::debug!("default spec `{default_spec}`");
        Ok(Config { default_spec })
    }
}
