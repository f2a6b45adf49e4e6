pub mod dice;
pub mod error;
pub mod expression;
pub mod parser;
pub mod roll;

pub use dice::Die;
pub use error::Error;
pub use error::Result;
pub use expression::Expression;
pub use roll::Itemized;

/// Parse a dice spec of the form `1d20+2d6+3` into a rollable expression
pub fn parse(spec: &str) -> Result<Expression> {
    parser::Parser::expression(spec)
}

/// Parse a dice spec known to be valid, panicking if it is not.
///
/// Meant for literals baked into the program, never for user input.
pub fn must_parse(spec: &str) -> Expression {
    match parse(spec) {
        Ok(expression) => expression,
        Err(error) => panic!("{error}"),
    }
}
