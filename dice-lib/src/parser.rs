use crate::error::Error;
use crate::error::Result;
use crate::expression::Expression;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::num::NonZeroU32;

pub mod limits {
    /// Arbitrary limit on the dice in one expression, itemized rolls keep one `Die` per die
    pub const MAX_DICE_AMOUNT: u64 = 1_000_000;
}

/// Pest parser
#[derive(Parser)]
#[grammar = "dice.pest"]
pub struct Parser;

impl Parser {
    /// Parse a whole dice spec, merging each term left to right
    pub fn expression(input: &str) -> Result<Expression> {
        let pairs = <Self as pest::Parser<Rule>>::parse(Rule::expression, input).map_err(|e| {
            Error::Syntax {
                input: input.to_owned(),
                cause: Box::new(e),
            }
        })?;
        pairs
            .flat_map(|expr| expr.into_inner())
            .filter(|pair| pair.as_rule() != Rule::EOI)
            .try_fold(Expression::new(), |acc, term| {
                let acc = acc.merge(Self::term(term, input)?);
                if acc.dice_count() > limits::MAX_DICE_AMOUNT {
                    return Err(Error::TooManyDice {
                        input: input.to_owned(),
                        limit: limits::MAX_DICE_AMOUNT,
                    });
                }
                Ok(acc)
            })
    }

    fn term(term: Pair<Rule>, input: &str) -> Result<Expression> {
        match term.as_rule() {
            Rule::die => {
                let mut inner = term.into_inner();
                let count = Self::number::<u32>(inner.next(), input)?;
                let sides = Self::number::<u32>(inner.next(), input)?;
                let sides = NonZeroU32::new(sides).ok_or_else(|| Error::ZeroSides {
                    input: input.to_owned(),
                })?;
                Ok(Expression::with_group(sides, count))
            }
            Rule::modifier => {
                let value = Self::number::<i64>(term.into_inner().next(), input)?;
                Ok(Expression::with_modifier(value))
            }
            _ => unreachable!("{:#?}", term),
        }
    }

    fn number<T: std::str::FromStr<Err = std::num::ParseIntError>>(
        integer: Option<Pair<Rule>>,
        input: &str,
    ) -> Result<T> {
        let literal = match integer {
            Some(pair) => pair.as_str(),
            None => unreachable!("grammar always yields an integer here"),
        };
        literal.parse::<T>().map_err(|cause| Error::Number {
            input: input.to_owned(),
            literal: literal.to_owned(),
            cause,
        })
    }
}
