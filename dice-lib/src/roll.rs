use crate::dice::Die;
use itertools::Itertools;
use rand::Rng;

/// Interface for rolling dices
pub trait Source {
    /// Return a value in `1..=sides`
    fn throw(&mut self, sides: u32) -> u32;
}

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u32) -> u32 {
        self.generator.gen_range(1..=sides)
    }
}

/// Keep every die of an itemized roll with the modifier it was rolled with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itemized {
    dice: Vec<Die>,
    modifier: i64,
}

impl Itemized {
    pub(crate) fn new(dice: Vec<Die>, modifier: i64) -> Self {
        Itemized { dice, modifier }
    }

    /// Rolled dice, biggest first
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Sum of every result plus the modifier
    pub fn total(&self) -> i64 {
        self.dice
            .iter()
            .fold(self.modifier, |acc, die| acc.saturating_add(i64::from(die.result)))
    }

    pub fn into_parts(self) -> (Vec<Die>, i64) {
        (self.dice, self.modifier)
    }
}

/// Render as `6+3+1+4 = 14`; the modifier is left out when it is 0
impl std::fmt::Display for Itemized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dice.iter().format("+"))?;
        if self.modifier != 0 {
            if !self.dice.is_empty() {
                write!(f, "+")?;
            }
            write!(f, "{}", self.modifier)?;
        }
        write!(f, " = {}", self.total())
    }
}
