use crate::dice::Die;
use crate::roll;
use crate::roll::Itemized;
use crate::roll::RandomSource;
use itertools::Itertools;
use rand::Rng;
use std::collections::HashMap;
use std::num::NonZeroU32;

/// A set of dice grouped by their number of sides, plus one flat modifier added to every total.
///
/// Built by merging single-term expressions, so the order of the terms in a spec never matters:
/// `2d12+4+1d20` and `1d20+2d12+4` hold the same groups and modifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    /// sides -> count
    groups: HashMap<u32, u32>,
    modifier: i64,
}

impl Expression {
    /// The empty expression, identity of [`Expression::merge`]
    pub fn new() -> Self {
        Self::default()
    }

    /// One group of `count` dice with `sides` sides each
    pub fn with_group(sides: NonZeroU32, count: u32) -> Self {
        Self {
            groups: HashMap::from([(sides.get(), count)]),
            modifier: 0,
        }
    }

    /// A flat modifier with no dice
    pub fn with_modifier(modifier: i64) -> Self {
        Self {
            groups: HashMap::new(),
            modifier,
        }
    }

    /// Combine two expressions: counts of matching sides add up, modifiers add up
    #[must_use]
    pub fn merge(mut self, other: Expression) -> Self {
        for (sides, count) in other.groups {
            let entry = self.groups.entry(sides).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        self.modifier = self.modifier.saturating_add(other.modifier);
        self
    }

    /// How many dice of each size, keyed by number of sides
    pub fn groups(&self) -> &HashMap<u32, u32> {
        &self.groups
    }

    /// How many dice of `sides` sides the expression holds
    pub fn count_of(&self, sides: u32) -> u32 {
        self.groups.get(&sides).copied().unwrap_or(0)
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Total number of dice across every group
    pub fn dice_count(&self) -> u64 {
        self.groups.values().map(|&count| u64::from(count)).sum()
    }

    /// Minimum total: every die shows 1
    pub fn min(&self) -> i64 {
        self.groups
            .values()
            .fold(0i64, |acc, &count| acc.saturating_add(i64::from(count)))
            .saturating_add(self.modifier)
    }

    /// Maximum total: every die shows its highest face
    pub fn max(&self) -> i64 {
        self.groups
            .iter()
            .fold(0i64, |acc, (&sides, &count)| {
                acc.saturating_add(i64::from(count).saturating_mul(i64::from(sides)))
            })
            .saturating_add(self.modifier)
    }

    /// Midpoint of [`Expression::min`] and [`Expression::max`].
    ///
    /// Computed from the aggregate bounds, never per group. Every die is uniform, so the midpoint
    /// also equals the sum of the group means: `1d20+2d12+3d6+4` gives 38 either way.
    pub fn mean(&self) -> f64 {
        (self.min() as f64 + self.max() as f64) / 2.0
    }

    /// Roll every die using the default Rng source and return the total
    pub fn roll_all(&self) -> i64 {
        self.roll_all_with(&mut rand::thread_rng())
    }

    /// Roll every die using the provided Rng source and return the total
    pub fn roll_all_with<R: Rng>(&self, generator: &mut R) -> i64 {
        self.roll_all_with_source(&mut RandomSource { generator })
    }

    /// Roll every die using the provided source and return the total
    pub fn roll_all_with_source<S: roll::Source>(&self, source: &mut S) -> i64 {
        self.groups
            .iter()
            .fold(0i64, |acc, (&sides, &count)| {
                (0..count).fold(acc, |acc, _| {
                    acc.saturating_add(i64::from(source.throw(sides)))
                })
            })
            .saturating_add(self.modifier)
    }

    /// Roll every die using the default Rng source and keep each result
    pub fn roll_each(&self) -> Itemized {
        self.roll_each_with(&mut rand::thread_rng())
    }

    /// Roll every die using the provided Rng source and keep each result
    pub fn roll_each_with<R: Rng>(&self, generator: &mut R) -> Itemized {
        self.roll_each_with_source(&mut RandomSource { generator })
    }

    /// Roll every die using the provided source and keep each result.
    ///
    /// Dice come out grouped by size, biggest dice first.
    pub fn roll_each_with_source<S: roll::Source>(&self, source: &mut S) -> Itemized {
        let dice = self
            .descending()
            .flat_map(|(sides, count)| (0..count).map(move |_| sides))
            .map(|sides| Die::new(sides, source.throw(sides)))
            .collect();
        Itemized::new(dice, self.modifier)
    }

    /// Groups ordered by number of sides, biggest first
    fn descending(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.groups
            .iter()
            .map(|(&sides, &count)| (sides, count))
            .sorted_by(|a, b| b.0.cmp(&a.0))
    }
}

impl std::ops::Add for Expression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl std::iter::Sum for Expression {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Self::merge)
    }
}

impl std::str::FromStr for Expression {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

/// Diagnostic rendering, e.g. `2d12+1d6+4`. Always ends with the modifier, even when it is 0.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.descending()
            .try_for_each(|(sides, count)| write!(f, "{count}d{sides}+"))?;
        write!(f, "{}", self.modifier)
    }
}
