/// A single rolled die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Die {
    pub sides: u32,
    pub result: u32,
}

impl Die {
    pub fn new(sides: u32, result: u32) -> Self {
        debug_assert!(
            (1..=sides).contains(&result),
            "rolled {result} on a {sides} sided die"
        );
        Die { sides, result }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.result)
    }
}
