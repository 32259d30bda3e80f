use std::fmt;
use std::iter::Sum;
use stillwater::Semigroup;

/// Number of lines, combined by addition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineCount(pub usize);

impl Semigroup for LineCount {
    fn combine(self, other: Self) -> Self {
        LineCount(self.0.saturating_add(other.0))
    }
}

impl Sum for LineCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        super::combine_all(iter)
    }
}

impl fmt::Display for LineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
