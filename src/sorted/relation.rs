//! Relational operators accepted by [`SortedCollection::find`](super::SortedCollection::find).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseRelationError;

/// Directional search operator.
///
/// Parses from and displays as its operator symbol.
///
/// # Example
///
/// ```
/// use contest_kit::sorted::Relation;
///
/// let rel: Relation = ">=".parse().unwrap();
/// assert_eq!(rel, Relation::Ge);
/// assert_eq!(rel.to_string(), ">=");
/// assert!("=>".parse::<Relation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// First item with key == k
    Eq,
    /// First item with key > k
    Gt,
    /// First item with key >= k
    Ge,
    /// Last item with key < k
    Lt,
    /// Last item with key <= k
    Le,
}

impl Relation {
    /// Every operator, in declaration order
    pub const ALL: [Relation; 5] = [
        Relation::Eq,
        Relation::Gt,
        Relation::Ge,
        Relation::Lt,
        Relation::Le,
    ];

    /// Operator symbol (`==`, `>`, `>=`, `<`, `<=`)
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Eq => "==",
            Relation::Gt => ">",
            Relation::Ge => ">=",
            Relation::Lt => "<",
            Relation::Le => "<=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Relation {
    type Err = ParseRelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|rel| rel.symbol() == s)
            .ok_or_else(|| ParseRelationError(s.to_owned()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
