//! Tie-break rules for picking a single item out of an ordered sequence.
//!
//! Both remote APIs can return more than one candidate: several pages for a
//! title query, several statements for one property. The lookup never merges
//! or ranks by confidence; it applies one of these named rules instead.

use crate::claims::Rank;

/// Anything that carries a statement rank.
///
/// Pages have no rank and report [`Rank::Normal`].
pub trait Ranked {
    fn rank(&self) -> Rank {
        Rank::Normal
    }
}

/// How to choose one item from an ordered candidate sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// First item in delivered order (default)
    #[default]
    First,
    /// First `preferred` item, else first non-deprecated, else first
    PreferredRank,
}

impl TieBreak {
    /// Apply the rule. Returns `None` only for an empty sequence.
    pub fn pick<'a, T, I>(self, items: I) -> Option<&'a T>
    where
        T: Ranked + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        match self {
            TieBreak::First => items.into_iter().next(),
            TieBreak::PreferredRank => {
                let items: Vec<&T> = items.into_iter().collect();
                items
                    .iter()
                    .find(|item| item.rank() == Rank::Preferred)
                    .or_else(|| items.iter().find(|item| item.rank() != Rank::Deprecated))
                    .or_else(|| items.first())
                    .copied()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::First => "first",
            TieBreak::PreferredRank => "preferred-rank",
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(TieBreak::First),
            "preferred" | "preferred-rank" | "preferred_rank" => Ok(TieBreak::PreferredRank),
            other => Err(format!("unknown tie-break rule '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, Rank);

    impl Ranked for Item {
        fn rank(&self) -> Rank {
            self.1
        }
    }

    #[test]
    fn test_first_takes_delivered_order() {
        let items = [Item("a", Rank::Deprecated), Item("b", Rank::Preferred)];
        assert_eq!(TieBreak::First.pick(&items).unwrap().0, "a");
    }

    #[test]
    fn test_preferred_rank_wins() {
        let items = [
            Item("a", Rank::Normal),
            Item("b", Rank::Preferred),
            Item("c", Rank::Preferred),
        ];
        assert_eq!(TieBreak::PreferredRank.pick(&items).unwrap().0, "b");
    }

    #[test]
    fn test_preferred_rank_skips_deprecated() {
        let items = [Item("a", Rank::Deprecated), Item("b", Rank::Normal)];
        assert_eq!(TieBreak::PreferredRank.pick(&items).unwrap().0, "b");
    }

    #[test]
    fn test_preferred_rank_falls_back_to_first() {
        let items = [Item("a", Rank::Deprecated), Item("b", Rank::Deprecated)];
        assert_eq!(TieBreak::PreferredRank.pick(&items).unwrap().0, "a");
    }

    #[test]
    fn test_empty_sequence() {
        let items: [Item; 0] = [];
        assert!(TieBreak::First.pick(&items).is_none());
        assert!(TieBreak::PreferredRank.pick(&items).is_none());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("first".parse::<TieBreak>().unwrap(), TieBreak::First);
        assert_eq!("Preferred".parse::<TieBreak>().unwrap(), TieBreak::PreferredRank);
        assert!("best".parse::<TieBreak>().is_err());
    }
}
