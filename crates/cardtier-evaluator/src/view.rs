//! Filtering and ordering for card list views.
//!
//! Both operations are non-mutating and work over anything implementing
//! [`CardEntry`]: plain [`Card`]s, [`RankedCard`]s, or references to either.
//!
//! ```
//! use cardtier_catalog::Faction;
//! use cardtier_evaluator::{
//!     ranking::rank_catalog,
//!     view::{CardFilter, SortKey, filter_cards, sort_cards},
//! };
//!
//! let catalog = rank_catalog(Vec::new());
//! let filter = CardFilter {
//!     faction: Some(Faction::Dragoncraft),
//!     cost: Some(8),
//!     ..CardFilter::default()
//! };
//! let view = sort_cards(&filter_cards(catalog.cards(), &filter), SortKey::Rank);
//! assert!(view.is_empty());
//! ```

use std::{cmp::Ordering, sync::LazyLock};

use cardtier_catalog::{Card, Faction, Rarity};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences, options::CollatorOptions};

use crate::ranking::RankedCard;

/// Costs at or above this value form one "8+" bucket when filtering.
pub const COST_BUCKET_MIN: u32 = 8;

/// A list item that can be filtered and sorted.
pub trait CardEntry {
    fn card(&self) -> &Card;

    /// Computed score, if any.
    fn score(&self) -> Option<f32> {
        None
    }
}

impl CardEntry for Card {
    fn card(&self) -> &Card {
        self
    }
}

impl CardEntry for RankedCard {
    fn card(&self) -> &Card {
        &self.card
    }

    fn score(&self) -> Option<f32> {
        Some(self.score)
    }
}

impl<T> CardEntry for &T
where
    T: CardEntry + ?Sized,
{
    fn card(&self) -> &Card {
        (**self).card()
    }

    fn score(&self) -> Option<f32> {
        (**self).score()
    }
}

/// Conditions a card must meet to stay in a view.
///
/// Every `None` (and an empty search string) imposes no constraint; the
/// remaining conditions must all hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub faction: Option<Faction>,
    /// Exact cost, or any cost of [`COST_BUCKET_MIN`] and above.
    pub cost: Option<u32>,
    pub rarity: Option<Rarity>,
    /// Case-insensitive substring of the name or base ability text.
    pub search: Option<String>,
}

impl CardFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faction.is_none()
            && self.cost.is_none()
            && self.rarity.is_none()
            && self.search.as_deref().is_none_or(str::is_empty)
    }

    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        if self.faction.is_some_and(|faction| card.faction != faction) {
            return false;
        }
        if let Some(cost) = self.cost {
            let matched = if cost >= COST_BUCKET_MIN {
                card.cost >= COST_BUCKET_MIN
            } else {
                card.cost == cost
            };
            if !matched {
                return false;
            }
        }
        if self.rarity.is_some_and(|rarity| card.rarity != rarity) {
            return false;
        }
        match self.search.as_deref() {
            Some(search) if !search.is_empty() => {
                let needle = search.to_lowercase();
                card.name.to_lowercase().contains(&needle)
                    || card.ability_text.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

/// Ordering of a card list view.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::FromStr, derive_more::Display,
)]
pub enum SortKey {
    /// Cost, lowest first.
    #[display("cost")]
    Cost,
    /// Attack, highest first.
    #[display("atk")]
    Atk,
    /// Health, highest first.
    #[display("life")]
    Life,
    /// Rarity, highest first.
    #[display("rarity")]
    Rarity,
    /// Name, alphabetical.
    #[display("name")]
    Name,
    /// Score, highest first; unscored entries count as 0.
    #[default]
    #[display("rank")]
    Rank,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::Rank,
        Self::Cost,
        Self::Atk,
        Self::Life,
        Self::Rarity,
        Self::Name,
    ];

    /// Compares two entries; `Less` means `a` is listed first.
    #[must_use]
    pub fn compare<T>(self, a: &T, b: &T) -> Ordering
    where
        T: CardEntry + ?Sized,
    {
        let (ca, cb) = (a.card(), b.card());
        match self {
            Self::Cost => ca.cost.cmp(&cb.cost),
            Self::Atk => cb.attack.cmp(&ca.attack),
            Self::Life => cb.health.cmp(&ca.health),
            Self::Rarity => cb.rarity.cmp(&ca.rarity),
            Self::Name => compare_names(&ca.name, &cb.name),
            Self::Rank => {
                let (sa, sb) = (a.score().unwrap_or(0.0), b.score().unwrap_or(0.0));
                sb.partial_cmp(&sa).unwrap_or(Ordering::Equal)
            }
        }
    }
}

/// Root-locale collator; `None` only if the built-in collation data fails to
/// load.
static NAME_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default()).ok()
});

/// Natural-language order: case and accents only break ties, lowercase
/// before uppercase, so "apple" < "Apple" < "Bahamut" and "Éclair" sorts
/// among the E names.
fn compare_names(a: &str, b: &str) -> Ordering {
    let collated = match NAME_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    };
    collated.then_with(|| a.cmp(b))
}

/// Returns the entries matching `filter`, in input order.
#[must_use]
pub fn filter_cards<'a, T>(entries: &'a [T], filter: &CardFilter) -> Vec<&'a T>
where
    T: CardEntry,
{
    entries
        .iter()
        .filter(|entry| filter.matches(entry.card()))
        .collect()
}

/// Returns the entries ordered by `key`; equal entries keep their input
/// order.
#[must_use]
pub fn sort_cards<T>(entries: &[T], key: SortKey) -> Vec<T>
where
    T: CardEntry + Clone,
{
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ranking::rank_catalog, test_util::card};

    fn names<T: CardEntry>(entries: &[T]) -> Vec<&str> {
        entries.iter().map(|entry| entry.card().name.as_str()).collect()
    }

    fn sample() -> Vec<Card> {
        vec![
            Card {
                cost: 2,
                attack: 2,
                health: 3,
                rarity: Rarity::Silver,
                ability_text: "Fanfare: Draw a card.".to_owned(),
                ..card(1, "banner knight")
            },
            Card {
                cost: 8,
                attack: 8,
                health: 8,
                rarity: Rarity::Legendary,
                faction: Faction::Dragoncraft,
                ..card(2, "Zirnitra")
            },
            Card {
                cost: 10,
                attack: 10,
                health: 1,
                rarity: Rarity::Gold,
                faction: Faction::Dragoncraft,
                evolved_ability_text: "Draw a card.".to_owned(),
                ..card(3, "Bahamut")
            },
            Card {
                cost: 2,
                attack: 1,
                health: 5,
                rarity: Rarity::Bronze,
                ..card(4, "Apple Sprite")
            },
            Card {
                cost: 7,
                attack: 5,
                health: 5,
                rarity: Rarity::Gold,
                ..card(5, "apple Sprite")
            },
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let cards = sample();
        let filter = CardFilter::default();
        assert!(filter.is_empty());
        let filtered = filter_cards(&cards, &filter);
        assert_eq!(filtered, cards.iter().collect::<Vec<_>>());

        let blank_search = CardFilter {
            search: Some(String::new()),
            ..CardFilter::default()
        };
        assert!(blank_search.is_empty());
        assert_eq!(filter_cards(&cards, &blank_search).len(), cards.len());
    }

    #[test]
    fn test_cost_bucket() {
        let cards = sample();
        let eight_plus = CardFilter {
            cost: Some(8),
            ..CardFilter::default()
        };
        assert_eq!(names(&filter_cards(&cards, &eight_plus)), ["Zirnitra", "Bahamut"]);

        let nine = CardFilter {
            cost: Some(9),
            ..CardFilter::default()
        };
        assert_eq!(names(&filter_cards(&cards, &nine)), ["Zirnitra", "Bahamut"]);

        let seven = CardFilter {
            cost: Some(7),
            ..CardFilter::default()
        };
        assert_eq!(names(&filter_cards(&cards, &seven)), ["apple Sprite"]);
    }

    #[test]
    fn test_criteria_are_combined() {
        let cards = sample();
        let filter = CardFilter {
            faction: Some(Faction::Dragoncraft),
            rarity: Some(Rarity::Gold),
            ..CardFilter::default()
        };
        assert_eq!(names(&filter_cards(&cards, &filter)), ["Bahamut"]);
    }

    #[test]
    fn test_search_name_or_base_text() {
        let cards = sample();
        let sprite = CardFilter {
            search: Some("SPRITE".to_owned()),
            ..CardFilter::default()
        };
        assert_eq!(names(&filter_cards(&cards, &sprite)), ["Apple Sprite", "apple Sprite"]);

        // evolved text is not searched
        let draw = CardFilter {
            search: Some("draw a card".to_owned()),
            ..CardFilter::default()
        };
        assert_eq!(names(&filter_cards(&cards, &draw)), ["banner knight"]);
    }

    #[test]
    fn test_sort_keys() {
        let cards = sample();
        assert_eq!(
            names(&sort_cards(&cards, SortKey::Cost)),
            ["banner knight", "Apple Sprite", "apple Sprite", "Zirnitra", "Bahamut"]
        );
        assert_eq!(
            names(&sort_cards(&cards, SortKey::Atk)),
            ["Bahamut", "Zirnitra", "apple Sprite", "banner knight", "Apple Sprite"]
        );
        assert_eq!(
            names(&sort_cards(&cards, SortKey::Life)),
            ["Zirnitra", "Apple Sprite", "apple Sprite", "banner knight", "Bahamut"]
        );
        assert_eq!(
            names(&sort_cards(&cards, SortKey::Rarity)),
            ["Zirnitra", "Bahamut", "apple Sprite", "banner knight", "Apple Sprite"]
        );
        assert_eq!(
            names(&sort_cards(&cards, SortKey::Name)),
            ["apple Sprite", "Apple Sprite", "Bahamut", "banner knight", "Zirnitra"]
        );
    }

    #[test]
    fn test_name_order_is_collated() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "banana"), Ordering::Less);
        assert_eq!(compare_names("Éclair", "Zombie"), Ordering::Less);
        assert_eq!(compare_names("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("Éclair", "Fafnir"), Ordering::Less);
        assert_eq!(compare_names("Zombie", "Zombie"), Ordering::Equal);

        let cards = vec![
            card(1, "Zombie"),
            card(2, "Éclair"),
            card(3, "Dragon"),
            card(4, "eclair"),
        ];
        assert_eq!(
            names(&sort_cards(&cards, SortKey::Name)),
            ["Dragon", "eclair", "Éclair", "Zombie"]
        );
    }

    #[test]
    fn test_rank_sort_treats_unscored_as_zero() {
        let cards = sample();
        // plain cards have no score: input order is kept
        assert_eq!(names(&sort_cards(&cards, SortKey::Rank)), names(&cards));

        let ranked = rank_catalog(cards);
        let shuffled = ranked.cards().iter().rev().collect::<Vec<_>>();
        let resorted = sort_cards(&shuffled, SortKey::Rank);
        let scores = resorted.iter().map(|r| r.score).collect::<Vec<_>>();
        assert!(scores.is_sorted_by(|a, b| a >= b));
    }

    #[test]
    fn test_sort_is_stable_and_non_mutating() {
        let cards = sample();
        let before = cards.clone();
        let refs = cards.iter().collect::<Vec<_>>();
        let sorted = sort_cards(&refs, SortKey::Cost);
        // cards 1 and 4 share cost 2
        assert_eq!(sorted[0].id, 1);
        assert_eq!(sorted[1].id, 4);
        assert_eq!(cards, before);
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("rank".parse::<SortKey>().unwrap(), SortKey::Rank);
        assert_eq!("Cost".parse::<SortKey>().unwrap(), SortKey::Cost);
        assert_eq!("LIFE".parse::<SortKey>().unwrap(), SortKey::Life);
        assert!("power".parse::<SortKey>().is_err());
        assert_eq!(SortKey::Atk.to_string(), "atk");
        assert_eq!(SortKey::default(), SortKey::Rank);
    }
}
