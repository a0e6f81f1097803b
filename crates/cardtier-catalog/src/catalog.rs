use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// One complete, immutable load of card data for a single language.
///
/// Scores and tiers derived from a catalog are only meaningful relative to
/// that catalog; loading another language produces a different snapshot that
/// must be ranked from scratch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    cards: Vec<Card>,
    tribe_names: BTreeMap<u32, String>,
    set_names: BTreeMap<u32, String>,
}

impl Catalog {
    #[must_use]
    pub fn new(
        cards: Vec<Card>,
        tribe_names: BTreeMap<u32, String>,
        set_names: BTreeMap<u32, String>,
    ) -> Self {
        Self {
            cards,
            tribe_names,
            set_names,
        }
    }

    /// Builds a catalog without tribe or set name tables.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self::new(cards, BTreeMap::new(), BTreeMap::new())
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    #[must_use]
    pub fn find(&self, card_id: u32) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    /// Name of the card's tribe; `None` for tribe 0 or unknown ids.
    #[must_use]
    pub fn tribe_name(&self, card: &Card) -> Option<&str> {
        lookup_name(&self.tribe_names, card.tribe)
    }

    /// Name of the set the card was released in.
    #[must_use]
    pub fn set_name(&self, card: &Card) -> Option<&str> {
        lookup_name(&self.set_names, card.set_id)
    }

    #[must_use]
    pub fn tribe_names(&self) -> &BTreeMap<u32, String> {
        &self.tribe_names
    }

    #[must_use]
    pub fn set_names(&self) -> &BTreeMap<u32, String> {
        &self.set_names
    }
}

fn lookup_name(names: &BTreeMap<u32, String>, id: u32) -> Option<&str> {
    if id == 0 {
        return None;
    }
    names
        .get(&id)
        .map(String::as_str)
        .filter(|name| !name.is_empty())
}
