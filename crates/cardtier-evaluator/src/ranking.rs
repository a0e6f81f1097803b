//! Scored and tiered catalog snapshots.

use std::cmp::Ordering;

use cardtier_catalog::{Card, Faction};
use serde::{Deserialize, Serialize};

use crate::{
    scoring::CardScorer,
    tier::{Tier, TierCutPoints},
};

/// A card together with its score and tier within one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCard {
    #[serde(flatten)]
    pub card: Card,
    pub score: f32,
    pub tier: Tier,
}

/// Every card of a snapshot, sorted by score (highest first) and tiered.
///
/// Cards with equal scores keep the order they were classified in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedCatalog {
    cut_points: TierCutPoints,
    cards: Vec<RankedCard>,
}

impl RankedCatalog {
    /// Tiers already-scored cards relative to each other and sorts them.
    #[must_use]
    pub fn classify(scored: Vec<(Card, f32)>) -> Self {
        let scores = scored.iter().map(|(_, score)| *score).collect::<Vec<_>>();
        let cut_points = TierCutPoints::from_scores(&scores);

        let mut cards = scored
            .into_iter()
            .map(|(card, score)| RankedCard {
                card,
                score,
                tier: cut_points.classify(score),
            })
            .collect::<Vec<_>>();
        cards.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Self { cut_points, cards }
    }

    #[must_use]
    pub fn cut_points(&self) -> TierCutPoints {
        self.cut_points
    }

    #[must_use]
    pub fn cards(&self) -> &[RankedCard] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedCard> + '_ {
        self.cards.iter()
    }

    #[must_use]
    pub fn find(&self, card_id: u32) -> Option<&RankedCard> {
        self.cards.iter().find(|ranked| ranked.card.id == card_id)
    }

    /// Cards of one faction, in ranked order.
    pub fn faction_cards(&self, faction: Faction) -> impl Iterator<Item = &RankedCard> + '_ {
        self.cards
            .iter()
            .filter(move |ranked| ranked.card.faction == faction)
    }

    /// The `limit` highest-ranked cards of one faction.
    #[must_use]
    pub fn top_by_faction(&self, faction: Faction, limit: usize) -> Vec<&RankedCard> {
        self.faction_cards(faction).take(limit).collect()
    }

    /// Cards of one tier, in ranked order.
    pub fn by_tier(&self, tier: Tier) -> impl Iterator<Item = &RankedCard> + '_ {
        self.cards.iter().filter(move |ranked| ranked.tier == tier)
    }

    /// Number of cards in each tier, best tier first.
    #[must_use]
    pub fn tier_counts(&self) -> [(Tier, usize); 5] {
        tier_counts(&self.cards)
    }
}

impl<'a> IntoIterator for &'a RankedCatalog {
    type Item = &'a RankedCard;
    type IntoIter = std::slice::Iter<'a, RankedCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Counts cards per tier, best tier first.
pub fn tier_counts<'a, I>(cards: I) -> [(Tier, usize); 5]
where
    I: IntoIterator<Item = &'a RankedCard>,
{
    let mut counts = Tier::ALL.map(|tier| (tier, 0));
    for ranked in cards {
        counts[ranked.tier.index()].1 += 1;
    }
    counts
}

/// Scores every card with the default weights and classifies the result.
#[must_use]
pub fn rank_catalog<I>(cards: I) -> RankedCatalog
where
    I: IntoIterator<Item = Card>,
{
    rank_catalog_with(&CardScorer::DEFAULT, cards)
}

#[must_use]
pub fn rank_catalog_with<I>(scorer: &CardScorer, cards: I) -> RankedCatalog
where
    I: IntoIterator<Item = Card>,
{
    let scored = cards
        .into_iter()
        .map(|card| {
            let score = scorer.score(&card);
            (card, score)
        })
        .collect();
    RankedCatalog::classify(scored)
}
