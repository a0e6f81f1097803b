//! Card power scoring, catalog-relative tiers, and per-faction strategy.
//!
//! The evaluator turns a [`Catalog`](cardtier_catalog::Catalog) snapshot into
//! a ranked, tiered view of its cards in three stages:
//!
//! 1. **Scoring** ([`scoring`]) - Each card gets a real-valued power estimate
//!    from weighted ability-text rules, a stat-efficiency term, and small
//!    cost/rarity adjustments.
//!
//! 2. **Tier classification** ([`tier`], [`ranking`]) - Four nearest-rank
//!    percentile cut points over all scores split the catalog into tiers
//!    S, A, B, C, and D. The result is sorted by score, highest first.
//!
//! 3. **Strategy** ([`strategy`]) - For one faction, a static archetype
//!    description plus up to eight key cards picked by mechanic affinity.
//!
//! # Data Flow
//!
//! ```text
//! Catalog ──score each card──▶ scored cards ──classify──▶ RankedCatalog
//! RankedCatalog + faction id ──strategize──▶ Strategy
//! RankedCatalog + filter/sort ──view──▶ view slice
//! ```
//!
//! # Snapshot Relativity
//!
//! Tiers are relative to the scores of the snapshot they were computed from.
//! A [`RankedCatalog`](ranking::RankedCatalog) is never patched: loading a new
//! catalog (for example another language) means ranking it again.
//!
//! All functions here are pure and total. Degenerate input (an empty catalog,
//! an unknown faction id, empty ability text) yields an empty or default
//! result rather than an error.
//!
//! # Example
//!
//! ```
//! use cardtier_catalog::{Card, CardKind, Faction, Rarity};
//! use cardtier_evaluator::{ranking, scoring, tier::Tier};
//!
//! let card = Card {
//!     id: 1,
//!     name: "Storm Knight".to_owned(),
//!     faction: Faction::Swordcraft,
//!     kind: CardKind::Follower,
//!     tribe: 0,
//!     rarity: Rarity::Bronze,
//!     cost: 1,
//!     attack: 2,
//!     health: 2,
//!     evolved_attack: 0,
//!     evolved_health: 0,
//!     ability_text: "Storm".to_owned(),
//!     evolved_ability_text: String::new(),
//!     is_token: false,
//!     set_id: 0,
//!     image_hash: String::new(),
//! };
//!
//! assert_eq!(scoring::score(&card), 1.75);
//!
//! let ranked = ranking::rank_catalog([card]);
//! assert_eq!(ranked.cards()[0].tier, Tier::S);
//! ```

pub mod pattern;
pub mod ranking;
pub mod scoring;
pub mod strategy;
pub mod tier;
pub mod view;

#[cfg(test)]
pub(crate) mod test_util {
    use cardtier_catalog::{Card, CardKind, Faction, Rarity};

    /// A vanilla 1-cost Bronze follower; tests adjust the fields they need.
    pub(crate) fn card(id: u32, name: &str) -> Card {
        Card {
            id,
            name: name.to_owned(),
            faction: Faction::Forestcraft,
            kind: CardKind::Follower,
            tribe: 0,
            rarity: Rarity::Bronze,
            cost: 1,
            attack: 1,
            health: 1,
            evolved_attack: 0,
            evolved_health: 0,
            ability_text: String::new(),
            evolved_ability_text: String::new(),
            is_token: false,
            set_id: 0,
            image_hash: String::new(),
        }
    }

    pub(crate) fn with_text(id: u32, name: &str, text: &str) -> Card {
        Card {
            ability_text: text.to_owned(),
            ..card(id, name)
        }
    }
}
