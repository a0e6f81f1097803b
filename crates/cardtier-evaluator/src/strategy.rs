//! Per-faction archetype summaries and key cards.
//!
//! Each faction has one static [`Archetype`]: a name, a playstyle summary,
//! tips, and affinity patterns for the faction's signature mechanics. A
//! [`Strategy`] pairs that archetype with up to [`KEY_CARD_LIMIT`] key cards
//! taken from a ranked catalog:
//!
//! 1. take the faction's cards in ranked order;
//! 2. keep those whose ability text matches an affinity pattern;
//! 3. if at least [`MIN_AFFINITY_CARDS`] remain, the key cards are the first
//!    of them, otherwise the faction's top cards regardless of affinity.

use arrayvec::ArrayVec;
use cardtier_catalog::Faction;
use serde::Serialize;

use crate::{
    pattern::{
        SearchText, TextPattern,
        Token::{self, Lit, Opt},
    },
    ranking::{RankedCard, RankedCatalog},
};

pub const KEY_CARD_LIMIT: usize = 8;

/// Affinity matches needed before key cards are restricted to them.
pub const MIN_AFFINITY_CARDS: usize = 5;

/// A faction's strategic identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub faction: Option<Faction>,
    pub name: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
    pub affinity: &'static [TextPattern],
}

impl Archetype {
    /// Returns `true` if the card's ability text shows one of the archetype's
    /// signature mechanics.
    #[must_use]
    pub fn has_affinity(&self, ranked: &RankedCard) -> bool {
        if self.affinity.is_empty() {
            return false;
        }
        let text = SearchText::new(&ranked.card.combined_text());
        self.affinity.iter().any(|pattern| pattern.is_match(&text))
    }
}

const fn plain(tokens: &'static [Token]) -> TextPattern {
    TextPattern::phrase(tokens)
}

/// Used for faction ids outside `0..=7`.
pub const UNKNOWN_ARCHETYPE: Archetype = Archetype {
    faction: None,
    name: "Unknown",
    description: "",
    tips: &[],
    affinity: &[],
};

pub const ARCHETYPES: &[Archetype] = &[
    Archetype {
        faction: Some(Faction::Forestcraft),
        name: "Combo Forest",
        description: "Swarm the board with Fairies and leverage combo effects that count cards played this turn.",
        tips: &[
            "Play low-cost cards to build combo count before key payoffs.",
            "Prioritize cards that generate tokens for hand refuel.",
            "Use Accelerate effects for flexible combo turns.",
        ],
        affinity: &[
            plain(&[Lit("fairy")]),
            plain(&[Lit("combo")]),
            plain(&[Lit("card"), Opt("s"), Lit(" played")]),
            plain(&[Lit("accelerate")]),
        ],
    },
    Archetype {
        faction: Some(Faction::Swordcraft),
        name: "Midrange Sword",
        description: "Build a resilient board with Officer and Commander synergies for steady pressure.",
        tips: &[
            "Curve out with efficient followers each turn.",
            "Commander buffs stack - play them after establishing a board.",
            "Rally payoffs reward aggressive early drops.",
        ],
        affinity: &[
            plain(&[Lit("officer")]),
            plain(&[Lit("commander")]),
            plain(&[Lit("rally")]),
            plain(&[Lit("storm")]),
        ],
    },
    Archetype {
        faction: Some(Faction::Runecraft),
        name: "Spellboost Rune",
        description: "Cast cheap spells to Spellboost powerful finishers and board clears.",
        tips: &[
            "Mulligan for early Spellboost enablers.",
            "Earth Rite cards provide value - track your sigil count.",
            "Save board clears for wide enemy boards.",
        ],
        affinity: &[
            plain(&[Lit("spellboost")]),
            plain(&[Lit("earth rite")]),
            plain(&[Lit("spell")]),
        ],
    },
    Archetype {
        faction: Some(Faction::Dragoncraft),
        name: "Ramp Dragon",
        description: "Accelerate your play-point curve to deploy overwhelming threats ahead of schedule.",
        tips: &[
            "Prioritise ramp (play-point gain) in the early game.",
            "Overflow unlocks powerful bonus effects - reach 7 PP quickly.",
            "High-cost Storm followers close games fast after ramping.",
        ],
        affinity: &[
            plain(&[Lit("overflow")]),
            plain(&[Lit("play point")]),
            plain(&[Lit("ramp")]),
            plain(&[Lit("storm")]),
        ],
    },
    Archetype {
        faction: Some(Faction::Shadowcraft),
        name: "Midrange Shadow",
        description: "Trade efficiently, fuel Necromancy, and generate value from Last Words effects.",
        tips: &[
            "Trade followers freely to build shadow count for Necromancy.",
            "Reanimate high-value targets for repeated impact.",
            "Burial Rite puts key followers into the graveyard on purpose.",
        ],
        affinity: &[
            plain(&[Lit("necromancy")]),
            plain(&[Lit("last words")]),
            plain(&[Lit("reanimate")]),
            plain(&[Lit("burial rite")]),
        ],
    },
    Archetype {
        faction: Some(Faction::Bloodcraft),
        name: "Aggro Blood",
        description: "Aggressively lower your own defense to activate Vengeance, then deliver burst damage.",
        tips: &[
            "Manage your defense total - Vengeance activates at 10 or below.",
            "Avarice rewards you for drawing extra cards each turn.",
            "Wrath payoffs trigger after taking self-damage 7 times.",
        ],
        affinity: &[
            plain(&[Lit("vengeance")]),
            plain(&[Lit("avarice")]),
            plain(&[Lit("wrath")]),
            plain(&[Lit("drain")]),
        ],
    },
    Archetype {
        faction: Some(Faction::Havencraft),
        name: "Control Haven",
        description: "Stall with healing and Ward while countdown amulets build towards powerful effects.",
        tips: &[
            "Countdown amulets delay effects - plan two or three turns ahead.",
            "Banish removes threats permanently - save it for key targets.",
            "Stack Ward followers to protect your leader.",
        ],
        affinity: &[
            plain(&[Lit("countdown")]),
            plain(&[Lit("ward")]),
            plain(&[Lit("banish")]),
            plain(&[Lit("restore")]),
        ],
    },
    Archetype {
        faction: Some(Faction::Portalcraft),
        name: "Artifact Portal",
        description: "Generate and recycle Artifacts while toggling Resonance for bonus effects.",
        tips: &[
            "Resonance flips when your deck count is even - track it.",
            "Artifact tokens fuel board presence and synergy payoffs.",
            "Float plays to keep Resonance aligned for key turns.",
        ],
        affinity: &[plain(&[Lit("artifact")]), plain(&[Lit("resonance")])],
    },
];

/// Looks up the archetype for a faction id, falling back to
/// [`UNKNOWN_ARCHETYPE`].
#[must_use]
pub fn archetype(faction_id: u8) -> &'static Archetype {
    Faction::from_id(faction_id)
        .and_then(|faction| {
            ARCHETYPES
                .iter()
                .find(|archetype| archetype.faction == Some(faction))
        })
        .unwrap_or(&UNKNOWN_ARCHETYPE)
}

/// Strategic summary for one faction of a ranked catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strategy<'a> {
    pub archetype: &'static str,
    pub description: &'static str,
    /// In ranked order.
    pub key_cards: ArrayVec<&'a RankedCard, KEY_CARD_LIMIT>,
    pub tips: &'static [&'static str],
}

/// Builds the strategy for `faction_id` from a ranked catalog.
///
/// Never fails: an unnamed id yields the "Unknown" archetype, with the top
/// cards carrying that id (if any) as key cards.
#[must_use]
pub fn strategize(faction_id: u8, catalog: &RankedCatalog) -> Strategy<'_> {
    let archetype = archetype(faction_id);

    let class_cards = catalog
        .faction_cards(Faction::from(faction_id))
        .collect::<Vec<_>>();
    let affinity_cards = class_cards
        .iter()
        .copied()
        .filter(|ranked| archetype.has_affinity(ranked))
        .collect::<Vec<_>>();

    let source = if affinity_cards.len() >= MIN_AFFINITY_CARDS {
        affinity_cards
    } else {
        class_cards
    };

    Strategy {
        archetype: archetype.name,
        description: archetype.description,
        key_cards: source.into_iter().take(KEY_CARD_LIMIT).collect(),
        tips: archetype.tips,
    }
}
