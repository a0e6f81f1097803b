//! Ability-text rule tables.
//!
//! Two independent tables feed the score:
//!
//! - **Keyword rules** ([`KEYWORD_RULES`]) recognise named mechanics. Besides
//!   their weight, the number of distinct keyword rules a card matches drives
//!   the versatility bonus.
//! - **Phrase rules** ([`PHRASE_RULES`]) recognise contextual effects such as
//!   unconditional removal or card draw. They add weight only.
//!
//! Every rule contributes at most once per card no matter how often its
//! pattern occurs. Order matters only for reporting: breakdowns list matched
//! rules in table order.

use crate::pattern::{
    TextPattern,
    Token::{self, Alt, Lit, Number, Opt},
};

/// A weighted ability-text rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRule {
    id: &'static str,
    name: &'static str,
    pattern: TextPattern,
    weight: f32,
}

impl ScoringRule {
    const fn new(
        id: &'static str,
        name: &'static str,
        pattern: TextPattern,
        weight: f32,
    ) -> Self {
        Self {
            id,
            name,
            pattern,
            weight,
        }
    }

    /// Stable snake_case identifier used by weight override files.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn pattern(&self) -> &TextPattern {
        &self.pattern
    }

    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    #[must_use]
    pub(crate) fn with_weight(self, weight: f32) -> Self {
        Self { weight, ..self }
    }
}

const fn word(
    id: &'static str,
    name: &'static str,
    tokens: &'static [Token],
    weight: f32,
) -> ScoringRule {
    ScoringRule::new(id, name, TextPattern::word(tokens), weight)
}

const fn prefix(
    id: &'static str,
    name: &'static str,
    tokens: &'static [Token],
    weight: f32,
) -> ScoringRule {
    ScoringRule::new(id, name, TextPattern::prefix(tokens), weight)
}

const fn phrase(
    id: &'static str,
    name: &'static str,
    tokens: &'static [Token],
    weight: f32,
) -> ScoringRule {
    ScoringRule::new(id, name, TextPattern::phrase(tokens), weight)
}

pub const KEYWORD_RULES: &[ScoringRule] = &[
    // high-impact offense
    word("storm", "Storm", &[Lit("storm")], 3.0),
    word("bane", "Bane", &[Lit("bane")], 2.5),
    word("invocation", "Invocation", &[Lit("invocation")], 2.5),
    prefix("banish", "Banish", &[Lit("banish")], 2.0),
    // defense and sustain
    word("ward", "Ward", &[Lit("ward")], 2.0),
    word("drain", "Drain", &[Lit("drain")], 2.0),
    // tempo
    word("rush", "Rush", &[Lit("rush")], 2.0),
    prefix("accelerate", "Accelerate", &[Lit("accelerate")], 2.0),
    prefix("union_burst", "Union Burst", &[Lit("union burst")], 2.0),
    prefix("reanimate", "Reanimate", &[Lit("reanimate")], 2.0),
    // flexibility and value
    prefix("crystallize", "Crystallize", &[Lit("crystallize")], 1.5),
    word("ambush", "Ambush", &[Lit("ambush")], 1.5),
    prefix("fanfare", "Fanfare", &[Lit("fanfare")], 1.5),
    prefix("last_words", "Last Words", &[Lit("last words")], 1.5),
    prefix("enhance", "Enhance", &[Lit("enhance")], 1.5),
    prefix("spellboost", "Spellboost", &[Lit("spellboost")], 1.5),
    prefix("transform", "Transform", &[Lit("transform")], 1.5),
    // conditional and class mechanics
    prefix("clash", "Clash", &[Lit("clash")], 1.0),
    prefix("strike", "Strike", &[Lit("strike")], 1.0),
    prefix("earth_rite", "Earth Rite", &[Lit("earth rite")], 1.0),
    word("overflow", "Overflow", &[Lit("overflow")], 1.0),
    word("vengeance", "Vengeance", &[Lit("vengeance")], 1.0),
    prefix("necromancy", "Necromancy", &[Lit("necromancy")], 1.0),
    word("resonance", "Resonance", &[Lit("resonance")], 1.0),
    word("avarice", "Avarice", &[Lit("avarice")], 1.0),
    prefix("rally", "Rally", &[Lit("rally")], 1.0),
    prefix("burial_rite", "Burial Rite", &[Lit("burial rite")], 1.0),
    word("wrath", "Wrath", &[Lit("wrath")], 1.0),
];

pub const PHRASE_RULES: &[ScoringRule] = &[
    phrase(
        "indestructible",
        "Can't be destroyed",
        &[Lit("can"), Opt("'"), Lit("t be destroyed")],
        2.0,
    ),
    phrase(
        "untargetable",
        "Can't be targeted",
        &[Lit("can"), Opt("'"), Lit("t be targeted")],
        1.5,
    ),
    phrase(
        "destroy_enemy",
        "Destroy an enemy",
        &[
            Lit("destroy "),
            Alt(&[&[Lit("a"), Opt("n")], &[Lit("all")]]),
            Lit(" "),
            Alt(&[&[Lit("enemy")], &[Lit("other")]]),
        ],
        1.5,
    ),
    phrase(
        "deal_damage",
        "Deal damage",
        &[Lit("deal "), Number, Lit(" damage")],
        1.0,
    ),
    phrase(
        "draw_card",
        "Draw cards",
        &[Lit("draw "), Alt(&[&[Lit("a")], &[Number]]), Lit(" card")],
        1.0,
    ),
    phrase(
        "restore_defense",
        "Restore defense",
        &[Lit("restore "), Number, Lit(" defense")],
        0.5,
    ),
    phrase(
        "stat_buff",
        "Gain +X/+Y",
        &[Lit("gain +"), Number, Lit("/+"), Number],
        0.5,
    ),
];
