//! Card power scoring.
//!
//! A card's score is the sum of independent contributions, accumulated in a
//! fixed order:
//!
//! 1. **Keyword rules** - every matching rule of [`KEYWORD_RULES`] adds its
//!    weight once.
//! 2. **Phrase rules** - every matching rule of [`PHRASE_RULES`] adds its
//!    weight once.
//! 3. **Versatility** - `+2.0` for five or more matched keyword rules, `+1.0`
//!    for three or four.
//! 4. **Stat efficiency** (followers only) -
//!    `(atk + hp - (2·cost + 1)) · 0.5 + (evo_atk + evo_hp - (2·cost + 5)) · 0.25`
//! 5. **Low-cost premium** - `+1.5` when cost ≤ 1 and the running score is
//!    above 2, otherwise `+1.0` when cost ≤ 2 and the running score is above 3.
//! 6. **Rarity** - Legendary `+0.5`, Gold `+0.25`.
//! 7. **Token** - `-1.0`.
//!
//! The score is unbounded and may be negative. Rules search the combined base
//! and evolved ability text, case-insensitively.
//!
//! [`CardScorer::breakdown`] reports each contribution; its total is the
//! score itself, summed in the same order.

use std::{borrow::Cow, collections::BTreeMap};

use cardtier_catalog::{Card, CardKind, Rarity};
use serde::Serialize;

use crate::pattern::SearchText;

pub use self::rules::{KEYWORD_RULES, PHRASE_RULES, ScoringRule};

mod rules;

/// Scores a card with the default rule weights.
#[must_use]
pub fn score(card: &Card) -> f32 {
    CardScorer::DEFAULT.score(card)
}

/// Which rule table a rule id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RuleTable {
    #[display("keyword")]
    Keyword,
    #[display("phrase")]
    Phrase,
}

/// A weight override named a rule that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown {table} rule id: {id}")]
pub struct UnknownRuleError {
    pub table: RuleTable,
    pub id: String,
}

/// Scores cards against a keyword table and a phrase table.
#[derive(Debug, Clone, PartialEq)]
pub struct CardScorer {
    keyword_rules: Cow<'static, [ScoringRule]>,
    phrase_rules: Cow<'static, [ScoringRule]>,
}

impl Default for CardScorer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CardScorer {
    /// The built-in rule tables with their built-in weights.
    pub const DEFAULT: Self = Self {
        keyword_rules: Cow::Borrowed(KEYWORD_RULES),
        phrase_rules: Cow::Borrowed(PHRASE_RULES),
    };

    /// Returns a scorer whose rule weights are replaced by id.
    ///
    /// Rules not named keep their current weight.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownRuleError`] for an id that is not in the
    /// corresponding table.
    pub fn with_weight_overrides(
        self,
        keyword_weights: &BTreeMap<String, f32>,
        phrase_weights: &BTreeMap<String, f32>,
    ) -> Result<Self, UnknownRuleError> {
        Ok(Self {
            keyword_rules: override_weights(self.keyword_rules, keyword_weights, RuleTable::Keyword)?,
            phrase_rules: override_weights(self.phrase_rules, phrase_weights, RuleTable::Phrase)?,
        })
    }

    #[must_use]
    pub fn keyword_rules(&self) -> &[ScoringRule] {
        &self.keyword_rules
    }

    #[must_use]
    pub fn phrase_rules(&self) -> &[ScoringRule] {
        &self.phrase_rules
    }

    #[must_use]
    pub fn score(&self, card: &Card) -> f32 {
        self.breakdown(card).total
    }

    /// Computes the score of `card` along with each contribution to it.
    #[must_use]
    pub fn breakdown(&self, card: &Card) -> ScoreBreakdown {
        let text = SearchText::new(&card.combined_text());
        let mut total = 0.0;

        let keywords = matched_rules(&self.keyword_rules, &text);
        for rule in &keywords {
            total += rule.weight;
        }
        let phrases = matched_rules(&self.phrase_rules, &text);
        for rule in &phrases {
            total += rule.weight;
        }

        let versatility = versatility_bonus(keywords.len());
        total += versatility;

        let stat_term = stat_efficiency(card);
        total += stat_term;

        let low_cost_premium = low_cost_premium(card.cost, total);
        total += low_cost_premium;

        let rarity_bonus = rarity_bonus(card.rarity);
        total += rarity_bonus;

        let token_penalty = if card.is_token { -1.0 } else { 0.0 };
        total += token_penalty;

        ScoreBreakdown {
            keywords,
            phrases,
            versatility,
            stat_term,
            low_cost_premium,
            rarity_bonus,
            token_penalty,
            total,
        }
    }
}

fn override_weights(
    rules: Cow<'static, [ScoringRule]>,
    weights: &BTreeMap<String, f32>,
    table: RuleTable,
) -> Result<Cow<'static, [ScoringRule]>, UnknownRuleError> {
    if weights.is_empty() {
        return Ok(rules);
    }
    let mut rules = rules.into_owned();
    for (id, &weight) in weights {
        let rule = rules
            .iter_mut()
            .find(|rule| rule.id() == id)
            .ok_or_else(|| UnknownRuleError {
                table,
                id: id.clone(),
            })?;
        *rule = rule.with_weight(weight);
    }
    Ok(Cow::Owned(rules))
}

fn matched_rules(rules: &[ScoringRule], text: &SearchText) -> Vec<MatchedRule> {
    rules
        .iter()
        .filter(|rule| rule.pattern().is_match(text))
        .map(|rule| MatchedRule {
            id: rule.id(),
            name: rule.name(),
            weight: rule.weight(),
        })
        .collect()
}

fn versatility_bonus(keyword_count: usize) -> f32 {
    match keyword_count {
        5.. => 2.0,
        3.. => 1.0,
        _ => 0.0,
    }
}

#[expect(clippy::cast_precision_loss)]
fn stat_efficiency(card: &Card) -> f32 {
    if card.kind != CardKind::Follower {
        return 0.0;
    }
    let expected = card.cost as f32 * 2.0 + 1.0;
    let base = (card.attack as f32 + card.health as f32 - expected) * 0.5;
    let evolved_expected = expected + 4.0;
    let evolved =
        (card.evolved_attack as f32 + card.evolved_health as f32 - evolved_expected) * 0.25;
    base + evolved
}

fn low_cost_premium(cost: u32, running: f32) -> f32 {
    if cost <= 1 && running > 2.0 {
        1.5
    } else if cost <= 2 && running > 3.0 {
        1.0
    } else {
        0.0
    }
}

fn rarity_bonus(rarity: Rarity) -> f32 {
    match rarity {
        Rarity::Legendary => 0.5,
        Rarity::Gold => 0.25,
        Rarity::Silver | Rarity::Bronze | Rarity::Other(_) => 0.0,
    }
}

/// A rule that matched a card, with the weight it contributed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchedRule {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: f32,
}

/// Every contribution to a card's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Matched keyword rules, in table order.
    pub keywords: Vec<MatchedRule>,
    /// Matched phrase rules, in table order.
    pub phrases: Vec<MatchedRule>,
    pub versatility: f32,
    /// Zero for anything but a follower.
    pub stat_term: f32,
    pub low_cost_premium: f32,
    pub rarity_bonus: f32,
    pub token_penalty: f32,
    pub total: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{card, with_text};

    fn vanilla(kind: CardKind, text: &str) -> Card {
        Card {
            kind,
            cost: 3,
            attack: 0,
            health: 0,
            ..with_text(1, "Test", text)
        }
    }

    #[test]
    fn test_worked_example() {
        let card = Card {
            cost: 1,
            attack: 2,
            health: 2,
            ..with_text(1, "Storm Knight", "Storm")
        };
        let breakdown = CardScorer::DEFAULT.breakdown(&card);
        assert_eq!(breakdown.keywords.len(), 1);
        assert_eq!(breakdown.keywords[0].id, "storm");
        assert_eq!(breakdown.versatility, 0.0);
        assert_eq!(breakdown.stat_term, -1.25);
        assert_eq!(breakdown.low_cost_premium, 0.0);
        assert_eq!(breakdown.total, 1.75);
        assert_eq!(score(&card), 1.75);
    }

    #[test]
    fn test_each_rule_counts_once() {
        let once = vanilla(CardKind::Spell, "Deal 2 damage.");
        let twice = vanilla(CardKind::Spell, "Deal 2 damage. Deal 3 damage. Ward. Ward.");
        assert_eq!(score(&once), 1.0);
        assert_eq!(score(&twice), 3.0);
    }

    #[test]
    fn test_evolved_text_is_searched() {
        let card = Card {
            evolved_ability_text: "Rush".to_owned(),
            ..vanilla(CardKind::Amulet, "")
        };
        assert_eq!(score(&card), 2.0);
    }

    #[test]
    fn test_versatility_bonus() {
        // Clash + Strike + Rally = 3.0, three keywords
        let three = vanilla(CardKind::Spell, "Clash: x. Strike: y. Rally: z.");
        assert_eq!(CardScorer::DEFAULT.breakdown(&three).versatility, 1.0);
        assert_eq!(score(&three), 4.0);

        // Clash + Strike + Rally + Wrath + Avarice = 5.0, five keywords
        let five = vanilla(CardKind::Spell, "Clash. Strike. Rally. Wrath. Avarice.");
        assert_eq!(CardScorer::DEFAULT.breakdown(&five).versatility, 2.0);
        assert_eq!(score(&five), 7.0);

        // phrase rules do not count towards versatility
        let phrases = vanilla(CardKind::Spell, "Clash. Strike. Deal 1 damage. Draw a card.");
        assert_eq!(CardScorer::DEFAULT.breakdown(&phrases).versatility, 0.0);
    }

    #[test]
    fn test_stat_term_only_for_followers() {
        for kind in [CardKind::Spell, CardKind::Amulet, CardKind::EvolvedFollower] {
            let card = Card {
                attack: 9,
                health: 9,
                ..vanilla(kind, "")
            };
            assert_eq!(CardScorer::DEFAULT.breakdown(&card).stat_term, 0.0, "{kind}");
        }

        // cost 3: expected 7, evolved expected 11
        let follower = Card {
            attack: 4,
            health: 5,
            evolved_attack: 6,
            evolved_health: 7,
            ..vanilla(CardKind::Follower, "")
        };
        assert_eq!(CardScorer::DEFAULT.breakdown(&follower).stat_term, 1.5);
    }

    #[test]
    fn test_low_cost_premium_branches() {
        // cost 1, running 3.0 (Storm on a 0-stat spell) > 2
        let cheap = Card {
            cost: 1,
            ..vanilla(CardKind::Spell, "Storm")
        };
        assert_eq!(CardScorer::DEFAULT.breakdown(&cheap).low_cost_premium, 1.5);

        // cost 2, running 3.0 is not > 3
        let two = Card {
            cost: 2,
            ..vanilla(CardKind::Spell, "Storm")
        };
        assert_eq!(CardScorer::DEFAULT.breakdown(&two).low_cost_premium, 0.0);

        // cost 2, running 3.5 > 3
        let two_more = Card {
            cost: 2,
            ..vanilla(CardKind::Spell, "Storm. Restore 2 defense.")
        };
        assert_eq!(CardScorer::DEFAULT.breakdown(&two_more).low_cost_premium, 1.0);

        // cost 3 never qualifies
        let three = vanilla(CardKind::Spell, "Storm. Bane. Ward.");
        assert_eq!(CardScorer::DEFAULT.breakdown(&three).low_cost_premium, 0.0);
    }

    #[test]
    fn test_rarity_and_token_adjustments() {
        let base = vanilla(CardKind::Spell, "");
        let legendary = Card {
            rarity: Rarity::Legendary,
            ..base.clone()
        };
        let gold = Card {
            rarity: Rarity::Gold,
            ..base.clone()
        };
        let silver = Card {
            rarity: Rarity::Silver,
            ..base.clone()
        };
        let token = Card {
            is_token: true,
            ..base.clone()
        };
        assert_eq!(score(&base), 0.0);
        assert_eq!(score(&legendary), 0.5);
        assert_eq!(score(&gold), 0.25);
        assert_eq!(score(&silver), 0.0);
        assert_eq!(score(&token), -1.0);
    }

    #[test]
    fn test_score_may_be_negative() {
        // cost 10 vanilla 1/1: (2 - 21) * 0.5 + (0 - 25) * 0.25
        let card = Card {
            cost: 10,
            ..card(1, "Big Dud")
        };
        assert_eq!(score(&card), -15.75);
    }

    #[test]
    fn test_empty_text_scores_only_stats() {
        let card = card(1, "Vanilla");
        let breakdown = CardScorer::DEFAULT.breakdown(&card);
        assert!(breakdown.keywords.is_empty());
        assert!(breakdown.phrases.is_empty());
        assert_eq!(breakdown.total, breakdown.stat_term);
    }

    #[test]
    fn test_breakdown_total_matches_score() {
        let card = Card {
            cost: 2,
            attack: 2,
            health: 3,
            rarity: Rarity::Gold,
            ..with_text(
                1,
                "Busy",
                "Fanfare: Deal 3 damage to an enemy follower. Last Words: Draw a card. Ward.",
            )
        };
        let breakdown = CardScorer::DEFAULT.breakdown(&card);
        assert_eq!(breakdown.total.to_bits(), score(&card).to_bits());
        let ids = breakdown.keywords.iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, ["ward", "fanfare", "last_words"]);
        let ids = breakdown.phrases.iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, ["deal_damage", "draw_card"]);
    }

    #[test]
    fn test_weight_overrides() {
        let scorer = CardScorer::default()
            .with_weight_overrides(
                &BTreeMap::from([("storm".to_owned(), 10.0)]),
                &BTreeMap::from([("deal_damage".to_owned(), 0.0)]),
            )
            .unwrap();
        let card = vanilla(CardKind::Spell, "Storm. Deal 1 damage. Ward.");
        assert_eq!(scorer.score(&card), 12.0);
        assert_eq!(score(&card), 6.0);
        assert_eq!(scorer.keyword_rules().len(), KEYWORD_RULES.len());
    }

    #[test]
    fn test_unknown_override_id() {
        let err = CardScorer::default()
            .with_weight_overrides(
                &BTreeMap::new(),
                &BTreeMap::from([("storm".to_owned(), 1.0)]),
            )
            .unwrap_err();
        assert_eq!(err.table, RuleTable::Phrase);
        assert_eq!(err.to_string(), "unknown phrase rule id: storm");
    }
}
