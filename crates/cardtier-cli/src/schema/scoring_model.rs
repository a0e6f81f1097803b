use std::collections::BTreeMap;

use cardtier_evaluator::scoring::CardScorer;
use serde::{Deserialize, Serialize};

/// Rule weight overrides loaded with `--weights`.
///
/// ```json
/// {
///   "name": "storm-heavy",
///   "keyword_weights": { "storm": 4.0, "ward": 1.5 },
///   "phrase_weights": { "draw_card": 1.5 }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoringModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub keyword_weights: BTreeMap<String, f32>,
    #[serde(default)]
    pub phrase_weights: BTreeMap<String, f32>,
}

impl ScoringModel {
    pub(crate) fn to_scorer(&self) -> anyhow::Result<CardScorer> {
        let scorer = CardScorer::default()
            .with_weight_overrides(&self.keyword_weights, &self.phrase_weights)?;
        Ok(scorer)
    }
}

#[cfg(test)]
mod tests {
    use cardtier_catalog::{Card, CardKind, Faction, Rarity};

    use super::*;

    fn spell(text: &str) -> Card {
        Card {
            id: 1,
            name: "Spell".to_owned(),
            faction: Faction::Runecraft,
            kind: CardKind::Spell,
            tribe: 0,
            rarity: Rarity::Bronze,
            cost: 4,
            attack: 0,
            health: 0,
            evolved_attack: 0,
            evolved_health: 0,
            ability_text: text.to_owned(),
            evolved_ability_text: String::new(),
            is_token: false,
            set_id: 0,
            image_hash: String::new(),
        }
    }

    #[test]
    fn test_parse_and_apply() {
        let model: ScoringModel = serde_json::from_str(
            r#"{ "name": "test", "keyword_weights": { "spellboost": 3.0 } }"#,
        )
        .unwrap();
        assert_eq!(model.name, "test");
        assert!(model.phrase_weights.is_empty());

        let scorer = model.to_scorer().unwrap();
        assert_eq!(scorer.score(&spell("Spellboost: Deal 1 damage.")), 4.0);
    }

    #[test]
    fn test_empty_model_is_default() {
        let model: ScoringModel = serde_json::from_str("{}").unwrap();
        assert_eq!(model.to_scorer().unwrap(), CardScorer::default());
    }

    #[test]
    fn test_unknown_rule_is_error() {
        let model: ScoringModel =
            serde_json::from_str(r#"{ "phrase_weights": { "no_such_rule": 1.0 } }"#).unwrap();
        let err = model.to_scorer().unwrap_err();
        assert!(err.to_string().contains("no_such_rule"));
    }
}
