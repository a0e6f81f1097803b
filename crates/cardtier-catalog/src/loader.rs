//! Normalization of the raw card-list document into a [`Catalog`].
//!
//! The document is the merged output of the official card-list API:
//!
//! ```text
//! {
//!   "metadata": { "tribe_names": { "<id>": "<name>" }, "card_set_names": { ... } },
//!   "card_details": {
//!     "<card id>": { "common": { "name": ..., "class": ..., "cost": ... }, "evo": { ... } }
//!   }
//! }
//! ```
//!
//! Field values are loosely typed (numbers sometimes arrive as strings, text
//! sometimes as null), so every field is coerced with a fallback instead of
//! failing the whole load. Class, type, and rarity ids this build has no name
//! for are kept as `Other(id)` so every record still counts toward the tier
//! cut points.

use std::{collections::BTreeMap, io::Read};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    card::{Card, CardKind, Faction, Rarity},
    catalog::Catalog,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("malformed card catalog JSON")]
    Json(serde_json::Error),
}

/// Switches for the loader's normalization steps.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Keep token cards instead of dropping them.
    pub keep_tokens: bool,
    /// Read evolved attack/health from the `evo` record.
    ///
    /// Off by default: historically these were always zero, and the ranking
    /// heuristics were tuned against that.
    pub evolved_stats: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    metadata: Option<RawMetadata>,
    #[serde(default)]
    card_details: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    tribe_names: Option<Map<String, Value>>,
    #[serde(default)]
    card_set_names: Option<Map<String, Value>>,
}

impl Catalog {
    /// Parses and normalizes a raw catalog document.
    pub fn from_json_str(json: &str, options: LoaderOptions) -> Result<Self, LoadError> {
        let raw: RawCatalog = serde_json::from_str(json).map_err(LoadError::Json)?;
        Ok(Self::from_raw(raw, options))
    }

    /// Reads, parses, and normalizes a raw catalog document.
    pub fn from_reader<R>(reader: R, options: LoaderOptions) -> Result<Self, LoadError>
    where
        R: Read,
    {
        let raw: RawCatalog = serde_json::from_reader(reader).map_err(LoadError::Json)?;
        Ok(Self::from_raw(raw, options))
    }

    /// Normalizes an already parsed raw catalog document.
    #[must_use]
    pub fn from_raw(raw: RawCatalog, options: LoaderOptions) -> Self {
        let metadata = raw.metadata.unwrap_or_default();
        let tribe_names = name_table(metadata.tribe_names.as_ref());
        let set_names = name_table(metadata.card_set_names.as_ref());

        let details = raw.card_details.unwrap_or_default();
        let total = details.len();
        let mut unnamed = 0;
        let mut tokens = 0;
        let mut cards = Vec::with_capacity(total);
        for (key, detail) in &details {
            let card = parse_card(key, detail, options);
            if !(card.faction.is_known() && card.kind.is_known() && card.rarity.is_known()) {
                tracing::warn!(
                    id = card.id,
                    name = %card.name,
                    class = %card.faction,
                    kind = %card.kind,
                    rarity = %card.rarity,
                    "card uses an unnamed class, type, or rarity id"
                );
                unnamed += 1;
            }
            if card.is_token && !options.keep_tokens {
                tokens += 1;
                continue;
            }
            cards.push(card);
        }
        cards.sort_by_key(|card| card.id);

        tracing::debug!(
            total,
            loaded = cards.len(),
            unnamed,
            tokens,
            "normalized card catalog"
        );

        Self::new(cards, tribe_names, set_names)
    }
}

fn parse_card(key: &str, detail: &Value, options: LoaderOptions) -> Card {
    let empty = Map::new();
    let detail_map = detail.as_object().unwrap_or(&empty);
    let common = detail_map
        .get("common")
        .and_then(Value::as_object)
        .unwrap_or(detail_map);
    let evo = detail_map
        .get("evo")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let id = match common.get("card_id") {
        Some(value) if !value.is_null() => coerce_u32(Some(value)),
        _ => coerce_u32(Some(&Value::String(key.to_owned()))),
    };
    let name = coerce_string(common.get("name"));

    let faction: Faction = enum_from_id(coerce_u32(common.get("class")));
    let kind: CardKind = enum_from_id(coerce_u32(common.get("type")));
    let rarity: Rarity = enum_from_id(coerce_u32(common.get("rarity")));

    let tribe = common
        .get("tribes")
        .and_then(Value::as_array)
        .and_then(|tribes| tribes.first())
        .map_or(0, |tribe| coerce_u32(Some(tribe)));

    let (evolved_attack, evolved_health) = if options.evolved_stats {
        (coerce_u32(evo.get("atk")), coerce_u32(evo.get("life")))
    } else {
        (0, 0)
    };

    let is_token = match common.get("is_token") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| (n - 1.0).abs() < f64::EPSILON),
        _ => false,
    };

    Card {
        id,
        name,
        faction,
        kind,
        tribe,
        rarity,
        cost: coerce_u32(common.get("cost")),
        attack: coerce_u32(common.get("atk")),
        health: coerce_u32(common.get("life")),
        evolved_attack,
        evolved_health,
        ability_text: coerce_string(common.get("skill_text")),
        evolved_ability_text: coerce_string(evo.get("skill_text")),
        is_token,
        set_id: coerce_u32(common.get("card_set_id")),
        image_hash: coerce_string(common.get("card_image_hash")),
    }
}

/// Ids past `u8::MAX` saturate; no such id is in use.
fn enum_from_id<T: From<u8>>(id: u32) -> T {
    T::from(u8::try_from(id).unwrap_or(u8::MAX))
}

fn name_table(names: Option<&Map<String, Value>>) -> BTreeMap<u32, String> {
    names
        .into_iter()
        .flatten()
        .filter_map(|(id, name)| Some((id.trim().parse().ok()?, coerce_string(Some(name)))))
        .collect()
}

/// Coerces a JSON number or numeric string to `u32`.
///
/// Fractions are truncated, negatives clamp to 0, and anything unparsable
/// falls back to 0.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coerce_u32(value: Option<&Value>) -> u32 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => Some(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => n.clamp(0.0, f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

/// Coerces a JSON value to a string; null or missing becomes empty.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn catalog_json(details: &Value) -> String {
        json!({
            "metadata": {
                "tribe_names": { "0": "", "12": "Officer" },
                "card_set_names": { "10001": "Legends Rise" },
                "skill_names": {}
            },
            "card_details": details,
        })
        .to_string()
    }

    fn load(details: &Value, options: LoaderOptions) -> Catalog {
        Catalog::from_json_str(&catalog_json(details), options).unwrap()
    }

    #[test]
    fn test_parses_common_and_evo_records() {
        let catalog = load(
            &json!({
                "10001110": {
                    "common": {
                        "card_id": 10_001_110,
                        "name": "Vanguard Captain",
                        "class": 1,
                        "type": 1,
                        "tribes": [12, 4],
                        "rarity": 3,
                        "cost": 2,
                        "atk": 2,
                        "life": 3,
                        "skill_text": "<b>Fanfare</b>: Rally (10) - Gain +1/+1.",
                        "is_token": false,
                        "card_set_id": 10001,
                        "card_image_hash": "abc123"
                    },
                    "evo": { "atk": 4, "life": 5, "skill_text": "<b>Storm</b>" }
                }
            }),
            LoaderOptions::default(),
        );

        let card = &catalog.cards()[0];
        assert_eq!(card.id, 10_001_110);
        assert_eq!(card.name, "Vanguard Captain");
        assert_eq!(card.faction, Faction::Swordcraft);
        assert_eq!(card.kind, CardKind::Follower);
        assert_eq!(card.rarity, Rarity::Gold);
        assert_eq!(card.tribe, 12);
        assert_eq!((card.cost, card.attack, card.health), (2, 2, 3));
        assert_eq!((card.evolved_attack, card.evolved_health), (0, 0));
        assert_eq!(card.evolved_ability_text, "<b>Storm</b>");
        assert_eq!(card.image_hash, "abc123");
        assert_eq!(catalog.tribe_name(card), Some("Officer"));
        assert_eq!(catalog.set_name(card), Some("Legends Rise"));
    }

    #[test]
    fn test_evolved_stats_are_opt_in() {
        let details = json!({
            "1": {
                "common": { "name": "Wyvern", "class": 3, "type": 1, "rarity": 1, "cost": 3, "atk": 3, "life": 3 },
                "evo": { "atk": 5, "life": 5 }
            }
        });
        let card = load(
            &details,
            LoaderOptions {
                evolved_stats: true,
                ..LoaderOptions::default()
            },
        )
        .into_cards()
        .remove(0);
        assert_eq!((card.evolved_attack, card.evolved_health), (5, 5));
    }

    #[test]
    fn test_coerces_loose_field_types() {
        let catalog = load(
            &json!({
                "42": {
                    "common": {
                        "name": null,
                        "class": "6",
                        "type": "2",
                        "rarity": "4",
                        "cost": "3",
                        "atk": -2,
                        "life": 1.9,
                        "skill_text": null,
                        "card_set_id": "oops"
                    }
                }
            }),
            LoaderOptions::default(),
        );

        let card = &catalog.cards()[0];
        assert_eq!(card.id, 42, "id falls back to the map key");
        assert_eq!(card.name, "");
        assert_eq!(card.faction, Faction::Havencraft);
        assert_eq!(card.kind, CardKind::Spell);
        assert_eq!(card.rarity, Rarity::Legendary);
        assert_eq!((card.cost, card.attack, card.health), (3, 0, 1));
        assert_eq!(card.ability_text, "");
        assert_eq!(card.evolved_ability_text, "");
        assert_eq!(card.set_id, 0);
        assert_eq!(card.tribe, 0);
    }

    #[test]
    fn test_detail_without_common_wrapper() {
        let catalog = load(
            &json!({ "7": { "name": "Bare", "class": 0, "type": 3, "rarity": 2, "cost": 1 } }),
            LoaderOptions::default(),
        );
        assert_eq!(catalog.cards()[0].name, "Bare");
        assert_eq!(catalog.cards()[0].kind, CardKind::Amulet);
    }

    #[test]
    fn test_tokens_are_dropped_unless_kept() {
        let details = json!({
            "1": { "common": { "name": "Fairy", "class": 0, "type": 1, "rarity": 1, "is_token": 1 } },
            "2": { "common": { "name": "Crystal", "class": 0, "type": 1, "rarity": 1, "is_token": true } },
            "3": { "common": { "name": "Elf", "class": 0, "type": 1, "rarity": 1, "is_token": 0 } }
        });

        let catalog = load(&details, LoaderOptions::default());
        assert_eq!(
            catalog.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["Elf"]
        );

        let catalog = load(
            &details,
            LoaderOptions {
                keep_tokens: true,
                ..LoaderOptions::default()
            },
        );
        assert_eq!(catalog.len(), 3);
        assert!(catalog.cards()[0].is_token);
        assert!(catalog.cards()[1].is_token);
    }

    #[test]
    fn test_keeps_unnamed_ids_and_sorts_by_id() {
        let catalog = load(
            &json!({
                "30": { "common": { "name": "Later", "class": 7, "type": 1, "rarity": 1 } },
                "10": { "common": { "name": "Earlier", "class": 7, "type": 2, "rarity": 1 } },
                "20": { "common": { "name": "Neutral", "class": 8, "type": 1, "rarity": 1 } },
                "25": { "common": { "name": "Odd type", "class": 2, "type": 9, "rarity": 1 } },
                "26": { "common": { "name": "No rarity", "class": 2, "type": 1 } },
                "28": { "common": { "name": "Huge class", "class": 4000, "type": 1, "rarity": 1 } },
                "27": "not an object"
            }),
            LoaderOptions::default(),
        );
        assert_eq!(
            catalog.iter().map(|c| c.id).collect::<Vec<_>>(),
            [10, 20, 25, 26, 27, 28, 30]
        );

        let by_id = |id| catalog.iter().find(|c| c.id == id).unwrap();
        assert_eq!(by_id(20).faction, Faction::Other(8));
        assert_eq!(by_id(20).faction.to_string(), "Class 8");
        assert_eq!(by_id(25).kind, CardKind::Other(9));
        assert_eq!(by_id(26).rarity, Rarity::Other(0));
        assert_eq!(by_id(28).faction, Faction::Other(u8::MAX));
        assert_eq!(by_id(27).name, "");
    }

    #[test]
    fn test_fractional_token_flag() {
        let details = json!({
            "1": { "common": { "name": "Fairy", "class": 0, "type": 1, "rarity": 1, "is_token": 1.0 } },
            "2": { "common": { "name": "Elf", "class": 0, "type": 1, "rarity": 1, "is_token": 0.0 } },
            "3": { "common": { "name": "Sprite", "class": 0, "type": 1, "rarity": 1, "is_token": "1" } }
        });
        let catalog = load(&details, LoaderOptions::default());
        assert_eq!(
            catalog.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["Elf", "Sprite"]
        );
    }

    #[test]
    fn test_missing_sections_yield_empty_catalog() {
        let catalog = Catalog::from_json_str("{}", LoaderOptions::default()).unwrap();
        assert!(catalog.is_empty());
        let catalog =
            Catalog::from_json_str(r#"{"metadata": null, "card_details": null}"#, LoaderOptions::default())
                .unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = Catalog::from_json_str("[1, 2", LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
        assert_eq!(err.to_string(), "malformed card catalog JSON");
    }
}
