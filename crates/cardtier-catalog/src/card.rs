use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A numeric id or name that does not belong to one of the card enumerations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown {kind}: {value}")]
pub struct UnknownVariantError {
    kind: &'static str,
    value: String,
}

impl UnknownVariantError {
    fn new(kind: &'static str, value: impl fmt::Display) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Generates the id/name plumbing shared by the card enumerations.
///
/// Every enumeration serializes as its numeric id. Ids without a named
/// variant are kept as `Other(id)` and display as `"<label> <id>"`, so a
/// catalog newer than this table still loads in full. Parsing from text
/// accepts only the named variants, by id or (case-insensitive) name.
macro_rules! card_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:literal, other $label:literal {
            $($(#[$vmeta:meta])* $variant:ident = $id:literal => $display:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "u8", into = "u8")]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
            /// An id this build has no name for.
            Other(u8),
        }

        impl $name {
            /// The named variants, in id order.
            pub const ALL: &[Self] = &[$(Self::$variant,)+];

            #[must_use]
            pub const fn id(self) -> u8 {
                match self {
                    $(Self::$variant => $id,)+
                    Self::Other(id) => id,
                }
            }

            /// Looks up a named variant.
            #[must_use]
            pub const fn from_id(id: u8) -> Option<Self> {
                match id {
                    $($id => Some(Self::$variant),)+
                    _ => None,
                }
            }

            #[must_use]
            pub const fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($display),)+
                    Self::Other(_) => None,
                }
            }

            #[must_use]
            pub const fn is_known(self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => f.pad(name),
                    None => f.pad(&format!("{} {}", $label, self.id())),
                }
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.id()
                    .cmp(&other.id())
                    .then_with(|| other.is_known().cmp(&self.is_known()))
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.id()
            }
        }

        impl From<u8> for $name {
            fn from(id: u8) -> Self {
                match Self::from_id(id) {
                    Some(known) => known,
                    None => Self::Other(id),
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if let Ok(id) = s.parse::<u8>() {
                    return Self::from_id(id).ok_or_else(|| UnknownVariantError::new($kind, id));
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().is_some_and(|name| name.eq_ignore_ascii_case(s)))
                    .ok_or_else(|| UnknownVariantError::new($kind, s))
            }
        }
    };
}

card_enum! {
    /// The class ("craft") a card belongs to.
    pub enum Faction as "faction", other "Class" {
        Forestcraft = 0 => "Forestcraft",
        Swordcraft = 1 => "Swordcraft",
        Runecraft = 2 => "Runecraft",
        Dragoncraft = 3 => "Dragoncraft",
        Shadowcraft = 4 => "Shadowcraft",
        Bloodcraft = 5 => "Bloodcraft",
        Havencraft = 6 => "Havencraft",
        Portalcraft = 7 => "Portalcraft",
    }
}

card_enum! {
    /// Card category.
    pub enum CardKind as "card kind", other "Type" {
        /// A creature.
        Follower = 1 => "Follower",
        Spell = 2 => "Spell",
        /// A persistent effect.
        Amulet = 3 => "Amulet",
        /// The evolved form of a creature.
        EvolvedFollower = 4 => "Follower (Evolved)",
    }
}

card_enum! {
    /// Card rarity, ordered by id: `Bronze < Silver < Gold < Legendary`.
    pub enum Rarity as "rarity", other "Rarity" {
        Bronze = 1 => "Bronze",
        Silver = 2 => "Silver",
        Gold = 3 => "Gold",
        Legendary = 4 => "Legendary",
    }
}

impl CardKind {
    /// Returns `true` for kinds whose attack/health are meaningful.
    #[must_use]
    pub const fn is_follower(self) -> bool {
        matches!(self, Self::Follower | Self::EvolvedFollower)
    }
}

/// A single card definition from a catalog snapshot.
///
/// Ability texts are kept raw (they may contain markup); stripping happens
/// only when the text is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub faction: Faction,
    pub kind: CardKind,
    /// Tribe id, `0` for none.
    pub tribe: u32,
    pub rarity: Rarity,
    pub cost: u32,
    pub attack: u32,
    pub health: u32,
    pub evolved_attack: u32,
    pub evolved_health: u32,
    pub ability_text: String,
    pub evolved_ability_text: String,
    pub is_token: bool,
    pub set_id: u32,
    #[serde(default)]
    pub image_hash: String,
}

impl Card {
    /// Base and evolved ability text joined by a single space.
    ///
    /// This is the string searched by ability-based scoring and archetype
    /// affinity.
    #[must_use]
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.ability_text, self.evolved_ability_text)
    }
}
