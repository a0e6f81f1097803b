use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of a catalog snapshot.
///
/// Each language is published as a separate catalog file; switching language
/// means loading (and ranking) a different snapshot.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    #[display("en")]
    En,
    /// Traditional Chinese.
    #[display("cht")]
    Cht,
}

impl Language {
    /// Selects the catalog language for a locale tag such as `en-US` or `zh-TW`.
    #[must_use]
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_ascii_lowercase().starts_with("zh") {
            Self::Cht
        } else {
            Self::En
        }
    }

    /// File name the catalog for this language is stored under.
    #[must_use]
    pub const fn catalog_file_name(self) -> &'static str {
        match self {
            Self::En => "cards_en.json",
            Self::Cht => "cards_cht.json",
        }
    }

    /// Language segment used by card image URLs.
    #[must_use]
    pub const fn image_segment(self) -> &'static str {
        match self {
            Self::En => "eng",
            Self::Cht => "cht",
        }
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    /// Accepts `en`/`cht` as well as any locale tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("cht") {
            return Ok(Self::Cht);
        }
        Ok(Self::from_locale(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("zh-TW"), Language::Cht);
        assert_eq!(Language::from_locale("zh"), Language::Cht);
        assert_eq!(Language::from_locale("ZH-hant"), Language::Cht);
        assert_eq!(Language::from_locale("en-US"), Language::En);
        assert_eq!(Language::from_locale("ja"), Language::En);
        assert_eq!(Language::from_locale(""), Language::En);
    }

    #[test]
    fn test_parse() {
        assert_eq!("cht".parse::<Language>(), Ok(Language::Cht));
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("zh-TW".parse::<Language>(), Ok(Language::Cht));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Language::En.catalog_file_name(), "cards_en.json");
        assert_eq!(Language::Cht.catalog_file_name(), "cards_cht.json");
        assert_eq!(Language::En.to_string(), "en");
    }
}
