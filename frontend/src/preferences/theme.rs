use std::fmt;
use std::str::FromStr;

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

/// Parse a persisted string through the type's serde names.
fn parse_persisted<'de, T: Deserialize<'de>>(s: &'de str) -> Result<T, UnknownValue> {
    let deserializer: StrDeserializer<'de, ValueError> = s.into_deserializer();
    T::deserialize(deserializer).map_err(|_| UnknownValue(s.to_string()))
}

impl FromStr for Theme {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_persisted(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Site languages. The persisted value is the English name of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Language {
    #[default]
    English,
    Farsi,
    Chinese,
    Russian,
    Ukrainian,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Farsi,
        Language::Chinese,
        Language::Russian,
        Language::Ukrainian,
        Language::Hindi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Farsi => "Farsi",
            Language::Chinese => "Chinese",
            Language::Russian => "Russian",
            Language::Ukrainian => "Ukrainian",
            Language::Hindi => "Hindi",
        }
    }

    /// Name shown in the language picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Farsi => "فارسی",
            Language::Chinese => "中文",
            Language::Russian => "Русский",
            Language::Ukrainian => "Українська",
            Language::Hindi => "हिन्दी",
        }
    }

    /// Body class that selects the font stack.
    pub fn body_class(&self) -> &'static str {
        match self {
            Language::English => "lang-english",
            Language::Farsi => "lang-farsi",
            Language::Chinese => "lang-chinese",
            Language::Russian => "lang-russian",
            Language::Ukrainian => "lang-ukrainian",
            Language::Hindi => "lang-hindi",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::Farsi => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Position in [`Language::ALL`], also the column in translation tables.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_persisted(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn persisted_strings_parse_back() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
        assert!("Dark".parse::<Theme>().is_err());
        assert!("farsi".parse::<Language>().is_err());
    }

    #[test]
    fn serde_names_match_storage_format() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("Ukrainian".parse::<Language>(), Ok(Language::Ukrainian));
        assert_eq!(
            "".parse::<Language>(),
            Err(UnknownValue(String::new()))
        );
        assert_eq!(
            " dark".parse::<Theme>(),
            Err(UnknownValue(" dark".to_string()))
        );
    }

    #[test]
    fn only_farsi_is_right_to_left() {
        for lang in Language::ALL {
            let expected = if lang == Language::Farsi {
                TextDirection::Rtl
            } else {
                TextDirection::Ltr
            };
            assert_eq!(lang.direction(), expected);
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.index(), i);
        }
    }
}
