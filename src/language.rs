//! Supported output languages and `--lang` resolution.

use std::fmt;

use crate::selection::{Resolved, SelectionWarning, ValueSource, non_empty};

/// Languages a commit message can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Portuguese,
    Spanish,
    French,
    German,
    Chinese,
    Japanese,
    Russian,
}

impl Language {
    /// All supported languages, in listing order.
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Portuguese,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
        Language::Japanese,
        Language::Russian,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Russian => "ru",
        }
    }

    /// Name of the language in that language, as used in the prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Chinese => "中文",
            Language::Japanese => "日本語",
            Language::Russian => "Русский",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("Unsupported language code: {}", s))
    }
}

/// Pick the output language: `--lang` flag, then `AI_COMMIT_LANG`, then `default`.
///
/// An unsupported flag value warns and falls through to the environment.
/// An unsupported environment value warns and uses `default`.
pub fn resolve_language(
    flag: Option<&str>,
    env: Option<&str>,
    default: Language,
) -> Resolved<Language> {
    let mut warnings = Vec::new();

    if let Some(value) = non_empty(flag) {
        match value.parse::<Language>() {
            Ok(lang) => return Resolved::new(lang, warnings),
            Err(_) => warnings.push(SelectionWarning {
                kind: "language",
                source: ValueSource::Flag,
                value: value.to_string(),
                fallback: "Using configured language".to_string(),
            }),
        }
    }

    let Some(value) = non_empty(env) else {
        return Resolved::new(default, warnings);
    };

    match value.parse::<Language>() {
        Ok(lang) => Resolved::new(lang, warnings),
        Err(_) => {
            warnings.push(SelectionWarning {
                kind: "language",
                source: ValueSource::Environment,
                value: value.to_string(),
                fallback: format!("Using {}", default.display_name()),
            });
            Resolved::new(default, warnings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_parse_back() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PT".parse::<Language>().unwrap(), Language::Portuguese);
        assert_eq!(" ja ".parse::<Language>().unwrap(), Language::Japanese);
    }

    #[test]
    fn test_flag_wins_over_env() {
        let resolved = resolve_language(Some("de"), Some("fr"), Language::English);
        assert_eq!(resolved.value, Language::German);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_env_used_without_flag() {
        let resolved = resolve_language(None, Some("zh"), Language::English);
        assert_eq!(resolved.value, Language::Chinese);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_default_without_flag_or_env() {
        let resolved = resolve_language(Some(""), Some(""), Language::English);
        assert_eq!(resolved.value, Language::English);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_invalid_flag_falls_through_to_env() {
        let resolved = resolve_language(Some("xx"), Some("es"), Language::English);
        assert_eq!(resolved.value, Language::Spanish);
        assert_eq!(resolved.warnings.len(), 1);
        assert_eq!(resolved.warnings[0].source, ValueSource::Flag);
        assert_eq!(resolved.warnings[0].value, "xx");
    }

    #[test]
    fn test_invalid_flag_and_no_env_uses_english() {
        let resolved = resolve_language(Some("xx"), None, Language::English);
        assert_eq!(resolved.value, Language::English);
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn test_invalid_env_warns_and_uses_default() {
        let resolved = resolve_language(None, Some("klingon"), Language::French);
        assert_eq!(resolved.value, Language::French);
        assert_eq!(resolved.warnings.len(), 1);
        assert_eq!(resolved.warnings[0].source, ValueSource::Environment);
        assert!(resolved.warnings[0].to_string().contains("Français"));
    }

    #[test]
    fn test_always_resolves_to_supported_code() {
        let inputs = [
            None,
            Some(""),
            Some("en"),
            Some("ru"),
            Some("xx"),
            Some("EN"),
            Some("english"),
        ];
        for flag in inputs {
            for env in inputs {
                for default in Language::ALL {
                    let resolved = resolve_language(flag, env, default);
                    assert!(Language::ALL.contains(&resolved.value));
                }
            }
        }
    }
}
