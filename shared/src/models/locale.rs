use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LANG_COOKIE: &str = "lang";
pub const CSRF_COOKIE: &str = "csrf_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Pt => "Portuguese",
        }
    }

    /// Value written to `document.cookie` when switching language.
    pub fn cookie(&self) -> String {
        format!("{}={}; path=/", LANG_COOKIE, self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

/// Looks up `name` in a `document.cookie` string and percent-decodes it.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_cookie() {
        let jar = "lang=pt; csrf_token=abc%3D%3D; csrf_token_old=zzz";
        assert_eq!(read_cookie(jar, CSRF_COOKIE).as_deref(), Some("abc=="));
        assert_eq!(read_cookie(jar, LANG_COOKIE).as_deref(), Some("pt"));
        assert_eq!(read_cookie(jar, "session"), None);
        assert_eq!(read_cookie("", CSRF_COOKIE), None);
    }

    #[test]
    fn test_prefix_names_do_not_match() {
        assert_eq!(read_cookie("csrf_token_old=zzz", CSRF_COOKIE), None);
    }

    #[test]
    fn test_language_round_trip_and_cookie() {
        assert_eq!("PT".parse::<Language>(), Ok(Language::Pt));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Pt.cookie(), "lang=pt; path=/");
        assert_eq!(Language::default(), Language::En);
    }
}
