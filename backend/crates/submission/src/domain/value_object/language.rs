//! Language Value Object
//!
//! The closed set of languages the judge accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared submission language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i16)]
pub enum Language {
    #[serde(rename = "c++")]
    Cpp = 0,
    #[serde(rename = "java")]
    Java = 1,
    #[serde(rename = "javascript")]
    JavaScript = 2,
    #[serde(rename = "python")]
    Python = 3,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Cpp,
        Language::Java,
        Language::JavaScript,
        Language::Python,
    ];

    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Tag used on the wire
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Language::Cpp => "c++",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Python => "python",
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.id() == id)
    }

    /// Exact, case-sensitive match on the wire tag
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Language::from_code("c++"), Some(Language::Cpp));
        assert_eq!(Language::from_code("python"), Some(Language::Python));
        assert_eq!(Language::from_code("ruby"), None);
        assert_eq!(Language::from_code("Python"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_id_roundtrip_is_total() {
        for lang in Language::ALL {
            assert_eq!(Language::from_id(lang.id()), Some(lang));
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_id(99), None);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Language::Cpp).unwrap(), r#""c++""#);
        let lang: Language = serde_json::from_str(r#""javascript""#).unwrap();
        assert_eq!(lang, Language::JavaScript);
    }
}
