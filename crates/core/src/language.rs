//! Display languages
//!
//! The classifier always matches English, Devanagari Hindi and Hinglish
//! keywords together; the selected language only changes what the shop owner
//! is shown.

use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "hi")]
    Hindi,
    /// Hindi vocabulary written in Latin script, mixed with English
    Hinglish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Hindi, Language::English, Language::Hinglish];

    /// Short code used in settings and URLs
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Hinglish => "hinglish",
        }
    }

    /// Parse a language code, accepting a few common spellings
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "hi" | "hindi" => Some(Self::Hindi),
            "hinglish" | "hi-latn" => Some(Self::Hinglish),
            _ => None,
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            Self::Hindi => "नमस्ते! आज क्या काम है?",
            Self::Hinglish => "Namaste! Aaj kya kaam hai?",
            Self::English => "Hello! What would you like to do today?",
        }
    }

    /// Sample utterances to show next to the microphone button
    pub fn example_commands(&self) -> [&'static str; 3] {
        match self {
            Self::Hindi => [
                "मैंने 500 लिया रमेश से",
                "500 दिया सुरेश को",
                "10 आटा स्टॉक में जोड़ो",
            ],
            Self::Hinglish => [
                "Maine 500 liya Ramesh se",
                "500 diya Suresh ko",
                "2 kg chawal becha",
            ],
            Self::English => [
                "I received 500 from Ramesh",
                "I paid 500 to Suresh",
                "Add 10 atta to stock",
            ],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
