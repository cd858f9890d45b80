//! Pipeline options.

use serde::{Deserialize, Serialize};

/// Type keywords kept by default: primary and secondary school leads.
pub const DEFAULT_TYPE_KEYWORDS: [&str; 2] = ["Médio", "Fundamental"];

/// Options for [`clean_campaign`](crate::clean_campaign).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Substrings accepted in the KPI type column, compared case-insensitively.
    ///
    /// An empty list (or a list of blank entries) disables the type filter.
    pub type_keywords: Vec<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            type_keywords: DEFAULT_TYPE_KEYWORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl PipelineOptions {
    /// Replace the type keywords.
    #[must_use]
    pub fn with_type_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the matcher used by the type filter.
    pub(crate) fn type_matcher(&self) -> TypeMatcher {
        TypeMatcher {
            keywords: self
                .type_keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

/// Lower-cased keyword list.
#[derive(Debug, Clone)]
pub(crate) struct TypeMatcher {
    keywords: Vec<String>,
}

impl TypeMatcher {
    pub(crate) fn is_enabled(&self) -> bool {
        !self.keywords.is_empty()
    }

    pub(crate) fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.keywords.iter().any(|k| value.contains(k.as_str()))
    }
}
