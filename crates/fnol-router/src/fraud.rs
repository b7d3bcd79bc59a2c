//! Fraud keyword scanner

use tracing::debug;

/// Keywords found in one document, in configured order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FraudMatches(Vec<String>);

impl FraudMatches {
    /// True when no keyword matched
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Matched keywords
    pub fn keywords(&self) -> &[String] {
        &self.0
    }

    /// Keywords joined with `", "` for reasoning text
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Case-insensitive substring scan over the whole raw document
///
/// Matching is plain substring search: `"fraudulent"` contains `"fraud"` and
/// `"not suspicious"` still matches `"suspicious"`.
#[derive(Debug, Clone)]
pub struct FraudScanner {
    keywords: Vec<String>,
    lowered: Vec<String>,
}

impl FraudScanner {
    /// Create a scanner over the given keyword list
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        let lowered = keywords.iter().map(|k| k.to_lowercase()).collect();
        Self { keywords, lowered }
    }

    /// Configured keywords
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Every keyword that occurs in `text`, each reported once
    pub fn scan(&self, text: &str) -> FraudMatches {
        let haystack = text.to_lowercase();
        let found: Vec<String> = self
            .keywords
            .iter()
            .zip(&self.lowered)
            .filter(|(_, needle)| haystack.contains(needle.as_str()))
            .map(|(keyword, _)| keyword.clone())
            .collect();

        if !found.is_empty() {
            debug!(keywords = ?found, "fraud keywords matched");
        }

        FraudMatches(found)
    }
}

impl Default for FraudScanner {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FRAUD_KEYWORDS)
    }
}
