//! Keyword-based sentiment classification.
//!
//! The classifier lower-cases its input and looks for substrings from two
//! keyword lists. Positive keywords are checked first, so a text that contains
//! both a positive and a negative keyword is classified as positive. There is
//! no negation handling: "not good" contains "good" and is positive.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keywords that mark a text as positive.
pub const DEFAULT_POSITIVE_KEYWORDS: &[&str] = &[
    "bom",
    "ótimo",
    "excelente",
    "feliz",
    "great",
    "good",
    "happy",
];

/// Keywords that mark a text as negative.
pub const DEFAULT_NEGATIVE_KEYWORDS: &[&str] =
    &["ruim", "péssimo", "triste", "chateado", "bad", "sad"];

/// Sentiment assigned to a piece of text.
///
/// Serialized and displayed with the Portuguese labels used on the wire
/// (`positivo`, `negativo`, `neutro`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// At least one positive keyword matched
    #[serde(rename = "positivo")]
    Positive,
    /// No positive keyword matched, at least one negative keyword did
    #[serde(rename = "negativo")]
    Negative,
    /// No keyword matched
    #[serde(rename = "neutro")]
    Neutral,
}

impl SentimentLabel {
    /// Returns the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positivo",
            SentimentLabel::Negative => "negativo",
            SentimentLabel::Neutral => "neutro",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "positivo" => Ok(SentimentLabel::Positive),
            "negativo" => Ok(SentimentLabel::Negative),
            "neutro" => Ok(SentimentLabel::Neutral),
            other => Err(CoreError::UnknownLabel(other.to_string())),
        }
    }
}

/// Anything that can assign a sentiment label to text.
///
/// The message processor depends on this trait rather than on a concrete
/// classifier, so alternative implementations can be injected.
///
/// # Example
///
/// ```rust
/// use convo_core::{SentimentClassifier, SentimentLabel};
///
/// struct AlwaysNeutral;
///
/// impl SentimentClassifier for AlwaysNeutral {
///     fn analyze(&self, _text: &str) -> SentimentLabel {
///         SentimentLabel::Neutral
///     }
/// }
///
/// assert_eq!(AlwaysNeutral.analyze("anything"), SentimentLabel::Neutral);
/// ```
pub trait SentimentClassifier: Send + Sync {
    /// Classifies a text. Never fails; empty text is neutral.
    fn analyze(&self, text: &str) -> SentimentLabel;
}

/// Classifier backed by fixed positive and negative keyword lists.
///
/// # Example
///
/// ```rust
/// use convo_core::{SentimentAnalyzer, SentimentClassifier, SentimentLabel};
///
/// let analyzer = SentimentAnalyzer::new();
/// assert_eq!(analyzer.analyze("Estou muito feliz hoje!"), SentimentLabel::Positive);
/// assert_eq!(analyzer.analyze("Isso é uma cadeira."), SentimentLabel::Neutral);
/// ```
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentAnalyzer {
    /// Creates an analyzer with the default Portuguese/English keyword lists.
    pub fn new() -> Self {
        Self {
            positive: DEFAULT_POSITIVE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            negative: DEFAULT_NEGATIVE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    /// Creates an analyzer from custom keyword lists.
    ///
    /// Keywords are trimmed and lower-cased. Both lists must be non-empty and
    /// must not contain blank entries.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptyKeywordList` or `CoreError::BlankKeyword`.
    pub fn with_keywords<P, N>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Ok(Self {
            positive: normalize_keywords("positive", positive)?,
            negative: normalize_keywords("negative", negative)?,
        })
    }

    /// Returns the positive keywords.
    pub fn positive_keywords(&self) -> &[String] {
        &self.positive
    }

    /// Returns the negative keywords.
    pub fn negative_keywords(&self) -> &[String] {
        &self.negative
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier for SentimentAnalyzer {
    fn analyze(&self, text: &str) -> SentimentLabel {
        let text_lower = text.to_lowercase();

        if self.positive.iter().any(|k| text_lower.contains(k.as_str())) {
            SentimentLabel::Positive
        } else if self.negative.iter().any(|k| text_lower.contains(k.as_str())) {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

fn normalize_keywords<I>(list: &str, keywords: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut normalized = Vec::new();
    for (position, keyword) in keywords.into_iter().enumerate() {
        let keyword = keyword.as_ref().trim().to_lowercase();
        if keyword.is_empty() {
            return Err(CoreError::BlankKeyword {
                list: list.to_string(),
                position,
            });
        }
        normalized.push(keyword);
    }

    if normalized.is_empty() {
        return Err(CoreError::EmptyKeywordList(list.to_string()));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positive_sentiment() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.analyze("Estou muito feliz hoje!"), SentimentLabel::Positive);
        assert_eq!(analyzer.analyze("This is a great project."), SentimentLabel::Positive);
        assert_eq!(analyzer.analyze("Excelente trabalho!"), SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_sentiment() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(
            analyzer.analyze("Estou muito triste com isso."),
            SentimentLabel::Negative
        );
        assert_eq!(analyzer.analyze("This is a bad idea."), SentimentLabel::Negative);
        assert_eq!(analyzer.analyze("Péssimo resultado."), SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_sentiment() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.analyze("O céu é azul."), SentimentLabel::Neutral);
        assert_eq!(analyzer.analyze("The cat sat on the mat."), SentimentLabel::Neutral);
        assert_eq!(analyzer.analyze("Isso é uma cadeira."), SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.analyze(""), SentimentLabel::Neutral);
    }

    #[test]
    fn test_positive_wins_tie() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(
            analyzer.analyze("good and bad at the same time"),
            SentimentLabel::Positive
        );
        assert_eq!(analyzer.analyze("feliz mas triste"), SentimentLabel::Positive);
    }

    #[test]
    fn test_negation_is_not_handled() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.analyze("not good"), SentimentLabel::Positive);
    }

    #[test]
    fn test_case_insensitive() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.analyze("HAPPY DAYS"), SentimentLabel::Positive);
        assert_eq!(analyzer.analyze("PÉSSIMO"), SentimentLabel::Negative);
    }

    #[test]
    fn test_substring_match() {
        // "bom" inside "bombom" still counts
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.analyze("Comprei um bombom"), SentimentLabel::Positive);
    }

    #[test]
    fn test_custom_keywords() {
        let analyzer = SentimentAnalyzer::with_keywords(["  Yay "], ["meh"]).unwrap();
        assert_eq!(analyzer.positive_keywords(), &["yay".to_string()]);
        assert_eq!(analyzer.analyze("YAY!"), SentimentLabel::Positive);
        assert_eq!(analyzer.analyze("meh"), SentimentLabel::Negative);
        assert_eq!(analyzer.analyze("good"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_keyword_list_rejected() {
        let err = SentimentAnalyzer::with_keywords(Vec::<String>::new(), ["bad"]).unwrap_err();
        assert_eq!(err, CoreError::EmptyKeywordList("positive".to_string()));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = SentimentAnalyzer::with_keywords(["good"], ["bad", "   "]).unwrap_err();
        assert_eq!(
            err,
            CoreError::BlankKeyword {
                list: "negative".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_label_display_and_parse() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positivo");
        assert_eq!(SentimentLabel::Negative.to_string(), "negativo");
        assert_eq!(SentimentLabel::Neutral.to_string(), "neutro");
        assert_eq!("Neutro".parse::<SentimentLabel>().unwrap(), SentimentLabel::Neutral);
        assert!("happy".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_label_serde() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negativo\"");
        let label: SentimentLabel = serde_json::from_str("\"positivo\"").unwrap();
        assert_eq!(label, SentimentLabel::Positive);
    }
}
