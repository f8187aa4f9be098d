//! Message processing.
//!
//! Combines an incoming chat message with its classified sentiment into the
//! response text returned to the user.

use crate::{SentimentAnalyzer, SentimentClassifier, SentimentLabel};
use std::sync::Arc;
use tracing::debug;

/// Processes chat messages using an injected sentiment classifier.
///
/// Holds no per-call state, so one instance can serve any number of requests.
///
/// # Example
///
/// ```rust
/// use convo_core::NlpProcessor;
///
/// let processor = NlpProcessor::new();
/// let result = processor.process_message(Some("Estou muito feliz hoje!"));
/// assert_eq!(result, "Mensagem processada: Estou muito feliz hoje! Sentimento: positivo");
/// ```
#[derive(Clone)]
pub struct NlpProcessor {
    classifier: Arc<dyn SentimentClassifier>,
}

impl NlpProcessor {
    /// Creates a processor backed by the default keyword classifier.
    pub fn new() -> Self {
        Self::with_classifier(Arc::new(SentimentAnalyzer::new()))
    }

    /// Creates a processor backed by the given classifier.
    pub fn with_classifier(classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self { classifier }
    }

    /// Returns the sentiment of a message; an absent message is neutral.
    pub fn sentiment(&self, message: Option<&str>) -> SentimentLabel {
        match message {
            Some(text) => self.classifier.analyze(text),
            None => SentimentLabel::Neutral,
        }
    }

    /// Processes a message and formats the response text.
    ///
    /// An absent message is treated as the empty string and reported neutral.
    pub fn process_message(&self, message: Option<&str>) -> String {
        let sentiment = self.sentiment(message);
        let text = message.unwrap_or_default();
        debug!(chars = text.chars().count(), %sentiment, "processed message");
        format!("Mensagem processada: {text} Sentimento: {sentiment}")
    }
}

impl Default for NlpProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NlpProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NlpProcessor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_process_message_positive() {
        let processor = NlpProcessor::new();
        let result = processor.process_message(Some("Adorei o novo recurso, muito bom!"));
        assert!(result.contains(
            "Mensagem processada: Adorei o novo recurso, muito bom! Sentimento: positivo"
        ));
    }

    #[test]
    fn test_process_message_negative() {
        let processor = NlpProcessor::new();
        let result = processor.process_message(Some("Não gostei, achei ruim."));
        assert!(result.contains("Mensagem processada: Não gostei, achei ruim. Sentimento: negativo"));
    }

    #[test]
    fn test_process_message_neutral() {
        let processor = NlpProcessor::new();
        let result = processor.process_message(Some("Isso é uma cadeira."));
        assert!(result.contains("Sentimento: neutro"));
    }

    #[test]
    fn test_process_absent_message() {
        let processor = NlpProcessor::new();
        assert_eq!(
            processor.process_message(None),
            "Mensagem processada:  Sentimento: neutro"
        );
    }

    #[test]
    fn test_process_empty_message_matches_absent() {
        let processor = NlpProcessor::new();
        assert_eq!(
            processor.process_message(Some("")),
            processor.process_message(None)
        );
    }

    #[test]
    fn test_injected_classifier() {
        struct AlwaysNegative;

        impl SentimentClassifier for AlwaysNegative {
            fn analyze(&self, _text: &str) -> SentimentLabel {
                SentimentLabel::Negative
            }
        }

        let processor = NlpProcessor::with_classifier(Arc::new(AlwaysNegative));
        assert_eq!(
            processor.process_message(Some("great")),
            "Mensagem processada: great Sentimento: negativo"
        );
        // absent messages bypass the classifier
        assert_eq!(processor.sentiment(None), SentimentLabel::Neutral);
    }
}
