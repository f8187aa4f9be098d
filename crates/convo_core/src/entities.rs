//! Named-entity extraction.
//!
//! Only a placeholder for now: the extractor echoes its input inside a fixed
//! template so callers can already depend on the interface.

/// Placeholder named-entity extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Returns the simulated extraction result for a text.
    pub fn extract_entities(&self, text: &str) -> String {
        format!("[Simulação] Entidades extraídas de: {text}")
    }
}
