//! # Conversational Core
//!
//! Core text-processing building blocks for the conversational platform.
//!
//! ## Key Concepts
//!
//! - **SentimentLabel**: `positivo`, `negativo` or `neutro`
//! - **SentimentClassifier**: the seam through which text is classified
//! - **SentimentAnalyzer**: keyword-membership classifier (positive checked first)
//! - **NlpProcessor**: formats a chat response from a message and its sentiment
//! - **EntityExtractor**: placeholder for future named-entity extraction
//!
//! ## Example
//!
//! ```rust
//! use convo_core::{NlpProcessor, SentimentAnalyzer, SentimentClassifier, SentimentLabel};
//! use std::sync::Arc;
//!
//! let analyzer = SentimentAnalyzer::new();
//! assert_eq!(analyzer.analyze("This is a bad idea."), SentimentLabel::Negative);
//!
//! let processor = NlpProcessor::with_classifier(Arc::new(analyzer));
//! let response = processor.process_message(Some("Isso é uma cadeira."));
//! assert!(response.ends_with("Sentimento: neutro"));
//! ```

pub mod entities;
pub mod error;
pub mod processor;
pub mod sentiment;

pub use entities::*;
pub use error::*;
pub use processor::*;
pub use sentiment::*;
