//! # API Route Modules
//!
//! - `chat` - `POST /api/chat`, sentiment-tagged echo of a user message.
//! - `health` - `GET /api/health`, liveness report.

pub mod chat;
pub mod health;
