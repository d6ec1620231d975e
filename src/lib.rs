//! pagelens: webpage privacy and security analyzer.
//!
//! Fetches a single page with headless Chromium, extracts client-side
//! privacy signals (scripts, cookies, storage, forms), flags trackers and
//! PII exposure with keyword heuristics, and forwards the aggregate record
//! to an LLM backend for a structured risk assessment.

pub mod analyzer;
pub mod api;
pub mod browser;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod llm;
pub mod models;
pub mod reporting;
pub mod utils;
