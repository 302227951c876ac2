//! Shared parsing utilities.
//!
//! Low-level building blocks used by [`crate::parsers::WhatsAppParser`]:
//! format detection, segmentation at timestamp prefixes, timestamp parsing
//! and the sender/body split.

pub mod whatsapp;

// Re-export commonly used items
pub use whatsapp::{DateFormat, detect_format, parse_timestamp, segments, split_sender};
