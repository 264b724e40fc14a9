//! Parsing of emoji metadata sources.
//!
//! This module reads the JSON metadata files in either supported layout and
//! turns them into [`Emoji`](crate::models::Emoji) records.

pub mod emoji_json;

// Re-export commonly used items
pub use emoji_json::{load, parse_emoji_json, EmojiSource, InputFormat, LoadError};
