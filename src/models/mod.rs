//! Data models for emoji metadata.
//!
//! This module contains the core data structures used throughout the generator.
//! Models are independent of the input format and of the rendered artifacts.

pub mod category;
pub mod codepoint;
pub mod emoji;
pub mod groups;
pub mod presentation;
pub mod skin_tone;

// Re-export all model types
pub use category::{Category, CATEGORIES};
pub use codepoint::Codepoint;
pub use emoji::{Emoji, Gender, GenderMarker};
pub use groups::EmojiGroups;
pub use presentation::{is_text_presentation, Representation, TEXT_PRESENTATION};
pub use skin_tone::{SkinTone, MAX_SKIN_TONE, SKIN_TONES};
