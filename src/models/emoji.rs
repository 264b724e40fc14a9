//! Emoji metadata records.

use crate::models::codepoint::{EMOJI_SELECTOR, ZERO_WIDTH_JOINER};
use crate::models::presentation::{is_text_presentation, Representation};
use crate::models::Codepoint;
use serde::{Deserialize, Serialize};

const FEMALE_SIGN: char = '\u{2640}';
const MALE_SIGN: char = '\u{2642}';

/// Explicit gender of a gendered emoji form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Man / male sign form
    Male,
    /// Woman / female sign form
    Female,
}

/// What a record says about gender.
///
/// Sources distinguish "no gender field" from "gender field present but
/// null". The latter marks a neutral form that has gendered counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderMarker {
    /// The record has no gender field
    #[default]
    Unmarked,
    /// The gender field is present and null
    Neutral,
    /// The record is an explicitly gendered form
    Gendered(Gender),
}

/// One emoji record from the metadata source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    /// Identifier from the source (the object key, or the codepoint)
    pub id: String,
    /// Codepoint as listed in the source
    pub codepoint: Codepoint,
    /// Explicit fully-qualified codepoint, when the source provides one
    pub fully_qualified: Option<Codepoint>,
    /// Human readable name (e.g., "grinning face with smiling eyes")
    pub name: String,
    /// Primary shortname, including delimiters (e.g., ":smile:")
    pub shortname: Option<String>,
    /// All shortname aliases, including delimiters
    pub shortnames: Vec<String>,
    /// Category identifier
    pub category: String,
    /// Default presentation hint
    pub representation: Representation,
    /// Gender information
    pub gender: GenderMarker,
    /// Tone identifier (1-5) when this record is a skin tone variant
    pub skin_tone: Option<u8>,
    /// Whether skin tone variants of this record exist
    pub has_skin_tones: bool,
}

impl Emoji {
    /// Creates a record with the given codepoint and category and default metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use emojigen::models::{Codepoint, Emoji};
    ///
    /// let smile = Emoji::new(Codepoint::parse("1f604").unwrap(), "people")
    ///     .with_shortnames([":smile:"]);
    /// assert_eq!(smile.primary_shortname(), ":smile:");
    /// ```
    pub fn new(codepoint: Codepoint, category: impl Into<String>) -> Self {
        Self {
            id: codepoint.to_string(),
            codepoint,
            fully_qualified: None,
            name: String::new(),
            shortname: None,
            shortnames: Vec::new(),
            category: category.into(),
            representation: Representation::default(),
            gender: GenderMarker::default(),
            skin_tone: None,
            has_skin_tones: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the shortname aliases.
    pub fn with_shortnames<I, S>(mut self, shortnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shortnames = shortnames.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the presentation hint.
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Sets the gender marker.
    pub fn with_gender(mut self, gender: GenderMarker) -> Self {
        self.gender = gender;
        self
    }

    /// Marks the record as the given skin tone variant.
    pub fn with_skin_tone(mut self, tone: u8) -> Self {
        self.skin_tone = Some(tone);
        self
    }

    /// Marks the record as having skin tone variants.
    pub fn with_skin_tone_variants(mut self) -> Self {
        self.has_skin_tones = true;
        self
    }

    /// The shortname shown in the picker: the primary one, else the first alias.
    pub fn primary_shortname(&self) -> &str {
        self.shortname
            .as_deref()
            .or_else(|| self.shortnames.first().map(String::as_str))
            .unwrap_or_default()
    }

    /// Whether the glyph needs `U+FE0F` to render in emoji style.
    pub fn needs_emoji_selector(&self) -> bool {
        self.representation == Representation::TextDefault
            || is_text_presentation(&self.codepoint)
    }

    /// The codepoint used for display and lookup tables.
    ///
    /// Starts from the explicit fully-qualified codepoint if the source has
    /// one, and appends the emoji variation selector when the glyph needs it.
    pub fn qualified(&self) -> Codepoint {
        let base = self.fully_qualified.as_ref().unwrap_or(&self.codepoint);
        if self.needs_emoji_selector() {
            base.with_emoji_selector()
        } else {
            base.clone()
        }
    }

    /// The tone attribute for the picker, if any.
    ///
    /// `0` marks a base emoji that has tone variants; `1`-`5` mark the variants.
    pub fn tone_marker(&self) -> Option<u8> {
        self.skin_tone
            .or_else(|| self.has_skin_tones.then_some(0))
    }

    /// Codepoint with gender signs and emoji selectors removed.
    ///
    /// Gendered forms such as `1f46e-200d-2642-fe0f` share their base identity
    /// with the neutral form `1f46e`.
    pub fn base_identity(&self) -> Codepoint {
        let segments = self.codepoint.segments();
        let mut base = Vec::with_capacity(segments.len());
        let mut i = 0;

        while i < segments.len() {
            let c = segments[i];
            let next = segments.get(i + 1).copied();
            if c == ZERO_WIDTH_JOINER && matches!(next, Some(FEMALE_SIGN | MALE_SIGN)) {
                i += 2;
                continue;
            }
            if c != EMOJI_SELECTOR {
                base.push(c);
            }
            i += 1;
        }

        Codepoint::from_chars(base).unwrap_or_else(|_| self.codepoint.clone())
    }
}
