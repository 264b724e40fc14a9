//! Codepoint sequences identifying a single emoji glyph.
//!
//! Emoji metadata spells a glyph as lowercase hexadecimal scalar values joined
//! by hyphens (`1f468-200d-1f4bb`). [`Codepoint`] keeps the parsed scalars and
//! converts between that notation, HTML numeric character references, and the
//! literal glyph text.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Zero width joiner, used to build multi-person and gendered sequences.
pub const ZERO_WIDTH_JOINER: char = '\u{200d}';

/// Variation selector 16, requesting emoji presentation.
pub const EMOJI_SELECTOR: char = '\u{fe0f}';

/// Ordered sequence of Unicode scalar values making up one emoji.
///
/// The lowercased source spelling is kept for display, since it ends up in
/// CSS class names; comparison and hashing only look at the scalar values.
///
/// # Validation
///
/// - At least one segment
/// - Every segment is a hexadecimal Unicode scalar value (no surrogates)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Codepoint {
    scalars: Vec<char>,
    spelling: String,
}

impl Codepoint {
    /// Parses hyphen-joined hexadecimal segments.
    ///
    /// Parsing is case-insensitive; `Display` writes the input back in
    /// lowercase, without changing segment padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use emojigen::models::Codepoint;
    ///
    /// let flag = Codepoint::parse("1F1EC-1F1E7").unwrap();
    /// assert_eq!(flag.to_string(), "1f1ec-1f1e7");
    /// assert_eq!(flag.len(), 2);
    ///
    /// let copyright = Codepoint::parse("a9").unwrap();
    /// assert_eq!(copyright.to_string(), "a9");
    /// assert_eq!(copyright, Codepoint::parse("00A9").unwrap());
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            anyhow::bail!("Codepoint cannot be empty");
        }

        let scalars = value
            .split('-')
            .map(parse_segment)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid codepoint '{value}'"))?;

        Ok(Self {
            scalars,
            spelling: value.to_ascii_lowercase(),
        })
    }

    /// Builds a codepoint from already decoded scalar values.
    ///
    /// Segments are spelled with at least four digits (`00a9`).
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let scalars: Vec<char> = chars.into_iter().collect();
        if scalars.is_empty() {
            anyhow::bail!("Codepoint cannot be empty");
        }
        let spelling = scalars
            .iter()
            .map(|c| format!("{:04x}", u32::from(*c)))
            .collect::<Vec<_>>()
            .join("-");
        Ok(Self { scalars, spelling })
    }

    /// Recovers a codepoint from a run of `&#x...;` references.
    ///
    /// This is the inverse of [`Codepoint::to_html_escapes`].
    pub fn from_html_escapes(escapes: &str) -> Result<Self> {
        let mut scalars = Vec::new();
        let mut rest = escapes.trim();

        while !rest.is_empty() {
            let body = rest
                .strip_prefix("&#x")
                .or_else(|| rest.strip_prefix("&#X"))
                .with_context(|| format!("Expected '&#x' at '{rest}'"))?;
            let end = body
                .find(';')
                .with_context(|| format!("Unterminated character reference at '{rest}'"))?;
            scalars.push(parse_segment(&body[..end])?);
            rest = &body[end + 1..];
        }

        Self::from_chars(scalars)
    }

    /// The individual scalar values.
    pub fn segments(&self) -> &[char] {
        &self.scalars
    }

    /// Number of scalar values in the sequence.
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    /// Always false for a validated codepoint; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// Returns true if the final scalar is `U+FE0F`.
    pub fn ends_with_emoji_selector(&self) -> bool {
        self.scalars.last() == Some(&EMOJI_SELECTOR)
    }

    /// Returns a copy with `U+FE0F` appended, unless it is already the final scalar.
    pub fn with_emoji_selector(&self) -> Self {
        let mut qualified = self.clone();
        if !self.ends_with_emoji_selector() {
            qualified.scalars.push(EMOJI_SELECTOR);
            qualified.spelling.push_str("-fe0f");
        }
        qualified
    }

    /// Converts to one `&#x...;` numeric character reference per segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use emojigen::models::Codepoint;
    ///
    /// let bangbang = Codepoint::parse("203c-fe0f").unwrap();
    /// assert_eq!(bangbang.to_html_escapes(), "&#x203c;&#xfe0f;");
    /// ```
    pub fn to_html_escapes(&self) -> String {
        self.scalars
            .iter()
            .map(|c| format!("&#x{:x};", u32::from(*c)))
            .collect()
    }

    /// The literal glyph text.
    pub fn to_glyph(&self) -> String {
        self.scalars.iter().collect()
    }
}

fn parse_segment(segment: &str) -> Result<char> {
    if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Segment '{segment}' is not hexadecimal");
    }
    let value = u32::from_str_radix(segment, 16)
        .with_context(|| format!("Segment '{segment}' is out of range"))?;
    char::from_u32(value)
        .with_context(|| format!("Segment '{segment}' is not a Unicode scalar value"))
}

impl PartialEq for Codepoint {
    fn eq(&self, other: &Self) -> bool {
        self.scalars == other.scalars
    }
}

impl Eq for Codepoint {}

impl Hash for Codepoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scalars.hash(state);
    }
}

impl PartialOrd for Codepoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Codepoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scalars.cmp(&other.scalars)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling)
    }
}

impl FromStr for Codepoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Codepoint {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Codepoint> for String {
    fn from(value: Codepoint) -> Self {
        value.to_string()
    }
}
