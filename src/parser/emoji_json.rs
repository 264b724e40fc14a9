//! Emoji metadata JSON parser.
//!
//! Two source layouts are supported, selected explicitly by [`InputFormat`]:
//!
//! - `grouped`: an object mapping category id to an array of records
//!   (the layout of a generated `groups.json`)
//! - `flat`: an object mapping emoji id to a record that names its category
//!   (the layout of an `emoji.json` metadata dump)
//!
//! Object key order is preserved, so records keep their source order.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{
    Codepoint, Emoji, Gender, GenderMarker, Representation, SkinTone, MAX_SKIN_TONE,
};

/// Layout of the metadata source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Category id -> array of records
    #[default]
    Grouped,
    /// Emoji id -> record with a `category` field
    Flat,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grouped => write!(f, "grouped"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Failure to load a metadata source.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io {
        /// Path of the source file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid metadata
    Parse {
        /// Path of the source file
        path: PathBuf,
        /// What was wrong, with context
        source: anyhow::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "Failed to parse {}: {source:#}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(&**source),
        }
    }
}

/// A loaded metadata source.
#[derive(Debug, Clone)]
pub struct EmojiSource {
    /// Layout the source was read as
    pub format: InputFormat,
    /// Records in source order
    pub emojis: Vec<Emoji>,
}

/// `code_points` object of emoji.json style records.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawCodePoints {
    base: Option<Codepoint>,
    fully_qualified: Option<Codepoint>,
    #[serde(default)]
    greedy_matches: Vec<Codepoint>,
}

/// A record as it appears in either source layout.
#[derive(Debug, Clone, Deserialize)]
struct RawEmoji {
    #[serde(default)]
    codepoint: Option<Codepoint>,
    #[serde(default)]
    codepoint_fully_qualified: Option<Codepoint>,
    #[serde(default)]
    code_points: Option<RawCodePoints>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    shortname: Option<String>,
    #[serde(default)]
    shortnames: Vec<String>,
    #[serde(default)]
    shortname_alternates: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    representation: Representation,
    #[serde(default, deserialize_with = "deserialize_present")]
    gender: Option<Option<Gender>>,
    #[serde(default)]
    skin_tone: Option<u8>,
    #[serde(default)]
    diversity: Option<Codepoint>,
    #[serde(default)]
    has_skin_tones: bool,
    #[serde(default)]
    diversity_children: Vec<Value>,
}

/// Distinguishes a present `null` from a missing field.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl RawEmoji {
    fn into_emoji(self, id: &str, category: String) -> Result<Emoji> {
        let mut code_points = self.code_points.unwrap_or_default();

        // The longest match wins over the listed fully-qualified form
        let fully_qualified = if code_points.greedy_matches.is_empty() {
            self.codepoint_fully_qualified.or(code_points.fully_qualified)
        } else {
            Some(code_points.greedy_matches.swap_remove(0))
        };

        let codepoint = match self.codepoint.or(code_points.base) {
            Some(codepoint) => codepoint,
            None => Codepoint::parse(id).context("Record has no codepoint")?,
        };

        let skin_tone = match (self.skin_tone, self.diversity) {
            (Some(tone), _) => {
                if !(1..=MAX_SKIN_TONE).contains(&tone) {
                    anyhow::bail!("Skin tone {tone} is outside 1-{MAX_SKIN_TONE}");
                }
                Some(tone)
            }
            (None, Some(modifier)) => {
                let tone = modifier
                    .segments()
                    .first()
                    .and_then(|c| SkinTone::from_modifier(*c))
                    .with_context(|| format!("'{modifier}' is not a skin tone modifier"))?;
                Some(tone.id)
            }
            (None, None) => None,
        };

        let gender = match self.gender {
            None => GenderMarker::Unmarked,
            Some(None) => GenderMarker::Neutral,
            Some(Some(gender)) => GenderMarker::Gendered(gender),
        };

        let mut shortnames = self.shortnames;
        if shortnames.is_empty() {
            shortnames.extend(self.shortname.iter().cloned());
        }
        for alternate in self.shortname_alternates {
            if !shortnames.contains(&alternate) {
                shortnames.push(alternate);
            }
        }

        Ok(Emoji {
            id: id.to_string(),
            codepoint,
            fully_qualified,
            name: self.name,
            shortname: self.shortname,
            shortnames,
            category,
            representation: self.representation,
            gender,
            skin_tone,
            has_skin_tones: self.has_skin_tones || !self.diversity_children.is_empty(),
        })
    }
}

/// Parses metadata source text.
///
/// # Arguments
///
/// * `content` - JSON text
/// * `format` - Layout of the source
///
/// # Returns
///
/// Records in source order. In the grouped layout, a record's category is
/// the key of the array it appears in.
pub fn parse_emoji_json(content: &str, format: InputFormat) -> Result<Vec<Emoji>> {
    let root: Map<String, Value> =
        serde_json::from_str(content).context("Metadata source must be a JSON object")?;

    match format {
        InputFormat::Grouped => parse_grouped(root),
        InputFormat::Flat => parse_flat(root),
    }
}

fn parse_grouped(root: Map<String, Value>) -> Result<Vec<Emoji>> {
    let mut emojis = Vec::new();

    for (category, records) in root {
        let records: Vec<RawEmoji> = serde_json::from_value(records)
            .with_context(|| format!("Invalid records in category '{category}'"))?;

        for (index, raw) in records.into_iter().enumerate() {
            let id = raw
                .codepoint
                .as_ref()
                .or(raw.code_points.as_ref().and_then(|c| c.base.as_ref()))
                .map(ToString::to_string)
                .with_context(|| format!("Record {index} in category '{category}' has no codepoint"))?;
            let emoji = raw
                .into_emoji(&id, category.clone())
                .with_context(|| format!("Invalid emoji '{id}' in category '{category}'"))?;
            emojis.push(emoji);
        }
    }

    Ok(emojis)
}

fn parse_flat(root: Map<String, Value>) -> Result<Vec<Emoji>> {
    root.into_iter()
        .map(|(id, record)| {
            let raw: RawEmoji = serde_json::from_value(record)
                .with_context(|| format!("Invalid emoji record '{id}'"))?;
            let category = raw
                .category
                .clone()
                .with_context(|| format!("Emoji '{id}' has no category"))?;
            raw.into_emoji(&id, category)
                .with_context(|| format!("Invalid emoji '{id}'"))
        })
        .collect()
}

/// Loads a metadata source file.
///
/// Fails with [`LoadError::Io`] if the file cannot be read and with
/// [`LoadError::Parse`] if its content is not valid metadata.
pub fn load(path: &Path, format: InputFormat) -> std::result::Result<EmojiSource, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let emojis = parse_emoji_json(&content, format).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Loaded {} emoji from {} ({format} layout)",
        emojis.len(),
        path.display()
    );

    Ok(EmojiSource { format, emojis })
}
