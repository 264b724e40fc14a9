//! Shortname lookup table generator.
//!
//! Produces a source-level object literal mapping every shortname alias,
//! stripped of its `:` delimiters, to the emoji it names:
//!
//! ```text
//! const shortnames = {
//!     'grinning': '1f600',
//!     'smile': '1f604',
//! }
//! ```

use crate::models::EmojiGroups;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// What each alias maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShortnameValue {
    /// Fully-qualified codepoint in hyphenated hex notation
    #[default]
    Codepoint,
    /// The literal glyph text
    Glyph,
}

/// Which record wins when two aliases collide after stripping.
///
/// Records are visited in category order, then source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// The last record visited keeps the alias
    #[default]
    LastWins,
    /// The first record visited keeps the alias
    FirstWins,
}

/// Settings for shortname table generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortnameOptions {
    /// Value written for each alias
    pub value: ShortnameValue,
    /// Alias collision resolution
    pub collision: CollisionPolicy,
}

/// Strips the `:` delimiters of a shortname (e.g., ":smile:" -> "smile").
pub fn strip_delimiters(shortname: &str) -> &str {
    shortname.trim().trim_matches(':')
}

/// Builds the alias -> value mapping, sorted by alias.
pub fn build_shortname_table(
    groups: &EmojiGroups,
    options: &ShortnameOptions,
) -> BTreeMap<String, String> {
    let mut table = BTreeMap::new();

    for emoji in groups.emojis() {
        let value = match options.value {
            ShortnameValue::Codepoint => emoji.qualified().to_string(),
            ShortnameValue::Glyph => emoji.qualified().to_glyph(),
        };

        for shortname in &emoji.shortnames {
            let alias = strip_delimiters(shortname);
            if alias.is_empty() {
                tracing::debug!("Ignoring empty shortname on emoji {}", emoji.id);
                continue;
            }

            match (table.entry(alias.to_string()), options.collision) {
                (Entry::Vacant(entry), _) => {
                    entry.insert(value.clone());
                }
                (Entry::Occupied(mut entry), CollisionPolicy::LastWins) => {
                    tracing::debug!(
                        "Shortname '{alias}' of {} replaces {}",
                        emoji.id,
                        entry.get()
                    );
                    entry.insert(value.clone());
                }
                (Entry::Occupied(entry), CollisionPolicy::FirstWins) => {
                    tracing::debug!(
                        "Shortname '{alias}' of {} already maps to {}",
                        emoji.id,
                        entry.get()
                    );
                }
            }
        }
    }

    table
}

/// Renders the shortname table as an object literal.
pub fn render_shortname_table(groups: &EmojiGroups, options: &ShortnameOptions) -> String {
    let table = build_shortname_table(groups, options);
    let mut output = String::new();

    output.push_str("const shortnames = {\n");
    for (alias, value) in &table {
        let _ = writeln!(output, "    '{}': '{}',", quote(alias), quote(value));
    }
    output.push_str("}\n");

    output
}

/// Escapes a value for a single-quoted string literal.
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
