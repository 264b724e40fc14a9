//! Text-default codepoint list generator.
//!
//! Lists every codepoint whose source representation is `text-default`, both
//! as written and without a trailing variation selector, so the client can
//! recognize the glyph whichever way it was typed.

use crate::models::{EmojiGroups, Representation};
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Collects the text-default codepoints, deduplicated and sorted.
pub fn collect_text_default(groups: &EmojiGroups) -> Result<BTreeSet<String>> {
    let selector_regex =
        Regex::new(r"-fe0[ef]$").context("Failed to compile variation selector pattern")?;
    let mut codepoints = BTreeSet::new();

    for emoji in groups.emojis() {
        if emoji.representation != Representation::TextDefault {
            continue;
        }
        let codepoint = emoji.codepoint.to_string();
        codepoints.insert(selector_regex.replace(&codepoint, "").into_owned());
        codepoints.insert(codepoint);
    }

    Ok(codepoints)
}

/// Renders the text-default list as an array literal.
pub fn render_text_default_list(groups: &EmojiGroups) -> Result<String> {
    let codepoints = collect_text_default(groups)?;
    let mut output = String::new();

    let _ = writeln!(
        output,
        "// Generated with {} text-default",
        crate::constants::APP_BINARY_NAME
    );
    output.push_str("const TEXT_DEFAULT_EMOJI = [\n");
    for codepoint in &codepoints {
        let _ = writeln!(output, "    '{codepoint}',");
    }
    output.push_str("];\n");

    Ok(output)
}
