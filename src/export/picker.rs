//! Emoji picker HTML generator.
//!
//! Renders a tabbed picker widget: one radio-button tab per category in the
//! fixed category order, each with a content panel listing the category's
//! emoji, followed by the skin tone selector strip. The markup is a fragment
//! meant to be included by the client's templates.

use crate::models::{Category, Codepoint, Emoji, EmojiGroups, GenderMarker, SKIN_TONES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Write as _;

/// CSS class scheme of the generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PickerFlavor {
    /// `em` sprite classes, glyph text from the qualified codepoint
    #[default]
    Twemoji,
    /// `e1` sprite classes, skin tone variants classed `diversity`
    Emojione,
}

impl PickerFlavor {
    fn root_class(self) -> &'static str {
        match self {
            Self::Twemoji => "twemoji-picker",
            Self::Emojione => "emojione-picker",
        }
    }
}

/// Settings for picker rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Class scheme
    pub flavor: PickerFlavor,
    /// Directory (URL path) holding the `tone0.svg`..`tone5.svg` swatches
    pub asset_dir: String,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            flavor: PickerFlavor::default(),
            asset_dir: "img/emoji".to_string(),
        }
    }
}

/// Renders picker markup for a set of grouped emoji.
#[derive(Debug)]
pub struct PickerRenderer<'a> {
    groups: &'a EmojiGroups,
    options: &'a PickerOptions,
    gendered_bases: HashSet<Codepoint>,
}

impl<'a> PickerRenderer<'a> {
    /// Creates a renderer over `groups`.
    pub fn new(groups: &'a EmojiGroups, options: &'a PickerOptions) -> Self {
        Self {
            groups,
            options,
            gendered_bases: groups.gendered_bases(),
        }
    }

    /// Renders the whole widget: all category tabs, then the skin tone strip.
    pub fn render_all(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "<div class=\"{}\">", self.options.flavor.root_class());
        for (index, (category, emojis)) in self.groups.iter().enumerate() {
            output.push_str(&self.render_category_tab(index, category, emojis));
        }
        output.push_str(&self.render_skin_tone_strip());
        output.push_str("</div>\n");

        output
    }

    /// Renders one tab: the selectable header followed by the content panel.
    ///
    /// The first tab (`index == 0`) is checked.
    pub fn render_category_tab(&self, index: usize, category: &Category, emojis: &[Emoji]) -> String {
        let mut output = String::new();
        let title = escape_html(category.name);

        output.push_str("    <div class=\"tab\">\n");
        let _ = writeln!(
            output,
            "        <input type=\"radio\" id=\"tab-{index}\" name=\"tabs\"{}>",
            if index == 0 { " checked" } else { "" }
        );
        let _ = writeln!(
            output,
            "        <label for=\"tab-{index}\" title=\"{title}\" role=\"tab\" aria-label=\"{title}\">"
        );
        let _ = writeln!(output, "            {}", self.render_header_icon(category));
        output.push_str("        </label>\n");
        let _ = writeln!(
            output,
            "        <div class=\"content\" role=\"tabpanel\" aria-label=\"{title}\">"
        );
        for emoji in emojis {
            if let Some(unit) = self.render_record(category, emoji) {
                let _ = writeln!(output, "            {unit}");
            }
        }
        output.push_str("        </div>\n");
        output.push_str("    </div>\n");

        output
    }

    /// Renders the display unit of one emoji, or `None` if it is filtered out.
    ///
    /// Neutral records (gender field present but null) are left out when a
    /// gendered form with the same base exists; only the gendered forms are
    /// shown then.
    pub fn render_record(&self, category: &Category, emoji: &Emoji) -> Option<String> {
        if emoji.gender == GenderMarker::Neutral {
            if self.gendered_bases.contains(&emoji.base_identity()) {
                tracing::trace!("Skipping neutral emoji {} in favor of gendered forms", emoji.id);
                return None;
            }
            tracing::warn!(
                "Emoji {} is marked gender-neutral but has no gendered counterpart; keeping it",
                emoji.id
            );
        }

        let glyph = emoji.qualified().to_html_escapes();
        let shortname = escape_html(emoji.primary_shortname());
        let tone = emoji
            .tone_marker()
            .map(|tone| format!(" data-t=\"{tone}\""))
            .unwrap_or_default();

        let unit = match self.options.flavor {
            PickerFlavor::Twemoji => {
                let codepoint = &emoji.codepoint;
                let title = if emoji.name.is_empty() {
                    shortname.clone()
                } else {
                    escape_html(&emoji.name)
                };
                format!(
                    "<span class=\"em em-{id}-{codepoint}\" data-c=\"{codepoint}\" data-s=\"{shortname}\"{tone} title=\"{title}\" role=\"button\" aria-label=\"{title}\">{glyph}</span>",
                    id = category.id,
                )
            }
            PickerFlavor::Emojione => {
                let class = if emoji.skin_tone.is_some() {
                    "diversity"
                } else {
                    category.id
                };
                format!(
                    "<span class=\"e1 e1-{class} _{id}\" data-c=\"{qualified}\" data-s=\"{shortname}\"{tone} title=\"{shortname}\" role=\"button\" aria-label=\"{shortname}\">{glyph}</span>",
                    id = escape_html(&emoji.id),
                    qualified = emoji.qualified(),
                )
            }
        };

        Some(unit)
    }

    /// Renders the six skin tone swatches, tone 0 selected.
    pub fn render_skin_tone_strip(&self) -> String {
        let mut output = String::new();
        let asset_dir = self.options.asset_dir.trim_end_matches('/');

        output.push_str("    <div class=\"skin-tones\" role=\"radiogroup\" aria-label=\"Skin tone\">\n");
        for tone in &SKIN_TONES {
            let _ = writeln!(
                output,
                "        <span class=\"tone tone{id}\" data-t=\"{id}\" title=\"{label}\" role=\"radio\" aria-label=\"{label}\" aria-checked=\"{checked}\"><img src=\"{dir}/{asset}\" alt=\"{label}\"></span>",
                id = tone.id,
                label = tone.label,
                checked = tone.id == 0,
                dir = escape_html(asset_dir),
                asset = tone.asset_name(),
            );
        }
        output.push_str("    </div>\n");

        output
    }

    fn render_header_icon(&self, category: &Category) -> String {
        match self.options.flavor {
            PickerFlavor::Twemoji => format!(
                "<span class=\"em em-{id} em-{id}-{icon}\"></span>",
                id = category.id,
                icon = category.icon,
            ),
            PickerFlavor::Emojione => {
                let glyph = Codepoint::parse(category.icon)
                    .map(|icon| icon.to_html_escapes())
                    .unwrap_or_default();
                format!(
                    "<span class=\"e1 e1-{id} _{icon}\">{glyph}</span>",
                    id = category.id,
                    icon = category.icon,
                )
            }
        }
    }
}

/// Renders the complete picker for `groups`.
pub fn render_picker(groups: &EmojiGroups, options: &PickerOptions) -> String {
    PickerRenderer::new(groups, options).render_all()
}

/// Escapes text for use in HTML attribute values and content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
