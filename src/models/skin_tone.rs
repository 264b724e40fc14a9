//! Skin tone swatches for the picker's tone selector.

/// One entry of the skin tone selector strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinTone {
    /// Tone identifier, `0` for the default (yellow) tone
    pub id: u8,
    /// English label used for `title` and `aria-label`
    pub label: &'static str,
    /// Fitzpatrick modifier scalar, absent for the default tone
    pub modifier: Option<char>,
}

/// Highest tone identifier a skin tone variant may carry.
pub const MAX_SKIN_TONE: u8 = 5;

/// The six swatches, tone `0` through `5`.
pub const SKIN_TONES: [SkinTone; 6] = [
    SkinTone {
        id: 0,
        label: "Default",
        modifier: None,
    },
    SkinTone {
        id: 1,
        label: "Light skin tone",
        modifier: Some('\u{1f3fb}'),
    },
    SkinTone {
        id: 2,
        label: "Medium-light skin tone",
        modifier: Some('\u{1f3fc}'),
    },
    SkinTone {
        id: 3,
        label: "Medium skin tone",
        modifier: Some('\u{1f3fd}'),
    },
    SkinTone {
        id: 4,
        label: "Medium-dark skin tone",
        modifier: Some('\u{1f3fe}'),
    },
    SkinTone {
        id: 5,
        label: "Dark skin tone",
        modifier: Some('\u{1f3ff}'),
    },
];

impl SkinTone {
    /// Asset file name of the swatch image (e.g., "tone3.svg").
    pub fn asset_name(&self) -> String {
        format!("tone{}.svg", self.id)
    }

    /// Finds the tone whose modifier scalar is `modifier`.
    pub fn from_modifier(modifier: char) -> Option<&'static Self> {
        SKIN_TONES
            .iter()
            .find(|tone| tone.modifier == Some(modifier))
    }
}
