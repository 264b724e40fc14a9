//! Generated artifacts.
//!
//! This module renders grouped emoji metadata into the text artifacts consumed
//! by the chat client: the picker widget markup, the shortname lookup table,
//! and the list of text-default codepoints. Every renderer returns the full
//! artifact as a `String`; nothing is written until rendering has succeeded.

pub mod picker;
pub mod shortnames;
pub mod text_default;

pub use picker::{render_picker, PickerFlavor, PickerOptions, PickerRenderer};
pub use shortnames::{
    build_shortname_table, render_shortname_table, strip_delimiters, CollisionPolicy,
    ShortnameOptions, ShortnameValue,
};
pub use text_default::{collect_text_default, render_text_default_list};
