// src/display/markup.rs

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` so arbitrary text (stderr, error
/// messages) renders literally in a markup label.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}
