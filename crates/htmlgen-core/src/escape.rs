//! Reserved-character escaping.
//!
//! Text content needs `&`, `<` and `>` replaced. Attribute values are always
//! double-quoted, so they additionally need `"` and `'` replaced.

use std::borrow::Cow;

/// Escape text for use as element content.
///
/// ```
/// use htmlgen_core::escape::escape_text;
///
/// assert_eq!(escape_text("Test & <Test>"), "Test &amp; &lt;Test&gt;");
/// assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escape text for use inside a double-quoted attribute value.
///
/// ```
/// use htmlgen_core::escape::escape_attribute;
///
/// assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
/// ```
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

fn needs_escape(ch: char, quote: bool) -> bool {
    match ch {
        '&' | '<' | '>' => true,
        '"' | '\'' => quote,
        _ => false,
    }
}

fn escape(text: &str, quote: bool) -> Cow<'_, str> {
    // Borrow unchanged input, which is the common case.
    let Some(first) = text.find(|ch: char| needs_escape(ch, quote)) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            '\'' if quote => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
