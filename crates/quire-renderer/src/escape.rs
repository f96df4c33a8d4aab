//! Minimal HTML escaping.

use std::borrow::Cow;

/// Escape the five markup-significant characters (`&`, `<`, `>`, `"`, `'`).
///
/// Every other byte, including whitespace and line breaks, is left as is, so
/// decoding the entities yields the input exactly. Returns the input borrowed
/// when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use quire_renderer::escape_html;
///
/// assert_eq!(escape_html("List<Product>"), "List&lt;Product&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    let Some(first) = s.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(s);
    };

    let mut result = String::with_capacity(s.len() + 16);
    result.push_str(&s[..first]);
    for c in s[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
