//! Building blocks for the HTML fragment path.
//!
//! Every free-text value is escaped here before interpolation, so the
//! returned fragments are safe to inject into a preview pane. The original
//! templates interpolated raw text; escaping is this crate's deliberate
//! policy and is covered by tests in the bug/feature suites.

use crate::text;

/// Escape a free-text value for interpolation into markup.
pub fn escape(s: &str) -> String {
    html_escape::encode_text(s.trim()).into_owned()
}

/// Escaped value, or the placeholder when the value is blank.
pub fn escaped_or(value: &str, placeholder: &str) -> String {
    escape(text::or_placeholder(value, placeholder))
}

/// One row of the key/value grid at the top of a card.
pub fn kv_row(key: &str, value_html: &str) -> String {
    format!("      <div class=\"k\">{}</div><div>{}</div>\n", key, value_html)
}

/// A section heading inside a card.
pub fn section_title(title: &str) -> String {
    format!("    <div class=\"section-title\">{}</div>\n", title)
}

/// Discrete tag tokens for a labels field, with a fallback tag when empty.
///
/// Comma-split order is preserved.
pub fn tag_list(labels: &str, fallback: &str) -> String {
    let tokens = text::split_labels(labels);
    if tokens.is_empty() {
        return format!("<span class=\"tag\">{}</span>", escape(fallback));
    }
    tokens.iter().map(|token| format!("<span class=\"tag\">{}</span>", escape(token))).collect::<Vec<_>>().join(" ")
}

/// `<li>` items from the non-blank lines of a multi-line field.
pub fn list_items(field: &str) -> String {
    text::non_blank_lines(field).iter().map(|line| format!("<li>{}</li>", escape(line))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_handles_markup() {
        assert_eq!(escape("<script>1 & 2</script>"), "&lt;script&gt;1 &amp; 2&lt;/script&gt;");
    }

    #[test]
    fn test_tag_list_fallback() {
        assert_eq!(tag_list("", "bug"), "<span class=\"tag\">bug</span>");
        assert_eq!(
            tag_list("ui, backend", "bug"),
            "<span class=\"tag\">ui</span> <span class=\"tag\">backend</span>"
        );
    }

    #[test]
    fn test_list_items_drop_blank_lines() {
        assert_eq!(list_items("one\n\ntwo"), "<li>one</li><li>two</li>");
        assert_eq!(list_items(""), "");
    }
}
