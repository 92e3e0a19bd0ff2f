//! Inline converters - emphasis, strong, strikethrough and code spans.
//!
//! `text` arguments are already-rendered markup; code spans take raw source
//! and escape it themselves.

use crate::render::escape_html;
use crate::theme::{StyleRole, Theme};

pub fn strong_converter(styles: &Theme, text: &str) -> String {
    format!(
        r#"<strong style="{}">{}</strong>"#,
        styles.style_text(StyleRole::Strong),
        text
    )
}

pub fn emphasis_converter(styles: &Theme, text: &str) -> String {
    format!(
        r#"<em style="{}">{}</em>"#,
        styles.style_text(StyleRole::Emphasis),
        text
    )
}

pub fn strikethrough_converter(styles: &Theme, text: &str) -> String {
    format!(
        r#"<del style="{}">{}</del>"#,
        styles.style_text(StyleRole::Strikethrough),
        text
    )
}

pub fn code_span_converter(styles: &Theme, code: &str) -> String {
    format!(
        r#"<code style="{}">{}</code>"#,
        styles.style_text(StyleRole::CodeSpan),
        escape_html(code)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleRule;
    use pretty_assertions::assert_eq;

    fn theme() -> Theme {
        Theme::empty()
            .with_rule(StyleRole::Strong, StyleRule::new().with("font-weight", "bold"))
            .with_rule(StyleRole::CodeSpan, StyleRule::new().with("color", "blue"))
    }

    #[test]
    fn test_strong_uses_role_style() {
        assert_eq!(
            strong_converter(&theme(), "hi"),
            r#"<strong style="font-weight:bold;">hi</strong>"#
        );
    }

    #[test]
    fn test_emphasis_without_rule_has_empty_style() {
        assert_eq!(emphasis_converter(&theme(), "hi"), r#"<em style="">hi</em>"#);
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(
            strikethrough_converter(&Theme::empty(), "old"),
            r#"<del style="">old</del>"#
        );
    }

    #[test]
    fn test_code_span_escapes_source() {
        assert_eq!(
            code_span_converter(&theme(), "a < b && c"),
            r#"<code style="color:blue;">a &lt; b &amp;&amp; c</code>"#
        );
    }
}
