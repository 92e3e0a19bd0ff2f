//! Block converters - paragraphs, headings, quotes, lists, code, rules, tables.

use crate::render::escape_html;
use crate::theme::{make_style_text, StyleRole, Theme};
use pulldown_cmark::Alignment;

pub fn paragraph_converter(styles: &Theme, text: &str) -> String {
    format!(
        r#"<p style="{}">{}</p>"#,
        styles.style_text(StyleRole::Paragraph),
        text
    )
}

/// Levels outside 1..=6 are clamped into range.
pub fn heading_converter(styles: &Theme, level: u8, text: &str) -> String {
    let level = level.clamp(1, 6);
    format!(
        r#"<h{level} style="{}">{}</h{level}>"#,
        styles.style_text(StyleRole::Heading(level)),
        text
    )
}

pub fn block_quote_converter(styles: &Theme, text: &str) -> String {
    format!(
        r#"<blockquote style="{}">{}</blockquote>"#,
        styles.style_text(StyleRole::BlockQuote),
        text
    )
}

/// `start` is the first number of an ordered list, `None` for bullet lists.
pub fn list_converter(styles: &Theme, start: Option<u64>, items: &str) -> String {
    let style = styles.style_text(StyleRole::List);
    match start {
        None => format!(r#"<ul style="{style}">{items}</ul>"#),
        Some(1) => format!(r#"<ol style="{style}">{items}</ol>"#),
        Some(n) => format!(r#"<ol start="{n}" style="{style}">{items}</ol>"#),
    }
}

pub fn list_item_converter(styles: &Theme, text: &str) -> String {
    format!(
        r#"<li style="{}">{}</li>"#,
        styles.style_text(StyleRole::ListItem),
        text
    )
}

/// Code blocks take raw source; it is escaped here.
pub fn code_block_converter(styles: &Theme, lang: Option<&str>, code: &str) -> String {
    let class = match lang {
        Some(lang) if !lang.is_empty() => format!(r#" class="language-{}""#, escape_html(lang)),
        _ => String::new(),
    };
    format!(
        r#"<pre style="{}"><code{}>{}</code></pre>"#,
        styles.style_text(StyleRole::CodeBlock),
        class,
        escape_html(code.trim_end_matches('\n'))
    )
}

pub fn horizontal_rule_converter(styles: &Theme) -> String {
    format!(
        r#"<hr style="{}">"#,
        styles.style_text(StyleRole::HorizontalRule)
    )
}

pub fn table_converter(styles: &Theme, head: &str, body: &str) -> String {
    format!(
        r#"<table style="{}"><thead>{}</thead><tbody>{}</tbody></table>"#,
        styles.style_text(StyleRole::Table),
        head,
        body
    )
}

pub fn table_row_converter(cells: &str) -> String {
    format!("<tr>{cells}</tr>")
}

/// A column alignment other than `None` overrides the theme's `text-align`.
pub fn table_cell_converter(
    styles: &Theme,
    is_head: bool,
    alignment: Alignment,
    text: &str,
) -> String {
    let (tag, role) = if is_head {
        ("th", StyleRole::TableHeadCell)
    } else {
        ("td", StyleRole::TableCell)
    };

    let mut rule = styles.style(role).clone();
    match alignment {
        Alignment::None => {}
        Alignment::Left => rule.set("text-align", "left"),
        Alignment::Center => rule.set("text-align", "center"),
        Alignment::Right => rule.set("text-align", "right"),
    }

    format!(r#"<{tag} style="{}">{text}</{tag}>"#, make_style_text(&rule))
}
