//! Link converter - decides how a hyperlink survives the trip into WeChat.
//!
//! The WeChat article editor keeps live anchors only for its own article
//! domain. Every other destination is either dropped (the visible text already
//! is the URL), turned into a numbered citation, or demoted to styled text.

use super::context::LinkConverterOptions;
use crate::theme::{make_style_text, Theme};

/// Domain of WeChat articles; the only destinations rendered as real anchors.
pub const WECHAT_ARTICLE_DOMAIN: &str = "mp.weixin.qq.com";

/// Converts one link element into an inline markup fragment.
///
/// `href`, `title` and `text` are inserted as given, with no escaping. `text`
/// may be rendered inline markup; for a WeChat article link it also fills the
/// `title` attribute when no title is set, so markup containing quotes there
/// yields a malformed attribute. The registrar in `options` is called at most
/// once, and only when a citation is rendered.
pub fn link_converter(
    styles: &Theme,
    options: &LinkConverterOptions<'_>,
    href: &str,
    title: &str,
    text: &str,
) -> String {
    let label = if title.is_empty() { text } else { title };

    if href.contains(WECHAT_ARTICLE_DOMAIN) {
        return format!(
            r#"<a href="{}" title="{}" style="{}">{}</a>"#,
            href,
            label,
            make_style_text(styles.link()),
            text
        );
    }

    if href == text {
        return text.to_string();
    }

    if let (true, Some(registrar)) = (options.enable_foot_note, options.add_foot_note) {
        let index = registrar.add(label, href);
        return format!(
            r#"<span style="{}">{}</span><sup>[{}]</sup>"#,
            make_style_text(styles.link()),
            text,
            index
        );
    }

    format!(
        r#"<span style="{}">{}</span>"#,
        make_style_text(styles.link()),
        text
    )
}

/// Binds a theme and options, yielding the `(href, title, text)` converter
/// the document walker keeps in its dispatch table.
pub fn link_converter_factory<'a>(
    styles: &'a Theme,
    options: LinkConverterOptions<'a>,
) -> impl Fn(&str, &str, &str) -> String + 'a {
    move |href: &str, title: &str, text: &str| {
        link_converter(styles, &options, href, title, text)
    }
}
