//! # md2wx
//!
//! Markdown to WeChat-ready styled HTML converter using `pulldown-cmark`.
//!
//! Every element is rendered with inline styles taken from a [`Theme`]. Links
//! get special treatment because the WeChat editor only keeps anchors that
//! point at WeChat articles: other links become numbered citations collected
//! into a reference list at the end of the article.
//!
//! ## Example
//!
//! ```
//! use md2wx::{ConvertOptions, MarkdownToWechat};
//!
//! let converter = MarkdownToWechat::new(ConvertOptions::default());
//! let html = converter
//!     .convert_str("Read [the guide](https://example.com).")
//!     .unwrap();
//! assert!(html.contains("<sup>[1]</sup>"));
//! assert!(html.contains("https://example.com"));
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod render;
pub mod theme;

pub use converter::{
    link_converter, link_converter_factory, Converters, FootnoteList, FootnoteRegistrar,
    LinkConverterOptions, MarkdownToWechat,
};
pub use error::{Error, Result};
pub use theme::{make_style_text, StyleRole, StyleRule, Theme};

/// Options for Markdown to WeChat HTML conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Whether links outside WeChat become numbered footnote citations.
    pub enable_footnotes: bool,
    /// Whether GitHub Flavored Markdown extensions (tables, strikethrough,
    /// task lists) are parsed.
    pub gfm: bool,
    /// How to handle images in the document.
    pub image_handling: ImageHandling,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            enable_footnotes: true,
            gfm: true,
            image_handling: ImageHandling::Keep,
        }
    }
}

/// Specifies how images should be handled during conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageHandling {
    /// Keep image sources exactly as written.
    #[default]
    Keep,
    /// Embed local images as base64 data URIs; remote sources are kept.
    Inline,
    /// Skip images entirely.
    Skip,
}
