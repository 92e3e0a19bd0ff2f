//! Converter modules for Markdown to WeChat HTML transformation.

mod block;
mod context;
mod image;
mod inline;
mod link;
mod walker;

use crate::core::ast::{DocumentAst, ReferenceDefinitions};
use crate::render::{HtmlRenderer, Renderer};
use crate::theme::Theme;
use crate::{ConvertOptions, Result};
use pulldown_cmark::{Alignment, Options, Parser};
use std::path::Path;

pub use self::block::{
    block_quote_converter, code_block_converter, heading_converter, horizontal_rule_converter,
    list_converter, list_item_converter, paragraph_converter, table_cell_converter,
    table_converter, table_row_converter,
};
pub use self::context::{FootnoteList, FootnoteRegistrar, LinkConverterOptions};
pub use self::image::{image_converter, ImageResolver};
pub use self::inline::{
    code_span_converter, emphasis_converter, strikethrough_converter, strong_converter,
};
pub use self::link::{link_converter, link_converter_factory, WECHAT_ARTICLE_DOMAIN};
pub use self::walker::DocumentWalker;

/// Converter taking an element's rendered content.
pub type ContentConverter<'a> = Box<dyn Fn(&str) -> String + 'a>;

/// Dispatch table holding one converter per element kind.
///
/// Each entry has the theme (and, for links, the link options) bound in, so
/// the walker only passes element-specific arguments.
pub struct Converters<'a> {
    pub paragraph: ContentConverter<'a>,
    pub heading: Box<dyn Fn(u8, &str) -> String + 'a>,
    pub block_quote: ContentConverter<'a>,
    pub list: Box<dyn Fn(Option<u64>, &str) -> String + 'a>,
    pub list_item: ContentConverter<'a>,
    pub code_block: Box<dyn Fn(Option<&str>, &str) -> String + 'a>,
    pub horizontal_rule: Box<dyn Fn() -> String + 'a>,
    pub table: Box<dyn Fn(&str, &str) -> String + 'a>,
    pub table_row: ContentConverter<'a>,
    pub table_cell: Box<dyn Fn(bool, Alignment, &str) -> String + 'a>,
    pub strong: ContentConverter<'a>,
    pub emphasis: ContentConverter<'a>,
    pub strikethrough: ContentConverter<'a>,
    pub code_span: ContentConverter<'a>,
    /// `(src, title, alt)`
    pub image: Box<dyn Fn(&str, &str, &str) -> String + 'a>,
    /// `(href, title, text)`
    pub link: Box<dyn Fn(&str, &str, &str) -> String + 'a>,
}

impl<'a> Converters<'a> {
    pub fn new(styles: &'a Theme, link_options: LinkConverterOptions<'a>) -> Self {
        Self {
            paragraph: Box::new(move |text: &str| paragraph_converter(styles, text)),
            heading: Box::new(move |level: u8, text: &str| {
                heading_converter(styles, level, text)
            }),
            block_quote: Box::new(move |text: &str| block_quote_converter(styles, text)),
            list: Box::new(move |start: Option<u64>, items: &str| {
                list_converter(styles, start, items)
            }),
            list_item: Box::new(move |text: &str| list_item_converter(styles, text)),
            code_block: Box::new(move |lang: Option<&str>, code: &str| {
                code_block_converter(styles, lang, code)
            }),
            horizontal_rule: Box::new(move || horizontal_rule_converter(styles)),
            table: Box::new(move |head: &str, body: &str| table_converter(styles, head, body)),
            table_row: Box::new(table_row_converter),
            table_cell: Box::new(move |is_head: bool, alignment: Alignment, text: &str| {
                table_cell_converter(styles, is_head, alignment, text)
            }),
            strong: Box::new(move |text: &str| strong_converter(styles, text)),
            emphasis: Box::new(move |text: &str| emphasis_converter(styles, text)),
            strikethrough: Box::new(move |text: &str| strikethrough_converter(styles, text)),
            code_span: Box::new(move |code: &str| code_span_converter(styles, code)),
            image: Box::new(move |src: &str, title: &str, alt: &str| {
                image_converter(styles, src, title, alt)
            }),
            link: Box::new(link_converter_factory(styles, link_options)),
        }
    }
}

/// Main converter struct that orchestrates Markdown to WeChat HTML conversion.
pub struct MarkdownToWechat {
    options: ConvertOptions,
    theme: Theme,
}

impl MarkdownToWechat {
    /// Creates a new converter with the given options and the default theme.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            theme: Theme::default(),
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Replaces the theme used for every element.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Converts a Markdown file to styled HTML.
    ///
    /// Relative image paths are resolved against the file's directory.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let markdown = std::fs::read_to_string(path)?;
        self.convert_with_base_dir(&markdown, path.parent())
    }

    /// Converts Markdown text to styled HTML.
    ///
    /// Relative image paths are resolved against the working directory.
    pub fn convert_str(&self, markdown: &str) -> Result<String> {
        self.convert_with_base_dir(markdown, None)
    }

    fn convert_with_base_dir(&self, markdown: &str, base_dir: Option<&Path>) -> Result<String> {
        let footnotes = FootnoteList::new();
        let mut images = ImageResolver::new(&self.options.image_handling, base_dir);

        let blocks = {
            let link_options =
                LinkConverterOptions::new(self.options.enable_footnotes, Some(&footnotes));
            let converters = Converters::new(&self.theme, link_options);
            let parser = Parser::new_ext(markdown, self.parser_options());
            DocumentWalker::new(&converters, &mut images).walk(parser)?
        };

        tracing::debug!(
            blocks = blocks.len(),
            footnotes = footnotes.len(),
            inlined_images = images.inlined_count(),
            "Converted markdown document"
        );

        let document = DocumentAst {
            blocks,
            references: ReferenceDefinitions {
                footnotes: footnotes.into_footnotes(),
            },
        };

        HtmlRenderer::new(&self.theme).render(&document)
    }

    fn parser_options(&self) -> Options {
        if self.options.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }
}
