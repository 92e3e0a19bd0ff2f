//! Document walker - turns `pulldown-cmark` events into converted blocks.
//!
//! Every open tag gets a frame that buffers its rendered children. When the
//! tag closes, the frame is handed to the converter for its element kind and
//! the result is appended to the parent frame, or becomes a top-level block.

use super::{Converters, ImageResolver};
use crate::render::escape_html;
use crate::Result;
use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Tag};

enum Container {
    Paragraph,
    Heading(u8),
    BlockQuote,
    List(Option<u64>),
    Item,
    Emphasis,
    Strong,
    Strikethrough,
    Link { href: String, title: String },
    Image { src: String, title: String },
    CodeBlock(Option<String>),
    Table {
        alignments: Vec<Alignment>,
        head: String,
        body: String,
    },
    /// Rows count their cells to look up the column alignment.
    TableHead { cells: usize },
    TableRow { cells: usize },
    TableCell { is_head: bool, alignment: Alignment },
    /// Tags without a converter; children are emitted unchanged.
    Passthrough,
}

struct Frame {
    container: Container,
    buf: String,
}

/// Walks one document, dispatching each element to its converter.
pub struct DocumentWalker<'c, 'a> {
    converters: &'c Converters<'a>,
    images: &'c mut ImageResolver,
    stack: Vec<Frame>,
    blocks: Vec<String>,
    /// Tags opened inside image alt text; only their text is kept.
    suppressed: usize,
}

impl<'c, 'a> DocumentWalker<'c, 'a> {
    pub fn new(converters: &'c Converters<'a>, images: &'c mut ImageResolver) -> Self {
        Self {
            converters,
            images,
            stack: Vec::new(),
            blocks: Vec::new(),
            suppressed: 0,
        }
    }

    /// Consumes the events and returns the converted top-level blocks.
    pub fn walk<'e, I>(mut self, events: I) -> Result<Vec<String>>
    where
        I: Iterator<Item = Event<'e>>,
    {
        for event in events {
            self.process_event(event)?;
        }

        // Unbalanced input: keep whatever was buffered.
        while let Some(frame) = self.stack.pop() {
            self.emit(frame.buf);
        }

        Ok(self.blocks)
    }

    fn process_event(&mut self, event: Event<'_>) -> Result<()> {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(_) => return self.end_tag(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if self.in_image() {
                    self.push(&escape_html(&code));
                } else {
                    let html = (self.converters.code_span)(&code);
                    self.push(&html);
                }
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push(&html),
            Event::SoftBreak => self.push("\n"),
            Event::HardBreak => self.push("<br>"),
            Event::Rule => {
                let html = (self.converters.horizontal_rule)();
                self.emit(html);
            }
            Event::TaskListMarker(checked) => self.push(if checked { "[x] " } else { "[ ] " }),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
        Ok(())
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        if self.in_image() {
            self.suppressed += 1;
            return;
        }

        let container = match tag {
            Tag::Paragraph => Container::Paragraph,
            Tag::Heading { level, .. } => Container::Heading(heading_level_to_num(level)),
            Tag::BlockQuote(_) => Container::BlockQuote,
            Tag::List(start) => Container::List(start),
            Tag::Item => Container::Item,
            Tag::Emphasis => Container::Emphasis,
            Tag::Strong => Container::Strong,
            Tag::Strikethrough => Container::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => Container::Link {
                href: escape_html(&dest_url),
                title: escape_html(&title),
            },
            Tag::Image {
                dest_url, title, ..
            } => Container::Image {
                src: dest_url.to_string(),
                title: escape_html(&title),
            },
            Tag::CodeBlock(kind) => Container::CodeBlock(match kind {
                CodeBlockKind::Fenced(info) => info
                    .split_whitespace()
                    .next()
                    .map(ToString::to_string),
                CodeBlockKind::Indented => None,
            }),
            Tag::Table(alignments) => Container::Table {
                alignments,
                head: String::new(),
                body: String::new(),
            },
            Tag::TableHead => Container::TableHead { cells: 0 },
            Tag::TableRow => Container::TableRow { cells: 0 },
            Tag::TableCell => self.table_cell(),
            _ => Container::Passthrough,
        };

        self.stack.push(Frame {
            container,
            buf: String::new(),
        });
    }

    fn end_tag(&mut self) -> Result<()> {
        if self.suppressed > 0 {
            self.suppressed -= 1;
            return Ok(());
        }

        let Some(Frame { container, buf }) = self.stack.pop() else {
            return Ok(());
        };
        let c = self.converters;

        let html = match container {
            Container::Paragraph => (c.paragraph)(&buf),
            Container::Heading(level) => (c.heading)(level, buf.trim()),
            Container::BlockQuote => (c.block_quote)(&buf),
            Container::List(start) => (c.list)(start, &buf),
            Container::Item => (c.list_item)(&buf),
            Container::Emphasis => (c.emphasis)(&buf),
            Container::Strong => (c.strong)(&buf),
            Container::Strikethrough => (c.strikethrough)(&buf),
            Container::Link { href, title } => (c.link)(&href, &title, &buf),
            Container::Image { src, title } => match self.images.resolve(&src)? {
                Some(src) => (c.image)(&escape_html(&src), &title, &buf),
                None => return Ok(()),
            },
            Container::CodeBlock(lang) => (c.code_block)(lang.as_deref(), &buf),
            Container::Table { head, body, .. } => (c.table)(&head, &body),
            Container::TableHead { .. } => {
                let row = (c.table_row)(&buf);
                if let Some(Container::Table { head, .. }) =
                    self.stack.last_mut().map(|f| &mut f.container)
                {
                    head.push_str(&row);
                }
                return Ok(());
            }
            Container::TableRow { .. } => {
                let row = (c.table_row)(&buf);
                if let Some(Container::Table { body, .. }) =
                    self.stack.last_mut().map(|f| &mut f.container)
                {
                    body.push_str(&row);
                }
                return Ok(());
            }
            Container::TableCell { is_head, alignment } => {
                (c.table_cell)(is_head, alignment, &buf)
            }
            Container::Passthrough => buf,
        };

        self.emit(html);
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some(Frame {
            container: Container::CodeBlock(_),
            buf,
        }) = self.stack.last_mut()
        {
            buf.push_str(text);
            return;
        }
        self.push(&escape_html(text));
    }

    /// Opens the next cell of the current row, taking its column alignment
    /// from the enclosing table.
    fn table_cell(&mut self) -> Container {
        let (is_head, column) = match self.stack.last_mut().map(|f| &mut f.container) {
            Some(Container::TableHead { cells }) => {
                *cells += 1;
                (true, *cells - 1)
            }
            Some(Container::TableRow { cells }) => {
                *cells += 1;
                (false, *cells - 1)
            }
            _ => (false, 0),
        };

        let alignment = self
            .stack
            .iter()
            .rev()
            .find_map(|f| match &f.container {
                Container::Table { alignments, .. } => alignments.get(column).copied(),
                _ => None,
            })
            .unwrap_or(Alignment::None);

        Container::TableCell { is_head, alignment }
    }

    fn in_image(&self) -> bool {
        matches!(
            self.stack.last().map(|f| &f.container),
            Some(Container::Image { .. })
        )
    }

    /// Appends inline content to the innermost open element.
    fn push(&mut self, content: &str) {
        match self.stack.last_mut() {
            Some(frame) => frame.buf.push_str(content),
            None => self.blocks.push(content.to_string()),
        }
    }

    /// Appends a finished element to its parent, or records a top-level block.
    fn emit(&mut self, html: String) {
        if html.is_empty() {
            return;
        }
        match self.stack.last_mut() {
            Some(frame) => frame.buf.push_str(&html),
            None => self.blocks.push(html),
        }
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::context::{FootnoteList, LinkConverterOptions};
    use crate::theme::Theme;
    use crate::ImageHandling;
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{Options, Parser};

    fn walk_with(markdown: &str, options: LinkConverterOptions<'_>) -> Vec<String> {
        let theme = Theme::empty();
        let converters = Converters::new(&theme, options);
        let mut images = ImageResolver::new(&ImageHandling::Keep, None);
        let parser = Parser::new_ext(
            markdown,
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        );
        DocumentWalker::new(&converters, &mut images)
            .walk(parser)
            .expect("walk should succeed")
    }

    fn walk(markdown: &str) -> Vec<String> {
        walk_with(markdown, LinkConverterOptions::disabled())
    }

    #[test]
    fn test_paragraph_with_inline_markup() {
        assert_eq!(
            walk("Hello **bold** and *it* & `x<y`"),
            vec![
                r#"<p style="">Hello <strong style="">bold</strong> and <em style="">it</em> &amp; <code style="">x&lt;y</code></p>"#
            ]
        );
    }

    #[test]
    fn test_each_block_is_separate() {
        let blocks = walk("# Title\n\nBody\n\n---\n");
        assert_eq!(
            blocks,
            vec![
                r#"<h1 style="">Title</h1>"#.to_string(),
                r#"<p style="">Body</p>"#.to_string(),
                r#"<hr style="">"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_autolink_is_rendered_bare() {
        assert_eq!(
            walk("<https://example.com>"),
            vec![r#"<p style="">https://example.com</p>"#]
        );
    }

    #[test]
    fn test_bare_link_with_ampersand_compares_escaped() {
        assert_eq!(
            walk("[https://e.com/?a=1&b=2](https://e.com/?a=1&b=2)"),
            vec![r#"<p style="">https://e.com/?a=1&amp;b=2</p>"#]
        );
    }

    #[test]
    fn test_link_becomes_footnote_citation() {
        let list = FootnoteList::new();
        let blocks = walk_with(
            r#"See [the docs](https://example.com "Docs") now."#,
            LinkConverterOptions::new(true, Some(&list)),
        );
        assert_eq!(
            blocks,
            vec![r#"<p style="">See <span style="">the docs</span><sup>[1]</sup> now.</p>"#]
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list.footnote_at(1).map(|f| f.label), Some("Docs".to_string()));
    }

    #[test]
    fn test_link_text_keeps_nested_markup() {
        assert_eq!(
            walk("[**bold**](https://example.com)"),
            vec![r#"<p style=""><span style=""><strong style="">bold</strong></span></p>"#]
        );
    }

    #[test]
    fn test_nested_list_and_quote() {
        assert_eq!(
            walk("> - a\n> - b\n"),
            vec![
                r#"<blockquote style=""><ul style=""><li style="">a</li><li style="">b</li></ul></blockquote>"#
            ]
        );
    }

    #[test]
    fn test_code_block_keeps_raw_text_for_escaping() {
        assert_eq!(
            walk("```rust\nif a < b {}\n```\n"),
            vec![r#"<pre style=""><code class="language-rust">if a &lt; b {}</code></pre>"#]
        );
    }

    #[test]
    fn test_image_alt_drops_markup() {
        assert_eq!(
            walk("![a *b*](x.png)"),
            vec![r#"<p style=""><img src="x.png" alt="a b" style=""><span style="">a b</span></p>"#]
        );
    }

    #[test]
    fn test_image_stays_phrasing_content() {
        let blocks = walk("![cat](cat.png)\n\nSee [![logo](l.png)](https://example.com)\n");
        assert_eq!(
            blocks,
            vec![
                r#"<p style=""><img src="cat.png" alt="cat" style=""><span style="">cat</span></p>"#,
                r#"<p style="">See <span style=""><img src="l.png" alt="logo" style=""><span style="">logo</span></span></p>"#,
            ]
        );
        for block in &blocks {
            assert!(!block.contains("<figure"), "block-level image in {block}");
        }
    }

    #[test]
    fn test_table() {
        assert_eq!(
            walk("| A | B |\n|---|---|\n| 1 | 2 |\n"),
            vec![
                r#"<table style=""><thead><tr><th style="">A</th><th style="">B</th></tr></thead><tbody><tr><td style="">1</td><td style="">2</td></tr></tbody></table>"#
            ]
        );
    }

    #[test]
    fn test_table_column_alignment() {
        assert_eq!(
            walk("| A | B | C |\n|:--|:-:|--:|\n| 1 | 2 | 3 |\n"),
            vec![concat!(
                r#"<table style=""><thead><tr>"#,
                r#"<th style="text-align:left;">A</th>"#,
                r#"<th style="text-align:center;">B</th>"#,
                r#"<th style="text-align:right;">C</th>"#,
                r#"</tr></thead><tbody><tr>"#,
                r#"<td style="text-align:left;">1</td>"#,
                r#"<td style="text-align:center;">2</td>"#,
                r#"<td style="text-align:right;">3</td>"#,
                r#"</tr></tbody></table>"#
            )]
        );
    }

    #[test]
    fn test_skipped_image_leaves_no_markup() {
        let theme = Theme::empty();
        let converters = Converters::new(&theme, LinkConverterOptions::disabled());
        let mut images = ImageResolver::new(&ImageHandling::Skip, None);
        let blocks = DocumentWalker::new(&converters, &mut images)
            .walk(Parser::new("Before ![alt](x.png) after"))
            .expect("walk should succeed");
        assert_eq!(blocks, vec![r#"<p style="">Before  after</p>"#]);
    }
}
