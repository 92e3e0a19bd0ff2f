use crate::core::ast::{DocumentAst, Footnote};
use crate::render::Renderer;
use crate::theme::{StyleRole, Theme};
use crate::Result;
use std::fmt::Write;

/// Heading shown above the collected citations.
pub const FOOTNOTE_TITLE: &str = "References";

/// Assembles converted blocks into the final article markup.
///
/// Blocks go inside a styled wrapper `<section>`; collected footnotes are
/// appended as a numbered reference list.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer<'a> {
    styles: &'a Theme,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(styles: &'a Theme) -> Self {
        Self { styles }
    }

    fn render_footnotes(&self, footnotes: &[Footnote], out: &mut String) -> Result<()> {
        let styles = self.styles;
        write!(
            out,
            r#"<h3 style="{}">{}</h3><section style="{}">"#,
            styles.style_text(StyleRole::FootnoteTitle),
            FOOTNOTE_TITLE,
            styles.style_text(StyleRole::FootnoteSection)
        )?;

        for (i, note) in footnotes.iter().enumerate() {
            write!(
                out,
                r#"<p style="{}"><span style="{}">[{}]</span>"#,
                styles.style_text(StyleRole::FootnoteItem),
                styles.style_text(StyleRole::FootnoteIndex),
                i + 1
            )?;
            if !note.label.is_empty() && note.label != note.target {
                write!(out, "{}: ", note.label)?;
            }
            write!(
                out,
                r#"<i style="{}">{}</i></p>"#,
                styles.style_text(StyleRole::FootnoteTarget),
                note.target
            )?;
        }

        out.push_str("</section>");
        Ok(())
    }
}

impl Renderer for HtmlRenderer<'_> {
    fn render(&self, document: &DocumentAst) -> Result<String> {
        let mut out = String::new();
        write!(
            out,
            r#"<section style="{}">"#,
            self.styles.style_text(StyleRole::Wrapper)
        )?;

        for block in &document.blocks {
            out.push_str(block);
        }

        let footnotes = &document.references.footnotes;
        if !footnotes.is_empty() {
            self.render_footnotes(footnotes, &mut out)?;
        }

        out.push_str("</section>");
        Ok(out)
    }
}
