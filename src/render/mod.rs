mod escape;
mod html;

use crate::core::ast::DocumentAst;
use crate::Result;

pub use escape::escape_html;
pub use html::{HtmlRenderer, FOOTNOTE_TITLE};

pub trait Renderer {
    fn render(&self, document: &DocumentAst) -> Result<String>;
}
