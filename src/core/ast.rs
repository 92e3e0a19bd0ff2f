/// Converted document, ready for a [`Renderer`](crate::render::Renderer).
#[derive(Debug, Clone, Default)]
pub struct DocumentAst {
    /// Top-level block fragments, already converted to styled markup.
    pub blocks: Vec<String>,
    pub references: ReferenceDefinitions,
}

/// Citations collected while walking the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDefinitions {
    pub footnotes: Vec<Footnote>,
}

/// One entry in the footnote list: what to show and where it points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Footnote {
    pub label: String,
    pub target: String,
}

impl Footnote {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}
