use crate::core::ast::Footnote;
use std::cell::RefCell;
use std::collections::HashMap;

/// Records citations and hands back their 1-based position.
///
/// Converters only ever see a shared reference, so implementations keep
/// their list behind interior mutability. A registrar belongs to a single
/// render session and must not be shared between concurrent renders.
pub trait FootnoteRegistrar {
    fn add(&self, label: &str, target: &str) -> usize;
}

/// Per-call options for the link converter.
///
/// Footnote support is a capability: citations are only produced when the
/// flag is set *and* a registrar is present.
#[derive(Clone, Copy, Default)]
pub struct LinkConverterOptions<'a> {
    pub enable_foot_note: bool,
    pub add_foot_note: Option<&'a dyn FootnoteRegistrar>,
}

impl<'a> LinkConverterOptions<'a> {
    pub fn new(enable_foot_note: bool, add_foot_note: Option<&'a dyn FootnoteRegistrar>) -> Self {
        Self {
            enable_foot_note,
            add_foot_note,
        }
    }

    /// Options with footnotes turned off and no registrar.
    pub fn disabled() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for LinkConverterOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkConverterOptions")
            .field("enable_foot_note", &self.enable_foot_note)
            .field("add_foot_note", &self.add_foot_note.is_some())
            .finish()
    }
}

/// Footnote list owned by one render session.
///
/// Registering the same `(label, target)` pair twice returns the index of
/// the first registration instead of appending a duplicate.
#[derive(Debug, Default)]
pub struct FootnoteList {
    inner: RefCell<FootnoteState>,
}

#[derive(Debug, Default)]
struct FootnoteState {
    footnotes: Vec<Footnote>,
    index_by_entry: HashMap<Footnote, usize>,
}

impl FootnoteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().footnotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn footnote_at(&self, index: usize) -> Option<Footnote> {
        index
            .checked_sub(1)
            .and_then(|i| self.inner.borrow().footnotes.get(i).cloned())
    }

    pub fn into_footnotes(self) -> Vec<Footnote> {
        self.inner.into_inner().footnotes
    }
}

impl FootnoteRegistrar for FootnoteList {
    fn add(&self, label: &str, target: &str) -> usize {
        let entry = Footnote::new(label, target);
        let mut state = self.inner.borrow_mut();

        if let Some(idx) = state.index_by_entry.get(&entry).copied() {
            return idx;
        }

        state.footnotes.push(entry.clone());
        let idx = state.footnotes.len();
        state.index_by_entry.insert(entry, idx);
        tracing::debug!(index = idx, label, target, "Registered footnote");

        idx
    }
}
