use std::collections::VecDeque;

use crate::editing::{Cmd, ColumnPath, ElementPath, Patch, Selection, mutator};
use crate::models::Page;

/// One author's editing session over a page.
///
/// Holds the current tree, the selection and a version counter. Every
/// [`Cmd`] replaces the tree atomically; commands queued with
/// [`Editor::queue`] are applied in arrival order by [`Editor::flush`].
#[derive(Debug, Clone, Default)]
pub struct Editor {
    page: Page,
    selection: Selection,
    version: u64,
    pending: VecDeque<Cmd>,
}

impl Editor {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select_column(&mut self, path: ColumnPath) {
        self.selection.select_column(path);
    }

    pub fn select_element(&mut self, path: ElementPath) {
        self.selection.select_element(path);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Apply one command to the current tree.
    ///
    /// The mutator resolves the whole address before touching anything, so
    /// the tree is edited in place. The version only moves when the command
    /// applied. A selection the command invalidated (its section, column or
    /// element is gone) is cleared.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let applied = mutator::apply_in_place(&mut self.page, &cmd);
        if applied {
            self.version += 1;
            if !self.selection.resolves_in(&self.page) {
                log::debug!("dropping stale selection {:?}", self.selection);
                self.selection.clear();
            }
        }
        Patch {
            applied,
            version: self.version,
            selection: self.selection,
        }
    }

    /// Defer a command until the next [`Editor::flush`]
    pub fn queue(&mut self, cmd: Cmd) {
        self.pending.push_back(cmd);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply all queued commands, first in first out
    pub fn flush(&mut self) -> Vec<Patch> {
        let mut patches = Vec::with_capacity(self.pending.len());
        while let Some(cmd) = self.pending.pop_front() {
            patches.push(self.apply(cmd));
        }
        patches
    }
}
