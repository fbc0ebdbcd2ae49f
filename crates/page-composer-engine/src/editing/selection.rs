use serde::{Deserialize, Serialize};

use crate::editing::commands::{ColumnPath, ElementPath};
use crate::editing::mutator;
use crate::models::Page;

/// What the author currently has selected: nothing, one column, or one element.
///
/// Being an enum, at most one of the two can ever be active; selecting one
/// replaces the other. Selection never touches the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    None,
    Column(ColumnPath),
    Element(ElementPath),
}

impl Selection {
    pub fn select_column(&mut self, path: ColumnPath) {
        *self = Selection::Column(path);
    }

    pub fn select_element(&mut self, path: ElementPath) {
        *self = Selection::Element(path);
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn selected_column(&self) -> Option<ColumnPath> {
        match self {
            Selection::Column(path) => Some(*path),
            _ => None,
        }
    }

    pub fn selected_element(&self) -> Option<ElementPath> {
        match self {
            Selection::Element(path) => Some(*path),
            _ => None,
        }
    }

    /// The column the selection lives in, whichever kind it is
    pub fn column(&self) -> Option<ColumnPath> {
        match self {
            Selection::None => None,
            Selection::Column(path) => Some(*path),
            Selection::Element(path) => Some(path.column),
        }
    }

    /// Whether the selected address still resolves in `page`
    pub fn resolves_in(&self, page: &Page) -> bool {
        match self {
            Selection::None => true,
            Selection::Column(path) => mutator::column(page, *path).is_some(),
            Selection::Element(path) => mutator::element(page, *path).is_some(),
        }
    }
}
