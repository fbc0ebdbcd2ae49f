//! Split-point bookkeeping for columns that hold nested columns.
//!
//! A column renders `elements[..split]`, then its nested columns, then
//! `elements[split..]`. The split is stored as `nested_columns_index` and is
//! always read through [`effective_index`], which clamps it into
//! `[0, elements.len()]`. An unset index means every element renders above
//! the nested columns.

use serde::{Deserialize, Serialize};

use crate::models::{Column, Element};

/// Where a new element goes relative to a column's nested columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Above the nested columns
    Before,
    /// At the end of the column, below any nested columns
    #[default]
    After,
}

/// The split point as it should be rendered right now
pub fn effective_index(column: &Column) -> usize {
    let len = column.elements.len();
    match column.nested_columns_index {
        Some(index) => index.min(len),
        None => len,
    }
}

/// Elements above and below the nested columns. Recomputed on every call.
pub fn split(column: &Column) -> (&[Element], &[Element]) {
    column.elements.split_at(effective_index(column))
}

/// Insert `element` and keep the split point consistent.
///
/// Returns the index the element landed at.
pub fn insert_element(column: &mut Column, element: Element, position: InsertPosition) -> usize {
    let tracks_split = column.has_nested_columns() || column.nested_columns_index.is_some();
    if !tracks_split {
        column.elements.push(element);
        return column.elements.len() - 1;
    }

    let split_at = effective_index(column);
    match position {
        InsertPosition::After => {
            column.elements.push(element);
            // Freeze the split so the new element stays below the nested columns
            column.nested_columns_index = Some(split_at);
            column.elements.len() - 1
        }
        InsertPosition::Before => {
            column.elements.insert(split_at, element);
            column.nested_columns_index = Some(split_at + 1);
            split_at
        }
    }
}

/// Remove the element at `index`, shifting the split point if it sat above it.
pub fn remove_element(column: &mut Column, index: usize) -> Option<Element> {
    if index >= column.elements.len() {
        return None;
    }
    let old_split = effective_index(column);
    let removed = column.elements.remove(index);
    if column.nested_columns_index.is_some() {
        let shifted = if index < old_split {
            old_split - 1
        } else {
            old_split
        };
        column.nested_columns_index = Some(shifted.min(column.elements.len()));
    }
    Some(removed)
}

/// Which side of the split an element index sits on
pub fn is_above_split(column: &Column, index: usize) -> bool {
    index < effective_index(column)
}

/// Re-clamp a stored split point into range; used after loading content
pub fn normalize(column: &mut Column) {
    if let Some(index) = column.nested_columns_index {
        column.nested_columns_index = Some(index.min(column.elements.len()));
    }
}
