/*!
 * # Editing Core Module
 *
 * Structural editing of a page's content tree.
 *
 * ## Architecture Overview
 *
 * ### 1. The tree is a value
 * - A [`Page`](crate::models::Page) is plain data: sections, columns,
 *   one optional level of nested columns, and typed elements
 * - Structural equality is derived, so "did anything change" is `!=`
 *
 * ### 2. Command-Based Editing
 * - Every edit is a **`Cmd`**, addressed by integer paths
 *   ([`ColumnPath`], [`ElementPath`])
 * - [`mutator::apply`] turns `(tree, cmd)` into a new tree; an address
 *   that no longer resolves yields the input tree unchanged
 * - Flat and nested columns share one code path; the one-level nesting cap
 *   is a property of [`ColumnPath`], not of duplicated operations
 *
 * ### 3. Split point
 * - Columns holding nested columns render `elements` in two halves around
 *   them; [`insertion`] keeps the stored split point valid under every
 *   add/remove
 *
 * ### 4. Defaults
 * - [`factory::create_element`] builds each of the ten element kinds fully
 *   populated
 *
 * ### 5. Session
 * - [`Editor`] owns the tree, the [`Selection`] and a version counter, and
 *   applies queued commands first in first out
 *
 * ## Module Structure
 *
 * - **`commands`**: `Cmd` enum, paths and typed field updates
 * - **`mutator`**: applies commands to a page
 * - **`insertion`**: split-point resolution
 * - **`factory`**: default element construction
 * - **`selection`**: the single active column/element selection
 * - **`editor`**: editing session with queue and version
 * - **`outline`**: plain-text view of a page
 * - **`patch`**: result metadata of an applied command
 *
 * ## Usage Pattern
 *
 * ```rust
 * use page_composer_engine::editing::*;
 * use page_composer_engine::models::{ElementType, LayoutType, Page};
 *
 * let mut editor = Editor::new(Page::new());
 * editor.apply(Cmd::AddSection { layout: LayoutType::ThreeEqual });
 * let patch = editor.apply(Cmd::AddElement {
 *     column: ColumnPath::top(0, 1),
 *     kind: ElementType::Heading,
 *     position: InsertPosition::After,
 * });
 * assert!(patch.applied);
 * assert_eq!(editor.page().sections[0].columns.len(), 3);
 * ```
 */

pub mod commands;
pub mod editor;
pub mod factory;
pub mod insertion;
pub mod mutator;
pub mod outline;
pub mod patch;
pub mod selection;

pub use commands::{
    BackgroundUpdate, Cmd, ColumnPath, ContainerUpdate, Direction, ElementPath, ElementUpdate,
};
pub use editor::Editor;
pub use factory::create_element;
pub use insertion::{InsertPosition, effective_index};
pub use patch::Patch;
pub use selection::Selection;
