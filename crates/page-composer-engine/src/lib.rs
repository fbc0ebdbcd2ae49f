pub mod editing;
pub mod io;
pub mod models;

// Re-export key types for easier usage
pub use editing::{
    Cmd, ColumnPath, Editor, ElementPath, ElementUpdate, InsertPosition, Patch, Selection,
};
pub use io::{IoError, LoadedContent};
pub use models::{Column, Element, ElementKind, ElementType, LayoutType, Page, Section};
