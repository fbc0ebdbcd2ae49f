pub mod catalog;
pub mod element;
pub mod page;

pub use catalog::{ElementType, LayoutType};
pub use element::*;
pub use page::*;
