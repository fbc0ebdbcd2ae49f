use crate::editing::Selection;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// False when the command's address no longer resolved and nothing changed
    pub applied: bool,
    pub version: u64,
    pub selection: Selection,
}
