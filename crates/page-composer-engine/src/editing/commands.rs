use serde::{Deserialize, Serialize};

use crate::editing::insertion::InsertPosition;
use crate::models::{
    Align, BackgroundType, Breakpoint, ElementType, IconPosition, LayoutType, LinkTarget,
    ListType, Side, SpacingField, TabPosition, Transition,
};

/// Address of a column: a top-level column, or one of its nested columns.
///
/// Nesting is capped at one level by construction: there is no way to spell
/// a deeper address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnPath {
    pub section: usize,
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<usize>,
}

impl ColumnPath {
    pub fn top(section: usize, column: usize) -> Self {
        Self {
            section,
            column,
            nested: None,
        }
    }

    pub fn nested(section: usize, column: usize, nested: usize) -> Self {
        Self {
            section,
            column,
            nested: Some(nested),
        }
    }

    pub fn is_nested(&self) -> bool {
        self.nested.is_some()
    }

    pub fn element(self, element: usize) -> ElementPath {
        ElementPath {
            column: self,
            element,
        }
    }

    /// The top-level column this path lives in
    pub fn parent(self) -> ColumnPath {
        ColumnPath::top(self.section, self.column)
    }
}

/// Address of one element inside a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementPath {
    pub column: ColumnPath,
    pub element: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Edit algebra for the content tree.
///
/// One variant per structural operation. Commands are applied with
/// [`crate::editing::mutator::apply`]; any command whose address does not
/// resolve against the current tree leaves the tree untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Cmd {
    AddSection {
        layout: LayoutType,
    },
    RemoveSection {
        section: usize,
    },
    MoveSection {
        section: usize,
        direction: Direction,
    },
    UpdateBackground {
        section: usize,
        update: BackgroundUpdate,
    },
    UpdateContainer {
        section: usize,
        update: ContainerUpdate,
    },
    /// Append a top-level column to a section
    AddColumn {
        section: usize,
    },
    /// Append a nested column inside a top-level column
    AddNestedColumn {
        parent: ColumnPath,
    },
    /// Remove a column at either depth
    RemoveColumn {
        column: ColumnPath,
    },
    UpdateColumnWidth {
        column: ColumnPath,
        breakpoint: Breakpoint,
        width: u8,
    },
    UpdateColumnSpacing {
        column: ColumnPath,
        field: SpacingField,
        value: String,
    },
    ToggleColumnCard {
        column: ColumnPath,
    },
    AddElement {
        column: ColumnPath,
        kind: ElementType,
        position: InsertPosition,
    },
    UpdateElement {
        element: ElementPath,
        update: ElementUpdate,
    },
    RemoveElement {
        element: ElementPath,
    },
    MoveElement {
        element: ElementPath,
        direction: Direction,
    },
    DuplicateElement {
        element: ElementPath,
    },
    /// Append uploaded image URLs to a gallery or carousel, in order
    AppendImages {
        element: ElementPath,
        urls: Vec<String>,
    },
    RemoveImage {
        element: ElementPath,
        index: usize,
    },
    UpdateCarouselCaption {
        element: ElementPath,
        index: usize,
        text: String,
    },
    /// Append a default accordion panel or tab
    AddItem {
        element: ElementPath,
    },
    RemoveItem {
        element: ElementPath,
        index: usize,
    },
    UpdateItemTitle {
        element: ElementPath,
        index: usize,
        text: String,
    },
    UpdateItemContent {
        element: ElementPath,
        index: usize,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum BackgroundUpdate {
    Type(BackgroundType),
    Color(String),
    GradientColor1(String),
    GradientColor2(String),
    GradientAngle(u16),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ContainerUpdate {
    MaxWidth(String),
    HorizontalPadding(String),
    VerticalPadding(String),
    Padding(Side, String),
}

/// Typed field setter for one element.
///
/// Shared fields apply to every kind. Variant fields only apply when the
/// addressed element is of that kind; otherwise the update is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ElementUpdate {
    Value(String),
    Color(String),
    FontSize(String),
    Align(Align),
    Spacing(SpacingField, String),
    // image
    ImageWidth(String),
    AspectRatio(String),
    ObjectFit(String),
    // image, card, accordion, button
    BorderRadius(String),
    // card, accordion
    BackgroundColor(String),
    // card
    Href(String),
    Target(LinkTarget),
    // list
    ListType(ListType),
    ListStyle(String),
    ListItems(Vec<String>),
    // gallery
    GalleryColumns(Breakpoint, u8),
    Gap(String),
    ImageHeight(String),
    // gallery, carousel
    CaptionFontSize(String),
    CaptionColor(String),
    CaptionAlign(Align),
    ShowCaption(bool),
    // carousel
    Autoplay(bool),
    Interval(u32),
    ShowDots(bool),
    ShowArrows(bool),
    Height(String),
    Transition(Transition),
    // accordion, tabs
    PanelStyle(String),
    IconPosition(IconPosition),
    OpenMultiple(bool),
    TitleColor(String),
    ContentColor(String),
    BorderColor(String),
    ActiveColor(String),
    InactiveColor(String),
    ActiveBackgroundColor(String),
    ContentBackgroundColor(String),
    TabPosition(TabPosition),
    // button
    ButtonText(String),
    ButtonHref(String),
    ButtonTarget(LinkTarget),
    ButtonBgColor(String),
    ButtonTextColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_path_helpers() {
        let path = ColumnPath::nested(1, 2, 0);

        assert!(path.is_nested());
        assert_eq!(path.parent(), ColumnPath::top(1, 2));
        assert_eq!(
            path.element(3),
            ElementPath {
                column: path,
                element: 3
            }
        );
    }

    #[test]
    fn test_commands_have_a_stable_json_shape() {
        let cmd = Cmd::AddElement {
            column: ColumnPath::top(0, 1),
            kind: ElementType::Gallery,
            position: InsertPosition::Before,
        };

        let json = serde_json::to_value(&cmd).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "op": "addElement",
                "column": {"section": 0, "column": 1},
                "kind": "gallery",
                "position": "before",
            })
        );
        let back: Cmd = serde_json::from_value(json).unwrap();
        assert_eq!(back, cmd);
    }
}
