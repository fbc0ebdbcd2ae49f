use serde::{Deserialize, Serialize};

use crate::models::{Element, LayoutType};

/// Locally unique identifier for sections, columns and elements.
///
/// Persisted ids are opaque strings; freshly created nodes get a uuid v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structural problems found when validating a tree loaded from storage
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ModelError {
    #[error("nested column {nested} in section {section} column {column} holds further columns")]
    NestingTooDeep {
        section: usize,
        column: usize,
        nested: usize,
    },
}

/// A page: the ordered sequence of sections, persisted as a JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    pub sections: Vec<Section>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Check the structural rules serde alone cannot express.
    ///
    /// Nested columns may not hold nested columns of their own. An empty
    /// `columns` list on a nested column holds nothing and is accepted.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (section_index, section) in self.sections.iter().enumerate() {
            for (column_index, column) in section.columns.iter().enumerate() {
                for (nested_index, nested) in column.nested_columns().iter().enumerate() {
                    if nested.has_nested_columns() {
                        return Err(ModelError::NestingTooDeep {
                            section: section_index,
                            column: column_index,
                            nested: nested_index,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Top-level horizontal band laid out with a fixed column template.
///
/// Both configs are always fully populated: a section is born with defaults
/// and persisted content missing them is filled in on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: NodeId,
    pub layout_type: LayoutType,
    #[serde(default)]
    pub background_config: BackgroundConfig,
    #[serde(default)]
    pub container_config: ContainerConfig,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Section {
    /// New section with one column per template slot
    pub fn with_layout(layout_type: LayoutType) -> Self {
        let columns = layout_type
            .column_widths()
            .iter()
            .map(|width| Column::with_width(*width))
            .collect();
        Self {
            id: NodeId::new(),
            layout_type,
            background_config: BackgroundConfig::default(),
            container_config: ContainerConfig::default(),
            columns,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    #[default]
    Solid,
    Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub color1: String,
    pub color2: String,
    pub angle: u16,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            color1: "#3b82f6".to_string(),
            color2: "#8b5cf6".to_string(),
            angle: 135,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundConfig {
    #[serde(rename = "type")]
    pub kind: BackgroundType,
    pub color: String,
    pub gradient: Gradient,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            kind: BackgroundType::Solid,
            color: "#ffffff".to_string(),
            gradient: Gradient::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerConfig {
    pub max_width: String,
    pub horizontal_padding: String,
    pub vertical_padding: String,
    pub padding_top: String,
    pub padding_right: String,
    pub padding_bottom: String,
    pub padding_left: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            max_width: "7xl".to_string(),
            horizontal_padding: "16".to_string(),
            vertical_padding: "32".to_string(),
            padding_top: "32".to_string(),
            padding_right: "16".to_string(),
            padding_bottom: "32".to_string(),
            padding_left: "16".to_string(),
        }
    }
}

/// Side of a box, used by margin/padding setters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Which spacing property a setter targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "side", rename_all = "lowercase")]
pub enum SpacingField {
    Margin(Side),
    Padding(Side),
}

/// Per-side margins and paddings shared by columns and elements.
///
/// Values are opaque size tokens; `None` means "not set".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<String>,
}

impl Spacing {
    /// Same padding token on all four sides
    pub fn uniform_padding(value: &str) -> Self {
        Self {
            padding_top: Some(value.to_string()),
            padding_right: Some(value.to_string()),
            padding_bottom: Some(value.to_string()),
            padding_left: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn get(&self, field: SpacingField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set one side; an empty token clears it
    pub fn set(&mut self, field: SpacingField, value: &str) {
        *self.slot_mut(field) = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    fn slot(&self, field: SpacingField) -> &Option<String> {
        match field {
            SpacingField::Margin(Side::Top) => &self.margin_top,
            SpacingField::Margin(Side::Right) => &self.margin_right,
            SpacingField::Margin(Side::Bottom) => &self.margin_bottom,
            SpacingField::Margin(Side::Left) => &self.margin_left,
            SpacingField::Padding(Side::Top) => &self.padding_top,
            SpacingField::Padding(Side::Right) => &self.padding_right,
            SpacingField::Padding(Side::Bottom) => &self.padding_bottom,
            SpacingField::Padding(Side::Left) => &self.padding_left,
        }
    }

    fn slot_mut(&mut self, field: SpacingField) -> &mut Option<String> {
        match field {
            SpacingField::Margin(Side::Top) => &mut self.margin_top,
            SpacingField::Margin(Side::Right) => &mut self.margin_right,
            SpacingField::Margin(Side::Bottom) => &mut self.margin_bottom,
            SpacingField::Margin(Side::Left) => &mut self.margin_left,
            SpacingField::Padding(Side::Top) => &mut self.padding_top,
            SpacingField::Padding(Side::Right) => &mut self.padding_right,
            SpacingField::Padding(Side::Bottom) => &mut self.padding_bottom,
            SpacingField::Padding(Side::Left) => &mut self.padding_left,
        }
    }
}

/// Viewport a column width applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];
}

/// Grid width bounds (12-unit grid)
pub const MIN_COLUMN_WIDTH: u8 = 1;
pub const MAX_COLUMN_WIDTH: u8 = 12;

/// A slot within a section, or (one level down) within another column.
///
/// The same type serves both depths. `columns` is only ever populated on
/// top-level columns; [`Page::validate`] rejects deeper nesting on load and
/// the edit commands cannot address it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: NodeId,
    pub width: u8,
    pub width_tablet: u8,
    pub width_mobile: u8,
    #[serde(default)]
    pub card: bool,
    #[serde(flatten)]
    pub spacing: Spacing,
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Nested columns, rendered between the two halves of `elements`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    /// Split point in `elements`; see [`crate::editing::insertion`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_columns_index: Option<usize>,
}

impl Column {
    /// Column added by hand: half width on desktop, full width below
    pub fn new() -> Self {
        Self::with_width(6)
    }

    pub fn with_width(width: u8) -> Self {
        Self {
            id: NodeId::new(),
            width,
            width_tablet: 12,
            width_mobile: 12,
            card: false,
            spacing: Spacing::default(),
            elements: Vec::new(),
            columns: None,
            nested_columns_index: None,
        }
    }

    pub fn width_at(&self, breakpoint: Breakpoint) -> u8 {
        match breakpoint {
            Breakpoint::Desktop => self.width,
            Breakpoint::Tablet => self.width_tablet,
            Breakpoint::Mobile => self.width_mobile,
        }
    }

    /// Set a breakpoint width, clamped into the 12-unit grid
    pub fn set_width(&mut self, breakpoint: Breakpoint, width: u8) {
        let width = width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        match breakpoint {
            Breakpoint::Desktop => self.width = width,
            Breakpoint::Tablet => self.width_tablet = width,
            Breakpoint::Mobile => self.width_mobile = width,
        }
    }

    pub fn nested_columns(&self) -> &[Column] {
        self.columns.as_deref().unwrap_or(&[])
    }

    pub fn has_nested_columns(&self) -> bool {
        !self.nested_columns().is_empty()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}
