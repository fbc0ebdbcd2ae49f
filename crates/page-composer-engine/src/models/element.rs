use serde::{Deserialize, Serialize};

use crate::models::{ElementType, NodeId, Spacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_self")]
    SameTab,
    #[serde(rename = "_blank")]
    NewTab,
}

/// A typed content block.
///
/// Shared attributes live on the element itself; everything that only makes
/// sense for one kind lives in that kind's arm of [`ElementKind`]. On the
/// wire all of it is one flat object discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: NodeId,
    #[serde(flatten)]
    pub style: BlockStyle,
    #[serde(flatten)]
    pub spacing: Spacing,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Uploaded/linked images, for kinds that hold them
    pub fn images(&self) -> Option<&Vec<MediaImage>> {
        match &self.kind {
            ElementKind::Gallery(gallery) => Some(&gallery.images),
            ElementKind::Carousel(carousel) => Some(&carousel.images),
            _ => None,
        }
    }

    pub fn images_mut(&mut self) -> Option<&mut Vec<MediaImage>> {
        match &mut self.kind {
            ElementKind::Gallery(gallery) => Some(&mut gallery.images),
            ElementKind::Carousel(carousel) => Some(&mut carousel.images),
            _ => None,
        }
    }

    /// Titled panels, for accordion and tabs
    pub fn panels(&self) -> Option<&Vec<PanelItem>> {
        match &self.kind {
            ElementKind::Accordion(accordion) => Some(&accordion.accordion_items),
            ElementKind::Tabs(tabs) => Some(&tabs.tab_items),
            _ => None,
        }
    }

    pub fn panels_mut(&mut self) -> Option<&mut Vec<PanelItem>> {
        match &mut self.kind {
            ElementKind::Accordion(accordion) => Some(&mut accordion.accordion_items),
            ElementKind::Tabs(tabs) => Some(&mut tabs.tab_items),
            _ => None,
        }
    }
}

/// Attributes every block kind shares
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyle {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    Text,
    Image(ImageBlock),
    Card(CardBlock),
    List(ListBlock),
    Gallery(GalleryBlock),
    Carousel(CarouselBlock),
    Accordion(AccordionBlock),
    Tabs(TabsBlock),
    Button(ButtonBlock),
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Heading => ElementType::Heading,
            ElementKind::Text => ElementType::Text,
            ElementKind::Image(_) => ElementType::Image,
            ElementKind::Card(_) => ElementType::Card,
            ElementKind::List(_) => ElementType::List,
            ElementKind::Gallery(_) => ElementType::Gallery,
            ElementKind::Carousel(_) => ElementType::Carousel,
            ElementKind::Accordion(_) => ElementType::Accordion,
            ElementKind::Tabs(_) => ElementType::Tabs,
            ElementKind::Button(_) => ElementType::Button,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub image_width: String,
    pub aspect_ratio: String,
    pub object_fit: String,
    pub border_radius: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBlock {
    pub background_color: String,
    pub border_radius: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub target: LinkTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Bullet,
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlock {
    pub list_type: ListType,
    pub items: Vec<String>,
    pub list_style: String,
}

/// One image in a gallery or carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaImage {
    pub url: String,
    #[serde(default)]
    pub caption: String,
}

impl MediaImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionStyle {
    pub font_size: String,
    pub color: String,
    pub align: Align,
    pub show: bool,
}

/// Images per row, per breakpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridColumns {
    pub desktop: u8,
    pub tablet: u8,
    pub mobile: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryBlock {
    #[serde(default)]
    pub images: Vec<MediaImage>,
    pub columns: GridColumns,
    pub gap: String,
    pub image_height: String,
    pub caption: CaptionStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Slide,
    Fade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselBlock {
    #[serde(default)]
    pub images: Vec<MediaImage>,
    pub autoplay: bool,
    /// Milliseconds between slides
    pub interval: u32,
    pub show_dots: bool,
    pub show_arrows: bool,
    pub height: String,
    pub transition: Transition,
    pub caption: CaptionStyle,
}

/// Title/content pair behind an accordion panel or a tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelItem {
    pub title: String,
    pub content: String,
}

impl PanelItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionBlock {
    #[serde(default)]
    pub accordion_items: Vec<PanelItem>,
    pub style: String,
    pub icon_position: IconPosition,
    pub open_multiple: bool,
    pub title_color: String,
    pub content_color: String,
    pub border_color: String,
    pub active_color: String,
    pub background_color: String,
    pub border_radius: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsBlock {
    #[serde(default)]
    pub tab_items: Vec<PanelItem>,
    pub style: String,
    pub position: TabPosition,
    pub active_color: String,
    pub inactive_color: String,
    pub border_color: String,
    pub content_color: String,
    pub active_background_color: String,
    pub content_background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonBlock {
    pub button_text: String,
    #[serde(default)]
    pub button_href: String,
    #[serde(default)]
    pub button_target: LinkTarget,
    pub button_bg_color: String,
    pub button_text_color: String,
    pub border_radius: String,
}
