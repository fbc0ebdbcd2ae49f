use serde::{Deserialize, Serialize};

/// Fixed column templates a Section can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutType {
    #[default]
    #[serde(rename = "full-width")]
    FullWidth,
    #[serde(rename = "2-equal")]
    TwoEqual,
    #[serde(rename = "3-equal")]
    ThreeEqual,
    #[serde(rename = "4-equal")]
    FourEqual,
    #[serde(rename = "sidebar-left")]
    SidebarLeft,
    #[serde(rename = "sidebar-right")]
    SidebarRight,
}

impl LayoutType {
    pub const ALL: [LayoutType; 6] = [
        LayoutType::FullWidth,
        LayoutType::TwoEqual,
        LayoutType::ThreeEqual,
        LayoutType::FourEqual,
        LayoutType::SidebarLeft,
        LayoutType::SidebarRight,
    ];

    /// Desktop widths (12-unit grid) of the columns this template creates
    pub fn column_widths(self) -> &'static [u8] {
        match self {
            LayoutType::FullWidth => &[12],
            LayoutType::TwoEqual => &[6, 6],
            LayoutType::ThreeEqual => &[4, 4, 4],
            LayoutType::FourEqual => &[3, 3, 3, 3],
            LayoutType::SidebarLeft => &[4, 8],
            LayoutType::SidebarRight => &[8, 4],
        }
    }

    /// Wire name, as persisted
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutType::FullWidth => "full-width",
            LayoutType::TwoEqual => "2-equal",
            LayoutType::ThreeEqual => "3-equal",
            LayoutType::FourEqual => "4-equal",
            LayoutType::SidebarLeft => "sidebar-left",
            LayoutType::SidebarRight => "sidebar-right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutType::FullWidth => "Full width",
            LayoutType::TwoEqual => "Two equal columns",
            LayoutType::ThreeEqual => "Three equal columns",
            LayoutType::FourEqual => "Four equal columns",
            LayoutType::SidebarLeft => "Sidebar left",
            LayoutType::SidebarRight => "Sidebar right",
        }
    }
}

/// The closed catalog of content block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Heading,
    Text,
    Image,
    Card,
    List,
    Gallery,
    Carousel,
    Accordion,
    Tabs,
    Button,
}

impl ElementType {
    pub const ALL: [ElementType; 10] = [
        ElementType::Heading,
        ElementType::Text,
        ElementType::Image,
        ElementType::Card,
        ElementType::List,
        ElementType::Gallery,
        ElementType::Carousel,
        ElementType::Accordion,
        ElementType::Tabs,
        ElementType::Button,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Heading => "heading",
            ElementType::Text => "text",
            ElementType::Image => "image",
            ElementType::Card => "card",
            ElementType::List => "list",
            ElementType::Gallery => "gallery",
            ElementType::Carousel => "carousel",
            ElementType::Accordion => "accordion",
            ElementType::Tabs => "tabs",
            ElementType::Button => "button",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ElementType::Heading => "Heading",
            ElementType::Text => "Text",
            ElementType::Image => "Image",
            ElementType::Card => "Card",
            ElementType::List => "List",
            ElementType::Gallery => "Image Gallery",
            ElementType::Carousel => "Image Carousel",
            ElementType::Accordion => "Accordion",
            ElementType::Tabs => "Tabs",
            ElementType::Button => "Button",
        }
    }

    /// Kinds that carry an `images` list fed by asset uploads
    pub fn holds_images(self) -> bool {
        matches!(self, ElementType::Gallery | ElementType::Carousel)
    }

    /// Kinds that carry a titled item list (accordion/tabs panels)
    pub fn holds_panels(self) -> bool {
        matches!(self, ElementType::Accordion | ElementType::Tabs)
    }
}
