use crate::models::{
    AccordionBlock, Align, BlockStyle, ButtonBlock, CaptionStyle, CardBlock, CarouselBlock,
    Element, ElementKind, ElementType, GalleryBlock, GridColumns, IconPosition, ImageBlock,
    LinkTarget, ListBlock, ListType, NodeId, PanelItem, Spacing, TabPosition, TabsBlock,
    Transition,
};

const HEADING_COLOR: &str = "#000000";
const BODY_COLOR: &str = "#4b5563";

/// Build a fully populated element of the requested kind with a fresh id.
///
/// Every field the kind defines is set; construction cannot fail.
pub fn create_element(kind: ElementType) -> Element {
    let (style, spacing, kind) = match kind {
        ElementType::Heading => (
            style("Heading", HEADING_COLOR, "3xl", Some(Align::Left)),
            Spacing::default(),
            ElementKind::Heading,
        ),
        ElementType::Text => (
            style("Start typing your text here.", BODY_COLOR, "base", Some(Align::Left)),
            Spacing::default(),
            ElementKind::Text,
        ),
        ElementType::Image => (
            BlockStyle {
                align: Some(Align::Center),
                ..BlockStyle::default()
            },
            Spacing::default(),
            ElementKind::Image(ImageBlock {
                image_width: "100".to_string(),
                aspect_ratio: "auto".to_string(),
                object_fit: "cover".to_string(),
                border_radius: "0".to_string(),
            }),
        ),
        ElementType::Card => (
            style("Card content", BODY_COLOR, "base", Some(Align::Left)),
            Spacing::default(),
            ElementKind::Card(CardBlock {
                background_color: "#ffffff".to_string(),
                border_radius: "8".to_string(),
                href: String::new(),
                target: LinkTarget::SameTab,
            }),
        ),
        ElementType::List => (
            style("", BODY_COLOR, "base", Some(Align::Left)),
            Spacing::default(),
            ElementKind::List(ListBlock {
                list_type: ListType::Bullet,
                items: vec![
                    "Item 1".to_string(),
                    "Item 2".to_string(),
                    "Item 3".to_string(),
                ],
                list_style: "disc".to_string(),
            }),
        ),
        ElementType::Gallery => (
            BlockStyle::default(),
            Spacing::default(),
            ElementKind::Gallery(GalleryBlock {
                images: Vec::new(),
                columns: GridColumns {
                    desktop: 3,
                    tablet: 2,
                    mobile: 1,
                },
                gap: "16".to_string(),
                image_height: "200".to_string(),
                caption: CaptionStyle {
                    font_size: "sm".to_string(),
                    color: "#6b7280".to_string(),
                    align: Align::Center,
                    show: true,
                },
            }),
        ),
        ElementType::Carousel => (
            BlockStyle::default(),
            Spacing::default(),
            ElementKind::Carousel(CarouselBlock {
                images: Vec::new(),
                autoplay: true,
                interval: 5000,
                show_dots: true,
                show_arrows: true,
                height: "400".to_string(),
                transition: Transition::Slide,
                caption: CaptionStyle {
                    font_size: "base".to_string(),
                    color: "#ffffff".to_string(),
                    align: Align::Center,
                    show: true,
                },
            }),
        ),
        ElementType::Accordion => (
            BlockStyle::default(),
            Spacing::default(),
            ElementKind::Accordion(AccordionBlock {
                accordion_items: (1..=3).map(accordion_item).collect(),
                style: "default".to_string(),
                icon_position: IconPosition::Right,
                open_multiple: false,
                title_color: "#111827".to_string(),
                content_color: BODY_COLOR.to_string(),
                border_color: "#e5e7eb".to_string(),
                active_color: "#3b82f6".to_string(),
                background_color: "#ffffff".to_string(),
                border_radius: "8".to_string(),
            }),
        ),
        ElementType::Tabs => (
            BlockStyle::default(),
            Spacing::default(),
            ElementKind::Tabs(TabsBlock {
                tab_items: (1..=3).map(tab_item).collect(),
                style: "default".to_string(),
                position: TabPosition::Top,
                active_color: "#3b82f6".to_string(),
                inactive_color: "#6b7280".to_string(),
                border_color: "#e5e7eb".to_string(),
                content_color: BODY_COLOR.to_string(),
                active_background_color: "#ffffff".to_string(),
                content_background_color: "#ffffff".to_string(),
            }),
        ),
        ElementType::Button => (
            style("Click Me", "#ffffff", "base", Some(Align::Left)),
            Spacing::uniform_padding("16"),
            ElementKind::Button(ButtonBlock {
                button_text: "Click Me".to_string(),
                button_href: String::new(),
                button_target: LinkTarget::SameTab,
                button_bg_color: "#3b82f6".to_string(),
                button_text_color: "#ffffff".to_string(),
                border_radius: "6".to_string(),
            }),
        ),
    };

    Element {
        id: NodeId::new(),
        style,
        spacing,
        kind,
    }
}

/// Seed/appended accordion panel; `number` is 1-based
pub fn accordion_item(number: usize) -> PanelItem {
    PanelItem::new(
        format!("Accordion Item {number}"),
        format!("Content for accordion item {number}."),
    )
}

/// Seed/appended tab; `number` is 1-based
pub fn tab_item(number: usize) -> PanelItem {
    PanelItem::new(format!("Tab {number}"), format!("Content for tab {number}."))
}

fn style(value: &str, color: &str, font_size: &str, align: Option<Align>) -> BlockStyle {
    BlockStyle {
        value: value.to_string(),
        color: Some(color.to_string()),
        font_size: Some(font_size.to_string()),
        align,
    }
}
