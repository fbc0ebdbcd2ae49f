//! Structural edit operations over a [`Page`].
//!
//! Every operation resolves its address first and only then mutates, so a
//! command either applies completely or not at all. Addresses can be stale
//! (a UI may still hold paths into a tree an earlier event already changed);
//! those commands are logged and ignored.

use crate::editing::commands::{
    BackgroundUpdate, Cmd, ColumnPath, ContainerUpdate, Direction, ElementPath, ElementUpdate,
};
use crate::editing::factory::{accordion_item, create_element, tab_item};
use crate::editing::insertion;
use crate::models::{
    BackgroundConfig, Breakpoint, Column, ContainerConfig, Element, ElementKind, MediaImage,
    NodeId, Page, Section, Side,
};

/// Apply `cmd` to a copy of `page` and return the copy.
///
/// Stale addresses yield a tree equal to the input.
pub fn apply(page: &Page, cmd: &Cmd) -> Page {
    let mut next = page.clone();
    apply_in_place(&mut next, cmd);
    next
}

/// Apply `cmd` to `page` directly. Returns whether the tree changed.
pub fn apply_in_place(page: &mut Page, cmd: &Cmd) -> bool {
    let applied = dispatch(page, cmd);
    if !applied {
        log::debug!("ignored command with unresolved address: {cmd:?}");
    }
    applied
}

fn dispatch(page: &mut Page, cmd: &Cmd) -> bool {
    match cmd {
        Cmd::AddSection { layout } => {
            page.sections.push(Section::with_layout(*layout));
            true
        }
        Cmd::RemoveSection { section } => {
            if *section >= page.sections.len() {
                return false;
            }
            page.sections.remove(*section);
            true
        }
        Cmd::MoveSection { section, direction } => {
            match neighbour(*section, *direction, page.sections.len()) {
                Some(other) => {
                    page.sections.swap(*section, other);
                    true
                }
                None => false,
            }
        }
        Cmd::UpdateBackground { section, update } => page
            .sections
            .get_mut(*section)
            .map(|s| update_background(&mut s.background_config, update))
            .is_some(),
        Cmd::UpdateContainer { section, update } => page
            .sections
            .get_mut(*section)
            .map(|s| update_container(&mut s.container_config, update))
            .is_some(),
        Cmd::AddColumn { section } => match page.sections.get_mut(*section) {
            Some(section) => {
                section.columns.push(Column::new());
                true
            }
            None => false,
        },
        Cmd::AddNestedColumn { parent } => {
            if parent.is_nested() {
                log::debug!("refusing to nest a column inside nested column {parent:?}");
                return false;
            }
            match column_mut(page, *parent) {
                Some(column) => {
                    column.columns.get_or_insert_with(Vec::new).push(Column::new());
                    true
                }
                None => false,
            }
        }
        Cmd::RemoveColumn { column } => remove_column(page, *column),
        Cmd::UpdateColumnWidth {
            column,
            breakpoint,
            width,
        } => with_column(page, *column, |c| c.set_width(*breakpoint, *width)),
        Cmd::UpdateColumnSpacing {
            column,
            field,
            value,
        } => with_column(page, *column, |c| c.spacing.set(*field, value)),
        Cmd::ToggleColumnCard { column } => with_column(page, *column, |c| c.card = !c.card),
        Cmd::AddElement {
            column,
            kind,
            position,
        } => with_column(page, *column, |c| {
            insertion::insert_element(c, create_element(*kind), *position);
        }),
        Cmd::UpdateElement { element, update } => {
            element_mut(page, *element).is_some_and(|e| update_element(e, update))
        }
        Cmd::RemoveElement { element } => column_mut(page, element.column)
            .is_some_and(|c| insertion::remove_element(c, element.element).is_some()),
        Cmd::MoveElement { element, direction } => column_mut(page, element.column)
            .is_some_and(|c| move_element(c, element.element, *direction)),
        Cmd::DuplicateElement { element } => column_mut(page, element.column)
            .is_some_and(|c| duplicate_element(c, element.element)),
        Cmd::AppendImages { element, urls } => {
            if urls.is_empty() {
                return false;
            }
            match element_mut(page, *element).and_then(Element::images_mut) {
                Some(images) => {
                    images.extend(urls.iter().map(MediaImage::new));
                    true
                }
                None => false,
            }
        }
        Cmd::RemoveImage { element, index } => element_mut(page, *element)
            .and_then(Element::images_mut)
            .is_some_and(|images| remove_at(images, *index)),
        Cmd::UpdateCarouselCaption {
            element,
            index,
            text,
        } => match element_mut(page, *element).map(|e| &mut e.kind) {
            Some(ElementKind::Carousel(carousel)) => match carousel.images.get_mut(*index) {
                Some(image) => {
                    image.caption = text.clone();
                    true
                }
                None => false,
            },
            _ => false,
        },
        Cmd::AddItem { element } => element_mut(page, *element).is_some_and(add_panel),
        Cmd::RemoveItem { element, index } => element_mut(page, *element)
            .and_then(Element::panels_mut)
            .is_some_and(|items| remove_at(items, *index)),
        Cmd::UpdateItemTitle {
            element,
            index,
            text,
        } => element_mut(page, *element)
            .and_then(Element::panels_mut)
            .and_then(|items| items.get_mut(*index))
            .map(|item| item.title = text.clone())
            .is_some(),
        Cmd::UpdateItemContent {
            element,
            index,
            text,
        } => element_mut(page, *element)
            .and_then(Element::panels_mut)
            .and_then(|items| items.get_mut(*index))
            .map(|item| item.content = text.clone())
            .is_some(),
    }
}

/// Resolve a column address at either depth
pub fn column(page: &Page, path: ColumnPath) -> Option<&Column> {
    let column = page.sections.get(path.section)?.columns.get(path.column)?;
    match path.nested {
        Some(nested) => column.columns.as_ref()?.get(nested),
        None => Some(column),
    }
}

/// Resolve an element address
pub fn element(page: &Page, path: ElementPath) -> Option<&Element> {
    column(page, path.column)?.elements.get(path.element)
}

fn column_mut(page: &mut Page, path: ColumnPath) -> Option<&mut Column> {
    let column = page
        .sections
        .get_mut(path.section)?
        .columns
        .get_mut(path.column)?;
    match path.nested {
        Some(nested) => column.columns.as_mut()?.get_mut(nested),
        None => Some(column),
    }
}

fn element_mut(page: &mut Page, path: ElementPath) -> Option<&mut Element> {
    column_mut(page, path.column)?
        .elements
        .get_mut(path.element)
}

fn with_column(page: &mut Page, path: ColumnPath, edit: impl FnOnce(&mut Column)) -> bool {
    match column_mut(page, path) {
        Some(column) => {
            edit(column);
            true
        }
        None => false,
    }
}

fn neighbour(index: usize, direction: Direction, len: usize) -> Option<usize> {
    if index >= len {
        return None;
    }
    match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1).filter(|next| *next < len),
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index >= items.len() {
        return false;
    }
    items.remove(index);
    true
}

fn remove_column(page: &mut Page, path: ColumnPath) -> bool {
    match path.nested {
        Some(nested) => {
            let Some(parent) = column_mut(page, path.parent()) else {
                return false;
            };
            let Some(children) = parent.columns.as_mut() else {
                return false;
            };
            if !remove_at(children, nested) {
                return false;
            }
            if children.is_empty() {
                // The list stays (empty); the split point goes back to "all above"
                parent.nested_columns_index = None;
            }
            true
        }
        None => page
            .sections
            .get_mut(path.section)
            .is_some_and(|section| remove_at(&mut section.columns, path.column)),
    }
}

fn move_element(column: &mut Column, index: usize, direction: Direction) -> bool {
    let Some(other) = neighbour(index, direction, column.elements.len()) else {
        return false;
    };
    if insertion::is_above_split(column, index) != insertion::is_above_split(column, other) {
        return false;
    }
    column.elements.swap(index, other);
    true
}

fn duplicate_element(column: &mut Column, index: usize) -> bool {
    let Some(original) = column.elements.get(index) else {
        return false;
    };
    let copy = Element {
        id: NodeId::new(),
        ..original.clone()
    };
    let split = insertion::effective_index(column);
    column.elements.insert(index + 1, copy);
    if column.nested_columns_index.is_some() && index < split {
        column.nested_columns_index = Some(split + 1);
    }
    true
}

fn add_panel(element: &mut Element) -> bool {
    match &mut element.kind {
        ElementKind::Accordion(accordion) => {
            let number = accordion.accordion_items.len() + 1;
            accordion.accordion_items.push(accordion_item(number));
            true
        }
        ElementKind::Tabs(tabs) => {
            let number = tabs.tab_items.len() + 1;
            tabs.tab_items.push(tab_item(number));
            true
        }
        _ => false,
    }
}

fn update_background(config: &mut BackgroundConfig, update: &BackgroundUpdate) {
    match update {
        BackgroundUpdate::Type(kind) => config.kind = *kind,
        BackgroundUpdate::Color(color) => config.color = color.clone(),
        BackgroundUpdate::GradientColor1(color) => config.gradient.color1 = color.clone(),
        BackgroundUpdate::GradientColor2(color) => config.gradient.color2 = color.clone(),
        BackgroundUpdate::GradientAngle(angle) => config.gradient.angle = *angle % 360,
    }
}

fn update_container(config: &mut ContainerConfig, update: &ContainerUpdate) {
    match update {
        ContainerUpdate::MaxWidth(value) => config.max_width = value.clone(),
        ContainerUpdate::HorizontalPadding(value) => config.horizontal_padding = value.clone(),
        ContainerUpdate::VerticalPadding(value) => config.vertical_padding = value.clone(),
        ContainerUpdate::Padding(side, value) => {
            let slot = match side {
                Side::Top => &mut config.padding_top,
                Side::Right => &mut config.padding_right,
                Side::Bottom => &mut config.padding_bottom,
                Side::Left => &mut config.padding_left,
            };
            *slot = value.clone();
        }
    }
}

/// Apply a field update; false when the field does not belong to this kind
fn update_element(element: &mut Element, update: &ElementUpdate) -> bool {
    use ElementKind as K;
    use ElementUpdate as U;

    let style = &mut element.style;
    match (update, &mut element.kind) {
        (U::Value(value), K::Button(button)) => {
            style.value = value.clone();
            button.button_text = value.clone();
        }
        (U::Value(value), _) => style.value = value.clone(),
        (U::Color(color), _) => style.color = Some(color.clone()),
        (U::FontSize(size), _) => style.font_size = Some(size.clone()),
        (U::Align(align), _) => style.align = Some(*align),
        (U::Spacing(field, value), _) => element.spacing.set(*field, value),

        (U::ImageWidth(v), K::Image(image)) => image.image_width = v.clone(),
        (U::AspectRatio(v), K::Image(image)) => image.aspect_ratio = v.clone(),
        (U::ObjectFit(v), K::Image(image)) => image.object_fit = v.clone(),

        (U::BorderRadius(v), K::Image(image)) => image.border_radius = v.clone(),
        (U::BorderRadius(v), K::Card(card)) => card.border_radius = v.clone(),
        (U::BorderRadius(v), K::Accordion(accordion)) => accordion.border_radius = v.clone(),
        (U::BorderRadius(v), K::Button(button)) => button.border_radius = v.clone(),

        (U::BackgroundColor(v), K::Card(card)) => card.background_color = v.clone(),
        (U::BackgroundColor(v), K::Accordion(accordion)) => {
            accordion.background_color = v.clone()
        }
        (U::Href(v), K::Card(card)) => card.href = v.clone(),
        (U::Target(target), K::Card(card)) => card.target = *target,

        (U::ListType(list_type), K::List(list)) => list.list_type = *list_type,
        (U::ListStyle(v), K::List(list)) => list.list_style = v.clone(),
        (U::ListItems(items), K::List(list)) => list.items = items.clone(),

        (U::GalleryColumns(breakpoint, count), K::Gallery(gallery)) => {
            let count = (*count).max(1);
            match breakpoint {
                Breakpoint::Desktop => gallery.columns.desktop = count,
                Breakpoint::Tablet => gallery.columns.tablet = count,
                Breakpoint::Mobile => gallery.columns.mobile = count,
            }
        }
        (U::Gap(v), K::Gallery(gallery)) => gallery.gap = v.clone(),
        (U::ImageHeight(v), K::Gallery(gallery)) => gallery.image_height = v.clone(),

        (U::CaptionFontSize(v), K::Gallery(g)) => g.caption.font_size = v.clone(),
        (U::CaptionFontSize(v), K::Carousel(c)) => c.caption.font_size = v.clone(),
        (U::CaptionColor(v), K::Gallery(g)) => g.caption.color = v.clone(),
        (U::CaptionColor(v), K::Carousel(c)) => c.caption.color = v.clone(),
        (U::CaptionAlign(align), K::Gallery(g)) => g.caption.align = *align,
        (U::CaptionAlign(align), K::Carousel(c)) => c.caption.align = *align,
        (U::ShowCaption(show), K::Gallery(g)) => g.caption.show = *show,
        (U::ShowCaption(show), K::Carousel(c)) => c.caption.show = *show,

        (U::Autoplay(on), K::Carousel(c)) => c.autoplay = *on,
        (U::Interval(ms), K::Carousel(c)) => c.interval = *ms,
        (U::ShowDots(on), K::Carousel(c)) => c.show_dots = *on,
        (U::ShowArrows(on), K::Carousel(c)) => c.show_arrows = *on,
        (U::Height(v), K::Carousel(c)) => c.height = v.clone(),
        (U::Transition(transition), K::Carousel(c)) => c.transition = *transition,

        (U::PanelStyle(v), K::Accordion(a)) => a.style = v.clone(),
        (U::PanelStyle(v), K::Tabs(t)) => t.style = v.clone(),
        (U::IconPosition(position), K::Accordion(a)) => a.icon_position = *position,
        (U::OpenMultiple(on), K::Accordion(a)) => a.open_multiple = *on,
        (U::TitleColor(v), K::Accordion(a)) => a.title_color = v.clone(),
        (U::ContentColor(v), K::Accordion(a)) => a.content_color = v.clone(),
        (U::ContentColor(v), K::Tabs(t)) => t.content_color = v.clone(),
        (U::BorderColor(v), K::Accordion(a)) => a.border_color = v.clone(),
        (U::BorderColor(v), K::Tabs(t)) => t.border_color = v.clone(),
        (U::ActiveColor(v), K::Accordion(a)) => a.active_color = v.clone(),
        (U::ActiveColor(v), K::Tabs(t)) => t.active_color = v.clone(),
        (U::InactiveColor(v), K::Tabs(t)) => t.inactive_color = v.clone(),
        (U::ActiveBackgroundColor(v), K::Tabs(t)) => t.active_background_color = v.clone(),
        (U::ContentBackgroundColor(v), K::Tabs(t)) => t.content_background_color = v.clone(),
        (U::TabPosition(position), K::Tabs(t)) => t.position = *position,

        (U::ButtonText(v), K::Button(button)) => {
            button.button_text = v.clone();
            style.value = v.clone();
        }
        (U::ButtonHref(v), K::Button(button)) => button.button_href = v.clone(),
        (U::ButtonTarget(target), K::Button(button)) => button.button_target = *target,
        (U::ButtonBgColor(v), K::Button(button)) => button.button_bg_color = v.clone(),
        (U::ButtonTextColor(v), K::Button(button)) => button.button_text_color = v.clone(),

        (update, kind) => {
            log::debug!(
                "{update:?} does not apply to a {} element",
                kind.element_type().as_str()
            );
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::insertion::InsertPosition;
    use crate::models::{
        Align, BackgroundType, ElementType, LayoutType, SpacingField, Side,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn page_with(layout: LayoutType) -> Page {
        apply(&Page::new(), &Cmd::AddSection { layout })
    }

    fn add(page: &Page, column: ColumnPath, kind: ElementType, position: InsertPosition) -> Page {
        apply(
            page,
            &Cmd::AddElement {
                column,
                kind,
                position,
            },
        )
    }

    #[rstest]
    #[case(LayoutType::FullWidth, vec![12])]
    #[case(LayoutType::TwoEqual, vec![6, 6])]
    #[case(LayoutType::ThreeEqual, vec![4, 4, 4])]
    #[case(LayoutType::FourEqual, vec![3, 3, 3, 3])]
    #[case(LayoutType::SidebarLeft, vec![4, 8])]
    #[case(LayoutType::SidebarRight, vec![8, 4])]
    fn test_add_section_uses_layout_template(#[case] layout: LayoutType, #[case] widths: Vec<u8>) {
        let page = page_with(layout);

        let section = &page.sections[0];
        assert_eq!(section.layout_type, layout);
        let actual: Vec<u8> = section.columns.iter().map(|c| c.width).collect();
        assert_eq!(actual, widths);
        assert!(
            section
                .columns
                .iter()
                .all(|c| c.width_tablet == 12 && c.width_mobile == 12 && !c.card)
        );
    }

    #[test]
    fn test_stale_addresses_leave_tree_unchanged() {
        let page = page_with(LayoutType::TwoEqual);
        let stale = [
            Cmd::RemoveSection { section: 3 },
            Cmd::AddColumn { section: 1 },
            Cmd::RemoveColumn {
                column: ColumnPath::top(0, 5),
            },
            Cmd::RemoveColumn {
                column: ColumnPath::nested(0, 0, 0),
            },
            Cmd::AddElement {
                column: ColumnPath::nested(0, 1, 2),
                kind: ElementType::Text,
                position: InsertPosition::After,
            },
            Cmd::RemoveElement {
                element: ColumnPath::top(0, 0).element(0),
            },
            Cmd::UpdateElement {
                element: ColumnPath::top(0, 0).element(4),
                update: ElementUpdate::Value("x".to_string()),
            },
            Cmd::AppendImages {
                element: ColumnPath::top(9, 0).element(0),
                urls: vec!["https://cdn/a.png".to_string()],
            },
            Cmd::UpdateItemTitle {
                element: ColumnPath::top(0, 0).element(0),
                index: 0,
                text: "t".to_string(),
            },
            Cmd::UpdateBackground {
                section: 2,
                update: BackgroundUpdate::Color("#000".to_string()),
            },
        ];

        for cmd in &stale {
            let mut next = page.clone();
            assert!(!apply_in_place(&mut next, cmd), "{cmd:?} should not apply");
            assert_eq!(next, page);
        }
    }

    #[test]
    fn test_add_and_remove_columns() {
        let page = page_with(LayoutType::FullWidth);

        let page = apply(&page, &Cmd::AddColumn { section: 0 });
        assert_eq!(page.sections[0].columns.len(), 2);
        assert_eq!(page.sections[0].columns[1].width, 6);

        let page = apply(
            &page,
            &Cmd::RemoveColumn {
                column: ColumnPath::top(0, 0),
            },
        );
        assert_eq!(page.sections[0].columns.len(), 1);
        assert_eq!(page.sections[0].columns[0].width, 6);
    }

    #[test]
    fn test_column_setters_at_both_depths() {
        let page = page_with(LayoutType::FullWidth);
        let page = apply(
            &page,
            &Cmd::AddNestedColumn {
                parent: ColumnPath::top(0, 0),
            },
        );
        let nested = ColumnPath::nested(0, 0, 0);

        let mut page = page;
        for cmd in [
            Cmd::UpdateColumnWidth {
                column: nested,
                breakpoint: Breakpoint::Tablet,
                width: 4,
            },
            Cmd::UpdateColumnSpacing {
                column: nested,
                field: SpacingField::Padding(Side::Left),
                value: "24".to_string(),
            },
            Cmd::ToggleColumnCard {
                column: ColumnPath::top(0, 0),
            },
        ] {
            assert!(apply_in_place(&mut page, &cmd));
        }

        let top = column(&page, ColumnPath::top(0, 0)).unwrap();
        let inner = column(&page, nested).unwrap();
        assert!(top.card);
        assert!(!inner.card);
        assert_eq!(inner.width_tablet, 4);
        assert_eq!(inner.spacing.padding_left.as_deref(), Some("24"));
    }

    #[test]
    fn test_nested_column_cannot_nest_further() {
        let page = page_with(LayoutType::FullWidth);
        let mut page = apply(
            &page,
            &Cmd::AddNestedColumn {
                parent: ColumnPath::top(0, 0),
            },
        );
        let before = page.clone();

        let applied = apply_in_place(
            &mut page,
            &Cmd::AddNestedColumn {
                parent: ColumnPath::nested(0, 0, 0),
            },
        );

        assert!(!applied);
        assert_eq!(page, before);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_insert_before_nested_columns_advances_split() {
        // Given a column with four elements, one nested column and split at 2
        let mut page = page_with(LayoutType::FullWidth);
        {
            let column = &mut page.sections[0].columns[0];
            column.elements = (0..4).map(|_| create_element(ElementType::Text)).collect();
            column.columns = Some(vec![Column::new()]);
            column.nested_columns_index = Some(2);
        }

        // When a gallery is added before the nested columns
        let page = add(
            &page,
            ColumnPath::top(0, 0),
            ElementType::Gallery,
            InsertPosition::Before,
        );

        // Then it lands at the old split and the split moves down by one
        let column = &page.sections[0].columns[0];
        assert_eq!(column.nested_columns_index, Some(3));
        assert_eq!(column.elements[2].element_type(), ElementType::Gallery);
    }

    #[test]
    fn test_removing_last_nested_column_keeps_empty_list_and_resets_split() {
        let page = page_with(LayoutType::FullWidth);
        let page = apply(
            &page,
            &Cmd::AddNestedColumn {
                parent: ColumnPath::top(0, 0),
            },
        );
        let page = add(&page, ColumnPath::top(0, 0), ElementType::Text, InsertPosition::After);
        let page = add(&page, ColumnPath::top(0, 0), ElementType::Text, InsertPosition::Before);
        assert_eq!(page.sections[0].columns[0].nested_columns_index, Some(1));

        let page = apply(
            &page,
            &Cmd::RemoveColumn {
                column: ColumnPath::nested(0, 0, 0),
            },
        );

        let column = &page.sections[0].columns[0];
        assert_eq!(column.columns, Some(Vec::new()));
        assert_eq!(insertion::effective_index(column), column.elements.len());
    }

    #[test]
    fn test_elements_in_nested_column_always_append() {
        let page = page_with(LayoutType::FullWidth);
        let page = apply(
            &page,
            &Cmd::AddNestedColumn {
                parent: ColumnPath::top(0, 0),
            },
        );
        let nested = ColumnPath::nested(0, 0, 0);

        let page = add(&page, nested, ElementType::Heading, InsertPosition::After);
        let page = add(&page, nested, ElementType::Button, InsertPosition::Before);

        let inner = column(&page, nested).unwrap();
        let kinds: Vec<_> = inner.elements.iter().map(Element::element_type).collect();
        assert_eq!(kinds, vec![ElementType::Heading, ElementType::Button]);
        assert_eq!(inner.nested_columns_index, None);
    }

    #[test]
    fn test_update_element_shared_and_variant_fields() {
        let page = page_with(LayoutType::FullWidth);
        let page = add(&page, ColumnPath::top(0, 0), ElementType::Button, InsertPosition::After);
        let path = ColumnPath::top(0, 0).element(0);

        let page = apply(
            &page,
            &Cmd::UpdateElement {
                element: path,
                update: ElementUpdate::ButtonText("Buy now".to_string()),
            },
        );
        let page = apply(
            &page,
            &Cmd::UpdateElement {
                element: path,
                update: ElementUpdate::Align(Align::Center),
            },
        );

        let button = element(&page, path).unwrap();
        assert_eq!(button.style.value, "Buy now");
        assert_eq!(button.style.align, Some(Align::Center));
        let ElementKind::Button(block) = &button.kind else {
            panic!("expected button");
        };
        assert_eq!(block.button_text, "Buy now");
    }

    #[test]
    fn test_update_for_foreign_variant_is_ignored() {
        let page = page_with(LayoutType::FullWidth);
        let mut page = add(&page, ColumnPath::top(0, 0), ElementType::Text, InsertPosition::After);
        let before = page.clone();

        let applied = apply_in_place(
            &mut page,
            &Cmd::UpdateElement {
                element: ColumnPath::top(0, 0).element(0),
                update: ElementUpdate::Interval(1000),
            },
        );

        assert!(!applied);
        assert_eq!(page, before);
    }

    #[test]
    fn test_image_list_operations() {
        let page = page_with(LayoutType::FullWidth);
        let page = add(&page, ColumnPath::top(0, 0), ElementType::Carousel, InsertPosition::After);
        let path = ColumnPath::top(0, 0).element(0);
        let urls = ["a", "b", "c"].map(|n| format!("https://cdn.example/{n}.png"));

        let page = apply(
            &page,
            &Cmd::AppendImages {
                element: path,
                urls: urls.to_vec(),
            },
        );
        let page = apply(
            &page,
            &Cmd::RemoveImage {
                element: path,
                index: 1,
            },
        );
        let page = apply(
            &page,
            &Cmd::UpdateCarouselCaption {
                element: path,
                index: 1,
                text: "Sunset".to_string(),
            },
        );

        let images = element(&page, path).unwrap().images().unwrap();
        assert_eq!(
            images,
            &vec![
                MediaImage::new(urls[0].clone()),
                MediaImage {
                    url: urls[2].clone(),
                    caption: "Sunset".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_caption_update_only_targets_carousels() {
        let page = page_with(LayoutType::FullWidth);
        let page = add(&page, ColumnPath::top(0, 0), ElementType::Gallery, InsertPosition::After);
        let path = ColumnPath::top(0, 0).element(0);
        let mut page = apply(
            &page,
            &Cmd::AppendImages {
                element: path,
                urls: vec!["https://cdn.example/a.png".to_string()],
            },
        );

        assert!(!apply_in_place(
            &mut page,
            &Cmd::UpdateCarouselCaption {
                element: path,
                index: 0,
                text: "nope".to_string(),
            },
        ));
    }

    #[rstest]
    #[case(ElementType::Accordion, "Accordion Item 4")]
    #[case(ElementType::Tabs, "Tab 4")]
    fn test_panel_item_operations(#[case] kind: ElementType, #[case] added_title: &str) {
        let page = page_with(LayoutType::FullWidth);
        let page = add(&page, ColumnPath::top(0, 0), kind, InsertPosition::After);
        let path = ColumnPath::top(0, 0).element(0);

        let page = apply(&page, &Cmd::AddItem { element: path });
        assert_eq!(element(&page, path).unwrap().panels().unwrap()[3].title, added_title);

        let page = apply(
            &page,
            &Cmd::UpdateItemTitle {
                element: path,
                index: 0,
                text: "Shipping".to_string(),
            },
        );
        let page = apply(
            &page,
            &Cmd::UpdateItemContent {
                element: path,
                index: 0,
                text: "Ships in 2 days".to_string(),
            },
        );
        let page = apply(
            &page,
            &Cmd::RemoveItem {
                element: path,
                index: 1,
            },
        );

        let items = element(&page, path).unwrap().panels().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Shipping");
        assert_eq!(items[0].content, "Ships in 2 days");
    }

    #[test]
    fn test_section_config_updates_keep_configs_whole() {
        let page = page_with(LayoutType::FullWidth);

        let page = apply(
            &page,
            &Cmd::UpdateBackground {
                section: 0,
                update: BackgroundUpdate::Type(BackgroundType::Gradient),
            },
        );
        let page = apply(
            &page,
            &Cmd::UpdateContainer {
                section: 0,
                update: ContainerUpdate::Padding(Side::Bottom, "64".to_string()),
            },
        );

        let section = &page.sections[0];
        assert_eq!(section.background_config.kind, BackgroundType::Gradient);
        assert_eq!(section.background_config.color, "#ffffff");
        assert_eq!(section.container_config.padding_bottom, "64");
        assert_eq!(section.container_config.max_width, "7xl");
    }

    #[test]
    fn test_move_section_and_element() {
        let page = page_with(LayoutType::FullWidth);
        let page = apply(
            &page,
            &Cmd::AddSection {
                layout: LayoutType::TwoEqual,
            },
        );

        let page = apply(
            &page,
            &Cmd::MoveSection {
                section: 1,
                direction: Direction::Up,
            },
        );
        assert_eq!(page.sections[0].layout_type, LayoutType::TwoEqual);

        let column_path = ColumnPath::top(0, 0);
        let page = add(&page, column_path, ElementType::Heading, InsertPosition::After);
        let page = add(&page, column_path, ElementType::Text, InsertPosition::After);
        let page = apply(
            &page,
            &Cmd::MoveElement {
                element: column_path.element(1),
                direction: Direction::Up,
            },
        );
        let kinds: Vec<_> = column(&page, column_path)
            .unwrap()
            .elements
            .iter()
            .map(Element::element_type)
            .collect();
        assert_eq!(kinds, vec![ElementType::Text, ElementType::Heading]);
    }

    #[test]
    fn test_move_element_does_not_cross_split() {
        let page = page_with(LayoutType::FullWidth);
        let parent = ColumnPath::top(0, 0);
        let page = apply(&page, &Cmd::AddNestedColumn { parent });
        let page = add(&page, parent, ElementType::Heading, InsertPosition::After);
        let mut page = add(&page, parent, ElementType::Text, InsertPosition::Before);
        // Split is now 1: [text] | nested | [heading]
        let before = page.clone();

        assert!(!apply_in_place(
            &mut page,
            &Cmd::MoveElement {
                element: parent.element(0),
                direction: Direction::Down,
            },
        ));
        assert_eq!(page, before);
    }

    #[test]
    fn test_duplicate_above_split_advances_it() {
        let page = page_with(LayoutType::FullWidth);
        let parent = ColumnPath::top(0, 0);
        let page = apply(&page, &Cmd::AddNestedColumn { parent });
        let page = add(&page, parent, ElementType::Heading, InsertPosition::After);
        let page = add(&page, parent, ElementType::Text, InsertPosition::Before);

        let page = apply(
            &page,
            &Cmd::DuplicateElement {
                element: parent.element(0),
            },
        );

        let column = column(&page, parent).unwrap();
        assert_eq!(column.elements.len(), 3);
        assert_eq!(column.nested_columns_index, Some(2));
        assert_ne!(column.elements[0].id, column.elements[1].id);
        assert_eq!(column.elements[0].kind, column.elements[1].kind);
    }
}
