use crate::editing::{ColumnPath, Selection, insertion};
use crate::models::{Breakpoint, Column, Element, ElementKind, Page};

const SUMMARY_CHARS: usize = 32;

/// One row of a page outline
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineLine {
    pub depth: usize,
    pub text: String,
    /// What selecting this row selects; section rows select nothing
    pub target: Selection,
}

/// Flatten a page into outline rows, nested columns placed at the split point
pub fn lines(page: &Page) -> Vec<OutlineLine> {
    let mut out = Vec::new();
    for (section_index, section) in page.sections.iter().enumerate() {
        out.push(OutlineLine {
            depth: 0,
            text: format!("section {section_index} {}", section.layout_type.as_str()),
            target: Selection::None,
        });
        for (column_index, column) in section.columns.iter().enumerate() {
            let path = ColumnPath::top(section_index, column_index);
            push_column(&mut out, 1, format!("column {column_index}"), column, path);
        }
    }
    out
}

/// Plain-text outline, two spaces per level
pub fn render(page: &Page) -> String {
    lines(page)
        .iter()
        .map(|line| format!("{}{}", "  ".repeat(line.depth), line.text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_column(
    out: &mut Vec<OutlineLine>,
    depth: usize,
    label: String,
    column: &Column,
    path: ColumnPath,
) {
    let card = if column.card { " card" } else { "" };
    let widths = Breakpoint::ALL
        .iter()
        .map(|breakpoint| column.width_at(*breakpoint).to_string())
        .collect::<Vec<_>>()
        .join("/");
    out.push(OutlineLine {
        depth,
        text: format!("{label} {widths}{card}"),
        target: Selection::Column(path),
    });

    let (above, below) = insertion::split(column);
    for (index, element) in above.iter().enumerate() {
        push_element(out, depth + 1, index, element, path);
    }
    if let Some(nested) = column.columns.as_ref()
        && !nested.is_empty()
    {
        for (nested_index, child) in nested.iter().enumerate() {
            let child_path = ColumnPath::nested(path.section, path.column, nested_index);
            push_column(out, depth + 1, format!("nested {nested_index}"), child, child_path);
        }
    }
    for (offset, element) in below.iter().enumerate() {
        push_element(out, depth + 1, above.len() + offset, element, path);
    }
}

fn push_element(
    out: &mut Vec<OutlineLine>,
    depth: usize,
    index: usize,
    element: &Element,
    column: ColumnPath,
) {
    let summary = summary(element);
    let kind = element.element_type().as_str();
    let text = if summary.is_empty() {
        format!("{index} {kind}")
    } else {
        format!("{index} {kind}: {summary}")
    };
    out.push(OutlineLine {
        depth,
        text,
        target: Selection::Element(column.element(index)),
    });
}

fn summary(element: &Element) -> String {
    match &element.kind {
        ElementKind::List(list) => format!("{} items", list.items.len()),
        ElementKind::Gallery(_) | ElementKind::Carousel(_) => {
            let count = element.images().map(Vec::len).unwrap_or_default();
            format!("{count} images")
        }
        ElementKind::Accordion(_) | ElementKind::Tabs(_) => {
            let count = element.panels().map(Vec::len).unwrap_or_default();
            format!("{count} panels")
        }
        _ => truncate(&element.style.value),
    }
}

fn truncate(value: &str) -> String {
    let mut chars = value.chars();
    let head: String = chars.by_ref().take(SUMMARY_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
