//! End-to-end editing scenarios: an author builds a page, edits around
//! nested columns, attaches uploaded images and saves.

use std::sync::Arc;

use page_composer_engine::editing::{Cmd, ColumnPath, Editor, InsertPosition, effective_index};
use page_composer_engine::io::{self, Asset, AssetAttachmentPort, UploadError, upload_batch};
use page_composer_engine::models::{Column, Element, ElementType, LayoutType, Page};
use pretty_assertions::assert_eq;

fn editor_with(layout: LayoutType) -> Editor {
    let mut editor = Editor::new(Page::new());
    editor.apply(Cmd::AddSection { layout });
    editor
}

fn kinds(column: &Column) -> Vec<ElementType> {
    column.elements.iter().map(Element::element_type).collect()
}

#[test]
fn three_equal_section_has_three_responsive_columns() {
    let editor = editor_with(LayoutType::ThreeEqual);

    let columns = &editor.page().sections[0].columns;
    assert_eq!(columns.len(), 3);
    for column in columns {
        assert_eq!(
            (column.width, column.width_tablet, column.width_mobile),
            (4, 12, 12)
        );
    }
}

#[test]
fn gallery_added_before_nested_columns_lands_at_split() {
    // Given a column with four elements, one nested column and split at 2
    let mut editor = editor_with(LayoutType::FullWidth);
    let column = ColumnPath::top(0, 0);
    editor.apply(Cmd::AddNestedColumn { parent: column });
    for _ in 0..2 {
        editor.apply(Cmd::AddElement {
            column,
            kind: ElementType::Text,
            position: InsertPosition::Before,
        });
    }
    for _ in 0..2 {
        editor.apply(Cmd::AddElement {
            column,
            kind: ElementType::Heading,
            position: InsertPosition::After,
        });
    }
    let before = &editor.page().sections[0].columns[0];
    assert_eq!(before.nested_columns_index, Some(2));
    assert_eq!(before.elements.len(), 4);

    // When a gallery is added before the nested columns
    editor.apply(Cmd::AddElement {
        column,
        kind: ElementType::Gallery,
        position: InsertPosition::Before,
    });

    // Then it sits at index 2 and the split advanced to 3
    let after = &editor.page().sections[0].columns[0];
    assert_eq!(after.nested_columns_index, Some(3));
    assert_eq!(
        kinds(after),
        vec![
            ElementType::Text,
            ElementType::Text,
            ElementType::Gallery,
            ElementType::Heading,
            ElementType::Heading,
        ]
    );
}

#[test]
fn removing_last_nested_column_reverts_split() {
    let mut editor = editor_with(LayoutType::FullWidth);
    let column = ColumnPath::top(0, 0);
    editor.apply(Cmd::AddNestedColumn { parent: column });
    editor.apply(Cmd::AddElement {
        column,
        kind: ElementType::Text,
        position: InsertPosition::After,
    });

    editor.apply(Cmd::RemoveColumn {
        column: ColumnPath::nested(0, 0, 0),
    });

    let column = &editor.page().sections[0].columns[0];
    assert_eq!(column.columns, Some(Vec::new()));
    assert_eq!(effective_index(column), column.elements.len());
    let json = serde_json::to_value(editor.page()).unwrap();
    assert_eq!(json[0]["columns"][0]["columns"], serde_json::json!([]));
}

#[test]
fn remove_then_re_add_restores_equivalent_elements() {
    // Given [text, button] | nested | [heading]
    let mut editor = editor_with(LayoutType::FullWidth);
    let column = ColumnPath::top(0, 0);
    editor.apply(Cmd::AddNestedColumn { parent: column });
    editor.apply(Cmd::AddElement {
        column,
        kind: ElementType::Heading,
        position: InsertPosition::After,
    });
    for kind in [ElementType::Text, ElementType::Button] {
        editor.apply(Cmd::AddElement {
            column,
            kind,
            position: InsertPosition::Before,
        });
    }
    let original = editor.page().sections[0].columns[0].clone();

    // When the last element above the split is removed and re-added before
    editor.apply(Cmd::RemoveElement {
        element: column.element(1),
    });
    editor.apply(Cmd::AddElement {
        column,
        kind: ElementType::Button,
        position: InsertPosition::Before,
    });

    // Then the column matches, ids aside
    let restored = &editor.page().sections[0].columns[0];
    assert_eq!(kinds(restored), kinds(&original));
    assert_eq!(restored.nested_columns_index, original.nested_columns_index);
    for (a, b) in restored.elements.iter().zip(&original.elements) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.style, b.style);
    }
}

/// Port whose second call fails
struct SecondCallFails;

impl AssetAttachmentPort for SecondCallFails {
    async fn upload(&self, asset: Asset) -> Result<String, UploadError> {
        if asset.name == "2.png" {
            return Err(UploadError::Rejected {
                name: asset.name,
                reason: "connection reset".to_string(),
            });
        }
        Ok(format!("https://cdn.example/{}", asset.name))
    }
}

#[tokio::test]
async fn batch_upload_with_one_failure_appends_the_rest_in_order() {
    let mut editor = editor_with(LayoutType::FullWidth);
    let column = ColumnPath::top(0, 0);
    editor.apply(Cmd::AddElement {
        column,
        kind: ElementType::Gallery,
        position: InsertPosition::After,
    });
    let gallery = column.element(0);
    let assets = ["1.png", "2.png", "3.png"]
        .map(|name| Asset::new(name, vec![0u8; 4]))
        .to_vec();

    let batch = upload_batch(Arc::new(SecondCallFails), assets).await;
    let cmd = batch.append_command(gallery).expect("two uploads succeeded");
    let patch = editor.apply(cmd);

    assert!(patch.applied);
    assert_eq!(batch.failures.len(), 1);
    let urls: Vec<&str> = editor.page().sections[0].columns[0].elements[0]
        .images()
        .unwrap()
        .iter()
        .map(|image| image.url.as_str())
        .collect();
    assert_eq!(
        urls,
        vec!["https://cdn.example/1.png", "https://cdn.example/3.png"]
    );
}

#[tokio::test]
async fn late_upload_for_removed_element_is_a_no_op() {
    let mut editor = editor_with(LayoutType::FullWidth);
    let column = ColumnPath::top(0, 0);
    editor.apply(Cmd::AddElement {
        column,
        kind: ElementType::Image,
        position: InsertPosition::After,
    });
    let image = column.element(0);

    let batch = upload_batch(Arc::new(SecondCallFails), vec![Asset::new("1.png", vec![1])]).await;
    // The author deleted the image block while the upload was in flight
    editor.apply(Cmd::RemoveElement { element: image });
    let before = editor.page().clone();

    let patch = editor.apply(batch.image_command(image).unwrap());

    assert!(!patch.applied);
    assert_eq!(editor.page(), &before);
}

#[test]
fn saved_page_loads_back_identically() {
    let mut editor = editor_with(LayoutType::SidebarRight);
    editor.apply(Cmd::AddElement {
        column: ColumnPath::top(0, 1),
        kind: ElementType::Tabs,
        position: InsertPosition::After,
    });
    let dir = tempfile::TempDir::new().unwrap();
    let path = relative_path::RelativePath::new("home.json");

    io::write_page(path, dir.path(), editor.page()).unwrap();
    let loaded = io::read_page(path, dir.path()).unwrap();

    assert_eq!(&loaded, editor.page());
}
