use super::*;
use crate::config::BreakpointConfig;
use crate::surface::memory::MemorySurface;

fn quarter_index() -> BreakpointIndex {
    BreakpointIndex::build(&BreakpointConfig::default())
}

#[test]
fn containers_come_back_in_document_order_with_grid_root_appended() {
    let mut surface = MemorySurface::new();
    let root = surface.document_root();
    let first = surface.add_child(root, &["cont"]);
    let section = surface.add_child(root, &["section"]);
    let second = surface.add_child(section, &["cont"]);
    let grid = surface.add_child(root, &["grid"]);

    let snapshot = discover(&surface, root, &quarter_index());
    assert_eq!(snapshot.containers, vec![first, second, grid]);
    assert_eq!(snapshot.grid_root, Some(grid));
}

#[test]
fn registration_root_itself_can_be_the_grid() {
    let mut surface = MemorySurface::new();
    let root = surface.document_root();
    let grid = surface.add_child(root, &["grid"]);
    let col = surface.add_child(grid, &["col-2-4"]);

    let snapshot = discover(&surface, grid, &quarter_index());
    assert_eq!(snapshot.grid_root, Some(grid));
    assert_eq!(snapshot.columns.len(), 1);
    assert_eq!(snapshot.columns[0].element, col);
    assert_eq!(snapshot.columns[0].label, "col-2-4");
}

#[test]
fn only_direct_children_become_columns() {
    let mut surface = MemorySurface::new();
    let root = surface.document_root();
    let grid = surface.add_child(root, &["grid"]);
    let top = surface.add_child(grid, &["col-2-4"]);
    // A nested grid is itself a column of the outer grid, but its own
    // columns are not.
    let nested = surface.add_child(grid, &["col-2-4", "grid"]);
    let inner = surface.add_child(nested, &["col-4-4"]);

    let snapshot = discover(&surface, root, &quarter_index());
    let elements: Vec<_> = snapshot.columns.iter().map(|c| c.element).collect();
    assert_eq!(elements, vec![top, nested]);
    assert!(!elements.contains(&inner));
}

#[test]
fn column_label_is_first_class_list_match() {
    let mut surface = MemorySurface::new();
    let root = surface.document_root();
    let grid = surface.add_child(root, &["grid"]);
    let col = surface.add_child(grid, &["fancy", "col-1-4", "col-2-4"]);

    let snapshot = discover(&surface, root, &quarter_index());
    assert_eq!(snapshot.columns[0].element, col);
    assert_eq!(snapshot.columns[0].label, "col-1-4");
}

#[test]
fn unlabeled_children_are_not_columns() {
    let mut surface = MemorySurface::new();
    let root = surface.document_root();
    let grid = surface.add_child(root, &["grid"]);
    surface.add_child(grid, &["spacer"]);
    let col = surface.add_child(grid, &["col-3-4"]);

    let snapshot = discover(&surface, root, &quarter_index());
    assert_eq!(snapshot.columns.len(), 1);
    assert_eq!(snapshot.columns[0].element, col);
}

#[test]
fn passive_mode_skips_grid_and_columns() {
    let mut surface = MemorySurface::new();
    let root = surface.document_root();
    let cont = surface.add_child(root, &["cont"]);
    let grid = surface.add_child(root, &["grid"]);
    surface.add_child(grid, &["col-a"]);

    let index = BreakpointIndex::build(&BreakpointConfig::Labels(vec!["col-a".into()]));
    let snapshot = discover(&surface, root, &index);
    assert_eq!(snapshot.containers, vec![cont]);
    assert_eq!(snapshot.grid_root, None);
    assert!(snapshot.columns.is_empty());
}

#[test]
fn subtree_without_grid_yields_no_columns() {
    let mut surface = MemorySurface::new();
    let root = surface.document_root();
    let cont = surface.add_child(root, &["cont"]);

    let snapshot = discover(&surface, root, &quarter_index());
    assert_eq!(snapshot.containers, vec![cont]);
    assert_eq!(snapshot.grid_root, None);
    assert!(snapshot.columns.is_empty());
}
