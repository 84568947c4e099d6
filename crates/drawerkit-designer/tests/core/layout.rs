use drawerkit_core::units::GridSpec;
use drawerkit_core::{Dimensions, LayoutError};
use drawerkit_designer::{split_block, Layout, SplitDirection};

fn drawer() -> Layout {
    Layout::new(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default()).unwrap()
}

#[test]
fn test_initial_layout_scenario() {
    let layout = drawer();
    assert_eq!(layout.width(), 300.0);
    assert_eq!(layout.depth(), 200.0);
    let block = layout.blocks()[0];
    assert_eq!((block.x, block.y, block.width, block.height), (0.0, 0.0, 300.0, 200.0));
    assert!(layout.split_lines().is_empty());
}

#[test]
fn test_add_row_scenario() {
    let mut layout = drawer();
    let id = layout.blocks()[0].id;
    let outcome = split_block(&mut layout, id, SplitDirection::Row, true).unwrap();

    assert_eq!(layout.blocks().len(), 2);
    for block in layout.blocks() {
        assert_eq!(block.height, 100.0);
        assert_eq!(block.width, 300.0);
    }
    let line = layout.split_line(outcome.line).unwrap();
    assert!(line.is_horizontal);
    assert_eq!((line.y1, line.x1, line.x2), (100.0, 0.0, 300.0));
}

#[test]
fn test_add_column_mirrors_row() {
    let mut layout = drawer();
    let id = layout.blocks()[0].id;
    let outcome = split_block(&mut layout, id, SplitDirection::Column, true).unwrap();

    let left = layout.block(outcome.first).unwrap();
    let right = layout.block(outcome.second).unwrap();
    assert_eq!((left.x, left.width), (0.0, 150.0));
    assert_eq!((right.x, right.width), (150.0, 150.0));

    let line = layout.split_line(outcome.line).unwrap();
    assert!(!line.is_horizontal);
    assert_eq!((line.x1, line.y1, line.y2), (150.0, 0.0, 200.0));
}

#[test]
fn test_nested_splits_keep_tiling() {
    let mut layout = drawer();
    let root = layout.blocks()[0].id;
    let row = split_block(&mut layout, root, SplitDirection::Row, true).unwrap();
    let column = split_block(&mut layout, row.second, SplitDirection::Column, true).unwrap();
    split_block(&mut layout, column.first, SplitDirection::Row, true).unwrap();

    assert_eq!(layout.blocks().len(), 4);
    assert_eq!(layout.split_lines().len(), 3);
    assert!(layout.validate_tiling().is_ok());
    for block in layout.blocks() {
        assert!(layout.grid().is_on_grid(block.x));
        assert!(layout.grid().is_on_grid(block.y));
    }
}

#[test]
fn test_ids_are_unique_and_never_reused() {
    let mut layout = drawer();
    let root = layout.blocks()[0].id;
    let snapshot = layout.snapshot();
    let first = split_block(&mut layout, root, SplitDirection::Row, true).unwrap();
    layout.restore(&snapshot);
    let second = split_block(&mut layout, root, SplitDirection::Row, true).unwrap();
    assert!(second.first > first.line);
}

#[test]
fn test_undersized_dimensions_rejected() {
    let err = Layout::new(Dimensions::new(1.5, 20.0, 3.0), GridSpec::default()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDimensions { .. }));
    assert!(Layout::new(Dimensions::new(f64::NAN, 20.0, 3.0), GridSpec::default()).is_err());
}
