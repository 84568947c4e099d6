use drawerkit_core::units::GridSpec;
use drawerkit_core::{Block, Dimensions, LayoutError, SplitLine};
use drawerkit_designer::{
    commit_drag, drag_range, find_affected_blocks, split_block, DragSession, Layout,
    LayoutSnapshot, SplitDirection,
};

fn row_split() -> (Layout, u64) {
    let mut layout = Layout::new(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default()).unwrap();
    let id = layout.blocks()[0].id;
    let outcome = split_block(&mut layout, id, SplitDirection::Row, true).unwrap();
    (layout, outcome.line)
}

#[test]
fn test_drag_scenario() {
    let (mut layout, line) = row_split();
    let mut session = DragSession::begin(&layout, line).unwrap();
    let candidate = session.update(&layout, 48.7);
    assert_eq!(candidate, 50.0);

    commit_drag(&mut layout, line, candidate).unwrap();
    let top = layout.block_at(10.0, 10.0).unwrap();
    let bottom = layout.block_at(10.0, 190.0).unwrap();
    assert_eq!(top.height, 50.0);
    assert_eq!((bottom.y, bottom.height), (50.0, 150.0));
}

#[test]
fn test_adjacency_ignores_blocks_on_other_segments() {
    // Column split, then a row in each half. Both rows start at y=100 but
    // are separate lines; dragging one must leave the other side alone.
    let mut layout = Layout::new(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default()).unwrap();
    let root = layout.blocks()[0].id;
    let column = split_block(&mut layout, root, SplitDirection::Column, true).unwrap();
    let left = split_block(&mut layout, column.first, SplitDirection::Row, true).unwrap();
    let right = split_block(&mut layout, column.second, SplitDirection::Row, true).unwrap();

    let line = *layout.split_line(left.line).unwrap();
    let affected = find_affected_blocks(&layout, &line);
    assert_eq!(affected.len(), 2);
    assert!(affected.before.contains(&left.first));
    assert!(affected.after.contains(&left.second));

    commit_drag(&mut layout, left.line, 60.0).unwrap();
    assert_eq!(layout.block(right.first).unwrap().height, 100.0);
    assert_eq!(layout.split_line(right.line).unwrap().y1, 100.0);
    assert!(layout.validate_tiling().is_ok());
}

#[test]
fn test_range_uses_every_neighbour() {
    // Top half split into two columns, then the top-left split into rows:
    // dragging the middle row line is bounded by the short top-left block.
    let (mut layout, line) = row_split();
    let top = layout.block_at(10.0, 10.0).unwrap().id;
    let column = split_block(&mut layout, top, SplitDirection::Column, true).unwrap();
    split_block(&mut layout, column.first, SplitDirection::Row, true).unwrap();

    let row = *layout.split_line(line).unwrap();
    let affected = find_affected_blocks(&layout, &row);
    assert_eq!(affected.before.len(), 2);
    let range = drag_range(&layout, &row, &affected);
    assert_eq!(range.min, 70.0);
    assert_eq!(range.max, 180.0);
}

#[test]
fn test_commit_rejection_leaves_layout_unchanged() {
    let (mut layout, line) = row_split();
    let before = layout.clone();
    assert!(matches!(
        commit_drag(&mut layout, line, 190.0),
        Err(LayoutError::BelowMinimumSize { .. })
    ));
    assert_eq!(layout, before);
}

#[test]
fn test_unknown_line() {
    let (layout, _) = row_split();
    assert_eq!(
        DragSession::begin(&layout, 999).unwrap_err(),
        LayoutError::LineNotFound { id: 999 }
    );
}

#[test]
fn test_minimum_width_neighbour_moves_with_line() {
    let snapshot = LayoutSnapshot {
        blocks: vec![
            Block::new(1, 0.0, 0.0, 20.0, 100.0),
            Block::new(2, 20.0, 0.0, 280.0, 100.0),
            Block::new(3, 0.0, 100.0, 300.0, 100.0),
        ],
        split_lines: vec![
            SplitLine::horizontal(4, 100.0, 0.0, 300.0),
            SplitLine::vertical(5, 20.0, 0.0, 100.0),
        ],
    };
    let mut layout =
        Layout::from_parts(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default(), snapshot)
            .unwrap();

    let row = *layout.split_line(4).unwrap();
    let affected = find_affected_blocks(&layout, &row);
    assert_eq!(affected.before, vec![1, 2]);
    assert_eq!(affected.after, vec![3]);

    commit_drag(&mut layout, 4, 150.0).unwrap();
    assert_eq!(layout.block(1).unwrap().height, 150.0);
    assert_eq!(layout.split_line(5).unwrap().span(), (0.0, 150.0));
}
