use drawerkit_core::{Block, Dimensions};
use drawerkit_designer::{ActionType, DesignerState, HistoryManager, LayoutSnapshot};

fn snapshot(id: u64) -> LayoutSnapshot {
    LayoutSnapshot {
        blocks: vec![Block::new(id, 0.0, 0.0, 300.0, 200.0)],
        split_lines: vec![],
    }
}

#[test]
fn test_history_manager_creation() {
    let manager = HistoryManager::new(snapshot(1), 50);
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_depth(), 0);
    assert_eq!(manager.redo_depth(), 0);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_undo_at_start_is_noop() {
    let mut manager = HistoryManager::new(snapshot(1), 50);
    assert!(manager.undo().is_none());
    assert_eq!(manager.index(), 0);
    assert!(manager.redo().is_none());
}

#[test]
fn test_history_descriptions() {
    let mut manager = HistoryManager::new(snapshot(1), 50);
    manager.record(ActionType::AddColumn, snapshot(2));
    assert_eq!(manager.undo_description().as_deref(), Some("Add Column"));
    assert_eq!(manager.redo_description(), None);
    manager.undo();
    assert_eq!(manager.redo_description().as_deref(), Some("Add Column"));
}

#[test]
fn test_history_cap_is_sliding_window() {
    let mut state = DesignerState::with_dimensions(Dimensions::new(30.0, 20.0, 3.0)).unwrap();
    let line = {
        let root = state.layout().blocks()[0].id;
        state.select_block(root);
        state.add_row();
        state.layout().split_lines()[0].id
    };

    // 59 more edits: 60 states after the initial one
    let mut states = vec![state.layout().snapshot()];
    for i in 0..59 {
        let target = if i % 2 == 0 { 50.0 } else { 100.0 };
        assert!(state.drag_line(line, target));
        states.push(state.layout().snapshot());
    }

    assert_eq!(state.history().len(), 50);
    assert_eq!(state.history().index(), 49);

    let mut undone = 0;
    while state.undo() {
        undone += 1;
    }
    assert_eq!(undone, 49);
    // Oldest remaining entry is the state from 49 edits ago
    assert_eq!(&state.layout().snapshot(), &states[states.len() - 50]);
}

#[test]
fn test_undo_redo_round_trip() {
    let mut state = DesignerState::with_dimensions(Dimensions::new(30.0, 20.0, 3.0)).unwrap();
    let root = state.layout().blocks()[0].id;
    let before = state.layout().snapshot();

    state.select_block(root);
    assert!(state.add_column());
    let after = state.layout().snapshot();

    assert!(state.undo());
    assert_eq!(state.layout().snapshot(), before);
    assert!(state.redo());
    assert_eq!(state.layout().snapshot(), after);
    assert!(!state.redo());
}

#[test]
fn test_new_edit_discards_redo() {
    let mut state = DesignerState::with_dimensions(Dimensions::new(30.0, 20.0, 3.0)).unwrap();
    let root = state.layout().blocks()[0].id;
    state.select_block(root);
    state.add_row();
    state.undo();
    assert!(state.can_redo());

    state.select_block(root);
    state.add_column();
    assert!(!state.can_redo());
    assert_eq!(state.history().len(), 2);
}
