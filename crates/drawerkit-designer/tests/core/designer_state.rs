use drawerkit_core::Dimensions;
use drawerkit_designer::DesignerState;
use drawerkit_settings::EditorSettings;

fn state() -> DesignerState {
    DesignerState::with_dimensions(Dimensions::new(30.0, 20.0, 3.0)).unwrap()
}

#[test]
fn test_add_row_without_selection_is_noop() {
    let mut state = state();
    let before = state.layout().snapshot();
    let index = state.history().index();

    assert!(!state.add_row());
    assert!(!state.add_column());
    assert_eq!(state.layout().snapshot(), before);
    assert_eq!(state.history().index(), index);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_split_clears_selection() {
    let mut state = state();
    assert!(state.select_at(10.0, 10.0));
    assert!(state.can_add_row());
    assert!(state.add_row());
    assert_eq!(state.selected_block(), None);
    assert!(!state.can_add_row());
}

#[test]
fn test_guarded_split_of_small_block() {
    let mut state = DesignerState::with_dimensions(Dimensions::new(3.0, 20.0, 3.0)).unwrap();
    state.select_at(5.0, 5.0);
    assert!(!state.can_add_column());
    assert!(!state.add_column());
    assert!(state.can_add_row());
}

#[test]
fn test_unguarded_split_allowed() {
    let mut settings = EditorSettings::default();
    settings.grid.guard_undersized_split = false;
    let mut state = DesignerState::new(settings, Dimensions::new(3.0, 20.0, 3.0)).unwrap();
    state.select_at(5.0, 5.0);
    assert!(state.add_column());
    assert_eq!(state.layout().blocks()[0].width, 15.0);
}

#[test]
fn test_initialize_resets_session() {
    let mut state = state();
    state.select_at(10.0, 10.0);
    state.add_row();
    assert!(state.initialize(Dimensions::new(24.0, 18.0, 4.0)));

    assert_eq!(state.layout().blocks().len(), 1);
    assert_eq!(state.layout().width(), 240.0);
    assert_eq!(state.history().len(), 1);
    assert!(!state.can_undo());
}

#[test]
fn test_initialize_with_bad_dimensions_keeps_layout() {
    let mut state = state();
    let before = state.layout().snapshot();
    assert!(!state.initialize(Dimensions::new(-1.0, 18.0, 4.0)));
    assert_eq!(state.layout().snapshot(), before);
}

#[test]
fn test_clear_is_undoable() {
    let mut state = state();
    state.select_at(10.0, 10.0);
    state.add_column();
    let split = state.layout().snapshot();

    assert!(state.clear());
    assert_eq!(state.layout().blocks().len(), 1);
    assert!(state.layout().split_lines().is_empty());
    assert_eq!(state.undo_description().as_deref(), Some("Clear"));
    assert!(state.undo());
    assert_eq!(state.layout().snapshot(), split);
}

#[test]
fn test_drag_session_lifecycle() {
    let mut state = state();
    state.select_at(10.0, 10.0);
    state.add_row();
    let line = state.layout().split_lines()[0].id;

    assert!(state.begin_drag(line));
    assert_eq!(state.drag_to(12.0), Some(20.0));
    assert_eq!(state.drag_preview().map(|l| l.y1), Some(20.0));
    assert!(state.cancel_drag());
    assert_eq!(state.layout().split_lines()[0].y1, 100.0);
    assert_eq!(state.history().len(), 2);

    assert!(state.begin_drag(line));
    state.drag_to(100.0);
    assert!(!state.end_drag());
    assert_eq!(state.history().len(), 2);

    assert!(state.drag_line(line, 150.0));
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.undo_description().as_deref(), Some("Resize"));
}

#[test]
fn test_material_selection() {
    let mut state = state();
    assert_eq!(state.selected_material_id(), Some("maple"));
    assert!(state.set_material("walnut"));
    assert!(!state.set_material("unobtainium"));
    assert_eq!(state.selected_material().map(|m| m.name.as_str()), Some("Black Walnut"));
}
