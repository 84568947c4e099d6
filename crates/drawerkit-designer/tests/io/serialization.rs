use drawerkit_core::units::GridSpec;
use drawerkit_core::{Block, Dimensions, SplitLine};
use drawerkit_designer::{DesignExport, DesignFile, DesignerState};

fn split_state() -> DesignerState {
    let mut state = DesignerState::with_dimensions(Dimensions::new(30.0, 20.0, 3.0)).unwrap();
    state.select_at(10.0, 10.0);
    state.add_row();
    state.select_at(10.0, 150.0);
    state.add_column();
    state
}

#[test]
fn test_save_and_load_design_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("organizer.drawer");

    let mut state = split_state();
    state.design_name = "Kitchen drawer".to_string();
    state.set_material("cherry");
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.current_file_path.as_deref(), Some(path.as_path()));

    let mut loaded = DesignerState::with_dimensions(Dimensions::new(10.0, 10.0, 2.0)).unwrap();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.layout().snapshot(), state.layout().snapshot());
    assert_eq!(loaded.selected_material_id(), Some("cherry"));
    assert_eq!(loaded.design_name, "Kitchen drawer");
    assert!(!loaded.can_undo());
    assert_eq!(loaded.history().undo_depth(), 0);
}

#[test]
fn test_load_rejects_broken_tiling() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.drawer");

    let mut file = DesignFile::new("broken", Dimensions::new(30.0, 20.0, 3.0));
    file.design.blocks = vec![Block::new(1, 0.0, 0.0, 300.0, 150.0)];
    file.save_to_file(&path).unwrap();

    let mut state = split_state();
    let before = state.layout().snapshot();
    assert!(state.load_from_file(&path).is_err());
    assert_eq!(state.layout().snapshot(), before);
}

#[test]
fn test_load_rejects_off_grid_and_undersized_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sliver.drawer");

    let mut file = DesignFile::new("sliver", Dimensions::new(30.0, 20.0, 3.0));
    file.design.blocks = vec![
        Block::new(1, 0.0, 0.0, 3.0, 200.0),
        Block::new(2, 3.0, 0.0, 297.0, 200.0),
    ];
    file.design.split_lines = vec![SplitLine::vertical(3, 3.0, 0.0, 200.0)];
    file.save_to_file(&path).unwrap();

    let mut state = split_state();
    let before = state.layout().snapshot();
    assert!(state.load_from_file(&path).is_err());
    assert_eq!(state.layout().snapshot(), before);
}

#[test]
fn test_export_with_stray_line_is_rejected() {
    let mut export = DesignExport::from_layout(split_state().layout(), None);
    export
        .split_lines
        .push(SplitLine::vertical(99, 50.0, 0.0, 100.0));
    assert!(export
        .to_layout(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default())
        .is_err());
}

#[test]
fn test_resized_design_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resized.drawer");

    let mut state = split_state();
    let row = state
        .layout()
        .split_lines()
        .iter()
        .find(|l| l.is_horizontal)
        .unwrap()
        .id;
    assert!(state.drag_line(row, 120.0));
    state.save_to_file(&path).unwrap();

    let mut loaded = DesignerState::with_dimensions(Dimensions::new(30.0, 20.0, 3.0)).unwrap();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.layout().snapshot(), state.layout().snapshot());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(DesignFile::load_from_file(dir.path().join("nope.drawer")).is_err());
}

#[test]
fn test_export_json_round_trip_rebuilds_layout() {
    let state = split_state();
    let json = state.export_design().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["blocks"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["splitLines"][0]["isHorizontal"], true);
    assert_eq!(value["selectedMaterial"], "maple");

    let export = DesignExport::from_json(&json).unwrap();
    let layout = export
        .to_layout(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default())
        .unwrap();
    assert_eq!(layout.blocks(), state.layout().blocks());
}

#[test]
fn test_cart_item_and_manufacturing_spec() {
    let state = split_state();
    let item = state.cart_item();
    assert_eq!(item.dividers.len(), 2);
    assert_eq!(item.dividers[0].length_in, 30.0);
    assert_eq!(item.dividers[1].length_in, 10.0);
    assert_eq!(item.price, 600.0 + 90.0 + 30.0);
    assert_eq!(item.material.as_deref(), Some("maple"));

    let spec = state.manufacturing_spec();
    assert_eq!(spec.width_in, 30.0 - 0.0625);
    assert_eq!(spec.depth_in, 20.0 - 0.0625);
    assert_eq!(spec.height_in, 3.0);
}
