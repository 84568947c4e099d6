use drawerkit_core::Dimensions;
use drawerkit_designer::DesignerState;
use drawerkit_settings::EditorSettings;

#[test]
fn test_session_uses_loaded_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.toml");

    let mut settings = EditorSettings::default();
    settings.history_depth = 3;
    settings.pricing.price_per_square_inch = 2.0;
    settings.export.default_material = Some("walnut".to_string());
    settings.save_to_file(&path).unwrap();

    let settings = EditorSettings::load_from_file(&path).unwrap();
    let mut state = DesignerState::new(settings, Dimensions::new(30.0, 20.0, 3.0)).unwrap();
    assert_eq!(state.selected_material_id(), Some("walnut"));
    assert_eq!(state.price_quote().price, 1200.0);

    state.select_at(10.0, 10.0);
    state.add_row();
    let line = state.layout().split_lines()[0].id;
    for target in [50.0, 100.0, 150.0] {
        assert!(state.drag_line(line, target));
    }
    assert_eq!(state.history().len(), 3);
}
