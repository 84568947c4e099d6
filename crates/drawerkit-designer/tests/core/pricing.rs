use drawerkit_core::units::GridSpec;
use drawerkit_core::Dimensions;
use drawerkit_designer::{quote, split_block, Layout, SplitDirection};

#[test]
fn test_pricing_scenario() {
    let layout = Layout::new(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default()).unwrap();
    let quote = quote(&layout, 1.0);
    assert_eq!(quote.footprint_area, 600.0);
    assert_eq!(quote.price, 600.0);
}

#[test]
fn test_price_follows_divider_length() {
    let mut layout = Layout::new(Dimensions::new(30.0, 20.0, 4.0), GridSpec::default()).unwrap();
    let root = layout.blocks()[0].id;
    let column = split_block(&mut layout, root, SplitDirection::Column, true).unwrap();
    split_block(&mut layout, column.second, SplitDirection::Row, true).unwrap();

    // 20" x 4" full-depth divider plus 15" x 4" in the right half
    let quote = quote(&layout, 1.0);
    assert_eq!(quote.divider_area, 140.0);
    assert_eq!(quote.total_area, 740.0);
}

#[test]
fn test_rate_is_applied_to_total() {
    let layout = Layout::new(Dimensions::new(12.0, 12.0, 2.0), GridSpec::default()).unwrap();
    assert_eq!(quote(&layout, 0.035).price, 5.04);
}
