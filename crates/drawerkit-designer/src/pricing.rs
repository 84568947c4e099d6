//! Price projection from layout geometry.
//!
//! Pure functions: the price is the drawer footprint area plus the area of
//! every divider, each rounded to whole square inches before summing, times
//! an externally configured rate.

use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// One divider panel, derived from a split line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    pub length_in: f64,
    pub height_in: f64,
}

impl Divider {
    pub fn area(&self) -> f64 {
        self.length_in * self.height_in
    }
}

/// Dividers for every split line, full drawer height.
pub fn dividers(layout: &Layout) -> Vec<Divider> {
    let grid = layout.grid();
    let height_in = layout.dimensions().height;
    layout
        .split_lines()
        .iter()
        .map(|line| Divider {
            length_in: grid.to_inches(line.length()),
            height_in,
        })
        .collect()
}

/// Breakdown of a computed price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Rounded floor area, square inches
    pub footprint_area: f64,
    /// Sum of rounded divider areas, square inches
    pub divider_area: f64,
    pub total_area: f64,
    /// `total_area * rate`, rounded to cents
    pub price: f64,
}

/// Prices the layout at `price_per_square_inch`.
pub fn quote(layout: &Layout, price_per_square_inch: f64) -> PriceQuote {
    let grid = layout.grid();
    let width_in = grid.to_inches(layout.width());
    let depth_in = grid.to_inches(layout.depth());

    let footprint_area = (width_in * depth_in).round();
    let divider_area: f64 = dividers(layout).iter().map(|d| d.area().round()).sum();
    let total_area = footprint_area + divider_area;
    let price = (total_area * price_per_square_inch * 100.0).round() / 100.0;

    PriceQuote {
        footprint_area,
        divider_area,
        total_area,
        price,
    }
}
