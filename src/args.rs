//! Command-line arguments for the `drawerkit` tool.

use std::path::PathBuf;

use clap::Parser;
use drawerkit::Dimensions;
use drawerkit_core::units::parse_inches;

/// Price a drawer organizer and print its cart item as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Drawer width in inches (e.g. 30, 20.5, "20 1/2")
    #[arg(value_parser = parse_inches)]
    pub width: f64,

    /// Drawer depth in inches
    #[arg(value_parser = parse_inches)]
    pub depth: f64,

    /// Drawer height in inches
    #[arg(value_parser = parse_inches)]
    pub height: f64,

    /// Path to editor settings (JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Material id to price with
    #[arg(short, long)]
    pub material: Option<String>,

    /// Write the design file here
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

impl Args {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.depth, self.height)
    }
}
