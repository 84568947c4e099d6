mod args;

use anyhow::Context;
use clap::Parser;
use drawerkit::{init_logging, DesignerState, EditorSettings};

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;
    tracing::info!("DrawerKit {} (built {})", drawerkit::VERSION, drawerkit::BUILD_DATE);

    let settings = match &args.config {
        Some(path) => EditorSettings::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorSettings::load_or_default()?,
    };

    let mut state = DesignerState::new(settings, args.dimensions())
        .context("Drawer dimensions rejected")?;
    if let Some(material) = &args.material {
        state.set_material(material);
    }

    if let Some(path) = &args.save {
        state.save_to_file(path)?;
    }

    let quote = state.price_quote();
    tracing::info!(
        "Footprint {} sq in, dividers {} sq in, price {:.2}",
        quote.footprint_area,
        quote.divider_area,
        quote.price
    );

    println!("{}", serde_json::to_string_pretty(&state.cart_item())?);
    Ok(())
}
