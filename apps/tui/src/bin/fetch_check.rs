//! Fetches the configured dataset and prints what the heatmap would be
//! built from. Handy for checking a DATA_URL before running the TUI.

use color_eyre::Result;
use dotenv::dotenv;
use std::env;

use heatgrid::config;
use heatgrid::data;
use heatgrid::heatmap::{ChartGeometry, HeatmapModel, Palette};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let url = env::var("DATA_URL").unwrap_or_else(|_| config::DEFAULT_DATA_URL.to_string());
    println!("Fetching {url}");

    let dataset = data::fetch_dataset(&url).await?;
    println!("Base temperature: {:.2}℃", dataset.base_temperature);
    println!("Observations: {}", dataset.len());

    if let Some((first, last)) = dataset.year_range() {
        println!("Years: {first}-{last}");
    }
    if let Some((min, max)) = dataset.temperature_extent() {
        println!("Absolute temperature range: {min:.2}℃ to {max:.2}℃");
    }

    let model = HeatmapModel::new(&dataset, ChartGeometry::default(), Palette::Cool);
    println!("Cells: {}", model.cells().len());
    println!("Decade ticks: {}", model.tick_years().len());

    Ok(())
}
