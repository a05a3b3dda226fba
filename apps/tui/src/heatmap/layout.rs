//! The heatmap model: band scales, per-cell geometry, decade ticks, and
//! the legend, computed once per render surface from the dataset.

use std::collections::HashMap;

use ratatui::style::Color;
use serde::Serialize;

use crate::domain::Dataset;
use crate::heatmap::color::{ColorScale, Palette};
use crate::heatmap::scale::{BandScale, LinearScale};

/// Fraction of each band slot left as a gap between cells.
pub const BAND_PADDING: f64 = 0.1;

/// Number of swatches in the legend strip.
pub const LEGEND_SWATCHES: usize = 10;

/// Dimensions of the rendered chart area. The defaults describe the
/// canonical 1200x600 surface with a 60px margin and a 400x20 legend; the
/// TUI substitutes the live terminal rectangle.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub legend_width: f64,
    pub legend_height: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            padding: 60.0,
            legend_width: 400.0,
            legend_height: 20.0,
        }
    }
}

impl ChartGeometry {
    /// Geometry for a character grid: no outer margin (the screen layout
    /// reserves axis space separately).
    pub fn terminal(width: u16, height: u16, legend_width: u16) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
            padding: 0.0,
            legend_width: f64::from(legend_width),
            legend_height: 1.0,
        }
    }
}

/// One rectangle of the heatmap, carrying its inspectable data attributes:
/// the 0-based month index, the year, and the absolute temperature.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub year: i32,
    pub month: u32,
    pub temperature: f64,
    pub variance: f64,
}

/// One step of the legend strip.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegendSwatch {
    pub x: f64,
    pub width: f64,
    /// Sample value the swatch color was taken at.
    pub value: f64,
    /// Lower bound of the swatch's sub-interval, shown as its axis label.
    pub lower: f64,
    pub color: (u8, u8, u8),
}

/// Scales, cells, and legend for one dataset on one surface. Read-only
/// after construction.
#[derive(Debug, Clone)]
pub struct HeatmapModel {
    geometry: ChartGeometry,
    year_scale: BandScale<i32>,
    month_scale: BandScale<u32>,
    color_scale: ColorScale,
    cells: Vec<Cell>,
    by_position: HashMap<(i32, u32), usize>,
}

impl HeatmapModel {
    pub fn new(dataset: &Dataset, geometry: ChartGeometry, palette: Palette) -> Self {
        let (year_scale, month_scale) = build_scales(dataset, geometry);
        let color_scale = ColorScale::from_dataset(palette, dataset);

        let mut cells = Vec::with_capacity(dataset.len());
        let mut by_position = HashMap::with_capacity(dataset.len());

        for observation in &dataset.observations {
            let month = observation.month_index();
            let (Some(x), Some(y)) = (
                year_scale.position(observation.year),
                month_scale.position(month),
            ) else {
                continue;
            };

            // duplicate (year, month) entries: the last observation wins
            by_position.insert((observation.year, month), cells.len());
            cells.push(Cell {
                x,
                y,
                width: year_scale.bandwidth(),
                height: month_scale.bandwidth(),
                year: observation.year,
                month,
                temperature: dataset.absolute_temp(observation),
                variance: observation.variance,
            });
        }

        Self {
            geometry,
            year_scale,
            month_scale,
            color_scale,
            cells,
            by_position,
        }
    }

    pub const fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub const fn year_scale(&self) -> &BandScale<i32> {
        &self.year_scale
    }

    pub const fn month_scale(&self) -> &BandScale<u32> {
        &self.month_scale
    }

    pub const fn color_scale(&self) -> &ColorScale {
        &self.color_scale
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_color(&self, cell: &Cell) -> Color {
        self.color_scale.color(cell.temperature)
    }

    /// Cell for a (year, 0-based month) pair, if observed.
    pub fn cell_lookup(&self, year: i32, month: u32) -> Option<&Cell> {
        self.by_position
            .get(&(year, month))
            .map(|&index| &self.cells[index])
    }

    /// Cell under a chart-space coordinate. Years are resolved to the
    /// nearest band (columns are usually coarser than the year step);
    /// month gaps count as outside any cell.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&Cell> {
        let year = self
            .year_scale
            .nearest_slot(x)
            .map(|index| self.year_scale.domain()[index])?;
        let month = self.month_scale.value_at(y)?;
        self.cell_lookup(year, month)
    }

    /// X-axis tick years: restricted to decades.
    pub fn tick_years(&self) -> Vec<i32> {
        self.year_scale
            .domain()
            .iter()
            .copied()
            .filter(|year| year % 10 == 0)
            .collect()
    }

    /// The ten legend swatches, spanning exactly `legend_width`.
    pub fn legend(&self) -> Vec<LegendSwatch> {
        let (min, max) = self.color_scale.domain();
        let span = max - min;
        let width = self.geometry.legend_width / LEGEND_SWATCHES as f64;

        self.color_scale
            .samples(LEGEND_SWATCHES)
            .into_iter()
            .enumerate()
            .map(|(index, (value, color))| LegendSwatch {
                x: width * index as f64,
                width,
                value,
                lower: min + span * index as f64 / LEGEND_SWATCHES as f64,
                color,
            })
            .collect()
    }

    /// Linear axis under the legend strip.
    pub fn legend_scale(&self) -> LinearScale {
        LinearScale::new(self.color_scale.domain(), (0.0, self.geometry.legend_width))
    }
}

fn build_scales(dataset: &Dataset, geometry: ChartGeometry) -> (BandScale<i32>, BandScale<u32>) {
    let year_scale = BandScale::new(dataset.years(), (0.0, geometry.width), BAND_PADDING);
    let month_scale = BandScale::new((0..12).collect(), (0.0, geometry.height), BAND_PADDING);
    (year_scale, month_scale)
}

/// Resolve a chart-space pointer position to the (year, 0-based month) of
/// the cell under it, without materializing the full model. Used by the
/// mouse handler on every pointer move.
pub fn hover_target(dataset: &Dataset, geometry: ChartGeometry, x: f64, y: f64) -> Option<(i32, u32)> {
    let (year_scale, month_scale) = build_scales(dataset, geometry);
    let year = year_scale
        .nearest_slot(x)
        .map(|index| year_scale.domain()[index])?;
    let month = month_scale.value_at(y)?;
    Some((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;
    use chrono::Month;

    fn dataset() -> Dataset {
        let mut observations = Vec::new();
        for year in [1753, 1754, 1760, 1770] {
            for (index, month) in [Month::January, Month::February, Month::March]
                .into_iter()
                .enumerate()
            {
                observations.push(Observation {
                    year,
                    month,
                    variance: -1.0 + index as f64 * 0.5,
                });
            }
        }
        Dataset {
            base_temperature: 8.66,
            observations,
        }
    }

    fn model() -> HeatmapModel {
        HeatmapModel::new(&dataset(), ChartGeometry::default(), Palette::Cool)
    }

    #[test]
    fn one_cell_per_observation_with_band_geometry() {
        let model = model();
        assert_eq!(model.cells().len(), 12);

        let cell = &model.cells()[0];
        assert_eq!(cell.year, 1753);
        assert_eq!(cell.month, 0);
        assert!((cell.width - model.year_scale().bandwidth()).abs() < 1e-12);
        assert!((cell.height - model.month_scale().bandwidth()).abs() < 1e-12);
        assert!((cell.x - model.year_scale().position(1753).unwrap()).abs() < 1e-12);
        assert!((cell.temperature - 7.66).abs() < 1e-12);
    }

    #[test]
    fn scale_domains_match_the_contract() {
        let model = model();
        assert_eq!(model.year_scale().domain(), &[1753, 1754, 1760, 1770]);
        let months: Vec<u32> = (0..12).collect();
        assert_eq!(model.month_scale().domain(), months.as_slice());
    }

    #[test]
    fn ticks_are_restricted_to_decades() {
        assert_eq!(model().tick_years(), vec![1760, 1770]);
    }

    #[test]
    fn color_domain_covers_the_dataset_extent() {
        let model = model();
        let (min, max) = model.color_scale().domain();
        assert!((min - 7.66).abs() < 1e-12);
        assert!((max - 8.66).abs() < 1e-12);
    }

    #[test]
    fn legend_has_ten_swatches_spanning_the_strip() {
        let model = model();
        let legend = model.legend();
        assert_eq!(legend.len(), LEGEND_SWATCHES);

        let total: f64 = legend.iter().map(|swatch| swatch.width).sum();
        assert!((total - model.geometry().legend_width).abs() < 1e-9);

        // contiguous: each swatch starts where the previous one ends
        for pair in legend.windows(2) {
            assert!((pair[1].x - (pair[0].x + pair[0].width)).abs() < 1e-9);
        }
    }

    #[test]
    fn legend_scale_places_bounds_on_swatch_edges() {
        let model = model();
        let scale = model.legend_scale();
        for swatch in model.legend() {
            assert!((scale.scale(swatch.lower) - swatch.x).abs() < 1e-9);
        }
    }

    #[test]
    fn cell_at_resolves_band_centers() {
        let model = model();
        let x = model.year_scale().position(1760).unwrap() + model.year_scale().bandwidth() / 2.0;
        let y = model.month_scale().position(1).unwrap() + model.month_scale().bandwidth() / 2.0;

        let cell = model.cell_at(x, y).unwrap();
        assert_eq!((cell.year, cell.month), (1760, 1));
    }

    #[test]
    fn cell_at_misses_unobserved_months() {
        let model = model();
        let x = model.year_scale().position(1753).unwrap();
        let y = model.month_scale().position(7).unwrap() + 0.1;
        assert!(model.cell_at(x, y).is_none());
    }

    #[test]
    fn hover_target_agrees_with_cell_at() {
        let data = dataset();
        let geometry = ChartGeometry::default();
        let model = HeatmapModel::new(&data, geometry, Palette::Cool);

        let x = model.year_scale().position(1754).unwrap() + 1.0;
        let y = model.month_scale().position(2).unwrap() + 1.0;

        assert_eq!(hover_target(&data, geometry, x, y), Some((1754, 2)));
        let cell = model.cell_at(x, y).unwrap();
        assert_eq!((cell.year, cell.month), (1754, 2));
    }

    #[test]
    fn duplicate_observations_keep_the_last_entry() {
        let mut data = dataset();
        data.observations.push(Observation {
            year: 1753,
            month: Month::January,
            variance: 3.0,
        });
        let model = HeatmapModel::new(&data, ChartGeometry::default(), Palette::Cool);

        // every observation still gets a cell, lookup sees the last one
        assert_eq!(model.cells().len(), 13);
        let cell = model.cell_lookup(1753, 0).unwrap();
        assert!((cell.variance - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_dataset_builds_an_empty_model() {
        let data = Dataset {
            base_temperature: 8.66,
            observations: Vec::new(),
        };
        let model = HeatmapModel::new(&data, ChartGeometry::default(), Palette::Cool);
        assert!(model.is_empty());
        assert!(model.cell_at(600.0, 300.0).is_none());
        assert_eq!(model.legend().len(), LEGEND_SWATCHES);
    }
}
