pub mod color;
pub mod layout;
pub mod scale;

pub use color::{ColorScale, Palette};
pub use layout::{hover_target, Cell, ChartGeometry, HeatmapModel, LegendSwatch};
pub use scale::{BandScale, LinearScale};
