//! Color mapping from temperature to terminal colors.
//!
//! Palettes are piecewise-linear RGB ramps sampled at a normalized
//! position; `ColorScale` pins a palette to the observed temperature
//! extent so every cell and the legend share one mapping.

use ratatui::style::Color;

use crate::domain::Dataset;

type Stop = (f64, (u8, u8, u8));

/// Purple -> blue -> green ramp, the classic "cool" sequential scheme.
const COOL: [Stop; 6] = [
    (0.0, (110, 64, 170)),
    (0.2, (86, 103, 225)),
    (0.4, (46, 149, 224)),
    (0.6, (36, 195, 175)),
    (0.8, (82, 231, 115)),
    (1.0, (175, 240, 91)),
];

const VIRIDIS: [Stop; 5] = [
    (0.0, (68, 1, 84)),
    (0.25, (59, 82, 139)),
    (0.5, (33, 145, 140)),
    (0.75, (94, 201, 98)),
    (1.0, (253, 231, 37)),
];

const PLASMA: [Stop; 5] = [
    (0.0, (13, 8, 135)),
    (0.25, (126, 3, 168)),
    (0.5, (204, 71, 120)),
    (0.75, (248, 149, 64)),
    (1.0, (240, 249, 33)),
];

const BLUE_RED: [Stop; 3] = [
    (0.0, (59, 76, 192)),
    (0.5, (221, 221, 221)),
    (1.0, (180, 4, 38)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Cool,
    Viridis,
    Plasma,
    BlueRed,
}

impl Palette {
    pub const ALL: [Self; 4] = [Self::Cool, Self::Viridis, Self::Plasma, Self::BlueRed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::BlueRed => "bluered",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cool => "Cool",
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::BlueRed => "Blue-Red",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cool" => Some(Self::Cool),
            "viridis" => Some(Self::Viridis),
            "plasma" => Some(Self::Plasma),
            "bluered" | "blue-red" => Some(Self::BlueRed),
            _ => None,
        }
    }

    /// Next palette in the cycle, for the `p` key.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|palette| *palette == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    fn stops(self) -> &'static [Stop] {
        match self {
            Self::Cool => &COOL,
            Self::Viridis => &VIRIDIS,
            Self::Plasma => &PLASMA,
            Self::BlueRed => &BLUE_RED,
        }
    }

    /// Sample the ramp at a normalized position, clamped to [0, 1].
    pub fn rgb(self, t: f64) -> (u8, u8, u8) {
        let stops = self.stops();
        let t = t.clamp(0.0, 1.0);

        let mut upper = 1;
        while upper < stops.len() - 1 && stops[upper].0 < t {
            upper += 1;
        }
        let (t0, low) = stops[upper - 1];
        let (t1, high) = stops[upper];

        let local = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
        (
            lerp_channel(low.0, high.0, local),
            lerp_channel(low.1, high.1, local),
            lerp_channel(low.2, high.2, local),
        )
    }

    pub fn color(self, t: f64) -> Color {
        let (r, g, b) = self.rgb(t);
        Color::Rgb(r, g, b)
    }
}

fn lerp_channel(low: u8, high: u8, t: f64) -> u8 {
    (f64::from(low) + (f64::from(high) - f64::from(low)) * t).round() as u8
}

/// The heatmap's ColorMapping: a palette over the absolute-temperature
/// extent of the dataset. Computed once after load, reused for every cell
/// and the legend, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    palette: Palette,
    domain: (f64, f64),
}

impl ColorScale {
    pub const fn new(palette: Palette, domain: (f64, f64)) -> Self {
        Self { palette, domain }
    }

    pub fn from_dataset(palette: Palette, dataset: &Dataset) -> Self {
        let domain = dataset.temperature_extent().unwrap_or((0.0, 1.0));
        Self::new(palette, domain)
    }

    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Normalized position of a temperature within the domain.
    pub fn normalized(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        (value - self.domain.0) / span
    }

    pub fn rgb(&self, value: f64) -> (u8, u8, u8) {
        self.palette.rgb(self.normalized(value))
    }

    pub fn color(&self, value: f64) -> Color {
        self.palette.color(self.normalized(value))
    }

    /// Sample the mapping at `count` evenly spaced points across the
    /// domain (midpoints of equal sub-intervals), for the legend.
    pub fn samples(&self, count: usize) -> Vec<(f64, (u8, u8, u8))> {
        let span = self.domain.1 - self.domain.0;
        (0..count)
            .map(|index| {
                let value = self.domain.0 + (index as f64 + 0.5) / count as f64 * span;
                (value, self.rgb(value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;
    use chrono::Month;

    fn dataset() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            observations: vec![
                Observation {
                    year: 1753,
                    month: Month::January,
                    variance: -1.366,
                },
                Observation {
                    year: 1900,
                    month: Month::July,
                    variance: 1.1,
                },
            ],
        }
    }

    #[test]
    fn domain_matches_temperature_extent() {
        let scale = ColorScale::from_dataset(Palette::Cool, &dataset());
        let (min, max) = scale.domain();
        assert!((min - (8.66 - 1.366)).abs() < 1e-12);
        assert!((max - (8.66 + 1.1)).abs() < 1e-12);
    }

    #[test]
    fn ramp_endpoints_hit_first_and_last_stop() {
        assert_eq!(Palette::Cool.rgb(0.0), (110, 64, 170));
        assert_eq!(Palette::Cool.rgb(1.0), (175, 240, 91));
        // out-of-range values clamp instead of extrapolating
        assert_eq!(Palette::Cool.rgb(-2.0), Palette::Cool.rgb(0.0));
        assert_eq!(Palette::Cool.rgb(2.0), Palette::Cool.rgb(1.0));
    }

    #[test]
    fn midpoint_interpolates_between_stops() {
        let (r, g, b) = Palette::BlueRed.rgb(0.25);
        assert_eq!((r, g, b), (140, 149, 207));
    }

    #[test]
    fn samples_are_evenly_spaced_midpoints() {
        let scale = ColorScale::new(Palette::Cool, (0.0, 10.0));
        let samples = scale.samples(10);
        assert_eq!(samples.len(), 10);
        assert!((samples[0].0 - 0.5).abs() < 1e-12);
        assert!((samples[9].0 - 9.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_domain_maps_to_ramp_middle() {
        let scale = ColorScale::new(Palette::Cool, (7.0, 7.0));
        assert_eq!(scale.rgb(7.0), Palette::Cool.rgb(0.5));
    }

    #[test]
    fn palette_cycle_visits_all_and_wraps() {
        let mut palette = Palette::Cool;
        for _ in 0..Palette::ALL.len() {
            palette = palette.next();
        }
        assert_eq!(palette, Palette::Cool);
    }

    #[test]
    fn palette_parse_round_trips_as_str() {
        for palette in Palette::ALL {
            assert_eq!(Palette::parse(palette.as_str()), Some(palette));
        }
        assert_eq!(Palette::parse("warm"), None);
    }
}
