use chrono::Month;
use std::collections::BTreeSet;

/// All twelve months in calendar order. The heatmap's y-axis domain is
/// always the full year, regardless of which months the dataset covers.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Full month name for a 0-based month index.
pub fn month_name(index: u32) -> Option<&'static str> {
    MONTHS.get(index as usize).map(Month::name)
}

/// A single monthly temperature reading: the variance is the delta in °C
/// from the dataset's base temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub month: Month,
    pub variance: f64,
}

impl Observation {
    /// 0-based month index, as carried on rendered cells.
    pub fn month_index(&self) -> u32 {
        self.month.number_from_month() - 1
    }
}

/// The fetched dataset: a base temperature plus an ordered sequence of
/// observations. Years are not unique (one entry per month per year).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub base_temperature: f64,
    pub observations: Vec<Observation>,
}

impl Dataset {
    /// Absolute temperature of an observation. Exact, no rounding.
    pub fn absolute_temp(&self, observation: &Observation) -> f64 {
        self.base_temperature + observation.variance
    }

    /// Distinct years present in the observations, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.observations
            .iter()
            .map(|observation| observation.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First and last year covered, if any observations exist.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years = self.years();
        Some((*years.first()?, *years.last()?))
    }

    /// Minimum and maximum absolute temperature over the full dataset.
    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        self.observations
            .iter()
            .map(|observation| self.absolute_temp(observation))
            .fold(None, |extent, temp| match extent {
                None => Some((temp, temp)),
                Some((min, max)) => Some((min.min(temp), max.max(temp))),
            })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            observations: vec![
                Observation {
                    year: 1753,
                    month: Month::January,
                    variance: -1.366,
                },
                Observation {
                    year: 1753,
                    month: Month::February,
                    variance: -2.223,
                },
                Observation {
                    year: 1754,
                    month: Month::January,
                    variance: 0.32,
                },
            ],
        }
    }

    #[test]
    fn absolute_temp_adds_variance_to_base() {
        let dataset = sample_dataset();
        let temp = dataset.absolute_temp(&dataset.observations[0]);
        assert!((temp - 7.294).abs() < 1e-12);
        assert_eq!(temp, 8.66 + -1.366);
    }

    #[test]
    fn years_are_distinct_and_ascending() {
        assert_eq!(sample_dataset().years(), vec![1753, 1754]);
    }

    #[test]
    fn temperature_extent_spans_min_and_max() {
        let dataset = sample_dataset();
        let (min, max) = dataset.temperature_extent().unwrap();
        assert!((min - (8.66 - 2.223)).abs() < 1e-12);
        assert!((max - (8.66 + 0.32)).abs() < 1e-12);
    }

    #[test]
    fn temperature_extent_of_empty_dataset_is_none() {
        let dataset = Dataset {
            base_temperature: 8.66,
            observations: Vec::new(),
        };
        assert_eq!(dataset.temperature_extent(), None);
        assert_eq!(dataset.year_range(), None);
    }

    #[test]
    fn month_names_follow_calendar_order() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
    }

    #[test]
    fn month_index_is_zero_based() {
        let dataset = sample_dataset();
        assert_eq!(dataset.observations[0].month_index(), 0);
        assert_eq!(dataset.observations[1].month_index(), 1);
    }
}
