use chrono::Month;
use serde::Deserialize;

use crate::data::DataError;
use crate::domain::{Dataset, Observation};

/// Wire format of the dataset endpoint.
#[derive(Debug, Deserialize)]
pub struct DatasetFile {
    #[serde(rename = "baseTemperature")]
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub monthly_variance: Vec<VarianceRecord>,
}

/// One record of the `monthlyVariance` array. Months are 1-based on the
/// wire and validated during conversion.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

impl DatasetFile {
    /// Convert the raw file into the domain dataset, rejecting records
    /// with an out-of-range month.
    pub fn into_dataset(self) -> Result<Dataset, DataError> {
        let mut observations = Vec::with_capacity(self.monthly_variance.len());

        for record in self.monthly_variance {
            let month = u8::try_from(record.month)
                .ok()
                .and_then(|number| Month::try_from(number).ok())
                .ok_or(DataError::InvalidMonth {
                    year: record.year,
                    month: record.month,
                })?;

            observations.push(Observation {
                year: record.year,
                month,
                variance: record.variance,
            });
        }

        Ok(Dataset {
            base_temperature: self.base_temperature,
            observations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_order_and_values() {
        let file = DatasetFile {
            base_temperature: 8.66,
            monthly_variance: vec![
                VarianceRecord {
                    year: 1753,
                    month: 1,
                    variance: -1.366,
                },
                VarianceRecord {
                    year: 1753,
                    month: 2,
                    variance: -2.223,
                },
            ],
        };

        let dataset = file.into_dataset().unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.observations.len(), 2);
        assert_eq!(dataset.observations[0].year, 1753);
        assert_eq!(dataset.observations[0].month, Month::January);
        assert_eq!(dataset.observations[1].month, Month::February);
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        for month in [0, 13] {
            let file = DatasetFile {
                base_temperature: 8.66,
                monthly_variance: vec![VarianceRecord {
                    year: 1900,
                    month,
                    variance: 0.1,
                }],
            };

            match file.into_dataset() {
                Err(DataError::InvalidMonth { year: 1900, month: m }) => assert_eq!(m, month),
                other => panic!("expected InvalidMonth, got {other:?}"),
            }
        }
    }
}
