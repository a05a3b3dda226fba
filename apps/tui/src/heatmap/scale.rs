//! Band and linear scales for the heatmap geometry.
//!
//! A band scale divides a continuous range into one slot per domain value,
//! with a fraction of each slot reserved as padding:
//!
//! ```text
//! step      = span / (n + padding)          (inner and outer padding equal)
//! bandwidth = step * (1 - padding)
//! start     = range start + outer padding, bands centered in the range
//! ```
//!
//! `slot_at` is the inverse used by the cell rasterizer and mouse
//! hit-testing: it maps a coordinate back to the band under it.

/// Discrete domain -> position band over a continuous range.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl<T: Copy + PartialEq> BandScale<T> {
    /// Build a scale over `domain` mapped onto `range`, with `padding` as a
    /// fraction of the step (0.0 = bands touch, 0.1 = 10% gaps).
    pub fn new(domain: Vec<T>, range: (f64, f64), padding: f64) -> Self {
        let count = domain.len() as f64;
        let span = range.1 - range.0;
        let step = span / (count - padding + 2.0 * padding).max(1.0);
        let bandwidth = step * (1.0 - padding);
        let start = range.0 + (span - step * (count - padding)) / 2.0;

        Self {
            domain,
            range,
            step,
            bandwidth,
            start,
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub const fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Leading edge of the band for `value`, if it is in the domain.
    pub fn position(&self, value: T) -> Option<f64> {
        self.domain
            .iter()
            .position(|entry| *entry == value)
            .map(|index| self.position_of(index))
    }

    /// Leading edge of the band at `index`.
    pub fn position_of(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Band under `coord`, or None when the coordinate falls outside the
    /// range or into a padding gap.
    pub fn slot_at(&self, coord: f64) -> Option<usize> {
        if self.domain.is_empty() {
            return None;
        }
        let offset = coord - self.start;
        if offset < 0.0 {
            return None;
        }
        let index = (offset / self.step).floor() as usize;
        if index >= self.domain.len() {
            return None;
        }
        if offset - self.step * index as f64 <= self.bandwidth {
            Some(index)
        } else {
            None
        }
    }

    /// Band under `coord`, treating padding gaps as part of the preceding
    /// band. Used when rasterizing to a grid coarser than the step.
    pub fn nearest_slot(&self, coord: f64) -> Option<usize> {
        if self.domain.is_empty() || coord < self.range.0 || coord >= self.range.1 {
            return None;
        }
        let index = ((coord - self.start) / self.step).floor();
        Some((index.max(0.0) as usize).min(self.domain.len() - 1))
    }

    /// Domain value of the band under `coord` (gap-aware).
    pub fn value_at(&self, coord: f64) -> Option<T> {
        self.slot_at(coord).map(|index| self.domain[index])
    }
}

/// Continuous domain -> range mapping, used for the legend axis.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        self.range.0 + (value - self.domain.0) / span * (self.range.1 - self.range.0)
    }
}
