use smallvec::SmallVec;

use crate::core::ticks::{TickValues, nice_ticks, tick_step};
use crate::error::{ChartError, ChartResult};

/// Affine mapping from a data domain onto a pixel range.
///
/// Domains and ranges keep their orientation as given, so an inverted y axis
/// is simply a range of `(chart_height, 0.0)`.
///
/// A degenerate domain (`start == end`) is accepted: every value maps to the
/// range start. This places an all-zero data set at the plot origin instead
/// of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    /// Maps a domain value to a pixel. Values outside the domain are not
    /// clamped.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel back into the domain.
    ///
    /// A degenerate domain or range has no inverse beyond its single domain
    /// value, which is returned for every pixel.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if self.is_degenerate() || range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Nice tick values covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    /// Ticks paired with their pixel positions.
    #[must_use]
    pub fn tick_positions(self, count: usize) -> SmallVec<[(f64, f64); 16]> {
        self.ticks(count)
            .into_iter()
            .map(|value| (value, self.map(value)))
            .collect()
    }

    /// Spacing between consecutive ticks for `count`, used for label
    /// precision.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        tick_step(self.domain_start, self.domain_end, count)
    }
}
