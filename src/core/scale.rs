use crate::core::types::PixelRange;
use crate::error::{ChartError, ChartResult};

/// Rounds of widening attempted by [`LinearScale::nice`].
const NICE_MAX_ITERATIONS: usize = 10;

/// Continuous linear mapping between a numeric domain and a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range: PixelRange,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, range: PixelRange) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> PixelRange {
        self.range
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range.start + normalized * self.range.span())
    }

    /// Inverse of [`Self::domain_to_pixel`]. A zero-width range maps every
    /// pixel to the domain start.
    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range.span();
        if range_span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range.start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Extends the domain outward to round values so that roughly
    /// `tick_count` ticks land on its bounds.
    #[must_use]
    pub fn nice(self, tick_count: usize) -> Self {
        let (mut start, mut stop) = (self.domain_start, self.domain_end);
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut previous = None;
        for _ in 0..NICE_MAX_ITERATIONS {
            let Some(step) = tick_increment(start, stop, tick_count) else {
                break;
            };
            if previous == Some(step) {
                break;
            }
            match step {
                TickIncrement::Multiple(step) => {
                    start = (start / step).floor() * step;
                    stop = (stop / step).ceil() * step;
                }
                TickIncrement::Fraction(inverse) => {
                    start = (start * inverse).floor() / inverse;
                    stop = (stop * inverse).ceil() / inverse;
                }
            }
            previous = Some(step);
        }

        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        Self {
            domain_start: start,
            domain_end: stop,
            range: self.range,
        }
    }

    /// Round tick values inside the domain, ascending.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        let start = self.domain_start.min(self.domain_end);
        let stop = self.domain_start.max(self.domain_end);
        let Some(step) = tick_increment(start, stop, tick_count) else {
            return Vec::new();
        };

        match step {
            TickIncrement::Multiple(step) => {
                let first = (start / step).ceil() as i64;
                let last = (stop / step).floor() as i64;
                (first..=last).map(|i| i as f64 * step).collect()
            }
            TickIncrement::Fraction(inverse) => {
                let first = (start * inverse).ceil() as i64;
                let last = (stop * inverse).floor() as i64;
                (first..=last).map(|i| i as f64 / inverse).collect()
            }
        }
    }
}

/// Tick spacing on the 1/2/5 ladder.
///
/// Sub-unit steps are kept as their integral inverse so tick values stay exact
/// (`0.1` is represented as `Fraction(10.0)`).
#[derive(Debug, Clone, Copy, PartialEq)]
enum TickIncrement {
    Multiple(f64),
    Fraction(f64),
}

fn tick_increment(start: f64, stop: f64, count: usize) -> Option<TickIncrement> {
    if count == 0 || !start.is_finite() || !stop.is_finite() || stop <= start {
        return None;
    }

    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        Some(TickIncrement::Multiple(factor * 10f64.powf(power)))
    } else {
        Some(TickIncrement::Fraction(10f64.powf(-power) / factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> PixelRange {
        PixelRange::new(0.0, 100.0)
    }

    #[test]
    fn nice_rounds_domain_outward() {
        let scale = LinearScale::new(-10.0, 20.0, range()).expect("scale").nice(10);
        assert_eq!(scale.domain(), (-10.0, 20.0));

        let scale = LinearScale::new(-7.3, 18.2, range()).expect("scale").nice(10);
        assert_eq!(scale.domain(), (-8.0, 20.0));

        let scale = LinearScale::new(0.12, 0.87, range()).expect("scale").nice(10);
        assert_eq!(scale.domain(), (0.1, 0.9));
    }

    #[test]
    fn ticks_follow_one_two_five_ladder() {
        let scale = LinearScale::new(-10.0, 20.0, range()).expect("scale");
        assert_eq!(
            scale.ticks(5),
            vec![-10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0]
        );
        assert_eq!(scale.ticks(10).len(), 16);

        let scale = LinearScale::new(0.0, 1.0, range()).expect("scale");
        assert_eq!(scale.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn inverted_range_round_trips() {
        let scale = LinearScale::new(0.0, 10.0, PixelRange::new(470.0, 30.0)).expect("scale");
        let px = scale.domain_to_pixel(2.5).expect("px");
        assert!((px - 360.0).abs() <= 1e-9);
        let value = scale.pixel_to_domain(px).expect("value");
        assert!((value - 2.5).abs() <= 1e-9);
    }
}
