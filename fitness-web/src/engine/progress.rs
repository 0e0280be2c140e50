//! Progress mapping: raw joint metric -> percentage and bar position
//!
//! `map_linear` never clamps. A `Calibration` decides per exercise whether
//! its outputs are held inside their ranges.

/// Linear interpolation of `value` from `domain` onto `range`, unclamped
///
/// A zero-width domain maps everything to the start of the range.
pub fn map_linear(value: f32, domain: (f32, f32), range: (f32, f32)) -> f32 {
    let (lo, hi) = domain;
    let (rlo, rhi) = range;
    let width = hi - lo;
    if width.abs() < f32::EPSILON {
        return rlo;
    }
    let t = (value - lo) / width;
    rlo + t * (rhi - rlo)
}

fn clamp_to(value: f32, range: (f32, f32)) -> f32 {
    value.clamp(range.0.min(range.1), range.0.max(range.1))
}

/// Percentage and bar value, computed together from one metric
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Progress {
    pub percent: f32,
    pub bar: f32,
}

/// Per-exercise calibration of the progress readout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    /// Metric values that map to the two ends of the ranges
    pub domain: (f32, f32),
    /// Usually (0, 100) or (100, 0) depending on polarity
    pub percent: (f32, f32),
    /// Pixel positions for the visual bar
    pub bar: (f32, f32),
    /// Hold outputs inside their ranges when the metric leaves the domain
    pub clamp: bool,
}

impl Calibration {
    pub fn progress(&self, metric: f32) -> Progress {
        let percent = map_linear(metric, self.domain, self.percent);
        let bar = map_linear(metric, self.domain, self.bar);
        if self.clamp {
            Progress {
                percent: clamp_to(percent, self.percent),
                bar: clamp_to(bar, self.bar),
            }
        } else {
            Progress { percent, bar }
        }
    }
}
