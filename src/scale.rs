/// Maps a continuous domain linearly onto a pixel range.
///
/// The range may be reversed (`range[0] > range[1]`), which is how the
/// vertical axis puts larger values nearer the top of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Round tick values inside the domain, roughly `count` of them.
    ///
    /// The step is the raw `(stop - start) / count` snapped to 1, 2, 5 or 10
    /// times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [start, stop] = self.domain;
        if count == 0 || stop <= start {
            return Vec::new();
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

        // Sub-unit steps divide by an integer increment to keep ticks exact.
        if power < 0.0 {
            let inc = 10f64.powf(-power) / factor;
            let (first, last) = integer_bounds(start * inc, stop * inc, |i| i / inc, start, stop);
            (first..=last).map(|i| i as f64 / inc).collect()
        } else {
            let inc = 10f64.powf(power) * factor;
            let (first, last) = integer_bounds(start / inc, stop / inc, |i| i * inc, start, stop);
            (first..=last).map(|i| i as f64 * inc).collect()
        }
    }
}

fn integer_bounds(
    scaled_start: f64,
    scaled_stop: f64,
    value_of: impl Fn(f64) -> f64,
    start: f64,
    stop: f64,
) -> (i64, i64) {
    let mut first = scaled_start.round();
    let mut last = scaled_stop.round();
    if value_of(first) < start {
        first += 1.0;
    }
    if value_of(last) > stop {
        last -= 1.0;
    }
    (first as i64, last as i64)
}
