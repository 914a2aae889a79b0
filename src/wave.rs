use std::f64::consts::PI;

use crate::{config::AnimationConfig, scale::LinearScale};

/// Full sine cycles drawn across the domain.
const CYCLES: f64 = 2.0;

/// A pixel-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Stateless mapping from a domain position to the wave's amplitude and to
/// plot pixels.
#[derive(Clone, Copy, Debug)]
pub struct WaveSampler {
    domain_end: f64,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl WaveSampler {
    pub fn new(config: &AnimationConfig) -> Self {
        let layout = &config.layout;
        Self {
            domain_end: config.domain_end,
            x_scale: LinearScale::new(
                [0.0, config.domain_end],
                [layout.margin.left, layout.width - layout.margin.right],
            ),
            y_scale: LinearScale::new(
                [-1.0, 1.0],
                [layout.height - layout.margin.bottom, layout.margin.top],
            ),
        }
    }

    pub fn domain_end(&self) -> f64 {
        self.domain_end
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn amplitude(&self, position: f64) -> f64 {
        (position / self.domain_end * CYCLES * 2.0 * PI).sin()
    }

    pub fn pixel_x(&self, position: f64) -> f64 {
        self.x_scale.apply(position)
    }

    pub fn pixel_y(&self, amplitude: f64) -> f64 {
        self.y_scale.apply(amplitude)
    }

    /// Pixel location of the curve at `position`.
    pub fn point(&self, position: f64) -> Point {
        self.point_with(position, self.amplitude(position))
    }

    pub fn point_with(&self, position: f64, amplitude: f64) -> Point {
        Point {
            x: self.pixel_x(position),
            y: self.pixel_y(amplitude),
        }
    }

    /// The fixed marker at the end of the curve.
    pub fn target(&self) -> Point {
        self.point(self.domain_end)
    }

    /// Curve points at every integer position in `[0, domain_end)`.
    pub fn curve(&self) -> Vec<Point> {
        (0..self.domain_end.ceil() as u32)
            .map(|position| self.point(position as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    use super::*;

    fn sampler() -> WaveSampler {
        WaveSampler::new(&AnimationConfig::default())
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 1.0)]
    #[case(180.0, 0.0)]
    #[case(270.0, -1.0)]
    #[case(450.0, 1.0)]
    #[case(720.0, 0.0)]
    fn amplitude_runs_two_cycles(#[case] position: f64, #[case] expected: f64) {
        assert!((sampler().amplitude(position) - expected).abs() < 1e-9);
    }

    #[test]
    fn amplitude_stays_in_unit_range() {
        let sampler = sampler();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let position = rng.gen_range(0.0..720.0);
            let amplitude = sampler.amplitude(position);
            assert!((-1.0..=1.0).contains(&amplitude), "{position} -> {amplitude}");
            assert_eq!(amplitude, (position / 720.0 * 4.0 * PI).sin());
        }
    }

    #[test]
    fn pixel_mapping_is_monotonic() {
        let sampler = sampler();
        for i in 0..720 {
            let position = i as f64;
            assert!(sampler.pixel_x(position) < sampler.pixel_x(position + 1.0));
        }
        for i in 0..100 {
            let value = -1.0 + i as f64 / 50.0;
            assert!(sampler.pixel_y(value) > sampler.pixel_y(value + 0.02));
        }
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let sampler = sampler();
        assert!(sampler.pixel_y(1.0) < sampler.pixel_y(-1.0));
        assert_eq!(sampler.pixel_y(1.0), 20.0);
        assert_eq!(sampler.pixel_y(-1.0), 360.0);
    }

    #[test]
    fn target_sits_at_curve_end() {
        let target = sampler().target();
        assert!((target.x - 780.0).abs() < 1e-9);
        assert!((target.y - 190.0).abs() < 1e-9);
    }

    #[test]
    fn curve_samples_every_integer_position() {
        let curve = sampler().curve();
        assert_eq!(curve.len(), 720);
        assert_eq!(curve[0], Point { x: 50.0, y: 190.0 });
        assert!((curve[90].y - 20.0).abs() < 1e-9);
    }
}
