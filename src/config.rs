use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound of the domain; also the domain position of the target marker.
pub const DOMAIN_END: f64 = 720.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Plot area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: Margin {
                top: 20.0,
                right: 20.0,
                bottom: 40.0,
                left: 50.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub tick_period_ms: u64,
    /// Domain units added to the position on every tick.
    pub step: f64,
    pub pulse_duration_ms: u64,
}

impl Timing {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn pulse_duration(&self) -> Duration {
        Duration::from_millis(self.pulse_duration_ms)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_period_ms: 50,
            step: 5.0,
            pulse_duration_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Pixel distance at or below which the moving point touches the target.
    pub trigger_radius: f64,
    pub idle_radius: f64,
    pub enlarged_radius: f64,
    pub point_radius: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            trigger_radius: 15.0,
            idle_radius: 10.0,
            enlarged_radius: 20.0,
            point_radius: 5.0,
        }
    }
}

/// The fixed constants shared by the clock and the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub domain_end: f64,
    pub layout: Layout,
    pub timing: Timing,
    pub marker: MarkerConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            domain_end: DOMAIN_END,
            layout: Layout::default(),
            timing: Timing::default(),
            marker: MarkerConfig::default(),
        }
    }
}
