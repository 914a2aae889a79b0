use std::time::Duration;

use crate::{
    config::AnimationConfig,
    pulse::{Pulse, PulseState},
    timer::Interval,
    wave::{Point, WaveSampler},
};

/// What the renderer needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub elapsed: Duration,
    pub position: f64,
    pub amplitude: f64,
    pub pulse: PulseState,
    pub marker_radius: f64,
}

/// Moves a point along the wave on a fixed tick and pulses the target marker
/// when the point reaches it.
///
/// The clock owns both of its timers: the repeating tick and the pulse reset.
/// It does not keep time itself; a driver calls [`AnimationClock::advance`]
/// with the elapsed time, or a test calls [`AnimationClock::tick`] directly.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    config: AnimationConfig,
    sampler: WaveSampler,
    target: Point,
    position: f64,
    amplitude: f64,
    pulse: Pulse,
    now: Duration,
    interval: Option<Interval>,
}

impl AnimationClock {
    pub fn new(config: AnimationConfig) -> Self {
        let sampler = WaveSampler::new(&config);
        Self {
            config,
            sampler,
            target: sampler.target(),
            position: 0.0,
            amplitude: 0.0,
            pulse: Pulse::new(&config),
            now: Duration::ZERO,
            interval: Some(Interval::new(Duration::ZERO, config.timing.tick_period())),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn pulse_state(&self) -> PulseState {
        self.pulse.state()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// `false` once the clock has been torn down.
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Advances the position by one step, wrapping to 0 once it would pass
    /// the end of the domain, and re-evaluates the pulse.
    pub fn tick(&mut self) {
        let next = self.position + self.config.timing.step;
        if next > self.sampler.domain_end() {
            tracing::debug!(now = ?self.now, "position wrapped");
            self.position = 0.0;
        } else {
            self.position = next;
        }
        self.amplitude = self.sampler.amplitude(self.position);
        tracing::trace!(position = self.position, amplitude = self.amplitude, "tick");

        self.evaluate_pulse();
    }

    /// Pixel distance between the moving point and the target marker.
    pub fn distance_to_target(&self) -> f64 {
        self.sampler
            .point_with(self.position, self.amplitude)
            .distance(&self.target)
    }

    /// Triggers the pulse if the point touches the target and the marker is
    /// not already enlarged. Returns `true` if it triggered.
    pub fn evaluate_pulse(&mut self) -> bool {
        let distance = self.distance_to_target();
        self.pulse.observe(distance, self.now)
    }

    /// The earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        let tick = self.interval.map(|interval| interval.deadline());
        match (tick, self.pulse.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Moves the clock forward by `elapsed`, firing every timer that falls
    /// due on the way in deadline order. A pulse reset fires before a tick
    /// due at the same instant. Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.now + elapsed;
        let mut ticks = 0;

        while let Some(deadline) = self.next_deadline().filter(|deadline| *deadline <= until) {
            self.now = deadline;
            if self.pulse.expire(deadline) {
                self.evaluate_pulse();
            } else if let Some(interval) = &mut self.interval {
                if interval.poll(deadline) {
                    self.tick();
                    ticks += 1;
                }
            }
        }

        self.now = until;
        ticks
    }

    /// Cancels both timers. The clock keeps its last state but nothing
    /// scheduled will run anymore.
    pub fn teardown(&mut self) {
        if self.interval.take().is_some() {
            tracing::debug!(now = ?self.now, "tick interval cancelled");
        }
        self.pulse.cancel();
    }

    pub fn frame(&self) -> Frame {
        let marker = &self.config.marker;
        Frame {
            elapsed: self.now,
            position: self.position,
            amplitude: self.amplitude,
            pulse: self.pulse.state(),
            marker_radius: match self.pulse.state() {
                PulseState::Idle => marker.idle_radius,
                PulseState::Enlarged => marker.enlarged_radius,
            },
        }
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}
