use std::time::Duration;

use crate::{config::AnimationConfig, timer::OneShot};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PulseState {
    #[default]
    Idle,
    Enlarged,
}

/// Proximity-triggered marker pulse.
///
/// `Idle` becomes `Enlarged` when an observed distance is within the trigger
/// radius, which also schedules the reset. While `Enlarged`, further
/// observations are ignored: there is never more than one reset in flight.
#[derive(Clone, Debug)]
pub struct Pulse {
    state: PulseState,
    trigger_radius: f64,
    duration: Duration,
    reset: Option<OneShot>,
}

impl Pulse {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            state: PulseState::Idle,
            trigger_radius: config.marker.trigger_radius,
            duration: config.timing.pulse_duration(),
            reset: None,
        }
    }

    pub fn state(&self) -> PulseState {
        self.state
    }

    pub fn is_enlarged(&self) -> bool {
        self.state == PulseState::Enlarged
    }

    /// When the pending reset fires, if one is scheduled.
    pub fn deadline(&self) -> Option<Duration> {
        self.reset.map(|reset| reset.deadline())
    }

    /// Feeds a distance observed at `now`. Returns `true` if this triggered
    /// the pulse.
    pub fn observe(&mut self, distance: f64, now: Duration) -> bool {
        if self.state == PulseState::Idle && distance <= self.trigger_radius {
            self.state = PulseState::Enlarged;
            self.reset = Some(OneShot::new(now, self.duration));
            tracing::debug!(distance, ?now, "pulse triggered");
            true
        } else {
            false
        }
    }

    /// Fires the reset if it is due at `now`. Returns `true` if it fired.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.reset {
            Some(reset) if reset.is_due(now) => {
                self.reset = None;
                self.state = PulseState::Idle;
                tracing::debug!(?now, "pulse reset");
                true
            }
            _ => false,
        }
    }

    /// Drops the pending reset without firing it.
    pub fn cancel(&mut self) {
        if let Some(reset) = self.reset.take() {
            tracing::debug!(deadline = ?reset.deadline(), "pulse reset cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn scripted_distances_trigger_once() {
        let mut pulse = Pulse::new(&AnimationConfig::default());
        let distances = [20.0, 10.0, 8.0, 10.0, 3.0];

        let mut states = Vec::new();
        let mut triggers = Vec::new();
        for (i, distance) in distances.into_iter().enumerate() {
            let now = ms(50 * (i as u64 + 1));
            pulse.expire(now);
            triggers.push(pulse.observe(distance, now));
            states.push(pulse.state());
        }

        assert_eq!(triggers, vec![false, true, false, false, false]);
        assert_eq!(
            states,
            vec![
                PulseState::Idle,
                PulseState::Enlarged,
                PulseState::Enlarged,
                PulseState::Enlarged,
                PulseState::Enlarged,
            ]
        );
        // triggered at 100 ms; the later distance-3 sample did not restart it
        assert_eq!(pulse.deadline(), Some(ms(600)));

        assert!(!pulse.expire(ms(599)));
        assert!(pulse.is_enlarged());
        assert!(pulse.expire(ms(600)));
        assert_eq!(pulse.state(), PulseState::Idle);
        assert_eq!(pulse.deadline(), None);
    }

    #[test]
    fn trigger_radius_is_inclusive() {
        let mut pulse = Pulse::new(&AnimationConfig::default());
        assert!(!pulse.observe(15.000001, ms(0)));
        assert!(pulse.observe(15.0, ms(0)));
    }

    #[test]
    fn retriggers_after_reset() {
        let mut pulse = Pulse::new(&AnimationConfig::default());
        assert!(pulse.observe(0.0, ms(0)));
        assert!(pulse.expire(ms(500)));
        assert!(pulse.observe(0.0, ms(500)));
        assert_eq!(pulse.deadline(), Some(ms(1000)));
    }

    #[test]
    fn cancelled_reset_never_fires() {
        let mut pulse = Pulse::new(&AnimationConfig::default());
        pulse.observe(1.0, ms(0));
        pulse.cancel();
        assert_eq!(pulse.deadline(), None);
        assert!(!pulse.expire(ms(10_000)));
    }
}
