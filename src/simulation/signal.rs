use serde::{Deserialize, Serialize};
use crate::config::SignalTiming;
use super::{Approach, SignalGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    Green,
    Yellow,
    Red,
}

impl LightState {
    pub fn is_red(self) -> bool {
        self == LightState::Red
    }
}

/// The four consecutive parts of one signal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NorthSouthGreen,
    NorthSouthYellow,
    EastWestGreen,
    EastWestYellow,
}

impl Phase {
    pub fn signal_state(self) -> SignalState {
        use LightState::*;
        let (north_south, east_west) = match self {
            Phase::NorthSouthGreen => (Green, Red),
            Phase::NorthSouthYellow => (Yellow, Red),
            Phase::EastWestGreen => (Red, Green),
            Phase::EastWestYellow => (Red, Yellow),
        };
        SignalState { north_south, east_west }
    }
}

/// Light shown to each signal group at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalState {
    pub north_south: LightState,
    pub east_west: LightState,
}

impl SignalState {
    pub fn light_for(&self, group: SignalGroup) -> LightState {
        match group {
            SignalGroup::NorthSouth => self.north_south,
            SignalGroup::EastWest => self.east_west,
        }
    }

    pub fn light_for_approach(&self, approach: Approach) -> LightState {
        self.light_for(approach.signal_group())
    }
}

/// Fixed-time controller. Holds no state beyond its timing, so the lights at
/// any instant are a pure function of elapsed time.
///
/// There is no all-red clearance interval: yellow on one axis hands straight
/// over to green on the other.
#[derive(Debug, Clone, Copy)]
pub struct SignalController {
    timing: SignalTiming,
}

impl SignalController {
    pub fn new(timing: SignalTiming) -> Self {
        Self { timing }
    }

    pub fn cycle_length(&self) -> f32 {
        self.timing.cycle_length()
    }

    /// Position inside the current cycle, always in `[0, cycle_length)`.
    pub fn time_in_cycle(&self, elapsed_seconds: f32) -> f32 {
        let t = elapsed_seconds.rem_euclid(self.cycle_length());
        // rem_euclid can round up to the divisor itself for tiny negative inputs
        if t >= self.cycle_length() {
            0.0
        } else {
            t
        }
    }

    pub fn phase_at(&self, elapsed_seconds: f32) -> Phase {
        let t = self.time_in_cycle(elapsed_seconds);
        let green = self.timing.green_time;
        let yellow = self.timing.yellow_time;

        if t < green {
            Phase::NorthSouthGreen
        } else if t < green + yellow {
            Phase::NorthSouthYellow
        } else if t < green + yellow + green {
            Phase::EastWestGreen
        } else {
            Phase::EastWestYellow
        }
    }

    pub fn signal_state(&self, elapsed_seconds: f32) -> SignalState {
        self.phase_at(elapsed_seconds).signal_state()
    }

    /// Seconds left until the lights next change.
    pub fn time_to_next_change(&self, elapsed_seconds: f32) -> f32 {
        let t = self.time_in_cycle(elapsed_seconds);
        let green = self.timing.green_time;
        let yellow = self.timing.yellow_time;

        let boundaries = [green, green + yellow, 2.0 * green + yellow, self.cycle_length()];
        boundaries
            .iter()
            .find(|&&boundary| t < boundary)
            .map(|boundary| boundary - t)
            .unwrap_or(0.0)
    }
}
