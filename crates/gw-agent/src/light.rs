//! The traffic-light agent: a two-state timer.

use std::fmt;

/// Signal shown by a traffic light.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightState {
    Red,
    Green,
}

impl LightState {
    /// The other signal.
    #[inline]
    pub fn flipped(self) -> LightState {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Red,
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LightState::Red => "RED",
            LightState::Green => "GREEN",
        })
    }
}

/// A fixed signal at an intersection, flipping RED ↔ GREEN every
/// `time_to_change` steps.
///
/// Created once at model construction and never destroyed; mutated only by
/// its own [`step`](TrafficLight::step).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficLight {
    pub state: LightState,
    /// Steps since the last flip.  `< time_to_change` between steps.
    pub counter: u32,
    pub time_to_change: u32,
}

impl TrafficLight {
    pub fn new(initial: LightState, time_to_change: u32) -> Self {
        Self {
            state: initial,
            counter: 0,
            time_to_change,
        }
    }

    /// Advance the timer; flip the signal and reset once it reaches the
    /// threshold.
    pub fn step(&mut self) {
        self.counter += 1;
        if self.counter >= self.time_to_change {
            self.state = self.state.flipped();
            self.counter = 0;
        }
    }
}
