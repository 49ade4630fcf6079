//! Where raw die values come from, and who gets to watch them land.

use rand::Rng;
use rand::rngs::StdRng;

use super::DieConfig;

/// A source of raw d6 values.
///
/// Implementations should return values in `1..=6`. The resolver clamps
/// whatever it receives, so a misbehaving source cannot break scoring.
pub trait DieSource {
    /// Roll one six-sided die.
    fn roll_d6(&mut self) -> u8;
}

impl DieSource for StdRng {
    fn roll_d6(&mut self) -> u8 {
        self.random_range(1..=6)
    }
}

/// Always rolls the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource(
    /// The value every roll returns.
    pub u8,
);

impl DieSource for FixedSource {
    fn roll_d6(&mut self) -> u8 {
        self.0
    }
}

/// Rolls a fixed sequence of values, starting over once it runs out.
///
/// An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedSource {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }
}

impl DieSource for ScriptedSource {
    fn roll_d6(&mut self) -> u8 {
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Watches dice as they are rolled, e.g. to animate them.
///
/// Observers are notified once per die in roll order and cannot influence
/// the result.
pub trait RollObserver {
    /// Called after a die has been rolled, with the clamped value.
    fn on_roll(&mut self, config: &DieConfig, value: u8);
}
