//! Furnace temperature counter for the process section.

#[cfg(test)]
#[path = "heat_test.rs"]
mod heat_test;

pub const HEAT_MAX: u32 = 1000;
pub const HEAT_STEP: u32 = 20;
pub const HEAT_TICK_MS: u64 = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeatRamp {
    level: u32,
}

impl HeatRamp {
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.level >= HEAT_MAX
    }

    /// Advance one tick, saturating at [`HEAT_MAX`].
    pub fn step(&mut self) -> u32 {
        self.level = (self.level + HEAT_STEP).min(HEAT_MAX);
        self.level
    }

    /// Fill width of the progress bar.
    #[must_use]
    pub fn percent(&self) -> f64 {
        f64::from(self.level) / f64::from(HEAT_MAX) * 100.0
    }
}
