//! Lag and rolling-statistic state fed by each forecast step

use crate::error::Result;
use demand_math::RollingWindow;

/// Capacity of the short (one day) history window
pub const SHORT_WINDOW: usize = 24;

/// Capacity of the long (one week) history window
pub const LONG_WINDOW: usize = 168;

/// Short and long history of the target series.
///
/// Both windows are seeded to capacity with a flat baseline, so the first
/// lag values a forecast sees are that baseline rather than real history.
/// Every prediction is pushed into both windows and becomes history for the
/// following steps.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingState {
    short: RollingWindow,
    long: RollingWindow,
}

impl RollingState {
    /// Create a state with both windows filled with `seed`
    pub fn new(seed: f64) -> Result<Self> {
        Ok(Self {
            short: RollingWindow::filled(SHORT_WINDOW, seed)?,
            long: RollingWindow::filled(LONG_WINDOW, seed)?,
        })
    }

    /// Refill both windows entirely with `seed`
    pub fn initialize(&mut self, seed: f64) {
        self.short.fill(seed);
        self.long.fill(seed);
    }

    /// Append a value to both windows, evicting their oldest entries
    pub fn push(&mut self, value: f64) {
        self.short.push(value);
        self.long.push(value);
    }

    /// Value `k` pushes behind the most recent one (the newest value is lag 1).
    ///
    /// Lags up to [`SHORT_WINDOW`] read the short window and lags up to
    /// [`LONG_WINDOW`] read the long one, so `lag(24)` and `lag(168)` are the
    /// oldest entries of their windows.
    pub fn lag(&self, k: usize) -> Option<f64> {
        match k {
            0 => None,
            k if k <= SHORT_WINDOW => self.short.lag(k),
            k if k <= LONG_WINDOW => self.long.lag(k),
            _ => None,
        }
    }

    /// Mean of the short window
    pub fn mean(&self) -> Result<f64> {
        Ok(self.short.mean()?)
    }

    /// Population standard deviation of the short window
    pub fn stddev(&self) -> Result<f64> {
        Ok(self.short.population_std_dev()?)
    }

    /// The short history window
    pub fn short_window(&self) -> &RollingWindow {
        &self.short
    }

    /// The long history window
    pub fn long_window(&self) -> &RollingWindow {
        &self.long
    }
}
