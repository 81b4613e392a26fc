//! Fixed-capacity rolling window
//!
//! A ring buffer holding the most recent `capacity` values of a series.
//! Storage is allocated once; pushing into a full window overwrites the
//! oldest slot instead of shifting or reallocating.

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Ring buffer of the most recent `capacity` values, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    buffer: Vec<f64>,
    /// Slot holding the oldest retained value
    head: usize,
    len: usize,
}

impl RollingWindow {
    /// Create an empty window with the specified capacity
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MathError::InvalidInput(
                "Window capacity must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            buffer: vec![0.0; capacity],
            head: 0,
            len: 0,
        })
    }

    /// Create a window already filled to capacity with `value`
    pub fn filled(capacity: usize, value: f64) -> Result<Self> {
        let mut window = Self::new(capacity)?;
        window.fill(value);
        Ok(window)
    }

    /// Overwrite every slot with `value`, leaving the window full
    pub fn fill(&mut self, value: f64) {
        self.buffer.iter_mut().for_each(|slot| *slot = value);
        self.head = 0;
        self.len = self.buffer.len();
    }

    /// Append a value, evicting and returning the oldest one if the window is full
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let capacity = self.capacity();

        if self.len < capacity {
            let tail = (self.head + self.len) % capacity;
            self.buffer[tail] = value;
            self.len += 1;
            None
        } else {
            let evicted = std::mem::replace(&mut self.buffer[self.head], value);
            self.head = (self.head + 1) % capacity;
            Some(evicted)
        }
    }

    /// Maximum number of retained values
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of values currently retained
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the window holds no values
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the window holds `capacity` values
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Value at `index`, counted from the oldest retained value
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        Some(self.buffer[(self.head + index) % self.capacity()])
    }

    /// Most recently pushed value
    pub fn newest(&self) -> Option<f64> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Oldest retained value
    pub fn oldest(&self) -> Option<f64> {
        self.get(0)
    }

    /// Value `k` pushes behind the tail, where the newest value is lag 1.
    ///
    /// A full window of capacity `C` answers lags `1..=C`; lag `C` is the
    /// oldest retained value.
    pub fn lag(&self, k: usize) -> Option<f64> {
        if k == 0 || k > self.len {
            return None;
        }
        self.get(self.len - k)
    }

    /// Iterate over the retained values, oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.buffer[(self.head + i) % self.capacity()])
    }

    /// Copy of the retained values, oldest first
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Arithmetic mean of the retained values
    pub fn mean(&self) -> Result<f64> {
        self.ensure_not_empty("mean")?;
        Ok(self.iter().mean())
    }

    /// Population standard deviation (divisor `n`) of the retained values
    pub fn population_std_dev(&self) -> Result<f64> {
        self.ensure_not_empty("standard deviation")?;
        Ok(self.iter().population_std_dev())
    }

    fn ensure_not_empty(&self, statistic: &str) -> Result<()> {
        if self.is_empty() {
            return Err(MathError::InsufficientData(format!(
                "Cannot compute {} of an empty window",
                statistic
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            RollingWindow::new(0),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_push_until_full() {
        let mut window = RollingWindow::new(3).unwrap();
        assert!(window.is_empty());

        assert_eq!(window.push(1.0), None);
        assert_eq!(window.push(2.0), None);
        assert!(!window.is_full());
        assert_eq!(window.push(3.0), None);
        assert!(window.is_full());

        assert_eq!(window.push(4.0), Some(1.0));
        assert_eq!(window.to_vec(), vec![2.0, 3.0, 4.0]);
        assert_eq!(window.oldest(), Some(2.0));
        assert_eq!(window.newest(), Some(4.0));
    }

    #[rstest]
    #[case(24, 24)]
    #[case(24, 25)]
    #[case(24, 100)]
    #[case(168, 500)]
    fn test_length_never_exceeds_capacity(#[case] capacity: usize, #[case] pushes: usize) {
        let mut window = RollingWindow::filled(capacity, 1.0).unwrap();
        for i in 0..pushes {
            window.push(i as f64);
        }
        assert_eq!(window.len(), capacity);
        assert_eq!(window.newest(), Some((pushes - 1) as f64));
        assert_eq!(window.oldest(), Some((pushes - capacity) as f64));
    }

    #[test]
    fn test_lag_counts_back_from_tail() {
        let mut window = RollingWindow::filled(4, 0.0).unwrap();
        for value in [10.0, 20.0, 30.0, 40.0, 50.0] {
            window.push(value);
        }

        assert_eq!(window.lag(1), Some(50.0));
        assert_eq!(window.lag(2), Some(40.0));
        assert_eq!(window.lag(4), Some(20.0));
        assert_eq!(window.lag(0), None);
        assert_eq!(window.lag(5), None);
    }

    #[test]
    fn test_constant_window_statistics() {
        let window = RollingWindow::filled(24, 1500.0).unwrap();
        assert_eq!(window.mean().unwrap(), 1500.0);
        assert_eq!(window.population_std_dev().unwrap(), 0.0);
    }

    #[test]
    fn test_population_std_dev_uses_n() {
        let mut window = RollingWindow::new(4).unwrap();
        for value in [2.0, 4.0, 4.0, 6.0] {
            window.push(value);
        }

        assert_relative_eq!(window.mean().unwrap(), 4.0);
        // Variance with divisor n is 8 / 4 = 2
        assert_relative_eq!(window.population_std_dev().unwrap(), 2.0_f64.sqrt());
    }

    #[test]
    fn test_empty_statistics_error() {
        let window = RollingWindow::new(3).unwrap();
        assert!(matches!(
            window.mean(),
            Err(MathError::InsufficientData(_))
        ));
        assert!(window.population_std_dev().is_err());
    }

    #[test]
    fn test_fill_resets_wrapped_window() {
        let mut window = RollingWindow::filled(3, 1.0).unwrap();
        window.push(2.0);
        window.push(3.0);
        window.fill(7.0);

        assert_eq!(window.to_vec(), vec![7.0, 7.0, 7.0]);
        window.push(8.0);
        assert_eq!(window.to_vec(), vec![7.0, 7.0, 8.0]);
    }
}
