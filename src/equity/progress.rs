use crate::PROGRESS_LOG_INTERVAL;
use std::time::Duration;
use std::time::Instant;

/// Periodic progress logging for a long-running batch.
///
/// Logs at most once per interval, plus once on the final tick.
pub struct Progress {
    total: usize,
    ticks: usize,
    every: Duration,
    begin: Instant,
    delta: Instant,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        let now = Instant::now();
        Self {
            total,
            ticks: 0,
            every: PROGRESS_LOG_INTERVAL,
            begin: now,
            delta: now,
        }
    }
    pub fn ticks(&self) -> usize {
        self.ticks
    }
    pub fn tick(&mut self) {
        self.ticks += 1;
        let now = Instant::now();
        if now.duration_since(self.delta) >= self.every || self.ticks == self.total {
            let total_t = now.duration_since(self.begin);
            self.delta = now;
            log::info!(
                "progress: {:8.0?} {:>10} {:6.2}%   mean {:6.2}/s",
                total_t,
                self.ticks,
                self.ticks as f32 / self.total.max(1) as f32 * 100f32,
                self.ticks as f32 / total_t.as_secs_f32().max(f32::EPSILON),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ticks() {
        let mut progress = Progress::new(3);
        (0..3).for_each(|_| progress.tick());
        assert!(progress.ticks() == 3);
    }
}
