//! Count-up animation for the about section's statistics.

pub const COUNTER_TICK_MS: u32 = 30;
pub const COUNTER_STEPS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Running { ticks: u32 },
    Done,
}

/// Moves from 0 to `target` in `COUNTER_STEPS` ticks once started. The value
/// after tick `k` is `floor(target * k / COUNTER_STEPS)`; the tick that would
/// reach the target snaps to it and ends the run. `Done` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    target: u32,
    phase: CounterPhase,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            phase: CounterPhase::Idle,
        }
    }

    pub fn is_running(self) -> bool {
        matches!(self.phase, CounterPhase::Running { .. })
    }

    pub fn value(self) -> u32 {
        match self.phase {
            CounterPhase::Idle => 0,
            CounterPhase::Running { ticks } => self.value_at(ticks),
            CounterPhase::Done => self.target,
        }
    }

    /// Only an idle counter starts; a second visibility signal is ignored.
    pub fn start(self) -> Self {
        match self.phase {
            CounterPhase::Idle if self.target == 0 => Self {
                phase: CounterPhase::Done,
                ..self
            },
            CounterPhase::Idle => Self {
                phase: CounterPhase::Running { ticks: 0 },
                ..self
            },
            _ => self,
        }
    }

    pub fn tick(self) -> Self {
        let CounterPhase::Running { ticks } = self.phase else {
            return self;
        };

        let next = ticks + 1;
        let phase = if next >= COUNTER_STEPS || self.value_at(next) >= self.target {
            CounterPhase::Done
        } else {
            CounterPhase::Running { ticks: next }
        };

        Self { phase, ..self }
    }

    fn value_at(self, ticks: u32) -> u32 {
        let scaled = u64::from(self.target) * u64::from(ticks) / u64::from(COUNTER_STEPS);
        scaled.min(u64::from(self.target)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(target: u32) -> Vec<u32> {
        let mut counter = Counter::new(target).start();
        let mut values = vec![counter.value()];

        for _ in 0..(COUNTER_STEPS * 2) {
            counter = counter.tick();
            values.push(counter.value());
        }

        values
    }

    #[test]
    fn idle_counter_ignores_ticks() {
        let counter = Counter::new(98);
        assert_eq!(counter.tick().tick(), counter);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn converges_exactly_without_overshoot() {
        for target in [0, 1, 2, 15, 49, 50, 98, 100, 500, 12_345] {
            let values = run_to_completion(target);

            assert!(values.windows(2).all(|pair| pair[0] <= pair[1]), "target {target}");
            assert!(values.iter().all(|value| *value <= target), "target {target}");
            assert_eq!(*values.last().unwrap_or(&0), target);
        }
    }

    #[test]
    fn multiples_of_fifty_step_by_a_fiftieth() {
        let values = run_to_completion(100);
        let first_done = values.iter().position(|value| *value == 100).unwrap_or(0);

        assert_eq!(first_done, COUNTER_STEPS as usize);
        for pair in values[..=first_done].windows(2) {
            assert_eq!(pair[1] - pair[0], 2);
        }
    }

    #[test]
    fn reaches_done_and_stays_there() {
        let mut counter = Counter::new(15).start();
        let mut ticks = 0;

        while counter.is_running() {
            counter = counter.tick();
            ticks += 1;
        }

        assert_eq!(counter.phase, CounterPhase::Done);
        assert_eq!(ticks, COUNTER_STEPS);
        assert_eq!(counter.tick().value(), 15);
    }

    #[test]
    fn restart_does_not_reset_progress() {
        let counter = Counter::new(50).start().tick().tick().tick();
        assert_eq!(counter.value(), 3);

        assert_eq!(counter.start(), counter);

        let finished = (0..COUNTER_STEPS).fold(counter, |c, _| c.tick());
        assert_eq!(finished.start().value(), 50);
    }

    #[test]
    fn zero_target_finishes_on_start() {
        let counter = Counter::new(0).start();
        assert_eq!(counter.phase, CounterPhase::Done);
        assert_eq!(counter.value(), 0);
    }
}
