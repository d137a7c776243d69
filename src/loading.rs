use std::time::Duration;

pub const LAYOUT_THRESHOLD: Duration = Duration::from_millis(700);
pub const HOME_THRESHOLD: Duration = Duration::from_millis(600);

/// Decides when the loading dots appear. A page that finishes before the
/// threshold never shows them, so fast navigations do not flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    threshold: Duration,
    generation: u64,
    loading: bool,
    visible: bool,
}

impl LoadingGate {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            generation: 0,
            loading: false,
            visible: false,
        }
    }

    /// A navigation started. Ticks must carry the returned generation.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.visible = false;
        self.generation
    }

    /// Time passed since the `start` that returned `generation`. Ticks from
    /// an earlier navigation are ignored.
    pub fn tick(&mut self, generation: u64, elapsed: Duration) {
        if generation == self.generation && self.loading && elapsed >= self.threshold {
            self.visible = true;
        }
    }

    pub fn ready(&mut self) {
        self.loading = false;
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_before_threshold() {
        assert_eq!(LAYOUT_THRESHOLD, Duration::from_millis(700));
        let mut gate = LoadingGate::new(LAYOUT_THRESHOLD);
        let generation = gate.start();
        gate.tick(generation, Duration::from_millis(699));
        assert!(!gate.is_visible());
        gate.tick(generation, LAYOUT_THRESHOLD);
        assert!(gate.is_visible());
    }

    #[test]
    fn test_ready_hides_and_late_tick_is_ignored() {
        let mut gate = LoadingGate::new(HOME_THRESHOLD);
        let generation = gate.start();
        gate.ready();
        gate.tick(generation, Duration::from_secs(2));
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_restart_hides_again() {
        let mut gate = LoadingGate::new(HOME_THRESHOLD);
        let first = gate.start();
        gate.tick(first, Duration::from_secs(1));
        assert!(gate.is_visible());
        gate.start();
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_stale_tick_ignored() {
        let mut gate = LoadingGate::new(HOME_THRESHOLD);
        let first = gate.start();
        let second = gate.start();
        gate.tick(first, HOME_THRESHOLD);
        assert!(!gate.is_visible());
        gate.tick(second, HOME_THRESHOLD);
        assert!(gate.is_visible());
    }
}
