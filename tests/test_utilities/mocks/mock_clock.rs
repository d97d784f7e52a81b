use shelfwise::prelude::*;

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_epoch_millis(&self) -> i64 {
        self.0
    }
}
