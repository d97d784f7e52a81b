/// Clock port so expiry checks can be tested with a fixed time
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_epoch_millis(&self) -> i64;
}
