use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ScanViewError;

/// One-shot stop flag shared between the interrupt handler and the
/// acquisition loop. The handler only ever stores `true`, the loop only
/// ever loads. There is no reset.
#[derive(Clone, Debug, Default)]
pub struct ShutdownLatch {
    flag: Arc<AtomicBool>,
}

impl ShutdownLatch {
    pub fn new() -> ShutdownLatch {
        ShutdownLatch::default()
    }

    /// Safe to call from signal context: a single atomic store, no I/O,
    /// no allocation, no locking. Calling it again has no further effect.
    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Route SIGINT to [`ShutdownLatch::request_stop`].
    /// The handler does nothing else.
    pub fn hook_interrupt(&self) -> Result<(), ScanViewError> {
        let latch = self.clone();
        ctrlc::set_handler(move || latch.request_stop())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_not_stopped() {
        let latch = ShutdownLatch::new();
        assert!(!latch.is_stop_requested());
    }

    #[test]
    fn test_request_stop_is_idempotent() {
        let latch = ShutdownLatch::new();
        latch.request_stop();
        assert!(latch.is_stop_requested());
        latch.request_stop();
        assert!(latch.is_stop_requested());
    }

    #[test]
    fn test_stop_is_visible_across_threads() {
        let latch = ShutdownLatch::new();
        let writer = latch.clone();
        let handle = std::thread::spawn(move || writer.request_stop());
        handle.join().unwrap();
        assert!(latch.is_stop_requested());
    }
}
