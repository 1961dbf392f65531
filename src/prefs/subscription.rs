use tokio::sync::watch;

/// Live view of a single boolean preference.
///
/// The first call to [`Subscription::next`] yields the value current at
/// subscription time; later calls wait for the next committed change.
/// Consecutive identical values are collapsed, and a subscriber that falls
/// behind skips straight to the newest value, so observed values never go
/// backwards.
#[derive(Debug)]
pub struct Subscription {
    rx: watch::Receiver<Option<bool>>,
    default: bool,
    last: Option<bool>,
}

impl Subscription {
    pub(crate) fn new(rx: watch::Receiver<Option<bool>>, default: bool) -> Self {
        Self {
            rx,
            default,
            last: None,
        }
    }

    /// Latest committed value, without waiting.
    pub fn current(&self) -> bool {
        self.rx.borrow().unwrap_or(self.default)
    }

    /// Wait for the next value in the stream.
    ///
    /// Returns `None` only once the owning store has been dropped.
    /// Cancel safe, so it can sit in a `tokio::select!` branch.
    pub async fn next(&mut self) -> Option<bool> {
        if self.last.is_none() {
            let value = self.rx.borrow_and_update().unwrap_or(self.default);
            self.last = Some(value);
            return Some(value);
        }
        loop {
            self.rx.changed().await.ok()?;
            let value = self.rx.borrow_and_update().unwrap_or(self.default);
            // An unwritten key becoming its default is not a change here.
            if self.last != Some(value) {
                self.last = Some(value);
                return Some(value);
            }
        }
    }
}
