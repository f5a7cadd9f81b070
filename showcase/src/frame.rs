/// Coalesces high-frequency scroll events into at most one sync per animation frame.
///
/// Scroll events call [`Self::request`]; a request made while another is still pending
/// replaces it (the previous one counts as cancelled). The frame callback calls
/// [`Self::take`], which yields `true` at most once per pending request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCoalescer {
    pending: bool,
    requested: u64,
    cancelled: u64,
    ran: u64,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a frame. Returns `true` if a pending request was replaced.
    pub fn request(&mut self) -> bool {
        self.requested = self.requested.saturating_add(1);
        let replaced = self.pending;
        if replaced {
            self.cancelled = self.cancelled.saturating_add(1);
        }
        self.pending = true;
        replaced
    }

    /// Consumes the pending request, if any.
    pub fn take(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.ran = self.ran.saturating_add(1);
        true
    }

    /// Drops the pending request without running it (e.g. on unmount).
    pub fn cancel(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancelled = self.cancelled.saturating_add(1);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }

    pub fn ran(&self) -> u64 {
        self.ran
    }
}
