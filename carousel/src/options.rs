use alloc::sync::Arc;

use crate::ScrollBehavior;
use crate::carousel::Carousel;

/// A callback fired once per committed `active_index` change.
///
/// The second argument is the previous active index.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel, Option<usize>) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Number of items in the strip. Fixed for the lifetime of the view.
    pub count: usize,

    /// Initial active index (clamped to `count - 1`).
    pub initial_index: usize,

    /// Behavior attached to issued [`crate::ScrollCommand`]s.
    pub behavior: ScrollBehavior,

    /// Debounce after the last scroll event before `Settling` falls back to `Idle`.
    ///
    /// Used when the UI layer has no native scroll-end event. See `Carousel::update`.
    pub settle_delay_ms: u64,

    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            initial_index: 0,
            behavior: ScrollBehavior::Smooth,
            settle_delay_ms: 150,
            on_change: None,
        }
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel, Option<usize>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("initial_index", &self.initial_index)
            .field("behavior", &self.behavior)
            .field("settle_delay_ms", &self.settle_delay_ms)
            .finish_non_exhaustive()
    }
}
