use carousel::ScrollBehavior;

/// The layout/measurement side of a horizontally scrolling strip.
///
/// Implemented by the adapter for whatever actually renders the strip (a DOM scroll
/// container, a TUI viewport, a test double). All offsets are in scroll-axis units.
pub trait ScrollSurface {
    /// The current scroll offset, or `None` while the container is not mounted.
    fn scroll_offset(&self) -> Option<u64>;

    /// Collects each item's leading-edge offset into `out`, in item order.
    ///
    /// `out` is cleared by the caller. Push `None` for items that are not laid out yet.
    fn item_offsets(&self, out: &mut Vec<Option<u64>>);

    /// Scrolls the container to `offset`.
    fn scroll_to(&mut self, offset: u64, behavior: ScrollBehavior);
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn scroll_offset(&self) -> Option<u64> {
        (**self).scroll_offset()
    }

    fn item_offsets(&self, out: &mut Vec<Option<u64>>) {
        (**self).item_offsets(out)
    }

    fn scroll_to(&mut self, offset: u64, behavior: ScrollBehavior) {
        (**self).scroll_to(offset, behavior)
    }
}
