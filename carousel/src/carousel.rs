use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{CarouselOptions, Pagination, Phase, ScrollBehavior, ScrollCommand, Stride};

/// A headless carousel position controller.
///
/// Keeps a horizontally scrolling strip of items in sync with a discrete active index:
/// - index → offset: [`Self::scroll_to_index`], [`Self::next`], [`Self::prev`] return a
///   [`ScrollCommand`] for your UI layer to apply.
/// - offset → index: [`Self::on_scroll`] resolves the item whose measured leading edge is
///   nearest to the reported scroll offset.
///
/// This type does not hold any UI objects. Your adapter reports item offsets (after layout
/// and on every resize) and scroll offsets (ideally coalesced to one per animation frame).
/// For a surface-bound driver, see the `showcase` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    offsets: Vec<Option<u64>>, // leading edges, `None` until measured
    active_index: Option<usize>,
    scroll_offset: Option<u64>,
    phase: Phase,
    settle_target: Option<u64>,
    last_scroll_event_ms: Option<u64>,
    commits: u64,
}

impl Carousel {
    pub fn new(options: CarouselOptions) -> Self {
        let count = options.count;
        let active_index = (count > 0).then(|| options.initial_index.min(count - 1));
        cdebug!(count, ?active_index, "Carousel::new");
        Self {
            offsets: alloc::vec![None; count],
            active_index,
            scroll_offset: None,
            phase: Phase::Idle,
            settle_target: None,
            last_scroll_event_ms: None,
            commits: 0,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn is_empty(&self) -> bool {
        self.options.count == 0
    }

    /// The active item, or `None` when the carousel has no items.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_settling(&self) -> bool {
        self.phase == Phase::Settling
    }

    /// The target offset of the in-flight programmatic scroll, if any.
    pub fn settle_target(&self) -> Option<u64> {
        self.settle_target
    }

    /// The last scroll offset that resolved to an item.
    pub fn scroll_offset(&self) -> Option<u64> {
        self.scroll_offset
    }

    /// Number of committed `active_index` changes since construction.
    ///
    /// Redundant scroll events that resolve to the current item do not count.
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    pub fn set_behavior(&mut self, behavior: ScrollBehavior) {
        self.options.behavior = behavior;
    }

    pub fn set_settle_delay_ms(&mut self, delay_ms: u64) {
        self.options.settle_delay_ms = delay_ms;
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel, Option<usize>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn measure(&mut self, index: usize, offset: u64) {
        if index >= self.count() {
            cwarn!(index, count = self.count(), "measure: out-of-bounds index");
            return;
        }
        ctrace!(index, offset, "measure");
        self.offsets[index] = Some(offset);
    }

    pub fn measure_many(&mut self, measurements: impl IntoIterator<Item = (usize, u64)>) {
        for (index, offset) in measurements {
            self.measure(index, offset);
        }
    }

    /// Replaces every item offset, e.g. after a resize or breakpoint change.
    ///
    /// Entry `i` is the leading edge of item `i`. Missing trailing entries become
    /// unmeasured; surplus entries are ignored. The active index is left as is until the
    /// next [`Self::on_scroll`].
    pub fn set_item_offsets(&mut self, offsets: impl IntoIterator<Item = Option<u64>>) {
        let count = self.count();
        self.offsets.clear();
        self.offsets.extend(offsets.into_iter().take(count));
        self.offsets.resize(count, None);
        debug_assert_eq!(self.offsets.len(), count, "one offset slot per item");
        cdebug!(count, measured = self.measured_count(), "set_item_offsets");
    }

    /// Fills every item offset from a uniform stride.
    ///
    /// This is the fixed-width special case of measurement; it is wrong as soon as item
    /// widths differ (e.g. responsive first/last-item margins).
    pub fn apply_stride(&mut self, stride: Stride) {
        cdebug!(item_size = stride.item_size, gap = stride.gap, "apply_stride");
        for (i, slot) in self.offsets.iter_mut().enumerate() {
            *slot = Some(stride.offset_of(i));
        }
    }

    pub fn clear_measurements(&mut self) {
        self.offsets.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.item_offset(index).is_some()
    }

    pub fn item_offset(&self, index: usize) -> Option<u64> {
        self.offsets.get(index).copied().flatten()
    }

    pub fn measured_count(&self) -> usize {
        self.offsets.iter().filter(|o| o.is_some()).count()
    }

    /// Resolves the measured item nearest to `offset`.
    ///
    /// Unmeasured items are skipped. Equidistant items resolve to the lower index.
    /// Returns `None` when no item is measured.
    pub fn nearest_index(&self, offset: u64) -> Option<usize> {
        // Linear scan: offsets are not guaranteed sorted while partially measured.
        let mut best: Option<(usize, u64)> = None;
        for (i, start) in self.offsets.iter().enumerate() {
            let Some(start) = *start else {
                continue;
            };
            let distance = start.abs_diff(offset);
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((i, distance)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Requests a scroll to `index` (clamped to `[0, count - 1]`).
    ///
    /// Returns `None` (and changes nothing) when:
    /// - there are fewer than two items,
    /// - the target item is not measured,
    /// - the carousel is idle and the last resolved scroll offset already sits on the target.
    ///
    /// Otherwise enters [`Phase::Settling`] and returns the command for the UI layer. The
    /// active index is *not* updated here; it follows the scroll events the command causes.
    /// A new call supersedes any pending target, including one back to the current offset.
    pub fn scroll_to_index(&mut self, index: usize) -> Option<ScrollCommand> {
        let count = self.count();
        if count < 2 {
            ctrace!(index, count, "scroll_to_index: inert");
            return None;
        }
        let index = index.min(count - 1);
        let Some(offset) = self.item_offset(index) else {
            cdebug!(index, "scroll_to_index: target not measured");
            return None;
        };
        if self.phase == Phase::Idle && self.scroll_offset == Some(offset) {
            ctrace!(index, offset, "scroll_to_index: already at target");
            return None;
        }

        ctrace!(index, offset, "scroll_to_index");
        self.phase = Phase::Settling;
        self.settle_target = Some(offset);
        self.last_scroll_event_ms = None;
        Some(ScrollCommand {
            index,
            offset,
            behavior: self.options.behavior,
        })
    }

    /// Scrolls to `active_index + 1`. No wraparound.
    pub fn next(&mut self) -> Option<ScrollCommand> {
        let active = self.active_index?;
        if !self.can_next() {
            return None;
        }
        self.scroll_to_index(active + 1)
    }

    /// Scrolls to `active_index - 1`. No wraparound.
    pub fn prev(&mut self) -> Option<ScrollCommand> {
        let active = self.active_index?;
        if !self.can_prev() {
            return None;
        }
        self.scroll_to_index(active - 1)
    }

    pub fn can_prev(&self) -> bool {
        self.active_index.is_some_and(|i| i > 0)
    }

    pub fn can_next(&self) -> bool {
        self.active_index.is_some_and(|i| i + 1 < self.count())
    }

    /// Applies a scroll offset reported by the UI layer.
    ///
    /// Returns `true` when the active index changed. Before any item is measured this is
    /// a no-op. Reaching the settle target exactly ends [`Phase::Settling`].
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) -> bool {
        let Some(nearest) = self.nearest_index(offset) else {
            ctrace!(offset, "on_scroll: no measured item");
            return false;
        };

        self.scroll_offset = Some(offset);
        self.last_scroll_event_ms = Some(now_ms);
        if self.settle_target == Some(offset) {
            self.finish_settling();
        }
        self.commit(nearest)
    }

    /// Debounced settle detection for UI layers without a scroll-end event.
    ///
    /// Call this each frame/timer tick. `Settling` becomes `Idle` once no scroll event was
    /// reported for `settle_delay_ms`.
    pub fn update(&mut self, now_ms: u64) {
        if self.phase != Phase::Settling {
            return;
        }
        let last = *self.last_scroll_event_ms.get_or_insert(now_ms);
        if now_ms.saturating_sub(last) >= self.options.settle_delay_ms {
            self.finish_settling();
        }
    }

    /// Reports a native scroll-end: any in-flight programmatic scroll is done.
    pub fn settle(&mut self) {
        if self.phase == Phase::Settling {
            self.finish_settling();
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            active: self.active_index,
            count: self.count(),
            can_prev: self.can_prev(),
            can_next: self.can_next(),
        }
    }

    fn finish_settling(&mut self) {
        ctrace!(target_offset = ?self.settle_target, "settled");
        self.phase = Phase::Idle;
        self.settle_target = None;
    }

    fn commit(&mut self, index: usize) -> bool {
        if self.active_index == Some(index) {
            return false;
        }
        debug_assert!(index < self.count(), "committed index out of range");
        let prev = self.active_index.replace(index);
        self.commits = self.commits.saturating_add(1);
        cdebug!(?prev, index, "active index changed");
        if let Some(cb) = &self.options.on_change {
            cb(self, prev);
        }
        true
    }
}
