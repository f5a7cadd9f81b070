use carousel::{Carousel, CarouselOptions, Pagination, ScrollBehavior, ScrollCommand};

use crate::{Easing, FrameCoalescer, ScrollSurface, Tween};

/// How `ScrollBehavior::Smooth` commands reach the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmoothMode {
    /// Forward the command as-is; the surface animates on its own (e.g. CSS smooth scroll).
    #[default]
    Native,
    /// Drive a [`Tween`] from `on_frame` and write instant offsets each frame.
    Tween { duration_ms: u64, easing: Easing },
}

/// Configuration for [`Controller`].
#[derive(Clone, Debug)]
pub struct ControllerOptions {
    pub carousel: CarouselOptions,
    pub smooth: SmoothMode,
}

impl ControllerOptions {
    pub fn new(count: usize) -> Self {
        Self {
            carousel: CarouselOptions::new(count),
            smooth: SmoothMode::Native,
        }
    }

    pub fn with_carousel(mut self, carousel: CarouselOptions) -> Self {
        self.carousel = carousel;
        self
    }

    pub fn with_smooth(mut self, smooth: SmoothMode) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_tween(self, duration_ms: u64, easing: Easing) -> Self {
        self.with_smooth(SmoothMode::Tween {
            duration_ms,
            easing,
        })
    }
}

/// Binds a [`Carousel`] to a [`ScrollSurface`].
///
/// Adapters drive it by calling:
/// - `on_scroll_event` from the raw scroll listener (cheap; only requests a frame)
/// - `on_frame(now_ms)` from the animation-frame callback
/// - `on_resize` when the viewport or container size changes
/// - `scroll_to_index` / `next` / `prev` from pagination dots and arrows
///
/// Navigation is fire-and-forget: a new command supersedes the previous target.
#[derive(Debug)]
pub struct Controller<S> {
    surface: S,
    carousel: Carousel,
    frames: FrameCoalescer,
    smooth: SmoothMode,
    tween: Option<Tween>,
    scratch: Vec<Option<u64>>,
}

impl<S: ScrollSurface> Controller<S> {
    /// Creates a controller and measures the surface once (mount).
    pub fn new(surface: S, options: ControllerOptions) -> Self {
        let mut c = Self {
            surface,
            carousel: Carousel::new(options.carousel),
            frames: FrameCoalescer::new(),
            smooth: options.smooth,
            tween: None,
            scratch: Vec::new(),
        };
        c.remeasure();
        c
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn frames(&self) -> &FrameCoalescer {
        &self.frames
    }

    pub fn into_parts(self) -> (S, Carousel) {
        (self.surface, self.carousel)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.carousel.active_index()
    }

    pub fn pagination(&self) -> Pagination {
        self.carousel.pagination()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.scroll_offset().is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Stops a running tween, e.g. when the user grabs the strip mid-animation.
    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Raw scroll listener entry point. Only schedules a frame.
    pub fn on_scroll_event(&mut self) {
        self.frames.request();
    }

    /// Native scroll-end listener entry point.
    pub fn on_scroll_end(&mut self) {
        self.carousel.settle();
    }

    /// Animation-frame callback.
    ///
    /// Advances a running tween, reads the surface offset at most once and forwards it to
    /// the carousel, then runs settle debouncing. Returns `true` when the active index
    /// changed.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        let tweened = self.advance_tween(now_ms);
        let changed = if self.frames.take() || tweened {
            self.sync_from_surface(now_ms)
        } else {
            false
        };
        self.carousel.update(now_ms);
        changed
    }

    /// Re-measures item offsets after a viewport/container resize.
    pub fn on_resize(&mut self) {
        self.remeasure();
    }

    /// Scrolls to `index` (clamped). No-op while the surface is unmounted.
    pub fn scroll_to_index(&mut self, index: usize, now_ms: u64) -> Option<ScrollCommand> {
        if !self.is_mounted() {
            strace!(index, "scroll_to_index: surface not mounted");
            return None;
        }
        let cmd = self.carousel.scroll_to_index(index)?;
        self.dispatch(cmd, now_ms);
        Some(cmd)
    }

    pub fn next(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if !self.is_mounted() {
            return None;
        }
        let cmd = self.carousel.next()?;
        self.dispatch(cmd, now_ms);
        Some(cmd)
    }

    pub fn prev(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if !self.is_mounted() {
            return None;
        }
        let cmd = self.carousel.prev()?;
        self.dispatch(cmd, now_ms);
        Some(cmd)
    }

    fn dispatch(&mut self, cmd: ScrollCommand, now_ms: u64) {
        match (cmd.behavior, self.smooth) {
            (ScrollBehavior::Smooth, SmoothMode::Tween { duration_ms, easing }) => {
                if let Some(tween) = &mut self.tween {
                    tween.retarget(now_ms, cmd.offset, duration_ms);
                } else {
                    let from = self.surface.scroll_offset().unwrap_or(cmd.offset);
                    self.tween = Some(Tween::new(from, cmd.offset, now_ms, duration_ms, easing));
                }
                strace!(index = cmd.index, offset = cmd.offset, "tween started");
            }
            (behavior, _) => {
                self.tween = None;
                self.surface.scroll_to(cmd.offset, behavior);
            }
        }
    }

    fn advance_tween(&mut self, now_ms: u64) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        self.surface.scroll_to(tween.sample(now_ms), ScrollBehavior::Instant);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        true
    }

    fn sync_from_surface(&mut self, now_ms: u64) -> bool {
        let Some(offset) = self.surface.scroll_offset() else {
            return false;
        };
        self.carousel.on_scroll(offset, now_ms)
    }

    fn remeasure(&mut self) {
        self.scratch.clear();
        self.surface.item_offsets(&mut self.scratch);
        if self.scratch.len() != self.carousel.count() {
            swarn!(
                reported = self.scratch.len(),
                count = self.carousel.count(),
                "surface reported a different item count"
            );
        }
        self.carousel.set_item_offsets(self.scratch.iter().copied());
        sdebug!(measured = self.carousel.measured_count(), "remeasured item offsets");
    }
}
