/// How a scroll command should be applied by the UI layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump to the target offset.
    Instant,
    /// Animate towards the target offset.
    #[default]
    Smooth,
}

/// Programmatic scroll phase.
///
/// `Settling` is entered by [`crate::Carousel::scroll_to_index`] and left once the scroll
/// reaches its target, a scroll-end is reported, or scroll events stop for
/// `settle_delay_ms`. User-driven scrolling never enters `Settling`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Settling,
}

/// A scroll request for the UI layer, returned by navigation methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    /// The (clamped) item index the command targets.
    pub index: usize,
    /// Leading-edge offset of the target item.
    pub offset: u64,
    pub behavior: ScrollBehavior,
}

/// Uniform item stride: every item is `item_size` wide and followed by `gap`.
///
/// Only valid when all items share one width at the current breakpoint. Prefer per-item
/// measurement (`Carousel::measure*`) when widths vary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stride {
    pub item_size: u32,
    pub gap: u32,
}

impl Stride {
    pub fn new(item_size: u32, gap: u32) -> Self {
        Self { item_size, gap }
    }

    /// Full-width paging: each item fills the viewport, no gap.
    pub fn page(viewport_size: u32) -> Self {
        Self {
            item_size: viewport_size,
            gap: 0,
        }
    }

    pub fn step(&self) -> u64 {
        self.item_size as u64 + self.gap as u64
    }

    pub fn offset_of(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.step())
    }
}
