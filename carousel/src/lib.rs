//! A headless, scroll-synchronized carousel controller.
//!
//! This crate keeps a horizontally scrolling strip of items in sync with a discrete
//! "active index", in both directions:
//! - explicit navigation (`scroll_to_index`, `next`, `prev`) produces a clamped scroll
//!   command targeting the item's measured leading edge
//! - user-driven scrolling resolves back to the nearest measured item
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - each item's leading-edge offset (re-measured on resize)
//! - the current scroll offset (ideally coalesced to one report per animation frame)
//! - a way to apply the returned [`ScrollCommand`]s
//!
//! For a surface-bound controller, frame coalescing and tween scrolling, see the
//! `showcase` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod options;
mod pagination;
mod types;


pub use carousel::Carousel;
pub use options::{CarouselOptions, OnChangeCallback};
pub use pagination::Pagination;
pub use types::{Phase, ScrollBehavior, ScrollCommand, Stride};
