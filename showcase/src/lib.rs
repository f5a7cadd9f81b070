//! Headless showcase components built on the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only does the position math. This crate adds the
//! pieces a page needs around it, still without binding to any UI framework:
//!
//! - [`ScrollSurface`]: the measurement interface an adapter implements for its scroll container
//! - [`Controller`]: a carousel bound to a surface, with per-frame event coalescing and
//!   optional tween-driven smooth scrolling
//! - [`Deck`]/[`Card`]: immutable content handed to a component at construction
//! - [`Showcase`]: a card strip with pagination and a detail [`Modal`]
//! - [`InquiryDialog`]: the contact/partnership/package inquiry form
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod deck;
mod frame;
mod inquiry;
mod modal;
mod showcase;
mod surface;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, ControllerOptions, SmoothMode};
pub use deck::{Card, CardTheme, Deck, Tone};
pub use frame::FrameCoalescer;
pub use inquiry::{
    DeliveryError, Field, FieldError, FieldErrors, InquiryDialog, InquiryForm, InquiryKind,
    SubmitError, SubmitStatus,
};
pub use modal::Modal;
pub use showcase::Showcase;
pub use surface::ScrollSurface;
pub use tween::{Easing, Tween};

pub use carousel::{Pagination, Phase, ScrollBehavior, ScrollCommand};
