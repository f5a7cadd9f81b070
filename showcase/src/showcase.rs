use carousel::{Pagination, ScrollCommand};

use crate::{Card, Controller, ControllerOptions, Deck, Modal, ScrollSurface};

/// A card strip with pagination and a detail modal.
///
/// One component for every portfolio/services/pricing-style strip: the variation between
/// pages lives entirely in the [`Deck`] and the surface, not here.
#[derive(Debug)]
pub struct Showcase<S> {
    deck: Deck,
    controller: Controller<S>,
    detail: Modal<usize>,
}

impl<S: ScrollSurface> Showcase<S> {
    pub fn new(deck: Deck, surface: S) -> Self {
        let options = ControllerOptions::new(deck.len());
        Self::with_options(deck, surface, options)
    }

    /// Creates a showcase with custom controller options.
    ///
    /// The item count always follows the deck.
    pub fn with_options(deck: Deck, surface: S, mut options: ControllerOptions) -> Self {
        if options.carousel.count != deck.len() {
            sdebug!(
                requested = options.carousel.count,
                cards = deck.len(),
                "overriding item count with deck length"
            );
            options.carousel.count = deck.len();
        }
        Self {
            controller: Controller::new(surface, options),
            deck,
            detail: Modal::Closed,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    /// Event plumbing (`on_scroll_event`, `on_frame`, `on_resize`, ...).
    pub fn controller_mut(&mut self) -> &mut Controller<S> {
        &mut self.controller
    }

    pub fn active_index(&self) -> Option<usize> {
        self.controller.active_index()
    }

    pub fn active_card(&self) -> Option<&Card> {
        self.deck.get(self.active_index()?)
    }

    pub fn pagination(&self) -> Pagination {
        self.controller.pagination()
    }

    /// Arrow/dot navigation. Inert while the detail modal covers the strip.
    pub fn scroll_to_index(&mut self, index: usize, now_ms: u64) -> Option<ScrollCommand> {
        if self.detail.is_open() {
            return None;
        }
        self.controller.scroll_to_index(index, now_ms)
    }

    pub fn next(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if self.detail.is_open() {
            return None;
        }
        self.controller.next(now_ms)
    }

    pub fn prev(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if self.detail.is_open() {
            return None;
        }
        self.controller.prev(now_ms)
    }

    /// Opens the detail modal for the card at `index`. Returns `false` for unknown indexes.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.deck.len() {
            return false;
        }
        self.detail.open(index);
        true
    }

    pub fn open_active(&mut self) -> bool {
        match self.active_index() {
            Some(index) => self.open(index),
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.detail.close();
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.detail.selected().copied()
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.deck.get(self.selected_index()?)
    }

    pub fn locks_scroll(&self) -> bool {
        self.detail.locks_scroll()
    }
}
