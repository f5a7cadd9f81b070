/// Open/closed state of a modal dialog carrying its subject.
///
/// An open modal locks background scrolling; the render layer reads
/// [`Self::locks_scroll`] to toggle the page's overflow.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modal<T> {
    Closed,
    Open(T),
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> Modal<T> {
    /// Opens with `item`, replacing the current subject. Returns the replaced one.
    pub fn open(&mut self, item: T) -> Option<T> {
        match core::mem::replace(self, Self::Open(item)) {
            Self::Open(prev) => Some(prev),
            Self::Closed => None,
        }
    }

    /// Closes the modal. Returns the subject it was showing.
    pub fn close(&mut self) -> Option<T> {
        match core::mem::take(self) {
            Self::Open(prev) => Some(prev),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Self::Open(item) => Some(item),
            Self::Closed => None,
        }
    }

    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }
}

impl<T: PartialEq> Modal<T> {
    /// Accordion-style toggle: closes when `item` is already shown, otherwise opens it.
    ///
    /// Returns `true` when the modal ends up open.
    pub fn toggle(&mut self, item: T) -> bool {
        if self.selected() == Some(&item) {
            self.close();
            false
        } else {
            self.open(item);
            true
        }
    }
}
