/// A snapshot of pagination affordances (dots and prev/next arrows).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    pub active: Option<usize>,
    pub count: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

impl Pagination {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Calls `f(index, is_active)` once per dot, in order.
    pub fn for_each_dot(&self, mut f: impl FnMut(usize, bool)) {
        for i in 0..self.count {
            f(i, self.is_active(i));
        }
    }
}
