//! Carousel selection
//!
//! An index into the catalog that is clamped on every write, plus the
//! derived horizontal offset that centres the active burger.

use crate::catalog::{Burger, CATALOG, CATALOG_LEN, DEFAULT_INDEX};
use crate::layout::Spacing;

/// Selection over the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX,
        }
    }
}

impl Carousel {
    /// Index of the last burger
    pub const LAST: usize = CATALOG_LEN - 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently highlighted burger
    #[inline]
    pub fn active(&self) -> &'static Burger {
        &CATALOG[self.index]
    }

    /// Clamp `index` into `[0, LAST]` and store it. Returns the stored value.
    ///
    /// Out-of-range input is not an error; clamping is the policy.
    pub fn select(&mut self, index: i64) -> usize {
        self.index = index.clamp(0, Self::LAST as i64) as usize;
        self.index
    }

    /// Move one step left
    pub fn previous(&mut self) -> usize {
        self.select(self.index as i64 - 1)
    }

    /// Move one step right
    pub fn next(&mut self) -> usize {
        self.select(self.index as i64 + 1)
    }

    /// Whether the "previous" control is enabled
    #[inline]
    pub fn can_go_previous(&self) -> bool {
        self.index != 0
    }

    /// Whether the "next" control is enabled
    #[inline]
    pub fn can_go_next(&self) -> bool {
        self.index != Self::LAST
    }

    /// Horizontal strip offset in pixels: `-index * spacing`
    pub fn offset(&self, spacing: Spacing) -> i64 {
        -(self.index as i64) * i64::from(spacing.pixels())
    }
}
