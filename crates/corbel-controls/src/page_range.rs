//! Visible-window calculation for the pagination control.
//!
//! Given a current position inside a 1-indexed page domain, [`page_window`]
//! computes the contiguous subset of positions a host should render. Two
//! policies exist and both are kept as selectable strategies:
//!
//! - [`PageRangeStrategy::Sliding`] centers the window on the current
//!   position and moves it on every step.
//! - [`PageRangeStrategy::Grouped`] partitions the domain into fixed blocks
//!   and only moves the window when the current position crosses a block
//!   boundary.

/// The policy governing how the visible window moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageRangeStrategy {
    /// Fixed consecutive blocks of `window_size` positions; the window is
    /// stable within a block.
    #[default]
    Grouped,
    /// A window centered on the current position, re-clamped at the domain
    /// edges.
    Sliding,
}

/// A contiguous range of visible page positions, inclusive on both ends.
///
/// The empty window (for an empty domain) is represented with `end < start`;
/// use [`is_empty`](Self::is_empty) rather than comparing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First visible position.
    pub start: u32,
    /// Last visible position.
    pub end: u32,
}

impl PageWindow {
    /// The window over an empty domain.
    pub fn empty() -> Self {
        Self { start: 1, end: 0 }
    }

    /// Whether the window contains no positions.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of positions in the window.
    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Whether `position` lies inside the window.
    pub fn contains(&self, position: u32) -> bool {
        !self.is_empty() && self.start <= position && position <= self.end
    }

    /// The visible positions in order, one per page button.
    pub fn positions(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// Compute the visible window of positions.
///
/// Inputs are clamped defensively: `window_size == 0` is treated as 1 and
/// `current` is pulled into `[1, total]`. `total == 0` yields the empty
/// window. The result always lies within `[1, total]` and has
/// `min(window_size, total)` positions.
pub fn page_window(
    current: u32,
    total: u32,
    window_size: u32,
    strategy: PageRangeStrategy,
) -> PageWindow {
    if total == 0 {
        return PageWindow::empty();
    }

    let window = window_size.max(1);
    let current = current.clamp(1, total);

    match strategy {
        PageRangeStrategy::Sliding => {
            let half = window / 2;
            let mut start = current.saturating_sub(half).max(1);
            let end = start.saturating_add(window - 1).min(total);
            // Short window at the right edge: pull the start back so the
            // window keeps min(window, total) entries.
            if end - start + 1 < window {
                start = end.saturating_sub(window - 1).max(1);
            }
            PageWindow { start, end }
        }
        PageRangeStrategy::Grouped => {
            // `(group - 1) * window < current`, so the start never overflows;
            // the block end (`group * window`) can, hence the saturation.
            let group = current.div_ceil(window);
            let start = (group - 1) * window + 1;
            let end = start.saturating_add(window - 1).min(total);
            PageWindow { start, end }
        }
    }
}
