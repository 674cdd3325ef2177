//! Pagination control.
//!
//! [`Pagination`] tracks a 1-indexed position inside a bounded page domain,
//! derives the visible window of page buttons via [`page_window`], and
//! exposes step affordances whose semantics follow the active
//! [`PageRangeStrategy`]:
//!
//! - `Sliding`: stepping moves the position by exactly one page.
//! - `Grouped`: stepping jumps to the last position of the previous block or
//!   the first position of the next block.
//!
//! # Example
//!
//! ```
//! use corbel_controls::{PageRangeStrategy, Pagination};
//!
//! let mut pager = Pagination::new(25)
//!     .with_window_size(5)
//!     .with_strategy(PageRangeStrategy::Grouped);
//!
//! pager.position_changed.connect(|&page| {
//!     println!("Now on page {}", page);
//! });
//!
//! pager.set_position(23);
//! assert_eq!(pager.window().positions().collect::<Vec<_>>(), vec![21, 22, 23, 24, 25]);
//! assert!(!pager.can_step_forward());
//! ```

use corbel_core::Signal;

use crate::mode::ValueMode;
use crate::page_range::{PageRangeStrategy, PageWindow, page_window};

const TARGET: &str = "corbel_controls::pagination";

/// Default number of positions shown at once.
pub const DEFAULT_WINDOW_SIZE: u32 = 5;

/// A headless page-position control.
///
/// The position is either owned internally ([`ValueMode::Uncontrolled`], the
/// default) or by the host ([`ValueMode::Controlled`]); in controlled mode
/// the host feeds every accepted change back through
/// [`sync_position`](Self::sync_position) after handling the signal.
///
/// # Signals
///
/// - `position_changed(u32)`: Emitted when a navigation request is accepted
///
/// Construction is infallible: a zero window size clamps to 1 and the
/// position is always pulled into `[1, max(total, 1)]`.
pub struct Pagination {
    /// Current position, 1-indexed. Invariant: `1 <= current <= max(total, 1)`.
    current: u32,

    /// Total number of positions. Zero means "no pages".
    total: u32,

    /// Number of positions shown at once, at least 1.
    window_size: u32,

    /// Whether the host wants step affordances at all.
    show_step_controls: bool,

    /// The window-movement policy.
    strategy: PageRangeStrategy,

    /// Who owns the position.
    mode: ValueMode,

    /// Signal emitted when a navigation request is accepted.
    pub position_changed: Signal<u32>,
}

impl Pagination {
    /// Create an uncontrolled pagination control over `total` positions,
    /// starting at position 1.
    pub fn new(total: u32) -> Self {
        Self {
            current: 1,
            total,
            window_size: DEFAULT_WINDOW_SIZE,
            show_step_controls: true,
            strategy: PageRangeStrategy::default(),
            mode: ValueMode::Uncontrolled,
            position_changed: Signal::new(),
        }
    }

    /// Create a controlled pagination control: the host owns the position and
    /// pushes it in via [`sync_position`](Self::sync_position).
    pub fn controlled(total: u32) -> Self {
        Self {
            mode: ValueMode::Controlled,
            ..Self::new(total)
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the initial position using builder pattern. Clamped, no signal.
    pub fn with_position(mut self, position: u32) -> Self {
        self.current = position.clamp(1, self.total.max(1));
        self
    }

    /// Set the window size. Clamped to at least 1.
    pub fn set_window_size(&mut self, window_size: u32) {
        self.window_size = window_size.max(1);
    }

    /// Set window size using builder pattern.
    pub fn with_window_size(mut self, window_size: u32) -> Self {
        self.set_window_size(window_size);
        self
    }

    /// Set the window-movement strategy.
    pub fn set_strategy(&mut self, strategy: PageRangeStrategy) {
        self.strategy = strategy;
    }

    /// Set strategy using builder pattern.
    pub fn with_strategy(mut self, strategy: PageRangeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set whether the host wants step affordances.
    pub fn set_show_step_controls(&mut self, show: bool) {
        self.show_step_controls = show;
    }

    /// Set step-affordance visibility using builder pattern.
    pub fn with_show_step_controls(mut self, show: bool) -> Self {
        self.show_step_controls = show;
        self
    }

    /// Replace the page domain wholesale, re-clamping the position.
    ///
    /// No signal fires: the host changed the domain, it already knows.
    pub fn set_total(&mut self, total: u32) {
        self.total = total;
        let clamped = self.current.clamp(1, total.max(1));
        if clamped != self.current {
            tracing::trace!(
                target: TARGET,
                from = self.current,
                to = clamped,
                "position re-clamped after domain change"
            );
            self.current = clamped;
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The current position, 1-indexed.
    pub fn position(&self) -> u32 {
        self.current
    }

    /// The total number of positions.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The configured window size.
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// The active window-movement strategy.
    pub fn strategy(&self) -> PageRangeStrategy {
        self.strategy
    }

    /// Who owns the position.
    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// The currently visible window of positions.
    pub fn window(&self) -> PageWindow {
        page_window(self.current, self.total, self.window_size, self.strategy)
    }

    /// The visible positions in order, one per page button.
    pub fn pages(&self) -> Vec<u32> {
        self.window().positions().collect()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Request a move to `position`.
    ///
    /// Ignored without a signal if `position` is the current position or lies
    /// outside `[1, total]`. Otherwise the internal position advances (in
    /// uncontrolled mode) and `position_changed` fires.
    pub fn set_position(&mut self, position: u32) {
        if position == self.current {
            return;
        }
        if position < 1 || position > self.total {
            tracing::trace!(
                target: TARGET,
                position,
                total = self.total,
                "ignoring out-of-domain navigation request"
            );
            return;
        }

        if self.mode == ValueMode::Uncontrolled {
            self.current = position;
        }
        self.position_changed.emit(position);
    }

    /// Mirror a host-owned position (controlled mode only). Clamped, no signal.
    pub fn sync_position(&mut self, position: u32) {
        if self.mode != ValueMode::Controlled {
            tracing::warn!(
                target: TARGET,
                "sync_position called on an uncontrolled control; ignoring"
            );
            return;
        }
        self.current = position.clamp(1, self.total.max(1));
    }

    /// Whether stepping backward is possible.
    ///
    /// Sliding strategy: not at position 1. Grouped strategy: a previous
    /// block exists.
    pub fn can_step_backward(&self) -> bool {
        match self.strategy {
            PageRangeStrategy::Sliding => self.current > 1,
            PageRangeStrategy::Grouped => self.window().start > 1,
        }
    }

    /// Whether stepping forward is possible.
    ///
    /// Sliding strategy: not at the last position. Grouped strategy: a next
    /// block exists.
    pub fn can_step_forward(&self) -> bool {
        match self.strategy {
            PageRangeStrategy::Sliding => self.current < self.total,
            PageRangeStrategy::Grouped => {
                let window = self.window();
                !window.is_empty() && window.end < self.total
            }
        }
    }

    /// Step backward: one position (sliding) or to the last position of the
    /// previous block (grouped). No-op when stepping is not possible.
    pub fn step_backward(&mut self) {
        if !self.can_step_backward() {
            return;
        }
        let target = match self.strategy {
            PageRangeStrategy::Sliding => self.current - 1,
            PageRangeStrategy::Grouped => self.window().start - 1,
        };
        self.set_position(target);
    }

    /// Step forward: one position (sliding) or to the first position of the
    /// next block (grouped). No-op when stepping is not possible.
    pub fn step_forward(&mut self) {
        if !self.can_step_forward() {
            return;
        }
        let target = match self.strategy {
            PageRangeStrategy::Sliding => self.current + 1,
            PageRangeStrategy::Grouped => self.window().end + 1,
        };
        self.set_position(target);
    }

    /// Whether the host should render step affordances at all.
    ///
    /// With one page or none there is nothing to step through, so the
    /// affordances are hidden entirely rather than merely disabled.
    pub fn step_controls_visible(&self) -> bool {
        self.show_step_controls && self.total > 1
    }
}
