//! Headless UI controls: state machines with no rendering attached.
//!
//! Each control owns its interaction state, exposes plain accessors for the
//! host to render from, and announces changes through
//! [`Signal`](corbel_core::Signal)s. Hosts feed events in (pointer presses,
//! [`KeyEvent`](corbel_core::KeyEvent)s, value syncs) and draw whatever the
//! accessors say; the controls never touch a screen.
//!
//! # Controls
//!
//! - [`Pagination`]: a current position in a 1-indexed page domain plus the
//!   visible window of page buttons around it, computed by [`page_window`].
//! - [`SelectBox`]: a closed single-value display that opens into an option
//!   list, with outside-press dismissal via the core pointer channel.
//!
//! # Value ownership
//!
//! Both controls are built in one of two [`ValueMode`]s, fixed for their
//! lifetime. An uncontrolled control mutates its own value and the change
//! signal reports what already happened. A controlled control never mutates
//! its value: the change signal is a request, and the host echoes the
//! accepted value back through the control's `sync_*` method.
//!
//! # Example
//!
//! ```
//! use corbel_controls::Pagination;
//!
//! let mut pager = Pagination::new(23);
//! pager.position_changed.connect(|page| println!("now on page {page}"));
//!
//! pager.set_position(7);
//! assert_eq!(pager.window().positions().collect::<Vec<_>>(), vec![6, 7, 8, 9, 10]);
//! ```

pub mod mode;
pub mod option_list;
pub mod page_range;
pub mod pagination;
pub mod select_box;

pub use mode::ValueMode;
pub use option_list::{OptionList, OptionListError, OptionModel, SelectOption};
pub use page_range::{PageRangeStrategy, PageWindow, page_window};
pub use pagination::{DEFAULT_WINDOW_SIZE, Pagination};
pub use select_box::{SelectBox, SelectBoxSignals};

// The host-facing surface is shared across threads by the channel watchers.
static_assertions::assert_impl_all!(pagination::Pagination: Send);
static_assertions::assert_impl_all!(select_box::SelectBox: Send);
static_assertions::assert_impl_all!(select_box::SelectBoxSignals: Send, Sync);
