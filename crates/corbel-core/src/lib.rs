//! Core systems for Corbel.
//!
//! This crate provides the foundational pieces of the Corbel headless
//! controls library:
//!
//! - **Signal/Slot System**: Type-safe change notification from controls to
//!   their host
//! - **Input Events**: The key/pointer vocabulary the controls react to
//! - **Pointer Channel**: Scoped outside-press detection for popups
//!
//! # Signal/Slot Example
//!
//! ```
//! use corbel_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<u32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Pointer Channel Example
//!
//! ```
//! use corbel_core::{PointerChannel, PointerDownEvent, SurfaceId};
//! use std::sync::Arc;
//!
//! let channel = Arc::new(PointerChannel::new());
//! let my_surface = SurfaceId::next();
//!
//! // Watch for presses outside my surface while a popup is open
//! let watch = channel.watch_scoped(my_surface, |_event| {
//!     println!("pressed outside - close the popup");
//! });
//!
//! // The host forwards every global pointer-down:
//! channel.dispatch(&PointerDownEvent::outside());      // handler runs
//! channel.dispatch(&PointerDownEvent::inside(my_surface)); // handler does not
//!
//! drop(watch); // popup closed - subscription released
//! ```

pub mod channel;
pub mod event;
pub mod logging;
pub mod signal;

pub use channel::{ChannelWatch, PointerChannel, WatchId, pointer_channel};
pub use event::{
    Key, KeyEvent, KeyboardModifiers, PointerButton, PointerDownEvent, SurfaceId,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

// The controls hand Arc'd state to channel watchers; everything shared must
// stay thread-safe.
static_assertions::assert_impl_all!(Signal<u32>: Send, Sync);
static_assertions::assert_impl_all!(PointerChannel: Send, Sync);
static_assertions::assert_impl_all!(ChannelWatch: Send, Sync);
