//! Ambient pointer-event channel for outside-press detection.
//!
//! Open popups need to close when the user presses the pointer anywhere
//! outside their own surface. Rather than each control installing a blanket
//! always-on listener, a [`PointerChannel`] holds a registry of *watchers*,
//! each scoped to one control surface. The host delivers every global
//! pointer-down through [`PointerChannel::dispatch`], and the channel invokes
//! exactly the watchers whose surface the press did not land in.
//!
//! Controls register a watcher only while they are open and remove it when
//! they close or are dropped, so an idle process carries no subscriptions.
//! The RAII [`ChannelWatch`] guard ties the unsubscribe to scope exit.
//!
//! Most hosts use the process-wide default channel from [`pointer_channel`];
//! tests and multi-document hosts can construct isolated instances.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::event::{PointerDownEvent, SurfaceId};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a registered watcher.
    pub struct WatchId;
}

/// Internal storage for a single watcher.
struct Watcher {
    /// The surface this watcher considers "inside".
    surface: SurfaceId,
    /// Invoked for every press outside `surface`.
    handler: Arc<dyn Fn(&PointerDownEvent) + Send + Sync>,
}

/// A registry of outside-press watchers.
///
/// See the [module documentation](self) for the dispatch contract.
pub struct PointerChannel {
    watchers: Mutex<SlotMap<WatchId, Watcher>>,
}

impl Default for PointerChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerChannel {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self {
            watchers: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Register a watcher scoped to `surface`.
    ///
    /// `handler` is invoked for every dispatched press that did not land in
    /// `surface`. Returns a `WatchId` for manual removal; prefer
    /// [`watch_scoped`](Self::watch_scoped) where a scope exists.
    pub fn watch<F>(&self, surface: SurfaceId, handler: F) -> WatchId
    where
        F: Fn(&PointerDownEvent) + Send + Sync + 'static,
    {
        let id = self.watchers.lock().insert(Watcher {
            surface,
            handler: Arc::new(handler),
        });
        tracing::trace!(target: targets::CHANNEL, surface = surface.raw(), "watch registered");
        id
    }

    /// Register a watcher that is removed when the returned guard is dropped.
    pub fn watch_scoped<F>(self: &Arc<Self>, surface: SurfaceId, handler: F) -> ChannelWatch
    where
        F: Fn(&PointerDownEvent) + Send + Sync + 'static,
    {
        ChannelWatch {
            id: self.watch(surface, handler),
            channel: self.clone(),
        }
    }

    /// Remove a watcher by id.
    ///
    /// Returns `true` if the watcher was found and removed, `false` otherwise.
    pub fn unwatch(&self, id: WatchId) -> bool {
        let removed = self.watchers.lock().remove(id).is_some();
        if removed {
            tracing::trace!(target: targets::CHANNEL, "watch removed");
        }
        removed
    }

    /// The number of registered watchers.
    pub fn watch_count(&self) -> usize {
        self.watchers.lock().len()
    }

    /// Deliver a global pointer-down to every watcher it landed outside of.
    ///
    /// Returns the number of handlers invoked. Handlers run outside the
    /// registry lock, so a handler may unwatch (including its own watch, the
    /// usual close-on-outside-press path) without deadlocking.
    pub fn dispatch(&self, event: &PointerDownEvent) -> usize {
        let outside: Vec<Arc<dyn Fn(&PointerDownEvent) + Send + Sync>> = {
            let watchers = self.watchers.lock();
            watchers
                .values()
                .filter(|w| !event.is_within(w.surface))
                .map(|w| w.handler.clone())
                .collect()
        };

        tracing::trace!(
            target: targets::CHANNEL,
            invoked = outside.len(),
            "dispatching pointer-down"
        );

        for handler in &outside {
            handler(event);
        }
        outside.len()
    }
}

/// RAII handle for a registered watcher.
///
/// Dropping the guard removes the watcher from its channel. Controls hold one
/// of these only while open, which is what makes the subscription scoped to
/// the open state.
pub struct ChannelWatch {
    channel: Arc<PointerChannel>,
    id: WatchId,
}

impl ChannelWatch {
    /// The underlying watch id.
    pub fn id(&self) -> WatchId {
        self.id
    }
}

impl Drop for ChannelWatch {
    fn drop(&mut self) {
        let _ = self.channel.unwatch(self.id);
    }
}

/// The process-wide default pointer channel.
///
/// Hosts with a single input source deliver all pointer-downs here; controls
/// use it unless constructed with an explicit channel.
pub fn pointer_channel() -> &'static Arc<PointerChannel> {
    static CHANNEL: OnceLock<Arc<PointerChannel>> = OnceLock::new();
    CHANNEL.get_or_init(|| Arc::new(PointerChannel::new()))
}
