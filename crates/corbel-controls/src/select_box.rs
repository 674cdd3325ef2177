//! Select-box (combobox) control.
//!
//! [`SelectBox`] is an open/closed state machine layered over an
//! [`OptionModel`]: a closed single-value display that opens into a list of
//! selectable options. It owns the selected value in uncontrolled mode or
//! mirrors a host-owned value in controlled mode, and while open it watches
//! the pointer channel so a press anywhere outside its own surface closes it.
//!
//! # Example
//!
//! ```
//! use corbel_controls::{OptionList, SelectBox, SelectOption};
//!
//! let options = OptionList::new(vec![
//!     SelectOption::new("kr", "Korean"),
//!     SelectOption::new("en", "English"),
//!     SelectOption::new("jp", "Japanese").with_disabled(true),
//! ]);
//!
//! let mut select = SelectBox::new(options).with_placeholder("Choose a language");
//!
//! select.signals().selection_changed.connect(|(id, option)| {
//!     println!("Picked {} ({})", option.label, id);
//! });
//!
//! assert_eq!(select.display_text(), "Choose a language");
//! select.activate(); // open
//! select.select("en"); // commit and close
//! assert_eq!(select.display_text(), "English");
//! ```
//!
//! # Signals
//!
//! - `opened()`: Emitted when the list opens
//! - `closed()`: Emitted when the list closes, whatever closed it
//! - `selection_changed(id, option)`: Emitted when an enabled option is
//!   committed, before `closed`

use std::sync::Arc;

use parking_lot::Mutex;

use corbel_core::{
    ChannelWatch, Key, KeyEvent, PointerChannel, Signal, SurfaceId, pointer_channel,
};

use crate::mode::ValueMode;
use crate::option_list::{OptionModel, SelectOption};

const TARGET: &str = "corbel_controls::select_box";

/// Signals emitted by a [`SelectBox`].
///
/// Grouped behind an `Arc` because the outside-press watcher must be able to
/// emit `closed` from channel dispatch; access them via
/// [`SelectBox::signals`].
pub struct SelectBoxSignals {
    /// Emitted when the option list opens.
    pub opened: Signal<()>,
    /// Emitted when the option list closes.
    pub closed: Signal<()>,
    /// Emitted when an enabled option is committed.
    pub selection_changed: Signal<(String, SelectOption)>,
}

impl SelectBoxSignals {
    fn new() -> Self {
        Self {
            opened: Signal::new(),
            closed: Signal::new(),
            selection_changed: Signal::new(),
        }
    }
}

/// Open-popup state, shared with the channel watcher while open.
struct PopupState {
    /// Whether the option list is showing.
    open: bool,
    /// Highlighted option index, if any. Always cleared when closed.
    highlighted: Option<usize>,
    /// The outside-press watch. `Some` exactly while open.
    watch: Option<ChannelWatch>,
}

/// A headless dropdown-selection control.
///
/// See the [module documentation](self) for the event vocabulary and an
/// example. The full transition table lives with the event methods:
/// [`activate`](Self::activate), [`handle_key`](Self::handle_key),
/// [`select`](Self::select), [`set_disabled`](Self::set_disabled).
pub struct SelectBox {
    /// Identity of this control's rendered surface, for outside-press scoping.
    surface: SurfaceId,

    /// The host-owned option list. Read-only; replaced via `set_options`.
    model: Box<dyn OptionModel>,

    /// The selected option id. Always resolves to an option in `model` or is
    /// `None`.
    selected: Option<String>,

    /// Shown when nothing is selected.
    placeholder: String,

    /// A disabled control ignores every input event.
    disabled: bool,

    /// Who owns the selected value.
    mode: ValueMode,

    /// The pointer channel to watch while open.
    channel: Arc<PointerChannel>,

    /// Popup state, shared with the outside-press watcher.
    popup: Arc<Mutex<PopupState>>,

    /// Signals, shared with the outside-press watcher.
    signals: Arc<SelectBoxSignals>,
}

impl SelectBox {
    /// Create an uncontrolled select box over the given options, closed, with
    /// nothing selected.
    pub fn new(model: impl OptionModel + 'static) -> Self {
        Self {
            surface: SurfaceId::next(),
            model: Box::new(model),
            selected: None,
            placeholder: String::new(),
            disabled: false,
            mode: ValueMode::Uncontrolled,
            channel: pointer_channel().clone(),
            popup: Arc::new(Mutex::new(PopupState {
                open: false,
                highlighted: None,
                watch: None,
            })),
            signals: Arc::new(SelectBoxSignals::new()),
        }
    }

    /// Create a controlled select box: the host owns the value and pushes it
    /// in via [`sync_value`](Self::sync_value).
    pub fn controlled(model: impl OptionModel + 'static) -> Self {
        // No record update here: `Drop` forbids moving fields out of a value.
        let mut select = Self::new(model);
        select.mode = ValueMode::Controlled;
        select
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the placeholder shown while nothing is selected.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the initial selection using builder pattern.
    ///
    /// Ignored if `id` does not resolve to an option. A disabled id is
    /// accepted here: a pre-set default may be disabled, it just can never be
    /// re-selected by interaction.
    pub fn with_default_value(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if self.model.find(&id).is_some() {
            self.selected = Some(id);
        } else {
            tracing::trace!(target: TARGET, %id, "default value does not resolve; ignoring");
        }
        self
    }

    /// Watch a specific pointer channel instead of the process-wide default.
    pub fn with_channel(mut self, channel: Arc<PointerChannel>) -> Self {
        self.channel = channel;
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Identity of this control's surface. The host tags pointer-down events
    /// landing inside the control (display or popup) with this id.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// The signals this control emits.
    pub fn signals(&self) -> &SelectBoxSignals {
        &self.signals
    }

    /// Whether the option list is currently open.
    pub fn is_open(&self) -> bool {
        self.popup.lock().open
    }

    /// Whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Who owns the selected value.
    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// The selected option id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected option, if the selection resolves.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected.as_deref().and_then(|id| self.model.find(id))
    }

    /// The text the closed control should display: the selected option's
    /// label, or the placeholder when nothing is selected.
    pub fn display_text(&self) -> &str {
        self.selected_option()
            .map(|o| o.label.as_str())
            .unwrap_or(&self.placeholder)
    }

    /// The option list.
    pub fn options(&self) -> &dyn OptionModel {
        self.model.as_ref()
    }

    /// The highlighted option index, if the list is open and a highlight is
    /// set.
    pub fn highlighted(&self) -> Option<usize> {
        self.popup.lock().highlighted
    }

    // =========================================================================
    // Host updates
    // =========================================================================

    /// Replace the option list wholesale.
    ///
    /// If the previously selected id no longer exists in the new list the
    /// selection becomes empty; no replacement is guessed. The highlight is
    /// cleared (indices no longer line up). The open/closed state is kept.
    pub fn set_options(&mut self, model: impl OptionModel + 'static) {
        self.model = Box::new(model);
        if let Some(id) = &self.selected
            && self.model.find(id).is_none()
        {
            tracing::trace!(target: TARGET, %id, "selected id gone after options replacement");
            self.selected = None;
        }
        self.popup.lock().highlighted = None;
    }

    /// Mirror a host-owned value (controlled mode only).
    ///
    /// A value that does not resolve to an option clears the selection.
    /// No signal fires; the host is telling us what it already knows.
    pub fn sync_value(&mut self, value: Option<&str>) {
        if self.mode != ValueMode::Controlled {
            tracing::warn!(
                target: TARGET,
                "sync_value called on an uncontrolled control; ignoring"
            );
            return;
        }
        self.selected = match value {
            Some(id) if self.model.find(id).is_some() => Some(id.to_string()),
            Some(id) => {
                tracing::trace!(target: TARGET, %id, "synced value does not resolve; clearing");
                None
            }
            None => None,
        };
    }

    /// Enable or disable the control. Disabling while open forces the list
    /// closed (`closed` fires); a disabled control ignores all input events.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.close();
        }
    }

    // =========================================================================
    // Input events
    // =========================================================================

    /// Primary activation: a click/tap on the control, or Enter/Space while
    /// focused. Toggles the list open or closed.
    pub fn activate(&mut self) {
        if self.disabled {
            tracing::trace!(target: TARGET, "activation on disabled control ignored");
            return;
        }
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Handle a key press while the control is focused.
    ///
    /// Returns whether the key was consumed. Enter/Space toggle like
    /// [`activate`](Self::activate); ArrowDown/ArrowUp open a closed list or
    /// move the highlight in an open one; Escape closes. Hosts implementing
    /// their own list navigation can instead drive
    /// [`set_highlighted`](Self::set_highlighted) and
    /// [`select_highlighted`](Self::select_highlighted) directly.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if self.disabled {
            return false;
        }

        match event.key {
            Key::Enter | Key::Space => {
                self.activate();
                true
            }
            Key::ArrowDown => {
                if self.is_open() {
                    self.highlight_next();
                } else {
                    self.open();
                }
                true
            }
            Key::ArrowUp => {
                if self.is_open() {
                    self.highlight_previous();
                } else {
                    self.open();
                }
                true
            }
            Key::Escape => {
                if self.is_open() {
                    self.close();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Commit the option with the given id (pointer or keyboard commit).
    ///
    /// Only meaningful while open. A disabled or unknown option is rejected
    /// with no state change and no signal. An enabled option updates the
    /// selection (uncontrolled mode), closes the list, and fires
    /// `selection_changed(id, option)` followed by `closed`.
    pub fn select(&mut self, id: &str) {
        if self.disabled {
            return;
        }
        if !self.is_open() {
            tracing::trace!(target: TARGET, %id, "select on closed control ignored");
            return;
        }
        let Some(option) = self.model.find(id).cloned() else {
            tracing::trace!(target: TARGET, %id, "unknown option; ignoring");
            return;
        };
        if option.disabled {
            tracing::trace!(target: TARGET, %id, "disabled option; ignoring");
            return;
        }

        if self.mode == ValueMode::Uncontrolled {
            self.selected = Some(option.id.clone());
        }

        self.close_popup_silently();
        self.signals
            .selection_changed
            .emit((option.id.clone(), option));
        self.signals.closed.emit(());
    }

    /// Commit the currently highlighted option, if any.
    pub fn select_highlighted(&mut self) {
        let Some(index) = self.highlighted() else {
            return;
        };
        let Some(id) = self.model.option_at(index).map(|o| o.id.clone()) else {
            return;
        };
        self.select(&id);
    }

    // =========================================================================
    // Highlight
    // =========================================================================

    /// Set the highlighted option index directly. Out-of-range indices clear
    /// the highlight. Only meaningful while open.
    pub fn set_highlighted(&mut self, index: Option<usize>) {
        let mut popup = self.popup.lock();
        if !popup.open {
            return;
        }
        popup.highlighted = index.filter(|&i| i < self.model.len());
    }

    /// Move the highlight to the next enabled option, clamping at the end.
    pub fn highlight_next(&mut self) {
        self.move_highlight(1);
    }

    /// Move the highlight to the previous enabled option, clamping at the
    /// start.
    pub fn highlight_previous(&mut self) {
        self.move_highlight(-1);
    }

    fn move_highlight(&mut self, direction: isize) {
        let mut popup = self.popup.lock();
        if !popup.open {
            return;
        }

        let len = self.model.len();
        let enabled = |i: usize| self.model.option_at(i).is_some_and(|o| !o.disabled);

        let next = match popup.highlighted {
            Some(current) => {
                let mut i = current as isize + direction;
                loop {
                    if i < 0 || i as usize >= len {
                        // Clamp: no enabled option further in that direction.
                        break None;
                    }
                    if enabled(i as usize) {
                        break Some(i as usize);
                    }
                    i += direction;
                }
            }
            // No highlight yet: land on the first enabled option from the
            // respective end.
            None if direction > 0 => (0..len).find(|&i| enabled(i)),
            None => (0..len).rev().find(|&i| enabled(i)),
        };

        if next.is_some() {
            popup.highlighted = next;
        }
    }

    // =========================================================================
    // Open / close
    // =========================================================================

    fn open(&mut self) {
        {
            let mut popup = self.popup.lock();
            if popup.open {
                return;
            }
            popup.open = true;
            // Highlight the current selection, else the first enabled option.
            popup.highlighted = self
                .selected
                .as_deref()
                .and_then(|id| self.model.position_of(id))
                .or_else(|| {
                    (0..self.model.len())
                        .find(|&i| self.model.option_at(i).is_some_and(|o| !o.disabled))
                });
            popup.watch = Some(self.channel.watch_scoped(
                self.surface,
                outside_press_handler(self.popup.clone(), self.signals.clone()),
            ));
        }
        tracing::trace!(target: TARGET, surface = self.surface.raw(), "opened");
        self.signals.opened.emit(());
    }

    fn close(&mut self) {
        if self.close_popup_silently() {
            self.signals.closed.emit(());
        }
    }

    /// Leave the Open state without emitting. Returns whether a transition
    /// happened. The watch guard is dropped outside the popup lock.
    fn close_popup_silently(&mut self) -> bool {
        let watch;
        {
            let mut popup = self.popup.lock();
            if !popup.open {
                return false;
            }
            popup.open = false;
            popup.highlighted = None;
            watch = popup.watch.take();
        }
        drop(watch);
        tracing::trace!(target: TARGET, surface = self.surface.raw(), "closed");
        true
    }
}

impl Drop for SelectBox {
    fn drop(&mut self) {
        // Release the outside-press watch synchronously so no callback can
        // fire after the control is gone. Deliberately no `closed` emission.
        let watch = self.popup.lock().watch.take();
        drop(watch);
    }
}

/// The watcher registered while open: any press outside the control's own
/// surface closes the list.
fn outside_press_handler(
    popup: Arc<Mutex<PopupState>>,
    signals: Arc<SelectBoxSignals>,
) -> impl Fn(&corbel_core::PointerDownEvent) + Send + Sync + 'static {
    move |_event| {
        let watch;
        {
            let mut state = popup.lock();
            if !state.open {
                return;
            }
            state.open = false;
            state.highlighted = None;
            watch = state.watch.take();
        }
        // Unwatching re-enters the channel; the dispatch loop runs handlers
        // outside its registry lock, so this is safe here.
        drop(watch);
        tracing::trace!(target: TARGET, "closed by outside press");
        signals.closed.emit(());
    }
}
