//! Input-event vocabulary for Corbel controls.
//!
//! Corbel is headless: it never listens to a windowing system or the DOM
//! directly. The host rendering layer translates its native input events into
//! these types and feeds them to the controls. Only the keys the controls
//! actually react to are represented; anything else maps to [`Key::Unknown`].

use std::sync::atomic::{AtomicU64, Ordering};

/// Keyboard key codes the controls respond to.
///
/// This follows the web `KeyboardEvent.code` register for the navigation and
/// control keys; hosts on other platforms map their own codes onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Any key the controls do not react to.
    Unknown,
}

impl Key {
    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }

    /// Check if this key commits or toggles a control (primary activation).
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// A key press delivered to a focused control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: KeyboardModifiers,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
        }
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum PointerButton {
    /// Primary button (left mouse button, single touch).
    #[default]
    Primary,
    /// Secondary button (right mouse button).
    Secondary,
    /// Middle button.
    Middle,
}

/// Identity of a control's rendered surface.
///
/// Each control instance claims a process-unique id at construction; the host
/// tags global pointer-down events with the surface the pointer landed in so
/// the pointer channel can tell "inside" from "outside" per control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Allocate the next process-unique surface id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value, for host-side bookkeeping.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A global pointer-down event, as delivered to the pointer channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDownEvent {
    /// Which button went down.
    pub button: PointerButton,
    /// The control surface the pointer went down in, if any.
    ///
    /// `None` means the pointer landed in empty space (outside every
    /// registered surface).
    pub surface: Option<SurfaceId>,
}

impl PointerDownEvent {
    /// A primary-button press inside the given surface.
    pub fn inside(surface: SurfaceId) -> Self {
        Self {
            button: PointerButton::Primary,
            surface: Some(surface),
        }
    }

    /// A primary-button press outside every registered surface.
    pub fn outside() -> Self {
        Self {
            button: PointerButton::Primary,
            surface: None,
        }
    }

    /// Whether this press landed inside the given surface.
    pub fn is_within(&self, surface: SurfaceId) -> bool {
        self.surface == Some(surface)
    }
}
