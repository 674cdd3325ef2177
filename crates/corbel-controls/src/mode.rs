//! Value-ownership modes for the controls.

/// Who owns a control's value.
///
/// Fixed at construction for the control's whole lifetime; there is
/// deliberately no setter, so a mid-life flip is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// The control owns and mutates its own value internally.
    #[default]
    Uncontrolled,
    /// The host owns the value. The control only requests changes through its
    /// change signal and mirrors whatever the host pushes back via the
    /// control's `sync_*` method.
    Controlled,
}
