//! Logging facilities for Corbel.
//!
//! Corbel instruments itself with the `tracing` crate. Nothing in the
//! library is user-visible as an error (contract violations recover
//! silently), so the trace stream is the only diagnostic surface. To see
//! logs, install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=corbel_core::channel=trace`.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "corbel_core::signal";
    /// Pointer channel target.
    pub const CHANNEL: &str = "corbel_core::channel";
}
