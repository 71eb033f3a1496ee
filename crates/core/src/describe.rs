//! Human-readable description capability.

/// Capability for rendering a short human-readable description.
///
/// Implemented by engines, cars, and customers; callers use it wherever a
/// status line needs to be shown (demo output, logs, customer snapshots).
pub trait Describable {
    fn describe(&self) -> String;
}
