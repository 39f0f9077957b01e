use thiserror::Error;

/// Errors raised by [`InlineFn`](crate::InlineFn) itself.
///
/// Failures of the stored callable are never wrapped: error values travel in
/// the callable's own return type and panics unwind through the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The box holds no callable, either because it was moved out of with
    /// [`take`](crate::InlineFn::take) or emptied with
    /// [`clear`](crate::InlineFn::clear).
    #[error("called an empty inline function")]
    Empty,
}
