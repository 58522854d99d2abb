use thiserror::Error;

/// Raised when the payload of a disengaged [`Optional`](crate::Optional) is accessed.
///
/// This is a precondition violation on the caller's side. Check
/// [`is_some`](crate::Optional::is_some) first or use
/// [`value_or`](crate::Optional::value_or) when engagement is not guaranteed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[error("accessed the value of a disengaged optional")]
pub struct EmptyAccess;
